use anyhow::{bail, Context, Result};
use ringfix::{Point, Polygon};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Accepted JSON layouts for a vertex list.
#[derive(Deserialize)]
#[serde(untagged)]
enum RingDoc {
    /// `{"points": [{"x": 0, "y": 0}, ...]}`
    Object(Polygon),
    /// `[[0, 0], [3, 0], ...]`
    Pairs(Vec<[i32; 2]>),
    /// `[{"x": 0, "y": 0}, ...]`
    Points(Vec<Point>),
}

impl From<RingDoc> for Polygon {
    fn from(doc: RingDoc) -> Self {
        match doc {
            RingDoc::Object(p) => p,
            RingDoc::Pairs(pairs) => pairs.into_iter().map(|[x, y]| Point::new(x, y)).collect(),
            RingDoc::Points(points) => Polygon::new(points),
        }
    }
}

pub fn parse_json(bytes: &[u8]) -> Result<Polygon> {
    let doc: RingDoc = serde_json::from_slice(bytes)
        .context("expected {\"points\": [...]}, [[x, y], ...] or [{\"x\": .., \"y\": ..}, ...]")?;
    Ok(doc.into())
}

/// Polygon from inline `--points` text or a JSON `--input` file.
pub fn load(points: Option<&str>, input: Option<&Path>) -> Result<Polygon> {
    match (points, input) {
        (Some(text), None) => text
            .parse::<Polygon>()
            .with_context(|| format!("parsing --points `{text}`")),
        (None, Some(path)) => {
            let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            parse_json(&bytes).with_context(|| format!("parsing {}", path.display()))
        }
        (Some(_), Some(_)) => bail!("pass either --points or --input, not both"),
        (None, None) => bail!("no polygon given; pass --points or --input"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn square() -> Polygon {
        "0,0 3,0 3,4 0,4 0,0".parse().unwrap()
    }

    #[test]
    fn json_layouts() {
        let obj = br#"{"points": [{"x":0,"y":0},{"x":3,"y":0},{"x":3,"y":4},{"x":0,"y":4},{"x":0,"y":0}]}"#;
        let pairs = b"[[0,0],[3,0],[3,4],[0,4],[0,0]]";
        let list = br#"[{"x":0,"y":0},{"x":3,"y":0},{"x":3,"y":4},{"x":0,"y":4},{"x":0,"y":0}]"#;
        assert_eq!(parse_json(obj).unwrap(), square());
        assert_eq!(parse_json(pairs).unwrap(), square());
        assert_eq!(parse_json(list).unwrap(), square());
        assert!(parse_json(b"{\"vertices\": []}").is_err());
    }

    #[test]
    fn load_from_file_and_inline() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ring.json");
        fs::write(&path, "[[0,0],[3,0],[3,4],[0,4],[0,0]]").unwrap();
        assert_eq!(load(None, Some(&path)).unwrap(), square());
        assert_eq!(load(Some("0,0;3,0;3,4;0,4;0,0"), None).unwrap(), square());
        assert!(load(None, None).is_err());
        assert!(load(Some("0,0"), Some(&path)).is_err());
        assert!(load(None, Some(&dir.path().join("missing.json"))).is_err());
    }
}
