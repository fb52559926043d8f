use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use ringfix::{check, intersecting_edges, repair_report, Collinear, HullCfg, Point, Polygon};
use serde::Serialize;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;

#[derive(Parser)]
#[command(name = "ringfix")]
#[command(about = "Validate integer polygon rings and repair them by convex hull")]
struct Cmd {
    /// Optional run tag; propagated to outputs and logs
    #[arg(long, global = true)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Args)]
struct Source {
    /// Vertices as `x,y` or `(x, y)` tokens separated by spaces or `;`
    #[arg(long, allow_hyphen_values = true)]
    points: Option<String>,
    /// JSON file with the vertices
    #[arg(long)]
    input: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CollinearArg {
    Farthest,
    Keep,
}

impl From<CollinearArg> for Collinear {
    fn from(arg: CollinearArg) -> Self {
        match arg {
            CollinearArg::Farthest => Collinear::Farthest,
            CollinearArg::Keep => Collinear::Keep,
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Check and, if needed, repair the built-in five-vertex sample
    Demo,
    /// Report whether a ring is valid, with every intersecting edge pair
    Check {
        #[command(flatten)]
        source: Source,
    },
    /// Repair a ring; JSON goes to stdout, or to `--out` with a provenance sidecar
    Repair {
        #[command(flatten)]
        source: Source,
        #[arg(long)]
        out: Option<PathBuf>,
        /// `keep` also returns input points lying on hull edges
        #[arg(long, value_enum, default_value_t = CollinearArg::Farthest)]
        collinear: CollinearArg,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Serialize)]
struct CheckOut {
    valid: bool,
    reason: String,
    intersections: Vec<(usize, usize)>,
}

#[derive(Serialize)]
struct RepairOut {
    valid: bool,
    repaired: bool,
    reason: String,
    points: Vec<Point>,
    dropped: Vec<Point>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Demo => demo(),
        Action::Check { source } => run_check(&source, cmd.tag),
        Action::Repair {
            source,
            out,
            collinear,
        } => run_repair(&source, out.as_deref(), collinear, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn sample() -> Polygon {
    [(0, 0), (3, 0), (3, 4), (0, 4), (0, 1)]
        .into_iter()
        .map(Point::from)
        .collect()
}

fn demo() -> Result<()> {
    let shape = sample();
    let validity = check(&shape);
    tracing::info!(%shape, %validity, "demo");
    if validity.is_valid() {
        println!("Is valid: true");
        return Ok(());
    }
    println!("Is valid: false ({validity})");
    let fixed = repair_report(&shape, HullCfg::default());
    println!("Repaired shape: {}", fixed.polygon);
    Ok(())
}

fn check_out(polygon: &Polygon) -> CheckOut {
    let validity = check(polygon);
    CheckOut {
        valid: validity.is_valid(),
        reason: validity.to_string(),
        intersections: intersecting_edges(polygon),
    }
}

fn run_check(source: &Source, tag: Option<String>) -> Result<()> {
    let polygon = input::load(source.points.as_deref(), source.input.as_deref())?;
    let out = check_out(&polygon);
    tracing::info!(
        vertices = polygon.len(),
        valid = out.valid,
        intersections = out.intersections.len(),
        tag = ?tag,
        "check"
    );
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn repair_out(polygon: &Polygon, cfg: HullCfg) -> RepairOut {
    let report = repair_report(polygon, cfg);
    RepairOut {
        valid: report.validity.is_valid(),
        repaired: report.repaired(),
        reason: report.validity.to_string(),
        points: report.polygon.into_points(),
        dropped: report.dropped,
    }
}

fn run_repair(
    source: &Source,
    out: Option<&Path>,
    collinear: CollinearArg,
    tag: Option<String>,
) -> Result<()> {
    let polygon = input::load(source.points.as_deref(), source.input.as_deref())?;
    let cfg = HullCfg {
        collinear: collinear.into(),
    };
    let result = repair_out(&polygon, cfg);
    tracing::info!(
        vertices = polygon.len(),
        repaired = result.repaired,
        hull = result.points.len(),
        dropped = result.dropped.len(),
        tag = ?tag,
        "repair"
    );
    if result.repaired && result.points.len() < 3 {
        tracing::warn!(
            distinct = result.points.len(),
            "fewer than 3 distinct vertices; returned unchanged"
        );
    }

    let body = serde_json::to_vec_pretty(&result)?;
    let Some(out_path) = out else {
        println!("{}", String::from_utf8_lossy(&body));
        return Ok(());
    };
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    fs::write(out_path, &body).with_context(|| format!("writing {}", out_path.display()))?;
    let payload = provenance::Payload::new(
        json!({
            "collinear": format!("{collinear:?}"),
            "vertices": polygon.len(),
            "points": source.points,
            "input": source.input,
        }),
        tag,
    );
    let sidecar = provenance::write_sidecar(out_path, &payload)?;
    tracing::info!(out = %out_path.display(), sidecar = %sidecar.display(), "wrote");
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let doc = provenance::document(&provenance::Payload::new(json!({}), tag), &[]);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_sample_is_open_and_repairs_to_rectangle() {
        let out = repair_out(&sample(), HullCfg::default());
        assert!(!out.valid);
        assert_eq!(out.reason, "ring is not closed");
        assert_eq!(
            out.points,
            vec![
                Point::new(0, 0),
                Point::new(3, 0),
                Point::new(3, 4),
                Point::new(0, 4)
            ]
        );
        assert_eq!(out.dropped, vec![Point::new(0, 1)]);
    }

    #[test]
    fn check_reports_bowtie_pair() {
        let bowtie: Polygon = "0,0 4,4 4,0 0,4 0,0".parse().unwrap();
        let out = check_out(&bowtie);
        assert!(!out.valid);
        assert_eq!(out.intersections, vec![(0, 2)]);
        let v = serde_json::to_value(&out).unwrap();
        assert_eq!(v["intersections"][0][1], 2);
    }

    #[test]
    fn repair_json_shape() {
        let square: Polygon = "0,0 3,0 3,4 0,4 0,0".parse().unwrap();
        let v = serde_json::to_value(repair_out(&square, HullCfg::default())).unwrap();
        assert_eq!(v["valid"], true);
        assert_eq!(v["repaired"], false);
        assert_eq!(v["points"][2]["x"], 3);
        assert_eq!(v["points"][2]["y"], 4);
    }

    #[test]
    fn cli_parses_repair_flags() {
        let cmd = Cmd::try_parse_from([
            "ringfix",
            "--tag",
            "t",
            "repair",
            "--points",
            "0,0 1,1",
            "--collinear",
            "keep",
        ])
        .unwrap();
        assert_eq!(cmd.tag.as_deref(), Some("t"));
        match cmd.action {
            Action::Repair {
                source, collinear, ..
            } => {
                assert_eq!(source.points.as_deref(), Some("0,0 1,1"));
                assert!(matches!(collinear, CollinearArg::Keep));
            }
            _ => panic!("expected repair"),
        }
    }
}
