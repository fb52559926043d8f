use super::point::{ParsePointError, Point};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Ordered vertex sequence in traversal order.
///
/// Invariants
/// - The buffer is never exposed mutably; `with_points` replaces it wholesale
///   and returns a new value.
/// - Closure (`first == last`) is not enforced; see `is_closed`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    #[inline]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Replace the vertex sequence, consuming the old value.
    #[inline]
    pub fn with_points(self, points: Vec<Point>) -> Self {
        Self { points }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// At least two vertices and the last repeats the first.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(a), Some(b)) => self.points.len() >= 2 && a == b,
            _ => false,
        }
    }

    /// Copy with the first vertex appended unless already closed. Empty stays empty.
    pub fn closed(&self) -> Self {
        let mut points = self.points.clone();
        if let Some(&first) = points.first() {
            if !self.is_closed() {
                points.push(first);
            }
        }
        Self { points }
    }

    /// Consecutive vertex pairs `(points[k], points[k + 1])`.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    /// Distinct vertices in first-occurrence order.
    pub fn distinct_points(&self) -> Vec<Point> {
        let mut seen = HashSet::with_capacity(self.points.len());
        self.points
            .iter()
            .copied()
            .filter(|p| seen.insert(*p))
            .collect()
    }
}

impl From<Vec<Point>> for Polygon {
    #[inline]
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (k, p) in self.points.iter().enumerate() {
            if k > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{p}")?;
        }
        f.write_str("]")
    }
}

/// Parses `x,y` or `(x, y)` tokens separated by whitespace, `;` or (after a
/// parenthesised point) `,`. An outer `[...]` is accepted, so `Display` output
/// parses back.
impl FromStr for Polygon {
    type Err = ParsePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s
            .strip_prefix('[')
            .and_then(|r| r.strip_suffix(']'))
            .unwrap_or(s);
        tokens(s).map(str::parse::<Point>).collect()
    }
}

fn is_separator(c: char) -> bool {
    c == ';' || c.is_whitespace()
}

/// Parenthesised groups whole, bare tokens up to the next separator or `(`.
fn tokens(s: &str) -> impl Iterator<Item = &str> {
    let mut rest = s;
    std::iter::from_fn(move || {
        rest = rest.trim_start_matches(|c: char| c == ',' || is_separator(c));
        if rest.is_empty() {
            return None;
        }
        let end = if rest.starts_with('(') {
            rest.find(')').map_or(rest.len(), |k| k + 1)
        } else {
            rest.find(|c: char| c == '(' || is_separator(c))
                .unwrap_or(rest.len())
        };
        let (tok, tail) = rest.split_at(end);
        rest = tail;
        Some(tok)
    })
}
