use nalgebra::Vector2;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Lattice point with structural equality.
///
/// Fields are private: a `Point` never changes after construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn x(self) -> i32 {
        self.x
    }

    #[inline]
    pub const fn y(self) -> i32 {
        self.y
    }

    /// Position vector, widened to `i64`.
    #[inline]
    pub fn to_vector(self) -> Vector2<i64> {
        Vector2::new(i64::from(self.x), i64::from(self.y))
    }

    /// Difference `other - self` as a widened vector (cannot overflow for `i32` inputs).
    #[inline]
    pub fn vector_to(self, other: Point) -> Vector2<i64> {
        other.to_vector() - self.to_vector()
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Failure to parse a point from `"x,y"` text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParsePointError {
    /// No `,` between the coordinates.
    MissingSeparator(String),
    /// A coordinate is not an `i32`.
    Coordinate { token: String, source: ParseIntError },
}

impl fmt::Display for ParsePointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator(s) => write!(f, "expected `x,y`, got `{s}`"),
            Self::Coordinate { token, source } => {
                write!(f, "invalid coordinate `{token}`: {source}")
            }
        }
    }
}

impl std::error::Error for ParsePointError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MissingSeparator(_) => None,
            Self::Coordinate { source, .. } => Some(source),
        }
    }
}

/// Parses `x,y`; surrounding whitespace and one pair of parentheses are accepted.
impl FromStr for Point {
    type Err = ParsePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let t = t
            .strip_prefix('(')
            .and_then(|r| r.strip_suffix(')'))
            .unwrap_or(t);
        let (xs, ys) = t
            .split_once(',')
            .ok_or_else(|| ParsePointError::MissingSeparator(s.to_string()))?;
        let coord = |tok: &str| {
            let tok = tok.trim();
            tok.parse::<i32>()
                .map_err(|source| ParsePointError::Coordinate {
                    token: tok.to_string(),
                    source,
                })
        };
        Ok(Self::new(coord(xs)?, coord(ys)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_structural() {
        assert_eq!(Point::new(3, -4), Point::new(3, -4));
        assert_ne!(Point::new(3, -4), Point::new(-4, 3));
        assert_eq!(Point::from((7, 8)), Point::new(7, 8));
    }

    #[test]
    fn vector_to_widens_extremes() {
        let a = Point::new(i32::MIN, i32::MAX);
        let b = Point::new(i32::MAX, i32::MIN);
        let v = a.vector_to(b);
        assert_eq!(v.x, i64::from(i32::MAX) - i64::from(i32::MIN));
        assert_eq!(v.y, i64::from(i32::MIN) - i64::from(i32::MAX));
    }

    #[test]
    fn parse_and_display() {
        assert_eq!("3,4".parse::<Point>().unwrap(), Point::new(3, 4));
        assert_eq!(" ( -1 , 2 ) ".parse::<Point>().unwrap(), Point::new(-1, 2));
        assert_eq!(Point::new(-1, 2).to_string(), "(-1, 2)");
        assert!(matches!(
            "34".parse::<Point>(),
            Err(ParsePointError::MissingSeparator(_))
        ));
        assert!(matches!(
            "3,x".parse::<Point>(),
            Err(ParsePointError::Coordinate { .. })
        ));
    }
}
