//! Domain entity describing the box shape being designed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The shape of a gift box. Exactly one shape is active per form snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    #[default]
    Rectangular,
    Cube,
    #[serde(alias = "tri_prism")]
    TriangularPrism,
    #[serde(alias = "quad_prism")]
    QuadrangularPrism,
}

/// Error returned when a shape identifier is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown shape: {0}")]
pub struct ParseShapeError(pub String);

impl ShapeKind {
    /// All shapes in catalog order.
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Rectangular,
        ShapeKind::Cube,
        ShapeKind::TriangularPrism,
        ShapeKind::QuadrangularPrism,
    ];

    /// Stable wire identifier, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Rectangular => "rectangular",
            ShapeKind::Cube => "cube",
            ShapeKind::TriangularPrism => "triangular_prism",
            ShapeKind::QuadrangularPrism => "quadrangular_prism",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = ParseShapeError;

    /// Parses a shape identifier, ignoring ASCII case and accepting the
    /// short prism aliases (`tri_prism`, `quad_prism`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rectangular" => Ok(ShapeKind::Rectangular),
            "cube" => Ok(ShapeKind::Cube),
            "triangular_prism" | "tri_prism" => Ok(ShapeKind::TriangularPrism),
            "quadrangular_prism" | "quad_prism" => Ok(ShapeKind::QuadrangularPrism),
            _ => Err(ParseShapeError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_ids() {
        for shape in ShapeKind::ALL {
            assert_eq!(shape.as_str().parse::<ShapeKind>(), Ok(shape));
        }
    }

    #[test]
    fn test_parse_is_case_insensitive_and_accepts_aliases() {
        assert_eq!("CUBE".parse::<ShapeKind>(), Ok(ShapeKind::Cube));
        assert_eq!("TRI_PRISM".parse::<ShapeKind>(), Ok(ShapeKind::TriangularPrism));
        assert_eq!(
            " quad_prism ".parse::<ShapeKind>(),
            Ok(ShapeKind::QuadrangularPrism)
        );
    }

    #[test]
    fn test_parse_unknown_shape() {
        let err = "pyramid".parse::<ShapeKind>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown shape: pyramid");
    }

    #[test]
    fn test_serde_uses_snake_case_ids() {
        let json = serde_json::to_string(&ShapeKind::TriangularPrism).unwrap();
        assert_eq!(json, "\"triangular_prism\"");

        let shape: ShapeKind = serde_json::from_str("\"quad_prism\"").unwrap();
        assert_eq!(shape, ShapeKind::QuadrangularPrism);
    }
}
