// crates/autoline-core/src/dimension.rs
use crate::{AutolineError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A requested box dimension along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "DimensionRepr", into = "DimensionRepr")]
pub enum Dimension {
    /// Fixed pixel value. Only positive values constrain the measurement;
    /// zero and negative values behave like `Natural`.
    Exact(i32),
    /// Fill whatever the container offers along this axis
    Fill,
    /// Size to content
    #[default]
    Natural,
}

impl Dimension {
    /// The requested pixel value, if this is a usable exact request.
    pub fn exact_px(&self) -> Option<i32> {
        match self {
            Dimension::Exact(px) if *px > 0 => Some(*px),
            _ => None,
        }
    }

    pub fn is_fill(&self) -> bool {
        matches!(self, Dimension::Fill)
    }

    /// Parse a value such as "100", "100px", "fill" or "natural".
    pub fn from_string(value: &str) -> Result<Self> {
        let value = value.trim();

        match value {
            "fill" | "match_parent" => return Ok(Dimension::Fill),
            "natural" | "wrap_content" | "auto" => return Ok(Dimension::Natural),
            _ => {}
        }

        let number = value.strip_suffix("px").unwrap_or(value).trim();
        number
            .parse::<i32>()
            .map(Dimension::Exact)
            .map_err(|_| AutolineError::InvalidDimension(value.to_string()))
    }
}

impl FromStr for Dimension {
    type Err = AutolineError;

    fn from_str(s: &str) -> Result<Self> {
        Dimension::from_string(s)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Exact(px) => write!(f, "{}px", px),
            Dimension::Fill => f.write_str("fill"),
            Dimension::Natural => f.write_str("natural"),
        }
    }
}

/// Scene files may write a dimension either as a bare number or as a string.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum DimensionRepr {
    Pixels(i32),
    Keyword(String),
}

impl TryFrom<DimensionRepr> for Dimension {
    type Error = AutolineError;

    fn try_from(repr: DimensionRepr) -> Result<Self> {
        match repr {
            DimensionRepr::Pixels(px) => Ok(Dimension::Exact(px)),
            DimensionRepr::Keyword(s) => Dimension::from_string(&s),
        }
    }
}

impl From<Dimension> for DimensionRepr {
    fn from(dimension: Dimension) -> Self {
        match dimension {
            Dimension::Exact(px) => DimensionRepr::Pixels(px),
            other => DimensionRepr::Keyword(other.to_string()),
        }
    }
}
