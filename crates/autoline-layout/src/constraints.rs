// crates/autoline-layout/src/constraints.rs

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureMode {
    /// The box must take exactly the given size
    Exact,
    /// The box may take any size up to the given one
    AtMost,
    /// No constraint; the size value is meaningless
    Unspecified,
}

/// A single-axis constraint handed to a measurer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasureSpec {
    pub mode: MeasureMode,
    pub size: i32,
}

impl MeasureSpec {
    pub fn exact(size: i32) -> Self {
        Self { mode: MeasureMode::Exact, size: size.max(0) }
    }

    pub fn at_most(size: i32) -> Self {
        Self { mode: MeasureMode::AtMost, size: size.max(0) }
    }

    pub fn unspecified() -> Self {
        Self { mode: MeasureMode::Unspecified, size: 0 }
    }

    /// Resolve a desired content size against this constraint.
    pub fn constrain(&self, desired: i32) -> i32 {
        match self.mode {
            MeasureMode::Exact => self.size,
            MeasureMode::AtMost => desired.clamp(0, self.size),
            MeasureMode::Unspecified => desired.max(0),
        }
    }
}

impl fmt::Display for MeasureSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            MeasureMode::Exact => write!(f, "EXACT {}", self.size),
            MeasureMode::AtMost => write!(f, "AT_MOST {}", self.size),
            MeasureMode::Unspecified => f.write_str("UNSPECIFIED"),
        }
    }
}
