// crates/autoline-core/src/geometry.rs
use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Per-edge pixel insets, used for both box margins and container padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeInsets {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl EdgeInsets {
    pub const ZERO: Self = Self::uniform(0);

    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    pub const fn uniform(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn horizontal(&self) -> i32 {
        self.left.saturating_add(self.right)
    }

    pub fn vertical(&self) -> i32 {
        self.top.saturating_add(self.bottom)
    }

    /// Negative insets are clamped to zero.
    pub fn clamped(self) -> Self {
        Self::new(
            self.left.max(0),
            self.top.max(0),
            self.right.max(0),
            self.bottom.max(0),
        )
    }
}

/// An absolute rectangle in container-local pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    pub fn from_origin_size(origin: IVec2, size: IVec2) -> Self {
        Self::new(
            origin.x,
            origin.y,
            origin.x.saturating_add(size.x),
            origin.y.saturating_add(size.y),
        )
    }

    pub fn width(&self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_from_origin_size() {
        let rect = Rect::from_origin_size(IVec2::new(10, 20), IVec2::new(30, 40));
        assert_eq!(rect, Rect::new(10, 20, 40, 60));
        assert_eq!(rect.width(), 30);
        assert_eq!(rect.height(), 40);
    }

    #[test]
    fn test_edge_insets() {
        let insets = EdgeInsets::new(1, 2, 3, 4);
        assert_eq!(insets.horizontal(), 4);
        assert_eq!(insets.vertical(), 6);
        assert_eq!(EdgeInsets::new(-1, 2, -3, 4).clamped(), EdgeInsets::new(0, 2, 0, 4));
    }

    #[test]
    fn test_partial_insets_deserialize() {
        let insets: EdgeInsets = serde_json::from_str(r#"{"left": 5, "bottom": 2}"#).unwrap();
        assert_eq!(insets, EdgeInsets::new(5, 0, 0, 2));
    }
}
