// crates/autoline-core/src/boxes.rs
use crate::{Dimension, EdgeInsets};
use glam::IVec2;
use serde::{Deserialize, Serialize};

/// A box to be laid out by a flow container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxSpec {
    /// Caller-chosen label, only used for diagnostics and output.
    pub id: String,
    #[serde(rename = "width")]
    pub requested_width: Dimension,
    #[serde(rename = "height")]
    pub requested_height: Dimension,
    pub margin: EdgeInsets,
    /// Intrinsic content size, consulted by measurers that size to content.
    pub content: IVec2,
}

impl BoxSpec {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// A box with an exact requested size.
    pub fn exact(id: impl Into<String>, width: i32, height: i32) -> Self {
        Self::new(id)
            .with_width(Dimension::Exact(width))
            .with_height(Dimension::Exact(height))
    }

    pub fn with_width(mut self, width: Dimension) -> Self {
        self.requested_width = width;
        self
    }

    pub fn with_height(mut self, height: Dimension) -> Self {
        self.requested_height = height;
        self
    }

    pub fn with_margin(mut self, margin: EdgeInsets) -> Self {
        self.margin = margin.clamped();
        self
    }

    pub fn with_content(mut self, width: i32, height: i32) -> Self {
        self.content = IVec2::new(width, height);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_from_json() {
        let spec: BoxSpec = serde_json::from_str(
            r#"{"id": "chip", "width": "fill", "margin": {"left": 4, "right": 4}, "content": [30, 12]}"#,
        )
        .unwrap();

        assert_eq!(spec.id, "chip");
        assert_eq!(spec.requested_width, Dimension::Fill);
        assert_eq!(spec.requested_height, Dimension::Natural);
        assert_eq!(spec.margin, EdgeInsets::new(4, 0, 4, 0));
        assert_eq!(spec.content, IVec2::new(30, 12));
    }

    #[test]
    fn test_builder_clamps_margins() {
        let spec = BoxSpec::exact("a", 10, 10).with_margin(EdgeInsets::new(-3, 1, 2, -1));
        assert_eq!(spec.margin, EdgeInsets::new(0, 1, 2, 0));
    }
}
