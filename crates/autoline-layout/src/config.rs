// crates/autoline-layout/src/config.rs

use autoline_core::{AutolineError, EdgeInsets, PropertyValue, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Per-call configuration of a flow container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Width available to children, padding excluded. Never negative.
    pub available_width: i32,
    /// Uniform row height; `None` computes each row from its tallest box.
    pub row_height: Option<i32>,
    pub center_vertical_in_row: bool,
    pub padding: EdgeInsets,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            available_width: 0,
            row_height: None,
            center_vertical_in_row: true,
            padding: EdgeInsets::ZERO,
        }
    }
}

impl LayoutConfig {
    pub fn new(available_width: i32) -> Self {
        Self::default().with_available_width(available_width)
    }

    /// Derive the available width from a full container width, the way a
    /// host hands its own width down with the padding still included.
    pub fn for_container_width(width: i32, padding: EdgeInsets) -> Self {
        let padding = padding.clamped();
        Self::new(width - padding.horizontal()).with_padding(padding)
    }

    /// Build from style attributes. `row_height <= 0` means auto.
    pub fn from_properties(width: i32, properties: &HashMap<String, PropertyValue>) -> Result<Self> {
        let mut padding = EdgeInsets::ZERO;
        let mut row_height = None;
        let mut center_vertical_in_row = true;

        // The shorthand goes first so per-edge keys override it regardless of map order.
        if let Some(value) = properties.get("padding") {
            padding = EdgeInsets::uniform(pixels("padding", value)?);
        }

        for (name, value) in properties {
            match name.as_str() {
                "padding" => {}
                "row_height" => {
                    let px = pixels(name, value)?;
                    row_height = (px > 0).then_some(px);
                }
                "center_vertical_in_row" => {
                    center_vertical_in_row = value.as_bool().ok_or_else(|| invalid(name, "a boolean"))?;
                }
                "padding_left" => padding.left = pixels(name, value)?,
                "padding_top" => padding.top = pixels(name, value)?,
                "padding_right" => padding.right = pixels(name, value)?,
                "padding_bottom" => padding.bottom = pixels(name, value)?,
                _ => debug!("Ignoring unknown flow layout attribute '{}'", name),
            }
        }

        Ok(Self::for_container_width(width, padding)
            .with_row_height(row_height)
            .with_center_vertical_in_row(center_vertical_in_row))
    }

    pub fn with_available_width(mut self, available_width: i32) -> Self {
        self.available_width = available_width.max(0);
        self
    }

    pub fn with_row_height(mut self, row_height: Option<i32>) -> Self {
        self.row_height = row_height.filter(|height| *height > 0);
        self
    }

    pub fn with_center_vertical_in_row(mut self, center: bool) -> Self {
        self.center_vertical_in_row = center;
        self
    }

    pub fn with_padding(mut self, padding: EdgeInsets) -> Self {
        self.padding = padding.clamped();
        self
    }

    /// Width of the whole container, padding included.
    pub fn container_width(&self) -> i32 {
        self.available_width.max(0) + self.padding.horizontal()
    }
}

fn pixels(name: &str, value: &PropertyValue) -> Result<i32> {
    value.as_pixels().ok_or_else(|| invalid(name, "a pixel value"))
}

fn invalid(name: &str, expected: &'static str) -> AutolineError {
    AutolineError::InvalidProperty {
        name: name.to_string(),
        expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(entries: &[(&str, PropertyValue)]) -> HashMap<String, PropertyValue> {
        entries
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = LayoutConfig::new(300);
        assert_eq!(config.available_width, 300);
        assert_eq!(config.row_height, None);
        assert!(config.center_vertical_in_row);
        assert_eq!(config.padding, EdgeInsets::ZERO);
    }

    #[test]
    fn test_negative_available_width_clamps() {
        assert_eq!(LayoutConfig::new(-20).available_width, 0);
        let config = LayoutConfig::for_container_width(10, EdgeInsets::uniform(8));
        assert_eq!(config.available_width, 0);
        assert_eq!(config.container_width(), 16);
    }

    #[test]
    fn test_non_positive_row_height_is_auto() {
        assert_eq!(LayoutConfig::new(10).with_row_height(Some(0)).row_height, None);
        assert_eq!(LayoutConfig::new(10).with_row_height(Some(-5)).row_height, None);
        assert_eq!(LayoutConfig::new(10).with_row_height(Some(32)).row_height, Some(32));
    }

    #[test]
    fn test_from_properties() {
        let properties = props(&[
            ("row_height", PropertyValue::String("48px".into())),
            ("center_vertical_in_row", PropertyValue::Bool(false)),
            ("padding", PropertyValue::Int(4)),
            ("padding_left", PropertyValue::Int(10)),
            ("text_color", PropertyValue::String("red".into())),
        ]);

        let config = LayoutConfig::from_properties(200, &properties).unwrap();
        assert_eq!(config.row_height, Some(48));
        assert!(!config.center_vertical_in_row);
        assert_eq!(config.padding, EdgeInsets::new(10, 4, 4, 4));
        assert_eq!(config.available_width, 186);
    }

    #[test]
    fn test_from_properties_zero_row_height() {
        let properties = props(&[("row_height", PropertyValue::Int(0))]);
        let config = LayoutConfig::from_properties(100, &properties).unwrap();
        assert_eq!(config.row_height, None);
        assert!(config.center_vertical_in_row);
    }

    #[test]
    fn test_from_properties_wrong_type() {
        let properties = props(&[("center_vertical_in_row", PropertyValue::Int(1))]);
        let err = LayoutConfig::from_properties(100, &properties).unwrap_err();
        assert!(matches!(
            err,
            AutolineError::InvalidProperty { ref name, .. } if name == "center_vertical_in_row"
        ));
    }
}
