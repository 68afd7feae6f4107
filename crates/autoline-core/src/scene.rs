// crates/autoline-core/src/scene.rs
use crate::{BoxSpec, PropertyValue, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// A flow container description: its width, its style attributes and its
/// children in paint order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Scene {
    /// Full container width, padding included.
    pub width: i32,
    pub attributes: HashMap<String, PropertyValue>,
    pub boxes: Vec<BoxSpec>,
}

impl Scene {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let mut scene: Scene = serde_json::from_str(json)?;
        for spec in &mut scene.boxes {
            spec.margin = spec.margin.clamped();
        }
        Ok(scene)
    }
}

pub fn load_scene_file(path: impl AsRef<Path>) -> Result<Scene> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    let scene = Scene::from_json_str(&json)?;

    debug!(
        "Loaded scene {}: width={}, {} attributes, {} boxes",
        path.display(),
        scene.width,
        scene.attributes.len(),
        scene.boxes.len()
    );
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AutolineError, Dimension, EdgeInsets};

    #[test]
    fn test_scene_from_json() {
        let scene = Scene::from_json_str(
            r#"{
                "width": 320,
                "attributes": {"row_height": 40, "center_vertical_in_row": false},
                "boxes": [
                    {"id": "a", "width": 100, "margin": {"left": -4, "top": 2}},
                    {"id": "b", "content": [20, 10]}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(scene.width, 320);
        assert_eq!(scene.attributes.get("row_height"), Some(&PropertyValue::Int(40)));
        assert_eq!(scene.boxes.len(), 2);
        assert_eq!(scene.boxes[0].requested_width, Dimension::Exact(100));
        assert_eq!(scene.boxes[0].margin, EdgeInsets::new(0, 2, 0, 0));
        assert_eq!(scene.boxes[1].requested_width, Dimension::Natural);
    }

    #[test]
    fn test_bad_dimension_is_scene_error() {
        let err = Scene::from_json_str(r#"{"boxes": [{"width": "huge"}]}"#).unwrap_err();
        assert!(matches!(err, AutolineError::InvalidScene(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_scene_file("/nonexistent/autoline/scene.json").unwrap_err();
        assert!(matches!(err, AutolineError::Io(_)));
    }
}
