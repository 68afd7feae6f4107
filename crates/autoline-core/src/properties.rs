// crates/autoline-core/src/properties.rs
use serde::{Deserialize, Serialize};

/// A loosely typed attribute value, as supplied by a host's style attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Int(i32),
    Float(f32),
    String(String),
}

impl PropertyValue {
    /// Whole pixels from an int, a float (rounded) or a "12px" string.
    pub fn as_pixels(&self) -> Option<i32> {
        match self {
            PropertyValue::Int(i) => Some(*i),
            PropertyValue::Float(f) => Some(f.round() as i32),
            PropertyValue::String(s) => {
                let s = s.trim();
                s.strip_suffix("px").unwrap_or(s).trim().parse().ok()
            }
            PropertyValue::Bool(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(b) => Some(*b),
            PropertyValue::String(s) => match s.as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_pixels() {
        assert_eq!(PropertyValue::Int(12).as_pixels(), Some(12));
        assert_eq!(PropertyValue::Float(11.6).as_pixels(), Some(12));
        assert_eq!(PropertyValue::String("40px".into()).as_pixels(), Some(40));
        assert_eq!(PropertyValue::String("tall".into()).as_pixels(), None);
        assert_eq!(PropertyValue::Bool(true).as_pixels(), None);
    }

    #[test]
    fn test_untagged_deserialize() {
        let values: Vec<PropertyValue> = serde_json::from_str(r#"[true, 3, 2.5, "x"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                PropertyValue::Bool(true),
                PropertyValue::Int(3),
                PropertyValue::Float(2.5),
                PropertyValue::String("x".into()),
            ]
        );
    }
}
