// crates/autoline-core/src/lib.rs
pub mod boxes;
pub mod dimension;
pub mod geometry;
pub mod properties;
pub mod scene;

pub use boxes::*;
pub use dimension::*;
pub use geometry::*;
pub use properties::*;
pub use scene::*;

#[derive(Debug, thiserror::Error)]
pub enum AutolineError {
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    #[error("Invalid value for property '{name}': expected {expected}")]
    InvalidProperty { name: String, expected: &'static str },

    #[error("Invalid scene: {0}")]
    InvalidScene(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AutolineError>;
