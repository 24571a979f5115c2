// Data models for the reflections page and the toggle endpoint

pub mod reflection;
pub mod toggle;

// Re-export commonly used types
pub use reflection::ReflectionId;
pub use toggle::{ToggleResponse, ToggleState};
