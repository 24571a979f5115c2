/// Services module - business logic layer
///
/// Services contain reusable logic called from the UI layer, keeping it thin.

pub mod social;

// Re-export commonly used types
pub use social::LikeToggleHandler;
