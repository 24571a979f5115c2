pub mod async_helper;
pub mod error_handling;
pub mod errors;
pub mod http;

#[cfg(test)]
pub mod test_server;

// Re-export commonly used types
pub use errors::{ErrorKind, LikeError};
pub use http::HttpSettings;
