pub mod likes_app;

pub use likes_app::LikesApp;
