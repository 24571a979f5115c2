pub mod like_button;
pub mod toast;

pub use toast::ToastManager;
