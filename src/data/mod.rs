pub mod page_view;

pub use page_view::{ControlKey, LikeControl, PageView};
