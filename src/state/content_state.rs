use crate::config::AppConfig;
use crate::data::PageView;
use std::time::Instant;

pub struct ContentState {
    pub config: AppConfig,

    // Reflections page
    pub page: PageView,
    pub page_loading: bool,
    pub page_error: Option<String>,
    pub page_loaded_at: Option<Instant>,
}

impl ContentState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            page: PageView::default(),
            page_loading: false,
            page_error: None,
            page_loaded_at: None,
        }
    }

    /// Swap in a freshly parsed page
    pub fn replace_page(&mut self, page: PageView) {
        self.page = page;
        self.page_error = None;
        self.page_loading = false;
        self.page_loaded_at = Some(Instant::now());
    }

    pub fn fail_page(&mut self, message: String) {
        self.page_error = Some(message);
        self.page_loading = false;
    }
}
