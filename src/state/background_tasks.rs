use crate::utils::async_helper::AsyncTaskResult;
use crate::utils::LikeError;
use std::sync::mpsc::Receiver;

/// Page fetch result, tagged with whether the user asked for it
pub type PageLoad = (PageRequest, AsyncTaskResult<String, LikeError>);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    Startup,
    Reload,
}

#[derive(Default)]
pub struct BackgroundTasks {
    // Reflections page HTML
    pub page_rx: Option<Receiver<PageLoad>>,
}

impl BackgroundTasks {
    /// Check if any background task is active
    pub fn has_active_tasks(&self) -> bool {
        self.page_rx.is_some()
    }

    /// Clear all task receivers (for cleanup)
    pub fn clear_all(&mut self) {
        self.page_rx = None;
    }
}
