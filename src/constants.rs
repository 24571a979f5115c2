//! Application constants and configuration values

// === Page Markup Contract ===
pub const TOGGLE_CONTROL_CLASS: &str = "toggle-like-button";
pub const REFLECTION_ID_ATTR: &str = "data-reflection-id";
pub const LIKE_COUNT_CLASS: &str = "like-count";
pub const LIKED_CLASS: &str = "btn-danger";
pub const UNLIKED_CLASS: &str = "btn-outline-danger";

// === Endpoints ===
pub const TOGGLE_LIKE_PATH: &str = "toggle_like";
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000/";
pub const DEFAULT_PAGE_PATH: &str = "/reflections";

// === User-facing Messages ===
pub const NETWORK_ERROR_MESSAGE: &str = "A network error occurred, please try again later.";
pub const OPERATION_FAILED_PREFIX: &str = "Operation failed: ";
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

// === UI & Layout ===
pub const APP_WIDTH: f32 = 720.0;
pub const APP_HEIGHT: f32 = 640.0;
pub const TOAST_DURATION_SECS: u64 = 4;

// Frame rate settings
pub const REPAINT_INTERVAL_ACTIVE_MICROS: u64 = 33333; // 30 FPS while requests/toasts are live
pub const REPAINT_INTERVAL_IDLE_MICROS: u64 = 250000; // 4 FPS when idle
