use crate::config::AppConfig;
use crate::constants::{REPAINT_INTERVAL_ACTIVE_MICROS, REPAINT_INTERVAL_IDLE_MICROS};
use crate::data::{ControlKey, PageView};
use crate::services::LikeToggleHandler;
use crate::state::background_tasks::PageRequest;
use crate::state::{BackgroundTasks, ContentState, UIState};
use crate::utils::async_helper::{spawn_and_send, AsyncTask};
use crate::utils::{HttpSettings, LikeError};
use eframe::egui;
use std::sync::mpsc::{channel, TryRecvError};
use std::time::Duration;

pub struct LikesApp {
    // Page content and configuration
    pub content: ContentState,
    // Toasts
    pub ui: UIState,
    // Background page loads
    pub tasks: BackgroundTasks,
    // Like controls of the current page
    pub likes: LikeToggleHandler,

    settings: HttpSettings,
}

impl LikesApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let mut app = Self::with_config(config);
        app.fetch_page(PageRequest::Startup);
        app
    }

    fn with_config(config: AppConfig) -> Self {
        let settings = HttpSettings::new(config.request_timeout);
        let likes = LikeToggleHandler::new(settings.clone(), config.base_url.clone());

        Self {
            content: ContentState::new(config),
            ui: UIState::default(),
            tasks: BackgroundTasks::default(),
            likes,
            settings,
        }
    }

    /// Load (or reload) the reflections page in the background
    pub fn fetch_page(&mut self, request: PageRequest) {
        if self.tasks.page_rx.is_some() {
            log::debug!("[Page] Load already in progress");
            return;
        }

        let settings = self.settings.clone();
        let base_url = self.content.config.base_url.clone();
        let path = self.content.config.page_path.clone();
        log::info!("[Page] Loading {} from {}", path, base_url);

        let (tx, rx) = channel();
        spawn_and_send(
            request,
            move || -> AsyncTask<String, LikeError> {
                Box::pin(async move {
                    crate::api::likes::fetch_page(&settings, &base_url, &path).await
                })
            },
            tx,
        );

        self.tasks.page_rx = Some(rx);
        self.content.page_loading = true;
    }

    /// Check for a finished page load; a new page gets its controls bound
    pub fn check_page_load(&mut self) {
        let Some(rx) = &self.tasks.page_rx else {
            return;
        };

        let (request, result) = match rx.try_recv() {
            Ok(done) => done,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => {
                log::error!("[Page] Page loader exited without a result");
                self.tasks.page_rx = None;
                self.content.fail_page("Page loader stopped unexpectedly".to_string());
                return;
            }
        };
        self.tasks.page_rx = None;

        match result {
            Ok(html) => {
                let page = PageView::parse(&html);
                self.likes.init(&page);
                self.content.replace_page(page);
                if request == PageRequest::Reload {
                    self.ui.toast_manager.show_success(&format!(
                        "Loaded {} reflection(s)",
                        self.likes.bound_count()
                    ));
                }
            }
            Err(e) => {
                log::error!("[Page] Failed to load reflections page: {}", e);
                self.content.fail_page(e.to_string());
                self.ui.toast_manager.show_error(&e.user_message());
            }
        }
    }

    /// Click handler for a like button
    pub fn activate_like(&mut self, key: ControlKey) {
        let activation = self.likes.activate(&self.content.page, key);
        log::debug!(
            "[Likes] Click on {:?}: dispatched={} default_prevented={}",
            key,
            activation.dispatched,
            activation.default_prevented
        );
    }

    /// Apply finished toggle requests to the page
    pub fn check_like_updates(&mut self) {
        self.likes
            .poll(&mut self.content.page, &mut self.ui.toast_manager);
    }

    fn is_busy(&self) -> bool {
        self.tasks.has_active_tasks()
            || self.likes.has_in_flight()
            || !self.ui.toast_manager.toasts.is_empty()
    }
}

impl eframe::App for LikesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll background work every frame; faster while something is pending
        let repaint_interval = if self.is_busy() {
            Duration::from_micros(REPAINT_INTERVAL_ACTIVE_MICROS)
        } else {
            Duration::from_micros(REPAINT_INTERVAL_IDLE_MICROS)
        };
        ctx.request_repaint_after(repaint_interval);

        if ctx.input(|i| i.viewport().close_requested()) {
            log::info!("[Main] Close requested, dropping pending page loads");
            self.tasks.clear_all();
        }

        self.check_page_load();
        self.check_like_updates();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            crate::screens::reflections::render_header(self, ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::screens::reflections::render_reflections_view(self, ui);
        });

        self.ui.toast_manager.render(ctx);
    }
}
