use crate::constants::TOAST_DURATION_SECS;
use egui::{self, Color32};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub created: Instant,
    pub duration: Duration,
}

impl Toast {
    fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.created) >= self.duration
    }
}

/// User-facing alerts, stacked in the bottom-right corner
pub struct ToastManager {
    pub toasts: Vec<Toast>,
    duration: Duration,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::with_duration(Duration::from_secs(TOAST_DURATION_SECS))
    }

    pub fn with_duration(duration: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            duration,
        }
    }

    pub fn show_success(&mut self, message: &str) {
        self.push(ToastKind::Success, message);
    }

    pub fn show_error(&mut self, message: &str) {
        self.push(ToastKind::Error, message);
    }

    fn push(&mut self, kind: ToastKind, message: &str) {
        self.toasts.push(Toast {
            kind,
            message: message.to_string(),
            created: Instant::now(),
            duration: self.duration,
        });
    }

    /// Drop toasts whose time is up
    pub fn prune(&mut self, now: Instant) {
        self.toasts.retain(|t| !t.is_expired(now));
    }

    pub fn render(&mut self, ctx: &egui::Context) {
        self.prune(Instant::now());
        if self.toasts.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("toasts"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for toast in &self.toasts {
                    let (fill, icon) = match toast.kind {
                        ToastKind::Success => (Color32::from_rgb(46, 125, 50), "✔"),
                        ToastKind::Error => (Color32::from_rgb(183, 28, 28), "⚠"),
                    };

                    egui::Frame::new()
                        .fill(fill)
                        .corner_radius(6.0)
                        .inner_margin(egui::Margin::symmetric(12, 8))
                        .show(ui, |ui| {
                            ui.label(
                                egui::RichText::new(format!("{} {}", icon, toast.message))
                                    .color(Color32::WHITE),
                            );
                        });
                    ui.add_space(6.0);
                }
            });
    }
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new()
    }
}
