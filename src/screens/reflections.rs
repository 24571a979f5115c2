use crate::app::LikesApp;
use crate::state::background_tasks::PageRequest;
use crate::ui_components::like_button::like_button;
use eframe::egui::{self, Color32, RichText};

/// Title bar with the server address and a reload button
pub fn render_header(app: &mut LikesApp, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.heading("Reflections");
        ui.label(RichText::new(format!("({})", app.content.page.len())).color(Color32::GRAY));
        ui.label(
            RichText::new(app.content.config.base_url.as_str())
                .size(12.0)
                .color(Color32::GRAY),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let reload = ui.add_enabled(!app.content.page_loading, egui::Button::new("⟳ Reload"));
            if reload.clicked() {
                app.fetch_page(PageRequest::Reload);
            }

            if let Some(loaded_at) = app.content.page_loaded_at {
                ui.label(
                    RichText::new(format!("loaded {}s ago", loaded_at.elapsed().as_secs()))
                        .size(12.0)
                        .color(Color32::DARK_GRAY),
                );
            }
        });
    });
}

/// List of reflections with their like buttons
pub fn render_reflections_view(app: &mut LikesApp, ui: &mut egui::Ui) {
    if app.content.page_loading && app.content.page.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(120.0);
            ui.spinner();
            ui.label(RichText::new("Loading reflections...").color(Color32::GRAY));
        });
        return;
    }

    if let Some(error) = &app.content.page_error {
        if app.content.page.is_empty() {
            render_error_state(ui, error);
            return;
        }
    }

    if app.content.page.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(120.0);
            ui.label(RichText::new("No reflections yet").size(18.0).color(Color32::GRAY));
        });
        return;
    }

    // Collect the click first; activation needs the app mutably
    let mut clicked = None;

    egui::ScrollArea::vertical().show(ui, |ui| {
        for control in app.content.page.controls() {
            ui.horizontal(|ui| {
                let title = if control.label.is_empty() {
                    format!("Reflection #{}", control.reflection_id)
                } else {
                    format!("Reflection #{} - {}", control.reflection_id, control.label)
                };
                ui.label(RichText::new(title).size(15.0));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let pending = app.likes.in_flight(control.key) > 0;
                    if like_button(ui, control, pending).clicked() {
                        clicked = Some(control.key);
                    }
                });
            });
            ui.separator();
        }
    });

    if let Some(key) = clicked {
        app.activate_like(key);
    }
}

fn render_error_state(ui: &mut egui::Ui, error_msg: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(100.0);
        ui.label(
            RichText::new("Could not load reflections")
                .size(20.0)
                .color(Color32::from_rgb(255, 100, 100)),
        );
        ui.add_space(10.0);
        ui.label(
            RichText::new(error_msg)
                .size(14.0)
                .color(Color32::from_rgb(180, 180, 180)),
        );
        ui.add_space(10.0);
        ui.label(
            RichText::new("Use Reload to try again")
                .size(13.0)
                .color(Color32::from_rgb(120, 120, 120)),
        );
    });
}
