use crate::data::LikeControl;
use egui::{self, Color32, RichText, Stroke};

const LIKE_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Heart button drawn from the control's current style and count
///
/// Liked controls get the filled style, everything else the outline style.
pub fn like_button(ui: &mut egui::Ui, control: &LikeControl, pending: bool) -> egui::Response {
    let (text, fill, text_color) = if control.is_liked() {
        (
            format!("♥ {}", control.count_text()),
            LIKE_RED,
            Color32::WHITE,
        )
    } else {
        (
            format!("♡ {}", control.count_text()),
            Color32::TRANSPARENT,
            LIKE_RED,
        )
    };

    let response = ui
        .horizontal(|ui| {
            let button = ui.add(
                egui::Button::new(RichText::new(text).color(text_color).size(15.0))
                    .fill(fill)
                    .stroke(Stroke::new(1.0, LIKE_RED))
                    .corner_radius(4.0)
                    .min_size(egui::vec2(72.0, 28.0)),
            );
            if pending {
                ui.add(egui::Spinner::new().size(14.0));
            }
            button
        })
        .inner;

    response.on_hover_text(if control.is_liked() { "Unlike" } else { "Like" })
}
