use crate::ui_components::toast::ToastManager;

#[derive(Default)]
pub struct UIState {
    // Toast Notifications
    pub toast_manager: ToastManager,
}
