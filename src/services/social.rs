/// Social service - binds like controls and applies toggle results
///
/// One background request per activation; results come back over a channel and
/// are applied on the UI thread during `poll`.
use crate::data::{ControlKey, PageView};
use crate::models::ToggleState;
use crate::ui_components::ToastManager;
use crate::utils::async_helper::{spawn_and_send, AsyncTask, AsyncTaskResult};
use crate::utils::{ErrorKind, HttpSettings, LikeError};
use std::collections::{BTreeSet, HashMap};
use std::sync::mpsc::{channel, Receiver, Sender};
use url::Url;

type Completion = (ControlKey, AsyncTaskResult<ToggleState, LikeError>);

/// What happened to a single activation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activation {
    /// The control's own default action (navigation, form submit) is suppressed
    pub default_prevented: bool,
    /// A toggle request was sent
    pub dispatched: bool,
}

pub struct LikeToggleHandler {
    settings: HttpSettings,
    base_url: Url,
    generation: Option<u64>,
    bindings: BTreeSet<ControlKey>,
    in_flight: HashMap<ControlKey, usize>,
    tx: Sender<Completion>,
    rx: Receiver<Completion>,
}

impl LikeToggleHandler {
    pub fn new(settings: HttpSettings, base_url: Url) -> Self {
        let (tx, rx) = channel();
        Self {
            settings,
            base_url,
            generation: None,
            bindings: BTreeSet::new(),
            in_flight: HashMap::new(),
            tx,
            rx,
        }
    }

    /// Bind every like control of a freshly constructed page
    ///
    /// Replaces bindings from any previous page. Binding the same page twice
    /// leaves exactly one binding per control. Returns the number bound.
    pub fn init(&mut self, page: &PageView) -> usize {
        if self.generation != Some(page.generation()) {
            self.in_flight.clear();
        }
        self.generation = Some(page.generation());
        self.bindings = page.controls().iter().map(|c| c.key).collect();

        log::info!("[Likes] Bound {} like control(s)", self.bindings.len());
        self.bindings.len()
    }

    pub fn bound_count(&self) -> usize {
        self.bindings.len()
    }

    pub fn in_flight(&self, key: ControlKey) -> usize {
        self.in_flight.get(&key).copied().unwrap_or(0)
    }

    pub fn has_in_flight(&self) -> bool {
        !self.in_flight.is_empty()
    }

    /// Handle a click on a like control
    ///
    /// The default action is always suppressed. Overlapping clicks on the same
    /// control each send their own request; the last response to arrive wins.
    pub fn activate(&mut self, page: &PageView, key: ControlKey) -> Activation {
        let mut activation = Activation {
            default_prevented: true,
            dispatched: false,
        };

        if !self.bindings.contains(&key) {
            log::warn!("[Likes] Ignoring activation of unbound control {:?}", key);
            return activation;
        }

        let Some(control) = page.control(key) else {
            log::warn!("[Likes] Control {:?} is not on the current page", key);
            return activation;
        };

        let id = control.reflection_id.clone();
        let settings = self.settings.clone();
        let base_url = self.base_url.clone();

        log::info!("[Likes] Toggling like for reflection {}", id);
        spawn_and_send(
            key,
            move || -> AsyncTask<ToggleState, LikeError> {
                Box::pin(async move {
                    crate::api::likes::toggle_like(&settings, &base_url, &id).await
                })
            },
            self.tx.clone(),
        );

        *self.in_flight.entry(key).or_insert(0) += 1;
        activation.dispatched = true;
        activation
    }

    /// Apply every finished request to the page; failures become error toasts.
    /// Returns the number of results applied to the current page.
    pub fn poll(&mut self, page: &mut PageView, toasts: &mut ToastManager) -> usize {
        let mut applied = 0;

        while let Ok((key, result)) = self.rx.try_recv() {
            if Some(key.generation) != self.generation {
                log::debug!("[Likes] Dropping result for control {:?} of an old page", key);
                continue;
            }

            if let Some(count) = self.in_flight.get_mut(&key) {
                *count -= 1;
                if *count == 0 {
                    self.in_flight.remove(&key);
                }
            }

            if let Err(message) = apply_completion(page, key, result) {
                toasts.show_error(&message);
            }
            applied += 1;
        }

        applied
    }
}

/// Apply one toggle result to its control
///
/// On success the count text and style follow the server. On failure the
/// control is left untouched and the user-facing message is returned.
pub fn apply_completion(
    page: &mut PageView,
    key: ControlKey,
    result: Result<ToggleState, LikeError>,
) -> Result<(), String> {
    match result {
        Ok(state) => {
            let Some(control) = page.control_mut(key) else {
                log::warn!("[Likes] Result for missing control {:?}", key);
                return Ok(());
            };
            control.set_count_text(state.likes.to_string());
            control.apply_liked_style(state.liked);
            log::info!(
                "[Likes] Reflection {} is now {} ({} like(s))",
                control.reflection_id,
                if state.liked { "liked" } else { "unliked" },
                state.likes
            );
            log::debug!(
                "[Likes] Control classes now {:?}",
                control.classes().collect::<Vec<_>>()
            );
            Ok(())
        }
        Err(e) => {
            let id = page
                .control(key)
                .map(|c| c.reflection_id.to_string())
                .unwrap_or_else(|| "?".to_string());
            match e.kind() {
                ErrorKind::Application => {
                    log::error!("[Likes] Failed to toggle like for reflection {}: {}", id, e)
                }
                ErrorKind::Transport => {
                    log::error!("[Likes] Network error toggling reflection {}: {}", id, e)
                }
            }
            Err(e.user_message())
        }
    }
}
