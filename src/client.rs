//! Activity Client
//!
//! View-controller between the activities API and whatever renders it.
//! Mutations are never applied locally; each successful one is followed by a
//! full reload so the view only ever shows server state.

use std::time::Duration;

use crate::commands::ActivityApi;
use crate::config::ClientConfig;
use crate::confirm::Confirm;
use crate::intent::UserIntent;
use crate::message::{MessageId, UiMessage};
use crate::models::ApiMessage;
use crate::view_state::{local_part, ViewState};

pub const SIGNUP_FALLBACK: &str = "An error occurred";
pub const SIGNUP_TRANSPORT_FAILURE: &str = "Failed to sign up. Please try again.";
pub const REMOVAL_FALLBACK: &str = "Failed to remove participant";
pub const REMOVAL_TRANSPORT_FAILURE: &str = "Failed to remove participant. Please try again.";

/// Where the client sends what the user should see
pub trait ActivityView {
    /// Replace the whole list and selector
    fn render(&self, state: ViewState);
    fn show_message(&self, message: UiMessage) -> MessageId;
    /// Hide message `id` after `delay`, unless a newer one replaced it first
    fn clear_message_after(&self, id: MessageId, delay: Duration);
    fn reset_signup_form(&self);
}

#[derive(Debug, Clone)]
pub struct ActivityClient<A, V, C> {
    api: A,
    view: V,
    confirm: C,
    config: ClientConfig,
}

impl<A, V, C> ActivityClient<A, V, C>
where
    A: ActivityApi,
    V: ActivityView,
    C: Confirm,
{
    pub fn new(api: A, view: V, confirm: C, config: ClientConfig) -> Self {
        Self { api, view, confirm, config }
    }

    /// Fetch everything and rebuild the view. Failures render a notice; nothing propagates.
    pub async fn load_activities(&self) {
        match self.api.list_activities().await {
            Ok(collection) => {
                log::info!("Loaded {} activities", collection.len());
                self.view.render(ViewState::from_collection(&collection));
            }
            Err(err) => {
                log::error!("Error fetching activities: {}", err);
                self.view.render(ViewState::failed());
            }
        }
    }

    /// Clear timers start once the whole operation, refresh included, is done
    pub async fn signup(&self, activity: &str, email: &str) {
        let shown = match self.api.signup(activity, email).await {
            Ok(ApiMessage { message }) => {
                let shown = self.view.show_message(UiMessage::success(message));
                self.view.reset_signup_form();
                self.load_activities().await;
                shown
            }
            Err(err) if err.is_transport() => {
                log::error!("Error signing up for {}: {}", activity, err);
                self.view.show_message(UiMessage::error(SIGNUP_TRANSPORT_FAILURE))
            }
            Err(err) => {
                log::warn!("Signup for {} rejected: {}", activity, err);
                let text = err.detail().unwrap_or(SIGNUP_FALLBACK);
                self.view.show_message(UiMessage::error(text))
            }
        };
        self.view.clear_message_after(shown, self.config.message_ttl);
    }

    /// Unconditional removal; callers go through [`Self::dispatch`] to get the prompt
    pub async fn remove_participant(&self, activity: &str, email: &str) {
        let (shown, ttl) = match self.api.remove_participant(activity, email).await {
            Ok(ApiMessage { message }) => {
                let shown = self.view.show_message(UiMessage::success(message));
                self.load_activities().await;
                (shown, self.config.removal_success_ttl)
            }
            Err(err) if err.is_transport() => {
                log::error!("Error removing participant from {}: {}", activity, err);
                let shown = self.view.show_message(UiMessage::error(REMOVAL_TRANSPORT_FAILURE));
                (shown, self.config.message_ttl)
            }
            Err(err) => {
                log::warn!("Removal from {} rejected: {}", activity, err);
                let text = err.detail().unwrap_or(REMOVAL_FALLBACK);
                (self.view.show_message(UiMessage::error(text)), self.config.message_ttl)
            }
        };
        self.view.clear_message_after(shown, ttl);
    }

    pub async fn dispatch(&self, intent: UserIntent) {
        match intent {
            UserIntent::RequestSignup { activity, email } => self.signup(&activity, &email).await,
            UserIntent::RequestRemoval { activity, email } => {
                if !self.confirm.confirm(local_part(&email), &activity) {
                    log::debug!("Removal of {} from {} cancelled", email, activity);
                    return;
                }
                self.remove_participant(&activity, &email).await
            }
        }
    }
}
