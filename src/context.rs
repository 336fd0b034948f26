//! Application Context
//!
//! Shared signals provided via Leptos Context API. This is the browser-side
//! [`ActivityView`]: the client writes here and the components read.

use std::time::Duration;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::client::{ActivityClient, ActivityView};
use crate::commands::HttpActivityApi;
use crate::confirm::BrowserConfirm;
use crate::message::{MessageId, UiMessage};
use crate::view_state::ViewState;

pub type AppClient = ActivityClient<HttpActivityApi, AppContext, BrowserConfirm>;

/// A message on screen, tagged so stale timers can't hide a newer one
#[derive(Debug, Clone, PartialEq)]
pub struct ShownMessage {
    pub id: MessageId,
    pub message: UiMessage,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Activity list and selector options - read
    pub view_state: ReadSignal<ViewState>,
    /// Activity list and selector options - write
    set_view_state: WriteSignal<ViewState>,
    /// Status banner contents (None = hidden) - read
    pub message: ReadSignal<Option<ShownMessage>>,
    /// Status banner contents - write
    set_message: WriteSignal<Option<ShownMessage>>,
    next_message_id: StoredValue<MessageId>,
    /// Signup form email field
    pub email: ReadSignal<String>,
    set_email: WriteSignal<String>,
    /// Signup form selected activity ("" = placeholder)
    pub selected_activity: ReadSignal<String>,
    set_selected_activity: WriteSignal<String>,
}

impl AppContext {
    pub fn new() -> Self {
        let (view_state, set_view_state) = signal(ViewState::default());
        let (message, set_message) = signal::<Option<ShownMessage>>(None);
        let (email, set_email) = signal(String::new());
        let (selected_activity, set_selected_activity) = signal(String::new());
        Self {
            view_state,
            set_view_state,
            message,
            set_message,
            next_message_id: StoredValue::new(0),
            email,
            set_email,
            selected_activity,
            set_selected_activity,
        }
    }

    pub fn set_email(&self, email: String) {
        self.set_email.set(email);
    }

    pub fn set_selected_activity(&self, activity: String) {
        self.set_selected_activity.set(activity);
    }
}

impl ActivityView for AppContext {
    fn render(&self, state: ViewState) {
        self.set_view_state.set(state);
    }

    fn show_message(&self, message: UiMessage) -> MessageId {
        self.next_message_id.update_value(|id| *id += 1);
        let id = self.next_message_id.get_value();
        self.set_message.set(Some(ShownMessage { id, message }));
        id
    }

    fn clear_message_after(&self, id: MessageId, delay: Duration) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        let set_message = self.set_message;
        Timeout::new(millis, move || {
            set_message.update(|current| {
                if current.as_ref().map(|shown| shown.id) == Some(id) {
                    *current = None;
                }
            });
        })
        .forget();
    }

    fn reset_signup_form(&self) {
        self.set_email.set(String::new());
        self.set_selected_activity.set(String::new());
    }
}
