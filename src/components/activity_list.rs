//! Activity List Component
//!
//! `#activities-list`: one card per activity with its roster.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{AppClient, AppContext};
use crate::view_state::{dom, ActivityCard, RosterEntry, RosterView, ViewState, LOADING_NOTICE};

/// Participant row with its remove button
#[component]
fn ParticipantRow(entry: RosterEntry) -> impl IntoView {
    let client = use_context::<AppClient>().expect("AppClient should be provided");
    let intent = entry.removal_intent();

    let on_remove = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        let client = client.clone();
        let intent = intent.clone();
        spawn_local(async move {
            client.dispatch(intent).await;
        });
    };

    view! {
        <li data-email=entry.email.clone() data-activity=entry.activity.clone()>
            <span class={dom::PARTICIPANT_NAME_CLASS}>{entry.display_name}</span>
            <button class={dom::DELETE_PARTICIPANT_CLASS} title="Remove participant" on:click=on_remove>
                <span class="delete-icon">"✕"</span>
            </button>
        </li>
    }
}

#[component]
fn ActivityCardView(card: ActivityCard) -> impl IntoView {
    let availability = card.availability_label();
    let roster = match card.roster_view() {
        RosterView::Placeholder { text, class } => view! { <li class=class>{text}</li> }.into_any(),
        RosterView::Entries(entries) => entries
            .iter()
            .cloned()
            .map(|entry| view! { <ParticipantRow entry=entry /> })
            .collect_view()
            .into_any(),
    };

    view! {
        <div class={dom::ACTIVITY_CARD_CLASS}>
            <h4>{card.name}</h4>
            <p>{card.description}</p>
            <p><strong>"Schedule:"</strong>" "{card.schedule}</p>
            <p><strong>"Availability:"</strong>" "{availability}</p>
            <div class="participants-section">
                <h5>"Current Participants:"</h5>
                <ul class="participants-list">
                    {roster}
                </ul>
            </div>
        </div>
    }
}

/// Whole list region, rebuilt whenever the view state changes
#[component]
pub fn ActivityList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div id={dom::ACTIVITIES_LIST_ID}>
            {move || match ctx.view_state.get() {
                ViewState::Loading => view! { <p>{LOADING_NOTICE}</p> }.into_any(),
                ViewState::Failed { notice } => view! { <p>{notice}</p> }.into_any(),
                ViewState::Ready { cards } => cards
                    .into_iter()
                    .map(|card| view! { <ActivityCardView card=card /> })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}
