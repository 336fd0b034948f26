//! Message Banner Component
//!
//! `#message`: latest status message, hidden when there is none.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::message::banner_class;
use crate::view_state::dom;

#[component]
pub fn MessageBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div
            id={dom::MESSAGE_ID}
            class=move || banner_class(ctx.message.get().as_ref().map(|shown| &shown.message))
        >
            {move || ctx.message.get().map(|shown| shown.message.text)}
        </div>
    }
}
