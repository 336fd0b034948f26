//! Signup Form Component
//!
//! `#signup-form`: email input plus an activity selector fed only from the
//! last successful load.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{AppClient, AppContext};
use crate::intent::UserIntent;
use crate::view_state::dom;

#[component]
pub fn SignupForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let client = use_context::<AppClient>().expect("AppClient should be provided");

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let intent = UserIntent::RequestSignup {
            activity: ctx.selected_activity.get_untracked(),
            email: ctx.email.get_untracked(),
        };
        let client = client.clone();
        spawn_local(async move {
            client.dispatch(intent).await;
        });
    };

    view! {
        <form id={dom::SIGNUP_FORM_ID} on:submit=on_submit>
            <div class="form-group">
                <label for={dom::EMAIL_INPUT_ID}>"Student Email:"</label>
                <input
                    type="email"
                    id={dom::EMAIL_INPUT_ID}
                    required=true
                    placeholder="your-email@mergington.edu"
                    prop:value=move || ctx.email.get()
                    on:input=move |ev| ctx.set_email(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for={dom::ACTIVITY_SELECT_ID}>"Select Activity:"</label>
                <select
                    id={dom::ACTIVITY_SELECT_ID}
                    required=true
                    prop:value=move || ctx.selected_activity.get()
                    on:change=move |ev| ctx.set_selected_activity(event_target_value(&ev))
                >
                    <option value="">"-- Select an activity --"</option>
                    {move || {
                        ctx.view_state
                            .get()
                            .selector_options()
                            .into_iter()
                            .map(|name| {
                                let label = name.clone();
                                view! { <option value=name>{label}</option> }
                            })
                            .collect_view()
                    }}
                </select>
            </div>
            <button type="submit">"Sign Up"</button>
        </form>
    }
}
