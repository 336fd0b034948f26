//! Activity Signup Frontend App
//!
//! Root component: wires the client to the context and loads the list once
//! on mount.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::client::ActivityClient;
use crate::commands::HttpActivityApi;
use crate::components::{ActivityList, MessageBanner, SignupForm};
use crate::config::ClientConfig;
use crate::confirm::BrowserConfirm;
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::from_env();
    log::info!("[APP] Using API base {:?}", config.api_base);

    let ctx = AppContext::new();
    provide_context(ctx);

    let client = ActivityClient::new(HttpActivityApi::new(&config.api_base), ctx, BrowserConfirm, config);
    provide_context(client.clone());

    // Initial load
    Effect::new(move |_| {
        let client = client.clone();
        spawn_local(async move {
            client.load_activities().await;
        });
    });

    view! {
        <header>
            <h1>"Mergington High School"</h1>
            <h2>"Extracurricular Activities"</h2>
        </header>

        <main>
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <ActivityList />
            </section>

            <section id="signup-container">
                <h3>"Sign Up for an Activity"</h3>
                <SignupForm />
                <MessageBanner />
            </section>
        </main>
    }
}
