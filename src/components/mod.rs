//! UI Components
//!
//! Leptos components for the activity page.

mod activity_list;
mod message_banner;
mod signup_form;

pub use activity_list::ActivityList;
pub use message_banner::MessageBanner;
pub use signup_form::SignupForm;
