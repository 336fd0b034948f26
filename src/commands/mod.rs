//! API Command Wrappers
//!
//! Frontend bindings to the activities REST endpoints.

#![allow(async_fn_in_trait)]

mod activity;

use crate::error::ApiResult;
use crate::models::{ActivityCollection, ApiMessage};

pub use activity::*;

/// The three calls the client makes against the server
pub trait ActivityApi {
    /// `GET /activities`
    async fn list_activities(&self) -> ApiResult<ActivityCollection>;

    /// `POST /activities/{name}/signup?email={email}`
    async fn signup(&self, activity: &str, email: &str) -> ApiResult<ApiMessage>;

    /// `DELETE /activities/{name}/remove?email={email}`
    async fn remove_participant(&self, activity: &str, email: &str) -> ApiResult<ApiMessage>;
}
