use axum::{
    body::to_bytes,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use test_utils::{builder::TestBuilder, context::TestContext};

use crate::server::{config::PageDefaults, state::AppState};


async fn setup() -> (TestContext, AppState) {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let state = AppState::new(test.db.clone().unwrap(), PageDefaults::default());

    (test, state)
}

/// Converts a handler result into a response and decodes its JSON body.
async fn json_body<T: DeserializeOwned>(response: impl IntoResponse) -> (Response, T) {
    let response = response.into_response();
    let (parts, body) = response.into_parts();
    let bytes = to_bytes(body, usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap();

    (Response::from_parts(parts, axum::body::Body::empty()), value)
}
