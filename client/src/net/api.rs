//! Mock API used by the interactivity page's data-fetch demo.
//!
//! Client-side (hydrate): waits `MOCK_LATENCY` on a browser timer before
//! answering. Server-side and native tests: answers immediately, since the
//! fetch is only ever triggered by a click in the browser.
//!
//! ERROR HANDLING
//! ==============
//! The signature carries `Result` so callers handle failure the way they
//! would against a real endpoint, even though the mock cannot fail.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use super::types::Post;

/// Simulated round-trip time of the mock endpoint.
pub const MOCK_LATENCY: Duration = Duration::from_millis(1000);

const SAMPLE_POSTS: [(u32, &str, &str); 3] = [
    (1, "Learning Leptos Signals", "Signals and effects are powerful!"),
    (2, "Building Components", "Reusable components make development faster."),
    (3, "State Management", "Props down, callbacks up!"),
];

/// The fixed payload the mock endpoint returns.
pub fn sample_posts() -> Vec<Post> {
    SAMPLE_POSTS
        .iter()
        .map(|&(id, title, content)| Post { id, title: title.to_owned(), content: content.to_owned() })
        .collect()
}

/// Fetch the sample posts after the simulated latency.
pub async fn fetch_sample_posts() -> Result<Vec<Post>, String> {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::sleep(MOCK_LATENCY).await;
    }
    log::debug!("mock api returned {} posts", SAMPLE_POSTS.len());
    Ok(sample_posts())
}
