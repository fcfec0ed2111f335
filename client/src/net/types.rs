//! Payload types returned by the (mock) API.

use serde::{Deserialize, Serialize};

/// A sample blog post shown on the interactivity page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u32,
    pub title: String,
    pub content: String,
}
