//! Mock data-fetch state: a loading flag plus the fetched posts.

#[cfg(test)]
#[path = "posts_test.rs"]
mod posts_test;

use crate::net::types::Post;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostsState {
    pub loading: bool,
    pub posts: Vec<Post>,
}

impl PostsState {
    /// Mark a fetch as in flight.
    ///
    /// Returns `false` when one is already running; the caller should not
    /// start another.
    pub fn begin(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        true
    }

    /// Settle the in-flight fetch. Errors are logged and leave the previous
    /// posts in place.
    pub fn finish(&mut self, result: Result<Vec<Post>, String>) {
        match result {
            Ok(posts) => self.posts = posts,
            Err(e) => log::error!("fetching sample posts failed: {e}"),
        }
        self.loading = false;
    }

    pub fn button_label(&self) -> &'static str {
        if self.loading { "Loading..." } else { "Fetch Sample Data" }
    }

    pub fn has_posts(&self) -> bool {
        !self.posts.is_empty()
    }
}
