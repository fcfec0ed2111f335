use super::*;

#[test]
fn sample_posts_are_the_three_fixed_entries() {
    let posts = sample_posts();
    let ids: Vec<_> = posts.iter().map(|p| p.id).collect();
    assert_eq!(ids, [1, 2, 3]);
    assert_eq!(posts[0].title, "Learning Leptos Signals");
    assert_eq!(posts[2].content, "Props down, callbacks up!");
}

#[test]
fn mock_latency_is_one_second() {
    assert_eq!(MOCK_LATENCY, Duration::from_secs(1));
}

#[test]
fn fetch_sample_posts_resolves_to_sample_posts() {
    let result = block_on_ready(fetch_sample_posts());
    assert_eq!(result, Ok(sample_posts()));
}

/// Drive a future that never pends (the non-hydrate mock) to completion.
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("mock fetch should resolve without waiting"),
    }
}
