use super::*;
use leptos::reactive::owner::Owner;

#[test]
fn greeting_prompts_when_name_is_empty() {
    assert_eq!(greeting(""), "Type something above...");
}

#[test]
fn greeting_echoes_the_name_verbatim() {
    assert_eq!(greeting("Ferris"), "Hello, Ferris!");
    assert_eq!(greeting(" spaced "), "Hello,  spaced !");
}

// =============================================================
// fetch flow
// =============================================================

#[test]
fn second_fetch_is_refused_until_the_first_settles() {
    Owner::new().with(|| {
        let posts = RwSignal::new(PostsState::default());

        assert!(start_fetch(posts));
        assert!(posts.get_untracked().loading);
        assert!(!start_fetch(posts), "in-flight fetch must block a second start");

        settle_fetch(posts, Ok(api::sample_posts()));
        let state = posts.get_untracked();
        assert!(!state.loading);
        assert_eq!(state.posts, api::sample_posts());

        assert!(start_fetch(posts), "a settled fetch allows a new one");
    });
}

#[test]
fn failed_fetch_clears_loading_and_keeps_previous_posts() {
    Owner::new().with(|| {
        let posts = RwSignal::new(PostsState::default());
        assert!(start_fetch(posts));
        settle_fetch(posts, Ok(api::sample_posts()));

        assert!(start_fetch(posts));
        settle_fetch(posts, Err("offline".to_owned()));

        let state = posts.get_untracked();
        assert!(!state.loading);
        assert_eq!(state.posts, api::sample_posts());
        assert_eq!(state.button_label(), "Fetch Sample Data");
    });
}
