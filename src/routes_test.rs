use client::pages::route::PageRoute;

use super::*;

/// Serve `router` on an ephemeral local port and return its base URL.
async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test server failed");
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn healthz_is_served_over_http() {
    let base = spawn(api_routes()).await;
    let resp = reqwest::get(format!("{base}/healthz"))
        .await
        .expect("request should succeed");
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
}

#[tokio::test]
async fn unknown_api_path_is_not_found() {
    let base = spawn(api_routes()).await;
    let resp = reqwest::get(format!("{base}/api/nope"))
        .await
        .expect("request should succeed");
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
}

// =============================================================================
// full app: SSR pages, not-found fallback, compression
// =============================================================================

fn page_heading(route: PageRoute) -> &'static str {
    match route {
        PageRoute::Home => "Welcome to the Leptos Primer",
        PageRoute::Components => "Leptos Components",
        PageRoute::Interactivity => "Interactive Leptos Examples",
        PageRoute::About => "About This Tutorial",
    }
}

async fn spawn_app() -> String {
    spawn(app().expect("leptos configuration should load")).await
}

#[tokio::test]
async fn every_page_route_is_server_rendered() {
    let base = spawn_app().await;
    for route in PageRoute::ALL {
        let resp = reqwest::get(format!("{base}{}", route.path()))
            .await
            .expect("request should succeed");
        assert_eq!(resp.status(), reqwest::StatusCode::OK, "status for {}", route.path());
        let body = resp.text().await.expect("body should read");
        assert!(body.contains(page_heading(route)), "heading missing for {}", route.path());
        assert!(body.contains("Leptos Primer"), "header missing for {}", route.path());
        assert!(body.contains("Keep it simple!"), "footer missing for {}", route.path());
    }
}

#[tokio::test]
async fn unknown_path_renders_not_found_page_with_chrome() {
    let base = spawn_app().await;
    let resp = reqwest::get(format!("{base}/nope"))
        .await
        .expect("request should succeed");
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
    let body = resp.text().await.expect("body should read");
    assert!(body.contains("Page not found."));
    assert!(body.contains("Leptos Primer"));
    assert!(body.contains("Keep it simple!"));
}

#[tokio::test]
async fn healthz_still_wins_over_the_fallback() {
    let base = spawn_app().await;
    let resp = reqwest::get(format!("{base}/healthz"))
        .await
        .expect("request should succeed");
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
}

#[tokio::test]
async fn pages_are_gzip_compressed_when_accepted() {
    let base = spawn_app().await;
    let resp = reqwest::Client::new()
        .get(format!("{base}{}", PageRoute::About.path()))
        .header(reqwest::header::ACCEPT_ENCODING, "gzip")
        .send()
        .await
        .expect("request should succeed");
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert_eq!(
        resp.headers().get(reqwest::header::CONTENT_ENCODING).map(|v| v.as_bytes()),
        Some(b"gzip".as_slice())
    );
}
