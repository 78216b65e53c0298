mod common;

use partner_core::client::HeroClient;
use partner_core::hero::{default_slides, Slide};
use partner_core::Carousel;

fn client_for(addr: std::net::SocketAddr) -> HeroClient {
    HeroClient::new(format!("http://{addr}/api/hero"))
}

#[tokio::test]
async fn test_fetch_replaces_slides_and_merges_text() {
    let addr = common::serve_once(
        "200 OK",
        "application/json",
        r#"{"images":[{"full":"a"},{"full":"b"}],"text":{"heading":"X"}}"#,
    )
    .await;

    let config = client_for(addr).fetch().await.unwrap();

    let mut carousel = Carousel::default();
    carousel.apply_config(config);

    assert_eq!(carousel.slides(), &[Slide::new("a"), Slide::new("b")]);
    assert_eq!(carousel.text().heading, "X");
    assert_eq!(carousel.text().highlight, "Caring, Evidence-Based");
}

#[tokio::test]
async fn test_empty_image_list_keeps_defaults() {
    let addr = common::serve_once("200 OK", "application/json", r#"{"images":[]}"#).await;

    let config = client_for(addr).fetch().await.unwrap();
    let mut carousel = Carousel::default();
    carousel.apply_config(config);

    assert_eq!(carousel.slides(), default_slides().as_slice());
}

#[tokio::test]
async fn test_non_json_body_is_an_error() {
    let addr = common::serve_once("200 OK", "text/html", "<html>maintenance</html>").await;

    let client = client_for(addr);
    assert!(client.fetch_or_default().await.is_none());
}

#[tokio::test]
async fn test_error_status_is_an_error() {
    let addr = common::serve_once(
        "500 Internal Server Error",
        "application/json",
        r#"{"images":[{"full":"a"}]}"#,
    )
    .await;

    assert!(client_for(addr).fetch().await.is_err());
}
