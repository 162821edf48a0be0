//! End-to-end tests of the handler chain built by [`profile_bot::build_handler_chain`].
//!
//! A recording [`MockBot`] replaces Telegram; two mockito servers stand in for the Graph API and the profile pages.

mod common;

use std::sync::Arc;

use common::mock_bot::MockBot;
use common::{create_test_message, test_config};
use mockito::{Matcher, Server};
use profile_bot::format::{
    failure_text, invalid_link_text, photo_fallback_text, searching_text, usage_text,
    GO_TO_PROFILE_LABEL, VIEW_PICTURE_LABEL,
};
use profile_bot::{build_handler_chain, BotConfig, HandlerChain, HandlerResponse, ReplyButton};
use profile_lookup::{extract_identifier, ProfileIdentifier, ProfileResolver};

const AVATAR: &[u8] = b"\x89PNG fake avatar";

fn chain_with(config: &BotConfig, bot: Arc<MockBot>) -> HandlerChain {
    let resolver = Arc::new(ProfileResolver::from_config(config.lookup()).unwrap());
    build_handler_chain(config, bot, resolver)
}

/// **Test: Graph API lookup produces one photo reply with caption and two buttons.**
///
/// **Setup:** Graph returns name, username and picture URL; avatar served by the same server.
/// **Action:** Send `https://www.facebook.com/zuck`.
/// **Expected:** Searching notice, then a photo whose caption names Mark Zuckerberg and zuck, with
/// "view picture" and "go to profile" buttons side by side.
#[tokio::test]
async fn test_graph_lookup_sends_photo_reply() {
    let mut graph = Server::new_async().await;
    let web = Server::new_async().await;

    let body = format!(
        r#"{{"name":"Mark Zuckerberg","username":"zuck","id":"4","picture":{{"data":{{"url":"{}/avatar.jpg"}}}}}}"#,
        graph.url()
    );
    graph
        .mock("GET", "/zuck")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(body)
        .create_async()
        .await;
    graph
        .mock("GET", "/avatar.jpg")
        .with_status(200)
        .with_body(AVATAR)
        .create_async()
        .await;

    let config = test_config(Some(graph.url()), web.url());
    let bot = Arc::new(MockBot::new());
    let chain = chain_with(&config, bot.clone());

    let message = create_test_message("https://www.facebook.com/zuck");
    assert_eq!(
        extract_identifier(&message.content),
        Some(ProfileIdentifier::Username("zuck".to_string()))
    );

    let response = chain.handle(&message).await.unwrap();

    assert_eq!(bot.texts(), vec![searching_text()]);
    let photos = bot.photos();
    assert_eq!(photos.len(), 1);
    let reply = &photos[0];
    assert!(reply.caption.contains("Mark Zuckerberg"));
    assert!(reply.caption.contains("zuck"));
    assert!(reply.caption.contains("Graph API"));
    assert_eq!(reply.button_count(), 2);
    assert_eq!(
        reply.buttons[0],
        vec![
            ReplyButton::new(VIEW_PICTURE_LABEL, format!("{}/avatar.jpg", graph.url())),
            ReplyButton::new(GO_TO_PROFILE_LABEL, format!("{}/zuck", web.url())),
        ]
    );
    assert_eq!(reply.image.as_deref(), Some(AVATAR));
    assert_eq!(response, HandlerResponse::Reply(reply.caption.clone()));
}

/// **Test: Numeric profile links resolve by id.**
///
/// **Setup:** No app credentials; profile page for the id has og:title and og:image.
/// **Action:** Send `https://facebook.com/profile.php?id=100000000000001`.
/// **Expected:** Identifier is the id; the caption shows the id line, not a username line.
#[tokio::test]
async fn test_numeric_id_link() {
    let mut web = Server::new_async().await;

    let html = format!(
        r#"<meta property="og:title" content="Jane Doe"><meta property="og:image" content="{}/p.jpg">"#,
        web.url()
    );
    web.mock("GET", "/100000000000001")
        .with_status(200)
        .with_body(html)
        .create_async()
        .await;
    web.mock("GET", "/p.jpg")
        .with_status(200)
        .with_body(AVATAR)
        .create_async()
        .await;

    let text = "https://facebook.com/profile.php?id=100000000000001";
    assert_eq!(
        extract_identifier(text),
        Some(ProfileIdentifier::Id("100000000000001".to_string()))
    );

    let config = test_config(None, web.url());
    let bot = Arc::new(MockBot::new());
    chain_with(&config, bot.clone())
        .handle(&create_test_message(text))
        .await
        .unwrap();

    let photos = bot.photos();
    assert_eq!(photos.len(), 1);
    assert!(photos[0].caption.contains("Jane Doe"));
    assert!(photos[0].caption.contains("<code>100000000000001</code>"));
    assert!(!photos[0].caption.contains("Username"));
}

/// **Test: Graph API error falls back to the profile page.**
///
/// **Setup:** Graph answers with an `error` field; the page has a title and og:image.
/// **Action:** Send a username link.
/// **Expected:** Photo reply named after the page title, source "Web page"; no failure notice.
#[tokio::test]
async fn test_graph_error_falls_back_to_page() {
    let mut graph = Server::new_async().await;
    let mut web = Server::new_async().await;

    graph
        .mock("GET", "/zuck")
        .match_query(Matcher::Any)
        .with_status(400)
        .with_body(r#"{"error":{"message":"Unsupported get request."}}"#)
        .create_async()
        .await;
    let html = format!(
        r#"<html><head><title>Mark Zuckerberg</title><meta property="og:image" content="{}/og.jpg"></head></html>"#,
        web.url()
    );
    web.mock("GET", "/zuck")
        .with_status(200)
        .with_body(html)
        .create_async()
        .await;
    web.mock("GET", "/og.jpg")
        .with_status(200)
        .with_body(AVATAR)
        .create_async()
        .await;

    let config = test_config(Some(graph.url()), web.url());
    let bot = Arc::new(MockBot::new());
    chain_with(&config, bot.clone())
        .handle(&create_test_message("https://facebook.com/zuck"))
        .await
        .unwrap();

    assert_eq!(bot.texts(), vec![searching_text()]);
    let photos = bot.photos();
    assert_eq!(photos.len(), 1);
    assert!(photos[0].caption.contains("<b>Name:</b> Mark Zuckerberg"));
    assert!(photos[0].caption.contains("Web page"));
    assert!(!photos[0].caption.contains("Unsupported get request"));
}

/// **Test: Both paths fail; exactly one failure notice and no photo.**
///
/// **Setup:** Graph error, profile page 404.
/// **Action:** Send a username link.
/// **Expected:** Searching notice then the failure notice with the page error; chain returns Ok.
#[tokio::test]
async fn test_both_paths_fail_sends_single_failure_notice() {
    let mut graph = Server::new_async().await;
    let mut web = Server::new_async().await;

    graph
        .mock("GET", "/zuck")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"error":{"message":"nope"}}"#)
        .create_async()
        .await;
    web.mock("GET", "/zuck").with_status(404).create_async().await;

    let config = test_config(Some(graph.url()), web.url());
    let bot = Arc::new(MockBot::new());
    let response = chain_with(&config, bot.clone())
        .handle(&create_test_message("https://facebook.com/zuck"))
        .await
        .unwrap();

    assert_eq!(bot.texts(), vec![searching_text(), failure_text("HTTP 404")]);
    assert!(bot.photos().is_empty());
    assert_eq!(response, HandlerResponse::Reply(failure_text("HTTP 404")));
}

/// **Test: Text without a profile link gets the invalid-link notice and triggers no lookup.**
#[tokio::test]
async fn test_text_without_link_gets_invalid_notice() {
    let mut graph = Server::new_async().await;
    let mut web = Server::new_async().await;
    let graph_mock = graph.mock("GET", Matcher::Any).expect(0).create_async().await;
    let web_mock = web.mock("GET", Matcher::Any).expect(0).create_async().await;

    let config = test_config(Some(graph.url()), web.url());
    let bot = Arc::new(MockBot::new());
    chain_with(&config, bot.clone())
        .handle(&create_test_message("hello there"))
        .await
        .unwrap();

    assert_eq!(bot.texts(), vec![invalid_link_text()]);
    graph_mock.assert_async().await;
    web_mock.assert_async().await;
}

/// **Test: /start and /help answer with the usage text only.**
#[tokio::test]
async fn test_start_and_help_send_usage() {
    let web = Server::new_async().await;
    let config = test_config(None, web.url());
    let bot = Arc::new(MockBot::new());
    let chain = chain_with(&config, bot.clone());

    chain.handle(&create_test_message("/start")).await.unwrap();
    chain.handle(&create_test_message("/help@fb_profile_bot")).await.unwrap();

    assert_eq!(bot.texts(), vec![usage_text(), usage_text()]);
}

/// **Test: Messages without text are ignored silently.**
#[tokio::test]
async fn test_empty_message_is_ignored() {
    let web = Server::new_async().await;
    let config = test_config(None, web.url());
    let bot = Arc::new(MockBot::new());

    let response = chain_with(&config, bot.clone())
        .handle(&create_test_message("   "))
        .await
        .unwrap();

    assert_eq!(response, HandlerResponse::Continue);
    assert!(bot.sent().is_empty());
}

/// **Test: A rejected photo degrades to a text reply with the same caption.**
///
/// **Setup:** Page lookup succeeds; the bot rejects every photo.
/// **Action:** Send a username link.
/// **Expected:** Searching notice, then the caption with the picture warning as text.
#[tokio::test]
async fn test_rejected_photo_degrades_to_text() {
    let mut web = Server::new_async().await;
    web.mock("GET", "/zuck")
        .with_status(200)
        .with_body(format!(
            r#"<meta property="og:title" content="Mark"><meta property="og:image" content="{}/og.jpg">"#,
            web.url()
        ))
        .create_async()
        .await;
    web.mock("GET", "/og.jpg")
        .with_status(200)
        .with_body(AVATAR)
        .create_async()
        .await;

    let config = test_config(None, web.url());
    let bot = Arc::new(MockBot::failing_photos());
    chain_with(&config, bot.clone())
        .handle(&create_test_message("facebook.com/zuck"))
        .await
        .unwrap();

    let texts = bot.texts();
    assert_eq!(texts.len(), 2);
    assert_eq!(texts[0], searching_text());
    let caption = "👤 <b>Name:</b> Mark\n🔖 <b>Username:</b> zuck\n⚙️ <b>Source:</b> Web page";
    assert_eq!(texts[1], photo_fallback_text(caption));
    assert!(bot.photos().is_empty());
}
