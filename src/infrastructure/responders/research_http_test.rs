use anyhow::Result;

use super::ResearchHttp;
use super::ResearchRequest;
use super::ResearchResponse;
use crate::domain::models::Author;
use crate::domain::models::Responder;
use crate::domain::models::ResponderPrompt;
use crate::domain::models::Source;

#[tokio::test]
async fn it_gets_reply() -> Result<()> {
    let req_body = serde_json::to_string(&ResearchRequest {
        query: "How do I build a chat app?".to_string(),
    })?;
    let res_body = serde_json::to_string(&ResearchResponse {
        text: "Use a message list.".to_string(),
        sources: vec![
            Source::new("GPT-4", 0.92, "Python/JS"),
            Source::new("Claude", 0.87, "JavaScript"),
        ],
    })?;

    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/research")
        .match_body(mockito::Matcher::JsonString(req_body))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(res_body)
        .create_async()
        .await;

    let responder = ResearchHttp::new(server.url());
    let msg = responder
        .get_reply(ResponderPrompt::new("How do I build a chat app?".to_string()))
        .await?;

    mock.assert_async().await;

    assert_eq!(msg.author, Author::Assistant);
    assert_eq!(msg.text, "Use a message list.");
    assert_eq!(
        msg.sources,
        vec![
            Source::new("GPT-4", 0.92, "Python/JS"),
            Source::new("Claude", 0.87, "JavaScript"),
        ]
    );

    return Ok(());
}

#[tokio::test]
async fn it_defaults_missing_sources() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/research")
        .with_status(200)
        .with_body(r#"{"text":"No sources here."}"#)
        .create_async()
        .await;

    let msg = ResearchHttp::new(server.url())
        .get_reply(ResponderPrompt::new("hi".to_string()))
        .await?;

    mock.assert_async().await;
    assert_eq!(msg.text, "No sources here.");
    assert!(msg.sources.is_empty());

    return Ok(());
}

#[tokio::test]
async fn it_fails_on_client_error() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/research")
        .with_status(400)
        .with_body(r#"{"error":"Query is required"}"#)
        .create_async()
        .await;

    let err = ResearchHttp::new(server.url())
        .get_reply(ResponderPrompt::new("".to_string()))
        .await
        .unwrap_err();

    mock.assert_async().await;
    insta::assert_snapshot!(err.to_string(), @"Failed to get research results");
}

#[tokio::test]
async fn it_fails_on_server_error() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/research")
        .with_status(500)
        .create_async()
        .await;

    let res = ResearchHttp::new(server.url())
        .get_reply(ResponderPrompt::new("hello".to_string()))
        .await;

    mock.assert_async().await;
    assert!(res.is_err());
}

#[tokio::test]
async fn it_fails_on_invalid_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/research")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let res = ResearchHttp::new(server.url())
        .get_reply(ResponderPrompt::new("hello".to_string()))
        .await;

    mock.assert_async().await;
    assert!(res.is_err());
}

#[tokio::test]
async fn it_fails_when_unreachable() {
    // Port 9 (discard) is not expected to host an HTTP server.
    let err = ResearchHttp::new("http://127.0.0.1:9".to_string())
        .get_reply(ResponderPrompt::new("hello".to_string()))
        .await
        .unwrap_err();

    insta::assert_snapshot!(err.to_string(), @"Research service is not reachable");
}

#[tokio::test]
async fn it_fails_without_url() {
    let err = ResearchHttp::new("".to_string())
        .get_reply(ResponderPrompt::new("hello".to_string()))
        .await
        .unwrap_err();

    insta::assert_snapshot!(err.to_string(), @"Research URL is not defined");
}
