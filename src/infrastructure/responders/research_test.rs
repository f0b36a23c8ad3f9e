use std::time::Duration;

use anyhow::Result;

use super::research_reply;
use super::Research;
use crate::domain::models::Author;
use crate::domain::models::Responder;
use crate::domain::models::ResponderName;
use crate::domain::models::ResponderPrompt;
use crate::domain::models::Source;

#[test]
fn it_embeds_query_verbatim() {
    let msg = research_reply("Build a \"todo\" app");
    insta::assert_snapshot!(msg.text, @r###"
    Based on research across multiple AI models, here's the best answer for "Build a "todo" app"...

    This would be implemented using HTML, CSS, JavaScript for the frontend and Python for the backend processing of multiple AI model responses.
    "###);
}

#[test]
fn it_attaches_fixed_sources() {
    let msg = research_reply("anything");
    assert_eq!(
        msg.sources,
        vec![
            Source::new("GPT-4", 0.92, "Python/JS"),
            Source::new("Gemini", 0.89, "HTML/CSS"),
            Source::new("Claude", 0.87, "JavaScript"),
        ]
    );
}

#[tokio::test]
async fn it_gets_reply() -> Result<()> {
    let responder = Research::new(Duration::ZERO);
    let msg = responder
        .get_reply(ResponderPrompt::new("hello".to_string()))
        .await?;

    assert_eq!(responder.name(), ResponderName::Research);
    assert_eq!(msg.author, Author::Assistant);
    assert_eq!(msg.sources.len(), 3);
    assert!(msg.text.contains("\"hello\""));

    return Ok(());
}

#[tokio::test]
async fn it_requires_a_query() {
    let err = Research::new(Duration::ZERO)
        .get_reply(ResponderPrompt::new("".to_string()))
        .await
        .unwrap_err();

    insta::assert_snapshot!(err.to_string(), @"Query is required");
}

#[tokio::test(start_paused = true)]
async fn it_waits_for_the_delay() -> Result<()> {
    let start = tokio::time::Instant::now();
    Research::default()
        .get_reply(ResponderPrompt::new("hello".to_string()))
        .await?;

    assert!(start.elapsed() >= Duration::from_millis(2000));
    return Ok(());
}
