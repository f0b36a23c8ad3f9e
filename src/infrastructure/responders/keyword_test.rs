use std::time::Duration;

use anyhow::Result;
use test_utils::keyword_fixture;

use super::get_keyword_reply;
use super::Keyword;
use crate::domain::models::Author;
use crate::domain::models::Responder;
use crate::domain::models::ResponderName;
use crate::domain::models::ResponderPrompt;

fn rule_reply(rule: &str) -> &'static str {
    match rule {
        "greeting" => return "Hello! How can I assist you today?",
        "help" => {
            return "I'm here to help! You can ask me questions, and I'll do my best to assist you."
        }
        "thanks" => return "You're welcome! Is there anything else you'd like to know?",
        "farewell" => return "Goodbye! Feel free to come back if you have more questions.",
        _ => {
            return "That's an interesting point. Can you tell me more about what you're looking for?"
        }
    }
}

#[test]
fn it_matches_keyword_rules() {
    for (input, rule) in keyword_fixture() {
        assert_eq!(get_keyword_reply(input), rule_reply(rule), "input: {input}");
    }
}

#[test]
fn it_matches_case_insensitively() {
    insta::assert_snapshot!(get_keyword_reply("HELLO"), @"Hello! How can I assist you today?");
    insta::assert_snapshot!(get_keyword_reply("Bye BYE"), @"Goodbye! Feel free to come back if you have more questions.");
}

#[test]
fn it_prefers_greeting_over_help() {
    assert_eq!(
        get_keyword_reply("hi, can you help"),
        "Hello! How can I assist you today?"
    );
}

#[test]
fn it_matches_substrings_inside_words() {
    // "this" contains "hi".
    assert_eq!(
        get_keyword_reply("this needs help"),
        "Hello! How can I assist you today?"
    );
    assert_eq!(
        get_keyword_reply("thanks a lot"),
        "You're welcome! Is there anything else you'd like to know?"
    );
}

#[tokio::test]
async fn it_gets_reply() -> Result<()> {
    let responder = Keyword::new(Duration::ZERO);
    let msg = responder
        .get_reply(ResponderPrompt::new("thank you!".to_string()))
        .await?;

    assert_eq!(responder.name(), ResponderName::Keyword);
    assert_eq!(msg.author, Author::Assistant);
    assert_eq!(
        msg.text,
        "You're welcome! Is there anything else you'd like to know?"
    );
    assert!(msg.sources.is_empty());

    return Ok(());
}

#[tokio::test(start_paused = true)]
async fn it_waits_for_the_delay() -> Result<()> {
    let start = tokio::time::Instant::now();
    Keyword::default()
        .get_reply(ResponderPrompt::new("hello".to_string()))
        .await?;

    assert!(start.elapsed() >= Duration::from_millis(1500));
    return Ok(());
}
