use super::ResponderName;

#[test]
fn it_parses_kebab_case_names() {
    assert_eq!(
        ResponderName::parse("keyword".to_string()),
        Some(ResponderName::Keyword)
    );
    assert_eq!(
        ResponderName::parse("research-http".to_string()),
        Some(ResponderName::ResearchHttp)
    );
    assert_eq!(ResponderName::parse("ollama".to_string()), None);
}

#[test]
fn it_shares_research_texts_between_variants() {
    assert_eq!(
        ResponderName::Research.welcome_text(),
        ResponderName::ResearchHttp.welcome_text()
    );
    assert_eq!(
        ResponderName::Research.indicator_text(),
        ResponderName::ResearchHttp.indicator_text()
    );
}

#[test]
fn it_has_typing_indicator_for_keyword() {
    insta::assert_snapshot!(ResponderName::Keyword.indicator_text(), @"typing...");
}
