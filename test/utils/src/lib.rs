/// Inputs paired with the keyword rule they are expected to trigger.
pub fn keyword_fixture() -> Vec<(&'static str, &'static str)> {
    return vec![
        ("Hi there", "greeting"),
        ("HELLO", "greeting"),
        ("hi, can you help", "greeting"),
        ("please help me", "help"),
        ("thank you!", "thanks"),
        ("bye now", "farewell"),
        ("what is the weather", "fallback"),
    ];
}

/// Long enough to wrap inside a 50 column chat view.
pub fn long_text_fixture() -> &'static str {
    return "Hi there! This is a really long line that pushes the boundaries of 50 characters across the screen, resulting in a bubble where the line is wrapped to the next line. Cool right?";
}
