use super::ResponderPrompt;

pub enum Action {
    ResponderRequest(ResponderPrompt),
}
