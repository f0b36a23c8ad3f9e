mod action;
mod author;
mod conversation;
mod event;
mod loading;
mod message;
mod responder;
mod source;
mod textarea;

pub use action::*;
pub use author::*;
pub use conversation::*;
pub use event::*;
pub use loading::*;
pub use message::*;
pub use responder::*;
pub use source::*;
pub use textarea::*;
