pub mod actions;
mod app_state;
mod bubble;
mod chat_view;
pub mod events;
mod scroll;

pub use app_state::*;
pub use bubble::*;
pub use chat_view::*;
pub use scroll::*;
