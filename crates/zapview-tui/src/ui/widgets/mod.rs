//! Shared widgets for the zapview TUI.

mod conversation_list;
mod message_panel;
mod status_bar;

pub use conversation_list::ConversationList;
pub use message_panel::MessagePanel;
pub use status_bar::{KeyHint, StatusBar};
