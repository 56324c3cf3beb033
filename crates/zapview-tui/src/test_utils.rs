//! Test utilities for zapview-tui rendering and state tests.
//!
//! Provides fixture conversations and helpers for rendering the viewer
//! screen into a `TestBackend`-style buffer string.

use crate::app::App;
use crate::screens::viewer::ViewerScreen;
use crate::screens::Screen;
use chrono::{Duration, TimeZone, Utc};
use ratatui::{buffer::Buffer, layout::Rect};
use zapview_api::{ApiError, Conversation, ConversationState, Direction, Message};

/// Default terminal width for tests.
pub const TEST_WIDTH: u16 = 80;

/// Default terminal height for tests.
pub const TEST_HEIGHT: u16 = 24;

/// A list-form conversation (no messages).
pub fn conversation(id: &str, state: ConversationState) -> Conversation {
    Conversation {
        id: id.to_string(),
        state,
        messages: Vec::new(),
    }
}

/// A detail-form conversation with `count` messages, alternating directions
/// starting with `Sent`, contents "mensagem 1", "mensagem 2", ...
pub fn conversation_with_messages(id: &str, count: usize) -> Conversation {
    let base = Utc.with_ymd_and_hms(2025, 2, 21, 10, 20, 41).unwrap();
    let messages = (0..count)
        .map(|i| Message {
            id: format!("m{}", i + 1),
            direction: if i % 2 == 0 {
                Direction::Sent
            } else {
                Direction::Received
            },
            content: format!("mensagem {}", i + 1),
            timestamp: base + Duration::minutes(i64::try_from(i).unwrap()),
        })
        .collect();
    Conversation {
        id: id.to_string(),
        state: ConversationState::Open,
        messages,
    }
}

/// An [`ApiError`] for failure-path tests.
pub fn fetch_error() -> ApiError {
    let err = serde_json::from_str::<Vec<Conversation>>("not json").unwrap_err();
    ApiError::Parse(err)
}

/// Convert a buffer to a string representation for assertions.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut result = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            let cell = buffer.cell((x, y)).unwrap();
            result.push_str(cell.symbol());
        }
        while result.ends_with(' ') {
            result.pop();
        }
        result.push('\n');
    }

    if result.ends_with('\n') {
        result.pop();
    }

    result
}

/// Render the viewer screen for the given app state and return the buffer
/// as a string.
pub fn render_viewer_to_string(app: &App) -> String {
    let area = Rect::new(0, 0, TEST_WIDTH, TEST_HEIGHT);
    let mut buffer = Buffer::empty(area);
    ViewerScreen.render(app, area, &mut buffer);
    buffer_to_string(&buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_messages_alternate_directions() {
        let conversation = conversation_with_messages("c1", 3);
        assert_eq!(conversation.messages[0].direction, Direction::Sent);
        assert_eq!(conversation.messages[1].direction, Direction::Received);
        assert_eq!(conversation.messages[2].direction, Direction::Sent);
    }

    #[test]
    fn test_buffer_to_string() {
        let area = Rect::new(0, 0, 10, 2);
        let mut buffer = Buffer::empty(area);
        buffer.set_string(0, 0, "Ola", ratatui::style::Style::default());
        let result = buffer_to_string(&buffer);
        assert!(result.starts_with("Ola"));
    }
}
