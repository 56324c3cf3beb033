//! Presentation formatting: labels, identifier truncation, timestamps.
//!
//! All functions here are pure and total over their input domains. Label
//! strings are the pt-BR texts the product ships with.

use chrono::{DateTime, Local, TimeZone, Utc};
use zapview_api::{ConversationState, Direction};

/// Localized label for a message direction.
pub fn direction_label(direction: Direction) -> &'static str {
    match direction {
        Direction::Sent => "Enviada",
        Direction::Received => "Recebida",
    }
}

/// Localized label for a conversation state.
pub fn state_label(state: ConversationState) -> &'static str {
    match state {
        ConversationState::Open => "ABERTA",
        ConversationState::Closed => "FECHADA",
    }
}

/// Fixed-length identifier prefix followed by an ellipsis.
///
/// Purely cosmetic; the full identifier stays the fetch and render key.
pub fn short_id(id: &str) -> String {
    let prefix: String = id.chars().take(8).collect();
    format!("{prefix}...")
}

/// Render an instant in the runtime's local timezone, dd/mm/yyyy hh:mm:ss.
pub fn timestamp_label(timestamp: &DateTime<Utc>) -> String {
    format_instant(&timestamp.with_timezone(&Local))
}

fn format_instant<Tz: TimeZone>(instant: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    instant.format("%d/%m/%Y %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_label_is_total() {
        assert_eq!(direction_label(Direction::Sent), "Enviada");
        assert_eq!(direction_label(Direction::Received), "Recebida");
    }

    #[test]
    fn test_state_label_is_total() {
        assert_eq!(state_label(ConversationState::Open), "ABERTA");
        assert_eq!(state_label(ConversationState::Closed), "FECHADA");
    }

    #[test]
    fn test_short_id_truncates_to_eight_chars() {
        assert_eq!(short_id("abc12345-xyz"), "abc12345...");
    }

    #[test]
    fn test_short_id_of_short_identifier() {
        // Shorter ids keep the original behavior: whole id plus ellipsis.
        assert_eq!(short_id("ab"), "ab...");
    }

    #[test]
    fn test_format_instant() {
        let instant = Utc.with_ymd_and_hms(2025, 2, 21, 10, 20, 41).unwrap();
        assert_eq!(format_instant(&instant), "21/02/2025 10:20:41");
    }

    #[test]
    fn test_timestamp_label_shape() {
        let instant = Utc.with_ymd_and_hms(2025, 2, 21, 10, 20, 41).unwrap();
        let label = timestamp_label(&instant);
        // Local offset varies by environment; the shape does not.
        assert_eq!(label.len(), 19);
        assert_eq!(&label[2..3], "/");
        assert_eq!(&label[5..6], "/");
        assert_eq!(&label[13..14], ":");
    }
}
