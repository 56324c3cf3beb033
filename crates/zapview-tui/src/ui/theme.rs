//! Theme and styling definitions for the zapview TUI.

use ratatui::style::{Color, Modifier, Style};
use zapview_api::{ConversationState, Direction};

/// Color palette for the TUI.
pub struct Palette;

impl Palette {
    // Base colors
    pub const BG: Color = Color::Rgb(18, 27, 24);
    pub const FG: Color = Color::Rgb(220, 225, 222);
    pub const DIM: Color = Color::Rgb(130, 145, 138);

    // Accent (WhatsApp green)
    pub const ACCENT: Color = Color::Rgb(60, 190, 120);

    // Message directions
    pub const SENT: Color = Color::Rgb(120, 210, 150);
    pub const RECEIVED: Color = Color::Rgb(150, 180, 235);

    // Conversation states
    pub const OPEN: Color = Color::Rgb(130, 220, 130);
    pub const CLOSED: Color = Color::Rgb(240, 160, 100);

    // Error banner
    pub const ERROR: Color = Color::Rgb(240, 100, 100);

    // Status bar colors (high contrast)
    pub const STATUS_BG: Color = Color::Rgb(35, 50, 44);
    pub const STATUS_KEY_BG: Color = Color::Rgb(55, 95, 75);

    // Border colors
    pub const BORDER: Color = Color::Rgb(70, 90, 80);
    pub const BORDER_ACTIVE: Color = Color::Rgb(60, 190, 120);
}

/// Spinner frames for in-flight fetches.
pub const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// Common styles used throughout the TUI.
pub struct Styles;

impl Styles {
    /// Default text style.
    pub fn default() -> Style {
        Style::default().fg(Palette::FG).bg(Palette::BG)
    }

    /// Dimmed text for secondary information.
    pub fn dim() -> Style {
        Style::default().fg(Palette::DIM).bg(Palette::BG)
    }

    /// Highlighted/selected item.
    pub fn highlight() -> Style {
        Style::default()
            .fg(Palette::ACCENT)
            .bg(Palette::BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Title style.
    pub fn title() -> Style {
        Style::default()
            .fg(Palette::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Error banner style.
    pub fn error() -> Style {
        Style::default()
            .fg(Palette::ERROR)
            .bg(Palette::BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Key hint style (for status bar).
    pub fn key_hint() -> Style {
        Style::default()
            .fg(Palette::FG)
            .bg(Palette::STATUS_KEY_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Key hint label style.
    pub fn key_label() -> Style {
        Style::default().fg(Palette::FG).bg(Palette::STATUS_BG)
    }

    /// Status bar background style.
    pub fn status_bar() -> Style {
        Style::default().fg(Palette::FG).bg(Palette::STATUS_BG)
    }

    /// Border style for inactive elements.
    pub fn border() -> Style {
        Style::default().fg(Palette::BORDER)
    }

    /// Border style for active/focused elements.
    pub fn border_active() -> Style {
        Style::default().fg(Palette::BORDER_ACTIVE)
    }
}

/// Style keyed by the conversation state's styling token.
pub fn state_style(state: ConversationState) -> Style {
    match state.token() {
        "open" => Style::default().fg(Palette::OPEN).bg(Palette::BG),
        _ => Style::default().fg(Palette::CLOSED).bg(Palette::BG),
    }
}

/// Style for a message direction label.
pub fn direction_style(direction: Direction) -> Style {
    let color = match direction {
        Direction::Sent => Palette::SENT,
        Direction::Received => Palette::RECEIVED,
    };
    Style::default()
        .fg(color)
        .bg(Palette::BG)
        .add_modifier(Modifier::BOLD)
}
