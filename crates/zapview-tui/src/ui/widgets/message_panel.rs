//! Messages pane (right side).
//!
//! Renders the selected conversation's messages in order: direction label,
//! content wrapped to the pane width, localized timestamp. Shown only when
//! a conversation is selected; otherwise a placeholder invites selection.

use crate::format::{direction_label, timestamp_label};
use crate::ui::theme::{direction_style, Styles, SPINNER};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use zapview_api::Conversation;

pub struct MessagePanel<'a> {
    conversation: Option<&'a Conversation>,
    scroll: usize,
    loading: bool,
    tick: usize,
}

impl<'a> MessagePanel<'a> {
    pub fn new(conversation: Option<&'a Conversation>) -> Self {
        Self {
            conversation,
            scroll: 0,
            loading: false,
            tick: 0,
        }
    }

    /// Scroll offset in rendered lines.
    #[must_use]
    pub fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }

    /// Show a spinner in the title while a detail fetch is in flight.
    #[must_use]
    pub fn loading(mut self, loading: bool, tick: usize) -> Self {
        self.loading = loading;
        self.tick = tick;
        self
    }
}

impl Widget for MessagePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = match (self.conversation, self.loading) {
            (_, true) => format!(" Mensagens {} ", SPINNER[self.tick % SPINNER.len()]),
            (Some(c), false) => format!(" Mensagens ({}) ", c.messages.len()),
            (None, false) => " Mensagens ".to_string(),
        };

        let block = Block::default()
            .title(title)
            .title_style(Styles::title())
            .borders(Borders::ALL)
            .border_style(Styles::border())
            .style(Styles::default());
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(conversation) = self.conversation else {
            Paragraph::new("Selecione uma conversa")
                .style(Styles::dim())
                .render(inner, buf);
            return;
        };

        let wrap_width = inner.width.saturating_sub(2).max(8) as usize;
        let mut lines: Vec<Line<'_>> = Vec::new();

        for message in &conversation.messages {
            lines.push(Line::from(Span::styled(
                direction_label(message.direction),
                direction_style(message.direction),
            )));
            for piece in textwrap::wrap(&message.content, wrap_width) {
                lines.push(Line::from(Span::styled(
                    piece.into_owned(),
                    Styles::default(),
                )));
            }
            lines.push(Line::from(Span::styled(
                timestamp_label(&message.timestamp),
                Styles::dim(),
            )));
            lines.push(Line::default());
        }

        // Clamp the scroll so at least one line stays visible.
        let offset = self.scroll.min(lines.len().saturating_sub(1));
        let visible: Vec<Line<'_>> = lines
            .into_iter()
            .skip(offset)
            .take(inner.height as usize)
            .collect();

        Paragraph::new(visible).render(inner, buf);
    }
}
