//! Conversation list pane (left side).
//!
//! One row per conversation: truncated identifier plus status label. The
//! cursor row carries a `>` marker; the row of the currently selected
//! conversation is highlighted.

use crate::format::{short_id, state_label};
use crate::ui::theme::{state_style, Styles, SPINNER};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;
use zapview_api::Conversation;

/// Width of the identifier column, padded for alignment.
const ID_COLUMN: usize = 13;

pub struct ConversationList<'a> {
    conversations: &'a [Conversation],
    cursor: usize,
    selected_id: Option<&'a str>,
    loading: bool,
    tick: usize,
}

impl<'a> ConversationList<'a> {
    pub fn new(conversations: &'a [Conversation], cursor: usize) -> Self {
        Self {
            conversations,
            cursor,
            selected_id: None,
            loading: false,
            tick: 0,
        }
    }

    /// Mark the row of the currently selected conversation.
    #[must_use]
    pub fn selected_id(mut self, id: Option<&'a str>) -> Self {
        self.selected_id = id;
        self
    }

    /// Show a spinner in the title while a list fetch is in flight.
    #[must_use]
    pub fn loading(mut self, loading: bool, tick: usize) -> Self {
        self.loading = loading;
        self.tick = tick;
        self
    }
}

impl Widget for ConversationList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.loading {
            format!(" Conversas {} ", SPINNER[self.tick % SPINNER.len()])
        } else {
            format!(" Conversas ({}) ", self.conversations.len())
        };

        let block = Block::default()
            .title(title)
            .title_style(Styles::title())
            .borders(Borders::ALL)
            .border_style(Styles::border_active())
            .style(Styles::default());
        let inner = block.inner(area);
        block.render(area, buf);

        if self.conversations.is_empty() {
            Paragraph::new("Nenhuma conversa")
                .style(Styles::dim())
                .render(inner, buf);
            return;
        }

        // Keep the cursor row visible.
        let visible = inner.height as usize;
        let offset = if visible == 0 {
            0
        } else {
            self.cursor.saturating_sub(visible - 1)
        };

        let lines: Vec<Line<'_>> = self
            .conversations
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(i, conversation)| {
                let marker = if i == self.cursor { "> " } else { "  " };
                let id_text = short_id(&conversation.id);
                let pad = " ".repeat(ID_COLUMN.saturating_sub(id_text.width()));

                let row_style = if self.selected_id == Some(conversation.id.as_str()) {
                    Styles::highlight()
                } else {
                    Styles::default()
                };

                Line::from(vec![
                    Span::styled(marker, Styles::highlight()),
                    Span::styled(format!("{id_text}{pad}"), row_style),
                    Span::styled(state_label(conversation.state), state_style(conversation.state)),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
