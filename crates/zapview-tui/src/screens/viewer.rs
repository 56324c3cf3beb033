//! Viewer screen: the two-pane conversation display.

use crate::app::App;
use crate::screens::Screen;
use crate::ui::widgets::{ConversationList, KeyHint, MessagePanel, StatusBar};
use crate::ui::{main_layout, panes_layout, theme::Styles};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Paragraph, Widget},
};

/// The single screen of the viewer.
pub struct ViewerScreen;

impl Screen for ViewerScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let (main_area, status_area) = main_layout(area);

        // Reserve a single banner line above the panes when an error is set.
        let content_area = if let Some(error) = &app.error {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Min(3)])
                .split(main_area);
            render_error_banner(error, chunks[0], buf);
            chunks[1]
        } else {
            main_area
        };

        let (list_area, messages_area) = panes_layout(content_area);

        ConversationList::new(&app.conversations, app.cursor)
            .selected_id(app.selected_id())
            .loading(app.list_loading, app.tick)
            .render(list_area, buf);

        MessagePanel::new(app.selected.as_ref())
            .scroll(app.message_scroll)
            .loading(app.detail_loading, app.tick)
            .render(messages_area, buf);

        let hints = vec![
            KeyHint::new("Enter", "Abrir"),
            KeyHint::new("r", "Recarregar"),
            KeyHint::new("?", "Ajuda"),
            KeyHint::new("q", "Sair"),
        ];
        let mut bar = StatusBar::new("Conversas do WhatsApp").hints(hints);
        // Full identifier of the open conversation; the list row only shows
        // the truncated prefix.
        if let Some(id) = app.selected_id() {
            bar = bar.right(id);
        }
        bar.render(status_area, buf);
    }
}

fn render_error_banner(error: &str, area: Rect, buf: &mut Buffer) {
    for x in area.x..area.x.saturating_add(area.width) {
        buf[(x, area.y)].set_char(' ').set_style(Styles::error());
    }
    Paragraph::new(format!(" {error}"))
        .style(Styles::error())
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{App, DETAIL_ERROR, LIST_ERROR};
    use crate::test_utils::{
        buffer_to_string, conversation, conversation_with_messages, fetch_error,
        render_viewer_to_string,
    };
    use zapview_api::ConversationState;

    #[test]
    fn test_empty_state_shows_placeholders() {
        let app = App::new();
        let rendered = render_viewer_to_string(&app);
        assert!(rendered.contains("Nenhuma conversa"));
        assert!(rendered.contains("Selecione uma conversa"));
        assert!(rendered.contains("Conversas do WhatsApp"));
    }

    #[test]
    fn test_list_renders_every_conversation_with_status_label() {
        let mut app = App::new();
        app.apply_list(Ok(vec![
            conversation("abc12345-xyz", ConversationState::Open),
            conversation("def67890-uvw", ConversationState::Closed),
        ]));

        let rendered = render_viewer_to_string(&app);
        assert!(rendered.contains("abc12345..."));
        assert!(rendered.contains("def67890..."));
        assert!(rendered.contains("ABERTA"));
        assert!(rendered.contains("FECHADA"));
        assert!(rendered.contains("Conversas (2)"));
    }

    #[test]
    fn test_selection_populates_detail_pane_and_marks_row() {
        let mut app = App::new();
        app.apply_list(Ok(vec![conversation("abc12345-xyz", ConversationState::Open)]));
        let request = app.begin_detail_fetch().unwrap();
        app.apply_detail(request.seq, Ok(conversation_with_messages("abc12345-xyz", 2)));

        let rendered = render_viewer_to_string(&app);
        assert!(rendered.contains("> abc12345..."));
        assert!(rendered.contains("Mensagens (2)"));
        assert!(rendered.contains("Enviada"));
        assert!(rendered.contains("Recebida"));
    }

    #[test]
    fn test_messages_render_in_returned_order() {
        let mut app = App::new();
        app.apply_list(Ok(vec![conversation("abc12345-xyz", ConversationState::Open)]));
        let request = app.begin_detail_fetch().unwrap();
        app.apply_detail(request.seq, Ok(conversation_with_messages("abc12345-xyz", 3)));

        let rendered = render_viewer_to_string(&app);
        let first = rendered.find("mensagem 1").unwrap();
        let second = rendered.find("mensagem 2").unwrap();
        let third = rendered.find("mensagem 3").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_list_failure_shows_banner_and_empty_list() {
        let mut app = App::new();
        app.apply_list(Err(fetch_error()));

        let rendered = render_viewer_to_string(&app);
        assert!(rendered.contains(LIST_ERROR));
        assert!(rendered.contains("Nenhuma conversa"));
    }

    #[test]
    fn test_detail_failure_keeps_previous_pane_content() {
        let mut app = App::new();
        app.apply_list(Ok(vec![conversation("abc12345-xyz", ConversationState::Open)]));
        let request = app.begin_detail_fetch().unwrap();
        app.apply_detail(request.seq, Ok(conversation_with_messages("abc12345-xyz", 1)));

        let request = app.begin_detail_fetch().unwrap();
        app.apply_detail(request.seq, Err(fetch_error()));

        let rendered = render_viewer_to_string(&app);
        assert!(rendered.contains(DETAIL_ERROR));
        assert!(rendered.contains("Mensagens (1)"));
        assert!(rendered.contains("mensagem 1"));
    }

    #[test]
    fn test_status_bar_shows_full_selected_id() {
        let mut app = App::new();
        app.apply_list(Ok(vec![conversation("abc12345-xyz", ConversationState::Open)]));
        let request = app.begin_detail_fetch().unwrap();
        app.apply_detail(request.seq, Ok(conversation_with_messages("abc12345-xyz", 1)));

        // Wide enough that the id fits to the right of the hints.
        let area = Rect::new(0, 0, 100, 24);
        let mut buffer = Buffer::empty(area);
        ViewerScreen.render(&app, area, &mut buffer);

        let rendered = buffer_to_string(&buffer);
        let bottom = rendered.lines().last().unwrap();
        assert!(bottom.ends_with("abc12345-xyz"));
    }

    #[test]
    fn test_same_fetch_twice_renders_identically() {
        let mut app = App::new();
        app.apply_list(Ok(vec![conversation("abc12345-xyz", ConversationState::Open)]));
        let request = app.begin_detail_fetch().unwrap();
        app.apply_detail(request.seq, Ok(conversation_with_messages("abc12345-xyz", 2)));
        let first = render_viewer_to_string(&app);

        let request = app.begin_detail_fetch().unwrap();
        app.apply_detail(request.seq, Ok(conversation_with_messages("abc12345-xyz", 2)));
        let second = render_viewer_to_string(&app);

        assert_eq!(first, second);
    }
}
