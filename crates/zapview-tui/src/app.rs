//! Application state and update logic for the zapview TUI.
//!
//! The three data slots the viewer works with (conversation list, selected
//! conversation, error banner) live in [`App`] and are only ever mutated
//! through the transition functions below. The event loop owns the `App`
//! and interprets the [`Effect`]s these transitions request.

use crate::event::Action;
use tracing::{debug, error};
use zapview_api::{ApiError, Conversation};

/// Banner text for a failed conversation-list fetch.
pub const LIST_ERROR: &str = "Erro ao carregar conversas";

/// Banner text for a failed conversation-detail fetch.
pub const DETAIL_ERROR: &str = "Erro ao carregar detalhes da conversa";

/// A detail fetch the event loop should issue.
///
/// The sequence number is compared against the latest one when the response
/// arrives; an in-flight fetch is never cancelled, its result is simply
/// discarded if a newer selection was made meanwhile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRequest {
    pub id: String,
    pub seq: u64,
}

/// Side effect requested by a state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Re-fetch the conversation list.
    FetchList,
    /// Fetch one conversation's detail.
    FetchDetail(DetailRequest),
}

/// Application state.
#[derive(Debug, Default)]
pub struct App {
    /// Whether the app should quit.
    pub should_quit: bool,

    /// Whether the help overlay is visible.
    pub show_help: bool,

    /// Conversation list as of the last successful list fetch.
    pub conversations: Vec<Conversation>,

    /// Currently selected conversation, with its full message snapshot.
    pub selected: Option<Conversation>,

    /// Localized error banner, if any.
    pub error: Option<String>,

    /// Highlighted row in the list pane.
    pub cursor: usize,

    /// Whether a list fetch is in flight.
    pub list_loading: bool,

    /// Whether a detail fetch is in flight.
    pub detail_loading: bool,

    /// Scroll offset for the messages pane.
    pub message_scroll: usize,

    /// Tick counter for the loading spinner.
    pub tick: usize,

    /// Latest detail request sequence number.
    detail_seq: u64,
}

impl App {
    /// Create the initial state. The mount-time list fetch is issued by the
    /// event loop right after construction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle an action, returning the effect the loop should perform.
    pub fn handle_action(&mut self, action: Action) -> Effect {
        // Any key closes the help overlay first.
        if self.show_help {
            if action != Action::None {
                self.show_help = false;
            }
            return Effect::None;
        }

        match action {
            Action::Quit => {
                self.should_quit = true;
                Effect::None
            }
            Action::Help => {
                self.show_help = true;
                Effect::None
            }
            Action::Refresh => {
                self.list_loading = true;
                Effect::FetchList
            }
            Action::Up => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
                Effect::None
            }
            Action::Down => {
                if self.cursor + 1 < self.conversations.len() {
                    self.cursor += 1;
                }
                Effect::None
            }
            Action::Select => match self.begin_detail_fetch() {
                Some(request) => Effect::FetchDetail(request),
                None => Effect::None,
            },
            Action::ScrollUp => {
                self.message_scroll = self.message_scroll.saturating_sub(1);
                Effect::None
            }
            Action::ScrollDown => {
                self.message_scroll = self.message_scroll.saturating_add(1);
                Effect::None
            }
            Action::None => Effect::None,
        }
    }

    /// Apply a completed list fetch.
    ///
    /// On success the stored list is replaced in full and the error banner
    /// is cleared. On failure the previous list is left unchanged.
    pub fn apply_list(&mut self, result: Result<Vec<Conversation>, ApiError>) {
        self.list_loading = false;
        match result {
            Ok(conversations) => {
                self.conversations = conversations;
                if self.cursor >= self.conversations.len() {
                    self.cursor = self.conversations.len().saturating_sub(1);
                }
                self.error = None;
            }
            Err(err) => {
                error!(%err, "conversation list fetch failed");
                self.error = Some(LIST_ERROR.to_string());
            }
        }
    }

    /// Start a detail fetch for the conversation under the cursor.
    ///
    /// Every call is an unconditional fresh fetch, including re-selecting
    /// the current conversation; there is no memoization.
    pub fn begin_detail_fetch(&mut self) -> Option<DetailRequest> {
        let conversation = self.conversations.get(self.cursor)?;
        self.detail_seq += 1;
        self.detail_loading = true;
        Some(DetailRequest {
            id: conversation.id.clone(),
            seq: self.detail_seq,
        })
    }

    /// Apply a completed detail fetch.
    ///
    /// Responses for anything but the latest request are stale and
    /// discarded, so the last-clicked conversation wins regardless of
    /// response ordering.
    pub fn apply_detail(&mut self, seq: u64, result: Result<Conversation, ApiError>) {
        if seq != self.detail_seq {
            debug!(seq, latest = self.detail_seq, "discarding stale detail response");
            return;
        }
        self.detail_loading = false;
        match result {
            Ok(conversation) => {
                self.selected = Some(conversation);
                self.message_scroll = 0;
                self.error = None;
            }
            Err(err) => {
                error!(%err, "conversation detail fetch failed");
                self.error = Some(DETAIL_ERROR.to_string());
            }
        }
    }

    /// Id of the currently selected conversation, for list-row marking.
    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_ref().map(|c| c.id.as_str())
    }

    /// Increment the tick counter (drives the loading spinner).
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }
}
