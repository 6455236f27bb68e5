use crate::{FeedRecord, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Page mounted; seeds the fact banner.
    Started { fact_seed: u64 },
    /// User clicked "Get Space Images".
    FetchClicked,
    /// Engine delivered a decoded feed.
    FeedLoaded {
        request_id: RequestId,
        items: Vec<FeedRecord>,
    },
    /// Engine gave up on a fetch; detail was already logged.
    FeedFailed { request_id: RequestId },
    /// Pointer click on a card.
    CardActivated { index: usize },
    /// Key pressed while a card has focus.
    CardKeyPressed { index: usize, key: Key },
    BackdropClicked,
    CloseClicked,
    /// Key pressed anywhere on the page.
    KeyPressed(Key),
    NoOp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    Escape,
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    pub fn from_dom_key(name: &str) -> Self {
        match name {
            "Enter" => Key::Enter,
            " " | "Spacebar" => Key::Space,
            "Escape" | "Esc" => Key::Escape,
            _ => Key::Other,
        }
    }

    pub fn activates_card(self) -> bool {
        matches!(self, Key::Enter | Key::Space)
    }
}
