use crate::cards::build_cards;
use crate::view_model::{AppViewModel, DetailView, GalleryView, EMPTY_FEED_MESSAGE};
use crate::{detail, facts, FeedRecord};

pub type RequestId = u64;

/// Everything the gallery page knows: the current items list, what the grid
/// shows, and which record (if any) the modal is presenting.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    items: Vec<FeedRecord>,
    gallery: GalleryView,
    detail: Option<DetailView>,
    fact: Option<&'static str>,
    last_request_id: RequestId,
    pending_requests: usize,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            gallery: self.gallery.clone(),
            detail: self.detail.clone(),
            fact: self.fact,
            loading: self.pending_requests > 0,
        }
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn current_items(&self) -> &[FeedRecord] {
        &self.items
    }

    pub fn is_modal_open(&self) -> bool {
        self.detail.is_some()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.detail.as_ref().map(|detail| detail.index)
    }

    pub fn gallery(&self) -> &GalleryView {
        &self.gallery
    }

    pub fn detail(&self) -> Option<&DetailView> {
        self.detail.as_ref()
    }

    pub(crate) fn seed_fact(&mut self, seed: u64) {
        self.fact = Some(facts::pick(seed));
        self.mark_dirty();
    }

    /// Replaces the grid with a single placeholder line.
    pub fn show_message(&mut self, text: impl Into<String>) {
        self.gallery = GalleryView::Message(text.into());
        self.mark_dirty();
    }

    /// Stores `items` as the current items list and rebuilds the grid.
    ///
    /// An empty list only swaps the grid for the "no images" placeholder;
    /// the previous items are left as they were.
    pub fn render_items(&mut self, items: Vec<FeedRecord>) {
        if items.is_empty() {
            self.show_message(EMPTY_FEED_MESSAGE);
            return;
        }

        // A stale index would point into the old list.
        self.detail = None;
        self.gallery = GalleryView::Cards(build_cards(&items));
        self.items = items;
        self.mark_dirty();
    }

    /// Opens the modal on record `index`. Out-of-range indices are ignored.
    pub fn open_detail(&mut self, index: usize) -> bool {
        let Some(record) = self.items.get(index) else {
            return false;
        };
        self.detail = Some(detail::present(index, record));
        self.mark_dirty();
        true
    }

    /// Closes the modal and drops its media, which also stops playback.
    pub fn close_detail(&mut self) -> bool {
        if self.detail.take().is_none() {
            return false;
        }
        self.mark_dirty();
        true
    }

    pub(crate) fn begin_request(&mut self) -> RequestId {
        self.last_request_id += 1;
        self.pending_requests += 1;
        self.mark_dirty();
        self.last_request_id
    }

    pub(crate) fn finish_request(&mut self) {
        self.pending_requests = self.pending_requests.saturating_sub(1);
        self.mark_dirty();
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
