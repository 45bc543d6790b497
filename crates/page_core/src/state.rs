use std::collections::BTreeSet;

use crate::view_model::PageViewModel;
use crate::{Document, ElementId, MOVIE_INPUT, RESPONSE_OUTPUT};

pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    document: Document,
    next_request_id: RequestId,
    in_flight: BTreeSet<RequestId>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_document(Document::movie_page())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from a caller-provided document instead of the movie page.
    pub fn with_document(document: Document) -> Self {
        Self {
            document,
            next_request_id: 1,
            in_flight: BTreeSet::new(),
            dirty: false,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub(crate) fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn view(&self) -> PageViewModel {
        PageViewModel {
            movie_input: self
                .document
                .value(&ElementId::from(MOVIE_INPUT))
                .ok()
                .map(ToOwned::to_owned),
            response_html: self
                .document
                .inner_html(&ElementId::from(RESPONSE_OUTPUT))
                .ok()
                .map(ToOwned::to_owned),
            in_flight: self.in_flight.len(),
            dirty: self.dirty,
        }
    }

    pub fn in_flight(&self) -> impl Iterator<Item = RequestId> + '_ {
        self.in_flight.iter().copied()
    }

    /// Returns whether anything visible changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn begin_request(&mut self) -> RequestId {
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.in_flight.insert(request_id);
        self.mark_dirty();
        request_id
    }

    pub(crate) fn finish_request(&mut self, request_id: RequestId) {
        if self.in_flight.remove(&request_id) {
            self.mark_dirty();
        }
    }
}
