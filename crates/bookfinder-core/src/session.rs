use crate::models::{Book, SearchResponse};
use crate::sort::{SortKey, sort_books};

/// Discrete transitions of the search UI state. Each one produces a whole
/// new [`SearchSession`]; individual fields are never mutated in place.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    SearchStarted { generation: u64 },
    SearchSucceeded { generation: u64, response: SearchResponse },
    SearchFailed { generation: u64, message: String },
    SortChanged(SortKey),
    BookSelected(usize),
    BookDeselected,
}

/// One coherent snapshot of the search state: the fetched result set, the
/// sorted view over it, loading/error flags, and the active selection.
///
/// Success and failure events carry the generation of the search they
/// answer; a response for a superseded generation is dropped, so the
/// latest submitted search always wins.
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    books: Vec<Book>,
    visible: Vec<Book>,
    num_found: u64,
    loading: bool,
    error: Option<String>,
    has_searched: bool,
    sort_key: SortKey,
    selected: Option<Book>,
    generation: u64,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// The fetched set in remote (relevance) order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// The fetched set under the active sort key.
    pub fn visible(&self) -> &[Book] {
        &self.visible
    }

    /// Total matches reported by the catalog; may exceed `books().len()`.
    pub fn num_found(&self) -> u64 {
        self.num_found
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_searched(&self) -> bool {
        self.has_searched
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn selected(&self) -> Option<&Book> {
        self.selected.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// A completed search that matched nothing. Distinct from the state
    /// before any search was attempted.
    pub fn no_matches(&self) -> bool {
        self.has_searched && !self.loading && self.error.is_none() && self.books.is_empty()
    }

    /// Apply one event, producing the next snapshot.
    pub fn apply(&self, event: SessionEvent) -> SearchSession {
        let mut next = self.clone();
        match event {
            SessionEvent::SearchStarted { generation } => {
                next.generation = generation;
                next.loading = true;
                next.error = None;
                next.has_searched = true;
                next.selected = None;
            }
            SessionEvent::SearchSucceeded { generation, response } => {
                if generation != self.generation {
                    return next;
                }
                next.loading = false;
                next.error = None;
                next.num_found = response.num_found;
                next.sort_key = SortKey::Relevance;
                next.visible = response.docs.clone();
                next.books = response.docs;
                next.selected = None;
            }
            SessionEvent::SearchFailed { generation, message } => {
                if generation != self.generation {
                    return next;
                }
                // Previous results and sort order stay on screen.
                next.loading = false;
                next.error = Some(message);
            }
            SessionEvent::SortChanged(key) => {
                next.sort_key = key;
                next.visible = sort_books(&next.books, key);
            }
            SessionEvent::BookSelected(index) => {
                next.selected = next.visible.get(index).cloned();
            }
            SessionEvent::BookDeselected => {
                next.selected = None;
            }
        }
        next
    }
}
