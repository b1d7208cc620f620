mod form;

pub use form::{FormField, SearchForm};

use std::sync::Arc;

use bookfinder_catalog::CatalogClient;
use bookfinder_core::{AppConfig, SearchRequest, SearchSession, SessionEvent, SortKey};
use tokio::sync::mpsc;

use crate::event::AppEvent;
use crate::tasks;
use crate::theme::NordTheme;

/// Input modes of the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Typing a free-text query.
    Query,
    /// Filling the advanced search form.
    Form,
    /// Navigating the result list.
    Results,
    /// Viewing one record in the detail popup.
    Detail,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Query => write!(f, "QUERY"),
            Self::Form => write!(f, "FORM"),
            Self::Results => write!(f, "RESULTS"),
            Self::Detail => write!(f, "DETAIL"),
        }
    }
}

/// Top-level TUI state. The search state itself lives in one
/// [`SearchSession`] snapshot that is replaced wholesale per event;
/// everything else here is input plumbing around it.
pub struct App {
    pub config: AppConfig,
    pub session: SearchSession,
    pub mode: Mode,
    pub query_input: String,
    pub form: SearchForm,
    pub selected_index: usize,
    pub status_message: String,
    pub sort_pending: bool,
    pub should_quit: bool,
    pub theme: NordTheme,

    client: Arc<CatalogClient>,
    tx: mpsc::UnboundedSender<AppEvent>,
    rx: mpsc::UnboundedReceiver<AppEvent>,
    next_generation: u64,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let client = Arc::new(CatalogClient::from_config(&config.catalog));
        Self {
            config,
            session: SearchSession::new(),
            mode: Mode::Query,
            query_input: String::new(),
            form: SearchForm::default(),
            selected_index: 0,
            status_message: String::new(),
            sort_pending: false,
            should_quit: false,
            theme: NordTheme::default(),
            client,
            tx,
            rx,
            next_generation: 0,
        }
    }

    /// The request the current input mode would submit.
    pub fn current_request(&self) -> SearchRequest {
        let limit = self.config.catalog.page_size;
        match self.mode {
            Mode::Form => self.form.to_request(limit),
            _ => SearchRequest {
                query: Some(self.query_input.clone()),
                limit: Some(limit),
                ..Default::default()
            },
        }
    }

    /// Validate and submit the current search. An all-empty request is
    /// rejected here and never reaches the builder.
    pub fn submit_search(&mut self) {
        let request = self.current_request();
        if !request.has_criteria() {
            self.status_message = "Enter at least one search term".to_string();
            return;
        }

        self.next_generation += 1;
        let generation = self.next_generation;
        self.session = self.session.apply(SessionEvent::SearchStarted { generation });
        self.selected_index = 0;
        self.mode = Mode::Results;
        self.status_message.clear();

        tasks::spawn_search(self.tx.clone(), Arc::clone(&self.client), generation, request);
    }

    /// Apply any async results that arrived since the last loop turn.
    pub fn drain_async(&mut self) {
        while let Ok(event) = self.rx.try_recv() {
            self.handle_async(event);
        }
    }

    fn handle_async(&mut self, event: AppEvent) {
        if let AppEvent::SearchLoaded { generation, result } = event {
            let session_event = match result {
                Ok(response) => SessionEvent::SearchSucceeded { generation, response },
                Err(message) => SessionEvent::SearchFailed { generation, message },
            };
            self.session = self.session.apply(session_event);
            if self.selected_index >= self.session.visible().len() {
                self.selected_index = 0;
            }
        }
    }

    pub fn set_sort(&mut self, key: SortKey) {
        self.session = self.session.apply(SessionEvent::SortChanged(key));
        self.selected_index = 0;
        self.status_message = format!("Sort: {}", key.label());
    }

    /// Open the detail popup on the highlighted record.
    pub fn select_current(&mut self) {
        if self.session.visible().is_empty() {
            return;
        }
        self.session = self
            .session
            .apply(SessionEvent::BookSelected(self.selected_index));
        if self.session.selected().is_some() {
            self.mode = Mode::Detail;
        }
    }

    pub fn close_detail(&mut self) {
        self.session = self.session.apply(SessionEvent::BookDeselected);
        self.mode = Mode::Results;
    }

    pub fn move_down(&mut self) {
        let len = self.session.visible().len();
        if len > 0 {
            self.selected_index = (self.selected_index + 1) % len;
        }
    }

    pub fn move_up(&mut self) {
        let len = self.session.visible().len();
        if len > 0 {
            self.selected_index = if self.selected_index == 0 {
                len - 1
            } else {
                self.selected_index - 1
            };
        }
    }

    pub fn jump_top(&mut self) {
        self.selected_index = 0;
    }

    pub fn jump_bottom(&mut self) {
        let len = self.session.visible().len();
        if len > 0 {
            self.selected_index = len - 1;
        }
    }
}
