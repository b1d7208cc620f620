//! BookFinder core — book records, query building, result sorting, session state.

pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod session;
pub mod sort;

pub use config::{AppConfig, CatalogConfig, UiConfig};
pub use error::{CoreError, ExitCode, Result};
pub use models::{Book, SearchResponse};
pub use query::{DEFAULT_LIMIT, SearchRequest};
pub use session::{SearchSession, SessionEvent};
pub use sort::{SortKey, sort_books};
