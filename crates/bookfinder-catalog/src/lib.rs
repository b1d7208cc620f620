//! BookFinder catalog — Open Library search client, detail fetch, cover URLs.

pub mod client;
pub mod covers;
pub mod error;
pub mod http;

pub use client::CatalogClient;
pub use covers::{CoverSize, cover_url};
pub use error::{CatalogError, Result};
