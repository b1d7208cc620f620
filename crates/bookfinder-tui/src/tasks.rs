use std::sync::Arc;

use bookfinder_catalog::CatalogClient;
use bookfinder_core::SearchRequest;
use tokio::sync::mpsc::UnboundedSender;

use crate::event::AppEvent;

/// Message shown for any search failure; the cause goes to the log.
pub const SEARCH_FAILED_MESSAGE: &str = "Failed to search books. Please try again.";

/// Run one search in the background and report the outcome over the
/// event channel. The response stays tagged with its generation so a
/// superseded search can never overwrite a newer one.
pub fn spawn_search(
    tx: UnboundedSender<AppEvent>,
    client: Arc<CatalogClient>,
    generation: u64,
    request: SearchRequest,
) {
    tokio::spawn(async move {
        let result = client.search(&request).await.map_err(|e| {
            tracing::warn!(error = %e, "search failed");
            SEARCH_FAILED_MESSAGE.to_string()
        });
        let _ = tx.send(AppEvent::SearchLoaded { generation, result });
    });
}
