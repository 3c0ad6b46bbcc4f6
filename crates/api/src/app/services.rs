use std::sync::Arc;

use souq_engine::{CatalogQuery, CatalogWriter};
use souq_store::MemoryCatalogStore;

/// Shared application services, wired once at startup and handed to handlers
/// through an `Extension` layer.
///
/// The raw store is exposed alongside the engine because user administration
/// talks to it directly; the engine only covers the catalog.
pub struct AppServices {
    pub store: Arc<MemoryCatalogStore>,
    pub query: CatalogQuery<Arc<MemoryCatalogStore>>,
    pub writer: CatalogWriter<Arc<MemoryCatalogStore>>,
}

pub fn build_services() -> AppServices {
    let store = Arc::new(MemoryCatalogStore::new());
    AppServices {
        query: CatalogQuery::new(Arc::clone(&store)),
        writer: CatalogWriter::new(Arc::clone(&store)),
        store,
    }
}
