use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::Arc;

use tokio::task::AbortHandle;

use pokedex_core::{Filters, Generation, Item, ItemRef, Page};

use crate::catalog::Catalog;
use crate::config::CatalogConfig;
use crate::error::IntegrationError;

/// A non-blocking handle to an in-flight async request.
/// Call `try_recv()` from a render loop to poll for results without blocking.
///
/// Dropping the handle abandons the request: the background task is aborted
/// and any outstanding upstream calls are dropped with it.
pub struct PendingRequest<T> {
    receiver: mpsc::Receiver<Result<T, IntegrationError>>,
    task: Option<AbortHandle>,
}

impl<T> PendingRequest<T> {
    fn new(receiver: mpsc::Receiver<Result<T, IntegrationError>>, task: AbortHandle) -> Self {
        Self {
            receiver,
            task: Some(task),
        }
    }

    /// Non-blocking check for the result. Returns `None` if still pending.
    pub fn try_recv(&self) -> Option<Result<T, IntegrationError>> {
        self.receiver.try_recv().ok()
    }

    /// Blocking wait for the result.
    pub fn wait(self) -> Result<T, IntegrationError> {
        self.receiver
            .recv()
            .map_err(|_| IntegrationError::Network("Channel closed".into()))?
    }
}

impl<T> Drop for PendingRequest<T> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Facade for all catalog queries.
/// Owns a background tokio runtime and dispatches async work via channels.
pub struct CatalogClient {
    runtime: tokio::runtime::Runtime,
    catalog: Arc<Catalog>,
    online: Arc<AtomicBool>,
}

impl CatalogClient {
    /// Create a client with a background runtime. One worker drives every
    /// request; the work is I/O-bound.
    pub fn new(config: CatalogConfig) -> Result<Self, IntegrationError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .map_err(|e| IntegrationError::Network(format!("Failed to create runtime: {}", e)))?;

        let catalog = Arc::new(Catalog::new(config)?);

        Ok(Self {
            runtime,
            catalog,
            online: Arc::new(AtomicBool::new(false)),
        })
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Fetch one page of results. Failures arrive as an empty page.
    pub fn list_items(&self, cursor: u32, filters: Filters) -> PendingRequest<Page> {
        let catalog = Arc::clone(&self.catalog);
        let online = Arc::clone(&self.online);

        self.spawn(async move {
            let result = catalog.try_list_items(cursor, &filters).await;
            record_reachability(&online, &result);
            Ok(Catalog::page_or_empty(result))
        })
    }

    /// Fetch a single item with its evolution chain.
    pub fn get_by_id(&self, item_ref: ItemRef) -> PendingRequest<Item> {
        let catalog = Arc::clone(&self.catalog);
        let online = Arc::clone(&self.online);

        self.spawn(async move {
            let result = catalog.get_by_id(item_ref).await;
            record_reachability(&online, &result);
            result
        })
    }

    /// List all generations.
    pub fn list_generations(&self) -> PendingRequest<Vec<Generation>> {
        let catalog = Arc::clone(&self.catalog);
        self.spawn(async move { catalog.list_generations().await })
    }

    /// Names of items carrying a type.
    pub fn type_members(&self, type_name: String) -> PendingRequest<Vec<String>> {
        let catalog = Arc::clone(&self.catalog);
        self.spawn(async move { catalog.type_members(&type_name).await })
    }

    /// Names of species introduced in a generation.
    pub fn generation_members(&self, generation: String) -> PendingRequest<Vec<String>> {
        let catalog = Arc::clone(&self.catalog);
        self.spawn(async move { catalog.generation_members(&generation).await })
    }

    /// Whether the upstream appears to be reachable (based on the last query).
    pub fn is_online(&self) -> bool {
        self.online.load(Ordering::Relaxed)
    }

    fn spawn<T, F>(&self, work: F) -> PendingRequest<T>
    where
        T: Send + 'static,
        F: std::future::Future<Output = Result<T, IntegrationError>> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let handle = self.runtime.spawn(async move {
            let _ = tx.send(work.await);
        });
        PendingRequest::new(rx, handle.abort_handle())
    }
}

fn record_reachability<T>(online: &AtomicBool, result: &Result<T, IntegrationError>) {
    match result {
        Ok(_) => online.store(true, Ordering::Relaxed),
        Err(IntegrationError::Offline) | Err(IntegrationError::Timeout) => online.store(false, Ordering::Relaxed),
        Err(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending<T>(receiver: mpsc::Receiver<Result<T, IntegrationError>>) -> PendingRequest<T> {
        PendingRequest { receiver, task: None }
    }

    #[test]
    fn test_pending_request_try_recv_none_then_result() {
        let (tx, rx) = mpsc::channel();
        let pending: PendingRequest<String> = pending(rx);

        assert!(pending.try_recv().is_none());

        tx.send(Ok("bulbasaur".to_string())).unwrap();

        let result = pending.try_recv();
        assert!(result.is_some());
        assert_eq!(result.unwrap().unwrap(), "bulbasaur");
    }

    #[test]
    fn test_pending_request_wait() {
        let (tx, rx) = mpsc::channel();
        let pending: PendingRequest<u32> = pending(rx);

        tx.send(Ok(42)).unwrap();
        assert_eq!(pending.wait().unwrap(), 42);
    }

    #[test]
    fn test_pending_request_closed_channel() {
        let (tx, rx) = mpsc::channel::<Result<u32, IntegrationError>>();
        drop(tx);
        let err = pending(rx).wait().unwrap_err();
        assert!(err.to_string().contains("Channel closed"));
    }

    #[test]
    fn test_record_reachability() {
        let online = AtomicBool::new(false);
        record_reachability::<()>(&online, &Ok(()));
        assert!(online.load(Ordering::Relaxed));

        record_reachability::<()>(&online, &Err(IntegrationError::NotFound { url: "x".into() }));
        assert!(online.load(Ordering::Relaxed));

        record_reachability::<()>(&online, &Err(IntegrationError::Offline));
        assert!(!online.load(Ordering::Relaxed));
    }

    #[test]
    fn test_dropping_pending_request_aborts_task() {
        let client = CatalogClient::new(CatalogConfig::default()).unwrap();
        let (started_tx, started_rx) = mpsc::channel();
        let (tx, rx) = mpsc::channel::<Result<(), IntegrationError>>();

        let handle = client.runtime.spawn(async move {
            let _ = started_tx.send(());
            tokio::time::sleep(std::time::Duration::from_secs(60)).await;
            let _ = tx.send(Ok(()));
        });
        let request = PendingRequest::new(rx, handle.abort_handle());

        started_rx.recv().unwrap();
        drop(request);

        let aborted = client.runtime.block_on(handle);
        assert!(aborted.unwrap_err().is_cancelled());
    }
}
