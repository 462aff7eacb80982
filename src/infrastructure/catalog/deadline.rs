//! Deadline wrapper for catalog reads
//!
//! Each call runs on a short-lived worker thread; the caller waits at most
//! `timeout` for the answer. A call that misses the deadline is reported as
//! [`CatalogError::Timeout`] and its worker is left to finish on its own.
//!
//! Only reads are bounded. An abandoned mutation would still commit after
//! the caller was told it failed, so mutations always run to completion.

use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::domain::catalog::{Artist, ChildKind, Entity};
use crate::domain::ports::{CatalogSource, MutationSource};
use crate::error::{CatalogError, CatalogResult};

pub struct Deadline<S> {
    inner: Arc<S>,
    timeout: Duration,
}

impl<S> Deadline<S>
where
    S: Send + Sync + 'static,
{
    pub fn new(inner: Arc<S>, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    fn call<T, F>(&self, operation: &'static str, f: F) -> CatalogResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&S) -> CatalogResult<T> + Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        let (tx, rx) = mpsc::sync_channel(1);
        thread::Builder::new()
            .name(format!("catalog-{}", operation))
            .spawn(move || {
                let _ = tx.send(f(&inner));
            })?;

        match rx.recv_timeout(self.timeout) {
            Ok(result) => result,
            Err(mpsc::RecvTimeoutError::Timeout) => Err(CatalogError::Timeout {
                operation,
                after: self.timeout,
            }),
            Err(mpsc::RecvTimeoutError::Disconnected) => Err(CatalogError::Unavailable(format!(
                "{} worker exited without answering",
                operation
            ))),
        }
    }
}

impl<S> CatalogSource for Deadline<S>
where
    S: CatalogSource + 'static,
{
    fn list_followed_entities(&self) -> CatalogResult<Vec<Artist>> {
        self.call("list_followed_entities", |s| s.list_followed_entities())
    }

    fn list_child_entities(&self, parent_id: &str, kind: ChildKind) -> CatalogResult<Vec<Entity>> {
        let parent_id = parent_id.to_string();
        self.call("list_child_entities", move |s| {
            s.list_child_entities(&parent_id, kind)
        })
    }
}

/// Split a catalog into its read and mutation ports, bounding reads by
/// `timeout` when one is set
pub fn bounded_reads<S>(
    catalog: Arc<S>,
    timeout: Option<Duration>,
) -> (Arc<dyn CatalogSource>, Arc<dyn MutationSource>)
where
    S: CatalogSource + MutationSource + 'static,
{
    let mutations: Arc<dyn MutationSource> = catalog.clone();
    let reads: Arc<dyn CatalogSource> = match timeout {
        Some(timeout) => Arc::new(Deadline::new(catalog, timeout)),
        None => catalog,
    };
    (reads, mutations)
}
