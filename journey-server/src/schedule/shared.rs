//! Build-once access to the schedule graph.
//!
//! The graph is either loaded eagerly at startup and handed over ready,
//! or loaded on first use. In the lazy case concurrent first callers all
//! wait on a single load; none of them can observe a partially built
//! graph.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::info;

use super::error::LoadError;
use super::graph::ScheduleGraph;
use super::loader::load_schedule;

/// A schedule graph that is initialised at most once.
#[derive(Debug)]
pub struct SharedSchedule {
    source: PathBuf,
    cell: OnceCell<Arc<ScheduleGraph>>,
}

impl SharedSchedule {
    /// Wrap an already built graph.
    pub fn ready(graph: ScheduleGraph) -> Self {
        Self {
            source: PathBuf::new(),
            cell: OnceCell::new_with(Some(Arc::new(graph))),
        }
    }

    /// Defer loading `source` until the first call to [`get`](Self::get).
    pub fn lazy(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            cell: OnceCell::new(),
        }
    }

    /// Load eagerly from `source`.
    pub fn load(source: impl AsRef<Path>) -> Result<Self, LoadError> {
        let graph = load_schedule(source)?;
        Ok(Self::ready(graph))
    }

    /// Whether the graph has been built.
    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }

    /// Return the graph, loading it first if this handle is lazy.
    ///
    /// A failed load leaves the handle unloaded, so a later call retries.
    pub async fn get(&self) -> Result<Arc<ScheduleGraph>, LoadError> {
        let graph = self
            .cell
            .get_or_try_init(|| async {
                info!(source = %self.source.display(), "Loading schedule on first use");
                let path = self.source.clone();
                let loaded = tokio::task::spawn_blocking(move || load_schedule(&path))
                    .await
                    .map_err(|e| LoadError::Interrupted {
                        path: self.source.clone(),
                        message: e.to_string(),
                    })??;
                Ok::<_, LoadError>(Arc::new(loaded))
            })
            .await?;

        Ok(Arc::clone(graph))
    }
}
