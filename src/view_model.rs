//! # Health View Model
//!
//! Composes an [`InstanceFilter`] with the [`HealthPartitioner`] so the
//! display layer always reads up-to-date `filtered`, `healthy` and
//! `unhealthy` views.
//!
//! ## Freshness
//!
//! Every input change (new source, new query, or both in one
//! [`ViewUpdate`]) bumps the input generation. The memoized
//! [`ViewSnapshot`] carries the generation it was computed from; the view is
//! [`ViewState::Stale`] while the two differ.
//!
//! - Reads are lazy: reading a stale view recomputes it first.
//! - While observers are subscribed, recomputation is eager and each new
//!   snapshot is published to them.
//!
//! Inputs and memo live behind one lock and snapshots are swapped whole, so
//! no read can observe a view computed from a superseded query or source.
//! Snapshots are published to observers only after that lock is released,
//! so a receiver holding a borrow never stalls readers of the model.

use crate::config::HealthViewConfig;
use crate::filter::{FilterEngine, InstanceFilter};
use crate::health::{HealthPartitioner, HealthSummary, Partition};
use crate::logging::log_view_recompute;
use crate::models::{Instance, Query};
use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::watch;

/// Freshness of the memoized views relative to the current inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// An input changed since the last computation
    Stale,
    /// The memoized views match the current inputs
    Fresh,
}

/// Derived views computed from one generation of inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewSnapshot {
    pub generation: u64,
    pub query: Query,
    pub filtered: Vec<Instance>,
    pub partition: Partition,
}

impl ViewSnapshot {
    pub fn filtered(&self) -> &[Instance] {
        &self.filtered
    }

    pub fn healthy(&self) -> &[Instance] {
        &self.partition.healthy
    }

    pub fn unhealthy(&self) -> &[Instance] {
        &self.partition.unhealthy
    }

    pub fn summary(&self) -> HealthSummary {
        self.partition.summary()
    }
}

/// Batch of input changes applied as a single generation
#[derive(Debug, Clone, Default)]
pub struct ViewUpdate {
    pub source: Option<Vec<Instance>>,
    pub query: Option<Query>,
}

impl ViewUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, source: Vec<Instance>) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_query(mut self, query: Query) -> Self {
        self.query = Some(query);
        self
    }
}

#[derive(Debug)]
struct ViewInputs {
    source: Arc<Vec<Instance>>,
    query: Query,
    generation: u64,
    memo: Arc<ViewSnapshot>,
}

#[derive(Debug)]
pub struct HealthViewModel<F = FilterEngine> {
    filter: F,
    partitioner: HealthPartitioner,
    inputs: Mutex<ViewInputs>,
    publisher: watch::Sender<Arc<ViewSnapshot>>,
}

impl HealthViewModel<FilterEngine> {
    pub fn new() -> Self {
        Self::with_filter(FilterEngine::new(), Query::default())
    }

    /// View-model starting from the configured default query
    pub fn from_config(config: &HealthViewConfig) -> Self {
        Self::with_filter(FilterEngine::new(), config.default_query.clone())
    }
}

impl Default for HealthViewModel<FilterEngine> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: InstanceFilter> HealthViewModel<F> {
    pub fn with_filter(filter: F, query: Query) -> Self {
        let partitioner = HealthPartitioner::new();
        let source = Arc::new(Vec::new());
        let memo = Arc::new(compute(&filter, &partitioner, &source, &query, 0));
        let (publisher, _) = watch::channel(Arc::clone(&memo));

        Self {
            filter,
            partitioner,
            inputs: Mutex::new(ViewInputs {
                source,
                query,
                generation: 0,
                memo,
            }),
            publisher,
        }
    }

    /// Replace the source collection
    pub fn set_source(&self, source: Vec<Instance>) -> u64 {
        self.apply(ViewUpdate::new().with_source(source))
    }

    /// Replace the query; an identical query is not a change
    pub fn set_query(&self, query: Query) -> u64 {
        self.apply(ViewUpdate::new().with_query(query))
    }

    /// Apply a batch of input changes atomically and return the resulting
    /// generation
    pub fn apply(&self, update: ViewUpdate) -> u64 {
        let mut inputs = self.inputs.lock();
        let mut changed = false;

        if let Some(source) = update.source {
            inputs.source = Arc::new(source);
            changed = true;
        }
        if let Some(query) = update.query {
            if query != inputs.query {
                inputs.query = query;
                changed = true;
            }
        }

        let mut recomputed = None;
        if changed {
            inputs.generation += 1;
            tracing::trace!(generation = inputs.generation, "view inputs changed");
            if self.publisher.receiver_count() > 0 {
                recomputed = self.refresh(&mut inputs);
            }
        }

        let generation = inputs.generation;
        drop(inputs);

        if let Some(snapshot) = recomputed {
            self.publish(snapshot);
        }
        generation
    }

    pub fn query(&self) -> Query {
        self.inputs.lock().query.clone()
    }

    pub fn source(&self) -> Arc<Vec<Instance>> {
        Arc::clone(&self.inputs.lock().source)
    }

    pub fn generation(&self) -> u64 {
        self.inputs.lock().generation
    }

    pub fn state(&self) -> ViewState {
        let inputs = self.inputs.lock();
        if inputs.memo.generation == inputs.generation {
            ViewState::Fresh
        } else {
            ViewState::Stale
        }
    }

    /// Current derived views, recomputed first if stale
    pub fn snapshot(&self) -> Arc<ViewSnapshot> {
        let mut inputs = self.inputs.lock();
        let recomputed = self.refresh(&mut inputs);
        let snapshot = Arc::clone(&inputs.memo);
        drop(inputs);

        if let Some(recomputed) = recomputed {
            self.publish(recomputed);
        }
        snapshot
    }

    pub fn filtered(&self) -> Vec<Instance> {
        self.snapshot().filtered.clone()
    }

    pub fn healthy(&self) -> Vec<Instance> {
        self.snapshot().partition.healthy.clone()
    }

    pub fn unhealthy(&self) -> Vec<Instance> {
        self.snapshot().partition.unhealthy.clone()
    }

    /// Observe snapshots as inputs change.
    ///
    /// The receiver starts at the current fresh snapshot. While at least one
    /// receiver is alive every input change is recomputed and published.
    pub fn subscribe(&self) -> watch::Receiver<Arc<ViewSnapshot>> {
        let mut inputs = self.inputs.lock();
        let recomputed = self.refresh(&mut inputs);
        // Registered under the lock so every later input change sees a receiver
        let mut receiver = self.publisher.subscribe();
        drop(inputs);

        if let Some(snapshot) = recomputed {
            self.publish(snapshot);
            let _ = receiver.borrow_and_update();
        }
        receiver
    }

    pub fn subscriber_count(&self) -> usize {
        self.publisher.receiver_count()
    }

    /// Recompute the memo if it is stale. Returns the new snapshot so the
    /// caller can publish it once the inputs lock is released.
    fn refresh(&self, inputs: &mut ViewInputs) -> Option<Arc<ViewSnapshot>> {
        if inputs.memo.generation == inputs.generation {
            return None;
        }
        let snapshot = compute(
            &self.filter,
            &self.partitioner,
            &inputs.source,
            &inputs.query,
            inputs.generation,
        );
        inputs.memo = Arc::new(snapshot);
        Some(Arc::clone(&inputs.memo))
    }

    /// Must not be called with the inputs lock held: sending waits for
    /// receivers to release their borrows. Concurrent writers may publish
    /// out of order, so an older generation never replaces a newer one.
    fn publish(&self, snapshot: Arc<ViewSnapshot>) {
        self.publisher.send_if_modified(|current| {
            if snapshot.generation > current.generation {
                *current = snapshot;
                true
            } else {
                false
            }
        });
    }
}

fn compute<F: InstanceFilter>(
    filter: &F,
    partitioner: &HealthPartitioner,
    source: &[Instance],
    query: &Query,
    generation: u64,
) -> ViewSnapshot {
    let filtered = filter.filtered(source, query);
    let partition = partitioner.partition(&filtered);

    log_view_recompute(
        generation,
        query,
        source.len(),
        filtered.len(),
        partition.healthy.len(),
        partition.unhealthy.len(),
    );

    ViewSnapshot {
        generation,
        query: query.clone(),
        filtered,
        partition,
    }
}
