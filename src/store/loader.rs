use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use super::reader::JsonReader;
use super::view::{self, ViewParams};
use crate::direct::ReadTransport;
use crate::error::StoretypesError;
use crate::model::DatastoreTypeRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The response replaced the collection.
    Applied { seq: u64, count: usize },
    /// A newer load was issued before this one resolved; its result was dropped.
    Discarded { seq: u64 },
}

/// Passed to observers after the collection has been replaced.
#[derive(Debug, Clone)]
pub struct CollectionChanged {
    pub seq: u64,
    pub count: usize,
    pub loaded_at: DateTime<Utc>,
}

type Observer = Arc<dyn Fn(&CollectionChanged) + Send + Sync>;

struct LoaderState {
    records: Vec<DatastoreTypeRecord>,
    status: LoadStatus,
    loaded_at: Option<DateTime<Utc>>,
}

/// Client-side cache of datastore types backed by a remote read.
///
/// Only the most recently issued `load` may apply its result. The state lock is
/// never held across an await point.
pub struct TypeListLoader<T> {
    transport: T,
    reader: JsonReader,
    defaults: ViewParams,
    issued: AtomicU64,
    state: Mutex<LoaderState>,
    observers: Mutex<Vec<Observer>>,
}

impl<T: ReadTransport> TypeListLoader<T> {
    pub fn new(transport: T) -> Self {
        Self::with_reader(transport, JsonReader::default())
    }

    pub fn with_reader(transport: T, reader: JsonReader) -> Self {
        Self {
            transport,
            reader,
            defaults: ViewParams::default(),
            issued: AtomicU64::new(0),
            state: Mutex::new(LoaderState {
                records: Vec::new(),
                status: LoadStatus::Idle,
                loaded_at: None,
            }),
            observers: Mutex::new(Vec::new()),
        }
    }

    /// Register a hook run after every applied load.
    ///
    /// Hooks may subscribe further hooks; those first run on the next applied load.
    pub fn subscribe<F>(&self, observer: F)
    where
        F: Fn(&CollectionChanged) + Send + Sync + 'static,
    {
        lock(&self.observers).push(Arc::new(observer));
    }

    /// Dropping the returned future before it resolves puts the status back to
    /// `Loaded` or `Idle`, depending on whether a collection was ever applied.
    pub async fn load(&self) -> Result<LoadOutcome, StoretypesError> {
        let seq = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        lock(&self.state).status = LoadStatus::Loading;
        debug!(seq, "load issued");

        let mut in_flight = InFlight {
            state: &self.state,
            issued: &self.issued,
            seq,
            settled: false,
        };
        let result = self
            .transport
            .read()
            .await
            .and_then(|value| self.reader.read(&value));
        in_flight.settled = true;

        let latest = self.issued.load(Ordering::SeqCst);
        if seq != latest {
            debug!(seq, latest, "discarding stale load result");
            return Ok(LoadOutcome::Discarded { seq });
        }

        let response = match result {
            Ok(response) if response.success => response,
            Ok(response) => {
                return Err(self.fail(
                    seq,
                    StoretypesError::RemoteFailure {
                        message: response.message,
                    },
                ));
            }
            Err(err) => return Err(self.fail(seq, err)),
        };

        let count = response.data.len();
        let loaded_at = Utc::now();
        {
            let mut state = lock(&self.state);
            state.records = response.data;
            state.status = LoadStatus::Loaded;
            state.loaded_at = Some(loaded_at);
        }
        info!(seq, count, "datastore types loaded");

        self.notify(&CollectionChanged {
            seq,
            count,
            loaded_at,
        });
        Ok(LoadOutcome::Applied { seq, count })
    }

    fn fail(&self, seq: u64, err: StoretypesError) -> StoretypesError {
        warn!(seq, error = %err, "load failed; keeping previous collection");
        lock(&self.state).status = LoadStatus::Failed(err.to_string());
        err
    }

    fn notify(&self, event: &CollectionChanged) {
        let observers: Vec<Observer> = lock(&self.observers).clone();
        for observer in observers {
            observer(event);
        }
    }
}

impl<T> TypeListLoader<T> {
    /// The console's default view: ascending by name, enabled types only.
    pub fn get_sorted_filtered_view(&self) -> Vec<DatastoreTypeRecord> {
        self.view_with(&self.defaults)
    }

    pub fn view_with(&self, params: &ViewParams) -> Vec<DatastoreTypeRecord> {
        view::project(&lock(&self.state).records, params)
    }

    /// The raw collection in response order.
    pub fn records(&self) -> Vec<DatastoreTypeRecord> {
        lock(&self.state).records.clone()
    }

    pub fn status(&self) -> LoadStatus {
        lock(&self.state).status.clone()
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        lock(&self.state).loaded_at
    }
}

/// Resets a `Loading` status when the newest load is dropped mid-flight.
struct InFlight<'a> {
    state: &'a Mutex<LoaderState>,
    issued: &'a AtomicU64,
    seq: u64,
    settled: bool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.settled || self.issued.load(Ordering::SeqCst) != self.seq {
            return;
        }
        let mut state = lock(self.state);
        if state.status == LoadStatus::Loading {
            debug!(seq = self.seq, "load dropped before completion");
            state.status = if state.loaded_at.is_some() {
                LoadStatus::Loaded
            } else {
                LoadStatus::Idle
            };
        }
    }
}

fn lock<S>(mutex: &Mutex<S>) -> MutexGuard<'_, S> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
