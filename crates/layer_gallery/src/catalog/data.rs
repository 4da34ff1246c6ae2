//! Data sources for layer examples: shared static collections or deferred producers.
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::catalog::value::Record;

/// Signature of a deferred data producer.
pub type ProducerFn = dyn Fn() -> Vec<Record> + Send + Sync;

/// A labelled zero-argument producer for expensive sample data.
#[derive(Clone)]
pub struct Producer {
    label: String,
    f: Arc<ProducerFn>,
}

impl Producer {
    pub fn new<F>(label: impl Into<String>, f: F) -> Self
    where
        F: Fn() -> Vec<Record> + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            f: Arc::new(f),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn produce(&self) -> Vec<Record> {
        (self.f)()
    }
}

impl fmt::Debug for Producer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Producer")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Producer {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.f, &other.f)
    }
}

/// Where a layer example gets its records from.
#[derive(Clone, Debug, PartialEq)]
pub enum DataSource {
    /// An in-memory collection, shared between every resolution.
    Static(Arc<[Record]>),
    /// A producer invoked on every resolution. Scheduling and caching belong to the host.
    Deferred(Producer),
}

impl DataSource {
    pub fn from_records(records: impl Into<Arc<[Record]>>) -> Self {
        DataSource::Static(records.into())
    }

    pub fn empty() -> Self {
        DataSource::Static(Arc::from(Vec::<Record>::new()))
    }

    pub fn deferred<F>(label: impl Into<String>, f: F) -> Self
    where
        F: Fn() -> Vec<Record> + Send + Sync + 'static,
    {
        DataSource::Deferred(Producer::new(label, f))
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, DataSource::Deferred(_))
    }

    /// Producer label for deferred sources.
    pub fn label(&self) -> Option<&str> {
        match self {
            DataSource::Static(_) => None,
            DataSource::Deferred(p) => Some(p.label()),
        }
    }

    /// Number of records when known without producing them.
    pub fn len_hint(&self) -> Option<usize> {
        match self {
            DataSource::Static(records) => Some(records.len()),
            DataSource::Deferred(_) => None,
        }
    }

    /// Returns the records. Static sources hand back the same allocation every time.
    pub fn resolve(&self) -> Arc<[Record]> {
        match self {
            DataSource::Static(records) => Arc::clone(records),
            DataSource::Deferred(producer) => {
                let records = producer.produce();
                debug!(
                    "Produced {} records for '{}'.",
                    records.len(),
                    producer.label()
                );
                records.into()
            }
        }
    }
}
