//! Iteration records and the sinks that receive them.

use serde::{Deserialize, Serialize};

/// One completed iteration step: its index and the estimate it started from.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct IterationRecord {
    pub index: usize,
    pub estimate: f64,
}

impl IterationRecord {
    pub fn new(index: usize, estimate: f64) -> Self {
        Self { index, estimate }
    }
}

/// Receives iteration records in index order.
pub trait TraceSink {
    fn record(&mut self, record: IterationRecord);
}

impl TraceSink for Vec<IterationRecord> {
    fn record(&mut self, record: IterationRecord) {
        self.push(record);
    }
}

impl<S: TraceSink + ?Sized> TraceSink for &mut S {
    fn record(&mut self, record: IterationRecord) {
        (**self).record(record);
    }
}

/// Discards every record.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTrace;

impl TraceSink for NoTrace {
    fn record(&mut self, _record: IterationRecord) {}
}

/// Forwards records to the `log` facade at trace level.
#[derive(Clone, Copy, Debug)]
pub struct LogTrace {
    label: &'static str,
}

impl LogTrace {
    pub fn new(label: &'static str) -> Self {
        Self { label }
    }
}

impl TraceSink for LogTrace {
    fn record(&mut self, record: IterationRecord) {
        log::trace!("{}\t{}\t{}", self.label, record.index, record.estimate);
    }
}

/// Adapts an `FnMut(IterationRecord)` callback into a sink.
pub struct FnTrace<F>(pub F);

impl<F> TraceSink for FnTrace<F>
where
    F: FnMut(IterationRecord),
{
    fn record(&mut self, record: IterationRecord) {
        (self.0)(record);
    }
}
