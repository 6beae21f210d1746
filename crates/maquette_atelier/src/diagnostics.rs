//! Injectable diagnostics.
//!
//! The playground never writes to process-wide output on its own. It reports
//! through a [`Diagnostics`] implementation handed to it at construction,
//! [`NoopDiagnostics`] unless the host says otherwise.

use std::cell::RefCell;
use std::rc::Rc;

/// Diagnostic severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Debug,
    Warn,
    Error,
}

/// Sink for playground diagnostics.
pub trait Diagnostics {
    fn emit(&self, severity: Severity, message: &str);

    #[inline]
    fn debug(&self, message: &str) {
        self.emit(Severity::Debug, message);
    }

    #[inline]
    fn warn(&self, message: &str) {
        self.emit(Severity::Warn, message);
    }

    #[inline]
    fn error(&self, message: &str) {
        self.emit(Severity::Error, message);
    }
}

impl<D: Diagnostics + ?Sized> Diagnostics for &D {
    #[inline]
    fn emit(&self, severity: Severity, message: &str) {
        (**self).emit(severity, message);
    }
}

impl<D: Diagnostics + ?Sized> Diagnostics for Box<D> {
    #[inline]
    fn emit(&self, severity: Severity, message: &str) {
        (**self).emit(severity, message);
    }
}

impl<D: Diagnostics + ?Sized> Diagnostics for Rc<D> {
    #[inline]
    fn emit(&self, severity: Severity, message: &str) {
        (**self).emit(severity, message);
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDiagnostics;

impl Diagnostics for NoopDiagnostics {
    #[inline]
    fn emit(&self, _severity: Severity, _message: &str) {}
}

/// Forwards diagnostics to `tracing`.
///
/// Debug messages are only forwarded when `debug` is set; warnings and
/// errors always are.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics {
    pub debug: bool,
}

impl TracingDiagnostics {
    #[inline]
    pub fn new(debug: bool) -> Self {
        Self { debug }
    }
}

impl Diagnostics for TracingDiagnostics {
    fn emit(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Debug if self.debug => {
                tracing::debug!(target: "maquette::playground", "{}", message)
            }
            Severity::Debug => {}
            Severity::Warn => tracing::warn!(target: "maquette::playground", "{}", message),
            Severity::Error => tracing::error!(target: "maquette::playground", "{}", message),
        }
    }
}

/// A recorded diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub severity: Severity,
    pub message: String,
}

/// Keeps every diagnostic in memory so callers can inspect them.
#[derive(Debug, Default)]
pub struct MemoryDiagnostics {
    records: RefCell<Vec<Record>>,
}

impl MemoryDiagnostics {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all records so far.
    pub fn records(&self) -> Vec<Record> {
        self.records.borrow().clone()
    }

    /// Messages of one severity, in emission order.
    pub fn messages(&self, severity: Severity) -> Vec<String> {
        self.records
            .borrow()
            .iter()
            .filter(|r| r.severity == severity)
            .map(|r| r.message.clone())
            .collect()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }
}

impl Diagnostics for MemoryDiagnostics {
    fn emit(&self, severity: Severity, message: &str) {
        self.records.borrow_mut().push(Record {
            severity,
            message: message.to_string(),
        });
    }
}
