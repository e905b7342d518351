//! Diagnostic sinks: where failing assertions report themselves.

use crate::error::Result;
use crate::message::Message;
use std::cell::RefCell;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::rc::Rc;

/// Collaborator receiving failure diagnostics.
///
/// Every failing assertion emits exactly one block in the fixed layout
/// `[FAILED] <rendered message>`. The default sink writes to stderr;
/// injecting a different implementation lets a host test suite capture or
/// redirect diagnostic text.
pub trait DiagnosticSink {
    /// Reports one failed assertion.
    fn failure(&mut self, message: &Message);
}

impl DiagnosticSink for Box<dyn DiagnosticSink> {
    fn failure(&mut self, message: &Message) {
        (**self).failure(message);
    }
}

/// Lets several chains share one sink within a single thread.
impl<S: DiagnosticSink> DiagnosticSink for Rc<RefCell<S>> {
    fn failure(&mut self, message: &Message) {
        self.borrow_mut().failure(message);
    }
}

/// Renders the diagnostic block for one failure, without trailing newline.
pub fn render_failure(message: &Message) -> String {
    format!("[FAILED] {message}")
}

/// Default sink: synchronous writes to stderr.
///
/// Write errors are ignored — losing a diagnostic line must not turn a
/// counted assertion failure into a process abort.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn failure(&mut self, message: &Message) {
        let stderr = std::io::stderr();
        let _ = writeln!(stderr.lock(), "{}", render_failure(message));
    }
}

/// Capturing sink for tests.
///
/// Clones share the same buffer, so a test can keep a handle while the
/// scenario owns another. Single-threaded by design, like the chains that
/// feed it.
///
/// # Examples
///
/// ```
/// use gwt_core::{MemorySink, Scenario};
///
/// let sink = MemorySink::new();
/// let chain = Scenario::with_sink("t", sink.clone()).then(false);
///
/// assert_eq!(chain.failure_count(), 1);
/// assert_eq!(sink.captured(), vec!["[FAILED] TEST t\n  THEN #1".to_string()]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    captured: Rc<RefCell<Vec<String>>>,
}

impl MemorySink {
    /// Creates an empty capturing sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all diagnostic blocks captured so far.
    pub fn captured(&self) -> Vec<String> {
        self.captured.borrow().clone()
    }

    /// Number of blocks captured.
    pub fn len(&self) -> usize {
        self.captured.borrow().len()
    }

    /// True if nothing has been captured.
    pub fn is_empty(&self) -> bool {
        self.captured.borrow().is_empty()
    }
}

impl DiagnosticSink for MemorySink {
    fn failure(&mut self, message: &Message) {
        self.captured.borrow_mut().push(render_failure(message));
    }
}

/// Sink appending diagnostic blocks to a file.
pub struct FileSink {
    out: File,
}

impl FileSink {
    /// Opens `path` for appending, creating it if missing.
    ///
    /// # Errors
    ///
    /// Returns `GwtError::Io` if the file cannot be opened.
    pub fn create(path: &Path) -> Result<Self> {
        let out = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { out })
    }
}

impl DiagnosticSink for FileSink {
    fn failure(&mut self, message: &Message) {
        let _ = writeln!(self.out, "{}", render_failure(message));
    }
}
