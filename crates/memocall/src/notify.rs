//! Hit/miss notification sinks
//!
//! Every call that gets past key derivation produces exactly one outcome.

use std::io::{self, Write};
use std::sync::Arc;
use parking_lot::Mutex;

/// Line printed when a call is answered from the store
pub const HIT_MESSAGE: &str = "Getting from cache";

/// Line printed when a call runs the wrapped function
pub const MISS_MESSAGE: &str = "Calculating new result";

/// Whether a call found its key in the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Stored result returned
    Hit,
    /// Wrapped function invoked
    Miss,
}

impl Outcome {
    /// Fixed diagnostic line for this outcome
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Hit => HIT_MESSAGE,
            Outcome::Miss => MISS_MESSAGE,
        }
    }
}

/// Receives one outcome per memoized call
pub trait Notifier: Send + Sync {
    /// Report the outcome of a call
    fn notify(&self, outcome: Outcome);
}

impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    fn notify(&self, outcome: Outcome) {
        (**self).notify(outcome)
    }
}

/// Write the single diagnostic line for `outcome`
fn write_line<W: Write + ?Sized>(out: &mut W, outcome: Outcome) -> io::Result<()> {
    writeln!(out, "{}", outcome.message())?;
    out.flush()
}

/// Writes one outcome line per call to any `Write` sink
///
/// A failed write is dropped; the call result never depends on diagnostics.
#[derive(Debug, Default)]
pub struct Writer<W> {
    out: Mutex<W>,
}

impl<W: Write + Send> Writer<W> {
    /// Wrap a writer
    pub fn new(out: W) -> Self {
        Self { out: Mutex::new(out) }
    }

    /// Take the writer back
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl Writer<Vec<u8>> {
    /// Everything written so far, as text
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.out.lock()).into_owned()
    }
}

impl<W: Write + Send> Notifier for Writer<W> {
    fn notify(&self, outcome: Outcome) {
        let _ = write_line(&mut *self.out.lock(), outcome);
    }
}

/// Prints the outcome line to standard output (the default)
#[derive(Debug, Default, Clone, Copy)]
pub struct Stdout;

impl Notifier for Stdout {
    fn notify(&self, outcome: Outcome) {
        let _ = write_line(&mut io::stdout().lock(), outcome);
    }
}

/// Notifier a freshly built wrapper starts with
pub(crate) fn default_notifier() -> Box<dyn Notifier> {
    Box::new(Stdout)
}

/// Discards outcomes
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Notifier for Silent {
    fn notify(&self, _outcome: Outcome) {}
}

/// Keeps every outcome in memory, in call order
///
/// Share it with a wrapper through an `Arc` to inspect outcomes afterwards.
#[derive(Debug, Default)]
pub struct Recorder {
    outcomes: Mutex<Vec<Outcome>>,
}

impl Recorder {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// All outcomes seen so far
    pub fn outcomes(&self) -> Vec<Outcome> {
        self.outcomes.lock().clone()
    }

    /// Most recent outcome
    pub fn last(&self) -> Option<Outcome> {
        self.outcomes.lock().last().copied()
    }

    /// Number of hits seen
    pub fn hits(&self) -> usize {
        self.count(Outcome::Hit)
    }

    /// Number of misses seen
    pub fn misses(&self) -> usize {
        self.count(Outcome::Miss)
    }

    fn count(&self, outcome: Outcome) -> usize {
        self.outcomes.lock().iter().filter(|o| **o == outcome).count()
    }
}

impl Notifier for Recorder {
    fn notify(&self, outcome: Outcome) {
        self.outcomes.lock().push(outcome);
    }
}
