//! Observer hooks for table reads.
//!
//! [`super::read_table`] reports every outcome to an optional [`IngestionObserver`]. On success the
//! observer receives [`IngestionStats`], which records the inferred kind of every column, so a
//! caller can spot a column that unexpectedly came back categorical (for example a numeric column
//! with one blank cell).
//!
//! [`LogObserver`] is the usual sink: it forwards events to the [`log`] facade and leaves output
//! to whatever logger the application installs. [`StdErrObserver`] is a dependency-free fallback
//! for scripts, and [`CompositeObserver`] fans out to several observers.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::IngestionError;
use crate::frame::DataFrame;
use crate::types::ColumnKind;

use super::unified::TableFormat;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IngestionSeverity {
    Info,
    /// Non-fatal.
    Warning,
    /// The read failed because of the input data.
    Error,
    /// The read failed because the file could not be accessed.
    Critical,
}

impl IngestionSeverity {
    /// The `log` level events of this severity are emitted at.
    pub fn level(self) -> log::Level {
        match self {
            Self::Info => log::Level::Info,
            Self::Warning => log::Level::Warn,
            Self::Error | Self::Critical => log::Level::Error,
        }
    }
}

/// Which file was read and how.
#[derive(Debug, Clone)]
pub struct IngestionContext {
    pub path: PathBuf,
    pub format: TableFormat,
}

impl fmt::Display for IngestionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} table {}", self.format, self.path.display())
    }
}

/// Name and inferred kind of one column of a freshly read table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSummary {
    pub name: String,
    pub kind: ColumnKind,
}

/// Shape and column kinds of a successfully read table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestionStats {
    pub rows: usize,
    /// One entry per column, in table order.
    pub columns: Vec<ColumnSummary>,
}

impl IngestionStats {
    pub fn from_frame(df: &DataFrame) -> Self {
        Self {
            rows: df.rows(),
            columns: df
                .columns()
                .map(|c| ColumnSummary {
                    name: c.name.clone(),
                    kind: c.kind(),
                })
                .collect(),
        }
    }

    pub fn cols(&self) -> usize {
        self.columns.len()
    }

    /// Number of columns inferred as `kind`.
    pub fn count(&self, kind: ColumnKind) -> usize {
        self.columns.iter().filter(|c| c.kind == kind).count()
    }

    /// Names of the categorical columns, in table order.
    pub fn categorical_names(&self) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .filter(|c| c.kind == ColumnKind::Categorical)
            .map(|c| c.name.as_str())
    }
}

impl fmt::Display for IngestionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rows x {} cols ({} numeric, {} categorical)",
            self.rows,
            self.cols(),
            self.count(ColumnKind::Numeric),
            self.count(ColumnKind::Categorical)
        )
    }
}

/// Receives read outcomes. Callbacks run synchronously on the reading thread.
pub trait IngestionObserver: Send + Sync {
    fn on_success(&self, _ctx: &IngestionContext, _stats: &IngestionStats) {}

    fn on_failure(&self, _ctx: &IngestionContext, _severity: IngestionSeverity, _error: &IngestionError) {}

    /// Called after [`Self::on_failure`] when the severity meets the caller's alert threshold.
    /// Forwards to `on_failure` unless overridden.
    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &IngestionError) {
        self.on_failure(ctx, severity, error)
    }
}

/// Forwards read events to the [`log`] facade.
///
/// Successes go to `info` with the table shape, and the column kinds follow at `debug`. Failures
/// use [`IngestionSeverity::level`]. Alerts are always logged at `error` and prefixed `ALERT`.
#[derive(Debug, Clone, Copy)]
pub struct LogObserver {
    target: &'static str,
}

impl LogObserver {
    pub const DEFAULT_TARGET: &'static str = "rust_tabular_ml::ingestion";

    /// Log under `target` instead of [`Self::DEFAULT_TARGET`].
    pub fn with_target(target: &'static str) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &'static str {
        self.target
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::with_target(Self::DEFAULT_TARGET)
    }
}

impl IngestionObserver for LogObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: &IngestionStats) {
        log::info!(target: self.target, "read {ctx}: {stats}");
        if log::log_enabled!(target: self.target, log::Level::Debug) {
            let kinds: Vec<String> = stats
                .columns
                .iter()
                .map(|c| format!("{}={:?}", c.name, c.kind))
                .collect();
            log::debug!(target: self.target, "columns of {ctx}: {}", kinds.join(", "));
        }
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &IngestionError) {
        log::log!(target: self.target, severity.level(), "[{severity:?}] failed to read {ctx}: {error}");
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &IngestionError) {
        log::error!(target: self.target, "ALERT [{severity:?}] failed to read {ctx}: {error}");
    }
}

/// Prints one line per event to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdErrObserver;

impl IngestionObserver for StdErrObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: &IngestionStats) {
        eprintln!("[read] {ctx}: {stats}");
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &IngestionError) {
        eprintln!("[read][{severity:?}] {ctx}: {error}");
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &IngestionError) {
        eprintln!("[read][ALERT][{severity:?}] {ctx}: {error}");
    }
}

/// Fans every callback out to its members, in insertion order.
#[derive(Default, Clone)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn IngestionObserver>>,
}

impl CompositeObserver {
    pub fn new(observers: Vec<Arc<dyn IngestionObserver>>) -> Self {
        Self { observers }
    }

    /// Add `observer` after the existing members.
    pub fn with(mut self, observer: impl IngestionObserver + 'static) -> Self {
        self.observers.push(Arc::new(observer));
        self
    }

    pub fn push(&mut self, observer: Arc<dyn IngestionObserver>) {
        self.observers.push(observer);
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl FromIterator<Arc<dyn IngestionObserver>> for CompositeObserver {
    fn from_iter<I: IntoIterator<Item = Arc<dyn IngestionObserver>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("members", &self.observers.len())
            .finish()
    }
}

impl IngestionObserver for CompositeObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: &IngestionStats) {
        self.observers.iter().for_each(|o| o.on_success(ctx, stats));
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &IngestionError) {
        self.observers.iter().for_each(|o| o.on_failure(ctx, severity, error));
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &IngestionError) {
        self.observers.iter().for_each(|o| o.on_alert(ctx, severity, error));
    }
}
