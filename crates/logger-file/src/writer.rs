//! The rotating buffered writer and its flush daemon.

use crate::config::FileSinkConfig;
use crate::error::{Error, Result};
use chrono::{Local, NaiveDate};
use daylog_logger::{LevelFilter, Record, Sink};
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use tokio::time::{MissedTickBehavior, interval};
use tracing::{error, warn};

/// The open file and the calendar date it belongs to.
///
/// Guarded as one unit: every append, flush, and rotation takes the same
/// lock, so a write never targets a half-replaced handle.
#[derive(Debug)]
struct ActiveFile {
    writer: BufWriter<File>,
    date: NaiveDate,
}

/// Rotating, buffered, newline-delimited JSON sink.
///
/// Writes go to `<prefix><YYYY-MM-DD>` inside the configured directory,
/// append-opened if present and created otherwise. The flush daemon spawned
/// by [`start`](Self::start) flushes the buffer every
/// `config.flush_interval` and swaps in the new day's file when the calendar
/// date advances; the write path itself never checks the date.
#[derive(Debug)]
pub struct FileSink {
    filter: Arc<LevelFilter>,
    active: Arc<Mutex<ActiveFile>>,
}

impl FileSink {
    /// Open (or create) today's log file and spawn the flush daemon.
    ///
    /// Must be called from within a tokio runtime. The daemon holds only a
    /// weak reference to the sink state and exits once the sink is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CreateDirectory`] when the log directory cannot be
    /// created and [`Error::SinkUnavailable`] when today's file can neither
    /// be append-opened nor created.
    pub fn start(config: FileSinkConfig, filter: Arc<LevelFilter>) -> Result<Self> {
        let today = Local::now().date_naive();
        let active = Arc::new(Mutex::new(open_active(&config, today)?));

        tokio::spawn(flush_daemon(config, Arc::downgrade(&active)));

        Ok(Self { filter, active })
    }
}

impl Sink for FileSink {
    fn log(&self, record: Record) {
        if !self.filter.enabled(record.level) {
            return;
        }

        // Serialized outside the lock; one write_all per record, so
        // concurrent lines never interleave.
        let mut line = match serde_json::to_vec(&record) {
            Ok(line) => line,
            Err(e) => {
                error!("dropping log record: {}", Error::from(e));
                return;
            }
        };
        line.push(b'\n');

        let mut active = lock_active(&self.active);
        if let Err(e) = active.writer.write_all(&line) {
            warn!("failed to append log record: {}", Error::from(e));
        }
    }

    fn flush(&self) {
        let mut active = lock_active(&self.active);
        if let Err(e) = active.writer.flush() {
            warn!("failed to flush log buffer: {}", Error::from(e));
        }
    }
}

/// Take the state lock even if a previous holder panicked; the guarded
/// writer and date stay valid regardless.
fn lock_active(active: &Mutex<ActiveFile>) -> MutexGuard<'_, ActiveFile> {
    active.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Append-open the file for `date`, creating the directory and the file as
/// needed, and wrap it in a fresh buffer.
fn open_active(config: &FileSinkConfig, date: NaiveDate) -> Result<ActiveFile> {
    let path = config.path_for(date);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| Error::CreateDirectory {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| Error::SinkUnavailable { path, source })?;

    Ok(ActiveFile {
        writer: BufWriter::with_capacity(config.buffer_size, file),
        date,
    })
}

/// One daemon tick: rotate if the calendar date advanced, then flush.
fn rotate_and_flush(active: &Mutex<ActiveFile>, config: &FileSinkConfig, today: NaiveDate) {
    let mut active = lock_active(active);

    if active.date != today {
        // Drain the old buffer into the old day's file before the swap.
        if let Err(e) = active.writer.flush() {
            warn!("failed to flush buffer of {}: {}", active.date, Error::from(e));
        }
        match open_active(config, today) {
            Ok(fresh) => *active = fresh,
            // Keep the stale handle; retried on the next tick.
            Err(e) => error!("log rotation failed: {e}"),
        }
    }

    if let Err(e) = active.writer.flush() {
        warn!("failed to flush log buffer: {}", Error::from(e));
    }
}

/// Background loop flushing the buffer and rotating the file on a fixed
/// cadence. Exits when the sink owning the state is dropped.
async fn flush_daemon(config: FileSinkConfig, active: Weak<Mutex<ActiveFile>>) {
    let mut ticker = interval(config.flush_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately.
    ticker.tick().await;

    loop {
        ticker.tick().await;
        let Some(active) = active.upgrade() else {
            break;
        };
        rotate_and_flush(&active, &config, Local::now().date_naive());
    }
}
