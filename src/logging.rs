//! Log pane backend
//!
//! A [`log::Log`] implementation that keeps recent records in memory for the
//! log pane and can tee them to a file. The terminal is owned by the UI, so
//! nothing is written to stdout or stderr.

use std::collections::VecDeque;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

pub const DEFAULT_SCROLLBACK: usize = 500;

/// One line of the log pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    /// `HH:MM:SS`, local time
    pub time: String,
    pub level: Level,
    pub message: String,
}

impl std::fmt::Display for LogLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.time, self.message)
    }
}

/// Bounded, append-only scrollback shared between the logger and the UI
#[derive(Debug)]
pub struct LogBuffer {
    lines: Mutex<VecDeque<LogLine>>,
    capacity: usize,
    /// Bumped on every append so the UI can tell when to redraw
    generation: AtomicU64,
    file: Mutex<Option<File>>,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: Mutex::new(VecDeque::with_capacity(capacity.min(1024))),
            capacity: capacity.max(1),
            generation: AtomicU64::new(0),
            file: Mutex::new(None),
        }
    }

    /// Also append every line to `path`
    pub fn tee_to(&self, path: &Path) -> io::Result<()> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        *lock(&self.file) = Some(file);
        Ok(())
    }

    pub fn push(&self, level: Level, message: String) {
        let line = LogLine {
            time: Local::now().format("%H:%M:%S").to_string(),
            level,
            message,
        };

        if let Some(file) = lock(&self.file).as_mut() {
            // A failing log file must not take the UI down
            let _ = writeln!(file, "{} {:<5} {}", line.time, line.level, line.message);
        }

        let mut lines = lock(&self.lines);
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
        self.generation.fetch_add(1, Ordering::Release);
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// The newest `count` lines, oldest first
    pub fn tail(&self, count: usize) -> Vec<LogLine> {
        let lines = lock(&self.lines);
        let skip = lines.len().saturating_sub(count);
        lines.iter().skip(skip).cloned().collect()
    }

    pub fn len(&self) -> usize {
        lock(&self.lines).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

/// Logger feeding a [`LogBuffer`]
pub struct LogPane {
    buffer: Arc<LogBuffer>,
    level: LevelFilter,
}

impl LogPane {
    pub fn new(buffer: Arc<LogBuffer>, level: LevelFilter) -> Self {
        Self { buffer, level }
    }

    /// Install as the global logger
    pub fn install(self) -> Result<(), SetLoggerError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for LogPane {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.buffer.push(record.level(), record.args().to_string());
        }
    }

    fn flush(&self) {
        if let Some(file) = lock(&self.buffer.file).as_mut() {
            let _ = file.flush();
        }
    }
}

/// Level after applying `-v` flags on top of the configured one
pub fn effective_level(configured: LevelFilter, verbose: u8) -> LevelFilter {
    match verbose {
        0 => configured,
        1 => configured.max(LevelFilter::Debug),
        _ => LevelFilter::Trace,
    }
}
