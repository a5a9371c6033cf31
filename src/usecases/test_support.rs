//! In-memory port implementations shared by the use case tests.

use crate::domain::{CellContent, DomainError, Notification};
use crate::ports::{ClockPort, NotifierPort, RunLogPort, SheetGateway};
use chrono::NaiveDate;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default)]
pub struct RecordingRunLog {
    entries: Mutex<Vec<String>>,
}

impl RecordingRunLog {
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }

    pub fn count_containing(&self, needle: &str) -> usize {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.contains(needle))
            .count()
    }
}

#[async_trait::async_trait]
impl RunLogPort for RecordingRunLog {
    async fn record(&self, message: &str) {
        self.entries.lock().unwrap().push(message.to_string());
    }
}

/// Replays queued results, one per attempt. Fails once the script runs out.
#[derive(Default)]
pub struct ScriptedSheet {
    script: Mutex<VecDeque<Result<CellContent, DomainError>>>,
    calls: AtomicUsize,
}

impl ScriptedSheet {
    pub fn new(script: Vec<Result<CellContent, DomainError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn returning(text: &str) -> Self {
        Self::new(vec![Ok(CellContent(text.to_string()))])
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl SheetGateway for ScriptedSheet {
    async fn read_first_cell(&self, _url: &str) -> Result<CellContent, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(DomainError::Fetch("waiting for selector `table` timed out".into())))
    }
}

#[derive(Default)]
pub struct CountingNotifier {
    sent: Mutex<Vec<Notification>>,
    fail: bool,
}

impl CountingNotifier {
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl NotifierPort for CountingNotifier {
    async fn send(&self, notification: &Notification) -> Result<String, DomainError> {
        self.sent.lock().unwrap().push(notification.clone());
        if self.fail {
            Err(DomainError::Notify("535 5.7.139 Authentication unsuccessful".into()))
        } else {
            Ok("250 2.0.0 OK".to_string())
        }
    }
}

pub struct FixedClock(pub NaiveDate);

impl ClockPort for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
