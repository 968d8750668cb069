//! Notification Emitter
//!
//! Transient user-visible messages. Every `emit` produces an independent
//! notification that is visible for `display`, then leaving for `exit`,
//! then gone. There is no queue and no rate limit.
//!
//! Expiry is timestamp-driven, so [`Notifier::active`] is correct even when
//! no runtime is available. Inside a tokio runtime each notification also
//! gets a task that drops it from memory once it has fully expired.

use crate::config::NotificationConfig;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::broadcast;
use uuid::Uuid;

/// Capacity of the subscriber channel
const EVENT_CAPACITY: usize = 64;

/// Notification severity
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// Lifecycle stage of a live notification
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Visible,
    Leaving,
}

/// An emitted notification
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub severity: Severity,
    pub created_at: DateTime<Utc>,
}

/// A notification as currently displayed
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ActiveNotification {
    pub id: Uuid,
    pub message: String,
    pub severity: Severity,
    pub phase: Phase,
}

/// Display timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTiming {
    pub display: Duration,
    pub exit: Duration,
}

impl Default for NotificationTiming {
    fn default() -> Self {
        Self {
            display: Duration::from_millis(3000),
            exit: Duration::from_millis(300),
        }
    }
}

impl From<&NotificationConfig> for NotificationTiming {
    fn from(config: &NotificationConfig) -> Self {
        Self {
            display: Duration::from_millis(config.display_ms),
            exit: Duration::from_millis(config.exit_ms),
        }
    }
}

impl NotificationTiming {
    /// Total lifetime of a notification
    pub fn total(&self) -> Duration {
        self.display + self.exit
    }

    /// Phase of a notification created at `created_at`, or `None` once gone
    pub fn phase_at(&self, created_at: DateTime<Utc>, now: DateTime<Utc>) -> Option<Phase> {
        let age = (now - created_at).to_std().unwrap_or(Duration::ZERO);
        if age < self.display {
            Some(Phase::Visible)
        } else if age < self.total() {
            Some(Phase::Leaving)
        } else {
            None
        }
    }
}

/// Shared handle to the live notification set
#[derive(Clone)]
pub struct Notifier {
    entries: Arc<Mutex<Vec<Notification>>>,
    timing: NotificationTiming,
    events: broadcast::Sender<Notification>,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(NotificationTiming::default())
    }
}

impl Notifier {
    pub fn new(timing: NotificationTiming) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
            timing,
            events,
        }
    }

    pub fn timing(&self) -> NotificationTiming {
        self.timing
    }

    /// Show a message and schedule its removal
    pub fn emit(&self, message: impl Into<String>, severity: Severity) -> Uuid {
        let id = self.emit_at(message, severity, Utc::now());

        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            let entries = Arc::clone(&self.entries);
            let lifetime = self.timing.total();
            handle.spawn(async move {
                tokio::time::sleep(lifetime).await;
                lock(&entries).retain(|n| n.id != id);
            });
        }

        id
    }

    /// Record a message created at `now` without scheduling removal
    pub fn emit_at(
        &self,
        message: impl Into<String>,
        severity: Severity,
        now: DateTime<Utc>,
    ) -> Uuid {
        let notification = Notification {
            id: Uuid::new_v4(),
            message: message.into(),
            severity,
            created_at: now,
        };
        let id = notification.id;

        tracing::info!(
            notification_id = %id,
            severity = ?severity,
            message = %notification.message,
            "Notification"
        );

        lock(&self.entries).push(notification.clone());
        // No subscribers is fine
        let _ = self.events.send(notification);

        id
    }

    pub fn info(&self, message: impl Into<String>) -> Uuid {
        self.emit(message, Severity::Info)
    }

    pub fn success(&self, message: impl Into<String>) -> Uuid {
        self.emit(message, Severity::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> Uuid {
        self.emit(message, Severity::Error)
    }

    /// Notifications still on screen at `now`, oldest first
    pub fn active(&self, now: DateTime<Utc>) -> Vec<ActiveNotification> {
        lock(&self.entries)
            .iter()
            .filter_map(|n| {
                self.timing
                    .phase_at(n.created_at, now)
                    .map(|phase| ActiveNotification {
                        id: n.id,
                        message: n.message.clone(),
                        severity: n.severity,
                        phase,
                    })
            })
            .collect()
    }

    /// Drop every notification that has fully expired at `now`
    pub fn prune(&self, now: DateTime<Utc>) -> usize {
        let mut entries = lock(&self.entries);
        let before = entries.len();
        entries.retain(|n| self.timing.phase_at(n.created_at, now).is_some());
        before - entries.len()
    }

    /// Number of notifications held in memory (including expired ones not yet pruned)
    pub fn len(&self) -> usize {
        lock(&self.entries).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Receive every notification emitted from now on
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.events.subscribe()
    }
}

fn lock(entries: &Mutex<Vec<Notification>>) -> MutexGuard<'_, Vec<Notification>> {
    entries.lock().unwrap_or_else(PoisonError::into_inner)
}
