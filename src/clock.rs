//! Clock/Greeting
//!
//! Derives the displayed time, date and greeting from wall-clock time.
//! Nothing here is persisted and nothing can fail.

use chrono::{DateTime, Local, TimeZone, Timelike};
use serde::Serialize;
use std::future::Future;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};

/// Greeting for the current part of the day
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Greeting {
    Morning,
    Afternoon,
    Evening,
}

impl Greeting {
    pub fn as_str(&self) -> &'static str {
        match self {
            Greeting::Morning => "Good morning",
            Greeting::Afternoon => "Good afternoon",
            Greeting::Evening => "Good evening",
        }
    }
}

impl std::fmt::Display for Greeting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `[0,12)` morning, `[12,17)` afternoon, `[17,24)` evening
pub fn greeting_for_hour(hour: u32) -> Greeting {
    match hour {
        0..=11 => Greeting::Morning,
        12..=16 => Greeting::Afternoon,
        _ => Greeting::Evening,
    }
}

/// Everything the clock widget displays
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ClockReading {
    /// e.g. `09:05 AM`
    pub time: String,
    /// e.g. `Monday, October 19, 2026`
    pub date: String,
    pub greeting: String,
}

impl ClockReading {
    /// Reading for an arbitrary instant in any timezone
    pub fn at<Tz>(now: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        Self {
            time: now.format("%I:%M %p").to_string(),
            date: now.format("%A, %B %-d, %Y").to_string(),
            greeting: greeting_for_hour(now.hour()).to_string(),
        }
    }

    /// Reading for the local wall clock
    pub fn now() -> Self {
        Self::at(&Local::now())
    }
}

/// Run `on_tick` once immediately and then every `period`.
///
/// The task runs until the returned handle is aborted.
pub fn spawn_ticker<F, Fut>(period: Duration, mut on_tick: F) -> JoinHandle<()>
where
    F: FnMut(ClockReading) -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send,
{
    tokio::spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            // First tick completes immediately
            ticker.tick().await;
            on_tick(ClockReading::now()).await;
        }
    })
}
