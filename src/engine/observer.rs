//! Notification interface between the engine and the presentation layer

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::mpsc;
use tracing::debug;

/// Listener for countdown notifications.
///
/// For one engine, deliveries never overlap: zero or more ticks (with pause and
/// resume notices in between), then exactly one of `on_finished` or `on_stopped`.
pub trait CountdownObserver: Send + Sync {
    /// The tick loop is up and about to count down from `total_seconds`
    fn on_started(&self, _total_seconds: u64) {}

    fn on_tick(&self, remaining_seconds: u64);

    fn on_paused(&self, _remaining_seconds: u64) {}

    fn on_resumed(&self, _remaining_seconds: u64) {}

    fn on_finished(&self);

    fn on_stopped(&self);
}

/// A timestamped countdown notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    Started {
        total_seconds: u64,
        at: DateTime<Utc>,
    },
    Tick {
        remaining_seconds: u64,
        at: DateTime<Utc>,
    },
    Paused {
        remaining_seconds: u64,
        at: DateTime<Utc>,
    },
    Resumed {
        remaining_seconds: u64,
        at: DateTime<Utc>,
    },
    Finished {
        at: DateTime<Utc>,
    },
    Stopped {
        at: DateTime<Utc>,
    },
}

impl Event {
    /// Check if no further events follow this one
    pub fn is_terminal(&self) -> bool {
        matches!(self, Event::Finished { .. } | Event::Stopped { .. })
    }

    pub fn remaining_seconds(&self) -> Option<u64> {
        match self {
            Event::Started { total_seconds, .. } => Some(*total_seconds),
            Event::Tick {
                remaining_seconds, ..
            }
            | Event::Paused {
                remaining_seconds, ..
            }
            | Event::Resumed {
                remaining_seconds, ..
            } => Some(*remaining_seconds),
            Event::Finished { .. } => Some(0),
            Event::Stopped { .. } => None,
        }
    }
}

/// Observer that forwards every notification as an `Event` over a channel,
/// so the receiving side can render on its own task.
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    tx: mpsc::UnboundedSender<Event>,
}

impl ChannelObserver {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Event>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    fn forward(&self, event: Event) {
        if let Err(e) = self.tx.send(event) {
            debug!("Dropping countdown event, receiver is gone: {:?}", e.0);
        }
    }
}

impl CountdownObserver for ChannelObserver {
    fn on_started(&self, total_seconds: u64) {
        self.forward(Event::Started {
            total_seconds,
            at: Utc::now(),
        });
    }

    fn on_tick(&self, remaining_seconds: u64) {
        self.forward(Event::Tick {
            remaining_seconds,
            at: Utc::now(),
        });
    }

    fn on_paused(&self, remaining_seconds: u64) {
        self.forward(Event::Paused {
            remaining_seconds,
            at: Utc::now(),
        });
    }

    fn on_resumed(&self, remaining_seconds: u64) {
        self.forward(Event::Resumed {
            remaining_seconds,
            at: Utc::now(),
        });
    }

    fn on_finished(&self) {
        self.forward(Event::Finished { at: Utc::now() });
    }

    fn on_stopped(&self) {
        self.forward(Event::Stopped { at: Utc::now() });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_observer_forwards_in_order() {
        let (observer, mut rx) = ChannelObserver::new();
        observer.on_started(3);
        observer.on_tick(2);
        observer.on_paused(2);
        observer.on_resumed(2);
        observer.on_finished();

        let kinds: Vec<Option<u64>> = std::iter::from_fn(|| rx.try_recv().ok())
            .map(|e| e.remaining_seconds())
            .collect();
        assert_eq!(kinds, vec![Some(3), Some(2), Some(2), Some(2), Some(0)]);
    }

    #[test]
    fn closed_receiver_is_tolerated() {
        let (observer, rx) = ChannelObserver::new();
        drop(rx);
        observer.on_tick(1);
        observer.on_stopped();
    }

    #[test]
    fn events_serialize_with_type_tag() {
        let event = Event::Tick {
            remaining_seconds: 42,
            at: Utc::now(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "tick");
        assert_eq!(json["remaining_seconds"], 42);
        assert!(!event.is_terminal());

        let json = serde_json::to_value(Event::Stopped { at: Utc::now() }).unwrap();
        assert_eq!(json["type"], "stopped");
    }
}
