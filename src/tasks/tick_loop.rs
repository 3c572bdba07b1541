//! Countdown tick loop background task

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};
use tokio::{
    sync::mpsc,
    time::{sleep_until, Instant},
};
use tracing::{debug, error, info};

use crate::{
    engine::{timer_engine::EngineInner, CountdownObserver},
    error::{Result, TimerError},
    state::TimerState,
    time::format,
};

/// Cadence of the countdown
pub const TICK: Duration = Duration::from_secs(1);

/// Control requests from the engine to its tick loop.
///
/// The engine updates the shared state first and sends the command while still
/// holding the lock, so the loop never sees a state change without its command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Command {
    Pause { remaining_seconds: u64 },
    Resume { remaining_seconds: u64 },
    Stop,
}

/// Background task that counts the shared countdown down once per second.
///
/// Every notification for a started engine comes from here, ending with exactly
/// one `on_finished` or `on_stopped`.
pub(crate) async fn tick_loop(
    shared: Arc<Mutex<EngineInner>>,
    mut commands: mpsc::UnboundedReceiver<Command>,
    observer: Arc<dyn CountdownObserver>,
) {
    let total = match shared.lock() {
        Ok(inner) => inner.countdown.total_seconds,
        Err(_) => {
            error!("Countdown state lock poisoned before the tick loop started");
            observer.on_stopped();
            return;
        }
    };

    info!("Starting tick loop for {}", format(total));
    observer.on_started(total);

    // `None` while paused. `carry` is what was left of the interrupted second.
    let mut deadline = Some(Instant::now() + TICK);
    let mut carry = TICK;

    loop {
        tokio::select! {
            biased;

            command = commands.recv() => match command {
                Some(Command::Pause { remaining_seconds }) => {
                    if let Some(due) = deadline.take() {
                        carry = due.saturating_duration_since(Instant::now());
                    }
                    debug!("Tick loop paused at {} ({:?} left in current second)",
                           format(remaining_seconds), carry);
                    observer.on_paused(remaining_seconds);
                }
                Some(Command::Resume { remaining_seconds }) => {
                    deadline = Some(Instant::now() + carry);
                    debug!("Tick loop resumed at {}", format(remaining_seconds));
                    observer.on_resumed(remaining_seconds);
                }
                Some(Command::Stop) => {
                    info!("Countdown stopped");
                    observer.on_stopped();
                    return;
                }
                None => {
                    // Engine dropped without an explicit stop
                    info!("Engine released, stopping countdown");
                    if let Ok(mut inner) = shared.lock() {
                        if !inner.countdown.state.is_terminal() {
                            inner.countdown.state = TimerState::Stopped;
                        }
                    }
                    observer.on_stopped();
                    return;
                }
            },

            _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                match decrement(&shared) {
                    Ok(Some(remaining)) => {
                        debug!("Tick: {} remaining", format(remaining));
                        observer.on_tick(remaining);
                        if remaining == 0 {
                            info!("Countdown finished");
                            observer.on_finished();
                            return;
                        }
                        deadline = deadline.map(|due| due + TICK);
                        carry = TICK;
                    }
                    Ok(None) => {
                        // Paused or stopped since the sleep began; the queued
                        // command is handled on the next iteration.
                    }
                    Err(e) => {
                        error!("Tick loop aborted: {}", e);
                        observer.on_stopped();
                        return;
                    }
                }
            }
        }
    }
}

/// Take one second off a running countdown, returning the new remaining time.
///
/// Returns `None` without touching anything when the countdown is not running.
fn decrement(shared: &Mutex<EngineInner>) -> Result<Option<u64>> {
    let mut inner = shared.lock().map_err(|_| TimerError::StatePoisoned)?;
    let countdown = &mut inner.countdown;

    if countdown.state != TimerState::Running {
        return Ok(None);
    }

    countdown.remaining_seconds = countdown.remaining_seconds.saturating_sub(1);
    if countdown.remaining_seconds == 0 {
        countdown.state = TimerState::Finished;
    }

    Ok(Some(countdown.remaining_seconds))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Countdown;

    fn inner_with(state: TimerState, remaining_seconds: u64) -> Mutex<EngineInner> {
        Mutex::new(EngineInner {
            countdown: Countdown {
                state,
                total_seconds: 10,
                remaining_seconds,
            },
            commands: None,
        })
    }

    #[test]
    fn decrement_counts_down_running_countdown() {
        let shared = inner_with(TimerState::Running, 5);
        assert_eq!(decrement(&shared).unwrap(), Some(4));
        assert_eq!(shared.lock().unwrap().countdown.state, TimerState::Running);
    }

    #[test]
    fn decrement_to_zero_finishes() {
        let shared = inner_with(TimerState::Running, 1);
        assert_eq!(decrement(&shared).unwrap(), Some(0));
        assert_eq!(shared.lock().unwrap().countdown.state, TimerState::Finished);
    }

    #[test]
    fn decrement_leaves_paused_and_stopped_alone() {
        for state in [TimerState::Paused, TimerState::Stopped] {
            let shared = inner_with(state, 5);
            assert_eq!(decrement(&shared).unwrap(), None);
            assert_eq!(shared.lock().unwrap().countdown.remaining_seconds, 5);
        }
    }
}
