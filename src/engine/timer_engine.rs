//! Countdown state machine and its control surface
//!
//! ```text
//! Idle -> Running <-> Paused
//!           |           |
//!           v           v
//!       Finished     Stopped   (stop is accepted from Idle, Running and Paused)
//! ```
//!
//! Control calls never block: they update the shared countdown under a lock and
//! wake the tick loop through its command channel. `stop` returns at once; the
//! tick loop then delivers `on_stopped` as its last act, and `join` waits for it
//! to exit.

use std::sync::{Arc, Mutex, MutexGuard};
use tokio::{runtime::Handle, sync::mpsc, task::JoinHandle};
use tracing::{error, info, warn};

use crate::{
    error::{Result, TimerError},
    state::{Countdown, TimerState},
    tasks::{tick_loop, Command},
    time::TimerDuration,
};

use super::CountdownObserver;

/// State shared between the engine and its tick loop
#[derive(Debug)]
pub(crate) struct EngineInner {
    pub(crate) countdown: Countdown,
    pub(crate) commands: Option<mpsc::UnboundedSender<Command>>,
}

impl EngineInner {
    /// Move to `next` and tell the tick loop about it in one step
    fn switch(&mut self, next: TimerState, command: Command) {
        self.countdown.state = next;
        if let Some(commands) = &self.commands {
            if commands.send(command).is_err() {
                warn!("Tick loop is gone, {:?} not delivered", command);
            }
        }
    }
}

/// Single-use countdown engine.
///
/// One engine runs one countdown; once it is finished or stopped it is discarded.
pub struct TimerEngine {
    inner: Arc<Mutex<EngineInner>>,
    observer: Arc<dyn CountdownObserver>,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl TimerEngine {
    /// Create an idle engine reporting to `observer`
    pub fn new(observer: Arc<dyn CountdownObserver>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(EngineInner {
                countdown: Countdown::new(),
                commands: None,
            })),
            observer,
            worker: Mutex::new(None),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, EngineInner>> {
        self.inner.lock().map_err(|_| TimerError::StatePoisoned)
    }

    /// Get the current lifecycle phase
    pub fn state(&self) -> Result<TimerState> {
        Ok(self.lock()?.countdown.state)
    }

    /// Get a copy of the current countdown
    pub fn snapshot(&self) -> Result<Countdown> {
        Ok(self.lock()?.countdown)
    }

    /// Load `duration` and launch the tick loop on the current tokio runtime.
    pub fn start(&self, duration: TimerDuration) -> Result<()> {
        let runtime = Handle::try_current().map_err(|_| TimerError::NoRuntime)?;

        let mut inner = self.lock()?;
        let state = inner.countdown.state;
        if state != TimerState::Idle {
            return Err(TimerError::AlreadyStarted(state));
        }

        let (tx, rx) = mpsc::unbounded_channel();
        inner.countdown = Countdown {
            state: TimerState::Running,
            total_seconds: duration.as_secs(),
            remaining_seconds: duration.as_secs(),
        };
        inner.commands = Some(tx);
        drop(inner);

        info!("Starting countdown of {}", duration);
        let task = runtime.spawn(tick_loop(
            Arc::clone(&self.inner),
            rx,
            Arc::clone(&self.observer),
        ));

        let mut worker = self.worker.lock().map_err(|_| TimerError::StatePoisoned)?;
        *worker = Some(task);
        Ok(())
    }

    /// Hold the countdown. Pausing an already paused countdown is rejected.
    pub fn pause(&self) -> Result<()> {
        let mut inner = self.lock()?;
        Self::pause_locked(&mut inner)
    }

    pub fn resume(&self) -> Result<()> {
        let mut inner = self.lock()?;
        Self::resume_locked(&mut inner)
    }

    /// Pause when running, resume when paused. Returns the resulting state.
    pub fn toggle_pause(&self) -> Result<TimerState> {
        let mut inner = self.lock()?;
        let state = inner.countdown.state;
        match state {
            TimerState::Running => Self::pause_locked(&mut inner)?,
            TimerState::Paused => Self::resume_locked(&mut inner)?,
            from => {
                return Err(TimerError::InvalidTransition {
                    from,
                    action: "toggle pause",
                })
            }
        }
        Ok(inner.countdown.state)
    }

    /// Stop the countdown from any non-terminal state.
    ///
    /// Returns immediately. For a started engine the tick loop delivers
    /// `on_stopped` and exits; await `join` to observe the exit. An engine
    /// that was never started reports `on_stopped` from this call.
    pub fn stop(&self) -> Result<()> {
        let mut inner = self.lock()?;
        let state = inner.countdown.state;
        match state {
            TimerState::Idle => {
                inner.countdown.state = TimerState::Stopped;
                drop(inner);
                info!("Idle countdown stopped");
                self.observer.on_stopped();
            }
            TimerState::Running | TimerState::Paused => {
                inner.switch(TimerState::Stopped, Command::Stop);
            }
            from => {
                return Err(TimerError::InvalidTransition {
                    from,
                    action: "stop",
                })
            }
        }
        Ok(())
    }

    /// Wait for the tick loop to exit. Returns at once if it was never started
    /// or has already been joined.
    pub async fn join(&self) {
        let task = match self.worker.lock() {
            Ok(mut worker) => worker.take(),
            Err(_) => {
                error!("Worker handle lock poisoned");
                None
            }
        };

        if let Some(task) = task {
            if let Err(e) = task.await {
                error!("Tick loop task failed: {}", e);
            }
        }
    }

    fn pause_locked(inner: &mut EngineInner) -> Result<()> {
        let state = inner.countdown.state;
        match state {
            TimerState::Running => {
                let remaining_seconds = inner.countdown.remaining_seconds;
                inner.switch(TimerState::Paused, Command::Pause { remaining_seconds });
                info!("Countdown paused");
                Ok(())
            }
            from => Err(TimerError::InvalidTransition {
                from,
                action: "pause",
            }),
        }
    }

    fn resume_locked(inner: &mut EngineInner) -> Result<()> {
        let state = inner.countdown.state;
        match state {
            TimerState::Paused => {
                let remaining_seconds = inner.countdown.remaining_seconds;
                inner.switch(TimerState::Running, Command::Resume { remaining_seconds });
                info!("Countdown resumed");
                Ok(())
            }
            from => Err(TimerError::InvalidTransition {
                from,
                action: "resume",
            }),
        }
    }
}

impl Drop for TimerEngine {
    fn drop(&mut self) {
        // Closing the command channel makes a live tick loop stop on its own.
        if let Ok(mut inner) = self.inner.lock() {
            inner.commands.take();
        }
    }
}
