//! PPClock - a countdown timer for presentations
//!
//! This is the main entry point: collect settings, run the countdown, render it.

use std::{io, sync::Arc, time::Duration};
use tokio::{io::BufReader, runtime::Builder};
use tracing::{info, warn};

use ppclock::{
    config::Config,
    engine::{ChannelObserver, TimerEngine},
    error::TimerError,
    presentation::{parse_control, Display, InputDialog, CONTROLS_HELP},
    utils::shutdown_signal,
};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so they never tear the countdown line
    tracing_subscriber::fmt()
        .with_env_filter(format!("ppclock={}", config.log_level()))
        .with_writer(io::stderr)
        .init();

    info!("Starting ppclock v{}", env!("CARGO_PKG_VERSION"));

    let runtime = Builder::new_multi_thread().enable_all().build()?;
    let result = runtime.block_on(run(config));

    // A pending stdin read sits on the blocking pool and would hold shutdown forever
    runtime.shutdown_timeout(Duration::from_millis(100));
    result
}

async fn run(config: Config) -> anyhow::Result<()> {
    let preset_duration = config.preset_duration()?;
    let mut dialog = InputDialog::new(BufReader::new(tokio::io::stdin()), io::stdout());

    let Some(settings) = dialog.collect(preset_duration, config.font_size).await? else {
        info!("Setup cancelled, nothing to count down");
        return Ok(());
    };
    info!("Configuration: duration={}, font={}", settings.duration, settings.font);

    let (observer, mut events) = ChannelObserver::new();
    let engine = TimerEngine::new(Arc::new(observer));
    let mut display = Display::new(io::stdout(), settings.font, config.output_mode());

    engine.start(settings.duration)?;
    if !config.json {
        eprintln!("{}", CONTROLS_HELP);
    }

    let mut controls = dialog.into_lines();
    let mut controls_open = true;
    let mut signalled = false;
    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            event = events.recv() => {
                let Some(event) = event else { break };
                display.render(&event)?;
                if event.is_terminal() {
                    break;
                }
            }

            line = controls.next_line(), if controls_open => match line? {
                Some(line) => match parse_control(&line) {
                    Some(control) => {
                        if let Err(e) = control.apply(&engine) {
                            warn!("Control {:?} rejected: {}", control, e);
                        }
                    }
                    None => eprintln!("{}", CONTROLS_HELP),
                },
                None => {
                    info!("Control input closed, countdown continues");
                    controls_open = false;
                }
            },

            _ = &mut shutdown, if !signalled => {
                info!("Shutdown signal received");
                signalled = true;
                match engine.stop() {
                    Ok(()) | Err(TimerError::InvalidTransition { .. }) => {}
                    Err(e) => return Err(e.into()),
                }
            }
        }
    }

    engine.join().await;
    info!("Countdown complete");
    Ok(())
}
