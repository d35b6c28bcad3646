use std::io::{IsTerminal, Write};
use std::ops::ControlFlow;

use clap::Args;
use countdown_core::{Clock, Config, CountdownSession, SystemClock, Ticker};
use tracing::{debug, info};

use super::TargetArgs;
use crate::view::View;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

#[derive(Args, Debug)]
pub struct WatchArgs {
    #[command(flatten)]
    pub target: TargetArgs,
    /// Skip the completion celebration
    #[arg(long)]
    pub no_celebrate: bool,
    /// Keep ticking after the target is reached (stop with Ctrl-C)
    #[arg(long)]
    pub keep_running: bool,
}

pub async fn run(args: WatchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let target = args.target.resolve(&config)?;
    let locale = args.target.locale(&config)?;
    let view = View::new(&target, locale, &config);
    let celebrate = config.celebration.enabled && !args.no_celebrate;
    let keep_running = args.keep_running;
    let fancy = std::io::stdout().is_terminal();

    let clock = SystemClock;
    let mut session = CountdownSession::new(target);

    let mut ticker = Ticker::spawn(config.cadence(), move || {
        let tick = session.tick(clock.now());
        let mut out = std::io::stdout().lock();

        let mut written = if fancy {
            write!(out, "{CLEAR_SCREEN}{}", view.frame(&tick.snapshot))
        } else {
            writeln!(out, "{}", view.line(&tick.snapshot))
        };
        if let Some(event) = &tick.event {
            debug!(?event, "countdown transition");
            if event.is_completion() && celebrate {
                let seed = tick.snapshot.sample.timestamp_millis() as u64;
                written = written.and_then(|_| writeln!(out, "\n{}", view.celebration(seed)));
            }
        }
        if written.and_then(|_| out.flush()).is_err() {
            // stdout closed; nobody is watching anymore.
            return ControlFlow::Break(());
        }

        if session.is_complete() && !keep_running {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });

    tokio::select! {
        _ = ticker.finished() => {}
        signal = tokio::signal::ctrl_c() => {
            signal?;
            info!("interrupted");
        }
    }
    ticker.stop();
    Ok(())
}
