use chrono::{DateTime, FixedOffset, Utc};
use clap::Args;
use countdown_core::countdown::parse_timestamp;
use countdown_core::{
    format_target, Clock, Config, CountdownSession, Event, ManualClock, ProgressBar, SystemClock,
};
use serde::Serialize;

use super::TargetArgs;

#[derive(Args, Debug)]
pub struct StatusArgs {
    #[command(flatten)]
    pub target: TargetArgs,
    /// Session start used for progress (defaults to the sample instant)
    #[arg(long)]
    pub start: Option<String>,
    /// Sample instant instead of the current time, RFC 3339
    #[arg(long)]
    pub at: Option<String>,
}

#[derive(Serialize)]
struct StatusReport {
    #[serde(flatten)]
    snapshot: Event,
    target: DateTime<FixedOffset>,
    timezone: &'static str,
    target_display: String,
    /// Clamped for display; `progress` stays raw.
    percent: u8,
}

pub fn run(args: StatusArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let target = args.target.resolve(&config)?;
    let locale = args.target.locale(&config)?;

    let clock: Box<dyn Clock> = match &args.at {
        Some(at) => Box::new(ManualClock::new(parse_timestamp(at)?.with_timezone(&Utc))),
        None => Box::new(SystemClock),
    };
    let sample = clock.now();
    let start = match &args.start {
        Some(start) => parse_timestamp(start)?.with_timezone(&Utc),
        None => sample,
    };

    let mut session = CountdownSession::with_start(target.clone(), start);
    let tick = session.tick(sample);

    let report = StatusReport {
        snapshot: tick.snapshot.to_event(),
        target: *target.at(),
        timezone: target.timezone().name(),
        target_display: format_target(&target, locale),
        percent: ProgressBar::from_ratio(tick.snapshot.progress).percent(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
