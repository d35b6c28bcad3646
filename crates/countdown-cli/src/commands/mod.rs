pub mod config;
pub mod status;
pub mod watch;

use clap::Args;
use countdown_core::countdown::{parse_timestamp, parse_timezone};
use countdown_core::{Config, DisplayLocale, TargetInstant, DEFAULT_TARGET};

/// Target selection shared by `watch` and `status`.
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// Target instant, RFC 3339 with explicit offset
    #[arg(long, default_value = DEFAULT_TARGET)]
    pub target: String,
    /// IANA timezone the target is displayed in (defaults to config)
    #[arg(long)]
    pub timezone: Option<String>,
    /// Display locale: pt-BR or en-US (defaults to config)
    #[arg(long)]
    pub locale: Option<String>,
}

impl TargetArgs {
    pub fn resolve(&self, config: &Config) -> Result<TargetInstant, Box<dyn std::error::Error>> {
        let zone = match &self.timezone {
            Some(name) => parse_timezone(name)?,
            None => config.timezone()?,
        };
        let at = parse_timestamp(&self.target)?;
        Ok(TargetInstant::new(at, zone))
    }

    pub fn locale(&self, config: &Config) -> Result<DisplayLocale, Box<dyn std::error::Error>> {
        match &self.locale {
            Some(tag) => Ok(tag.parse::<DisplayLocale>()?),
            None => Ok(config.display.locale),
        }
    }
}
