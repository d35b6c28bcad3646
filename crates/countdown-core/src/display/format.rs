use std::fmt;
use std::str::FromStr;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::countdown::TargetInstant;
use crate::error::ValidationError;

const PT_BR_WEEKDAYS: [&str; 7] = [
    "segunda-feira",
    "terça-feira",
    "quarta-feira",
    "quinta-feira",
    "sexta-feira",
    "sábado",
    "domingo",
];

const PT_BR_MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Locales the target can be rendered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayLocale {
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "en-US")]
    EnUs,
}

/// Static copy shown around the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub days: &'static str,
    pub hours: &'static str,
    pub minutes: &'static str,
    pub seconds: &'static str,
    pub almost_there: &'static str,
    pub until: &'static str,
}

impl DisplayLocale {
    pub fn tag(&self) -> &'static str {
        match self {
            DisplayLocale::PtBr => "pt-BR",
            DisplayLocale::EnUs => "en-US",
        }
    }

    pub fn labels(&self) -> Labels {
        match self {
            DisplayLocale::PtBr => Labels {
                days: "Dias",
                hours: "Horas",
                minutes: "Minutos",
                seconds: "Segundos",
                almost_there: "Quase lá…",
                until: "Até",
            },
            DisplayLocale::EnUs => Labels {
                days: "Days",
                hours: "Hours",
                minutes: "Minutes",
                seconds: "Seconds",
                almost_there: "Almost there…",
                until: "Until",
            },
        }
    }
}

impl fmt::Display for DisplayLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for DisplayLocale {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().replace('_', "-").to_ascii_lowercase().as_str() {
            "pt-br" | "pt" => Ok(DisplayLocale::PtBr),
            "en-us" | "en" => Ok(DisplayLocale::EnUs),
            _ => Err(ValidationError::UnsupportedLocale(s.to_string())),
        }
    }
}

/// Render the target in its own display timezone: full date, short time.
pub fn format_target(target: &TargetInstant, locale: DisplayLocale) -> String {
    let local = target.local();
    match locale {
        DisplayLocale::PtBr => format!(
            "{}, {} de {} de {} às {}",
            PT_BR_WEEKDAYS[local.weekday().num_days_from_monday() as usize],
            local.day(),
            PT_BR_MONTHS[local.month0() as usize],
            local.year(),
            local.format("%H:%M"),
        ),
        DisplayLocale::EnUs => local.format("%A, %B %-d, %Y at %-I:%M %p").to_string(),
    }
}

/// Zero-padded to at least two digits.
pub fn pad2(value: u64) -> String {
    format!("{value:02}")
}
