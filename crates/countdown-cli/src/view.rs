//! Terminal rendering of countdown snapshots.

use countdown_core::{
    format_target, pad2, Celebration, Config, DisplayLocale, MessageRotation, ProgressBar,
    Snapshot, TargetInstant,
};

/// Celebration field size, in terminal cells.
const BURST_WIDTH: u16 = 48;
const BURST_HEIGHT: u16 = 5;

pub struct View {
    heading: String,
    locale: DisplayLocale,
    messages: MessageRotation,
    bar_width: usize,
    particles: usize,
}

impl View {
    pub fn new(target: &TargetInstant, locale: DisplayLocale, config: &Config) -> Self {
        let labels = locale.labels();
        Self {
            heading: format!(
                "{} {} ({})",
                labels.until,
                format_target(target, locale),
                target.timezone().name()
            ),
            locale,
            messages: config.message_rotation(),
            bar_width: config.display.bar_width as usize,
            particles: config.celebration.particles as usize,
        }
    }

    /// Full multi-line frame.
    pub fn frame(&self, snapshot: &Snapshot) -> String {
        let labels = self.locale.labels();
        let d = snapshot.remaining.duration;
        let bar = ProgressBar::from_ratio(snapshot.progress);
        let percent = format!("{}%", bar.percent());
        let pad = self.bar_width.saturating_sub(labels.almost_there.chars().count());

        let mut out = String::new();
        out.push_str(&self.heading);
        out.push_str("\n\n");
        out.push_str(&format!(
            "  {} {}   {} {}   {} {}   {} {}\n\n",
            pad2(d.days),
            labels.days,
            pad2(d.hours as u64),
            labels.hours,
            pad2(d.minutes as u64),
            labels.minutes,
            pad2(d.seconds as u64),
            labels.seconds,
        ));
        out.push_str(&format!("{}{:>pad$}\n", labels.almost_there, percent));
        out.push_str(&bar.render(self.bar_width));
        out.push('\n');
        out.push_str(self.message(snapshot));
        out.push('\n');
        out
    }

    /// Compact single line, used when stdout is not a terminal.
    pub fn line(&self, snapshot: &Snapshot) -> String {
        let d = snapshot.remaining.duration;
        let bar = ProgressBar::from_ratio(snapshot.progress);
        format!(
            "{}d {}:{}:{} {:>3}% {}",
            pad2(d.days),
            pad2(d.hours as u64),
            pad2(d.minutes as u64),
            pad2(d.seconds as u64),
            bar.percent(),
            self.message(snapshot)
        )
    }

    pub fn celebration(&self, seed: u64) -> String {
        Celebration::burst(self.particles, BURST_WIDTH, BURST_HEIGHT, seed)
            .render()
            .join("\n")
    }

    fn message(&self, snapshot: &Snapshot) -> &str {
        self.messages.message_for(snapshot.tick_index, snapshot.remaining.done)
    }
}
