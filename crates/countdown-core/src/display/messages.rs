/// Cycles through encouragement lines while counting, then settles on the
/// completion line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRotation {
    counting: Vec<String>,
    complete: String,
    rotate_every_ticks: u64,
}

impl MessageRotation {
    pub fn new(counting: Vec<String>, complete: String, rotate_every_ticks: u64) -> Self {
        Self {
            counting,
            complete,
            rotate_every_ticks: rotate_every_ticks.max(1),
        }
    }

    /// Line to show on tick `tick_index`.
    pub fn message_for(&self, tick_index: u64, done: bool) -> &str {
        if done {
            return &self.complete;
        }
        if self.counting.is_empty() {
            return "";
        }
        let slot = tick_index / self.rotate_every_ticks;
        let idx = (slot % self.counting.len() as u64) as usize;
        &self.counting[idx]
    }
}
