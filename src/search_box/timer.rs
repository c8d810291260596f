use std::time::Instant;

/// Cancelable one-shot deadline owned by the search box
#[derive(Debug, Clone, Copy, Default)]
pub struct CloseTimer {
    deadline: Option<Instant>,
}

impl CloseTimer {
    /// Arm (or re-arm) the timer
    pub fn arm(&mut self, deadline: Instant) {
        self.deadline = Some(deadline);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Disarm and report `true` once the deadline has passed
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
