use crate::constants::{UPLOAD_CAP_PERCENT, UPLOAD_STEP_PERCENT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressState {
    Idle,
    Running,
    Done,
    Failed,
}

/// Fake progress for requests that report none. Creeps toward `cap` on each
/// tick and only reaches 100 when the request actually completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedProgress {
    percent: u8,
    step: u8,
    cap: u8,
    state: ProgressState,
}

impl Default for SimulatedProgress {
    fn default() -> Self {
        Self::new(UPLOAD_STEP_PERCENT, UPLOAD_CAP_PERCENT)
    }
}

impl SimulatedProgress {
    pub fn new(step: u8, cap: u8) -> Self {
        Self {
            percent: 0,
            step: step.max(1),
            cap: cap.min(99),
            state: ProgressState::Idle,
        }
    }

    pub fn start(&mut self) {
        self.percent = 0;
        self.state = ProgressState::Running;
    }

    /// Returns the new percentage. No-op unless running.
    pub fn tick(&mut self) -> u8 {
        if self.state == ProgressState::Running {
            self.percent = self.percent.saturating_add(self.step).min(self.cap);
        }
        self.percent
    }

    pub fn complete(&mut self) {
        self.percent = 100;
        self.state = ProgressState::Done;
    }

    pub fn fail(&mut self) {
        self.percent = 0;
        self.state = ProgressState::Failed;
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    pub fn state(&self) -> ProgressState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == ProgressState::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_stops_at_cap_until_complete() {
        let mut progress = SimulatedProgress::default();
        assert_eq!(progress.tick(), 0);

        progress.start();
        for _ in 0..20 {
            progress.tick();
        }
        assert_eq!(progress.percent(), 90);
        assert!(progress.is_running());

        progress.complete();
        assert_eq!(progress.percent(), 100);
        assert_eq!(progress.tick(), 100);
    }

    #[test]
    fn test_failed_upload_resets() {
        let mut progress = SimulatedProgress::new(30, 95);
        progress.start();
        assert_eq!(progress.tick(), 30);
        progress.fail();
        assert_eq!(progress.percent(), 0);
        assert_eq!(progress.state(), ProgressState::Failed);
        assert_eq!(progress.tick(), 0);
    }
}
