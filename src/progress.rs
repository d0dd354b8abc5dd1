//! Small timers behind the page's intro animations: the loading screen's
//! progress bar and the stat counters.

/// How long the loading bar takes to fill.
pub const LOAD_DURATION_MS: u64 = 1500;
/// Pause at 100% before the page content replaces the loading screen.
const SETTLE_MS: u64 = 300;
/// The bar fills in this many steps.
const LOAD_STEPS: u64 = 50;
const STEP_PERCENT: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Filling,
    Settling { ticks_left: u64 },
    Done,
}

/// Loading bar that rises by 2% per tick, holds at 100% and then completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingProgress {
    percent: u32,
    interval_ms: u64,
    stage: Stage,
}

impl LoadingProgress {
    pub fn new(duration_ms: u64) -> Self {
        Self {
            percent: 0,
            interval_ms: (duration_ms / LOAD_STEPS).max(1),
            stage: Stage::Filling,
        }
    }

    /// Milliseconds between [`tick`](Self::tick) calls.
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn percent(&self) -> u32 {
        self.percent
    }

    pub fn is_complete(&self) -> bool {
        self.stage == Stage::Done
    }

    /// Advances one interval. Returns `true` only on the tick that completes.
    pub fn tick(&mut self) -> bool {
        match self.stage {
            Stage::Filling if self.percent >= 100 => {
                self.stage = Stage::Settling {
                    ticks_left: SETTLE_MS.div_ceil(self.interval_ms),
                };
                false
            }
            Stage::Filling => {
                self.percent = (self.percent + STEP_PERCENT).min(100);
                false
            }
            Stage::Settling { ticks_left } if ticks_left <= 1 => {
                self.stage = Stage::Done;
                true
            }
            Stage::Settling { ticks_left } => {
                self.stage = Stage::Settling {
                    ticks_left: ticks_left - 1,
                };
                false
            }
            Stage::Done => false,
        }
    }
}

impl Default for LoadingProgress {
    fn default() -> Self {
        Self::new(LOAD_DURATION_MS)
    }
}

/// Value shown by a counter animating from 0 to `end` over `duration_ms`,
/// `elapsed_ms` after it started. Rounds down, so `end` only shows once the
/// duration has passed.
pub fn count_up(elapsed_ms: u64, duration_ms: u64, end: u32) -> u32 {
    if duration_ms == 0 || elapsed_ms >= duration_ms {
        return end;
    }
    (elapsed_ms * u64::from(end) / duration_ms) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticks_until_complete(progress: &mut LoadingProgress) -> usize {
        let mut ticks = 0;
        while !progress.tick() {
            ticks += 1;
            assert!(ticks < 1000, "loading never completed");
        }
        ticks + 1
    }

    #[test]
    fn test_default_fills_in_thirty_ms_steps() {
        let mut progress = LoadingProgress::default();
        assert_eq!(progress.interval_ms(), 30);
        assert_eq!(progress.percent(), 0);

        progress.tick();
        assert_eq!(progress.percent(), 2);
        for _ in 0..49 {
            progress.tick();
        }
        assert_eq!(progress.percent(), 100);
        assert!(!progress.is_complete());
    }

    #[test]
    fn test_completes_once_after_settling() {
        let mut progress = LoadingProgress::default();
        // 50 ticks to fill, one to notice 100%, then 300ms at 30ms a tick
        assert_eq!(ticks_until_complete(&mut progress), 50 + 1 + 10);
        assert!(progress.is_complete());
        assert_eq!(progress.percent(), 100);

        assert!(!progress.tick());
        assert!(progress.is_complete());
    }

    #[test]
    fn test_percent_never_passes_100() {
        let mut progress = LoadingProgress::new(3000);
        assert_eq!(progress.interval_ms(), 60);
        for _ in 0..200 {
            progress.tick();
            assert!(progress.percent() <= 100);
        }
        assert!(progress.is_complete());
    }

    #[test]
    fn test_tiny_duration_still_ticks() {
        let mut progress = LoadingProgress::new(0);
        assert_eq!(progress.interval_ms(), 1);
        assert_eq!(ticks_until_complete(&mut progress), 50 + 1 + 300);
    }

    #[test]
    fn test_count_up_floors_towards_end() {
        assert_eq!(count_up(0, 2000, 500), 0);
        assert_eq!(count_up(1000, 2000, 500), 250);
        assert_eq!(count_up(1999, 2000, 10), 9);
        assert_eq!(count_up(2000, 2000, 10), 10);
        assert_eq!(count_up(5000, 2000, 10), 10);
        assert_eq!(count_up(700, 2000, 1), 0);
    }

    #[test]
    fn test_count_up_zero_duration_shows_end() {
        assert_eq!(count_up(0, 0, 5), 5);
    }
}
