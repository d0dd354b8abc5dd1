/// Milliseconds between [`Typewriter::tick`] calls.
pub const TICK_MS: u64 = 50;
/// Ticks per typed character (100ms).
const TYPE_TICKS: u32 = 2;
/// Ticks a finished title stays on screen before deleting starts (2s).
const HOLD_TICKS: u32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Holding,
    Deleting,
}

/// Types out each title, holds it, deletes it, then moves to the next one.
///
/// Driven by a fixed-rate tick; lengths are counted in chars so multi-byte
/// titles are never cut mid-character.
#[derive(Debug, Clone)]
pub struct Typewriter {
    titles: Vec<String>,
    index: usize,
    shown: usize,
    phase: Phase,
    wait: u32,
}

impl Typewriter {
    pub fn new(titles: Vec<String>) -> Self {
        Self {
            titles,
            index: 0,
            shown: 0,
            phase: Phase::Typing,
            wait: 0,
        }
    }

    pub fn reset(&mut self, titles: Vec<String>) {
        *self = Self::new(titles);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn text(&self) -> &str {
        let Some(title) = self.titles.get(self.index) else {
            return "";
        };
        match title.char_indices().nth(self.shown) {
            Some((end, _)) => &title[..end],
            None => title,
        }
    }

    fn title_len(&self) -> usize {
        self.titles
            .get(self.index)
            .map(|t| t.chars().count())
            .unwrap_or(0)
    }

    pub fn tick(&mut self) {
        if self.titles.is_empty() {
            return;
        }
        if self.wait > 0 {
            self.wait -= 1;
            return;
        }
        match self.phase {
            Phase::Typing => {
                if self.shown < self.title_len() {
                    self.shown += 1;
                    self.wait = TYPE_TICKS - 1;
                } else {
                    self.phase = Phase::Holding;
                    self.wait = HOLD_TICKS - 1;
                }
            }
            Phase::Holding => {
                self.phase = Phase::Deleting;
                self.tick();
            }
            Phase::Deleting => {
                if self.shown > 0 {
                    self.shown -= 1;
                } else {
                    self.index = (self.index + 1) % self.titles.len();
                    self.phase = Phase::Typing;
                }
            }
        }
    }
}
