//! Output patterns for bank commissioning and the demo loop.
//!
//! The engine stages a whole frame with auto-update suspended and commits
//! it with a single `update()`, so every frame costs exactly one transfer
//! regardless of how many outputs it touches. The caller's auto-update
//! policy is restored afterwards.
//!
//! | Pattern   | Frame sequence                                  |
//! |-----------|-------------------------------------------------|
//! | AllOff    | every output off                                |
//! | AllOn     | every output on (lamp test)                     |
//! | Walk      | one output on, walking up the chain, wrapping   |
//! | Alternate | odd/even outputs, phase flipping each frame     |
//! | Fill      | one more output per frame until full, then wrap |

use crate::bank::ActuatorBank;
use crate::ports::LinkPort;

/// Pattern identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternId {
    AllOff,
    AllOn,
    Walk,
    Alternate,
    Fill,
}

/// Frame stepper for an actuator bank. Stack-allocated, no heap.
pub struct PatternEngine {
    pattern: PatternId,
    step: u32,
}

impl PatternEngine {
    pub fn new(pattern: PatternId) -> Self {
        Self { pattern, step: 0 }
    }

    /// Currently selected pattern.
    pub fn pattern(&self) -> PatternId {
        self.pattern
    }

    /// Switch patterns. Restarts from the first frame; selecting the
    /// active pattern again is a no-op.
    pub fn set_pattern(&mut self, pattern: PatternId) {
        if self.pattern != pattern {
            self.pattern = pattern;
            self.step = 0;
        }
    }

    /// Stage and commit the next frame. Exactly one transfer per call.
    pub fn advance<L: LinkPort>(&mut self, bank: &mut ActuatorBank<L>) {
        let size = u32::from(bank.size());
        if size == 0 {
            return;
        }

        let was_auto = bank.auto_update();
        bank.set_auto_update(false);

        match self.pattern {
            PatternId::AllOff => bank.clear_all(),
            PatternId::AllOn => {
                for i in 0..bank.size() {
                    bank.set(i, true);
                }
            }
            PatternId::Walk => {
                bank.clear_all();
                bank.set((self.step % size) as u8, true);
            }
            PatternId::Alternate => {
                for i in 0..bank.size() {
                    bank.set(i, (u32::from(i) + self.step) % 2 == 0);
                }
            }
            PatternId::Fill => {
                let filled = (self.step % size) + 1;
                bank.clear_all();
                for i in 0..filled {
                    bank.set(i as u8, true);
                }
            }
        }

        bank.update();
        bank.set_auto_update(was_auto);
        self.step = self.step.wrapping_add(1);
    }
}
