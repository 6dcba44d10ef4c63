use serde::{Deserialize, Serialize};

/// Valid transitions:
/// - Running -> Running (tick with seconds left)
/// - Running -> Finished (tick reaching zero)
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CountdownPhase {
    Running,
    Finished,
}

impl CountdownPhase {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Finished)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TickOutcome {
    /// The countdown already finished; the tick was ignored.
    NoChange,
    Ticked,
    /// This tick reached zero. Reported exactly once.
    Finished,
}

impl TickOutcome {
    /// Whether this outcome could have caused an update to the display
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Ticked => true,
            Self::Finished => true,
        }
    }
}

/// A fixed duration counted down one second per tick. The one-second cadence
/// itself is the caller's timer; the state here never goes below zero and
/// reports completion exactly once.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Countdown {
    remaining_secs: u32,
    phase: CountdownPhase,
}

impl Countdown {
    pub const fn new(initial_secs: u32) -> Self {
        Self {
            remaining_secs: initial_secs,
            // a zero-length countdown has nothing to run
            phase: if initial_secs == 0 {
                CountdownPhase::Finished
            } else {
                CountdownPhase::Running
            },
        }
    }

    pub const fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub const fn phase(&self) -> CountdownPhase {
        self.phase
    }

    pub const fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    pub fn tick(&mut self) -> TickOutcome {
        use TickOutcome::*;

        match self.phase {
            CountdownPhase::Finished => NoChange,
            CountdownPhase::Running => {
                self.remaining_secs -= 1;
                if self.remaining_secs == 0 {
                    self.phase = CountdownPhase::Finished;
                    Finished
                } else {
                    Ticked
                }
            }
        }
    }

    /// Remaining time split as (hours, minutes, seconds) for display.
    pub const fn split_hms(&self) -> (u32, u32, u32) {
        let secs = self.remaining_secs;
        (secs / 3600, (secs / 60) % 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_ticks_finish_exactly_once() {
        let mut countdown = Countdown::new(10);

        let mut finishes = 0;
        for _ in 0..10 {
            if countdown.tick() == TickOutcome::Finished {
                finishes += 1;
            }
        }

        assert_eq!(finishes, 1);
        assert_eq!(countdown.remaining_secs(), 0);
        assert!(countdown.is_finished());
    }

    #[test]
    fn extra_tick_after_finish_has_no_effect() {
        let mut countdown = Countdown::new(2);
        countdown.tick();
        countdown.tick();

        assert_eq!(countdown.tick(), TickOutcome::NoChange);
        assert_eq!(countdown.remaining_secs(), 0);
    }

    #[test]
    fn zero_length_countdown_starts_finished() {
        let mut countdown = Countdown::new(0);

        assert!(countdown.is_finished());
        assert_eq!(countdown.tick(), TickOutcome::NoChange);
        assert_eq!(countdown.remaining_secs(), 0);
    }

    #[test]
    fn split_hms_decomposes_remaining_time() {
        let countdown = Countdown::new(3723);

        assert_eq!(countdown.split_hms(), (1, 2, 3));
    }
}
