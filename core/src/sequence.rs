use serde::{Deserialize, Serialize};

use crate::error::{CeremonyError, Result};

/// One step of the scripted surprise narrative.
///
/// Valid transitions:
/// - Welcome -> Countdown (Begin)
/// - Countdown -> Game (CountdownFinished)
/// - Game -> Letter (GameCompleted)
/// - Letter -> Final (OpenLetter)
/// - Final -> Welcome (Restart)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    Welcome,
    Countdown,
    Game,
    Letter,
    Final,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StageEvent {
    /// Explicit user action on the welcome panel.
    Begin,
    /// Countdown completion callback.
    CountdownFinished,
    /// Match-game completion callback.
    GameCompleted,
    /// Explicit user action, gated behind the reveal-letter interaction.
    OpenLetter,
    /// Explicit restart action from the final panel.
    Restart,
}

impl Stage {
    pub const fn is_initial(self) -> bool {
        matches!(self, Self::Welcome)
    }

    pub const fn is_last(self) -> bool {
        matches!(self, Self::Final)
    }

    /// Applies an event, yielding the next stage. Anything off the scripted
    /// path is rejected; callers treat that as ignore.
    pub fn apply(self, event: StageEvent) -> Result<Stage> {
        use Stage::*;
        use StageEvent::*;

        match (self, event) {
            (Welcome, Begin) => Ok(Countdown),
            (Countdown, CountdownFinished) => Ok(Game),
            (Game, GameCompleted) => Ok(Letter),
            (Letter, OpenLetter) => Ok(Final),
            (Final, Restart) => Ok(Welcome),
            _ => Err(CeremonyError::InvalidTransition),
        }
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::Welcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Stage::*;
    use StageEvent::*;

    const ALL_STAGES: [Stage; 5] = [Welcome, Countdown, Game, Letter, Final];
    const ALL_EVENTS: [StageEvent; 5] =
        [Begin, CountdownFinished, GameCompleted, OpenLetter, Restart];

    #[test]
    fn scripted_path_runs_in_order() {
        let mut stage = Stage::default();
        assert!(stage.is_initial());

        for (event, expected) in [
            (Begin, Countdown),
            (CountdownFinished, Game),
            (GameCompleted, Letter),
            (OpenLetter, Final),
        ] {
            stage = stage.apply(event).unwrap();
            assert_eq!(stage, expected);
        }

        assert!(stage.is_last());
        assert_eq!(stage.apply(Restart).unwrap(), Welcome);
    }

    #[test]
    fn exactly_one_event_is_accepted_per_stage() {
        for stage in ALL_STAGES {
            let accepted = ALL_EVENTS
                .iter()
                .filter(|&&event| stage.apply(event).is_ok())
                .count();
            assert_eq!(accepted, 1, "stage {:?}", stage);
        }
    }

    #[test]
    fn skipping_ahead_is_rejected() {
        assert_eq!(
            Welcome.apply(GameCompleted),
            Err(CeremonyError::InvalidTransition)
        );
        assert_eq!(
            Countdown.apply(OpenLetter),
            Err(CeremonyError::InvalidTransition)
        );
        assert_eq!(Game.apply(Restart), Err(CeremonyError::InvalidTransition));
    }

    #[test]
    fn restart_is_only_reachable_from_final() {
        for stage in [Welcome, Countdown, Game, Letter] {
            assert!(stage.apply(Restart).is_err(), "stage {:?}", stage);
        }
    }
}
