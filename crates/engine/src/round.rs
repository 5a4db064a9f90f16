//! Round state machine and the blocking play loop.

use anyhow::Result;

use crate::core::GameState;
use crate::input::classify_key;
use crate::term::{FrameBuffer, GameView, Surface};
use crate::types::{GameAction, Phase, QUIT_KEY};

/// One round: the game state plus the phase it is in.
///
/// `Playing` moves to `Won`, `Lost` or `Quit`; those three are final and
/// further actions are ignored.
#[derive(Debug, Clone)]
pub struct Round {
    state: GameState,
    phase: Phase,
}

impl Round {
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            phase: Phase::Playing,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Apply one action and return the resulting phase.
    pub fn handle(&mut self, action: GameAction) -> Phase {
        if self.phase.is_terminal() {
            return self.phase;
        }

        match action {
            GameAction::Quit => self.phase = Phase::Quit,
            GameAction::Guess(letter) => {
                if let Err(e) = self.state.apply_guess(letter) {
                    tracing::warn!(error = %e, "guess rejected");
                    return self.phase;
                }
                if self.state.is_winner() {
                    self.phase = Phase::Won;
                } else if self.state.is_lost() {
                    self.phase = Phase::Lost;
                }
            }
        }
        self.phase
    }

    pub fn summary(&self) -> RoundSummary {
        RoundSummary {
            phase: self.phase,
            word: self.state.word().to_string(),
            attempts: self.state.attempts(),
        }
    }
}

/// How a round ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    pub phase: Phase,
    pub word: String,
    pub attempts: u8,
}

/// Drives a round on a [`Surface`].
pub struct Controller {
    view: GameView,
    quit_key: char,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(QUIT_KEY)
    }
}

impl Controller {
    pub fn new(quit_key: char) -> Self {
        Self {
            view: GameView::default().with_quit_key(quit_key),
            quit_key,
        }
    }

    /// Play a round to completion.
    ///
    /// Each iteration redraws both panels, then blocks for one key. Once the
    /// round ends the outcome screen is shown and one more key is awaited.
    pub fn play<S: Surface>(&self, surface: &mut S, state: GameState) -> Result<RoundSummary> {
        let mut round = Round::new(state);
        let mut fb = FrameBuffer::new(0, 0);

        while round.phase() == Phase::Playing {
            let viewport = surface.viewport()?;
            self.view.render_into(round.state(), viewport, &mut fb);
            surface.present(&mut fb)?;

            let key = surface.read_key()?;
            if let Some(action) = classify_key(key, self.quit_key) {
                round.handle(action);
            }
        }

        let summary = round.summary();
        tracing::info!(
            phase = summary.phase.as_str(),
            attempts = summary.attempts,
            "round over"
        );

        let viewport = surface.viewport()?;
        self.view
            .render_end_into(round.state(), summary.phase, viewport, &mut fb);
        surface.present(&mut fb)?;
        surface.read_key()?;

        Ok(summary)
    }
}
