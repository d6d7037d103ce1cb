//! Suggestion command
//!
//! Replays a game-state string and ranks the next guesses without prompting.

use crate::core::{GuessRecord, Word};
use crate::game::{GameConfig, GameSimulator, TurnState};
use crate::solver::{EntropyEngine, HardModeRules, ScoredGuess, Strategy};
use anyhow::Result;

/// Where a partially played game stands and what to play next
pub struct Suggestion {
    pub state: TurnState,
    pub history: Vec<GuessRecord>,
    pub live: Vec<Word>,
    /// Best guesses first; empty once the game is over
    pub top: Vec<ScoredGuess>,
}

/// Rank the `top` next guesses after `history`
///
/// With no history the engine's opening guess leads the list. In hard mode
/// only guesses that reuse the revealed hints are ranked.
///
/// # Errors
///
/// Returns an error if the history contradicts every answer or continues past
/// the end of the game.
pub fn suggest<S: Strategy>(
    engine: &EntropyEngine<'_, S>,
    config: GameConfig,
    history: &[GuessRecord],
    top: usize,
) -> Result<Suggestion> {
    let game = GameSimulator::resume(engine, config, history)?;
    let live = game.live().to_vec();

    let top = if game.state().is_terminal() {
        Vec::new()
    } else if history.is_empty() {
        // Lead with the opener a game would actually play
        let opener = engine.opening_guess()?;
        let rest = if top > 1 {
            engine.top_guesses(&live, top)
        } else {
            Vec::new()
        };
        std::iter::once(opener)
            .chain(rest.into_iter().filter(|guess| guess.word != opener.word))
            .take(top)
            .collect()
    } else if config.hard_mode {
        let rules = HardModeRules::from_history(history);
        engine
            .top_guesses(&live, engine.dictionary().guesses().len())
            .into_iter()
            .filter(|guess| rules.allows(&guess.word))
            .take(top)
            .collect()
    } else {
        engine.top_guesses(&live, top)
    };

    Ok(Suggestion {
        state: game.state(),
        history: history.to_vec(),
        live,
        top,
    })
}
