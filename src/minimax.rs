//! This module's primary struct is [`MinimaxBot`],
//! which runs an exhaustive minimax search on a game.
use std::marker::PhantomData;

use rand::Rng;

use crate::game::*;

/// A bot that runs minimax all the way to the end of the game.
///
/// There is no pruning and no cache: every line is played out, so the bot
/// is only suitable for games whose full tree is small (Tic-Tac-Toe has at
/// most 9! leaf paths).
///
/// Scores are signed from the maximizer's point of view. A terminal state
/// reached `d` plies after the move being rated scores
/// `win_value() - d` for a maximizer win, `d - win_value()` for a
/// minimizer win and `0` for a draw, so quick wins and slow losses are
/// preferred.
///
/// The struct is parameterized on G, the type of a game that
/// implements [`crate::game::GameState`].
pub struct MinimaxBot<G>
where
    G: GameState,
{
    marker: PhantomData<G>,
}

impl<G: GameState> Default for MinimaxBot<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: GameState> Clone for MinimaxBot<G> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<G: GameState> std::fmt::Debug for MinimaxBot<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("MinimaxBot")
    }
}

impl<G: GameState> MinimaxBot<G> {
    /// Create a MinimaxBot.
    pub fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }

    fn minimax(&self, game: &G, depth: i32, nodes: &mut usize) -> i32 {
        *nodes += 1;

        if let Evaluation::Exact(v) = game.evaluate() {
            return v * game.win_value() - v.signum() * depth;
        }

        let sign = game.turn().sign();
        let best = game
            .moves()
            .into_iter()
            .map(|(_, child)| self.minimax(&child, depth + 1, nodes))
            .max_by_key(|score| sign * score);

        match best {
            Some(score) => score,
            None => panic!("Evaluation returned Ongoing on a game with no legal moves."),
        }
    }

    /// Rates every legal move of `root`, in the order the game yields them.
    ///
    /// Returns an empty vector if the game is already over.
    pub fn scored_moves(&self, root: &G) -> Vec<(i32, G::Move)> {
        if root.evaluate().is_exact() {
            return Vec::new();
        }

        let mut nodes = 0;
        let scored: Vec<(i32, G::Move)> = root
            .moves()
            .into_iter()
            .map(|(m, child)| (self.minimax(&child, 0, &mut nodes), m))
            .collect();
        log::debug!("{:<32}{:<32}", "minimax nodes searched", nodes);

        scored
    }

    /// The best move for the player to move, and its score.
    ///
    /// Ties go to the move yielded first. Returns `None` if the game is
    /// already over.
    pub fn best_move(&self, root: &G) -> Option<(i32, G::Move)> {
        let sign = root.turn().sign();
        let mut best: Option<(i32, G::Move)> = None;

        for (score, m) in self.scored_moves(root) {
            match best {
                Some((b, _)) if sign * score <= sign * b => {}
                _ => best = Some((score, m)),
            }
        }

        best
    }

    /// Every move tied for the best score, in the order the game yields them.
    pub fn best_moves(&self, root: &G) -> Vec<G::Move> {
        let scored = self.scored_moves(root);
        let sign = root.turn().sign();

        let Some(best) = scored.iter().map(|(score, _)| sign * score).max() else {
            return Vec::new();
        };

        scored
            .into_iter()
            .filter(|(score, _)| sign * score == best)
            .map(|(_, m)| m)
            .collect()
    }

    /// Like [`MinimaxBot::best_move`], but breaks ties uniformly at random.
    pub fn best_move_with<R: Rng>(&self, root: &G, rng: &mut R) -> Option<(i32, G::Move)> {
        let scored = self.scored_moves(root);
        let sign = root.turn().sign();
        let best = scored.iter().map(|(score, _)| sign * score).max()?;

        let ties: Vec<(i32, G::Move)> = scored
            .into_iter()
            .filter(|(score, _)| sign * score == best)
            .collect();

        Some(ties[rng.random_range(0..ties.len())])
    }

    /// The game-theoretic value of `root` under perfect play.
    pub fn value(&self, root: &G) -> i32 {
        match root.evaluate() {
            Evaluation::Exact(v) => v * root.win_value(),
            Evaluation::Ongoing => self.best_move(root).map_or(0, |(score, _)| score),
        }
    }
}
