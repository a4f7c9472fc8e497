use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use draughts_core::{Board, Color, Move};

const MAX_ROLLOUT_PLIES: u32 = 400;

/// Flat Monte-Carlo move evaluator: each legal move gets `simulations`
/// uniform-random rollouts, and the move with the best mean result is
/// returned. Grounded on the teacher's `perft` (the only place in the
/// teacher that recursively copies the board rather than using make/undo),
/// generalized from exhaustive counting to random sampling.
pub struct MonteCarloSearcher {
    engine: Color,
    simulations: u32,
    rng: StdRng,
    last_best_score: Option<f64>,
}

impl MonteCarloSearcher {
    pub fn new(engine: Color, simulations: u32) -> Self {
        Self::with_seed(engine, simulations, rand::thread_rng().gen())
    }

    pub fn with_seed(engine: Color, simulations: u32, seed: u64) -> Self {
        Self {
            engine,
            simulations,
            rng: StdRng::seed_from_u64(seed),
            last_best_score: None,
        }
    }

    /// The mean score of the move returned by the most recent `best_move`
    /// call, or `None` if no decision has been made yet (spec.md S6: "a
    /// finite best-score").
    pub fn last_best_score(&self) -> Option<f64> {
        self.last_best_score
    }

    pub fn best_move(&mut self, board: &Board) -> Option<Move> {
        let side = board.side_to_move();
        let moves = board.legal_moves(side);
        if moves.is_empty() {
            self.last_best_score = None;
            return None;
        }

        let mut score = vec![0i64; moves.len()];
        let mut count = vec![1i64; moves.len()];

        for _ in 0..self.simulations {
            let idx = self.rng.gen_range(0..moves.len());
            let mut sample = board.copy();
            sample.apply(&moves[idx]);
            let result = self.rollout(&mut sample);
            score[idx] += result as i64;
            count[idx] += 1;
        }

        let means: Vec<f64> = score
            .iter()
            .zip(&count)
            .map(|(&s, &c)| s as f64 / c as f64)
            .collect();

        let best_mean = means.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let best_indices: Vec<usize> = means
            .iter()
            .enumerate()
            .filter(|&(_, &m)| m == best_mean)
            .map(|(i, _)| i)
            .collect();

        let chosen = best_indices[self.rng.gen_range(0..best_indices.len())];
        self.last_best_score = Some(best_mean);
        Some(moves[chosen].clone())
    }

    /// Uniform-random self-play from `board` until a side has no legal
    /// moves or the ply cap is hit. Only the no-moves terminal is checked
    /// here, never the repetition/quiet-move draw (spec.md §4.F): random
    /// play drifts into long, statistically uninteresting draws that the
    /// 400-ply cap already bounds.
    fn rollout(&mut self, board: &mut Board) -> i32 {
        for _ in 0..MAX_ROLLOUT_PLIES {
            let side = board.side_to_move();
            let moves = board.legal_moves(side);
            if moves.is_empty() {
                return if side == self.engine { -1 } else { 1 };
            }
            let idx = self.rng.gen_range(0..moves.len());
            board.apply(&moves[idx]);
        }
        0
    }
}
