use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use draughts_core::{Board, Color, Move};

use crate::evaluation::{self, Weights};
use crate::profile::Profile;
use crate::transposition::{TranspositionTable, TtEntry, TtKey};

/// Running totals exposed for logging and tournament aggregation, reset at
/// the start of every `best_move` call. Grounded on the teacher's search
/// counters (nodes/TT hits printed by its CLI after each search).
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchCounters {
    pub nodes: u64,
    pub cache_hits: u64,
    pub alpha_cutoffs: u64,
    pub beta_cutoffs: u64,
}

/// Depth-limited alpha-beta with iterative deepening, a per-decision
/// transposition table, capture-biased move ordering and a seeded random
/// tie-break. Grounded on the teacher's plain `find_best`/`negamax` pair
/// (the simple, single-threaded search, not its later null-move/LMR/killer
/// variant, which the profile-driven spec has no use for).
pub struct MinimaxSearcher {
    engine: Color,
    max_depth: u8,
    weights: Weights,
    rng: StdRng,
    tt: TranspositionTable,
    counters: SearchCounters,
}

impl MinimaxSearcher {
    pub fn new(engine: Color, max_depth: u8, profile_name: &str) -> Self {
        Self::with_seed(engine, max_depth, profile_name, rand::thread_rng().gen())
    }

    /// Same as `new`, but with an injectable seed so tests can reproduce a
    /// decision exactly (spec.md §5: "test-suite seeds should be
    /// injectable").
    pub fn with_seed(engine: Color, max_depth: u8, profile_name: &str, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let profile = Profile::by_name(profile_name, &mut rng);
        let weights = profile
            .weights()
            .unwrap_or_else(|| Weights::new(10, 10, 10, 10, 10, 10, 10, 10, 10));

        Self {
            engine,
            max_depth: max_depth.max(1),
            weights,
            rng,
            tt: TranspositionTable::new(),
            counters: SearchCounters::default(),
        }
    }

    pub fn counters(&self) -> SearchCounters {
        self.counters
    }

    /// `bestMove(board) -> Move | none`. The board is restored to its
    /// entry state on return: every descent uses `make`/`undo`, never a
    /// copy, so the minimax invariant from spec.md §5 holds by construction.
    pub fn best_move(&mut self, board: &mut Board) -> Option<Move> {
        self.counters = SearchCounters::default();
        self.tt.clear();

        let mut chosen = None;
        for depth in 1..=self.max_depth {
            let (_, mv) = self.alphabeta(board, depth, i32::MIN / 2, i32::MAX / 2, true);
            if mv.is_some() {
                chosen = mv;
            }
        }
        chosen
    }

    fn alphabeta(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximising: bool,
    ) -> (i32, Option<Move>) {
        self.counters.nodes += 1;

        let key = TtKey { hash: board.hash(), depth, maximising, engine: self.engine };
        if let Some(entry) = self.tt.get(&key) {
            self.counters.cache_hits += 1;
            return (entry.score, entry.chosen.clone());
        }

        if depth == 0 || board.terminal_no_moves() {
            let score = evaluation::evaluate(board, &self.weights, self.engine);
            return (score, None);
        }

        let side = board.side_to_move();
        let mut moves = board.legal_moves(side);
        if moves.is_empty() {
            let score = evaluation::evaluate(board, &self.weights, self.engine);
            return (score, None);
        }

        self.order_moves(board, &mut moves, depth, maximising);

        let mut best = if maximising { i32::MIN / 2 } else { i32::MAX / 2 };
        let mut best_moves: Vec<Move> = Vec::new();

        for mv in &moves {
            let token = board.make(mv);
            board.set_side_to_move(!board.side_to_move());
            let (score, _) = self.alphabeta(board, depth - 1, alpha, beta, !maximising);
            board.set_side_to_move(!board.side_to_move());
            board.undo(token);

            if maximising {
                if score > best {
                    best = score;
                    best_moves.clear();
                    best_moves.push(mv.clone());
                } else if score == best {
                    best_moves.push(mv.clone());
                }
                alpha = alpha.max(best);
                if beta <= alpha {
                    self.counters.alpha_cutoffs += 1;
                    break;
                }
            } else {
                if score < best {
                    best = score;
                    best_moves.clear();
                    best_moves.push(mv.clone());
                } else if score == best {
                    best_moves.push(mv.clone());
                }
                beta = beta.min(best);
                if beta <= alpha {
                    self.counters.beta_cutoffs += 1;
                    break;
                }
            }
        }

        let chosen = best_moves.get(self.rng.gen_range(0..best_moves.len())).cloned();

        self.tt.insert(key, TtEntry { score: best, chosen: chosen.clone() });
        (best, chosen)
    }

    // Captures sort first (50 points per captured piece); ties broken by
    // whatever score the child position already has cached from a
    // shallower iteration. Grounded on the teacher's `order_moves` /
    // `rate_move` MVV-LVA key, generalized from piece values to capture
    // count since draughts captures are jumps, not attacker/victim pairs.
    fn order_moves(&mut self, board: &mut Board, moves: &mut [Move], depth: u8, maximising: bool) {
        let child_key_depth = depth - 1;
        let child_maximising = !maximising;

        let mut keyed: Vec<(i32, usize)> = moves
            .iter()
            .enumerate()
            .map(|(i, mv)| {
                let mut key = 50 * mv.capture_count() as i32;

                let token = board.make(mv);
                board.set_side_to_move(!board.side_to_move());
                let child_key = TtKey {
                    hash: board.hash(),
                    depth: child_key_depth,
                    maximising: child_maximising,
                    engine: self.engine,
                };
                if let Some(entry) = self.tt.get(&child_key) {
                    key += entry.score;
                }
                board.set_side_to_move(!board.side_to_move());
                board.undo(token);

                (key, i)
            })
            .collect();

        keyed.sort_by(|a, b| b.0.cmp(&a.0));
        let ordered: Vec<Move> = keyed.into_iter().map(|(_, i)| moves[i].clone()).collect();
        moves.clone_from_slice(&ordered);
    }
}
