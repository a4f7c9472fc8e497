// A command line tool that plays one self-play game between two named
// profiles and prints the board after every move, along with the search
// counters for whichever side used the minimax searcher.
//
// Usage:
//   $ draughts-cli [white-profile] [black-profile] [max-depth] [simulations]
//
// Profile names are any of Losing, Intermediate, Expert, Aggressive,
// Defensive, RandomWeights, RandomPlay, Balanced, or MonteCarlo. Defaults
// to Expert vs Expert at depth 6 with 300 Monte-Carlo simulations.

use std::env::args;

use draughts_core::{Board, Color, GameResult};
use draughts_engine::{MinimaxSearcher, MonteCarloSearcher, Profile};

const DEFAULT_PROFILE: &str = "Expert";
const DEFAULT_DEPTH: u8 = 6;
const DEFAULT_SIMULATIONS: u32 = 300;
const MAX_PLIES: u32 = 300;

enum Engine {
    Minimax(MinimaxSearcher),
    MonteCarlo(MonteCarloSearcher),
}

fn main() {
    let mut argv = args();
    argv.next(); // executable path

    let white_profile = argv.next().unwrap_or_else(|| DEFAULT_PROFILE.to_owned());
    let black_profile = argv.next().unwrap_or_else(|| DEFAULT_PROFILE.to_owned());
    let max_depth: u8 = argv
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_DEPTH);
    let simulations: u32 = argv
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SIMULATIONS);

    let mut white = build_engine(Color::White, &white_profile, max_depth, simulations);
    let mut black = build_engine(Color::Black, &black_profile, max_depth, simulations);

    let mut board = Board::new_initial();
    println!("{board}");

    for ply in 1..=MAX_PLIES {
        if board.terminal_with_draw() {
            break;
        }

        let side = board.side_to_move();
        let engine = if side == Color::White { &mut white } else { &mut black };

        let Some(mv) = decide(engine, &mut board) else {
            println!("{side} has no legal moves.");
            break;
        };

        board.apply(&mv);
        println!("ply {ply}: {side} plays {mv}");
        if let Engine::Minimax(searcher) = engine {
            let counters = searcher.counters();
            println!(
                "  nodes={} cacheHits={} alphaCutoffs={} betaCutoffs={}",
                counters.nodes, counters.cache_hits, counters.alpha_cutoffs, counters.beta_cutoffs
            );
        }
        println!("{board}");
    }

    match board.winner() {
        GameResult::InProgress => println!("stopped after {MAX_PLIES} plies without a result"),
        result => println!("result: {result}"),
    }
}

fn build_engine(color: Color, profile_name: &str, max_depth: u8, simulations: u32) -> Engine {
    // Profile::by_name needs an rng only to sample RandomWeights; a
    // throwaway one is fine here since the searchers below seed their own.
    let mut rng = rand::thread_rng();
    let profile = Profile::by_name(profile_name, &mut rng);

    if profile.is_monte_carlo() {
        Engine::MonteCarlo(MonteCarloSearcher::new(color, simulations))
    } else {
        Engine::Minimax(MinimaxSearcher::new(color, max_depth, profile_name))
    }
}

fn decide(engine: &mut Engine, board: &mut Board) -> Option<draughts_core::Move> {
    match engine {
        Engine::Minimax(searcher) => searcher.best_move(board),
        Engine::MonteCarlo(searcher) => searcher.best_move(board),
    }
}
