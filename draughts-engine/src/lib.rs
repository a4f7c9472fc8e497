mod evaluation;
mod minimax;
mod montecarlo;
mod profile;
mod transposition;

pub use evaluation::{evaluate, orient, Weights};
pub use minimax::{MinimaxSearcher, SearchCounters};
pub use montecarlo::MonteCarloSearcher;
pub use profile::Profile;
