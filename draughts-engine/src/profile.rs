use rand::Rng;

use crate::evaluation::Weights;

/// A named style, mapping to either a weight vector for the minimax
/// searcher or the `MonteCarlo` sentinel that routes decision-making to
/// the rollout searcher instead. Grounded on the teacher's `EngineConfig`
/// (a small struct selecting engine behaviour by name), generalized from
/// a single hardcoded configuration to a registry of named presets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Profile {
    Losing,
    Intermediate,
    Expert,
    Aggressive,
    Defensive,
    RandomWeights(Weights),
    RandomPlay,
    Balanced,
    MonteCarlo,
}

impl Profile {
    /// Resolves a profile name. Unknown names silently fall back to
    /// Expert, per spec.md §7 ("behavioural compatibility").
    pub fn by_name(name: &str, rng: &mut impl Rng) -> Profile {
        match name {
            "Losing" => Profile::Losing,
            "Intermediate" => Profile::Intermediate,
            "Expert" => Profile::Expert,
            "Aggressive" => Profile::Aggressive,
            "Defensive" => Profile::Defensive,
            "RandomWeights" => Profile::RandomWeights(random_weights(rng)),
            "RandomPlay" => Profile::RandomPlay,
            "Balanced" => Profile::Balanced,
            "MonteCarlo" => Profile::MonteCarlo,
            _ => Profile::Expert,
        }
    }

    /// The weight vector this profile evaluates with, or `None` for the
    /// `MonteCarlo` sentinel which carries no weights at all.
    pub fn weights(&self) -> Option<Weights> {
        match self {
            Profile::Losing => Some(Weights::new(1, 1, 5, 7, 1, 1, 10, 1, 2)),
            Profile::Intermediate => Some(Weights::new(15, 15, 15, 15, 20, 20, 10, 20, 15)),
            Profile::Expert => Some(Weights::new(60, 25, 30, 20, 45, 45, 10, 40, 35)),
            Profile::Aggressive => Some(Weights::new(100, 25, 8, 35, 95, 50, 12, 20, 15)),
            Profile::Defensive => Some(Weights::new(50, 12, 45, 20, 30, 10, 50, 1, 25)),
            Profile::RandomWeights(w) => Some(*w),
            Profile::RandomPlay => Some(Weights::new(0, 0, 0, 0, 0, 0, 0, 0, 0)),
            Profile::Balanced => Some(Weights::new(10, 10, 10, 10, 10, 10, 10, 10, 10)),
            Profile::MonteCarlo => None,
        }
    }

    pub fn is_monte_carlo(&self) -> bool {
        matches!(self, Profile::MonteCarlo)
    }
}

fn random_weights(rng: &mut impl Rng) -> Weights {
    let mut draw = || rng.gen_range(0..=50);
    Weights::new(
        draw(),
        draw(),
        draw(),
        draw(),
        draw(),
        draw(),
        draw(),
        draw(),
        draw(),
    )
}
