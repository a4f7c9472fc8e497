use rustc_hash::FxHashMap;

use draughts_core::{Color, Move};

/// (board hash, remaining depth, maximising flag, engine colour). Depth and
/// the maximising flag must be part of the key — a cached score is only
/// valid for the exact depth and side-relative framing it was computed
/// under (spec.md §4.E step 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TtKey {
    pub hash: u64,
    pub depth: u8,
    pub maximising: bool,
    pub engine: Color,
}

#[derive(Clone)]
pub struct TtEntry {
    pub score: i32,
    pub chosen: Option<Move>,
}

/// A flat transposition table, scoped to a single `bestMove` call and
/// cleared on entry. Grounded on the teacher's simple `TTable` (a bare
/// hash map, not the lock-free `MaybeUninit` table its parallel searcher
/// needed) since the spec's searcher is single-threaded.
#[derive(Default)]
pub struct TranspositionTable {
    map: FxHashMap<TtKey, TtEntry>,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self { map: FxHashMap::default() }
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }

    pub fn get(&self, key: &TtKey) -> Option<&TtEntry> {
        self.map.get(key)
    }

    pub fn insert(&mut self, key: TtKey, entry: TtEntry) {
        self.map.insert(key, entry);
    }
}
