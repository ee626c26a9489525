use rand::Rng;
use rand::seq::SliceRandom;

use crate::ease::Ease;

/// The attendee list for one draw session.
///
/// `remaining` is always a sub-multiset of `all_names` in original relative
/// order: entries are removed by winning, never reordered or re-added except
/// by a full reload. Duplicate names are legal and occupy distinct wedges.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct AttendeePool {
    all_names: Vec<String>,
    remaining: Vec<String>,
}

impl AttendeePool {
    pub fn new(names: Vec<String>) -> Self {
        Self {
            remaining: names.clone(),
            all_names: names,
        }
    }

    pub fn all_names(&self) -> &[String] {
        &self.all_names
    }

    pub fn remaining(&self) -> &[String] {
        &self.remaining
    }

    pub fn remaining_len(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Removes and returns the entry at `index`. Indices of later entries
    /// shift down by one; callers capture name and index before removal.
    pub(crate) fn remove_at(&mut self, index: usize) -> String {
        self.remaining.remove(index)
    }
}

/// Winners in draw order. Append-only; cleared only by a full reload.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct WinnerHistory {
    entries: Vec<String>,
}

impl WinnerHistory {
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn record(&mut self, winner: impl Into<String>) {
        self.entries.push(winner.into());
    }
}

/// Session configuration, supplied read-only by the presentation adapter.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct WheelConfig {
    /// Delete the winner from the remaining pool after each spin. When
    /// disabled a name may be drawn again; history still records every draw.
    pub remove_winner_after_draw: bool,
    /// Apply one uniform random permutation to the list at load time.
    pub shuffle_on_load: bool,
    /// Minimum number of full 360-degree turns per spin, for visual effect.
    pub min_full_turns: u32,
    /// Number of animation frames produced per spin.
    pub frame_count: usize,
    /// Deceleration profile applied to the spin frames.
    pub spin_ease: Ease,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            remove_winner_after_draw: true,
            shuffle_on_load: false,
            min_full_turns: 5,
            frame_count: 50,
            spin_ease: Ease::Linear,
        }
    }
}

impl WheelConfig {
    pub(crate) fn arrange<R: Rng>(&self, mut names: Vec<String>, rng: &mut R) -> Vec<String> {
        if self.shuffle_on_load {
            names.shuffle(rng);
        }
        names
    }
}

/// Outcome of a single spin, captured at selection time.
#[derive(Clone, Debug, serde::Serialize)]
pub struct DrawResult {
    pub winner_name: String,
    pub winner_index: usize, // position within `remaining` at selection time
    pub start_rotation: f64, // degrees, cumulative
    pub target_rotation: f64,
}
