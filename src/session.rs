//! The draw session: pool lifecycle, selection policy, and spin orchestration.
//!
//! A [`DrawSession`] is the single owner of the attendee pool, the winner
//! history, the rotation accumulator, and the announced winner. There are no
//! ambient globals; the presentation adapter holds one session and invokes
//! event handlers on it (`load`, `spin`, `finish_spin`, `dismiss_winner`).

use std::num::NonZeroUsize;

use rand::Rng;

use crate::{
    animator::FrameSequence,
    error::{WheelError, WheelResult},
    geometry,
    model::{AttendeePool, DrawResult, WheelConfig, WinnerHistory},
    parse::parse_names,
};

/// Where a session is in its draw cycle.
///
/// ```text
/// Empty --load--> Loaded --spin--> Spinning --finish_spin--> Announced
///                   ^                                            |
///                   +--------------- dismiss_winner -------------+
/// ```
///
/// A spin with an exhausted pool is rejected with
/// [`WheelError::EmptyPool`] and does not change phase. Reloading from any
/// phase returns to `Loaded`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Phase {
    Empty,
    Loaded,
    Spinning,
    Announced,
}

/// Everything the presentation adapter needs to run one spin: the resolved
/// draw and the frame sequence to render. Pacing is the adapter's concern.
#[derive(Clone, Debug)]
pub struct SpinPlan {
    pub result: DrawResult,
    pub frames: FrameSequence,
}

#[derive(Debug)]
pub struct DrawSession {
    config: WheelConfig,
    pool: AttendeePool,
    history: WinnerHistory,
    rotation: f64, // cumulative degrees across spins, reset on load
    winner: Option<String>,
    phase: Phase,
}

impl DrawSession {
    pub fn new(config: WheelConfig) -> Self {
        Self {
            config,
            pool: AttendeePool::default(),
            history: WinnerHistory::default(),
            rotation: 0.0,
            winner: None,
            phase: Phase::Empty,
        }
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn pool(&self) -> &AttendeePool {
        &self.pool
    }

    pub fn remaining(&self) -> &[String] {
        self.pool.remaining()
    }

    pub fn winners(&self) -> &[String] {
        self.history.entries()
    }

    /// Cumulative rotation in degrees, the starting angle of the next spin.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The winner currently on display, once the animation has finished.
    pub fn announced_winner(&self) -> Option<&str> {
        match self.phase {
            Phase::Announced => self.winner.as_deref(),
            _ => None,
        }
    }

    pub fn show_popup(&self) -> bool {
        self.announced_winner().is_some()
    }

    /// Replaces the attendee pool, clearing history, rotation, and any
    /// announced winner. An empty list yields an empty pool: a soft
    /// "waiting for input" state, not an error.
    pub fn load<R: Rng>(&mut self, names: Vec<String>, rng: &mut R) {
        let names = self.config.arrange(names, rng);
        tracing::info!(attendees = names.len(), "pool loaded");
        self.pool = AttendeePool::new(names);
        self.history = WinnerHistory::default();
        self.rotation = 0.0;
        self.winner = None;
        self.phase = Phase::Loaded;
    }

    /// Parses raw attendee text (comma/newline separated) and loads it.
    pub fn load_text<R: Rng>(&mut self, text: &str, rng: &mut R) {
        self.load(parse_names(text), rng);
    }

    /// Draws a winner uniformly at random and plans the spin animation.
    ///
    /// Side effects happen at selection time: the winner is removed from the
    /// remaining pool (when configured), appended to history, and the
    /// rotation accumulator advances to the landing target. The session
    /// stays in `Spinning` until [`finish_spin`](Self::finish_spin).
    #[tracing::instrument(skip(self, rng))]
    pub fn spin<R: Rng>(&mut self, rng: &mut R) -> WheelResult<SpinPlan> {
        let len = self.pool.remaining_len();
        if len == 0 {
            return Err(WheelError::empty_pool("no attendees left to draw"));
        }
        self.spin_at(rng.gen_range(0..len))
    }

    /// Deterministic core of [`spin`](Self::spin): lands on a known index.
    /// Useful for replaying a recorded draw.
    pub fn spin_at(&mut self, winner_index: usize) -> WheelResult<SpinPlan> {
        if self.phase == Phase::Spinning {
            return Err(WheelError::session("a spin is already in flight"));
        }
        let pool_size = NonZeroUsize::new(self.pool.remaining_len())
            .ok_or_else(|| WheelError::empty_pool("no attendees left to draw"))?;
        if winner_index >= pool_size.get() {
            return Err(WheelError::session(format!(
                "winner index {winner_index} out of range for pool of {pool_size}"
            )));
        }

        // Capture name and index before removal shifts anything.
        let winner_name = self.pool.remaining()[winner_index].clone();
        let start_rotation = self.rotation;
        let target_rotation = geometry::target_rotation_for_index(
            pool_size,
            winner_index,
            start_rotation,
            self.config.min_full_turns,
        );

        if self.config.remove_winner_after_draw {
            self.pool.remove_at(winner_index);
        }
        self.history.record(winner_name.clone());
        self.rotation = target_rotation;
        self.winner = Some(winner_name.clone());
        self.phase = Phase::Spinning;
        tracing::debug!(
            winner = %winner_name,
            index = winner_index,
            target = target_rotation,
            remaining = self.pool.remaining_len(),
            "spin resolved"
        );

        Ok(SpinPlan {
            result: DrawResult {
                winner_name,
                winner_index,
                start_rotation,
                target_rotation,
            },
            frames: FrameSequence::new(
                start_rotation,
                target_rotation,
                self.config.frame_count,
                self.config.spin_ease,
            ),
        })
    }

    /// Marks the spin animation as complete; the winner becomes visible.
    pub fn finish_spin(&mut self) {
        if self.phase == Phase::Spinning {
            self.phase = Phase::Announced;
        }
    }

    /// Dismisses the winner popup without touching pool or history.
    pub fn dismiss_winner(&mut self) {
        self.winner = None;
        if self.phase == Phase::Announced {
            self.phase = Phase::Loaded;
        }
    }
}
