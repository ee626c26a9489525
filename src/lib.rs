//! Luckwheel is a lucky-draw wheel engine: load a list of attendee names,
//! draw one uniformly at random, and animate a wheel landing on the winner.
//!
//! The crate is computation-only. Rendering, audio, and frame pacing belong
//! to a presentation adapter (see `src/bin/luckwheel.rs` for a terminal one);
//! the engine hands it everything it needs:
//!
//! 1. **Parse**: raw text -> attendee names ([`parse_names`])
//! 2. **Draw**: [`DrawSession::spin`] picks the winner and mutates the pool
//! 3. **Geometry**: wedge bounds and a forward-only landing angle
//! 4. **Animate**: a [`FrameSequence`] of rotation angles ending exactly on
//!    the landing angle
//!
//! Evaluation is deterministic given an RNG: every randomized operation is
//! generic over [`rand::Rng`], so tests and replays seed their own.

#![forbid(unsafe_code)]

pub mod animator;
pub mod ease;
pub mod error;
pub mod geometry;
pub mod model;
pub mod parse;
pub mod session;

pub use animator::{FrameSequence, Frames, generate_frames};
pub use ease::Ease;
pub use error::{WheelError, WheelResult};
pub use model::{AttendeePool, DrawResult, WheelConfig, WinnerHistory};
pub use parse::parse_names;
pub use session::{DrawSession, Phase, SpinPlan};
