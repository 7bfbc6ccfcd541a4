//! Deterministic game core
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Cadences are millisecond accumulators fed by the caller's clock
//! - Seeded RNG only
//! - Stable slot order (by tooth id)
//! - No rendering or platform dependencies

pub mod board;
pub mod state;
pub mod tick;

pub use board::{Board, GermKind, Row, Tooth, ToothId};
pub use state::{FeedbackEvent, FeedbackKind, GameEvent, GameSession, GameStatus};
pub use tick::{attempt_clean, spawn_germ, tick};
