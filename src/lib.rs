//! Brushy Hero - a toothbrushing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic game core (board, spawner, countdown, scoring)
//! - `input`: Pointer/touch tracking mapped to per-tooth brush attempts
//! - `renderer`: WebGPU shape rendering (mouth, teeth, germs, brush, foam)
//! - `audio`: Procedural Web Audio sound effects
//! - `settings`: Player preferences (brush color, volume)

pub mod audio;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{BrushColor, Settings};

/// Game configuration constants
pub mod consts {
    /// Teeth per jaw; the board holds twice this
    pub const TEETH_PER_ROW: usize = 10;

    /// Germ spawner cadence (ms)
    pub const SPAWN_INTERVAL_MS: f64 = 800.0;
    /// Chance a spawner step actually places a germ
    pub const SPAWN_CHANCE: f64 = 0.7;

    /// Countdown cadence (ms)
    pub const TIMER_INTERVAL_MS: f64 = 1000.0;

    /// Feedback particle lifetime (ms)
    pub const FEEDBACK_TTL_MS: f64 = 1000.0;

    /// Selectable round lengths (seconds)
    pub const ROUND_BLITZ_SECS: u32 = 30;
    pub const ROUND_ROUTINE_SECS: u32 = 120;

    /// Chance a brush stroke kicks up a foam bubble
    pub const AMBIENT_FEEDBACK_CHANCE: f64 = 0.5;
    /// Chance a foam bubble also gets the swish sound
    pub const AMBIENT_SOUND_CHANCE: f64 = 0.4;

    /// Cleanliness percentage at or below which the results screen plays
    /// the losing jingle instead of the fanfare
    pub const WIN_CLEANLINESS_THRESHOLD: u32 = 70;

    /// Brush cursor tilt model (degrees): base angle, sway per pixel of
    /// horizontal movement, and the clamp range
    pub const BRUSH_BASE_TILT: f32 = -45.0;
    pub const BRUSH_TILT_PER_PX: f32 = 2.0;
    pub const BRUSH_TILT_MIN: f32 = -80.0;
    pub const BRUSH_TILT_MAX: f32 = -10.0;
}
