//! Player preferences
//!
//! Persisted to LocalStorage. Game state itself is never saved - only
//! cosmetic choices live across page loads.

use serde::{Deserialize, Serialize};

/// Brush handle colors offered on the start screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BrushColor {
    #[default]
    Teal,
    Blue,
    Purple,
    Pink,
    Orange,
}

impl BrushColor {
    pub const ALL: [BrushColor; 5] = [
        BrushColor::Teal,
        BrushColor::Blue,
        BrushColor::Purple,
        BrushColor::Pink,
        BrushColor::Orange,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BrushColor::Teal => "teal",
            BrushColor::Blue => "blue",
            BrushColor::Purple => "purple",
            BrushColor::Pink => "pink",
            BrushColor::Orange => "orange",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "teal" => Some(BrushColor::Teal),
            "blue" => Some(BrushColor::Blue),
            "purple" => Some(BrushColor::Purple),
            "pink" => Some(BrushColor::Pink),
            "orange" => Some(BrushColor::Orange),
            _ => None,
        }
    }

    /// RGBA for the renderer
    pub fn rgba(&self) -> [f32; 4] {
        match self {
            BrushColor::Teal => [0.078, 0.722, 0.651, 1.0],
            BrushColor::Blue => [0.231, 0.510, 0.965, 1.0],
            BrushColor::Purple => [0.659, 0.333, 0.969, 1.0],
            BrushColor::Pink => [0.925, 0.282, 0.600, 1.0],
            BrushColor::Orange => [0.976, 0.451, 0.086, 1.0],
        }
    }

    /// CSS hex value, for the start-screen swatches
    pub fn hex(&self) -> &'static str {
        match self {
            BrushColor::Teal => "#14b8a6",
            BrushColor::Blue => "#3b82f6",
            BrushColor::Purple => "#a855f7",
            BrushColor::Pink => "#ec4899",
            BrushColor::Orange => "#f97316",
        }
    }
}

/// Player settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Brush handle color
    pub brush_color: BrushColor,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Mute all audio
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            brush_color: BrushColor::Teal,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "brushy_hero_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brush_color_round_trips_by_name() {
        for color in BrushColor::ALL {
            assert_eq!(BrushColor::from_str(color.as_str()), Some(color));
        }
        assert_eq!(BrushColor::from_str("plaid"), None);
    }
}
