//! Settings a new game is started with.

use jumpmaze_core::Lcg;
use jumpmaze_paths::JumpRules;

/// Playable radius of a new game when none is chosen.
pub const DEFAULT_RADIUS: i32 = 10;
/// Largest playable radius accepted.
pub const MAX_RADIUS: i32 = 100;
/// Largest seed accepted; seeds live in `[1, 2^31)`.
pub const MAX_SEED: u32 = (Lcg::MODULUS - 1) as u32;

/// Settings for generating a board and playing it.
///
/// The values are latched when a session is built: changing a config does
/// not affect a running session until it is regenerated.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Playable radius, at least 1.
    pub radius: i32,
    /// Seed to rebuild a known board; `None` draws a fresh one.
    pub seed: Option<u32>,
    /// Only check the landing cell of a jump.
    pub skip_intermediate: bool,
    /// Hide reachability hints and disable route replay.
    pub no_help: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            seed: None,
            skip_intermediate: false,
            no_help: false,
        }
    }
}

impl GameConfig {
    /// Clamp every field into its accepted range.
    ///
    /// The radius is clamped to `1..=MAX_RADIUS` and a seed to
    /// `1..=MAX_SEED`.
    pub fn normalized(&self) -> Self {
        Self {
            radius: self.radius.clamp(1, MAX_RADIUS),
            seed: self.seed.map(|s| s.clamp(1, MAX_SEED)),
            ..self.clone()
        }
    }

    /// The jump rules this config selects.
    pub fn rules(&self) -> JumpRules {
        JumpRules {
            skip_intermediate: self.skip_intermediate,
        }
    }
}
