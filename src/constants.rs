//! Application constants and configuration

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000/api";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "SkillSwap";
pub const DATA_DIR_NAME: &str = "SkillSwap";

/// Maximum offered-skill chips shown on a browse card before collapsing to "+N".
pub const CARD_MAX_SKILL_CHIPS: usize = 5;
