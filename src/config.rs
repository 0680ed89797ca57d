// Spin Tuning
// Rotation magnitude is drawn uniformly from this inclusive range. The bounds
// are deliberately plain constants, not derived from wheel geometry.
pub const SPIN_MIN_DEGREES: u32 = 2_000;
pub const SPIN_MAX_DEGREES: u32 = 10_000;
pub const SPIN_DURATION_MS: u64 = 4_000;

// Wheel Geometry (simulated animator)
pub const FULL_TURN_DEGREES: f32 = 360.0;

// Settings
pub const SETTINGS_DIR: &str = "config";
pub const SETTINGS_INI_PATH: &str = "config/famwheel.ini";
pub const DEFAULT_ROSTER_PATH: &str = "assets/roster.json";
pub const DEFAULT_API_URL: &str = "https://family.dodamdodam.app/api/profile/list";

// Networking
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

// History display
pub const HISTORY_TIME_FORMAT: &str = "%H:%M:%S";
