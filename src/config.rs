use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// How long the loading screen stays up before the page mounts.
pub const LOADING_DELAY_MS: u32 = 2000;

// Entrance timings, in seconds.
pub const STAGGER_CHILDREN_SECS: f64 = 0.2;
pub const DELAY_CHILDREN_SECS: f64 = 0.1;
pub const FADE_IN_UP_SECS: f64 = 0.8;
pub const SCALE_IN_SECS: f64 = 0.6;
pub const SLIDE_IN_SECS: f64 = 0.8;
pub const RISE_IN_SECS: f64 = 0.8;

/// Mobile menu collapse; must match the `menu-exit` keyframe duration.
pub const MENU_EXIT_MS: u32 = 300;

pub const ORBIT_PRIMARY_PERIOD_SECS: f64 = 20.0;
pub const ORBIT_SECONDARY_PERIOD_SECS: f64 = 25.0;
pub const LOOP_TICK_MS: u32 = 40;

/// Fraction of an element that must be on screen before it counts as entered.
pub const VIEWPORT_THRESHOLD: f64 = 0.1;
pub const VIEWPORT_ROOT_MARGIN: &str = "0px 0px -50px 0px";
