use std::{env, path::PathBuf, time::Duration};

// Runtime constants (not gameplay tuning).

// Log a serialized frame every N ticks.
pub const FRAME_LOG_EVERY: u64 = 60;

pub fn tick_interval() -> Duration {
    let millis = env::var("TICK_INTERVAL_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .filter(|millis| *millis > 0)
        .unwrap_or(16);
    Duration::from_millis(millis)
}

/// Number of ticks the demo runs for; `None` runs until Ctrl-C or avatar death.
pub fn demo_ticks() -> Option<u64> {
    let ticks = env::var("DEMO_TICKS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(600);
    (ticks > 0).then_some(ticks)
}

pub fn asset_manifest_path() -> Option<PathBuf> {
    env::var_os("ASSET_MANIFEST").map(PathBuf::from)
}

pub fn demo_script_path() -> Option<PathBuf> {
    env::var_os("DEMO_SCRIPT").map(PathBuf::from)
}
