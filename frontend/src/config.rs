use log::Level;

/// Fraction of the container that has to be inside the viewport before it counts as visible.
pub const REVEAL_THRESHOLD: f64 = 0.1;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Chatty while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
