use log::Level;

/// Cross-fade between the contact card's two faces.
pub const HOVER_FADE_MS: u32 = 300;

/// Overlay fade/scale-in.
pub const MODAL_ENTER_MS: u32 = 200;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
