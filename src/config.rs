use log::Level;

/// How long a submission stays in flight before it is confirmed.
pub const SUBMIT_DELAY_MS: u32 = 1_500;

/// Fraction of a region that has to be on screen before it fades in.
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

pub const WHATSAPP_URL: &str = "https://wa.me/57TU_NUMERO";

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug  // Verbose when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}
