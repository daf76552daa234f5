//! User-level settings that outlive a session.

pub mod preferences;

pub use preferences::Preferences;

/// Where this app keeps per-user settings, if the platform has such a place.
#[must_use]
pub fn preferences_dir() -> Option<std::path::PathBuf> {
    let mut base_dir = dirs::preference_dir()?;
    base_dir.push(env!("CARGO_PKG_NAME"));
    Some(base_dir)
}
