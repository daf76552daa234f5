use doodler_core::{
    state::{BackgroundSwatch, BrushSwatch},
    BrushSettings, BrushSize, Session,
};

const DOCUMENTATION: &str = r#"# Doodler preferences. You may edit this file, but be aware that formatting and comments will not
# be preserved, and all keys and values are case sensitive.
# These only choose how a new session starts - nothing drawn is ever written here.

# brush_color: one of "Black", "Red", "Green", "Blue", "Yellow"
# brush_size: stroke width in pixels, between 4 and 50
# background_color: one of "White", "LightGray", "Yellow", "Cyan"
# window_size: initial [width, height] of the window in logical pixels

"#;

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Preferences {
    pub brush_color: BrushSwatch,
    pub brush_size: f32,
    pub background_color: BackgroundSwatch,
    pub window_size: [f32; 2],
}
impl Default for Preferences {
    fn default() -> Self {
        Self {
            brush_color: BrushSwatch::default(),
            brush_size: BrushSize::DEFAULT.get(),
            background_color: BackgroundSwatch::default(),
            window_size: [960.0, 720.0],
        }
    }
}

/// How [`Preferences::load`] went.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum LoadStatus {
    /// Read from the user's file.
    Loaded,
    /// No file exists yet. Defaults are in use, and it's fine to write them out.
    Missing,
    /// A file exists but couldn't be used. Defaults are in use, and the file must be left alone.
    Failed,
}

impl Preferences {
    const FILENAME: &'static str = "preferences.toml";
    const MIN_WINDOW: [f32; 2] = [480.0, 360.0];

    #[must_use]
    pub fn default_file_location() -> Option<std::path::PathBuf> {
        let mut path = super::preferences_dir()?;
        path.push(Self::FILENAME);
        Some(path)
    }
    /// Load from the user's preferences dir, or default.
    #[must_use]
    pub fn load() -> (Self, LoadStatus) {
        match Self::default_file_location() {
            Some(path) => Self::load_or_default(&path),
            None => {
                log::warn!("No preferences dir found, using default preferences.");
                (Self::default(), LoadStatus::Failed)
            }
        }
    }
    #[must_use]
    fn load_or_default(path: &std::path::Path) -> (Self, LoadStatus) {
        let loaded: anyhow::Result<Self> = try_block::try_block! {
            let string = std::fs::read_to_string(path)?;
            let preferences = Self::from_toml(&string)?;

            Ok(preferences)
        };

        match loaded {
            Ok(preferences) => (preferences, LoadStatus::Loaded),
            Err(e)
                if e.downcast_ref::<std::io::Error>()
                    .is_some_and(|e| e.kind() == std::io::ErrorKind::NotFound) =>
            {
                log::info!("No preferences at {path:?}, using defaults.");
                (Self::default(), LoadStatus::Missing)
            }
            Err(e) => {
                log::warn!("Failed to load preferences from {path:?}, using defaults:\n{e:#}");
                (Self::default(), LoadStatus::Failed)
            }
        }
    }
    /// Parse and sanitize. Out-of-range numbers are pulled back in range rather than rejected.
    pub fn from_toml(string: &str) -> anyhow::Result<Self> {
        let mut preferences: Self = toml::from_str(string)?;

        let size = BrushSize::clamped(preferences.brush_size).get();
        if size != preferences.brush_size {
            log::warn!(
                "brush_size {} outside of {:?}, using {size}",
                preferences.brush_size,
                BrushSize::RANGE
            );
            preferences.brush_size = size;
        }
        for (axis, min) in preferences.window_size.iter_mut().zip(Self::MIN_WINDOW) {
            if !axis.is_finite() || *axis < min {
                *axis = min;
            }
        }
        Ok(preferences)
    }
    pub fn save(&self) -> anyhow::Result<()> {
        let mut preferences =
            super::preferences_dir().ok_or_else(|| anyhow::anyhow!("No preferences dir found"))?;
        // Explicity do *not* create recursively. If not found, the user probably has a good reason.
        // Ignore errors (could already exist). Any real errors will be emitted by file access below.
        let _ = std::fs::DirBuilder::new().create(&preferences);

        preferences.push(Self::FILENAME);
        std::fs::write(preferences, self.to_documented_toml()?)?;
        Ok(())
    }
    fn to_documented_toml(&self) -> anyhow::Result<String> {
        let string = toml::ser::to_string_pretty(self)?;
        Ok(DOCUMENTATION.to_owned() + &string)
    }
    /// A fresh, empty session using these preferences.
    #[must_use]
    pub fn new_session(&self) -> Session {
        Session::new(
            BrushSettings {
                color: self.brush_color.color(),
                size: BrushSize::clamped(self.brush_size),
            },
            self.background_color.color(),
        )
    }
    #[must_use]
    pub fn min_window_size() -> [f32; 2] {
        Self::MIN_WINDOW
    }
}
