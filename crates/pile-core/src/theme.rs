use crate::constants::{THEME_OFFSET_DARK, THEME_OFFSET_LIGHT};
use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Visual variant of the pile page. Each theme lays the prints out differently.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Offset mixed into the hash base so the two tables do not share a layout.
    pub fn offset(self) -> i64 {
        match self {
            Theme::Light => THEME_OFFSET_LIGHT,
            Theme::Dark => THEME_OFFSET_DARK,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Theme::Light => "Scattered prints",
            Theme::Dark => "Dark table",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ConfigError::InvalidValue {
                key: "theme".to_string(),
                value: other.to_string(),
            }),
        }
    }
}
