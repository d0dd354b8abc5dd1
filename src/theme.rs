use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::prefs::{read_or_none, write_best_effort, Preferences, RootElement, THEME_KEY};

const DARK_CLASS: &str = "dark";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("unknown theme: {0}")]
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(ThemeError::Unknown(other.to_string())),
        }
    }
}

pub struct ThemeStore {
    theme: Theme,
    prefs: Box<dyn Preferences>,
    root: Box<dyn RootElement>,
}

impl ThemeStore {
    /// Reads the persisted theme once. Anything but an explicit `"light"` or
    /// `"dark"` means dark.
    pub fn load(prefs: impl Preferences + 'static, root: impl RootElement + 'static) -> Self {
        let theme = read_or_none(&prefs, THEME_KEY)
            .and_then(|s| match s.parse() {
                Ok(theme) => Some(theme),
                Err(e) => {
                    log::warn!("ignoring stored theme: {e}");
                    None
                }
            })
            .unwrap_or_default();
        Self {
            theme,
            prefs: Box::new(prefs),
            root: Box::new(root),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme == Theme::Dark
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        write_best_effort(self.prefs.as_ref(), THEME_KEY, theme.as_str());
        self.apply_to_root();
    }

    pub fn toggle(&mut self) -> Theme {
        let next = self.theme.toggled();
        self.set_theme(next);
        next
    }

    pub fn apply_to_root(&self) {
        self.root.set_class(DARK_CLASS, self.is_dark());
    }
}
