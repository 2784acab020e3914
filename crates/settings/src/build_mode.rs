use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{API_URL_PLACEHOLDER, DEV_API_URL};

/// Build profile the settings are resolved for
///
/// Defaults to `Debug` when building with `debug_assertions`, `Release` otherwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    #[cfg_attr(debug_assertions, default)]
    Debug,
    #[cfg_attr(not(debug_assertions), default)]
    Release,
}

impl BuildMode {
    /// Mode of the current compilation
    pub const CURRENT: Self = if cfg!(debug_assertions) {
        Self::Debug
    } else {
        Self::Release
    };

    pub const fn current() -> Self {
        Self::CURRENT
    }

    pub const fn is_debug(self) -> bool {
        matches!(self, Self::Debug)
    }

    /// API base URL compiled into builds of this mode
    pub const fn api_url(self) -> &'static str {
        match self {
            Self::Debug => DEV_API_URL,
            Self::Release => API_URL_PLACEHOLDER,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Release => "release",
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown build mode `{0}`, expected `debug` or `release`")]
pub struct ParseBuildModeError(String);

impl FromStr for BuildMode {
    type Err = ParseBuildModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("debug") {
            Ok(Self::Debug)
        } else if s.eq_ignore_ascii_case("release") {
            Ok(Self::Release)
        } else {
            Err(ParseBuildModeError(s.to_string()))
        }
    }
}
