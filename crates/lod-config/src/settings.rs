//! Process-wide settings.
//!
//! Resolution order: an explicit [`install`] → the `LOD_DEFAULT_LANGUAGE`
//! environment variable → built-in defaults. The first call to [`global`]
//! fixes the value for the life of the process.

use std::sync::OnceLock;

use lod_common::{Error, LanguageTag, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// System default language tag.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Environment variable overriding the default language list.
pub const DEFAULT_LANGUAGE_ENV: &str = "LOD_DEFAULT_LANGUAGE";

static GLOBAL: OnceLock<Settings> = OnceLock::new();

/// Settings shared by every authority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Last-resort language preference, used when neither the request nor
    /// the authority names one.
    #[serde(default = "default_language")]
    pub default_language: Vec<LanguageTag>,
}

fn default_language() -> Vec<LanguageTag> {
    vec![LanguageTag::from(DEFAULT_LANGUAGE)]
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_language: default_language(),
        }
    }
}

impl Settings {
    /// Settings with an explicit default language list.
    pub fn with_default_language<I, T>(tags: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<LanguageTag>,
    {
        let default_language: Vec<LanguageTag> = tags.into_iter().map(Into::into).collect();
        if default_language.is_empty() || default_language.iter().any(LanguageTag::is_empty) {
            return Err(Error::InvalidLanguage(
                "default language list must contain non-empty tags".to_string(),
            ));
        }
        Ok(Self { default_language })
    }

    /// Read overrides from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read overrides through `lookup`, falling back to defaults for unset
    /// variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        match lookup(DEFAULT_LANGUAGE_ENV) {
            Some(value) => {
                let tags: Vec<&str> = value
                    .split(',')
                    .map(str::trim)
                    .filter(|tag| !tag.is_empty())
                    .collect();
                if tags.is_empty() {
                    return Err(Error::InvalidLanguage(format!(
                        "{DEFAULT_LANGUAGE_ENV} is set but names no language"
                    )));
                }
                debug!(languages = %value, "default language taken from environment");
                Self::with_default_language(tags)
            }
            None => Ok(Self::default()),
        }
    }
}

/// Install process-wide settings. Fails if settings were already installed
/// or already read through [`global`].
pub fn install(settings: Settings) -> Result<()> {
    GLOBAL
        .set(settings)
        .map_err(|_| Error::SettingsAlreadyInstalled)
}

/// The process-wide settings.
pub fn global() -> &'static Settings {
    GLOBAL.get_or_init(|| {
        Settings::from_env().unwrap_or_else(|err| {
            warn!(error = %err, "ignoring invalid environment settings");
            Settings::default()
        })
    })
}
