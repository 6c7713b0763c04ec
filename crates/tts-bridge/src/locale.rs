//! Language tags and the locales they resolve to.
//!
//! A tag is `language[_REGION[_variant]]`, e.g. `"bn_BD"` or `"en_US_POSIX"`.

use crate::error::LocaleError;
use crate::names;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const TAG_SEPARATOR: char = '_';

/// Language/region/variant triple identifying a spoken-language variant
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Locale {
    /// Lower-case language code, e.g. "en"
    pub language: String,
    /// Upper-case region code, empty when absent
    #[serde(default)]
    pub region: String,
    /// Variant as given, empty when absent
    #[serde(default)]
    pub variant: String,
}

impl Locale {
    pub fn new(language: impl AsRef<str>) -> Self {
        Self::with_parts(language, "", "")
    }

    pub fn with_region(language: impl AsRef<str>, region: impl AsRef<str>) -> Self {
        Self::with_parts(language, region, "")
    }

    pub fn with_parts(
        language: impl AsRef<str>,
        region: impl AsRef<str>,
        variant: impl Into<String>,
    ) -> Self {
        Self {
            language: language.as_ref().to_ascii_lowercase(),
            region: region.as_ref().to_ascii_uppercase(),
            variant: variant.into(),
        }
    }

    pub fn has_region(&self) -> bool {
        !self.region.is_empty()
    }

    pub fn has_variant(&self) -> bool {
        !self.variant.is_empty()
    }

    /// English display name, e.g. "Bengali (Bangladesh)".
    ///
    /// Codes missing from the built-in name tables are shown as-is.
    pub fn display_name(&self) -> String {
        let language = names::language_name(&self.language).unwrap_or(self.language.as_str());

        let mut qualifiers: Vec<&str> = Vec::new();
        if self.has_region() {
            qualifiers.push(names::region_name(&self.region).unwrap_or(self.region.as_str()));
        }
        if self.has_variant() {
            qualifiers.push(self.variant.as_str());
        }

        if qualifiers.is_empty() {
            language.to_string()
        } else {
            format!("{} ({})", language, qualifiers.join(", "))
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        if self.has_region() || self.has_variant() {
            write!(f, "{}{}", TAG_SEPARATOR, self.region)?;
        }
        if self.has_variant() {
            write!(f, "{}{}", TAG_SEPARATOR, self.variant)?;
        }
        Ok(())
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        if tag.is_empty() {
            return Err(LocaleError::Empty);
        }

        let mut parts: Vec<&str> = tag.split(TAG_SEPARATOR).collect();
        // "en_" is treated like "en"
        while parts.len() > 1 && parts.last().is_some_and(|p| p.is_empty()) {
            parts.pop();
        }

        if parts[0].is_empty() {
            return Err(LocaleError::EmptyLanguage(tag.to_string()));
        }

        match parts.as_slice() {
            [language] => Ok(Locale::new(language)),
            [language, region] => Ok(Locale::with_region(language, region)),
            [language, region, variant] => Ok(Locale::with_parts(language, region, *variant)),
            _ => Err(LocaleError::TooManyParts(tag.to_string(), parts.len())),
        }
    }
}

/// Resolve a language tag, collapsing any parse failure into `None`.
pub fn resolve(tag: &str) -> Option<Locale> {
    match tag.parse::<Locale>() {
        Ok(locale) => Some(locale),
        Err(err) => {
            log::debug!("language tag '{}' not resolved: {}", tag, err);
            None
        }
    }
}

/// Locale of the current process, read from `LC_ALL`, `LC_MESSAGES` and `LANG`.
///
/// Codeset and modifier suffixes are stripped (`en_US.UTF-8` -> `en_US`);
/// the `C` and `POSIX` pseudo-locales yield `None`.
pub fn system_locale() -> Option<Locale> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|key| std::env::var(key).ok())
        .find(|value| !value.trim().is_empty())
        .and_then(|value| parse_posix_locale(&value))
}

pub(crate) fn parse_posix_locale(value: &str) -> Option<Locale> {
    let tag = value
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim();
    if tag.is_empty() || tag == "C" || tag == "POSIX" {
        return None;
    }
    resolve(tag)
}
