//! Voice list reported by `espeak-ng --voices`

use crate::engine::LanguageAvailability;
use crate::locale::Locale;
use std::collections::BTreeSet;

/// Language codes of the installed voices, lower-case (`en`, `en-us`, `pt-br`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoiceTable {
    codes: BTreeSet<String>,
}

impl VoiceTable {
    /// Parse the tabular output of `espeak-ng --voices`.
    ///
    /// ```text
    /// Pty Language       Age/Gender VoiceName          File                 Other Languages
    ///  5  af              --/M      Afrikaans          gmw/af
    ///  2  en-us           --/M      English_(America)  gmw/en-US            (en 3)
    /// ```
    pub fn parse(output: &str) -> Self {
        let codes = output
            .lines()
            .filter_map(|line| {
                let mut columns = line.split_whitespace();
                let priority = columns.next()?;
                if priority.parse::<u32>().is_err() {
                    return None;
                }
                columns.next().map(str::to_ascii_lowercase)
            })
            .collect();
        Self { codes }
    }

    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            codes: codes
                .into_iter()
                .map(|c| c.as_ref().to_ascii_lowercase())
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn rank(&self, locale: &Locale) -> LanguageAvailability {
        if self.regional_code(locale).is_some() {
            LanguageAvailability::CountryAvailable
        } else if self.language_code(locale).is_some() {
            LanguageAvailability::Available
        } else {
            LanguageAvailability::NotSupported
        }
    }

    /// Best voice for `locale`: exact region first, then the bare language,
    /// then any regional voice of that language.
    pub fn voice_for(&self, locale: &Locale) -> Option<String> {
        self.regional_code(locale)
            .or_else(|| self.language_code(locale))
            .cloned()
    }

    fn regional_code(&self, locale: &Locale) -> Option<&String> {
        if !locale.has_region() {
            return None;
        }
        let code = format!(
            "{}-{}",
            locale.language,
            locale.region.to_ascii_lowercase()
        );
        self.codes.get(&code)
    }

    fn language_code(&self, locale: &Locale) -> Option<&String> {
        if locale.language.is_empty() {
            return None;
        }
        let prefix = format!("{}-", locale.language);
        self.codes.get(&locale.language).or_else(|| {
            self.codes
                .range(prefix.clone()..)
                .take_while(|code| code.starts_with(&prefix))
                .next()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VOICES: &str = "\
Pty Language       Age/Gender VoiceName          File                 Other Languages
 5  af              --/M      Afrikaans          gmw/af
 5  bn              --/M      Bengali            inc/bn
 2  en-gb           --/M      English_(Great_Britain) gmw/en            (en 2)
 2  en-us           --/M      English_(America)  gmw/en-US            (en 3)
 5  pt-br           --/M      Portuguese_(Brazil) roa/pt-BR           (pt 5)
";

    #[test]
    fn test_parse_voice_list() {
        let table = VoiceTable::parse(VOICES);
        assert_eq!(table.len(), 5);
        assert_eq!(table, VoiceTable::from_codes(["af", "bn", "en-GB", "en-us", "pt-br"]));
    }

    #[test]
    fn test_parse_empty_output() {
        assert!(VoiceTable::parse("").is_empty());
        assert!(VoiceTable::parse("Pty Language Age/Gender\n").is_empty());
    }

    #[test]
    fn test_rank() {
        let table = VoiceTable::parse(VOICES);
        assert_eq!(
            table.rank(&Locale::with_region("en", "US")),
            LanguageAvailability::CountryAvailable
        );
        assert_eq!(
            table.rank(&Locale::with_region("en", "AU")),
            LanguageAvailability::Available
        );
        assert_eq!(
            table.rank(&Locale::with_region("bn", "BD")),
            LanguageAvailability::Available
        );
        assert_eq!(table.rank(&Locale::new("pt")), LanguageAvailability::Available);
        assert_eq!(table.rank(&Locale::new("de")), LanguageAvailability::NotSupported);
    }

    #[test]
    fn test_voice_for() {
        let table = VoiceTable::parse(VOICES);
        assert_eq!(
            table.voice_for(&Locale::with_region("en", "US")).as_deref(),
            Some("en-us")
        );
        assert_eq!(table.voice_for(&Locale::new("en")).as_deref(), Some("en-gb"));
        assert_eq!(table.voice_for(&Locale::new("bn")).as_deref(), Some("bn"));
        assert_eq!(table.voice_for(&Locale::new("de")), None);
    }
}
