//! Catalogs of locales to check when listing available languages.

use crate::locale::Locale;

/// Source of every locale the host knows about
pub trait LocaleCatalog: Send + Sync {
    fn all_locales(&self) -> Vec<Locale>;
}

impl LocaleCatalog for Vec<Locale> {
    fn all_locales(&self) -> Vec<Locale> {
        self.clone()
    }
}

const BUILTIN_TAGS: &[&str] = &[
    "af", "af_ZA", "am", "am_ET", "ar", "ar_EG", "ar_SA", "bg", "bg_BG", "bn", "bn_BD", "bn_IN",
    "bs", "ca", "ca_ES", "cs", "cs_CZ", "cy", "cy_GB", "da", "da_DK", "de", "de_AT", "de_CH",
    "de_DE", "el", "el_GR", "en", "en_AU", "en_CA", "en_GB", "en_IE", "en_IN", "en_NG", "en_NZ",
    "en_PH", "en_SG", "en_US", "en_US_POSIX", "en_ZA", "eo", "es", "es_AR", "es_CO", "es_ES",
    "es_MX", "es_US", "et", "eu", "fa", "fi", "fi_FI", "fil", "fil_PH", "fr", "fr_BE", "fr_CA",
    "fr_CH", "fr_FR", "ga", "ga_IE", "gl", "gu", "gu_IN", "he", "he_IL", "hi", "hi_IN", "hr",
    "hu", "hu_HU", "hy", "id", "id_ID", "is", "it", "it_CH", "it_IT", "ja", "ja_JP", "jv", "ka",
    "km", "kn", "kn_IN", "ko", "ko_KR", "la", "lt", "lv", "mk", "ml", "ml_IN", "mr", "mr_IN",
    "ms", "ms_MY", "my", "nb", "nb_NO", "ne", "ne_NP", "nl", "nl_BE", "nl_NL", "pa", "pa_IN",
    "pl", "pl_PL", "pt", "pt_BR", "pt_PT", "ro", "ro_RO", "ru", "ru_RU", "si", "si_LK", "sk",
    "sk_SK", "sl", "sq", "sr", "su", "sv", "sv_SE", "sw", "sw_KE", "ta", "ta_IN", "ta_LK", "te",
    "te_IN", "th", "th_TH", "tr", "tr_TR", "uk", "uk_UA", "ur", "ur_IN", "ur_PK", "vi", "vi_VN",
    "yue", "yue_HK", "zh", "zh_CN", "zh_HK", "zh_TW",
];

/// Fixed table of common locales
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinLocaleCatalog;

impl LocaleCatalog for BuiltinLocaleCatalog {
    fn all_locales(&self) -> Vec<Locale> {
        BUILTIN_TAGS
            .iter()
            .filter_map(|tag| tag.parse().ok())
            .collect()
    }
}
