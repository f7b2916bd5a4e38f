//! Internationalization module
//!
//! Provides translations for Portuguese (pt) and English (en) languages.
//! Supports automatic language detection based on system locale.

mod en;
mod pt;

use std::collections::HashMap;

/// Internationalization manager
pub struct I18n {
    current_lang: String,
    translations: HashMap<String, String>,
}

impl I18n {
    /// Create a new I18n instance with the specified language
    pub fn new(lang: &str) -> Self {
        let mut i18n = Self {
            current_lang: String::new(),
            translations: HashMap::new(),
        };
        i18n.set_language(lang);
        i18n
    }

    /// Set the current language
    pub fn set_language(&mut self, lang: &str) {
        let lang = if lang == "auto" {
            detect_system_language()
        } else {
            lang.to_string()
        };

        self.translations = match lang.as_str() {
            "pt" => pt::get_translations(),
            _ => en::get_translations(),
        };
        self.current_lang = if lang == "pt" { lang } else { "en".to_string() };

        log::info!("Language set to: {}", self.current_lang);
    }

    /// Get a translated string by key
    pub fn get(&self, key: &str) -> String {
        self.translations
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Get the current language code
    pub fn current_language(&self) -> &str {
        &self.current_lang
    }

}

impl Default for I18n {
    fn default() -> Self {
        Self::new("auto")
    }
}

/// Detect system language from the locale environment variables
fn detect_system_language() -> String {
    let lang_env = std::env::var("LANG")
        .or_else(|_| std::env::var("LC_ALL"))
        .or_else(|_| std::env::var("LC_MESSAGES"))
        .unwrap_or_else(|_| "en".to_string());

    language_code(&lang_env).to_string()
}

/// Extract a supported language code (e.g., "pt_BR.UTF-8" -> "pt")
fn language_code(locale: &str) -> &'static str {
    let code = locale
        .split(['_', '.', '-'])
        .next()
        .unwrap_or("en");

    match code {
        "pt" => "pt",
        _ => "en",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_code() {
        assert_eq!(language_code("pt_BR.UTF-8"), "pt");
        assert_eq!(language_code("pt-PT"), "pt");
        assert_eq!(language_code("fr_FR.UTF-8"), "en");
        assert_eq!(language_code("C"), "en");
    }

    #[test]
    fn test_lookup_and_fallback() {
        let i18n = I18n::new("pt");
        assert_eq!(i18n.current_language(), "pt");
        assert_eq!(i18n.get("list.monthly_cost"), "Gasto do m\u{00EA}s");
        assert_eq!(i18n.get("missing.key"), "missing.key");
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        let i18n = I18n::new("de");
        assert_eq!(i18n.current_language(), "en");
        assert_eq!(i18n.get("form.save"), "Save");
    }

    #[test]
    fn test_languages_share_keys() {
        let en = en::get_translations();
        let pt = pt::get_translations();
        let mut en_keys: Vec<_> = en.keys().collect();
        let mut pt_keys: Vec<_> = pt.keys().collect();
        en_keys.sort();
        pt_keys.sort();
        assert_eq!(en_keys, pt_keys);
    }
}
