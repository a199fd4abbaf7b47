//! Language state and embedded UI string table.
//!
//! The active language is process-wide: initialized once from the persisted
//! preference (default Arabic), flipped by the toggle control, and read by
//! every renderer. Persistence failures are swallowed — the language still
//! changes in memory for the current session.
use once_cell::sync::{Lazy, OnceCell};
use parking_lot::RwLock;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Ar,
    En,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::En => "en",
        }
    }

    /// Document reading direction for this language.
    pub fn dir(self) -> &'static str {
        match self {
            Language::Ar => "rtl",
            Language::En => "ltr",
        }
    }

    pub fn flipped(self) -> Language {
        match self {
            Language::Ar => Language::En,
            Language::En => Language::Ar,
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        match code.trim() {
            "ar" => Some(Language::Ar),
            "en" => Some(Language::En),
            _ => None,
        }
    }
}

static ACTIVE: OnceCell<RwLock<Language>> = OnceCell::new();

/// File holding the persisted language code, next to the executable.
/// Overridable for tests and sandboxed installs.
fn prefs_path() -> Option<PathBuf> {
    if let Ok(p) = std::env::var("RELIEF_REPORT_LANG_FILE") {
        return Some(PathBuf::from(p));
    }
    let exe = std::env::current_exe().ok()?;
    Some(exe.with_file_name(".relief-report-lang"))
}

fn load_persisted() -> Option<Language> {
    let raw = std::fs::read_to_string(prefs_path()?).ok()?;
    Language::from_code(&raw)
}

fn persist(lang: Language) {
    let Some(path) = prefs_path() else { return };
    if let Err(e) = std::fs::write(&path, lang.code()) {
        // Non-fatal: the in-memory language already changed.
        warn!("could not persist language preference: {e}");
    }
}

/// Initialize global language state from the persisted preference (one-time).
pub fn init() {
    let lang = load_persisted().unwrap_or(Language::Ar);
    ACTIVE.set(RwLock::new(lang)).ok();
}

/// Current language, defaulting to Arabic if `init` was never called.
pub fn active() -> Language {
    ACTIVE.get().map(|l| *l.read()).unwrap_or(Language::Ar)
}

/// Flip ar↔en, persist, and return the new language. The caller is expected
/// to follow with a full re-render.
pub fn toggle() -> Language {
    let next = match ACTIVE.get() {
        Some(cell) => {
            let mut w = cell.write();
            *w = w.flipped();
            *w
        }
        None => Language::Ar,
    };
    persist(next);
    next
}

#[derive(Debug, Deserialize)]
struct UiString {
    #[serde(default)]
    ar: String,
    #[serde(default)]
    en: String,
}

// Embedded bilingual table for static chrome text (headers, buttons, labels).
static UI_STRINGS: Lazy<HashMap<String, UiString>> = Lazy::new(|| {
    serde_json::from_str(include_str!("../assets/ui_strings.json")).unwrap_or_default()
});

/// Static UI string for `key` in language `lang`; falls back to the key
/// itself when missing so a typo is visible rather than blank.
pub fn tr_in(key: &str, lang: Language) -> String {
    match UI_STRINGS.get(key) {
        Some(s) => match lang {
            Language::Ar => s.ar.clone(),
            Language::En => s.en.clone(),
        },
        None => key.to_string(),
    }
}

/// Static UI string for `key` in the active language.
pub fn tr(key: &str) -> String {
    tr_in(key, active())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn toggle_twice_round_trips() {
        assert_eq!(Language::Ar.flipped().flipped(), Language::Ar);
        assert_eq!(Language::En.flipped(), Language::Ar);
    }

    #[test]
    fn direction_follows_language() {
        assert_eq!(Language::Ar.dir(), "rtl");
        assert_eq!(Language::En.dir(), "ltr");
    }

    #[test]
    fn from_code_rejects_unknown() {
        assert_eq!(Language::from_code("ar"), Some(Language::Ar));
        assert_eq!(Language::from_code(" en\n"), Some(Language::En));
        assert_eq!(Language::from_code("fr"), None);
    }

    #[test]
    fn tr_falls_back_to_key() {
        assert_eq!(tr_in("no.such.key", Language::En), "no.such.key");
    }

    #[test]
    fn tr_returns_language_entry() {
        assert_eq!(tr_in("app.title", Language::En), "Annual Humanitarian Report");
        assert!(!tr_in("app.title", Language::Ar).is_empty());
    }
}
