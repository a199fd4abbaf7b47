//! Report data model deserialized from the JSON document.
//!
//! Historical data files are loose: any user-facing text field may be a bare
//! string or an `{ar, en}` mapping, and most fields are optional. Everything
//! here defaults instead of failing, so a sparse document renders as a sparse
//! page rather than an error.
use crate::lang::Language;
use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::HashMap;

/// Display text that may be untranslated (a bare scalar) or bilingual.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LocalizedText {
    Bilingual {
        #[serde(default)]
        ar: String,
        #[serde(default)]
        en: String,
    },
    Plain(String),
}

impl Default for LocalizedText {
    fn default() -> Self {
        LocalizedText::Plain(String::new())
    }
}

impl LocalizedText {
    /// Resolve the display string for `lang`. A bilingual mapping yields the
    /// matching entry, falling back to the other language when that entry is
    /// empty; a plain scalar is returned as-is. Never fails.
    pub fn resolve(&self, lang: Language) -> &str {
        match self {
            LocalizedText::Plain(s) => s,
            LocalizedText::Bilingual { ar, en } => {
                let (wanted, other) = match lang {
                    Language::Ar => (ar, en),
                    Language::En => (en, ar),
                };
                if wanted.is_empty() { other } else { wanted }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            LocalizedText::Plain(s) => s.is_empty(),
            LocalizedText::Bilingual { ar, en } => ar.is_empty() && en.is_empty(),
        }
    }
}

/// One labeled numeric series feeding a chart slot.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChartSeries {
    #[serde(default)]
    pub labels: Vec<LocalizedText>,
    #[serde(default)]
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CategoryCard {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub title: LocalizedText,
    #[serde(default)]
    pub projects: u64,
    #[serde(default)]
    pub beneficiaries: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProjectRow {
    #[serde(default)]
    pub name: LocalizedText,
    #[serde(default)]
    pub category: LocalizedText,
    #[serde(default)]
    pub location: LocalizedText,
    #[serde(default)]
    pub period: LocalizedText,
    #[serde(default)]
    pub donor: LocalizedText,
    #[serde(default)]
    pub beneficiaries: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TrainingRow {
    #[serde(default)]
    pub title: LocalizedText,
    #[serde(default)]
    pub location: LocalizedText,
    #[serde(default)]
    pub period: LocalizedText,
    #[serde(default)]
    pub target: LocalizedText,
    #[serde(default)]
    pub donor: LocalizedText,
    #[serde(default)]
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MineActionRow {
    #[serde(default)]
    pub activity: LocalizedText,
    #[serde(default)]
    pub location: LocalizedText,
    #[serde(default)]
    pub period: LocalizedText,
    #[serde(default)]
    pub items: u64,
    #[serde(default)]
    pub beneficiaries: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EventRow {
    #[serde(default)]
    pub title: LocalizedText,
    #[serde(default)]
    pub location: LocalizedText,
    #[serde(default)]
    pub date: LocalizedText,
    #[serde(default)]
    pub attendance: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MediaRow {
    #[serde(default)]
    pub title: LocalizedText,
    #[serde(default)]
    pub outlet: LocalizedText,
    #[serde(default)]
    pub date: LocalizedText,
    #[serde(default)]
    pub reach: u64,
}

/// Named data tables. Each table is independently optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Tables {
    #[serde(default)]
    pub projects: Vec<ProjectRow>,
    #[serde(default)]
    pub training: Vec<TrainingRow>,
    #[serde(default)]
    pub mines: Vec<MineActionRow>,
    #[serde(default)]
    pub events: Vec<EventRow>,
    #[serde(default)]
    pub media: Vec<MediaRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SectorRecord {
    #[serde(default)]
    pub label: LocalizedText,
    #[serde(default)]
    pub beneficiaries: u64,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GalleryItem {
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub caption: LocalizedText,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Recommendation {
    #[serde(default)]
    pub sector: LocalizedText,
    #[serde(default)]
    pub text: LocalizedText,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
}

/// Root document. Every section is optional; absent sections render nothing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AppData {
    #[serde(default)]
    pub stats: HashMap<String, u64>,
    #[serde(default)]
    pub charts: HashMap<String, ChartSeries>,
    #[serde(default)]
    pub categories_cards: Vec<CategoryCard>,
    #[serde(default)]
    pub tables: Tables,
    #[serde(default)]
    pub sector_impact: Option<IndexMap<String, SectorRecord>>,
    #[serde(default)]
    pub sector_summary_2025: Option<IndexMap<String, SectorRecord>>,
    #[serde(default)]
    pub gallery: Vec<GalleryItem>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

impl AppData {
    /// Sector block, preferring `sector_impact` over the older
    /// `sector_summary_2025` shape. Both still appear in circulation.
    pub fn sectors(&self) -> Option<&IndexMap<String, SectorRecord>> {
        self.sector_impact
            .as_ref()
            .or(self.sector_summary_2025.as_ref())
    }

    pub fn stat(&self, key: &str) -> Option<u64> {
        self.stats.get(key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn resolve_bilingual_picks_active_language() {
        let t: LocalizedText = serde_json::from_str(r#"{"ar":"صحة","en":"Health"}"#).unwrap();
        assert_eq!(t.resolve(Language::Ar), "صحة");
        assert_eq!(t.resolve(Language::En), "Health");
    }

    #[test]
    fn resolve_plain_scalar_unchanged() {
        let t: LocalizedText = serde_json::from_str(r#""Mosul""#).unwrap();
        assert_eq!(t.resolve(Language::Ar), "Mosul");
        assert_eq!(t.resolve(Language::En), "Mosul");
    }

    #[test]
    fn resolve_missing_key_falls_back_to_other_language() {
        let t: LocalizedText = serde_json::from_str(r#"{"en":"Water"}"#).unwrap();
        assert_eq!(t.resolve(Language::Ar), "Water");
    }

    #[test]
    fn default_text_resolves_empty() {
        let t = LocalizedText::default();
        assert_eq!(t.resolve(Language::En), "");
        assert!(t.is_empty());
    }

    #[test]
    fn project_row_missing_donor_is_empty_not_error() {
        let row: ProjectRow = serde_json::from_str(
            r#"{"name":{"ar":"مشروع","en":"Project"},"beneficiaries":1200}"#,
        )
        .unwrap();
        assert_eq!(row.donor.resolve(Language::En), "");
        assert_eq!(row.beneficiaries, 1200);
    }

    #[test]
    fn absent_numeric_fields_default_to_zero() {
        let row: TrainingRow = serde_json::from_str(r#"{"title":"First aid"}"#).unwrap();
        assert_eq!(row.count, 0);
    }

    #[test]
    fn sector_impact_preferred_over_summary() {
        let data: AppData = serde_json::from_str(
            r#"{
                "sector_impact": {"health": {"label": "Health", "beneficiaries": 10}},
                "sector_summary_2025": {"health": {"label": "Old", "beneficiaries": 99}}
            }"#,
        )
        .unwrap();
        let sectors = data.sectors().unwrap();
        assert_eq!(sectors["health"].beneficiaries, 10);
    }

    #[test]
    fn sector_summary_used_when_impact_absent() {
        let data: AppData = serde_json::from_str(
            r#"{"sector_summary_2025": {"wash": {"label": "WASH", "beneficiaries": 7}}}"#,
        )
        .unwrap();
        assert_eq!(data.sectors().unwrap()["wash"].beneficiaries, 7);
    }

    #[test]
    fn empty_document_deserializes_to_empty_sections() {
        let data: AppData = serde_json::from_str("{}").unwrap();
        assert!(data.stats.is_empty());
        assert!(data.sectors().is_none());
        assert!(data.tables.projects.is_empty());
        assert!(data.gallery.is_empty());
    }
}
