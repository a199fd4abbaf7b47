//! Chart models and SVG geometry.
//!
//! Four fixed slots mirror the report layout: category distribution (pie),
//! donor breakdown (bar), activity distribution (doughnut) and the monthly
//! referral trend (line). Each slot owns at most one built model at a time;
//! installing into the registry drops any previous model for that slot, so
//! re-rendering can never stack two charts on one target.
use crate::lang::Language;
use crate::types::ChartSeries;
use std::collections::HashMap;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Pie,
    Bar,
    Doughnut,
    Line,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartSlot {
    Categories,
    Donors,
    Activities,
    AmbulanceMonthly,
}

/// Render order of the chart section.
pub const SLOTS: [ChartSlot; 4] = [
    ChartSlot::Categories,
    ChartSlot::Donors,
    ChartSlot::Activities,
    ChartSlot::AmbulanceMonthly,
];

impl ChartSlot {
    pub fn kind(self) -> ChartKind {
        match self {
            ChartSlot::Categories => ChartKind::Pie,
            ChartSlot::Donors => ChartKind::Bar,
            ChartSlot::Activities => ChartKind::Doughnut,
            ChartSlot::AmbulanceMonthly => ChartKind::Line,
        }
    }

    /// Key of this slot's series in the document's `charts` mapping.
    pub fn series_key(self) -> &'static str {
        match self {
            ChartSlot::Categories => "categories",
            ChartSlot::Donors => "donors",
            ChartSlot::Activities => "activities",
            ChartSlot::AmbulanceMonthly => "ambulance_monthly",
        }
    }

    /// UI-string key for the slot heading.
    pub fn title_key(self) -> &'static str {
        match self {
            ChartSlot::Categories => "chart.categories",
            ChartSlot::Donors => "chart.donors",
            ChartSlot::Activities => "chart.activities",
            ChartSlot::AmbulanceMonthly => "chart.ambulance",
        }
    }

    /// Fixed palette, cycled over the series when it is longer.
    pub fn palette(self) -> &'static [&'static str] {
        match self {
            ChartSlot::Categories => &[
                "#b11226", "#1f4e79", "#2ecc71", "#8e44ad", "#f39c12", "#7f8c8d",
            ],
            ChartSlot::Donors => &["#1f4e79"],
            ChartSlot::Activities => &["#e74c3c", "#3498db", "#27ae60", "#9b59b6"],
            ChartSlot::AmbulanceMonthly => &["#b11226"],
        }
    }
}

/// A built chart: resolved labels, raw values, per-point colors.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartModel {
    pub slot: ChartSlot,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<&'static str>,
}

/// Build the model for one slot, resolving labels for `lang`. Returns `None`
/// when the series is absent or empty — that slot is simply skipped.
pub fn build(
    slot: ChartSlot,
    charts: &HashMap<String, ChartSeries>,
    lang: Language,
) -> Option<ChartModel> {
    let series = charts.get(slot.series_key())?;
    if series.values.is_empty() {
        return None;
    }
    let palette = slot.palette();
    let labels = series
        .labels
        .iter()
        .map(|l| l.resolve(lang).to_string())
        .collect();
    let colors = (0..series.values.len())
        .map(|i| palette[i % palette.len()])
        .collect();
    Some(ChartModel {
        slot,
        labels,
        values: series.values.clone(),
        colors,
    })
}

/// Owner of the live chart models, one per slot.
#[derive(Debug, Default)]
pub struct ChartRegistry {
    slots: HashMap<ChartSlot, ChartModel>,
}

impl ChartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a model, dropping any prior model bound to the same slot.
    pub fn install(&mut self, model: ChartModel) {
        self.slots.insert(model.slot, model);
    }

    /// Rebuild every slot from the document. Slots whose series disappeared
    /// are removed rather than left stale.
    pub fn rebuild(&mut self, charts: &HashMap<String, ChartSeries>, lang: Language) {
        for slot in SLOTS {
            match build(slot, charts, lang) {
                Some(model) => self.install(model),
                None => {
                    self.slots.remove(&slot);
                }
            }
        }
    }

    pub fn get(&self, slot: ChartSlot) -> Option<&ChartModel> {
        self.slots.get(&slot)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

// --- SVG geometry -----------------------------------------------------------

/// Angular extent of each value as a fraction of the whole, in input order.
/// Empty when the total is not a positive finite number.
pub fn fractions(values: &[f64]) -> Vec<f64> {
    let total: f64 = values.iter().filter(|v| v.is_finite() && **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    values
        .iter()
        .map(|v| if v.is_finite() && *v > 0.0 { v / total } else { 0.0 })
        .collect()
}

fn polar(cx: f64, cy: f64, r: f64, frac: f64) -> (f64, f64) {
    // Fraction 0 points straight up; angles grow clockwise.
    let angle = frac * std::f64::consts::TAU - std::f64::consts::FRAC_PI_2;
    (cx + r * angle.cos(), cy + r * angle.sin())
}

/// SVG path for one pie sector from `start` to `end` (fractions of a turn).
pub fn pie_sector_path(cx: f64, cy: f64, r: f64, start: f64, end: f64) -> String {
    let (x0, y0) = polar(cx, cy, r, start);
    let (x1, y1) = polar(cx, cy, r, end);
    let large = u8::from(end - start > 0.5);
    let mut p = String::new();
    let _ = write!(
        p,
        "M {cx:.2} {cy:.2} L {x0:.2} {y0:.2} A {r:.2} {r:.2} 0 {large} 1 {x1:.2} {y1:.2} Z"
    );
    p
}

/// SVG path for one annular (doughnut) sector.
pub fn doughnut_sector_path(
    cx: f64,
    cy: f64,
    outer: f64,
    inner: f64,
    start: f64,
    end: f64,
) -> String {
    let (ox0, oy0) = polar(cx, cy, outer, start);
    let (ox1, oy1) = polar(cx, cy, outer, end);
    let (ix0, iy0) = polar(cx, cy, inner, end);
    let (ix1, iy1) = polar(cx, cy, inner, start);
    let large = u8::from(end - start > 0.5);
    let mut p = String::new();
    let _ = write!(
        p,
        "M {ox0:.2} {oy0:.2} A {outer:.2} {outer:.2} 0 {large} 1 {ox1:.2} {oy1:.2} \
         L {ix0:.2} {iy0:.2} A {inner:.2} {inner:.2} 0 {large} 0 {ix1:.2} {iy1:.2} Z"
    );
    p
}

/// Bar layout: `(x, y, w, h)` per value inside a `width × height` viewport,
/// baseline at the bottom, bars scaled against the series maximum.
pub fn bar_layout(values: &[f64], width: f64, height: f64) -> Vec<(f64, f64, f64, f64)> {
    if values.is_empty() {
        return Vec::new();
    }
    let max = values.iter().cloned().fold(0.0_f64, f64::max);
    let slot_w = width / values.len() as f64;
    let bar_w = slot_w * 0.6;
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let h = if max > 0.0 { (v.max(0.0) / max) * height } else { 0.0 };
            let x = i as f64 * slot_w + (slot_w - bar_w) / 2.0;
            (x, height - h, bar_w, h)
        })
        .collect()
}

/// Polyline points (`"x,y x,y …"`) for the line chart, scaled to the
/// viewport with the baseline at zero.
pub fn line_points(values: &[f64], width: f64, height: f64) -> String {
    if values.is_empty() {
        return String::new();
    }
    let max = values.iter().cloned().fold(0.0_f64, f64::max);
    let step = if values.len() > 1 {
        width / (values.len() - 1) as f64
    } else {
        0.0
    };
    let mut out = String::new();
    for (i, v) in values.iter().enumerate() {
        let y = if max > 0.0 {
            height - (v.max(0.0) / max) * height
        } else {
            height
        };
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{:.2},{y:.2}", i as f64 * step);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LocalizedText;
    use pretty_assertions::assert_eq;

    fn charts_with(key: &str, labels: Vec<&str>, values: Vec<f64>) -> HashMap<String, ChartSeries> {
        let mut m = HashMap::new();
        m.insert(
            key.to_string(),
            ChartSeries {
                labels: labels
                    .into_iter()
                    .map(|l| LocalizedText::Plain(l.to_string()))
                    .collect(),
                values,
            },
        );
        m
    }

    #[test]
    fn absent_series_skips_slot() {
        let charts = charts_with("donors", vec!["A"], vec![1.0]);
        assert!(build(ChartSlot::Categories, &charts, Language::En).is_none());
        assert!(build(ChartSlot::Donors, &charts, Language::En).is_some());
    }

    #[test]
    fn palette_cycles_over_long_series() {
        let charts = charts_with(
            "activities",
            vec!["a", "b", "c", "d", "e"],
            vec![1.0, 2.0, 3.0, 4.0, 5.0],
        );
        let model = build(ChartSlot::Activities, &charts, Language::En).unwrap();
        assert_eq!(model.colors.len(), 5);
        assert_eq!(model.colors[4], model.colors[0]);
    }

    #[test]
    fn registry_replaces_model_per_slot() {
        let mut reg = ChartRegistry::new();
        let first = charts_with("categories", vec!["one"], vec![1.0]);
        let second = charts_with("categories", vec!["two"], vec![2.0, 3.0]);
        reg.rebuild(&first, Language::En);
        reg.rebuild(&second, Language::En);
        assert_eq!(reg.len(), 1);
        assert_eq!(
            reg.get(ChartSlot::Categories).unwrap().labels,
            vec!["two".to_string()]
        );
    }

    #[test]
    fn registry_drops_slot_when_series_disappears() {
        let mut reg = ChartRegistry::new();
        reg.rebuild(&charts_with("donors", vec!["A"], vec![4.0]), Language::En);
        assert_eq!(reg.len(), 1);
        reg.rebuild(&HashMap::new(), Language::En);
        assert!(reg.is_empty());
    }

    #[test]
    fn fractions_sum_to_one() {
        let f = fractions(&[1.0, 2.0, 3.0]);
        let sum: f64 = f.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!((f[2] - 0.5).abs() < 1e-9);
    }

    #[test]
    fn fractions_of_zero_total_are_empty() {
        assert!(fractions(&[0.0, 0.0]).is_empty());
        assert!(fractions(&[]).is_empty());
    }

    #[test]
    fn bar_layout_scales_to_max() {
        let bars = bar_layout(&[5.0, 10.0], 200.0, 100.0);
        assert_eq!(bars.len(), 2);
        assert!((bars[0].3 - 50.0).abs() < 1e-9);
        assert!((bars[1].3 - 100.0).abs() < 1e-9);
        assert!((bars[1].1 - 0.0).abs() < 1e-9);
    }

    #[test]
    fn line_points_span_viewport() {
        let pts = line_points(&[0.0, 10.0], 100.0, 50.0);
        assert_eq!(pts, "0.00,50.00 100.00,0.00");
    }

    #[test]
    fn sector_path_is_closed() {
        let p = pie_sector_path(50.0, 50.0, 40.0, 0.0, 0.25);
        assert!(p.starts_with("M 50.00 50.00"));
        assert!(p.ends_with('Z'));
    }
}
