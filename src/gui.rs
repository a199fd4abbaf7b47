//! Dioxus desktop GUI: the report page itself.
//!
//! The root component owns the load state, the active language and the chart
//! registry. A language toggle re-renders the whole tree with the new
//! language — full re-render is deliberate, each section is its own
//! component so it could be made incremental later.
use crate::charts::{self, ChartKind, ChartModel, ChartRegistry, SLOTS};
use crate::counter::{self, Counter};
use crate::data::{self, LoadState};
use crate::format::{group_digits, group_f64};
use crate::gallery::{self, Lightbox};
use crate::lang::{self, tr_in, Language};
use crate::types::AppData;
use dioxus::prelude::*;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

const REPORT_CSS: &str = r#":root {
    --brand: #b11226;
    --brand-dark: #8c0e1e;
    --navy: #1f4e79;
    --bg: #f7f7f5;
    --panel: #ffffff;
    --border: #e3e1dc;
    --text: #2d2d2d;
    --text-light: #6b6b6b;
    --radius: 12px;
}
html,body { margin:0; background:var(--bg); color:var(--text); font-family:'Tajawal','Segoe UI',Arial,sans-serif; }
#root { max-width:1100px; margin:0 auto; padding:16px 20px 48px 20px; display:flex; flex-direction:column; gap:28px; }
.report-header { display:flex; align-items:center; justify-content:space-between; gap:16px; border-bottom:3px solid var(--brand); padding-bottom:12px; }
.report-header h1 { margin:0; font-size:26px; color:var(--brand); }
.report-header p { margin:4px 0 0 0; color:var(--text-light); font-size:14px; }
.lang-toggle { background:var(--navy); color:#fff; border:none; border-radius:20px; padding:8px 18px; font-size:14px; cursor:pointer; }
.lang-toggle:hover { background:#16395a; }
section h2 { font-size:20px; color:var(--navy); border-inline-start:5px solid var(--brand); padding-inline-start:10px; margin:0 0 14px 0; }
.stats-grid { display:grid; grid-template-columns:repeat(auto-fit,minmax(180px,1fr)); gap:14px; }
.stat-card { background:var(--panel); border:1px solid var(--border); border-radius:var(--radius); padding:18px; text-align:center; }
.stat-number { display:block; font-size:30px; font-weight:700; color:var(--brand); }
.stat-label { font-size:13px; color:var(--text-light); }
.card-grid { display:grid; grid-template-columns:repeat(auto-fit,minmax(200px,1fr)); gap:14px; }
.category-card, .sector-card { background:var(--panel); border:1px solid var(--border); border-radius:var(--radius); padding:16px; display:flex; flex-direction:column; gap:6px; }
.category-card h4, .sector-card h4 { margin:0; font-size:15px; }
.card-metric { font-size:13px; color:var(--text-light); }
.charts-grid { display:grid; grid-template-columns:repeat(auto-fit,minmax(320px,1fr)); gap:18px; }
.chart-panel { background:var(--panel); border:1px solid var(--border); border-radius:var(--radius); padding:14px; }
.chart-panel h3 { margin:0 0 10px 0; font-size:15px; color:var(--navy); }
.legend { display:flex; flex-wrap:wrap; gap:8px 14px; margin-top:8px; font-size:12px; color:var(--text-light); }
.legend-swatch { display:inline-block; width:10px; height:10px; border-radius:2px; margin-inline-end:5px; }
table.data { width:100%; border-collapse:collapse; background:var(--panel); font-size:13px; }
table.data th { background:var(--navy); color:#fff; padding:8px 10px; text-align:start; }
table.data td { border-bottom:1px solid var(--border); padding:7px 10px; }
table.data tr:nth-child(even) td { background:#fbfaf8; }
.empty-row td { text-align:center; color:var(--text-light); font-style:italic; }
.recommendation-card { background:linear-gradient(135deg,#f8f9fa,#e9ecef); border-radius:var(--radius); padding:20px; border-inline-start:5px solid var(--brand); }
.recommendation-card h3 { margin:0 0 8px 0; font-size:15px; }
.recommendation-card p { margin:0; line-height:1.6; color:var(--text-light); font-size:13px; }
.gallery-grid { display:grid; grid-template-columns:repeat(auto-fill,minmax(160px,1fr)); gap:10px; }
.gallery-tile { position:relative; border-radius:8px; overflow:hidden; cursor:pointer; border:1px solid var(--border); background:#000; }
.gallery-tile img { width:100%; height:120px; object-fit:cover; display:block; }
.gallery-tile figcaption { position:absolute; inset-inline:0; bottom:0; background:rgba(0,0,0,0.55); color:#fff; font-size:11px; padding:4px 6px; }
.pager { display:flex; justify-content:center; gap:6px; margin-top:12px; }
.pager button { border:1px solid var(--border); background:var(--panel); border-radius:6px; padding:4px 10px; cursor:pointer; font-size:13px; }
.pager button.active { background:var(--brand); color:#fff; border-color:var(--brand); }
.lightbox { position:fixed; inset:0; z-index:999; background:rgba(0,0,0,0.85); display:flex; flex-direction:column; align-items:center; justify-content:center; gap:10px; outline:none; }
.lightbox img { max-width:84vw; max-height:76vh; border-radius:6px; }
.lightbox .caption { color:#eee; font-size:14px; }
.lightbox .controls { display:flex; gap:14px; }
.lightbox button { background:rgba(255,255,255,0.12); color:#fff; border:none; border-radius:6px; padding:8px 16px; font-size:15px; cursor:pointer; }
.loading-overlay { position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(247,247,245,0.9); z-index:998; font-size:16px; color:var(--navy); }
.error-box { background:#fdecea; border:1px solid #f5c6c2; color:#8c0e1e; border-radius:var(--radius); padding:18px; }
"#;

/// Launch the desktop application.
pub fn run() -> anyhow::Result<()> {
    dioxus_desktop::launch::launch(
        app,
        vec![],
        vec![Box::new(dioxus_desktop::Config::default())],
    );
}

/// Headline figures: stable stat key + UI-string key. Lookup by localized
/// label is a deprecated historical shape and is not supported here.
const STAT_KEYS: [(&str, &str); 4] = [
    ("beneficiaries", "stat.beneficiaries"),
    ("projects", "stat.projects"),
    ("governorates", "stat.governorates"),
    ("volunteers", "stat.volunteers"),
];

/// Root component: loads the document once, then fans out to the section
/// renderers in fixed order.
fn app() -> Element {
    let mut lang_sig: Signal<Language> = use_signal(lang::active);
    let mut state: Signal<LoadState> = use_signal(|| LoadState::Loading);
    let mut registry: Signal<ChartRegistry> = use_signal(ChartRegistry::new);

    // One-shot load; both outcomes leave Loading, which hides the overlay.
    use_future(move || async move {
        let source = data::default_source();
        let next = data::load_into_state(&source).await;
        if let LoadState::Ready(d) = &next {
            registry.write().rebuild(&d.charts, *lang_sig.peek());
        }
        state.set(next);
    });

    // Window title follows the active language.
    let window = dioxus_desktop::use_window();
    {
        let win = window.clone();
        use_effect(move || {
            let l = lang_sig();
            win.set_title(&tr_in("app.title", l));
        });
    }

    let l = lang_sig();
    rsx! {
        div { id: "root", dir: l.dir(), lang: l.code(),
            style { {REPORT_CSS} }
            header { class: "report-header",
                div {
                    h1 { {tr_in("app.title", l)} }
                    p { {tr_in("app.subtitle", l)} }
                }
                // The single external toggle entry point.
                button { class: "lang-toggle",
                    onclick: move |_| {
                        let next = lang::toggle();
                        info!("language toggled to {}", next.code());
                        lang_sig.set(next);
                        if let LoadState::Ready(d) = &*state.peek() {
                            registry.write().rebuild(&d.charts, next);
                        }
                    },
                    {tr_in("lang.switch", l)}
                }
            }
            {
                match state() {
                    LoadState::Loading => rsx! {
                        div { class: "loading-overlay", {tr_in("app.loading", l)} }
                    },
                    LoadState::Error(detail) => rsx! {
                        div { class: "error-box",
                            strong { {tr_in("app.error", l)} }
                            p { "{detail}" }
                        }
                    },
                    LoadState::Ready(data) => rsx! {
                        Report { data, lang: l, registry }
                    },
                }
            }
        }
    }
}

/// Fixed render order: stats, sector impact, category cards, charts, tables,
/// recommendations, gallery.
#[component]
fn Report(data: Arc<AppData>, lang: Language, registry: Signal<ChartRegistry>) -> Element {
    rsx! {
        StatsSection { data: data.clone(), lang }
        SectorSection { data: data.clone(), lang }
        CategoryCards { data: data.clone(), lang }
        ChartsSection { registry, lang }
        TablesSection { data: data.clone(), lang }
        RecommendationsSection { data: data.clone(), lang }
        GallerySection { data, lang }
    }
}

/// One animated headline figure.
#[component]
fn StatCounter(target: u64, lang: Language) -> Element {
    let mut shown = use_signal(|| 0u64);
    use_future(move || async move {
        let mut c = Counter::new(target);
        if c.done() {
            shown.set(target);
            return;
        }
        loop {
            tokio::time::sleep(Duration::from_millis(counter::TICK_MS)).await;
            shown.set(c.tick());
            if c.done() {
                break;
            }
        }
    });
    rsx! {
        span { class: "stat-number", {group_digits(shown(), lang)} }
    }
}

#[component]
fn StatsSection(data: Arc<AppData>, lang: Language) -> Element {
    let cards: Vec<(&str, u64)> = STAT_KEYS
        .iter()
        .filter_map(|(key, label)| data.stat(key).map(|v| (*label, v)))
        .collect();
    if cards.is_empty() {
        return rsx! {};
    }
    rsx! {
        section {
            h2 { {tr_in("section.stats", lang)} }
            div { class: "stats-grid",
                for (label, value) in cards {
                    div { class: "stat-card",
                        StatCounter { target: value, lang }
                        span { class: "stat-label", {tr_in(label, lang)} }
                    }
                }
            }
        }
    }
}

#[component]
fn SectorSection(data: Arc<AppData>, lang: Language) -> Element {
    let Some(sectors) = data.sectors() else {
        return rsx! {};
    };
    rsx! {
        section {
            h2 { {tr_in("section.sectors", lang)} }
            div { class: "card-grid",
                for (key, s) in sectors.iter() {
                    div { key: "{key}", class: "sector-card",
                        style: if s.color.is_empty() { String::new() } else { format!("border-inline-start:5px solid {};", s.color) },
                        h4 {
                            i { class: "fas {s.icon}" }
                            " "
                            {s.label.resolve(lang).to_string()}
                        }
                        span { class: "card-metric",
                            {format!("{} {}", group_digits(s.beneficiaries, lang), tr_in("unit.beneficiary", lang))}
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CategoryCards(data: Arc<AppData>, lang: Language) -> Element {
    if data.categories_cards.is_empty() {
        return rsx! {};
    }
    rsx! {
        section {
            h2 { {tr_in("section.categories", lang)} }
            div { class: "card-grid",
                for (i, c) in data.categories_cards.iter().enumerate() {
                    div { key: "cat{i}", class: "category-card cat-{c.key}",
                        i { class: "fas {c.icon}" }
                        h4 { {c.title.resolve(lang).to_string()} }
                        span { class: "card-metric",
                            {format!("{} {}", group_digits(c.projects, lang), tr_in("unit.project", lang))}
                        }
                        span { class: "card-metric",
                            {format!("{} {}", group_digits(c.beneficiaries, lang), tr_in("unit.beneficiary", lang))}
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ChartsSection(registry: Signal<ChartRegistry>, lang: Language) -> Element {
    let reg = registry.read();
    if reg.is_empty() {
        return rsx! {};
    }
    let models: Vec<ChartModel> = SLOTS.iter().filter_map(|s| reg.get(*s)).cloned().collect();
    rsx! {
        section {
            h2 { {tr_in("section.charts", lang)} }
            div { class: "charts-grid",
                for model in models {
                    ChartFigure { model, lang }
                }
            }
        }
    }
}

#[component]
fn ChartFigure(model: ChartModel, lang: Language) -> Element {
    let title = tr_in(model.slot.title_key(), lang);
    let body = match model.slot.kind() {
        ChartKind::Pie => render_round_chart(&model, None),
        ChartKind::Doughnut => render_round_chart(&model, Some(34.0)),
        ChartKind::Bar => render_bar_chart(&model, lang),
        ChartKind::Line => render_line_chart(&model),
    };
    rsx! {
        div { class: "chart-panel",
            h3 { {title} }
            {body}
            div { class: "legend",
                for (i, label) in model.labels.iter().enumerate() {
                    span { key: "lg{i}",
                        span { class: "legend-swatch",
                            style: format!("background:{};", model.colors.get(i).copied().unwrap_or("#999")),
                        }
                        {format!("{label} ({})", group_f64(model.values.get(i).copied().unwrap_or(0.0), lang))}
                    }
                }
            }
        }
    }
}

/// Pie when `inner` is `None`, doughnut otherwise.
fn render_round_chart(model: &ChartModel, inner: Option<f64>) -> Element {
    let fracs = charts::fractions(&model.values);
    if fracs.is_empty() {
        return rsx! {};
    }
    let mut start = 0.0;
    let mut sectors: Vec<(String, &'static str)> = Vec::with_capacity(fracs.len());
    for (i, f) in fracs.iter().enumerate() {
        if *f <= 0.0 {
            continue;
        }
        let end = start + f;
        let d = match inner {
            Some(r) => charts::doughnut_sector_path(60.0, 60.0, 56.0, r, start, end),
            None => charts::pie_sector_path(60.0, 60.0, 56.0, start, end),
        };
        sectors.push((d, model.colors.get(i).copied().unwrap_or("#999")));
        start = end;
    }
    rsx! {
        svg { view_box: "0 0 120 120", width: "220", height: "220",
            for (i, (d, color)) in sectors.into_iter().enumerate() {
                path { key: "s{i}", d: "{d}", fill: "{color}", stroke: "#fff", stroke_width: "0.5" }
            }
        }
    }
}

fn render_bar_chart(model: &ChartModel, lang: Language) -> Element {
    let bars = charts::bar_layout(&model.values, 300.0, 140.0);
    rsx! {
        svg { view_box: "0 0 300 160", width: "100%",
            line { x1: "0", y1: "140", x2: "300", y2: "140", stroke: "#ccc", stroke_width: "1" }
            for (i, (x, y, w, h)) in bars.into_iter().enumerate() {
                rect { key: "b{i}",
                    x: "{x}", y: "{y}", width: "{w}", height: "{h}",
                    fill: model.colors.get(i).copied().unwrap_or("#1f4e79"),
                }
            }
            for (i, v) in model.values.iter().enumerate() {
                text { key: "t{i}",
                    x: format!("{}", (i as f64 + 0.5) * 300.0 / model.values.len() as f64),
                    y: "154",
                    text_anchor: "middle",
                    font_size: "9",
                    fill: "#6b6b6b",
                    {group_f64(*v, lang)}
                }
            }
        }
    }
}

fn render_line_chart(model: &ChartModel) -> Element {
    let points = charts::line_points(&model.values, 300.0, 130.0);
    if points.is_empty() {
        return rsx! {};
    }
    let color = model.colors.first().copied().unwrap_or("#b11226");
    // Closed area under the line for the soft fill.
    let area = format!("{points} 300.00,130.00 0.00,130.00");
    rsx! {
        svg { view_box: "0 0 300 140", width: "100%",
            polygon { points: "{area}", fill: "rgba(177,18,38,0.15)" }
            polyline { points: "{points}", fill: "none", stroke: "{color}", stroke_width: "2" }
        }
    }
}

#[component]
fn TablesSection(data: Arc<AppData>, lang: Language) -> Element {
    rsx! {
        ProjectsTable { data: data.clone(), lang }
        TrainingTable { data: data.clone(), lang }
        MinesTable { data: data.clone(), lang }
        EventsTable { data: data.clone(), lang }
        MediaTable { data, lang }
    }
}

#[component]
fn ProjectsTable(data: Arc<AppData>, lang: Language) -> Element {
    let rows = &data.tables.projects;
    rsx! {
        section {
            h2 { {tr_in("section.projects", lang)} }
            table { class: "data",
                thead {
                    tr {
                        th { "#" }
                        th { {tr_in("col.name", lang)} }
                        th { {tr_in("col.category", lang)} }
                        th { {tr_in("col.location", lang)} }
                        th { {tr_in("col.period", lang)} }
                        th { {tr_in("col.donor", lang)} }
                        th { {tr_in("col.beneficiaries", lang)} }
                    }
                }
                tbody {
                    if rows.is_empty() {
                        // The one table that shows an explicit placeholder.
                        tr { class: "empty-row",
                            td { colspan: "7", {tr_in("table.empty", lang)} }
                        }
                    }
                    for (i, p) in rows.iter().enumerate() {
                        tr { key: "p{i}",
                            td { {group_digits(i as u64 + 1, lang)} }
                            td { {p.name.resolve(lang).to_string()} }
                            td { {p.category.resolve(lang).to_string()} }
                            td { {p.location.resolve(lang).to_string()} }
                            td { {p.period.resolve(lang).to_string()} }
                            td { {p.donor.resolve(lang).to_string()} }
                            td { {group_digits(p.beneficiaries, lang)} }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TrainingTable(data: Arc<AppData>, lang: Language) -> Element {
    let rows = &data.tables.training;
    if rows.is_empty() {
        return rsx! {};
    }
    rsx! {
        section {
            h2 { {tr_in("section.training", lang)} }
            table { class: "data",
                thead {
                    tr {
                        th { "#" }
                        th { {tr_in("col.title", lang)} }
                        th { {tr_in("col.location", lang)} }
                        th { {tr_in("col.period", lang)} }
                        th { {tr_in("col.target", lang)} }
                        th { {tr_in("col.donor", lang)} }
                        th { {tr_in("col.count", lang)} }
                    }
                }
                tbody {
                    for (i, t) in rows.iter().enumerate() {
                        tr { key: "t{i}",
                            td { {group_digits(i as u64 + 1, lang)} }
                            td { {t.title.resolve(lang).to_string()} }
                            td { {t.location.resolve(lang).to_string()} }
                            td { {t.period.resolve(lang).to_string()} }
                            td { {t.target.resolve(lang).to_string()} }
                            td { {t.donor.resolve(lang).to_string()} }
                            td { {group_digits(t.count, lang)} }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MinesTable(data: Arc<AppData>, lang: Language) -> Element {
    let rows = &data.tables.mines;
    if rows.is_empty() {
        return rsx! {};
    }
    rsx! {
        section {
            h2 { {tr_in("section.mines", lang)} }
            table { class: "data",
                thead {
                    tr {
                        th { "#" }
                        th { {tr_in("col.activity", lang)} }
                        th { {tr_in("col.location", lang)} }
                        th { {tr_in("col.period", lang)} }
                        th { {tr_in("col.items", lang)} }
                        th { {tr_in("col.beneficiaries", lang)} }
                    }
                }
                tbody {
                    for (i, m) in rows.iter().enumerate() {
                        tr { key: "m{i}",
                            td { {group_digits(i as u64 + 1, lang)} }
                            td { {m.activity.resolve(lang).to_string()} }
                            td { {m.location.resolve(lang).to_string()} }
                            td { {m.period.resolve(lang).to_string()} }
                            td { {group_digits(m.items, lang)} }
                            td { {group_digits(m.beneficiaries, lang)} }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn EventsTable(data: Arc<AppData>, lang: Language) -> Element {
    let rows = &data.tables.events;
    if rows.is_empty() {
        return rsx! {};
    }
    rsx! {
        section {
            h2 { {tr_in("section.events", lang)} }
            table { class: "data",
                thead {
                    tr {
                        th { "#" }
                        th { {tr_in("col.title", lang)} }
                        th { {tr_in("col.location", lang)} }
                        th { {tr_in("col.date", lang)} }
                        th { {tr_in("col.attendance", lang)} }
                    }
                }
                tbody {
                    for (i, e) in rows.iter().enumerate() {
                        tr { key: "e{i}",
                            td { {group_digits(i as u64 + 1, lang)} }
                            td { {e.title.resolve(lang).to_string()} }
                            td { {e.location.resolve(lang).to_string()} }
                            td { {e.date.resolve(lang).to_string()} }
                            td { {group_digits(e.attendance, lang)} }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MediaTable(data: Arc<AppData>, lang: Language) -> Element {
    let rows = &data.tables.media;
    if rows.is_empty() {
        return rsx! {};
    }
    rsx! {
        section {
            h2 { {tr_in("section.media", lang)} }
            table { class: "data",
                thead {
                    tr {
                        th { "#" }
                        th { {tr_in("col.title", lang)} }
                        th { {tr_in("col.outlet", lang)} }
                        th { {tr_in("col.date", lang)} }
                        th { {tr_in("col.reach", lang)} }
                    }
                }
                tbody {
                    for (i, m) in rows.iter().enumerate() {
                        tr { key: "md{i}",
                            td { {group_digits(i as u64 + 1, lang)} }
                            td { {m.title.resolve(lang).to_string()} }
                            td { {m.outlet.resolve(lang).to_string()} }
                            td { {m.date.resolve(lang).to_string()} }
                            td { {group_digits(m.reach, lang)} }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RecommendationsSection(data: Arc<AppData>, lang: Language) -> Element {
    if data.recommendations.is_empty() {
        return rsx! {};
    }
    rsx! {
        section {
            h2 { {tr_in("section.recommendations", lang)} }
            div { class: "card-grid",
                for (i, r) in data.recommendations.iter().enumerate() {
                    div { key: "rec{i}", class: "recommendation-card",
                        style: if r.color.is_empty() { String::new() } else { format!("border-inline-start-color:{};", r.color) },
                        h3 {
                            style: if r.color.is_empty() { String::new() } else { format!("color:{};", r.color) },
                            i { class: "fas {r.icon}" }
                            " "
                            {r.sector.resolve(lang).to_string()}
                        }
                        p { {r.text.resolve(lang).to_string()} }
                    }
                }
            }
        }
    }
}

#[component]
fn GallerySection(data: Arc<AppData>, lang: Language) -> Element {
    let mut page = use_signal(|| 0usize);
    let mut lightbox = use_signal(Lightbox::closed);

    let items = &data.gallery;
    if items.is_empty() {
        return rsx! {};
    }
    let len = items.len();
    let pages = gallery::page_count(len);
    let current_page = page().min(pages.saturating_sub(1));
    let offset = current_page * gallery::PAGE_SIZE;
    let visible = gallery::page_slice(items, current_page);

    let lb = lightbox();
    let overlay = lb.current().and_then(|i| items.get(i).map(|item| (i, item.clone())));

    rsx! {
        section {
            h2 { {tr_in("section.gallery", lang)} }
            div { class: "gallery-grid",
                for (i, item) in visible.iter().enumerate() {
                    figure { key: "g{offset + i}", class: "gallery-tile",
                        onclick: move |_| lightbox.write().open(offset + i, len),
                        img { src: "{item.image}", loading: "lazy",
                            alt: item.caption.resolve(lang).to_string() }
                        if !item.caption.is_empty() {
                            figcaption { {item.caption.resolve(lang).to_string()} }
                        }
                    }
                }
            }
            if pages > 1 {
                div { class: "pager",
                    for p in 0..pages {
                        button { key: "pg{p}",
                            class: if p == current_page { "active" } else { "" },
                            onclick: move |_| page.set(p),
                            {group_digits(p as u64 + 1, lang)}
                        }
                    }
                }
            }
            {
                overlay.map(|(index, item)| rsx! {
                    div { class: "lightbox", tabindex: "0", autofocus: true,
                        onkeydown: move |e: KeyboardEvent| {
                            match e.key() {
                                Key::Escape => lightbox.write().close(),
                                Key::ArrowRight => lightbox.write().next(len),
                                Key::ArrowLeft => lightbox.write().prev(len),
                                _ => {}
                            }
                        },
                        img { src: "{item.image}", alt: item.caption.resolve(lang).to_string() }
                        div { class: "caption",
                            {format!("{} ({} / {})",
                                item.caption.resolve(lang),
                                group_digits(index as u64 + 1, lang),
                                group_digits(len as u64, lang))}
                        }
                        div { class: "controls",
                            button { onclick: move |_| lightbox.write().prev(len), "‹" }
                            button { onclick: move |_| lightbox.write().close(), {tr_in("gallery.close", lang)} }
                            button { onclick: move |_| lightbox.write().next(len), "›" }
                        }
                    }
                })
            }
        }
    }
}
