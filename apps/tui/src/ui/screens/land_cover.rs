use ratatui::layout::Rect;
use ratatui::Frame;

use crate::app::{App, ChartId};
use crate::data::records::CityData;
use crate::domain::{LandCoverClass, UNCLASSIFIED_COLOR, VegetationType};
use crate::stats::DerivedSeries;
use crate::ui::screens::{render_chart_tabs, split_tabs_and_body};
use crate::ui::widgets::charts::{render_distribution_bars, DistributionSpec};
use crate::ui::widgets::treemap::{render_treemap, TreemapItem, TreemapSpec};

pub fn render_land_cover(app: &App, f: &mut Frame<'_>, area: Rect) {
    let (Some(data), Some(derived)) = (&app.data, &app.derived) else {
        return;
    };

    let (tabs_area, body) = split_tabs_and_body(area);
    render_chart_tabs(app, f, tabs_area);

    match app.current_chart() {
        Some(ChartId::LandCoverTreemap) => render_cover_treemap(app, data, f, body),
        Some(ChartId::Vegetation) => render_vegetation(app, derived, f, body),
        _ => {}
    }
}

/// Cells sized by share of the city area, largest class first.
pub fn treemap_items(data: &CityData) -> Vec<TreemapItem> {
    let mut items: Vec<TreemapItem> = data
        .lc
        .iter()
        .filter(|row| row.percentage > 0.0)
        .map(|row| TreemapItem {
            label: row.lc_type.clone(),
            value: row.percentage,
            color: LandCoverClass::color_for(&row.lc_type),
        })
        .collect();
    items.sort_by(|a, b| b.value.total_cmp(&a.value));
    items
}

fn render_cover_treemap(app: &App, data: &CityData, f: &mut Frame<'_>, area: Rect) {
    let items = treemap_items(data);
    let spec = TreemapSpec {
        title: format!("Land Cover in {}", app.config.city),
        items: &items,
        selected: Some(app.selected),
    };
    render_treemap(&spec, f, area);
}

fn render_vegetation(app: &App, derived: &DerivedSeries, f: &mut Frame<'_>, area: Rect) {
    let colors = derived
        .vegetation
        .iter()
        .map(|row| {
            VegetationType::parse(&row.bin).map_or(UNCLASSIFIED_COLOR, VegetationType::color)
        })
        .collect();

    let spec = DistributionSpec {
        title: format!("{} - {}", ChartId::Vegetation.title(), app.config.location()),
        x_title: "NDVI",
        rows: &derived.vegetation,
        colors,
        selected: Some(app.selected),
    };

    render_distribution_bars(&spec, f, area);
}
