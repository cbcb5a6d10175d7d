//! Builds the inspector popup content for the record under the cursor,
//! mirroring the hover tooltips of the source notebook: a couple of lines
//! per record, numbers at fixed decimal precision.

use chrono::NaiveDate;
use ratatui::text::Line as TextLine;

use crate::app::{App, ChartId};
use crate::domain::{AgeGroup, FireDanger, PvCondition, Susceptibility, VegetationType};
use crate::stats::indicators::{bracket_share, sorted_age_brackets};
use crate::ui::widgets::charts::thousands;

/// Title and body for the inspector popup, when the active chart has a
/// record selected.
pub fn inspector_content(app: &App) -> Option<(String, Vec<TextLine<'static>>)> {
    let data = app.data.as_ref()?;
    let derived = app.derived.as_ref()?;
    let chart = app.current_chart()?;
    let index = app.selected;

    let lines: Vec<String> = match chart {
        ChartId::PopulationGrowth => {
            let row = data.pg.get(index)?;
            let mut lines = vec![
                format!("Year: {}", row.year_name),
                format!("Population: {}", thousands(row.population)),
            ];
            if let Some(growth) = row.growth_percentage {
                lines.push(format!("Growth: {growth:.1}%"));
            }
            lines
        }
        ChartId::PopulationPyramid => {
            let brackets = sorted_age_brackets(data);
            let bracket = brackets.get(index)?;
            vec![
                format!("Age Bracket: {bracket}"),
                format!("Female: {:.1}%", bracket_share(data, bracket, "female")),
                format!("Male: {:.1}%", bracket_share(data, bracket, "male")),
            ]
        }
        ChartId::AgeGroups => {
            let group = *AgeGroup::ALL.get(index)?;
            let share = crate::stats::demography::group_shares(&data.pas)[group as usize];
            vec![
                format!("Age Group: {}", group.label()),
                format!("Share of Population: {share:.1}%"),
            ]
        }
        ChartId::DependencyGrid => {
            let group = *AgeGroup::ALL.get(index)?;
            let ratios = derived.ratios;
            match group {
                AgeGroup::Youth => vec![
                    format!("Group: {}", group.label()),
                    format!("Population: {}", thousands(ratios.youth_total)),
                    format!(
                        "Dependency Ratio: {:.0} per 100 workers",
                        ratios.youth_dependency_ratio
                    ),
                ],
                AgeGroup::WorkingAge => vec![
                    format!("Group: {}", group.label()),
                    format!("Population: {}", thousands(ratios.working_age_total)),
                    format!("Total Dependency Ratio: {:.0}", ratios.total_dependency_ratio),
                ],
                AgeGroup::Elderly => vec![
                    format!("Group: {}", group.label()),
                    format!("Population: {}", thousands(ratios.elderly_total)),
                    format!(
                        "Dependency Ratio: {:.0} per 100 workers",
                        ratios.elderly_dependency_ratio
                    ),
                ],
            }
        }
        ChartId::Wealth => {
            let row = derived.wealth.get(index)?;
            vec![
                format!("RWI Wealth Category: {}", row.bin),
                format!("Percentage of Area: {:.1}%", row.percentage),
            ]
        }
        ChartId::BuiltEraDistribution => {
            let row = derived.built_era.get(index)?;
            let year = crate::domain::BuiltEra::parse(&row.bin)
                .map_or_else(|| row.bin.clone(), |era| era.year_name().to_string());
            vec![
                format!("Year: {year}"),
                format!("Percentage of Area: {:.1}%", row.percentage),
            ]
        }
        ChartId::BuiltUpArea => {
            let row = data.uba.get(index)?;
            vec![
                format!("Year: {}", row.year_name),
                format!("Built-up Area: {:.1} sq km", row.uba),
            ]
        }
        ChartId::BuiltUpShare => {
            let row = data.uba.get(index)?;
            vec![
                format!("Year: {}", row.year_name),
                format!("Percentage of Present Extent: {:.1}%", row.percentage),
            ]
        }
        ChartId::LandCoverTreemap => {
            // Cursor order matches the treemap: largest class first.
            let mut rows: Vec<&crate::data::records::LandCoverRow> =
                data.lc.iter().filter(|row| row.percentage > 0.0).collect();
            rows.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
            let row = rows.get(index)?;
            vec![
                format!("{}: {:.1}%", row.lc_type, row.percentage),
                format!("Pixel count: {}", thousands(row.pixel_count)),
            ]
        }
        ChartId::Vegetation => {
            let row = derived.vegetation.get(index)?;
            let vegetation = VegetationType::parse(&row.bin)
                .map_or("Unclassified", VegetationType::label);
            vec![
                format!("NDVI Range: {}", row.bin),
                format!("Type: {vegetation}"),
                format!("Percentage of Area: {:.1}%", row.percentage),
            ]
        }
        ChartId::SolarYieldDistribution => {
            let row = derived.pv_yield.get(index)?;
            let condition =
                PvCondition::parse(&row.bin).map_or("Unclassified", PvCondition::label);
            vec![
                format!("Daily Yield: {} kWh/kWp", row.bin),
                format!("Condition: {condition}"),
                format!("Percentage of Area: {:.1}%", row.percentage),
            ]
        }
        ChartId::SolarMonthly => {
            let row = data.pv.get(index)?;
            vec![
                format!("Month: {}", row.month_name),
                format!("PV Output: {:.2} kWh/kWp", row.pv),
                format!("Condition: {}", row.condition),
            ]
        }
        ChartId::SolarConditionMonths => {
            let entry = derived.pv_condition_months.get(index)?;
            vec![
                format!("Condition: {}", entry.label),
                format!("Months: {} ({:.1}%)", entry.count, entry.percentage),
            ]
        }
        ChartId::SummerTemperature => {
            let row = derived.summer.get(index)?;
            vec![
                format!("Surface Temperature: {} C", row.bin),
                format!("Percentage of Area: {:.1}%", row.percentage),
            ]
        }
        ChartId::AirQuality => {
            let row = derived.air_quality.get(index)?;
            vec![
                format!("PM2.5 Concentration: {} ug/m3", row.bin),
                format!("Percentage of Area: {:.1}%", row.percentage),
            ]
        }
        ChartId::FireWeather => {
            let row = data.fwi.get(index)?;
            vec![
                format!("Week {} ({})", row.week, row.month_name),
                format!("95th Percentile FWI: {:.1}", row.fwi),
                format!("Danger: {}", row.danger),
            ]
        }
        ChartId::FireDangerWeeks => {
            let entry = derived.fwi_danger_weeks.get(index)?;
            let danger =
                FireDanger::parse(&entry.label).map_or_else(|| entry.label.clone(), |d| {
                    d.label().to_string()
                });
            vec![
                format!("Danger Level: {danger}"),
                format!("Weeks: {} ({:.1}%)", entry.count, entry.percentage),
            ]
        }
        ChartId::FloodExposure => {
            let row = data.comb.get(index)?;
            let mut lines = vec![
                format!("Year: {}", row.year_name),
                format!("Combined Exposure: {:.2} sq km", row.value),
            ];
            for (name, series) in [
                ("Fluvial", &data.fu),
                ("Pluvial", &data.pu),
                ("Coastal", &data.cu),
            ] {
                if let Some(entry) = series.iter().find(|e| e.year_name == row.year_name) {
                    lines.push(format!("{name}: {:.2} sq km", entry.value));
                }
            }
            lines
        }
        ChartId::FloodEvents => {
            let event = data.fe.get(index)?;
            let month = NaiveDate::from_ymd_opt(event.begin_year, event.begin_month, 1)
                .map_or_else(
                    || format!("{}-{}", event.begin_year, event.begin_month),
                    |date| date.format("%B %Y").to_string(),
                );
            vec![
                month,
                format!("{} displaced", thousands(event.displaced as f64)),
                format!("Severity: {}", event.severity),
            ]
        }
        ChartId::Elevation => {
            let row = derived.elevation.get(index)?;
            vec![
                format!("Elevation: {} MASL", row.bin),
                format!("Percentage of Area: {:.1}%", row.percentage),
            ]
        }
        ChartId::Slope => {
            let row = derived.slope.get(index)?;
            vec![
                format!("Slope: {} degrees", row.bin),
                format!("Percentage of Area: {:.1}%", row.percentage),
            ]
        }
        ChartId::Landslide => {
            let row = derived.landslide.get(index)?;
            susceptibility_lines("Landslide", row)
        }
        ChartId::Liquefaction => {
            let row = derived.liquefaction.get(index)?;
            susceptibility_lines("Liquefaction", row)
        }
        ChartId::GrowthDashboard => return None,
    };

    Some((
        chart.title().to_string(),
        lines.into_iter().map(TextLine::from).collect(),
    ))
}

fn susceptibility_lines(hazard: &str, row: &crate::data::records::BinRow) -> Vec<String> {
    let class = Susceptibility::parse(&row.bin)
        .map_or_else(|| "?".to_string(), |s| s.class().to_string());
    vec![
        format!("{hazard} Susceptibility: {} (class {class})", row.bin),
        format!("Percentage of Area: {:.1}%", row.percentage),
    ]
}
