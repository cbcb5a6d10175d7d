//! Squarified treemap for the land-cover composition.
//!
//! Layout follows the classic squarify procedure: items are laid out in
//! rows along the shorter side of the remaining region, a row is accepted
//! when adding the next item would worsen the row's worst aspect ratio.

use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};
use ratatui::Frame;

/// One leaf of the treemap, value in the same unit for every item.
#[derive(Debug, Clone)]
pub struct TreemapItem {
    pub label: String,
    pub value: f64,
    pub color: Color,
}

/// A laid-out cell in layout coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreemapRect {
    pub item: usize,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl TreemapRect {
    fn aspect(self) -> f64 {
        if self.w <= 0.0 || self.h <= 0.0 {
            f64::INFINITY
        } else {
            (self.w / self.h).max(self.h / self.w)
        }
    }
}

/// Squarified layout of `values` (descending order expected) into a
/// `width` x `height` region. Non-positive values are skipped.
pub fn squarify(values: &[f64], width: f64, height: f64) -> Vec<TreemapRect> {
    let mut rects = Vec::with_capacity(values.len());
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 || width <= 0.0 || height <= 0.0 {
        return rects;
    }

    // Scale values so that they sum to the region's area.
    let scale = (width * height) / total;
    let scaled: Vec<(usize, f64)> = values
        .iter()
        .enumerate()
        .filter(|(_, v)| **v > 0.0)
        .map(|(index, v)| (index, v * scale))
        .collect();

    let (mut x, mut y, mut w, mut h) = (0.0_f64, 0.0_f64, width, height);
    let mut row: Vec<(usize, f64)> = Vec::new();

    let mut remaining = scaled.as_slice();
    while let Some((next, rest)) = remaining.split_first() {
        let candidate = {
            let mut extended = row.clone();
            extended.push(*next);
            extended
        };

        let short_side = w.min(h);
        if row.is_empty() || worst_aspect(&candidate, short_side) <= worst_aspect(&row, short_side)
        {
            row = candidate;
            remaining = rest;
            continue;
        }

        // Current row is as square as it gets: fix it and shrink the region.
        layout_row(&row, x, y, w, h, &mut rects);
        let row_area: f64 = row.iter().map(|(_, area)| area).sum();
        if w.min(h) > 0.0 {
            let thickness = row_area / w.min(h).max(f64::EPSILON);
            if w <= h {
                y += thickness;
                h -= thickness;
            } else {
                x += thickness;
                w -= thickness;
            }
        }
        row.clear();
    }

    if !row.is_empty() {
        layout_row(&row, x, y, w, h, &mut rects);
    }

    rects
}

/// Worst (largest) aspect ratio a row would have along a side of the given
/// length.
fn worst_aspect(row: &[(usize, f64)], side: f64) -> f64 {
    let area: f64 = row.iter().map(|(_, a)| a).sum();
    if area <= 0.0 || side <= 0.0 {
        return f64::INFINITY;
    }
    let thickness = area / side;
    row.iter()
        .map(|(_, item_area)| {
            let length = item_area / thickness;
            (length / thickness).max(thickness / length)
        })
        .fold(0.0, f64::max)
}

/// Place one accepted row along the shorter side of the region.
fn layout_row(
    row: &[(usize, f64)],
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    rects: &mut Vec<TreemapRect>,
) {
    let row_area: f64 = row.iter().map(|(_, a)| a).sum();
    let short_side = w.min(h).max(f64::EPSILON);
    let thickness = row_area / short_side;

    let mut offset = 0.0;
    for (item, area) in row {
        let length = area / thickness.max(f64::EPSILON);
        let rect = if w <= h {
            TreemapRect {
                item: *item,
                x: x + offset,
                y,
                w: length,
                h: thickness,
            }
        } else {
            TreemapRect {
                item: *item,
                x,
                y: y + offset,
                w: thickness,
                h: length,
            }
        };
        rects.push(rect);
        offset += length;
    }
}

pub struct TreemapSpec<'a> {
    pub title: String,
    pub items: &'a [TreemapItem],
    pub selected: Option<usize>,
}

pub fn render_treemap(spec: &TreemapSpec<'_>, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(spec.title.clone())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if spec.items.is_empty() {
        let paragraph = Paragraph::new("No land cover data")
            .alignment(ratatui::layout::Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, inner);
        return;
    }

    f.render_widget(
        TreemapWidget {
            items: spec.items,
            selected: spec.selected,
        },
        inner,
    );
}

struct TreemapWidget<'a> {
    items: &'a [TreemapItem],
    selected: Option<usize>,
}

impl Widget for TreemapWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let values: Vec<f64> = self.items.iter().map(|item| item.value).collect();
        let rects = squarify(&values, f64::from(area.width), f64::from(area.height));

        for rect in &rects {
            let item = &self.items[rect.item];
            let selected = self.selected == Some(rect.item);

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let (cell_x, cell_y, cell_w, cell_h) = (
                rect.x.round() as u16,
                rect.y.round() as u16,
                (rect.x + rect.w).round() as u16,
                (rect.y + rect.h).round() as u16,
            );

            for y in cell_y..cell_h.min(area.height) {
                for x in cell_x..cell_w.min(area.width) {
                    if let Some(cell) = buf.cell_mut(Position::new(area.x + x, area.y + y)) {
                        cell.set_symbol(" ");
                        cell.set_bg(item.color);
                    }
                }
            }

            // Label the cell when it is wide enough to say something.
            let label = format!("{} {:.1}%", item.label, item.value);
            let cell_width = cell_w.min(area.width).saturating_sub(cell_x);
            let cell_height = cell_h.min(area.height).saturating_sub(cell_y);
            if cell_height >= 1 && u16::try_from(label.len()).map_or(false, |w| w + 1 <= cell_width)
            {
                let style = if selected {
                    Style::default()
                        .fg(Color::Black)
                        .bg(item.color)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
                } else {
                    Style::default().fg(Color::Black).bg(item.color)
                };
                buf.set_string(area.x + cell_x + 1, area.y + cell_y, label, style);
            } else if cell_height >= 1 && cell_width >= 3 && selected {
                buf.set_string(
                    area.x + cell_x + 1,
                    area.y + cell_y,
                    "*",
                    Style::default().fg(Color::Black).bg(item.color),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_covers_the_region() {
        let rects = squarify(&[6.0, 6.0, 4.0, 3.0, 2.0, 2.0, 1.0], 60.0, 40.0);
        let area: f64 = rects.iter().map(|r| r.w * r.h).sum();
        assert!((area - 60.0 * 40.0).abs() < 1e-6);
    }

    #[test]
    fn layout_preserves_relative_areas() {
        let rects = squarify(&[3.0, 1.0], 40.0, 10.0);
        assert_eq!(rects.len(), 2);
        let a0 = rects[0].w * rects[0].h;
        let a1 = rects[1].w * rects[1].h;
        assert!((a0 / a1 - 3.0).abs() < 1e-6);
    }

    #[test]
    fn zero_and_negative_values_are_skipped() {
        let rects = squarify(&[5.0, 0.0, -2.0, 5.0], 10.0, 10.0);
        assert_eq!(rects.len(), 2);
        assert!(rects.iter().all(|r| r.item == 0 || r.item == 3));
    }

    #[test]
    fn empty_input_produces_no_rects() {
        assert!(squarify(&[], 10.0, 10.0).is_empty());
        assert!(squarify(&[1.0], 0.0, 10.0).is_empty());
    }

    #[test]
    fn rows_stay_reasonably_square() {
        let rects = squarify(&[8.0, 6.0, 4.0, 3.0, 2.0, 2.0, 1.0], 100.0, 60.0);
        for rect in rects {
            assert!(rect.aspect() < 8.0, "degenerate cell: {rect:?}");
        }
    }
}
