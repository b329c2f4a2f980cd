//! Grid item placement
//!
//! A grid layout is a list of rows, each a list of column spans out of
//! `count` columns. Items are numbered across rows in reading order.

use serde::{Deserialize, Serialize};
use weft_core::{combine, CssValue, Devices, InheritWider, ResponsiveValue, Style, StyleFragment};

use crate::length::Length;

/// Rows of column spans, e.g. `[[6, 6], [12]]` on a 12-column grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLayout {
    pub spans: Vec<Vec<u32>>,
    pub count: u32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            spans: vec![vec![12]],
            count: 12,
        }
    }
}

/// Row and column of the item at `index`, or `None` past the last item
pub fn get_indexes(spans: &[Vec<u32>], index: usize) -> Option<(usize, usize)> {
    let mut remaining = index;
    for (row, columns) in spans.iter().enumerate() {
        if remaining < columns.len() {
            return Some((row, remaining));
        }
        remaining -= columns.len();
    }
    None
}

/// Truncate to 5 decimal places
fn floor5(value: f64) -> f64 {
    (value * 100_000.0).floor() / 100_000.0
}

fn gap_padding(is_edge: bool, gap: Length) -> CssValue {
    if is_edge {
        CssValue::Number(0.0)
    } else {
        CssValue::Text(gap.half().to_string())
    }
}

/// Style for one item of a resolved layout
fn grid_item_style(layout: &GridLayout, index: usize, column_gap: Length, row_gap: Length) -> Style {
    let Some((row, column)) = get_indexes(&layout.spans, index) else {
        return Style::new();
    };
    let columns = &layout.spans[row];
    let span = columns[column];
    if span == 0 {
        return Style::new().with("display", "none");
    }

    let first_col = column == 0;
    let last_col = column == columns.len() - 1;
    let first_row = row == 0;
    let last_row = row == layout.spans.len() - 1;

    let fraction = if layout.count == 0 {
        0.0
    } else {
        floor5(span as f64 / layout.count as f64)
    };
    let flex_basis = format!(
        "calc({} * (100% + {}) - {} * {} / 2 - 0.01px)",
        fraction,
        column_gap,
        first_col as u8 + last_col as u8,
        column_gap
    );

    Style::new()
        .with("flexBasis", flex_basis.as_str())
        .with("minWidth", flex_basis.as_str())
        .with("maxWidth", flex_basis)
        .with("paddingLeft", gap_padding(first_col, column_gap))
        .with("paddingRight", gap_padding(last_col, column_gap))
        .with("paddingTop", gap_padding(first_row, row_gap))
        .with("paddingBottom", gap_padding(last_row, row_gap))
}

/// Flex placement of the item at `index` within a responsive grid
///
/// Devices where the index falls past the last item contribute nothing.
pub fn responsive_grid_item(
    devices: &Devices,
    grid: Option<&ResponsiveValue<GridLayout>>,
    index: usize,
    column_gap: Option<&ResponsiveValue<Length>>,
    row_gap: Option<&ResponsiveValue<Length>>,
) -> StyleFragment {
    let mut fragment = StyleFragment::from_base(Style::new().with("display", "flex"));
    fragment.extend(combine(
        devices,
        &(grid, column_gap, row_gap),
        &InheritWider,
        |(layout, column_gap, row_gap)| {
            grid_item_style(
                &layout.unwrap_or_default(),
                index,
                column_gap.unwrap_or_default(),
                row_gap.unwrap_or_default(),
            )
        },
    ));
    fragment
}
