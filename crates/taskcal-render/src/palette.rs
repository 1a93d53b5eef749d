//! Palette aggregation (§4.6): a deduplicated `rgb -> escaped category`
//! mapping for every category that appears on at least one day of a month,
//! driving the per-month legend.

use std::collections::BTreeMap;

use taskcal_core::Month;

/// Build the palette for a month by iterating every cell's tasks in their
/// stable stored order (ascending `start_date`, per DayIndexer) and
/// materializing the result through a sorted key pass (`BTreeMap` on the
/// RGB string), so iteration order never depends on hashing (§4.5.5).
pub fn build_palette(month: &Month) -> Vec<(String, String)> {
    let mut palette: BTreeMap<String, String> = BTreeMap::new();
    for cell in month.iter_in_month_cells() {
        for task in &cell.tasks {
            palette
                .entry(task.rgb_color.clone())
                .or_insert_with(|| task.escaped_category.clone());
        }
    }
    palette.into_iter().collect()
}
