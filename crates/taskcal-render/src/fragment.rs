//! CellRenderer LaTeX emission (§4.5): turns a `CellRenderRecord` into the
//! byte string the external typesetting layer concatenates. Macro names
//! (`\calCellEmpty`, `\calTaskStart`, ...) are this crate's half of a fixed
//! contract with a `calendar.sty`-style package defined outside this crate
//! (see DESIGN.md) — the core never interprets or lays out the macros
//! itself, it only emits calls with resolved parameters.

use std::fmt::Write as _;

use chrono::NaiveDate;
use taskcal_core::{
    AnchorScope, CellLayout, CellRenderRecord, Config, MacroKind, TaskBar, TaskState,
};

/// Star glyph macro prepended to a milestone's display name on its start
/// day (§4.5.2 "Prepend a star glyph when `is_milestone`").
const MILESTONE_GLYPH: &str = r"\calStarGlyph{}";

/// RFC3339 anchor key for a date (§4.5.4). Always midnight UTC since every
/// date the core handles is already day-precision.
pub fn anchor_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%dT00:00:00Z").to_string()
}

fn emits_anchor(record: &CellRenderRecord, config: &Config) -> bool {
    match config.anchor_scope {
        AnchorScope::AllCells => true,
        AnchorScope::StartsOnly => record.bars.iter().any(|bar| bar.state == TaskState::Start),
    }
}

fn bar_macro_name(bar: &TaskBar) -> &'static str {
    match (bar.macro_kind, bar.state) {
        (MacroKind::Task, TaskState::Start) => "calTaskStart",
        (MacroKind::Task, TaskState::Continue) => "calTaskContinue",
        (MacroKind::Milestone, TaskState::Start) => "calMilestoneStart",
        (MacroKind::Milestone, TaskState::Continue) => "calMilestoneContinue",
    }
}

/// Render one task bar's macro call. Continuation bars never carry text
/// (§4.5.2 "Continuation silence"); start bars carry the escaped name
/// (plus description, when non-empty) and, for milestones, the star glyph.
fn write_bar(out: &mut String, bar: &TaskBar) {
    let macro_name = bar_macro_name(bar);
    match bar.state {
        TaskState::Start => {
            let name = if bar.macro_kind == MacroKind::Milestone {
                format!("{MILESTONE_GLYPH}{}", bar.escaped_name)
            } else {
                bar.escaped_name.clone()
            };
            let _ = write!(
                out,
                "\\{macro_name}{{{track}}}{{{cols}}}{{{r},{g},{b}}}{{{name}}}{{{description}}}",
                track = bar.track,
                cols = bar.cols,
                r = bar.rgb_color.split(',').next().unwrap_or("128"),
                g = bar.rgb_color.split(',').nth(1).unwrap_or("128"),
                b = bar.rgb_color.split(',').nth(2).unwrap_or("128"),
                name = name,
                description = bar.escaped_description,
            );
        }
        TaskState::Continue => {
            let _ = write!(
                out,
                "\\{macro_name}{{{track}}}{{{cols}}}{{{r},{g},{b}}}",
                track = bar.track,
                cols = bar.cols,
                r = bar.rgb_color.split(',').next().unwrap_or("128"),
                g = bar.rgb_color.split(',').nth(1).unwrap_or("128"),
                b = bar.rgb_color.split(',').nth(2).unwrap_or("128"),
            );
        }
    }
}

/// Render one in-month day cell's complete LaTeX fragment (§4.5.3).
///
/// Bars are already in the config's configured cell task order (track
/// ascending, per the Open Question 2 decision in DESIGN.md) because
/// `build_cell_record` sorts them before this function ever sees them.
pub fn render_cell(record: &CellRenderRecord, config: &Config) -> String {
    let mut out = String::with_capacity(128 + record.bars.len() * 96);
    let anchor = anchor_key(record.date);

    if emits_anchor(record, config) {
        let _ = write!(out, "\\hypertarget{{cal:{anchor}}}{{}}");
    }

    let _ = write!(out, "\\hyperlink{{cal:{anchor}}}{{");

    match record.layout {
        CellLayout::Empty => {
            let _ = write!(
                out,
                "\\calCellEmpty{{{width}}}{{{day}}}",
                width = config.day_number_width,
                day = record.day_number_text,
            );
        }
        CellLayout::InCell => {
            let mut content = String::new();
            for bar in &record.bars {
                write_bar(&mut content, bar);
            }
            let _ = write!(
                out,
                "\\calCellInCell{{{width}}}{{{day}}}{{{margin}}}{{{hyphen_penalty}}}{{{tolerance}}}{{{emergency_stretch}}}{{{content}}}",
                width = config.day_number_width,
                day = record.day_number_text,
                margin = config.day_content_margin,
                hyphen_penalty = config.hyphen_penalty,
                tolerance = config.tolerance,
                emergency_stretch = config.emergency_stretch,
                content = content,
            );
        }
        CellLayout::Overlay => {
            let mut content = String::new();
            for bar in &record.bars {
                write_bar(&mut content, bar);
            }
            let _ = write!(
                out,
                "\\calCellOverlay{{{width}}}{{{day}}}{{{cols}}}{{{content}}}",
                width = config.day_number_width,
                day = record.day_number_text,
                cols = record.max_cols,
                content = content,
            );
        }
    }

    out.push('}');
    out
}

/// Render a placeholder cell outside the rendered month (§3, §4.2): it
/// still occupies a grid column but carries no day number, anchor, or
/// hyperlink, since it has no real date.
pub fn render_blank_cell() -> String {
    r"\calCellBlank{}".to_string()
}
