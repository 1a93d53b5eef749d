//! Configuration consumed by the layout engine (§6.1 of the layout spec).

use serde::{Deserialize, Serialize};

/// A weekday, used both for `first_weekday` and for computing week-column
/// offsets relative to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Index within a Monday-anchored week, 0 = Monday .. 6 = Sunday.
    /// Used only to translate to/from `chrono::Weekday`.
    fn monday_index(self) -> u32 {
        match self {
            Weekday::Monday => 0,
            Weekday::Tuesday => 1,
            Weekday::Wednesday => 2,
            Weekday::Thursday => 3,
            Weekday::Friday => 4,
            Weekday::Saturday => 5,
            Weekday::Sunday => 6,
        }
    }

    pub fn from_chrono(w: chrono::Weekday) -> Self {
        match w {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }

    pub fn to_chrono(self) -> chrono::Weekday {
        match self {
            Weekday::Monday => chrono::Weekday::Mon,
            Weekday::Tuesday => chrono::Weekday::Tue,
            Weekday::Wednesday => chrono::Weekday::Wed,
            Weekday::Thursday => chrono::Weekday::Thu,
            Weekday::Friday => chrono::Weekday::Fri,
            Weekday::Saturday => chrono::Weekday::Sat,
            Weekday::Sunday => chrono::Weekday::Sun,
        }
    }

    /// Column index (0..7) of `day` within a week row that starts on `self`.
    pub fn column_of(self, day: chrono::Weekday) -> u32 {
        let start = self.monday_index();
        let day_idx = Weekday::from_chrono(day).monday_index();
        (day_idx + 7 - start) % 7
    }
}

impl Default for Weekday {
    fn default() -> Self {
        Weekday::Monday
    }
}

/// Which cells emit a hyperlink anchor (§4.5.4, Open Question 1 — decided
/// in DESIGN.md: the default carries forward the spec's literal contract
/// of "every cell", with `StartsOnly` offered as the alternative scope).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorScope {
    AllCells,
    StartsOnly,
}

impl Default for AnchorScope {
    fn default() -> Self {
        AnchorScope::AllCells
    }
}

/// Vertical ordering of non-spanning tasks stacked in the in-cell layout
/// (§4.5.3, Open Question 2 — decided in DESIGN.md: track-ascending).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellTaskOrder {
    TrackAscending,
}

impl Default for CellTaskOrder {
    fn default() -> Self {
        CellTaskOrder::TrackAscending
    }
}

/// Layout and typography configuration, loaded from YAML by `taskcal-ingest`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub day_number_width: String,
    pub day_content_margin: String,
    pub hyphen_penalty: u32,
    pub tolerance: u32,
    pub emergency_stretch: String,
    pub first_weekday: Weekday,
    pub header_angle_size_offset: String,
    pub clear_top_right_corner: bool,
    pub max_task_tracks: usize,
    pub anchor_scope: AnchorScope,
    pub cell_task_order: CellTaskOrder,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            day_number_width: "6mm".to_string(),
            day_content_margin: "2mm".to_string(),
            hyphen_penalty: 10_000,
            tolerance: 1_000,
            emergency_stretch: "2em".to_string(),
            first_weekday: Weekday::Monday,
            header_angle_size_offset: "0mm".to_string(),
            clear_top_right_corner: false,
            max_task_tracks: crate::track::DEFAULT_MAX_TRACKS,
            anchor_scope: AnchorScope::AllCells,
            cell_task_order: CellTaskOrder::TrackAscending,
        }
    }
}
