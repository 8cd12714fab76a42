// File: crates/dashboard-core/src/widget.rs
// Summary: Declarative widget view-models handed to an external renderer.

use crate::record::{Rank, Sex};

/// Chart margins, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Margins {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Margins {
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self { top, right, bottom, left }
    }
}

/// Point color per sex, matching the dashboard's palette.
pub const fn sex_color(sex: Sex) -> &'static str {
    match sex {
        Sex::Female => "pink",
        Sex::Male => "blue",
    }
}

/// Format a ratio the way the indicators display it (".2%" style).
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// Options for the discipline select menu, with the row count behind each.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectMenu {
    pub options: Vec<(String, u64)>,
}

/// Single-number indicator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NumberDisplay {
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub key: String,
    pub value: f64,
}

/// Ordinal bar chart.
#[derive(Clone, Debug, PartialEq)]
pub struct BarChart {
    pub width: u32,
    pub height: u32,
    pub margins: Margins,
    pub x_label: String,
    pub y_ticks: u32,
    pub bars: Vec<Bar>,
}

/// One stacked series of the rank-distribution chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Stack {
    pub label: &'static str,
    pub bars: Vec<Bar>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Legend {
    pub x: u32,
    pub y: u32,
    pub item_height: u32,
    pub gap: u32,
}

/// Stacked ordinal bar chart; bar values are percentages in [0, 100].
#[derive(Clone, Debug, PartialEq)]
pub struct StackedBarChart {
    pub width: u32,
    pub height: u32,
    pub margins: Margins,
    pub x_label: String,
    pub legend: Legend,
    pub stacks: Vec<Stack>,
}

/// One plotted point, deduplicated by identical coordinates; `weight` is the
/// number of records collapsed into it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScatterPoint {
    pub x: u32,
    pub salary: u32,
    pub rank: Rank,
    pub sex: Sex,
    pub weight: u64,
}

impl ScatterPoint {
    /// Tooltip text, e.g. "Prof earned 120000".
    pub fn title(&self) -> String {
        format!("{} earned {}", self.rank.label(), self.salary)
    }

    pub const fn color(&self) -> &'static str {
        sex_color(self.sex)
    }
}

/// Scatterplot with a linear x-domain derived from the plotted points.
#[derive(Clone, Debug, PartialEq)]
pub struct ScatterPlot {
    pub width: u32,
    pub height: u32,
    pub margins: Margins,
    pub x_label: String,
    pub x_domain: (f64, f64),
    pub symbol_size: f64,
    pub clip_padding: f64,
    pub points: Vec<ScatterPoint>,
}
