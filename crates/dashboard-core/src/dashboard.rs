// File: crates/dashboard-core/src/dashboard.rs
// Summary: Wires dimensions, groups, and the discipline filter into the seven widgets.

use crate::filter::{Delta, DimensionFilter};
use crate::group::{rank_by_sex, GroupAll, Grouped};
use crate::record::{Rank, Record, Sex};
use crate::reduce::{CountRows, ProfessorShare, RankShare, SalaryAverage};
use crate::widget::{
    Bar, BarChart, Legend, Margins, NumberDisplay, ScatterPlot, ScatterPoint, SelectMenu, Stack,
    StackedBarChart,
};

/// Composite scatter key: (x value, salary, rank, sex).
type ScatterKey = (u32, u32, Rank, Sex);

fn service_key(r: &Record) -> ScatterKey {
    (r.yrs_service, r.salary, r.rank, r.sex)
}

fn phd_key(r: &Record) -> ScatterKey {
    (r.yrs_since_phd, r.salary, r.rank, r.sex)
}

fn discipline_key(r: &Record) -> &str {
    &r.discipline
}

/// All groups behind the dashboard's widgets, kept current incrementally as
/// the discipline selection changes.
///
/// The discipline selector's own counts are seeded once and never filtered:
/// a group does not observe the filter on its own dimension, so the menu
/// keeps showing every option.
pub struct Dashboard {
    records: Vec<Record>,
    discipline: DimensionFilter,
    discipline_counts: Grouped<String, CountRows>,
    sex_counts: Grouped<Sex, CountRows>,
    female_professors: GroupAll<ProfessorShare>,
    male_professors: GroupAll<ProfessorShare>,
    salary_by_sex: Grouped<Sex, SalaryAverage>,
    rank_distribution: Vec<(Rank, Grouped<Sex, RankShare>)>,
    service_scatter: Grouped<ScatterKey, CountRows>,
    phd_scatter: Grouped<ScatterKey, CountRows>,
}

impl Dashboard {
    pub fn new(records: Vec<Record>) -> Self {
        let mut dash = Self {
            records: Vec::new(),
            discipline: DimensionFilter::new(discipline_key),
            discipline_counts: Grouped::new(|r| r.discipline.clone(), CountRows),
            sex_counts: Grouped::new(|r| r.sex, CountRows),
            female_professors: GroupAll::new(ProfessorShare { sex: Sex::Female }),
            male_professors: GroupAll::new(ProfessorShare { sex: Sex::Male }),
            salary_by_sex: Grouped::new(|r| r.sex, SalaryAverage),
            rank_distribution: Rank::STACK_ORDER
                .iter()
                .map(|&rank| (rank, rank_by_sex(rank)))
                .collect(),
            service_scatter: Grouped::new(service_key, CountRows),
            phd_scatter: Grouped::new(phd_key, CountRows),
        };

        for record in &records {
            let delta = Delta::Added(record);
            dash.discipline_counts.apply(&delta);
            dash.fan_out(&delta);
        }
        dash.records = records;
        dash
    }

    /// Change (or clear) the discipline selection. Every affected group is
    /// updated with O(1) work per changed record; nothing is rebuilt.
    pub fn set_discipline(&mut self, selection: Option<&str>) {
        let deltas = self.discipline.retarget(&self.records, selection);
        for delta in &deltas {
            self.sex_counts.apply(delta);
            self.female_professors.apply(delta);
            self.male_professors.apply(delta);
            self.salary_by_sex.apply(delta);
            for (_, group) in &mut self.rank_distribution {
                group.apply(delta);
            }
            self.service_scatter.apply(delta);
            self.phd_scatter.apply(delta);
        }
    }

    fn fan_out(&mut self, delta: &Delta<'_>) {
        self.sex_counts.apply(delta);
        self.female_professors.apply(delta);
        self.male_professors.apply(delta);
        self.salary_by_sex.apply(delta);
        for (_, group) in &mut self.rank_distribution {
            group.apply(delta);
        }
        self.service_scatter.apply(delta);
        self.phd_scatter.apply(delta);
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn selected_discipline(&self) -> Option<&str> {
        self.discipline.selected()
    }

    // ---- widgets ------------------------------------------------------------

    pub fn discipline_selector(&self) -> SelectMenu {
        SelectMenu {
            options: self
                .discipline_counts
                .iter()
                .map(|(k, &count)| (k.clone(), count))
                .collect(),
        }
    }

    pub fn percent_professors(&self, sex: Sex) -> NumberDisplay {
        let tally = match sex {
            Sex::Female => self.female_professors.state(),
            Sex::Male => self.male_professors.state(),
        };
        NumberDisplay {
            value: tally.ratio(),
        }
    }

    pub fn gender_balance(&self) -> BarChart {
        BarChart {
            width: 350,
            height: 250,
            margins: Margins::new(10, 50, 30, 50),
            x_label: "Gender".to_owned(),
            y_ticks: 20,
            bars: Sex::ALL
                .iter()
                .map(|&sex| Bar {
                    key: sex.label().to_owned(),
                    value: self.sex_counts.get(&sex).copied().unwrap_or(0) as f64,
                })
                .collect(),
        }
    }

    pub fn average_salary(&self) -> BarChart {
        BarChart {
            width: 350,
            height: 250,
            margins: Margins::new(10, 50, 30, 50),
            x_label: "Gender".to_owned(),
            y_ticks: 4,
            bars: Sex::ALL
                .iter()
                .map(|&sex| Bar {
                    key: sex.label().to_owned(),
                    value: self
                        .salary_by_sex
                        .get(&sex)
                        .map(|avg| avg.average)
                        .unwrap_or(0.0),
                })
                .collect(),
        }
    }

    pub fn rank_distribution(&self) -> StackedBarChart {
        StackedBarChart {
            width: 350,
            height: 250,
            margins: Margins::new(10, 80, 30, 30),
            x_label: "Gender".to_owned(),
            legend: Legend {
                x: 280,
                y: 10,
                item_height: 15,
                gap: 10,
            },
            stacks: self
                .rank_distribution
                .iter()
                .map(|(rank, group)| Stack {
                    label: rank.legend_label(),
                    bars: Sex::ALL
                        .iter()
                        .map(|&sex| Bar {
                            key: sex.label().to_owned(),
                            value: group
                                .get(&sex)
                                .map(|tally| tally.ratio() * 100.0)
                                .unwrap_or(0.0),
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    pub fn service_salary_correlation(&self) -> ScatterPlot {
        scatter_plot(&self.service_scatter, "Years Of Service")
    }

    pub fn phd_salary_correlation(&self) -> ScatterPlot {
        scatter_plot(&self.phd_scatter, "Years Since Phd")
    }
}

fn scatter_plot(group: &Grouped<ScatterKey, CountRows>, x_label: &str) -> ScatterPlot {
    let points: Vec<ScatterPoint> = group
        .iter()
        .filter(|(_, &weight)| weight > 0)
        .map(|(&(x, salary, rank, sex), &weight)| ScatterPoint {
            x,
            salary,
            rank,
            sex,
            weight,
        })
        .collect();

    // Domain from the plotted points' own x field.
    let x_domain = match (
        points.iter().map(|p| p.x).min(),
        points.iter().map(|p| p.x).max(),
    ) {
        (Some(lo), Some(hi)) => (lo as f64, hi as f64),
        _ => (0.0, 0.0),
    };

    ScatterPlot {
        width: 800,
        height: 400,
        margins: Margins::new(10, 50, 75, 75),
        x_label: x_label.to_owned(),
        x_domain,
        symbol_size: 8.0,
        clip_padding: 10.0,
        points,
    }
}
