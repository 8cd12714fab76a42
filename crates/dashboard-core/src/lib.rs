// File: crates/dashboard-core/src/lib.rs
// Summary: Core library entry point; exports the data model, aggregation layer, and widgets.

pub mod accumulate;
pub mod dashboard;
pub mod dataset;
pub mod filter;
pub mod group;
pub mod record;
pub mod reduce;
pub mod widget;

pub use accumulate::{Average, Tally};
pub use dashboard::Dashboard;
pub use dataset::{load_salaries_csv, DataError, SalaryData};
pub use filter::{Delta, DimensionFilter};
pub use group::{rank_by_sex, GroupAll, Grouped};
pub use record::{Rank, Record, Sex};
pub use reduce::{CountRows, ProfessorShare, RankShare, Reduce, SalaryAverage};
