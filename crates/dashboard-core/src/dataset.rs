// File: crates/dashboard-core/src/dataset.rs
// Summary: CSV ingestion for the salaries dataset with header-name column lookup.

use std::path::Path;

use thiserror::Error;

use crate::record::{Rank, Record, Sex};

#[derive(Debug, Error)]
pub enum DataError {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("missing column '{0}'")]
    MissingColumn(&'static str),
}

/// Parsed dataset plus a count of rows dropped during ingestion.
#[derive(Debug)]
pub struct SalaryData {
    pub records: Vec<Record>,
    pub skipped: usize,
}

/// Load the salaries CSV. Columns are located by header name, tolerating the
/// `yrs.service` / `yrs_service` spelling split. Rows whose numeric fields or
/// categorical vocabulary fail to parse are skipped and counted, not fatal.
pub fn load_salaries_csv(path: impl AsRef<Path>) -> Result<SalaryData, DataError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path.as_ref())?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();

    let idx = |names: &[&str]| -> Option<usize> {
        for (i, h) in headers.iter().enumerate() {
            for want in names {
                if h == want {
                    return Some(i);
                }
            }
        }
        None
    };

    let require = |names: &[&str], label: &'static str| -> Result<usize, DataError> {
        idx(names).ok_or(DataError::MissingColumn(label))
    };

    let i_salary = require(&["salary"], "salary")?;
    let i_sex = require(&["sex"], "sex")?;
    let i_rank = require(&["rank"], "rank")?;
    let i_discipline = require(&["discipline"], "discipline")?;
    let i_service = require(&["yrs.service", "yrs_service"], "yrs.service")?;
    let i_phd = require(&["yrs.since.phd", "yrs_since_phd"], "yrs.since.phd")?;

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for rec in rdr.records() {
        let rec = rec?;
        let field = |i: usize| rec.get(i).map(str::trim);
        let num = |i: usize| field(i).and_then(|s| s.parse::<u32>().ok());

        let parsed = (|| {
            Some(Record {
                salary: num(i_salary)?,
                sex: Sex::parse(field(i_sex)?)?,
                rank: Rank::parse(field(i_rank)?)?,
                discipline: field(i_discipline)?.to_owned(),
                yrs_service: num(i_service)?,
                yrs_since_phd: num(i_phd)?,
            })
        })();

        match parsed {
            Some(r) => records.push(r),
            None => skipped += 1,
        }
    }

    Ok(SalaryData { records, skipped })
}
