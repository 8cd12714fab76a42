// File: crates/dashboard-core/src/record.rs
// Summary: Dataset row model and categorical vocabulary (sex, academic rank).

/// Sex of a faculty member as recorded in the dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Female, Sex::Male];

    /// Parse the dataset vocabulary ("Female" / "Male").
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Female" => Some(Sex::Female),
            "Male" => Some(Sex::Male),
            _ => None,
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Sex::Female => "Female",
            Sex::Male => "Male",
        }
    }
}

/// Academic rank. Ordering follows seniority (assistant < associate < full).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    AsstProf,
    AssocProf,
    Prof,
}

impl Rank {
    /// Stacking order used by the rank-distribution chart: full professors first.
    pub const STACK_ORDER: [Rank; 3] = [Rank::Prof, Rank::AsstProf, Rank::AssocProf];

    /// Parse the dataset vocabulary ("Prof" / "AsstProf" / "AssocProf").
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Prof" => Some(Rank::Prof),
            "AsstProf" => Some(Rank::AsstProf),
            "AssocProf" => Some(Rank::AssocProf),
            _ => None,
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Rank::Prof => "Prof",
            Rank::AsstProf => "AsstProf",
            Rank::AssocProf => "AssocProf",
        }
    }

    /// Human-readable label for chart legends.
    pub const fn legend_label(&self) -> &'static str {
        match self {
            Rank::Prof => "Prof",
            Rank::AsstProf => "Asst Prof",
            Rank::AssocProf => "Assoc Prof",
        }
    }
}

/// One row of the salaries dataset. Immutable once parsed.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub salary: u32,
    pub sex: Sex,
    pub rank: Rank,
    pub discipline: String,
    pub yrs_service: u32,
    pub yrs_since_phd: u32,
}
