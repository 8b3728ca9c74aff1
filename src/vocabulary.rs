//! Closed vocabularies naming datasets, backing engines and well-known columns.
//!
//! Criteria maps and accessor constructors take these tags instead of raw
//! strings, so a reference to a nonexistent column cannot compile. Text
//! arriving from the outside (configuration, a user interface) enters the
//! vocabulary through [`Source::from_name`] and friends, which are the
//! lookups behind the `Validate` predicates.

use std::fmt;

// Generates a closed vocabulary: the enum itself, a slice of every member,
// a rendered name per member and a case-insensitive lookup from text.
macro_rules! vocabulary {
    ($(#[$meta:meta])* $name:ident { $($variant:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        pub enum $name {
            $($variant),+
        }
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
            pub fn name(&self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),+
                }
            }
            pub fn from_name(name: &str) -> Option<$name> {
                Self::ALL
                    .iter()
                    .find(|member| member.name().eq_ignore_ascii_case(name))
                    .copied()
            }
        }
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}", self.name())
            }
        }
    };
}

// ------------- Source -------------
vocabulary! {
    /// One logical dataset of the budget execution domain. The rendered
    /// name doubles as the backing table name.
    Source {
        Accounts,
        Activity,
        Allocations,
        Appropriations,
        BudgetObjectClasses,
        Divisions,
        Funds,
        Goals,
        Objectives,
        Obligations,
        Organizations,
        Outlays,
        ProgramAreas,
        ProgramProjects,
        ProgramResultsCodes,
        ResponsibilityCenters,
        Transfers,
    }
}

impl Source {
    pub fn table(&self) -> &'static str {
        self.name()
    }
}

// ------------- Provider -------------
vocabulary! {
    /// A backing storage engine. Only the embedded file database is wired
    /// up in this crate; the remaining members are tags that a resolver
    /// for another engine would claim.
    Provider {
        SQLite,
        SqlServer,
        Access,
        Excel,
        Delimited,
    }
}

// ------------- Column vocabularies -------------
vocabulary! {
    /// Text-valued columns: codes, names, titles and fiscal year markers.
    Field {
        Code,
        Name,
        Title,
        Description,
        BFY,
        EFY,
        AccountCode,
        ActivityCode,
        ActivityName,
        AppropriationCode,
        BocCode,
        BocName,
        DivisionCode,
        DivisionName,
        DocumentNumber,
        FundCode,
        FundName,
        GoalCode,
        GoalName,
        ObjectiveCode,
        ObjectiveName,
        OrgCode,
        OrgName,
        ProgramAreaCode,
        ProgramAreaName,
        ProgramProjectCode,
        ProgramProjectName,
        RcCode,
        RcName,
        TreasurySymbol,
    }
}

vocabulary! {
    /// Funding measures. Stored as REAL; a negative stored value marks
    /// "not applicable" in the schema and never surfaces as funding.
    Numeric {
        Amount,
        Authority,
        Available,
        Balance,
        Budgeted,
        CarryIn,
        CarryOut,
        Expenditures,
        Obligations,
        OpenCommitments,
        Outlays,
        Posted,
        Recoveries,
        Reimbursements,
        UnliquidatedObligations,
    }
}

vocabulary! {
    /// Per-dataset identity columns.
    PrimaryKey {
        AccountsId,
        ActivityId,
        AllocationsId,
        AppropriationsId,
        BudgetObjectClassesId,
        DivisionsId,
        FundsId,
        GoalsId,
        ObjectivesId,
        ObligationsId,
        OrganizationsId,
        OutlaysId,
        ProgramAreasId,
        ProgramProjectsId,
        ProgramResultsCodesId,
        ResponsibilityCentersId,
        TransfersId,
    }
}

vocabulary! {
    /// Event timestamp columns.
    EventDate {
        ClosedDate,
        DocumentDate,
        LastUpdate,
        ObligatingDocumentDate,
        OpenedDate,
        ProcessedDate,
    }
}

// ------------- Column -------------
/// Unifies the four column vocabularies so criteria maps and row lookups
/// accept any of them.
pub trait Column {
    fn column(&self) -> &'static str;
}

impl Column for Field {
    fn column(&self) -> &'static str {
        self.name()
    }
}
impl Column for Numeric {
    fn column(&self) -> &'static str {
        self.name()
    }
}
impl Column for PrimaryKey {
    fn column(&self) -> &'static str {
        self.name()
    }
}
impl Column for EventDate {
    fn column(&self) -> &'static str {
        self.name()
    }
}

/// Looks a plain name up across all four column vocabularies, yielding the
/// canonical spelling when the name is defined.
pub fn column_named(name: &str) -> Option<&'static str> {
    Field::from_name(name)
        .map(|field| field.column())
        .or_else(|| Numeric::from_name(name).map(|numeric| numeric.column()))
        .or_else(|| PrimaryKey::from_name(name).map(|key| key.column()))
        .or_else(|| EventDate::from_name(name).map(|event| event.column()))
}
