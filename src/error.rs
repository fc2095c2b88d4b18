//! Error type for brand table configuration defects.
//!
//! The rule table is static and trusted, so these errors are fatal at
//! initialization time: the library refuses to serve lookups from a
//! partially valid table. Lookups themselves never produce errors —
//! absence and malformed input are ordinary non-match results.

use std::fmt;

/// A defect in the static brand rule table.
#[derive(Debug, Clone)]
pub enum TableError {
    /// One of a brand's patterns failed to compile.
    BadPattern {
        /// The brand whose pattern is broken.
        brand: &'static str,
        /// Which pattern: `"full"`, `"bin"`, or `"cvv"`.
        field: &'static str,
        /// The underlying regex error.
        error: regex::Error,
    },

    /// A `priority_over` entry names a brand that is not in the table.
    UnknownPriority {
        /// The brand declaring the priority.
        brand: &'static str,
        /// The dangling target name.
        target: &'static str,
    },

    /// Two entries share the same brand name.
    DuplicateName {
        /// The repeated name.
        name: &'static str,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadPattern {
                brand,
                field,
                error,
            } => {
                write!(f, "brand '{}' has a bad {} pattern: {}", brand, field, error)
            }

            Self::UnknownPriority { brand, target } => {
                write!(
                    f,
                    "brand '{}' declares priority over unknown brand '{}'",
                    brand, target
                )
            }

            Self::DuplicateName { name } => {
                write!(f, "brand name '{}' appears more than once", name)
            }
        }
    }
}

impl std::error::Error for TableError {}
