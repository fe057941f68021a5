//! Opaque string identifiers.
//!
//! Ids are assigned by the persistence collaborator (the engine never mints
//! them, except report ids which it requests from the store). The engine
//! treats them as opaque keys.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// A citizen registered with the identity subsystem.
    CitizenId
);
string_id!(
    /// A public official.
    OfficialId
);
string_id!(
    /// An election.
    ElectionId
);
string_id!(
    /// A candidate standing in an election.
    CandidateId
);
string_id!(
    /// A corruption report.
    ReportId
);
