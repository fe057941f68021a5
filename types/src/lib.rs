//! Fundamental types for the Civica reputation & community-consensus engine.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: identifiers, timestamps, trust levels, report/rating enums,
//! the failure taxonomy, and the engine's constant table.

pub mod failure;
pub mod id;
pub mod level;
pub mod params;
pub mod rating;
pub mod report;
pub mod time;

pub use failure::FailureKind;
pub use id::{CandidateId, CitizenId, ElectionId, OfficialId, ReportId};
pub use level::VerificationLevel;
pub use rating::RatingCategory;
pub use report::{ReportCategory, ReportSeverity, ReportStatus};
pub use time::{Clock, SystemClock, Timestamp};
