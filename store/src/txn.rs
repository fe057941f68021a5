//! The transactional boundary.

use crate::citizen::CitizenTxn;
use crate::election::ElectionTxn;
use crate::official::OfficialTxn;
use crate::rating::RatingTxn;
use crate::report::ReportTxn;
use crate::StoreError;

/// Everything an engine operation may do inside one transaction.
pub trait StoreTxn: CitizenTxn + OfficialTxn + RatingTxn + ElectionTxn + ReportTxn {}

impl<T> StoreTxn for T where T: CitizenTxn + OfficialTxn + RatingTxn + ElectionTxn + ReportTxn {}

/// A transactional repository.
///
/// `atomically` runs the closure against a consistent snapshot and commits
/// all of its writes or none of them. Two concurrent closures targeting the
/// same unique key must serialize so the loser sees `StoreError::Duplicate`;
/// closures targeting different keys of the same parent may interleave, but
/// each must read a snapshot consistent with its own commit. The engine
/// never retries — a transient backend failure is returned to the caller,
/// converted into its error type via `From<StoreError>`.
pub trait EngineStore {
    fn atomically<T, E>(
        &self,
        f: impl FnOnce(&mut dyn StoreTxn) -> Result<T, E>,
    ) -> Result<T, E>
    where
        E: From<StoreError>;
}

impl<S: EngineStore> EngineStore for &S {
    fn atomically<T, E>(&self, f: impl FnOnce(&mut dyn StoreTxn) -> Result<T, E>) -> Result<T, E>
    where
        E: From<StoreError>,
    {
        (**self).atomically(f)
    }
}
