//! Data-access operation result contract
//!
//! Every service operation (create, search, find-by-id, update, delete)
//! returns an [`OperationResult`], and the transport layer maps it to an
//! HTTP response with a single function regardless of storage backend.
//!
//! The variants are mutually exclusive by construction, so callers match
//! instead of probing optional fields in a priority order. Backend faults
//! are captured into [`OperationResult::Failed`] rather than propagated;
//! a data-access call never needs error handling at the call site.

use super::errors::{StorageError, ValidationError};
use super::pagination::PageInfo;

/// Outcome of a data-access operation.
#[derive(Debug)]
pub enum OperationResult<T> {
    /// Single-entity success.
    Success(T),
    /// List success with its pagination descriptor.
    SuccessList(Vec<T>, PageInfo),
    /// Domain rules rejected the input. The sequence is ordered and
    /// non-empty; checks short-circuit, so it holds the first failure.
    ValidationFailed(Vec<ValidationError>),
    /// The requested entity does not exist. A normal outcome, not an error.
    NotFound,
    /// An unexpected backend fault, captured at the service boundary.
    Failed(StorageError),
}

impl<T> OperationResult<T> {
    /// Rejects with a single validation error.
    pub fn rejected(error: ValidationError) -> Self {
        Self::ValidationFailed(vec![error])
    }

    /// Converts the success payload, leaving the outcome untouched.
    ///
    /// This is how handlers turn domain models into response DTOs without
    /// re-deriving the outcome class.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> OperationResult<U> {
        match self {
            Self::Success(data) => OperationResult::Success(f(data)),
            Self::SuccessList(items, info) => {
                OperationResult::SuccessList(items.into_iter().map(f).collect(), info)
            }
            Self::ValidationFailed(errors) => OperationResult::ValidationFailed(errors),
            Self::NotFound => OperationResult::NotFound,
            Self::Failed(error) => OperationResult::Failed(error),
        }
    }
}

impl<T> From<StorageError> for OperationResult<T> {
    fn from(error: StorageError) -> Self {
        Self::Failed(error)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::types::compute_page_info;

    #[test]
    fn map_converts_single_payload() {
        let result = OperationResult::Success(2).map(|n| n * 10);
        assert!(matches!(result, OperationResult::Success(20)));
    }

    #[test]
    fn map_converts_every_list_item_and_keeps_page_info() {
        let info = compute_page_info(1, 10, 3, 3);
        let result = OperationResult::SuccessList(vec![1, 2, 3], info.clone()).map(|n| n * 2);

        match result {
            OperationResult::SuccessList(items, mapped_info) => {
                assert_eq!(items, vec![2, 4, 6]);
                assert_eq!(mapped_info, info);
            }
            other => panic!("expected SuccessList, got {:?}", other),
        }
    }

    #[test]
    fn map_passes_failure_outcomes_through() {
        let not_found: OperationResult<i32> = OperationResult::NotFound;
        assert!(matches!(not_found.map(|n| n + 1), OperationResult::NotFound));

        let failed: OperationResult<i32> =
            OperationResult::Failed(sea_orm::DbErr::Custom("boom".into()).into());
        assert!(matches!(failed.map(|n| n + 1), OperationResult::Failed(_)));
    }
}
