//! Error taxonomy
//!
//! Two distinct families:
//! - [`ValidationError`] with an [`AppErrorCode`]: domain rules rejected the
//!   input; recoverable, surfaced to the client as structured detail.
//! - [`StorageError`]: an unexpected backend fault; captured into
//!   `OperationResult::Failed` and surfaced as an opaque 500.
//!
//! Absence of an entity is neither -- it is the `NotFound` outcome.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Application-specific error codes attached to validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum AppErrorCode {
    /// A required field is missing or empty.
    IsRequired,
    /// A field value has the wrong type or is malformed.
    InvalidType,
    /// A field value violates its length constraints.
    InvalidLength,
    /// A unique field value is already taken by another record.
    ValueExists,
    /// A referenced related entity does not exist.
    RelatedEntityNotFound,
    /// The entity still has dependents and cannot be deleted.
    CantBeDeleted,
    /// An unexpected server-side failure.
    InternalServerError,
}

/// A single structured validation error.
///
/// `source` names the offending field where one exists; entity-level errors
/// (e.g. a blocked delete) carry no source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ValidationError {
    pub code: AppErrorCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub title: String,
    pub detail: String,
}

impl ValidationError {
    pub fn value_exists(source: &str, detail: impl Into<String>) -> Self {
        Self {
            code: AppErrorCode::ValueExists,
            source: Some(source.to_string()),
            title: "Field value already exists".to_string(),
            detail: detail.into(),
        }
    }

    pub fn related_entity_not_found(source: &str, detail: impl Into<String>) -> Self {
        Self {
            code: AppErrorCode::RelatedEntityNotFound,
            source: Some(source.to_string()),
            title: "Related entity not found".to_string(),
            detail: detail.into(),
        }
    }

    pub fn cant_be_deleted(detail: impl Into<String>) -> Self {
        Self {
            code: AppErrorCode::CantBeDeleted,
            source: None,
            title: "Entity can't be deleted".to_string(),
            detail: detail.into(),
        }
    }

    pub fn is_required(source: &str, detail: impl Into<String>) -> Self {
        Self {
            code: AppErrorCode::IsRequired,
            source: Some(source.to_string()),
            title: "Field is required".to_string(),
            detail: detail.into(),
        }
    }

    pub fn invalid_type(source: Option<&str>, detail: impl Into<String>) -> Self {
        Self {
            code: AppErrorCode::InvalidType,
            source: source.map(str::to_string),
            title: "Field value is invalid".to_string(),
            detail: detail.into(),
        }
    }

    pub fn invalid_length(source: &str, detail: impl Into<String>) -> Self {
        Self {
            code: AppErrorCode::InvalidLength,
            source: Some(source.to_string()),
            title: "Field value has invalid length".to_string(),
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self {
            code: AppErrorCode::InternalServerError,
            source: None,
            title: "Internal server error".to_string(),
            detail: detail.into(),
        }
    }
}

/// Unexpected backend faults. The only values that ever reach
/// `OperationResult::Failed`.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Document store error: {0}")]
    Document(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for repository operations.
pub type StorageResult<T> = Result<T, StorageError>;
