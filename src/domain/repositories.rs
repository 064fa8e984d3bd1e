//! Repository provider for the domain layer
//!
//! Consumers hold one provider and request the repository they need:
//!
//! ```ignore
//! async fn handle(repos: &dyn RepositoryProvider) {
//!     let category = repos.categories().find_by_id(1).await?;
//!     let dependents = repos.products().count_matching(&filter).await?;
//! }
//! ```

use super::category::CategoryRepository;
use super::product::ProductRepository;

/// Unified access to all per-aggregate repositories of one backend.
pub trait RepositoryProvider: Send + Sync {
    fn categories(&self) -> &dyn CategoryRepository;
    fn products(&self) -> &dyn ProductRepository;
}
