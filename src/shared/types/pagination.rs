//! Pagination contract shared by every list endpoint
//!
//! Two halves with a deliberate asymmetry:
//! - `compute_bounds` normalizes raw query input into a backend window.
//! - `compute_page_info` echoes the raw input back to the caller, so the
//!   descriptor reports exactly what was asked for.
//!
//! Normalization happens in exactly one place. Re-normalizing inside the
//! descriptor would make the reported page silently disagree with the
//! bounds actually used for the query.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Backend-facing query window derived from raw page/page-size input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBounds {
    /// Rows to skip before the first returned row.
    pub offset: u64,
    /// Maximum rows to return. A limit of 0 means "no rows".
    pub limit: u64,
}

/// User-facing pagination metadata returned alongside a result list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PageInfo {
    /// Page number as supplied by the caller.
    pub page: i64,
    /// Page size as supplied by the caller.
    pub page_size: i64,
    /// Items actually returned in this page.
    pub count: u64,
    /// Total items matching the query regardless of paging.
    pub total: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<i64>,
    pub total_pages: u64,
}

/// Translates untrusted `page`/`page_size` query values into a safe window.
///
/// Negative inputs count as their magnitude, a zero page falls back to
/// page 1, and a zero page size yields `limit = 0` -- which every backend
/// must read as "return zero rows", never "unlimited". The zero-limit
/// default is an explicit compatibility choice. Never fails; only
/// normalizes.
pub fn compute_bounds(page: i64, page_size: i64) -> PageBounds {
    let limit = page_size.unsigned_abs();
    let effective_page = match page.unsigned_abs() {
        0 => 1,
        p => p,
    };

    PageBounds {
        offset: limit.saturating_mul(effective_page - 1),
        limit,
    }
}

/// Builds the page descriptor for a search response.
///
/// `page` and `page_size` are echoed exactly as supplied; normalization
/// belongs to [`compute_bounds`] alone. A non-positive `page_size` yields
/// `total_pages = 0` instead of a division by zero. The previous page is
/// present iff `page > 1`, the next page iff further pages exist.
pub fn compute_page_info(page: i64, page_size: i64, total: u64, count: u64) -> PageInfo {
    let total_pages = if page_size > 0 {
        total.div_ceil(page_size as u64)
    } else {
        0
    };

    PageInfo {
        page,
        page_size,
        count,
        total,
        previous_page: (page > 1).then(|| page - 1),
        next_page: (total_pages as i64 > page).then(|| page + 1),
        total_pages,
    }
}

/// Applies a window to an in-process result set.
///
/// Used by the array-style backends (memory, document) after filtering;
/// the relational backend pushes the same window into the query instead.
pub fn apply_bounds<T>(items: Vec<T>, bounds: PageBounds) -> Vec<T> {
    items
        .into_iter()
        .skip(bounds.offset as usize)
        .take(bounds.limit as usize)
        .collect()
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_first_page() {
        assert_eq!(compute_bounds(1, 10), PageBounds { offset: 0, limit: 10 });
    }

    #[test]
    fn bounds_third_page() {
        assert_eq!(compute_bounds(3, 10), PageBounds { offset: 20, limit: 10 });
    }

    #[test]
    fn bounds_offset_is_limit_times_preceding_pages() {
        for page in 1..=20i64 {
            for page_size in 0..=15i64 {
                let bounds = compute_bounds(page, page_size);
                assert_eq!(bounds.offset, (page_size * (page - 1)) as u64);
                assert_eq!(bounds.limit, page_size as u64);
            }
        }
    }

    #[test]
    fn bounds_zero_page_falls_back_to_first() {
        assert_eq!(compute_bounds(0, 10), compute_bounds(1, 10));
    }

    #[test]
    fn bounds_negative_inputs_use_magnitude() {
        assert_eq!(compute_bounds(-3, 10), compute_bounds(3, 10));
        assert_eq!(compute_bounds(2, -10), compute_bounds(2, 10));
    }

    #[test]
    fn bounds_zero_page_size_means_no_rows() {
        let bounds = compute_bounds(5, 0);
        assert_eq!(bounds.limit, 0);
        assert_eq!(bounds.offset, 0);
    }

    #[test]
    fn page_info_first_page() {
        let info = compute_page_info(1, 10, 25, 10);
        assert_eq!(info.page, 1);
        assert_eq!(info.page_size, 10);
        assert_eq!(info.count, 10);
        assert_eq!(info.total, 25);
        assert_eq!(info.previous_page, None);
        assert_eq!(info.next_page, Some(2));
        assert_eq!(info.total_pages, 3);
    }

    #[test]
    fn page_info_last_page() {
        let info = compute_page_info(3, 10, 25, 5);
        assert_eq!(info.previous_page, Some(2));
        assert_eq!(info.next_page, None);
        assert_eq!(info.total_pages, 3);
        assert_eq!(info.count, 5);
    }

    #[test]
    fn page_info_zero_page_size_clamps_total_pages() {
        let info = compute_page_info(1, 0, 25, 0);
        assert_eq!(info.total_pages, 0);
        assert_eq!(info.next_page, None);
    }

    #[test]
    fn page_info_echoes_raw_input() {
        // The descriptor reports what the caller sent, even when the
        // resolver normalized it for the query.
        let info = compute_page_info(-2, 10, 30, 10);
        assert_eq!(info.page, -2);
        assert_eq!(info.previous_page, None);
        assert_eq!(info.next_page, Some(-1));
    }

    #[test]
    fn page_info_exact_fit_has_no_next_page() {
        let info = compute_page_info(2, 10, 20, 10);
        assert_eq!(info.next_page, None);
        assert_eq!(info.total_pages, 2);
    }

    #[test]
    fn apply_bounds_windows_the_set() {
        let items: Vec<i32> = (1..=9).collect();
        let window = |offset, limit| PageBounds { offset, limit };

        assert_eq!(apply_bounds(items.clone(), window(3, 3)), vec![4, 5, 6]);
        assert_eq!(apply_bounds(items.clone(), window(0, 0)), Vec::<i32>::new());
        assert_eq!(apply_bounds(items, window(8, 5)), vec![9]);
    }
}
