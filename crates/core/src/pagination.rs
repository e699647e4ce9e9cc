//! Offset/limit pagination bounds for list endpoints.
//!
//! `skip` must be non-negative and `limit` must lie in
//! `MIN_LIMIT..=MAX_LIMIT`. Anything else is a [`CoreError::Validation`].

use crate::error::CoreError;

/// Rows skipped when `skip` is omitted.
pub const DEFAULT_SKIP: i64 = 0;

/// Page size when `limit` is omitted.
pub const DEFAULT_LIMIT: i64 = 100;

/// Smallest accepted page size.
pub const MIN_LIMIT: i64 = 1;

/// Largest accepted page size.
pub const MAX_LIMIT: i64 = 1000;

/// A validated `skip`/`limit` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub skip: i64,
    pub limit: i64,
}

impl Pagination {
    /// Apply defaults and check bounds: `skip >= 0`, `limit` in
    /// `[MIN_LIMIT, MAX_LIMIT]`.
    pub fn new(skip: Option<i64>, limit: Option<i64>) -> Result<Self, CoreError> {
        let skip = skip.unwrap_or(DEFAULT_SKIP);
        let limit = limit.unwrap_or(DEFAULT_LIMIT);

        if skip < 0 {
            return Err(CoreError::Validation(format!(
                "skip must be greater than or equal to 0, got {skip}"
            )));
        }
        if !(MIN_LIMIT..=MAX_LIMIT).contains(&limit) {
            return Err(CoreError::Validation(format!(
                "limit must be between {MIN_LIMIT} and {MAX_LIMIT}, got {limit}"
            )));
        }

        Ok(Self { skip, limit })
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: DEFAULT_SKIP,
            limit: DEFAULT_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn defaults_when_both_missing() {
        assert_eq!(Pagination::new(None, None).unwrap(), Pagination::default());
    }

    #[test]
    fn accepts_bounds_inclusive() {
        assert_eq!(
            Pagination::new(Some(0), Some(MIN_LIMIT)).unwrap().limit,
            MIN_LIMIT
        );
        assert_eq!(
            Pagination::new(Some(0), Some(MAX_LIMIT)).unwrap().limit,
            MAX_LIMIT
        );
    }

    #[test]
    fn rejects_negative_skip() {
        assert_matches!(Pagination::new(Some(-1), None), Err(CoreError::Validation(_)));
    }

    #[test]
    fn rejects_zero_limit() {
        assert_matches!(Pagination::new(None, Some(0)), Err(CoreError::Validation(_)));
    }

    #[test]
    fn rejects_limit_above_max() {
        assert_matches!(
            Pagination::new(None, Some(MAX_LIMIT + 1)),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn large_skip_is_allowed() {
        let page = Pagination::new(Some(1_000_000), Some(10)).unwrap();
        assert_eq!(page.skip, 1_000_000);
    }
}
