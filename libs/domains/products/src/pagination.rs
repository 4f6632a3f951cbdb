use serde::Serialize;
use utoipa::ToSchema;

/// One page of a sequence plus page metadata
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    /// Size of the whole sequence
    pub total: usize,
    /// Requested page (1-based)
    pub page: usize,
    /// Effective page size after clamping
    pub limit: usize,
    /// Always at least 1, even for an empty sequence
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

impl<T: Clone> Paginated<T> {
    /// Cut page `page` out of `all`.
    ///
    /// `limit` must already be clamped to at least 1. Page 0 and pages
    /// past the end yield no items but keep the metadata.
    pub fn from_slice(all: &[T], page: usize, limit: usize) -> Self {
        let limit = limit.max(1);
        let total = all.len();
        let total_pages = total.div_ceil(limit).max(1);

        let items = page
            .checked_sub(1)
            .and_then(|p| p.checked_mul(limit))
            .filter(|offset| *offset < total)
            .map(|offset| {
                let end = offset.saturating_add(limit).min(total);
                all[offset..end].to_vec()
            })
            .unwrap_or_default();

        Self {
            items,
            total,
            page,
            limit,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}
