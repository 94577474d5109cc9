//! Page slicing over generated collections.

use quayside_types::{Page, PageRequest};

/// Slice `source` to the requested page.
///
/// The slice is `[(current-1)*page_size, current*page_size)` clamped to
/// `[0, source.len()]`. Pages past the end yield an empty slice.
pub fn paginate<'a, T>(source: &'a [T], page: &PageRequest) -> &'a [T] {
    let range = page.range();
    let len = source.len();
    let start = usize::try_from(range.start).unwrap_or(usize::MAX).min(len);
    let end = usize::try_from(range.end).unwrap_or(usize::MAX).min(len);
    &source[start..end.max(start)]
}

/// A [`Page`] of `source` carrying `declared_total` rather than the slice
/// length.
pub fn page_of<T: Clone>(source: &[T], page: &PageRequest, declared_total: u64) -> Page<T> {
    Page::new(paginate(source, page).to_vec(), declared_total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers() -> Vec<u32> {
        (0..45).collect()
    }

    #[test]
    fn test_middle_page() {
        let source = numbers();
        let slice = paginate(&source, &PageRequest::new(2, 10));
        assert_eq!(slice, &source[10..20]);
    }

    #[test]
    fn test_last_partial_page() {
        let source = numbers();
        let slice = paginate(&source, &PageRequest::new(5, 10));
        assert_eq!(slice, &source[40..45]);
    }

    #[test]
    fn test_page_past_end_keeps_declared_total() {
        let source = numbers();
        let page = page_of(&source, &PageRequest::new(6, 10), 45);
        assert!(page.list.is_empty());
        assert_eq!(page.total, 45);
    }

    #[test]
    fn test_huge_values_saturate() {
        let source = numbers();
        assert!(paginate(&source, &PageRequest::new(u64::MAX, u64::MAX)).is_empty());
        assert_eq!(paginate(&source, &PageRequest::new(1, u64::MAX)).len(), 45);
    }

    #[test]
    fn test_declared_total_independent_of_length() {
        let source = numbers();
        let page = page_of(&source, &PageRequest::new(1, 10), 100);
        assert_eq!(page.list.len(), 10);
        assert_eq!(page.total, 100);
    }

    #[test]
    fn test_source_untouched() {
        let source = numbers();
        let before = source.clone();
        let _ = page_of(&source, &PageRequest::new(3, 7), 45);
        let _ = paginate(&source, &PageRequest::new(1, 50));
        assert_eq!(source, before);
    }
}
