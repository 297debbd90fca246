//! Fixed-size pages over a view.

/// One page of a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Zero-based index, clamped to the last page.
    pub index: usize,
    /// Number of pages; at least 1 even for an empty view.
    pub count: usize,
    /// Rows in the whole view.
    pub total: usize,
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.count
    }
}

/// Slice `rows` into page `index` of `size` rows.
///
/// A zero `size` is treated as 1.
pub fn paginate<T>(rows: Vec<T>, index: usize, size: usize) -> Page<T> {
    let size = size.max(1);
    let total = rows.len();
    let count = total.div_ceil(size).max(1);
    let index = index.min(count - 1);

    let items = rows.into_iter().skip(index * size).take(size).collect();

    Page {
        items,
        index,
        count,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_into_pages_of_five() {
        let rows: Vec<u32> = (1..=12).collect();
        let page = paginate(rows.clone(), 0, 5);
        assert_eq!(page.items, vec![1, 2, 3, 4, 5]);
        assert_eq!(page.count, 3);
        assert_eq!(page.total, 12);
        assert!(!page.has_previous());
        assert!(page.has_next());

        let last = paginate(rows, 2, 5);
        assert_eq!(last.items, vec![11, 12]);
        assert!(!last.has_next());
    }

    #[test]
    fn index_past_end_clamps_to_last_page() {
        let page = paginate(vec![1, 2, 3], 9, 2);
        assert_eq!(page.index, 1);
        assert_eq!(page.items, vec![3]);
    }

    #[test]
    fn empty_view_has_one_empty_page() {
        let page = paginate(Vec::<u32>::new(), 3, 5);
        assert_eq!(page.index, 0);
        assert_eq!(page.count, 1);
        assert!(page.items.is_empty());
    }

    #[test]
    fn zero_size_behaves_as_one() {
        let page = paginate(vec!['a', 'b'], 1, 0);
        assert_eq!(page.items, vec!['b']);
        assert_eq!(page.count, 2);
    }
}
