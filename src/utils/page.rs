/// Pagination over already-rendered statement rows.
///
/// Page numbering happens after layout: chunk first, then render footers with
/// the final page count.
pub struct Paginator<T> {
    pages: Vec<Vec<T>>,
}

impl<T> Paginator<T> {
    /// Split items into pages of at most `per_page` items
    pub fn new(items: Vec<T>, per_page: usize) -> Self {
        assert!(per_page > 0, "per_page must be positive");

        let mut pages = Vec::new();
        let mut current = Vec::new();

        for item in items {
            current.push(item);
            if current.len() == per_page {
                pages.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            pages.push(current);
        }

        Paginator { pages }
    }

    /// Get total number of pages
    pub fn total_pages(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Iterate pages with their 1-based page index
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[T])> {
        self.pages
            .iter()
            .enumerate()
            .map(|(i, page)| (i + 1, page.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_multiple_fills_pages() {
        let paginator = Paginator::new((0..20).collect(), 10);
        assert_eq!(paginator.total_pages(), 2);
        assert!(paginator.iter().all(|(_, page)| page.len() == 10));
    }

    #[test]
    fn test_remainder_goes_to_last_page() {
        let paginator = Paginator::new((0..23).collect(), 10);
        assert_eq!(paginator.total_pages(), 3);
        let last = paginator.iter().last().unwrap();
        assert_eq!(last.0, 3);
        assert_eq!(last.1.len(), 3);
    }

    #[test]
    fn test_empty_input_has_no_pages() {
        let paginator: Paginator<i32> = Paginator::new(Vec::new(), 10);
        assert!(paginator.is_empty());
        assert_eq!(paginator.total_pages(), 0);
    }
}
