use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    #[error("page number must be at least 1")]
    ZeroPageNumber,

    #[error("page size must be at least 1")]
    ZeroPageSize,
}

/// A one-based page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    number: u64,
    size: u64,
}

impl PageRequest {
    pub fn new(number: u64, size: u64) -> Result<Self, PageError> {
        if number == 0 {
            return Err(PageError::ZeroPageNumber);
        }
        if size == 0 {
            return Err(PageError::ZeroPageSize);
        }
        Ok(Self { number, size })
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Rows to skip before this page.
    pub fn offset(&self) -> u64 {
        (self.number - 1).saturating_mul(self.size)
    }
}

/// One page of results plus the total number of matching rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page_number: u64,
    pub page_size: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total_count: u64, request: PageRequest) -> Self {
        Self {
            items,
            total_count,
            page_number: request.number(),
            page_size: request.size(),
        }
    }

    /// Cuts the requested window out of an already filtered and sorted list.
    pub fn from_sorted(rows: Vec<T>, request: PageRequest) -> Self {
        let total_count = rows.len() as u64;
        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let size = usize::try_from(request.size()).unwrap_or(usize::MAX);
        let items = rows.into_iter().skip(offset).take(size).collect();
        Self::new(items, total_count, request)
    }

    pub fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total_count.div_ceil(self.page_size)
    }

    pub fn has_previous(&self) -> bool {
        self.page_number > 1
    }

    pub fn has_next(&self) -> bool {
        self.page_number < self.total_pages()
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            page_number: self.page_number,
            page_size: self.page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_number_and_size() {
        assert_eq!(PageRequest::new(0, 10), Err(PageError::ZeroPageNumber));
        assert_eq!(PageRequest::new(1, 0), Err(PageError::ZeroPageSize));
    }

    #[test]
    fn last_page_is_short() {
        let request = PageRequest::new(3, 10).unwrap();
        let page = Page::from_sorted((1..=25).collect::<Vec<_>>(), request);

        assert_eq!(page.items, (21..=25).collect::<Vec<_>>());
        assert_eq!(page.total_count, 25);
        assert_eq!(page.total_pages(), 3);
        assert!(page.has_previous());
        assert!(!page.has_next());
    }

    #[test]
    fn page_past_the_end_is_empty_with_total() {
        let request = PageRequest::new(9, 10).unwrap();
        let page = Page::from_sorted(vec![1, 2, 3], request);

        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 3);
    }

    #[test]
    fn huge_page_number_does_not_overflow() {
        let request = PageRequest::new(u64::MAX, u64::MAX).unwrap();
        assert_eq!(request.offset(), u64::MAX);
    }

    #[test]
    fn map_keeps_metadata() {
        let request = PageRequest::new(2, 2).unwrap();
        let page = Page::from_sorted(vec![1, 2, 3], request).map(|n| n * 10);

        assert_eq!(page.items, vec![30]);
        assert_eq!(page.page_number, 2);
        assert_eq!(page.total_count, 3);
    }
}
