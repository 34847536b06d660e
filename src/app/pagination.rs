//! Page slicing for long tables.

/// One page of a larger slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Page<'a, T> {
    /// Items on this page.
    pub items: &'a [T],
    /// 1-based page number.
    pub number: usize,
    /// Total number of pages (at least 1).
    pub total_pages: usize,
}

impl<T> Page<'_, T> {
    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }
}

/// Slice page `number` (1-based) out of `items`.
///
/// `number` is clamped into `1..=total_pages`; an empty slice has a single empty page.
/// A `page_size` of zero is treated as one.
pub fn paginate<T>(items: &[T], page_size: usize, number: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let total_pages = items.len().div_ceil(page_size).max(1);
    let number = number.clamp(1, total_pages);
    let start = (number - 1) * page_size;
    let end = (start + page_size).min(items.len());
    Page {
        items: &items[start.min(end)..end],
        number,
        total_pages,
    }
}

/// Navigation answer at the bottom of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    Next,
    Previous,
    Menu,
}

impl PageNav {
    /// `n`, `p` or `m`, case-insensitive. Anything else is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "n" => Some(Self::Next),
            "p" => Some(Self::Previous),
            "m" => Some(Self::Menu),
            _ => None,
        }
    }
}
