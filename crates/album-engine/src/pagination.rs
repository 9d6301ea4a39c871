/// Pagers with this many pages or fewer list every page.
pub const MAX_VISIBLE_PAGES: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based.
    pub number: usize,
    pub total_pages: usize,
}

pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Window `page_number` (1-based) out of `items`. Pages outside
/// `1..=total_pages` are empty.
pub fn paginate<T>(items: &[T], page_size: usize, page_number: usize) -> Page<'_, T> {
    let total_pages = total_pages(items.len(), page_size);
    let window = if page_number == 0 || page_number > total_pages {
        &items[..0]
    } else {
        let start = (page_number - 1) * page_size;
        let end = (start + page_size).min(items.len());
        &items[start..end]
    };

    Page {
        items: window,
        number: page_number,
        total_pages,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageButton {
    Page(usize),
    Ellipsis,
}

/// Page buttons for a bounded pager: first and last page always, up to three
/// pages around `current`, and one ellipsis per skipped gap.
pub fn page_buttons(current: usize, total_pages: usize) -> Vec<PageButton> {
    if total_pages <= MAX_VISIBLE_PAGES {
        return (1..=total_pages).map(PageButton::Page).collect();
    }

    let mut buttons = vec![PageButton::Page(1)];
    if current > 3 {
        buttons.push(PageButton::Ellipsis);
    }

    let start = current.saturating_sub(1).max(2);
    let end = current.saturating_add(1).min(total_pages - 1);
    buttons.extend((start..=end).map(PageButton::Page));

    if current.saturating_add(2) < total_pages {
        buttons.push(PageButton::Ellipsis);
    }
    buttons.push(PageButton::Page(total_pages));
    buttons
}

/// Previous/next arrow targets; `None` disables the arrow.
pub fn arrow_targets(current: usize, total_pages: usize) -> (Option<usize>, Option<usize>) {
    let prev = (current > 1).then(|| current - 1);
    let next = (current < total_pages).then(|| current + 1);
    (prev, next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageButton::{Ellipsis, Page as P};

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 5), 0);
        assert_eq!(total_pages(5, 5), 1);
        assert_eq!(total_pages(6, 5), 2);
        assert_eq!(total_pages(6, 0), 0);
    }

    #[test]
    fn windows_are_disjoint_and_cover_everything() {
        let items: Vec<u32> = (0..23).collect();
        for size in 1..=7 {
            let pages = total_pages(items.len(), size);
            let mut joined = Vec::new();
            for n in 1..=pages {
                let page = paginate(&items, size, n);
                assert!(!page.items.is_empty());
                assert!(page.items.len() <= size);
                joined.extend_from_slice(page.items);
            }
            assert_eq!(joined, items, "page size {size}");
        }
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        let items = [1, 2, 3];
        assert!(paginate(&items, 2, 0).items.is_empty());
        assert!(paginate(&items, 2, 3).items.is_empty());
        assert_eq!(paginate(&items, 2, 3).total_pages, 2);
        assert!(paginate::<u8>(&[], 5, 1).items.is_empty());
    }

    #[test]
    fn small_pagers_list_every_page() {
        assert_eq!(page_buttons(1, 0), vec![]);
        assert_eq!(page_buttons(2, 3), vec![P(1), P(2), P(3)]);
        assert_eq!(
            page_buttons(5, 5),
            vec![P(1), P(2), P(3), P(4), P(5)]
        );
    }

    #[test]
    fn large_pagers_collapse_gaps() {
        assert_eq!(page_buttons(1, 10), vec![P(1), P(2), Ellipsis, P(10)]);
        assert_eq!(page_buttons(3, 10), vec![P(1), P(2), P(3), P(4), Ellipsis, P(10)]);
        assert_eq!(
            page_buttons(6, 10),
            vec![P(1), Ellipsis, P(5), P(6), P(7), Ellipsis, P(10)]
        );
        assert_eq!(page_buttons(8, 10), vec![P(1), Ellipsis, P(7), P(8), P(9), P(10)]);
        assert_eq!(page_buttons(10, 10), vec![P(1), Ellipsis, P(9), P(10)]);
    }

    #[test]
    fn page_past_the_end_does_not_overflow() {
        assert_eq!(page_buttons(usize::MAX, 10), vec![P(1), Ellipsis, P(10)]);
        assert_eq!(page_buttons(usize::MAX, 3), vec![P(1), P(2), P(3)]);
        assert_eq!(arrow_targets(usize::MAX, 10), (Some(usize::MAX - 1), None));
    }

    #[test]
    fn arrows_disable_at_edges() {
        assert_eq!(arrow_targets(1, 3), (None, Some(2)));
        assert_eq!(arrow_targets(2, 3), (Some(1), Some(3)));
        assert_eq!(arrow_targets(3, 3), (Some(2), None));
    }
}
