//! Page slicing and the pagination bar.

/// Games per page on the listing page.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Page slots in the pagination bar (first, last, and the pages in between).
pub const DEFAULT_MAX_VISIBLE: usize = 5;

/// Number of pages needed for `total` items. Zero when there are no items
/// or the page size is zero.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        total.div_ceil(page_size)
    }
}

/// Slice out 1-based page `page_number` and report the page count.
///
/// Pages past the end, page 0, and a zero page size all give an empty slice.
pub fn paginate<T>(items: &[T], page_number: usize, page_size: usize) -> (&[T], usize) {
    let pages = total_pages(items.len(), page_size);
    let window = page_number
        .checked_sub(1)
        .and_then(|index| index.checked_mul(page_size))
        .filter(|&start| start < items.len())
        .map(|start| {
            let end = start.saturating_add(page_size).min(items.len());
            &items[start..end]
        })
        .unwrap_or(&[]);
    (window, pages)
}

/// One slot of the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDescriptor {
    Page { number: usize, current: bool },
    Ellipsis,
}

impl PageDescriptor {
    fn page(number: usize, current_page: usize) -> Self {
        Self::Page {
            number,
            current: number == current_page,
        }
    }
}

/// Compact list of page slots: always the first and last page, up to
/// `max_visible - 3` pages around `current_page`, and an ellipsis wherever
/// pages are skipped.
///
/// When the current page sits close to either end, the inner run slides
/// against that end instead of leaving a single hidden page behind an
/// ellipsis; a lone hidden page that cannot be avoided is shown instead.
/// `max_visible` below 5 is treated as 5.
///
/// ```
/// use jnr_store_catalog::paginate::{page_window, PageDescriptor::*};
///
/// let bar = page_window(10, 1, 5);
/// assert_eq!(
///     bar,
///     vec![
///         Page { number: 1, current: true },
///         Page { number: 2, current: false },
///         Page { number: 3, current: false },
///         Ellipsis,
///         Page { number: 10, current: false },
///     ]
/// );
/// ```
pub fn page_window(total_pages: usize, current_page: usize, max_visible: usize) -> Vec<PageDescriptor> {
    let max_visible = max_visible.max(DEFAULT_MAX_VISIBLE);

    if total_pages <= max_visible {
        return (1..=total_pages)
            .map(|n| PageDescriptor::page(n, current_page))
            .collect();
    }

    let inner = max_visible - 3;
    let last = total_pages;
    let current = current_page.clamp(1, last);

    // Pages shown left and right of the current one in a centered run.
    let left = (inner - 1) / 2;
    let right = inner - 1 - left;

    let (start, end) = if current <= 3 + left {
        (2, 1 + inner)
    } else if current + 2 + left >= last {
        (last - inner, last - 1)
    } else if current + right + 2 >= last {
        // Leaning right would strand one page before the last; lean left.
        (current - right, current + left)
    } else {
        (current - left, current + right)
    };

    let mut slots = Vec::with_capacity(inner + 4);
    slots.push(PageDescriptor::page(1, current_page));
    push_gap(&mut slots, 2, start, current_page);
    slots.extend((start..=end).map(|n| PageDescriptor::page(n, current_page)));
    push_gap(&mut slots, end + 1, last, current_page);
    slots.push(PageDescriptor::page(last, current_page));
    slots
}

/// Pages `from..to` are hidden. More than one becomes an ellipsis; a single
/// one is cheaper to show than to elide.
fn push_gap(slots: &mut Vec<PageDescriptor>, from: usize, to: usize, current_page: usize) {
    match to.saturating_sub(from) {
        0 => {}
        1 => slots.push(PageDescriptor::page(from, current_page)),
        _ => slots.push(PageDescriptor::Ellipsis),
    }
}

/// A Prev/Next button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLink {
    /// Page the button leads to.
    pub target: usize,
    pub disabled: bool,
}

/// The whole pagination bar: Prev, page slots, Next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControls {
    pub previous: PageLink,
    pub pages: Vec<PageDescriptor>,
    pub next: PageLink,
}

/// Build the pagination bar, or `None` when everything fits on one page.
pub fn page_controls(
    total_pages: usize,
    current_page: usize,
    max_visible: usize,
) -> Option<PageControls> {
    if total_pages <= 1 {
        return None;
    }
    Some(PageControls {
        previous: PageLink {
            target: current_page.saturating_sub(1),
            disabled: current_page <= 1,
        },
        pages: page_window(total_pages, current_page, max_visible),
        next: PageLink {
            target: current_page.saturating_add(1),
            disabled: current_page >= total_pages,
        },
    })
}
