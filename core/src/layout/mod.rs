//! Panel ordering and page partitioning.
//!
//! Panelization reorders a linear sequence into a column-major interleave
//! across pages: item `k` lands on page `k % N` so that stacking the printed
//! pages and cutting them restores reading order. For 18 items at 6 panels
//! per page (N = 3), the 1-indexed output is
//! `[1,4,7,10,13,16, 2,5,8,11,14,17, 3,6,9,12,15,18]`.

use crate::types::Capacity;

/// Number of pages needed for `panel_count` panels.
pub fn page_count(panel_count: usize, per_page: Capacity) -> usize {
    panel_count.div_ceil(per_page.into_inner())
}

/// Page a slot at flat output position `position` belongs to.
pub fn page_index(position: usize, per_page: Capacity) -> usize {
    position / per_page.into_inner()
}

/// Reorders `items` into the print interleave.
///
/// The output always has length `page_count * per_page`; slots whose source
/// index falls past the end of the input hold `None`. Every input item
/// appears in exactly one output slot.
pub fn panelize<T>(items: Vec<T>, per_page: Capacity) -> Vec<Option<T>> {
    let per_page = per_page.into_inner();
    let pages = items.len().div_ceil(per_page);

    let mut input: Vec<Option<T>> = items.into_iter().map(Some).collect();
    let mut output = Vec::with_capacity(pages * per_page);

    for position in 0..pages * per_page {
        let page = position / per_page;
        let panel = position % per_page;
        let input_index = panel * pages + page;

        // Each input index is visited exactly once, so `take` never
        // encounters an already-emptied slot.
        output.push(input.get_mut(input_index).and_then(Option::take));
    }

    output
}

/// Groups flat slots into pages of `per_page` slots, order preserved.
///
/// Concatenating the returned pages reproduces the input exactly.
pub fn paginate<T>(slots: Vec<T>, per_page: Capacity) -> Vec<Vec<T>> {
    let per_page = per_page.into_inner();
    let mut pages: Vec<Vec<T>> = Vec::with_capacity(slots.len().div_ceil(per_page));

    for slot in slots {
        match pages.last_mut() {
            Some(page) if page.len() < per_page => page.push(slot),
            _ => {
                let mut page = Vec::with_capacity(per_page);
                page.push(slot);
                pages.push(page);
            }
        }
    }

    pages
}
