// src/application/pagination.rs
//
// Page widgets count pages from zero; the API counts from one.

/// Convert a 0-based widget selection into the 1-based page to request.
pub fn page_from_index(selected: usize) -> u32 {
    u32::try_from(selected).map_or(u32::MAX, |index| index.saturating_add(1))
}

/// Convert a 1-based page into the 0-based index a widget highlights.
pub fn index_from_page(page: u32) -> usize {
    page.saturating_sub(1) as usize
}

/// Pagination controls are only shown when there is more than one page.
pub fn should_paginate(total_pages: u32) -> bool {
    total_pages > 1
}
