// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The page-geometry query interface consumed by the navigator.

use kurbo::Point;

use crate::PageIndex;

/// Read-only view over a discovered grid of pages.
///
/// Page counts include any loop padding: when an axis loops, the matrix is
/// expected to already report one clone of the last real page before the
/// first, and one clone of the first real page after the last. The navigator
/// never recomputes that padding, it only interprets it.
///
/// All coordinates live in the scroll-content space of the host (typically
/// logical pixels).
pub trait PagesMatrix {
    /// Number of pages along the horizontal axis.
    fn page_len_x(&self) -> usize;

    /// Number of pages along the vertical axis.
    fn page_len_y(&self) -> usize;

    /// Returns `true` if at least one page has been discovered.
    fn has_pages(&self) -> bool {
        self.page_len_x() > 0 && self.page_len_y() > 0
    }

    /// Anchor of page `(page_x, page_y)`, or `None` if it is out of range.
    fn page_stats(&self, page_x: usize, page_y: usize) -> Option<Point>;

    /// Index of the page nearest to the content offset `(x, y)`.
    ///
    /// Returns `None` if there are no pages.
    fn nearest_page_index(&self, x: f64, y: f64) -> Option<PageIndex>;
}
