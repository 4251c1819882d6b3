// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`PagesMatrix`] backed by measured per-column and per-row page extents.

use alloc::vec::Vec;

use kurbo::{Point, Size};

use crate::util::signed_len;
use crate::{PageIndex, PagesMatrix};

/// A [`PagesMatrix`] over a rectangular grid of measured pages.
///
/// Every page in a column shares that column's width, and every page in a row
/// shares that row's height. Page anchors are the running sums of the extents
/// before them, so page `(0, 0)` is always anchored at the origin.
///
/// Hosts typically rebuild this after layout, once real page sizes are known,
/// and hand it to [`PageNavigator::set_matrix`](crate::PageNavigator::set_matrix).
///
/// ```rust
/// use kurbo::{Point, Size};
/// use understory_slide::{GridPagesMatrix, PagesMatrix};
///
/// // Three 300×200 pages side by side, padded for looping.
/// let matrix = GridPagesMatrix::uniform(3, 1, Size::new(300.0, 200.0))
///     .with_loop_padding(true, false);
/// assert_eq!(matrix.page_len_x(), 5);
/// assert_eq!(matrix.real_len_x(), 3);
/// assert_eq!(matrix.page_stats(1, 0), Some(Point::new(300.0, 0.0)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct GridPagesMatrix {
    columns: Track,
    rows: Track,
}

impl GridPagesMatrix {
    /// Creates a grid from column widths and row heights.
    ///
    /// Negative extents are clamped to `0.0`. Extents are expected to be
    /// finite; this is debug-asserted.
    #[must_use]
    pub fn new<W, H>(widths: W, heights: H) -> Self
    where
        W: IntoIterator<Item = f64>,
        H: IntoIterator<Item = f64>,
    {
        Self {
            columns: Track::new(widths),
            rows: Track::new(heights),
        }
    }

    /// Creates a `columns × rows` grid where every page has `page_size`.
    #[must_use]
    pub fn uniform(columns: usize, rows: usize, page_size: Size) -> Self {
        Self::new(
            core::iter::repeat_n(page_size.width, columns),
            core::iter::repeat_n(page_size.height, rows),
        )
    }

    /// Adds loop padding to the requested axes.
    ///
    /// A padded axis gains a clone of its last page in front and a clone of its
    /// first page at the end. Axes with fewer than two pages, or that are
    /// already padded, are left unchanged.
    #[must_use]
    pub fn with_loop_padding(mut self, x: bool, y: bool) -> Self {
        if x {
            self.columns.pad();
        }
        if y {
            self.rows.pad();
        }
        self
    }

    /// Number of real (non-clone) pages along the horizontal axis.
    #[must_use]
    pub fn real_len_x(&self) -> usize {
        self.columns.real_len()
    }

    /// Number of real (non-clone) pages along the vertical axis.
    #[must_use]
    pub fn real_len_y(&self) -> usize {
        self.rows.real_len()
    }

    /// Returns `true` if the horizontal axis carries loop padding.
    #[must_use]
    pub const fn is_padded_x(&self) -> bool {
        self.columns.padded
    }

    /// Returns `true` if the vertical axis carries loop padding.
    #[must_use]
    pub const fn is_padded_y(&self) -> bool {
        self.rows.padded
    }

    /// Total size of all pages, clones included.
    #[must_use]
    pub fn content_size(&self) -> Size {
        Size::new(self.columns.total(), self.rows.total())
    }
}

impl PagesMatrix for GridPagesMatrix {
    fn page_len_x(&self) -> usize {
        self.columns.len()
    }

    fn page_len_y(&self) -> usize {
        self.rows.len()
    }

    fn page_stats(&self, page_x: usize, page_y: usize) -> Option<Point> {
        let x = self.columns.start_of(page_x)?;
        let y = self.rows.start_of(page_y)?;
        Some(Point::new(x, y))
    }

    fn nearest_page_index(&self, x: f64, y: f64) -> Option<PageIndex> {
        let page_x = self.columns.nearest(x)?;
        let page_y = self.rows.nearest(y)?;
        Some(PageIndex::new(signed_len(page_x), signed_len(page_y)))
    }
}

/// Extents along one axis plus their prefix sums.
#[derive(Clone, Debug, Default)]
struct Track {
    extents: Vec<f64>,
    starts: Vec<f64>,
    midpoints: Vec<f64>,
    padded: bool,
}

impl Track {
    fn new<I: IntoIterator<Item = f64>>(extents: I) -> Self {
        let mut track = Self {
            extents: extents.into_iter().map(sanitize).collect(),
            ..Self::default()
        };
        track.rebuild();
        track
    }

    fn len(&self) -> usize {
        self.extents.len()
    }

    fn real_len(&self) -> usize {
        if self.padded {
            self.len() - 2
        } else {
            self.len()
        }
    }

    fn total(&self) -> f64 {
        match (self.starts.last(), self.extents.last()) {
            (Some(start), Some(extent)) => start + extent,
            _ => 0.0,
        }
    }

    fn pad(&mut self) {
        if self.padded || self.extents.len() < 2 {
            return;
        }
        let first = self.extents[0];
        let last = self.extents[self.extents.len() - 1];
        self.extents.insert(0, last);
        self.extents.push(first);
        self.padded = true;
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.starts.clear();
        self.midpoints.clear();
        let mut pos = 0.0;
        for &extent in &self.extents {
            self.starts.push(pos);
            self.midpoints.push(pos + extent / 2.0);
            pos += extent;
        }
    }

    fn start_of(&self, index: usize) -> Option<f64> {
        self.starts.get(index).copied()
    }

    /// First page whose midpoint is at or past `offset`, else the last page.
    fn nearest(&self, offset: f64) -> Option<usize> {
        let last = self.len().checked_sub(1)?;
        let index = self.midpoints.partition_point(|&mid| mid < offset);
        Some(index.min(last))
    }
}

fn sanitize(extent: f64) -> f64 {
    debug_assert!(
        extent.is_finite(),
        "GridPagesMatrix extents must be finite; got {extent:?}"
    );
    if extent.is_sign_negative() { 0.0 } else { extent }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size};

    use super::GridPagesMatrix;
    use crate::{PageIndex, PagesMatrix};

    #[test]
    fn anchors_are_prefix_sums() {
        let matrix = GridPagesMatrix::new([100.0, 250.0, 50.0], [80.0, 40.0]);
        assert_eq!(matrix.page_len_x(), 3);
        assert_eq!(matrix.page_len_y(), 2);
        assert_eq!(matrix.page_stats(0, 0), Some(Point::ZERO));
        assert_eq!(matrix.page_stats(2, 1), Some(Point::new(350.0, 80.0)));
        assert_eq!(matrix.page_stats(3, 0), None);
        assert_eq!(matrix.page_stats(0, 2), None);
        assert_eq!(matrix.content_size(), Size::new(400.0, 120.0));
    }

    #[test]
    fn negative_extents_are_clamped_to_zero() {
        let matrix = GridPagesMatrix::new([-10.0, 20.0], [5.0]);
        assert_eq!(matrix.page_stats(1, 0), Some(Point::ZERO));
        assert_eq!(matrix.content_size(), Size::new(20.0, 5.0));
    }

    #[test]
    fn loop_padding_clones_boundary_pages() {
        let matrix = GridPagesMatrix::new([100.0, 200.0, 300.0], [50.0])
            .with_loop_padding(true, true);
        // Only the horizontal axis has enough pages to loop.
        assert!(matrix.is_padded_x());
        assert!(!matrix.is_padded_y());
        assert_eq!(matrix.page_len_x(), 5);
        assert_eq!(matrix.real_len_x(), 3);
        assert_eq!(matrix.page_len_y(), 1);
        // Clone of the last page (300 wide) comes first.
        assert_eq!(matrix.page_stats(1, 0), Some(Point::new(300.0, 0.0)));
        assert_eq!(matrix.page_stats(4, 0), Some(Point::new(900.0, 0.0)));
        assert_eq!(matrix.content_size().width, 1000.0);

        // Padding twice is a no-op.
        let again = matrix.with_loop_padding(true, false);
        assert_eq!(again.page_len_x(), 5);
    }

    #[test]
    fn nearest_page_uses_page_midpoints() {
        let matrix = GridPagesMatrix::uniform(4, 2, Size::new(100.0, 60.0));
        assert_eq!(
            matrix.nearest_page_index(0.0, 0.0),
            Some(PageIndex::new(0, 0))
        );
        assert_eq!(
            matrix.nearest_page_index(49.0, 29.0),
            Some(PageIndex::new(0, 0))
        );
        assert_eq!(
            matrix.nearest_page_index(51.0, 31.0),
            Some(PageIndex::new(1, 1))
        );
        assert_eq!(
            matrix.nearest_page_index(-500.0, 0.0),
            Some(PageIndex::new(0, 0))
        );
        assert_eq!(
            matrix.nearest_page_index(10_000.0, 10_000.0),
            Some(PageIndex::new(3, 1))
        );
    }

    #[test]
    fn empty_grid_has_no_pages() {
        let matrix = GridPagesMatrix::uniform(3, 0, Size::new(10.0, 10.0));
        assert!(!matrix.has_pages());
        assert_eq!(matrix.nearest_page_index(0.0, 0.0), None);
        assert!(!GridPagesMatrix::default().has_pages());
    }
}
