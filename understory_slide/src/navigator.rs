// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The page navigator: current-page state and index-space transformations.

use core::mem;

use kurbo::Point;
use log::{debug, warn};

use crate::util::{between, signed_len};
use crate::{Direction, Page, PageIndex, PagesMatrix, SlideOptions};

/// Owns the current page of a slide and resolves navigation targets.
///
/// The navigator works in three index spaces:
///
/// - **internal** indices address every page the [`PagesMatrix`] reports,
///   including the two loop clones on a looped axis;
/// - **exposed** indices are what an indicator should show, with clones folded
///   back onto the real range (see [`PageNavigator::exposed_page`]);
/// - **user-facing** indices passed to [`PageNavigator::valid_page_index`] and
///   [`PageNavigator::go_to_page`] count real pages only, starting at `0`.
///
/// Queries never mutate state. The current page only changes through
/// [`PageNavigator::set_current_page`], and capability flags only change
/// through [`PageNavigator::set_matrix`] or [`PageNavigator::set_options`].
///
/// Sliding along both axes at once is not supported. When the matrix has more
/// than one page along both axes a warning is logged and directional stepping
/// follows the horizontal axis only.
#[derive(Debug)]
pub struct PageNavigator<M: PagesMatrix> {
    matrix: M,
    options: SlideOptions,
    current_page: Page,

    slide_x: bool,
    slide_y: bool,
    loop_x: bool,
    loop_y: bool,
}

impl<M: PagesMatrix> PageNavigator<M> {
    /// Creates a navigator once page geometry is known.
    ///
    /// The current page starts at the origin, moved onto the first real page
    /// on any looped axis.
    #[must_use]
    pub fn new(matrix: M, options: SlideOptions) -> Self {
        Self::init(matrix, options, None)
    }

    /// Creates a navigator that resumes at `current`, for example a page
    /// restored from a previous session.
    ///
    /// `current` is an internal index. It is clamped into the grid.
    #[must_use]
    pub fn with_current_page(matrix: M, options: SlideOptions, current: PageIndex) -> Self {
        Self::init(matrix, options, Some(current))
    }

    fn init(matrix: M, options: SlideOptions, restored: Option<PageIndex>) -> Self {
        let mut navigator = Self {
            matrix,
            options,
            current_page: Page::ORIGIN,
            slide_x: false,
            slide_y: false,
            loop_x: false,
            loop_y: false,
        };
        navigator.detect_capabilities();
        navigator.current_page = match restored {
            Some(index) => navigator.reproject(index),
            None => navigator.initial_page(),
        };
        debug!(
            "slide: init current={:?} slide=({}, {}) loop=({}, {})",
            navigator.current_page.index,
            navigator.slide_x,
            navigator.slide_y,
            navigator.loop_x,
            navigator.loop_y
        );
        navigator
    }

    fn detect_capabilities(&mut self) {
        let len_x = self.matrix.page_len_x();
        let len_y = self.matrix.page_len_y();
        self.slide_x = len_x > 1;
        self.slide_y = self.matrix.has_pages() && len_y > 1;
        self.loop_x = self.options.looping && self.slide_x;
        self.loop_y = self.options.looping && self.slide_y;

        // Two real pages plus two clones is the shortest axis that can loop.
        if self.loop_x && len_x < 4 {
            debug!("slide: horizontal loop over {len_x} pages; the matrix is likely missing loop padding");
        }
        if self.loop_y && len_y < 4 {
            debug!("slide: vertical loop over {len_y} pages; the matrix is likely missing loop padding");
        }
        if self.has_axis_conflict() {
            warn!(
                "slide: sliding along both axes at once is not supported (pages {len_x}x{len_y}); stepping follows the horizontal axis"
            );
        }
    }

    /// Resolves `index` against the current matrix, keeping it unplaced at the
    /// origin anchor while no pages exist.
    fn reproject(&self, index: PageIndex) -> Page {
        self.page_by_index(index.page_x, index.page_y)
            .unwrap_or(Page::new(index, Point::ZERO))
    }

    /// Anchor of `(page_x, page_y)`, which callers have already clamped into the grid.
    fn stats_of(&self, page_x: isize, page_y: isize) -> Point {
        let stats = usize::try_from(page_x)
            .ok()
            .zip(usize::try_from(page_y).ok())
            .and_then(|(x, y)| self.matrix.page_stats(x, y));
        stats.unwrap_or_else(|| {
            debug!("slide: no page stats for ({page_x}, {page_y}); anchoring at origin");
            Point::ZERO
        })
    }

    /// Replaces the page geometry and re-derives the capability flags.
    ///
    /// The current page keeps its index, clamped into the new grid, and picks
    /// up its anchor from the new matrix. If the previous matrix had no pages,
    /// or an axis started or stopped looping, the page is moved off the
    /// leading clone the same way [`PageNavigator::new`] places it. Returns the
    /// previous matrix.
    pub fn set_matrix(&mut self, matrix: M) -> M {
        let was_placed = self.matrix.has_pages();
        let previous = mem::replace(&mut self.matrix, matrix);
        self.refresh_capabilities(was_placed);
        debug!(
            "slide: geometry replaced current={:?} pages={}x{}",
            self.current_page.index,
            self.matrix.page_len_x(),
            self.matrix.page_len_y()
        );
        previous
    }

    /// Replaces the options and re-derives the loop flags.
    ///
    /// The current page is re-placed like in [`PageNavigator::set_matrix`].
    pub fn set_options(&mut self, options: SlideOptions) {
        self.options = options;
        self.refresh_capabilities(self.matrix.has_pages());
    }

    fn refresh_capabilities(&mut self, was_placed: bool) {
        let looped = (self.loop_x, self.loop_y);
        self.detect_capabilities();
        self.current_page = self.reproject(self.current_page.index);
        if !was_placed || looped != (self.loop_x, self.loop_y) {
            self.current_page = self.initial_page();
        }
    }

    /// Commits a new current page.
    ///
    /// `page` should come from one of the navigator's own queries so that its
    /// anchor matches the matrix.
    pub fn set_current_page(&mut self, page: Page) {
        debug_assert!(
            !self.matrix.has_pages()
                || (page.page_x() >= 0
                    && page.page_x() < signed_len(self.matrix.page_len_x())
                    && page.page_y() >= 0
                    && page.page_y() < signed_len(self.matrix.page_len_y())),
            "committed page {:?} lies outside the page grid",
            page.index
        );
        debug!(
            "slide: commit {:?} -> {:?}",
            self.current_page.index, page.index
        );
        self.current_page = page;
    }

    /// The current page.
    #[must_use]
    pub const fn current_page(&self) -> Page {
        self.current_page
    }

    /// The page geometry.
    #[must_use]
    pub const fn matrix(&self) -> &M {
        &self.matrix
    }

    /// The options this navigator was configured with.
    #[must_use]
    pub const fn options(&self) -> SlideOptions {
        self.options
    }

    /// Returns `true` if the grid has more than one page horizontally.
    #[must_use]
    pub const fn slide_x(&self) -> bool {
        self.slide_x
    }

    /// Returns `true` if the grid has more than one page vertically.
    #[must_use]
    pub const fn slide_y(&self) -> bool {
        self.slide_y
    }

    /// Returns `true` if the horizontal axis loops.
    #[must_use]
    pub const fn loop_x(&self) -> bool {
        self.loop_x
    }

    /// Returns `true` if the vertical axis loops.
    #[must_use]
    pub const fn loop_y(&self) -> bool {
        self.loop_y
    }

    /// Returns `true` if looping was requested, whether or not any axis loops.
    #[must_use]
    pub const fn loop_requested(&self) -> bool {
        self.options.looping
    }

    /// Returns `true` if both axes are slide-capable, which is unsupported.
    #[must_use]
    pub const fn has_axis_conflict(&self) -> bool {
        self.slide_x && self.slide_y
    }

    /// Anchor of the current page as reported by the matrix.
    #[must_use]
    pub fn current_page_stats(&self) -> Option<Point> {
        let x = usize::try_from(self.current_page.page_x()).ok()?;
        let y = usize::try_from(self.current_page.page_y()).ok()?;
        self.matrix.page_stats(x, y)
    }

    /// Looks up an internal index, clamping each axis into the grid.
    ///
    /// Returns `None` if the matrix has no pages.
    #[must_use]
    pub fn page_by_index(&self, page_x: isize, page_y: isize) -> Option<Page> {
        if !self.matrix.has_pages() {
            return None;
        }
        let page_x = between(page_x, 0, signed_len(self.matrix.page_len_x()) - 1);
        let page_y = between(page_y, 0, signed_len(self.matrix.page_len_y()) - 1);
        Some(Page::new(
            PageIndex::new(page_x, page_y),
            self.stats_of(page_x, page_y),
        ))
    }

    /// The page to present on first paint.
    ///
    /// Each axis keeps the current index when it is non-zero. Otherwise it
    /// starts on the first real page: `1` on a looped axis, `0` elsewhere.
    #[must_use]
    pub fn initial_page(&self) -> Page {
        let current = self.current_page.index;
        let page_x = match current.page_x {
            0 if self.loop_x => 1,
            x => x,
        };
        let page_y = match current.page_y {
            0 if self.loop_y => 1,
            y => y,
        };
        Page::new(
            PageIndex::new(page_x, page_y),
            self.stats_of(page_x, page_y),
        )
    }

    /// Folds loop clones out of `page`, or out of the current page if `None`.
    ///
    /// The anchor is carried over unchanged; only the index is translated.
    #[must_use]
    pub fn exposed_page(&self, page: Option<Page>) -> Page {
        let mut page = page.unwrap_or(self.current_page);
        page.index = self.exposed_index(page.index);
        page
    }

    /// Translates an internal index into the page number observers should see.
    ///
    /// On a looped axis with `n` real pages, internal `1..=n` maps to
    /// `0..n`, the leading clone `0` maps to `n - 1`, and the trailing clone
    /// `n + 1` maps to `0`. Other axes pass through unchanged.
    #[must_use]
    pub fn exposed_index(&self, index: PageIndex) -> PageIndex {
        let mut exposed = index;
        if self.loop_x {
            exposed.page_x = fold_loop_index(index.page_x, self.matrix.page_len_x());
        }
        if self.loop_y {
            exposed.page_y = fold_loop_index(index.page_y, self.matrix.page_len_y());
        }
        exposed
    }

    /// Raw index one page forward from the current page.
    ///
    /// The result is not clamped and may lie outside the grid.
    #[must_use]
    pub fn next_page_index(&self) -> PageIndex {
        self.page_index_by_direction(Direction::Positive)
    }

    /// Raw index one page back from the current page.
    ///
    /// The result is not clamped and may lie outside the grid.
    #[must_use]
    pub fn prev_page_index(&self) -> PageIndex {
        self.page_index_by_direction(Direction::Negative)
    }

    fn page_index_by_direction(&self, direction: Direction) -> PageIndex {
        let mut index = self.current_page.index;
        if self.slide_x {
            index.page_x = index.page_x.saturating_add(direction.delta());
        }
        if self.slide_y && !self.slide_x {
            index.page_y = index.page_y.saturating_add(direction.delta());
        }
        index
    }

    /// The page a "next" command should move to, clamped into the grid.
    ///
    /// On a looped axis this can be the trailing clone; rewind with
    /// [`PageNavigator::loop_rewind`] once it has been committed.
    #[must_use]
    pub fn next_page(&self) -> Option<Page> {
        let index = self.next_page_index();
        self.page_by_index(index.page_x, index.page_y)
    }

    /// The page a "previous" command should move to, clamped into the grid.
    #[must_use]
    pub fn prev_page(&self) -> Option<Page> {
        let index = self.prev_page_index();
        self.page_by_index(index.page_x, index.page_y)
    }

    /// Converts a user-facing index into an internal resting index.
    ///
    /// On a looped axis the index shifts past the leading clone and is clamped
    /// to `1..=len - 2`, so clones are never returned. Other axes clamp to
    /// `0..=len - 1`. Returns `None` if the matrix has no pages.
    #[must_use]
    pub fn valid_page_index(&self, page_x: isize, page_y: isize) -> Option<PageIndex> {
        if !self.matrix.has_pages() {
            return None;
        }
        let (page_x, first_x, last_x) =
            padded_range(page_x, self.matrix.page_len_x(), self.loop_x);
        let (page_y, first_y, last_y) =
            padded_range(page_y, self.matrix.page_len_y(), self.loop_y);
        Some(PageIndex::new(
            between(page_x, first_x, last_x),
            between(page_y, first_y, last_y),
        ))
    }

    /// Resolves a user-facing index to the page a "go to page" command should
    /// move to.
    #[must_use]
    pub fn go_to_page(&self, page_x: isize, page_y: isize) -> Option<Page> {
        let index = self.valid_page_index(page_x, page_y)?;
        self.page_by_index(index.page_x, index.page_y)
    }

    /// Resolves the page to snap to from a live content offset.
    ///
    /// Starts from the matrix's nearest page. If that column is still the
    /// current column, the column advances one step in `direction_x` so that
    /// a short flick still changes page. Rows advance the same way only with
    /// [`SlideOptions::directional_row_snap`]; otherwise the nearest row is
    /// kept. Each axis's anchor is read from the first row or column.
    ///
    /// If the matrix has no pages the origin page is returned.
    #[must_use]
    pub fn nearest_page(
        &self,
        x: f64,
        y: f64,
        direction_x: Direction,
        direction_y: Direction,
    ) -> Page {
        let Some(nearest) = self.matrix.nearest_page_index(x, y) else {
            return Page::ORIGIN;
        };
        let mut page_x = nearest.page_x;
        let mut page_y = nearest.page_y;

        if page_x == self.current_page.page_x() {
            page_x = between(
                page_x.saturating_add(direction_x.delta()),
                0,
                signed_len(self.matrix.page_len_x()) - 1,
            );
        }
        if page_y == self.current_page.page_y() {
            let stepped = if self.options.directional_row_snap {
                page_y.saturating_add(direction_y.delta())
            } else {
                page_y
            };
            page_y = between(stepped, 0, signed_len(self.matrix.page_len_y()) - 1);
        }

        let position = Point::new(self.stats_of(page_x, 0).x, self.stats_of(0, page_y).y);
        Page::new(PageIndex::new(page_x, page_y), position)
    }

    /// Real page equivalent to the current page when it rests on a loop clone.
    ///
    /// The leading clone rewinds to the last real page and the trailing clone
    /// to the first. The horizontal axis is checked first. Returns `None` when
    /// no rewind is needed.
    #[must_use]
    pub fn loop_rewind(&self) -> Option<PageIndex> {
        let current = self.current_page.index;
        if self.loop_x {
            let last = signed_len(self.matrix.page_len_x()) - 1;
            if current.page_x == 0 {
                return Some(PageIndex::new(last - 1, current.page_y));
            }
            if current.page_x == last {
                return Some(PageIndex::new(1, current.page_y));
            }
        }
        if self.loop_y {
            let last = signed_len(self.matrix.page_len_y()) - 1;
            if current.page_y == 0 {
                return Some(PageIndex::new(current.page_x, last - 1));
            }
            if current.page_y == last {
                return Some(PageIndex::new(current.page_x, 1));
            }
        }
        None
    }

    /// [`PageNavigator::loop_rewind`] resolved to a full page.
    #[must_use]
    pub fn loop_rewind_page(&self) -> Option<Page> {
        let index = self.loop_rewind()?;
        self.page_by_index(index.page_x, index.page_y)
    }
}

/// Shifts a user-facing index into padded space and returns its resting range.
fn padded_range(index: isize, len: usize, looped: bool) -> (isize, isize, isize) {
    let last = signed_len(len) - 1;
    if looped {
        (index.saturating_add(1), 1, last - 1)
    } else {
        (index, 0, last)
    }
}

/// Maps an internal index on a padded axis of `len` pages to its real page.
fn fold_loop_index(index: isize, len: usize) -> isize {
    let real_len = signed_len(len) - 2;
    if real_len <= 0 {
        return index;
    }
    (index - 1).rem_euclid(real_len)
}
