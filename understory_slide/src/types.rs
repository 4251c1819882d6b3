// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types: page indices, pages, and motion directions.

use kurbo::Point;

/// Logical index of a cell in the page grid.
///
/// Indices are signed so that raw candidates (for example from
/// [`PageNavigator::next_page_index`](crate::PageNavigator::next_page_index))
/// can point one step outside the grid. Bounded lookups clamp them back.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PageIndex {
    /// Column of the page (horizontal axis).
    pub page_x: isize,
    /// Row of the page (vertical axis).
    pub page_y: isize,
}

impl PageIndex {
    /// The top-left page.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Creates a new index.
    #[must_use]
    pub const fn new(page_x: isize, page_y: isize) -> Self {
        Self { page_x, page_y }
    }
}

/// A page described by both its logical index and its physical anchor.
///
/// The anchor is the top-left corner of the page cell in scroll-content
/// coordinates, as reported by a [`PagesMatrix`](crate::PagesMatrix).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Page {
    /// Logical index.
    pub index: PageIndex,
    /// Physical anchor of `index`.
    pub position: Point,
}

impl Page {
    /// The origin page at `(0, 0)` anchored at `Point::ZERO`.
    pub const ORIGIN: Self = Self::new(PageIndex::ORIGIN, Point::ZERO);

    /// Creates a page from an index and its anchor.
    #[must_use]
    pub const fn new(index: PageIndex, position: Point) -> Self {
        Self { index, position }
    }

    /// Column of the page.
    #[must_use]
    pub const fn page_x(&self) -> isize {
        self.index.page_x
    }

    /// Row of the page.
    #[must_use]
    pub const fn page_y(&self) -> isize {
        self.index.page_y
    }

    /// Horizontal anchor.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.position.x
    }

    /// Vertical anchor.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.position.y
    }
}

/// Direction of recent motion along one axis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward lower page indices.
    Negative,
    /// No motion on this axis.
    #[default]
    Idle,
    /// Toward higher page indices.
    Positive,
}

impl Direction {
    /// Signed unit step for this direction.
    #[must_use]
    pub const fn delta(self) -> isize {
        match self {
            Self::Negative => -1,
            Self::Idle => 0,
            Self::Positive => 1,
        }
    }

    /// Classifies a signed motion amount (for example a drag delta).
    ///
    /// Zero and NaN map to [`Direction::Idle`].
    #[must_use]
    pub fn from_motion(amount: f64) -> Self {
        if amount > 0.0 {
            Self::Positive
        } else if amount < 0.0 {
            Self::Negative
        } else {
            Self::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{Direction, Page, PageIndex};

    #[test]
    fn page_accessors_follow_fields() {
        let page = Page::new(PageIndex::new(2, 1), Point::new(640.0, 480.0));
        assert_eq!(page.page_x(), 2);
        assert_eq!(page.page_y(), 1);
        assert_eq!(page.x(), 640.0);
        assert_eq!(page.y(), 480.0);
        assert_eq!(Page::default(), Page::ORIGIN);
    }

    #[test]
    fn direction_from_motion() {
        assert_eq!(Direction::from_motion(12.5), Direction::Positive);
        assert_eq!(Direction::from_motion(-0.1), Direction::Negative);
        assert_eq!(Direction::from_motion(0.0), Direction::Idle);
        assert_eq!(Direction::from_motion(f64::NAN), Direction::Idle);
        assert_eq!(Direction::Negative.delta(), -1);
        assert_eq!(Direction::Positive.delta(), 1);
    }
}
