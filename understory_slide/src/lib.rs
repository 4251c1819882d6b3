// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_slide --heading-base-level=0

//! Understory Slide: page-index resolution for paged and carousel scrolling.
//!
//! This crate answers *which* page a paged scroller should move to. Given a
//! grid of pages and a scroll offset, it maps between page indices, physical
//! anchors, and the page numbers a page indicator should show. It also
//! supports infinite looping on either axis.
//!
//! The core concepts are:
//!
//! - [`PagesMatrix`]: a read-only view over discovered page geometry
//!   (page counts per axis, page anchors, nearest page to an offset).
//! - [`GridPagesMatrix`]: a [`PagesMatrix`] built from measured column widths
//!   and row heights, with optional loop padding.
//! - [`PageNavigator`]: owns the current [`Page`] and resolves bounded lookups,
//!   next/previous candidates, snapping targets, exposed page numbers, and
//!   loop rewinds.
//! - [`SlideOptions`]: navigator configuration.
//!
//! ## Looping
//!
//! A looped axis carries two clone pages: a copy of the last real page in
//! front, and a copy of the first real page at the end. Four real pages
//! become six internal indices `[3', 0, 1, 2, 3, 0']`. Transitions may land
//! on a clone, after which the host jumps to the real page it copies without
//! animation ([`PageNavigator::loop_rewind`]). Observers only ever see the
//! real page numbers ([`PageNavigator::exposed_page`]).
//!
//! This crate does not scroll, animate, or handle input. Host frameworks are
//! responsible for:
//!
//! - Measuring pages and rebuilding the matrix when layout changes.
//! - Animating to the anchors this crate returns.
//! - Committing the landed page with [`PageNavigator::set_current_page`] and
//!   rewinding off loop clones before the page number is shown.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_slide::{Direction, GridPagesMatrix, PageNavigator, SlideOptions};
//!
//! // Four 320×240 pages in a row, looping horizontally.
//! let matrix = GridPagesMatrix::uniform(4, 1, Size::new(320.0, 240.0))
//!     .with_loop_padding(true, false);
//! let mut nav = PageNavigator::new(matrix, SlideOptions::new().with_loop(true));
//!
//! // The first real page sits after the leading clone.
//! assert_eq!(nav.current_page().position, Point::new(320.0, 0.0));
//! assert_eq!(nav.exposed_page(None).page_x(), 0);
//!
//! // A short flick to the right still moves to the next page.
//! let target = nav.nearest_page(400.0, 0.0, Direction::Positive, Direction::Idle);
//! assert_eq!(target.page_x(), 2);
//! nav.set_current_page(target);
//! assert_eq!(nav.exposed_page(None).page_x(), 1);
//!
//! // Going back past the first page lands on the leading clone…
//! nav.set_current_page(nav.go_to_page(0, 0).unwrap());
//! nav.set_current_page(nav.prev_page().unwrap());
//! assert_eq!(nav.exposed_page(None).page_x(), 3);
//!
//! // …which rewinds onto the real last page.
//! let real = nav.loop_rewind_page().unwrap();
//! assert_eq!(real.page_x(), 4);
//! nav.set_current_page(real);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point math.
//!
//! Diagnostics go through the [`log`] facade.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod grid;
mod matrix;
mod navigator;
mod options;
mod types;
mod util;

pub use grid::GridPagesMatrix;
pub use matrix::PagesMatrix;
pub use navigator::PageNavigator;
pub use options::SlideOptions;
pub use types::{Direction, Page, PageIndex};
