// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigator configuration.

/// Configuration for a [`PageNavigator`](crate::PageNavigator).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SlideOptions {
    /// Request infinite looping.
    ///
    /// Looping is only enabled on axes that have more than one page. The
    /// [`PagesMatrix`](crate::PagesMatrix) handed to the navigator must already
    /// carry loop padding on those axes.
    pub looping: bool,
    /// Let the vertical snap direction advance the snapped row.
    ///
    /// When `false` (the default), [`PageNavigator::nearest_page`] keeps the
    /// nearest row even if it equals the current row, so a short vertical
    /// flick settles back where it started. Horizontal snapping always
    /// advances in the direction of motion.
    ///
    /// [`PageNavigator::nearest_page`]: crate::PageNavigator::nearest_page
    pub directional_row_snap: bool,
}

impl SlideOptions {
    /// Default options: no looping, nearest-row vertical snapping.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            looping: false,
            directional_row_snap: false,
        }
    }

    /// Sets [`SlideOptions::looping`].
    #[must_use]
    pub const fn with_loop(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Sets [`SlideOptions::directional_row_snap`].
    #[must_use]
    pub const fn with_directional_row_snap(mut self, enabled: bool) -> Self {
        self.directional_row_snap = enabled;
        self
    }
}
