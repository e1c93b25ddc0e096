// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Active-position bookkeeping for hosts that want it.

use crate::{Focus, ItemResolvers, resolve_active_index, resolve_in_slice};

/// The active position of a roving-focus group plus a revision counter.
///
/// `ActiveIndex` only stores an `Option<usize>`; it does not know about the
/// items. Navigation borrows the items for the duration of one call, so the
/// host stays free to rebuild its item list between events.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActiveIndex {
    index: Option<usize>,
    revision: u64,
}

impl ActiveIndex {
    /// Creates a tracker with no active item.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            index: None,
            revision: 0,
        }
    }

    /// Returns the active position, if any.
    #[must_use]
    pub const fn get(&self) -> Option<usize> {
        self.index
    }

    /// Returns `true` if `index` is the active position.
    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.index == Some(index)
    }

    /// Returns the current revision counter.
    ///
    /// The revision is bumped only when the active position actually changes,
    /// so observers can compare revisions instead of positions.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Sets the active position, returning whether it changed.
    pub fn set(&mut self, index: Option<usize>) -> bool {
        if self.index == index {
            return false;
        }
        self.index = index;
        self.revision = self.revision.wrapping_add(1);
        true
    }

    /// Clears the active position, returning whether it changed.
    pub fn clear(&mut self) -> bool {
        self.set(None)
    }

    /// Moves the active position over `items` according to `focus`.
    ///
    /// The stored position is used as the current one. Returns whether the
    /// position changed.
    pub fn navigate<T, K, F, D>(
        &mut self,
        focus: Focus<'_, K>,
        items: &[T],
        id_of: F,
        is_disabled: D,
    ) -> bool
    where
        K: ?Sized + PartialEq,
        F: Fn(&T) -> &K,
        D: Fn(&T) -> bool,
    {
        let next = resolve_in_slice(focus, items, self.index, id_of, is_disabled);
        self.set(next)
    }

    /// Moves the active position according to `focus`, using host resolvers.
    ///
    /// The current position comes from
    /// [`ItemResolvers::resolve_active_index`], not from this tracker; the
    /// result is stored here, so keep this tracker mirroring the position the
    /// resolvers report. Returns whether the stored position changed.
    pub fn navigate_with<R>(&mut self, focus: Focus<'_, R::Id>, resolvers: &R) -> bool
    where
        R: ItemResolvers + ?Sized,
    {
        self.set(resolve_active_index(focus, resolvers))
    }
}
