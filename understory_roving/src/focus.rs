// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation intents.
//!
//! [`Focus`] is the complete vocabulary understood by the resolver. Mapping
//! keys, pointer hover or type-ahead onto these intents is up to the host.

/// A request to move the active item.
///
/// `K` is the identifier type used by [`Focus::Specific`]. It defaults to
/// `str`, so string ids can be written as `Focus::Specific("save")`.
#[derive(Debug, PartialEq, Eq, Hash)]
pub enum Focus<'a, K: ?Sized = str> {
    /// Activate the first enabled item.
    First,
    /// Activate the nearest enabled item before the active one.
    Previous,
    /// Activate the nearest enabled item after the active one.
    Next,
    /// Activate the last enabled item.
    Last,
    /// Activate the item with this id, whether or not it is disabled.
    Specific(&'a K),
    /// Clear the active item.
    Nothing,
}

impl<'a, K: ?Sized> Focus<'a, K> {
    /// Creates a [`Focus::Specific`] intent targeting `id`.
    #[must_use]
    pub const fn specific(id: &'a K) -> Self {
        Self::Specific(id)
    }

    /// Returns the id carried by [`Focus::Specific`], if this is one.
    #[must_use]
    pub const fn target_id(&self) -> Option<&'a K> {
        match *self {
            Self::Specific(id) => Some(id),
            _ => None,
        }
    }

    /// Returns `true` if resolving this intent skips disabled items.
    ///
    /// Only the relative and boundary moves do; [`Focus::Specific`] may land on
    /// a disabled item and [`Focus::Nothing`] never looks at items at all.
    #[must_use]
    pub const fn consults_disabled(&self) -> bool {
        matches!(self, Self::First | Self::Previous | Self::Next | Self::Last)
    }

    /// A short, stable name for the intent, suitable for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Previous => "previous",
            Self::Next => "next",
            Self::Last => "last",
            Self::Specific(_) => "specific",
            Self::Nothing => "nothing",
        }
    }
}

// Manual impls: deriving would require `K: Clone`, which `str` is not.
impl<K: ?Sized> Clone for Focus<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: ?Sized> Copy for Focus<'_, K> {}
