// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The active-index resolver.
//!
//! Hosts describe their items through [`ItemResolvers`]; the resolver only sees
//! items through its four accessors. The snapshot and the active position are
//! each read exactly once per resolution, so hosts that compute them lazily pay
//! for one read.
//!
//! Most callers already have a slice and two accessors at hand; for them,
//! [`resolve_in_slice`] wraps those in a [`FnResolvers`] and resolves in one
//! call.

use core::fmt;
use core::marker::PhantomData;

use crate::Focus;

/// Host-side view of a list of navigable items.
///
/// Implement this over whatever storage your widget uses: a `Vec` of child
/// records, a virtual list window, an ECS query collected into a buffer.
pub trait ItemResolvers {
    /// The item type. The resolver never inspects it directly.
    type Item;
    /// The identifier type matched by [`Focus::Specific`].
    type Id: ?Sized + PartialEq;

    /// Return the current items, in navigation order.
    fn resolve_items(&self) -> &[Self::Item];

    /// Return the currently active position, if any.
    ///
    /// The position may be stale (out of range for the current items); the
    /// resolver never returns such an index.
    fn resolve_active_index(&self) -> Option<usize>;

    /// Return the identifier of `item`.
    fn resolve_id<'a>(&'a self, item: &'a Self::Item) -> &'a Self::Id;

    /// Return whether `item` is currently disabled.
    fn resolve_disabled(&self, item: &Self::Item) -> bool;
}

/// [`ItemResolvers`] over a borrowed slice, a fixed active position and two
/// accessor closures.
pub struct FnResolvers<'s, T, K: ?Sized, F, D> {
    items: &'s [T],
    active: Option<usize>,
    id_of: F,
    is_disabled: D,
    _id: PhantomData<fn(&K)>,
}

impl<'s, T, K, F, D> FnResolvers<'s, T, K, F, D>
where
    K: ?Sized + PartialEq,
    F: Fn(&T) -> &K,
    D: Fn(&T) -> bool,
{
    /// Creates resolvers over `items` with `active` as the current position.
    pub fn new(items: &'s [T], active: Option<usize>, id_of: F, is_disabled: D) -> Self {
        Self {
            items,
            active,
            id_of,
            is_disabled,
            _id: PhantomData,
        }
    }
}

impl<T, K, F, D> ItemResolvers for FnResolvers<'_, T, K, F, D>
where
    K: ?Sized + PartialEq,
    F: Fn(&T) -> &K,
    D: Fn(&T) -> bool,
{
    type Item = T;
    type Id = K;

    fn resolve_items(&self) -> &[T] {
        self.items
    }

    fn resolve_active_index(&self) -> Option<usize> {
        self.active
    }

    fn resolve_id<'a>(&'a self, item: &'a T) -> &'a K {
        (self.id_of)(item)
    }

    fn resolve_disabled(&self, item: &T) -> bool {
        (self.is_disabled)(item)
    }
}

impl<T, K: ?Sized, F, D> fmt::Debug for FnResolvers<'_, T, K, F, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnResolvers")
            .field("len", &self.items.len())
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}

/// Resolve which item becomes active in response to `focus`.
///
/// Returns `None` when the item list is empty or when `focus` is
/// [`Focus::Nothing`]. Otherwise a candidate is chosen per intent (see the
/// [crate docs](crate)); if there is no candidate, the current position is
/// returned unchanged. A returned `Some(index)` is always in bounds for the
/// items returned by [`ItemResolvers::resolve_items`] in this call.
pub fn resolve_active_index<R>(focus: Focus<'_, R::Id>, resolvers: &R) -> Option<usize>
where
    R: ItemResolvers + ?Sized,
{
    let items = resolvers.resolve_items();
    if items.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::trace!(focus = focus.name(), "no items to activate");
        return None;
    }

    let current = resolvers.resolve_active_index();
    let enabled = |item: &R::Item| !resolvers.resolve_disabled(item);

    let candidate = match focus {
        Focus::First => items.iter().position(enabled),
        Focus::Previous => {
            // Absent or stale positions leave every item eligible.
            let end = current.map_or(items.len(), |active| active.min(items.len()));
            items[..end].iter().rposition(enabled)
        }
        Focus::Next => {
            let start = current.map_or(0, |active| active.saturating_add(1));
            items
                .get(start..)
                .and_then(|rest| rest.iter().position(enabled))
                .map(|offset| start + offset)
        }
        Focus::Last => items.iter().rposition(enabled),
        Focus::Specific(id) => items
            .iter()
            .position(|item| resolvers.resolve_id(item) == id),
        Focus::Nothing => {
            #[cfg(feature = "tracing")]
            tracing::trace!(focus = focus.name(), ?current, "active item cleared");
            return None;
        }
    };

    let resolved = match candidate {
        Some(index) => Some(index),
        None => fall_back(current, items.len()),
    };

    #[cfg(feature = "tracing")]
    tracing::trace!(
        focus = focus.name(),
        len = items.len(),
        ?current,
        ?candidate,
        ?resolved,
        "resolved active item"
    );

    debug_assert!(
        resolved.is_none_or(|index| index < items.len()),
        "resolved index {resolved:?} out of bounds for {} items",
        items.len()
    );
    resolved
}

/// Resolve `focus` over a slice of items.
///
/// Shorthand for [`resolve_active_index`] with a [`FnResolvers`].
///
/// `id_of` must accept items of any lifetime: pass a closure inline or a `fn`
/// item, since a closure bound with `let` first gets a fixed lifetime.
pub fn resolve_in_slice<T, K, F, D>(
    focus: Focus<'_, K>,
    items: &[T],
    active: Option<usize>,
    id_of: F,
    is_disabled: D,
) -> Option<usize>
where
    K: ?Sized + PartialEq,
    F: Fn(&T) -> &K,
    D: Fn(&T) -> bool,
{
    resolve_active_index(focus, &FnResolvers::new(items, active, id_of, is_disabled))
}

/// The result when no candidate was found: keep the current position, unless
/// it no longer points at an item.
fn fall_back(current: Option<usize>, len: usize) -> Option<usize> {
    match current {
        Some(active) if active >= len => {
            #[cfg(feature = "tracing")]
            tracing::debug!(active, len, "dropping stale active index");
            None
        }
        current => current,
    }
}
