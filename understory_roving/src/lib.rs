// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_roving --heading-base-level=0

//! Understory Roving: active-item resolution for roving-focus widgets.
//!
//! Menus, listboxes, comboboxes and tab lists keep exactly one item "active"
//! and move it in response to commands such as "next" or "last". This crate
//! answers a single question: given the current items, the currently active
//! position and a [`Focus`] intent, which index becomes active next?
//!
//! It does **not** know how your items are stored, rendered, or bound to
//! keys. Callers describe their items through the [`ItemResolvers`] trait (or
//! through two closures with [`resolve_in_slice`]), and apply the returned
//! `Option<usize>` however their widget applies focus.
//!
//! ## Rules
//!
//! - An empty item list always resolves to `None`.
//! - [`Focus::First`] / [`Focus::Last`] pick the first / last enabled item.
//! - [`Focus::Next`] picks the first enabled item strictly after the active
//!   one, [`Focus::Previous`] the last enabled item strictly before it. With
//!   no active item every position is eligible, so `Previous` behaves like
//!   `Last` and `Next` like `First`.
//! - [`Focus::Specific`] picks the first item with a matching id, disabled or
//!   not.
//! - [`Focus::Nothing`] always clears.
//! - When a navigation finds no candidate, the active position is returned
//!   unchanged.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_roving::{Focus, resolve_in_slice};
//!
//! struct Item {
//!     id: &'static str,
//!     disabled: bool,
//! }
//!
//! let items = [
//!     Item { id: "cut", disabled: false },
//!     Item { id: "copy", disabled: true },
//!     Item { id: "paste", disabled: false },
//! ];
//! fn id_of(item: &Item) -> &str {
//!     item.id
//! }
//!
//! fn is_disabled(item: &Item) -> bool {
//!     item.disabled
//! }
//!
//! // "copy" is disabled, so Next from "cut" lands on "paste".
//! let next = resolve_in_slice(Focus::Next, &items, Some(0), id_of, is_disabled);
//! assert_eq!(next, Some(2));
//!
//! // There is nothing after "paste": the active item stays put.
//! let stay = resolve_in_slice(Focus::Next, &items, Some(2), id_of, is_disabled);
//! assert_eq!(stay, Some(2));
//!
//! // Jumping to a specific id ignores the disabled flag.
//! let copy = resolve_in_slice(Focus::Specific("copy"), &items, Some(2), id_of, is_disabled);
//! assert_eq!(copy, Some(1));
//! ```
//!
//! ## Keeping the active position
//!
//! The resolver holds no state. Widgets that do not already track the active
//! position somewhere can use [`ActiveIndex`], which stores it alongside a
//! revision counter that only bumps on change:
//!
//! ```rust
//! use understory_roving::{ActiveIndex, Focus};
//!
//! fn tab_id<'a>(tab: &'a &str) -> &'a str {
//!     tab
//! }
//!
//! fn never_disabled(_: &&str) -> bool {
//!     false
//! }
//!
//! let tabs = ["General", "Advanced", "About"];
//! let mut active = ActiveIndex::new();
//!
//! assert!(active.navigate(Focus::Last, &tabs, tab_id, never_disabled));
//! assert_eq!(active.get(), Some(2));
//! assert_eq!(active.revision(), 1);
//!
//! // Nothing to move to: no change, no revision bump.
//! assert!(!active.navigate(Focus::Next, &tabs, tab_id, never_disabled));
//! assert_eq!(active.revision(), 1);
//! ```
//!
//! ## Features
//!
//! - `std` (default): for dependants that build with the standard library;
//!   the crate itself needs nothing from it.
//! - `tracing`: emit [`tracing`](https://docs.rs/tracing) events for every
//!   resolution.
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

pub mod focus;
pub mod resolve;
pub mod state;

pub use focus::Focus;
pub use resolve::{FnResolvers, ItemResolvers, resolve_active_index, resolve_in_slice};
pub use state::ActiveIndex;
