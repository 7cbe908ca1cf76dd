// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_select --heading-base-level=0

//! Understory Select: headless state for select and combo-box controls.
//!
//! This crate owns the _state_ of a dropdown selector: what is selected, which
//! options exist, what the user has typed, and whether the dropdown is open.
//! It does not render anything. A host feeds it props and user gestures and
//! draws whatever it reports back.
//!
//! The core type is [`SelectController`]. It keeps:
//! - A **working value**, a local copy of the host's value that user gestures
//!   mutate. Every change is queued as [`SelectEvent::Input`] so the host can
//!   write it back.
//! - **Working options**, a local copy of the host's options that tag mode may
//!   extend.
//! - The **search text**, which drives [`SelectController::visible_options`].
//! - **Dropdown** visibility and a keyboard highlight.
//!
//! Options are [`Choice`]s: either a primitive [`Scalar`] or a flat
//! [`Record`] whose label lives under a configurable key.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_select::{Choice, SelectController, SelectEvent, SelectValue};
//!
//! let mut select = SelectController::builder()
//!     .options(["red", "green", "blue"])
//!     .build();
//!
//! select.set_search("gr");
//! assert_eq!(select.visible_options(), vec![Choice::text("green")]);
//!
//! select.select("green");
//! assert_eq!(select.working_value(), &SelectValue::from(Choice::text("green")));
//! assert_eq!(select.search(), "");
//!
//! let events = select.take_events();
//! assert!(events.contains(&SelectEvent::Input(SelectValue::from(Choice::text("green")))));
//! ```
//!
//! ## Reconciliation
//!
//! The host stays the source of truth. When its props change it calls
//! [`SelectController::value_changed`], [`SelectController::options_changed`], or
//! [`SelectController::multiplicity_changed`] (or [`SelectController::apply_props`]
//! for a batch), and the working state is rebuilt from them. Values round-trip
//! through a [`ValueShape`], so a host configured with a value key only ever
//! sees identifiers.
//!
//! ## Tagging
//!
//! With `taggable`, search text that matches no option is offered as a new
//! option. Selecting it runs the tag creator, queues
//! [`SelectEvent::OptionCreated`], and, with `push_tags`, appends it to the
//! working options.
//!
//! ## Features
//!
//! - `std` (default): forwards `std` to `tracing` and `unicode-normalization`.
//! - `serde`: `Serialize`/`Deserialize` for options, values, and [`SelectConfig`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod builder;
mod choice;
mod config;
mod controller;
mod dropdown;
mod event;
mod filter;
mod fold;
mod label;
mod matcher;
mod pointer;
#[cfg(feature = "serde")]
mod serde_impls;
mod shape;
mod tag;
mod value;

pub use builder::SelectBuilder;
pub use choice::{Choice, Record, Scalar};
pub use config::{
    CreateOptionFn, FilterByFn, FilterFn, LabelFn, OptionFns, SelectConfig, TextDirection,
};
pub use controller::{PropsUpdate, SelectController};
pub use dropdown::{Dropdown, DropdownFlags, FocusRequest, ToggleTarget};
pub use event::SelectEvent;
pub use filter::{FilterContext, FilterEngine, default_filter, default_filter_by};
pub use fold::{contains_folded, fold};
pub use label::{LabelAccessor, MissingLabel};
pub use matcher::{OptionMatcher, same_option};
pub use pointer::TypeAhead;
pub use shape::ValueShape;
pub use tag::{TagCreator, create_option};
pub use value::SelectValue;
