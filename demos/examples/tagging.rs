// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tagging.
//!
//! A multi-select tag input: unknown search text becomes a new option, which
//! is pushed into the working options until the host replaces them.
//!
//! Run:
//! - `cargo run -p understory_demos --example tagging`

use understory_demos::{drain, init_logging, render};
use understory_select::{Choice, Record, SelectController};

fn main() {
    init_logging();

    let mut select = SelectController::builder()
        .multiple(true)
        .taggable(true)
        .push_tags(true)
        .close_on_select(false)
        .options([
            Record::new().with("label", "rust"),
            Record::new().with("label", "zig"),
        ])
        .build();

    select.on_search_focus();
    drain(&mut select);

    for typed in ["rust", "odin", "carbon"] {
        println!("type {typed:?}:");
        select.set_search(typed);
        render(&select);
        select.type_ahead_select();
        drain(&mut select);
    }

    println!("working options after tagging:");
    for option in select.working_options() {
        println!("  {option}");
    }

    println!("backspace:");
    let removed = select.maybe_delete_value();
    println!("  removed {removed:?}");
    drain(&mut select);
    render(&select);

    println!("host reloads options (pushed tags are dropped):");
    select.options_changed(vec![Choice::from(Record::new().with("label", "go"))]);
    drain(&mut select);
    render(&select);
}
