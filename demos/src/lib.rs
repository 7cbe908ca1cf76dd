// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Helpers shared by the `understory_select` demos.

use understory_select::{SelectController, SelectEvent};

/// Installs a log subscriber honoring `RUST_LOG`, defaulting to `debug`.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::DEBUG.into()),
        )
        .without_time()
        .init();
}

/// Prints the controller's visible state the way a renderer would consume it.
pub fn render(select: &SelectController) {
    let selected: Vec<_> = select
        .selected()
        .iter()
        .map(|option| select.label_of(option).into_owned())
        .collect();
    println!(
        "  selected={selected:?} search={:?} open={} flags={:?}",
        select.search(),
        select.is_open(),
        select.dropdown_flags(),
    );
    if select.is_open() {
        for (idx, option) in select.visible_options().iter().enumerate() {
            let marker = if idx == select.pointer() { '>' } else { ' ' };
            let check = if select.is_selected(option) { 'x' } else { ' ' };
            println!("   {marker} [{check}] {}", select.label_of(option));
        }
    }
}

/// Drains and prints queued notifications, returning them for the host loop.
pub fn drain(select: &mut SelectController) -> Vec<SelectEvent> {
    let events = select.take_events();
    for event in &events {
        println!("  -> {event:?}");
    }
    events
}
