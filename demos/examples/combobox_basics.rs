// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Combo-box basics.
//!
//! Drive a single-select country picker through focus, search, keyboard
//! highlight, and selection, writing each value change back as a host would.
//!
//! Run:
//! - `cargo run -p understory_demos --example combobox_basics`

use understory_demos::{drain, init_logging, render};
use understory_select::{Choice, SelectController, SelectEvent, SelectValue, ToggleTarget};

fn main() {
    init_logging();

    let options: Vec<Choice> = serde_json::from_str(
        r#"[
            { "code": "AT", "name": "Österreich" },
            { "code": "DE", "name": "Deutschland" },
            { "code": "DK", "name": "Danmark" },
            { "code": "FR", "name": "France" }
        ]"#,
    )
    .expect("static options parse");

    // The host only stores the country code.
    let mut host_value = SelectValue::from(Choice::text("FR"));
    let mut select = SelectController::builder()
        .label_key("name")
        .value_key("code")
        .placeholder("Pick a country")
        .options(options)
        .value(host_value.clone())
        .build();

    println!("initial:");
    render(&select);

    println!("click the control:");
    select.toggle_dropdown(ToggleTarget::Root);
    drain(&mut select);
    select.on_search_focus();
    drain(&mut select);
    render(&select);

    println!("type \"d\" and move down:");
    select.set_search("d");
    select.type_ahead_down();
    drain(&mut select);
    render(&select);

    println!("press enter:");
    select.type_ahead_select();
    for event in drain(&mut select) {
        if let SelectEvent::Input(value) = event {
            host_value = value;
            select.value_changed(host_value.clone());
        }
    }
    select.on_search_blur();
    drain(&mut select);
    render(&select);
    println!("host value: {}", serde_json::to_string(&host_value).expect("value serializes"));

    println!("clear:");
    select.clear();
    drain(&mut select);
    render(&select);
    println!("placeholder: {:?}", select.search_placeholder());
}
