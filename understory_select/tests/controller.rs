// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_select` crate.
//!
//! These exercise `SelectController` through user gestures: selecting,
//! deselecting, tagging, searching, and the notifications each one queues.

use understory_select::{
    Choice, DropdownFlags, Record, SelectController, SelectEvent, SelectValue, TextDirection,
    ToggleTarget,
};

fn colors() -> SelectController {
    SelectController::builder()
        .options(["red", "green", "blue"])
        .build()
}

fn inputs(events: &[SelectEvent]) -> Vec<&SelectValue> {
    events
        .iter()
        .filter_map(|event| match event {
            SelectEvent::Input(value) => Some(value),
            _ => None,
        })
        .collect()
}

#[test]
fn single_select_replaces_then_clears() {
    let mut select = colors();

    select.select("green");
    assert_eq!(select.working_value(), &SelectValue::from(Choice::text("green")));

    select.select("blue");
    assert_eq!(select.working_value(), &SelectValue::from(Choice::text("blue")));
    assert!(select.is_selected(&Choice::text("blue")));
    assert!(!select.is_selected(&Choice::text("green")));

    select.clear();
    assert_eq!(select.working_value(), &SelectValue::Single(None));
    assert!(select.is_value_empty());

    let events = select.take_events();
    assert_eq!(
        inputs(&events),
        [
            &SelectValue::from(Choice::text("green")),
            &SelectValue::from(Choice::text("blue")),
            &SelectValue::Single(None),
        ]
    );
}

#[test]
fn selecting_twice_keeps_single_value() {
    let mut select = colors();
    select.clear();
    select.select("red");
    select.select("red");
    assert!(select.is_selected(&Choice::text("red")));
    assert!(!select.is_selected(&Choice::text("blue")));
}

#[test]
fn multi_deselect_removes_exactly_one() {
    let mut select = SelectController::builder()
        .multiple(true)
        .options(["a", "b", "c"])
        .build();

    select.select("a");
    select.select("b");
    select.deselect(&Choice::text("a"));
    assert_eq!(
        select.working_value(),
        &SelectValue::Multiple(vec![Choice::text("b")])
    );
}

#[test]
fn multi_select_skips_duplicates() {
    let mut select = SelectController::builder()
        .multiple(true)
        .options(["a", "b"])
        .build();

    select.select("a");
    select.select("a");
    assert_eq!(select.selected(), &[Choice::text("a")]);

    // Re-selecting and deselecting an unknown option change nothing and stay quiet.
    select.deselect(&Choice::text("zzz"));
    assert_eq!(inputs(&select.take_events()).len(), 1);
}

#[test]
fn multi_matching_falls_back_to_labels() {
    let mut select = SelectController::builder()
        .multiple(true)
        .options([
            Record::new().with("id", 1).with("label", "One"),
            Record::new().with("id", 2).with("label", "Two"),
        ])
        .build();

    select.select(Record::new().with("id", 1).with("label", "One"));
    // A record with the same label counts as selected.
    assert!(select.is_selected(&Choice::from(Record::new().with("label", "One"))));
    // So does the bare label.
    assert!(select.is_selected(&Choice::text("One")));

    select.deselect(&Choice::text("One"));
    assert!(select.is_value_empty());
}

#[test]
fn clear_ignores_clearable() {
    let mut single = SelectController::builder()
        .clearable(false)
        .options(["x"])
        .value(Choice::text("x"))
        .build();
    assert!(!single.show_clear_button());
    single.clear();
    assert_eq!(single.working_value(), &SelectValue::Single(None));

    let mut multi = SelectController::builder()
        .multiple(true)
        .clearable(false)
        .value(vec![Choice::text("x")])
        .build();
    multi.clear();
    assert_eq!(multi.working_value(), &SelectValue::Multiple(vec![]));
}

#[test]
fn tag_search_is_offered_and_pushed() {
    let mut select = SelectController::builder()
        .taggable(true)
        .push_tags(true)
        .filterable(false)
        .multiple(true)
        .options(["a", "b"])
        .build();

    select.set_search("c");
    assert_eq!(
        select.visible_options(),
        vec![Choice::text("c"), Choice::text("a"), Choice::text("b")]
    );

    select.select("c");
    assert_eq!(
        select.working_options(),
        &[Choice::text("a"), Choice::text("b"), Choice::text("c")]
    );
    assert_eq!(select.selected(), &[Choice::text("c")]);
    // Pushed tags do not touch the host's options.
    assert_eq!(select.options().len(), 2);

    let events = select.take_events();
    let created = events
        .iter()
        .position(|event| *event == SelectEvent::OptionCreated(Choice::text("c")))
        .unwrap();
    let input = events
        .iter()
        .position(|event| matches!(event, SelectEvent::Input(_)))
        .unwrap();
    assert!(created < input);
}

#[test]
fn tags_take_the_shape_of_record_options() {
    let mut select = SelectController::builder()
        .taggable(true)
        .push_tags(true)
        .label_key("name")
        .options([Record::new().with("name", "Rust")])
        .build();

    select.select("Zig");
    let tag = Choice::from(Record::new().with("name", "Zig"));
    assert_eq!(select.working_value(), &SelectValue::from(tag.clone()));
    assert_eq!(select.working_options().last(), Some(&tag));
}

#[test]
fn existing_option_is_not_recreated() {
    let mut select = SelectController::builder()
        .taggable(true)
        .push_tags(true)
        .options([Record::new().with("label", "Rust")])
        .build();

    // The raw label matches an existing record option.
    select.select("Rust");
    assert_eq!(select.working_options().len(), 1);
    assert!(
        !select
            .take_events()
            .iter()
            .any(|event| matches!(event, SelectEvent::OptionCreated(_)))
    );
}

#[test]
fn custom_create_option_is_used() {
    let mut select = SelectController::builder()
        .taggable(true)
        .create_option_with(|raw| {
            Choice::from(Record::new().with("label", raw.to_string()).with("custom", true))
        })
        .build();

    select.select("new");
    let expected = Record::new().with("label", "new").with("custom", true);
    assert_eq!(select.working_value(), &SelectValue::from(Choice::from(expected)));
}

#[test]
fn searching_filters_with_folding() {
    let mut select = SelectController::builder()
        .options(["Crème brûlée", "Creme caramel", "Tiramisu"])
        .build();

    select.set_search("CREME");
    assert_eq!(select.visible_options().len(), 2);
    assert!(select.is_searching());
    assert_eq!(
        select.take_events(),
        vec![SelectEvent::Search("CREME".into())]
    );
}

#[test]
fn custom_filter_by_replaces_containment() {
    let mut select = SelectController::builder()
        .options(["apple", "pineapple"])
        .filter_by(|_, label, search| label.starts_with(search))
        .build();

    select.set_search("app");
    assert_eq!(select.visible_options(), vec![Choice::text("apple")]);
}

#[test]
fn custom_label_drives_filter_and_display() {
    let mut select = SelectController::builder()
        .options([Record::new().with("first", "Ada").with("last", "Lovelace")])
        .label_with(|option| {
            let first = option.field("first").map(|s| s.as_label().into_owned());
            let last = option.field("last").map(|s| s.as_label().into_owned());
            format!("{} {}", first.unwrap_or_default(), last.unwrap_or_default())
        })
        .build();

    select.set_search("love");
    let visible = select.visible_options();
    assert_eq!(visible.len(), 1);
    assert_eq!(select.label_of(&visible[0]), "Ada Lovelace");
}

#[test]
fn missing_label_falls_back_to_record_text() {
    let select = SelectController::builder().build();
    let option = Choice::from(Record::new().with("id", 7));
    assert_eq!(select.label_of(&option), option.to_string());
}

#[test]
fn select_closes_and_clears_search() {
    let mut select = colors();
    select.toggle_dropdown(ToggleTarget::Root);
    assert!(select.is_open());
    select.set_search("gr");
    select.take_events();

    select.select("green");
    assert_eq!(select.search(), "");
    assert_eq!(
        select.take_events(),
        vec![
            SelectEvent::Input(SelectValue::from(Choice::text("green"))),
            SelectEvent::RequestBlur,
            SelectEvent::Search(String::new()),
        ]
    );
}

#[test]
fn keep_open_and_keep_search() {
    let mut select = SelectController::builder()
        .multiple(true)
        .close_on_select(false)
        .clear_search_on_select(false)
        .options(["a", "b"])
        .build();
    select.on_search_focus();
    select.set_search("a");
    select.select("a");

    assert!(select.is_open());
    assert_eq!(select.search(), "a");
}

#[test]
fn toggle_and_blur_cycle() {
    let mut select = colors();
    select.toggle_dropdown(ToggleTarget::OpenIndicator);
    assert!(select.is_open());

    // Clicks on unrelated children do nothing.
    select.toggle_dropdown(ToggleTarget::Other);
    assert!(select.is_open());

    // Closing is requested, then performed by the blur.
    select.toggle_dropdown(ToggleTarget::Toggle);
    assert!(select.is_open());
    select.on_search_blur();
    assert!(!select.is_open());

    assert_eq!(
        select.take_events(),
        vec![
            SelectEvent::RequestFocus,
            SelectEvent::RequestBlur,
            SelectEvent::SearchBlur,
        ]
    );
}

#[test]
fn disabled_control_does_not_open() {
    let mut select = SelectController::builder().disabled(true).build();
    select.toggle_dropdown(ToggleTarget::Root);
    assert!(!select.is_open());
    assert!(select.take_events().is_empty());
    assert!(select.dropdown_flags().contains(DropdownFlags::DISABLED));
}

#[test]
fn blur_clears_search_only_for_single() {
    let mut single = colors();
    single.on_search_focus();
    single.set_search("r");
    single.on_search_blur();
    assert_eq!(single.search(), "");

    let mut multi = SelectController::builder().multiple(true).build();
    multi.on_search_focus();
    multi.set_search("r");
    multi.on_search_blur();
    assert_eq!(multi.search(), "r");
}

#[test]
fn escape_clears_search_then_blurs() {
    let mut select = colors();
    select.set_search("gr");
    select.take_events();

    select.on_escape();
    assert_eq!(select.search(), "");
    select.on_escape();
    assert_eq!(
        select.take_events(),
        vec![SelectEvent::Search(String::new()), SelectEvent::RequestBlur]
    );
}

#[test]
fn backspace_removes_last_selection() {
    let mut select = SelectController::builder()
        .multiple(true)
        .options(["a", "b"])
        .value(vec![Choice::text("a"), Choice::text("b")])
        .build();

    select.set_search("x");
    assert_eq!(select.maybe_delete_value(), None);
    select.set_search("");

    assert_eq!(select.maybe_delete_value(), Some(Choice::text("b")));
    assert_eq!(select.maybe_delete_value(), Some(Choice::text("a")));
    assert_eq!(select.maybe_delete_value(), None);
}

#[test]
fn type_ahead_selects_highlighted_option() {
    let mut select = colors();
    select.type_ahead_down();
    select.type_ahead_down();
    select.type_ahead_down();
    assert_eq!(select.pointer(), 2);
    select.type_ahead_up();
    select.type_ahead_select();
    assert_eq!(select.working_value(), &SelectValue::from(Choice::text("green")));
}

#[test]
fn type_ahead_selects_search_in_tag_mode() {
    let mut select = SelectController::builder()
        .taggable(true)
        .options(["a"])
        .filter_with(|_, _, _| Vec::new())
        .build();
    select.set_search("zzz");
    // The synthetic tag is the only visible option.
    assert_eq!(select.visible_options(), vec![Choice::text("zzz")]);
    select.type_ahead_select();
    assert_eq!(select.working_value(), &SelectValue::from(Choice::text("zzz")));
    assert_eq!(select.search(), "");
}

#[test]
fn loading_hides_dropdown() {
    let mut select = colors();
    select.on_search_focus();
    assert!(select.is_open());

    assert!(select.toggle_loading(None));
    assert!(!select.is_open());
    assert!(select.dropdown_flags().contains(DropdownFlags::LOADING));

    assert!(!select.toggle_loading(Some(false)));
    select.set_loading(false);
    assert!(select.is_open());
}

#[test]
fn derived_flags() {
    let mut select = SelectController::builder()
        .dir(TextDirection::Rtl)
        .searchable(false)
        .placeholder("Choose a color")
        .options(["red"])
        .build();

    let flags = select.dropdown_flags();
    assert!(flags.contains(DropdownFlags::SINGLE | DropdownFlags::RTL | DropdownFlags::UNSEARCHABLE));
    assert!(!flags.intersects(DropdownFlags::OPEN | DropdownFlags::SEARCHABLE));
    assert_eq!(select.search_placeholder(), Some("Choose a color"));

    select.select("red");
    assert_eq!(select.search_placeholder(), None);
    // Selecting toggled the dropdown; the blur closes it.
    select.on_search_blur();
    assert!(select.show_clear_button());
}
