use std::cell::Cell;
use std::rc::Rc;

use spotlight_engine::{
    filter_actions, group_actions, matches, CloseReason, Key, KeyInput, KeyListeners, Spotlight,
    SpotlightAction, SpotlightEvent, SpotlightMsg, SpotlightOptions, DEFAULT_LIMIT,
};

fn file_actions() -> Vec<SpotlightAction> {
    vec![
        SpotlightAction::new("a", "Open File"),
        SpotlightAction::new("b", "Close File"),
        SpotlightAction::new("c", "Open Settings"),
    ]
}

fn ids(actions: &[&SpotlightAction]) -> Vec<String> {
    actions.iter().map(|a| a.id.clone()).collect()
}

/// Route a key press the way a host would: global listeners first, then the
/// in-overlay navigation keys while open
fn press(
    spotlight: &mut Spotlight,
    listeners: &KeyListeners<SpotlightMsg>,
    input: KeyInput,
    actions: &[SpotlightAction],
) -> Vec<SpotlightEvent> {
    let mut events = Vec::new();
    let msgs = listeners.dispatch(&input);
    if msgs.is_empty() && spotlight.is_open() {
        if let Some(msg) = spotlight_engine::navigation_msg(&input) {
            events.extend(spotlight.dispatch(msg, actions));
        }
    }
    for msg in msgs {
        events.extend(spotlight.dispatch(msg, actions));
    }
    events
}

#[test]
fn test_scenario_query_filters_in_order() {
    let actions = file_actions();
    let result = filter_actions(&actions, "open", DEFAULT_LIMIT);
    assert_eq!(ids(&result), vec!["a", "c"]);
}

#[test]
fn test_scenario_limit_one_on_empty_query() {
    let actions = file_actions();
    let mut spotlight = Spotlight::new(SpotlightOptions::default().with_limit(1));
    spotlight.open(&actions);

    let view = spotlight.view(&actions);
    assert_eq!(ids(&view.filtered), vec!["a"]);
}

#[test]
fn test_scenario_arrow_down_clamps() {
    let actions = file_actions();
    let listeners = KeyListeners::new();
    let mut spotlight = Spotlight::default();
    let _mounted = spotlight.listen(&listeners);

    press(&mut spotlight, &listeners, KeyInput::ctrl('k'), &actions);
    for _ in 0..2 {
        press(&mut spotlight, &listeners, KeyInput::plain(Key::Down), &actions);
    }
    assert_eq!(spotlight.active_index(), 2);

    press(&mut spotlight, &listeners, KeyInput::plain(Key::Down), &actions);
    assert_eq!(spotlight.active_index(), 2);
}

#[test]
fn test_scenario_enter_on_disabled_action() {
    let fired = Rc::new(Cell::new(false));
    let flag = fired.clone();
    let actions = vec![
        SpotlightAction::new("a", "Open File"),
        SpotlightAction::new("b", "Close File")
            .disabled(true)
            .on_trigger(move || flag.set(true)),
    ];

    let listeners = KeyListeners::new();
    let mut spotlight = Spotlight::default();
    let _mounted = spotlight.listen(&listeners);
    press(&mut spotlight, &listeners, KeyInput::meta('k'), &actions);
    press(&mut spotlight, &listeners, KeyInput::plain(Key::Down), &actions);

    let events = press(&mut spotlight, &listeners, KeyInput::plain(Key::Enter), &actions);
    assert!(events.is_empty());
    assert!(!fired.get());
    assert!(spotlight.is_open());
}

#[test]
fn test_scenario_shortcut_toggles() {
    let actions = file_actions();
    let listeners = KeyListeners::new();
    let mut spotlight = Spotlight::default();
    let _mounted = spotlight.listen(&listeners);

    let events = press(&mut spotlight, &listeners, KeyInput::ctrl('k'), &actions);
    assert!(spotlight.is_open());
    assert_eq!(spotlight.query(), "");
    assert_eq!(spotlight.active_index(), 0);
    assert_eq!(events[0], SpotlightEvent::OpenChanged(true));
    assert!(matches!(events[1], SpotlightEvent::RequestFocus { .. }));

    let events = press(&mut spotlight, &listeners, KeyInput::ctrl('k'), &actions);
    assert!(!spotlight.is_open());
    assert_eq!(events, vec![SpotlightEvent::OpenChanged(false)]);
}

#[test]
fn test_default_browse_matches_prefix_of_input() {
    let actions: Vec<SpotlightAction> = (0..15)
        .map(|i| SpotlightAction::new(format!("id-{i}"), format!("Action {i}")))
        .collect();

    for limit in [0, 1, 5, 10, 15, 40] {
        let result = filter_actions(&actions, "", limit);
        let expected: Vec<String> = actions.iter().take(limit).map(|a| a.id.clone()).collect();
        assert_eq!(ids(&result), expected);
    }
}

#[test]
fn test_filter_results_are_sound_and_ordered() {
    let actions = vec![
        SpotlightAction::new("1", "Buttons").group("Inputs"),
        SpotlightAction::new("2", "Cards").keywords(["surface"]),
        SpotlightAction::new("3", "Alerts").description("Feedback surfaces"),
        SpotlightAction::new("4", "Button groups").group("Inputs"),
        SpotlightAction::new("5", "Badges"),
    ];

    for query in ["", "b", "surf", "BUTTON", "s", "nope"] {
        let result = filter_actions(&actions, query, DEFAULT_LIMIT);
        assert!(result.iter().all(|a| matches(a, query)));

        let positions: Vec<usize> = result
            .iter()
            .map(|a| actions.iter().position(|b| b.id == a.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        // Grouping only partitions: every group keeps relative order too
        for group in group_actions(&result) {
            let positions: Vec<usize> = group
                .actions
                .iter()
                .map(|a| actions.iter().position(|b| b.id == a.id).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }
}

#[test]
fn test_arrow_keys_never_wrap() {
    let actions = file_actions();
    let mut spotlight = Spotlight::default();
    spotlight.open(&actions);

    for _ in 0..20 {
        spotlight.dispatch(SpotlightMsg::Prev, &actions);
    }
    assert_eq!(spotlight.active_index(), 0);

    for _ in 0..(actions.len() + 5) {
        spotlight.dispatch(SpotlightMsg::Next, &actions);
    }
    assert_eq!(spotlight.active_index(), actions.len() - 1);
}

#[test]
fn test_click_on_disabled_keeps_overlay_open() {
    let fired = Rc::new(Cell::new(0));
    let counter = fired.clone();
    let actions = vec![SpotlightAction::new("x", "Danger")
        .disabled(true)
        .on_trigger(move || counter.set(counter.get() + 1))];

    let mut spotlight = Spotlight::default();
    spotlight.open(&actions);
    assert!(spotlight.dispatch(SpotlightMsg::Click(0), &actions).is_empty());
    assert_eq!(fired.get(), 0);
    assert!(spotlight.is_open());
}

#[test]
fn test_every_close_cause_resets_state() {
    let actions = file_actions();
    let closers = [
        SpotlightMsg::Close(CloseReason::Escape),
        SpotlightMsg::Close(CloseReason::Outside),
        SpotlightMsg::Toggle,
        SpotlightMsg::SetOpen(false),
        SpotlightMsg::Execute,
    ];

    for closer in closers {
        let mut spotlight = Spotlight::default();
        spotlight.open(&actions);
        spotlight.set_query("open", &actions);
        spotlight.dispatch(SpotlightMsg::Next, &actions);

        spotlight.dispatch(closer.clone(), &actions);
        assert!(!spotlight.is_open(), "{closer:?} should close");
        assert_eq!(spotlight.query(), "");
        assert_eq!(spotlight.active_index(), 0);
    }
}

#[test]
fn test_escape_closes_regardless_of_query() {
    let actions = file_actions();
    let listeners = KeyListeners::new();
    let mut spotlight = Spotlight::default();
    let _mounted = spotlight.listen(&listeners);

    press(&mut spotlight, &listeners, KeyInput::ctrl('k'), &actions);
    spotlight.set_query("no such thing", &actions);
    press(&mut spotlight, &listeners, KeyInput::plain(Key::Escape), &actions);
    assert!(!spotlight.is_open());
}

#[test]
fn test_focus_after_close_is_dropped() {
    let actions = file_actions();
    let mut spotlight = Spotlight::default();
    spotlight.open(&actions);
    spotlight.close(&actions);

    // The delayed focus lands after the overlay is gone
    assert!(spotlight.dispatch(SpotlightMsg::FocusInput, &actions).is_empty());
    assert!(!spotlight.state().input_focused);
}
