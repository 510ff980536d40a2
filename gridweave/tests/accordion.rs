use celldom::Key;
use gridweave::prelude::{
    Accordion, EventResult, ExpandMode, GestureContext, Section, WidgetEventKind,
};

fn sample_accordion(mode: ExpandMode) -> Accordion {
    Accordion::new(vec![
        Section::new("general", "General"),
        Section::new("network", "Network"),
        Section::new("advanced", "Advanced"),
    ])
    .with_mode(mode)
}

// =============================================================================
// Expand/collapse
// =============================================================================

#[test]
fn test_single_mode_closes_others() {
    let accordion = sample_accordion(ExpandMode::Single);

    assert!(accordion.expand("general"));
    assert!(accordion.is_expanded("general"));

    assert!(accordion.expand("network"));
    assert!(accordion.is_expanded("network"));
    assert!(!accordion.is_expanded("general"));
    assert_eq!(accordion.expanded_keys(), vec!["network".to_string()]);
}

#[test]
fn test_multiple_mode_is_independent() {
    let accordion = sample_accordion(ExpandMode::Multiple);

    accordion.expand("general");
    accordion.expand("advanced");
    assert_eq!(
        accordion.expanded_keys(),
        vec!["general".to_string(), "advanced".to_string()]
    );

    accordion.collapse("general");
    assert_eq!(accordion.expanded_keys(), vec!["advanced".to_string()]);
}

#[test]
fn test_toggle() {
    let accordion = sample_accordion(ExpandMode::Multiple);

    assert_eq!(accordion.toggle("general"), Some(true));
    assert_eq!(accordion.toggle("general"), Some(false));
    assert!(!accordion.is_expanded("general"));
    assert_eq!(accordion.toggle("ghost"), None);
}

#[test]
fn test_expand_unknown_key() {
    let accordion = sample_accordion(ExpandMode::Single);
    assert!(!accordion.expand("ghost"));
    assert!(accordion.expanded_keys().is_empty());
}

#[test]
fn test_expand_already_open_reports_no_change() {
    let accordion = sample_accordion(ExpandMode::Single);
    assert!(accordion.expand("general"));
    assert!(!accordion.expand("general"));
}

// =============================================================================
// Keyboard handling
// =============================================================================

#[test]
fn test_cursor_navigation_and_toggle() {
    let accordion = sample_accordion(ExpandMode::Single);
    let cx = GestureContext::new();

    // First Down lands on the first section
    assert_eq!(accordion.on_key(&Key::Down, &cx), EventResult::Consumed);
    assert_eq!(accordion.cursor_key(), Some("general".to_string()));

    assert_eq!(accordion.on_key(&Key::Down, &cx), EventResult::Consumed);
    assert_eq!(accordion.cursor_key(), Some("network".to_string()));

    assert_eq!(accordion.on_key(&Key::Enter, &cx), EventResult::Consumed);
    assert!(accordion.is_expanded("network"));

    // Space toggles it back closed
    assert_eq!(
        accordion.on_key(&Key::Char(' '), &cx),
        EventResult::Consumed
    );
    assert!(!accordion.is_expanded("network"));

    let kinds: Vec<_> = cx.drain_events().into_iter().map(|e| e.kind).collect();
    assert!(kinds.contains(&WidgetEventKind::CursorMove));
    assert!(kinds.contains(&WidgetEventKind::Expand));
    assert!(kinds.contains(&WidgetEventKind::Collapse));
}

#[test]
fn test_cursor_stops_at_edges() {
    let accordion = sample_accordion(ExpandMode::Single);
    let cx = GestureContext::new();

    accordion.on_key(&Key::Up, &cx);
    assert_eq!(accordion.cursor(), Some(0));
    // Already at the top
    assert_eq!(accordion.on_key(&Key::Up, &cx), EventResult::Ignored);

    accordion.on_key(&Key::Down, &cx);
    accordion.on_key(&Key::Down, &cx);
    assert_eq!(accordion.cursor(), Some(2));
    assert_eq!(accordion.on_key(&Key::Down, &cx), EventResult::Ignored);
}

#[test]
fn test_enter_without_cursor_is_ignored() {
    let accordion = sample_accordion(ExpandMode::Single);
    let cx = GestureContext::new();
    assert_eq!(accordion.on_key(&Key::Enter, &cx), EventResult::Ignored);
}

// =============================================================================
// Header clicks
// =============================================================================

#[test]
fn test_header_click_toggles() {
    let accordion = sample_accordion(ExpandMode::Single);
    let cx = GestureContext::new();

    assert_eq!(
        accordion.on_header_click("advanced", &cx),
        EventResult::Consumed
    );
    assert!(accordion.is_expanded("advanced"));

    assert_eq!(
        accordion.on_header_click("ghost", &cx),
        EventResult::Ignored
    );
}
