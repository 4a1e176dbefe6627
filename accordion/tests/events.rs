use std::time::Instant;

use accordion::{Accordion, Document, Dom, Element, Event, EventOutcome, NodeId, Options};

fn faq_item(group: &str, i: usize) -> Element {
    Element::div()
        .class("accordion")
        .id(format!("{group}-item-{i}"))
        .child(
            Element::button(format!("Question {i}"))
                .class("accordion__button")
                .id(format!("{group}-button-{i}"))
                .child(Element::new("span").id(format!("{group}-label-{i}"))),
        )
        .child(
            Element::div()
                .class("accordion__panel")
                .id(format!("{group}-panel-{i}"))
                .content_height(50.0),
        )
}

fn group(name: &str, items: usize) -> Element {
    Element::div()
        .class("accordion__group")
        .id(name)
        .children((0..items).map(|i| faq_item(name, i)))
}

fn node(doc: &Document, id: &str) -> NodeId {
    doc.get_by_id(id).unwrap()
}

fn setup(doc: &mut Document, options: Options) -> Accordion<NodeId> {
    let mut acc = Accordion::new(&*doc, &options).unwrap();
    acc.load(doc);
    acc.finish_animations(doc);
    acc
}

fn click(acc: &mut Accordion<NodeId>, doc: &mut Document, id: &str) -> EventOutcome {
    let target = node(doc, id);
    let outcome = acc.dispatch(doc, Event::click(target));
    acc.finish_animations(doc);
    outcome
}

// =============================================================================
// Listener registration
// =============================================================================

#[test]
fn test_no_groups_is_inert() {
    let mut doc = Document::from_elements([Element::div()
        .id("lonely")
        .child(Element::button("Hi").class("accordion__button").id("btn"))]);
    let mut acc = Accordion::new(&doc, &Options::new()).unwrap();

    assert!(acc.is_inert());
    assert!(acc.registry().is_empty());
    assert!(acc.load(&mut doc).is_ignored());
    assert!(click(&mut acc, &mut doc, "btn").is_ignored());
    assert_eq!(doc.attribute(node(&doc, "lonely"), "data-active"), None);
}

#[test]
fn test_one_listener_pair_per_group() {
    let doc = Document::from_elements([group("a", 2), group("b", 3), group("empty", 0)]);
    let acc = Accordion::new(&doc, &Options::new()).unwrap();

    assert!(!acc.is_inert());
    assert_eq!(acc.registry().len(), 2);
    assert_eq!(acc.dispatcher().len(), 2);
    assert!(!acc.dispatcher().is_loaded(node(&doc, "empty")));
}

#[test]
fn test_load_runs_once_per_group() {
    let mut doc = Document::from_elements([group("a", 2)]);
    let mut acc = Accordion::new(&doc, &Options::new()).unwrap();

    let container = node(&doc, "a");
    assert!(!acc.dispatcher().is_loaded(container));

    let first = acc.dispatch_at(&mut doc, Event::Load, Instant::now());
    assert_eq!(first.transitions, 2);
    assert!(!first.default_prevented);
    assert!(acc.dispatcher().is_loaded(container));

    click(&mut acc, &mut doc, "a-button-1");
    assert!(doc.is_active(node(&doc, "a-item-1")));

    // A second load must not reset clicked state.
    let second = acc.load(&mut doc);
    assert_eq!(second.transitions, 0);
    assert!(doc.is_active(node(&doc, "a-item-1")));
}

// =============================================================================
// Click delegation
// =============================================================================

#[test]
fn test_click_inside_button_child_toggles_item() {
    let mut doc = Document::from_elements([group("a", 2)]);
    let mut acc = setup(&mut doc, Options::new());

    let outcome = click(&mut acc, &mut doc, "a-label-1");
    assert!(outcome.default_prevented);
    assert_eq!(outcome.transitions, 1);
    assert!(doc.is_active(node(&doc, "a-item-1")));
}

#[test]
fn test_click_outside_button_is_ignored() {
    let mut doc = Document::from_elements([group("a", 2)]);
    let mut acc = setup(&mut doc, Options::new().singular());
    let before = doc.clone();

    for target in ["a", "a-item-0", "a-panel-1"] {
        let outcome = click(&mut acc, &mut doc, target);
        assert!(outcome.is_ignored(), "click on {target} was handled");
        assert!(!outcome.default_prevented);
    }
    assert_eq!(doc, before);
}

#[test]
fn test_button_outside_items_closes_singular_group() {
    let mut doc = Document::from_elements([Element::div()
        .class("accordion__group")
        .id("a")
        .child(Element::button("Close all").class("accordion__button").id("close-all"))
        .children((0..2).map(|i| faq_item("a", i)))]);
    let mut acc = setup(&mut doc, Options::new().singular());
    assert!(doc.is_active(node(&doc, "a-item-0")));

    let outcome = click(&mut acc, &mut doc, "close-all");
    assert!(outcome.default_prevented);
    assert_eq!(outcome.transitions, 1);
    assert!(!doc.is_active(node(&doc, "a-item-0")));
    assert!(!doc.is_active(node(&doc, "a-item-1")));
    assert_eq!(
        doc.max_height(node(&doc, "a-panel-0")),
        accordion::MaxHeight::Px(0.0)
    );
}

#[test]
fn test_button_outside_items_is_a_no_op_in_multi_mode() {
    let mut doc = Document::from_elements([Element::div()
        .class("accordion__group")
        .id("a")
        .child(Element::button("Close all").class("accordion__button").id("close-all"))
        .children((0..2).map(|i| faq_item("a", i)))]);
    let mut acc = setup(&mut doc, Options::new());

    let outcome = click(&mut acc, &mut doc, "close-all");
    assert!(outcome.default_prevented);
    assert_eq!(outcome.transitions, 0);
    assert!(doc.is_active(node(&doc, "a-item-0")));
}

#[test]
fn test_nested_group_handles_its_own_clicks() {
    let inner = group("inner", 2);
    let outer = Element::div()
        .class("accordion__group")
        .id("outer")
        .child(
            Element::div()
                .class("accordion")
                .id("outer-item-0")
                .child(
                    Element::button("Outer")
                        .class("accordion__button")
                        .id("outer-button-0"),
                )
                .child(
                    Element::div()
                        .class("accordion__panel")
                        .id("outer-panel-0")
                        .child(inner),
                ),
        );
    let mut doc = Document::from_elements([outer]);
    let mut acc = setup(&mut doc, Options::new().singular());

    assert_eq!(acc.registry().len(), 2);
    assert_eq!(acc.registry().groups[0].items.len(), 1);
    assert_eq!(acc.registry().groups[1].items.len(), 2);
    assert!(doc.is_active(node(&doc, "outer-item-0")));
    assert!(doc.is_active(node(&doc, "inner-item-0")));
    assert!(!doc.is_active(node(&doc, "inner-item-1")));

    let outcome = click(&mut acc, &mut doc, "inner-button-1");
    assert_eq!(outcome.transitions, 2);
    assert!(!doc.is_active(node(&doc, "inner-item-0")));
    // Handled once: a second pass would have toggled it back.
    assert!(doc.is_active(node(&doc, "inner-item-1")));
    assert!(doc.is_active(node(&doc, "outer-item-0")));

    // Outer clicks leave the inner group alone.
    let outcome = click(&mut acc, &mut doc, "outer-button-0");
    assert_eq!(outcome.transitions, 1);
    assert!(!doc.is_active(node(&doc, "outer-item-0")));
    assert!(doc.is_active(node(&doc, "inner-item-1")));
}

#[test]
fn test_groups_are_independent() {
    let mut doc = Document::from_elements([group("a", 2), group("b", 2)]);
    let mut acc = setup(&mut doc, Options::new().singular());

    click(&mut acc, &mut doc, "a-button-1");
    assert!(!doc.is_active(node(&doc, "a-item-0")));
    assert!(doc.is_active(node(&doc, "a-item-1")));
    // Group b keeps its own first item open.
    assert!(doc.is_active(node(&doc, "b-item-0")));
    assert!(!doc.is_active(node(&doc, "b-item-1")));
}

#[test]
fn test_item_added_after_discovery_is_handled() {
    let mut doc = Document::from_elements([group("a", 2)]);
    let mut acc = setup(&mut doc, Options::new().singular());

    let container = node(&doc, "a");
    doc.append(container, faq_item("a", 2));

    let outcome = click(&mut acc, &mut doc, "a-button-2");
    assert_eq!(outcome.transitions, 2);
    assert!(doc.is_active(node(&doc, "a-item-2")));
    assert!(!doc.is_active(node(&doc, "a-item-0")));
    assert_eq!(
        doc.attribute(node(&doc, "a-panel-2"), "aria-expanded").as_deref(),
        Some("true")
    );
}

#[test]
fn test_removed_item_is_not_touched() {
    let mut doc = Document::from_elements([group("a", 3)]);
    let mut acc = setup(&mut doc, Options::new().singular());

    let removed = node(&doc, "a-item-0");
    doc.remove(removed);

    click(&mut acc, &mut doc, "a-button-1");
    // The detached item keeps the state it had when it left the group.
    assert!(doc.is_active(removed));
    assert!(doc.is_active(node(&doc, "a-item-1")));
}

#[test]
fn test_item_without_panel_toggles_marker_only() {
    let mut doc = Document::from_elements([Element::div()
        .class("accordion__group")
        .child(
            Element::div()
                .class("accordion")
                .id("bare")
                .child(Element::button("Q").class("accordion__button").id("bare-button")),
        )]);
    let mut acc = setup(&mut doc, Options::new().hide_except_first(false));
    let item = node(&doc, "bare");
    assert!(!doc.is_active(item));

    click(&mut acc, &mut doc, "bare-button");
    assert!(doc.is_active(item));
    assert!(!acc.is_animating());
}

#[test]
fn test_custom_selectors() {
    let mut doc = Document::from_elements([Element::new("section")
        .attr("data-faq", "")
        .child(
            Element::new("details")
                .id("q1")
                .child(Element::new("summary").id("q1-summary"))
                .child(Element::div().attr("role", "region").content_height(30.0)),
        )
        .child(
            Element::new("details")
                .id("q2")
                .child(Element::new("summary").id("q2-summary"))
                .child(Element::div().attr("role", "region").content_height(30.0)),
        )]);
    let options = Options::new()
        .singular()
        .selectors("section[data-faq]", "details", "[role=region]", "summary");
    let mut acc = setup(&mut doc, options);

    assert_eq!(acc.registry().len(), 1);
    assert!(doc.is_active(node(&doc, "q1")));

    click(&mut acc, &mut doc, "q2-summary");
    assert!(!doc.is_active(node(&doc, "q1")));
    assert!(doc.is_active(node(&doc, "q2")));
}
