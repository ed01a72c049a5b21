use super::*;
use crate::core::event::PointerEvent;
use crate::field::headless::HeadlessView;
use crate::field::{ListenerRegistry, Mode, Subscription};

fn views(texts: &[&str]) -> Vec<HeadlessView> {
    texts.iter().map(|t| HeadlessView::new(*t)).collect()
}

#[test]
fn one_field_per_target_in_target_order() {
    let mut events = ListenerRegistry::new();
    let numbers = DraggableNumbers::new(views(&["1", "2", "3"]), FieldOptions::default(), &mut events);

    assert_eq!(numbers.len(), 3);
    let values: Vec<f64> = numbers.iter().map(|f| f.value()).collect();
    assert_eq!(values, vec![1.0, 2.0, 3.0]);
    assert!(numbers.iter().all(|f| f.mode() == Mode::Label));
}

#[test]
fn targets_are_initialised_last_first() {
    let mut events = ListenerRegistry::new();
    let numbers = DraggableNumbers::new(views(&["1", "2", "3"]), FieldOptions::default(), &mut events);

    // Label listeners are taken in construction order.
    let by_subscription = events.subscribers(Subscription::LabelPointerDown);
    let mut expected = numbers.ids().to_vec();
    expected.reverse();
    assert_eq!(by_subscription, expected);
}

#[test]
fn empty_target_list() {
    let mut events = ListenerRegistry::new();
    let numbers: DraggableNumbers<HeadlessView> =
        DraggableNumbers::new(Vec::new(), FieldOptions::default(), &mut events);
    assert!(numbers.is_empty());
    assert!(events.is_empty());
}

#[test]
fn dispatch_reaches_only_the_target_field() {
    let mut events = ListenerRegistry::new();
    let mut numbers = DraggableNumbers::new(views(&["1", "2"]), FieldOptions::default(), &mut events);
    let ids = numbers.ids().to_vec();

    let down = FieldEvent::PointerDown(PointerEvent::new(0.0, 0.0));
    let drag = FieldEvent::PointerMove(PointerEvent::new(0.0, -10.0));
    assert!(numbers.dispatch(ids[1], &down, &mut events));
    for id in events.subscribers(Subscription::PointerMove) {
        numbers.dispatch(id, &drag, &mut events);
    }

    assert_eq!(numbers.get(ids[0]).map(|f| f.value()), Some(1.0));
    assert_eq!(numbers.get(ids[1]).map(|f| f.value()), Some(3.0));
}

#[test]
fn cancel_drags_releases_all_captures() {
    let mut events = ListenerRegistry::new();
    let mut numbers = DraggableNumbers::new(views(&["1", "2"]), FieldOptions::default(), &mut events);
    let down = FieldEvent::PointerDown(PointerEvent::new(0.0, 0.0));
    for id in numbers.ids().to_vec() {
        numbers.dispatch(id, &down, &mut events);
    }
    assert_eq!(events.global_count(), 4);

    numbers.cancel_drags(&mut events);
    assert_eq!(events.global_count(), 0);
    assert!(numbers.iter().all(|f| !f.is_dragging()));
}

#[test]
fn destroy_removes_field_and_its_listeners() {
    let mut events = ListenerRegistry::new();
    let mut numbers = DraggableNumbers::new(views(&["1", "2"]), FieldOptions::default(), &mut events);
    let ids = numbers.ids().to_vec();

    let view = numbers.destroy(ids[0], &mut events).unwrap();
    assert!(!view.label_attached);
    assert_eq!(numbers.len(), 1);
    assert_eq!(events.count_for(ids[0]), 0);
    assert_eq!(events.count_for(ids[1]), 3);

    let stale = FieldEvent::Blur;
    assert!(!numbers.dispatch(ids[0], &stale, &mut events));
    assert!(numbers.destroy(ids[0], &mut events).is_none());
}

#[test]
fn destroy_all_returns_views_in_target_order() {
    let mut events = ListenerRegistry::new();
    let numbers = DraggableNumbers::new(views(&["1", "2", "3"]), FieldOptions::default(), &mut events);

    let views = numbers.destroy_all(&mut events);
    let texts: Vec<&str> = views.iter().map(|v| v.label_text.as_str()).collect();
    assert_eq!(texts, vec!["1", "2", "3"]);
    assert!(events.is_empty());
}
