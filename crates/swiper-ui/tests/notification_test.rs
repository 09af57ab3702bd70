//! Page-change notifications are deferred until the settle transition has
//! run, and only sent when the page actually changed.

use swiper_testing::CarouselTestRule;
use swiper_ui::{CarouselOptions, Easing, NotificationPolicy, Transition};

fn cancelling_rule() -> CarouselTestRule {
    CarouselTestRule::with_options(
        CarouselOptions::new(300.0, 3)
            .with_notification_policy(NotificationPolicy::CancelOnNewGesture),
    )
}

#[test]
fn notification_waits_for_the_transition() {
    let mut rule = CarouselTestRule::new(300.0, 3);
    rule.drag_horizontally(-200.0, 250);
    assert_eq!(rule.carousel().current_index(), 1);
    assert!(rule.page_changes().is_empty());

    rule.advance_time(299);
    assert!(rule.page_changes().is_empty());
    rule.advance_time(1);
    assert_eq!(rule.page_changes(), vec![1]);

    rule.advance_time(1_000);
    assert_eq!(rule.page_changes(), vec![1]);
}

#[test]
fn delay_follows_configured_transition() {
    let transition = Transition::tween(500, Easing::Ease);
    let mut rule = CarouselTestRule::with_options(
        CarouselOptions::new(300.0, 3).with_transition(transition),
    );
    rule.drag_horizontally(-200.0, 100);
    assert_eq!(rule.sink().last_apply().map(|(_, t)| t), Some(Some(transition)));

    rule.advance_time(499);
    assert!(rule.page_changes().is_empty());
    rule.advance_time(1);
    assert_eq!(rule.page_changes(), vec![1]);
}

#[test]
fn stale_notification_still_fires_by_default() {
    let mut rule = CarouselTestRule::new(300.0, 3);
    rule.drag_horizontally(-200.0, 100);
    rule.advance_time(100);

    // Second swipe starts before the first notification is due.
    rule.drag_horizontally(-200.0, 100);
    assert_eq!(rule.carousel().current_index(), 2);

    rule.advance_time(300);
    assert_eq!(rule.page_changes(), vec![1, 2]);
}

#[test]
fn stale_notification_survives_jump_by_default() {
    let mut rule = CarouselTestRule::new(300.0, 3);
    rule.drag_horizontally(-200.0, 100);
    rule.carousel_mut().jump_to_page(0);

    rule.advance_time(300);
    assert_eq!(rule.page_changes(), vec![1]);
    assert_eq!(rule.carousel().current_index(), 0);
}

#[test]
fn new_contact_cancels_pending_notification() {
    let mut rule = cancelling_rule();
    rule.drag_horizontally(-200.0, 100);
    assert!(rule.carousel().has_pending_notification());

    rule.advance_time(100);
    rule.press(150.0, 200.0);
    assert!(!rule.carousel().has_pending_notification());
    rule.release();

    rule.advance_time(1_000);
    assert!(rule.page_changes().is_empty());
    assert_eq!(rule.carousel().current_index(), 1);
}

#[test]
fn only_latest_commit_notifies_when_cancelling() {
    let mut rule = cancelling_rule();
    rule.drag_horizontally(-200.0, 100);
    rule.advance_time(50);
    rule.drag_horizontally(-200.0, 100);

    rule.advance_time(300);
    assert_eq!(rule.page_changes(), vec![2]);
    assert!(!rule.carousel().has_pending_notification());
}

#[test]
fn jump_cancels_pending_notification_when_cancelling() {
    let mut rule = cancelling_rule();
    rule.drag_horizontally(-200.0, 100);
    rule.carousel_mut().jump_to_page(2);

    rule.advance_time(1_000);
    assert!(rule.page_changes().is_empty());
}

#[test]
fn settled_notification_is_not_cancelled_later() {
    let mut rule = cancelling_rule();
    rule.drag_horizontally(-200.0, 100);
    rule.advance_time(300);
    rule.press(150.0, 200.0);
    rule.release();
    assert_eq!(rule.page_changes(), vec![1]);
}

#[test]
fn jump_to_page_animates_without_notifying() {
    let mut rule = CarouselTestRule::new(300.0, 3);
    rule.carousel_mut().jump_to_page(2);

    assert_eq!(rule.carousel().current_index(), 2);
    let (offset, transition) = rule.sink().last_apply().expect("jump applied");
    assert_eq!(offset, -600.0);
    assert_eq!(transition, Some(Transition::default()));

    rule.advance_time(1_000);
    assert!(rule.page_changes().is_empty());
}

#[test]
fn jump_past_the_end_is_applied_damped() {
    let mut rule = CarouselTestRule::new(300.0, 3);
    rule.carousel_mut().jump_to_page(5);

    assert_eq!(rule.carousel().current_index(), 5);
    let offset = rule.carousel().visual_offset();
    assert!((offset - -960.0).abs() < 1e-3, "got {offset}");
}
