use crate::helpers::{FakePage, ManualScheduler, ms};

use models::RevealOptions;
use portfolio_core::scroll::{
    AnchorOutcome, IntersectionEntry, ScrollAlignment, ScrollBehavior, ScrollController,
};

use std::cell::Cell;
use std::rc::Rc;

const SECTIONS: [&str; 5] = ["home", "about", "skills", "work", "contact"];

fn mount(ids: &[&str]) -> (ScrollController<FakePage, ManualScheduler>, FakePage, ManualScheduler) {
    let clock = ManualScheduler::new();
    let page = FakePage::with_ids(ids, &clock);
    let controller = ScrollController::mount(page.clone(), clock.clone(), RevealOptions::default());
    (controller, page, clock)
}

fn batch(entries: &[(&str, bool)]) -> Vec<IntersectionEntry<String>> {
    entries
        .iter()
        .map(|(id, visible)| IntersectionEntry::new(id.to_string(), *visible))
        .collect()
}

// ============================================================================
// Anchor navigation
// ============================================================================

/// **VALUE**: Verifies every section anchor scrolls smoothly to the section top.
///
/// **WHY THIS MATTERS**: This is the navigation contract of the navbar.
///
/// **BUG THIS CATCHES**: Would catch instant scrolling, wrong alignment, or a missing
/// `preventDefault` (which would make the browser jump before the animation).
#[test]
fn given_existing_targets_when_anchor_clicked_then_smooth_scroll_to_top_and_default_prevented() {
    // GIVEN: A page with all five sections
    let (controller, page, _clock) = mount(&SECTIONS);

    for id in SECTIONS {
        // WHEN: Clicking the anchor for the section
        let outcome = controller.on_anchor_click(&format!("#{id}"));

        // THEN: Scrolled, default navigation suppressed
        assert_eq!(outcome, AnchorOutcome::Scrolled);
        assert!(outcome.prevents_default());
    }

    // AND: Each scroll was smooth and aligned to the top edge
    let scrolls = page.scrolls();
    assert_eq!(scrolls.len(), SECTIONS.len());
    for ((target, options), id) in scrolls.iter().zip(SECTIONS) {
        assert_eq!(target, id);
        assert_eq!(options.behavior, ScrollBehavior::Smooth);
        assert_eq!(options.block, ScrollAlignment::Start);
    }
}

/// **VALUE**: Verifies a link to a missing id is swallowed without scrolling.
///
/// **WHY THIS MATTERS**: The only edge case of the controller. It must not error and must
/// not let the browser jump either.
///
/// **BUG THIS CATCHES**: Would catch passing the click through, or scrolling to some
/// fallback element.
#[test]
fn given_missing_target_when_anchor_clicked_then_suppressed_without_scroll() {
    // GIVEN: A page without a #blog element
    let (controller, page, _clock) = mount(&SECTIONS);

    // WHEN: Clicking #blog and a bare #
    let missing = controller.on_anchor_click("#blog");
    let bare = controller.on_anchor_click("#");

    // THEN: Both suppressed, nothing scrolled
    assert_eq!(missing, AnchorOutcome::Suppressed);
    assert_eq!(bare, AnchorOutcome::Suppressed);
    assert!(missing.prevents_default());
    assert!(page.scrolls().is_empty());
}

/// **VALUE**: Verifies external links are left to the browser.
///
/// **WHY THIS MATTERS**: Project cards link off-site.
///
/// **BUG THIS CATCHES**: Would catch interception of non-fragment links.
#[test]
fn given_external_link_when_clicked_then_ignored() {
    let (controller, page, _clock) = mount(&SECTIONS);

    let outcome = controller.on_anchor_click("https://example.com/#work");

    assert_eq!(outcome, AnchorOutcome::Ignored);
    assert!(!outcome.prevents_default());
    assert!(page.scrolls().is_empty());
}

// ============================================================================
// Staggered reveal
// ============================================================================

/// **VALUE**: Verifies the Kth entry of a batch reveals within `[(K-1)*100ms, K*100ms]`.
///
/// **WHY THIS MATTERS**: The cascade is the visible behavior of the effect. All-at-once
/// reveals or reversed order would look broken.
///
/// **BUG THIS CATCHES**: Would catch a stagger computed from a global counter instead of the
/// rank within the batch, or a delay that starts at 100ms instead of 0.
#[test]
fn given_batch_of_four_when_observed_then_reveals_cascade_by_rank() {
    // GIVEN: Four reveal targets
    let ids = ["s1", "s2", "s3", "s4"];
    let (controller, page, clock) = mount(&ids);

    // WHEN: All four enter the viewport in one batch
    let scheduled = controller.on_intersections(&batch(&[
        ("s1", true),
        ("s2", true),
        ("s3", true),
        ("s4", true),
    ]));
    assert_eq!(scheduled, 4);

    // THEN: Nothing is marked synchronously
    assert!(page.reveals().is_empty());

    // AND: Each target reveals at (K-1) * 100ms
    clock.advance(ms(400));
    let reveals = page.reveals();
    assert_eq!(reveals.len(), 4);
    for (k, (id, at)) in reveals.iter().enumerate() {
        assert_eq!(id, ids[k], "Reveal order should follow batch order");
        let k = k as u64 + 1;
        assert!(*at >= ms((k - 1) * 100), "{id} revealed too early: {at:?}");
        assert!(*at <= ms(k * 100), "{id} revealed too late: {at:?}");
    }
}

/// **VALUE**: Verifies the rank counts every entry of the batch, including ones not
/// intersecting.
///
/// **WHY THIS MATTERS**: Ranks follow the reported order of the observation batch.
///
/// **BUG THIS CATCHES**: Would catch ranking only intersecting entries, which shifts later
/// entries earlier.
#[test]
fn given_mixed_batch_when_observed_then_rank_is_position_in_batch() {
    // GIVEN: A batch where the middle entry is leaving the viewport
    let (controller, page, clock) = mount(&["a", "b", "c"]);

    // WHEN: Observing
    let scheduled = controller.on_intersections(&batch(&[("a", true), ("b", false), ("c", true)]));

    // THEN: Two reveals, c at rank 2
    assert_eq!(scheduled, 2);
    clock.advance(ms(199));
    assert!(page.is_revealed("a", "visible"));
    assert!(!page.is_revealed("c", "visible"));
    clock.advance(ms(1));
    assert!(page.is_revealed("c", "visible"));
    assert!(!page.is_revealed("b", "visible"));
}

/// **VALUE**: Verifies a revealed target stays revealed after leaving and re-entering.
///
/// **WHY THIS MATTERS**: The reveal is a one-way transition. Elements flickering back to
/// hidden on scroll would be jarring.
///
/// **BUG THIS CATCHES**: Would catch a controller that removes the class when an entry
/// reports `is_intersecting = false`, or re-schedules already revealed targets.
#[test]
fn given_revealed_target_when_it_leaves_and_reenters_then_stays_revealed() {
    // GIVEN: A revealed target
    let (controller, page, clock) = mount(&["card"]);
    controller.on_intersections(&batch(&[("card", true)]));
    clock.advance(ms(0));
    assert!(page.is_revealed("card", "visible"));

    // WHEN: It leaves, then re-enters the viewport
    controller.on_intersections(&batch(&[("card", false)]));
    clock.advance(ms(500));
    let rescheduled = controller.on_intersections(&batch(&[("card", true)]));
    clock.advance(ms(500));

    // THEN: Still revealed, marked once, not rescheduled
    assert!(page.is_revealed("card", "visible"));
    assert_eq!(page.reveals().len(), 1);
    assert_eq!(rescheduled, 0);
}

/// **VALUE**: Verifies a custom revealed class and stagger are honoured.
///
/// **WHY THIS MATTERS**: Both come from `portfolio.toml`.
///
/// **BUG THIS CATCHES**: Would catch hard-coded `visible` or 100ms in the controller.
#[test]
fn given_custom_options_when_batch_observed_then_uses_configured_class_and_stagger() {
    let clock = ManualScheduler::new();
    let page = FakePage::with_ids(&["a", "b"], &clock);
    let options = RevealOptions {
        stagger_ms: 250,
        revealed_class: "shown".to_string(),
        ..RevealOptions::default()
    };
    let controller = ScrollController::mount(page.clone(), clock.clone(), options);

    controller.on_intersections(&batch(&[("a", true), ("b", true)]));
    clock.advance(ms(249));

    assert!(page.is_revealed("a", "shown"));
    assert!(!page.is_revealed("b", "shown"));
    clock.advance(ms(1));
    assert!(page.is_revealed("b", "shown"));
}

// ============================================================================
// Teardown
// ============================================================================

/// **VALUE**: Verifies teardown cancels pending reveals and stops click interception.
///
/// **WHY THIS MATTERS**: No callback may touch a detached page.
///
/// **BUG THIS CATCHES**: Would catch timers that survive teardown, or clicks still being
/// swallowed after the page unmounts.
#[test]
fn given_pending_reveals_when_torn_down_then_nothing_fires_and_clicks_pass_through() {
    // GIVEN: A batch with reveals still pending
    let (controller, page, clock) = mount(&["a", "b", "c", "home"]);
    controller.on_intersections(&batch(&[("a", true), ("b", true), ("c", true)]));
    clock.advance(ms(0));
    assert_eq!(page.reveals().len(), 1, "First entry reveals immediately");

    // WHEN: Tearing down
    controller.teardown();

    // THEN: Pending timers cancelled, nothing else reveals
    assert_eq!(clock.pending(), 0);
    clock.advance(ms(1_000));
    assert_eq!(page.reveals().len(), 1);

    // AND: Further batches and clicks are ignored
    assert_eq!(controller.on_intersections(&batch(&[("b", true)])), 0);
    assert_eq!(controller.on_anchor_click("#home"), AnchorOutcome::Ignored);
    assert!(page.scrolls().is_empty());
    assert!(!controller.is_attached());
}

/// **VALUE**: Verifies attached resources are released exactly once, in reverse order.
///
/// **WHY THIS MATTERS**: Hosts hand over click listeners and the intersection observer;
/// they must be removed on unmount and never twice.
///
/// **BUG THIS CATCHES**: Would catch a non-idempotent teardown, or release on drop being
/// skipped.
#[test]
fn given_attached_resources_when_torn_down_twice_then_released_once_in_reverse_order() {
    // GIVEN: Two resources attached in order
    let (controller, _page, _clock) = mount(&[]);
    let order = Rc::new(std::cell::RefCell::new(Vec::new()));
    for name in ["listeners", "observer"] {
        let order = Rc::clone(&order);
        controller.attach(move || order.borrow_mut().push(name));
    }

    // WHEN: Tearing down twice
    controller.teardown();
    controller.teardown();

    // THEN: Released once each, last attached first
    assert_eq!(*order.borrow(), vec!["observer", "listeners"]);
}

/// **VALUE**: Verifies dropping the controller tears it down.
///
/// **WHY THIS MATTERS**: Scoped acquisition: the host cannot forget to release.
///
/// **BUG THIS CATCHES**: Would catch a missing `Drop` impl.
#[test]
fn given_mounted_controller_when_dropped_then_resources_released_and_timers_cancelled() {
    // GIVEN: A controller with a resource and a pending reveal
    let (controller, page, clock) = mount(&["a", "b"]);
    let released = Rc::new(Cell::new(false));
    let flag = Rc::clone(&released);
    controller.attach(move || flag.set(true));
    controller.on_intersections(&batch(&[("a", false), ("b", true)]));

    // WHEN: Dropping it
    drop(controller);

    // THEN: Resource released, reveal never fires
    assert!(released.get());
    clock.advance(ms(1_000));
    assert!(page.reveals().is_empty());
}

/// **VALUE**: Verifies attaching after teardown releases the resource immediately.
///
/// **WHY THIS MATTERS**: A host racing an unmount must not leak a listener.
///
/// **BUG THIS CATCHES**: Would catch resources being stored on a dead controller.
#[test]
fn given_torn_down_controller_when_resource_attached_then_released_immediately() {
    let (controller, _page, _clock) = mount(&[]);
    controller.teardown();

    let released = Rc::new(Cell::new(false));
    let flag = Rc::clone(&released);
    controller.attach(move || flag.set(true));

    assert!(released.get());
}

/// **VALUE**: Verifies a reveal task that runs after teardown does nothing.
///
/// **WHY THIS MATTERS**: A host timer may slip past cancellation. It must still never
/// touch a detached page.
///
/// **BUG THIS CATCHES**: Would catch a reveal task that only relies on timer cancellation
/// and skips the attached check.
#[test]
fn given_timers_that_ignore_cancellation_when_torn_down_then_late_tasks_are_no_ops() {
    // GIVEN: A scheduler whose timers survive their handles
    let clock = ManualScheduler::ignoring_cancellation();
    let page = FakePage::with_ids(&["a", "b"], &clock);
    let controller = ScrollController::mount(page.clone(), clock.clone(), RevealOptions::default());
    controller.on_intersections(&batch(&[("a", true), ("b", true)]));

    // WHEN: Tearing down, then letting the leaked tasks run
    controller.teardown();
    assert_eq!(clock.pending(), 2, "Tasks should still be queued");
    clock.advance(ms(1_000));

    // THEN: Nothing was marked
    assert!(page.reveals().is_empty());
    assert_eq!(page.add_class_calls("a"), 0);
    assert_eq!(page.add_class_calls("b"), 0);
}

/// **VALUE**: Verifies a target that leaves and re-enters before its reveal fires is marked
/// exactly once.
///
/// **WHY THIS MATTERS**: Fast scrolling reports the same target in several batches while its
/// first reveal is still pending.
///
/// **BUG THIS CATCHES**: Would catch the second scheduled task marking the target again.
#[test]
fn given_pending_target_when_it_leaves_and_reenters_then_marked_once() {
    // GIVEN: b scheduled at rank 1
    let (controller, page, clock) = mount(&["a", "b"]);
    controller.on_intersections(&batch(&[("a", false), ("b", true)]));

    // WHEN: b leaves and re-enters before the first reveal fires
    controller.on_intersections(&batch(&[("b", false)]));
    let rescheduled = controller.on_intersections(&batch(&[("b", true)]));
    clock.advance(ms(500));

    // THEN: Both tasks ran, only one marked the target
    assert_eq!(rescheduled, 1);
    assert!(page.is_revealed("b", "visible"));
    assert_eq!(page.add_class_calls("b"), 1);
    assert_eq!(page.reveals().len(), 1);
}

/// **VALUE**: Verifies fired reveal timers are released instead of piling up.
///
/// **WHY THIS MATTERS**: Each browser timeout keeps its closure and target element alive
/// while the controller holds it.
///
/// **BUG THIS CATCHES**: Would catch a timer list that only shrinks on teardown.
#[test]
fn given_many_fired_reveals_when_next_batch_observed_then_fired_timers_dropped() {
    // GIVEN: 500 rounds of a target entering and leaving before its reveal
    let (controller, page, clock) = mount(&["a", "b"]);
    for _ in 0..500 {
        controller.on_intersections(&batch(&[("a", false), ("b", true)]));
        controller.on_intersections(&batch(&[("b", false)]));
    }
    assert_eq!(controller.pending_reveals(), 500);

    // WHEN: Every reveal fires and another batch arrives
    clock.advance(ms(1_000));
    assert_eq!(controller.pending_reveals(), 0);
    controller.on_intersections(&batch(&[("a", false)]));

    // THEN: No timer handles are kept
    assert_eq!(clock.live_timers(), 0);
    assert_eq!(page.add_class_calls("b"), 1);
}
