use crate::testing::{FakeDom, FakeElement, FakeRegistrar};
use crate::*;

use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use scrollkit::{Bounds, RegionOptions, RevealOptions, ScrollBehavior, ScrollDirection};

struct Region {
    container: FakeElement,
    prev: FakeElement,
    next: FakeElement,
}

/// Builds a `.{name}-scroll` strip with its `.{name}-nav`. Missing controls are left out.
fn strip(dom: &FakeDom, name: &str, prev: bool, next: bool) -> Region {
    let section = dom.body().child("section");
    let container = section
        .child("div")
        .with_class(&format!("{name}-scroll"))
        .with_scroll_size(2100.0, 1000.0);
    for _ in 0..5 {
        container.child("article").with_class(&format!("{name}-item"));
    }
    let nav = section.child("div").with_class(&format!("{name}-nav"));
    let prev_el = nav.child("button").with_class(if prev { "nav-prev" } else { "nav-back" });
    let next_el = nav.child("button").with_class(if next { "nav-next" } else { "nav-fwd" });
    Region {
        container,
        prev: prev_el,
        next: next_el,
    }
}

fn portfolio(dom: &FakeDom, prev: bool, next: bool) -> Region {
    strip(dom, "portfolio", prev, next)
}

fn mounted(dom: &FakeDom) -> (Region, CarouselController<FakeElement>) {
    let r = portfolio(dom, true, true);
    let c = CarouselController::mount(dom, &RegionOptions::portfolio()).unwrap();
    (r, c)
}

#[test]
fn mount_initializes_controls_and_progress() {
    let dom = FakeDom::new();
    let (r, c) = mounted(&dom);

    assert!(c.container().is_same_node(&r.container));
    assert_eq!(c.step(), 420.0);
    assert!(r.prev.is_disabled());
    assert!(!r.next.is_disabled());
    assert_eq!(r.prev.style("opacity").as_deref(), Some("0.5"));
    assert_eq!(r.next.style("opacity").as_deref(), Some("1"));
    assert_eq!(r.container.style("--scroll-percentage").as_deref(), Some("0%"));
    assert_eq!(r.container.style("cursor").as_deref(), Some("grab"));
}

#[test]
fn region_with_missing_element_stays_inert() {
    let presets = [
        ("portfolio", RegionOptions::portfolio()),
        ("testimonials", RegionOptions::testimonials()),
        ("services", RegionOptions::services()),
    ];
    for (name, options) in &presets {
        for (has_prev, has_next) in [(false, true), (true, false), (false, false)] {
            let dom = FakeDom::new();
            let r = strip(&dom, name, has_prev, has_next);
            assert!(CarouselController::mount(&dom, options).is_none(), "{name}");

            for el in [&r.container, &r.prev, &r.next] {
                assert_eq!(el.style("cursor"), None);
                assert_eq!(el.style("opacity"), None);
                assert_eq!(el.style("--scroll-percentage"), None);
                assert!(!el.is_disabled());
            }
        }

        // Controls without a container.
        let dom = FakeDom::new();
        let nav = dom.body().child("div").with_class(&format!("{name}-nav"));
        let prev = nav.child("button").with_class("nav-prev");
        nav.child("button").with_class("nav-next");
        assert!(CarouselController::mount(&dom, options).is_none(), "{name}");
        assert!(!prev.is_disabled());
    }
}

#[test]
fn next_and_prev_issue_one_smooth_step_each() {
    let dom = FakeDom::new();
    let (r, mut c) = mounted(&dom);

    assert!(c.on_next_click());
    assert_eq!(r.container.scroll_requests(), vec![(420.0, ScrollBehavior::Smooth)]);

    c.on_scroll();
    assert!(!r.prev.is_disabled());

    assert!(c.on_prev_click());
    assert_eq!(
        r.container.scroll_requests(),
        vec![
            (420.0, ScrollBehavior::Smooth),
            (-420.0, ScrollBehavior::Smooth),
        ]
    );
}

#[test]
fn card_regions_step_by_card_width_plus_gap() {
    let dom = FakeDom::new();
    let container = dom
        .body()
        .child("div")
        .with_class("services-scroll")
        .with_scroll_size(1800.0, 700.0);
    let nav = dom.body().child("div").with_class("services-nav");
    nav.child("button").with_class("nav-prev");
    nav.child("button").with_class("nav-next");

    let mut c = CarouselController::mount(&dom, &RegionOptions::services()).unwrap();
    c.activate(ScrollDirection::Forward);
    assert_eq!(container.scroll_requests(), vec![(344.0, ScrollBehavior::Smooth)]);
}

#[test]
fn disabled_control_ignores_activation() {
    let dom = FakeDom::new();
    let (r, mut c) = mounted(&dom);

    assert!(!c.on_prev_click());
    assert!(r.container.scroll_requests().is_empty());

    r.container.set_scroll_left(1100.0);
    c.on_scroll();
    assert!(r.next.is_disabled());
    assert!(!c.on_next_click());
    assert!(c.on_prev_click());
}

#[test]
fn control_state_follows_every_scroll_event() {
    let dom = FakeDom::new();
    let (r, mut c) = mounted(&dom);
    let max = r.container.scroll_metrics().max_scroll() as u32;

    for off in (0..=max).step_by(7).chain([max - 1, max]) {
        let off = off as f64;
        r.container.set_scroll_left(off);
        c.on_scroll();
        assert_eq!(r.prev.is_disabled(), off <= 0.0, "prev at {off}");
        assert_eq!(r.next.is_disabled(), off >= 2100.0 - 1000.0 - 1.0, "next at {off}");
        assert_eq!(c.nav_state().next_disabled, r.next.is_disabled());
    }

    r.container.set_scroll_left(550.0);
    c.on_scroll();
    assert_eq!(r.container.style("--scroll-percentage").as_deref(), Some("50%"));
    assert_eq!(r.prev.style("opacity").as_deref(), Some("1"));
}

#[test]
fn drag_scrolls_twice_the_pointer_travel() {
    let dom = FakeDom::new();
    let (r, mut c) = mounted(&dom);
    r.container.set_scroll_left(50.0);

    c.on_pointer_down(&PointerEvent::new(100.0));
    assert!(c.is_dragging());
    assert_eq!(r.container.style("cursor").as_deref(), Some("grabbing"));

    let mut ev = PointerEvent::new(80.0);
    assert!(c.on_pointer_move(&mut ev));
    assert!(ev.default_prevented());
    assert_eq!(r.container.scroll_left(), 90.0);

    c.on_pointer_up();
    assert!(!c.is_dragging());
    assert_eq!(r.container.style("cursor").as_deref(), Some("grab"));

    let mut ev = PointerEvent::new(0.0);
    assert!(!c.on_pointer_move(&mut ev));
    assert!(!ev.default_prevented());
    assert_eq!(r.container.scroll_left(), 90.0);
}

#[test]
fn drag_uses_container_relative_coordinates_and_ends_on_leave() {
    let dom = FakeDom::new();
    let r = portfolio(&dom, true, true);
    let container = r.container.clone().with_offset_left(240.0);
    let mut c = CarouselController::mount(&dom, &RegionOptions::portfolio()).unwrap();
    container.set_scroll_left(300.0);

    c.on_pointer_down(&PointerEvent::new(640.0));
    let mut ev = PointerEvent::new(700.0);
    c.on_pointer_move(&mut ev);
    assert_eq!(container.scroll_left(), 180.0);

    c.on_pointer_leave();
    assert!(!c.is_dragging());
    let mut ev = PointerEvent::new(100.0);
    assert!(!c.on_pointer_move(&mut ev));
    assert_eq!(container.scroll_left(), 180.0);
}

#[test]
fn state_snapshot_reflects_the_container() {
    let dom = FakeDom::new();
    let (r, mut c) = mounted(&dom);
    r.container.set_scroll_left(1100.0);
    let s = c.refresh();
    assert_eq!(s.progress, 100.0);
    assert!(s.nav.next_disabled);
    assert!(!s.dragging);
    assert_eq!(c.state(), s);
}

fn router() -> KeyboardRouter {
    KeyboardRouter::new([
        ".portfolio-scroll",
        ".testimonials-scroll",
        ".services-scroll",
    ])
}

#[test]
fn arrow_keys_scroll_the_focused_region() {
    let dom = FakeDom::new();
    let r = portfolio(&dom, false, false);
    let item = dom.query_selector(".portfolio-item").unwrap();
    let router = router();

    let mut ev = KeyEvent::new(Key::ArrowRight);
    assert_eq!(
        router.on_keydown(Some(&item), &mut ev),
        KeyAction::Scrolled(ScrollDirection::Forward)
    );
    assert!(ev.default_prevented());

    let mut ev = KeyEvent::new(Key::ArrowLeft);
    router.on_keydown(Some(&r.container), &mut ev);
    assert_eq!(
        r.container.scroll_requests(),
        vec![
            (320.0, ScrollBehavior::Smooth),
            (-320.0, ScrollBehavior::Smooth),
        ]
    );
}

#[test]
fn arrow_keys_outside_regions_do_nothing() {
    let dom = FakeDom::new();
    let r = portfolio(&dom, true, true);
    let router = router();

    let mut ev = KeyEvent::new(Key::ArrowRight);
    assert_eq!(router.on_keydown(Some(&r.next), &mut ev), KeyAction::None);
    assert!(!ev.default_prevented());

    let mut ev = KeyEvent::new(Key::ArrowRight);
    assert_eq!(
        router.on_keydown(None::<&FakeElement>, &mut ev),
        KeyAction::None
    );

    let mut ev = KeyEvent::new(Key::Other);
    assert_eq!(router.on_keydown(Some(&r.container), &mut ev), KeyAction::None);
    assert!(r.container.scroll_requests().is_empty());

    let empty = KeyboardRouter::new(Vec::<&str>::new());
    let mut ev = KeyEvent::new(Key::ArrowLeft);
    assert_eq!(empty.on_keydown(Some(&r.container), &mut ev), KeyAction::None);
}

#[test]
fn escape_releases_focus() {
    let dom = FakeDom::new();
    let r = portfolio(&dom, true, true);
    r.container.focus(FocusOptions::default());
    assert!(r.container.is_focused());

    let mut ev = KeyEvent::new(Key::from_name("Escape"));
    assert_eq!(router().on_keydown(Some(&r.container), &mut ev), KeyAction::Blurred);
    assert!(!r.container.is_focused());
    assert_eq!(dom.active_element().map(|e| e.is_same_node(&r.container)), None);
}

#[test]
fn key_names_map_to_keys() {
    assert_eq!(Key::from_name("ArrowLeft"), Key::ArrowLeft);
    assert_eq!(Key::from_name("ArrowRight"), Key::ArrowRight);
    assert_eq!(Key::from_name("a"), Key::Other);
}

fn sections(dom: &FakeDom, n: usize) -> Vec<FakeElement> {
    (0..n)
        .map(|_| dom.body().child("section").with_class("fade-in-section"))
        .collect()
}

#[test]
fn reveal_is_one_way() {
    let dom = FakeDom::new();
    let s = sections(&dom, 3);
    dom.body().child("section").with_class("plain");
    let mut reveal = RevealAnimator::mount(&dom, RevealOptions::default());
    assert_eq!(reveal.pending(), 3);

    let revealed = reveal.on_intersections(&[
        IntersectionEntry::new(s[0].clone(), true),
        IntersectionEntry::new(s[1].clone(), false),
    ]);
    assert_eq!(revealed.len(), 1);
    assert!(revealed[0].is_same_node(&s[0]));
    assert!(s[0].has_class("is-visible"));
    assert!(!s[1].has_class("is-visible"));

    // Scrolled back out: stays revealed and is no longer watched.
    let revealed = reveal.on_intersections(&[IntersectionEntry::new(s[0].clone(), false)]);
    assert!(revealed.is_empty());
    assert!(s[0].has_class("is-visible"));
    assert_eq!(reveal.watch_of(&s[0]), Some(scrollkit::VisibilityWatch::Revealed));
    assert_eq!(reveal.revealed(), 1);
    assert_eq!(reveal.pending(), 2);

    // Re-entering does not report it again.
    assert!(
        reveal
            .on_intersections(&[IntersectionEntry::new(s[0].clone(), true)])
            .is_empty()
    );
}

#[test]
fn reveal_ignores_unwatched_elements() {
    let dom = FakeDom::new();
    sections(&dom, 1);
    let other = dom.body().child("div");
    let mut reveal = RevealAnimator::mount(&dom, RevealOptions::default());

    assert!(
        reveal
            .on_intersections(&[IntersectionEntry::new(other.clone(), true)])
            .is_empty()
    );
    assert!(!other.has_class("is-visible"));
    assert!(!reveal.observe(dom.query_selector(".fade-in-section").unwrap()));
}

#[test]
fn reveal_from_geometry() {
    let dom = FakeDom::new();
    let s = sections(&dom, 2);
    s[0].set_bounds(Bounds::new(0.0, 200.0, 1200.0, 400.0));
    s[1].set_bounds(Bounds::new(0.0, 780.0, 1200.0, 400.0));
    let mut reveal = RevealAnimator::mount(&dom, RevealOptions::default());
    let viewport = Bounds::new(0.0, 0.0, 1200.0, 800.0);

    let revealed = reveal.check_viewport(viewport);
    assert_eq!(revealed.len(), 1);
    assert!(s[0].has_class("is-visible"));
    assert!(!s[1].has_class("is-visible"));

    // Scroll down by 300px.
    s[0].set_bounds(Bounds::new(0.0, -100.0, 1200.0, 400.0));
    s[1].set_bounds(Bounds::new(0.0, 480.0, 1200.0, 400.0));
    let revealed = reveal.check_viewport(viewport);
    assert_eq!(revealed.len(), 1);
    assert!(revealed[0].is_same_node(&s[1]));
    assert_eq!(reveal.pending(), 0);
}

fn anchor_page(dom: &FakeDom) -> (FakeElement, FakeElement) {
    let nav = dom.body().child("nav");
    let link = nav.child("a").with_attr("href", "#about");
    let label = link.child("span");
    let about = dom.body().child("section").with_id("about");
    (label, about)
}

#[test]
fn anchor_click_focuses_scrolls_and_records_history() {
    let dom = FakeDom::new();
    let (label, about) = anchor_page(&dom);

    let mut ev = ClickEvent::new(label);
    let target = AnchorNavigator::new().on_click(&dom, &dom, &mut ev);

    assert!(ev.default_prevented());
    assert!(target.unwrap().is_same_node(&about));
    assert!(about.is_focused());
    assert_eq!(
        about.focus_calls(),
        vec![FocusOptions {
            prevent_scroll: true,
        }]
    );
    assert_eq!(
        about.scroll_into_view_calls(),
        vec![(ScrollBehavior::Smooth, Block::Start)]
    );
    assert_eq!(dom.history(), vec![String::from("#about")]);
}

#[test]
fn anchor_without_target_changes_nothing() {
    let dom = FakeDom::new();
    let missing = dom.body().child("a").with_attr("href", "#nowhere");
    let bare = dom.body().child("a").with_attr("href", "#");
    let nav = AnchorNavigator::new();

    for link in [missing, bare] {
        let mut ev = ClickEvent::new(link);
        assert!(nav.on_click(&dom, &dom, &mut ev).is_none());
        assert!(ev.default_prevented());
    }
    assert!(dom.history().is_empty());
    assert!(dom.active_element().is_none());
}

#[test]
fn clicks_outside_same_page_links_pass_through() {
    let dom = FakeDom::new();
    let external = dom.body().child("a").with_attr("href", "https://example.com/#top");
    let button = dom.body().child("button");

    for target in [external, button] {
        let mut ev = ClickEvent::new(target);
        assert!(AnchorNavigator::new().on_click(&dom, &dom, &mut ev).is_none());
        assert!(!ev.default_prevented());
    }
}

#[test]
fn anchor_without_push_state_still_focuses() {
    let dom = FakeDom::new();
    dom.set_push_state_supported(false);
    let (label, about) = anchor_page(&dom);

    let mut ev = ClickEvent::new(label);
    assert!(AnchorNavigator::new().on_click(&dom, &dom, &mut ev).is_some());
    assert!(about.is_focused());
    assert!(dom.history().is_empty());
}

#[test]
fn skip_link_focuses_main_until_blur() {
    let dom = FakeDom::new();
    let link = dom
        .body()
        .child("a")
        .with_class("skip-link")
        .with_attr("href", "#main");
    let main = dom.body().child("main").with_id("main");
    let mut skip = SkipLink::mount(&dom, ".skip-link", "#main").unwrap();

    let mut ev = ClickEvent::new(link);
    assert!(skip.on_click(&mut ev));
    assert!(ev.default_prevented());
    assert_eq!(main.attribute("tabindex").as_deref(), Some("-1"));
    assert!(main.is_focused());
    assert!(skip.is_awaiting_blur());

    assert!(!skip.on_blur(&dom.body()));
    assert!(skip.on_blur(&main));
    assert_eq!(main.attribute("tabindex"), None);

    // One-shot: a later blur leaves attributes alone.
    main.set_attribute("tabindex", "0");
    assert!(!skip.on_blur(&main));
    assert_eq!(main.attribute("tabindex").as_deref(), Some("0"));
}

#[test]
fn skip_link_ignores_other_clicks_and_missing_landmark() {
    let dom = FakeDom::new();
    assert!(SkipLink::mount(&dom, ".skip-link", "#main").is_none());

    let link = dom.body().child("a").with_class("skip-link");
    let other = dom.body().child("a");
    let mut skip = SkipLink::mount(&dom, ".skip-link", "#main").unwrap();
    assert!(skip.main().is_none());

    let mut ev = ClickEvent::new(other);
    assert!(!skip.on_click(&mut ev));
    assert!(!ev.default_prevented());

    let mut ev = ClickEvent::new(link);
    assert!(!skip.on_click(&mut ev));
    assert!(ev.default_prevented());
    assert!(dom.active_element().is_none());
}

#[test]
fn scroll_regions_are_announced_and_focusable() {
    let dom = FakeDom::new();
    let r = portfolio(&dom, true, true);
    mark_scrollable_region(&r.container);
    assert_eq!(r.container.attribute("tabindex").as_deref(), Some("0"));
    assert_eq!(r.container.attribute("role").as_deref(), Some("region"));
    assert_eq!(
        r.container.attribute("aria-label").as_deref(),
        Some(SCROLL_REGION_LABEL)
    );
}

#[test]
fn motion_preference_controls_document_smooth_scrolling() {
    let dom = FakeDom::new();
    assert!(apply_motion_preference(&dom.root(), &dom));
    assert_eq!(dom.root().style("scroll-behavior").as_deref(), Some("smooth"));

    let reduced = FakeDom::new();
    reduced.set_reduced_motion(true);
    assert!(!apply_motion_preference(&reduced.root(), &reduced));
    assert_eq!(reduced.root().style("scroll-behavior"), None);
}

#[test]
fn worker_registration_outcomes() {
    let dom = FakeDom::new();
    let ok = FakeRegistrar::succeeding("/");
    assert_eq!(
        register_offline_worker(&dom, &ok, WORKER_SCRIPT),
        WorkerOutcome::Registered(WorkerRegistration {
            scope: String::from("/"),
        })
    );
    assert_eq!(ok.calls(), vec![String::from("/sw.js")]);

    let err = RegistrationError::Rejected(String::from("bad MIME type"));
    let failing = FakeRegistrar::failing(err.clone());
    assert_eq!(
        register_offline_worker(&dom, &failing, WORKER_SCRIPT),
        WorkerOutcome::Failed(err)
    );

    let insecure = FakeDom::new();
    insecure.set_secure_origin(false);
    let never = FakeRegistrar::succeeding("/");
    assert_eq!(
        register_offline_worker(&insecure, &never, WORKER_SCRIPT),
        WorkerOutcome::Skipped
    );
    assert!(never.calls().is_empty());

    let unsupported = FakeDom::new();
    unsupported.set_workers_supported(false);
    assert_eq!(
        register_offline_worker(&unsupported, &never, WORKER_SCRIPT),
        WorkerOutcome::Skipped
    );
}

#[test]
fn registration_errors_describe_themselves() {
    use alloc::string::ToString;
    let err = RegistrationError::ScriptUnavailable {
        url: String::from("/sw.js"),
    };
    assert_eq!(err.to_string(), "worker script `/sw.js` could not be fetched");
}
