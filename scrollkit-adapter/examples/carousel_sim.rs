use scrollkit::RegionOptions;
use scrollkit_adapter::testing::FakeDom;
use scrollkit_adapter::{AnchorNavigator, CarouselController, ClickEvent, PointerEvent};

fn main() {
    // Example: drive one carousel and a same-page link over the in-memory DOM.
    //
    // A real host would:
    // - forward clicks on the controls and container scroll events to the controller
    // - forward mouse down/move/up over the container to the pointer handlers
    // - forward document clicks to the anchor navigator
    let dom = FakeDom::new();
    let body = dom.body();
    let link = body.child("a").with_attr("href", "#work");
    let section = body.child("section").with_id("work");
    let container = section
        .child("div")
        .with_class("portfolio-scroll")
        .with_scroll_size(2100.0, 1000.0)
        .with_offset_left(40.0);
    let nav = section.child("div").with_class("portfolio-nav");
    nav.child("button").with_class("nav-prev");
    nav.child("button").with_class("nav-next");

    let mut carousel = CarouselController::mount(&dom, &RegionOptions::portfolio())
        .expect("portfolio markup is complete");
    println!("mounted: {:?}", carousel.state());

    // Next button: one smooth step, then the host reports the scroll.
    carousel.on_next_click();
    carousel.on_scroll();
    println!(
        "after next: left={} progress={:?}",
        container.scroll_left(),
        container.style("--scroll-percentage")
    );

    // Drag 100px to the left: the strip moves twice as far.
    carousel.on_pointer_down(&PointerEvent::new(340.0));
    let mut moved = PointerEvent::new(240.0);
    carousel.on_pointer_move(&mut moved);
    carousel.on_pointer_up();
    carousel.on_scroll();
    println!(
        "after drag: left={} nav={:?}",
        container.scroll_left(),
        carousel.nav_state()
    );

    let mut click = ClickEvent::new(link);
    let reached = AnchorNavigator::new().on_click(&dom, &dom, &mut click);
    println!(
        "anchor: reached={} history={:?}",
        reached.is_some(),
        dom.history()
    );
}
