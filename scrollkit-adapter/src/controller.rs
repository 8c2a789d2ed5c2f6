use alloc::format;
use alloc::string::String;

use scrollkit::{
    Cursor, DragSession, NavState, PROGRESS_PROPERTY, RegionOptions, RegionState,
    ScrollBehavior, ScrollDirection, control_opacity, progress_css_value,
};

use crate::{Document, Element, PointerEvent};

/// Drives one horizontal carousel: a scrollable container plus previous/next controls.
///
/// This type holds element handles but registers nothing. The host forwards:
/// - clicks on the controls to `on_prev_click` / `on_next_click`
/// - container scroll events to `on_scroll`
/// - mouse down/move/up/leave over the container to the `on_pointer_*` handlers
///
/// A region whose container or controls are missing is never constructed (see
/// [`CarouselController::mount`]), so an incomplete region has no behavior at all.
#[derive(Clone, Debug)]
pub struct CarouselController<E> {
    container: E,
    prev: E,
    next: E,
    step: f64,
    nav: NavState,
    drag: DragSession,
}

impl<E: Element> CarouselController<E> {
    /// Resolves the region's selectors in `doc` and binds them.
    ///
    /// Returns `None` when any of the three elements is absent.
    pub fn mount<D>(doc: &D, options: &RegionOptions) -> Option<Self>
    where
        D: Document<Element = E>,
    {
        let container = doc.query_selector(&options.container);
        let prev = doc.query_selector(&options.prev);
        let next = doc.query_selector(&options.next);
        match (container, prev, next) {
            (Some(container), Some(prev), Some(next)) => {
                Some(Self::bind(container, prev, next, options))
            }
            _ => {
                kdebug!(region = %options.container, "scroll region left inert: missing element");
                None
            }
        }
    }

    /// Binds already resolved elements and initializes control state and progress.
    pub fn bind(container: E, prev: E, next: E, options: &RegionOptions) -> Self {
        let mut c = Self {
            container,
            prev,
            next,
            step: options.step,
            nav: NavState::default(),
            drag: DragSession::default(),
        };
        c.set_cursor(Cursor::Grab);
        c.refresh();
        kdebug!(region = %options.container, step = options.step, "scroll region bound");
        c
    }

    pub fn container(&self) -> &E {
        &self.container
    }

    pub fn prev_control(&self) -> &E {
        &self.prev
    }

    pub fn next_control(&self) -> &E {
        &self.next
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn nav_state(&self) -> NavState {
        self.nav
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    /// Returns a snapshot of the region as currently reported by the container.
    pub fn state(&self) -> RegionState {
        RegionState::capture(self.container.scroll_metrics(), &self.drag)
    }

    pub fn on_prev_click(&mut self) -> bool {
        self.activate(ScrollDirection::Backward)
    }

    pub fn on_next_click(&mut self) -> bool {
        self.activate(ScrollDirection::Forward)
    }

    /// Smooth-scrolls one step in `direction`, unless that control is disabled.
    ///
    /// Returns whether a scroll was requested.
    pub fn activate(&mut self, direction: ScrollDirection) -> bool {
        if self.nav.is_disabled(direction) {
            ktrace!(?direction, "ignored activation of disabled control");
            return false;
        }
        self.container
            .scroll_by(direction.delta(self.step), ScrollBehavior::Smooth);
        true
    }

    pub fn on_scroll(&mut self) {
        self.refresh();
    }

    /// Recomputes control state and publishes scroll progress.
    pub fn refresh(&mut self) -> RegionState {
        let state = self.state();
        self.nav = state.nav;

        self.prev.set_disabled(state.nav.prev_disabled);
        self.next.set_disabled(state.nav.next_disabled);
        self.prev
            .set_style_property("opacity", &opacity_css(state.nav.prev_disabled));
        self.next
            .set_style_property("opacity", &opacity_css(state.nav.next_disabled));

        self.container
            .set_style_property(PROGRESS_PROPERTY, &progress_css_value(state.progress));

        ktrace!(
            scroll_left = state.metrics.scroll_left,
            progress = state.progress,
            prev_disabled = state.nav.prev_disabled,
            next_disabled = state.nav.next_disabled,
            "refresh"
        );
        state
    }

    pub fn on_pointer_down(&mut self, event: &PointerEvent) {
        let x = self.local_x(event);
        let scroll_left = self.container.scroll_metrics().scroll_left;
        self.drag.begin(x, scroll_left);
        self.set_cursor(Cursor::Grabbing);
    }

    /// Scrolls with the pointer while a drag is active.
    ///
    /// Suppresses the host's default drag/selection behavior for handled moves.
    pub fn on_pointer_move(&mut self, event: &mut PointerEvent) -> bool {
        let x = self.local_x(event);
        let Some(scroll_left) = self.drag.drag_to(x) else {
            return false;
        };
        event.prevent_default();
        self.container.set_scroll_left(scroll_left);
        true
    }

    pub fn on_pointer_up(&mut self) {
        self.end_drag();
    }

    pub fn on_pointer_leave(&mut self) {
        self.end_drag();
    }

    fn end_drag(&mut self) {
        self.drag.end();
        self.set_cursor(Cursor::Grab);
    }

    fn local_x(&self, event: &PointerEvent) -> f64 {
        event.page_x - self.container.offset_left()
    }

    fn set_cursor(&self, cursor: Cursor) {
        self.container.set_style_property("cursor", cursor.as_css());
    }
}

fn opacity_css(disabled: bool) -> String {
    format!("{}", control_opacity(disabled))
}
