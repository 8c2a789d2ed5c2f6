use alloc::string::String;
use alloc::vec::Vec;

use scrollkit::Bounds;
use scrollkit_adapter::{
    AnchorNavigator, CarouselController, ClickEvent, Document, Element, Environment,
    History, IntersectionEntry, KeyAction, KeyEvent, KeyboardRouter, PointerEvent,
    RevealAnimator, SkipLink, WorkerOutcome, WorkerRegistrar, apply_motion_preference,
    mark_scrollable_region, register_offline_worker,
};

use crate::PageOptions;

/// The assembled page.
///
/// Each component owns only the elements it drives. Event handlers route by element: the
/// carousel whose container (or control) contains the event target handles pointer, scroll and
/// button events; everything else goes to the document-level components.
#[derive(Clone, Debug)]
pub struct Page<E> {
    carousels: Vec<CarouselController<E>>,
    keyboard: KeyboardRouter,
    reveal: RevealAnimator<E>,
    anchors: AnchorNavigator,
    skip_link: Option<SkipLink<E>>,
    worker_script: String,
}

impl<E: Element> Page<E> {
    pub fn mount<D, Env>(doc: &D, env: &Env, options: &PageOptions) -> Self
    where
        D: Document<Element = E>,
        Env: Environment,
    {
        for region in &options.regions {
            for container in doc.query_selector_all(&region.container) {
                mark_scrollable_region(&container);
            }
        }

        let carousels: Vec<_> = options
            .regions
            .iter()
            .filter_map(|region| CarouselController::mount(doc, region))
            .collect();
        let keyboard = KeyboardRouter::new(options.regions.iter().map(|r| r.container.as_str()))
            .with_step(options.keyboard_step);
        let reveal = RevealAnimator::mount(doc, options.reveal.clone());
        let skip_link = SkipLink::mount(doc, &options.skip_link, &options.main);
        apply_motion_preference(&doc.root(), env);

        kdebug!(
            carousels = carousels.len(),
            sections = reveal.pending(),
            skip_link = skip_link.is_some(),
            "page mounted"
        );

        Self {
            carousels,
            keyboard,
            reveal,
            anchors: AnchorNavigator::new(),
            skip_link,
            worker_script: options.worker_script.clone(),
        }
    }

    /// Carousels that resolved completely, in configuration order.
    pub fn carousels(&self) -> &[CarouselController<E>] {
        &self.carousels
    }

    /// The carousel whose container contains `element`.
    pub fn carousel(&self, element: &E) -> Option<&CarouselController<E>> {
        self.carousels
            .iter()
            .find(|c| c.container().contains(element))
    }

    pub fn reveal(&self) -> &RevealAnimator<E> {
        &self.reveal
    }

    pub fn skip_link(&self) -> Option<&SkipLink<E>> {
        self.skip_link.as_ref()
    }

    /// Document-level click handling.
    ///
    /// Carousel controls, the skip link and same-page links are handled in that order. Returns
    /// the element reached through anchor navigation, if any.
    pub fn on_click<D, H>(&mut self, doc: &D, history: &H, event: &mut ClickEvent<E>) -> Option<E>
    where
        D: Document<Element = E>,
        H: History,
    {
        for carousel in &mut self.carousels {
            if carousel.prev_control().contains(&event.target) {
                carousel.on_prev_click();
                break;
            }
            if carousel.next_control().contains(&event.target) {
                carousel.on_next_click();
                break;
            }
        }
        if let Some(skip_link) = &mut self.skip_link {
            skip_link.on_click(event);
        }
        self.anchors.on_click(doc, history, event)
    }

    pub fn on_keydown(&self, focused: Option<&E>, event: &mut KeyEvent) -> KeyAction {
        self.keyboard.on_keydown(focused, event)
    }

    /// Scroll events do not bubble: `target` must be the container itself.
    pub fn on_scroll(&mut self, target: &E) -> bool {
        let Some(carousel) = self
            .carousels
            .iter_mut()
            .find(|c| c.container().is_same_node(target))
        else {
            return false;
        };
        carousel.on_scroll();
        true
    }

    pub fn on_pointer_down(&mut self, target: &E, event: &PointerEvent) -> bool {
        let Some(carousel) = self.carousel_mut(target) else {
            return false;
        };
        carousel.on_pointer_down(event);
        true
    }

    pub fn on_pointer_move(&mut self, target: &E, event: &mut PointerEvent) -> bool {
        self.carousel_mut(target)
            .is_some_and(|carousel| carousel.on_pointer_move(event))
    }

    pub fn on_pointer_up(&mut self, target: &E) -> bool {
        let Some(carousel) = self.carousel_mut(target) else {
            return false;
        };
        carousel.on_pointer_up();
        true
    }

    pub fn on_pointer_leave(&mut self, target: &E) -> bool {
        let Some(carousel) = self.carousel_mut(target) else {
            return false;
        };
        carousel.on_pointer_leave();
        true
    }

    /// Returns the sections revealed by this batch; the host should stop observing them.
    pub fn on_intersections(&mut self, entries: &[IntersectionEntry<E>]) -> Vec<E> {
        self.reveal.on_intersections(entries)
    }

    pub fn check_viewport(&mut self, viewport: Bounds) -> Vec<E> {
        self.reveal.check_viewport(viewport)
    }

    pub fn on_blur(&mut self, target: &E) -> bool {
        self.skip_link
            .as_mut()
            .is_some_and(|skip_link| skip_link.on_blur(target))
    }

    /// Opportunistically registers the offline worker. The outcome is informational only.
    pub fn register_worker<Env, R>(&self, env: &Env, registrar: &R) -> WorkerOutcome
    where
        Env: Environment,
        R: WorkerRegistrar,
    {
        let outcome = register_offline_worker(env, registrar, &self.worker_script);
        ktrace!(?outcome, "worker registration finished");
        outcome
    }

    fn carousel_mut(&mut self, element: &E) -> Option<&mut CarouselController<E>> {
        self.carousels
            .iter_mut()
            .find(|c| c.container().contains(element))
    }
}
