/// Scroll surface observed by the tracker: readable offset and widths, plus
/// a fire-and-forget smooth scroll-by in the scroll axis.
pub trait ScrollContainer {
    fn scroll_offset(&self) -> f64;

    /// Visible width of the container
    fn client_width(&self) -> f64;

    /// Total scrollable width of the content
    fn scroll_width(&self) -> f64;

    /// Animated scroll by `delta`. No completion callback; boundary flags
    /// catch up as the animation emits scroll notifications.
    fn scroll_by(&mut self, delta: f64);
}

/// Tracks whether a horizontally scrolled container sits at either boundary
/// and pages it by one viewport at a time.
///
/// This is a live projection of scroll position, not a state machine: the
/// two flags recompute on attach and on every scroll notification. All
/// operations are no-ops while no container is attached.
#[derive(Debug)]
pub struct SnapSlider<C: ScrollContainer> {
    container: Option<C>,
    is_at_start: bool,
    is_at_end: bool,
}

impl<C: ScrollContainer> SnapSlider<C> {
    pub fn new() -> Self {
        Self {
            container: None,
            is_at_start: true,
            is_at_end: false,
        }
    }

    /// Observe `container`, releasing any previously observed one (returned
    /// to the caller). Boundary flags are computed immediately so they are
    /// correct before the first scroll.
    pub fn attach(&mut self, container: C) -> Option<C> {
        let previous = self.container.replace(container);
        self.recompute();
        previous
    }

    /// Stop observing and hand the container back.
    pub fn detach(&mut self) -> Option<C> {
        self.container.take()
    }

    pub fn is_attached(&self) -> bool {
        self.container.is_some()
    }

    pub fn container(&self) -> Option<&C> {
        self.container.as_ref()
    }

    pub fn container_mut(&mut self) -> Option<&mut C> {
        self.container.as_mut()
    }

    pub fn is_at_start(&self) -> bool {
        self.is_at_start
    }

    pub fn is_at_end(&self) -> bool {
        self.is_at_end
    }

    /// Scroll notification from the observed container.
    pub fn on_scroll(&mut self) {
        self.recompute();
    }

    fn recompute(&mut self) {
        let Some(container) = &self.container else {
            return;
        };
        self.is_at_start = container.scroll_offset() <= 0.0;
        // Ceil tolerates sub-pixel accumulation at the far edge
        self.is_at_end = (container.scroll_offset() + container.client_width()).ceil()
            >= container.scroll_width();
    }

    /// Smooth-scroll forward by exactly one viewport width.
    pub fn scroll_to_next_slide(&mut self) {
        if let Some(container) = &mut self.container {
            let width = container.client_width();
            container.scroll_by(width);
        }
    }

    /// Smooth-scroll back by exactly one viewport width.
    pub fn scroll_to_prev_slide(&mut self) {
        if let Some(container) = &mut self.container {
            let width = container.client_width();
            container.scroll_by(-width);
        }
    }
}

impl<C: ScrollContainer> Default for SnapSlider<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tracker_tests.rs"]
mod tracker_tests;
