use crate::carousel::Carousel;
use crate::geometry::{GeometryError, PageSet, ViewportMetrics};
use crate::render::RenderSink;
use swiper_animation::Transition;
use swiper_core::RuntimeHandle;
use swiper_foundation::gesture_constants::TRANSITION_MS;

/// What happens to a page-change notification that is still waiting for its
/// transition when the user touches the carousel again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationPolicy {
    /// The notification fires anyway, with the index captured when it was
    /// scheduled.
    #[default]
    FireAndForget,
    /// A new accepted contact or a programmatic jump cancels it.
    CancelOnNewGesture,
}

/// Construction options for a [`Carousel`].
///
/// # Example
///
/// ```
/// use swiper_ui::{CarouselOptions, Runtime, RenderSink, Transition};
///
/// struct Log;
///
/// impl RenderSink for Log {
///     fn clear_transition(&mut self) {}
///     fn apply_offset(&mut self, offset_px: f32, _transition: Option<Transition>) {
///         println!("translate {offset_px}px");
///     }
/// }
///
/// let runtime = Runtime::with_system_clock();
/// let carousel = CarouselOptions::new(360.0, 4)
///     .with_initial_index(1)
///     .on_horizontal_change(|index| println!("now on page {index}"))
///     .build(runtime.handle(), Log)
///     .expect("valid geometry");
/// assert_eq!(carousel.visual_offset(), -360.0);
/// ```
pub struct CarouselOptions {
    pub(crate) width: f32,
    pub(crate) page_count: usize,
    pub(crate) initial_index: usize,
    pub(crate) transition: Transition,
    pub(crate) notification_policy: NotificationPolicy,
    pub(crate) on_horizontal_change: Box<dyn FnMut(usize)>,
    pub(crate) on_vertical_intent: Box<dyn FnMut(u8)>,
}

impl CarouselOptions {
    pub fn new(width: f32, page_count: usize) -> Self {
        Self {
            width,
            page_count,
            initial_index: 0,
            transition: Transition::ease_out(TRANSITION_MS),
            notification_policy: NotificationPolicy::default(),
            on_horizontal_change: Box::new(|_| {}),
            on_vertical_intent: Box::new(|_| {}),
        }
    }

    pub fn with_initial_index(mut self, index: usize) -> Self {
        self.initial_index = index;
        self
    }

    /// Settle transition. Its duration is also the notification delay.
    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = transition;
        self
    }

    pub fn with_notification_policy(mut self, policy: NotificationPolicy) -> Self {
        self.notification_policy = policy;
        self
    }

    /// Called with the new page index once a committed swipe has settled.
    pub fn on_horizontal_change(mut self, callback: impl FnMut(usize) + 'static) -> Self {
        self.on_horizontal_change = Box::new(callback);
        self
    }

    /// Called on every vertical sample of a vertically locked gesture with
    /// the direction code, 1 for up and 2 for down.
    pub fn on_vertical_intent(mut self, callback: impl FnMut(u8) + 'static) -> Self {
        self.on_vertical_intent = Box::new(callback);
        self
    }

    /// Validates the geometry and positions `sink` on the initial page.
    pub fn build<S: RenderSink>(
        self,
        runtime: RuntimeHandle,
        sink: S,
    ) -> Result<Carousel<S>, GeometryError> {
        let metrics = ViewportMetrics::new(self.width)?;
        let pages = PageSet::new(self.page_count)?;
        if !pages.contains(self.initial_index) {
            return Err(GeometryError::InitialIndexOutOfRange {
                index: self.initial_index,
                page_count: self.page_count,
            });
        }
        Ok(Carousel::new(runtime, sink, metrics, pages, self))
    }
}

impl std::fmt::Debug for CarouselOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("width", &self.width)
            .field("page_count", &self.page_count)
            .field("initial_index", &self.initial_index)
            .field("transition", &self.transition)
            .field("notification_policy", &self.notification_policy)
            .finish_non_exhaustive()
    }
}
