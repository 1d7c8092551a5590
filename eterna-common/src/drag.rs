//! Pan limits for the zoomed lightbox image on narrow viewports
//!
//! The image is drawn at [`ZOOM_SCALE`] times its fitted size and centred in
//! its container, so it can travel half its overflow in each direction along
//! an axis. An axis with no overflow has zero travel.

/// Zoom factor applied to the fitted image in the pannable view
pub const ZOOM_SCALE: f64 = 1.5;

/// Width and height in CSS pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn scaled(self, factor: f64) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }

    /// Whether either dimension moved by more than half a pixel
    pub fn differs_from(self, other: Size) -> bool {
        (self.width - other.width).abs() > 0.5 || (self.height - other.height).abs() > 0.5
    }
}

/// Translation of the zoomed image from its centred position
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PanOffset {
    pub x: f64,
    pub y: f64,
}

/// Allowed pan range. `left`/`top` are <= 0 and `right`/`bottom` are >= 0.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragBounds {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl DragBounds {
    /// Bounds for an image whose fitted size is `image`, zoomed by
    /// [`ZOOM_SCALE`], inside `container`.
    pub fn compute(image: Size, container: Size) -> Self {
        let scaled = image.scaled(ZOOM_SCALE);
        let overflow_x = half_overflow(scaled.width, container.width);
        let overflow_y = half_overflow(scaled.height, container.height);
        Self {
            left: -overflow_x,
            right: overflow_x,
            top: -overflow_y,
            bottom: overflow_y,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    pub fn clamp(&self, offset: PanOffset) -> PanOffset {
        PanOffset {
            x: offset.x.clamp(self.left, self.right),
            y: offset.y.clamp(self.top, self.bottom),
        }
    }
}

fn half_overflow(content: f64, container: f64) -> f64 {
    // NaN from unloaded images compares false and falls through to zero
    if content > container {
        (content - container) / 2.0
    } else {
        0.0
    }
}

/// Pointer-driven pan of the zoomed image
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PanState {
    bounds: DragBounds,
    offset: PanOffset,
    /// Pointer position and offset at the start of the current drag
    grab: Option<(PanOffset, PanOffset)>,
}

impl PanState {
    pub fn bounds(&self) -> DragBounds {
        self.bounds
    }

    pub fn offset(&self) -> PanOffset {
        self.offset
    }

    pub fn is_dragging(&self) -> bool {
        self.grab.is_some()
    }

    /// Install freshly measured bounds, pulling the current offset inside them.
    pub fn set_bounds(&mut self, bounds: DragBounds) {
        self.bounds = bounds;
        self.offset = bounds.clamp(self.offset);
    }

    /// Back to centre with no drag in progress; bounds are kept.
    pub fn recenter(&mut self) {
        self.offset = PanOffset::default();
        self.grab = None;
    }

    pub fn begin(&mut self, pointer: PanOffset) {
        self.grab = Some((pointer, self.offset));
    }

    /// Follow the pointer, clamped to the bounds. Ignored when not dragging.
    pub fn update(&mut self, pointer: PanOffset) {
        let Some((start, origin)) = self.grab else {
            return;
        };
        self.offset = self.bounds.clamp(PanOffset {
            x: origin.x + pointer.x - start.x,
            y: origin.y + pointer.y - start.y,
        });
    }

    pub fn end(&mut self) {
        self.grab = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_overflow_means_no_travel() {
        let bounds = DragBounds::compute(Size::new(200.0, 100.0), Size::new(400.0, 300.0));
        assert!(bounds.is_zero());
    }

    #[test]
    fn exact_fit_after_zoom_means_no_travel() {
        let bounds = DragBounds::compute(Size::new(200.0, 100.0), Size::new(300.0, 150.0));
        assert!(bounds.is_zero());
    }

    #[test]
    fn overflow_is_split_evenly() {
        // 400x300 zoomed to 600x450 inside 400x300
        let bounds = DragBounds::compute(Size::new(400.0, 300.0), Size::new(400.0, 300.0));
        assert_eq!(
            bounds,
            DragBounds {
                left: -100.0,
                right: 100.0,
                top: -75.0,
                bottom: 75.0,
            }
        );
    }

    #[test]
    fn axes_clamp_independently() {
        // Wide panorama: overflows horizontally only
        let bounds = DragBounds::compute(Size::new(360.0, 120.0), Size::new(360.0, 640.0));
        assert_eq!(bounds.left, -90.0);
        assert_eq!(bounds.right, 90.0);
        assert_eq!(bounds.top, 0.0);
        assert_eq!(bounds.bottom, 0.0);
    }

    #[test]
    fn unmeasured_image_has_no_travel() {
        let bounds = DragBounds::compute(Size::new(f64::NAN, 0.0), Size::new(360.0, 640.0));
        assert!(bounds.is_zero());
    }

    #[test]
    fn drag_is_clamped_to_bounds() {
        let mut pan = PanState::default();
        pan.set_bounds(DragBounds::compute(
            Size::new(400.0, 300.0),
            Size::new(400.0, 300.0),
        ));
        pan.begin(PanOffset { x: 10.0, y: 10.0 });
        pan.update(PanOffset { x: 60.0, y: -20.0 });
        assert_eq!(pan.offset(), PanOffset { x: 50.0, y: -30.0 });
        pan.update(PanOffset { x: 500.0, y: 500.0 });
        assert_eq!(pan.offset(), PanOffset { x: 100.0, y: 75.0 });
        pan.end();
        assert!(!pan.is_dragging());
    }

    #[test]
    fn second_drag_continues_from_previous_offset() {
        let mut pan = PanState::default();
        pan.set_bounds(DragBounds::compute(
            Size::new(400.0, 300.0),
            Size::new(400.0, 300.0),
        ));
        pan.begin(PanOffset::default());
        pan.update(PanOffset { x: 30.0, y: 0.0 });
        pan.end();
        pan.begin(PanOffset { x: 200.0, y: 200.0 });
        pan.update(PanOffset { x: 220.0, y: 210.0 });
        assert_eq!(pan.offset(), PanOffset { x: 50.0, y: 10.0 });
    }

    #[test]
    fn update_without_grab_is_ignored() {
        let mut pan = PanState::default();
        pan.update(PanOffset { x: 30.0, y: 30.0 });
        assert_eq!(pan.offset(), PanOffset::default());
    }

    #[test]
    fn shrinking_bounds_pull_offset_back_in() {
        let mut pan = PanState::default();
        pan.set_bounds(DragBounds::compute(
            Size::new(400.0, 300.0),
            Size::new(400.0, 300.0),
        ));
        pan.begin(PanOffset::default());
        pan.update(PanOffset { x: 100.0, y: 75.0 });
        pan.end();
        pan.set_bounds(DragBounds::compute(
            Size::new(400.0, 300.0),
            Size::new(500.0, 400.0),
        ));
        assert_eq!(pan.offset(), PanOffset { x: 50.0, y: 25.0 });
        pan.recenter();
        assert_eq!(pan.offset(), PanOffset::default());
    }

    #[test]
    fn height_only_resize_counts_as_a_change() {
        let before = Size::new(390.0, 844.0);
        assert!(Size::new(390.0, 664.0).differs_from(before));
        assert!(Size::new(412.0, 844.0).differs_from(before));
        assert!(!Size::new(390.2, 844.4).differs_from(before));
    }

    #[test]
    fn shorter_viewport_widens_vertical_travel() {
        let image = Size::new(390.0, 520.0);
        let tall = DragBounds::compute(image, Size::new(390.0, 0.8 * 844.0));
        let short = DragBounds::compute(image, Size::new(390.0, 0.8 * 664.0));
        assert_eq!(tall.left, short.left);
        assert!(short.bottom > tall.bottom);
        assert_eq!(short.top, -short.bottom);
    }
}
