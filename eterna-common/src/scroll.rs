//! Scroll-linked fades for the split-screen section

/// How far the page has scrolled through a tall container, from 0.0 when its
/// top reaches the top of the viewport to 1.0 when its bottom reaches the
/// bottom of the viewport.
///
/// `top` is the container's bounding-rect top (negative once scrolled past).
pub fn scroll_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    let travel = height - viewport_height;
    if travel.is_nan() || travel <= 0.0 {
        return if top <= 0.0 { 1.0 } else { 0.0 };
    }
    (-top / travel).clamp(0.0, 1.0)
}

/// Opacity of panel `index` out of `count`: ramps 0 -> 1 across its own slice
/// `[index / count, (index + 1) / count]` of the progress range.
pub fn panel_opacity(progress: f64, index: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let count = count as f64;
    let start = index as f64 / count;
    ((progress - start) * count).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_runs_over_the_scrollable_travel() {
        // 300vh container in a 1000px viewport has 2000px of travel
        assert_eq!(scroll_progress(200.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(-1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(-2000.0, 3000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(-2600.0, 3000.0, 1000.0), 1.0);
    }

    #[test]
    fn container_shorter_than_viewport_jumps() {
        assert_eq!(scroll_progress(10.0, 500.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(-10.0, 500.0, 1000.0), 1.0);
    }

    #[test]
    fn panels_fade_in_one_after_another() {
        assert_eq!(panel_opacity(0.0, 0, 3), 0.0);
        assert!((panel_opacity(1.0 / 6.0, 0, 3) - 0.5).abs() < 1e-9);
        assert_eq!(panel_opacity(1.0 / 3.0, 0, 3), 1.0);
        assert_eq!(panel_opacity(1.0 / 3.0, 1, 3), 0.0);
        assert!((panel_opacity(0.5, 1, 3) - 0.5).abs() < 1e-9);
        assert_eq!(panel_opacity(0.5, 2, 3), 0.0);
        assert_eq!(panel_opacity(1.0, 2, 3), 1.0);
    }

    #[test]
    fn no_panels_no_opacity() {
        assert_eq!(panel_opacity(0.5, 0, 0), 0.0);
    }
}
