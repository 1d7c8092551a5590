use crate::lightbox::{cycle_index, Direction};

/// Hero carousel position. Loops in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
    len: usize,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) {
        self.step(Direction::Next);
    }

    pub fn previous(&mut self) {
        self.step(Direction::Previous);
    }

    /// Jump to a pagination bullet; out-of-range bullets are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    /// Wheel down advances, wheel up goes back, zero delta is ignored.
    pub fn on_wheel(&mut self, delta_y: f64) {
        if delta_y > 0.0 {
            self.next();
        } else if delta_y < 0.0 {
            self.previous();
        }
    }

    fn step(&mut self, direction: Direction) {
        if let Some(index) = cycle_index(self.index, self.len, direction) {
            self.index = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loops_forward_and_back() {
        let mut carousel = CarouselState::new(3);
        carousel.next();
        carousel.next();
        assert_eq!(carousel.index(), 2);
        carousel.next();
        assert_eq!(carousel.index(), 0);
        carousel.previous();
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn wheel_direction_drives_slides() {
        let mut carousel = CarouselState::new(3);
        carousel.on_wheel(120.0);
        assert_eq!(carousel.index(), 1);
        carousel.on_wheel(-4.0);
        carousel.on_wheel(-4.0);
        assert_eq!(carousel.index(), 2);
        carousel.on_wheel(0.0);
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn go_to_ignores_missing_slides() {
        let mut carousel = CarouselState::new(3);
        carousel.go_to(1);
        carousel.go_to(9);
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn empty_carousel_stays_put() {
        let mut carousel = CarouselState::new(0);
        carousel.next();
        carousel.on_wheel(-1.0);
        assert_eq!(carousel.index(), 0);
        assert!(carousel.is_empty());
    }
}
