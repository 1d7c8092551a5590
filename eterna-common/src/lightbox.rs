//! Lightbox selection state
//!
//! The lightbox never owns image data. Callers hand it their own list on every
//! render and it only remembers which entry is open. Closed is `None`; there is
//! no sentinel index.

use crate::gallery::GalleryImage;

/// Direction of a previous/next step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Step `current` one place in `direction`, wrapping at both ends.
///
/// Returns `None` for an empty list. An out-of-range `current` is treated as
/// the nearest end before stepping.
pub fn cycle_index(current: usize, len: usize, direction: Direction) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let current = current.min(len - 1);
    Some(match direction {
        Direction::Previous if current == 0 => len - 1,
        Direction::Previous => current - 1,
        Direction::Next if current == len - 1 => 0,
        Direction::Next => current + 1,
    })
}

/// Which image, if any, the lightbox is showing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LightboxState {
    selected: Option<usize>,
}

impl From<Option<usize>> for LightboxState {
    fn from(selected: Option<usize>) -> Self {
        Self { selected }
    }
}

impl LightboxState {
    pub fn closed() -> Self {
        Self::default()
    }

    /// Open at `index`. Bounds are the caller's responsibility; an index that
    /// resolves to nothing simply renders nothing.
    pub fn open(&mut self, index: usize) {
        self.selected = Some(index);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    /// Jump straight to `index` (no-op while closed)
    pub fn navigate(&mut self, index: usize) {
        if self.selected.is_some() {
            self.selected = Some(index);
        }
    }

    /// Cyclic previous/next over a list of `len` images. Returns the new
    /// index, or `None` when closed or the list is empty.
    pub fn step(&mut self, direction: Direction, len: usize) -> Option<usize> {
        let next = cycle_index(self.selected?, len, direction)?;
        self.selected = Some(next);
        Some(next)
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// The open image within `images`, or `None` if closed or the index does
    /// not resolve.
    pub fn resolve<'a>(&self, images: &'a [GalleryImage]) -> Option<(usize, &'a GalleryImage)> {
        let index = self.selected?;
        images.get(index).map(|image| (index, image))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(n: usize) -> Vec<GalleryImage> {
        (0..n)
            .map(|i| GalleryImage::new(format!("/img/{i}.png"), format!("Image {i}")))
            .collect()
    }

    #[test]
    fn starts_closed() {
        let state = LightboxState::default();
        assert_eq!(state.selected(), None);
        assert!(!state.is_open());
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let mut state = LightboxState::closed();
        state.open(0);
        assert_eq!(state.step(Direction::Previous, 5), Some(4));
    }

    #[test]
    fn next_from_last_wraps_to_first() {
        let mut state = LightboxState::closed();
        state.open(4);
        assert_eq!(state.step(Direction::Next, 5), Some(0));
    }

    #[test]
    fn steps_in_the_middle() {
        let mut state = LightboxState::closed();
        state.open(2);
        assert_eq!(state.step(Direction::Next, 5), Some(3));
        assert_eq!(state.step(Direction::Previous, 5), Some(2));
        assert_eq!(state.step(Direction::Previous, 5), Some(1));
    }

    #[test]
    fn single_image_cycles_onto_itself() {
        assert_eq!(cycle_index(0, 1, Direction::Next), Some(0));
        assert_eq!(cycle_index(0, 1, Direction::Previous), Some(0));
    }

    #[test]
    fn step_while_closed_does_nothing() {
        let mut state = LightboxState::closed();
        assert_eq!(state.step(Direction::Next, 3), None);
        assert!(!state.is_open());
    }

    #[test]
    fn open_then_close_is_closed_for_any_index() {
        for index in [0, 1, 7, usize::MAX] {
            let mut state = LightboxState::closed();
            state.open(index);
            state.close();
            assert_eq!(state, LightboxState::closed());
        }
    }

    #[test]
    fn navigate_only_moves_an_open_lightbox() {
        let mut state = LightboxState::closed();
        state.navigate(3);
        assert_eq!(state.selected(), None);
        state.open(1);
        state.navigate(3);
        assert_eq!(state.selected(), Some(3));
    }

    #[test]
    fn empty_list_resolves_to_nothing() {
        let mut state = LightboxState::closed();
        state.open(0);
        assert!(state.resolve(&[]).is_none());
        state.open(42);
        assert!(state.resolve(&[]).is_none());
    }

    #[test]
    fn out_of_range_index_resolves_to_nothing() {
        let list = images(3);
        let mut state = LightboxState::closed();
        state.open(3);
        assert!(state.resolve(&list).is_none());
        state.open(2);
        let (index, image) = state.resolve(&list).unwrap();
        assert_eq!(index, 2);
        assert_eq!(image.title, "Image 2");
    }
}
