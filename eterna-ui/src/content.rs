//! Static page copy and image lists

use crate::style::{StoryAlign, TileSpan};
use eterna_common::GalleryImage;

const MOUNTAIN: &str = "https://images.unsplash.com/photo-1469474968028-56623f02e42e";
const OCEAN: &str = "https://images.unsplash.com/photo-1447684808650-354ae64db5b8";
const FOREST: &str = "https://images.unsplash.com/photo-1470071459604-3b5ec3a7fe05";
const PATH: &str = "https://images.unsplash.com/photo-1441974231531-c6227db76b6e";
const LAKE: &str = "https://images.unsplash.com/photo-1472214103451-9374bd1c798e";

/// Hero carousel slide
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeroSlide {
    pub url: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub location: &'static str,
}

pub const HERO_SLIDES: &[HeroSlide] = &[
    HeroSlide {
        url: MOUNTAIN,
        title: "Above the Skyline",
        description: "Forty floors of light over The Gulch",
        location: "1201 Demonbreun Street",
    },
    HeroSlide {
        url: OCEAN,
        title: "Quiet Horizons",
        description: "Where the river meets the endless horizon",
        location: "Cumberland River",
    },
    HeroSlide {
        url: FOREST,
        title: "Green Retreat",
        description: "Light filtering through the rooftop gardens",
        location: "Sky Garden, Level 41",
    },
];

/// Amenities masonry tile
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AmenityTile {
    pub url: &'static str,
    pub title: &'static str,
    pub span: TileSpan,
}

pub const AMENITY_TILES: &[AmenityTile] = &[
    AmenityTile {
        url: MOUNTAIN,
        title: "Infinity Pool",
        span: TileSpan::Large,
    },
    AmenityTile {
        url: OCEAN,
        title: "Residents' Lounge",
        span: TileSpan::Small,
    },
    AmenityTile {
        url: FOREST,
        title: "Sky Garden",
        span: TileSpan::Medium,
    },
    AmenityTile {
        url: PATH,
        title: "Wellness Spa",
        span: TileSpan::Large,
    },
    AmenityTile {
        url: LAKE,
        title: "Fitness Studio",
        span: TileSpan::Medium,
    },
    AmenityTile {
        url: MOUNTAIN,
        title: "Private Cinema",
        span: TileSpan::Small,
    },
];

/// Split-screen panel in the views section
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewPanel {
    pub url: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const VIEW_PANELS: &[ViewPanel] = &[
    ViewPanel {
        url: LAKE,
        title: "See",
        description: "See Nashville like never before from the heights of Eterna Tower Nashville",
    },
    ViewPanel {
        url: OCEAN,
        title: "Through Our",
        description: "With panoramic windows in each residence, enjoy spectacular views that encompass the city's main points of interest, the Cumberland River and beyond",
    },
    ViewPanel {
        url: PATH,
        title: "View",
        description: "This skyscraper redefines perspectives, making every sunrise and sunset a unique experience",
    },
];

/// Residence story tile
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Story {
    pub url: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub align: StoryAlign,
}

pub const STORIES: &[Story] = &[
    Story {
        url: MOUNTAIN,
        title: "The Art of Living",
        description: "Every residence is composed around light: floor-to-ceiling glass, open plans and finishes chosen to age beautifully.",
        align: StoryAlign::ImageLeft,
    },
    Story {
        url: OCEAN,
        title: "Behind the Design",
        description: "Architects and interior designers worked side by side so that each floor plan frames the city as part of the home.",
        align: StoryAlign::ImageRight,
    },
];

/// Card in the overlapping residences stack
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResidenceLayer {
    pub url: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

pub const RESIDENCE_LAYERS: &[ResidenceLayer] = &[
    ResidenceLayer {
        url: MOUNTAIN,
        title: "Penthouse Collection",
        text: "Full-floor residences crowning the tower",
    },
    ResidenceLayer {
        url: OCEAN,
        title: "Sky Residences",
        text: "Three and four bedrooms above the fortieth floor",
    },
    ResidenceLayer {
        url: FOREST,
        title: "City Residences",
        text: "Considered layouts close to the heart of The Gulch",
    },
];

pub fn amenity_images() -> Vec<GalleryImage> {
    AMENITY_TILES
        .iter()
        .map(|tile| GalleryImage::new(tile.url, tile.title))
        .collect()
}

pub fn view_images() -> Vec<GalleryImage> {
    VIEW_PANELS
        .iter()
        .map(|panel| GalleryImage::new(panel.url, panel.title).with_description(panel.description))
        .collect()
}

pub fn story_images() -> Vec<GalleryImage> {
    STORIES
        .iter()
        .map(|story| GalleryImage::new(story.url, story.title).with_description(story.description))
        .collect()
}

pub fn residence_images() -> Vec<GalleryImage> {
    RESIDENCE_LAYERS
        .iter()
        .map(|layer| GalleryImage::new(layer.url, layer.title).with_description(layer.text))
        .collect()
}

/// Contact details shown beside the form
pub const CONTACT_PHONE: &str = "+34 620 744 137";
pub const CONTACT_EMAIL: &str = "info@blacknavyrealstate.com";
pub const CONTACT_ADDRESS: &str = "1201 Demonbreun Street, Nashville";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallery_lists_match_their_sections() {
        assert_eq!(amenity_images().len(), AMENITY_TILES.len());
        assert_eq!(view_images().len(), VIEW_PANELS.len());
        assert_eq!(story_images().len(), STORIES.len());
        assert_eq!(residence_images().len(), RESIDENCE_LAYERS.len());
        assert!(amenity_images().iter().all(|img| img.description.is_none()));
        assert!(view_images().iter().all(|img| img.description.is_some()));
    }
}
