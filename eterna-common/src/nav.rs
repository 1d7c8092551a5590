//! Floating section navigation

/// A page section reachable from the floating nav
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSection {
    /// DOM id of the section element
    pub id: &'static str,
    /// Single letter shown on the nav button
    pub initial: &'static str,
}

pub const NAV_SECTIONS: &[NavSection] = &[
    NavSection {
        id: "home",
        initial: "H",
    },
    NavSection {
        id: "amenities",
        initial: "A",
    },
    NavSection {
        id: "views",
        initial: "V",
    },
    NavSection {
        id: "availability",
        initial: "A",
    },
    NavSection {
        id: "residences",
        initial: "R",
    },
    NavSection {
        id: "contact",
        initial: "C",
    },
];

/// Minimum visible ratio for a section to become active
pub const ACTIVE_RATIO: f64 = 0.2;

/// One intersection observer entry, reduced to what nav selection needs
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionSample {
    pub id: String,
    pub is_intersecting: bool,
    pub ratio: f64,
}

/// Active section after a batch of entries. Later qualifying entries win, and
/// the current section is kept when nothing qualifies.
pub fn next_active_section<'a>(
    current: &'a str,
    entries: &'a [IntersectionSample],
) -> &'a str {
    entries
        .iter()
        .filter(|entry| entry.is_intersecting && entry.ratio >= ACTIVE_RATIO)
        .map(|entry| entry.id.as_str())
        .last()
        .unwrap_or(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: &str, is_intersecting: bool, ratio: f64) -> IntersectionSample {
        IntersectionSample {
            id: id.to_string(),
            is_intersecting,
            ratio,
        }
    }

    #[test]
    fn keeps_current_when_nothing_qualifies() {
        let entries = vec![sample("views", true, 0.1), sample("amenities", false, 0.6)];
        assert_eq!(next_active_section("home", &entries), "home");
    }

    #[test]
    fn threshold_is_inclusive() {
        let entries = vec![sample("views", true, 0.2)];
        assert_eq!(next_active_section("home", &entries), "views");
    }

    #[test]
    fn last_qualifying_entry_wins() {
        let entries = vec![
            sample("amenities", true, 0.8),
            sample("views", true, 0.5),
            sample("availability", true, 0.05),
        ];
        assert_eq!(next_active_section("home", &entries), "views");
    }

    #[test]
    fn section_ids_are_unique() {
        for (i, a) in NAV_SECTIONS.iter().enumerate() {
            for b in &NAV_SECTIONS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
