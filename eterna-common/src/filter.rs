//! Availability listing filters
//!
//! Each active toggle adds one predicate; a unit is shown only when it
//! satisfies every active predicate. Filtering is a pure function of the full
//! listing and the current [`FilterState`], so results always keep listing
//! order.

use crate::unit::Unit;

/// One of the four listing toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKey {
    Penthouse,
    HighFloor,
    ThreeBedsPlus,
    Available,
}

impl FilterKey {
    /// Toggles in the order they appear above the listing
    pub const ALL: [FilterKey; 4] = [
        FilterKey::Penthouse,
        FilterKey::HighFloor,
        FilterKey::ThreeBedsPlus,
        FilterKey::Available,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FilterKey::Penthouse => "Penthouse",
            FilterKey::HighFloor => "High Floor",
            FilterKey::ThreeBedsPlus => "3+ Bedrooms",
            FilterKey::Available => "Available Now",
        }
    }

    /// Whether `unit` passes this predicate when the toggle is on
    pub fn accepts(self, unit: &Unit) -> bool {
        match self {
            FilterKey::Penthouse => unit.is_penthouse,
            FilterKey::HighFloor => unit.is_high_floor,
            FilterKey::ThreeBedsPlus => unit.bedrooms >= 3,
            FilterKey::Available => unit.available,
        }
    }
}

/// Active listing filters. The default has every toggle off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterState {
    pub penthouse: bool,
    pub high_floor: bool,
    pub three_beds_plus: bool,
    pub available: bool,
}

impl FilterState {
    pub fn is_active(&self, key: FilterKey) -> bool {
        match key {
            FilterKey::Penthouse => self.penthouse,
            FilterKey::HighFloor => self.high_floor,
            FilterKey::ThreeBedsPlus => self.three_beds_plus,
            FilterKey::Available => self.available,
        }
    }

    /// Flip exactly one toggle, leaving the others untouched.
    pub fn toggle(&mut self, key: FilterKey) {
        let flag = match key {
            FilterKey::Penthouse => &mut self.penthouse,
            FilterKey::HighFloor => &mut self.high_floor,
            FilterKey::ThreeBedsPlus => &mut self.three_beds_plus,
            FilterKey::Available => &mut self.available,
        };
        *flag = !*flag;
    }

    /// Copy of this state with `key` flipped
    pub fn toggled(mut self, key: FilterKey) -> Self {
        self.toggle(key);
        self
    }

    pub fn any_active(&self) -> bool {
        FilterKey::ALL.iter().any(|key| self.is_active(*key))
    }

    /// Logical AND over the active toggles
    pub fn matches(&self, unit: &Unit) -> bool {
        FilterKey::ALL
            .iter()
            .filter(|key| self.is_active(**key))
            .all(|key| key.accepts(unit))
    }
}

/// Units passing every active filter, in listing order
pub fn filter_units<'a>(units: &'a [Unit], state: &FilterState) -> Vec<&'a Unit> {
    units.iter().filter(|unit| state.matches(unit)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::UNITS;

    fn floors(units: &[&Unit]) -> Vec<&'static str> {
        units.iter().map(|u| u.floor).collect()
    }

    #[test]
    fn default_state_shows_everything() {
        let state = FilterState::default();
        assert!(!state.any_active());
        assert_eq!(filter_units(UNITS, &state).len(), UNITS.len());
    }

    #[test]
    fn toggle_flips_only_the_named_flag() {
        let mut state = FilterState::default();
        state.toggle(FilterKey::ThreeBedsPlus);
        assert_eq!(
            state,
            FilterState {
                three_beds_plus: true,
                ..Default::default()
            }
        );
        state.toggle(FilterKey::Available);
        assert!(state.three_beds_plus);
        assert!(state.available);
        assert!(!state.penthouse);
        assert!(!state.high_floor);
    }

    #[test]
    fn three_beds_plus_includes_exactly_three() {
        let state = FilterState::default().toggled(FilterKey::ThreeBedsPlus);
        assert_eq!(
            floors(&filter_units(UNITS, &state)),
            vec!["Penthouse", "Floor 40", "Floor 39"]
        );
    }

    #[test]
    fn filters_combine_with_and() {
        let state = FilterState::default()
            .toggled(FilterKey::ThreeBedsPlus)
            .toggled(FilterKey::Available);
        assert_eq!(
            floors(&filter_units(UNITS, &state)),
            vec!["Penthouse", "Floor 40"]
        );

        let state = state.toggled(FilterKey::Penthouse);
        assert_eq!(floors(&filter_units(UNITS, &state)), vec!["Penthouse"]);
    }

    #[test]
    fn labels_follow_toggle_order() {
        let labels: Vec<_> = FilterKey::ALL.iter().map(|k| k.label()).collect();
        assert_eq!(
            labels,
            vec!["Penthouse", "High Floor", "3+ Bedrooms", "Available Now"]
        );
    }
}
