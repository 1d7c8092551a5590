use eterna_common::{filter_units, FilterKey, FilterState, Unit, UNITS};

const fn unit(
    floor: &'static str,
    bedrooms: u8,
    available: bool,
    is_penthouse: bool,
    is_high_floor: bool,
) -> Unit {
    Unit {
        floor,
        price: "$1",
        sqft: "1",
        bedrooms,
        available,
        is_penthouse,
        is_high_floor,
    }
}

/// One penthouse (available), two high floors (one reserved), one low floor
const MIXED: &[Unit] = &[
    unit("Penthouse", 4, true, true, true),
    unit("Floor 30", 3, true, false, true),
    unit("Floor 29", 2, false, false, true),
    unit("Floor 3", 1, true, false, false),
];

fn every_state() -> Vec<FilterState> {
    (0u8..16)
        .map(|bits| {
            FilterKey::ALL
                .iter()
                .enumerate()
                .filter(|(i, _)| bits & (1 << i) != 0)
                .fold(FilterState::default(), |state, (_, key)| {
                    state.toggled(*key)
                })
        })
        .collect()
}

fn positions(all: &[Unit], shown: &[&Unit]) -> Vec<usize> {
    shown
        .iter()
        .map(|s| all.iter().position(|u| u == *s).unwrap())
        .collect()
}

#[test]
fn available_only_drops_the_reserved_high_floor() {
    let state = FilterState::default().toggled(FilterKey::Available);
    let shown = filter_units(MIXED, &state);
    assert_eq!(shown.len(), 3);
    assert!(shown.iter().all(|u| u.floor != "Floor 29"));
}

#[test]
fn every_combination_is_an_ordered_subset() {
    let states = every_state();
    assert_eq!(states.len(), 16);
    for units in [MIXED, UNITS] {
        for state in &states {
            let shown = filter_units(units, state);
            let idx = positions(units, &shown);
            assert!(idx.windows(2).all(|w| w[0] < w[1]), "{state:?}");
            assert!(shown.iter().all(|u| state.matches(u)));
            if !state.any_active() {
                assert_eq!(shown.len(), units.len());
            }
        }
    }
}

#[test]
fn toggling_twice_restores_the_result() {
    for state in every_state() {
        for key in FilterKey::ALL {
            let before = filter_units(MIXED, &state);
            let mut round_trip = state;
            round_trip.toggle(key);
            round_trip.toggle(key);
            assert_eq!(round_trip, state);
            assert_eq!(filter_units(MIXED, &round_trip), before);
        }
    }
}

#[test]
fn penthouse_and_low_floor_can_empty_the_listing() {
    let state = FilterState::default()
        .toggled(FilterKey::Penthouse)
        .toggled(FilterKey::Available)
        .toggled(FilterKey::ThreeBedsPlus);
    assert_eq!(filter_units(MIXED, &state).len(), 1);

    let nothing = FilterState::default()
        .toggled(FilterKey::Penthouse)
        .toggled(FilterKey::Available);
    let low_only = [unit("Floor 3", 1, true, false, false)];
    assert!(filter_units(&low_only, &nothing).is_empty());
}
