use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    generate_fleet, Coord, Fleet, FleetError, FleetLayout, LayoutError, Side,
};

#[test]
fn test_parse_basic() {
    let layout = FleetLayout::parse("[[(16, 1), (16, 2)], [(18, 4)]]").unwrap();
    assert_eq!(layout.len(), 2);
    let ships: Vec<&[Coord]> = layout.ships().collect();
    assert_eq!(ships[0], &[Coord::new(16, 1), Coord::new(16, 2)]);
    assert_eq!(ships[1], &[Coord::new(18, 4)]);
}

#[test]
fn test_parse_is_whitespace_insensitive() {
    let tight = FleetLayout::parse("[[(1,1)],[(3,3)]]").unwrap();
    let spaced = FleetLayout::parse("  [ [ ( 1 , 1 ) ] ,\n [ ( 3 , 3 ) ] ]  ").unwrap();
    assert_eq!(tight, spaced);
}

#[test]
fn test_parse_rejects_malformed_input() {
    assert_eq!(
        FleetLayout::parse("").unwrap_err(),
        LayoutError::UnexpectedEnd
    );
    assert_eq!(
        FleetLayout::parse("[[(1, 1)]").unwrap_err(),
        LayoutError::UnexpectedEnd
    );
    assert!(matches!(
        FleetLayout::parse("[[1, 2]]").unwrap_err(),
        LayoutError::Unexpected { .. }
    ));
    assert!(matches!(
        FleetLayout::parse("[(1, 2)]").unwrap_err(),
        LayoutError::Unexpected { .. }
    ));
    assert!(matches!(
        FleetLayout::parse("[[(1, 2)]]x").unwrap_err(),
        LayoutError::Trailing { .. }
    ));
    assert!(matches!(
        FleetLayout::parse("[[(999, 1)]]").unwrap_err(),
        LayoutError::Number { .. }
    ));
    assert!(matches!(
        FleetLayout::parse("[[(1, 1), (1, 2), (1, 3), (1, 4), (1, 5)]]").unwrap_err(),
        LayoutError::TooManyCells { .. }
    ));

    let eleven: String = {
        let ships: Vec<String> = (1..=11).map(|r| format!("[({}, {})]", 1, r)).collect();
        format!("[{}]", ships.join(", "))
    };
    assert!(matches!(
        FleetLayout::parse(&eleven).unwrap_err(),
        LayoutError::TooManyShips { .. }
    ));
}

#[test]
fn test_code_like_input_is_rejected() {
    // anything outside the bracket/tuple grammar fails at its first byte
    for text in [
        "__import__('os').system('true')",
        "[[(1, 1)] + [(2, 2)]]",
        "[[(0x10, 1)]]",
        "[[(-1, 1)]]",
    ] {
        assert!(FleetLayout::parse(text).is_err(), "{:?} parsed", text);
    }
}

#[test]
fn test_from_layout_enforces_fleet_invariants() {
    // well-formed text, wrong roster size
    let layout = FleetLayout::parse("[[(1, 1)], [(3, 3)]]").unwrap();
    assert_eq!(
        Fleet::from_layout(Side::A, &layout).unwrap_err(),
        FleetError::IncompleteFleet
    );

    // touching ships
    let layout = FleetLayout::parse("[[(1, 1), (2, 1)], [(3, 2)]]").unwrap();
    assert_eq!(
        Fleet::from_layout(Side::A, &layout).unwrap_err(),
        FleetError::AdjacencyViolation
    );

    // grid B coordinates in a grid A fleet
    let layout = FleetLayout::parse("[[(16, 1)]]").unwrap();
    assert_eq!(
        Fleet::from_layout(Side::A, &layout).unwrap_err(),
        FleetError::InvalidShipShape
    );

    // crooked ship
    let layout = FleetLayout::parse("[[(1, 1), (2, 2)]]").unwrap();
    assert_eq!(
        Fleet::from_layout(Side::A, &layout).unwrap_err(),
        FleetError::InvalidShipShape
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn layout_round_trips_through_text(seed in any::<u64>()) {
        for side in [Side::A, Side::B] {
            let mut rng = SmallRng::seed_from_u64(seed);
            let fleet = generate_fleet(&mut rng, side).unwrap();

            let text = FleetLayout::from(&fleet).to_string();
            let parsed: FleetLayout = text.parse().unwrap();
            prop_assert_eq!(FleetLayout::from(&fleet), parsed);

            let rebuilt = Fleet::from_layout(side, &parsed).unwrap();
            prop_assert_eq!(rebuilt, fleet);
        }
    }
}
