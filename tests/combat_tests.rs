use seabattle::{
    resolve_shot, Coord, Fleet, FleetBuilder, Ship, ShotLog, ShotOutcome, Side, TOTAL_SHIP_CELLS,
};

fn build_fleet(side: Side, roster: &[&[(u8, u8)]]) -> Fleet {
    let mut builder = FleetBuilder::new(side);
    for cells in roster {
        let coords: Vec<Coord> = cells.iter().map(|&(c, r)| Coord::new(c, r)).collect();
        builder.place(Ship::from_cells(side, &coords).unwrap()).unwrap();
    }
    builder.finish().unwrap()
}

/// Grid A fleet with a one-cell ship in the (10, 1) corner.
fn corner_fleet() -> Fleet {
    build_fleet(
        Side::A,
        &[
            &[(1, 10), (2, 10), (3, 10), (4, 10)],
            &[(6, 10), (7, 10), (8, 10)],
            &[(1, 8), (2, 8), (3, 8)],
            &[(5, 8), (6, 8)],
            &[(8, 8), (9, 8)],
            &[(1, 6), (2, 6)],
            &[(4, 6)],
            &[(6, 6)],
            &[(8, 6)],
            &[(10, 1)],
        ],
    )
}

/// Grid A fleet whose three-length ship spans (4,5)..(6,5).
fn midline_fleet() -> Fleet {
    build_fleet(
        Side::A,
        &[
            &[(1, 1), (2, 1), (3, 1), (4, 1)],
            &[(6, 1), (7, 1), (8, 1)],
            &[(4, 5), (5, 5), (6, 5)],
            &[(1, 3), (2, 3)],
            &[(9, 3), (10, 3)],
            &[(1, 8), (2, 8)],
            &[(10, 5)],
            &[(4, 8)],
            &[(6, 8)],
            &[(8, 8)],
        ],
    )
}

#[test]
fn test_miss_dots_target_only() {
    let mut fleet = corner_fleet();
    let mut log = ShotLog::new(Side::A);

    let outcome = resolve_shot(Coord::new(9, 3), &mut fleet, &mut log);
    assert_eq!(outcome, ShotOutcome::Miss);
    assert!(log.is_dotted(Coord::new(9, 3)));
    assert_eq!(log.dotted().len(), 1);
    assert!(log.hits().is_empty());
    assert_eq!(fleet.cells_afloat(), TOTAL_SHIP_CELLS);
}

#[test]
fn test_hit_dots_diagonals() {
    let mut fleet = midline_fleet();
    let mut log = ShotLog::new(Side::A);

    let outcome = resolve_shot(Coord::new(5, 5), &mut fleet, &mut log);
    assert_eq!(outcome, ShotOutcome::Hit);
    assert!(log.is_hit(Coord::new(5, 5)));
    for c in [
        Coord::new(4, 4),
        Coord::new(4, 6),
        Coord::new(6, 4),
        Coord::new(6, 6),
    ] {
        assert!(log.is_dotted(c), "diagonal {} should be dotted", c);
    }
    // orthogonal neighbors stay unknown while the ship floats
    assert!(!log.is_dotted(Coord::new(4, 5)));
    assert!(!log.is_dotted(Coord::new(5, 4)));
    assert_eq!(fleet.cells_afloat(), TOTAL_SHIP_CELLS - 1);
}

#[test]
fn test_single_cell_ship_in_corner_dots_in_bounds_neighbors() {
    let mut fleet = corner_fleet();
    let mut log = ShotLog::new(Side::A);

    let outcome = resolve_shot(Coord::new(10, 1), &mut fleet, &mut log);
    assert_eq!(outcome, ShotOutcome::Sunk);
    assert!(log.is_hit(Coord::new(10, 1)));

    let mut dotted: Vec<Coord> = log.dotted_coords().collect();
    dotted.sort_unstable();
    assert_eq!(
        dotted,
        vec![Coord::new(9, 1), Coord::new(9, 2), Coord::new(10, 2)]
    );
}

#[test]
fn test_sinking_seals_perimeter() {
    let mut fleet = midline_fleet();
    let mut log = ShotLog::new(Side::A);

    assert_eq!(
        resolve_shot(Coord::new(4, 5), &mut fleet, &mut log),
        ShotOutcome::Hit
    );
    assert_eq!(
        resolve_shot(Coord::new(5, 5), &mut fleet, &mut log),
        ShotOutcome::Hit
    );
    assert_eq!(
        resolve_shot(Coord::new(6, 5), &mut fleet, &mut log),
        ShotOutcome::Sunk
    );

    // the extremity cells
    assert!(log.is_dotted(Coord::new(3, 5)));
    assert!(log.is_dotted(Coord::new(7, 5)));

    // the whole perimeter of the footprint is known empty
    let mut dotted: Vec<Coord> = log.dotted_coords().collect();
    dotted.sort_unstable();
    let mut perimeter = vec![
        Coord::new(3, 4),
        Coord::new(3, 5),
        Coord::new(3, 6),
        Coord::new(4, 4),
        Coord::new(4, 6),
        Coord::new(5, 4),
        Coord::new(5, 6),
        Coord::new(6, 4),
        Coord::new(6, 6),
        Coord::new(7, 4),
        Coord::new(7, 5),
        Coord::new(7, 6),
    ];
    perimeter.sort_unstable();
    assert_eq!(dotted, perimeter);

    // hit cells never appear in the dotted set
    assert!((log.dotted() & log.hits()).is_empty());
    assert_eq!(log.hits().len(), 3);
    assert_eq!(fleet.cells_afloat(), TOTAL_SHIP_CELLS - 3);
}

#[test]
fn test_out_of_order_sinking_matches() {
    let mut fleet = midline_fleet();
    let mut log = ShotLog::new(Side::A);

    // middle first, then the ends
    resolve_shot(Coord::new(5, 5), &mut fleet, &mut log);
    resolve_shot(Coord::new(6, 5), &mut fleet, &mut log);
    let outcome = resolve_shot(Coord::new(4, 5), &mut fleet, &mut log);
    assert_eq!(outcome, ShotOutcome::Sunk);

    let mut dotted: Vec<Coord> = log.dotted_coords().collect();
    dotted.sort_unstable();
    assert_eq!(dotted.len(), 12);
    assert!(log.is_dotted(Coord::new(3, 5)));
    assert!(log.is_dotted(Coord::new(7, 5)));
}

#[test]
fn test_dotting_respects_grid_b_boundary() {
    let fleet_b = build_fleet(
        Side::B,
        &[
            &[(16, 10), (17, 10), (18, 10), (19, 10)],
            &[(21, 10), (22, 10), (23, 10)],
            &[(25, 8), (25, 9), (25, 10)],
            &[(16, 8), (17, 8)],
            &[(19, 8), (20, 8)],
            &[(22, 8), (23, 8)],
            &[(16, 5)],
            &[(18, 5)],
            &[(20, 5)],
            &[(22, 5)],
        ],
    );
    let mut fleet = fleet_b;
    let mut log = ShotLog::new(Side::B);

    let outcome = resolve_shot(Coord::new(16, 5), &mut fleet, &mut log);
    assert_eq!(outcome, ShotOutcome::Sunk);

    let mut dotted: Vec<Coord> = log.dotted_coords().collect();
    dotted.sort_unstable();
    assert_eq!(
        dotted,
        vec![
            Coord::new(16, 4),
            Coord::new(16, 6),
            Coord::new(17, 4),
            Coord::new(17, 5),
            Coord::new(17, 6),
        ]
    );
    assert!(dotted.iter().all(|c| c.col >= 16));
}
