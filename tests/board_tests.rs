use flotilla::{Board, Cells, Coord, ShotOutcome, FLEET, GRID_SIZE, TOTAL_SHIP_CELLS};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn board_with_ship(cells: &[(u8, u8)]) -> Board<GRID_SIZE> {
    let ships = Cells::from_coords(cells.iter().map(|&(r, c)| Coord::new(r, c))).unwrap();
    Board::from_parts(ships, Cells::new(), Cells::new())
}

#[test]
fn test_hit_miss_and_repeat() {
    let mut board = board_with_ship(&[(0, 0), (0, 1), (0, 2)]);

    assert_eq!(board.apply_shot(Coord::new(0, 0)), ShotOutcome::Hit);
    assert_eq!(board.apply_shot(Coord::new(5, 5)), ShotOutcome::Miss);

    // re-firing either cell changes nothing
    let hits = board.hits();
    let misses = board.misses();
    assert_eq!(board.apply_shot(Coord::new(0, 0)), ShotOutcome::Repeat);
    assert_eq!(board.apply_shot(Coord::new(5, 5)), ShotOutcome::Repeat);
    assert_eq!(board.hits(), hits);
    assert_eq!(board.misses(), misses);
}

#[test]
fn test_out_of_bounds_shot_is_noop() {
    let mut board = board_with_ship(&[(0, 0)]);
    assert_eq!(board.apply_shot(Coord::new(10, 0)), ShotOutcome::Repeat);
    assert_eq!(board.apply_shot(Coord::new(0, 10)), ShotOutcome::Repeat);
    assert!(board.shots().is_empty());
}

#[test]
fn test_hits_and_misses_stay_disjoint() {
    let mut board = board_with_ship(&[(3, 3), (3, 4)]);
    for coord in [
        Coord::new(3, 3),
        Coord::new(3, 4),
        Coord::new(0, 0),
        Coord::new(9, 9),
    ] {
        board.apply_shot(coord);
    }
    assert!((board.hits() & board.misses()).is_empty());
    assert!((board.misses() & board.ships()).is_empty());
    assert_eq!(board.hits() & board.ships(), board.hits());
}

#[test]
fn test_win_exactness() {
    let mut board = board_with_ship(&[(2, 2), (3, 2)]);
    assert!(!board.has_won());
    board.apply_shot(Coord::new(2, 2));
    assert!(!board.has_won());
    // misses never advance the win condition
    board.apply_shot(Coord::new(7, 7));
    assert!(!board.has_won());
    board.apply_shot(Coord::new(3, 2));
    assert!(board.has_won());
}

#[test]
fn test_empty_board_is_vacuously_won() {
    let board: Board<GRID_SIZE> = Board::new();
    assert!(board.has_won());
}

#[test]
fn test_with_fleet_places_every_cell() {
    let mut rng = SmallRng::seed_from_u64(42);
    let board: Board<GRID_SIZE> = Board::with_fleet(&mut rng, &FLEET).unwrap();
    assert_eq!(board.ships().len(), TOTAL_SHIP_CELLS);
    assert!(board.hits().is_empty());
    assert!(board.misses().is_empty());
}
