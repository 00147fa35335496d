use flotilla::{Cells, Coord, TargetMode, Targeting, GRID_SIZE};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn coord(r: u8, c: u8) -> Coord {
    Coord::new(r, c)
}

/// Apply a hit to the tracking sets and feed it to the engine.
fn hit<const N: usize>(
    targeting: &mut Targeting<N>,
    hits: &mut Cells<N>,
    shots: &mut Cells<N>,
    at: Coord,
) {
    hits.insert(at).unwrap();
    shots.insert(at).unwrap();
    targeting.record_hit(at, hits, shots);
}

#[test]
fn test_search_prefers_even_parity() {
    let mut targeting: Targeting<GRID_SIZE> = Targeting::new();
    let shots = Cells::new();
    for seed in 0..50 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let choice = targeting.choose(&mut rng, &shots).unwrap();
        assert!(choice.is_even_parity(), "search must stay on the even pool");
        assert!(choice.in_bounds(GRID_SIZE));
    }
    assert_eq!(targeting.mode(), TargetMode::Searching);
}

#[test]
fn test_search_falls_back_to_odd_pool() {
    // every even-parity cell already shot
    let shots: Cells<4> = Cells::from_coords(
        (0..4u8)
            .flat_map(|r| (0..4u8).map(move |c| coord(r, c)))
            .filter(Coord::is_even_parity),
    )
    .unwrap();
    let mut targeting: Targeting<4> = Targeting::new();
    let mut rng = SmallRng::seed_from_u64(9);
    let choice = targeting.choose(&mut rng, &shots).unwrap();
    assert!(!choice.is_even_parity());
}

#[test]
fn test_choose_none_when_grid_exhausted() {
    let shots: Cells<4> =
        Cells::from_coords((0..4u8).flat_map(|r| (0..4u8).map(move |c| coord(r, c)))).unwrap();
    let mut targeting: Targeting<4> = Targeting::new();
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(targeting.choose(&mut rng, &shots), None);
}

#[test]
fn test_first_hit_enqueues_unshot_neighbors() {
    let mut targeting: Targeting<GRID_SIZE> = Targeting::new();
    let mut hits = Cells::new();
    let mut shots = Cells::new();
    // a prior miss just above the hit
    shots.insert(coord(3, 4)).unwrap();

    hit(&mut targeting, &mut hits, &mut shots, coord(4, 4));

    assert_eq!(targeting.mode(), TargetMode::Finishing);
    assert_eq!(targeting.cluster(), Cells::from_coords([coord(4, 4)]).unwrap());
    let queue: Vec<Coord> = targeting.queue().collect();
    // (3,4) is shot and excluded; the rest follow neighbor order
    assert_eq!(queue, vec![coord(5, 4), coord(4, 3), coord(4, 5)]);
}

#[test]
fn test_corner_hit_excludes_off_grid_neighbors() {
    let mut targeting: Targeting<GRID_SIZE> = Targeting::new();
    let mut hits = Cells::new();
    let mut shots = Cells::new();

    hit(&mut targeting, &mut hits, &mut shots, coord(0, 0));

    let queue: Vec<Coord> = targeting.queue().collect();
    assert_eq!(queue, vec![coord(1, 0), coord(0, 1)]);
}

#[test]
fn test_cluster_converges_and_extensions_jump_the_queue() {
    // ship at row 4, cols 3..=5; hits land middle, left, right
    let mut targeting: Targeting<GRID_SIZE> = Targeting::new();
    let mut hits = Cells::new();
    let mut shots = Cells::new();

    hit(&mut targeting, &mut hits, &mut shots, coord(4, 4));
    hit(&mut targeting, &mut hits, &mut shots, coord(4, 3));
    hit(&mut targeting, &mut hits, &mut shots, coord(4, 5));

    assert_eq!(targeting.mode(), TargetMode::Finishing);
    assert_eq!(
        targeting.cluster(),
        Cells::from_coords([coord(4, 3), coord(4, 4), coord(4, 5)]).unwrap()
    );
    let queue: Vec<Coord> = targeting.queue().collect();
    assert_eq!(
        &queue[..2],
        &[coord(4, 2), coord(4, 6)],
        "line extensions must lead the queue, min end first"
    );
    // no duplicates anywhere in the queue
    for (i, a) in queue.iter().enumerate() {
        assert!(!queue[i + 1..].contains(a), "queue holds a duplicate");
    }
}

#[test]
fn test_vertical_cluster_extends_up_and_down() {
    let mut targeting: Targeting<GRID_SIZE> = Targeting::new();
    let mut hits = Cells::new();
    let mut shots = Cells::new();

    hit(&mut targeting, &mut hits, &mut shots, coord(5, 7));
    hit(&mut targeting, &mut hits, &mut shots, coord(6, 7));

    let queue: Vec<Coord> = targeting.queue().collect();
    assert_eq!(&queue[..2], &[coord(4, 7), coord(7, 7)]);
}

#[test]
fn test_finishing_skips_already_shot_candidates() {
    let mut targeting: Targeting<GRID_SIZE> = Targeting::new();
    let mut hits = Cells::new();
    let mut shots = Cells::new();

    hit(&mut targeting, &mut hits, &mut shots, coord(4, 4));
    // everything the engine queued has since been shot
    for candidate in [coord(3, 4), coord(5, 4), coord(4, 3)] {
        shots.insert(candidate).unwrap();
    }

    let mut rng = SmallRng::seed_from_u64(3);
    let choice = targeting.choose(&mut rng, &shots).unwrap();
    assert_eq!(choice, coord(4, 5), "only unshot candidate left in the queue");
}

#[test]
fn test_exhausted_queue_resumes_searching() {
    let mut targeting: Targeting<GRID_SIZE> = Targeting::new();
    let mut hits = Cells::new();
    let mut shots = Cells::new();

    hit(&mut targeting, &mut hits, &mut shots, coord(4, 4));
    for candidate in targeting.queue().collect::<Vec<_>>() {
        shots.insert(candidate).unwrap();
    }

    let mut rng = SmallRng::seed_from_u64(5);
    let choice = targeting.choose(&mut rng, &shots).unwrap();
    assert_eq!(targeting.mode(), TargetMode::Searching);
    assert!(targeting.cluster().is_empty());
    assert!(choice.is_even_parity());
}

#[test]
fn test_miss_with_candidates_left_stays_finishing() {
    let mut targeting: Targeting<GRID_SIZE> = Targeting::new();
    let mut hits = Cells::new();
    let mut shots = Cells::new();

    hit(&mut targeting, &mut hits, &mut shots, coord(4, 4));
    let mut rng = SmallRng::seed_from_u64(11);
    let probe = targeting.choose(&mut rng, &shots).unwrap();
    shots.insert(probe).unwrap();
    targeting.record_miss();

    assert_eq!(targeting.mode(), TargetMode::Finishing);
}

#[test]
fn test_miss_on_empty_queue_resets_to_searching() {
    let mut targeting: Targeting<GRID_SIZE> = Targeting::new();
    let mut hits = Cells::new();
    let mut shots = Cells::new();

    // lone hit in the corner with one neighbor already shot
    shots.insert(coord(1, 0)).unwrap();
    hit(&mut targeting, &mut hits, &mut shots, coord(0, 0));
    // drain the single candidate
    let mut rng = SmallRng::seed_from_u64(13);
    let probe = targeting.choose(&mut rng, &shots).unwrap();
    assert_eq!(probe, coord(0, 1));
    shots.insert(probe).unwrap();
    targeting.record_miss();

    assert_eq!(targeting.mode(), TargetMode::Searching);
    assert!(targeting.cluster().is_empty());
}

#[test]
fn test_from_parts_preserves_order_and_dedups() {
    let queue = vec![coord(4, 2), coord(4, 6), coord(4, 2), coord(3, 4)];
    let cluster = Cells::from_coords([coord(4, 3), coord(4, 4)]).unwrap();
    let targeting: Targeting<GRID_SIZE> =
        Targeting::from_parts(TargetMode::Finishing, queue, cluster);

    let restored: Vec<Coord> = targeting.queue().collect();
    assert_eq!(restored, vec![coord(4, 2), coord(4, 6), coord(3, 4)]);
    assert_eq!(targeting.mode(), TargetMode::Finishing);
}
