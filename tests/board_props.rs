use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use sea_battle::{
    build_board, Board, BoardError, CellState, Coordinate, MatchConfig, Orientation, Vessel,
    BOARD_SIZE,
};

const SIZE: i32 = BOARD_SIZE as i32;

/// A fully placed board with a random number of shots already taken.
fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = build_board(&mut rng, &MatchConfig::default(), false).unwrap();
    let shots = rng.random_range(0..BOARD_SIZE * BOARD_SIZE);
    for _ in 0..shots {
        let target = Coordinate::new(rng.random_range(0..SIZE), rng.random_range(0..SIZE));
        let _ = board.resolve_shot(target);
    }
    board
}

#[derive(Debug, PartialEq, Eq)]
struct Snapshot {
    cells: Vec<Option<CellState>>,
    remaining: Vec<usize>,
    alive: usize,
    excluded: usize,
    last_shot: Option<Coordinate>,
}

fn snapshot(board: &Board) -> Snapshot {
    let size = board.size() as i32;
    Snapshot {
        cells: (0..size)
            .flat_map(|y| (0..size).map(move |x| Coordinate::new(x, y)))
            .map(|c| board.cell(c))
            .collect(),
        remaining: board.vessels().iter().map(Vessel::remaining_hits).collect(),
        alive: board.vessels_alive(),
        excluded: board.excluded_count(),
        last_shot: board.last_shot(),
    }
}

fn chebyshev(a: Coordinate, b: Coordinate) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn shot_idempotent(seed in any::<u64>(), x in 0..SIZE, y in 0..SIZE) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = build_board(&mut rng, &MatchConfig::default(), false).unwrap();
        let target = Coordinate::new(x, y);
        let before = snapshot(&board);
        board.resolve_shot(target).unwrap();
        let after = snapshot(&board);
        prop_assert_ne!(&before, &after);

        let err = board.resolve_shot(target).unwrap_err();
        prop_assert_eq!(err, BoardError::CellAlreadyTargeted(target));
        prop_assert_eq!(snapshot(&board), after);
    }

    #[test]
    fn excluded_cells_stay_excluded(seed in any::<u64>()) {
        let mut board = random_board(seed);
        let before = snapshot(&board);
        let size = board.size() as i32;
        for y in 0..size {
            for x in 0..size {
                let target = Coordinate::new(x, y);
                if board.is_excluded(target) {
                    prop_assert_eq!(
                        board.resolve_shot(target),
                        Err(BoardError::CellAlreadyTargeted(target))
                    );
                }
            }
        }
        prop_assert_eq!(snapshot(&board), before);
    }

    #[test]
    fn vessels_alive_matches_fleet(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = build_board(&mut rng, &MatchConfig::default(), false).unwrap();
        let size = board.size() as i32;
        for y in 0..size {
            for x in 0..size {
                let _ = board.resolve_shot(Coordinate::new(x, y));
                let afloat = board.vessels().iter().filter(|v| !v.is_destroyed()).count();
                prop_assert_eq!(board.vessels_alive(), afloat);
            }
        }
        prop_assert!(board.all_destroyed());
    }

    #[test]
    fn placed_vessels_never_touch(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = build_board(&mut rng, &MatchConfig::default(), false).unwrap();
        let vessels = board.vessels();
        prop_assert_eq!(vessels.len(), MatchConfig::default().fleet.len());
        for (i, a) in vessels.iter().enumerate() {
            for b in &vessels[i + 1..] {
                for ca in a.occupied_cells() {
                    for cb in b.occupied_cells() {
                        prop_assert!(chebyshev(ca, cb) > 1, "{:?} touches {:?}", a, b);
                    }
                }
            }
            for cell in a.occupied_cells() {
                prop_assert!(board.in_bounds(cell));
                prop_assert_eq!(board.cell(cell), Some(CellState::Occupied));
            }
        }
    }

    #[test]
    fn off_board_rejected(size in 1usize..12, along in 0i32..12) {
        let mut board = Board::new(size, false);
        let n = size as i32;
        let along = along % n;
        for target in [
            Coordinate::new(n, along),
            Coordinate::new(along, n),
            Coordinate::new(-1, along),
            Coordinate::new(along, -1),
        ] {
            prop_assert_eq!(board.resolve_shot(target), Err(BoardError::OutOfBounds(target)));
            prop_assert_eq!(
                board.place_vessel(Vessel::new(1, target, Orientation::Vertical)),
                Err(BoardError::OutOfBounds(target))
            );
        }
        prop_assert_eq!(board.excluded_count(), 0);
        prop_assert!(board.vessels().is_empty());
    }
}
