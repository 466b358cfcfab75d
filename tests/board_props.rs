use lifegrid::board::Board;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

proptest! {
    /// Neighbor counts never exceed the Moore neighborhood, nor the number
    /// of live cells on the whole board.
    #[test]
    fn neighbor_count_is_bounded(
        w in 1u16..32,
        h in 1u16..32,
        seed in any::<u64>(),
        density in 0.0f64..=1.0,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = Board::new(w, h).unwrap();
        board.seed(&mut rng, density);

        for y in 0..h {
            for x in 0..w {
                let n = board.count_living_neighbors(x, y).unwrap();
                prop_assert!(n <= 8);
                prop_assert!((n as usize) <= board.population());
            }
        }
    }

    /// An empty board of any size never produces life.
    #[test]
    fn no_spontaneous_birth(w in 1u16..64, h in 1u16..64, steps in 1usize..8) {
        let mut board = Board::new(w, h).unwrap();

        for _ in 0..steps {
            board.advance();
        }

        prop_assert_eq!(board.population(), 0);
    }

    /// Advancing keeps the population within the board and bumps the
    /// generation counter by exactly one per call.
    #[test]
    fn advance_bookkeeping(
        w in 1u16..32,
        h in 1u16..32,
        seed in any::<u64>(),
        steps in 1u64..6,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = Board::new(w, h).unwrap();
        board.seed(&mut rng, 0.3);

        for _ in 0..steps {
            board.advance();
            prop_assert!(board.population() <= w as usize * h as usize);
        }

        prop_assert_eq!(board.generation(), steps);
    }

    /// Toggling a cell twice restores its original state.
    #[test]
    fn toggle_is_an_involution(
        w in 1u16..32,
        h in 1u16..32,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = Board::new(w, h).unwrap();
        board.seed(&mut rng, 0.5);

        let (x, y) = (w / 2, h / 2);
        let before = board.is_alive(x, y).unwrap();

        board.toggle(x, y).unwrap();
        prop_assert_eq!(board.is_alive(x, y).unwrap(), !before);

        board.toggle(x, y).unwrap();
        prop_assert_eq!(board.is_alive(x, y).unwrap(), before);
    }

    /// Any coordinate outside the board is rejected by every accessor.
    #[test]
    fn out_of_bounds_always_fails(
        w in 1u16..32,
        h in 1u16..32,
        x in 0u16..64,
        y in 0u16..64,
    ) {
        let mut board = Board::new(w, h).unwrap();

        if x >= w || y >= h {
            prop_assert!(board.is_alive(x, y).is_err());
            prop_assert!(board.set_alive(x, y).is_err());
            prop_assert!(board.count_living_neighbors(x, y).is_err());
        } else {
            prop_assert!(board.is_alive(x, y).is_ok());
        }
    }
}
