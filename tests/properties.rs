use proptest::prelude::*;

use termlife::cell::CellState;
use termlife::engine::LifeEngine;
use termlife::grid::GridBuffer;
use termlife::session::Session;
use termlife::view::alive_cells;

/// Expected byte at index `i` of a freshly created grid
fn fresh_byte(i: usize, width: usize, height: usize) -> u8 {
    let stride = width + 3;
    let (row, col) = (i / stride, i % stride);

    match col {
        c if c == width + 2 => b'\n',
        c if c == 0 || c == width + 1 => {
            if row == 0 || row == height + 1 {
                b'+'
            } else {
                b'|'
            }
        }
        _ if row == 0 || row == height + 1 => b'-',
        _ => b' ',
    }
}

fn is_interior(i: usize, width: usize, height: usize) -> bool {
    let stride = width + 3;
    let (row, col) = (i / stride, i % stride);

    (1..=height).contains(&row) && (1..=width).contains(&col)
}

#[derive(Debug, Clone)]
enum Op {
    Toggle(usize, usize),
    Step,
}

/// A grid size and a sequence of operations whose coordinates are inside it
fn ops() -> impl Strategy<Value = (usize, usize, Vec<Op>)> {
    (1usize..=16, 1usize..=16).prop_flat_map(|(width, height)| {
        let op = prop_oneof![
            3 => (1..=width, 1..=height).prop_map(|(x, y)| Op::Toggle(x, y)),
            1 => Just(Op::Step),
        ];

        (Just(width), Just(height), prop::collection::vec(op, 0..64))
    })
}

proptest! {
    #[test]
    fn create_matches_layout(width in 1usize..=255, height in 1usize..=255) {
        let grid = GridBuffer::create(width, height).unwrap();
        let bytes = grid.as_bytes();

        prop_assert_eq!(bytes.len(), (width + 3) * (height + 2));

        for (i, &b) in bytes.iter().enumerate() {
            prop_assert_eq!(b, fresh_byte(i, width, height), "byte {}", i);
        }

        prop_assert_eq!(grid.population(), 0);
    }

    #[test]
    fn toggle_is_an_involution(
        (width, height, x, y) in (1usize..=40, 1usize..=40)
            .prop_flat_map(|(w, h)| (Just(w), Just(h), 1..=w, 1..=h)),
        seed in prop::collection::vec((1usize..=40, 1usize..=40), 0..20),
    ) {
        let mut session = Session::new(width, height).unwrap();
        for (a, b) in seed {
            if a <= width && b <= height {
                session.toggle(a, b);
            }
        }

        let before = session.grid().clone();
        let population = session.population();

        session.toggle(x, y);
        session.toggle(x, y);

        prop_assert_eq!(session.grid(), &before);
        prop_assert_eq!(session.population(), population);
    }

    #[test]
    fn population_matches_rescan((width, height, ops) in ops()) {
        let mut session = Session::new(width, height).unwrap();

        for op in ops {
            match op {
                Op::Toggle(x, y) => {
                    session.toggle(x, y);
                }
                Op::Step => {
                    session.tick().unwrap();
                }
            }

            prop_assert_eq!(session.population(), session.grid().population());
            prop_assert_eq!(session.population(), alive_cells(session.grid()).len());
        }
    }

    #[test]
    fn borders_survive_steps(
        (width, height, alive) in (1usize..=24, 1usize..=24).prop_flat_map(|(w, h)| {
            (Just(w), Just(h), prop::collection::vec((1..=w, 1..=h), 0..200))
        }),
        steps in 1usize..12,
    ) {
        let mut grid = GridBuffer::create(width, height).unwrap();
        for (x, y) in alive {
            grid.set_cell(x, y, CellState::Alive);
        }

        let mut shadow = grid.shadow().unwrap();
        let engine = LifeEngine::new();

        for _ in 0..steps {
            engine.step(&mut grid, &mut shadow);
        }

        for (i, &b) in grid.as_bytes().iter().enumerate() {
            if !is_interior(i, width, height) {
                prop_assert_eq!(b, fresh_byte(i, width, height), "byte {}", i);
            }
        }
    }

    #[test]
    fn empty_grid_stays_empty(width in 1usize..=64, height in 1usize..=64) {
        let mut grid = GridBuffer::create(width, height).unwrap();
        let mut shadow = grid.shadow().unwrap();

        let report = LifeEngine::new().step(&mut grid, &mut shadow);

        prop_assert_eq!(report.births, 0);
        prop_assert_eq!(grid, GridBuffer::create(width, height).unwrap());
    }
}
