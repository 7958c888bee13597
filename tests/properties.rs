use std::collections::VecDeque;

use proptest::prelude::*;

use mazegen::Direction;
use mazegen::maze::{Maze, MazeGenerator, is_boundary, neighbor_index};
use mazegen::rng::{Rng, Scripted};

fn build(n: usize, seed: u64) -> Maze {
    MazeGenerator::new(n, Rng::new(seed)).finish().unwrap()
}

fn reachable_from_entry(maze: &Maze) -> usize {
    let mut seen = vec![false; maze.cell_count()];
    let mut queue = VecDeque::from([0usize]);
    seen[0] = true;
    let mut count = 0;
    while let Some(i) = queue.pop_front() {
        count += 1;
        for j in maze.open_neighbors(i).unwrap() {
            if !seen[j] {
                seen[j] = true;
                queue.push_back(j);
            }
        }
    }
    count
}

fn check_structure(maze: &Maze) {
    let n = maze.cells();
    assert_eq!(maze.removed(), n * n - 1);
    assert_eq!(maze.component_count(), 1);

    let entry = maze.entry();
    let exit = maze.exit();
    assert_eq!(entry, (0, 0));
    assert_eq!(exit, (n - 1, n - 1));

    for y in 0..n {
        for x in 0..n {
            for d in Direction::ALL {
                let open = maze.is_open(x, y, d).unwrap();
                if is_boundary(n, x, y, d) {
                    let forced = ((x, y) == entry && d == Direction::Left)
                        || ((x, y) == exit && d == Direction::Right);
                    assert_eq!(open, forced, "boundary wall {d:?} of ({x}, {y})");
                } else {
                    let i = y * n + x;
                    let j = neighbor_index(n, i, d).unwrap();
                    let (nx, ny) = (j % n, j / n);
                    assert_eq!(open, maze.is_open(nx, ny, d.opposite()).unwrap());
                }
            }
        }
    }

    // A spanning tree reaches every cell.
    assert_eq!(reachable_from_entry(maze), n * n);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn every_maze_is_a_spanning_tree(n in 2usize..=24, seed in any::<u64>()) {
        check_structure(&build(n, seed));
    }

    #[test]
    fn scripted_draws_are_reproducible(
        n in 2usize..=10,
        draws in prop::collection::vec(0usize..10_000, 1..64),
    ) {
        // A short script wraps around and may never finish, so only a fixed
        // number of steps is compared.
        let mut a = MazeGenerator::new(n, Scripted::new(draws.clone()));
        let mut b = MazeGenerator::new(n, Scripted::new(draws));
        for _ in 0..200 {
            prop_assert_eq!(a.step().unwrap(), b.step().unwrap());
        }
        prop_assert_eq!(a.removed(), b.removed());
        prop_assert!(a.removed() <= n * n - 1);
    }

    #[test]
    fn find_is_idempotent_after_completion(n in 2usize..=16, seed in any::<u64>()) {
        let maze = build(n, seed);
        let mut sets = maze.sets().clone();
        let root = sets.find(0).unwrap();
        for i in 0..n * n {
            prop_assert_eq!(sets.find(i).unwrap(), root);
            prop_assert_eq!(sets.find(i).unwrap(), root);
            prop_assert_eq!(maze.root_of(i).unwrap(), root);
        }
        prop_assert_eq!(sets.size_of(0).unwrap(), n * n);
    }
}

#[test]
fn largest_allowed_size() {
    check_structure(&build(100, 42));
}

#[test]
fn same_seed_same_maze() {
    let a = build(30, 7);
    let b = build(30, 7);
    for i in 0..a.cell_count() {
        assert_eq!(a.walls(i).unwrap(), b.walls(i).unwrap());
    }
    assert_eq!(a.attempts(), b.attempts());
}

#[test]
fn two_by_two_has_three_removals() {
    let maze = MazeGenerator::new(2, Scripted::new(vec![0, 2, 0, 0, 3, 3, 2, 1]))
        .finish()
        .unwrap();
    assert_eq!(maze.removed(), 3);
    assert!(maze.is_open(0, 0, Direction::Left).unwrap());
    assert!(maze.is_open(1, 1, Direction::Right).unwrap());
    check_structure(&maze);
}
