//! Property tests for the search and reconstruction invariants on random
//! grids.

use proptest::prelude::*;
use wayfind_core::{Grid, Point};

use crate::{PathEngine, UNREACHABLE};

const MAX_SIDE: i32 = 8;
const MAX_CELLS: usize = (MAX_SIDE * MAX_SIDE) as usize;

/// A random grid: dimensions, per-cell weights and wall flags, endpoints.
#[derive(Debug, Clone)]
struct Scenario {
    rows: i32,
    cols: i32,
    cells: Vec<(i32, bool)>,
    start: usize,
    goal: usize,
}

impl Scenario {
    fn build(&self, with_walls: bool) -> Option<Grid> {
        let n = (self.rows * self.cols) as usize;
        let (s, g) = (self.start % n, self.goal % n);
        if s == g {
            return None;
        }
        let at = |i: usize| Point::at(i as i32 / self.cols, i as i32 % self.cols);
        let mut grid = Grid::new(self.rows, self.cols, at(s), at(g), |p| {
            self.cells[(p.row() * self.cols + p.col()) as usize].0
        })
        .ok()?;
        if with_walls {
            for i in 0..n {
                if self.cells[i].1 && i != s && i != g {
                    grid.set_wall(at(i), true).ok()?;
                }
            }
        }
        Some(grid)
    }
}

fn scenario() -> impl Strategy<Value = Scenario> {
    (
        1..=MAX_SIDE,
        1..=MAX_SIDE,
        prop::collection::vec((1..=10i32, prop::bool::weighted(0.3)), MAX_CELLS),
        0..MAX_CELLS,
        0..MAX_CELLS,
    )
        .prop_map(|(rows, cols, cells, start, goal)| Scenario {
            rows,
            cols,
            cells,
            start,
            goal,
        })
}

/// Reference distances by repeated relaxation over every open cell.
fn relaxed_distances(g: &Grid) -> Vec<i64> {
    let rng = g.bounds();
    let mut dist = vec![UNREACHABLE; rng.len()];
    let Some(si) = rng.index(g.start()) else {
        return dist;
    };
    dist[si] = 0;
    let mut buf = Vec::new();
    loop {
        let mut changed = false;
        for (i, p) in rng.iter().enumerate() {
            if dist[i] == UNREACHABLE || g.is_blocked(p) {
                continue;
            }
            buf.clear();
            g.neighbors(p, &mut buf);
            for &n in &buf {
                let (Some(ni), Some(w)) = (rng.index(n), g.weight(n)) else {
                    continue;
                };
                let candidate = dist[i] + i64::from(w);
                if candidate < dist[ni] {
                    dist[ni] = candidate;
                    changed = true;
                }
            }
        }
        if !changed {
            return dist;
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn open_grids_always_reach_the_goal(sc in scenario()) {
        let Some(g) = sc.build(false) else { return Ok(()); };
        let mut pe = PathEngine::new(g.bounds());
        let visited = pe.search(&g, g.start(), g.goal());
        prop_assert!(visited.iter().any(|n| n.pos == g.goal()));
    }

    #[test]
    fn visitation_distances_are_monotone(sc in scenario()) {
        let Some(g) = sc.build(true) else { return Ok(()); };
        let mut pe = PathEngine::new(g.bounds());
        let visited = pe.search(&g, g.start(), g.goal());
        prop_assert!(visited.windows(2).all(|w| w[0].cost <= w[1].cost));
    }

    #[test]
    fn cells_are_finalized_once_and_never_walls(sc in scenario()) {
        let Some(g) = sc.build(true) else { return Ok(()); };
        let mut pe = PathEngine::new(g.bounds());
        let mut seen: Vec<Point> =
            pe.search(&g, g.start(), g.goal()).iter().map(|n| n.pos).collect();
        prop_assert!(seen.iter().all(|&p| !g.is_blocked(p)));
        let n = seen.len();
        seen.sort();
        seen.dedup();
        prop_assert_eq!(seen.len(), n);
    }

    #[test]
    fn path_weight_equals_goal_distance(sc in scenario()) {
        let Some(g) = sc.build(true) else { return Ok(()); };
        let mut pe = PathEngine::new(g.bounds());
        pe.search(&g, g.start(), g.goal());
        let path = pe.reconstruct_path(g.goal());
        if !pe.reached() {
            prop_assert_eq!(path, vec![g.goal()]);
            return Ok(());
        }
        prop_assert_eq!(path.first(), Some(&g.start()));
        prop_assert_eq!(path.last(), Some(&g.goal()));
        prop_assert!(path.windows(2).all(|w| w[0].is_adjacent(w[1])));
        prop_assert!(path.iter().all(|&p| !g.is_blocked(p)));
        let total: i64 = path[1..].iter().filter_map(|&p| g.weight(p)).map(i64::from).sum();
        prop_assert_eq!(total, pe.distance_at(g.goal()));
    }

    #[test]
    fn goal_distance_is_optimal(sc in scenario()) {
        let Some(g) = sc.build(true) else { return Ok(()); };
        let reference = relaxed_distances(&g);
        let goal_idx = g.bounds().index(g.goal()).unwrap();
        let mut pe = PathEngine::new(g.bounds());
        pe.search(&g, g.start(), g.goal());
        prop_assert_eq!(pe.reached(), reference[goal_idx] != UNREACHABLE);
        if pe.reached() {
            prop_assert_eq!(pe.distance_at(g.goal()), reference[goal_idx]);
        }
    }

    #[test]
    fn searching_twice_is_idempotent(sc in scenario()) {
        let Some(g) = sc.build(true) else { return Ok(()); };
        let mut pe = PathEngine::new(g.bounds());
        let first = pe.search(&g, g.start(), g.goal()).to_vec();
        let second = pe.search(&g, g.start(), g.goal()).to_vec();
        prop_assert_eq!(first, second);
    }
}
