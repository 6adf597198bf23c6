//! Text-mode front end for the wayfind engine.
//!
//! Demonstrates: grid construction from a [`GridConfig`], mouse-style wall
//! painting and endpoint dragging, Dijkstra search, and staged playback of
//! the visitation sequence followed by the shortest path.

use std::time::Duration;

use rand::Rng;
use wayfind_core::{CellKind, Grid, GridConfig, GridError, Point};
use wayfind_paths::{PathEngine, Solution};

/// Pause after revealing one visited cell.
pub const VISIT_DELAY: Duration = Duration::from_millis(10);
/// Pause after revealing one path cell.
pub const PATH_DELAY: Duration = Duration::from_millis(50);

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// What a held mouse button is currently doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Drag {
    Idle,
    Walls,
    Start,
    Goal,
}

/// An editing session: one grid, the engine that searches it, and the
/// pointer state of the user editing it.
pub struct Board {
    grid: Grid,
    engine: PathEngine,
    drag: Drag,
}

impl Board {
    pub fn new(grid: Grid) -> Self {
        let engine = PathEngine::new(grid.bounds());
        Self {
            grid,
            engine,
            drag: Drag::Idle,
        }
    }

    /// Build a board from a configuration, drawing weights from `rng`.
    pub fn from_config(cfg: &GridConfig, rng: &mut impl Rng) -> Result<Self, GridError> {
        Ok(Self::new(Grid::from_config(cfg, rng)?))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Button pressed over `p`: grab an endpoint or toggle a wall.
    pub fn press(&mut self, p: Point) -> Result<(), GridError> {
        self.drag = if p == self.grid.start() {
            Drag::Start
        } else if p == self.grid.goal() {
            Drag::Goal
        } else {
            self.grid.toggle_wall(p)?;
            Drag::Walls
        };
        Ok(())
    }

    /// Pointer entered `p` with the button held.
    ///
    /// Painting across an endpoint leaves it alone.
    pub fn enter(&mut self, p: Point) -> Result<(), GridError> {
        match self.drag {
            Drag::Idle => Ok(()),
            Drag::Start => self.grid.move_start(p),
            Drag::Goal => self.grid.move_goal(p),
            Drag::Walls => match self.grid.toggle_wall(p) {
                Err(GridError::EndpointLocked(_)) => Ok(()),
                r => r.map(|_| ()),
            },
        }
    }

    /// Button released.
    pub fn release(&mut self) {
        self.drag = Drag::Idle;
    }

    /// Remove every wall.
    pub fn clear(&mut self) {
        self.grid.clear_walls();
    }

    /// Search the current grid from start to goal.
    pub fn solve(&mut self) -> Solution {
        self.engine.solve(&self.grid)
    }
}

// ---------------------------------------------------------------------------
// Playback
// ---------------------------------------------------------------------------

/// One reveal in the playback of a [`Solution`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Visit(Point),
    Path(Point),
}

impl Step {
    /// How long to hold the frame after this step.
    pub fn delay(self) -> Duration {
        match self {
            Self::Visit(_) => VISIT_DELAY,
            Self::Path(_) => PATH_DELAY,
        }
    }
}

/// Every visited cell in finalization order, then the path from start to
/// goal if one was found.
pub fn playback(solution: &Solution) -> Vec<Step> {
    let visits = solution.visited.iter().map(|n| Step::Visit(n.pos));
    let path = solution.path.iter().flatten().map(|&p| Step::Path(p));
    visits.chain(path).collect()
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    None,
    Visited,
    Path,
}

/// Draw `grid` with the first `shown` steps applied.
///
/// `S`/`G` are the endpoints, `#` walls, `*` path cells and `.` visited
/// cells; any other cell shows its weight (`+` above 9).
pub fn render(grid: &Grid, steps: &[Step]) -> String {
    let rng = grid.bounds();
    let mut marks = vec![Mark::None; rng.len()];
    for step in steps {
        let (p, m) = match *step {
            Step::Visit(p) => (p, Mark::Visited),
            Step::Path(p) => (p, Mark::Path),
        };
        if let Some(i) = rng.index(p) {
            marks[i] = m;
        }
    }

    let width = grid.cols() as usize;
    let mut out = String::with_capacity((width + 1) * grid.rows() as usize);
    for (i, cell) in grid.iter().enumerate() {
        let ch = match (cell.kind(), marks[i]) {
            (CellKind::Start, _) => 'S',
            (CellKind::Goal, _) => 'G',
            (CellKind::Wall, _) => '#',
            (_, Mark::Path) => '*',
            (_, Mark::Visited) => '.',
            (CellKind::Open, Mark::None) => {
                u32::try_from(cell.weight())
                    .ok()
                    .and_then(|w| char::from_digit(w, 10))
                    .unwrap_or('+')
            }
        };
        out.push(ch);
        if (i + 1) % width == 0 {
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        let grid = Grid::new(3, 4, Point::at(0, 0), Point::at(2, 3), |p| {
            if p.col() == 3 { 12 } else { p.col() + 1 }
        })
        .unwrap();
        Board::new(grid)
    }

    #[test]
    fn render_plain_grid() {
        let b = board();
        assert_eq!(render(b.grid(), &[]), "S23+\n123+\n123G\n");
    }

    #[test]
    fn press_and_drag_paints_walls() {
        let mut b = board();
        b.press(Point::at(1, 0)).unwrap();
        b.enter(Point::at(1, 1)).unwrap();
        b.enter(Point::at(0, 0)).unwrap();
        b.release();
        b.enter(Point::at(1, 2)).unwrap();
        assert_eq!(b.grid().walls().collect::<Vec<_>>(), vec![Point::at(1, 0), Point::at(1, 1)]);
        assert_eq!(b.grid().start(), Point::at(0, 0));
    }

    #[test]
    fn dragging_an_endpoint_moves_it() {
        let mut b = board();
        b.press(Point::at(2, 3)).unwrap();
        b.enter(Point::at(2, 2)).unwrap();
        b.enter(Point::at(1, 2)).unwrap();
        b.release();
        assert_eq!(b.grid().goal(), Point::at(1, 2));
        assert_eq!(b.enter(Point::at(0, 1)), Ok(()));
        assert_eq!(b.grid().walls().count(), 0);
    }

    #[test]
    fn playback_visits_then_path() {
        let mut b = board();
        let solution = b.solve();
        let steps = playback(&solution);
        let visits = steps.iter().take_while(|s| matches!(s, Step::Visit(_))).count();
        assert_eq!(visits, solution.visited.len());
        let path: Vec<Point> = steps[visits..]
            .iter()
            .map(|s| match *s {
                Step::Path(p) => p,
                Step::Visit(p) => panic!("visit {p} after path started"),
            })
            .collect();
        assert_eq!(Some(path), solution.path);
        assert_eq!(steps[0].delay(), VISIT_DELAY);
        assert_eq!(steps[steps.len() - 1].delay(), PATH_DELAY);
    }

    #[test]
    fn render_marks_path_over_visits() {
        let grid = Grid::new(1, 4, Point::at(0, 0), Point::at(0, 3), |_| 1).unwrap();
        let mut b = Board::new(grid);
        let solution = b.solve();
        let frame = render(b.grid(), &playback(&solution));
        assert_eq!(frame, "S**G\n");
    }

    #[test]
    fn unreachable_goal_plays_visits_only() {
        let mut b = board();
        b.press(Point::at(1, 3)).unwrap();
        b.release();
        b.press(Point::at(2, 2)).unwrap();
        b.release();
        let solution = b.solve();
        assert!(!solution.found());
        assert!(playback(&solution).iter().all(|s| matches!(s, Step::Visit(_))));
        b.clear();
        assert!(b.solve().found());
    }
}
