use crate::error::Result;
use crate::maze::Maze;
use crate::walls::Direction;

/// Draw the maze as text: `+` corners, `---` and `|` for closed walls,
/// `S` in the entry cell and `E` in the exit cell.
///
/// Only reads the per-cell open-wall sets, so any other renderer can be
/// written the same way.
pub fn render_text(maze: &Maze) -> Result<String> {
    let n = maze.cells();
    let mut out = String::with_capacity((2 * n + 1) * (4 * n + 2));

    for y in 0..n {
        // Top edge of row y.
        for x in 0..n {
            out.push('+');
            out.push_str(if maze.is_open(x, y, Direction::Up)? {
                "   "
            } else {
                "---"
            });
        }
        out.push_str("+\n");

        // Cell interiors with left walls, then the right wall of the last cell.
        for x in 0..n {
            out.push(if maze.is_open(x, y, Direction::Left)? { ' ' } else { '|' });
            out.push_str(if (x, y) == maze.entry() {
                " S "
            } else if (x, y) == maze.exit() {
                " E "
            } else {
                "   "
            });
        }
        out.push(if maze.is_open(n - 1, y, Direction::Right)? { ' ' } else { '|' });
        out.push('\n');
    }

    for _ in 0..n {
        out.push_str("+---");
    }
    out.push_str("+\n");
    Ok(out)
}
