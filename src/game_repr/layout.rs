//! Text layouts for the grid world.
//!
//! A layout is a rectangle of characters:
//! `%` wall, `.` food, `o` capsule, `P` Pacman start, `G` ghost start,
//! space for an empty cell. The first text row is the top of the board.

use std::path::Path;
use std::str::FromStr;

use super::{Coord, Grid};
use crate::error::LayoutError;

/// Parsed static description of a board and its starting positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub walls: Grid<bool>,
    pub food: Grid<bool>,
    pub capsules: Vec<Coord>,
    pub pacman_start: Coord,
    /// Ghost starts in text reading order; ghost `i` is agent `i + 1`
    pub ghost_starts: Vec<Coord>,
}

const TEST_CLASSIC: &str = "\
%%%%%
% . %
%.G.%
% . %
%. .%
%   %
%  .%
%   %
%P .%
%%%%%";

const MINIMAX_CLASSIC: &str = "\
%%%%%%%%%
%.P    G%
% %.%G%%%
%G    %%%
%%%%%%%%%";

const TRAPPED_CLASSIC: &str = "\
%%%%%%%%
%   P G%
%G%%%%%%
%....  %
%%%%%%%%";

const SMALL_CLASSIC: &str = "\
%%%%%%%%%%%%%%%%%%%%
%......%G  G%......%
%.%%...%%  %%...%%.%
%.%o.%........%.o%.%
%.%%.%.%%%%%%.%.%%.%
%........P.........%
%%%%%%%%%%%%%%%%%%%%";

const BUILTIN_LAYOUTS: &[(&str, &str)] = &[
    ("testClassic", TEST_CLASSIC),
    ("minimaxClassic", MINIMAX_CLASSIC),
    ("trappedClassic", TRAPPED_CLASSIC),
    ("smallClassic", SMALL_CLASSIC),
];

impl Layout {
    pub fn width(&self) -> usize {
        self.walls.width()
    }

    pub fn height(&self) -> usize {
        self.walls.height()
    }

    pub fn num_ghosts(&self) -> usize {
        self.ghost_starts.len()
    }

    /// Names of the layouts compiled into the crate
    pub fn builtin_names() -> impl Iterator<Item = &'static str> {
        BUILTIN_LAYOUTS.iter().map(|(name, _)| *name)
    }

    /// Look up a built-in layout by (case-insensitive) name
    pub fn builtin(name: &str) -> Result<Layout, LayoutError> {
        BUILTIN_LAYOUTS
            .iter()
            .find(|(builtin, _)| builtin.eq_ignore_ascii_case(name))
            .ok_or_else(|| LayoutError::UnknownLayout(name.to_string()))
            .and_then(|(_, text)| text.parse())
    }

    /// Resolve `name_or_path` as a built-in name first, then as a file
    pub fn load(name_or_path: &str) -> Result<Layout, LayoutError> {
        match Layout::builtin(name_or_path) {
            Err(LayoutError::UnknownLayout(_)) => Layout::from_file(Path::new(name_or_path)),
            other => other,
        }
    }

    pub fn from_file(path: &Path) -> Result<Layout, LayoutError> {
        let text = std::fs::read_to_string(path).map_err(|source| LayoutError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        text.parse()
    }

    /// Keep only the first `max_ghosts` ghost starts
    pub fn with_max_ghosts(mut self, max_ghosts: usize) -> Layout {
        self.ghost_starts.truncate(max_ghosts);
        self
    }
}

impl FromStr for Layout {
    type Err = LayoutError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = text
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.trim().is_empty())
            .collect();

        let Some(first) = rows.first() else {
            return Err(LayoutError::Empty);
        };
        let width = first.chars().count();
        let height = rows.len();

        let mut walls = Grid::new(width, height);
        let mut food = Grid::new(width, height);
        let mut capsules = Vec::new();
        let mut pacman_start = None;
        let mut ghost_starts = Vec::new();

        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(LayoutError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }

            let y = (height - 1 - row) as i32;
            for (col, ch) in line.chars().enumerate() {
                let at = Coord::new(col as i32, y);
                match ch {
                    '%' => walls.set(at, true),
                    '.' => food.set(at, true),
                    'o' => capsules.push(at),
                    'P' => {
                        if pacman_start.replace(at).is_some() {
                            return Err(LayoutError::DuplicatePacman);
                        }
                    }
                    'G' => ghost_starts.push(at),
                    ' ' => {}
                    _ => return Err(LayoutError::UnknownChar { ch, row, col }),
                }
            }
        }

        let pacman_start = pacman_start.ok_or(LayoutError::MissingPacman)?;

        Ok(Layout {
            walls,
            food,
            capsules,
            pacman_start,
            ghost_starts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_builtins_parse() {
        for name in Layout::builtin_names() {
            let layout = Layout::builtin(name).unwrap();
            assert!(layout.width() > 0 && layout.height() > 0, "{name}");
        }
    }

    #[test]
    fn test_builtin_lookup_ignores_case() {
        assert!(Layout::builtin("MINIMAXCLASSIC").is_ok());
        assert!(matches!(
            Layout::builtin("nope"),
            Err(LayoutError::UnknownLayout(_))
        ));
    }

    #[test]
    fn test_y_axis_grows_north() {
        let layout: Layout = "%%%\n%P%\n% %\n%%%".parse().unwrap();
        assert_eq!(layout.height(), 4);
        assert_eq!(layout.pacman_start, Coord::new(1, 2));
    }

    #[test]
    fn test_minimax_classic_contents() {
        let layout = Layout::builtin("minimaxClassic").unwrap();
        assert_eq!(layout.num_ghosts(), 3);
        assert_eq!(layout.food.count(), 2);
        assert_eq!(layout.pacman_start, Coord::new(2, 3));
        assert!(layout.walls.is_set(Coord::new(0, 0)));
    }

    #[test]
    fn test_with_max_ghosts() {
        let layout = Layout::builtin("minimaxClassic").unwrap().with_max_ghosts(1);
        assert_eq!(layout.num_ghosts(), 1);
    }
}
