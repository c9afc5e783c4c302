use super::*;
use crate::error::LayoutError;

#[test]
fn test_empty_layout_rejected() {
    assert!(matches!("".parse::<Layout>(), Err(LayoutError::Empty)));
    assert!(matches!("\n  \n".parse::<Layout>(), Err(LayoutError::Empty)));
}

#[test]
fn test_ragged_row_rejected() {
    let err = "%%%%\n%P%\n%%%%".parse::<Layout>().unwrap_err();
    assert!(matches!(
        err,
        LayoutError::RaggedRow { row: 1, expected: 4, found: 3 }
    ));
}

#[test]
fn test_unknown_char_rejected() {
    let err = "%%%\n%P#\n%%%".parse::<Layout>().unwrap_err();
    assert!(matches!(err, LayoutError::UnknownChar { ch: '#', row: 1, col: 2 }));
}

#[test]
fn test_pacman_required_exactly_once() {
    assert!(matches!(
        "%%%\n%.%\n%%%".parse::<Layout>(),
        Err(LayoutError::MissingPacman)
    ));
    assert!(matches!(
        "%%%%\n%PP%\n%%%%".parse::<Layout>(),
        Err(LayoutError::DuplicatePacman)
    ));
}

#[test]
fn test_windows_line_endings() {
    let layout: Layout = "%%%%\r\n%P.%\r\n%%%%\r\n".parse().unwrap();
    assert_eq!(layout.width(), 4);
    assert_eq!(layout.food.as_list(), vec![Coord::new(2, 1)]);
}

#[test]
fn test_capsules_and_ghosts_recorded() {
    let layout: Layout = "%%%%%%\n%PoGG%\n%%%%%%".parse().unwrap();
    assert_eq!(layout.capsules, vec![Coord::new(2, 1)]);
    assert_eq!(layout.ghost_starts, vec![Coord::new(3, 1), Coord::new(4, 1)]);
}

#[test]
fn test_load_missing_file_reports_path() {
    let err = Layout::load("definitely/not/a/layout.lay").unwrap_err();
    assert!(matches!(err, LayoutError::FileRead { .. }));
}
