use pretty_assertions::assert_eq;
use tilemap_engine::{EngineError, Position, Rectangle, Tile, TileMap};

#[test]
fn out_of_bounds_get_reports_coordinates() {
    let map = TileMap::new((4, 2)).unwrap();
    match map.get(7, 9) {
        Err(EngineError::OutOfBounds { row, col, width, height }) => {
            assert_eq!((7, 9, 4, 2), (row, col, width, height));
        }
        other => panic!("expected OutOfBounds, got {other:?}"),
    }
}

#[test]
fn out_of_bounds_writes_change_nothing() {
    let mut map = TileMap::new((3, 3)).unwrap();
    let before = map.clone();

    for (row, col) in [(-1, 0), (0, -1), (3, 0), (0, 3), (100, 100), (i32::MIN, i32::MAX)] {
        map.set(row, col, Tile::Blocked);
        map.toggle(row, col);
    }

    assert_eq!(before, map);
    assert_eq!(None, map.take_dirty_region());
}

#[test]
fn maps_compare_by_cells() {
    let mut a = TileMap::new((4, 4)).unwrap();
    let mut b = TileMap::new((4, 4)).unwrap();
    assert_eq!(a, b);

    a.set(2, 2, Tile::Blocked);
    assert_ne!(a, b);

    b.set(2, 2, Tile::Blocked);
    // one map has pending damage, the other got drained; still equal
    b.take_dirty_region();
    assert_eq!(a, b);

    assert_ne!(TileMap::new((4, 2)).unwrap(), TileMap::new((2, 4)).unwrap());
}

#[test]
fn iter_cells_is_row_major() {
    let mut map = TileMap::new((2, 2)).unwrap();
    map.set(0, 1, Tile::Blocked);

    let cells: Vec<(Position, Tile)> = map.iter_cells().collect();
    assert_eq!(
        vec![
            (Position::from_row_col(0, 0), Tile::Open),
            (Position::from_row_col(0, 1), Tile::Blocked),
            (Position::from_row_col(1, 0), Tile::Open),
            (Position::from_row_col(1, 1), Tile::Open),
        ],
        cells
    );
}

#[test]
fn rectangle_covers_whole_map() {
    let map = TileMap::new((5, 3)).unwrap();
    assert_eq!(Rectangle::from(0, 0, 5, 3), map.get_rectangle());
    assert!(map.get_rectangle().contains_pt(Position::new(4, 2)));
    assert!(!map.get_rectangle().contains_pt(Position::new(5, 2)));
}
