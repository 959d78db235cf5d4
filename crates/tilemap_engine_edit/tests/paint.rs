use pretty_assertions::assert_eq;
use tilemap_engine_edit::{PaintSession, Tile, TileMap};

fn blocked_count(map: &TileMap) -> usize {
    map.iter_cells().filter(|(_, tile)| tile.is_blocked()).count()
}

#[test]
fn gesture_from_open_cell_blocks_uniformly() {
    let mut map = TileMap::new((8, 8)).unwrap();
    map.set(0, 3, Tile::Blocked);
    map.take_dirty_region();

    let mut session = PaintSession::new();
    session.set_brush_extent(1).unwrap();

    // anchor is open, so the whole gesture blocks - even cells that
    // already are blocked stay blocked instead of toggling back
    session.begin(&map, 0, 0);
    for col in 0..6 {
        session.touch(&mut map, 0, col);
    }
    session.end();

    for col in 0..6 {
        assert_eq!(Tile::Blocked, map.get(0, col).unwrap(), "col {col}");
    }
    assert_eq!(6, blocked_count(&map));
}

#[test]
fn gesture_from_blocked_cell_opens_uniformly() {
    let mut map = TileMap::new((8, 8)).unwrap();
    for col in 0..8 {
        map.set(3, col, Tile::Blocked);
    }

    let mut session = PaintSession::new();
    session.set_brush_extent(1).unwrap();

    session.begin(&map, 3, 0);
    for col in 0..8 {
        session.touch(&mut map, 3, col);
    }
    session.end();

    assert_eq!(0, blocked_count(&map));
}

#[test]
fn brush_covers_extent_squared_cells() {
    let mut map = TileMap::new((10, 10)).unwrap();
    let mut session = PaintSession::new();
    session.set_brush_extent(3).unwrap();

    session.begin(&map, 4, 4);
    assert!(session.touch(&mut map, 4, 4));
    session.end();

    assert_eq!(9, blocked_count(&map));
    for row in 4..7 {
        for col in 4..7 {
            assert_eq!(Tile::Blocked, map.get(row, col).unwrap());
        }
    }
    // anchored top-left, extending down-right only
    assert_eq!(Tile::Open, map.get(3, 4).unwrap());
    assert_eq!(Tile::Open, map.get(4, 3).unwrap());
}

#[test]
fn brush_is_clipped_at_the_edge() {
    // one touch at (r, c) changes exactly min(k, h-r) * min(k, w-c) cells
    for (row, col, extent, expected) in [(0, 0, 4, 16), (4, 5, 4, 6), (5, 7, 4, 1), (5, 0, 2, 2), (0, 6, 3, 6)] {
        let mut map = TileMap::new((8, 6)).unwrap();
        let mut session = PaintSession::new();
        session.set_brush_extent(extent).unwrap();

        session.begin(&map, row, col);
        session.touch(&mut map, row, col);
        session.end();

        assert_eq!(expected, blocked_count(&map), "touch at ({row}, {col}) extent {extent}");
    }
}

#[test]
fn lingering_pointer_writes_once() {
    let mut map = TileMap::new((8, 8)).unwrap();
    let mut session = PaintSession::new();

    session.begin(&map, 2, 2);
    assert!(session.touch(&mut map, 2, 2));
    map.take_dirty_region();

    assert!(!session.touch(&mut map, 2, 2));
    assert_eq!(None, map.take_dirty_region());

    // moving away and coming back writes again
    assert!(session.touch(&mut map, 5, 5));
    assert!(session.touch(&mut map, 2, 2));
}

#[test]
fn out_of_bounds_anchor_defers_the_decision() {
    let mut map = TileMap::new((4, 4)).unwrap();
    map.set(1, 1, Tile::Blocked);
    let mut session = PaintSession::new();
    session.set_brush_extent(1).unwrap();

    session.begin(&map, -1, -1);
    assert!(session.is_active());

    // still outside: nothing happens
    assert!(!session.touch(&mut map, -1, 0));
    assert_eq!(1, blocked_count(&map));

    // first in-bounds contact is on a blocked cell, so this gesture opens
    assert!(session.touch(&mut map, 1, 1));
    assert_eq!(Tile::Open, map.get(1, 1).unwrap());

    // and keeps opening, it is not re-decided per cell
    session.touch(&mut map, 0, 0);
    assert_eq!(Tile::Open, map.get(0, 0).unwrap());
    assert_eq!(0, blocked_count(&map));
}

#[test]
fn brush_extent_is_captured_at_begin() {
    let mut map = TileMap::new((10, 10)).unwrap();
    let mut session = PaintSession::new();
    session.set_brush_extent(3).unwrap();

    session.begin(&map, 0, 0);
    session.set_brush_extent(1).unwrap();
    session.touch(&mut map, 0, 0);
    session.end();

    assert_eq!(9, blocked_count(&map));

    // the new extent applies from the next gesture on
    session.begin(&map, 7, 7);
    session.touch(&mut map, 7, 7);
    session.end();
    assert_eq!(10, blocked_count(&map));
}

#[test]
fn touch_after_end_is_a_no_op() {
    let mut map = TileMap::new((4, 4)).unwrap();
    let mut session = PaintSession::new();

    session.begin(&map, 0, 0);
    session.touch(&mut map, 0, 0);
    session.end();

    let before = map.clone();
    assert!(!session.touch(&mut map, 3, 3));
    assert_eq!(before, map);
}

#[test]
fn cancelled_gesture_keeps_committed_writes() {
    let mut map = TileMap::new((4, 4)).unwrap();
    let mut session = PaintSession::new();
    session.set_brush_extent(1).unwrap();

    session.begin(&map, 0, 0);
    session.touch(&mut map, 0, 0);
    // pointer leaves the surface - no rollback of what was stamped
    session.end();

    assert_eq!(Tile::Blocked, map.get(0, 0).unwrap());
}

#[test]
fn begin_restarts_a_running_gesture() {
    let mut map = TileMap::new((4, 4)).unwrap();
    let mut session = PaintSession::new();
    session.set_brush_extent(1).unwrap();

    session.begin(&map, 0, 0);
    session.touch(&mut map, 0, 0);

    // new pointer-down re-reads the map: (0, 0) is blocked now, so the
    // fresh gesture opens cells
    session.begin(&map, 0, 0);
    session.touch(&mut map, 0, 0);
    session.end();

    assert_eq!(Tile::Open, map.get(0, 0).unwrap());
}
