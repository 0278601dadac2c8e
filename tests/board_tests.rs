use sea_battle::{
    Board, BoardError, CellState, Coordinate, PlacementGenerator, Ship, ShotResult, TargetState,
    HEIGHT, WIDTH,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn c(x: i32, y: i32) -> Coordinate {
    Coordinate::new(x, y)
}

fn ship(a: (i32, i32), b: (i32, i32)) -> Ship {
    Ship::new(a.into(), b.into()).unwrap()
}

#[test]
fn test_spacing_rule() {
    let mut board = Board::new();
    board.try_add_ship(ship((1, 1), (1, 3))).unwrap();
    assert_eq!(
        board.try_add_ship(Ship::single(c(1, 4))),
        Err(BoardError::TooClose)
    );
    assert_eq!(
        board.try_add_ship(Ship::single(c(2, 2))),
        Err(BoardError::TooClose)
    );
    board.try_add_ship(Ship::single(c(1, 5))).unwrap();
    assert_eq!(board.ship_count(), 2);
    assert!(board.validate().is_ok());
}

#[test]
fn test_failed_add_has_no_effect() {
    let mut board = Board::new();
    board.try_add_ship(ship((1, 1), (1, 3))).unwrap();
    let before = board.clone();

    assert_eq!(
        board.try_add_ship(ship((6, 6), (6, 7))),
        Err(BoardError::OutOfBounds)
    );
    assert_eq!(board, before);
    assert_eq!(
        board.try_add_ship(ship((2, 3), (3, 3))),
        Err(BoardError::TooClose)
    );
    assert_eq!(board, before);
}

#[test]
fn test_quota_and_duplicates() {
    let mut board = Board::new();
    board.try_add_ship(ship((1, 1), (3, 1))).unwrap();
    assert_eq!(
        board.try_add_ship(ship((1, 5), (3, 5))),
        Err(BoardError::CapacityExceeded { size: 3 })
    );

    board.try_add_ship(Ship::single(c(6, 6))).unwrap();
    assert_eq!(
        board.try_add_ship(Ship::single(c(6, 6))),
        Err(BoardError::DuplicateShip)
    );
    assert_eq!(board.count_of_size(1), 1);
    assert_eq!(board.count_of_size(3), 1);
}

#[test]
fn test_fifth_single_ship_exceeds_quota() {
    let mut board = Board::new();
    for at in [(1, 1), (1, 3), (1, 5), (3, 1)] {
        board.try_add_ship(Ship::single(at.into())).unwrap();
    }
    assert_eq!(
        board.try_add_ship(Ship::single(c(5, 5))),
        Err(BoardError::CapacityExceeded { size: 1 })
    );
}

#[test]
fn test_remove_ship() {
    let mut board = Board::new();
    let s = ship((2, 2), (2, 3));
    assert_eq!(board.remove_ship(&s), Err(BoardError::NotFound));
    board.try_add_ship(s).unwrap();
    board.remove_ship(&s).unwrap();
    assert_eq!(board.ship_count(), 0);
    // the spot is free again
    board.try_add_ship(Ship::single(c(2, 4))).unwrap();
}

#[test]
fn test_can_place_is_dry_run() {
    let mut board = Board::new();
    board.try_add_ship(ship((1, 1), (1, 3))).unwrap();
    let before = board.clone();

    assert!(board.can_place(Ship::single(c(1, 5))));
    assert_eq!(board, before);
    assert!(!board.can_place(Ship::single(c(1, 4))));
    assert_eq!(board, before);
}

#[test]
fn test_with_ships() {
    let ok = Board::with_ships([ship((1, 1), (1, 3)), Ship::single(c(3, 3))]).unwrap();
    assert_eq!(ok.ship_count(), 2);

    let err = Board::with_ships([ship((1, 1), (1, 3)), Ship::single(c(2, 3))]).unwrap_err();
    assert_eq!(err, BoardError::TooClose);
}

#[test]
fn test_fire_miss_hit_and_repeat() {
    let mut board = Board::new();
    board.try_add_ship(ship((1, 1), (1, 2))).unwrap();
    board.render();

    assert_eq!(board.fire(c(3, 3)), Ok(ShotResult::Miss));
    assert_eq!(board.fire(c(1, 1)), Ok(ShotResult::Hit));
    assert_eq!(board.fire(c(1, 1)), Err(BoardError::AlreadyTargeted));
    assert_eq!(board.fire(c(3, 3)), Err(BoardError::AlreadyTargeted));
    assert_eq!(board.fire(c(0, 1)), Err(BoardError::OutOfBounds));
    assert_eq!(board.fire(c(1, 7)), Err(BoardError::OutOfBounds));

    assert!(!board.is_targetable(c(1, 1)));
    assert!(!board.is_targetable(c(3, 3)));
    assert!(!board.is_targetable(c(7, 7)));
    assert!(board.is_targetable(c(1, 2)));
    assert_eq!(board.shots_taken(), 2);
}

#[test]
fn test_fleet_alive_follows_rendered_cells() {
    let mut board = Board::new();
    board.try_add_ship(ship((4, 4), (5, 4))).unwrap();
    assert!(!board.fleet_alive(), "nothing is stamped before render");

    board.render();
    assert!(board.fleet_alive());
    board.fire(c(4, 4)).unwrap();
    assert!(board.fleet_alive());
    board.fire(c(5, 4)).unwrap();
    assert!(!board.fleet_alive());
}

#[test]
fn test_hidden_view_masks_ships() {
    let mut board = Board::new();
    board.try_add_ship(ship((2, 2), (2, 4))).unwrap();
    board.render();
    board.fire(c(2, 3)).unwrap();
    board.fire(c(6, 1)).unwrap();

    let view = board.hidden_view();
    assert_eq!(view.get(c(2, 2)), Some(TargetState::Unknown));
    assert_eq!(view.get(c(2, 3)), Some(TargetState::Hit));
    assert_eq!(view.get(c(6, 1)), Some(TargetState::Miss));
    assert_eq!(view.get(c(1, 1)), Some(TargetState::Unknown));

    assert_eq!(board.cells().get(c(2, 2)), Some(CellState::Ship));
    assert_eq!(board.cells().get(c(2, 3)), Some(CellState::Hit));
}

#[test]
fn test_generated_board_validates_and_counts() {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut board = Board::new();
    PlacementGenerator::new()
        .generate_fleet(&mut board, &mut rng)
        .unwrap();
    assert!(board.validate().is_ok());
    assert!(board.is_complete());
    assert_eq!(board.ship_count(), board.required_ship_count());

    board.clear_ships();
    assert_eq!(board.ship_count(), 0);
    assert!(!board.fleet_alive());
}

#[test]
fn test_x_selects_row_and_y_selects_column() {
    let mut board = Board::new();
    board.try_add_ship(ship((2, 1), (2, 3))).unwrap();
    board.render();

    let rows: Vec<_> = board.cells().rows().collect();
    assert_eq!(rows.len(), WIDTH as usize);
    assert_eq!(rows[0].len(), HEIGHT as usize);
    assert_eq!(rows[1][..3], [CellState::Ship; 3]);
    assert!(rows[0].iter().all(|&cell| cell == CellState::Empty));
}
