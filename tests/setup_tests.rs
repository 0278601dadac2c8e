use sea_battle::{
    BoardError, Coordinate, FleetSetup, PlacementGenerator, SetupAction, Ship, REQUIRED_SHIPS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_menu_follows_fleet_progress() {
    let mut setup = FleetSetup::new();
    assert_eq!(
        setup.actions(),
        vec![SetupAction::Randomize, SetupAction::AddShip]
    );

    setup.add_ship(Ship::single(Coordinate::new(1, 1))).unwrap();
    assert_eq!(
        setup.actions(),
        vec![
            SetupAction::Randomize,
            SetupAction::AddShip,
            SetupAction::DeleteShip
        ]
    );

    let mut rng = SmallRng::seed_from_u64(8);
    setup.randomize(&PlacementGenerator::new(), &mut rng).unwrap();
    assert!(setup.ready());
    assert_eq!(
        setup.actions(),
        vec![
            SetupAction::Randomize,
            SetupAction::DeleteShip,
            SetupAction::Finish
        ]
    );
}

#[test]
fn test_finish_requires_complete_fleet() {
    let mut setup = FleetSetup::new();
    let ship = Ship::new(Coordinate::new(2, 2), Coordinate::new(2, 4)).unwrap();
    setup.add_ship(ship).unwrap();

    let (setup, err) = setup.finish().unwrap_err();
    assert_eq!(
        err,
        BoardError::FleetIncomplete {
            placed: 1,
            required: REQUIRED_SHIPS
        }
    );
    // handed back untouched
    assert_eq!(setup.board().ship_count(), 1);
    assert!(setup.board().ships().any(|s| *s == ship));
}

#[test]
fn test_finish_renders_board() {
    let mut setup = FleetSetup::new();
    let mut rng = SmallRng::seed_from_u64(31);
    setup.randomize(&PlacementGenerator::new(), &mut rng).unwrap();
    assert!(!setup.board().fleet_alive());

    let board = setup.finish().unwrap();
    assert!(board.fleet_alive());
    assert_eq!(board.ship_count(), REQUIRED_SHIPS);
}

#[test]
fn test_delete_and_clear() {
    let mut setup = FleetSetup::new();
    let ship = Ship::single(Coordinate::new(3, 3));
    assert_eq!(setup.delete_ship(&ship), Err(BoardError::NotFound));
    setup.add_ship(ship).unwrap();
    setup.delete_ship(&ship).unwrap();
    setup.add_ship(ship).unwrap();
    setup.clear();
    assert_eq!(setup.board().ship_count(), 0);
}

#[test]
fn test_action_labels() {
    assert_eq!(SetupAction::Finish.label(), "finish building");
    assert_eq!(SetupAction::Randomize.label(), "generate a random fleet");
}
