use broadside::{Ship, ShipType, SHIPS};

#[test]
fn test_new_ship_is_undamaged() {
    let ship = Ship::new(ShipType::new("Test", 3));
    assert_eq!(ship.hits(), 0);
    assert_eq!(ship.size(), 3);
    assert_eq!(ship.name(), "Test");
    assert!(!ship.is_sunk());
}

#[test]
fn test_hit_and_sunk() {
    let mut ship = Ship::new(ShipType::new("Test", 2));
    ship.hit();
    assert_eq!(ship.hits(), 1);
    assert!(!ship.is_sunk());
    ship.hit();
    assert!(ship.is_sunk());
}

#[test]
fn test_hits_saturate_at_size() {
    let mut ship = Ship::new(SHIPS[4]);
    for _ in 0..10 {
        ship.hit();
    }
    assert_eq!(ship.hits(), SHIPS[4].size());
    assert!(ship.is_sunk());
}

#[test]
fn test_reset_repairs_damage() {
    let mut ship = Ship::new(SHIPS[0]);
    ship.hit();
    ship.hit();
    ship.reset();
    assert_eq!(ship.hits(), 0);
    assert_eq!(ship.ship_type(), SHIPS[0]);
}

#[test]
fn test_standard_fleet() {
    let fleet: Vec<_> = SHIPS.iter().map(|s| (s.name(), s.size())).collect();
    assert_eq!(
        fleet,
        vec![
            ("Carrier", 5),
            ("Battleship", 4),
            ("Cruiser", 3),
            ("Submarine", 3),
            ("Destroyer", 2),
        ]
    );
    assert_eq!(
        SHIPS.iter().map(|s| s.size()).sum::<usize>(),
        broadside::TOTAL_SHIP_CELLS
    );
}
