use broadside::{AlreadyFired, Square, SquareStatus};

#[test]
fn test_status_table() {
    let mut empty = Square::new();
    assert_eq!(empty.status(), SquareStatus::Empty);
    assert_eq!(empty.fire(), Ok(None));
    assert_eq!(empty.status(), SquareStatus::Miss);

    let mut occupied = Square::new();
    occupied.add_ship(3);
    assert_eq!(occupied.status(), SquareStatus::Ship);
    assert_eq!(occupied.fire(), Ok(Some(3)));
    assert_eq!(occupied.status(), SquareStatus::Hit);
}

#[test]
fn test_fire_twice_is_rejected() {
    let mut square = Square::new();
    square.add_ship(0);
    square.fire().unwrap();
    let before = square;
    assert_eq!(square.fire(), Err(AlreadyFired));
    assert_eq!(square, before);

    let mut water = Square::new();
    water.fire().unwrap();
    assert_eq!(water.fire(), Err(AlreadyFired));
    assert_eq!(water.status(), SquareStatus::Miss);
}

#[test]
fn test_reset_clears_ship_and_fired() {
    let mut square = Square::new();
    square.add_ship(1);
    square.fire().unwrap();
    square.reset();
    assert_eq!(square.status(), SquareStatus::Empty);
    assert_eq!(square.ship(), None);
}

#[test]
fn test_is_fired() {
    assert!(!SquareStatus::Empty.is_fired());
    assert!(!SquareStatus::Ship.is_fired());
    assert!(SquareStatus::Hit.is_fired());
    assert!(SquareStatus::Miss.is_fired());
}
