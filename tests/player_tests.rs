use std::collections::VecDeque;

use broadside::{
    Board, BoardError, Commander, Coord, Direction, Player, RenderMode, Shot, ShipType,
    SquareStatus, NUM_SHIPS, SHIPS,
};

fn at(s: &str) -> Coord {
    s.parse().unwrap()
}

/// Standard layout: every ship starts in column A and heads east, one row each.
fn layout() -> [(Coord, Direction); NUM_SHIPS] {
    [
        (at("A1"), Direction::East),
        (at("A2"), Direction::East),
        (at("A3"), Direction::East),
        (at("A4"), Direction::East),
        (at("A5"), Direction::East),
    ]
}

fn placed_player() -> Player {
    let mut player = Player::new("Ada");
    for (index, (start, direction)) in layout().into_iter().enumerate() {
        player.place_ship(index, start, direction).unwrap();
    }
    player
}

/// Every cell of the standard layout, ship by ship.
fn layout_cells() -> Vec<Coord> {
    layout()
        .into_iter()
        .zip(SHIPS)
        .flat_map(|((start, direction), ship)| {
            Board::span(start, direction, ship.size()).unwrap()
        })
        .collect()
}

/// Commander replaying a fixed list of placements and recording feedback.
#[derive(Default)]
struct Scripted {
    placements: VecDeque<(Coord, Direction)>,
    rejected: Vec<BoardError>,
    placed: Vec<&'static str>,
    pauses: usize,
}

impl Commander for Scripted {
    fn choose_placement(
        &mut self,
        _player: &str,
        _index: usize,
        _ship: ShipType,
        _board: &Board,
    ) -> anyhow::Result<(Coord, Direction)> {
        self.placements
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("script exhausted"))
    }

    fn choose_target(&mut self, _attacker: &str, _target: &Board) -> anyhow::Result<Coord> {
        anyhow::bail!("not used")
    }

    fn placement_rejected(&mut self, err: &BoardError) -> anyhow::Result<()> {
        self.rejected.push(err.clone());
        Ok(())
    }

    fn ship_placed(
        &mut self,
        _player: &str,
        ship: ShipType,
        _start: Coord,
        _direction: Direction,
        view: &str,
    ) -> anyhow::Result<()> {
        assert!(view.contains('S'));
        self.placed.push(ship.name());
        Ok(())
    }

    fn pause(&mut self) -> anyhow::Result<()> {
        self.pauses += 1;
        Ok(())
    }
}

#[test]
fn test_new_player_has_standard_fleet() {
    let player = Player::new("Ada");
    assert_eq!(player.name(), "Ada");
    assert_eq!(player.fleet().len(), NUM_SHIPS);
    for (ship, def) in player.fleet().iter().zip(SHIPS) {
        assert_eq!(ship.ship_type(), def);
        assert_eq!(ship.hits(), 0);
    }
    assert_eq!(player.board(), &Board::new());
    assert!(!player.has_lost());
}

#[test]
fn test_set_name() {
    let mut player = Player::new("Ada");
    player.set_name("Grace");
    assert_eq!(player.name(), "Grace");
    assert!(player.render(RenderMode::Placement, None).contains("of Grace!"));
}

#[test]
fn test_place_ship_twice_or_bad_index() {
    let mut player = Player::new("Ada");
    player.place_ship(0, at("A1"), Direction::South).unwrap();
    assert!(player.is_placed(0));
    assert_eq!(
        player.place_ship(0, at("H1"), Direction::South),
        Err(BoardError::ShipAlreadyPlaced("Carrier"))
    );
    assert_eq!(
        player.place_ship(NUM_SHIPS, at("H1"), Direction::South),
        Err(BoardError::InvalidIndex(NUM_SHIPS))
    );
    assert!(!player.is_placed(NUM_SHIPS));
}

#[test]
fn test_failed_placement_does_not_mark_placed() {
    let mut player = Player::new("Ada");
    assert!(player.place_ship(0, at("A1"), Direction::North).is_err());
    assert!(!player.is_placed(0));
    player.place_ship(0, at("A5"), Direction::North).unwrap();
    assert!(player.is_placed(0));
}

#[test]
fn test_place_fleet_retries_until_accepted() {
    let mut player = Player::new("Ada");
    let mut script = Scripted::default();
    // Carrier off the board, then accepted
    script.placements.push_back((at("A1"), Direction::North));
    script.placements.push_back((at("A1"), Direction::East));
    // Battleship overlapping the carrier, then accepted
    script.placements.push_back((at("A1"), Direction::South));
    script.placements.extend(layout().into_iter().skip(1));

    player.place_fleet(&mut script).unwrap();

    assert_eq!(script.rejected.len(), 2);
    assert!(matches!(script.rejected[0], BoardError::OutOfBounds { ship: "Carrier", .. }));
    assert!(matches!(script.rejected[1], BoardError::Overlaps { ship: "Battleship", .. }));
    assert_eq!(
        script.placed,
        vec!["Carrier", "Battleship", "Cruiser", "Submarine", "Destroyer"]
    );
    assert_eq!(script.pauses, 1);
    assert!(script.placements.is_empty());
    assert_eq!(player.board().ship_cells(), broadside::TOTAL_SHIP_CELLS);
    assert!((0..NUM_SHIPS).all(|i| player.is_placed(i)));
}

#[test]
fn test_place_fleet_skips_placed_ships() {
    let mut player = Player::new("Ada");
    player.place_ship(0, at("A1"), Direction::East).unwrap();
    let mut script = Scripted::default();
    script.placements.extend(layout().into_iter().skip(1));
    player.place_fleet(&mut script).unwrap();
    assert_eq!(script.placed.len(), NUM_SHIPS - 1);
}

#[test]
fn test_place_fleet_propagates_commander_errors() {
    let mut player = Player::new("Ada");
    let mut script = Scripted::default();
    assert!(player.place_fleet(&mut script).is_err());
}

#[test]
fn test_receive_fire_hits_own_fleet() {
    let mut player = placed_player();
    assert_eq!(player.receive_fire(at("A3")), Ok(Shot::Hit));
    assert_eq!(player.fleet()[2].hits(), 1);
    assert_eq!(player.board().status(at("A3")), SquareStatus::Hit);
    assert_eq!(player.receive_fire(at("H8")), Ok(Shot::Miss));
    assert_eq!(
        player.receive_fire(at("A3")),
        Err(BoardError::AlreadyFired(at("A3")))
    );
    assert_eq!(player.fleet()[2].hits(), 1);
}

#[test]
fn test_lost_only_after_seventeenth_hit() {
    let mut player = placed_player();
    let cells = layout_cells();
    assert_eq!(cells.len(), 17);

    for (i, &cell) in cells.iter().enumerate() {
        assert!(!player.has_lost(), "lost early after {i} hits");
        assert!(player.receive_fire(cell).unwrap().is_hit());
    }
    assert!(player.has_lost());
    assert_eq!(player.ships_sunk(), NUM_SHIPS);
}

#[test]
fn test_not_lost_while_any_ship_floats() {
    let mut player = placed_player();
    // sink everything except the destroyer on row 5
    for cell in layout_cells().into_iter().filter(|c| c.row() != 4) {
        player.receive_fire(cell).unwrap();
    }
    assert_eq!(player.ships_sunk(), NUM_SHIPS - 1);
    assert!(!player.has_lost());
    assert_eq!(player.receive_fire(at("A5")), Ok(Shot::Hit));
    assert_eq!(player.receive_fire(at("B5")), Ok(Shot::Sunk("Destroyer")));
    assert!(player.has_lost());
}

#[test]
fn test_reset_clears_board_and_fleet() {
    let mut player = placed_player();
    player.receive_fire(at("A1")).unwrap();
    player.reset();
    assert_eq!(player.board(), &Board::new());
    assert!(player.fleet().iter().all(|s| s.hits() == 0));
    assert!((0..NUM_SHIPS).all(|i| !player.is_placed(i)));
    player.place_ship(0, at("A1"), Direction::East).unwrap();
}
