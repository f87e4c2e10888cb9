use broadside::{
    Board, Game, GameConfig, GameStatus, Orientation, Ship, Side, TurnError, TurnResult,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::json;

#[test]
fn turn_result_json_shape() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut game = Game::new(GameConfig::default()).unwrap();
    game.place_ship(
        Side::Opponent,
        Ship::new("scout", 1, Orientation::Horizontal).unwrap(),
        (3, 4),
    )
    .unwrap();
    game.place_ship(
        Side::Player,
        Ship::new("scout", 1, Orientation::Horizontal).unwrap(),
        (0, 0),
    )
    .unwrap();
    game.start().unwrap();

    let rejected = game.play_turn(Side::Player, None, &mut rng);
    assert_eq!(
        serde_json::to_value(&rejected).unwrap(),
        json!({
            "hit": false,
            "game_on": true,
            "winner": null,
            "coordinates": null,
            "sunk": null,
            "error": "MissingCoordinates",
        })
    );

    let winning = game.play_turn(Side::Player, Some((3, 4)), &mut rng);
    let value = serde_json::to_value(&winning).unwrap();
    assert_eq!(value["hit"], true);
    assert_eq!(value["game_on"], false);
    assert_eq!(value["winner"], "player");
    assert_eq!(value["coordinates"], json!([3, 4]));
    assert_eq!(value["sunk"], "scout");

    let back: TurnResult = serde_json::from_value(value).unwrap();
    assert_eq!(back, winning);
    assert_eq!(game.status(), GameStatus::Finished { winner: Side::Player });
}

#[test]
fn grid_codes_serialize_as_numbers() {
    let mut board = Board::new(2, 3).unwrap();
    board
        .place_ship(
            Ship::new("boat", 2, Orientation::Vertical).unwrap(),
            (0, 2),
            Side::Player,
        )
        .unwrap();
    board.receive_attack((1, 2), Side::Player).unwrap();
    board.receive_attack((0, 0), Side::Player).unwrap();

    let codes = serde_json::to_string(&board.grid(Side::Player).to_codes()).unwrap();
    assert_eq!(codes, "[[-1,0,1],[0,0,9]]");
}

#[test]
fn grid_state_survives_json() {
    let mut board = Board::default();
    board
        .place_ship(
            Ship::new("carrier", 6, Orientation::Horizontal).unwrap(),
            (2, 2),
            Side::Opponent,
        )
        .unwrap();
    board.receive_attack((2, 3), Side::Opponent).unwrap();
    board.receive_attack((9, 9), Side::Opponent).unwrap();

    let grid = board.grid(Side::Opponent);
    let text = serde_json::to_string(grid).unwrap();
    let restored: broadside::Grid = serde_json::from_str(&text).unwrap();
    assert_eq!(&restored, grid);
    assert_eq!(restored.fleet()[0].hit_count(), 1);
    assert!(restored.fleet()[0].squares()[1].is_hit());
}

#[test]
fn turn_error_serializes_by_name() {
    assert_eq!(
        serde_json::to_string(&TurnError::AlreadyAttacked).unwrap(),
        "\"AlreadyAttacked\""
    );
}

#[test]
fn grid_with_wrong_cell_count_rejected() {
    let short = r#"{"height":3,"width":3,"cells":["Empty"],"fleet":[]}"#;
    let err = serde_json::from_str::<broadside::Grid>(short).unwrap_err();
    assert!(err.to_string().contains("Grid needs 9 cells, found 1"));

    let flat = r#"{"height":3,"width":0,"cells":[],"fleet":[]}"#;
    assert!(serde_json::from_str::<broadside::Grid>(flat).is_err());
}

#[test]
fn grid_with_ship_off_the_matrix_rejected() {
    let mut board = Board::new(2, 2).unwrap();
    board
        .place_ship(
            Ship::new("boat", 2, Orientation::Horizontal).unwrap(),
            (1, 0),
            Side::Player,
        )
        .unwrap();
    let mut value = serde_json::to_value(board.grid(Side::Player)).unwrap();
    value["height"] = json!(1);
    value["cells"] = json!(["Empty", "Empty"]);
    assert!(serde_json::from_value::<broadside::Grid>(value).is_err());
}

#[test]
fn ship_with_inconsistent_hits_rejected() {
    let mut ship = Ship::with_coordinates("boat", 2, Orientation::Horizontal, &[(0, 0), (0, 1)])
        .unwrap();
    ship.hit(0, 0);
    let value = serde_json::to_value(&ship).unwrap();
    let back: Ship = serde_json::from_value(value.clone()).unwrap();
    assert_eq!(back.hit_count(), 1);

    let mut inflated = value.clone();
    inflated["hit_count"] = json!(2);
    let err = serde_json::from_value::<Ship>(inflated).unwrap_err();
    assert!(err.to_string().contains("records 2 hits"));

    let mut doubled = value;
    doubled["squares"][1]["x"] = json!(0);
    doubled["squares"][1]["y"] = json!(0);
    assert!(serde_json::from_value::<Ship>(doubled).is_err());

    let unplaced = json!({
        "name": "ghost",
        "length": 0,
        "orientation": "Horizontal",
        "squares": [],
        "hit_count": 0,
    });
    assert!(serde_json::from_value::<Ship>(unplaced).is_err());
}
