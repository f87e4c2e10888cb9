use std::process::Command;

fn run_sim(args: &[&str]) -> serde_json::Value {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(args)
        .env("BROADSIDE_LOG", "off")
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    serde_json::from_str(stdout.trim()).expect("invalid json")
}

#[test]
fn sim_binary_smoke() {
    let v = run_sim(&["--seed", "12345"]);
    let winner = v["winner"].as_str().expect("winner should be a name");
    assert!(winner == "player" || winner == "opponent");
    assert!(v["turns"].as_u64().unwrap() > 0);

    let loser = if winner == "player" { "opponent" } else { "player" };
    assert_eq!(v[loser]["ships_remaining"], 0);
    assert_eq!(v[loser]["ships_total"], 9);
}

#[test]
fn sim_seed_is_reproducible() {
    let args = ["--seed", "7", "--random-orientation"];
    assert_eq!(run_sim(&args), run_sim(&args));
}

#[test]
fn sim_rejects_board_too_small_for_fleet() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["--seed", "1", "--height", "4", "--width", "4"])
        .env("BROADSIDE_LOG", "off")
        .output()
        .expect("failed to run sim binary");
    assert!(!output.status.success());
}
