use std::process::Command;

fn run_sim(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(args)
        .output()
        .expect("failed to run sim binary")
}

#[test]
fn sim_binary_smoke() {
    let output = run_sim(&["1", "10"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert!(["Won", "Lost", "InProgress"].contains(&v["status"].as_str().unwrap()));
    assert_eq!(v["mines"], 10);
    assert_eq!(v["seed"], 1);
    assert!(v["moves"].as_u64().unwrap() >= 1);
}

#[test]
fn sim_binary_is_reproducible() {
    let a = run_sim(&["7", "15"]);
    let b = run_sim(&["7", "15"]);
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn sim_binary_rejects_bad_mine_count() {
    let output = run_sim(&["1", "81"]);
    assert!(!output.status.success());
}
