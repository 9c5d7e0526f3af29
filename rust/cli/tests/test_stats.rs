mod helpers;

use helpers::{run_cli, EnvGuard};
use serde_json::Value;
use serial_test::serial;
use std::io::Write;

fn simulate(path: &std::path::Path, rounds: &str, seed: &str) -> Value {
    let res = run_cli(
        &[
            "sim",
            "--rounds",
            rounds,
            "--seed",
            seed,
            "--output",
            path.to_str().unwrap(),
        ],
        "",
    );
    assert_eq!(res.code, 0, "stderr: {}", res.stderr);
    serde_json::from_str(&res.stdout).unwrap()
}

#[test]
#[serial]
fn stats_agree_with_sim_summary() {
    let _env = EnvGuard::apply(&[]);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rounds.jsonl");
    let sim = simulate(&path, "40", "21");

    let res = run_cli(&["stats", "--input", path.to_str().unwrap()], "");
    assert_eq!(res.code, 0, "stderr: {}", res.stderr);
    let stats: Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(stats["rounds"], sim["rounds_played"]);
    assert_eq!(stats["wins"], sim["wins"]);
    assert_eq!(stats["losses"], sim["losses"]);
    assert_eq!(stats["pushes"], sim["pushes"]);
    let a = stats["net"].as_f64().unwrap();
    let b = sim["net"].as_f64().unwrap();
    assert!((a - b).abs() < 0.011, "{a} vs {b}");
}

#[test]
#[serial]
fn reads_compressed_histories_in_a_directory() {
    let _env = EnvGuard::apply(&[]);
    let dir = tempfile::tempdir().unwrap();
    let plain = dir.path().join("a.jsonl");
    simulate(&plain, "10", "2");

    let raw = std::fs::read(&plain).unwrap();
    let compressed = zstd::stream::encode_all(&raw[..], 3).unwrap();
    let nested = dir.path().join("old");
    std::fs::create_dir_all(&nested).unwrap();
    std::fs::File::create(nested.join("b.jsonl.zst"))
        .unwrap()
        .write_all(&compressed)
        .unwrap();

    let res = run_cli(&["stats", "--input", dir.path().to_str().unwrap()], "");
    assert_eq!(res.code, 0, "stderr: {}", res.stderr);
    let stats: Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(stats["rounds"], 20);
}

#[test]
#[serial]
fn torn_final_line_is_discarded_with_warning() {
    let _env = EnvGuard::apply(&[]);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rounds.jsonl");
    simulate(&path, "3", "9");
    let mut f = std::fs::OpenOptions::new().append(true).open(&path).unwrap();
    f.write_all(b"{\"round_id\":\"2025").unwrap();

    let res = run_cli(&["stats", "--input", path.to_str().unwrap()], "");
    assert_eq!(res.code, 0);
    let stats: Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(stats["rounds"], 3);
    assert_eq!(stats["corrupted"], 0);
    assert!(res.stderr.contains("incomplete final line"));
}
