use assert_cmd::Command;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

struct TestContext {
    dir: TempDir,
    data_path: PathBuf,
}

impl TestContext {
    fn new(csv: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_path = dir.path().join("predictions.csv");
        let mut f = File::create(&data_path).unwrap();
        write!(f, "{}", csv).unwrap();
        Self { dir, data_path }
    }

    fn reference() -> Self {
        Self::new(
            "Winrate_vs_Control,Winrate_vs_Aggro,Predicted Winrate\n0.6,0.8,0.5\n0.4,0.8,0.7\n",
        )
    }

    fn cmd(&self, args: &[&str]) -> Command {
        let mut cmd = Command::cargo_bin("deckforge").unwrap();
        cmd.arg("--data").arg(&self.data_path).args(args);
        cmd
    }

    fn json(&self, args: &[&str]) -> serde_json::Value {
        let mut full = args.to_vec();
        full.push("--json");
        let out = self.cmd(&full).output().unwrap();
        assert!(
            out.status.success(),
            "stderr: {}",
            String::from_utf8_lossy(&out.stderr)
        );
        serde_json::from_slice(&out.stdout).expect("stdout is not JSON")
    }
}

#[test]
fn test_traits_report_flags_adaptability() {
    let ctx = TestContext::reference();
    let out = ctx.cmd(&["traits"]).output().unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Adaptability is below threshold"));
    assert!(stdout.contains("https://scryfall.com/search?q=The+Wandering+Emperor"));
}

#[test]
fn test_traits_json_matches_reference_scores() {
    let ctx = TestContext::reference();
    let v = ctx.json(&["traits"]);
    let d = &v["diagnosis"];
    assert_eq!(d["partition"], "Default");
    assert_eq!(d["weak"], serde_json::json!(["Adaptability"]));
    let res = d["scores"]["resilience"].as_f64().unwrap();
    assert!((res - 0.5).abs() < 1e-9);
}

#[test]
fn test_traits_export_writes_file() {
    let ctx = TestContext::reference();
    let export = ctx.dir.path().join("sb.txt");
    ctx.cmd(&["traits", "--export", export.to_str().unwrap()])
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(export).unwrap(),
        "Chandra, Hope's Beacon\nThe Wandering Emperor\nSunfall"
    );
}

#[test]
fn test_threshold_flag_changes_weak_set() {
    let ctx = TestContext::reference();
    let v = ctx.json(&["traits", "--threshold", "0.1"]);
    assert_eq!(v["diagnosis"]["weak"], serde_json::json!([]));
}

#[test]
fn test_unknown_partition_fails() {
    let ctx = TestContext::reference();
    ctx.cmd(&["traits", "--partition", "v9"]).assert().failure();
}

#[test]
fn test_trend_without_predicted_column_still_succeeds() {
    let ctx = TestContext::new("Winrate_vs_Control\n0.5\n");
    ctx.cmd(&["trend"]).assert().success();
}

#[test]
fn test_matchups_json_sorted() {
    let ctx = TestContext::reference();
    let v = ctx.json(&["matchups", "--opponent", "control"]);
    assert_eq!(v["averages"][0]["archetype"], "Aggro");
    assert_eq!(v["selected"]["opponent"], "Control");
}

#[test]
fn test_matchups_unknown_opponent_fails() {
    let ctx = TestContext::reference();
    ctx.cmd(&["matchups", "--opponent", "Ramp"]).assert().failure();
}

#[test]
fn test_matchups_without_columns_warns_and_succeeds() {
    let ctx = TestContext::new("Predicted Winrate\n0.5\n");
    ctx.cmd(&["matchups"]).assert().success();
}

#[test]
fn test_simulate_json() {
    let ctx = TestContext::reference();
    let v = ctx.json(&[
        "simulate",
        "--control",
        "0.55",
        "--midrange",
        "0.60",
        "--tempo",
        "0.52",
        "--aggro",
        "0.65",
        "--combo",
        "0.62",
        "--ramp",
        "0.59",
    ]);
    let scores = &v["diagnosis"]["scores"];
    assert!((scores["explosiveness"].as_f64().unwrap() - 0.62).abs() < 1e-9);
    assert!((scores["late_game"].as_f64().unwrap() - 0.55).abs() < 1e-9);
}

#[test]
fn test_simulate_rejects_out_of_range() {
    let ctx = TestContext::reference();
    ctx.cmd(&["simulate", "--aggro", "1.5"]).assert().failure();
}

#[test]
fn test_data_limit() {
    let ctx = TestContext::reference();
    let v = ctx.json(&["data", "--limit", "1"]);
    assert_eq!(v["rows"].as_array().unwrap().len(), 1);
    assert_eq!(v["headers"][2], "Predicted Winrate");
}

#[test]
fn test_missing_data_file_fails() {
    let mut cmd = Command::cargo_bin("deckforge").unwrap();
    cmd.args(["--data", "/no/such/file.csv", "traits"])
        .assert()
        .failure();
}

#[test]
fn test_config_file_supplies_threshold() {
    let ctx = TestContext::reference();
    let cfg = ctx.dir.path().join("cfg.json");
    fs::write(&cfg, r#"{ "params": { "weak_threshold": 0.9 } }"#).unwrap();
    let v = ctx.json(&["traits", "--config", cfg.to_str().unwrap()]);
    // Every reference score sits below 0.9
    assert_eq!(v["diagnosis"]["weak"].as_array().unwrap().len(), 5);

    let v = ctx.json(&[
        "traits",
        "--config",
        cfg.to_str().unwrap(),
        "--threshold",
        "0.15",
    ]);
    assert_eq!(v["diagnosis"]["weak"], serde_json::json!(["Adaptability"]));
}

fn sunfall_lines(stdout: &[u8]) -> usize {
    String::from_utf8_lossy(stdout)
        .lines()
        .filter(|l| l.trim_start().starts_with("- Sunfall "))
        .count()
}

#[test]
fn test_traits_dedup_lists_shared_card_once() {
    let ctx = TestContext::reference();
    let cfg = ctx.dir.path().join("shared.json");
    fs::write(
        &cfg,
        r#"{
            "params": { "weak_threshold": 0.9 },
            "suggestions": {
                "Resilience": ["Sunfall", "Veil of Summer", "Loran of the Third Path"],
                "Explosiveness": ["Sunfall", "Reinforced Ronin", "Monastery Swiftspear"]
            }
        }"#,
    )
    .unwrap();
    let cfg = cfg.to_str().unwrap();

    // Adaptability's built-in list also carries Sunfall
    let out = ctx.cmd(&["traits", "--config", cfg]).output().unwrap();
    assert!(out.status.success());
    assert_eq!(sunfall_lines(&out.stdout), 3);

    let out = ctx.cmd(&["traits", "--config", cfg, "--dedup"]).output().unwrap();
    assert!(out.status.success());
    assert_eq!(sunfall_lines(&out.stdout), 1);
}

#[test]
fn test_incomplete_suggestion_list_is_rejected() {
    let ctx = TestContext::reference();
    let cfg = ctx.dir.path().join("short.json");
    fs::write(&cfg, r#"{ "suggestions": { "Versatility": ["Restless Bivouac"] } }"#).unwrap();
    ctx.cmd(&["traits", "--config", cfg.to_str().unwrap()])
        .assert()
        .failure();
}

#[test]
fn test_simulate_without_data_file_defaults_adaptability() {
    let out = Command::cargo_bin("deckforge")
        .unwrap()
        .args(["--data", "/no/such/file.csv", "simulate", "--json"])
        .output()
        .unwrap();
    assert!(
        out.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["diagnosis"]["scores"]["adaptability"], 0.0);
}
