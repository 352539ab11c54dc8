use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};
use uuid::Uuid;

struct Fixture {
    dir: TempDir,
    a: Uuid,
    b: Uuid,
    c: Uuid,
    b1: Uuid,
    b2: Uuid,
}

impl Fixture {
    /// Columns A (empty), B (b1, b2), C (empty).
    fn new() -> Self {
        let dir = tempdir().unwrap();
        let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let (b1, b2) = (Uuid::new_v4(), Uuid::new_v4());
        let board = json!({
            "columns": [
                { "id": a, "title": "A", "position": 0 },
                { "id": b, "title": "B", "position": 1 },
                { "id": c, "title": "C", "position": 2 }
            ],
            "cards": [
                { "id": b2, "column_id": b, "title": "b2", "position": 1 },
                { "id": b1, "column_id": b, "title": "b1", "position": 0,
                  "meta": { "badges": [{ "label": "urgent" }], "estimate": 3 } }
            ]
        });
        fs::write(dir.path().join("board.json"), board.to_string()).unwrap();
        Self {
            dir,
            a,
            b,
            c,
            b1,
            b2,
        }
    }

    fn board_path(&self) -> String {
        self.dir.path().join("board.json").to_str().unwrap().to_string()
    }

    fn write_script(&self, events: Value) -> String {
        let path = self.dir.path().join("script.json");
        fs::write(&path, events.to_string()).unwrap();
        path.to_str().unwrap().to_string()
    }
}

fn swimlane(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("swimlane").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home)
        .env_remove("SWIMLANE_FILE")
        .env_remove("SWIMLANE_DEBUG_LOG");
    cmd
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_str(&String::from_utf8_lossy(&output)).expect("Failed to parse JSON output")
}

mod validate_tests {
    use super::*;

    #[test]
    fn test_validate_prints_ordered_columns() {
        let fx = Fixture::new();
        let json = stdout_json(swimlane(fx.dir.path()).args(["validate", fx.board_path().as_str()]));

        assert!(json["success"].as_bool().unwrap());
        let columns = json["data"].as_array().unwrap();
        assert_eq!(columns.len(), 3);
        assert_eq!(columns[1]["title"], "B");
        assert_eq!(
            columns[1]["cards"],
            json!([fx.b1.to_string(), fx.b2.to_string()])
        );
    }

    #[test]
    fn test_validate_reads_env_file() {
        let fx = Fixture::new();
        let json = stdout_json(
            swimlane(fx.dir.path())
                .env("SWIMLANE_FILE", fx.board_path())
                .arg("validate"),
        );
        assert!(json["success"].as_bool().unwrap());
    }

    #[test]
    fn test_validate_rejects_orphan_card() {
        let fx = Fixture::new();
        let board = json!({
            "columns": [{ "id": fx.a, "title": "A", "position": 0 }],
            "cards": [{ "id": fx.b1, "column_id": fx.b, "title": "lost", "position": 0 }]
        });
        fs::write(fx.board_path(), board.to_string()).unwrap();

        swimlane(fx.dir.path())
            .args(["validate", fx.board_path().as_str()])
            .assert()
            .failure()
            .stderr(predicate::str::contains("\"success\":false"))
            .stderr(predicate::str::contains("Not found"));
    }

    #[test]
    fn test_validate_missing_file() {
        let fx = Fixture::new();
        let missing = fx.dir.path().join("nope.json");

        swimlane(fx.dir.path())
            .args(["validate", missing.to_str().unwrap()])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to load board"));
    }
}

mod replay_tests {
    use super::*;

    #[test]
    fn test_replay_b1_onto_empty_column() {
        let fx = Fixture::new();
        let script = fx.write_script(json!([
            { "event": "start", "card": fx.b1 },
            { "event": "over", "target": { "kind": "column_tail", "column_id": fx.a } },
            { "event": "end", "target": { "column": fx.a } }
        ]));

        let json = stdout_json(swimlane(fx.dir.path()).args([
            "replay",
            fx.board_path().as_str(),
            script.as_str(),
        ]));

        let data = &json["data"];
        assert_eq!(data["steps"][1]["preview"]["index"], 0);
        assert_eq!(data["steps"][1]["preview"]["column_id"], fx.a.to_string());
        assert_eq!(
            data["intents"],
            json!([{
                "kind": "move-card",
                "card_id": fx.b1,
                "from_column_id": fx.b,
                "to_column_id": fx.a,
                "to_index": 0
            }])
        );
        assert!(data.get("board").is_none());
    }

    #[test]
    fn test_replay_same_column_swap_is_swallowed() {
        let fx = Fixture::new();
        let script = fx.write_script(json!([
            { "event": "start", "card": fx.b1 },
            { "event": "over", "target": { "card": fx.b2 } },
            { "event": "end", "target": { "card": fx.b2 } }
        ]));

        let json = stdout_json(swimlane(fx.dir.path()).args([
            "replay",
            fx.board_path().as_str(),
            script.as_str(),
        ]));

        assert_eq!(json["data"]["steps"][1]["preview"]["index"], 0);
        assert_eq!(json["data"]["intents"], json!([]));
    }

    #[test]
    fn test_replay_last_card_on_own_tail_moves_up() {
        let fx = Fixture::new();
        let script = fx.write_script(json!([
            { "event": "start", "card": fx.b2 },
            { "event": "over", "target": { "column": fx.b } },
            { "event": "end", "target": { "column": fx.b } }
        ]));

        let json = stdout_json(swimlane(fx.dir.path()).args([
            "replay",
            fx.board_path().as_str(),
            script.as_str(),
            "--apply",
        ]));

        let data = &json["data"];
        assert_eq!(data["steps"][1]["preview"]["index"], 1);
        assert_eq!(data["intents"][0]["card_id"], fx.b2.to_string());
        assert_eq!(data["intents"][0]["to_index"], 0);
        let b2 = data["board"]["cards"]
            .as_array()
            .unwrap()
            .iter()
            .find(|card| card["id"] == json!(fx.b2.to_string()))
            .unwrap();
        assert_eq!(b2["position"], 0);
    }

    #[test]
    fn test_replay_out_writes_applied_board() {
        let fx = Fixture::new();
        let out = fx.dir.path().join("next.json");
        let script = fx.write_script(json!([
            { "event": "start", "card": fx.b2 },
            { "event": "end", "target": { "column": fx.c } },
            { "event": "start", "card": fx.b1 },
            { "event": "end", "target": { "column": fx.c } }
        ]));

        let json = stdout_json(swimlane(fx.dir.path()).args([
            "replay",
            fx.board_path().as_str(),
            script.as_str(),
            "--out",
            out.to_str().unwrap(),
        ]));
        assert_eq!(json["data"]["intents"].as_array().unwrap().len(), 2);

        let written: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        let cards = written["cards"].as_array().unwrap();
        assert!(cards
            .iter()
            .all(|card| card["column_id"] == json!(fx.c.to_string())));
        let b1 = cards
            .iter()
            .find(|card| card["id"] == json!(fx.b1.to_string()))
            .unwrap();
        assert_eq!(b1["meta"]["estimate"], 3);
        assert_eq!(b1["meta"]["badges"][0]["label"], "urgent");
    }

    #[test]
    fn test_replay_disabled_flag() {
        let fx = Fixture::new();
        let script = fx.write_script(json!([
            { "event": "start", "card": fx.b1 },
            { "event": "end", "target": { "column": fx.a } }
        ]));

        let json = stdout_json(swimlane(fx.dir.path()).args([
            "replay",
            fx.board_path().as_str(),
            script.as_str(),
            "--disabled",
        ]));
        assert_eq!(json["data"]["intents"], json!([]));
        assert_eq!(json["data"]["steps"][0]["dragging"], false);
    }

    #[test]
    fn test_replay_bad_script() {
        let fx = Fixture::new();
        let script = fx.write_script(json!([{ "event": "teleport" }]));

        swimlane(fx.dir.path())
            .args(["replay", fx.board_path().as_str(), script.as_str()])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to parse gesture script"));
    }
}

mod reorder_tests {
    use super::*;

    #[test]
    fn test_reorder_column_to_front_and_write() {
        let fx = Fixture::new();
        let json = stdout_json(swimlane(fx.dir.path()).args([
            "reorder-column",
            fx.board_path().as_str(),
            "--column",
            fx.c.to_string().as_str(),
            "--to",
            "0",
            "--write",
        ]));

        let data = &json["data"];
        assert_eq!(data["written"], true);
        assert_eq!(data["reorder"]["intent"]["to_index"], 0);

        let validated = stdout_json(swimlane(fx.dir.path()).args(["validate", fx.board_path().as_str()]));
        let titles: Vec<&str> = validated["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, ["C", "A", "B"]);
    }

    #[test]
    fn test_reorder_to_same_index_is_noop() {
        let fx = Fixture::new();
        let json = stdout_json(swimlane(fx.dir.path()).args([
            "reorder-column",
            fx.board_path().as_str(),
            "--column",
            fx.b.to_string().as_str(),
            "--to",
            "1",
            "--write",
        ]));

        assert!(json["data"]["reorder"].is_null());
        assert_eq!(json["data"]["written"], false);
    }

    #[test]
    fn test_reorder_unknown_column_fails() {
        let fx = Fixture::new();
        swimlane(fx.dir.path())
            .args([
                "reorder-column",
                fx.board_path().as_str(),
                "--column",
                Uuid::new_v4().to_string().as_str(),
                "--to",
                "0",
            ])
            .assert()
            .failure()
            .stderr(predicate::str::contains("not found"));
    }
}

#[test]
fn test_completions() {
    let dir = tempdir().unwrap();
    swimlane(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("swimlane"));
}
