/// CLI smoke tests — invoke the compiled binary against a temp data dir.
use assert_cmd::Command;
use tempfile::TempDir;

fn kokoro() -> Command {
    Command::cargo_bin("kokoro").unwrap()
}

// ── Binary runs ──────────────────────────────────────────────────────────

#[test]
fn help_flag_exits_zero() {
    kokoro().arg("--help").assert().success();
}

#[test]
fn version_flag_exits_zero() {
    kokoro().arg("--version").assert().success();
}

// ── Retrieval commands ───────────────────────────────────────────────────

#[test]
fn search_on_fresh_store_exits_zero() {
    let tmp = TempDir::new().unwrap();
    kokoro()
        .args(["search", "仕事"])
        .env("KOKORO_DATA_DIR", tmp.path())
        .assert()
        .success();
}

#[test]
fn ask_prints_prompt_and_exits_zero() {
    let tmp = TempDir::new().unwrap();
    kokoro()
        .args(["ask", "最近うまく眠れない"])
        .env("KOKORO_DATA_DIR", tmp.path())
        .assert()
        .success();
}

#[test]
fn trends_on_fresh_store_exits_zero() {
    let tmp = TempDir::new().unwrap();
    kokoro()
        .arg("trends")
        .env("KOKORO_DATA_DIR", tmp.path())
        .assert()
        .success();
}

// ── Mutation + persistence ───────────────────────────────────────────────

#[test]
fn add_persists_and_status_sees_it() {
    let tmp = TempDir::new().unwrap();

    kokoro()
        .args([
            "add",
            "今日は散歩した",
            "--score",
            "4.0",
            "--emotions",
            "落ち着き",
            "--keywords",
            "散歩,健康",
        ])
        .env("KOKORO_DATA_DIR", tmp.path())
        .assert()
        .success();

    assert!(tmp.path().join("contexts.json").exists());

    kokoro()
        .arg("status")
        .env("KOKORO_DATA_DIR", tmp.path())
        .assert()
        .success();
}

#[test]
fn add_answer_with_parent_exits_zero() {
    let tmp = TempDir::new().unwrap();
    kokoro()
        .args([
            "add",
            "少しずつ良くなっている気がします",
            "--answer-to",
            "question-7",
        ])
        .env("KOKORO_DATA_DIR", tmp.path())
        .assert()
        .success();
}

#[test]
fn user_flag_isolates_collections() {
    let tmp = TempDir::new().unwrap();
    kokoro()
        .args(["--user", "alice", "add", "アリスの日記", "--keywords", "読書"])
        .env("KOKORO_DATA_DIR", tmp.path())
        .assert()
        .success();
    kokoro()
        .args(["--user", "bob", "search", "読書"])
        .env("KOKORO_DATA_DIR", tmp.path())
        .assert()
        .success();
}
