//! Integration tests for the `ops` CLI.
//!
//! Each test runs `ops` as a subprocess in a temp directory (optionally with
//! an opsdeck.toml) and checks stdout, stderr and the exit status.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Get the path to the built `ops` binary.
fn ops_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("ops");
    path
}

/// Run `ops` with the given args in the given directory, returning (stdout, stderr, success).
fn run_ops(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(ops_bin())
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run ops");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

/// Run `ops` expecting success, return stdout.
fn run_ops_ok(dir: &Path, args: &[&str]) -> String {
    let (stdout, stderr, success) = run_ops(dir, args);
    if !success {
        panic!("ops {:?} failed:\nstdout: {}\nstderr: {}", args, stdout, stderr);
    }
    stdout
}

/// Feed `script` to `ops session`, returning (stdout, stderr, success).
fn run_session(dir: &Path, script: &str) -> (String, String, bool) {
    let mut child = Command::new(ops_bin())
        .arg("session")
        .current_dir(dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to run ops session");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(script.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();
    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.success(),
    )
}

fn write_config(dir: &Path, text: &str) {
    fs::write(dir.join("opsdeck.toml"), text).unwrap();
}

// ---------------------------------------------------------------------------
// Read command tests
// ---------------------------------------------------------------------------

#[test]
fn test_board_defaults_to_maintain() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_ops_ok(tmp.path(), &["board"]);
    assert!(out.contains("== To Do (1) =="));
    assert!(out.contains("t2 Weekly Amazon Keyword Audit"));
    assert!(!out.contains("t1 "));
    assert!(!out.contains("t3 "));
}

#[test]
fn test_board_focus_and_entity() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_ops_ok(tmp.path(), &["board", "--focus", "react", "--entity", "c2"]);
    assert!(out.contains("== In Progress (1) =="));
    assert!(out.contains("t1 Dispatch: 2000 Units Lumbar Support"));

    let out = run_ops_ok(tmp.path(), &["board", "--focus", "react", "--entity", "c1"]);
    assert!(!out.contains("t1 "));
}

#[test]
fn test_board_unknown_entity_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (_, stderr, success) = run_ops(tmp.path(), &["board", "--entity", "c9"]);
    assert!(!success);
    assert!(stderr.contains("entity not found: c9"));
}

#[test]
fn test_board_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_ops_ok(tmp.path(), &["board", "--focus", "react", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    let columns = parsed.as_array().unwrap();
    assert_eq!(columns.len(), 3);
    assert_eq!(columns[1]["status"], "In Progress");
    assert_eq!(columns[1]["tasks"][0]["id"], "t1");
    assert_eq!(columns[1]["tasks"][0]["progress"], 50);
    assert_eq!(columns[1]["tasks"][0]["entity_id"], "c2");
}

#[test]
fn test_table_improvise() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_ops_ok(tmp.path(), &["table", "--focus", "improvise"]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("ID"));
    assert!(lines[1].starts_with("t3"));
    assert!(lines[1].contains("Maktune Tec…"));
}

#[test]
fn test_calendar_month() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_ops_ok(
        tmp.path(),
        &["calendar", "--month", "2024-05", "--focus", "improvise"],
    );
    assert!(out.starts_with("May 2024\n"));
    assert!(out.contains("2024-05-18  [ ] t3 3D Prototype: Cable Management Clip"));
    assert!(!out.contains("t1 "));
}

#[test]
fn test_calendar_json_has_42_cells() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_ops_ok(
        tmp.path(),
        &["calendar", "--month", "2024-05", "--focus", "improvise", "--json"],
    );
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["month"], "2024-05");
    let cells = parsed["cells"].as_array().unwrap();
    assert_eq!(cells.len(), 42);
    let placed: Vec<_> = cells
        .iter()
        .filter(|c| !c["items"].as_array().unwrap().is_empty())
        .collect();
    assert_eq!(placed.len(), 1);
    assert_eq!(placed[0]["day"], 18);
}

#[test]
fn test_calendar_bad_month() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (_, stderr, success) = run_ops(tmp.path(), &["calendar", "--month", "2024-13"]);
    assert!(!success);
    assert!(stderr.contains("invalid month"));
}

#[test]
fn test_ideas_ranked() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_ops_ok(tmp.path(), &["ideas"]);
    let lines: Vec<&str> = out.lines().collect();
    assert!(lines[0].starts_with("1. i1"));
    assert!(lines[1].starts_with("2. i2"));

    let out = run_ops_ok(tmp.path(), &["ideas", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed[0]["ice_score"], 252);
    assert_eq!(parsed[1]["ice_score"], 210);
}

#[test]
fn test_show_task() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_ops_ok(tmp.path(), &["show", "t2"]);
    assert!(out.contains("project: Amazon B2C Scaling (p1)"));
    assert!(out.contains("sop: Amazon Listing Optimization (sop2)"));
    assert!(out.contains("recurring: Weekly"));
}

#[test]
fn test_show_missing_task() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (_, stderr, success) = run_ops(tmp.path(), &["show", "t99"]);
    assert!(!success);
    assert!(stderr.contains("task not found: t99"));
}

#[test]
fn test_dashboard_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_ops_ok(tmp.path(), &["dashboard", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["focus_mix"].as_array().unwrap().len(), 3);
    assert_eq!(parsed["entities"].as_array().unwrap().len(), 2);
    assert_eq!(parsed["unread_notifications"], 2);
}

#[test]
fn test_notifications_listing() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_ops_ok(tmp.path(), &["notifications"]);
    assert!(out.starts_with("2 unread\n"));
    assert!(out.contains("n1 [mention]"));
    assert!(out.contains("(10m ago)"));
    assert!(out.contains("(1h ago)"));
}

#[test]
fn test_projects_grouped_by_entity() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_ops_ok(tmp.path(), &["projects"]);
    assert!(out.contains("c1 🚀 Maktune Technologies"));
    assert!(out.contains("  p3 3D Printed Accessory Line [Planning] 15%"));
}

// ---------------------------------------------------------------------------
// Write command tests
// ---------------------------------------------------------------------------

#[test]
fn test_task_add_prints_id() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_ops_ok(tmp.path(), &["task", "add", "--title", "Audit casters"]);
    assert_eq!(out.trim(), "t4");
}

#[test]
fn test_viewer_cannot_write() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (_, stderr, success) = run_ops(tmp.path(), &["--as", "u4", "task", "add"]);
    assert!(!success);
    assert!(stderr.contains("Jordan Lee has view-only access"));

    // reads are fine
    run_ops_ok(tmp.path(), &["--as", "u4", "board"]);
}

#[test]
fn test_unknown_user() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (_, stderr, success) = run_ops(tmp.path(), &["--as", "u9", "board"]);
    assert!(!success);
    assert!(stderr.contains("user not found: u9"));
}

#[test]
fn test_insights_without_assistant() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_ops_ok(tmp.path(), &["insights", "c1"]);
    assert_eq!(
        out.trim(),
        "Error fetching AI analysis. Please check your assistant configuration."
    );
}

#[test]
fn test_suggest_without_assistant() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_ops_ok(tmp.path(), &["suggest", "p1"]);
    assert_eq!(out.trim(), "no suggestions");
}

// ---------------------------------------------------------------------------
// Session tests
// ---------------------------------------------------------------------------

#[test]
fn test_session_drop_emits_one_notification() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (out, stderr, success) = run_session(
        tmp.path(),
        "task add --title \"Ship mold\" --focus react\n\
         task status t4 done\n\
         task status t4 done\n\
         notifications\n",
    );
    assert!(success, "stderr: {}", stderr);
    assert!(out.contains("t4 To Do → Completed"));
    assert!(out.contains("t4 already Completed"));
    assert!(out.contains("3 unread"));
    assert_eq!(out.matches("Task \"Ship mold\" updated to Completed").count(), 1);
}

#[test]
fn test_session_notification_feed() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (out, stderr, success) = run_session(
        tmp.path(),
        "notify add \"Backup finished\"\n\
         notify read n1\n\
         notify dismiss n2\n\
         --as u4 notify add \"Viewer note\" --kind mention\n\
         notifications\n",
    );
    assert!(success, "stderr: {}", stderr);
    assert!(out.contains("n3\n"));
    assert!(out.contains("n1 read"));
    assert!(out.contains("n2 dismissed"));
    // newest first; posting is open to every role
    let feed: Vec<&str> = out.lines().skip_while(|l| !l.ends_with("unread")).collect();
    assert_eq!(feed[0], "2 unread");
    assert!(feed[1].starts_with("● n4 [mention] Viewer note"));
    assert!(feed[2].starts_with("● n3 [system] Backup finished"));
    assert!(feed[3].starts_with("  n1 [mention]"));
    assert_eq!(feed.len(), 4);
}

#[test]
fn test_session_promote_once() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (out, stderr, _) = run_session(
        tmp.path(),
        "idea promote i1 --focus improvise\n\
         idea promote i1\n\
         board --focus improvise\n",
    );
    assert!(out.contains("i1 promoted to t4 (view: tasks)"));
    assert!(stderr.contains("error: line 2: idea i1 has already been promoted"));
    assert!(out.contains("t4 New Mold: Ergonomic Headrest"));
    assert!(!out.contains("t5"));
}

#[test]
fn test_session_promoted_idea_stays_promoted() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (out, stderr, _) = run_session(
        tmp.path(),
        "idea promote i1\n\
         idea status i1 backlog\n\
         idea promote i1\n\
         ideas\n\
         table --focus improvise\n",
    );
    assert!(out.contains("i1 promoted to t4 (view: tasks)"));
    assert!(stderr.contains("error: line 2: idea i1 has already been promoted"));
    assert!(stderr.contains("error: line 3: idea i1 has already been promoted"));
    assert!(out.contains("(Promoted)"));
    assert!(!out.contains("t5"));
}

#[test]
fn test_session_as_applies_to_one_line() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (out, stderr, _) = run_session(
        tmp.path(),
        "--as u4 team add Ana\n\
         team add Ana\n\
         team rm \"Sarah Chen\"\n\
         team\n\
         show t2\n",
    );
    assert!(stderr.contains("error: line 1: Jordan Lee has view-only access"));
    assert!(out.contains("added Ana"));
    assert!(out.contains("removed Sarah Chen"));
    assert!(out.contains("assignee: Sarah Chen"));
    let team: Vec<&str> = out
        .lines()
        .skip_while(|l| !l.starts_with("removed"))
        .skip(1)
        .take_while(|l| !l.starts_with('['))
        .collect();
    assert_eq!(team, vec!["Dilip Kumar", "Mark Sloan", "Jordan Lee", "Ana"]);
}

#[test]
fn test_session_comments_and_subtasks() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (out, stderr, success) = run_session(
        tmp.path(),
        "# packing checklist\n\
         login u3\n\
         task comment t1 'Packed and sealed'\n\
         task sub add t1 --title \"QC sample\"\n\
         task sub toggle t1 t1.1\n\
         task attach t1 invoice.pdf\n\
         show t1\n\
         quit\n\
         task add\n",
    );
    assert!(success, "stderr: {}", stderr);
    assert!(out.contains("acting as Mark Sloan (Member)"));
    assert!(out.contains("t1-c1"));
    assert!(out.contains("t1.1 → Completed"));
    assert!(out.contains("Mark Sloan: Packed and sealed"));
    assert!(out.contains("[x] t1.1 QC sample (Dilip Kumar, due 2024-05-16)"));
    assert!(out.contains("t1-a1 invoice.pdf [PDF, 1.5MB]"));
    assert!(out.contains("progress: 100%"));
    // nothing after quit runs
    assert!(!out.contains("t4"));
}

#[test]
fn test_session_reports_parse_errors_and_continues() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (out, stderr, success) = run_session(
        tmp.path(),
        "task frobnicate\n\
         idea add --title \"unterminated\n\
         session\n\
         ideas\n",
    );
    assert!(success);
    assert!(stderr.contains("error: line 1:"));
    assert!(stderr.contains("error: line 2: unterminated \" quote"));
    assert!(stderr.contains("error: line 3: a session is already running"));
    assert!(out.contains("1. i1"));
}

// ---------------------------------------------------------------------------
// Configuration tests
// ---------------------------------------------------------------------------

#[test]
fn test_config_overrides_roster_and_user() {
    let tmp = tempfile::TempDir::new().unwrap();
    write_config(
        tmp.path(),
        r#"team = ["Ana Ruiz", "Ravi Iyer"]

[workspace]
name = "Maktune Ops"
current_user = "u4"
"#,
    );
    let out = run_ops_ok(tmp.path(), &["team"]);
    assert_eq!(out, "Ana Ruiz\nRavi Iyer\n");

    let (_, stderr, success) = run_ops(tmp.path(), &["task", "add"]);
    assert!(!success);
    assert!(stderr.contains("view-only"));

    let out = run_ops_ok(tmp.path(), &["--as", "u2", "task", "add"]);
    assert_eq!(out.trim(), "t4");
}

#[test]
fn test_config_via_workspace_dir() {
    let tmp = tempfile::TempDir::new().unwrap();
    let elsewhere = tempfile::TempDir::new().unwrap();
    write_config(
        tmp.path(),
        r#"[focus.react]
label = "Firefight"
"#,
    );
    let dir = tmp.path().to_str().unwrap();
    let out = run_ops_ok(elsewhere.path(), &["-C", dir, "focus"]);
    assert!(out.contains("react ⚡ Firefight"));
}

#[test]
fn test_config_promotion_target() {
    let tmp = tempfile::TempDir::new().unwrap();
    write_config(
        tmp.path(),
        r#"[promotion]
c1 = "p3"
"#,
    );
    let (out, stderr, success) = run_session(tmp.path(), "idea promote i2\nshow t4\n");
    assert!(success, "stderr: {}", stderr);
    assert!(out.contains("project: 3D Printed Accessory Line (p3)"));
    assert!(out.contains("focus: Improvise"));
}

#[test]
fn test_config_parse_error() {
    let tmp = tempfile::TempDir::new().unwrap();
    write_config(tmp.path(), "team = [");
    let (_, stderr, success) = run_ops(tmp.path(), &["board"]);
    assert!(!success);
    assert!(stderr.contains("could not parse"));
    assert!(stderr.contains("opsdeck.toml"));
}

#[cfg(unix)]
#[test]
fn test_assistant_drafts_sop() {
    let tmp = tempfile::TempDir::new().unwrap();
    write_config(
        tmp.path(),
        r#"[assistant]
command = "cat"
"#,
    );
    let out = run_ops_ok(tmp.path(), &["sop", "draft", "sop1"]);
    // cat echoes the prompt back as the draft
    assert!(out.contains("Standard Operating Procedure"));
    assert!(out.contains("\"BOM Preparation Protocol\""));
}

#[cfg(unix)]
#[test]
fn test_assistant_suggestions_added() {
    let tmp = tempfile::TempDir::new().unwrap();
    write_config(
        tmp.path(),
        r#"[assistant]
command = "sh"
args = ["-c", "printf '%s' '[{\"title\":\"Map buyers\",\"description\":\"Top 20\",\"priority\":\"High\"}]'"]
"#,
    );
    let out = run_ops_ok(tmp.path(), &["suggest", "p2", "--add"]);
    assert!(out.contains("- [High] Map buyers: Top 20"));
    assert!(out.contains("t4"));
}
