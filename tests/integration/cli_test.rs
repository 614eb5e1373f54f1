use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

fn get_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_nqueens"))
}

fn run_nqueens(args: &[&str]) -> Output {
    Command::new(get_binary_path())
        .args(args)
        .output()
        .expect("Failed to execute nqueens")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(String::from)
        .collect()
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "Command failed with status: {:?}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_single_queen_fills_every_cell() {
    let output = run_nqueens(&["-n", "1"]);
    assert_success(&output);

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 225, "One solution per cell of the 15x15 board");
    assert!(lines.contains(&"[0,0]".to_string()));
    assert!(lines.contains(&"[14,14]".to_string()));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Total solutions found: 225"),
        "Should report the total on stderr, got: {}",
        stderr
    );
}

#[test]
fn test_workers_repeat_the_shared_search() {
    let output = run_nqueens(&["-t", "2", "-n", "1"]);
    assert_success(&output);

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 450);
    assert_eq!(lines.iter().filter(|l| *l == "[7,7]").count(), 2);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Total solutions found: 450"));
}

#[test]
fn test_zero_queens_reports_nothing() {
    let output = run_nqueens(&["-n", "0", "-t", "3"]);
    assert_success(&output);

    assert!(stdout_lines(&output).is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Total solutions found: 0"));
}

#[test]
fn test_prefix_seeds_the_search() {
    let output = run_nqueens(&["-n", "2", "--prefix", "[0,0] [1,2]"]);
    assert_success(&output);

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 182);
    assert_eq!(lines.first().map(String::as_str), Some("[0,0] [1,2]"));
    for line in &lines {
        assert!(line.starts_with("[0,0] "), "Unexpected line: {}", line);
        assert_eq!(line.split(' ').count(), 2);
    }
}

#[test]
fn test_last_cell_prefix() {
    let output = run_nqueens(&["-n", "1", "--prefix", "[14,14]"]);
    assert_success(&output);
    assert_eq!(stdout_lines(&output), vec!["[14,14]".to_string()]);
}

#[test]
fn test_small_queue_keeps_every_solution() {
    let output = run_nqueens(&["-n", "1", "-t", "4", "--queue-capacity", "1"]);
    assert_success(&output);
    assert_eq!(stdout_lines(&output).len(), 900);
}

#[test]
fn test_stats_flag_prints_worker_summary() {
    let output = run_nqueens(&["-n", "1", "-t", "2", "--stats"]);
    assert_success(&output);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Worker 0:"));
    assert!(stderr.contains("Worker 1:"));
    assert!(stderr.contains("Solutions found: 225"));
}

#[test]
fn test_invalid_thread_count_fails_with_usage() {
    for bad in ["0", "abc"] {
        let output = run_nqueens(&["-t", bad]);
        assert!(!output.status.success(), "-t {} should be rejected", bad);
        assert!(stdout_lines(&output).is_empty());

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(
            stderr.contains("Usage"),
            "Should print usage on stderr, got: {}",
            stderr
        );
    }
}

#[test]
fn test_malformed_prefix_fails() {
    let output = run_nqueens(&["--prefix", "[0;0]"]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Malformed placement"));
}

#[test]
fn test_prefix_off_the_board_fails() {
    let output = run_nqueens(&["--prefix", "[15,0]"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("outside"));
}

#[cfg(unix)]
#[test]
fn test_interrupt_reports_total_and_exits_cleanly() {
    let mut child = Command::new(get_binary_path())
        .args(["-n", "5", "--queue-capacity", "1"])
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn nqueens");

    // A printed solution means the handler is installed. The reader stays
    // open so the printer blocks on the full pipe instead of failing.
    let mut stdout = BufReader::new(child.stdout.take().expect("stdout is piped"));
    let mut first = String::new();
    stdout.read_line(&mut first).expect("Failed to read first solution");
    assert!(first.starts_with('['), "Unexpected first line: {}", first);

    let status = Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .expect("Failed to run kill");
    assert!(status.success());

    let output = child.wait_with_output().expect("Failed to wait for nqueens");
    drop(stdout);

    assert_eq!(output.status.code(), Some(0), "Interrupt should exit with 0");
    let stderr = String::from_utf8_lossy(&output.stderr);
    let total = stderr
        .lines()
        .find_map(|line| line.strip_prefix("Total solutions found: "))
        .unwrap_or_else(|| panic!("Missing total on stderr, got: {}", stderr));
    assert!(total.trim().parse::<u64>().is_ok(), "Bad total: {}", total);
}
