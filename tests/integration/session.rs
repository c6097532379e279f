use crate::common::{
    binary_path, make_temp_dir, run_with_input, spawn_session, spawn_session_with, stdout_of,
    wait_for_exit, write_config,
};
#[cfg(unix)]
use crate::common::send_interrupt;
use std::fs;
use std::io::Write;
use std::process::Command;
use std::time::Duration;

const INVALID: &str = "[!] Invalid choice. Please select 0-3 or 'q' to quit.";
const FAREWELL: &str = "[*] Exiting SigPloit...";

#[test]
fn invalid_choice_then_quit_exits_successfully() {
    let output = run_with_input("5\nq\n");
    let stdout = stdout_of(&output);

    assert!(output.status.success());
    assert_eq!(stdout.matches(INVALID).count(), 1);
    assert_eq!(stdout.matches("MAIN MENU").count(), 2);
    assert!(stdout.trim_end().ends_with(FAREWELL));
}

#[test]
fn every_quit_alias_exits_successfully() {
    for input in ["q\n", "QUIT\n", "  exit  \n"] {
        let output = run_with_input(input);
        assert!(output.status.success(), "input {input:?}");
        assert!(stdout_of(&output).contains(FAREWELL), "input {input:?}");
    }
}

#[test]
fn closed_stdin_exits_successfully() {
    let output = run_with_input("");
    assert!(output.status.success());
    assert!(stdout_of(&output).contains(FAREWELL));
}

#[test]
fn stub_modules_announce_future_releases() {
    let output = run_with_input("2\n3\nq\n");
    let stdout = stdout_of(&output);

    assert!(output.status.success());
    assert!(stdout.contains("[*] Diameter module will be available in version 3 release"));
    assert!(stdout.contains("[*] SIP module will be available in version 4 release"));
    assert_eq!(stdout.matches("MAIN MENU").count(), 3);
}

#[test]
fn missing_module_program_returns_to_menu() {
    let output = run_with_input("0\n1\nq\n");
    let stdout = stdout_of(&output);

    assert!(output.status.success());
    assert!(stdout.contains("[*] Loading SS7 Module..."));
    assert!(stdout.contains("[!] SS7 module not available"));
    assert!(stdout.contains("[!] GTP module not available"));
    assert_eq!(stdout.matches("MAIN MENU").count(), 3);
}

#[test]
fn selections_are_written_to_the_session_log() {
    let dir = make_temp_dir("sigploit-it-log");
    let mut child = spawn_session(&dir);
    {
        let mut stdin = child.stdin.take().unwrap();
        stdin.write_all(b"7\nq\n").unwrap();
    }
    assert!(child.wait().unwrap().success());

    let log = fs::read_dir(dir.join("logs"))
        .unwrap()
        .filter_map(|e| e.ok())
        .find(|e| e.file_name().to_string_lossy().starts_with("sigploit-"))
        .expect("session log should exist");
    let contents = fs::read_to_string(log.path()).unwrap();
    assert!(contents.contains("Selection '7' -> InvalidChoice(\"7\")"));
    assert!(contents.contains("Selection 'q' -> Quit"));
}

#[test]
fn bad_arguments_fail_startup() {
    let output = Command::new(binary_path()).arg("--bogus").output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown argument: --bogus"));
}

#[cfg(unix)]
#[test]
fn interrupt_at_the_prompt_exits_successfully() {
    for _ in 0..3 {
        let dir = make_temp_dir("sigploit-it-sigint");
        let mut child = spawn_session(&dir);
        // stdin stays open so the session blocks at the prompt
        let _stdin = child.stdin.take();
        std::thread::sleep(Duration::from_millis(300));

        send_interrupt(&child);
        let (status, _) = wait_for_exit(&mut child, Duration::from_secs(5));
        assert!(status.success());

        let output = child.wait_with_output().unwrap();
        assert!(stdout_of(&output).contains("[*] Interrupt received. Exiting..."));
    }
}

#[cfg(unix)]
#[test]
fn interrupt_while_a_module_runs_exits_successfully() {
    let dir = make_temp_dir("sigploit-it-sigint-module");
    let config = write_config(&dir, 0, "sleep 30");
    let mut child = spawn_session_with(&dir, &config);
    let mut stdin = child.stdin.take().unwrap();
    stdin.write_all(b"0\n").unwrap();
    stdin.flush().unwrap();
    std::thread::sleep(Duration::from_millis(500));

    send_interrupt(&child);
    let (status, elapsed) = wait_for_exit(&mut child, Duration::from_secs(5));
    assert!(status.success());
    // far sooner than the module would have finished
    assert!(elapsed < Duration::from_secs(2), "took {elapsed:?}");
    // the orphaned `sleep` still holds stdout, so the output is not read here
}

#[cfg(unix)]
#[test]
fn interrupt_during_a_grace_pause_exits_within_one_unit() {
    let unit = Duration::from_millis(1000);
    let dir = make_temp_dir("sigploit-it-sigint-pause");
    let config = write_config(&dir, unit.as_millis() as u64, "sigploit-test-missing-ss7");
    let mut child = spawn_session_with(&dir, &config);
    let mut stdin = child.stdin.take().unwrap();
    // the Diameter stub pauses for three units before the menu returns
    stdin.write_all(b"2\n").unwrap();
    stdin.flush().unwrap();
    std::thread::sleep(Duration::from_millis(500));

    send_interrupt(&child);
    let (status, elapsed) = wait_for_exit(&mut child, Duration::from_secs(5));
    assert!(status.success());
    assert!(
        elapsed < unit + Duration::from_millis(750),
        "took {elapsed:?}"
    );

    drop(stdin);
    let stdout = stdout_of(&child.wait_with_output().unwrap());
    assert!(stdout.contains("[*] Diameter module will be available in version 3 release"));
    assert!(stdout.contains("[*] Interrupt received. Exiting..."));
    assert!(!stdout.contains("Exiting SigPloit..."));
}
