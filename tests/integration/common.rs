use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Output, Stdio};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

pub fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_sigploit"))
}

static COUNTER: AtomicUsize = AtomicUsize::new(0);

pub fn make_temp_dir(prefix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "{prefix}-{}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

pub fn write_config(dir: &Path, time_unit_ms: u64, ss7_command: &str) -> PathBuf {
    let path = dir.join("sigploit.json");
    let cfg = format!(
        r#"{{
      "time_unit_ms": {time_unit_ms},
      "clear_screen": false,
      "color": false,
      "file_logging_enabled": true,
      "modules": {{ "ss7": "{ss7_command}", "gtp": "sigploit-test-missing-gtp" }}
    }}"#
    );
    fs::write(&path, cfg).unwrap();
    path
}

/// Config with no pauses, no screen clearing and modules pointed at
/// programs that do not exist.
pub fn write_fast_config(dir: &Path) -> PathBuf {
    write_config(dir, 0, "sigploit-test-missing-ss7")
}

pub fn spawn_session(dir: &Path) -> Child {
    let config = write_fast_config(dir);
    spawn_session_with(dir, &config)
}

pub fn spawn_session_with(dir: &Path, config: &Path) -> Child {
    Command::new(binary_path())
        .current_dir(dir)
        .arg("--config")
        .arg(config)
        .arg("--logs")
        .arg(dir.join("logs"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn sigploit")
}

/// Feed `input` on stdin, close it and wait for the session to exit.
pub fn run_with_input(input: &str) -> Output {
    let dir = make_temp_dir("sigploit-it");
    let mut child = spawn_session(&dir);
    {
        let mut stdin = child.stdin.take().unwrap();
        stdin.write_all(input.as_bytes()).unwrap();
    }
    child.wait_with_output().unwrap()
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[cfg(unix)]
pub fn send_interrupt(child: &Child) {
    let status = Command::new("kill")
        .args(["-s", "INT", &child.id().to_string()])
        .status()
        .unwrap();
    assert!(status.success());
}

/// Poll until the child exits, failing the test once `limit` has passed.
pub fn wait_for_exit(child: &mut Child, limit: Duration) -> (ExitStatus, Duration) {
    let started = Instant::now();
    loop {
        if let Some(status) = child.try_wait().unwrap() {
            return (status, started.elapsed());
        }
        assert!(
            started.elapsed() < limit,
            "session still running {limit:?} after SIGINT"
        );
        std::thread::sleep(Duration::from_millis(10));
    }
}
