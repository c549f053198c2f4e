use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use std::str;
use std::thread;
use tempfile::TempDir;

#[allow(dead_code)]
pub struct TestContext {
    pub _temp_dir: TempDir,
    pub home: PathBuf,
    pub install_dir: PathBuf,
    pub bin_path: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let home = temp_dir.path().to_path_buf();
        let install_dir = home.join(".solvm");
        let bin_path = PathBuf::from(env!("CARGO_BIN_EXE_solvm-installer"));

        Self {
            _temp_dir: temp_dir,
            home,
            install_dir,
            bin_path,
        }
    }

    pub fn cmd(&self, releases_url: &str) -> Command {
        let mut cmd = Command::new(&self.bin_path);
        cmd.env("HOME", &self.home);
        cmd.env("USERPROFILE", &self.home);
        cmd.env("SHELL", "/bin/bash");
        cmd.env("SOLVM_RELEASES_URL", releases_url);
        cmd.env("SOLVM_PLATFORM", "linux/amd64");
        cmd.env_remove("SOLVM_INSTALL_DIR");
        cmd.env_remove("GITHUB_TOKEN");
        cmd.env_remove("RUST_LOG");
        cmd
    }

    /// Runs the installer, feeding `answers` one per line to the prompts.
    pub fn run(&self, cmd: &mut Command, answers: &[&str]) -> CommandOutput {
        let mut child = cmd
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to run solvm-installer");

        {
            let mut stdin = child.stdin.take().expect("stdin was not piped");
            for answer in answers {
                let _ = writeln!(stdin, "{}", answer);
            }
        }

        child
            .wait_with_output()
            .expect("Failed to wait for solvm-installer")
            .into()
    }
}

#[allow(dead_code)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub status: std::process::ExitStatus,
}

impl From<Output> for CommandOutput {
    fn from(output: Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            status: output.status,
        }
    }
}

#[allow(dead_code)]
impl CommandOutput {
    pub fn assert_code(&self, code: i32) -> &Self {
        if self.status.code() != Some(code) {
            panic!(
                "Expected exit code {} but got {:?}\nstdout: {}\nstderr: {}",
                code,
                self.status.code(),
                self.stdout,
                self.stderr
            );
        }
        self
    }

    pub fn assert_stdout_contains(&self, text: &str) -> &Self {
        assert!(
            self.stdout.contains(text),
            "Stdout did not contain '{}'\nActual stdout: {}",
            text,
            self.stdout
        );
        self
    }

    pub fn assert_stderr_contains(&self, text: &str) -> &Self {
        assert!(
            self.stderr.contains(text),
            "Stderr did not contain '{}'\nActual stderr: {}",
            text,
            self.stderr
        );
        self
    }
}

/// Release list JSON with a single linux/amd64 asset.
#[allow(dead_code)]
pub fn release_list(asset_url: &str) -> String {
    format!(
        r#"[{{"tag_name":"v1.2.0","assets":[{{"name":"solvm-linux-amd64","browser_download_url":"{}"}}]}}]"#,
        asset_url
    )
}

/// Serves one response that promises more bytes than it sends, then hangs up.
#[allow(dead_code)]
pub fn serve_truncated(declared: usize, sent: &'static [u8]) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let addr = listener.local_addr().expect("No local address");
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let head = format!(
                "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                declared
            );
            let _ = stream.write_all(head.as_bytes());
            let _ = stream.write_all(sent);
            let _ = stream.flush();
        }
    });
    format!("http://{}/solvm-linux-amd64", addr)
}
