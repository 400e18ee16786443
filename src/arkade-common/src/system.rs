use std::fmt::{self, Display, Formatter};
use std::process::Command;
use tracing::debug;

/// The machine/kernel pair reported by the host, e.g. `("x86_64", "Linux")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientArch {
    pub arch: String,
    pub os: String,
}

impl ClientArch {
    pub fn new(arch: impl Into<String>, os: impl Into<String>) -> Self {
        Self {
            arch: arch.into(),
            os: os.into(),
        }
    }

    /// Reads `uname -m` and `uname -s`. When `uname` is unavailable the values the binary
    /// was compiled for are used instead.
    pub fn detect() -> Self {
        let arch = uname("-m").unwrap_or_else(|| std::env::consts::ARCH.to_string());
        let os = uname("-s").unwrap_or_else(fallback_os_name);

        debug!(%arch, %os, "detected client platform");

        Self { arch, os }
    }

    pub fn is_linux(&self) -> bool {
        self.os.eq_ignore_ascii_case("linux")
    }
}

impl Display for ClientArch {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.os, self.arch)
    }
}

fn uname(flag: &str) -> Option<String> {
    Command::new("uname")
        .arg(flag)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .filter(|value| !value.is_empty())
}

// matches the kernel names `uname -s` prints
fn fallback_os_name() -> String {
    match std::env::consts::OS {
        "linux" => "Linux",
        "macos" => "Darwin",
        "freebsd" => "FreeBSD",
        other => other,
    }
    .to_string()
}
