use std::process::Command;

fn git(args: &[&str]) -> Option<String> {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");

    // Appended to the crate version in `--version`, e.g. " (1a2b3c4 2025-01-31)".
    let build_info = match (
        git(&["rev-parse", "--short", "HEAD"]),
        git(&["log", "-1", "--format=%cd", "--date=format:%Y-%m-%d"]),
    ) {
        (Some(hash), Some(date)) => format!(" ({} {})", hash, date),
        (Some(hash), None) => format!(" ({})", hash),
        _ => String::new(),
    };

    println!("cargo:rustc-env=TRACKERMON_BUILD_INFO={}", build_info);
}
