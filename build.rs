//! Build script that embeds the crate version via the `MAKEGEN_VERSION`
//! environment variable, falling back to `git describe` for local builds.

use std::process::Command;

fn main() {
    // Prefer MAKEGEN_VERSION env var if set (e.g., by CI release workflow),
    // otherwise fall back to git describe for local development builds.
    if let Ok(version) = std::env::var("MAKEGEN_VERSION") {
        println!("cargo:rustc-env=MAKEGEN_VERSION={version}");
    } else if let Ok(output) = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        && output.status.success()
    {
        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        println!("cargo:rustc-env=MAKEGEN_VERSION={version}");
    }

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");
    println!("cargo:rerun-if-env-changed=MAKEGEN_VERSION");
}
