use std::process::Command;

/// Git config keys consulted for the copyright owner, in order.
const OWNER_KEYS: [&str; 2] = ["github.user", "user.name"];

/// Look up a default copyright owner in the user's git configuration.
///
/// Returns `None` when git is unavailable or none of the keys are set.
pub fn discover_owner() -> Option<String> {
    OWNER_KEYS.iter().find_map(|key| git_config(key))
}

fn git_config(key: &str) -> Option<String> {
    let output = Command::new("git")
        .args(["config", "--get", key])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }

    let value = String::from_utf8(output.stdout).ok()?;
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
