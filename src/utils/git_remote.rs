use std::process::Command;

/// URL of `remote` in the repository containing the working directory.
pub fn remote_url(remote: &str) -> Option<String> {
    let output = Command::new("git")
        .args(["config", "--get", &format!("remote.{remote}.url")])
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let url = String::from_utf8(output.stdout).ok()?;
    let url = url.trim();
    (!url.is_empty()).then(|| url.to_string())
}

/// App name from a Heroku git URL.
///
/// Accepts `git@heroku.com:NAME.git` and `https://git.heroku.com/NAME.git`.
pub fn app_from_git_url(url: &str) -> Option<String> {
    let url = url.trim();

    let path = if let Some(rest) = url.strip_prefix("git@") {
        let (host, path) = rest.split_once(':')?;
        host.ends_with("heroku.com").then_some(path)?
    } else {
        let rest = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .or_else(|| url.strip_prefix("ssh://git@"))?;
        let (host, path) = rest.split_once('/')?;
        let host = host.split(':').next().unwrap_or(host);
        host.ends_with("heroku.com").then_some(path)?
    };

    let name = path.trim_end_matches('/').trim_end_matches(".git");
    if name.is_empty() || name.contains('/') {
        None
    } else {
        Some(name.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/utils/git_remote.rs"]
mod tests;
