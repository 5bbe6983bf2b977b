use std::env::{self, VarError};

const HELP: &str = include_str!("./cli-help.txt");

/// Variables that are safe to echo. Tokens and key material are never listed.
pub const DISPLAY_ENVS: [&str; 10] = [
    "RUST_LOG",
    "SHOP_NAME",
    "API_VERSION",
    "GOOGLE_SHEET_ID",
    "GOOGLE_APPLICATION_CREDENTIALS",
    "GOOGLE_CLIENT_EMAIL",
    "GOOGLE_PROJECT_ID",
    "SLACK_CHANNEL_ID",
    "SLACK_ATTACHMENT_PATH",
    "REPORT_SESSION_COUNT",
];

/// The job takes no arguments. Any argument at all prints the help text and the current settings instead of running.
///
/// Returns true if the help was shown and the caller should exit.
pub fn handle_command_line_args() -> bool {
    if env::args().len() <= 1 {
        return false;
    }
    println!("\n{HELP}\n");
    println!("{}", settings_listing(|name| env::var(name)));
    true
}

fn settings_listing<F>(lookup: F) -> String
where F: Fn(&str) -> Result<String, VarError> {
    let lines = DISPLAY_ENVS.iter().map(|&name| {
        let value = match lookup(name) {
            Ok(v) if v.trim().is_empty() => "Not set".to_string(),
            Ok(v) => v,
            Err(VarError::NotPresent) => "Not set".to_string(),
            Err(VarError::NotUnicode(s)) => format!("Invalid value: {}", s.to_string_lossy()),
        };
        format!("  {name:<32} {value}")
    });
    std::iter::once("Current settings (secrets are not shown):".to_string()).chain(lines).collect::<Vec<_>>().join("\n")
}
