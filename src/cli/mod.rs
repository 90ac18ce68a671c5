pub mod commands;
pub mod output;
pub mod types;

pub use output::{output, CommandOutput};
pub use types::{Cli, Commands};

use crate::infrastructure::logging::SecretScrubber;

/// Print `err` with its cause chain, secrets scrubbed, and exit with status 1.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    eprintln!("{}", render_error(&err, json_mode));
    std::process::exit(1);
}

/// Render `err` and its causes the way [`handle_error`] prints them.
///
/// Every message goes through [`SecretScrubber`], so a rejected credential
/// quoted by an extraction error never reaches the terminal.
pub fn render_error(err: &anyhow::Error, json_mode: bool) -> String {
    let Ok(scrubber) = SecretScrubber::new() else {
        return "Error: configuration could not be resolved".to_string();
    };
    let message = scrubber.scrub_message(&err.to_string());
    let causes: Vec<String> = err
        .chain()
        .skip(1)
        .map(|cause| scrubber.scrub_message(&cause.to_string()))
        .collect();

    if json_mode {
        let body = serde_json::json!({ "error": message, "causes": causes });
        serde_json::to_string_pretty(&body).unwrap_or_default()
    } else {
        let chain: Vec<String> = std::iter::once(message).chain(causes).collect();
        format!("Error: {}", chain.join(": "))
    }
}
