// UI layer: everything that talks to the terminal directly.
// Prompts use `dialoguer`, progress uses `indicatif`. Both draw on stderr so
// stdout only carries command output.

use std::time::Duration;

use anyhow::{bail, Result};
use dialoguer::{Password, Select};
use indicatif::{ProgressBar, ProgressStyle};

/// Ask for the JWT without echoing it.
pub fn prompt_jwt() -> Result<String> {
    let jwt: String = Password::new()
        .with_prompt("Enter your Pinata JWT")
        .interact()?;
    let jwt = jwt.trim().to_string();
    if jwt.is_empty() {
        bail!("JWT cannot be empty");
    }
    Ok(jwt)
}

/// Let the user pick one gateway domain with the arrow keys.
pub fn select_gateway(domains: &[String]) -> Result<String> {
    if domains.is_empty() {
        bail!("no gateways found on this account, create one at https://app.pinata.cloud/gateway");
    }
    let selection = Select::new()
        .with_prompt("Select a default gateway")
        .items(domains)
        .default(0)
        .interact()?;
    Ok(domains[selection].clone())
}

/// Spinner shown while a short request is in flight.
pub fn spinner(message: &str) -> Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    Ok(spinner)
}

/// Byte progress bar for an upload of `total` bytes.
pub fn upload_bar(total: u64) -> Result<ProgressBar> {
    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::with_template(
            "{msg} |{bar:40.cyan/blue}| {bytes}/{total_bytes} ({bytes_per_sec}, {eta})",
        )?
        .progress_chars("█ "),
    );
    bar.set_message("Uploading...");
    Ok(bar)
}

/// Human readable size using decimal units, e.g. `1.50 MB`.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1000;
    const MB: u64 = KB * KB;
    const GB: u64 = MB * KB;

    match bytes {
        b if b < KB => format!("{} bytes", b),
        b if b < MB => format!("{:.2} KB", b as f64 / KB as f64),
        b if b < GB => format!("{:.2} MB", b as f64 / MB as f64),
        b => format!("{:.2} GB", b as f64 / GB as f64),
    }
}
