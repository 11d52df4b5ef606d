use std::process::Command;

/// Opens `url` in the user's default browser without waiting for it.
pub fn open_url(url: &str) -> std::io::Result<()> {
    log::info!("Opening {}", url);
    opener_command(url).spawn().map(|_| ())
}

#[cfg(target_os = "windows")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", "", url]);
    command
}

#[cfg(target_os = "macos")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}
