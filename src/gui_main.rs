//! emojiplus GUI Entry Point
//!
//! Opens the emoji grid window directly, without a console.

#![cfg_attr(windows, windows_subsystem = "windows")]

use emojiplus::AppConfig;

fn main() {
    if let Err(e) = emojiplus::gui::run(AppConfig::default()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
