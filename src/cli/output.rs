//! Output formatting and progress bars for CLI

use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress bar for replay playback
pub fn create_replay_progress(total_moves: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_moves);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} moves")
            .expect("Invalid progress bar template")
            .progress_chars("=>-"),
    );
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Render a list of indices owned by a player ("none" when empty)
pub fn format_indices(flags: &[bool]) -> String {
    let owned: Vec<String> = flags
        .iter()
        .enumerate()
        .filter(|&(_, &won)| won)
        .map(|(i, _)| i.to_string())
        .collect();
    if owned.is_empty() {
        "none".to_string()
    } else {
        owned.join(", ")
    }
}
