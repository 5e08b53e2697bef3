//! Colored terminal notices, the console's notification strip.

use colored::Colorize;

/// Green check for a completed operation.
pub fn success(message: &str) {
    println!("{} {}", "✔".green(), message);
}

/// Yellow warning for an operation that was refused but left everything
/// unchanged.
pub fn warning(message: &str) {
    println!("{} {}", "⚠".yellow(), message.yellow());
}

/// Red cross on stderr for a failed operation.
pub fn failure(message: &str) {
    eprintln!("{} {}", "✖".red(), message.red());
}
