//! Styled user-facing messages
//!
//! Progress and success lines go to stdout, warnings and errors to stderr.

use console::Style;

pub fn progress(message: &str) {
    println!("{} {}", Style::new().cyan().bold().apply_to("=>"), message);
}

pub fn success(message: &str) {
    println!("{}", Style::new().green().bold().apply_to(message));
}

pub fn warning(message: &str) {
    eprintln!(
        "{} {}",
        Style::new().yellow().bold().apply_to("WARNING:"),
        Style::new().yellow().apply_to(message)
    );
}

pub fn error(message: &str) {
    eprintln!(
        "{} {}",
        Style::new().red().bold().apply_to("ERROR:"),
        message
    );
}

/// Plain line, used for listings
pub fn line(text: &str) {
    println!("{text}");
}

/// Bold section title
pub fn heading(text: &str) {
    println!("{}", Style::new().bold().apply_to(text));
}
