//! Terminal rendering for agenda types.

use agenda_core::meeting::Meeting;
use owo_colors::OwoColorize;

/// Extension trait for colored terminal output.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Meeting {
    fn render(&self) -> String {
        let participators: Vec<&str> = self.participators.iter().map(String::as_str).collect();

        format!(
            "  {}  {}  sponsor: {}  with: {}",
            self.range.to_string().yellow(),
            self.title.bold(),
            self.sponsor.cyan(),
            participators.join(", ").dimmed()
        )
    }
}
