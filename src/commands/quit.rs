use agenda_core::agenda::Agenda;
use anyhow::Result;
use owo_colors::OwoColorize;

use super::check_empty;

pub fn run(agenda: &mut Agenda, user: &str, title: &str) -> Result<()> {
    check_empty("Title", title)?;

    agenda.service().quit_meeting(user, title)?;

    println!(
        "{}",
        format!("You've successfully quit the meeting {}!", title).green()
    );
    Ok(())
}
