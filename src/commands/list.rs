use agenda_core::agenda::Agenda;
use anyhow::Result;
use owo_colors::OwoColorize;

use super::check_empty;
use crate::render::Render;

pub fn run(agenda: &mut Agenda, user: &str, start: &str, end: &str) -> Result<()> {
    check_empty("Start Time", start)?;
    check_empty("End Time", end)?;

    let service = agenda.service();
    let meetings = service.list_meetings(user, start, end)?;

    if meetings.is_empty() {
        println!("{}", "No meetings found".dimmed());
        return Ok(());
    }

    for meeting in meetings {
        println!("{}", meeting.render());
    }
    Ok(())
}
