use agenda_core::agenda::Agenda;
use anyhow::Result;
use owo_colors::OwoColorize;

use super::{check_empty, split_participators};

pub fn run(
    agenda: &mut Agenda,
    user: &str,
    title: &str,
    participators: &str,
    start: &str,
    end: &str,
) -> Result<()> {
    check_empty("title", title)?;
    check_empty("participators", participators)?;
    check_empty("Start Time", start)?;
    check_empty("End Time", end)?;

    let names = split_participators(participators, ' ');
    agenda
        .service()
        .create_meeting(user, title, &names, start, end)?;

    println!("{}", "A meeting was successfully created!".green());
    Ok(())
}
