use agenda_core::agenda::Agenda;
use anyhow::Result;
use owo_colors::OwoColorize;

use super::{check_empty, split_participators};

pub fn run(agenda: &mut Agenda, user: &str, title: &str, participators: &str) -> Result<()> {
    check_empty("title", title)?;
    check_empty("participators", participators)?;

    let names = split_participators(participators, ',');
    agenda.service().add_participators(user, title, &names)?;

    println!("{}", "Add meeting participator successfully!".green());
    Ok(())
}
