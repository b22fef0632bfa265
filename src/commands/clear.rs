use agenda_core::agenda::Agenda;
use anyhow::Result;
use owo_colors::OwoColorize;

pub fn run(agenda: &mut Agenda, user: &str) -> Result<()> {
    let count = agenda.service().clear_meetings(user);

    println!(
        "{}",
        "You've successfully cleared all the meetings you sponsored!".green()
    );
    if count > 0 {
        println!("{}", format!("({} removed)", count).dimmed());
    }
    Ok(())
}
