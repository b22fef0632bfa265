mod commands;
mod render;

use agenda_core::agenda::Agenda;
use agenda_core::config::AgendaConfig;
use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "agenda")]
#[command(about = "Manage meetings: create them, invite people, list what overlaps your week")]
struct Cli {
    /// Act as this user (falls back to $AGENDA_USER, then default_user in config)
    #[arg(short, long, global = true)]
    user: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a meeting with a unique title, participators and a date window
    #[command(name = "createMeetings")]
    CreateMeetings {
        /// Title of the meeting (must not be in use)
        #[arg(short, long)]
        title: String,

        /// Participator names, space-separated (quote the list)
        #[arg(short, long)]
        participators: String,

        /// Start date (yyyy-mm-dd)
        #[arg(short, long)]
        start: String,

        /// End date (yyyy-mm-dd)
        #[arg(short, long)]
        end: String,
    },

    /// Add participators to a meeting you sponsor
    #[command(name = "addParticipator")]
    AddParticipator {
        #[arg(short, long)]
        title: String,

        /// Participator names, comma-separated
        #[arg(short, long)]
        participators: String,
    },

    /// Remove participators from a meeting you sponsor
    #[command(name = "rmParticipator")]
    RmParticipator {
        #[arg(short, long)]
        title: String,

        /// Participator names, comma-separated
        #[arg(short, long)]
        participators: String,
    },

    /// List your meetings overlapping a date interval
    #[command(name = "listMeetings")]
    ListMeetings {
        /// Start date (yyyy-mm-dd)
        #[arg(short, long)]
        start: String,

        /// End date (yyyy-mm-dd)
        #[arg(short, long)]
        end: String,
    },

    /// Cancel a meeting you sponsor
    #[command(name = "deleteAMeeting")]
    DeleteAMeeting {
        #[arg(short, long)]
        title: String,
    },

    /// Leave a meeting you attend (sponsors must delete instead)
    #[command(name = "quit")]
    Quit {
        #[arg(short, long)]
        title: String,
    },

    /// Delete every meeting you sponsor
    #[command(name = "clear")]
    Clear,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let user = resolve_user(cli.user)?;
    tracing::debug!(user = %user, "resolved acting user");
    let mut agenda = Agenda::load()?;

    match cli.command {
        Commands::CreateMeetings {
            title,
            participators,
            start,
            end,
        } => commands::create::run(&mut agenda, &user, &title, &participators, &start, &end)?,
        Commands::AddParticipator { title, participators } => {
            commands::add::run(&mut agenda, &user, &title, &participators)?
        }
        Commands::RmParticipator { title, participators } => {
            commands::remove::run(&mut agenda, &user, &title, &participators)?
        }
        Commands::ListMeetings { start, end } => {
            commands::list::run(&mut agenda, &user, &start, &end)?
        }
        Commands::DeleteAMeeting { title } => commands::delete::run(&mut agenda, &user, &title)?,
        Commands::Quit { title } => commands::quit::run(&mut agenda, &user, &title)?,
        Commands::Clear => commands::clear::run(&mut agenda, &user)?,
    }

    agenda.save()?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("AGENDA_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// The acting user: --user flag, then $AGENDA_USER, then default_user in config.
fn resolve_user(flag: Option<String>) -> Result<String> {
    if let Some(user) = flag
        && !user.trim().is_empty()
    {
        return Ok(user);
    }

    if let Ok(user) = std::env::var("AGENDA_USER")
        && !user.trim().is_empty()
    {
        return Ok(user);
    }

    let config = AgendaConfig::load()?;
    if let Some(user) = config.default_user {
        return Ok(user);
    }

    anyhow::bail!(
        "No user identity found.\n\n\
        Pass one with:\n  \
        agenda --user <name> <command>\n\n\
        Or set $AGENDA_USER, or default_user in ~/.config/agenda/config.toml"
    );
}
