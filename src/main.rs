mod commands;
mod dates;
mod notifier;
mod render;
mod store;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use timeblock_core::ViewMode;
use timeblock_core::conversation::ProfileSection;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "timeblock")]
#[command(about = "Plan your days with time blocks and AI-suggested focus sessions")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the hourly grid for a day
    Day {
        /// Date to show (e.g. "2025-03-20", "tomorrow"); defaults to today
        date: Option<String>,

        /// Include AI suggestions for the day
        #[arg(short, long)]
        suggestions: bool,

        /// Print empty hours too
        #[arg(long)]
        all_hours: bool,
    },
    /// Show the Monday-starting week containing a date
    Week {
        /// Any date in the week; defaults to today
        date: Option<String>,

        /// Jump this many weeks forward (negative goes back)
        #[arg(long, allow_hyphen_values = true, default_value_t = 0)]
        offset: i64,
    },
    /// List AI suggestions for a day
    Suggestions {
        date: Option<String>,
    },
    /// Accept a suggestion, turning it into an event
    Accept {
        id: String,
    },
    /// Reject a suggestion
    Reject {
        id: String,
    },
    /// Add an event
    Add {
        /// Event title (prompted for when omitted)
        title: Option<String>,

        /// Start time (e.g. "09:00", "6:30pm")
        #[arg(short, long)]
        start: Option<String>,

        /// End time
        #[arg(short, long, conflicts_with = "duration")]
        end: Option<String>,

        /// Duration (e.g. "30m", "1h", "2h30m")
        #[arg(short, long, conflicts_with = "end", requires = "start")]
        duration: Option<String>,

        /// Date of the event; defaults to today
        #[arg(long)]
        date: Option<String>,

        /// Mark as a regular commitment
        #[arg(short, long)]
        recurring: bool,

        /// Display color (e.g. "blue", "green")
        #[arg(short, long)]
        color: Option<String>,
    },
    /// Remove an event
    Remove {
        id: String,
    },
    /// Import suggestions from a JSON file produced by a planner
    Import {
        file: PathBuf,
    },
    /// Answer a few questions so the assistant knows your goals
    Onboard,
    /// Show your profile, or edit one section of it
    Profile {
        /// Section to edit: "want", "really-want" or "regulars"
        #[arg(long, value_name = "SECTION")]
        edit: Option<ProfileSection>,

        /// New text for the section (prompted for when omitted)
        #[arg(requires = "edit")]
        text: Option<String>,
    },
    /// Print the chat-completion request for a message
    Chat {
        message: String,
    },
    /// Show or change settings in ~/.config/timeblock/config.toml
    Config {
        /// Initial view: "day" or "week"
        #[arg(long)]
        view: Option<ViewMode>,

        /// Show suggestions by default
        #[arg(long)]
        show_suggestions: Option<bool>,

        /// Length of events added without an end (e.g. "45m")
        #[arg(long)]
        duration: Option<String>,

        /// Color for events created from accepted suggestions
        #[arg(long)]
        color: Option<String>,
    },
    /// Record the assistant's answer from a chat-completion response file
    Reply {
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    init_logging()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Day {
            date,
            suggestions,
            all_hours,
        } => commands::day::run(date.as_deref(), suggestions, all_hours),
        Commands::Week { date, offset } => commands::week::run(date.as_deref(), offset),
        Commands::Suggestions { date } => commands::suggestions::run(date.as_deref()),
        Commands::Accept { id } => commands::accept::run(&id),
        Commands::Reject { id } => commands::reject::run(&id),
        Commands::Add {
            title,
            start,
            end,
            duration,
            date,
            recurring,
            color,
        } => commands::add::run(commands::add::AddArgs {
            title,
            start,
            end,
            duration,
            date,
            recurring,
            color,
        }),
        Commands::Remove { id } => commands::remove::run(&id),
        Commands::Import { file } => commands::import::run(&file),
        Commands::Onboard => commands::onboard::run(),
        Commands::Profile { edit, text } => commands::profile::run(edit, text),
        Commands::Chat { message } => commands::chat::run(&message),
        Commands::Config {
            view,
            show_suggestions,
            duration,
            color,
        } => commands::config::run(commands::config::ConfigArgs {
            view,
            show_suggestions,
            duration,
            color,
        }),
        Commands::Reply { file } => commands::reply::run(&file),
    }
}

/// Log to stderr, filtered by TIMEBLOCK_LOG (default "warn").
fn init_logging() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_env("TIMEBLOCK_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set up logging: {}", e))?;

    Ok(())
}
