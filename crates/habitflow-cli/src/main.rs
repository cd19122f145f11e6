use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

mod commands;

#[derive(Parser)]
#[command(name = "habitflow-cli", version, about = "HabitFlow CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Habit management
    Habit {
        #[command(subcommand)]
        action: commands::habit::HabitAction,
    },
    /// Completion tracking
    Track {
        #[command(subcommand)]
        action: commands::track::TrackAction,
    },
    /// Daily mood journal
    Mood {
        #[command(subcommand)]
        action: commands::mood::MoodAction,
    },
    /// Goal management
    Goal {
        #[command(subcommand)]
        action: commands::goal::GoalAction,
    },
    /// Statistics and derived views
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Backup, restore and reset
    Data {
        #[command(subcommand)]
        action: commands::data::DataAction,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

fn main() {
    // Logging is best-effort; the CLI stays usable without it.
    if let Ok(dir) = habitflow_core::data_dir() {
        let _ = habitflow_core::logging::init(
            habitflow_core::logging::default_level(),
            &dir.join("logs"),
        );
    }

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Habit { action } => commands::habit::run(action),
        Commands::Track { action } => commands::track::run(action),
        Commands::Mood { action } => commands::mood::run(action),
        Commands::Goal { action } => commands::goal::run(action),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Data { action } => commands::data::run(action),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
