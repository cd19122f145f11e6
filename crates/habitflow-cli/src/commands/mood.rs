//! Daily mood journal commands.

use clap::Subcommand;
use habitflow_core::App;

use super::{parse_date, parse_mood};

#[derive(Subcommand)]
pub enum MoodAction {
    /// Record the mood for a day (today unless --date is given)
    Set {
        /// Mood: great, good, okay, bad, awful
        mood: String,
        /// Day, YYYY-MM-DD
        #[arg(long)]
        date: Option<String>,
    },
    /// Attach a free-form note to today's entry
    Note {
        /// Note text
        text: String,
    },
    /// Show the entry for a day (today unless --date is given)
    Show {
        /// Day, YYYY-MM-DD
        #[arg(long)]
        date: Option<String>,
    },
}

pub fn run(action: MoodAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::open()?;

    match action {
        MoodAction::Set { mood, date } => {
            let mood = parse_mood(&mood)?;
            match date {
                Some(raw) => app.set_mood_on(mood, parse_date(&raw)?),
                None => app.set_mood(mood),
            }
            println!("Mood recorded");
        }
        MoodAction::Note { text } => {
            app.set_mood_note(text);
            println!("Note saved");
        }
        MoodAction::Show { date } => {
            let day = match date {
                Some(raw) => parse_date(&raw)?,
                None => habitflow_core::date::today(),
            };
            match app.mood(day) {
                Some(entry) => println!("{}", serde_json::to_string_pretty(entry)?),
                None => println!("No entry for {}", habitflow_core::date::day_key(day)),
            }
        }
    }
    Ok(())
}
