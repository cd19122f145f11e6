//! Habit management commands.

use clap::Subcommand;
use habitflow_core::{App, HabitDraft};

use super::{parse_category, parse_frequency, resolve_habit_id};

#[derive(Subcommand)]
pub enum HabitAction {
    /// Create a new habit
    Add {
        /// Habit name
        name: String,
        /// Longer description
        #[arg(long, default_value = "")]
        description: String,
        /// Category: health, fitness, mindfulness, productivity, learning, social, other
        #[arg(long, default_value = "other")]
        category: String,
        /// Frequency: daily, weekdays, 3x, weekly
        #[arg(long, default_value = "daily")]
        frequency: String,
        /// Habit stacking cue ("after I ...")
        #[arg(long, default_value = "")]
        stack: String,
    },
    /// List habits
    List {
        /// Include archived habits
        #[arg(long)]
        archived: bool,
        /// Print raw JSON records
        #[arg(long)]
        json: bool,
    },
    /// Edit a habit (unset flags keep their current value)
    Edit {
        /// Habit id or name
        habit: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        frequency: Option<String>,
        #[arg(long)]
        stack: Option<String>,
    },
    /// Archive a habit, keeping its history
    Archive {
        /// Habit id or name
        habit: String,
        /// Restore instead of archive
        #[arg(long)]
        restore: bool,
    },
    /// Delete a habit and its completion history
    Delete {
        /// Habit id or name
        habit: String,
    },
}

pub fn run(action: HabitAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::open()?;

    match action {
        HabitAction::Add {
            name,
            description,
            category,
            frequency,
            stack,
        } => {
            let habit = app.add_habit(HabitDraft {
                name,
                description,
                category: parse_category(&category)?,
                frequency: parse_frequency(&frequency)?,
                stack,
            });
            println!("Habit created: {}", habit.id);
            println!("{}", serde_json::to_string_pretty(&habit)?);
        }
        HabitAction::List { archived, json } => {
            let habits: Vec<_> = app
                .state()
                .habits
                .iter()
                .filter(|h| archived || !h.archived)
                .collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&habits)?);
            } else {
                for h in habits {
                    let streak = app.current_streak(&h.id);
                    let flag = if h.archived { " [archived]" } else { "" };
                    println!("{}  {}{flag}  (streak {streak})", h.id, h.name);
                }
            }
        }
        HabitAction::Edit {
            habit,
            name,
            description,
            category,
            frequency,
            stack,
        } => {
            let id = resolve_habit_id(&app, &habit)?;
            let current = app
                .state()
                .habit(&id)
                .ok_or_else(|| format!("habit not found: {habit}"))?
                .clone();
            let draft = HabitDraft {
                name: name.unwrap_or(current.name),
                description: description.unwrap_or(current.description),
                category: match category {
                    Some(c) => parse_category(&c)?,
                    None => current.category,
                },
                frequency: match frequency {
                    Some(f) => parse_frequency(&f)?,
                    None => current.frequency,
                },
                stack: stack.unwrap_or(current.stack),
            };
            app.update_habit(&id, draft);
            let updated = app.state().habit(&id).ok_or("habit vanished")?;
            println!("Habit updated:");
            println!("{}", serde_json::to_string_pretty(updated)?);
        }
        HabitAction::Archive { habit, restore } => {
            let id = resolve_habit_id(&app, &habit)?;
            app.set_archived(&id, !restore);
            if restore {
                println!("Habit restored: {id}");
            } else {
                println!("Habit archived: {id}");
            }
        }
        HabitAction::Delete { habit } => {
            let id = resolve_habit_id(&app, &habit)?;
            app.delete_habit(&id);
            println!("Habit deleted: {id}");
        }
    }
    Ok(())
}
