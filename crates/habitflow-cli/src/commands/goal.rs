//! Goal management commands.

use clap::Subcommand;
use habitflow_core::{App, GoalDraft};

use super::{resolve_habit_id, split_list};

#[derive(Subcommand)]
pub enum GoalAction {
    /// Create a new goal
    Add {
        /// Goal name
        name: String,
        /// Longer description
        #[arg(long, default_value = "")]
        description: String,
        /// Deadline, YYYY-MM-DD (informational)
        #[arg(long, default_value = "")]
        deadline: String,
        /// Days of linked-habit activity to reach 100%
        #[arg(long, default_value = "30")]
        target_days: u32,
        /// Comma-separated habit ids or names to link
        #[arg(long)]
        habits: Option<String>,
    },
    /// List goals with derived progress
    List {
        /// Print raw JSON records
        #[arg(long)]
        json: bool,
    },
    /// Edit a goal (unset flags keep their current value)
    Edit {
        /// Goal id
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        deadline: Option<String>,
        #[arg(long)]
        target_days: Option<u32>,
        /// Comma-separated habit ids or names, replacing the current links
        #[arg(long)]
        habits: Option<String>,
    },
    /// Delete a goal
    Delete {
        /// Goal id
        id: String,
    },
}

pub fn run(action: GoalAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::open()?;

    match action {
        GoalAction::Add {
            name,
            description,
            deadline,
            target_days,
            habits,
        } => {
            let linked_habits = resolve_links(&app, habits)?;
            let goal = app.add_goal(GoalDraft {
                name,
                description,
                deadline,
                target_days,
                linked_habits,
            });
            println!("Goal created: {}", goal.id);
            println!("{}", serde_json::to_string_pretty(&goal)?);
        }
        GoalAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&app.state().goals)?);
            } else {
                let goals: Vec<_> = app.state().goals.clone();
                for goal in goals {
                    let progress = app.goal_progress(&goal.id).ok_or("goal vanished")?;
                    println!(
                        "{}  {}  {}/{} days ({}%)",
                        goal.id,
                        goal.name,
                        progress.days_completed,
                        progress.target_days,
                        progress.percent
                    );
                }
            }
        }
        GoalAction::Edit {
            id,
            name,
            description,
            deadline,
            target_days,
            habits,
        } => {
            let current = app
                .state()
                .goal(&id)
                .ok_or_else(|| format!("goal not found: {id}"))?
                .clone();
            let linked_habits = match habits {
                Some(_) => resolve_links(&app, habits)?,
                None => current.linked_habits,
            };
            let updated = app.update_goal(
                &id,
                GoalDraft {
                    name: name.unwrap_or(current.name),
                    description: description.unwrap_or(current.description),
                    deadline: deadline.unwrap_or(current.deadline),
                    target_days: target_days.unwrap_or(current.target_days),
                    linked_habits,
                },
            );
            if !updated {
                return Err(format!("goal not found: {id}").into());
            }
            println!("Goal updated:");
            let goal = app.state().goal(&id).ok_or("goal vanished")?;
            println!("{}", serde_json::to_string_pretty(goal)?);
        }
        GoalAction::Delete { id } => {
            if !app.delete_goal(&id) {
                return Err(format!("goal not found: {id}").into());
            }
            println!("Goal deleted: {id}");
        }
    }
    Ok(())
}

fn resolve_links(app: &App, habits: Option<String>) -> Result<Vec<String>, String> {
    habits
        .as_deref()
        .map(split_list)
        .unwrap_or_default()
        .iter()
        .map(|needle| resolve_habit_id(app, needle))
        .collect()
}
