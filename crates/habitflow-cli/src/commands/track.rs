//! Completion tracking commands.

use clap::Subcommand;
use habitflow_core::{App, Event};

use super::{parse_date, resolve_habit_id};

#[derive(Subcommand)]
pub enum TrackAction {
    /// Toggle a completion (today unless --date is given)
    Done {
        /// Habit id or name
        habit: String,
        /// Day to toggle, YYYY-MM-DD
        #[arg(long)]
        date: Option<String>,
    },
    /// Today's checklist with fulfillment state
    Status,
}

pub fn run(action: TrackAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::open()?;

    match action {
        TrackAction::Done { habit, date } => {
            let id = resolve_habit_id(&app, &habit)?;
            let events = match date {
                Some(raw) => app.toggle_completion_on(&id, parse_date(&raw)?),
                None => app.toggle_completion(&id),
            };
            for event in &events {
                print_event(event);
            }
            println!("Score: {}", app.state().score);
        }
        TrackAction::Status => {
            let summary = app.daily_summary();
            println!(
                "Today: {}/{} fulfilled ({}%)",
                summary.fulfilled, summary.due, summary.percent
            );
            let due: Vec<_> = app.due_today().iter().map(|h| h.id.clone()).collect();
            for id in due {
                let habit = app.state().habit(&id).ok_or("habit vanished")?;
                let mark = if app.is_fulfilled(&id) { "x" } else { " " };
                let weekly = if habit.frequency.has_weekly_quota() {
                    format!(
                        "  ({}/{} this week)",
                        app.weekly_completions(&id),
                        habit.frequency.weekly_target()
                    )
                } else {
                    String::new()
                };
                println!("[{mark}] {}{weekly}", habit.name);
            }
        }
    }
    Ok(())
}

fn print_event(event: &Event) {
    match event {
        Event::CompletionMarked { day, points, .. } => {
            println!("Completed for {day} (+{points})");
        }
        Event::CompletionCleared {
            day,
            points_revoked,
            ..
        } => {
            println!("Cleared for {day} (-{points_revoked})");
        }
        Event::AllHabitsDone { bonus, .. } => {
            println!("All habits done today! (+{bonus} bonus)");
        }
        Event::WeeklyTargetReached {
            habit_name,
            completed,
            target,
            ..
        } => {
            println!("Weekly target reached for {habit_name}: {completed}/{target}");
        }
    }
}
