//! Statistics commands. Output is JSON for anything structured.

use chrono::Datelike;
use clap::Subcommand;
use habitflow_core::App;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Today's fulfillment summary
    Today,
    /// Current-week rates and category breakdown
    Week,
    /// Calendar heatmap for a month (defaults to the current one)
    Month {
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        month: Option<u32>,
    },
    /// Top habits by current streak
    Streaks {
        /// Number of leaders to show
        #[arg(long, default_value = "5")]
        limit: usize,
    },
    /// Badge catalog with earned state
    Badges,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let app = App::open()?;

    match action {
        StatsAction::Today => {
            println!("{}", serde_json::to_string_pretty(&app.daily_summary())?);
        }
        StatsAction::Week => {
            let view = serde_json::json!({
                "weeklyRate": app.weekly_rate(),
                "days": app.trailing_week(),
                "categories": app.category_breakdown(),
            });
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        StatsAction::Month { year, month } => {
            let today = habitflow_core::date::today();
            let year = year.unwrap_or_else(|| today.year());
            let month = month.unwrap_or_else(|| today.month());
            let days = app.month_heatmap(year, month);
            if days.is_empty() {
                return Err(format!("invalid month: {year}-{month:02}").into());
            }
            println!("{}", serde_json::to_string_pretty(&days)?);
        }
        StatsAction::Streaks { limit } => {
            println!("{}", serde_json::to_string_pretty(&app.streak_leaders(limit))?);
        }
        StatsAction::Badges => {
            println!("{}", serde_json::to_string_pretty(&app.badges())?);
        }
    }
    Ok(())
}
