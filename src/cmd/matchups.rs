use crate::reports;
use clap::Args;
use deckforge::analysis::{bottom_n, column_series, top_n, HIGHLIGHT_COUNT};
use deckforge::config::Config;
use deckforge::dashboard::Dashboard;
use deckforge::error::DfResult;
use serde_json::json;
use tracing::warn;

#[derive(Args, Debug, Clone)]
pub struct MatchupsArgs {
    #[command(flatten)]
    pub config: Config,

    /// Show the per-row series for one opponent (archetype or column name)
    #[arg(short, long)]
    pub opponent: Option<String>,

    #[arg(long, default_value_t = HIGHLIGHT_COUNT)]
    pub top: usize,
}

pub fn run(args: MatchupsArgs, dash: &Dashboard, as_json: bool) -> DfResult<()> {
    if !dash.has_matchups() {
        warn!("⚠️  No matchup data found in the CSV.");
        if as_json {
            reports::print_json(&json!({ "averages": [] }))?;
        }
        return Ok(());
    }

    let selected = match &args.opponent {
        Some(name) => Some(dash.find_matchup(name)?),
        None => None,
    };

    let averages = dash.matchup_averages();
    let top = top_n(&averages, args.top);
    let bottom = bottom_n(&averages, args.top);

    if as_json {
        let series = selected.map(|m| {
            json!({
                "opponent": m.display_name(),
                "series": column_series(&dash.table, m),
            })
        });
        return reports::print_json(&json!({
            "selected": series,
            "averages": averages,
            "top": top,
            "bottom": bottom,
        }));
    }

    if let Some(m) = selected {
        reports::print_series(
            &format!("Winrate vs {}", m.display_name()),
            &column_series(&dash.table, m),
        );
    }

    reports::print_matchup_bars("📋 All Matchup Winrates", &averages);
    reports::print_matchup_bars(&format!("🔥 Top {} Matchups", args.top), top);
    reports::print_matchup_bars(&format!("💀 Bottom {} Matchups", args.top), bottom);
    Ok(())
}
