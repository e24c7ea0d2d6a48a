use crate::reports;
use clap::Args;
use deckforge::analysis::predicted_series;
use deckforge::config::Config;
use deckforge::dashboard::Dashboard;
use deckforge::error::DfResult;
use serde_json::json;
use tracing::warn;

#[derive(Args, Debug, Clone)]
pub struct TrendArgs {
    #[command(flatten)]
    pub config: Config,
}

pub fn run(_args: TrendArgs, dash: &Dashboard, as_json: bool) -> DfResult<()> {
    let Some(series) = predicted_series(&dash.table, &dash.schema) else {
        warn!("⚠️  {} column not found.", dash.schema.predicted_name);
        if as_json {
            reports::print_json(&json!({ "column": dash.schema.predicted_name, "series": null }))?;
        }
        return Ok(());
    };

    if as_json {
        return reports::print_json(&json!({
            "column": dash.schema.predicted_name,
            "series": series,
        }));
    }

    reports::print_series(
        &format!("{} Over Time", dash.schema.predicted_name),
        &series,
    );
    Ok(())
}
