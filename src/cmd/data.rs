use crate::reports;
use clap::Args;
use deckforge::config::Config;
use deckforge::dashboard::Dashboard;
use deckforge::error::DfResult;
use serde_json::json;

#[derive(Args, Debug, Clone)]
pub struct DataArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(short, long)]
    pub limit: Option<usize>,
}

pub fn run(args: DataArgs, dash: &Dashboard, as_json: bool) -> DfResult<()> {
    if as_json {
        let shown = args.limit.unwrap_or(dash.table.n_rows());
        let rows: Vec<_> = dash.table.raw_rows.iter().take(shown).collect();
        return reports::print_json(&json!({
            "headers": dash.table.headers,
            "rows": rows,
        }));
    }
    reports::print_raw_data(&dash.table, args.limit);
    Ok(())
}
