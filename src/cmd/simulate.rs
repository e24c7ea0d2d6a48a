use super::traits::link_groups;
use crate::reports;
use clap::Args;
use deckforge::cards::CardImageSource;
use deckforge::config::Config;
use deckforge::dashboard::Dashboard;
use deckforge::error::DfResult;
use deckforge::sideboard::dedup_preserving_order;
use deckforge::traits::MatchupInputs;
use serde_json::json;

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub config: Config,

    #[command(flatten)]
    pub inputs: MatchupInputs,

    #[arg(long, default_value_t = false)]
    pub dedup: bool,
}

pub fn run(
    args: SimulateArgs,
    dash: &Dashboard,
    images: &dyn CardImageSource,
    as_json: bool,
) -> DfResult<()> {
    let mut diagnosis = dash.simulate(&args.inputs)?;
    if args.dedup {
        diagnosis.suggestions = dedup_preserving_order(diagnosis.suggestions);
    }

    if as_json {
        return reports::print_json(&json!({
            "inputs": args.inputs,
            "diagnosis": diagnosis,
        }));
    }

    reports::print_simulation_inputs(&args.inputs);
    reports::print_diagnosis(&diagnosis);
    reports::print_card_links(&link_groups(&diagnosis, dash, images, args.dedup));
    Ok(())
}
