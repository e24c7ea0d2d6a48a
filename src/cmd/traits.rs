use crate::reports;
use clap::Args;
use deckforge::cards::{resolve_card, CardImageSource, CardLink};
use deckforge::config::{Config, DEFAULT_EXPORT_PATH};
use deckforge::dashboard::{Dashboard, Diagnosis};
use deckforge::error::DfResult;
use deckforge::sideboard::{dedup_preserving_order, export_list};
use deckforge::traits::Trait;
use serde_json::json;

#[derive(Args, Debug, Clone)]
pub struct TraitsArgs {
    #[command(flatten)]
    pub config: Config,

    /// Partition to diagnose (defaults to the first one in the file)
    #[arg(short, long)]
    pub partition: Option<String>,

    /// Drop repeated cards from the suggestion list
    #[arg(long, default_value_t = false)]
    pub dedup: bool,

    /// Write the suggestion list as plain text
    #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_EXPORT_PATH)]
    pub export: Option<String>,
}

pub fn run(
    args: TraitsArgs,
    dash: &Dashboard,
    images: &dyn CardImageSource,
    as_json: bool,
) -> DfResult<()> {
    let partition = dash.resolve_partition(args.partition.as_deref())?;
    let all = dash.all_traits();
    let mut diagnosis = dash.diagnose(&partition);
    if args.dedup {
        diagnosis.suggestions = dedup_preserving_order(diagnosis.suggestions);
    }
    let links = link_groups(&diagnosis, dash, images, args.dedup);

    if let Some(path) = &args.export {
        export_list(&diagnosis.suggestions, path)?;
    }

    if as_json {
        let groups: Vec<_> = links
            .iter()
            .map(|(t, l)| json!({ "trait": t, "cards": l }))
            .collect();
        return reports::print_json(&json!({
            "partitions": all,
            "diagnosis": diagnosis,
            "links": groups,
        }));
    }

    reports::print_radar(&all);
    reports::print_diagnosis(&diagnosis);
    reports::print_card_links(&links);
    Ok(())
}

/// Cards grouped under each weak trait, with image or search-link fallback.
/// With `dedup`, a card is only listed under the first trait that suggests it.
pub fn link_groups(
    diagnosis: &Diagnosis,
    dash: &Dashboard,
    images: &dyn CardImageSource,
    dedup: bool,
) -> Vec<(Trait, Vec<CardLink>)> {
    let mut shown: Vec<&str> = Vec::new();
    let mut groups = Vec::with_capacity(diagnosis.weak.len());
    for t in diagnosis.weak.iter() {
        let mut links = Vec::new();
        for card in dash.suggestions.cards_for(t) {
            if dedup {
                if shown.contains(&card.as_str()) {
                    continue;
                }
                shown.push(card.as_str());
            }
            links.push(resolve_card(images, card));
        }
        groups.push((t, links));
    }
    groups
}
