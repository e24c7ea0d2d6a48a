mod bars;
mod tables;

pub use self::tables::{
    card_links as print_card_links, diagnosis as print_diagnosis,
    matchup_bars as print_matchup_bars, radar as print_radar, raw_data as print_raw_data,
    series as print_series, simulation_inputs as print_simulation_inputs,
};

use deckforge::error::DfResult;
use serde::Serialize;

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> DfResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
