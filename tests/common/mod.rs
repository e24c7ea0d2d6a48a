#![allow(dead_code)]

use deckforge::config::{Config, TraitParams};
use deckforge::dashboard::Dashboard;
use deckforge::sideboard::SuggestionTable;
use deckforge::table::{load_table_from_reader, ObservationTable};

pub const EPS: f64 = 1e-4;

/// Table built from inline CSV text with default params.
pub fn table_from_csv(csv: &str) -> ObservationTable {
    load_table_from_reader(csv.as_bytes(), &TraitParams::default()).unwrap()
}

pub fn dashboard_from_csv(csv: &str) -> Dashboard {
    Dashboard::from_table(
        table_from_csv(csv),
        Config::default(),
        SuggestionTable::default(),
    )
    .unwrap()
}

/// The two-row reference table: Control [0.6, 0.4], Aggro [0.8, 0.8], Predicted [0.5, 0.7].
pub fn reference_csv() -> &'static str {
    "Winrate_vs_Control,Winrate_vs_Aggro,Predicted Winrate\n\
     0.6,0.8,0.5\n\
     0.4,0.8,0.7\n"
}

pub fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < EPS,
        "{}: expected {:.6}, got {:.6}",
        what,
        expected,
        actual
    );
}
