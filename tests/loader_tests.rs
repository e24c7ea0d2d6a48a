use deckforge::config::TraitParams;
use deckforge::error::DeckForgeError;
use deckforge::table::{infer_schema, load_table, TableWarning};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_csv(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for l in lines {
        writeln!(file, "{}", l).unwrap();
    }
    file
}

#[test]
fn test_loader_parses_predictions_file() {
    let file = write_csv(&[
        "Predicted Winrate,Winrate_vs_Control,Winrate_vs_Mono_Red_Aggro",
        "0.55,0.6,0.7",
        "0.57,0.5,0.8",
    ]);
    let params = TraitParams::default();
    let table = load_table(file.path(), &params).unwrap();
    assert_eq!(table.n_rows(), 2);

    let schema = infer_schema(&table, &params);
    assert_eq!(schema.matchups.len(), 2);
    assert_eq!(schema.matchups[1].archetype, "Mono_Red_Aggro");
    assert_eq!(schema.matchups[1].display_name(), "Mono Red Aggro");
    assert_eq!(schema.predicted, Some(0));
    assert!(schema.warnings(&params).is_empty());
}

#[test]
fn test_loader_trims_whitespace() {
    let file = write_csv(&["Winrate_vs_Control , Predicted Winrate", " 0.6 , 0.5 "]);
    let params = TraitParams::default();
    let table = load_table(file.path(), &params).unwrap();
    let schema = infer_schema(&table, &params);
    assert_eq!(schema.matchups.len(), 1);
    assert_eq!(table.column(0), &[Some(0.6)]);
    assert_eq!(table.column(1), &[Some(0.5)]);
}

#[test]
fn test_loader_tolerates_ragged_rows() {
    let file = write_csv(&["Winrate_vs_Control,Winrate_vs_Aggro", "0.6", "0.4,0.8,extra"]);
    let table = load_table(file.path(), &TraitParams::default()).unwrap();
    assert_eq!(table.n_rows(), 2);
    assert_eq!(table.column(1), &[None, Some(0.8)]);
}

#[test]
fn test_schema_reports_missing_columns() {
    let file = write_csv(&["Date,Notes", "2024-01-01,hello"]);
    let params = TraitParams::default();
    let table = load_table(file.path(), &params).unwrap();
    let warnings = infer_schema(&table, &params).warnings(&params);
    assert_eq!(
        warnings,
        vec![
            TableWarning::MissingPredictedColumn("Predicted Winrate".to_string()),
            TableWarning::NoMatchupColumns("Winrate_vs_".to_string()),
        ]
    );
}

#[test]
fn test_custom_prefix_is_honoured() {
    let file = write_csv(&["WR_Control,Winrate_vs_Aggro", "0.6,0.7"]);
    let params = TraitParams {
        matchup_prefix: "WR_".to_string(),
        ..TraitParams::default()
    };
    let table = load_table(file.path(), &params).unwrap();
    let schema = infer_schema(&table, &params);
    assert_eq!(schema.matchups.len(), 1);
    assert_eq!(schema.matchups[0].archetype, "Control");
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_table("/definitely/not/here.csv", &TraitParams::default()).unwrap_err();
    assert!(matches!(err, DeckForgeError::Io(_)));
}
