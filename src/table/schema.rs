use super::ObservationTable;
use crate::config::TraitParams;
use serde::Serialize;
use std::fmt;

/// A `Winrate_vs_<Archetype>` column discovered in the header row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchupColumn {
    pub archetype: String,
    pub header: String,
    pub index: usize,
}

impl MatchupColumn {
    pub fn display_name(&self) -> String {
        self.archetype.replace('_', " ")
    }
}

#[derive(Debug, Clone, Default)]
pub struct TableSchema {
    pub matchups: Vec<MatchupColumn>,
    pub predicted: Option<usize>,
    pub predicted_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TableWarning {
    MissingPredictedColumn(String),
    NoMatchupColumns(String),
}

impl fmt::Display for TableWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPredictedColumn(name) => {
                write!(f, "'{}' column not found; Adaptability defaults to 0.", name)
            }
            Self::NoMatchupColumns(prefix) => {
                write!(f, "No '{}*' matchup columns found in the CSV.", prefix)
            }
        }
    }
}

pub fn infer_schema(table: &ObservationTable, params: &TraitParams) -> TableSchema {
    let matchups = table
        .headers
        .iter()
        .enumerate()
        .filter_map(|(index, header)| {
            header
                .strip_prefix(params.matchup_prefix.as_str())
                .map(|archetype| MatchupColumn {
                    archetype: archetype.to_string(),
                    header: header.clone(),
                    index,
                })
        })
        .collect();

    TableSchema {
        matchups,
        predicted: table.column_index(&params.predicted_column),
        predicted_name: params.predicted_column.clone(),
    }
}

impl TableSchema {
    pub fn warnings(&self, params: &TraitParams) -> Vec<TableWarning> {
        let mut out = Vec::new();
        if self.predicted.is_none() {
            out.push(TableWarning::MissingPredictedColumn(
                self.predicted_name.clone(),
            ));
        }
        if self.matchups.is_empty() {
            out.push(TableWarning::NoMatchupColumns(params.matchup_prefix.clone()));
        }
        out
    }

    pub fn find_matchup(&self, name: &str) -> Option<&MatchupColumn> {
        self.matchups.iter().find(|m| {
            m.header.eq_ignore_ascii_case(name)
                || m.archetype.eq_ignore_ascii_case(name)
                || m.display_name().eq_ignore_ascii_case(name)
        })
    }
}
