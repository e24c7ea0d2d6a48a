use super::ObservationTable;
use crate::config::TraitParams;
use crate::error::DfResult;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

pub fn load_table<P: AsRef<Path>>(path: P, params: &TraitParams) -> DfResult<ObservationTable> {
    let path = path.as_ref();
    info!("📂 Loading predictions from: {}", path.display());
    let file = File::open(path)?;
    load_table_from_reader(file, params)
}

pub fn load_table_from_reader<R: Read>(
    reader: R,
    params: &TraitParams,
) -> DfResult<ObservationTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.to_string()).collect();

    let mut records: Vec<Vec<String>> = Vec::new();
    let mut skipped = 0usize;
    for (row_idx, result) in rdr.records().enumerate() {
        match result {
            Ok(rec) => records.push(rec.iter().map(|c| c.to_string()).collect()),
            Err(e) => {
                skipped += 1;
                debug!("[Row {}] CSV Parse Error: {}", row_idx + 1, e);
            }
        }
    }

    if skipped > 0 {
        warn!("⚠️  Skipped {} unreadable rows.", skipped);
    }

    let table = ObservationTable::from_records(headers, records, params);
    debug!(
        "Loaded {} rows x {} columns",
        table.n_rows(),
        table.headers.len()
    );
    Ok(table)
}
