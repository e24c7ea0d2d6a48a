use super::bars::{axis_max, bar};
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use deckforge::analysis::MatchupAverage;
use deckforge::cards::CardLink;
use deckforge::dashboard::Diagnosis;
use deckforge::table::ObservationTable;
use deckforge::traits::{MatchupInputs, PartitionTraits, Trait};
use strum::IntoEnumIterator;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, cols: std::ops::RangeInclusive<usize>) {
    for i in cols {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

pub fn series(title: &str, values: &[Option<f64>]) {
    println!("\n📈 {}", title);
    let max = axis_max(values.iter().flatten().copied());

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Row").add_attribute(Attribute::Bold),
        Cell::new("Value").fg(Color::Cyan),
        Cell::new(""),
    ]);
    align_right(&mut table, 0..=1);

    for (i, v) in values.iter().enumerate() {
        let (text, glyph) = match v {
            Some(v) => (format!("{:.3}", v), bar(*v, max)),
            None => ("-".to_string(), String::new()),
        };
        table.add_row(vec![
            Cell::new(i),
            Cell::new(text).fg(Color::Cyan),
            Cell::new(glyph),
        ]);
    }
    println!("{}", table);
}

pub fn matchup_bars(title: &str, rows: &[MatchupAverage]) {
    println!("\n{}", title);
    let max = axis_max(rows.iter().map(|r| r.mean));

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Opponent").add_attribute(Attribute::Bold),
        Cell::new("Avg Winrate").fg(Color::Cyan),
        Cell::new(""),
    ]);
    align_right(&mut table, 1..=1);

    for r in rows {
        let color = if r.mean >= 0.5 { Color::Green } else { Color::Red };
        table.add_row(vec![
            Cell::new(&r.archetype).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.3}", r.mean)).fg(color),
            Cell::new(bar(r.mean, max)),
        ]);
    }
    println!("{}", table);
}

/// Spider-chart data as a grid: one row per trait, one column per partition.
pub fn radar(results: &[PartitionTraits]) {
    println!("\n📊 Trait Comparison");
    let max = axis_max(results.iter().flat_map(|p| p.scores.iter().map(|(_, v)| v)));

    let mut table = new_table();
    let mut header = vec![Cell::new("Trait").add_attribute(Attribute::Bold)];
    header.extend(
        results
            .iter()
            .map(|p| Cell::new(&p.partition).add_attribute(Attribute::Bold)),
    );
    table.add_row(header);

    for t in Trait::iter() {
        let mut row = vec![Cell::new(t.to_string()).add_attribute(Attribute::Bold)];
        for p in results {
            let v = p.scores.get(t);
            row.push(Cell::new(format!("{:.3} {}", v, bar(v, max))));
        }
        table.add_row(row);
    }
    println!("{}", table);
}

pub fn diagnosis(d: &Diagnosis) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new(format!("Trait ({})", d.partition)).add_attribute(Attribute::Bold),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Status"),
    ]);
    align_right(&mut table, 1..=1);

    for (t, v) in d.scores.iter() {
        let status = if d.weak.contains(t) {
            Cell::new(format!("WEAK (< {})", d.threshold)).fg(Color::Red)
        } else {
            Cell::new("ok").fg(Color::Green)
        };
        table.add_row(vec![
            Cell::new(t.to_string()).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.4}", v)).fg(Color::Cyan),
            status,
        ]);
    }
    println!("\n{}", table);
}

pub fn card_links(groups: &[(Trait, Vec<CardLink>)]) {
    println!("\n🧙 Sideboard Suggestions");
    if groups.is_empty() {
        println!("✅ No major weaknesses detected.");
        return;
    }
    for (t, links) in groups {
        println!("\n{} is below threshold. Consider:", t);
        for link in links {
            match &link.image_url {
                Some(img) => println!("  - {} [{}] ({})", link.name, img, link.search_url),
                None => println!("  - {} ({})", link.name, link.search_url),
            }
        }
    }
}

pub fn simulation_inputs(inputs: &MatchupInputs) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Opponent").add_attribute(Attribute::Bold),
        Cell::new("Winrate").fg(Color::Cyan),
        Cell::new(""),
    ]);
    align_right(&mut table, 1..=1);
    for (name, v) in inputs.entries() {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(format!("{:.2}", v)).fg(Color::Cyan),
            Cell::new(bar(v, 1.0)),
        ]);
    }
    println!("\n🧪 Simulated Matchups\n{}", table);
}

pub fn raw_data(data: &ObservationTable, limit: Option<usize>) {
    let mut table = new_table();
    table.set_header(data.headers.iter().map(|h| Cell::new(h).add_attribute(Attribute::Bold)));

    let shown = limit.unwrap_or(data.n_rows()).min(data.n_rows());
    for row in data.raw_rows.iter().take(shown) {
        table.add_row(row.iter().map(Cell::new));
    }
    println!("\n📄 Full Dataset\n{}", table);
    if shown < data.n_rows() {
        println!("... {} more rows", data.n_rows() - shown);
    }
}
