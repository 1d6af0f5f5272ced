use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use mcdm_cli::types::{RankResult, ScoresResult};
use mcdm_model::{CriterionTable, DominanceScore};

pub fn print_rank_summary(result: &RankResult) {
    let outcome = &result.outcome;
    println!("Input: {}", result.input.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run)"),
    }
    if let Some(path) = &result.json_report {
        println!("JSON report: {}", path.display());
    }
    println!(
        "Ranked {} of {} alternatives ({} discarded by Pareto reduction)",
        outcome.ranked.len(),
        result.alternatives,
        outcome.pareto.discarded.len()
    );

    let mut table = Table::new();
    let mut header = vec![
        header_cell("#"),
        header_cell("Tier"),
        header_cell(&result.name_column),
    ];
    header.extend(outcome.criteria_order.iter().map(|c| header_cell(c.as_str())));
    table.set_header(header);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);

    let mut position = 0usize;
    for tier in &outcome.tiers {
        for &id in &tier.alternatives {
            position += 1;
            let mut row = vec![
                Cell::new(position),
                tier_cell(tier.position, tier.is_tie()),
                Cell::new(result.names.display_name(id)).add_attribute(Attribute::Bold),
            ];
            row.extend(value_cells(&outcome.table, id));
            table.add_row(row);
        }
    }
    for column in 3..table.column_count() {
        align_column(&mut table, column, CellAlignment::Right);
    }
    println!("{table}");
}

pub fn print_scores_summary(result: &ScoresResult) {
    println!("Input: {}", result.input.display());

    let mut order = Table::new();
    order.set_header(vec![header_cell("Priority"), header_cell("Criterion"), header_cell("Rank")]);
    apply_table_style(&mut order);
    for (idx, criterion) in result.criteria_order.iter().enumerate() {
        let rank = result
            .significance
            .rank_of(criterion)
            .map_or_else(|| dim_cell("-"), Cell::new);
        order.add_row(vec![Cell::new(idx + 1), Cell::new(criterion.as_str()), rank]);
    }
    println!("{order}");

    let mut scores = Table::new();
    scores.set_header(vec![
        header_cell("Alternative"),
        header_cell("Weight"),
        header_cell("Score"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut scores);
    align_column(&mut scores, 1, CellAlignment::Right);
    align_column(&mut scores, 2, CellAlignment::Right);
    align_column(&mut scores, 3, CellAlignment::Center);
    for score in &result.pareto.scores {
        scores.add_row(score_row(result, score));
    }
    let mean = result
        .pareto
        .mean
        .map_or_else(|| dim_cell("-"), |mean| Cell::new(format!("{mean:.4}")));
    scores.add_row(vec![
        Cell::new("MEAN")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        mean.add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{scores}");
}

fn score_row(result: &ScoresResult, score: &DominanceScore) -> Vec<Cell> {
    let status = if result.pareto.was_discarded(score.alternative) {
        Cell::new("discarded").fg(Color::Red)
    } else {
        Cell::new("kept")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    };
    vec![
        Cell::new(result.names.display_name(score.alternative)),
        Cell::new(score.weight_sum),
        Cell::new(format!("{:.4}", score.score)),
        status,
    ]
}

fn value_cells(table: &CriterionTable, id: mcdm_model::AlternativeId) -> Vec<Cell> {
    table
        .criteria()
        .iter()
        .map(|criterion| {
            table
                .value(id, criterion)
                .map_or_else(|| dim_cell("-"), Cell::new)
        })
        .collect()
}

fn tier_cell(position: usize, is_tie: bool) -> Cell {
    if is_tie {
        Cell::new(format!("{position}=")).fg(Color::Yellow)
    } else {
        Cell::new(position)
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
