//! Output formatting module

use foodtruck_domain::model::TruckListing;
use foodtruck_types::{OutputFormat, Result};

const APPLICANT_WIDTH: usize = 40;
const FOOD_ITEMS_WIDTH: usize = 60;
const ADDRESS_WIDTH: usize = 40;

pub fn output_listings(output_format: OutputFormat, listings: &[TruckListing]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(listings)?;
        println!("{}", content);
    } else {
        print!("{}", render_table(listings));
    }

    Ok(())
}

/// Applicant / FoodItems / Address table, one row per listing
pub fn render_table(listings: &[TruckListing]) -> String {
    if listings.is_empty() {
        return "No matching food trucks.\n".to_string();
    }

    let rows: Vec<[String; 3]> = listings
        .iter()
        .map(|l| {
            [
                truncate_str(&l.applicant, APPLICANT_WIDTH),
                truncate_str(l.food_items.as_deref().unwrap_or("-"), FOOD_ITEMS_WIDTH),
                truncate_str(l.address.as_deref().unwrap_or("-"), ADDRESS_WIDTH),
            ]
        })
        .collect();

    let headers = ["Applicant", "FoodItems", "Address"];
    let mut widths = headers.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut table = String::new();
    push_row(&mut table, &headers, &widths);
    table.push_str(&"-".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1)));
    table.push('\n');
    for row in &rows {
        push_row(&mut table, row, &widths);
    }
    table.push('\n');
    table.push_str(&format!(
        "{} food truck{} found\n",
        rows.len(),
        if rows.len() == 1 { "" } else { "s" }
    ));
    table
}

fn push_row<S: AsRef<str>>(table: &mut String, cells: &[S], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| pad(cell.as_ref(), *width))
        .collect::<Vec<_>>()
        .join("  ");
    table.push_str(line.trim_end());
    table.push('\n');
}

fn pad(s: &str, width: usize) -> String {
    let len = s.chars().count();
    format!("{}{}", s, " ".repeat(width.saturating_sub(len)))
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}
