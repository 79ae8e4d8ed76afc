//! Terminal rendering for listings and confirmations.

#[cfg(test)]
#[path = "output_test.rs"]
mod output_test;

use std::fmt::Write as _;
use std::io::{self, BufRead, Write};

use roster::{Employee, Listing, Position};

/// Render the current page of `listing` as an aligned table with a page
/// footer. Row numbers continue across pages.
pub fn employee_table(listing: &Listing) -> String {
    let rows: Vec<[String; 5]> = listing
        .visible()
        .into_iter()
        .enumerate()
        .map(|(offset, e)| {
            [
                listing.row_number(offset).to_string(),
                e.employee_id.to_string(),
                e.fullname.clone(),
                e.phone_label().to_owned(),
                e.position_name.clone(),
            ]
        })
        .collect();

    let mut out = table(["#", "ID", "NAME", "PHONE", "POSITION"], &rows);
    let matched = listing.filtered().len();
    let pages = listing.total_pages().max(1);
    let _ = writeln!(out, "page {} of {pages} ({matched} matching)", listing.page());
    out
}

pub fn employee_detail(employee: &Employee) -> String {
    let position = employee
        .position_id
        .map_or_else(|| employee.position_name.clone(), |id| format!("{} ({id})", employee.position_name));
    format!(
        "id:       {}\nname:     {}\nphone:    {}\nposition: {position}\n",
        employee.employee_id,
        employee.fullname,
        employee.phone_label(),
    )
}

pub fn position_table(positions: &[Position]) -> String {
    let rows: Vec<[String; 2]> = positions
        .iter()
        .map(|p| [p.position_id.to_string(), p.position_name.clone()])
        .collect();
    table(["ID", "POSITION"], &rows)
}

fn table<const N: usize>(headers: [&str; N], rows: &[[String; N]]) -> String {
    let mut widths = headers.map(str::len);
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &widths, headers.iter().copied());
    for row in rows {
        push_row(&mut out, &widths, row.iter().map(String::as_str));
    }
    out
}

fn push_row<'a>(out: &mut String, widths: &[usize], cells: impl Iterator<Item = &'a str>) {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

/// Ask a yes/no question; anything but `y`/`yes` declines.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<bool> {
    write!(output, "{prompt} [y/N] ")?;
    output.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
