//! Plain-text report tables
//!
//! Shared helpers for the aligned tables every command prints: first
//! column left-aligned, value columns right-aligned, one separator line
//! under the header.

/// Format an optional value with one decimal place, `n/a` when absent.
pub(crate) fn cell(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.1}"))
}

/// Format an optional signed value with one decimal place, `n/a` when absent.
pub(crate) fn signed_cell(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:+.1}"))
}

/// Print an aligned table with a header row and separator.
pub(crate) fn print_table(headers: &[String], rows: &[Vec<String>]) {
    let num_cols = headers.len();
    let mut widths = headers.iter().map(String::len).collect::<Vec<_>>();
    for row in rows {
        assert!(row.len() == num_cols, "row width mismatch");
        for (width, value) in widths.iter_mut().zip(row) {
            *width = (*width).max(value.len());
        }
    }

    let render = |row: &[String]| {
        let mut line = String::from("  ");
        for (i, (value, &width)) in row.iter().zip(&widths).enumerate() {
            if i == 0 {
                line.push_str(&format!("{value:<width$}"));
            } else {
                line.push_str(&format!("  {value:>width$}"));
            }
        }
        line
    };

    println!("{}", render(headers));
    println!("  {}", "-".repeat(widths.iter().sum::<usize>() + 2 * (num_cols - 1)));
    for row in rows {
        println!("{}", render(row));
    }
}
