//! Fixed-width text tables for terminal output
//!
//! Column widths use display width, not byte length — schedule exports mix
//! ASCII and Thai and `len()` would misalign everything.

use unicode_width::UnicodeWidthStr;

/// Render headers and rows as an aligned text table
pub fn render(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.width());
            }
        }
    }

    let mut out = String::new();
    out.push_str(&render_row(headers, &widths));
    out.push('\n');
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&render_row(&rule, &widths));
    for row in rows {
        out.push('\n');
        out.push_str(&render_row(row, &widths));
    }
    out
}

fn render_row(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let padding = width.saturating_sub(cell.width());
            format!("{}{}", cell, " ".repeat(padding))
        })
        .collect();
    padded.join("  ").trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_columns_align() {
        let out = render(
            &strings(&["Shift", "Total"]),
            &[strings(&["AM", "3"]), strings(&["Unknown", "12"])],
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Shift    Total");
        assert_eq!(lines[1], "-------  -----");
        assert_eq!(lines[2], "AM       3");
        assert_eq!(lines[3], "Unknown  12");
    }

    #[test]
    fn test_wide_characters_use_display_width() {
        // Thai combining marks have zero width; the column must still line up
        let out = render(
            &strings(&["Text", "N"]),
            &[strings(&["เวลา", "1"]), strings(&["abcdef", "2"])],
        );
        for line in out.lines().skip(1) {
            assert!(line.ends_with('1') || line.ends_with('2') || line.ends_with('-'));
        }
    }
}
