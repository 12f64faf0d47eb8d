//! Excel report export
//!
//! Writes the day's summary as a workbook with three sheets:
//! - Summary: metadata block plus the shift × category pivot
//! - Review: normalized texts the rule table could not place
//! - Cases: the sanitized working table (no person-identifying columns)

use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Color, Format, Workbook, Worksheet};

use crate::schedule::{Category, RecordBatch, Shift, sanitize};
use crate::services::summary::{DailySummary, top_unknowns};

/// Export a summary workbook
pub fn export_summary_workbook(
    summary: &DailySummary,
    batch: &RecordBatch,
    review_limit: usize,
    path: &Path,
) -> Result<()> {
    let mut workbook = Workbook::new();

    create_summary_sheet(&mut workbook, summary)?;
    create_review_sheet(&mut workbook, summary, review_limit)?;
    create_cases_sheet(&mut workbook, summary, batch)?;

    workbook
        .save(path)
        .with_context(|| format!("Failed to save Excel file: {}", path.display()))?;

    log::info!("Summary report exported to: {}", path.display());
    Ok(())
}

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0x4472C4))
        .set_font_color(Color::White)
}

fn create_summary_sheet(workbook: &mut Workbook, summary: &DailySummary) -> Result<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name("Summary")?;

    let title_format = Format::new().set_bold().set_font_size(16);
    let bold_format = Format::new().set_bold();
    let header_format = header_format();

    sheet.write_string_with_format(0, 0, "Daily case summary", &title_format)?;
    sheet.write_string(
        1,
        0,
        &format!(
            "Generated: {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        ),
    )?;

    let mut row = 3u32;
    sheet.write_string_with_format(row, 0, "Procedure column", &bold_format)?;
    sheet.write_string(row, 1, summary.meta.proc_column.as_deref().unwrap_or("-"))?;
    row += 1;
    sheet.write_string_with_format(row, 0, "Time column", &bold_format)?;
    sheet.write_string(row, 1, summary.meta.time_column.as_deref().unwrap_or("-"))?;
    row += 1;
    sheet.write_string_with_format(row, 0, "Cases", &bold_format)?;
    sheet.write_number(row, 1, summary.meta.cases_total as f64)?;
    row += 2;

    // Pivot grid: all categories, zero-filled, plus the Total column
    sheet.write_string_with_format(row, 0, "Shift", &header_format)?;
    for (i, category) in Category::ALL.iter().enumerate() {
        sheet.write_string_with_format(row, 1 + i as u16, category.label(), &header_format)?;
    }
    sheet.write_string_with_format(
        row,
        1 + Category::ALL.len() as u16,
        "Total",
        &header_format,
    )?;
    row += 1;

    for shift in Shift::ALL {
        sheet.write_string(row, 0, shift.label())?;
        for (i, category) in Category::ALL.iter().enumerate() {
            sheet.write_number(
                row,
                1 + i as u16,
                summary.pivot.count(shift, *category) as f64,
            )?;
        }
        sheet.write_number(
            row,
            1 + Category::ALL.len() as u16,
            summary.pivot.shift_total(shift) as f64,
        )?;
        row += 1;
    }

    // Column totals; the grand total must equal the case count
    sheet.write_string_with_format(row, 0, "Total", &bold_format)?;
    for (i, category) in Category::ALL.iter().enumerate() {
        sheet.write_number(
            row,
            1 + i as u16,
            summary.pivot.category_total(*category) as f64,
        )?;
    }
    sheet.write_number(
        row,
        1 + Category::ALL.len() as u16,
        summary.pivot.grand_total() as f64,
    )?;

    sheet.autofit();
    Ok(())
}

fn create_review_sheet(
    workbook: &mut Workbook,
    summary: &DailySummary,
    review_limit: usize,
) -> Result<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name("Review")?;

    let header_format = header_format();
    sheet.write_string_with_format(0, 0, "Normalized text", &header_format)?;
    sheet.write_string_with_format(0, 1, "Count", &header_format)?;

    let unknowns = top_unknowns(summary, review_limit);
    if unknowns.is_empty() {
        sheet.write_string(1, 0, "No unclassified procedures")?;
    } else {
        for (i, (text, count)) in unknowns.iter().enumerate() {
            let row = 1 + i as u32;
            sheet.write_string(row, 0, text)?;
            sheet.write_number(row, 1, *count as f64)?;
        }
    }

    sheet.autofit();
    Ok(())
}

fn create_cases_sheet(
    workbook: &mut Workbook,
    summary: &DailySummary,
    batch: &RecordBatch,
) -> Result<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name("Cases")?;

    let header_format = header_format();
    let safe_columns = sanitize::safe_column_indices(batch.headers());

    sheet.write_string_with_format(0, 0, "#", &header_format)?;
    sheet.write_string_with_format(0, 1, "Category", &header_format)?;
    sheet.write_string_with_format(0, 2, "Shift", &header_format)?;
    for (i, col) in safe_columns.iter().enumerate() {
        sheet.write_string_with_format(0, 3 + i as u16, &batch.headers()[*col], &header_format)?;
    }

    for case in &summary.work {
        let row = 1 + case.row as u32;
        sheet.write_number(row, 0, case.row as f64)?;
        sheet.write_string(row, 1, case.category.label())?;
        sheet.write_string(row, 2, case.shift.label())?;
        for (i, col) in safe_columns.iter().enumerate() {
            write_cell(sheet, row, 3 + i as u16, batch, case.row, *col)?;
        }
    }

    sheet.autofit();
    Ok(())
}

fn write_cell(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    batch: &RecordBatch,
    record_row: usize,
    record_col: usize,
) -> Result<()> {
    use crate::schedule::CellValue;
    match batch.value(record_row, record_col) {
        CellValue::Null => {}
        CellValue::Int(i) => {
            sheet.write_number(row, col, *i as f64)?;
        }
        CellValue::Float(f) => {
            sheet.write_number(row, col, *f)?;
        }
        value => {
            sheet.write_string(row, col, &value.to_text())?;
        }
    }
    Ok(())
}
