use crate::domain::model::{Application, ApplicationList};
use crate::utils::error::{CliError, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

const HEADERS: [&str; 5] = ["ID", "Name", "Subscriber", "Tier", "Status"];

fn row(app: &Application) -> [&str; 5] {
    [
        app.id.as_str(),
        app.name.as_str(),
        app.subscriber.as_str(),
        app.tier.as_str(),
        app.status.as_str(),
    ]
}

pub fn render_applications(apps: &ApplicationList, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => {
            let rows: Vec<[&str; 5]> = apps.list.iter().map(row).collect();
            Ok(render_table(&HEADERS, &rows))
        }
        OutputFormat::Csv => render_csv(&apps.list),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(apps)?),
    }
}

/// Bordered table with an upper-cased header row; columns are padded to
/// their widest cell.
pub fn render_table<const N: usize>(headers: &[&str; N], rows: &[[&str; N]]) -> String {
    let headers: Vec<String> = headers.iter().map(|h| h.to_uppercase()).collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = widths
        .iter()
        .map(|w| "-".repeat(w + 2))
        .collect::<Vec<_>>()
        .join("+");
    let border = format!("+{}+", border);

    let header_cells: Vec<&str> = headers.iter().map(String::as_str).collect();

    let mut lines = vec![border.clone()];
    lines.push(format_line(&header_cells, &widths));
    lines.push(border.clone());
    for row in rows {
        lines.push(format_line(row, &widths));
    }
    if !rows.is_empty() {
        lines.push(border);
    }

    lines.join("\n")
}

fn format_line(cells: &[&str], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| {
            let pad = width - cell.chars().count();
            format!(" {}{} ", cell, " ".repeat(pad))
        })
        .collect();
    format!("|{}|", padded.join("|"))
}

fn render_csv(apps: &[Application]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADERS)?;
    for app in apps {
        writer.write_record(row(app))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| CliError::IoError(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
