use crate::dss::composite_scores;
use crate::error::Result;
use crate::pipeline::RunSummary;
use crate::types::DssAlternative;
use crate::util::{display_float, format_int};
use serde::Serialize;
use std::path::Path;
use tabled::{settings::Style, Table, Tabled};

/// Serialize `value` into one buffer, then write it in a single call.
///
/// Parent directories are created as needed. The file is overwritten.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, s)?;
    Ok(())
}

/// Lines printed to stdout after a successful run.
pub fn summary_lines(output: &Path, summary: &RunSummary) -> Vec<String> {
    let doc = &summary.document;
    let top = &doc.prioritas[0];
    vec![
        format!("Generated {}", output.display()),
        format!("  - Total UMKM: {}", format_int(doc.kpi.total_umkm)),
        format!("  - Top prioritas: {}", top.kecamatan),
        format!("  - Skor prioritas: {}", display_float(top.skor_prioritas)),
        format!(
            "  - Substitusi nilai default: {}",
            format_int(summary.normalize.total_defaults())
        ),
    ]
}

pub fn print_summary(output: &Path, summary: &RunSummary) {
    for line in summary_lines(output, summary) {
        println!("{}", line);
    }
}

/// Markdown preview of the priority regions and the DSS catalog.
pub fn print_preview(summary: &RunSummary) {
    println!("\nWilayah Prioritas\n");
    preview_table_rows(&summary.document.prioritas, summary.document.prioritas.len());
    println!("Alternatif DSS (skor multikriteria)\n");
    print_catalog_scores(&summary.document.alternatif_dss);
}

fn print_catalog_scores(catalog: &[DssAlternative]) {
    let scores = composite_scores(catalog);
    preview_table_rows(&scores, scores.len());
}

pub fn preview_table_rows<T>(rows: &[T], max_rows: usize)
where
    T: Tabled + Clone,
{
    let slice: Vec<T> = rows.iter().cloned().take(max_rows).collect();
    if slice.is_empty() {
        println!("(no rows)\n");
        return;
    }
    let table_str = Table::new(slice).with(Style::markdown()).to_string();
    println!("{}\n", table_str);
}
