use crate::dss::{select_decision, DSS_CATALOG};
use crate::error::{PipelineError, Result};
use crate::insight::generate_insight;
use crate::kpi::compute_kpi;
use crate::loader::{load_and_normalize, NormalizeReport};
use crate::output::write_json;
use crate::priority::{rank, TOP_K};
use crate::types::{DashboardDocument, Meta, Record};
use std::path::Path;
use tracing::info;

pub const METHODOLOGY_NOTES: [&str; 3] = [
    "Skor prioritas menggunakan weighted score: 0.30*(100-formal) + 0.25*(100-digital) + 0.20*(100-akses) + 0.15*biaya_logistik + 0.10*kemiskinan",
    "KPI dihitung dari rata-rata atau total seluruh kecamatan",
    "Wilayah prioritas adalah 4 kecamatan dengan skor prioritas tertinggi",
];

/// What a finished run reports back to the caller.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub document: DashboardDocument,
    pub normalize: NormalizeReport,
}

/// Derive the full dashboard document from normalized records.
///
/// Needs at least four records; the document holds no references back
/// into `records`.
pub fn build_document(records: &[Record], source: &str) -> Result<DashboardDocument> {
    let first = records.first().ok_or(PipelineError::InsufficientRows {
        found: 0,
        required: TOP_K,
    })?;

    let kpi = compute_kpi(records);
    let ranking = rank(records)?;
    let insight = generate_insight(&ranking.priorities[0], ranking.most_stable);
    let keputusan =
        select_decision(&DSS_CATALOG, &ranking.priorities).ok_or(PipelineError::EmptyCatalog)?;

    let meta = Meta {
        sumber: source.to_string(),
        jumlah_baris: records.len(),
        tahun: first.tahun,
        catatan_metodologi: METHODOLOGY_NOTES.iter().map(|s| s.to_string()).collect(),
    };

    Ok(DashboardDocument {
        meta,
        kpi,
        prioritas: ranking.priorities,
        insight,
        alternatif_dss: DSS_CATALOG.to_vec(),
        keputusan,
    })
}

/// Load `input`, build the document and write it to `output`.
///
/// Every fatal check runs before `output` is touched.
pub fn run(input: &Path, output: &Path, source: &str) -> Result<RunSummary> {
    let (records, normalize) = load_and_normalize(input)?;
    let document = build_document(&records, source)?;
    write_json(output, &document)?;
    info!(path = %output.display(), "wrote dashboard document");
    Ok(RunSummary {
        document,
        normalize,
    })
}

/// `meta.sumber` defaults to the input's file name.
pub fn default_source_name(input: &Path) -> String {
    input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string())
}
