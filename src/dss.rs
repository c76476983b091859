//! Decision-support catalog and the recommended decision.
//!
//! The catalog is authored content: its scores are not derived from the
//! dataset, and editing an entry changes the document but not the pipeline.

use crate::types::{Decision, DssAlternative, PriorityRegion};
use crate::util::round2;
use once_cell::sync::Lazy;
use std::cmp::Ordering;
use tabled::Tabled;

/// Number of priority regions named in the decision.
pub const FOCUS_REGIONS: usize = 2;

fn alternative(
    alternatif: &str,
    dampak: &str,
    biaya: &str,
    risiko: &str,
    skor_efektivitas: u32,
    skor_kelayakan_anggaran: u32,
    rasional: &str,
) -> DssAlternative {
    DssAlternative {
        alternatif: alternatif.to_string(),
        dampak: dampak.to_string(),
        biaya: biaya.to_string(),
        risiko: risiko.to_string(),
        skor_efektivitas,
        skor_kelayakan_anggaran,
        rasional: rasional.to_string(),
    }
}

pub static DSS_CATALOG: Lazy<Vec<DssAlternative>> = Lazy::new(|| {
    vec![
        alternative(
            "Program Pelatihan Digital UMKM",
            "Meningkatkan adopsi digital 15-20% dalam 1 tahun",
            "Rp 5-8 miliar per kecamatan",
            "Rendah - teknologi matang, SDM tersedia",
            85,
            70,
            "Teknologi matang dan SDM tersedia. Dampak signifikan terhadap digitalisasi UMKM di wilayah prioritas.",
        ),
        alternative(
            "Fasilitasi Formalisasi UMKM",
            "Meningkatkan formalisasi 10-15% dalam 1 tahun",
            "Rp 3-5 miliar per kecamatan",
            "Sedang - butuh koordinasi lintas instansi",
            75,
            85,
            "Biaya paling rendah dan memperkuat legalitas usaha sebagai dasar akses program lain.",
        ),
        alternative(
            "Program Akses Pembiayaan UMKM",
            "Meningkatkan akses pembiayaan 12-18% dalam 1 tahun",
            "Rp 10-15 miliar per kecamatan",
            "Sedang - memerlukan kemitraan dengan lembaga keuangan",
            80,
            60,
            "Membuka modal kerja bagi UMKM di wilayah dengan akses pembiayaan terendah.",
        ),
        alternative(
            "Optimasi Logistik UMKM",
            "Mengurangi biaya logistik 8-12% dalam 1 tahun",
            "Rp 7-10 miliar per kecamatan",
            "Tinggi - infrastruktur kompleks, memerlukan investasi jangka panjang",
            70,
            65,
            "Menekan biaya distribusi di wilayah dengan indeks logistik tinggi.",
        ),
    ]
});

/// Pick the most effective alternative and name the top focus regions.
///
/// Equal effectiveness keeps the earlier catalog entry. Returns `None` only
/// for an empty catalog.
pub fn select_decision(
    catalog: &[DssAlternative],
    priorities: &[PriorityRegion],
) -> Option<Decision> {
    let mut best = catalog.first()?;
    for alt in &catalog[1..] {
        if alt.skor_efektivitas > best.skor_efektivitas {
            best = alt;
        }
    }

    Some(Decision {
        pilihan_utama: best.alternatif.clone(),
        alasan: format!(
            "Skor efektivitas tertinggi ({}) dengan risiko {}. {}",
            best.skor_efektivitas,
            risk_level(&best.risiko).to_lowercase(),
            best.rasional
        ),
        wilayah_fokus: priorities
            .iter()
            .take(FOCUS_REGIONS)
            .map(|p| p.kecamatan.clone())
            .collect(),
    })
}

/// "Rendah - teknologi matang" -> "Rendah".
fn risk_level(risiko: &str) -> &str {
    risiko.split(" - ").next().unwrap_or(risiko).trim()
}

// Multi-criteria view used by the console preview. It reads the qualitative
// text bands and never feeds the JSON document.
const W_IMPACT: f64 = 0.35;
const W_COST: f64 = 0.25;
const W_RISK: f64 = 0.20;
const W_SPEED: f64 = 0.20;

#[derive(Debug, Clone, PartialEq, Tabled)]
pub struct CompositeScore {
    #[tabled(rename = "Alternatif")]
    pub alternatif: String,
    #[tabled(rename = "Dampak")]
    pub skor_dampak: u32,
    #[tabled(rename = "Biaya")]
    pub skor_biaya: u32,
    #[tabled(rename = "Risiko")]
    pub skor_risiko: u32,
    #[tabled(rename = "Kecepatan")]
    pub skor_kecepatan: u32,
    #[tabled(rename = "Total")]
    pub skor_total: f64,
}

fn impact_band(dampak: &str) -> u32 {
    match dampak {
        d if d.contains("15-20%") => 90,
        d if d.contains("12-18%") => 85,
        d if d.contains("10-15%") => 80,
        d if d.contains("8-12%") => 75,
        _ => 70,
    }
}

fn cost_band(biaya: &str) -> u32 {
    match biaya {
        b if b.contains("3-5") => 90,
        b if b.contains("5-8") => 85,
        b if b.contains("7-10") => 75,
        b if b.contains("10-15") => 70,
        _ => 60,
    }
}

fn risk_band(risiko: &str) -> u32 {
    let lower = risiko.to_lowercase();
    if lower.contains("rendah") {
        90
    } else if lower.contains("sedang") {
        75
    } else if lower.contains("tinggi") {
        60
    } else {
        70
    }
}

fn speed_band(dampak: &str) -> u32 {
    if dampak.contains("1 tahun") {
        85
    } else if dampak.contains("6 bulan") {
        90
    } else {
        80
    }
}

/// Score each alternative on impact, cost, risk and speed, highest total first.
pub fn composite_scores(catalog: &[DssAlternative]) -> Vec<CompositeScore> {
    let mut scored: Vec<CompositeScore> = catalog
        .iter()
        .map(|alt| {
            let skor_dampak = impact_band(&alt.dampak);
            let skor_biaya = cost_band(&alt.biaya);
            let skor_risiko = risk_band(&alt.risiko);
            let skor_kecepatan = speed_band(&alt.dampak);
            let total = skor_dampak as f64 * W_IMPACT
                + skor_biaya as f64 * W_COST
                + skor_risiko as f64 * W_RISK
                + skor_kecepatan as f64 * W_SPEED;
            CompositeScore {
                alternatif: alt.alternatif.clone(),
                skor_dampak,
                skor_biaya,
                skor_risiko,
                skor_kecepatan,
                skor_total: round2(total),
            }
        })
        .collect();
    scored.sort_by(|a, b| {
        b.skor_total
            .partial_cmp(&a.skor_total)
            .unwrap_or(Ordering::Equal)
    });
    scored
}
