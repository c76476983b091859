use crate::error::{PipelineError, Result};
use crate::types::{PriorityRegion, Record};
use crate::util::round2;
use std::cmp::Ordering;
use tracing::info;

// Deficiency weights. The first three apply to the shortfall from 100%.
pub const WEIGHT_FORMAL: f64 = 0.30;
pub const WEIGHT_DIGITAL: f64 = 0.25;
pub const WEIGHT_FINANCING: f64 = 0.20;
pub const WEIGHT_LOGISTICS: f64 = 0.15;
pub const WEIGHT_POVERTY: f64 = 0.10;

pub const PRIORITY_LABELS: [&str; 4] = ["A", "B", "C", "D"];
pub const TOP_K: usize = PRIORITY_LABELS.len();

/// How much intervention a region needs; higher means more need.
pub fn deficiency_score(r: &Record) -> f64 {
    WEIGHT_FORMAL * (100.0 - r.persen_umkm_formal)
        + WEIGHT_DIGITAL * (100.0 - r.persen_umkm_digital)
        + WEIGHT_FINANCING * (100.0 - r.persen_umkm_akses_pembiayaan)
        + WEIGHT_LOGISTICS * r.indeks_biaya_logistik
        + WEIGHT_POVERTY * r.tingkat_kemiskinan_persen
}

#[derive(Debug, Clone)]
pub struct Ranking<'a> {
    /// Exactly [`TOP_K`] regions, highest score first.
    pub priorities: Vec<PriorityRegion>,
    /// First record (in file order) with the lowest score.
    pub most_stable: &'a Record,
}

/// Score every record and pick the priority regions and the most stable one.
///
/// Ties keep file order, both in the ranking and in the minimum scan.
pub fn rank(records: &[Record]) -> Result<Ranking<'_>> {
    if records.len() < TOP_K {
        return Err(PipelineError::InsufficientRows {
            found: records.len(),
            required: TOP_K,
        });
    }

    let scores: Vec<f64> = records.iter().map(deficiency_score).collect();

    let mut order: Vec<usize> = (0..records.len()).collect();
    // `sort_by` is stable, so equal scores stay in file order.
    order.sort_by(|&a, &b| scores[b].partial_cmp(&scores[a]).unwrap_or(Ordering::Equal));

    let priorities: Vec<PriorityRegion> = order
        .iter()
        .take(TOP_K)
        .zip(PRIORITY_LABELS)
        .map(|(&idx, label)| to_priority_region(label, &records[idx], scores[idx]))
        .collect();

    let mut stable_idx = 0;
    for (idx, score) in scores.iter().enumerate().skip(1) {
        if *score < scores[stable_idx] {
            stable_idx = idx;
        }
    }
    let most_stable = &records[stable_idx];

    info!(
        top = %priorities[0].kecamatan,
        top_score = priorities[0].skor_prioritas,
        most_stable = %most_stable.kecamatan,
        "ranked regions"
    );

    Ok(Ranking {
        priorities,
        most_stable,
    })
}

fn to_priority_region(label: &str, r: &Record, score: f64) -> PriorityRegion {
    PriorityRegion {
        label: label.to_string(),
        kecamatan: r.kecamatan.clone(),
        kab_kota: r.kab_kota.clone(),
        umkm_per_1000_penduduk: round2(r.umkm_per_1000_penduduk),
        persen_umkm_formal: round2(r.persen_umkm_formal),
        persen_umkm_digital: round2(r.persen_umkm_digital),
        persen_akses_pembiayaan: round2(r.persen_umkm_akses_pembiayaan),
        indeks_biaya_logistik: round2(r.indeks_biaya_logistik),
        anggaran_miliar: round2(r.anggaran_pemberdayaan_umkm_miliar),
        skor_prioritas: round2(score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::record;

    #[test]
    fn weights_sum_to_one() {
        let total =
            WEIGHT_FORMAL + WEIGHT_DIGITAL + WEIGHT_FINANCING + WEIGHT_LOGISTICS + WEIGHT_POVERTY;
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn score_matches_formula() {
        let r = record("A", "X", 10.0, 5.0, 5.0, 8.0, 20.0);
        // 0.30*90 + 0.25*95 + 0.20*95 + 0.15*8 + 0.10*20
        let expected = 27.0 + 23.75 + 19.0 + 1.2 + 2.0;
        assert!((deficiency_score(&r) - expected).abs() < 1e-9);
    }

    #[test]
    fn neediest_row_is_labelled_a() {
        let records = vec![
            record("K1", "Kab1", 60.0, 50.0, 40.0, 3.0, 5.0),
            record("K2", "Kab2", 55.0, 45.0, 35.0, 4.0, 6.0),
            record("K3", "Kab3", 10.0, 5.0, 5.0, 8.0, 20.0),
            record("K4", "Kab4", 70.0, 65.0, 50.0, 2.0, 4.0),
            record("K5", "Kab5", 40.0, 30.0, 25.0, 5.0, 9.0),
        ];
        let ranking = rank(&records).unwrap();

        assert_eq!(ranking.priorities.len(), 4);
        assert_eq!(ranking.priorities[0].label, "A");
        assert_eq!(ranking.priorities[0].kecamatan, "K3");
        let labels: Vec<&str> = ranking.priorities.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, ["A", "B", "C", "D"]);
        for pair in ranking.priorities.windows(2) {
            assert!(pair[0].skor_prioritas >= pair[1].skor_prioritas);
        }
        assert_eq!(ranking.most_stable.kecamatan, "K4");
    }

    #[test]
    fn ties_resolve_by_file_order() {
        let records = vec![
            record("Low1", "X", 90.0, 90.0, 90.0, 1.0, 1.0),
            record("Tie1", "X", 20.0, 20.0, 20.0, 5.0, 5.0),
            record("Low2", "X", 90.0, 90.0, 90.0, 1.0, 1.0),
            record("Tie2", "X", 20.0, 20.0, 20.0, 5.0, 5.0),
            record("Tie3", "X", 20.0, 20.0, 20.0, 5.0, 5.0),
        ];
        let ranking = rank(&records).unwrap();
        let names: Vec<&str> = ranking.priorities.iter().map(|p| p.kecamatan.as_str()).collect();
        assert_eq!(names, ["Tie1", "Tie2", "Tie3", "Low1"]);
        assert_eq!(ranking.most_stable.kecamatan, "Low1");
    }

    #[test]
    fn fewer_than_four_rows_is_rejected() {
        let records = vec![
            record("A", "X", 10.0, 10.0, 10.0, 1.0, 1.0),
            record("B", "X", 20.0, 20.0, 20.0, 1.0, 1.0),
            record("C", "X", 30.0, 30.0, 30.0, 1.0, 1.0),
        ];
        let err = rank(&records).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::InsufficientRows { found: 3, required: 4 }
        ));
    }

    #[test]
    fn projected_fields_are_rounded() {
        let mut r = record("A", "X", 10.126, 5.0, 5.0, 8.0, 20.0);
        r.anggaran_pemberdayaan_umkm_miliar = 3.14159;
        let records = vec![
            r,
            record("B", "X", 90.0, 90.0, 90.0, 1.0, 1.0),
            record("C", "X", 90.0, 90.0, 90.0, 1.0, 1.0),
            record("D", "X", 90.0, 90.0, 90.0, 1.0, 1.0),
        ];
        let ranking = rank(&records).unwrap();
        let top = &ranking.priorities[0];
        assert_eq!(top.persen_umkm_formal, 10.13);
        assert_eq!(top.anggaran_miliar, 3.14);
        assert_eq!(top.skor_prioritas, round2(deficiency_score(&records[0])));
    }
}
