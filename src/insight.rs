use crate::types::{Insight, PriorityRegion, Record};
use crate::util::display_float;

/// Build the insight block from the rank-`A` region and the most stable record.
///
/// Always four sentences in the same order; only the figures change.
pub fn generate_insight(top: &PriorityRegion, most_stable: &Record) -> Insight {
    let wilayah_prioritas = format!("{}, {}", top.kecamatan, top.kab_kota);

    let narasi = vec![
        format!(
            "Wilayah prioritas utama adalah {} dengan skor prioritas {}.",
            wilayah_prioritas,
            display_float(top.skor_prioritas)
        ),
        format!(
            "Formalisasi UMKM di wilayah prioritas masih rendah ({}%).",
            display_float(top.persen_umkm_formal)
        ),
        format!(
            "Digitalisasi UMKM perlu ditingkatkan di wilayah prioritas ({}%).",
            display_float(top.persen_umkm_digital)
        ),
        format!(
            "Akses pembiayaan UMKM masih terbatas di wilayah prioritas ({}%).",
            display_float(top.persen_akses_pembiayaan)
        ),
    ];

    Insight {
        wilayah_prioritas_utama: wilayah_prioritas,
        wilayah_paling_stabil: most_stable.region_name(),
        narasi,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::record;

    fn top_region() -> PriorityRegion {
        PriorityRegion {
            label: "A".to_string(),
            kecamatan: "Cikalong".to_string(),
            kab_kota: "Kab. Tasikmalaya".to_string(),
            umkm_per_1000_penduduk: 41.2,
            persen_umkm_formal: 12.0,
            persen_umkm_digital: 8.35,
            persen_akses_pembiayaan: 6.5,
            indeks_biaya_logistik: 7.9,
            anggaran_miliar: 2.1,
            skor_prioritas: 72.4,
        }
    }

    #[test]
    fn narrative_is_four_sentences_in_order() {
        let stable = record("Coblong", "Kota Bandung", 80.0, 85.0, 70.0, 1.0, 2.0);
        let insight = generate_insight(&top_region(), &stable);

        assert_eq!(insight.wilayah_prioritas_utama, "Cikalong, Kab. Tasikmalaya");
        assert_eq!(insight.wilayah_paling_stabil, "Coblong, Kota Bandung");
        assert_eq!(
            insight.narasi,
            vec![
                "Wilayah prioritas utama adalah Cikalong, Kab. Tasikmalaya dengan skor prioritas 72.4.",
                "Formalisasi UMKM di wilayah prioritas masih rendah (12.0%).",
                "Digitalisasi UMKM perlu ditingkatkan di wilayah prioritas (8.35%).",
                "Akses pembiayaan UMKM masih terbatas di wilayah prioritas (6.5%).",
            ]
        );
    }
}
