use crate::types::{KpiSummary, Record};
use crate::util::{mean, round2};

/// Reduce the whole record set to the dashboard KPIs.
///
/// Sums are truncated toward zero; means are unweighted over every record and
/// rounded to two decimals. The caller guarantees `records` is non-empty.
pub fn compute_kpi(records: &[Record]) -> KpiSummary {
    let total_umkm: f64 = records.iter().map(|r| r.jumlah_umkm).sum();
    let total_tenaga_kerja: f64 = records.iter().map(|r| r.tenaga_kerja_umkm).sum();

    KpiSummary {
        total_umkm: total_umkm as i64,
        rata_umkm_per_1000_penduduk: round2(mean(records.iter().map(|r| r.umkm_per_1000_penduduk))),
        rata_persen_umkm_formal: round2(mean(records.iter().map(|r| r.persen_umkm_formal))),
        rata_persen_umkm_digital: round2(mean(records.iter().map(|r| r.persen_umkm_digital))),
        rata_persen_akses_pembiayaan: round2(mean(
            records.iter().map(|r| r.persen_umkm_akses_pembiayaan),
        )),
        total_tenaga_kerja_umkm: total_tenaga_kerja as i64,
        rata_omzet_bulanan_juta: round2(mean(records.iter().map(|r| r.rata2_omzet_bulanan_juta))),
    }
}
