use serde::Serialize;
use std::collections::HashMap;
use tabled::Tabled;

/// One CSV data row exactly as read: column name to cell text.
pub type RawRow = HashMap<String, String>;

/// A row after numeric coercion. Every numeric column is present; cells that
/// failed to parse hold the documented default.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub kecamatan: String,
    pub kab_kota: String,
    pub tahun: i32,
    pub penduduk: f64,
    pub jumlah_umkm: f64,
    pub umkm_per_1000_penduduk: f64,
    pub persen_umkm_formal: f64,
    pub persen_umkm_digital: f64,
    pub persen_umkm_akses_pembiayaan: f64,
    pub rata2_omzet_bulanan_juta: f64,
    pub omzet_tahunan_miliar: f64,
    pub tenaga_kerja_umkm: f64,
    pub indeks_infrastruktur_internet: f64,
    pub indeks_biaya_logistik: f64,
    pub jumlah_pelatihan_inkubasi: f64,
    pub anggaran_pemberdayaan_umkm_miliar: f64,
    pub indeks_kemudahan_berusaha: f64,
    pub tingkat_pengangguran_terbuka_persen: f64,
    pub tingkat_kemiskinan_persen: f64,
    pub kejadian_gangguan_distribusi_tahun: f64,
}

impl Record {
    /// "kecamatan, kab_kota" as shown in the insight block.
    pub fn region_name(&self) -> String {
        format!("{}, {}", self.kecamatan, self.kab_kota)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub sumber: String,
    pub jumlah_baris: usize,
    pub tahun: i32,
    pub catatan_metodologi: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSummary {
    pub total_umkm: i64,
    pub rata_umkm_per_1000_penduduk: f64,
    pub rata_persen_umkm_formal: f64,
    pub rata_persen_umkm_digital: f64,
    pub rata_persen_akses_pembiayaan: f64,
    pub total_tenaga_kerja_umkm: i64,
    pub rata_omzet_bulanan_juta: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
#[serde(rename_all = "camelCase")]
pub struct PriorityRegion {
    #[tabled(rename = "Label")]
    pub label: String,
    #[tabled(rename = "Kecamatan")]
    pub kecamatan: String,
    #[tabled(rename = "Kab/Kota")]
    pub kab_kota: String,
    #[tabled(rename = "UMKM/1000")]
    pub umkm_per_1000_penduduk: f64,
    #[tabled(rename = "Formal %")]
    pub persen_umkm_formal: f64,
    #[tabled(rename = "Digital %")]
    pub persen_umkm_digital: f64,
    #[tabled(rename = "Pembiayaan %")]
    pub persen_akses_pembiayaan: f64,
    #[tabled(rename = "Logistik")]
    pub indeks_biaya_logistik: f64,
    #[tabled(rename = "Anggaran (M)")]
    pub anggaran_miliar: f64,
    #[tabled(rename = "Skor")]
    pub skor_prioritas: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub wilayah_prioritas_utama: String,
    pub wilayah_paling_stabil: String,
    pub narasi: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DssAlternative {
    pub alternatif: String,
    pub dampak: String,
    pub biaya: String,
    pub risiko: String,
    pub skor_efektivitas: u32,
    pub skor_kelayakan_anggaran: u32,
    /// Authored rationale appended to the decision justification.
    #[serde(skip)]
    pub rasional: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    pub pilihan_utama: String,
    pub alasan: String,
    pub wilayah_fokus: Vec<String>,
}

/// The single document handed to the dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardDocument {
    pub meta: Meta,
    pub kpi: KpiSummary,
    pub prioritas: Vec<PriorityRegion>,
    pub insight: Insight,
    pub alternatif_dss: Vec<DssAlternative>,
    pub keputusan: Decision,
}
