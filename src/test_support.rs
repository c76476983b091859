use crate::types::Record;

/// Builds a record with the scoring inputs set and everything else zeroed.
pub(crate) fn record(
    kecamatan: &str,
    kab_kota: &str,
    formal: f64,
    digital: f64,
    akses: f64,
    logistik: f64,
    kemiskinan: f64,
) -> Record {
    Record {
        kecamatan: kecamatan.to_string(),
        kab_kota: kab_kota.to_string(),
        tahun: 2024,
        penduduk: 0.0,
        jumlah_umkm: 0.0,
        umkm_per_1000_penduduk: 0.0,
        persen_umkm_formal: formal,
        persen_umkm_digital: digital,
        persen_umkm_akses_pembiayaan: akses,
        rata2_omzet_bulanan_juta: 0.0,
        omzet_tahunan_miliar: 0.0,
        tenaga_kerja_umkm: 0.0,
        indeks_infrastruktur_internet: 0.0,
        indeks_biaya_logistik: logistik,
        jumlah_pelatihan_inkubasi: 0.0,
        anggaran_pemberdayaan_umkm_miliar: 0.0,
        indeks_kemudahan_berusaha: 0.0,
        tingkat_pengangguran_terbuka_persen: 0.0,
        tingkat_kemiskinan_persen: kemiskinan,
        kejadian_gangguan_distribusi_tahun: 0.0,
    }
}
