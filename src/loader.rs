use crate::error::{PipelineError, Result};
use crate::types::{RawRow, Record};
use crate::util::{parse_f64_lenient, parse_i32_lenient};
use csv::ReaderBuilder;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// Columns coerced to `f64`. A cell that is missing or not numeric becomes
/// [`NUMERIC_DEFAULT`].
pub const NUMERIC_FIELDS: [&str; 17] = [
    "penduduk",
    "jumlah_umkm",
    "umkm_per_1000_penduduk",
    "persen_umkm_formal",
    "persen_umkm_digital",
    "persen_umkm_akses_pembiayaan",
    "rata2_omzet_bulanan_juta",
    "omzet_tahunan_miliar",
    "tenaga_kerja_umkm",
    "indeks_infrastruktur_internet",
    "indeks_biaya_logistik",
    "jumlah_pelatihan_inkubasi",
    "anggaran_pemberdayaan_umkm_miliar",
    "indeks_kemudahan_berusaha",
    "tingkat_pengangguran_terbuka_persen",
    "tingkat_kemiskinan_persen",
    "kejadian_gangguan_distribusi_tahun",
];

/// Free-text columns that must exist in the header.
pub const REQUIRED_TEXT_COLUMNS: [&str; 2] = ["kecamatan", "kab_kota"];

pub const NUMERIC_DEFAULT: f64 = 0.0;
pub const YEAR_FIELD: &str = "tahun";
pub const FALLBACK_YEAR: i32 = 2025;

/// Counts of default substitutions made while normalizing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizeReport {
    pub rows: usize,
    pub substitutions: usize,
    pub year_fallbacks: usize,
    pub per_field: BTreeMap<&'static str, usize>,
}

impl NormalizeReport {
    pub fn total_defaults(&self) -> usize {
        self.substitutions + self.year_fallbacks
    }

    fn record(&mut self, field: &'static str) {
        self.substitutions += 1;
        *self.per_field.entry(field).or_insert(0) += 1;
    }
}

/// Read every data row of a CSV file, preserving file order.
///
/// A missing file or a file without data rows is fatal.
pub fn load_rows(path: &Path) -> Result<Vec<RawRow>> {
    if !path.is_file() {
        return Err(PipelineError::InputNotFound(path.to_path_buf()));
    }
    let file = std::fs::File::open(path)?;
    let rows = load_rows_from_reader(file)?;
    if rows.is_empty() {
        return Err(PipelineError::EmptyInput(path.to_path_buf()));
    }
    info!(path = %path.display(), rows = rows.len(), "loaded input rows");
    Ok(rows)
}

/// Read rows from any reader. Returns an empty vector for header-only input;
/// the header check only applies once there is data to check against.
pub fn load_rows_from_reader<R: Read>(reader: R) -> Result<Vec<RawRow>> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);
    let mut rows = Vec::new();
    for result in rdr.deserialize::<RawRow>() {
        rows.push(result?);
    }
    if rows.is_empty() {
        return Ok(rows);
    }
    let headers = rdr.headers()?;
    for column in REQUIRED_TEXT_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(PipelineError::MissingColumn(column));
        }
    }
    Ok(rows)
}

/// Coerce every row into a typed [`Record`].
///
/// Bad numeric cells fall back to `0.0` and a bad year to [`FALLBACK_YEAR`];
/// neither aborts the run, but each substitution is counted.
pub fn normalize(rows: &[RawRow]) -> (Vec<Record>, NormalizeReport) {
    let mut report = NormalizeReport {
        rows: rows.len(),
        ..NormalizeReport::default()
    };
    let records = rows
        .iter()
        .enumerate()
        .map(|(idx, raw)| normalize_row(idx, raw, &mut report))
        .collect();

    if report.total_defaults() > 0 {
        warn!(
            substitutions = report.substitutions,
            year_fallbacks = report.year_fallbacks,
            "default values substituted for unparseable cells"
        );
    }
    (records, report)
}

fn normalize_row(idx: usize, raw: &RawRow, report: &mut NormalizeReport) -> Record {
    let mut num = |field: &'static str| -> f64 {
        match parse_f64_lenient(raw.get(field).map(String::as_str)) {
            Some(v) => v,
            None => {
                debug!(row = idx + 1, field, value = ?raw.get(field), "numeric default applied");
                report.record(field);
                NUMERIC_DEFAULT
            }
        }
    };

    let penduduk = num(NUMERIC_FIELDS[0]);
    let jumlah_umkm = num(NUMERIC_FIELDS[1]);
    let umkm_per_1000_penduduk = num(NUMERIC_FIELDS[2]);
    let persen_umkm_formal = num(NUMERIC_FIELDS[3]);
    let persen_umkm_digital = num(NUMERIC_FIELDS[4]);
    let persen_umkm_akses_pembiayaan = num(NUMERIC_FIELDS[5]);
    let rata2_omzet_bulanan_juta = num(NUMERIC_FIELDS[6]);
    let omzet_tahunan_miliar = num(NUMERIC_FIELDS[7]);
    let tenaga_kerja_umkm = num(NUMERIC_FIELDS[8]);
    let indeks_infrastruktur_internet = num(NUMERIC_FIELDS[9]);
    let indeks_biaya_logistik = num(NUMERIC_FIELDS[10]);
    let jumlah_pelatihan_inkubasi = num(NUMERIC_FIELDS[11]);
    let anggaran_pemberdayaan_umkm_miliar = num(NUMERIC_FIELDS[12]);
    let indeks_kemudahan_berusaha = num(NUMERIC_FIELDS[13]);
    let tingkat_pengangguran_terbuka_persen = num(NUMERIC_FIELDS[14]);
    let tingkat_kemiskinan_persen = num(NUMERIC_FIELDS[15]);
    let kejadian_gangguan_distribusi_tahun = num(NUMERIC_FIELDS[16]);

    let tahun = match parse_i32_lenient(raw.get(YEAR_FIELD).map(String::as_str)) {
        Some(y) => y,
        None => {
            debug!(row = idx + 1, value = ?raw.get(YEAR_FIELD), "year fallback applied");
            report.year_fallbacks += 1;
            FALLBACK_YEAR
        }
    };

    Record {
        kecamatan: raw.get("kecamatan").cloned().unwrap_or_default(),
        kab_kota: raw.get("kab_kota").cloned().unwrap_or_default(),
        tahun,
        penduduk,
        jumlah_umkm,
        umkm_per_1000_penduduk,
        persen_umkm_formal,
        persen_umkm_digital,
        persen_umkm_akses_pembiayaan,
        rata2_omzet_bulanan_juta,
        omzet_tahunan_miliar,
        tenaga_kerja_umkm,
        indeks_infrastruktur_internet,
        indeks_biaya_logistik,
        jumlah_pelatihan_inkubasi,
        anggaran_pemberdayaan_umkm_miliar,
        indeks_kemudahan_berusaha,
        tingkat_pengangguran_terbuka_persen,
        tingkat_kemiskinan_persen,
        kejadian_gangguan_distribusi_tahun,
    }
}

/// Load and normalize in one step.
pub fn load_and_normalize(path: &Path) -> Result<(Vec<Record>, NormalizeReport)> {
    let rows = load_rows(path)?;
    Ok(normalize(&rows))
}
