//! MSME (UMKM) dashboard data builder.
//!
//! Reads a per-kecamatan CSV, computes KPIs and a deficiency-based priority
//! ranking, and writes the JSON document the dashboard renders.
pub mod dss;
pub mod error;
pub mod insight;
pub mod kpi;
pub mod loader;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod priority;
pub mod types;
pub mod util;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{PipelineError, Result};
pub use pipeline::{build_document, run, RunSummary};
