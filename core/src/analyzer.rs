use serde::Deserialize;
use serde_json as json;
use serde_path_to_error as spte;

use crate::analyze_station::{analyze_station, AnalyzeInputs};
use crate::metrics::DEFAULT_METRICS;
use crate::thermocline::detect_thermocline;
use crate::types::{AnalysisConfig, DepthSample, StationMeta};

// ──────────────────────────────────────────────────────────────────────────────
// Tolerante inndata-typer: aksepter både dashbordets feltnavn og
// kolonnenavnene fra rå CTD-eksport (Depthm / T_degC / Salnty)
// ──────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Clone)]
struct SampleInTol {
    #[serde(alias = "Depthm", alias = "depth_m")]
    depth: f64,
    #[serde(alias = "T_degC", alias = "temp")]
    temperature: f64,
    #[serde(default, alias = "Salnty")]
    salinity: Option<f64>,
    #[serde(default, alias = "Density", alias = "sigma_t")]
    density: Option<f64>,
}

fn to_core_sample(s: SampleInTol) -> DepthSample {
    DepthSample {
        depth: s.depth,
        temperature: s.temperature,
        salinity: s.salinity,
        density: s.density,
    }
}

fn parse_with_path<T: serde::de::DeserializeOwned>(what: &str, raw: &str) -> Result<T, String> {
    let mut de = json::Deserializer::from_str(raw);
    spte::deserialize(&mut de).map_err(|e| format!("{} parse at {}: {}", what, e.path(), e))
}

fn parse_cfg(cfg_json: Option<&str>) -> Result<AnalysisConfig, String> {
    match cfg_json {
        Some(raw) => parse_with_path("config", raw),
        None => Ok(AnalysisConfig::default()),
    }
}

/// JSON-grensesnittet mot forespørselslaget: målinger + metadata inn,
/// komplett stasjonsanalyse ut. Feilstrengen er ment for 4xx-svar.
pub fn analyze_station_json(
    samples_json: &str,
    meta_json: &str,
    cfg_json: Option<&str>,
) -> Result<String, String> {
    let samples_in: Vec<SampleInTol> = parse_with_path("samples", samples_json)?;
    let meta: StationMeta = parse_with_path("meta", meta_json)?;
    let cfg = parse_cfg(cfg_json)?;

    let samples: Vec<DepthSample> = samples_in.into_iter().map(to_core_sample).collect();

    let result = analyze_station(AnalyzeInputs {
        station_id: &meta.station_id,
        samples: &samples,
        cast_time_utc: meta.cast_time_utc,
        cfg: &cfg,
        metrics: Some(&DEFAULT_METRICS),
    })
    .map_err(|e| e.to_string())?;

    json::to_string(&result).map_err(|e| format!("serialize: {}", e))
}

/// Kun deteksjonssteget, for kallere som allerede har statistikken.
/// Returnerer `ThermoclineResult` eller JSON `null` når ingenting påvises.
pub fn detect_thermocline_json(
    samples_json: &str,
    cfg_json: Option<&str>,
) -> Result<String, String> {
    let samples_in: Vec<SampleInTol> = parse_with_path("samples", samples_json)?;
    let cfg = parse_cfg(cfg_json)?;

    let samples: Vec<DepthSample> = samples_in.into_iter().map(to_core_sample).collect();
    let result = detect_thermocline(&samples, &cfg);

    json::to_string(&result).map_err(|e| format!("serialize: {}", e))
}
