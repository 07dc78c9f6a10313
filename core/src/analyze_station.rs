use chrono::{DateTime, Utc};

use crate::error::AnalysisError;
use crate::metrics::{self, Metrics};
use crate::statistics::compute_statistics;
use crate::thermocline::{detect_thermocline, sort_by_depth, MIN_PROFILE_POINTS};
use crate::types::{AnalysisConfig, DepthSample, StationAnalysis};

/// Inndata for en stasjonsanalyse.
#[derive(Clone)]
pub struct AnalyzeInputs<'a> {
    pub station_id: &'a str,
    /// Målinger for stasjonen. Rekkefølge spiller ingen rolle – sorteres internt.
    pub samples: &'a [DepthSample],
    /// Tidspunkt for casten (fra datalaget), kun ekko til rapporten.
    pub cast_time_utc: Option<DateTime<Utc>>,
    pub cfg: &'a AnalysisConfig,
    /// Tellere (prod: delt instans, test: egen instans)
    pub metrics: Option<&'a Metrics>,
}

/// Full analyse av én stasjon: sprangsjikt + statistikk + profilekko.
///
/// Færre enn 3 målinger avvises med `InsufficientData` – det skilles fra
/// "ingen sprangsjikt", som er et gyldig utfall med `thermocline: None`.
pub fn analyze_station(inputs: AnalyzeInputs) -> Result<StationAnalysis, AnalysisError> {
    if inputs.samples.len() < MIN_PROFILE_POINTS {
        if let Some(m) = inputs.metrics {
            metrics::insufficient_data_total(m).inc();
        }
        return Err(AnalysisError::InsufficientData {
            got: inputs.samples.len(),
            min: MIN_PROFILE_POINTS,
        });
    }

    let sorted = sort_by_depth(inputs.samples);
    let thermocline = detect_thermocline(&sorted, inputs.cfg);

    // Tom profil er utelukket av antallsporten over
    let statistics = compute_statistics(&sorted).expect("profil med minst 3 målinger");

    if let Some(m) = inputs.metrics {
        metrics::analyses_total(m).inc();
        if thermocline.is_some() {
            metrics::thermocline_detected_total(m).inc();
        } else {
            metrics::no_thermocline_total(m).inc();
        }
    }

    match &thermocline {
        Some(t) => log::info!(
            "stasjon {}: sprangsjikt {:.1}–{:.1} m (senter {:.1} m)",
            inputs.station_id,
            t.top_depth,
            t.bottom_depth,
            t.center_depth
        ),
        None => log::info!("stasjon {}: ingen sprangsjikt påvist", inputs.station_id),
    }

    Ok(StationAnalysis {
        station_id: inputs.station_id.to_string(),
        cast_time_utc: inputs.cast_time_utc,
        point_count: sorted.len(),
        thermocline,
        statistics,
        profile: sorted,
    })
}
