use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::thermocline::GRADIENT_THRESHOLD;

/// Én CTD-måling på ett dyp. Profilen for en stasjon er en mengde slike;
/// dubletter på samme dyp er tillatt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthSample {
    pub depth: f64,            // meter (>= 0)
    pub temperature: f64,      // °C
    #[serde(default)]
    pub salinity: Option<f64>, // PSU
    #[serde(default)]
    pub density: Option<f64>,  // kg/m³
}

/// Temperaturgradient mellom to dybdenaboer, plassert på midtpunktet.
/// Avledes per analyse og lagres aldri.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientPoint {
    pub depth: f64,    // meter (midtpunkt av paret)
    pub gradient: f64, // |ΔT|/Δz i °C/m, alltid >= 0
    pub temp: f64,     // °C (snitt av paret)
}

/// Ett vannlag: navn pluss dybde- og temperaturintervall.
/// `[0.0, 0.0]` betyr "ingen målinger i laget", ikke en ekte avlesning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    pub name: String,
    pub depth_range: [f64; 2], // meter
    pub temp_range: [f64; 2],  // °C
}

/// Resultatet av sprangsjiktdeteksjonen. Dybder avrundet til 1 desimal,
/// maks gradient til 3. Alltid `top_depth <= center_depth <= bottom_depth`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThermoclineResult {
    pub top_depth: f64,    // meter
    pub bottom_depth: f64, // meter
    pub center_depth: f64, // meter (dypet til maks-gradient-punktet)
    pub max_gradient: f64, // °C/m
    /// Nøyaktig tre lag: Surface Layer, Thermocline, Deep Layer.
    pub layers: Vec<Layer>,
}

/// Min/maks/snitt for temperatur, pluss populasjonsstandardavvik.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std: f64,
}

/// Min/maks/snitt for en enkeltkanal (salinitet eller tetthet).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasureStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

/// Statistisk sammendrag av én profil. Salinitet/tetthet er `None` når
/// ingen måling i profilen bærer kanalen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSummary {
    pub temperature: TemperatureStats,
    pub salinity: Option<MeasureStats>,
    pub density: Option<MeasureStats>,
}

/// Metadata for casten, ekkoes uendret gjennom analysen.
/// Aliasene aksepterer både dashbordets camelCase og snake_case fra
/// eldre klienter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationMeta {
    #[serde(alias = "station_id", alias = "station")]
    pub station_id: String,
    #[serde(default, alias = "cast_time_utc", alias = "cast_time")]
    pub cast_time_utc: Option<DateTime<Utc>>,
}

/// Innstillinger for analysen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisConfig {
    /// Minste gradient (°C/m) som regnes som sprangsjikt.
    #[serde(default = "default_gradient_threshold")]
    pub gradient_threshold: f64,
}

fn default_gradient_threshold() -> f64 {
    GRADIENT_THRESHOLD
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            gradient_threshold: GRADIENT_THRESHOLD,
        }
    }
}

/// Komplett stasjonsanalyse slik forespørselslaget serverer den videre:
/// sprangsjikt (om funnet), statistikk og profilen sortert etter dyp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationAnalysis {
    pub station_id: String,
    #[serde(default)]
    pub cast_time_utc: Option<DateTime<Utc>>,
    pub point_count: usize,
    /// `None` betyr "ingen sprangsjikt påvist" – et gyldig utfall, ikke en feil.
    pub thermocline: Option<ThermoclineResult>,
    pub statistics: StatisticsSummary,
    pub profile: Vec<DepthSample>,
}
