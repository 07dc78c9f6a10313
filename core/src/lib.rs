pub mod analyze_station;
pub mod analyzer;
pub mod clean;
pub mod cli;
pub mod error;
pub mod metrics;
pub mod statistics;
pub mod storage;
pub mod talk;
pub mod thermocline;
pub mod types;

#[cfg(feature = "python")]
mod py;

pub use analyze_station::{analyze_station, AnalyzeInputs};
pub use analyzer::{analyze_station_json, detect_thermocline_json};
pub use clean::{clean_profile, drop_incomplete, remove_outliers_by};
pub use cli::print_station_report;
pub use error::AnalysisError;
pub use metrics::Metrics;
pub use statistics::compute_statistics;
pub use storage::{load_config, save_config};
pub use talk::{estimate_talk, talk_series};
pub use thermocline::{
    detect_thermocline, gradient_points, sort_by_depth, RoundTo, GRADIENT_THRESHOLD,
    MIN_PROFILE_POINTS,
};
pub use types::{
    AnalysisConfig, DepthSample, GradientPoint, Layer, MeasureStats, StationAnalysis,
    StationMeta, StatisticsSummary, TemperatureStats, ThermoclineResult,
};
