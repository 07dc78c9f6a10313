use crate::statistics::compute_statistics;
use crate::thermocline::detect_thermocline;
use crate::types::{AnalysisConfig, DepthSample};

/// Enkel tekstrapport for én stasjon, mest til feilsøking og demoer.
pub fn print_station_report(samples: &[DepthSample], cfg: &AnalysisConfig) {
    println!("--- Station Report ---");
    println!("Målinger: {}", samples.len());

    match compute_statistics(samples) {
        Some(stats) => {
            println!(
                "Temperatur: {:.2}–{:.2} °C (snitt {:.2}, std {:.2})",
                stats.temperature.min,
                stats.temperature.max,
                stats.temperature.mean,
                stats.temperature.std
            );
            if let Some(sal) = stats.salinity {
                println!(
                    "Salinitet: {:.3}–{:.3} PSU (snitt {:.3})",
                    sal.min, sal.max, sal.mean
                );
            }
            if let Some(den) = stats.density {
                println!(
                    "Tetthet: {:.2}–{:.2} kg/m³ (snitt {:.2})",
                    den.min, den.max, den.mean
                );
            }
        }
        None => println!("Ingen målinger – hopper over statistikk"),
    }

    match detect_thermocline(samples, cfg) {
        Some(t) => println!(
            "Sprangsjikt: {:.1}–{:.1} m (senter {:.1} m, maks gradient {:.3} °C/m)",
            t.top_depth, t.bottom_depth, t.center_depth, t.max_gradient
        ),
        None => println!("Ingen sprangsjikt påvist"),
    }
}
