use std::error::Error;
use std::fs;
use std::io::ErrorKind;

use crate::types::AnalysisConfig;

/// Leser analyseinnstillinger fra disk (JSON). En manglende fil er ikke
/// en feil: da gjelder standardinnstillingene. Andre IO-feil og ugyldig
/// JSON propageres til kalleren.
pub fn load_config(path: &str) -> Result<AnalysisConfig, Box<dyn Error>> {
    match fs::read_to_string(path) {
        Ok(contents) => {
            let cfg: AnalysisConfig = serde_json::from_str(&contents)?;
            log::info!(
                "innstillinger lastet fra {} (gradient_threshold={})",
                path,
                cfg.gradient_threshold
            );
            Ok(cfg)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::warn!("fant ikke innstillinger på {}, bruker standard", path);
            Ok(AnalysisConfig::default())
        }
        Err(e) => Err(e.into()),
    }
}

/// Lagrer analyseinnstillinger som pretty-printet JSON.
pub fn save_config(cfg: &AnalysisConfig, path: &str) -> Result<(), Box<dyn Error>> {
    fs::write(path, serde_json::to_string_pretty(cfg)?)?;
    log::info!(
        "innstillinger lagret til {} (gradient_threshold={})",
        path,
        cfg.gradient_threshold
    );
    Ok(())
}
