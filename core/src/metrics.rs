use once_cell::sync::Lazy;
use prometheus::{IntCounter, Opts, Registry};

/// Tellere for analysekjøringer. Hver instans eier sitt eget register,
/// slik at tester kan opprette egne uten navnekollisjon.
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    analyses_total: IntCounter,
    thermocline_detected_total: IntCounter,
    no_thermocline_total: IntCounter,
    insufficient_data_total: IntCounter,
}

fn counter(registry: &Registry, name: &str, help: &str) -> IntCounter {
    let c = IntCounter::with_opts(Opts::new(name, help)).unwrap();
    registry.register(Box::new(c.clone())).unwrap();
    c
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();
        let analyses_total = counter(
            &registry,
            "abysseye_analyses_total",
            "Antall fullførte stasjonsanalyser",
        );
        let thermocline_detected_total = counter(
            &registry,
            "abysseye_thermocline_detected_total",
            "Analyser der et sprangsjikt ble påvist",
        );
        let no_thermocline_total = counter(
            &registry,
            "abysseye_no_thermocline_total",
            "Analyser uten påvist sprangsjikt",
        );
        let insufficient_data_total = counter(
            &registry,
            "abysseye_insufficient_data_total",
            "Avviste analyser med for få målinger",
        );
        Self {
            registry,
            analyses_total,
            thermocline_detected_total,
            no_thermocline_total,
            insufficient_data_total,
        }
    }

    /// Registeret for eksport (f.eks. en /metrics-endpoint i tjenestelaget).
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

pub fn analyses_total(m: &Metrics) -> &IntCounter {
    &m.analyses_total
}

pub fn thermocline_detected_total(m: &Metrics) -> &IntCounter {
    &m.thermocline_detected_total
}

pub fn no_thermocline_total(m: &Metrics) -> &IntCounter {
    &m.no_thermocline_total
}

pub fn insufficient_data_total(m: &Metrics) -> &IntCounter {
    &m.insufficient_data_total
}

/// Delt standardinstans for kallere uten eget register.
pub static DEFAULT_METRICS: Lazy<Metrics> = Lazy::new(Metrics::new);
