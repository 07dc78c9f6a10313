use crate::types::DepthSample;

// Interpolasjonskoeffisienter for total alkalinitet (TALK)
const A1: f64 = 2300.0; // 200–1000 m
const B1: f64 = -10.0;
const C1: f64 = 5.0;
const A2: f64 = 2250.0; // 1000 m og dypere
const B2: f64 = -8.0;
const C2: f64 = 4.0;

const TALK_MIN_DEPTH_M: f64 = 200.0;
const TALK_DEEP_DEPTH_M: f64 = 1000.0;

/// Estimert total alkalinitet (µmol/kg) fra dyp, temperatur og salinitet.
/// Gyldig først fra 200 m; grunnere vann og ikke-finite inndata gir `None`.
pub fn estimate_talk(depth: f64, temperature: f64, salinity: f64) -> Option<f64> {
    if !depth.is_finite() || !temperature.is_finite() || !salinity.is_finite() {
        return None;
    }
    if depth >= TALK_DEEP_DEPTH_M {
        Some(A2 + B2 * temperature + C2 * salinity)
    } else if depth >= TALK_MIN_DEPTH_M {
        Some(A1 + B1 * temperature + C1 * salinity)
    } else {
        None
    }
}

/// TALK per måling i en profil. Målinger uten salinitet gir `None`.
pub fn talk_series(samples: &[DepthSample]) -> Vec<Option<f64>> {
    samples
        .iter()
        .map(|s| match s.salinity {
            Some(sal) => estimate_talk(s.depth, s.temperature, sal),
            None => None,
        })
        .collect()
}
