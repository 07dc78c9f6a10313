use ordered_float::OrderedFloat;

use crate::types::DepthSample;

/// Kvantil med lineær interpolasjon over en sortert, ikke-tom serie
/// (samme metode som pandas' standard).
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let pos = q * (n - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Fjern målinger uten gyldig dyp eller temperatur. Ikke-finite
/// salinitet/tetthet nulles til `None` i stedet for å kaste hele målingen.
pub fn drop_incomplete(samples: &[DepthSample]) -> Vec<DepthSample> {
    let mut out = Vec::with_capacity(samples.len());
    for s in samples {
        if !s.depth.is_finite() || s.depth < 0.0 || !s.temperature.is_finite() {
            continue;
        }
        let mut kept = *s;
        if let Some(v) = kept.salinity {
            if !v.is_finite() {
                kept.salinity = None;
            }
        }
        if let Some(v) = kept.density {
            if !v.is_finite() {
                kept.density = None;
            }
        }
        out.push(kept);
    }
    out
}

/// IQR-gjerde: behold målinger med kanalverdi i [Q1 - 1.5*IQR, Q3 + 1.5*IQR].
/// Målinger uten verdi i kanalen beholdes urørt.
pub fn remove_outliers_by<F>(samples: &[DepthSample], get: F) -> Vec<DepthSample>
where
    F: Fn(&DepthSample) -> Option<f64>,
{
    let mut values: Vec<f64> = samples.iter().filter_map(&get).collect();
    if values.is_empty() {
        return samples.to_vec();
    }
    values.sort_by_key(|v| OrderedFloat(*v));

    let q1 = quantile(&values, 0.25);
    let q3 = quantile(&values, 0.75);
    let iqr = q3 - q1;
    let lo = q1 - 1.5 * iqr;
    let hi = q3 + 1.5 * iqr;

    samples
        .iter()
        .filter(|s| match get(s) {
            Some(v) => v >= lo && v <= hi,
            None => true,
        })
        .copied()
        .collect()
}

/// Full vaskesekvens før analyse: dropp ufullstendige rader, deretter
/// IQR-filter på temperatur og salinitet.
pub fn clean_profile(samples: &[DepthSample]) -> Vec<DepthSample> {
    let complete = drop_incomplete(samples);
    let temp_ok = remove_outliers_by(&complete, |s| Some(s.temperature));
    let out = remove_outliers_by(&temp_ok, |s| s.salinity);
    log::info!("vask: {} -> {} målinger", samples.len(), out.len());
    out
}
