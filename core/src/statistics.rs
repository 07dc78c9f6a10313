use crate::thermocline::RoundTo;
use crate::types::{DepthSample, MeasureStats, StatisticsSummary, TemperatureStats};

/// Min/maks/snitt over en valgfri kanal. `None` hvis ingen måling bærer den.
fn measure_stats<F>(samples: &[DepthSample], dp: u32, get: F) -> Option<MeasureStats>
where
    F: Fn(&DepthSample) -> Option<f64>,
{
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0f64;
    let mut cnt = 0usize;

    for s in samples {
        if let Some(v) = get(s) {
            if v < min { min = v; }
            if v > max { max = v; }
            sum += v;
            cnt += 1;
        }
    }

    if cnt == 0 {
        return None;
    }
    Some(MeasureStats {
        min: min.round_to(dp),
        max: max.round_to(dp),
        mean: (sum / cnt as f64).round_to(dp),
    })
}

/// Statistisk sammendrag av én profil: temperatur (min/maks/snitt/std),
/// salinitet og tetthet (min/maks/snitt). Standardavviket er
/// populasjonsvarianten (deler på N). Temperatur og tetthet avrundes til
/// 2 desimaler, salinitet til 3.
///
/// Tom profil gir `None` – kalleren validerer antall før analysen.
pub fn compute_statistics(samples: &[DepthSample]) -> Option<StatisticsSummary> {
    if samples.is_empty() {
        return None;
    }

    let n = samples.len() as f64;
    let mut t_min = f64::INFINITY;
    let mut t_max = f64::NEG_INFINITY;
    let mut t_sum = 0.0f64;
    for s in samples {
        let t = s.temperature;
        if t < t_min { t_min = t; }
        if t > t_max { t_max = t; }
        t_sum += t;
    }
    let mean = t_sum / n;

    let mut var_sum = 0.0f64;
    for s in samples {
        let d = s.temperature - mean;
        var_sum += d * d;
    }
    let std = (var_sum / n).sqrt();

    Some(StatisticsSummary {
        temperature: TemperatureStats {
            min: t_min.round_to(2),
            max: t_max.round_to(2),
            mean: mean.round_to(2),
            std: std.round_to(2),
        },
        salinity: measure_stats(samples, 3, |s| s.salinity),
        density: measure_stats(samples, 2, |s| s.density),
    })
}
