// core/src/thermocline.rs
use ordered_float::OrderedFloat;

use crate::types::{AnalysisConfig, DepthSample, GradientPoint, Layer, ThermoclineResult};

pub const GRADIENT_THRESHOLD: f64 = 0.02; // °C/m – minste gradient som regnes som sprangsjikt
pub const MIN_PROFILE_POINTS: usize = 3;  // gradientmetoden trenger minst to intervaller

// --- RoundTo trait (offentlig, brukt av statistics.rs og resultatbygging) ---
pub trait RoundTo {
    fn round_to(self, dp: u32) -> f64;
}

impl RoundTo for f64 {
    #[inline]
    fn round_to(self, dp: u32) -> f64 {
        if dp == 0 { return self.round(); }
        let factor = 10_f64.powi(dp as i32);
        (self * factor).round() / factor
    }
}

/// Sorter en profil etter dyp (stigende). Likt dyp beholder innbyrdes rekkefølge.
pub fn sort_by_depth(samples: &[DepthSample]) -> Vec<DepthSample> {
    let mut sorted = samples.to_vec();
    sorted.sort_by_key(|s| OrderedFloat(s.depth));
    sorted
}

/// Parvise gradienter mellom dybdenaboer i en sortert profil.
/// Par uten vertikal avstand hoppes over – de gir ingen gyldig gradient.
pub fn gradient_points(sorted: &[DepthSample]) -> Vec<GradientPoint> {
    let mut out = Vec::with_capacity(sorted.len().saturating_sub(1));
    for pair in sorted.windows(2) {
        let dz = pair[1].depth - pair[0].depth;
        if dz <= 0.0 {
            continue;
        }
        let dt = (pair[1].temperature - pair[0].temperature).abs();
        out.push(GradientPoint {
            depth: 0.5 * (pair[0].depth + pair[1].depth),
            gradient: dt / dz,
            temp: 0.5 * (pair[0].temperature + pair[1].temperature),
        });
    }
    out
}

fn layer_of(name: &str, pts: &[&DepthSample]) -> Layer {
    if pts.is_empty() {
        return Layer {
            name: name.to_string(),
            depth_range: [0.0, 0.0],
            temp_range: [0.0, 0.0],
        };
    }

    let mut d_min = f64::INFINITY;
    let mut d_max = f64::NEG_INFINITY;
    let mut t_min = f64::INFINITY;
    let mut t_max = f64::NEG_INFINITY;
    for p in pts {
        if p.depth < d_min { d_min = p.depth; }
        if p.depth > d_max { d_max = p.depth; }
        if p.temperature < t_min { t_min = p.temperature; }
        if p.temperature > t_max { t_max = p.temperature; }
    }

    Layer {
        name: name.to_string(),
        depth_range: [d_min.round_to(1), d_max.round_to(1)],
        temp_range: [t_min.round_to(1), t_max.round_to(1)],
    }
}

/// Sprangsjiktdeteksjon med gradientmetoden: finn maksimum av dT/dz,
/// utvid grådig til begge sider så lenge naboen også ligger over terskelen,
/// og del vannsøylen i tre lag rundt båndet.
///
/// `None` betyr "ingen sprangsjikt" – for få målinger, ingen gyldige
/// dybdeintervaller, eller en tilnærmet isoterm søyle under terskelen.
pub fn detect_thermocline(
    samples: &[DepthSample],
    cfg: &AnalysisConfig,
) -> Option<ThermoclineResult> {
    if samples.len() < MIN_PROFILE_POINTS {
        log::debug!(
            "sprangsjikt: for få målinger ({} < {})",
            samples.len(),
            MIN_PROFILE_POINTS
        );
        return None;
    }

    let sorted = sort_by_depth(samples);
    let gradients = gradient_points(&sorted);
    if gradients.is_empty() {
        log::debug!("sprangsjikt: ingen gyldige dybdeintervaller");
        return None;
    }

    // Maks gradient – første forekomst vinner ved likhet
    let mut max_idx = 0usize;
    for i in 1..gradients.len() {
        if gradients[i].gradient > gradients[max_idx].gradient {
            max_idx = i;
        }
    }

    let max_gradient = gradients[max_idx].gradient;
    if max_gradient < cfg.gradient_threshold {
        log::debug!(
            "sprangsjikt: maks gradient {:.4} under terskel {:.4}",
            max_gradient,
            cfg.gradient_threshold
        );
        return None;
    }

    // Grådig utvidelse fra makspunktet; første nabo under terskelen stopper
    // veksten på den siden
    let mut top_idx = max_idx;
    let mut bottom_idx = max_idx;
    while top_idx > 0 && gradients[top_idx - 1].gradient > cfg.gradient_threshold {
        top_idx -= 1;
    }
    while bottom_idx + 1 < gradients.len()
        && gradients[bottom_idx + 1].gradient > cfg.gradient_threshold
    {
        bottom_idx += 1;
    }

    let top_depth = gradients[top_idx].depth;
    let bottom_depth = gradients[bottom_idx].depth;
    let center_depth = gradients[max_idx].depth;

    // Del de opprinnelige målingene i tre disjunkte lag rundt båndet.
    // Avrunding skjer først i resultatfeltene, ikke her.
    let surface: Vec<&DepthSample> = sorted.iter().filter(|s| s.depth < top_depth).collect();
    let thermo: Vec<&DepthSample> = sorted
        .iter()
        .filter(|s| s.depth >= top_depth && s.depth <= bottom_depth)
        .collect();
    let deep: Vec<&DepthSample> = sorted.iter().filter(|s| s.depth > bottom_depth).collect();

    log::debug!(
        "sprangsjikt: bånd {:.1}–{:.1} m, senter {:.1} m, maks gradient {:.4} °C/m",
        top_depth,
        bottom_depth,
        center_depth,
        max_gradient
    );

    Some(ThermoclineResult {
        top_depth: top_depth.round_to(1),
        bottom_depth: bottom_depth.round_to(1),
        center_depth: center_depth.round_to(1),
        max_gradient: max_gradient.round_to(3),
        layers: vec![
            layer_of("Surface Layer", &surface),
            layer_of("Thermocline", &thermo),
            layer_of("Deep Layer", &deep),
        ],
    })
}
