use abysseye_core::thermocline::{detect_thermocline, gradient_points, sort_by_depth};
use abysseye_core::types::{AnalysisConfig, DepthSample};

fn sample(depth: f64, temperature: f64) -> DepthSample {
    DepthSample {
        depth,
        temperature,
        salinity: None,
        density: None,
    }
}

/// Typisk monotont avkjølende profil med bratt fall midt i søylen.
fn cooling_profile() -> Vec<DepthSample> {
    vec![
        sample(5.0, 26.0),
        sample(50.0, 25.8),
        sample(100.0, 22.0),
        sample(150.0, 14.0),
        sample(200.0, 8.0),
        sample(300.0, 6.5),
        sample(500.0, 4.0),
    ]
}

#[test]
fn too_few_samples_gives_none() {
    let cfg = AnalysisConfig::default();
    assert!(detect_thermocline(&[], &cfg).is_none());
    assert!(detect_thermocline(&[sample(0.0, 20.0)], &cfg).is_none());
    assert!(detect_thermocline(&[sample(0.0, 20.0), sample(100.0, 5.0)], &cfg).is_none());
}

#[test]
fn three_samples_with_sharp_jump_detects() {
    // ΔT=5 over Δz=10 => 0.5 °C/m, godt over terskelen
    let samples = vec![sample(0.0, 20.0), sample(10.0, 15.0), sample(20.0, 15.0)];
    let cfg = AnalysisConfig::default();

    let result = detect_thermocline(&samples, &cfg).expect("skulle påvist sprangsjikt");
    // Senteret er midtpunktet av intervallet med størst gradient
    assert!((result.center_depth - 5.0).abs() < 1e-9);
    assert!((result.max_gradient - 0.5).abs() < 1e-9);
}

#[test]
fn uniform_temperature_gives_none() {
    let samples: Vec<DepthSample> = (0..10).map(|i| sample(i as f64 * 25.0, 12.5)).collect();
    let cfg = AnalysisConfig::default();
    assert!(detect_thermocline(&samples, &cfg).is_none());
}

#[test]
fn duplicate_depths_are_skipped_without_panicking() {
    // To målinger på samme dyp med ulik temperatur skal ikke gi delt-på-null
    let samples = vec![
        sample(10.0, 20.0),
        sample(10.0, 18.0),
        sample(30.0, 12.0),
        sample(50.0, 11.8),
    ];
    let cfg = AnalysisConfig::default();

    let gradients = gradient_points(&sort_by_depth(&samples));
    assert_eq!(gradients.len(), 2, "null-avstand-paret skal hoppes over");

    let result = detect_thermocline(&samples, &cfg);
    assert!(result.is_some());
}

#[test]
fn all_duplicate_depths_gives_none() {
    let samples = vec![sample(10.0, 20.0), sample(10.0, 18.0), sample(10.0, 17.0)];
    let cfg = AnalysisConfig::default();
    assert!(detect_thermocline(&samples, &cfg).is_none());
}

#[test]
fn cooling_profile_band_and_layers() {
    let cfg = AnalysisConfig::default();
    let result = detect_thermocline(&cooling_profile(), &cfg).expect("skulle påvist sprangsjikt");

    // Størst gradient mellom 100 og 150 m: ΔT=8, Δz=50 => 0.16 °C/m
    assert!((result.max_gradient - 0.16).abs() < 1e-9);
    assert!((result.center_depth - 125.0).abs() < 1e-9);

    // Utvidelsen tar med naboene 50–100 (0.076) og 150–200 (0.12),
    // men stopper på 5–50 (0.004) og 200–300 (0.015)
    assert!((result.top_depth - 75.0).abs() < 1e-9);
    assert!((result.bottom_depth - 175.0).abs() < 1e-9);

    assert_eq!(result.layers.len(), 3);
    let surface = &result.layers[0];
    let thermo = &result.layers[1];
    let deep = &result.layers[2];

    assert_eq!(surface.name, "Surface Layer");
    assert_eq!(thermo.name, "Thermocline");
    assert_eq!(deep.name, "Deep Layer");

    assert_eq!(surface.depth_range, [5.0, 50.0]);
    assert_eq!(surface.temp_range, [25.8, 26.0]);
    assert_eq!(thermo.depth_range, [100.0, 150.0]);
    assert_eq!(thermo.temp_range, [14.0, 22.0]);
    assert_eq!(deep.depth_range, [200.0, 500.0]);
    assert_eq!(deep.temp_range, [4.0, 8.0]);
}

#[test]
fn layer_partition_covers_every_sample_exactly_once() {
    let samples = cooling_profile();
    let cfg = AnalysisConfig::default();
    let result = detect_thermocline(&samples, &cfg).unwrap();

    let surface = samples.iter().filter(|s| s.depth < result.top_depth).count();
    let thermo = samples
        .iter()
        .filter(|s| s.depth >= result.top_depth && s.depth <= result.bottom_depth)
        .count();
    let deep = samples.iter().filter(|s| s.depth > result.bottom_depth).count();

    assert_eq!(surface + thermo + deep, samples.len());
    assert_eq!(surface, 2);
    assert_eq!(thermo, 2);
    assert_eq!(deep, 3);
}

#[test]
fn detection_is_idempotent_and_order_independent() {
    let sorted = cooling_profile();
    // Stokket variant av samme profil
    let shuffled = vec![
        sorted[4], sorted[0], sorted[6], sorted[2], sorted[5], sorted[1], sorted[3],
    ];
    let cfg = AnalysisConfig::default();

    let a = detect_thermocline(&sorted, &cfg);
    let b = detect_thermocline(&sorted, &cfg);
    let c = detect_thermocline(&shuffled, &cfg);

    assert_eq!(a, b, "to kall på samme inndata skal gi identisk resultat");
    assert_eq!(a, c, "rekkefølgen på inndata skal ikke spille noen rolle");
}

#[test]
fn rounding_contract_on_result_fields() {
    // Skjeve dybder og temperaturer gir urunde mellomverdier
    let samples = vec![
        sample(3.33, 25.91),
        sample(47.77, 25.63),
        sample(101.13, 21.07),
        sample(149.99, 13.58),
        sample(203.4, 8.12),
        sample(502.8, 4.05),
    ];
    let cfg = AnalysisConfig::default();
    let result = detect_thermocline(&samples, &cfg).unwrap();

    let one_dp = |v: f64| ((v * 10.0).round() / 10.0 - v).abs() < 1e-9;
    let three_dp = |v: f64| ((v * 1000.0).round() / 1000.0 - v).abs() < 1e-9;

    assert!(one_dp(result.top_depth));
    assert!(one_dp(result.bottom_depth));
    assert!(one_dp(result.center_depth));
    assert!(three_dp(result.max_gradient));
    for layer in &result.layers {
        assert!(one_dp(layer.depth_range[0]) && one_dp(layer.depth_range[1]));
        assert!(one_dp(layer.temp_range[0]) && one_dp(layer.temp_range[1]));
    }
}

#[test]
fn threshold_is_configurable() {
    // Med hevet terskel forsvinner deteksjonen i samme profil
    let strict = AnalysisConfig {
        gradient_threshold: 0.2,
    };
    assert!(detect_thermocline(&cooling_profile(), &strict).is_none());

    let lenient = AnalysisConfig {
        gradient_threshold: 0.1,
    };
    let result = detect_thermocline(&cooling_profile(), &lenient).unwrap();
    // Strengere terskel enn standard snevrer båndet inn til 100–200 m-intervallene
    assert!((result.top_depth - 125.0).abs() < 1e-9);
    assert!((result.bottom_depth - 175.0).abs() < 1e-9);
}

#[test]
fn tie_on_max_gradient_picks_shallowest() {
    // To eksakt like bratte intervaller; det grunneste skal vinne
    let samples = vec![
        sample(0.0, 20.0),
        sample(10.0, 15.0),
        sample(100.0, 15.0),
        sample(110.0, 10.0),
        sample(200.0, 10.0),
    ];
    let cfg = AnalysisConfig::default();
    let result = detect_thermocline(&samples, &cfg).unwrap();
    assert!((result.center_depth - 5.0).abs() < 1e-9);
}
