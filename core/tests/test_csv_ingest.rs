// Rå CTD-eksport kommer som CSV med CalCOFI-kolonnenavn; denne testen
// speiler innlesingsveien fra opplastingslaget.

use abysseye_core::clean::clean_profile;
use abysseye_core::thermocline::detect_thermocline;
use abysseye_core::types::{AnalysisConfig, DepthSample};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct BottleRow {
    #[serde(rename = "Depthm")]
    depth: f64,
    #[serde(rename = "T_degC")]
    temperature: f64,
    #[serde(rename = "Salnty")]
    salinity: Option<f64>,
}

fn parse_rows(data: &str) -> Vec<DepthSample> {
    let mut rdr = csv::Reader::from_reader(data.as_bytes());
    rdr.deserialize()
        .map(|row| {
            let r: BottleRow = row.expect("gyldig rad");
            DepthSample {
                depth: r.depth,
                temperature: r.temperature,
                salinity: r.salinity,
                density: None,
            }
        })
        .collect()
}

#[test]
fn csv_rows_flow_through_clean_and_detect() {
    let data = "\
Depthm,T_degC,Salnty
5,26.0,33.2
50,25.8,33.3
100,22.0,33.8
150,14.0,34.0
200,8.0,34.2
300,6.5,34.3
500,4.0,34.4
";
    let samples = parse_rows(data);
    assert_eq!(samples.len(), 7);

    let cleaned = clean_profile(&samples);
    assert_eq!(cleaned.len(), 7, "ingen uteliggere i denne profilen");

    let cfg = AnalysisConfig::default();
    let result = detect_thermocline(&cleaned, &cfg).expect("skulle påvist sprangsjikt");
    assert!((result.center_depth - 125.0).abs() < 1e-9);
}

#[test]
fn csv_with_empty_salinity_field() {
    let data = "\
Depthm,T_degC,Salnty
5,18.0,
20,12.0,33.4
40,11.8,33.5
";
    let samples = parse_rows(data);
    assert_eq!(samples.len(), 3);
    assert!(samples[0].salinity.is_none());
    assert_eq!(samples[1].salinity, Some(33.4));
}
