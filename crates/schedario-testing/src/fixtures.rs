//! Sample datasets written into a test data directory.
//!
//! Property keys follow the GIS export column names, so the fixtures also
//! exercise the field registries.

use anyhow::Result;
use serde_json::{Value, json};
use std::fs;
use std::path::Path;

/// Long enough to be truncated by every length-capped field.
pub fn long_text(seed: &str) -> String {
    let mut text = String::new();
    while text.chars().count() < 600 {
        text.push_str(seed);
        text.push(' ');
    }
    text.trim_end().to_string()
}

fn point(lng: f64, lat: f64) -> Value {
    json!({"type": "Point", "coordinates": [lng, lat]})
}

fn polygon(min_lng: f64, min_lat: f64, max_lng: f64, max_lat: f64) -> Value {
    json!({
        "type": "Polygon",
        "coordinates": [[
            [min_lng, min_lat],
            [max_lng, min_lat],
            [max_lng, max_lat],
            [min_lng, max_lat],
            [min_lng, min_lat]
        ]]
    })
}

fn collection(features: Vec<Value>) -> Value {
    json!({"type": "FeatureCollection", "features": features})
}

pub fn mosi() -> Value {
    collection(vec![
        json!({
            "type": "Feature",
            "geometry": point(11.8723, 42.2496),
            "properties": {
                "OGN": "Necropoli dei Monterozzi",
                "LCC": "Tarquinia",
                "LCP": "VT",
                "LCR": "Lazio",
                "OGD": "necropoli",
                "DTR": "Età etrusca",
                "gid": 101,
                "DES": "Tombe a camera dipinte"
            }
        }),
        json!({
            "type": "Feature",
            "geometry": point(12.2916, 41.7567),
            "properties": {
                "OGN": "Villa rustica",
                "LCC": "Ostia",
                "OGD": "villa",
                "gid": null,
                "DES": "Ambienti produttivi con dolia"
            }
        }),
        json!({
            "type": "Feature",
            "geometry": null,
            "properties": {
                "OGN": "Cisterna",
                "LCC": "Roma",
                "LCP": "RM",
                "gid": 103
            }
        }),
    ])
}

pub fn mopr() -> Value {
    collection(vec![
        json!({
            "type": "Feature",
            "geometry": polygon(12.40, 41.80, 12.45, 41.85),
            "properties": {
                "Denominazione (OGN) [*]": "Raddoppio ferroviario",
                "Comune (LCC) [*]": "Ciampino",
                "Provincia (LCP) [*]": "RM",
                "Codice progetto (CPR) [*]": "PRJ-001",
                "Fase di progetto (OGF) [*]": "Definitivo",
                "Geomorfologia (CAE) [5000 caratteri]": long_text("pianoro vulcanico"),
                "Note (CAN) [2000 caratteri]": "Nessuna",
                "legacy_id": "A-17"
            }
        }),
        json!({
            "type": "Feature",
            "geometry": point(12.5, 41.9),
            "properties": {
                "Denominazione (OGN) [*]": "Parcheggio interrato",
                "Comune (LCC) [*]": "Roma"
            }
        }),
    ])
}

pub fn survey() -> Value {
    collection(vec![json!({
        "type": "Feature",
        "geometry": polygon(11.80, 42.20, 11.90, 42.30),
        "properties": {
            "Denominazione (RCGV)": "Ricognizione Monterozzi",
            "Data (RCGD) [*]": "2024-03-11",
            "Codice identificativo (RCGH) [*]": "RCG-04",
            "Comune (PVCC) [*]": "Tarquinia",
            "Provincia (PVCP) [*]": "VT",
            "Metodo di ricognizione (RCGM)": "sistematica"
        }
    })])
}

pub fn survey_units() -> Value {
    let unit = |id: &str, notes: String| {
        json!({
            "type": "Feature",
            "geometry": polygon(11.82, 42.22, 11.84, 42.24),
            "properties": {
                "Codice identificativo (RCGY) [*]": id,
                "Visibilità (RCGC) [*]": "buona",
                "Note (CTN)": notes
            }
        })
    };
    collection(vec![
        unit("U.R. 10", long_text("terreno arato")),
        unit("U.R. 2", "breve".to_string()),
        unit("U.R. 1", long_text("uliveto")),
    ])
}

pub const CORRECTION_NOTES: &str = "<h2>Correzioni</h2>\n<p>Aggiornate le schede MOPR.</p>\n";

/// Write every input under its default file name.
pub fn write_all(dir: &Path) -> Result<()> {
    write_json(&dir.join("mosi.geojson"), &mosi())?;
    write_json(&dir.join("mopr.geojson"), &mopr())?;
    write_json(&dir.join("rcg.geojson"), &survey())?;
    write_json(&dir.join("d_rcg.geojson"), &survey_units())?;
    fs::write(dir.join("correzioni.html"), CORRECTION_NOTES)?;
    Ok(())
}

pub fn write_json(path: &Path, value: &Value) -> Result<()> {
    fs::write(path, serde_json::to_string_pretty(value)?)?;
    Ok(())
}
