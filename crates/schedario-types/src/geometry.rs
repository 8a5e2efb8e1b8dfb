use serde::{Deserialize, Serialize};
use serde_json::Value;

/// GeoJSON geometry. The pipeline treats it as opaque; only the print card
/// reads it, through [`Geometry::summary`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub coordinates: Value,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub geometries: Vec<Geometry>,
}

impl Geometry {
    pub fn new(kind: impl Into<String>, coordinates: Value) -> Self {
        Self {
            kind: kind.into(),
            coordinates,
            geometries: Vec::new(),
        }
    }

    pub fn point(lng: f64, lat: f64) -> Self {
        Self::new("Point", serde_json::json!([lng, lat]))
    }

    pub fn summary(&self) -> GeometrySummary {
        let mut points = Vec::new();
        self.collect_positions(&mut points);

        if points.is_empty() {
            return GeometrySummary {
                kind: self.kind.clone(),
                points: 0,
                bbox: None,
                center: None,
            };
        }

        let mut bbox = [
            f64::INFINITY,
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::NEG_INFINITY,
        ];
        for [x, y] in &points {
            bbox[0] = bbox[0].min(*x);
            bbox[1] = bbox[1].min(*y);
            bbox[2] = bbox[2].max(*x);
            bbox[3] = bbox[3].max(*y);
        }

        GeometrySummary {
            kind: self.kind.clone(),
            points: points.len(),
            center: Some([(bbox[0] + bbox[2]) / 2.0, (bbox[1] + bbox[3]) / 2.0]),
            bbox: Some(bbox),
        }
    }

    fn collect_positions(&self, out: &mut Vec<[f64; 2]>) {
        collect_positions(&self.coordinates, out);
        for child in &self.geometries {
            child.collect_positions(out);
        }
    }
}

fn collect_positions(value: &Value, out: &mut Vec<[f64; 2]>) {
    let Value::Array(items) = value else {
        return;
    };
    let x = items.first().and_then(Value::as_f64);
    let y = items.get(1).and_then(Value::as_f64);
    match (x, y) {
        (Some(x), Some(y)) => out.push([x, y]),
        _ => items.iter().for_each(|item| collect_positions(item, out)),
    }
}

/// Bounding box / centre digest printed on paper cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeometrySummary {
    pub kind: String,
    pub points: usize,
    /// `[min_lng, min_lat, max_lng, max_lat]`
    pub bbox: Option<[f64; 4]>,
    /// `[lng, lat]`
    pub center: Option<[f64; 2]>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_polygon_summary() {
        let polygon = Geometry::new(
            "Polygon",
            json!([[[12.0, 41.0], [13.0, 41.0], [13.0, 42.0], [12.0, 41.0]]]),
        );
        let summary = polygon.summary();
        assert_eq!(summary.kind, "Polygon");
        assert_eq!(summary.points, 4);
        assert_eq!(summary.bbox, Some([12.0, 41.0, 13.0, 42.0]));
        assert_eq!(summary.center, Some([12.5, 41.5]));
    }

    #[test]
    fn test_point_summary() {
        let summary = Geometry::point(12.49, 41.89).summary();
        assert_eq!(summary.points, 1);
        assert_eq!(summary.center, Some([12.49, 41.89]));
    }

    #[test]
    fn test_empty_coordinates() {
        let summary = Geometry::new("MultiPolygon", json!([])).summary();
        assert_eq!(summary.points, 0);
        assert!(summary.bbox.is_none());
    }

    #[test]
    fn test_geometry_collection() {
        let mut collection = Geometry::new("GeometryCollection", Value::Null);
        collection.geometries = vec![Geometry::point(1.0, 2.0), Geometry::point(3.0, 4.0)];
        let summary = collection.summary();
        assert_eq!(summary.points, 2);
        assert_eq!(summary.bbox, Some([1.0, 2.0, 3.0, 4.0]));
    }
}
