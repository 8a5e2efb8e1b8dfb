use crate::error::{Error, Result};
use crate::geometry::Geometry;
use crate::value::{PropertyValue, normalize};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Property map of a feature. Keys are kept sorted so every traversal is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyMap(BTreeMap<String, PropertyValue>);

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.0.get(key)
    }

    /// Normalized value of `key`, empty when the key is absent.
    pub fn text(&self, key: &str) -> String {
        self.0.get(key).map(normalize).unwrap_or_default()
    }

    /// Normalized value of `key`, or `fallback` when it normalizes to empty.
    pub fn text_or(&self, key: &str, fallback: &str) -> String {
        let value = self.text(key);
        if value.is_empty() {
            fallback.to_string()
        } else {
            value
        }
    }

    pub fn is_populated(&self, key: &str) -> bool {
        !self.text(key).is_empty()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PropertyValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for PropertyMap
where
    K: Into<String>,
    V: Into<PropertyValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// One geospatial record: an opaque geometry plus its property map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: PropertyMap,
    #[serde(default, deserialize_with = "lenient_geometry")]
    pub geometry: Option<Geometry>,
}

impl Feature {
    pub fn new(properties: PropertyMap) -> Self {
        Self {
            properties,
            geometry: None,
        }
    }

    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = Some(geometry);
        self
    }
}

// Exports in the wild write `"properties": null` for features without attributes.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// A geometry that does not parse is dropped; the record itself stays usable.
fn lenient_geometry<'de, D>(deserializer: D) -> std::result::Result<Option<Geometry>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    Ok(Geometry::deserialize(value).ok())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }

    /// Parse a GeoJSON-like document. The top level must be an object carrying a
    /// `features` array; anything else is rejected as malformed.
    pub fn from_json(content: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(content)?;
        match value.get("features") {
            Some(serde_json::Value::Array(_)) => Ok(serde_json::from_value(value)?),
            Some(_) => Err(Error::Malformed("'features' is not an array".to_string())),
            None => Err(Error::Malformed("missing 'features' array".to_string())),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_feature_collection() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {"OGN": "Villa", "gid": 12}, "geometry": null},
                {"type": "Feature", "properties": null}
            ]
        }"#;
        let collection = FeatureCollection::from_json(json).unwrap();
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.features[0].properties.text("OGN"), "Villa");
        assert_eq!(collection.features[0].properties.text("gid"), "12");
        assert!(collection.features[1].properties.is_empty());
    }

    #[test]
    fn test_bad_geometry_keeps_the_record() {
        let json = r#"{
            "features": [
                {"properties": {"OGN": "A"}, "geometry": {"type": "Point", "coordinates": [12.0, 42.0]}},
                {"properties": {"OGN": "B"}, "geometry": {"coordinates": [12.0, 42.0]}},
                {"properties": {"OGN": "C"}, "geometry": "n/d"}
            ]
        }"#;
        let collection = FeatureCollection::from_json(json).unwrap();
        assert_eq!(collection.len(), 3);
        let geometry = collection.features[0].geometry.as_ref();
        assert_eq!(geometry.map(|g| g.kind.as_str()), Some("Point"));
        assert!(collection.features[1].geometry.is_none());
        assert!(collection.features[2].geometry.is_none());
        assert_eq!(collection.features[1].properties.text("OGN"), "B");
    }

    #[test]
    fn test_missing_features_is_malformed() {
        let err = FeatureCollection::from_json(r#"{"type": "Feature"}"#).unwrap_err();
        assert!(matches!(err, Error::Malformed(_)));
    }

    #[test]
    fn test_from_path() -> Result<()> {
        let dir = tempfile::TempDir::new()?;
        let path = dir.path().join("mosi.geojson");
        std::fs::write(&path, r#"{"features": []}"#)?;
        assert!(FeatureCollection::from_path(&path)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_text_or_fallback() {
        let props: PropertyMap = [("LCC", " "), ("LCP", "RM")].into_iter().collect();
        assert_eq!(props.text_or("LCC", "vuoto"), "vuoto");
        assert_eq!(props.text_or("LCP", "vuoto"), "RM");
        assert_eq!(props.text_or("missing", "vuoto"), "vuoto");
    }
}
