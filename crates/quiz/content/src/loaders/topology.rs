//! World topology loader.
//!
//! Reads a TopoJSON document and keeps the country outlines of one named
//! geometry collection. Only `Polygon` and `MultiPolygon` geometries with a
//! name become regions; anything else is skipped with a warning.

use std::collections::BTreeMap;
use std::path::Path;

use quiz_core::{ArcIndices, ArcPoint, ArcTable, Atlas, CountryRegion, ShapeKind};
use serde::Deserialize;

use crate::ContentError;
use crate::loaders::{LoadResult, read_file};

/// Name of the geometry collection holding the countries.
pub const WORLD_OBJECT: &str = "world";

#[derive(Debug, Deserialize)]
struct TopologyJson {
    #[serde(default)]
    objects: BTreeMap<String, ObjectJson>,
    #[serde(default)]
    arcs: Vec<Vec<Vec<f64>>>,
    #[serde(default)]
    transform: Option<TransformJson>,
}

#[derive(Debug, Deserialize)]
struct ObjectJson {
    #[serde(default)]
    geometries: Vec<GeometryJson>,
}

#[derive(Debug, Deserialize)]
struct GeometryJson {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    arcs: Option<ArcIndices>,
    #[serde(default)]
    properties: PropertiesJson,
}

#[derive(Debug, Default, Deserialize)]
struct PropertiesJson {
    #[serde(default)]
    name: Option<String>,
}

/// Quantization transform. Positions are delta-encoded integers when present.
#[derive(Debug, Deserialize)]
struct TransformJson {
    scale: [f64; 2],
    translate: [f64; 2],
}

impl TransformJson {
    fn decode(&self, arc: Vec<ArcPoint>) -> Vec<ArcPoint> {
        let (mut x, mut y) = (0.0, 0.0);
        arc.into_iter()
            .map(|[dx, dy]| {
                x += dx;
                y += dy;
                [
                    x * self.scale[0] + self.translate[0],
                    y * self.scale[1] + self.translate[1],
                ]
            })
            .collect()
    }
}

/// Loader for the world topology from TopoJSON files.
pub struct TopologyLoader;

impl TopologyLoader {
    /// Load and validate the `world` collection from a TopoJSON file.
    pub fn load(path: &Path) -> LoadResult<Atlas> {
        let content = read_file(path)?;
        let atlas = Self::parse(&content, WORLD_OBJECT)?;
        tracing::info!(
            path = %path.display(),
            regions = atlas.len(),
            arcs = atlas.arcs().len(),
            "loaded world topology"
        );
        Ok(atlas)
    }

    /// Parse `content` and keep the geometries of `object`.
    ///
    /// Every kept region is resolved once; a region whose outline cannot be
    /// resolved fails the whole load.
    pub fn parse(content: &str, object: &str) -> LoadResult<Atlas> {
        let topology: TopologyJson = serde_json::from_str(content)?;

        let mut arcs = Vec::with_capacity(topology.arcs.len());
        for (index, raw) in topology.arcs.into_iter().enumerate() {
            let arc = raw
                .into_iter()
                .map(|position| match position.as_slice() {
                    [x, y, ..] => Ok([*x, *y]),
                    _ => Err(ContentError::MalformedArc(index)),
                })
                .collect::<LoadResult<Vec<ArcPoint>>>()?;
            arcs.push(match &topology.transform {
                Some(transform) => transform.decode(arc),
                None => arc,
            });
        }

        let mut objects = topology.objects;
        let collection = objects
            .remove(object)
            .ok_or_else(|| ContentError::MissingObject(object.to_owned()))?;

        let regions: Vec<CountryRegion> = collection
            .geometries
            .into_iter()
            .filter_map(into_region)
            .collect();
        if regions.is_empty() {
            return Err(ContentError::NoRegions);
        }

        let atlas = Atlas::new(regions, ArcTable::new(arcs));
        atlas.validate()?;
        Ok(atlas)
    }
}

fn into_region(geometry: GeometryJson) -> Option<CountryRegion> {
    let Some(name) = geometry.properties.name.filter(|n| !n.trim().is_empty()) else {
        tracing::warn!(kind = %geometry.kind, "skipping geometry without a name");
        return None;
    };
    let Ok(shape) = geometry.kind.parse::<ShapeKind>() else {
        tracing::warn!(%name, kind = %geometry.kind, "skipping non-polygon geometry");
        return None;
    };
    let Some(arcs) = geometry.arcs else {
        tracing::warn!(%name, "skipping geometry without arcs");
        return None;
    };
    Some(CountryRegion::new(name, shape, arcs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::{Coordinate, GeometryError, resolve_centroid};

    const SAMPLE: &str = r#"{
        "type": "Topology",
        "objects": {
            "world": {
                "type": "GeometryCollection",
                "geometries": [
                    { "type": "Polygon", "arcs": [[0]], "properties": { "name": "Wakanda" } },
                    { "type": "MultiPolygon", "arcs": [[[1]], [[0]]], "properties": { "name": "Genovia" } },
                    { "type": "Point", "coordinates": [0, 0], "properties": { "name": "Null Island" } },
                    { "type": "Polygon", "arcs": [[0]], "properties": {} }
                ]
            }
        },
        "arcs": [
            [[10, 20], [14, 24]],
            [[-3, 5, 100]]
        ]
    }"#;

    #[test]
    fn keeps_named_polygons_only() {
        let atlas = TopologyLoader::parse(SAMPLE, WORLD_OBJECT).unwrap();
        let names: Vec<_> = atlas.regions().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Wakanda", "Genovia"]);
        assert_eq!(atlas.regions()[1].shape, ShapeKind::MultiPolygon);
        assert_eq!(atlas.arcs().len(), 2);
    }

    #[test]
    fn extra_position_dimensions_are_dropped() {
        let atlas = TopologyLoader::parse(SAMPLE, WORLD_OBJECT).unwrap();
        let genovia = &atlas.regions()[1];
        assert_eq!(
            resolve_centroid(genovia, atlas.arcs()).unwrap(),
            Coordinate::new(5.0, -3.0)
        );
    }

    #[test]
    fn missing_object_is_reported() {
        let err = TopologyLoader::parse(SAMPLE, "countries").unwrap_err();
        assert!(matches!(err, ContentError::MissingObject(name) if name == "countries"));
    }

    #[test]
    fn dangling_arc_fails_validation() {
        let doc = r#"{
            "objects": { "world": { "geometries": [
                { "type": "Polygon", "arcs": [[7]], "properties": { "name": "Ghost" } }
            ] } },
            "arcs": [[[0, 0]]]
        }"#;
        let err = TopologyLoader::parse(doc, WORLD_OBJECT).unwrap_err();
        assert!(matches!(
            err,
            ContentError::Geometry(GeometryError::MissingArc { index: 7, .. })
        ));
    }

    #[test]
    fn empty_collection_is_rejected() {
        let doc = r#"{ "objects": { "world": { "geometries": [] } }, "arcs": [] }"#;
        assert!(matches!(
            TopologyLoader::parse(doc, WORLD_OBJECT).unwrap_err(),
            ContentError::NoRegions
        ));
    }

    #[test]
    fn quantized_arcs_are_decoded() {
        let doc = r#"{
            "transform": { "scale": [0.5, 2.0], "translate": [-10.0, 1.0] },
            "objects": { "world": { "geometries": [
                { "type": "Polygon", "arcs": [[0]], "properties": { "name": "Delta" } }
            ] } },
            "arcs": [[[4, 2], [2, 1]]]
        }"#;
        let atlas = TopologyLoader::parse(doc, WORLD_OBJECT).unwrap();
        assert_eq!(atlas.arcs().get(0), Some(&[[-8.0, 5.0], [-7.0, 7.0]][..]));
    }
}
