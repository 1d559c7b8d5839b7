//! Topology types: the shared arc table and named country outlines.
use std::sync::Arc;

use super::{GeometryError, resolve_centroid};

/// Raw `(x, y)` point in projected units.
pub type ArcPoint = [f64; 2];

/// Ordered polylines shared by every country outline.
///
/// Immutable once loaded. Sessions hold it behind an [`Arc`] and never copy it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArcTable {
    arcs: Vec<Vec<ArcPoint>>,
}

impl ArcTable {
    pub fn new(arcs: Vec<Vec<ArcPoint>>) -> Self {
        Self { arcs }
    }

    /// Returns the polyline stored at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&[ArcPoint]> {
        self.arcs.get(index).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }
}

/// Geometry kind of a country outline.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShapeKind {
    Polygon,
    MultiPolygon,
}

/// Nested signed arc indices as they appear in a topology geometry.
///
/// The sign marks winding/reuse direction; the magnitude indexes the
/// [`ArcTable`]. Nesting depth depends on the shape kind (ring, polygon,
/// multipolygon) and is kept as-is.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum ArcIndices {
    Index(i64),
    Nested(Vec<ArcIndices>),
}

impl ArcIndices {
    /// Returns the first child of a nested level.
    ///
    /// `None` for a bare index or an empty level.
    pub fn first(&self) -> Option<&ArcIndices> {
        match self {
            Self::Index(_) => None,
            Self::Nested(children) => children.first(),
        }
    }

    /// Appends every index below this node, depth first.
    pub fn flatten_into(&self, out: &mut Vec<i64>) {
        match self {
            Self::Index(index) => out.push(*index),
            Self::Nested(children) => {
                for child in children {
                    child.flatten_into(out);
                }
            }
        }
    }

    pub fn flatten(&self) -> Vec<i64> {
        let mut out = Vec::new();
        self.flatten_into(&mut out);
        out
    }
}

impl From<i64> for ArcIndices {
    fn from(index: i64) -> Self {
        Self::Index(index)
    }
}

impl From<i32> for ArcIndices {
    fn from(index: i32) -> Self {
        Self::Index(i64::from(index))
    }
}

impl<T: Into<ArcIndices>> From<Vec<T>> for ArcIndices {
    fn from(children: Vec<T>) -> Self {
        Self::Nested(children.into_iter().map(Into::into).collect())
    }
}

/// A named country outline.
///
/// `selected` is session state: only the quiz state machine flips it, and only
/// from `false` to `true`. The resolver never reads or writes it.
#[derive(Clone, Debug, PartialEq)]
pub struct CountryRegion {
    pub name: String,
    pub shape: ShapeKind,
    pub arcs: ArcIndices,
    pub selected: bool,
}

impl CountryRegion {
    pub fn new(name: impl Into<String>, shape: ShapeKind, arcs: impl Into<ArcIndices>) -> Self {
        Self {
            name: name.into(),
            shape,
            arcs: arcs.into(),
            selected: false,
        }
    }
}

/// The pre-loaded, read-only topology dataset.
///
/// Holds the region templates in dataset order plus the shared arc table.
/// Sessions build their own mutable arena from it at start.
#[derive(Clone, Debug, Default)]
pub struct Atlas {
    regions: Vec<CountryRegion>,
    arcs: Arc<ArcTable>,
}

impl Atlas {
    pub fn new(regions: Vec<CountryRegion>, arcs: ArcTable) -> Self {
        Self {
            regions,
            arcs: Arc::new(arcs),
        }
    }

    pub fn regions(&self) -> &[CountryRegion] {
        &self.regions
    }

    pub fn arcs(&self) -> &Arc<ArcTable> {
        &self.arcs
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Resolves every region once.
    ///
    /// Any failure here means the dataset is corrupt and the session must not
    /// start.
    pub fn validate(&self) -> Result<(), GeometryError> {
        for region in &self.regions {
            resolve_centroid(region, &self.arcs)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flatten_walks_every_depth() {
        let arcs = ArcIndices::from(vec![vec![vec![0, -2]], vec![vec![3]]]);
        assert_eq!(arcs.flatten(), vec![0, -2, 3]);
    }

    #[test]
    fn first_of_bare_index_is_none() {
        assert_eq!(ArcIndices::Index(4).first(), None);
        assert_eq!(ArcIndices::Nested(Vec::new()).first(), None);
    }

    #[test]
    fn shape_kind_parses_topology_type_names() {
        assert_eq!("Polygon".parse::<ShapeKind>().ok(), Some(ShapeKind::Polygon));
        assert_eq!(
            "MultiPolygon".parse::<ShapeKind>().ok(),
            Some(ShapeKind::MultiPolygon)
        );
        assert!("Point".parse::<ShapeKind>().is_err());
    }

    #[test]
    fn validate_reports_first_broken_region() {
        let atlas = Atlas::new(
            vec![
                CountryRegion::new("Ok", ShapeKind::Polygon, vec![vec![0]]),
                CountryRegion::new("Broken", ShapeKind::Polygon, Vec::<i32>::new()),
            ],
            ArcTable::new(vec![vec![[1.0, 1.0]]]),
        );

        assert_eq!(
            atlas.validate(),
            Err(GeometryError::EmptyGeometry {
                region: "Broken".into()
            })
        );
    }
}
