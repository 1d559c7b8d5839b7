//! Centroid resolution over topology outlines.
//!
//! The "centroid" here is the unweighted arithmetic mean of the boundary
//! points of the first outer ring. It is not an area centroid and it is not
//! great-circle aware; it only needs to land roughly on the country.
//!
//! For a `MultiPolygon` only the first ring of the first part is used, so a
//! country with disjoint territories is targeted by its first part alone.
use super::{ArcIndices, ArcTable, Coordinate, CountryRegion, GeometryError, ShapeKind};

/// Computes the target coordinate for `region`.
///
/// Pure and referentially transparent: it only reads `region` and `arcs`.
///
/// # Errors
///
/// - [`GeometryError::EmptyGeometry`] if the outer ring yields no points
/// - [`GeometryError::MissingArc`] if an index is absent from `arcs`
pub fn resolve_centroid(region: &CountryRegion, arcs: &ArcTable) -> Result<Coordinate, GeometryError> {
    let points = extract_coordinates(region, arcs)?;
    mean_coordinate(&points).ok_or_else(|| GeometryError::EmptyGeometry {
        region: region.name.clone(),
    })
}

/// Selects the ring used for targeting.
pub fn outer_ring(region: &CountryRegion) -> Option<&ArcIndices> {
    match region.shape {
        ShapeKind::Polygon => region.arcs.first(),
        ShapeKind::MultiPolygon => region.arcs.first()?.first(),
    }
}

/// Resolves the outer ring into a flat point list.
///
/// Arc indices are used by absolute value; the sign only marks direction.
pub fn extract_coordinates(
    region: &CountryRegion,
    arcs: &ArcTable,
) -> Result<Vec<Coordinate>, GeometryError> {
    let Some(ring) = outer_ring(region) else {
        return Ok(Vec::new());
    };

    let mut points = Vec::new();
    for index in ring.flatten() {
        let arc = usize::try_from(index.unsigned_abs())
            .ok()
            .and_then(|slot| arcs.get(slot))
            .ok_or_else(|| GeometryError::MissingArc {
                region: region.name.clone(),
                index,
            })?;
        points.extend(arc.iter().copied().map(Coordinate::from_xy));
    }

    Ok(points)
}

/// Coordinate-wise mean of `points`; `None` when empty.
pub fn mean_coordinate(points: &[Coordinate]) -> Option<Coordinate> {
    if points.is_empty() {
        return None;
    }

    let count = points.len() as f64;
    let (lat_sum, lon_sum) = points.iter().fold((0.0, 0.0), |(lat, lon), point| {
        (lat + point.latitude, lon + point.longitude)
    });

    Some(Coordinate::new(lat_sum / count, lon_sum / count))
}
