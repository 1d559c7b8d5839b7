//! Indexed storage for the session's country regions.
use std::fmt;

use crate::geo::{Atlas, CountryRegion};

use super::SessionError;

/// Stable index of a region within a session arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegionId(pub u32);

impl RegionId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Session-owned copy of the atlas regions.
///
/// Each region sits in a fixed slot, so a selection flips one flag in place.
/// Readers get shared slices; only [`RegionArena::select`] mutates.
#[derive(Clone, Debug, Default)]
pub struct RegionArena {
    regions: Vec<CountryRegion>,
}

impl RegionArena {
    /// Builds an arena with every region unselected.
    pub fn new(regions: impl IntoIterator<Item = CountryRegion>) -> Self {
        let regions = regions
            .into_iter()
            .map(|mut region| {
                region.selected = false;
                region
            })
            .collect();
        Self { regions }
    }

    pub fn from_atlas(atlas: &Atlas) -> Self {
        Self::new(atlas.regions().iter().cloned())
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn get(&self, id: RegionId) -> Option<&CountryRegion> {
        self.regions.get(id.index())
    }

    /// Read-only view of every region in dataset order.
    pub fn regions(&self) -> &[CountryRegion] {
        &self.regions
    }

    pub fn iter(&self) -> impl Iterator<Item = (RegionId, &CountryRegion)> {
        self.regions
            .iter()
            .enumerate()
            .map(|(index, region)| (RegionId(index as u32), region))
    }

    /// Ids of regions not yet selected, in dataset order.
    pub fn available_ids(&self) -> Vec<RegionId> {
        self.iter()
            .filter(|(_, region)| !region.selected)
            .map(|(id, _)| id)
            .collect()
    }

    pub fn available_count(&self) -> usize {
        self.regions.iter().filter(|r| !r.selected).count()
    }

    pub fn selected_count(&self) -> usize {
        self.regions.len() - self.available_count()
    }

    /// First unselected region whose name equals `name`, ignoring case.
    pub fn find_available(&self, name: &str) -> Option<RegionId> {
        self.iter()
            .find(|(_, region)| !region.selected && names_match(&region.name, name))
            .map(|(id, _)| id)
    }

    /// First region whose name equals `name`, ignoring case.
    pub fn find(&self, name: &str) -> Option<RegionId> {
        self.iter()
            .find(|(_, region)| names_match(&region.name, name))
            .map(|(id, _)| id)
    }

    /// Flips `selected` from false to true.
    ///
    /// The flag never goes back; a second call for the same region fails.
    pub(crate) fn select(&mut self, id: RegionId) -> Result<&CountryRegion, SessionError> {
        let region = self
            .regions
            .get_mut(id.index())
            .ok_or(SessionError::UnknownRegion(id))?;

        if region.selected {
            return Err(SessionError::AlreadySelected {
                name: region.name.clone(),
            });
        }

        region.selected = true;
        Ok(&*region)
    }
}

/// Case-insensitive exact name comparison.
pub fn names_match(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::ShapeKind;

    fn arena() -> RegionArena {
        RegionArena::new([
            CountryRegion::new("France", ShapeKind::Polygon, vec![vec![0]]),
            CountryRegion::new("Chad", ShapeKind::Polygon, vec![vec![1]]),
        ])
    }

    #[test]
    fn new_arena_resets_selection() {
        let mut region = CountryRegion::new("Peru", ShapeKind::Polygon, vec![vec![0]]);
        region.selected = true;
        let arena = RegionArena::new([region]);
        assert_eq!(arena.available_count(), 1);
    }

    #[test]
    fn select_flips_exactly_once() {
        let mut arena = arena();
        assert!(arena.select(RegionId(1)).is_ok());
        assert_eq!(arena.selected_count(), 1);
        assert_eq!(
            arena.select(RegionId(1)).unwrap_err(),
            SessionError::AlreadySelected {
                name: "Chad".into()
            }
        );
        assert_eq!(arena.selected_count(), 1);
    }

    #[test]
    fn select_out_of_range_is_rejected() {
        let mut arena = arena();
        assert_eq!(
            arena.select(RegionId(9)).unwrap_err(),
            SessionError::UnknownRegion(RegionId(9))
        );
    }

    #[test]
    fn lookups_ignore_case_but_not_partial_names() {
        let mut arena = arena();
        assert_eq!(arena.find_available("fRaNcE"), Some(RegionId(0)));
        assert_eq!(arena.find_available("Fran"), None);

        arena.select(RegionId(0)).unwrap();
        assert_eq!(arena.find_available("france"), None);
        assert_eq!(arena.find("france"), Some(RegionId(0)));
        assert_eq!(arena.available_ids(), vec![RegionId(1)]);
    }
}
