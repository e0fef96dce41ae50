//! Hold types and slot state.

use crux_assets::{AtlasManifest, RegionRect};
use crux_ui::Color;

/// An immutable hold kind: display name plus its atlas sprite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoldType {
    /// Atlas region name, e.g. `jug` or `crimp`.
    pub name: String,
    /// Sprite region in the wall atlas.
    pub region: RegionRect,
}

impl HoldType {
    /// Display label: the name with its first letter upper-cased.
    #[must_use]
    pub fn label(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }
}

/// Index of a hold type within a [`HoldTypeSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HoldTypeId(pub usize);

/// The hold kinds available on a wall, loaded once from its atlas.
#[derive(Debug, Clone, Default)]
pub struct HoldTypeSet {
    types: Vec<HoldType>,
}

impl HoldTypeSet {
    /// Collects hold types from an atlas manifest: every region except
    /// the reserved names (tile art, hole marker) is a hold sprite.
    #[must_use]
    pub fn from_manifest(manifest: &AtlasManifest, reserved: &[&str]) -> Self {
        let types = manifest
            .iter()
            .filter(|(name, _)| !reserved.contains(name))
            .map(|(name, region)| HoldType {
                name: name.to_owned(),
                region,
            })
            .collect();
        Self { types }
    }

    /// Looks up a hold type by id.
    #[must_use]
    pub fn get(&self, id: HoldTypeId) -> Option<&HoldType> {
        self.types.get(id.0)
    }

    /// Iterates `(id, hold)` pairs in load order.
    pub fn iter(&self) -> impl Iterator<Item = (HoldTypeId, &HoldType)> {
        self.types
            .iter()
            .enumerate()
            .map(|(index, hold)| (HoldTypeId(index), hold))
    }

    /// Ids sorted descending by name, the palette's display order.
    #[must_use]
    pub fn ids_by_name_desc(&self) -> Vec<HoldTypeId> {
        let mut ids: Vec<_> = (0..self.types.len()).map(HoldTypeId).collect();
        ids.sort_by(|a, b| self.types[b.0].name.cmp(&self.types[a.0].name));
        ids
    }

    /// Number of hold types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if no hold types were loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// What occupies a slot. Slots start [`HoldState::Empty`]; committing a
/// drag writes [`HoldState::Occupied`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum HoldState {
    /// No hold attached; the wall draws a hole marker here.
    #[default]
    Empty,
    /// A hold is attached.
    Occupied {
        /// Which hold type.
        hold: HoldTypeId,
        /// Tint applied when drawing the hold.
        tint: Color,
    },
}

impl HoldState {
    /// Returns true if a hold is attached.
    #[must_use]
    pub fn is_occupied(&self) -> bool {
        matches!(self, Self::Occupied { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest() -> AtlasManifest {
        AtlasManifest::from_xml(
            r#"<TextureAtlas>
                <SubTexture name="default" x="0" y="0" width="64" height="64"/>
                <SubTexture name="hole" x="64" y="0" width="8" height="8"/>
                <SubTexture name="jug" x="64" y="8" width="24" height="24"/>
                <SubTexture name="crimp" x="64" y="32" width="16" height="16"/>
                <SubTexture name="sloper" x="64" y="48" width="24" height="16"/>
            </TextureAtlas>"#,
        )
        .unwrap()
    }

    #[test]
    fn test_reserved_names_excluded() {
        let set = HoldTypeSet::from_manifest(&manifest(), &["default", "hole"]);

        assert_eq!(set.len(), 3);
        assert!(set.iter().all(|(_, hold)| hold.name != "default"));
    }

    #[test]
    fn test_palette_order_descending() {
        let set = HoldTypeSet::from_manifest(&manifest(), &["default", "hole"]);
        let names: Vec<_> = set
            .ids_by_name_desc()
            .into_iter()
            .map(|id| set.get(id).unwrap().name.clone())
            .collect();

        assert_eq!(names, ["sloper", "jug", "crimp"]);
    }

    #[test]
    fn test_label_capitalizes() {
        let hold = HoldType {
            name: "jug".to_owned(),
            region: RegionRect::new(0, 0, 8, 8),
        };

        assert_eq!(hold.label(), "Jug");
    }
}
