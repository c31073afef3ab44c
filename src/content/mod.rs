// SPDX-License-Identifier: MPL-2.0
//! Studio content: showcase items and studio metadata.
//!
//! The [`ContentStore`] is built once at startup, either from the compiled-in
//! catalog or from a TOML catalog file, and is read-only afterwards. Every
//! component receives items by reference; nothing mutates them.
//!
//! # Catalog file format
//!
//! ```toml
//! hero_asset = "builtin:helmet"
//!
//! [studio]
//! name = "M3DAN STUDIO ANIMATION"
//! tagline = "Bringing Ideas to Life in 3D"
//! description = "..."
//! services = ["Character Modeling & Animation"]
//! contact = { email = "hello@m3danstudio.com", phone = "...", address = "..." }
//!
//! [[items]]
//! id = 1
//! title = "Cyber Warrior"
//! category = "Character"
//! description = "..."
//! asset_ref = "builtin:helmet"
//! thumbnail_ref = "builtin:helmet"
//! animations = ["idle", "walk"]
//! featured = true
//! ```

mod catalog;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

/// Identifier of a showcase item, unique within a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Open set of item categories; new values need no code change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// URI naming a 3D asset or an image.
///
/// Supported forms are `builtin:<shape>`, `file://<path>`, plain filesystem
/// paths and `http(s)://` URLs. Resolution happens in [`crate::scene::loader`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetRef(String);

impl AssetRef {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry of the portfolio gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowcaseItem {
    pub id: ItemId,
    pub title: String,
    pub category: Category,
    pub description: String,
    pub asset_ref: AssetRef,
    pub thumbnail_ref: AssetRef,
    #[serde(default)]
    pub animations: Vec<String>,
    /// Display-only badge; never used to filter or order items.
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// A headline figure of the About section ("100+ Projects Completed").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub value: String,
    pub label: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudioInfo {
    pub name: String,
    pub tagline: String,
    pub description: String,
    #[serde(default)]
    pub services: Vec<String>,
    pub contact: ContactDetails,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
}

/// Read-only catalog of the studio and its showcase items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentStore {
    /// Asset shown by the hero section viewer.
    hero_asset: AssetRef,
    studio: StudioInfo,
    items: Vec<ShowcaseItem>,
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ContentStore {
    /// The catalog compiled into the binary. Never empty.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            hero_asset: catalog::hero_asset(),
            studio: catalog::studio(),
            items: catalog::items(),
        }
    }

    /// Builds a store from explicit parts, validating the items.
    pub fn new(hero_asset: AssetRef, studio: StudioInfo, items: Vec<ShowcaseItem>) -> Result<Self> {
        let store = Self {
            hero_asset,
            studio,
            items,
        };
        store.validate()?;
        Ok(store)
    }

    /// Parses a catalog in TOML form.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let store: Self =
            toml::from_str(source).map_err(|err| Error::Content(err.to_string()))?;
        store.validate()?;
        Ok(store)
    }

    /// Reads and parses a catalog file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        let store = Self::from_toml_str(&source)?;
        log::info!(
            "loaded {} showcase items from {}",
            store.items.len(),
            path.display()
        );
        Ok(store)
    }

    fn validate(&self) -> Result<()> {
        if self.items.is_empty() {
            return Err(Error::Content("catalog has no items".to_string()));
        }

        let mut seen = HashSet::with_capacity(self.items.len());
        for item in &self.items {
            if !seen.insert(item.id) {
                return Err(Error::Content(format!("duplicate item id {}", item.id)));
            }
            if item.category.as_str().trim().is_empty() {
                return Err(Error::Content(format!("item {} has no category", item.id)));
            }
        }
        Ok(())
    }

    /// All items in insertion order.
    #[must_use]
    pub fn list_items(&self) -> &[ShowcaseItem] {
        &self.items
    }

    /// Distinct categories in order of first appearance.
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        let mut categories: Vec<Category> = Vec::new();
        for item in &self.items {
            if !categories.contains(&item.category) {
                categories.push(item.category.clone());
            }
        }
        categories
    }

    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&ShowcaseItem> {
        self.items.iter().find(|item| item.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn has_category(&self, category: &Category) -> bool {
        self.items.iter().any(|item| &item.category == category)
    }

    #[must_use]
    pub fn studio(&self) -> &StudioInfo {
        &self.studio
    }

    #[must_use]
    pub fn hero_asset(&self) -> &AssetRef {
        &self.hero_asset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SMALL_CATALOG: &str = r#"
hero_asset = "builtin:cube"

[studio]
name = "Test Studio"
tagline = "Tag"
description = "Desc"
contact = { email = "a@b.io", phone = "1", address = "Somewhere" }

[[items]]
id = 7
title = "Robot"
category = "Character"
description = "A robot"
asset_ref = "builtin:cube"
thumbnail_ref = "builtin:cube"

[[items]]
id = 3
title = "Lamp"
category = "Product"
description = "A lamp"
asset_ref = "builtin:octahedron"
thumbnail_ref = "builtin:octahedron"
animations = ["glow"]
featured = true
"#;

    #[test]
    fn builtin_catalog_is_valid_and_non_empty() {
        let store = ContentStore::builtin();
        assert!(store.validate().is_ok());
        assert_eq!(store.list_items().len(), 6);
        assert_eq!(store.studio().name, "M3DAN STUDIO ANIMATION");
        assert_eq!(store.studio().highlights.len(), 3);
    }

    #[test]
    fn builtin_categories_follow_first_appearance() {
        let store = ContentStore::builtin();
        assert_eq!(
            store.categories(),
            vec![Category::new("Character"), Category::new("Product")]
        );
    }

    #[test]
    fn get_and_contains_look_up_by_id() {
        let store = ContentStore::builtin();
        assert_eq!(
            store.get(ItemId(3)).map(|item| item.title.as_str()),
            Some("Dragon Guardian")
        );
        assert!(store.contains(ItemId(6)));
        assert!(!store.contains(ItemId(99)));
    }

    #[test]
    fn toml_catalog_keeps_insertion_order() {
        let store = ContentStore::from_toml_str(SMALL_CATALOG).expect("catalog should parse");
        let ids: Vec<ItemId> = store.list_items().iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![ItemId(7), ItemId(3)]);
        assert!(!store.list_items()[0].featured);
        assert!(store.list_items()[0].animations.is_empty());
        assert!(store.studio().services.is_empty());
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let header = SMALL_CATALOG.split("[[items]]").next().unwrap_or_default();
        let source = header.replacen(
            "hero_asset = \"builtin:cube\"",
            "hero_asset = \"builtin:cube\"\nitems = []",
            1,
        );

        match ContentStore::from_toml_str(&source) {
            Err(Error::Content(message)) => assert!(message.contains("no items")),
            other => panic!("expected content error, got {:?}", other),
        }
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let source = SMALL_CATALOG.replace("id = 3", "id = 7");
        let result = ContentStore::from_toml_str(&source);
        match result {
            Err(Error::Content(message)) => assert!(message.contains("duplicate")),
            other => panic!("expected content error, got {:?}", other),
        }
    }

    #[test]
    fn load_from_path_reads_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("catalog.toml");
        std::fs::write(&path, SMALL_CATALOG).expect("failed to write catalog");

        let store = ContentStore::load_from_path(&path).expect("catalog should load");
        assert_eq!(store.hero_asset().as_str(), "builtin:cube");
    }

    #[test]
    fn load_from_missing_path_is_io_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let result = ContentStore::load_from_path(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
