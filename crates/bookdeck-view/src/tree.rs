#![forbid(unsafe_code)]

//! Named view regions.
//!
//! Regions are created on first touch, mirroring how the page's overlay
//! container is created lazily. Iteration order is the region id order so
//! presenters and snapshot tests are deterministic.

use std::collections::BTreeMap;

/// Content and visibility of one named view region.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Region {
    pub visible: bool,
    /// Display text.
    pub text: Option<String>,
    /// Form field value (hidden inputs and the like).
    pub value: Option<String>,
    /// Image source.
    pub image: Option<String>,
    /// Presentation hint the styling layer maps to a look, e.g. a toast's
    /// severity class.
    pub hint: Option<String>,
}

/// The retained model of the visible page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewTree {
    regions: BTreeMap<String, Region>,
}

impl ViewTree {
    pub fn new() -> Self {
        Self::default()
    }

    fn region_mut(&mut self, id: &str) -> &mut Region {
        self.regions.entry(id.to_string()).or_default()
    }

    pub fn show(&mut self, id: &str) {
        self.region_mut(id).visible = true;
    }

    pub fn hide(&mut self, id: &str) {
        self.region_mut(id).visible = false;
    }

    pub fn set_visible(&mut self, id: &str, visible: bool) {
        self.region_mut(id).visible = visible;
    }

    pub fn set_text(&mut self, id: &str, text: impl Into<String>) {
        self.region_mut(id).text = Some(text.into());
    }

    pub fn set_value(&mut self, id: &str, value: impl Into<String>) {
        self.region_mut(id).value = Some(value.into());
    }

    pub fn set_image(&mut self, id: &str, src: impl Into<String>) {
        self.region_mut(id).image = Some(src.into());
    }

    pub fn set_hint(&mut self, id: &str, hint: impl Into<String>) {
        self.region_mut(id).hint = Some(hint.into());
    }

    /// Remove a region entirely (a dismissed toast, not just a hidden one).
    pub fn remove(&mut self, id: &str) {
        self.regions.remove(id);
    }

    /// Remove every region whose id starts with `prefix` and is not listed
    /// in `keep`.
    pub fn prune_prefix(&mut self, prefix: &str, keep: &[String]) {
        self.regions
            .retain(|id, _| !id.starts_with(prefix) || keep.iter().any(|k| k == id));
    }

    pub fn get(&self, id: &str) -> Option<&Region> {
        self.regions.get(id)
    }

    /// A region is visible only if it has been shown and not re-hidden.
    pub fn is_visible(&self, id: &str) -> bool {
        self.regions.get(id).is_some_and(|r| r.visible)
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.regions.get(id).and_then(|r| r.text.as_deref())
    }

    pub fn value(&self, id: &str) -> Option<&str> {
        self.regions.get(id).and_then(|r| r.value.as_deref())
    }

    pub fn image(&self, id: &str) -> Option<&str> {
        self.regions.get(id).and_then(|r| r.image.as_deref())
    }

    pub fn hint(&self, id: &str) -> Option<&str> {
        self.regions.get(id).and_then(|r| r.hint.as_deref())
    }

    /// Iterate all regions in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Region)> {
        self.regions.iter().map(|(id, r)| (id.as_str(), r))
    }

    /// Ids of the visible regions, in id order.
    pub fn visible_ids(&self) -> Vec<&str> {
        self.iter()
            .filter(|(_, r)| r.visible)
            .map(|(id, _)| id)
            .collect()
    }

    /// Ids of visible regions whose id starts with `prefix`.
    pub fn visible_with_prefix(&self, prefix: &str) -> Vec<&str> {
        self.iter()
            .filter(|(id, r)| r.visible && id.starts_with(prefix))
            .map(|(id, _)| id)
            .collect()
    }
}
