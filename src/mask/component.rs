use crate::{
    foundation::raster::BBox,
    mask::bitmap::MaskBitmap,
};

/// Identifier of a saved segmentation component. Ids are assigned
/// sequentially from 1 by [`ComponentStore`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ComponentId(pub u32);

/// A named, persisted segmentation result tied to a source image.
///
/// Components are created once per saved mask selection, read many times
/// during batch edit application, and never mutated in place — edits do not
/// alter stored masks.
#[derive(Clone, Debug)]
pub struct Component {
    /// Identifier within the owning store.
    pub id: ComponentId,
    /// The stored region bitmap.
    pub mask: MaskBitmap,
    /// Inclusive bounding box of the mask, `None` for an all-zero mask.
    pub bbox: Option<BBox>,
    /// Number of inside pixels.
    pub area: u64,
    /// Confidence score reported by the segmentation model.
    pub score: f32,
    /// User-assigned or generated name.
    pub name: String,
}

impl Component {
    /// Build a component from a mask, deriving bbox and area. A `None` name
    /// gets the generated `component_{id}` form.
    pub fn from_mask(id: ComponentId, mask: MaskBitmap, score: f32, name: Option<String>) -> Self {
        let bbox = mask.bbox();
        let area = mask.area();
        let name = name.unwrap_or_else(|| format!("component_{}", id.0));
        Self {
            id,
            mask,
            bbox,
            area,
            score,
            name,
        }
    }
}

/// Ordered registry of saved components for one source image.
#[derive(Clone, Debug, Default)]
pub struct ComponentStore {
    components: Vec<Component>,
    next_id: u32,
}

impl ComponentStore {
    /// An empty store. The first inserted component gets id 1.
    pub fn new() -> Self {
        Self {
            components: Vec::new(),
            next_id: 1,
        }
    }

    /// Save a mask as a new component, assigning the next sequential id.
    pub fn insert(&mut self, mask: MaskBitmap, score: f32, name: Option<String>) -> ComponentId {
        let id = ComponentId(self.next_id);
        self.next_id += 1;
        self.components
            .push(Component::from_mask(id, mask, score, name));
        id
    }

    /// Look up a component by id.
    pub fn get(&self, id: ComponentId) -> Option<&Component> {
        self.components.iter().find(|c| c.id == id)
    }

    /// All components in insertion (id) order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Number of saved components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether no component has been saved.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mask/component.rs"]
mod tests;
