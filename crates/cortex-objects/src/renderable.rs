//! Base of everything a renderer can draw.

use cortex_macros::RunTimeTyped;

use crate::{BlindDataHolder, CompoundData, type_ids};

/// Something that can be rendered. Carries blind data.
#[derive(Debug, Clone, Default, RunTimeTyped)]
#[cortex(id = type_ids::RENDERABLE)]
pub struct Renderable {
    #[cortex(base)]
    holder: BlindDataHolder,
}

impl Renderable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blind_data(&self) -> &CompoundData {
        self.holder.blind_data()
    }

    pub fn blind_data_mut(&mut self) -> &mut CompoundData {
        self.holder.blind_data_mut()
    }
}
