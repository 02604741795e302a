//! Objects carrying arbitrary user data.

use cortex_macros::RunTimeTyped;

use crate::{CompoundData, Object, type_ids};

/// An object with an attached [`CompoundData`] for user annotations.
#[derive(Debug, Clone, Default, RunTimeTyped)]
#[cortex(id = type_ids::BLIND_DATA_HOLDER)]
pub struct BlindDataHolder {
    #[cortex(base)]
    object: Object,
    blind_data: CompoundData,
}

impl BlindDataHolder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blind_data(blind_data: CompoundData) -> Self {
        Self {
            object: Object::new(),
            blind_data,
        }
    }

    pub fn blind_data(&self) -> &CompoundData {
        &self.blind_data
    }

    pub fn blind_data_mut(&mut self) -> &mut CompoundData {
        &mut self.blind_data
    }
}
