use borsh::{
    BorshDeserialize,
    BorshSerialize,
};

use crate::error::{
    TodoInstructionError,
    TodoInstructionResult,
};

/// Size of the little-endian `u32` length prefix Borsh writes before a string's bytes.
pub const CONTENT_LEN_PREFIX: usize = 4;

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct AddTaskInstructionData {
    /// The task's text. Any UTF-8 string is accepted, including the empty string.
    content: String,
}

impl AddTaskInstructionData {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    #[inline(always)]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The number of bytes [`AddTaskInstructionData::pack_into`] appends.
    #[inline(always)]
    pub fn packed_len(&self) -> usize {
        CONTENT_LEN_PREFIX + self.content.len()
    }

    /// Appends the length-prefixed content to `dst`.
    ///
    /// Fails only if the content's byte length doesn't fit in the `u32` prefix.
    pub fn pack_into(&self, dst: &mut Vec<u8>) -> TodoInstructionResult<()> {
        self.serialize(dst)
            .map_err(|_| TodoInstructionError::SerializationFailed)
    }

    /// Reads the length-prefixed content from `data`. Every byte of `data` must be consumed.
    pub fn unpack(data: &[u8]) -> TodoInstructionResult<Self> {
        borsh::from_slice(data).map_err(|_| TodoInstructionError::InvalidInstructionData)
    }
}
