use borsh::{
    BorshDeserialize,
    BorshSerialize,
};
use static_assertions::const_assert_eq;

use crate::error::{
    TodoInstructionError,
    TodoInstructionResult,
};

/// Instruction data shared by `DeleteTask` and `ToggleTask`.
#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TaskIdInstructionData {
    /// The id of the task to act on. It isn't checked against the task list client-side.
    id: u64,
}

impl TaskIdInstructionData {
    pub const LEN: usize = 8;

    pub const fn new(id: u64) -> Self {
        Self { id }
    }

    #[inline(always)]
    pub const fn id(&self) -> u64 {
        self.id
    }

    pub fn pack_into(&self, dst: &mut Vec<u8>) -> TodoInstructionResult<()> {
        self.serialize(dst)
            .map_err(|_| TodoInstructionError::SerializationFailed)
    }

    pub fn unpack(data: &[u8]) -> TodoInstructionResult<Self> {
        if data.len() != Self::LEN {
            return Err(TodoInstructionError::InvalidInstructionData);
        }
        borsh::from_slice(data).map_err(|_| TodoInstructionError::InvalidInstructionData)
    }
}

const_assert_eq!(TaskIdInstructionData::LEN, size_of::<u64>());
