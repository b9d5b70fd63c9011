//! Instruction data for the todo program.
//!
//! Every instruction is a single tag byte followed by the Borsh encoding of that variant's
//! instruction data struct.

use crate::error::{
    TodoInstructionError,
    TodoInstructionResult,
};

pub mod add_task;
pub mod task_id;

pub use add_task::AddTaskInstructionData;
pub use task_id::TaskIdInstructionData;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::Display)]
#[cfg_attr(test, derive(strum_macros::FromRepr, strum_macros::EnumIter))]
pub enum InstructionTag {
    AddTask,
    DeleteTask,
    ToggleTask,
}

impl TryFrom<u8> for InstructionTag {
    type Error = TodoInstructionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::AddTask),
            1 => Ok(Self::DeleteTask),
            2 => Ok(Self::ToggleTask),
            _ => Err(TodoInstructionError::InvalidInstructionTag),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TodoInstruction {
    AddTask(AddTaskInstructionData),
    DeleteTask(TaskIdInstructionData),
    ToggleTask(TaskIdInstructionData),
}

impl TodoInstruction {
    pub fn add_task(content: impl Into<String>) -> Self {
        Self::AddTask(AddTaskInstructionData::new(content))
    }

    pub const fn delete_task(id: u64) -> Self {
        Self::DeleteTask(TaskIdInstructionData::new(id))
    }

    pub const fn toggle_task(id: u64) -> Self {
        Self::ToggleTask(TaskIdInstructionData::new(id))
    }

    pub const fn tag(&self) -> InstructionTag {
        match self {
            Self::AddTask(_) => InstructionTag::AddTask,
            Self::DeleteTask(_) => InstructionTag::DeleteTask,
            Self::ToggleTask(_) => InstructionTag::ToggleTask,
        }
    }

    /// The total length of the packed instruction, tag byte included.
    pub fn packed_len(&self) -> usize {
        1 + match self {
            Self::AddTask(data) => data.packed_len(),
            Self::DeleteTask(_) | Self::ToggleTask(_) => TaskIdInstructionData::LEN,
        }
    }

    /// Writes the tag byte and then delegates to the variant's encoder.
    pub fn pack(&self) -> TodoInstructionResult<Vec<u8>> {
        let mut data = Vec::with_capacity(self.packed_len());
        data.push(self.tag() as u8);
        match self {
            Self::AddTask(args) => args.pack_into(&mut data)?,
            Self::DeleteTask(args) | Self::ToggleTask(args) => args.pack_into(&mut data)?,
        }
        Ok(data)
    }

    /// Dispatches on the tag byte before interpreting the rest of `data`.
    pub fn unpack(data: &[u8]) -> TodoInstructionResult<Self> {
        let (tag, rest) = data
            .split_first()
            .ok_or(TodoInstructionError::InsufficientByteLength)?;

        match InstructionTag::try_from(*tag)? {
            InstructionTag::AddTask => AddTaskInstructionData::unpack(rest).map(Self::AddTask),
            InstructionTag::DeleteTask => TaskIdInstructionData::unpack(rest).map(Self::DeleteTask),
            InstructionTag::ToggleTask => TaskIdInstructionData::unpack(rest).map(Self::ToggleTask),
        }
    }
}

impl TryFrom<&[u8]> for TodoInstruction {
    type Error = TodoInstructionError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        Self::unpack(data)
    }
}
