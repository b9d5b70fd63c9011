#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[repr(u8)]
pub enum TodoInstructionError {
    InvalidInstructionTag,
    InsufficientByteLength,
    InvalidInstructionData,
    SerializationFailed,
}

impl From<TodoInstructionError> for &'static str {
    fn from(value: TodoInstructionError) -> Self {
        match value {
            TodoInstructionError::InvalidInstructionTag => "Invalid instruction tag",
            TodoInstructionError::InsufficientByteLength => "Not enough bytes passed",
            TodoInstructionError::InvalidInstructionData => "Malformed instruction data",
            TodoInstructionError::SerializationFailed => "Instruction data couldn't be serialized",
        }
    }
}

impl core::fmt::Display for TodoInstructionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg: &'static str = (*self).into();
        write!(f, "{msg}")
    }
}

impl std::error::Error for TodoInstructionError {}

pub type TodoInstructionResult<T> = Result<T, TodoInstructionError>;

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::TodoInstructionError;

    #[test]
    fn error_messages_are_distinct() {
        let messages: Vec<&'static str> = TodoInstructionError::iter().map(Into::into).collect();
        for (i, msg) in messages.iter().enumerate() {
            assert!(!msg.is_empty());
            assert!(!messages[i + 1..].contains(msg));
        }
    }

    #[test]
    fn display_matches_static_str() {
        let error = TodoInstructionError::InvalidInstructionTag;
        assert_eq!(error.to_string(), "Invalid instruction tag");
    }
}
