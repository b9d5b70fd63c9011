//! Instruction encoding for the on-chain todo program.

pub mod error;
pub mod instructions;

pub mod program {
    use solana_sdk::pubkey::Pubkey;

    /// The address the todo program is deployed at.
    pub const ID: Pubkey = Pubkey::from_str_const("H1V7y7UgVdFovs7gdbCo4KtsH95LYAiE46Yz1Wvki6fa");
}
