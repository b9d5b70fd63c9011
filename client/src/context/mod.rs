//! Stateful helpers that pair the todo program's accounts with the RPC client.

pub mod todo_list;
