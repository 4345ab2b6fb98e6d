//! Reducer-managed state for the two dashboard modules.
//!
//! # Design
//! Each module owns a state struct, an action enum, and a pure `reduce`
//! function `(state, action) -> state`. All mutation flows through `reduce`;
//! the module controllers only dispatch actions. Fresh state comes from
//! `State::new()` per instance — there is no shared initial-state value.

pub mod todo;
pub mod users;
