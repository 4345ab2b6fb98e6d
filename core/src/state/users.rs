//! User table state: the record list, the form buffer, and the selection.

use crate::types::{User, UserForm};

/// A single field of the user form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Name,
    Username,
    Email,
}

/// State for the user module.
///
/// `selected` holds the id of the record currently loaded into the form for
/// editing. Invariant: at most one record is selected; clearing the form
/// also clears the selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserState {
    pub users: Vec<User>,
    pub form: UserForm,
    pub selected: Option<i64>,
}

impl UserState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// State transitions for the user module.
#[derive(Debug, Clone)]
pub enum UserAction {
    /// Replace the whole list (initial fetch).
    SetUsers(Vec<User>),
    /// Load a record into the form and select its id.
    SetEdit(User),
    /// Merge one field into the form buffer. No validation.
    SetField { field: UserField, value: String },
    /// Reset the form to empty and drop the selection.
    ClearForm,
    /// Append a server-acknowledged record.
    Add(User),
    /// Replace the record with a matching id; no-op when absent.
    Update(User),
    /// Drop the record with this id; no-op when absent.
    Remove(i64),
}

pub fn reduce(mut state: UserState, action: UserAction) -> UserState {
    match action {
        UserAction::SetUsers(users) => state.users = users,
        UserAction::SetEdit(user) => {
            state.form = UserForm::from(&user);
            state.selected = Some(user.id);
        }
        UserAction::SetField { field, value } => match field {
            UserField::Name => state.form.name = value,
            UserField::Username => state.form.username = value,
            UserField::Email => state.form.email = value,
        },
        UserAction::ClearForm => {
            state.form = UserForm::default();
            state.selected = None;
        }
        UserAction::Add(user) => state.users.push(user),
        UserAction::Update(user) => {
            if let Some(slot) = state.users.iter_mut().find(|u| u.id == user.id) {
                *slot = user;
            }
        }
        UserAction::Remove(id) => state.users.retain(|u| u.id != id),
    }
    state
}
