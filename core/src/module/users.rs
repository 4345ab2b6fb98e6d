//! User module: server-confirmed CRUD over reducer state.
//!
//! Create, update, and delete go to the remote API first; local state is
//! reconciled from the server's response, so the list always reflects
//! server-acknowledged records. On failure the state is left untouched —
//! including the stale form buffer, which is only cleared by a successful
//! submit.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::http::HttpTransport;
use crate::state::users::{reduce, UserAction, UserField, UserState};
use crate::types::User;

pub struct UserModule<T> {
    client: ApiClient,
    transport: T,
    state: UserState,
}

impl<T: HttpTransport> UserModule<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            client: ApiClient::new(base_url),
            transport,
            state: UserState::new(),
        }
    }

    pub fn state(&self) -> &UserState {
        &self.state
    }

    /// One-shot initial load. Success replaces the whole list; failure logs
    /// and leaves the list empty. No retry.
    pub fn fetch_initial(&mut self) -> Result<(), ApiError> {
        let request = self.client.build_list_users();
        let result = self
            .transport
            .send(&request)
            .and_then(|response| self.client.parse_list_users(response));
        match result {
            Ok(users) => {
                self.dispatch(UserAction::SetUsers(users));
                Ok(())
            }
            Err(err) => {
                tracing::error!("failed to fetch users: {err}");
                Err(err)
            }
        }
    }

    /// Merge one field into the form buffer. No validation.
    pub fn set_field(&mut self, field: UserField, value: &str) {
        self.dispatch(UserAction::SetField {
            field,
            value: value.to_string(),
        });
    }

    /// Load a record into the form and select it for editing.
    pub fn select_for_edit(&mut self, user: User) {
        self.dispatch(UserAction::SetEdit(user));
    }

    /// Send the form to the server: PUT to the selected record, or POST a
    /// new one. The local list picks up the server's returned representation
    /// and the form clears — only on success.
    pub fn submit(&mut self) -> Result<(), ApiError> {
        let form = self.state.form.clone();
        let outcome = match self.state.selected {
            Some(id) => self
                .client
                .build_update_user(id, &form)
                .and_then(|request| self.transport.send(&request))
                .and_then(|response| self.client.parse_update_user(response))
                .map(UserAction::Update),
            None => self
                .client
                .build_create_user(&form)
                .and_then(|request| self.transport.send(&request))
                .and_then(|response| self.client.parse_create_user(response))
                .map(UserAction::Add),
        };
        match outcome {
            Ok(action) => {
                self.dispatch(action);
                self.dispatch(UserAction::ClearForm);
                Ok(())
            }
            Err(err) => {
                let verb = if self.state.selected.is_some() { "update" } else { "add" };
                tracing::warn!("failed to {verb} user: {err}");
                Err(err)
            }
        }
    }

    /// Delete on the server, then drop the record locally. Nothing is
    /// removed optimistically, so a failure needs no rollback.
    pub fn remove(&mut self, id: i64) -> Result<(), ApiError> {
        let request = self.client.build_delete_user(id);
        let result = self
            .transport
            .send(&request)
            .and_then(|response| self.client.parse_delete_user(response));
        match result {
            Ok(()) => {
                self.dispatch(UserAction::Remove(id));
                Ok(())
            }
            Err(err) => {
                tracing::warn!("failed to delete user: {err}");
                Err(err)
            }
        }
    }

    fn dispatch(&mut self, action: UserAction) {
        self.state = reduce(std::mem::take(&mut self.state), action);
    }
}
