//! Todo module: client-authoritative CRUD over reducer state.
//!
//! Only the initial fetch touches the network. Add, update, and remove
//! mutate local state and are never sent to a server, so the list diverges
//! from the seed data as soon as the user edits it.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::http::HttpTransport;
use crate::state::todo::{reduce, TodoAction, TodoState};
use crate::types::TodoItem;

pub struct TodoModule<T> {
    client: ApiClient,
    transport: T,
    state: TodoState,
}

impl<T: HttpTransport> TodoModule<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            client: ApiClient::new(base_url),
            transport,
            state: TodoState::new(),
        }
    }

    pub fn state(&self) -> &TodoState {
        &self.state
    }

    /// One-shot initial load. Success replaces the whole list; failure logs
    /// and leaves the list empty. No retry.
    pub fn fetch_initial(&mut self) -> Result<(), ApiError> {
        let request = self.client.build_list_todos();
        let result = self
            .transport
            .send(&request)
            .and_then(|response| self.client.parse_list_todos(response));
        match result {
            Ok(todos) => {
                self.dispatch(TodoAction::SetTodos(todos));
                Ok(())
            }
            Err(err) => {
                tracing::error!("failed to fetch todos: {err}");
                Err(err)
            }
        }
    }

    pub fn set_input(&mut self, value: &str) {
        self.dispatch(TodoAction::SetInput(value.to_string()));
    }

    /// Commit the input buffer: with an edit target set, replace the matching
    /// item and leave editing mode; otherwise append a new item with a
    /// timestamp id. Timestamp ids can collide within one millisecond.
    pub fn submit(&mut self) {
        let text = self.state.input.clone();
        match self.state.edit_target {
            Some(id) => {
                self.dispatch(TodoAction::Update(TodoItem {
                    id,
                    text,
                    title: None,
                }));
                self.dispatch(TodoAction::SetEditTarget(None));
            }
            None => {
                self.dispatch(TodoAction::Add(TodoItem {
                    id: timestamp_id(),
                    text,
                    title: None,
                }));
            }
        }
    }

    /// Load an item's text into the input buffer and mark it as the edit
    /// target. Unknown ids are a no-op.
    pub fn edit(&mut self, id: i64) {
        let Some(todo) = self.state.todos.iter().find(|t| t.id == id) else {
            return;
        };
        let text = todo.text.clone();
        self.dispatch(TodoAction::SetInput(text));
        self.dispatch(TodoAction::SetEditTarget(Some(id)));
    }

    pub fn remove(&mut self, id: i64) {
        self.dispatch(TodoAction::Remove(id));
    }

    fn dispatch(&mut self, action: TodoAction) {
        self.state = reduce(std::mem::take(&mut self.state), action);
    }
}

fn timestamp_id() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::test_support::ScriptedTransport;

    const SEED: &str = r#"[{"userId":1,"id":1,"title":"delectus aut autem","completed":false}]"#;

    fn fetched() -> TodoModule<ScriptedTransport> {
        let transport = ScriptedTransport::new(vec![ScriptedTransport::ok(200, SEED)]);
        let mut module = TodoModule::new("http://localhost:3000", transport);
        module.fetch_initial().unwrap();
        module
    }

    #[test]
    fn fetch_initial_replaces_the_list() {
        let module = fetched();
        assert_eq!(module.state().todos.len(), 1);
        assert_eq!(module.state().todos[0].id, 1);
        assert_eq!(module.state().todos[0].title.as_deref(), Some("delectus aut autem"));
        assert!(module.state().input.is_empty());
    }

    #[test]
    fn fetch_initial_failure_leaves_list_empty() {
        let transport = ScriptedTransport::new(vec![Err(ApiError::Transport(
            "connection refused".to_string(),
        ))]);
        let mut module = TodoModule::new("http://localhost:3000", transport);
        let err = module.fetch_initial().unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        assert!(module.state().todos.is_empty());
    }

    #[test]
    fn submit_without_edit_target_appends_and_clears_input() {
        let mut module = fetched();
        module.set_input("B");
        module.submit();

        let state = module.state();
        assert_eq!(state.todos.len(), 2);
        assert_eq!(state.todos[0].title.as_deref(), Some("delectus aut autem"));
        assert_eq!(state.todos[1].text, "B");
        assert!(state.todos[1].id > 1, "local ids come from the clock");
        assert!(state.input.is_empty());
        assert_eq!(state.edit_target, None);
    }

    #[test]
    fn edit_then_submit_replaces_only_that_item() {
        let mut module = fetched();
        module.set_input("first");
        module.submit();
        let first_id = module.state().todos[1].id;

        module.edit(1);
        assert_eq!(module.state().edit_target, Some(1));

        module.set_input("rewritten");
        module.submit();

        let state = module.state();
        assert_eq!(state.todos.len(), 2);
        assert_eq!(state.todos[0].text, "rewritten");
        assert_eq!(state.todos[1].id, first_id);
        assert_eq!(state.todos[1].text, "first");
        assert_eq!(state.edit_target, None);
    }

    #[test]
    fn edit_copies_text_into_input() {
        let mut module = fetched();
        module.set_input("note");
        module.submit();
        let id = module.state().todos[1].id;

        module.edit(id);
        assert_eq!(module.state().input, "note");
        assert_eq!(module.state().edit_target, Some(id));
    }

    #[test]
    fn edit_unknown_id_is_a_noop() {
        let mut module = fetched();
        module.set_input("keep");
        module.edit(999);
        assert_eq!(module.state().input, "keep");
        assert_eq!(module.state().edit_target, None);
    }

    #[test]
    fn remove_is_local_only() {
        let transport = ScriptedTransport::new(vec![ScriptedTransport::ok(200, SEED)]);
        let log = transport.request_log();
        let mut module = TodoModule::new("http://localhost:3000", transport);
        module.fetch_initial().unwrap();

        module.remove(1);
        assert!(module.state().todos.is_empty());
        // only the initial fetch went over the wire
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn remove_unknown_id_leaves_list_unchanged() {
        let mut module = fetched();
        module.remove(999);
        assert_eq!(module.state().todos.len(), 1);
    }
}
