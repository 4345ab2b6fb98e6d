//! Todo list state: an item list, the input buffer, and the edit target.

use crate::types::TodoItem;

/// State for the todo module.
///
/// `todos` keeps insertion order with unique ids. `edit_target` holds the id
/// of the item currently loaded into the input buffer, or `None` when the
/// buffer is composing a new item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoState {
    pub todos: Vec<TodoItem>,
    pub input: String,
    pub edit_target: Option<i64>,
}

impl TodoState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// State transitions for the todo module.
#[derive(Debug, Clone)]
pub enum TodoAction {
    /// Replace the input buffer.
    SetInput(String),
    /// Replace the whole list (initial fetch).
    SetTodos(Vec<TodoItem>),
    /// Append an item and clear the input buffer.
    Add(TodoItem),
    /// Replace the item with a matching id; no-op when absent. The input
    /// buffer is left as-is.
    Update(TodoItem),
    /// Drop the item with this id; no-op when absent.
    Remove(i64),
    /// Set or clear the edit target.
    SetEditTarget(Option<i64>),
}

pub fn reduce(mut state: TodoState, action: TodoAction) -> TodoState {
    match action {
        TodoAction::SetInput(value) => state.input = value,
        TodoAction::SetTodos(todos) => state.todos = todos,
        TodoAction::Add(todo) => {
            state.todos.push(todo);
            state.input.clear();
        }
        TodoAction::Update(todo) => {
            if let Some(slot) = state.todos.iter_mut().find(|t| t.id == todo.id) {
                *slot = todo;
            }
        }
        TodoAction::Remove(id) => state.todos.retain(|t| t.id != id),
        TodoAction::SetEditTarget(target) => state.edit_target = target,
    }
    state
}
