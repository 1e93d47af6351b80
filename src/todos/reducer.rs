use crate::mvi::Reducer;

use super::intent::TodoIntent;
use super::state::{Todo, TodoState, UserProfile};

pub struct TodoReducer;

impl Reducer for TodoReducer {
    type State = TodoState;
    type Intent = TodoIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TodoIntent::AddTodo { text } => {
                let text = text.trim();
                if text.is_empty() {
                    return state;
                }
                state.todos.push(Todo {
                    id: state.next_id,
                    text: text.to_string(),
                    completed: false,
                });
                state.next_id += 1;
                state
            }
            TodoIntent::ToggleTodo { id } => {
                if let Some(todo) = state.todos.iter_mut().find(|todo| todo.id == id) {
                    todo.completed = !todo.completed;
                }
                state
            }
            TodoIntent::RemoveTodo { id } => {
                state.todos.retain(|todo| todo.id != id);
                state
            }
            TodoIntent::ClearCompleted => {
                state.todos.retain(|todo| !todo.completed);
                state
            }
            TodoIntent::SetUser(profile) => TodoState {
                user: Some(profile),
                ..state
            },
            TodoIntent::UpdatePreferences(patch) => {
                if let Some(user) = state.user.take() {
                    state.user = Some(UserProfile {
                        preferences: user.preferences.apply(patch),
                        ..user
                    });
                }
                state
            }
            TodoIntent::ToggleSidebar => TodoState {
                sidebar_open: !state.sidebar_open,
                ..state
            },
            TodoIntent::Increment => TodoState {
                count: state.count + 1,
                ..state
            },
            TodoIntent::Decrement => TodoState {
                count: state.count - 1,
                ..state
            },
            TodoIntent::ResetCount => TodoState { count: 0, ..state },
        }
    }
}
