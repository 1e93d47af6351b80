mod common;

use appstate::app::ThemeMode;
use appstate::mvi::Reducer;
use appstate::todos::{
    Language, Preferences, PreferencesPatch, TodoIntent, TodoReducer, TodoState, TodoStore,
    UserProfile,
};

fn profile() -> UserProfile {
    UserProfile {
        id: 1,
        name: "Kim".to_string(),
        email: "kim@example.com".to_string(),
        preferences: Preferences::default(),
    }
}

fn with_todos(texts: &[&str]) -> TodoState {
    texts.iter().fold(TodoState::default(), |state, text| {
        TodoReducer::reduce(
            state,
            TodoIntent::AddTodo {
                text: text.to_string(),
            },
        )
    })
}

#[test]
fn add_todo_trims_text() {
    let state = with_todos(&["  buy milk  "]);
    assert_eq!(state.todos.len(), 1);
    assert_eq!(state.todos[0].text, "buy milk");
    assert!(!state.todos[0].completed);
}

#[test]
fn toggle_flips_only_matching_todo() {
    let state = with_todos(&["a", "b"]);
    let state = TodoReducer::reduce(state, TodoIntent::ToggleTodo { id: 2 });
    assert!(!state.todos[0].completed);
    assert!(state.todos[1].completed);

    let state = TodoReducer::reduce(state, TodoIntent::ToggleTodo { id: 2 });
    assert!(!state.todos[1].completed);
}

#[test]
fn toggle_unknown_id_is_noop() {
    let state = with_todos(&["a"]);
    let next = TodoReducer::reduce(state.clone(), TodoIntent::ToggleTodo { id: 9 });
    assert_eq!(next, state);
}

#[test]
fn remove_and_clear_completed() {
    let state = with_todos(&["a", "b", "c"]);
    let state = TodoReducer::reduce(state, TodoIntent::RemoveTodo { id: 1 });
    let state = TodoReducer::reduce(state, TodoIntent::ToggleTodo { id: 3 });
    assert_eq!(state.completed(), 1);
    assert_eq!(state.remaining(), 1);

    let state = TodoReducer::reduce(state, TodoIntent::ClearCompleted);
    let texts: Vec<&str> = state.todos.iter().map(|todo| todo.text.as_str()).collect();
    assert_eq!(texts, vec!["b"]);
}

#[test]
fn ids_are_not_reused_after_removal() {
    let state = with_todos(&["a"]);
    let state = TodoReducer::reduce(state, TodoIntent::RemoveTodo { id: 1 });
    let state = TodoReducer::reduce(state, TodoIntent::AddTodo { text: "b".into() });
    assert_eq!(state.todos[0].id, 2);
}

#[test]
fn preferences_update_requires_user() {
    let patch = PreferencesPatch {
        theme: Some(ThemeMode::Dark),
        ..PreferencesPatch::default()
    };
    let state = TodoReducer::reduce(TodoState::default(), TodoIntent::UpdatePreferences(patch));
    assert_eq!(state, TodoState::default());
}

#[test]
fn preferences_patch_merges_fields() {
    let state = TodoReducer::reduce(TodoState::default(), TodoIntent::SetUser(profile()));
    let state = TodoReducer::reduce(
        state,
        TodoIntent::UpdatePreferences(PreferencesPatch {
            language: Some(Language::En),
            notifications: Some(false),
            ..PreferencesPatch::default()
        }),
    );

    let user = state.user.expect("user should be set");
    assert_eq!(user.name, "Kim");
    assert_eq!(user.preferences.theme, ThemeMode::Light);
    assert_eq!(user.preferences.language, Language::En);
    assert!(!user.preferences.notifications);
}

#[test]
fn sidebar_and_counter() {
    let state = TodoReducer::reduce(TodoState::default(), TodoIntent::ToggleSidebar);
    assert!(state.sidebar_open);
    let state = TodoReducer::reduce(state, TodoIntent::ToggleSidebar);
    assert!(!state.sidebar_open);

    let state = TodoReducer::reduce(state, TodoIntent::Increment);
    let state = TodoReducer::reduce(state, TodoIntent::Increment);
    assert_eq!(state.count, 2);
    let state = TodoReducer::reduce(state, TodoIntent::ResetCount);
    assert_eq!(state.count, 0);
}

#[test]
fn todo_store_counts_remaining_through_selector() {
    let store = TodoStore::new();
    let remaining = std::sync::Arc::new(parking_lot::Mutex::new(Vec::new()));
    let sink = std::sync::Arc::clone(&remaining);
    store.subscribe_selector(
        |state: &TodoState| state.remaining(),
        move |n: &usize| sink.lock().push(*n),
    );

    store.dispatch(TodoIntent::AddTodo { text: "a".into() });
    store.dispatch(TodoIntent::Increment);
    store.dispatch(TodoIntent::AddTodo { text: "b".into() });
    store.dispatch(TodoIntent::ToggleTodo { id: 1 });

    assert_eq!(*remaining.lock(), vec![1, 2, 1]);
}
