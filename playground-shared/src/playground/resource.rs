//! Helpers for the resource demo: the local todo rows and display trimming.

use crate::models::{NewTodo, Todo};

/// Owner of todos created from the demo.
pub const DEMO_TODO_OWNER: u32 = 1;

/// Characters of a todo title shown before it is cut off.
pub const TITLE_PREVIEW_CHARS: usize = 40;

/// A todo shown in the demo list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRow {
    pub todo: Todo,
    /// False for rows the host only echoed back and never stored.
    pub synced: bool,
}

/// Wrap a fetched batch; every row is known to the host.
#[must_use]
pub fn rows_from_fetch(todos: Vec<Todo>) -> Vec<TodoRow> {
    todos
        .into_iter()
        .map(|todo| TodoRow { todo, synced: true })
        .collect()
}

/// Append a freshly created todo as an unsynced row.
///
/// The demo host answers every create with the same id, so a clashing id is
/// replaced with one past the largest in the list. Returns the id the row
/// ended up with.
pub fn append_created(rows: &mut Vec<TodoRow>, mut created: Todo) -> u32 {
    if rows.iter().any(|row| row.todo.id == created.id) {
        created.id = rows
            .iter()
            .map(|row| row.todo.id)
            .max()
            .map_or(1, |max| max.saturating_add(1));
    }
    let id = created.id;
    rows.push(TodoRow {
        todo: created,
        synced: false,
    });
    id
}

/// Flip `completed` on the row at `index`, in place, and return it.
/// Out-of-range indices are ignored.
pub fn toggle_at(rows: &mut [TodoRow], index: usize) -> Option<&TodoRow> {
    let row = rows.get_mut(index)?;
    row.todo.completed = !row.todo.completed;
    Some(row)
}

/// Draft for the next todo appended to a list of `existing` entries.
#[must_use]
pub fn draft_todo(existing: usize) -> NewTodo {
    NewTodo {
        user_id: DEMO_TODO_OWNER,
        title: format!("New todo #{}", existing + 1),
        completed: false,
    }
}

/// First [`TITLE_PREVIEW_CHARS`] characters followed by `...`.
#[must_use]
pub fn title_preview(title: &str) -> String {
    let head: String = title.chars().take(TITLE_PREVIEW_CHARS).collect();
    format!("{head}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todos() -> Vec<Todo> {
        vec![
            Todo {
                id: 1,
                user_id: 1,
                title: "delectus aut autem".to_string(),
                completed: false,
            },
            Todo {
                id: 2,
                user_id: 1,
                title: "quis ut nam facilis et officia qui".to_string(),
                completed: true,
            },
        ]
    }

    fn created(title: &str) -> Todo {
        Todo {
            id: 201,
            user_id: DEMO_TODO_OWNER,
            title: title.to_string(),
            completed: false,
        }
    }

    #[test]
    fn toggle_flips_only_the_target() {
        let mut rows = rows_from_fetch(todos());
        let toggled = toggle_at(&mut rows, 0).cloned();
        assert_eq!(toggled.map(|row| row.todo.completed), Some(true));
        assert!(rows[0].todo.completed);
        assert!(rows[1].todo.completed);
    }

    #[test]
    fn toggle_out_of_range_is_a_no_op() {
        let mut rows = rows_from_fetch(todos());
        assert!(toggle_at(&mut rows, 42).is_none());
        assert_eq!(rows, rows_from_fetch(todos()));
    }

    #[test]
    fn fetched_rows_are_synced() {
        assert!(rows_from_fetch(todos()).iter().all(|row| row.synced));
    }

    #[test]
    fn echoed_ids_are_made_unique() {
        let mut rows = rows_from_fetch(todos());
        assert_eq!(append_created(&mut rows, created("first")), 201);
        assert_eq!(append_created(&mut rows, created("second")), 202);

        let ids: Vec<u32> = rows.iter().map(|row| row.todo.id).collect();
        assert_eq!(ids, vec![1, 2, 201, 202]);
        assert!(!rows[2].synced);
        assert!(!rows[3].synced);
    }

    #[test]
    fn toggling_the_second_created_row_leaves_the_first() {
        let mut rows = Vec::new();
        append_created(&mut rows, created("first"));
        append_created(&mut rows, created("second"));

        let toggled = toggle_at(&mut rows, 1).cloned();
        assert_eq!(toggled.map(|row| row.todo.title), Some("second".to_string()));
        assert!(!rows[0].todo.completed);
        assert!(rows[1].todo.completed);
    }

    #[test]
    fn draft_is_numbered_after_the_existing_entries() {
        let draft = draft_todo(5);
        assert_eq!(draft.title, "New todo #6");
        assert_eq!(draft.user_id, DEMO_TODO_OWNER);
        assert!(!draft.completed);
    }

    #[test]
    fn preview_cuts_on_char_boundaries() {
        let long = "é".repeat(50);
        let preview = title_preview(&long);
        assert_eq!(preview.chars().count(), TITLE_PREVIEW_CHARS + 3);
        assert_eq!(title_preview("short"), "short...");
    }
}
