//! Records returned by the JSONPlaceholder demo API.
//!
//! These are taken verbatim from the wire; nothing is validated beyond shape.

use serde::{Deserialize, Serialize};

/// A team member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u32,
    pub user_id: u32,
    pub title: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u32,
    pub user_id: u32,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u32,
    pub post_id: u32,
    pub name: String,
    pub email: String,
    pub body: String,
}

/// Payload for creating a todo; the server assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub user_id: u32,
    pub title: String,
    pub completed: bool,
}

/// Partial update for a todo. Unset fields are left out of the request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TodoPatch {
    #[must_use]
    pub fn completed(value: bool) -> Self {
        Self {
            completed: Some(value),
            ..Self::default()
        }
    }
}

/// Number of todos marked done.
#[must_use]
pub fn completed_count(todos: &[Todo]) -> usize {
    todos.iter().filter(|todo| todo.completed).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_reads_camel_case_fields() {
        let json = r#"{"userId":1,"id":3,"title":"fugiat veniam minus","completed":false}"#;
        let todo: Todo = serde_json::from_str(json).unwrap();
        assert_eq!(todo.user_id, 1);
        assert_eq!(todo.id, 3);
        assert!(!todo.completed);
    }

    #[test]
    fn comment_reads_post_id() {
        let json = r#"{"postId":1,"id":2,"name":"quo vero","email":"Jayne_Kuhic@sydney.com","body":"est"}"#;
        let comment: Comment = serde_json::from_str(json).unwrap();
        assert_eq!(comment.post_id, 1);
        assert_eq!(comment.email, "Jayne_Kuhic@sydney.com");
    }

    #[test]
    fn user_ignores_extra_fields() {
        let json = r#"{"id":1,"name":"Leanne Graham","username":"Bret","email":"Sincere@april.biz","phone":"1-770"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.username, "Bret");
    }

    #[test]
    fn patch_serializes_only_set_fields() {
        let json = serde_json::to_string(&TodoPatch::completed(true)).unwrap();
        assert_eq!(json, r#"{"completed":true}"#);
        assert_eq!(serde_json::to_string(&TodoPatch::default()).unwrap(), "{}");
    }

    #[test]
    fn new_todo_uses_wire_names() {
        let json = serde_json::to_string(&NewTodo {
            user_id: 4,
            title: "write docs".to_string(),
            completed: false,
        })
        .unwrap();
        assert!(json.contains("\"userId\":4"));
        assert!(!json.contains("\"id\""));
    }

    #[test]
    fn counts_completed_todos() {
        let todos: Vec<Todo> = (1..=5)
            .map(|id| Todo {
                id,
                user_id: 1,
                title: format!("todo {id}"),
                completed: id % 2 == 0,
            })
            .collect();
        assert_eq!(completed_count(&todos), 2);
        assert_eq!(completed_count(&[]), 0);
    }
}
