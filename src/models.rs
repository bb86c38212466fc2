//! Frontend Models
//!
//! Data structures matching the REST API payloads (camelCase JSON).

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Card label used when a task has no readable creation time
pub const UNKNOWN_DATE_LABEL: &str = "—";

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u32,
    pub description: String,
    pub board_id: u32,
    pub user_id: u32,
    /// `None` when the server sent no timestamp or one we cannot read
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Short creation date shown on cards, e.g. "Jan 5", in local time
    pub fn created_label(&self) -> String {
        date_label(self.created_at, &Local)
    }
}

/// Format a timestamp as abbreviated month and day in the given zone
pub fn date_label<Tz>(at: Option<DateTime<Utc>>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match at {
        Some(at) => at.with_timezone(tz).format("%b %-d").to_string(),
        None => UNKNOWN_DATE_LABEL.to_string(),
    }
}

/// Parse RFC 3339, falling back to a naive `YYYY-MM-DD HH:MM:SS` read as UTC
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(&Utc));
    }
    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Text(String),
    Other(IgnoredAny),
}

/// One bad `createdAt` must not fail the whole board list
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawTimestamp>::deserialize(deserializer)? {
        Some(RawTimestamp::Text(raw)) => parse_timestamp(&raw),
        _ => None,
    })
}

/// Board data structure with its tasks embedded, in server order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: u32,
    pub name: String,
    pub user_id: u32,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

// ========================
// Request Bodies
// ========================

/// Blank (empty or whitespace-only) form input is never submitted
pub fn is_blank_input(text: &str) -> bool {
    text.trim().is_empty()
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBoard<'a> {
    pub name: &'a str,
    pub user_id: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask<'a> {
    pub description: &'a str,
    pub board_id: u32,
    pub user_id: u32,
}

/// Body of the task reassignment call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveTask {
    pub board_id: u32,
}

/// Response wrapper: read payloads arrive under `data`
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use serde_json::json;

    #[test]
    fn test_board_decodes_nested_tasks() {
        let body = json!({
            "data": [{
                "id": 3,
                "name": "Doing",
                "userId": 1,
                "tasks": [{
                    "id": 7,
                    "description": "Write docs",
                    "boardId": 3,
                    "userId": 1,
                    "createdAt": "2024-01-05T10:30:00.000Z"
                }]
            }]
        });

        let envelope: Envelope<Vec<Board>> = serde_json::from_value(body).unwrap();
        let boards = envelope.data.unwrap();
        assert_eq!(boards.len(), 1);
        assert_eq!(boards[0].name, "Doing");
        assert_eq!(boards[0].tasks[0].board_id, 3);
        assert_eq!(
            boards[0].tasks[0].created_at,
            Some(Utc.with_ymd_and_hms(2024, 1, 5, 10, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_board_without_tasks_is_empty() {
        let board: Board = serde_json::from_value(json!({"id": 1, "name": "Todo", "userId": 1})).unwrap();
        assert!(board.tasks.is_empty());
    }

    #[test]
    fn test_envelope_without_data() {
        let envelope: Envelope<Board> = serde_json::from_value(json!({})).unwrap();
        assert!(envelope.data.is_none());
        let envelope: Envelope<Board> = serde_json::from_value(json!({"data": null})).unwrap();
        assert!(envelope.data.is_none());
    }

    #[test]
    fn test_blank_input() {
        assert!(is_blank_input(""));
        assert!(is_blank_input("   "));
        assert!(is_blank_input("\t\n "));
        assert!(!is_blank_input(" Buy milk "));
        assert!(!is_blank_input("x"));
    }

    #[test]
    fn test_request_bodies_are_camel_case() {
        let task = NewTask { description: "Ship it", board_id: 2, user_id: 1 };
        assert_eq!(
            serde_json::to_value(&task).unwrap(),
            json!({"description": "Ship it", "boardId": 2, "userId": 1})
        );
        assert_eq!(serde_json::to_value(MoveTask { board_id: 9 }).unwrap(), json!({"boardId": 9}));
        assert_eq!(
            serde_json::to_value(NewBoard { name: "Ideas", user_id: 1 }).unwrap(),
            json!({"name": "Ideas", "userId": 1})
        );
    }

    #[test]
    fn test_created_label_has_no_padding() {
        let at = "2023-11-28T23:59:00Z".parse().ok();
        assert_eq!(date_label(at, &Utc), "Nov 28");
    }

    #[test]
    fn test_date_label_uses_the_given_zone() {
        let at = parse_timestamp("2024-01-05T23:30:00Z");
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        assert_eq!(date_label(at, &Utc), "Jan 5");
        assert_eq!(date_label(at, &tokyo), "Jan 6");
    }

    #[test]
    fn test_created_label_is_local_time() {
        let at = Utc.with_ymd_and_hms(2024, 1, 5, 23, 30, 0).unwrap();
        let task = Task { id: 1, description: String::new(), board_id: 1, user_id: 1, created_at: Some(at) };
        assert_eq!(task.created_label(), at.with_timezone(&Local).format("%b %-d").to_string());
    }

    #[test]
    fn test_bad_created_at_does_not_fail_the_list() {
        let body = json!({
            "data": [
                {"id": 1, "name": "Todo", "userId": 1, "tasks": [
                    {"id": 1, "description": "a", "boardId": 1, "userId": 1, "createdAt": "yesterday"},
                    {"id": 2, "description": "b", "boardId": 1, "userId": 1, "createdAt": 1704450000},
                    {"id": 3, "description": "c", "boardId": 1, "userId": 1}
                ]},
                {"id": 2, "name": "Done", "userId": 1, "tasks": [
                    {"id": 4, "description": "d", "boardId": 2, "userId": 1, "createdAt": null}
                ]}
            ]
        });

        let boards = serde_json::from_value::<Envelope<Vec<Board>>>(body).unwrap().data.unwrap();
        assert_eq!(boards.len(), 2);
        assert!(boards.iter().flat_map(|b| &b.tasks).all(|t| t.created_at.is_none()));
        assert_eq!(boards[0].tasks[0].created_label(), UNKNOWN_DATE_LABEL);
    }

    #[test]
    fn test_space_separated_created_at_is_read_as_utc() {
        let task: Task = serde_json::from_value(json!({
            "id": 9, "description": "x", "boardId": 1, "userId": 1,
            "createdAt": "2024-01-05 10:00:00"
        }))
        .unwrap();
        assert_eq!(task.created_at, Some(Utc.with_ymd_and_hms(2024, 1, 5, 10, 0, 0).unwrap()));
    }
}
