//! Todo 数据模型与过滤逻辑

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// 服务端返回的 Todo（canonical record）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i64,
    pub task_name: String,
    #[serde(default, deserialize_with = "wire_deadline")]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub done: bool,
}

impl Todo {
    /// 已过期：有截止时间、截止时间早于 now、且未完成
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.done && self.deadline.is_some_and(|d| d < now)
    }

    /// 该 Todo 是否出现在指定过滤视图中
    pub fn matches(&self, filter: Filter, now: DateTime<Utc>) -> bool {
        match filter {
            Filter::All => true,
            Filter::Active => !self.done && !self.is_overdue(now),
            Filter::Completed => self.done,
        }
    }

    /// 应用 PUT 请求中的字段（未出现的字段保持不变）
    pub fn apply_patch(&mut self, patch: TodoPatch) {
        if let Some(task_name) = patch.task_name {
            self.task_name = task_name;
        }
        if let Some(deadline) = patch.deadline {
            self.deadline = deadline;
        }
        if let Some(done) = patch.done {
            self.done = done;
        }
    }

    /// 切换 done 后的完整对象（PUT 请求体）
    pub fn toggled(&self) -> Todo {
        Todo {
            done: !self.done,
            ..self.clone()
        }
    }
}

/// POST /todos 请求体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub task_name: String,
    #[serde(default, deserialize_with = "wire_deadline")]
    pub deadline: Option<DateTime<Utc>>,
}

/// PUT /todos/{id} 请求体，所有字段可选
///
/// `deadline` 区分 "字段缺失"（`None`）和 "显式 null"（`Some(None)`）。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "explicit_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub deadline: Option<Option<DateTime<Utc>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
}

fn explicit_null<'de, D>(deserializer: D) -> Result<Option<Option<DateTime<Utc>>>, D::Error>
where
    D: Deserializer<'de>,
{
    wire_deadline(deserializer).map(Some)
}

/// 反序列化 ISO-8601 截止时间
///
/// 带时区偏移的按 RFC 3339 解析；不带偏移的日期时间按本地时间解析，
/// 只有日期的按 UTC 零点解析。
fn wire_deadline<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse_wire_deadline(&raw)
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

fn parse_wire_deadline(raw: &str) -> Result<DateTime<Utc>, String> {
    let raw = raw.trim();
    if let Ok(d) = DateTime::parse_from_rfc3339(raw) {
        return Ok(d.with_timezone(&Utc));
    }

    if let Some(naive) = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    {
        return Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|local| local.with_timezone(&Utc))
            .ok_or_else(|| format!("deadline '{}' does not exist in local time", raw));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| format!("invalid ISO-8601 deadline '{}'", raw))
}

/// 客户端过滤视图
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    pub fn all() -> [Filter; 3] {
        [Filter::All, Filter::Active, Filter::Completed]
    }

    pub fn next(&self) -> Filter {
        match self {
            Filter::All => Filter::Active,
            Filter::Active => Filter::Completed,
            Filter::Completed => Filter::All,
        }
    }
}

/// 按过滤器派生可见列表，保持服务端顺序
pub fn filter_todos(todos: &[Todo], filter: Filter, now: DateTime<Utc>) -> Vec<&Todo> {
    todos.iter().filter(|t| t.matches(filter, now)).collect()
}

/// "N item(s) left." 文案；N 是当前过滤视图中的数量
pub fn items_left_label(count: usize) -> String {
    format!("{} item{} left.", count, if count == 1 { "" } else { "s" })
}

/// 解析表单里输入的本地截止时间
///
/// 接受 `YYYY-MM-DD HH:MM`、`YYYY-MM-DDTHH:MM` 和 `YYYY-MM-DD`（当天 00:00）。
/// 空字符串返回 `Ok(None)`。
pub fn parse_deadline_input(input: &str) -> Result<Option<DateTime<Utc>>, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    let naive = ["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| format!("unrecognized deadline '{}'", input))?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| Some(local.with_timezone(&Utc)))
        .ok_or_else(|| format!("deadline '{}' does not exist in local time", input))
}

/// 显示用的截止时间文本
pub fn format_deadline(deadline: Option<DateTime<Utc>>) -> String {
    match deadline {
        Some(d) => format!(
            "📅 {}",
            d.with_timezone(&Local).format("%Y-%m-%d %H:%M")
        ),
        None => "📅 No deadline".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn todo(id: i64, name: &str, deadline: Option<DateTime<Utc>>, done: bool) -> Todo {
        Todo {
            id,
            task_name: name.to_string(),
            deadline,
            done,
        }
    }

    fn names(todos: &[&Todo]) -> Vec<String> {
        todos.iter().map(|t| t.task_name.clone()).collect()
    }

    #[test]
    fn test_overdue_requires_past_deadline_and_not_done() {
        let now = Utc::now();
        let past = Some(now - Duration::hours(1));
        let future = Some(now + Duration::hours(1));

        assert!(todo(1, "a", past, false).is_overdue(now));
        assert!(!todo(2, "b", past, true).is_overdue(now));
        assert!(!todo(3, "c", future, false).is_overdue(now));
        assert!(!todo(4, "d", None, false).is_overdue(now));
    }

    #[test]
    fn test_seed_fixture_filters() {
        let now = Utc::now();
        let todos = vec![
            todo(1, "Test Todo 1", None, false),
            todo(2, "Test Todo 2", Some(now - Duration::days(30)), true),
        ];

        assert_eq!(
            names(&filter_todos(&todos, Filter::All, now)),
            vec!["Test Todo 1", "Test Todo 2"]
        );
        assert_eq!(
            names(&filter_todos(&todos, Filter::Active, now)),
            vec!["Test Todo 1"]
        );
        assert_eq!(
            names(&filter_todos(&todos, Filter::Completed, now)),
            vec!["Test Todo 2"]
        );
        assert_eq!(
            items_left_label(filter_todos(&todos, Filter::All, now).len()),
            "2 items left."
        );
    }

    #[test]
    fn test_overdue_only_visible_under_all() {
        let now = Utc::now();
        let todos = vec![todo(7, "late", Some(now - Duration::minutes(5)), false)];

        assert_eq!(filter_todos(&todos, Filter::All, now).len(), 1);
        assert!(filter_todos(&todos, Filter::Active, now).is_empty());
        assert!(filter_todos(&todos, Filter::Completed, now).is_empty());
    }

    #[test]
    fn test_filter_keeps_server_order() {
        let now = Utc::now();
        let todos = vec![
            todo(30, "c", None, false),
            todo(10, "a", None, false),
            todo(20, "b", None, false),
        ];
        assert_eq!(
            names(&filter_todos(&todos, Filter::Active, now)),
            vec!["c", "a", "b"]
        );
    }

    #[test]
    fn test_items_left_label() {
        assert_eq!(items_left_label(0), "0 items left.");
        assert_eq!(items_left_label(1), "1 item left.");
        assert_eq!(items_left_label(2), "2 items left.");
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let json = r#"{"id":2,"taskName":"Test Todo 2","deadline":"2025-12-15T10:00:00.000Z","done":true}"#;
        let t: Todo = serde_json::from_str(json).unwrap();
        assert_eq!(t.id, 2);
        assert_eq!(t.task_name, "Test Todo 2");
        assert!(t.done);
        assert_eq!(
            t.deadline.unwrap(),
            Utc.with_ymd_and_hms(2025, 12, 15, 10, 0, 0).unwrap()
        );

        let value = serde_json::to_value(todo(1, "x", None, false)).unwrap();
        assert_eq!(value["taskName"], "x");
        assert!(value["deadline"].is_null());
    }

    #[test]
    fn test_deadline_without_offset_is_local_time() {
        let json = r#"[
            {"id":1,"taskName":"Test Todo 1","deadline":null,"done":false},
            {"id":2,"taskName":"Test Todo 2","deadline":"2025-12-15T10:00:00","done":true}
        ]"#;
        let todos: Vec<Todo> = serde_json::from_str(json).unwrap();
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].deadline, None);

        let expected = Local
            .with_ymd_and_hms(2025, 12, 15, 10, 0, 0)
            .earliest()
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(todos[1].deadline, Some(expected));
    }

    #[test]
    fn test_deadline_wire_forms() {
        let t: Todo = serde_json::from_str(
            r#"{"id":3,"taskName":"x","deadline":"2025-12-15T12:00:00+02:00"}"#,
        )
        .unwrap();
        assert_eq!(
            t.deadline,
            Utc.with_ymd_and_hms(2025, 12, 15, 10, 0, 0).single()
        );

        let t: Todo =
            serde_json::from_str(r#"{"id":4,"taskName":"x","deadline":"2025-12-15"}"#).unwrap();
        assert_eq!(
            t.deadline,
            Utc.with_ymd_and_hms(2025, 12, 15, 0, 0, 0).single()
        );

        let req: NewTodo =
            serde_json::from_str(r#"{"taskName":"x","deadline":"2025-12-15T10:00"}"#).unwrap();
        assert!(req.deadline.is_some());

        let patch: TodoPatch =
            serde_json::from_str(r#"{"deadline":"2025-12-15T10:00:00.000"}"#).unwrap();
        assert!(matches!(patch.deadline, Some(Some(_))));

        assert!(serde_json::from_str::<Todo>(r#"{"id":5,"taskName":"x","deadline":"soon"}"#)
            .is_err());
    }

    #[test]
    fn test_patch_distinguishes_missing_and_null_deadline() {
        let deadline = Some(Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap());

        let mut t = todo(1, "x", deadline, false);
        let patch: TodoPatch = serde_json::from_str(r#"{"done":true}"#).unwrap();
        t.apply_patch(patch);
        assert!(t.done);
        assert_eq!(t.deadline, deadline);

        let patch: TodoPatch = serde_json::from_str(r#"{"deadline":null}"#).unwrap();
        t.apply_patch(patch);
        assert_eq!(t.deadline, None);
        assert_eq!(t.task_name, "x");
    }

    #[test]
    fn test_toggled_flips_only_done() {
        let t = todo(5, "x", None, false);
        let toggled = t.toggled();
        assert!(toggled.done);
        assert_eq!(toggled.id, 5);
        assert_eq!(toggled.task_name, "x");
    }

    #[test]
    fn test_parse_deadline_input() {
        assert_eq!(parse_deadline_input("   "), Ok(None));

        let expected = Local
            .with_ymd_and_hms(2031, 3, 4, 9, 30, 0)
            .earliest()
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(parse_deadline_input("2031-03-04 09:30"), Ok(Some(expected)));
        assert_eq!(parse_deadline_input("2031-03-04T09:30"), Ok(Some(expected)));

        let midnight = Local
            .with_ymd_and_hms(2031, 3, 4, 0, 0, 0)
            .earliest()
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(parse_deadline_input("2031-03-04"), Ok(Some(midnight)));

        assert!(parse_deadline_input("next tuesday").is_err());
    }

    #[test]
    fn test_format_deadline_without_value() {
        assert_eq!(format_deadline(None), "📅 No deadline");
        assert!(format_deadline(Some(Utc::now())).starts_with("📅 "));
    }

    #[test]
    fn test_filter_cycle() {
        assert_eq!(Filter::All.next(), Filter::Active);
        assert_eq!(Filter::Active.next(), Filter::Completed);
        assert_eq!(Filter::Completed.next(), Filter::All);
    }
}
