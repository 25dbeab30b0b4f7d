use chrono::{DateTime, Local, NaiveDate};
use serde::Serialize;

use crate::model::entity::{Entity, Project, ProjectStatus};
use crate::model::focus::{FocusConfig, RmiFocus};
use crate::model::idea::{Idea, IdeaStatus};
use crate::model::notification::{AppNotification, NotificationKind};
use crate::model::sop::{Sop, SopStatus};
use crate::model::task::{Priority, RecurringInterval, Status, Task};
use crate::model::user::AppUser;
use crate::ops::dashboard::Dashboard;
use crate::ops::registry::Registry;
use crate::ops::task_ops::compute_progress;
use crate::util::text::fit_to_width;
use crate::views::EntityFilter;
use crate::views::calendar::{CalendarCell, CalendarMonth, ItemKind};
use crate::views::kanban::KanbanColumn;
use crate::views::table::TableRow;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson<'a> {
    #[serde(flatten)]
    pub task: &'a Task,
    pub progress: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<&'a str>,
}

#[derive(Serialize)]
pub struct ColumnJson<'a> {
    pub status: Status,
    pub tasks: Vec<TaskJson<'a>>,
}

#[derive(Serialize)]
pub struct CalendarJson<'a> {
    pub month: String,
    pub cells: Vec<CellJson<'a>>,
}

#[derive(Serialize)]
pub struct CellJson<'a> {
    pub day: Option<u32>,
    pub items: Vec<CalendarItemJson<'a>>,
}

#[derive(Serialize)]
pub struct CalendarItemJson<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub kind: &'static str,
    pub status: Status,
    pub focus: RmiFocus,
    /// Task opened when the item is selected
    pub task_id: &'a str,
}

#[derive(Serialize)]
pub struct IdeaJson<'a> {
    #[serde(flatten)]
    pub idea: &'a Idea,
    pub ice_score: u32,
}

#[derive(Serialize)]
pub struct NotificationJson<'a> {
    #[serde(flatten)]
    pub notification: &'a AppNotification,
    pub age: String,
}

#[derive(Serialize)]
pub struct DashboardJson<'a> {
    pub focus_mix: Vec<FocusShareJson>,
    pub overdue: Vec<&'a str>,
    pub due_today: Vec<&'a str>,
    pub entities: Vec<EntityStatsJson<'a>>,
    pub top_ideas: Vec<IdeaJson<'a>>,
    pub unread_notifications: usize,
}

#[derive(Serialize)]
pub struct FocusShareJson {
    pub focus: RmiFocus,
    pub count: usize,
    pub percentage: u8,
}

#[derive(Serialize)]
pub struct EntityStatsJson<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub tasks: usize,
    pub completed: usize,
}

#[derive(Serialize)]
pub struct ProjectJson<'a> {
    #[serde(flatten)]
    pub project: &'a Project,
    pub tasks: usize,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn task_to_json<'a>(task: &'a Task, registry: &'a Registry) -> TaskJson<'a> {
    TaskJson {
        task,
        progress: compute_progress(task),
        entity_id: registry.entity_for_task(task).map(|e| e.id.as_str()),
    }
}

pub fn board_to_json<'a>(columns: &[KanbanColumn<'a>], registry: &'a Registry) -> Vec<ColumnJson<'a>> {
    columns
        .iter()
        .map(|col| ColumnJson {
            status: col.status,
            tasks: col.cards.iter().map(|&t| task_to_json(t, registry)).collect(),
        })
        .collect()
}

pub fn calendar_to_json<'a>(month: CalendarMonth, cells: &[CalendarCell<'a>]) -> CalendarJson<'a> {
    CalendarJson {
        month: format!("{:04}-{:02}", month.year(), month.month()),
        cells: cells
            .iter()
            .map(|cell| CellJson {
                day: cell.day,
                items: cell
                    .items
                    .iter()
                    .map(|item| CalendarItemJson {
                        id: item.id,
                        title: item.title,
                        kind: match item.kind {
                            ItemKind::Task => "task",
                            ItemKind::Subtask => "subtask",
                        },
                        status: item.status,
                        focus: item.focus,
                        task_id: &item.task.id,
                    })
                    .collect(),
            })
            .collect(),
    }
}

pub fn idea_to_json(idea: &Idea) -> IdeaJson<'_> {
    IdeaJson {
        idea,
        ice_score: idea.ice_score(),
    }
}

pub fn notification_to_json(n: &AppNotification, now: DateTime<Local>) -> NotificationJson<'_> {
    NotificationJson {
        notification: n,
        age: n.age_label(now),
    }
}

pub fn dashboard_to_json<'a>(dash: &Dashboard<'a>, unread: usize) -> DashboardJson<'a> {
    DashboardJson {
        focus_mix: dash
            .focus_mix
            .iter()
            .map(|s| FocusShareJson {
                focus: s.focus,
                count: s.count,
                percentage: s.percentage,
            })
            .collect(),
        overdue: dash.overdue.iter().map(|&t| t.id.as_str()).collect(),
        due_today: dash.due_today.iter().map(|&t| t.id.as_str()).collect(),
        entities: dash
            .entities
            .iter()
            .map(|e| EntityStatsJson {
                id: e.entity.id.as_str(),
                name: e.entity.name.as_str(),
                tasks: e.tasks,
                completed: e.completed,
            })
            .collect(),
        top_ideas: dash.top_ideas.iter().map(|&i| idea_to_json(i)).collect(),
        unread_notifications: unread,
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

fn status_char(status: Status) -> char {
    match status {
        Status::ToDo => ' ',
        Status::InProgress => '>',
        Status::Completed => 'x',
    }
}

/// Format a single task as a one-line summary
pub fn format_task_line(task: &Task) -> String {
    let recurring = if task.is_recurring {
        format!(" ↻{}", task.recurring_interval)
    } else {
        String::new()
    };
    format!(
        "[{}] {} {} ({}, {}, due {}){}",
        status_char(task.status),
        task.id,
        task.title,
        task.priority,
        task.assignee,
        task.due_date,
        recurring
    )
}

/// Format the kanban board, one section per status column
pub fn format_board(columns: &[KanbanColumn<'_>]) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, col) in columns.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.push(format!("== {} ({}) ==", col.status, col.cards.len()));
        for task in &col.cards {
            lines.push(format_task_line(task));
        }
    }
    lines
}

const TABLE_COLUMNS: [(&str, usize); 7] = [
    ("ID", 6),
    ("TITLE", 30),
    ("ENTITY", 12),
    ("STATUS", 11),
    ("PRIORITY", 8),
    ("DUE", 10),
    ("DONE", 4),
];

fn table_line(cells: [&str; 7]) -> String {
    let parts: Vec<String> = cells
        .iter()
        .zip(TABLE_COLUMNS)
        .map(|(cell, (_, width))| fit_to_width(cell, width))
        .collect();
    parts.join("  ").trim_end().to_string()
}

/// Format the flat task table with fixed-width columns
pub fn format_table(rows: &[TableRow<'_>]) -> Vec<String> {
    let mut lines = vec![table_line(TABLE_COLUMNS.map(|(h, _)| h))];
    for row in rows {
        let status = row.task.status.to_string();
        let priority = row.task.priority.to_string();
        let due = row.task.due_date.to_string();
        let progress = format!("{}%", row.progress);
        let entity = row.entity.map(|e| e.name.as_str()).unwrap_or("-");
        lines.push(table_line([
            row.task.id.as_str(),
            row.task.title.as_str(),
            entity,
            status.as_str(),
            priority.as_str(),
            due.as_str(),
            progress.as_str(),
        ]));
    }
    lines
}

/// Format detailed task view
pub fn format_task_detail(task: &Task, registry: &Registry, sop: Option<&Sop>) -> Vec<String> {
    let mut lines = vec![format!("[{}] {} {}", status_char(task.status), task.id, task.title)];

    let project = registry
        .project(&task.project_id)
        .map(|p| format!("{} ({})", p.name, p.id))
        .unwrap_or_else(|| format!("{} (unknown)", task.project_id));
    lines.push(format!("project: {}", project));
    if let Some(entity) = registry.entity_for_task(task) {
        lines.push(format!("entity: {}", entity.name));
    }
    lines.push(format!("focus: {}", task.focus));
    lines.push(format!("status: {}", task.status));
    lines.push(format!("priority: {}", task.priority));
    lines.push(format!("assignee: {}", task.assignee));
    lines.push(format!("due: {}", task.due_date));
    if task.is_recurring {
        lines.push(format!("recurring: {}", task.recurring_interval));
    }
    match (&task.sop_id, sop) {
        (Some(_), Some(sop)) => lines.push(format!("sop: {} ({})", sop.title, sop.id)),
        (Some(id), None) => lines.push(format!("sop: {} (not found)", id)),
        _ => {}
    }
    lines.push(format!("progress: {}%", compute_progress(task)));

    if !task.description.is_empty() {
        lines.push("description:".to_string());
        for line in task.description.lines() {
            lines.push(format!("  {}", line));
        }
    }

    if !task.subtasks.is_empty() {
        lines.push(String::new());
        lines.push("subtasks:".to_string());
        for sub in &task.subtasks {
            let title = if sub.title.is_empty() { "(untitled)" } else { &sub.title };
            lines.push(format!(
                "  [{}] {} {} ({}, due {})",
                status_char(sub.status),
                sub.id,
                title,
                sub.assignee,
                sub.due_date
            ));
        }
    }

    if !task.comments.is_empty() {
        lines.push(String::new());
        lines.push("comments:".to_string());
        for c in &task.comments {
            lines.push(format!(
                "  {} {}: {}",
                c.timestamp.format("%Y-%m-%d %H:%M"),
                c.author_name,
                c.text
            ));
        }
    }

    if !task.attachments.is_empty() {
        lines.push(String::new());
        lines.push("attachments:".to_string());
        for a in &task.attachments {
            lines.push(format!("  {} {} [{}, {}]", a.id, a.name, a.kind, a.size));
        }
    }

    lines
}

/// Format the month grid followed by the items of each day
pub fn format_calendar(month: CalendarMonth, cells: &[CalendarCell<'_>]) -> Vec<String> {
    let mut lines = vec![month.label(), " Su  Mo  Tu  We  Th  Fr  Sa".to_string()];
    for week in cells.chunks(7) {
        let row: String = week
            .iter()
            .map(|cell| match cell.day {
                Some(d) => {
                    let mark = if cell.items.is_empty() { ' ' } else { '*' };
                    format!("{:>3}{}", d, mark)
                }
                None => "    ".to_string(),
            })
            .collect();
        let row = row.trim_end();
        if !row.is_empty() {
            lines.push(row.to_string());
        }
    }

    let busy: Vec<&CalendarCell<'_>> = cells.iter().filter(|c| !c.items.is_empty()).collect();
    if !busy.is_empty() {
        lines.push(String::new());
    }
    for cell in busy {
        let Some(day) = cell.day else { continue };
        for item in &cell.items {
            let kind = match item.kind {
                ItemKind::Task => String::new(),
                ItemKind::Subtask => format!(" (subtask of {})", item.open_target()),
            };
            lines.push(format!(
                "{:04}-{:02}-{:02}  [{}] {} {}{}",
                month.year(),
                month.month(),
                day,
                status_char(item.status),
                item.id,
                item.title,
                kind
            ));
        }
    }
    lines
}

/// Format ranked ideas, best first
pub fn format_ideas(ranked: &[&Idea]) -> Vec<String> {
    ranked
        .iter()
        .enumerate()
        .map(|(i, idea)| {
            format!(
                "{}. {} {} [ICE {} = {}×{}×{}] ({})",
                i + 1,
                idea.id,
                idea.title,
                idea.ice_score(),
                idea.impact,
                idea.confidence,
                idea.ease,
                idea.status
            )
        })
        .collect()
}

pub fn format_sop_line(sop: &Sop) -> String {
    format!(
        "{} {} [{}] {} (updated {})",
        sop.id, sop.title, sop.focus, sop.status, sop.last_updated
    )
}

pub fn format_sop_detail(sop: &Sop, registry: &Registry) -> Vec<String> {
    let mut lines = vec![format!("{} {}", sop.id, sop.title)];
    let entity = registry
        .entity(&sop.entity_id)
        .map(|e| e.name.as_str())
        .unwrap_or(&sop.entity_id);
    lines.push(format!("entity: {}", entity));
    lines.push(format!("focus: {}", sop.focus));
    lines.push(format!("status: {}", sop.status));
    lines.push(format!("updated: {}", sop.last_updated));
    if !sop.description.is_empty() {
        lines.push(format!("description: {}", sop.description));
    }
    if !sop.content.is_empty() {
        lines.push(String::new());
        lines.extend(sop.content.lines().map(str::to_string));
    }
    lines
}

pub fn format_notification(n: &AppNotification, now: DateTime<Local>) -> String {
    let mark = if n.read { ' ' } else { '●' };
    format!("{} {} [{}] {} ({})", mark, n.id, n.kind, n.text, n.age_label(now))
}

pub fn format_dashboard(dash: &Dashboard<'_>, focus: &FocusConfig, unread: usize) -> Vec<String> {
    let mut lines = vec!["focus mix:".to_string()];
    for share in &dash.focus_mix {
        let meta = focus.get(share.focus);
        lines.push(format!(
            "  {} {:<10} {:>3}% ({})",
            meta.icon, meta.label, share.percentage, share.count
        ));
    }

    lines.push(format!("overdue ({}):", dash.overdue.len()));
    for task in &dash.overdue {
        lines.push(format!("  {}", format_task_line(task)));
    }
    lines.push(format!("due today ({}):", dash.due_today.len()));
    for task in &dash.due_today {
        lines.push(format!("  {}", format_task_line(task)));
    }

    lines.push("entities:".to_string());
    for stats in &dash.entities {
        lines.push(format!(
            "  {} {}: {}/{} completed",
            stats.entity.icon, stats.entity.name, stats.completed, stats.tasks
        ));
    }

    lines.push("top ideas:".to_string());
    for line in format_ideas(&dash.top_ideas) {
        lines.push(format!("  {}", line));
    }
    lines.push(format!("unread notifications: {}", unread));
    lines
}

pub fn format_entity(entity: &Entity) -> String {
    format!("{} {} {} ({})", entity.id, entity.icon, entity.name, entity.color)
}

pub fn format_focus(focus: &FocusConfig) -> Vec<String> {
    focus
        .iter()
        .map(|(category, meta)| {
            format!(
                "{} {} {} ({}): {}",
                category.as_str().to_lowercase(),
                meta.icon,
                meta.label,
                meta.color,
                meta.description
            )
        })
        .collect()
}

pub fn format_project(project: &Project, tasks: usize) -> String {
    format!(
        "{} {} [{}] {}% {}..{} ({} tasks)",
        project.id,
        project.name,
        project.status,
        project.progress,
        project.start_date,
        project.end_date,
        tasks
    )
}

pub fn format_user(user: &AppUser, acting: bool) -> String {
    let mark = if acting { '*' } else { ' ' };
    format!("{} {} {} ({})", mark, user.id, user.name, user.role)
}

// ---------------------------------------------------------------------------
// Argument parsing
// ---------------------------------------------------------------------------

/// Parse a status string into Status
pub fn parse_status(s: &str) -> Result<Status, String> {
    match s.to_lowercase().as_str() {
        "todo" | "to-do" | "to do" => Ok(Status::ToDo),
        "progress" | "in-progress" | "in progress" => Ok(Status::InProgress),
        "done" | "completed" => Ok(Status::Completed),
        _ => Err(format!("unknown status '{}' (expected: todo, progress, done)", s)),
    }
}

pub fn parse_priority(s: &str) -> Result<Priority, String> {
    match s.to_lowercase().as_str() {
        "low" => Ok(Priority::Low),
        "medium" => Ok(Priority::Medium),
        "high" => Ok(Priority::High),
        _ => Err(format!("unknown priority '{}' (expected: low, medium, high)", s)),
    }
}

pub fn parse_focus(s: &str) -> Result<RmiFocus, String> {
    match s.to_lowercase().as_str() {
        "react" | "r" => Ok(RmiFocus::React),
        "maintain" | "m" => Ok(RmiFocus::Maintain),
        "improvise" | "i" => Ok(RmiFocus::Improvise),
        _ => Err(format!("unknown focus '{}' (expected: react, maintain, improvise)", s)),
    }
}

pub fn parse_interval(s: &str) -> Result<RecurringInterval, String> {
    match s.to_lowercase().as_str() {
        "none" => Ok(RecurringInterval::None),
        "daily" => Ok(RecurringInterval::Daily),
        "weekly" => Ok(RecurringInterval::Weekly),
        "monthly" => Ok(RecurringInterval::Monthly),
        "quarterly" => Ok(RecurringInterval::Quarterly),
        _ => Err(format!(
            "unknown interval '{}' (expected: none, daily, weekly, monthly, quarterly)",
            s
        )),
    }
}

/// Ideas only enter Promoted through promotion
pub fn parse_idea_status(s: &str) -> Result<IdeaStatus, String> {
    match s.to_lowercase().as_str() {
        "backlog" => Ok(IdeaStatus::Backlog),
        "validating" => Ok(IdeaStatus::Validating),
        _ => Err(format!("unknown idea status '{}' (expected: backlog, validating)", s)),
    }
}

pub fn parse_notification_kind(s: &str) -> Result<NotificationKind, String> {
    match s.to_lowercase().as_str() {
        "mention" => Ok(NotificationKind::Mention),
        "update" => Ok(NotificationKind::Update),
        "system" => Ok(NotificationKind::System),
        _ => Err(format!("unknown notification kind '{}' (expected: mention, update, system)", s)),
    }
}

pub fn parse_sop_status(s: &str) -> Result<SopStatus, String> {
    match s.to_lowercase().as_str() {
        "draft" => Ok(SopStatus::Draft),
        "active" => Ok(SopStatus::Active),
        "review" | "review-required" => Ok(SopStatus::ReviewRequired),
        _ => Err(format!("unknown SOP status '{}' (expected: draft, active, review)", s)),
    }
}

pub fn parse_project_status(s: &str) -> Result<ProjectStatus, String> {
    match s.to_lowercase().as_str() {
        "planning" => Ok(ProjectStatus::Planning),
        "active" => Ok(ProjectStatus::Active),
        "on-hold" | "hold" => Ok(ProjectStatus::OnHold),
        "finished" => Ok(ProjectStatus::Finished),
        _ => Err(format!(
            "unknown project status '{}' (expected: planning, active, on-hold, finished)",
            s
        )),
    }
}

/// Parse a zero-padded YYYY-MM-DD date
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| format!("invalid date '{}' (expected YYYY-MM-DD)", s))
}

/// Parse YYYY-MM into a calendar month
pub fn parse_month(s: &str) -> Result<CalendarMonth, String> {
    let err = || format!("invalid month '{}' (expected YYYY-MM)", s);
    let (y, m) = s.split_once('-').ok_or_else(err)?;
    let year: i32 = y.parse().map_err(|_| err())?;
    let month: u32 = m.parse().map_err(|_| err())?;
    CalendarMonth::new(year, month).ok_or_else(err)
}

pub fn parse_entity_filter(s: &str) -> EntityFilter {
    if s.eq_ignore_ascii_case("all") {
        EntityFilter::All
    } else {
        EntityFilter::Only(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use crate::views::calendar::calendar;
    use crate::views::kanban::kanban;
    use crate::views::table::table;
    use crate::views::TaskFilter;
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    fn react_filter() -> TaskFilter {
        TaskFilter {
            focus: RmiFocus::React,
            entity: EntityFilter::All,
        }
    }

    #[test]
    fn test_task_line() {
        let tasks = seed::tasks();
        assert_snapshot!(format_task_line(&tasks[0]), @"[>] t1 Dispatch: 2000 Units Lumbar Support (High, Dilip Kumar, due 2024-05-16)");
        assert_snapshot!(format_task_line(&tasks[1]), @"[ ] t2 Weekly Amazon Keyword Audit (Medium, Sarah Chen, due 2024-05-20) ↻Weekly");
    }

    #[test]
    fn test_board() {
        let tasks = seed::tasks();
        let registry = seed::registry();
        let columns = kanban(&tasks, &registry, &react_filter());
        assert_snapshot!(format_board(&columns).join("\n"), @r"
        == To Do (0) ==

        == In Progress (1) ==
        [>] t1 Dispatch: 2000 Units Lumbar Support (High, Dilip Kumar, due 2024-05-16)

        == Completed (0) ==
        ");
    }

    #[test]
    fn test_table_columns_align() {
        let tasks = seed::tasks();
        let registry = seed::registry();
        let rows = table(&tasks, &registry, &react_filter());
        let lines = format_table(&rows);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("ID      TITLE"));
        assert!(lines[1].starts_with("t1      Dispatch: 2000 Units Lumbar S…  DE"));
        assert!(lines[1].ends_with("2024-05-16  50%"));
    }

    #[test]
    fn test_calendar_may_2024() {
        let tasks = seed::tasks();
        let refs: Vec<&Task> = tasks.iter().collect();
        let month = CalendarMonth::new(2024, 5).unwrap();
        let cells = calendar(&refs, month);
        assert_snapshot!(format_calendar(month, &cells).join("\n"), @r"
        May 2024
         Su  Mo  Tu  We  Th  Fr  Sa
                      1   2   3   4
          5   6   7   8   9  10  11
         12  13  14  15  16* 17  18*
         19  20* 21  22  23  24  25
         26  27  28  29  30  31

        2024-05-16  [>] t1 Dispatch: 2000 Units Lumbar Support
        2024-05-18  [ ] t3 3D Prototype: Cable Management Clip
        2024-05-20  [ ] t2 Weekly Amazon Keyword Audit
        ");
    }

    #[test]
    fn test_ideas_ranked() {
        let ideas = seed::ideas();
        let ranked = crate::ops::idea_ops::rank(&ideas);
        assert_snapshot!(format_ideas(&ranked).join("\n"), @r"
        1. i1 New Mold: Ergonomic Headrest [ICE 252 = 9×7×4] (Validating)
        2. i2 Subscription Model for B2B Spares [ICE 210 = 7×5×6] (Backlog)
        ");
    }

    #[test]
    fn test_task_detail_dangling_sop() {
        let mut tasks = seed::tasks();
        let registry = seed::registry();
        tasks[1].sop_id = Some("sop9".into());
        let lines = format_task_detail(&tasks[1], &registry, None);
        assert!(lines.contains(&"sop: sop9 (not found)".to_string()));
        assert!(lines.contains(&"entity: Maktune Technologies".to_string()));
        assert!(lines.contains(&"recurring: Weekly".to_string()));
    }

    #[test]
    fn test_parse_status() {
        assert_eq!(parse_status("todo"), Ok(Status::ToDo));
        assert_eq!(parse_status("In Progress"), Ok(Status::InProgress));
        assert_eq!(parse_status("done"), Ok(Status::Completed));
        assert!(parse_status("blocked").is_err());
    }

    #[test]
    fn test_parse_focus_and_priority() {
        assert_eq!(parse_focus("R"), Ok(RmiFocus::React));
        assert_eq!(parse_focus("improvise"), Ok(RmiFocus::Improvise));
        assert!(parse_focus("explore").is_err());
        assert_eq!(parse_priority("HIGH"), Ok(Priority::High));
    }

    #[test]
    fn test_parse_month() {
        let m = parse_month("2024-05").unwrap();
        assert_eq!((m.year(), m.month()), (2024, 5));
        assert!(parse_month("2024-13").is_err());
        assert!(parse_month("May").is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-05-18"), Ok(NaiveDate::from_ymd_opt(2024, 5, 18).unwrap()));
        assert_eq!(
            parse_date("18/05/2024"),
            Err("invalid date '18/05/2024' (expected YYYY-MM-DD)".to_string())
        );
    }

    #[test]
    fn test_promoted_is_not_a_settable_idea_status() {
        assert!(parse_idea_status("promoted").is_err());
        assert_eq!(parse_idea_status("validating"), Ok(IdeaStatus::Validating));
    }
}
