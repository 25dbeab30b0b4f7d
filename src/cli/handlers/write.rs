use super::{CmdResult, print_lines};
use crate::assist::TextGenerator;
use crate::cli::commands::*;
use crate::cli::output::*;
use crate::model::config::MetaOverride;
use crate::model::task::{RecurringInterval, Task};
use crate::ops::idea_ops::IdeaDraft;
use crate::ops::registry::{EntityEdit, ProjectDraft};
use crate::ops::sop_ops::SopDraft;
use crate::ops::task_ops::TaskDraft;
use crate::views::kanban::DropOutcome;
use crate::workspace::Workspace;

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

fn task_draft(fields: TaskFields) -> Result<TaskDraft, String> {
    let recurring_interval = fields.recurring.as_deref().map(parse_interval).transpose()?;
    Ok(TaskDraft {
        project_id: fields.project,
        title: fields.title,
        description: fields.description,
        due_date: fields.due.as_deref().map(parse_date).transpose()?,
        priority: fields.priority.as_deref().map(parse_priority).transpose()?,
        status: fields.status.as_deref().map(parse_status).transpose()?,
        focus: fields.focus.as_deref().map(parse_focus).transpose()?,
        assignee: fields.assignee,
        sop_id: fields.sop,
        is_recurring: recurring_interval.map(|i| i != RecurringInterval::None),
        recurring_interval,
        ..Default::default()
    })
}

/// Overlay the supplied fields of a draft onto an existing task
fn apply_draft(task: &mut Task, draft: TaskDraft) {
    if let Some(v) = draft.project_id {
        task.project_id = v;
    }
    if let Some(v) = draft.title {
        task.title = v;
    }
    if let Some(v) = draft.description {
        task.description = v;
    }
    if let Some(v) = draft.due_date {
        task.due_date = v;
    }
    if let Some(v) = draft.priority {
        task.priority = v;
    }
    if let Some(v) = draft.status {
        task.status = v;
    }
    if let Some(v) = draft.focus {
        task.focus = v;
    }
    if let Some(v) = draft.assignee {
        task.assignee = v;
    }
    if draft.sop_id.is_some() {
        task.sop_id = draft.sop_id;
    }
    if let Some(v) = draft.is_recurring {
        task.is_recurring = v;
    }
    if let Some(v) = draft.recurring_interval {
        task.recurring_interval = v;
    }
}

pub(super) fn cmd_task(ws: &mut Workspace, action: TaskAction) -> CmdResult {
    match action {
        TaskAction::Add(fields) => {
            let id = ws.create_task(task_draft(fields)?)?;
            println!("{}", id);
        }
        TaskAction::Edit(args) => {
            let mut task = ws
                .task(&args.id)
                .cloned()
                .ok_or_else(|| format!("task not found: {}", args.id))?;
            let draft = task_draft(args.fields)?;
            if let Some(project_id) = &draft.project_id
                && ws.registry().project(project_id).is_none()
            {
                return Err(format!("project not found: {}", project_id).into());
            }
            apply_draft(&mut task, draft);
            if args.no_sop {
                task.sop_id = None;
            }
            ws.update_task(task)?;
            println!("{} updated", args.id);
        }
        TaskAction::Status(args) => {
            let status = parse_status(&args.status)?;
            match ws.drop_card(&args.id, status)? {
                DropOutcome::Unchanged => println!("{} already {}", args.id, status),
                DropOutcome::Moved { from, to } => println!("{} {} → {}", args.id, from, to),
            }
        }
        TaskAction::Sub(sub) => cmd_subtask(ws, sub.action)?,
        TaskAction::Comment(args) => match ws.add_comment(&args.id, &args.text)? {
            Some(id) => println!("{}", id),
            None => println!("empty comment ignored"),
        },
        TaskAction::Attach(args) => {
            let id = ws.attach(&args.id, &args.text)?;
            println!("{}", id);
        }
    }
    Ok(())
}

fn cmd_subtask(ws: &mut Workspace, action: SubAction) -> CmdResult {
    match action {
        SubAction::Add(args) => {
            let sub_id = ws.add_subtask(&args.id)?;
            if let Some(title) = args.title
                && let Some(mut sub) = ws.task(&args.id).and_then(|t| t.subtask(&sub_id)).cloned()
            {
                sub.title = title;
                ws.update_subtask(&args.id, sub)?;
            }
            println!("{}", sub_id);
        }
        SubAction::Edit(args) => {
            let mut sub = ws
                .task(&args.id)
                .and_then(|t| t.subtask(&args.sub))
                .cloned()
                .ok_or_else(|| format!("subtask {} not found on task {}", args.sub, args.id))?;
            if let Some(v) = args.title {
                sub.title = v;
            }
            if let Some(v) = args.description {
                sub.description = v;
            }
            if let Some(v) = args.due {
                sub.due_date = parse_date(&v)?;
            }
            if let Some(v) = args.priority {
                sub.priority = parse_priority(&v)?;
            }
            if let Some(v) = args.status {
                sub.status = parse_status(&v)?;
            }
            if let Some(v) = args.assignee {
                sub.assignee = v;
            }
            ws.update_subtask(&args.id, sub)?;
            println!("{} updated", args.sub);
        }
        SubAction::Toggle(args) => {
            let status = ws.toggle_subtask(&args.id, &args.sub)?;
            println!("{} → {}", args.sub, status);
        }
        SubAction::Rm(args) => {
            ws.remove_subtask(&args.id, &args.sub)?;
            println!("{} removed", args.sub);
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Ideas
// ---------------------------------------------------------------------------

pub(super) fn cmd_idea(ws: &mut Workspace, action: IdeaAction) -> CmdResult {
    match action {
        IdeaAction::Add(args) => {
            if let Some(entity) = &args.entity
                && ws.registry().entity(entity).is_none()
            {
                return Err(format!("entity not found: {}", entity).into());
            }
            let id = ws.create_idea(IdeaDraft {
                entity_id: args.entity,
                title: args.title,
                description: args.description,
                impact: args.impact,
                confidence: args.confidence,
                ease: args.ease,
            })?;
            println!("{}", id);
        }
        IdeaAction::Rate(args) => {
            let mut idea = ws
                .idea(&args.id)
                .cloned()
                .ok_or_else(|| format!("idea not found: {}", args.id))?;
            if let Some(v) = args.impact {
                idea.impact = v;
            }
            if let Some(v) = args.confidence {
                idea.confidence = v;
            }
            if let Some(v) = args.ease {
                idea.ease = v;
            }
            ws.update_idea(idea)?;
            if let Some(idea) = ws.idea(&args.id) {
                println!("{} ICE {}", idea.id, idea.ice_score());
            }
        }
        IdeaAction::Status(args) => {
            let status = parse_idea_status(&args.status)?;
            ws.set_idea_status(&args.id, status)?;
            println!("{} → {}", args.id, status);
        }
        IdeaAction::Promote(args) => {
            let focus = parse_focus(&args.focus)?;
            let task_id = ws.promote_idea(&args.id, focus)?;
            println!("{} promoted to {} (view: {})", args.id, task_id, ws.active_view);
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// SOPs
// ---------------------------------------------------------------------------

fn sop_draft(fields: SopFields) -> Result<SopDraft, String> {
    Ok(SopDraft {
        entity_id: fields.entity,
        title: fields.title,
        description: fields.description,
        content: fields.content,
        focus: fields.focus.as_deref().map(parse_focus).transpose()?,
        status: fields.status.as_deref().map(parse_sop_status).transpose()?,
    })
}

pub(super) fn cmd_sop(ws: &mut Workspace, generator: &dyn TextGenerator, action: SopAction, json: bool) -> CmdResult {
    match action {
        SopAction::Show { id } => {
            let sop = ws.sop(&id).ok_or_else(|| format!("SOP not found: {}", id))?;
            if json {
                println!("{}", serde_json::to_string_pretty(sop)?);
            } else {
                print_lines(&format_sop_detail(sop, ws.registry()));
            }
        }
        SopAction::Add(fields) => {
            let id = ws.create_sop(sop_draft(fields)?)?;
            println!("{}", id);
        }
        SopAction::Edit(args) => {
            let mut sop = ws
                .sop(&args.id)
                .cloned()
                .ok_or_else(|| format!("SOP not found: {}", args.id))?;
            let draft = sop_draft(args.fields)?;
            if let Some(v) = draft.entity_id {
                sop.entity_id = v;
            }
            if let Some(v) = draft.title {
                sop.title = v;
            }
            if let Some(v) = draft.description {
                sop.description = v;
            }
            if let Some(v) = draft.content {
                sop.content = v;
            }
            if let Some(v) = draft.focus {
                sop.focus = v;
            }
            if let Some(v) = draft.status {
                sop.status = v;
            }
            ws.update_sop(sop)?;
            println!("{} updated", args.id);
        }
        SopAction::Draft { id } => {
            ws.draft_sop_content(generator, &id)?;
            if let Some(sop) = ws.sop(&id) {
                print_lines(&format_sop_detail(sop, ws.registry()));
            }
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Notifications and registry
// ---------------------------------------------------------------------------

pub(super) fn cmd_notify(ws: &mut Workspace, action: NotifyAction) -> CmdResult {
    match action {
        NotifyAction::Add { text, kind } => {
            let id = ws.notify(text, parse_notification_kind(&kind)?);
            println!("{}", id);
        }
        NotifyAction::Read { id } => {
            ws.mark_read(&id)?;
            println!("{} read", id);
        }
        NotifyAction::Dismiss { id } => {
            ws.dismiss(&id)?;
            println!("{} dismissed", id);
        }
    }
    Ok(())
}

pub(super) fn cmd_team(ws: &mut Workspace, action: TeamAction) -> CmdResult {
    match action {
        TeamAction::Add { name } => {
            ws.add_member(&name)?;
            println!("added {}", name.trim());
        }
        TeamAction::Rm { name } => {
            if ws.remove_member(&name)? {
                println!("removed {}", name);
            } else {
                return Err(format!("no team member named '{}'", name).into());
            }
        }
    }
    Ok(())
}

pub(super) fn cmd_entity_edit(ws: &mut Workspace, args: EntityEditArgs) -> CmdResult {
    let edit = EntityEdit {
        name: args.name,
        color: args.color,
        icon: args.icon,
    };
    let entity = ws.edit_entity(&args.id, edit)?;
    println!("{}", format_entity(entity));
    Ok(())
}

pub(super) fn cmd_focus_edit(ws: &mut Workspace, args: FocusEditArgs) -> CmdResult {
    let focus = parse_focus(&args.focus)?;
    let edit = MetaOverride {
        color: args.color,
        icon: args.icon,
        label: args.label,
        description: args.description,
    };
    ws.edit_focus(focus, &edit)?;
    let meta = ws.registry().focus.get(focus);
    println!("{}: {} {}", focus, meta.icon, meta.label);
    Ok(())
}

pub(super) fn cmd_project_add(ws: &mut Workspace, args: ProjectAddArgs) -> CmdResult {
    let draft = ProjectDraft {
        entity_id: args.entity,
        name: args.name,
        description: args.description,
        status: args.status.as_deref().map(parse_project_status).transpose()?,
        progress: args.progress,
        start_date: args.start.as_deref().map(parse_date).transpose()?,
        end_date: args.end.as_deref().map(parse_date).transpose()?,
    };
    let project = ws.add_project(draft)?;
    println!("{}", project.id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::focus::RmiFocus;
    use crate::model::task::Priority;
    use crate::seed;

    #[test]
    fn draft_keeps_only_supplied_fields() {
        let draft = task_draft(TaskFields {
            title: Some("Reorder casters".into()),
            priority: Some("high".into()),
            recurring: Some("monthly".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(draft.title.as_deref(), Some("Reorder casters"));
        assert_eq!(draft.priority, Some(Priority::High));
        assert_eq!(draft.recurring_interval, Some(RecurringInterval::Monthly));
        assert_eq!(draft.is_recurring, Some(true));
        assert!(draft.project_id.is_none());
        assert!(draft.focus.is_none());
    }

    #[test]
    fn draft_rejects_bad_values() {
        let err = task_draft(TaskFields {
            due: Some("tomorrow".into()),
            ..Default::default()
        })
        .unwrap_err();
        assert!(err.contains("tomorrow"));
    }

    #[test]
    fn edit_overlays_without_clearing() {
        let mut task = seed::tasks().remove(1);
        let draft = task_draft(TaskFields {
            focus: Some("react".into()),
            recurring: Some("none".into()),
            ..Default::default()
        })
        .unwrap();
        apply_draft(&mut task, draft);
        assert_eq!(task.focus, RmiFocus::React);
        assert!(!task.is_recurring);
        assert_eq!(task.sop_id.as_deref(), Some("sop2"));
        assert_eq!(task.assignee, "Sarah Chen");
    }
}
