mod session;
mod write;

use crate::assist::{self, CommandGenerator, TextGenerator, Unconfigured};
use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::load_config;
use crate::model::config::WorkspaceConfig;
use crate::model::task::Task;
use crate::util::Clock;
use crate::views::TaskFilter;
use crate::views::calendar::CalendarMonth;
use crate::workspace::Workspace;

type CmdResult = Result<(), Box<dyn std::error::Error>>;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> CmdResult {
    let dir = match &cli.workspace_dir {
        Some(dir) => std::fs::canonicalize(dir)
            .map_err(|e| format!("cannot resolve -C path '{}': {}", dir, e))?,
        None => std::env::current_dir()?,
    };
    let config = load_config(&dir)?;
    let mut ws = build_workspace(config.as_ref())?;
    if let Some(user) = &cli.as_user {
        ws.set_current_user(user)?;
    }
    let generator = generator_for(config.as_ref());

    match cli.command {
        Commands::Session => session::run(&mut ws, generator.as_ref(), std::io::stdin().lock()),
        cmd => run_command(&mut ws, generator.as_ref(), cmd, cli.json),
    }
}

fn build_workspace(config: Option<&WorkspaceConfig>) -> Result<Workspace, Box<dyn std::error::Error>> {
    Ok(match config {
        Some(config) => Workspace::from_config(config, Clock::System)?,
        None => Workspace::seeded(Clock::System),
    })
}

/// The configured assistant program, or a provider that always fails
fn generator_for(config: Option<&WorkspaceConfig>) -> Box<dyn TextGenerator> {
    match config.and_then(|c| c.assistant.command.as_ref().map(|cmd| (cmd, &c.assistant.args))) {
        Some((command, args)) => Box::new(CommandGenerator::new(command.clone(), args.clone())),
        None => Box::new(Unconfigured),
    }
}

/// Run one command against a workspace. Used for single invocations and
/// for every line of a session.
pub fn run_command(ws: &mut Workspace, generator: &dyn TextGenerator, cmd: Commands, json: bool) -> CmdResult {
    match cmd {
        // Read commands
        Commands::Dashboard => cmd_dashboard(ws, json),
        Commands::Board(args) => cmd_board(ws, args, json),
        Commands::Table(args) => cmd_table(ws, args, json),
        Commands::Calendar(args) => cmd_calendar(ws, args, json),
        Commands::Show(args) => cmd_show(ws, args, json),
        Commands::Ideas => cmd_ideas(ws, json),
        Commands::Sops => cmd_sops(ws, json),
        Commands::Notifications => cmd_notifications(ws, json),
        Commands::Users => cmd_users(ws, json),
        Commands::Insights(args) => cmd_insights(ws, generator, args),
        Commands::Suggest(args) => cmd_suggest(ws, generator, args, json),

        // Listings with optional edits
        Commands::Projects(args) => match args.action {
            None => cmd_projects(ws, json),
            Some(ProjectsAction::Add(args)) => write::cmd_project_add(ws, args),
        },
        Commands::Team(args) => match args.action {
            None => cmd_team(ws, json),
            Some(action) => write::cmd_team(ws, action),
        },
        Commands::Entities(args) => match args.action {
            None => cmd_entities(ws, json),
            Some(EntitiesAction::Edit(args)) => write::cmd_entity_edit(ws, args),
        },
        Commands::Focus(args) => match args.action {
            None => cmd_focus(ws, json),
            Some(FocusAction::Edit(args)) => write::cmd_focus_edit(ws, args),
        },

        // Write commands
        Commands::Task(args) => write::cmd_task(ws, args.action),
        Commands::Idea(args) => write::cmd_idea(ws, args.action),
        Commands::Sop(args) => write::cmd_sop(ws, generator, args.action, json),
        Commands::Notify(args) => write::cmd_notify(ws, args.action),
        Commands::Login(args) => cmd_login(ws, args),

        Commands::Session => Err("a session is already running".into()),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn apply_view_args(ws: &mut Workspace, args: &ViewArgs) -> CmdResult {
    ws.filter = TaskFilter {
        focus: parse_focus(&args.focus)?,
        entity: parse_entity_filter(&args.entity),
    };
    if let crate::views::EntityFilter::Only(id) = &ws.filter.entity
        && ws.registry().entity(id).is_none()
    {
        return Err(format!("entity not found: {}", id).into());
    }
    Ok(())
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_dashboard(ws: &Workspace, json: bool) -> CmdResult {
    let dash = ws.dashboard();
    if json {
        let out = dashboard_to_json(&dash, ws.unread_count());
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{} ({})", ws.name, ws.clock().today());
        print_lines(&format_dashboard(&dash, &ws.registry().focus, ws.unread_count()));
    }
    Ok(())
}

fn cmd_board(ws: &mut Workspace, args: ViewArgs, json: bool) -> CmdResult {
    apply_view_args(ws, &args)?;
    let columns = ws.kanban();
    if json {
        let out = board_to_json(&columns, ws.registry());
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print_lines(&format_board(&columns));
    }
    Ok(())
}

fn cmd_table(ws: &mut Workspace, args: ViewArgs, json: bool) -> CmdResult {
    apply_view_args(ws, &args)?;
    let rows = ws.table();
    if json {
        let out: Vec<_> = rows.iter().map(|r| task_to_json(r.task, ws.registry())).collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print_lines(&format_table(&rows));
    }
    Ok(())
}

fn cmd_calendar(ws: &mut Workspace, args: CalendarArgs, json: bool) -> CmdResult {
    apply_view_args(ws, &args.view)?;
    let month = match &args.month {
        Some(m) => parse_month(m)?,
        None => CalendarMonth::containing(ws.clock().today()),
    };
    let cells = ws.calendar(month);
    if json {
        println!("{}", serde_json::to_string_pretty(&calendar_to_json(month, &cells))?);
    } else {
        print_lines(&format_calendar(month, &cells));
    }
    Ok(())
}

fn cmd_show(ws: &Workspace, args: ShowArgs, json: bool) -> CmdResult {
    let task = ws
        .task(&args.id)
        .ok_or_else(|| format!("task not found: {}", args.id))?;
    if json {
        println!("{}", serde_json::to_string_pretty(&task_to_json(task, ws.registry()))?);
    } else {
        print_lines(&format_task_detail(task, ws.registry(), ws.task_sop(task)));
    }
    Ok(())
}

fn cmd_ideas(ws: &Workspace, json: bool) -> CmdResult {
    let ranked = ws.ranked_ideas();
    if json {
        let out: Vec<_> = ranked.iter().map(|&i| idea_to_json(i)).collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print_lines(&format_ideas(&ranked));
    }
    Ok(())
}

fn cmd_sops(ws: &Workspace, json: bool) -> CmdResult {
    if json {
        println!("{}", serde_json::to_string_pretty(ws.sops())?);
    } else {
        for sop in ws.sops() {
            println!("{}", format_sop_line(sop));
        }
    }
    Ok(())
}

fn cmd_notifications(ws: &Workspace, json: bool) -> CmdResult {
    let now = ws.clock().now();
    if json {
        let out: Vec<_> = ws
            .notifications()
            .iter()
            .map(|n| notification_to_json(n, now))
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{} unread", ws.unread_count());
        for n in ws.notifications() {
            println!("{}", format_notification(n, now));
        }
    }
    Ok(())
}

fn cmd_users(ws: &Workspace, json: bool) -> CmdResult {
    let acting = ws.current_user().map(|u| u.id.as_str());
    if json {
        println!("{}", serde_json::to_string_pretty(&ws.registry().users)?);
    } else {
        for user in &ws.registry().users {
            println!("{}", format_user(user, acting == Some(user.id.as_str())));
        }
    }
    Ok(())
}

fn cmd_projects(ws: &Workspace, json: bool) -> CmdResult {
    let count = |project_id: &str| ws.tasks().iter().filter(|t| t.project_id == project_id).count();
    if json {
        let out: Vec<_> = ws
            .registry()
            .projects
            .iter()
            .map(|p| ProjectJson {
                project: p,
                tasks: count(&p.id),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for entity in &ws.registry().entities {
            println!("{}", format_entity(entity));
            for project in ws.registry().projects_for(&entity.id) {
                println!("  {}", format_project(project, count(&project.id)));
            }
        }
    }
    Ok(())
}

fn cmd_team(ws: &Workspace, json: bool) -> CmdResult {
    if json {
        println!("{}", serde_json::to_string_pretty(&ws.registry().team)?);
    } else {
        for member in &ws.registry().team {
            println!("{}", member);
        }
    }
    Ok(())
}

fn cmd_entities(ws: &Workspace, json: bool) -> CmdResult {
    if json {
        println!("{}", serde_json::to_string_pretty(&ws.registry().entities)?);
    } else {
        for entity in &ws.registry().entities {
            println!("{}", format_entity(entity));
        }
    }
    Ok(())
}

fn cmd_focus(ws: &Workspace, json: bool) -> CmdResult {
    if json {
        println!("{}", serde_json::to_string_pretty(&ws.registry().focus)?);
    } else {
        print_lines(&format_focus(&ws.registry().focus));
    }
    Ok(())
}

fn cmd_login(ws: &mut Workspace, args: LoginArgs) -> CmdResult {
    ws.set_current_user(&args.user)?;
    if let Some(user) = ws.current_user() {
        println!("acting as {} ({})", user.name, user.role);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Assistant commands
// ---------------------------------------------------------------------------

fn cmd_insights(ws: &Workspace, generator: &dyn TextGenerator, args: InsightsArgs) -> CmdResult {
    let registry = ws.registry();
    let entity = registry
        .entity(&args.entity)
        .ok_or_else(|| format!("entity not found: {}", args.entity))?;
    let projects: Vec<_> = registry.projects_for(&entity.id).collect();
    let tasks: Vec<&Task> = ws
        .tasks()
        .iter()
        .filter(|t| registry.entity_for_task(t).is_some_and(|e| e.id == entity.id))
        .collect();
    println!("{}", assist::executive_summary(generator, entity, &projects, &tasks));
    Ok(())
}

fn cmd_suggest(ws: &mut Workspace, generator: &dyn TextGenerator, args: SuggestArgs, json: bool) -> CmdResult {
    let project = ws
        .registry()
        .project(&args.project)
        .ok_or_else(|| format!("project not found: {}", args.project))?;
    let suggestions = assist::suggest_tasks(generator, project);
    if json {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
    } else if suggestions.is_empty() {
        println!("no suggestions");
    } else {
        for s in &suggestions {
            println!("- [{}] {}: {}", s.priority(), s.title, s.description);
        }
    }
    if args.add {
        for id in ws.add_suggestions(&args.project, &suggestions)? {
            println!("{}", id);
        }
    }
    Ok(())
}
