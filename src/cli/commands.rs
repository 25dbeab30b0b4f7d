use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ops", about = concat!("opsdeck v", env!("CARGO_PKG_VERSION"), " - react, maintain, improvise"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory holding opsdeck.toml (default: current directory)
    #[arg(short = 'C', long = "workspace-dir", global = true)]
    pub workspace_dir: Option<String>,

    /// Act as this user ID
    #[arg(long = "as", value_name = "USER", global = true)]
    pub as_user: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Focus balance, overdue work, entity totals and top ideas
    Dashboard,
    /// Kanban board of the filtered tasks
    Board(ViewArgs),
    /// Flat task table
    Table(ViewArgs),
    /// Month calendar of tasks and subtasks
    Calendar(CalendarArgs),
    /// Show task details
    Show(ShowArgs),
    /// Ideas ranked by ICE score
    Ideas,
    /// List SOPs
    Sops,
    /// List notifications
    Notifications,
    /// List users and roles
    Users,
    /// Projects with their task counts, or add one
    Projects(ProjectsArgs),
    /// Team roster, or add/remove a member
    Team(TeamArgs),
    /// Entities, or edit one
    Entities(EntitiesArgs),
    /// Focus categories, or edit one
    Focus(FocusArgs),
    /// Task changes
    Task(TaskCmd),
    /// Idea changes
    Idea(IdeaCmd),
    /// SOP changes
    Sop(SopCmd),
    /// Notification changes
    Notify(NotifyCmd),
    /// AI executive summary for an entity
    Insights(InsightsArgs),
    /// AI task suggestions for a project
    Suggest(SuggestArgs),
    /// Switch the acting user
    Login(LoginArgs),
    /// Read commands from stdin, one per line, against one workspace
    Session,
}

// ---------------------------------------------------------------------------
// Read command args
// ---------------------------------------------------------------------------

#[derive(Args, Clone)]
pub struct ViewArgs {
    /// Focus category (react, maintain, improvise)
    #[arg(long, default_value = "maintain")]
    pub focus: String,
    /// Entity ID, or "all"
    #[arg(long, default_value = "all")]
    pub entity: String,
}

#[derive(Args)]
pub struct CalendarArgs {
    #[command(flatten)]
    pub view: ViewArgs,
    /// Month to show as YYYY-MM (default: current month)
    #[arg(long)]
    pub month: Option<String>,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Task ID
    pub id: String,
}

#[derive(Args)]
pub struct InsightsArgs {
    /// Entity ID
    pub entity: String,
}

#[derive(Args)]
pub struct SuggestArgs {
    /// Project ID
    pub project: String,
    /// Add the suggestions to the project as tasks
    #[arg(long)]
    pub add: bool,
}

#[derive(Args)]
pub struct LoginArgs {
    /// User ID
    pub user: String,
}

// ---------------------------------------------------------------------------
// Registry args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ProjectsArgs {
    #[command(subcommand)]
    pub action: Option<ProjectsAction>,
}

#[derive(Subcommand)]
pub enum ProjectsAction {
    /// Add a project to an entity
    Add(ProjectAddArgs),
}

#[derive(Args)]
pub struct ProjectAddArgs {
    /// Owning entity ID
    #[arg(long)]
    pub entity: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long = "desc")]
    pub description: Option<String>,
    /// Planning, active, on-hold or finished
    #[arg(long)]
    pub status: Option<String>,
    /// 0-100
    #[arg(long)]
    pub progress: Option<u8>,
    /// YYYY-MM-DD
    #[arg(long)]
    pub start: Option<String>,
    /// YYYY-MM-DD
    #[arg(long)]
    pub end: Option<String>,
}

#[derive(Args)]
pub struct TeamArgs {
    #[command(subcommand)]
    pub action: Option<TeamAction>,
}

#[derive(Subcommand)]
pub enum TeamAction {
    /// Add a member by name
    Add { name: String },
    /// Remove a member by exact name (assigned tasks keep the name)
    Rm { name: String },
}

#[derive(Args)]
pub struct EntitiesArgs {
    #[command(subcommand)]
    pub action: Option<EntitiesAction>,
}

#[derive(Subcommand)]
pub enum EntitiesAction {
    /// Edit an entity's display fields
    Edit(EntityEditArgs),
}

#[derive(Args)]
pub struct EntityEditArgs {
    /// Entity ID
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub color: Option<String>,
    #[arg(long)]
    pub icon: Option<String>,
}

#[derive(Args)]
pub struct FocusArgs {
    #[command(subcommand)]
    pub action: Option<FocusAction>,
}

#[derive(Subcommand)]
pub enum FocusAction {
    /// Edit a category's display metadata
    Edit(FocusEditArgs),
}

#[derive(Args)]
pub struct FocusEditArgs {
    /// react, maintain or improvise
    pub focus: String,
    #[arg(long)]
    pub label: Option<String>,
    #[arg(long = "desc")]
    pub description: Option<String>,
    #[arg(long)]
    pub color: Option<String>,
    #[arg(long)]
    pub icon: Option<String>,
}

// ---------------------------------------------------------------------------
// Task args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct TaskCmd {
    #[command(subcommand)]
    pub action: TaskAction,
}

#[derive(Subcommand)]
pub enum TaskAction {
    /// Create a task; omitted fields take defaults
    Add(TaskFields),
    /// Change fields of a task
    Edit(TaskEditArgs),
    /// Move a task to a status column (todo, progress, done)
    Status(TaskStatusArgs),
    /// Subtask changes
    Sub(SubCmd),
    /// Comment on a task as the acting user
    Comment(TaskTextArgs),
    /// Record an attachment by file name
    Attach(TaskTextArgs),
}

#[derive(Args, Default)]
pub struct TaskFields {
    /// Project ID (default: the first project)
    #[arg(long)]
    pub project: Option<String>,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long = "desc")]
    pub description: Option<String>,
    /// YYYY-MM-DD (default: today)
    #[arg(long)]
    pub due: Option<String>,
    /// low, medium or high
    #[arg(long)]
    pub priority: Option<String>,
    /// todo, progress or done
    #[arg(long)]
    pub status: Option<String>,
    /// react, maintain or improvise
    #[arg(long)]
    pub focus: Option<String>,
    #[arg(long)]
    pub assignee: Option<String>,
    /// Linked SOP ID
    #[arg(long)]
    pub sop: Option<String>,
    /// none, daily, weekly, monthly or quarterly
    #[arg(long)]
    pub recurring: Option<String>,
}

#[derive(Args)]
pub struct TaskEditArgs {
    /// Task ID
    pub id: String,
    #[command(flatten)]
    pub fields: TaskFields,
    /// Remove the SOP link
    #[arg(long, conflicts_with = "sop")]
    pub no_sop: bool,
}

#[derive(Args)]
pub struct TaskStatusArgs {
    /// Task ID
    pub id: String,
    /// todo, progress or done
    pub status: String,
}

#[derive(Args)]
pub struct TaskTextArgs {
    /// Task ID
    pub id: String,
    pub text: String,
}

#[derive(Args)]
pub struct SubCmd {
    #[command(subcommand)]
    pub action: SubAction,
}

#[derive(Subcommand)]
pub enum SubAction {
    /// Add a subtask
    Add(SubAddArgs),
    /// Change fields of a subtask
    Edit(SubEditArgs),
    /// Flip a subtask between done and todo
    Toggle(SubRefArgs),
    /// Remove a subtask
    Rm(SubRefArgs),
}

#[derive(Args)]
pub struct SubAddArgs {
    /// Parent task ID
    pub id: String,
    #[arg(long)]
    pub title: Option<String>,
}

#[derive(Args)]
pub struct SubRefArgs {
    /// Parent task ID
    pub id: String,
    /// Subtask ID
    pub sub: String,
}

#[derive(Args)]
pub struct SubEditArgs {
    /// Parent task ID
    pub id: String,
    /// Subtask ID
    pub sub: String,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long = "desc")]
    pub description: Option<String>,
    #[arg(long)]
    pub due: Option<String>,
    #[arg(long)]
    pub priority: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub assignee: Option<String>,
}

// ---------------------------------------------------------------------------
// Idea args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct IdeaCmd {
    #[command(subcommand)]
    pub action: IdeaAction,
}

#[derive(Subcommand)]
pub enum IdeaAction {
    /// Log a new idea
    Add(IdeaAddArgs),
    /// Change an idea's ratings (clamped to 1-10)
    Rate(IdeaRateArgs),
    /// Set an idea's status (backlog, validating)
    Status(IdeaStatusArgs),
    /// Turn an idea into a task
    Promote(IdeaPromoteArgs),
}

#[derive(Args)]
pub struct IdeaAddArgs {
    /// Entity ID (default: the first entity)
    #[arg(long)]
    pub entity: Option<String>,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long = "desc")]
    pub description: Option<String>,
    #[arg(long)]
    pub impact: Option<u8>,
    #[arg(long)]
    pub confidence: Option<u8>,
    #[arg(long)]
    pub ease: Option<u8>,
}

#[derive(Args)]
pub struct IdeaRateArgs {
    /// Idea ID
    pub id: String,
    #[arg(long)]
    pub impact: Option<u8>,
    #[arg(long)]
    pub confidence: Option<u8>,
    #[arg(long)]
    pub ease: Option<u8>,
}

#[derive(Args)]
pub struct IdeaStatusArgs {
    /// Idea ID
    pub id: String,
    pub status: String,
}

#[derive(Args)]
pub struct IdeaPromoteArgs {
    /// Idea ID
    pub id: String,
    /// Focus of the new task
    #[arg(long, default_value = "improvise")]
    pub focus: String,
}

// ---------------------------------------------------------------------------
// SOP and notification args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct SopCmd {
    #[command(subcommand)]
    pub action: SopAction,
}

#[derive(Subcommand)]
pub enum SopAction {
    /// Show a SOP in full
    Show { id: String },
    /// Create a SOP
    Add(SopFields),
    /// Change fields of a SOP
    Edit(SopEditArgs),
    /// Generate a SOP's content from its title and description
    Draft { id: String },
}

#[derive(Args, Default)]
pub struct SopFields {
    /// Entity ID (default: the first entity)
    #[arg(long)]
    pub entity: Option<String>,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long = "desc")]
    pub description: Option<String>,
    #[arg(long)]
    pub content: Option<String>,
    #[arg(long)]
    pub focus: Option<String>,
    /// draft, active or review
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Args)]
pub struct SopEditArgs {
    /// SOP ID
    pub id: String,
    #[command(flatten)]
    pub fields: SopFields,
}

#[derive(Args)]
pub struct NotifyCmd {
    #[command(subcommand)]
    pub action: NotifyAction,
}

#[derive(Subcommand)]
pub enum NotifyAction {
    /// Post a notification to the feed
    Add {
        text: String,
        /// Type tag (mention, update, system)
        #[arg(long, default_value = "system")]
        kind: String,
    },
    /// Mark a notification read
    Read { id: String },
    /// Remove a notification
    Dismiss { id: String },
}
