//! Static records every workspace starts from.

use chrono::{DateTime, Duration, Local, NaiveDate};
use indexmap::IndexMap;

use crate::model::*;
use crate::ops::registry::Registry;

/// Invalid dates fall back to the epoch; `every_seed_date_is_real` guards it.
fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub fn entities() -> Vec<Entity> {
    vec![
        Entity {
            id: "c1".into(),
            name: "Maktune Technologies".into(),
            color: "indigo".into(),
            icon: "🚀".into(),
        },
        Entity {
            id: "c2".into(),
            name: "DE".into(),
            color: "cyan".into(),
            icon: "🛡️".into(),
        },
    ]
}

pub fn users() -> Vec<AppUser> {
    let user = |id: &str, name: &str, role| AppUser {
        id: id.into(),
        name: name.into(),
        role,
    };
    vec![
        user("u1", "Dilip Kumar", Role::Admin),
        user("u2", "Sarah Chen", Role::Member),
        user("u3", "Mark Sloan", Role::Member),
        user("u4", "Jordan Lee", Role::Viewer),
    ]
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "p1".into(),
            entity_id: "c1".into(),
            name: "Amazon B2C Scaling".into(),
            description: "Expanding office chair part sales from Amazon India to Global markets."
                .into(),
            status: ProjectStatus::Active,
            progress: 45,
            start_date: date(2024, 3, 1),
            end_date: date(2024, 9, 30),
        },
        Project {
            id: "p2".into(),
            entity_id: "c2".into(),
            name: "DE Lead Generation Phase 1".into(),
            description: "Targeting major furniture manufacturers for bulk office chair part supply."
                .into(),
            status: ProjectStatus::Active,
            progress: 30,
            start_date: date(2024, 4, 15),
            end_date: date(2024, 12, 1),
        },
        Project {
            id: "p3".into(),
            entity_id: "c1".into(),
            name: "3D Printed Accessory Line".into(),
            description: "R&D for small ergonomic add-ons using the personal 3D printer.".into(),
            status: ProjectStatus::Planning,
            progress: 15,
            start_date: date(2024, 5, 1),
            end_date: date(2024, 8, 1),
        },
    ]
}

/// Configuration registry built from the seeded records
pub fn registry() -> Registry {
    let users = users();
    let mut promotion = IndexMap::new();
    promotion.insert("c1".to_string(), "p1".to_string());
    promotion.insert("c2".to_string(), "p2".to_string());
    Registry {
        entities: entities(),
        projects: projects(),
        team: users.iter().map(|u| u.name.clone()).collect(),
        focus: FocusConfig::default(),
        users,
        promotion,
    }
}

pub fn tasks() -> Vec<Task> {
    let task = |id: &str, project: &str, title: &str, description: &str| Task {
        id: id.into(),
        project_id: project.into(),
        title: title.into(),
        description: description.into(),
        due_date: date(2024, 5, 16),
        priority: Priority::Medium,
        status: Status::ToDo,
        focus: RmiFocus::Maintain,
        assignee: "Dilip Kumar".into(),
        sop_id: None,
        subtasks: Vec::new(),
        comments: Vec::new(),
        attachments: Vec::new(),
        is_recurring: false,
        recurring_interval: RecurringInterval::None,
    };
    vec![
        Task {
            priority: Priority::High,
            status: Status::InProgress,
            focus: RmiFocus::React,
            ..task(
                "t1",
                "p2",
                "Dispatch: 2000 Units Lumbar Support",
                "Urgent dispatch for the Chennai client. Check QC before packing.",
            )
        },
        Task {
            due_date: date(2024, 5, 20),
            assignee: "Sarah Chen".into(),
            sop_id: Some("sop2".into()),
            is_recurring: true,
            recurring_interval: RecurringInterval::Weekly,
            ..task(
                "t2",
                "p1",
                "Weekly Amazon Keyword Audit",
                "Reviewing search terms for chair wheels listing to optimize ad spend.",
            )
        },
        Task {
            due_date: date(2024, 5, 18),
            priority: Priority::Low,
            focus: RmiFocus::Improvise,
            ..task(
                "t3",
                "p3",
                "3D Prototype: Cable Management Clip",
                "Print v1 of the ergonomic desk cable clip for Maktune store.",
            )
        },
    ]
}

pub fn ideas() -> Vec<Idea> {
    vec![
        Idea {
            id: "i1".into(),
            entity_id: "c2".into(),
            title: "New Mold: Ergonomic Headrest".into(),
            description: "Designing a universal headrest attachment for standard office chairs."
                .into(),
            impact: 9,
            confidence: 7,
            ease: 4,
            status: IdeaStatus::Validating,
        },
        Idea {
            id: "i2".into(),
            entity_id: "c1".into(),
            title: "Subscription Model for B2B Spares".into(),
            description: "Monthly supply of wheels and gas lifts to co-working spaces.".into(),
            impact: 7,
            confidence: 5,
            ease: 6,
            status: IdeaStatus::Backlog,
        },
    ]
}

pub fn sops() -> Vec<Sop> {
    vec![
        Sop {
            id: "sop1".into(),
            entity_id: "c2".into(),
            title: "BOM Preparation Protocol".into(),
            description: "Standard procedure for preparing Bill of Materials for new injection molds."
                .into(),
            content: "1. List all raw plastic granules required. 2. Define hardware components (screws, bushings). 3. Calculate gross weight vs net weight for wastage. 4. Sign off by Floor Manager.".into(),
            focus: RmiFocus::Maintain,
            last_updated: date(2024, 5, 12),
            status: SopStatus::Active,
        },
        Sop {
            id: "sop2".into(),
            entity_id: "c1".into(),
            title: "Amazon Listing Optimization".into(),
            description: "Checklist for maintaining high-conversion B2C chair part listings.".into(),
            content: "1. Check Keyword density in titles. 2. Verify A+ content rendering. 3. Monitor daily buy-box percentage. 4. Respond to customer queries within 4 hours.".into(),
            focus: RmiFocus::Maintain,
            last_updated: date(2024, 5, 14),
            status: SopStatus::Active,
        },
    ]
}

/// Starting notifications, aged relative to `now`
pub fn notifications(now: DateTime<Local>) -> Vec<AppNotification> {
    vec![
        AppNotification {
            id: "n1".into(),
            text: "Mark Sloan mentioned you in \"Atmos Metadata Fix\"".into(),
            kind: NotificationKind::Mention,
            read: false,
            created_at: now - Duration::minutes(10),
        },
        AppNotification {
            id: "n2".into(),
            text: "Sarah Chen completed \"Isolate encoding bug\"".into(),
            kind: NotificationKind::Update,
            read: false,
            created_at: now - Duration::hours(1),
        },
    ]
}
