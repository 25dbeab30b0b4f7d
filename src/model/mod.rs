pub mod config;
pub mod entity;
pub mod focus;
pub mod idea;
pub mod notification;
pub mod sop;
pub mod task;
pub mod user;

pub use config::*;
pub use entity::*;
pub use focus::*;
pub use idea::*;
pub use notification::*;
pub use sop::*;
pub use task::*;
pub use user::*;
