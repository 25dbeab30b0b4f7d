use chrono::NaiveDate;

use super::next_id;
use crate::model::focus::RmiFocus;
use crate::model::sop::{Sop, SopStatus};

/// Error type for SOP operations
#[derive(Debug, thiserror::Error)]
pub enum SopError {
    #[error("SOP not found: {0}")]
    NotFound(String),
    #[error("no entity to file the SOP under")]
    NoEntity,
}

pub const DEFAULT_SOP_TITLE: &str = "Standard Process";

/// A partially specified SOP; absent fields take defaults
#[derive(Debug, Clone, Default)]
pub struct SopDraft {
    pub entity_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub focus: Option<RmiFocus>,
    pub status: Option<SopStatus>,
}

#[derive(Debug, Clone, Default)]
pub struct SopLibrary {
    sops: Vec<Sop>,
}

impl SopLibrary {
    pub fn new(sops: Vec<Sop>) -> Self {
        SopLibrary { sops }
    }

    pub fn sops(&self) -> &[Sop] {
        &self.sops
    }

    pub fn get(&self, sop_id: &str) -> Option<&Sop> {
        self.sops.iter().find(|s| s.id == sop_id)
    }

    /// Add a SOP stamped `today`
    pub fn create(
        &mut self,
        draft: SopDraft,
        default_entity: Option<&str>,
        today: NaiveDate,
    ) -> Result<&Sop, SopError> {
        let entity_id = match draft.entity_id {
            Some(e) => e,
            None => default_entity.ok_or(SopError::NoEntity)?.to_string(),
        };
        let sop = Sop {
            id: next_id("sop", self.sops.iter().map(|s| s.id.as_str())),
            entity_id,
            title: draft.title.unwrap_or_else(|| DEFAULT_SOP_TITLE.to_string()),
            description: draft.description.unwrap_or_default(),
            content: draft.content.unwrap_or_default(),
            focus: draft.focus.unwrap_or(RmiFocus::Maintain),
            last_updated: today,
            status: draft.status.unwrap_or(SopStatus::Draft),
        };
        log::debug!("created SOP {}", sop.id);
        self.sops.push(sop);
        Ok(&self.sops[self.sops.len() - 1])
    }

    /// Replace a SOP by ID and restamp it `today`
    pub fn update(&mut self, mut sop: Sop, today: NaiveDate) -> Result<(), SopError> {
        let slot = self
            .sops
            .iter_mut()
            .find(|s| s.id == sop.id)
            .ok_or_else(|| SopError::NotFound(sop.id.clone()))?;
        sop.last_updated = today;
        *slot = sop;
        Ok(())
    }
}
