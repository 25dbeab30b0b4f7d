use super::next_id;
use crate::model::idea::{Idea, IdeaStatus};

/// Error type for idea operations
#[derive(Debug, thiserror::Error)]
pub enum IdeaError {
    #[error("idea not found: {0}")]
    NotFound(String),
    #[error("idea {0} has already been promoted")]
    AlreadyPromoted(String),
    #[error("no entity to file the idea under")]
    NoEntity,
}

pub const DEFAULT_IDEA_TITLE: &str = "New Concept";
const DEFAULT_RATING: u8 = 5;

/// Force a rating into 1..=10
pub fn clamp_rating(rating: u8) -> u8 {
    rating.clamp(1, 10)
}

/// A partially specified idea; absent fields take defaults
#[derive(Debug, Clone, Default)]
pub struct IdeaDraft {
    pub entity_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub impact: Option<u8>,
    pub confidence: Option<u8>,
    pub ease: Option<u8>,
}

/// Sort ideas by ICE score, highest first. The sort is stable: ideas with
/// equal scores keep their relative input order.
pub fn rank(ideas: &[Idea]) -> Vec<&Idea> {
    let mut ranked: Vec<&Idea> = ideas.iter().collect();
    ranked.sort_by(|a, b| b.ice_score().cmp(&a.ice_score()));
    ranked
}

#[derive(Debug, Clone, Default)]
pub struct IdeaBank {
    ideas: Vec<Idea>,
}

impl IdeaBank {
    pub fn new(ideas: Vec<Idea>) -> Self {
        IdeaBank { ideas }
    }

    pub fn ideas(&self) -> &[Idea] {
        &self.ideas
    }

    pub fn get(&self, idea_id: &str) -> Option<&Idea> {
        self.ideas.iter().find(|i| i.id == idea_id)
    }

    fn get_mut(&mut self, idea_id: &str) -> Result<&mut Idea, IdeaError> {
        self.ideas
            .iter_mut()
            .find(|i| i.id == idea_id)
            .ok_or_else(|| IdeaError::NotFound(idea_id.to_string()))
    }

    pub fn ranked(&self) -> Vec<&Idea> {
        rank(&self.ideas)
    }

    /// The `n` best-scoring ideas
    pub fn top(&self, n: usize) -> Vec<&Idea> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }

    /// Add a new idea to the backlog
    pub fn create(&mut self, draft: IdeaDraft, default_entity: Option<&str>) -> Result<&Idea, IdeaError> {
        let entity_id = match draft.entity_id {
            Some(e) => e,
            None => default_entity.ok_or(IdeaError::NoEntity)?.to_string(),
        };
        let idea = Idea {
            id: next_id("i", self.ideas.iter().map(|i| i.id.as_str())),
            entity_id,
            title: draft.title.unwrap_or_else(|| DEFAULT_IDEA_TITLE.to_string()),
            description: draft.description.unwrap_or_default(),
            impact: clamp_rating(draft.impact.unwrap_or(DEFAULT_RATING)),
            confidence: clamp_rating(draft.confidence.unwrap_or(DEFAULT_RATING)),
            ease: clamp_rating(draft.ease.unwrap_or(DEFAULT_RATING)),
            status: IdeaStatus::Backlog,
        };
        log::debug!("created idea {} (ICE {})", idea.id, idea.ice_score());
        self.ideas.push(idea);
        Ok(&self.ideas[self.ideas.len() - 1])
    }

    /// Replace an idea by ID. Ratings are clamped into range. A promoted
    /// idea keeps its Promoted status.
    pub fn update(&mut self, mut idea: Idea) -> Result<(), IdeaError> {
        idea.impact = clamp_rating(idea.impact);
        idea.confidence = clamp_rating(idea.confidence);
        idea.ease = clamp_rating(idea.ease);
        let slot = self.get_mut(&idea.id)?;
        if slot.status == IdeaStatus::Promoted && idea.status != IdeaStatus::Promoted {
            return Err(IdeaError::AlreadyPromoted(idea.id));
        }
        *slot = idea;
        Ok(())
    }

    /// Set an idea's status. Promotion is one-way, so a Promoted idea cannot
    /// move back to Backlog or Validating.
    pub fn set_status(&mut self, idea_id: &str, status: IdeaStatus) -> Result<(), IdeaError> {
        let idea = self.get_mut(idea_id)?;
        if idea.status == IdeaStatus::Promoted && status != IdeaStatus::Promoted {
            return Err(IdeaError::AlreadyPromoted(idea_id.to_string()));
        }
        idea.status = status;
        Ok(())
    }

    /// Check that an idea can be promoted. Promotion is one-way: an idea that
    /// is already Promoted is refused.
    pub fn ensure_promotable(&self, idea_id: &str) -> Result<&Idea, IdeaError> {
        let idea = self
            .get(idea_id)
            .ok_or_else(|| IdeaError::NotFound(idea_id.to_string()))?;
        if idea.status == IdeaStatus::Promoted {
            return Err(IdeaError::AlreadyPromoted(idea_id.to_string()));
        }
        Ok(idea)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn idea(id: &str, impact: u8, confidence: u8, ease: u8) -> Idea {
        Idea {
            id: id.into(),
            entity_id: "c1".into(),
            title: format!("idea {}", id),
            description: String::new(),
            impact,
            confidence,
            ease,
            status: IdeaStatus::Backlog,
        }
    }

    #[test]
    fn rank_orders_by_score_descending() {
        let ideas = vec![idea("a", 2, 2, 2), idea("b", 9, 7, 4), idea("c", 7, 5, 6)];
        let order: Vec<_> = rank(&ideas).iter().map(|i| i.id.as_str()).collect();
        assert_eq!(order, vec!["b", "c", "a"]);
    }

    #[test]
    fn rank_keeps_input_order_for_ties() {
        // 2*3*4 = 4*3*2 = 6*2*2 = 24
        let ideas = vec![
            idea("x", 2, 3, 4),
            idea("top", 10, 10, 10),
            idea("y", 4, 3, 2),
            idea("z", 6, 2, 2),
        ];
        let order: Vec<_> = rank(&ideas).iter().map(|i| i.id.as_str()).collect();
        assert_eq!(order, vec!["top", "x", "y", "z"]);
    }

    #[test]
    fn create_fills_defaults() {
        let mut bank = IdeaBank::default();
        let created = bank.create(IdeaDraft::default(), Some("c2")).unwrap();
        assert_eq!(created.id, "i1");
        assert_eq!(created.entity_id, "c2");
        assert_eq!(created.title, DEFAULT_IDEA_TITLE);
        assert_eq!(created.ice_score(), 125);
        assert_eq!(created.status, IdeaStatus::Backlog);
    }

    #[test]
    fn create_without_any_entity_fails() {
        let mut bank = IdeaBank::default();
        assert!(matches!(
            bank.create(IdeaDraft::default(), None),
            Err(IdeaError::NoEntity)
        ));
    }

    #[test]
    fn ratings_are_clamped() {
        let mut bank = IdeaBank::default();
        let draft = IdeaDraft {
            impact: Some(0),
            confidence: Some(42),
            ..Default::default()
        };
        let created = bank.create(draft, Some("c1")).unwrap();
        assert_eq!((created.impact, created.confidence, created.ease), (1, 10, 5));
    }

    #[test]
    fn update_recomputes_score() {
        let mut bank = IdeaBank::new(vec![idea("i1", 9, 7, 4)]);
        let mut edited = bank.get("i1").unwrap().clone();
        edited.ease = 2;
        bank.update(edited).unwrap();
        assert_eq!(bank.get("i1").unwrap().ice_score(), 126);
    }

    #[test]
    fn promoted_ideas_are_not_promotable() {
        let mut bank = IdeaBank::new(vec![idea("i1", 1, 1, 1)]);
        assert!(bank.ensure_promotable("i1").is_ok());
        bank.set_status("i1", IdeaStatus::Promoted).unwrap();
        assert!(matches!(
            bank.ensure_promotable("i1"),
            Err(IdeaError::AlreadyPromoted(_))
        ));
    }

    #[test]
    fn promoted_status_cannot_be_reset() {
        let mut bank = IdeaBank::new(vec![idea("i1", 9, 7, 4)]);
        bank.set_status("i1", IdeaStatus::Promoted).unwrap();

        assert!(matches!(
            bank.set_status("i1", IdeaStatus::Backlog),
            Err(IdeaError::AlreadyPromoted(_))
        ));
        let mut edited = bank.get("i1").unwrap().clone();
        edited.status = IdeaStatus::Validating;
        assert!(matches!(bank.update(edited), Err(IdeaError::AlreadyPromoted(_))));
        assert_eq!(bank.get("i1").unwrap().status, IdeaStatus::Promoted);

        // ratings stay editable
        let mut edited = bank.get("i1").unwrap().clone();
        edited.ease = 2;
        bank.update(edited).unwrap();
        assert_eq!(bank.get("i1").unwrap().ice_score(), 126);
        assert!(bank.ensure_promotable("i1").is_err());
    }

    #[test]
    fn top_truncates_ranking() {
        let bank = IdeaBank::new(vec![
            idea("a", 1, 1, 1),
            idea("b", 2, 2, 2),
            idea("c", 3, 3, 3),
        ]);
        let top: Vec<_> = bank.top(2).iter().map(|i| i.id.as_str()).collect();
        assert_eq!(top, vec!["c", "b"]);
    }
}
