//! Per-actor skill list.
//!
//! Skills are shared `Arc<dyn Skill>` handles. Broadcasting iterates over a
//! [`SkillSet::snapshot`], so a skill that adds or removes skills on its owner
//! mid-broadcast does not disturb the walk in progress.

use std::sync::Arc;

use super::skill::Skill;

/// Ordered list of skills, in attachment order.
#[derive(Clone, Debug, Default)]
pub struct SkillSet {
    skills: Vec<Arc<dyn Skill>>,
}

impl SkillSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a skill (builder pattern).
    #[must_use]
    pub fn with(mut self, skill: impl Skill + 'static) -> Self {
        self.attach(skill);
        self
    }

    /// Attach a skill at the end of the list.
    pub fn attach(&mut self, skill: impl Skill + 'static) {
        self.skills.push(Arc::new(skill));
    }

    /// Attach an already shared skill.
    pub fn attach_shared(&mut self, skill: Arc<dyn Skill>) {
        self.skills.push(skill);
    }

    /// Detach every skill with this name. Returns how many were removed.
    pub fn detach(&mut self, name: &str) -> usize {
        let before = self.skills.len();
        self.skills.retain(|s| s.name() != name);
        before - self.skills.len()
    }

    /// Copy of the current list, for iteration that may mutate the original.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Arc<dyn Skill>> {
        self.skills.clone()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.skills.iter().any(|s| s.name() == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.skills.iter().map(|s| s.name())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Skill>> {
        self.skills.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}
