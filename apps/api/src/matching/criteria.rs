//! Boolean job filter behind the `/match` endpoints.
//!
//! Unlike scoring, this is a hard filter: a job either qualifies or it does not.

use crate::matching::profile::Profile;
use crate::models::job::JobRow;

#[derive(Debug, Clone, PartialEq)]
pub struct MatchCriteria {
    /// Lowercase skill tokens; a job qualifies if any of them appears in its skill list.
    pub skills: Vec<String>,
    pub experience: u32,
    /// Lowercased location.
    pub location: String,
}

impl From<&Profile> for MatchCriteria {
    fn from(profile: &Profile) -> Self {
        Self {
            skills: profile.skills.clone(),
            experience: profile.experience,
            location: profile.location.to_lowercase(),
        }
    }
}

impl MatchCriteria {
    /// In-process equivalent of the SQL filter in the Postgres store.
    ///
    /// Skill matching is substring containment against the raw lowercased
    /// `required_skills`, so `"java"` also matches `"javascript"`.
    pub fn accepts(&self, job: &JobRow) -> bool {
        let required = job.required_skills.to_lowercase();
        let any_skill = self.skills.iter().any(|s| required.contains(s.as_str()));
        let experience_ok = i64::from(job.experience_required) <= i64::from(self.experience);
        any_skill && experience_ok && job.location.to_lowercase() == self.location
    }

    /// `LIKE` patterns for the skill tokens, with wildcard characters escaped.
    pub fn like_patterns(&self) -> Vec<String> {
        self.skills
            .iter()
            .map(|s| {
                let escaped = s
                    .replace('\\', "\\\\")
                    .replace('%', "\\%")
                    .replace('_', "\\_");
                format!("%{escaped}%")
            })
            .collect()
    }
}
