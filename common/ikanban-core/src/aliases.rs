//! Alias tables: short human-typed names to backend UUIDs
//!
//! Built once from [`Config`] at startup and never mutated afterwards.
//! Share it behind an `Arc` when more than one component needs it.

use std::collections::HashMap;

use crate::config::{Config, ProjectAlias, TeamConfig};
use crate::issue_key::IssueKey;
use crate::types::Task;

/// True for strings that look like a UUID: 36 characters, 4 hyphens.
///
/// No further validation happens here; malformed input of the right shape
/// is passed through and rejected by the API.
pub fn is_uuid_shaped(s: &str) -> bool {
    s.len() == 36 && s.matches('-').count() == 4
}

/// Outcome of a project lookup, before any network fallback
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectLookup {
    /// A UUID from the table, or the input passed through unchanged
    Id(String),
    /// The alias exists but has no static UUID; match `name` against the
    /// live project list
    Dynamic { name: String },
    /// No project given and the team has no default
    NoDefault,
}

#[derive(Debug, Clone)]
struct TeamEntry {
    id: String,
    identifier: String,
    default_project: Option<String>,
    projects: HashMap<String, ProjectAlias>,
}

/// Read-only team and project alias tables
#[derive(Debug, Clone)]
pub struct AliasTables {
    teams: Vec<TeamEntry>,
    /// Lowercased team name or identifier -> index into `teams`
    by_alias: HashMap<String, usize>,
}

impl AliasTables {
    pub fn new(teams: &[TeamConfig]) -> Self {
        let mut entries = Vec::with_capacity(teams.len());
        let mut by_alias = HashMap::new();

        for (index, team) in teams.iter().enumerate() {
            by_alias.insert(team.name.trim().to_lowercase(), index);
            by_alias.insert(team.identifier.trim().to_lowercase(), index);

            let projects = team
                .projects
                .iter()
                .map(|(name, alias)| (name.trim().to_lowercase(), alias.clone()))
                .collect();

            entries.push(TeamEntry {
                id: team.id.clone(),
                identifier: team.identifier.trim().to_uppercase(),
                default_project: team.default_project.clone(),
                projects,
            });
        }

        Self {
            teams: entries,
            by_alias,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.teams)
    }

    /// Strict lookup of a team name or short code. `None` when unknown.
    pub fn team_id(&self, code: &str) -> Option<&str> {
        self.by_alias
            .get(&code.trim().to_lowercase())
            .map(|&index| self.teams[index].id.as_str())
    }

    /// Resolve a team name, short identifier or UUID to the team UUID.
    ///
    /// Unknown input is returned unchanged; a bad value surfaces later as an
    /// HTTP error from the API.
    pub fn resolve_team(&self, reference: &str) -> String {
        if is_uuid_shaped(reference) {
            return reference.to_string();
        }
        self.team_id(reference)
            .map(str::to_string)
            .unwrap_or_else(|| reference.to_string())
    }

    fn entry_for(&self, team_id: &str) -> Option<&TeamEntry> {
        self.teams.iter().find(|team| team.id == team_id)
    }

    /// Default project configured for a team UUID
    pub fn default_project(&self, team_id: &str) -> Option<&str> {
        self.entry_for(team_id)
            .and_then(|team| team.default_project.as_deref())
    }

    /// Short identifier ("IKA") for a team UUID
    pub fn team_identifier(&self, team_id: &str) -> Option<&str> {
        self.entry_for(team_id).map(|team| team.identifier.as_str())
    }

    /// Short identifiers of every known team, in configuration order
    pub fn known_identifiers(&self) -> Vec<&str> {
        self.teams.iter().map(|team| team.identifier.as_str()).collect()
    }

    /// Look up a project reference scoped to a team, distinguishing the
    /// cases that [`resolve_project`](Self::resolve_project) folds into `None`.
    pub fn lookup_project(&self, reference: Option<&str>, team_id: Option<&str>) -> ProjectLookup {
        let reference = reference.unwrap_or_default();

        if reference.trim().is_empty() {
            return team_id
                .and_then(|id| self.default_project(id))
                .map(|id| ProjectLookup::Id(id.to_string()))
                .unwrap_or(ProjectLookup::NoDefault);
        }

        if is_uuid_shaped(reference) {
            return ProjectLookup::Id(reference.to_string());
        }

        let key = reference.trim().to_lowercase();
        let alias = team_id
            .and_then(|id| self.entry_for(id))
            .and_then(|team| team.projects.get(&key));

        match alias {
            Some(ProjectAlias::Id(id)) => ProjectLookup::Id(id.clone()),
            Some(ProjectAlias::Dynamic) => ProjectLookup::Dynamic {
                name: reference.trim().to_string(),
            },
            None => ProjectLookup::Id(reference.to_string()),
        }
    }

    /// Resolve a project name or UUID to a project UUID.
    ///
    /// `None` means either "no project and no team default" or "dynamic
    /// alias, consult the live project list".
    pub fn resolve_project(&self, reference: Option<&str>, team_id: Option<&str>) -> Option<String> {
        match self.lookup_project(reference, team_id) {
            ProjectLookup::Id(id) => Some(id),
            ProjectLookup::Dynamic { .. } | ProjectLookup::NoDefault => None,
        }
    }

    /// Display key for a task, defined only when the team is known and the
    /// task carries an issue number
    pub fn issue_key(&self, team_id: Option<&str>, issue_number: Option<i64>) -> Option<IssueKey> {
        let identifier = self.team_identifier(team_id?)?;
        Some(IssueKey::new(identifier, issue_number?))
    }

    pub fn issue_key_for(&self, task: &Task) -> Option<IssueKey> {
        self.issue_key(task.team_id.as_deref(), task.issue_number)
    }
}

impl Default for AliasTables {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IKA: &str = "a263e43f-43d3-4af7-a947-5f70e6670921";
    const SCH: &str = "a2f22deb-901e-436b-9755-644cb26753b7";

    #[test]
    fn test_known_team_codes_resolve() {
        let aliases = AliasTables::default();
        for input in ["IKA", "ika", "Ika", " ika ", "ikanban", "iKanban"] {
            assert_eq!(aliases.resolve_team(input), IKA, "input {:?}", input);
        }
        for input in ["SCH", "sch", "schild", "\tSCH\n"] {
            assert_eq!(aliases.resolve_team(input), SCH, "input {:?}", input);
        }
    }

    #[test]
    fn test_unknown_team_passes_through() {
        let aliases = AliasTables::default();
        assert_eq!(aliases.resolve_team("XYZ"), "XYZ");
        assert_eq!(aliases.team_id("XYZ"), None);
    }

    #[test]
    fn test_uuid_shaped_input_short_circuits() {
        let aliases = AliasTables::default();
        let inputs = [
            "ab802fb3-698e-4235-942c-b3ec7df6fa3c",
            "zzzzzzzz-zzzz-zzzz-zzzz-zzzzzzzzzzzz",
            "IKA----aaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
        ];
        for input in inputs {
            assert!(is_uuid_shaped(input), "input {:?}", input);
            assert_eq!(aliases.resolve_team(input), input);
        }
        assert!(is_uuid_shaped("ab802fb3-698e-4235-942c-b3ec7df6fa3c"));
        assert!(!is_uuid_shaped("ab802fb3698e4235942cb3ec7df6fa3c"));
        assert!(!is_uuid_shaped("IKA-27"));
    }

    #[test]
    fn test_default_project_when_reference_missing() {
        let aliases = AliasTables::default();
        assert_eq!(
            aliases.resolve_project(None, Some(IKA)).as_deref(),
            Some("ff89ece5-eb49-4d8b-a349-4fc227773cbc")
        );
        assert_eq!(
            aliases.resolve_project(Some(""), Some(SCH)).as_deref(),
            Some("ec364e49-b620-48e1-9dd1-8744eaedb5e2")
        );
        assert_eq!(aliases.resolve_project(None, None), None);
        assert_eq!(
            aliases.lookup_project(None, Some("unknown-team")),
            ProjectLookup::NoDefault
        );
    }

    #[test]
    fn test_team_without_default_project() {
        let team = TeamConfig {
            name: "ops".into(),
            identifier: "OPS".into(),
            id: "ops-id".into(),
            default_project: None,
            projects: Default::default(),
        };
        let aliases = AliasTables::new(&[team]);
        assert_eq!(aliases.resolve_project(None, Some("ops-id")), None);
    }

    #[test]
    fn test_project_aliases_are_team_scoped() {
        let aliases = AliasTables::default();
        assert_eq!(
            aliases.resolve_project(Some("Frontend"), Some(SCH)).as_deref(),
            Some("a0838686-0c56-4492-bf6d-65847451496a")
        );
        assert_eq!(
            aliases.resolve_project(Some("frontend"), Some(IKA)).as_deref(),
            Some("ff89ece5-eb49-4d8b-a349-4fc227773cbc")
        );
        // Not in IKA's table: passed through unchanged
        assert_eq!(
            aliases.resolve_project(Some("infra"), Some(IKA)).as_deref(),
            Some("infra")
        );
    }

    #[test]
    fn test_dynamic_alias_is_unresolved() {
        let aliases = AliasTables::default();
        assert_eq!(aliases.resolve_project(Some("backend"), Some(IKA)), None);
        assert_eq!(
            aliases.lookup_project(Some(" Backend "), Some(IKA)),
            ProjectLookup::Dynamic {
                name: "Backend".to_string()
            }
        );
    }

    #[test]
    fn test_team_identifier_and_issue_key() {
        let aliases = AliasTables::default();
        assert_eq!(aliases.team_identifier(IKA), Some("IKA"));
        assert_eq!(aliases.team_identifier("nope"), None);
        assert_eq!(
            aliases.issue_key(Some(SCH), Some(5)).map(|k| k.to_string()),
            Some("SCH-5".to_string())
        );
        assert_eq!(aliases.issue_key(Some(SCH), None), None);
        assert_eq!(aliases.issue_key(None, Some(5)), None);
        assert_eq!(aliases.known_identifiers(), ["IKA", "SCH"]);
    }
}
