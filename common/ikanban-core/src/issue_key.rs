//! Issue keys (`IKA-27`) and task reference resolution
//!
//! A task can be named by UUID or by issue key. Keys are case-insensitive and
//! the hyphen is optional, so `IKA-27`, `ika-27`, `IKA27` and `ika27` are
//! the same task.

use std::fmt;
use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use tracing::{debug, instrument};

use crate::aliases::{is_uuid_shaped, AliasTables};
use crate::error::{IkanbanError, IkanbanResult};
use crate::types::{Project, Task};

static ISSUE_KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z]+)-?(\d+)$").expect("Invalid issue key regex"));

/// Composite display identifier for a team issue
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IssueKey {
    /// Upper-cased team code
    pub team: String,
    pub number: i64,
}

impl IssueKey {
    pub fn new(team: &str, number: i64) -> Self {
        Self {
            team: team.to_uppercase(),
            number,
        }
    }

    /// Parse `TEAM-NUMBER`, `team-number` or `TEAMNUMBER`.
    ///
    /// Returns `None` for anything that does not have that shape, including
    /// numbers too large for an `i64`.
    pub fn parse(input: &str) -> Option<Self> {
        let caps = ISSUE_KEY_REGEX.captures(input.trim())?;
        let number = caps[2].parse::<i64>().ok()?;
        Some(Self::new(&caps[1], number))
    }
}

impl fmt::Display for IssueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.team, self.number)
    }
}

/// Read-only lookups that identifier resolution needs from the API
#[async_trait]
pub trait Lookup: Send + Sync {
    /// `GET /api/teams/{team_id}/issues`
    async fn team_issues(&self, team_id: &str) -> IkanbanResult<Vec<Task>>;

    /// `GET /api/projects`
    async fn projects(&self) -> IkanbanResult<Vec<Project>>;

    /// `GET /api/tasks/{task_id}`
    async fn task(&self, task_id: &str) -> IkanbanResult<Task>;
}

/// Resolve a task reference (UUID or issue key) to the task UUID.
///
/// UUID-shaped input and anything that is not shaped like an issue key are
/// returned unchanged without touching the network. An issue key costs one
/// call to list the team's issues. Unknown team codes fail before that call.
#[instrument(skip(lookup, aliases))]
pub async fn resolve_task_id<L>(
    lookup: &L,
    aliases: &AliasTables,
    reference: &str,
) -> IkanbanResult<String>
where
    L: Lookup + ?Sized,
{
    if reference.trim().is_empty() {
        return Err(IkanbanError::MissingReference("task id"));
    }

    if is_uuid_shaped(reference) {
        return Ok(reference.to_string());
    }

    let Some(key) = IssueKey::parse(reference) else {
        debug!("'{}' is not an issue key, passing through", reference);
        return Ok(reference.to_string());
    };

    let team_id = aliases
        .team_id(&key.team)
        .ok_or_else(|| IkanbanError::UnknownTeam {
            code: key.team.clone(),
            known: aliases.known_identifiers().join(", "),
        })?;

    let issues = lookup.team_issues(team_id).await?;
    debug!(count = issues.len(), "scanning team issues for {}", key);

    issues
        .into_iter()
        .find(|issue| issue.issue_number == Some(key.number))
        .map(|issue| issue.id)
        .ok_or_else(|| IkanbanError::IssueNotFound {
            key: key.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Task;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const IKA: &str = "a263e43f-43d3-4af7-a947-5f70e6670921";

    /// Canned issue list that counts how often it is fetched
    struct FakeLookup {
        issues: Vec<Task>,
        calls: AtomicUsize,
        fail: bool,
    }

    impl FakeLookup {
        fn new(issues: Vec<Task>) -> Self {
            Self {
                issues,
                calls: AtomicUsize::new(0),
                fail: false,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Lookup for FakeLookup {
        async fn team_issues(&self, team_id: &str) -> IkanbanResult<Vec<Task>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(IkanbanError::Http {
                    status: 503,
                    message: "unavailable".to_string(),
                });
            }
            assert_eq!(team_id, IKA);
            Ok(self.issues.clone())
        }

        async fn projects(&self) -> IkanbanResult<Vec<Project>> {
            Ok(Vec::new())
        }

        async fn task(&self, task_id: &str) -> IkanbanResult<Task> {
            unreachable!("key resolution never fetches task {task_id}")
        }
    }

    fn issue(id: &str, number: i64) -> Task {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "team_id": IKA,
            "project_id": "p",
            "issue_number": number,
            "title": format!("Issue {}", number),
            "status": "todo",
        }))
        .unwrap()
    }

    fn fixture() -> FakeLookup {
        FakeLookup::new(vec![issue("X", 27), issue("Y", 5)])
    }

    #[test]
    fn test_parse_accepts_all_formats() {
        for input in ["IKA-27", "ika-27", "IKA27", "ika27", " Ika-27 "] {
            assert_eq!(
                IssueKey::parse(input),
                Some(IssueKey::new("IKA", 27)),
                "input {:?}",
                input
            );
        }
        assert_eq!(IssueKey::parse("IKA--27"), None);
        assert_eq!(IssueKey::parse("27"), None);
        assert_eq!(IssueKey::parse("IKA-"), None);
        assert_eq!(IssueKey::parse("IKA-99999999999999999999999"), None);
        assert_eq!(IssueKey::new("sch", 5).to_string(), "SCH-5");
    }

    #[tokio::test]
    async fn test_issue_key_resolves_to_uuid() {
        let lookup = fixture();
        let aliases = AliasTables::default();

        assert_eq!(resolve_task_id(&lookup, &aliases, "IKA-27").await.unwrap(), "X");
        assert_eq!(resolve_task_id(&lookup, &aliases, "ika27").await.unwrap(), "X");
        assert_eq!(resolve_task_id(&lookup, &aliases, "ikanban-5").await.unwrap(), "Y");
        assert_eq!(lookup.calls(), 3);
    }

    #[tokio::test]
    async fn test_missing_issue_names_the_key() {
        let lookup = fixture();
        let aliases = AliasTables::default();

        let err = resolve_task_id(&lookup, &aliases, "ika-999").await.unwrap_err();
        match err {
            IkanbanError::IssueNotFound { key } => assert_eq!(key, "IKA-999"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unknown_team_fails_without_network() {
        let lookup = fixture();
        let aliases = AliasTables::default();

        let err = resolve_task_id(&lookup, &aliases, "XYZ-5").await.unwrap_err();
        assert!(matches!(err, IkanbanError::UnknownTeam { ref code, .. } if code == "XYZ"));
        assert_eq!(err.to_string(), "unknown team: XYZ (known: IKA, SCH)");
        assert_eq!(lookup.calls(), 0);
    }

    #[tokio::test]
    async fn test_uuid_and_opaque_tokens_pass_through() {
        let lookup = fixture();
        let aliases = AliasTables::default();
        let uuid = "ab802fb3-698e-4235-942c-b3ec7df6fa3c";

        assert_eq!(resolve_task_id(&lookup, &aliases, uuid).await.unwrap(), uuid);
        assert_eq!(
            resolve_task_id(&lookup, &aliases, "not_a_key").await.unwrap(),
            "not_a_key"
        );
        assert_eq!(lookup.calls(), 0);
    }

    #[tokio::test]
    async fn test_empty_reference_is_rejected() {
        let lookup = fixture();
        let aliases = AliasTables::default();
        let err = resolve_task_id(&lookup, &aliases, "  ").await.unwrap_err();
        assert!(matches!(err, IkanbanError::MissingReference(_)));
    }

    #[tokio::test]
    async fn test_lookup_errors_surface_verbatim() {
        let mut lookup = fixture();
        lookup.fail = true;
        let aliases = AliasTables::default();

        let err = resolve_task_id(&lookup, &aliases, "IKA-27").await.unwrap_err();
        assert!(matches!(err, IkanbanError::Http { status: 503, .. }));
        assert_eq!(lookup.calls(), 1);
    }
}
