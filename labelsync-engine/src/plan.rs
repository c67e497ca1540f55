//! Change-set planning.
//!
//! Each `plan_*` method fetches the observed state of every addressed
//! repository through the client, then hands off to a pure diff function.
//! The diff functions have no I/O and are tested directly.
//!
//! Records are emitted repository-major, label-minor, preserving the input
//! ordering of both — deterministic output, independent operations.

use serde::Deserialize;

use labelsync_core::{
    ChangeRecord, Label, LabelClient, Plan, RepoId, SkipReason, SkippedChange,
};

use crate::error::EngineError;

// ---------------------------------------------------------------------------
// Operation inputs
// ---------------------------------------------------------------------------

/// A rename request: the label currently called `name` becomes `new_name`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Rename {
    pub name: String,
    pub new_name: String,
}

/// A recolor request: the label called `name` gets `color`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Recolor {
    pub name: String,
    pub color: String,
}

// ---------------------------------------------------------------------------
// Planner
// ---------------------------------------------------------------------------

/// Computes change sets from desired state and observed remote state.
pub struct Planner<'a> {
    client: &'a dyn LabelClient,
}

impl<'a> Planner<'a> {
    pub fn new(client: &'a dyn LabelClient) -> Self {
        Self { client }
    }

    /// Copy `source` labels into each destination, creating only the labels
    /// a destination lacks. Labels already present by name are never touched,
    /// even when their color or description differs.
    pub fn plan_duplicate(
        &self,
        source: &[Label],
        destinations: &[RepoId],
    ) -> Result<Plan, EngineError> {
        validate_all(source)?;
        let mut plan = Plan::default();
        for repo in destinations {
            let observed = self.observed(repo)?;
            plan.changes.extend(diff_missing(repo, source, &observed));
        }
        Ok(plan)
    }

    /// Create each label on each repository where its name is absent.
    /// Idempotent: present names are silently skipped.
    pub fn plan_add(&self, repos: &[RepoId], labels: &[Label]) -> Result<Plan, EngineError> {
        validate_all(labels)?;
        let mut plan = Plan::default();
        for repo in repos {
            let observed = self.observed(repo)?;
            plan.changes.extend(diff_missing(repo, labels, &observed));
        }
        Ok(plan)
    }

    /// Delete each named label wherever it exists. Absent names are silently
    /// skipped.
    pub fn plan_delete(&self, repos: &[RepoId], names: &[String]) -> Result<Plan, EngineError> {
        let mut plan = Plan::default();
        for repo in repos {
            let observed = self.observed(repo)?;
            plan.changes.extend(diff_deletions(repo, names, &observed));
        }
        Ok(plan)
    }

    /// Rename labels, carrying color and description over unchanged. A
    /// missing `name` is a silent skip; an already-taken `new_name` is a
    /// reportable skip — never a destructive overwrite.
    pub fn plan_rename(&self, repos: &[RepoId], renames: &[Rename]) -> Result<Plan, EngineError> {
        let mut plan = Plan::default();
        for repo in repos {
            let observed = self.observed(repo)?;
            let (changes, skips) = diff_renames(repo, renames, &observed);
            plan.changes.extend(changes);
            plan.skips.extend(skips);
        }
        Ok(plan)
    }

    /// Change label colors, leaving name and description alone. Absent names
    /// and already-matching colors are silent skips.
    pub fn plan_recolor(
        &self,
        repos: &[RepoId],
        recolors: &[Recolor],
    ) -> Result<Plan, EngineError> {
        let normalized: Vec<Recolor> = recolors
            .iter()
            .map(|r| {
                // Validation piggybacks on Label's color rules.
                let color = Label::new(&r.name, &r.color, None)?.color;
                Ok(Recolor {
                    name: r.name.clone(),
                    color,
                })
            })
            .collect::<Result<_, labelsync_core::InvalidInput>>()?;

        let mut plan = Plan::default();
        for repo in repos {
            let observed = self.observed(repo)?;
            plan.changes
                .extend(diff_recolors(repo, &normalized, &observed));
        }
        Ok(plan)
    }

    /// The repository's current labels, as a desired-state representation
    /// consumable by [`Planner::plan_duplicate`].
    pub fn export(&self, repo: &RepoId) -> Result<Vec<Label>, EngineError> {
        self.observed(repo)
    }

    fn observed(&self, repo: &RepoId) -> Result<Vec<Label>, EngineError> {
        tracing::debug!("listing labels on {repo}");
        self.client.list(repo).map_err(|source| EngineError::Fetch {
            repo: repo.clone(),
            source,
        })
    }
}

// ---------------------------------------------------------------------------
// Pure diff functions
// ---------------------------------------------------------------------------

fn find<'o>(observed: &'o [Label], name: &str) -> Option<&'o Label> {
    observed.iter().find(|l| l.name == name)
}

/// CREATE records for every desired label whose name is absent in `observed`.
pub fn diff_missing(repo: &RepoId, desired: &[Label], observed: &[Label]) -> Vec<ChangeRecord> {
    desired
        .iter()
        .filter(|label| find(observed, &label.name).is_none())
        .map(|label| ChangeRecord::create(repo.clone(), label.clone()))
        .collect()
}

/// DELETE records for every requested name present in `observed`.
pub fn diff_deletions(repo: &RepoId, names: &[String], observed: &[Label]) -> Vec<ChangeRecord> {
    names
        .iter()
        .filter(|name| find(observed, name).is_some())
        .map(|name| ChangeRecord::delete(repo.clone(), name.clone()))
        .collect()
}

/// UPDATE records for renames, plus reportable skips for target collisions.
pub fn diff_renames(
    repo: &RepoId,
    renames: &[Rename],
    observed: &[Label],
) -> (Vec<ChangeRecord>, Vec<SkippedChange>) {
    let mut changes = Vec::new();
    let mut skips = Vec::new();
    for rename in renames {
        let Some(current) = find(observed, &rename.name) else {
            continue;
        };
        if rename.new_name == rename.name {
            continue;
        }
        if find(observed, &rename.new_name).is_some() {
            tracing::debug!(
                "skipping rename '{}' on {repo}: target '{}' exists",
                rename.name,
                rename.new_name
            );
            skips.push(SkippedChange {
                repository: repo.clone(),
                name: rename.name.clone(),
                reason: SkipReason::RenameTargetExists {
                    existing: rename.new_name.clone(),
                },
            });
            continue;
        }
        changes.push(ChangeRecord::update(
            repo.clone(),
            Some(rename.name.clone()),
            current.renamed(&rename.new_name),
        ));
    }
    (changes, skips)
}

/// UPDATE records for recolors of existing labels whose color differs.
pub fn diff_recolors(repo: &RepoId, recolors: &[Recolor], observed: &[Label]) -> Vec<ChangeRecord> {
    recolors
        .iter()
        .filter_map(|recolor| {
            let current = find(observed, &recolor.name)?;
            if current.color == recolor.color {
                return None;
            }
            Some(ChangeRecord::update(
                repo.clone(),
                None,
                current.recolored(&recolor.color),
            ))
        })
        .collect()
}

fn validate_all(labels: &[Label]) -> Result<(), EngineError> {
    for label in labels {
        label.validate()?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests — pure diff functions only; Planner runs against an in-memory
// client in tests/plan_and_execute.rs.
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use labelsync_core::ChangeAction;

    use super::*;

    fn repo() -> RepoId {
        RepoId::parse("octo/tools").expect("repo")
    }

    fn label(name: &str, color: &str) -> Label {
        Label::new(name, color, None).expect("label")
    }

    #[test]
    fn diff_missing_creates_only_absent_names() {
        let source = vec![label("bug", "ff0000"), label("docs", "00ff00")];
        let observed = vec![label("bug", "0000ff")];

        let changes = diff_missing(&repo(), &source, &observed);
        assert_eq!(changes.len(), 1);
        assert!(matches!(
            &changes[0].action,
            ChangeAction::Create { label } if label.name == "docs" && label.color == "00ff00"
        ));
    }

    #[test]
    fn diff_missing_is_empty_when_converged() {
        let source = vec![label("bug", "ff0000")];
        let observed = source.clone();
        assert!(diff_missing(&repo(), &source, &observed).is_empty());
    }

    #[test]
    fn diff_deletions_skips_absent_names() {
        let observed = vec![label("bug", "ff0000")];
        let names = vec!["bug".to_string(), "ghost".to_string()];

        let changes = diff_deletions(&repo(), &names, &observed);
        assert_eq!(changes.len(), 1);
        assert!(matches!(
            &changes[0].action,
            ChangeAction::Delete { name } if name == "bug"
        ));
    }

    #[test]
    fn diff_renames_carries_color_and_description() {
        let observed = vec![Label::new("ui", "c7def8", Some("interface".into())).expect("label")];
        let renames = vec![Rename {
            name: "ui".into(),
            new_name: "design".into(),
        }];

        let (changes, skips) = diff_renames(&repo(), &renames, &observed);
        assert!(skips.is_empty());
        assert_eq!(changes.len(), 1);
        match &changes[0].action {
            ChangeAction::Update {
                previous_name,
                label,
            } => {
                assert_eq!(previous_name.as_deref(), Some("ui"));
                assert_eq!(label.name, "design");
                assert_eq!(label.color, "c7def8");
                assert_eq!(label.description.as_deref(), Some("interface"));
            }
            other => panic!("expected update, got {other:?}"),
        }
    }

    #[test]
    fn diff_renames_reports_target_collision() {
        let observed = vec![label("ui", "c7def8"), label("design", "aaaaaa")];
        let renames = vec![Rename {
            name: "ui".into(),
            new_name: "design".into(),
        }];

        let (changes, skips) = diff_renames(&repo(), &renames, &observed);
        assert!(changes.is_empty());
        assert_eq!(skips.len(), 1);
        assert_eq!(skips[0].name, "ui");
        assert!(matches!(
            &skips[0].reason,
            SkipReason::RenameTargetExists { existing } if existing == "design"
        ));
    }

    #[test]
    fn diff_renames_skips_missing_and_self_renames_silently() {
        let observed = vec![label("ui", "c7def8")];
        let renames = vec![
            Rename {
                name: "ghost".into(),
                new_name: "spirit".into(),
            },
            Rename {
                name: "ui".into(),
                new_name: "ui".into(),
            },
        ];

        let (changes, skips) = diff_renames(&repo(), &renames, &observed);
        assert!(changes.is_empty());
        assert!(skips.is_empty());
    }

    #[test]
    fn diff_recolors_preserves_name_and_description() {
        let observed = vec![Label::new("bug", "ff0000", Some("broken".into())).expect("label")];
        let recolors = vec![Recolor {
            name: "bug".into(),
            color: "990000".into(),
        }];

        let changes = diff_recolors(&repo(), &recolors, &observed);
        assert_eq!(changes.len(), 1);
        match &changes[0].action {
            ChangeAction::Update {
                previous_name,
                label,
            } => {
                assert!(previous_name.is_none());
                assert_eq!(label.name, "bug");
                assert_eq!(label.color, "990000");
                assert_eq!(label.description.as_deref(), Some("broken"));
            }
            other => panic!("expected update, got {other:?}"),
        }
    }

    #[test]
    fn diff_recolors_skips_matching_color_and_absent_names() {
        let observed = vec![label("bug", "ff0000")];
        let recolors = vec![
            Recolor {
                name: "bug".into(),
                color: "ff0000".into(),
            },
            Recolor {
                name: "ghost".into(),
                color: "123456".into(),
            },
        ];
        assert!(diff_recolors(&repo(), &recolors, &observed).is_empty());
    }
}
