//! One synchronization pass against the tracker.
//!
//! Global boards are checked (and created) per tracker instance first, then
//! every team is planned and synced on its own. A failing team is recorded in
//! the report and the run moves on to the next one.

use std::collections::BTreeMap;

use tracing::{debug, error, info, warn};

use crate::calendar::{Calendar, DEFAULT_RUN_QUARTERS, SprintLength, build_calendar};
use crate::config::{SpuConfig, TeamConfig};
use crate::date::parse_date;
use crate::error::{SpuError, SpuResult};
use crate::naming::{self, GlobalKind};
use crate::planner::{merge_filter_query, needs_sync};
use crate::tracker::{Filter, Tracker};

/// Issue type of the issue that carries a quarter's label.
pub const LABEL_ISSUE_TYPE: &str = "Story";

/// Asks the operator before boards are created.
pub trait Confirm {
    /// Whether the quarters of `calendar` should be created for `subject`.
    fn confirm(&self, subject: &str, calendar: &Calendar) -> SpuResult<bool>;
}

/// Confirms everything (`--yes`).
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&self, _subject: &str, _calendar: &Calendar) -> SpuResult<bool> {
        Ok(true)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamStats {
    pub filters_created: usize,
    pub filters_updated: usize,
    pub boards_created: usize,
    pub issues_created: usize,
    pub sprints_created: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamOutcome {
    Synced(TeamStats),
    /// A board for one of the team's quarters already exists.
    UpToDate,
    /// `run_for_quarter` names a quarter the team's calendar doesn't have.
    NothingScheduled,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlobalOutcome {
    Created { boards: usize },
    Existing { filters: usize },
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalReport {
    pub instance: String,
    pub kind: GlobalKind,
    pub outcome: GlobalOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamReport {
    pub team: String,
    pub outcome: TeamOutcome,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub globals: Vec<GlobalReport>,
    pub teams: Vec<TeamReport>,
    /// The operator declined a confirmation; nothing after it was attempted.
    pub aborted: bool,
}

impl SyncReport {
    pub fn failed_teams(&self) -> usize {
        self.teams
            .iter()
            .filter(|t| matches!(t.outcome, TeamOutcome::Failed(_)))
            .count()
    }

    pub fn totals(&self) -> TeamStats {
        let mut totals = TeamStats::default();
        for report in &self.teams {
            if let TeamOutcome::Synced(stats) = &report.outcome {
                totals.filters_created += stats.filters_created;
                totals.filters_updated += stats.filters_updated;
                totals.boards_created += stats.boards_created;
                totals.issues_created += stats.issues_created;
                totals.sprints_created += stats.sprints_created;
            }
        }
        totals
    }
}

enum Step<T> {
    Done(T),
    Declined,
}

/// Shared filters of one instance, kept current as teams are merged in.
#[derive(Default)]
struct GlobalFilters {
    board: Vec<Filter>,
    bad_board: Vec<Filter>,
}

impl GlobalFilters {
    fn of_kind(&mut self, kind: GlobalKind) -> &mut Vec<Filter> {
        match kind {
            GlobalKind::Board => &mut self.board,
            GlobalKind::BadBoard => &mut self.bad_board,
        }
    }
}

pub struct SyncRun<'a, T, C> {
    config: &'a SpuConfig,
    trackers: &'a BTreeMap<String, T>,
    confirm: &'a C,
    global_start: chrono::NaiveDate,
    boards: BTreeMap<String, u64>,
    filters: BTreeMap<String, GlobalFilters>,
}

impl<'a, T: Tracker, C: Confirm> SyncRun<'a, T, C> {
    /// Read the boards of every instance in `trackers`.
    ///
    /// Fails when the global start date is invalid or any instance can't be
    /// listed, since the existing boards decide what is safe to create.
    pub async fn prepare(
        config: &'a SpuConfig,
        trackers: &'a BTreeMap<String, T>,
        confirm: &'a C,
    ) -> SpuResult<Self> {
        let global_start = config.global_start()?;

        let mut boards = BTreeMap::new();
        for (instance, tracker) in trackers {
            let listed = tracker.list_boards().await?;
            debug!(instance = %instance, boards = listed.len(), "listed boards");
            boards.extend(listed);
        }

        Ok(SyncRun {
            config,
            trackers,
            confirm,
            global_start,
            boards,
            filters: BTreeMap::new(),
        })
    }

    pub fn existing_boards(&self) -> &BTreeMap<String, u64> {
        &self.boards
    }

    pub async fn run(mut self) -> SpuResult<SyncReport> {
        let mut report = SyncReport::default();
        let config = self.config;
        let trackers = self.trackers;

        let global_calendar =
            build_calendar(self.global_start, self.global_start, SprintLength::Two)?;

        for (instance, tracker) in trackers {
            for kind in GlobalKind::ALL {
                let outcome = match self
                    .sync_global(instance, tracker, kind, &global_calendar)
                    .await
                {
                    Ok(Step::Done(outcome)) => outcome,
                    Ok(Step::Declined) => {
                        report.aborted = true;
                        return Ok(report);
                    }
                    Err(e) => {
                        error!(instance = %instance, kind = %kind, error = %e, "global board sync failed");
                        GlobalOutcome::Failed(e.to_string())
                    }
                };
                report.globals.push(GlobalReport {
                    instance: instance.clone(),
                    kind,
                    outcome,
                });
            }
        }

        for (name, team) in &config.teams {
            let outcome = match self.sync_team(name, team).await {
                Ok(Step::Done(outcome)) => outcome,
                Ok(Step::Declined) => {
                    report.aborted = true;
                    return Ok(report);
                }
                Err(e) => {
                    error!(team = %name, error = %e, "team sync failed");
                    TeamOutcome::Failed(e.to_string())
                }
            };
            report.teams.push(TeamReport {
                team: name.clone(),
                outcome,
            });
        }

        Ok(report)
    }

    async fn sync_global(
        &mut self,
        instance: &str,
        tracker: &T,
        kind: GlobalKind,
        calendar: &Calendar,
    ) -> SpuResult<Step<GlobalOutcome>> {
        let label = naming::global_label(kind, instance);

        if !needs_sync(&self.boards, calendar, &label, true) {
            let filters: Vec<Filter> = tracker
                .list_favorite_filters()
                .await?
                .into_iter()
                .filter(|f| f.name.contains(&label))
                .collect();
            debug!(label = %label, filters = filters.len(), "global board exists");

            let count = filters.len();
            *self.filters.entry(instance.to_string()).or_default().of_kind(kind) = filters;
            return Ok(Step::Done(GlobalOutcome::Existing { filters: count }));
        }

        let window = calendar.first_quarters(DEFAULT_RUN_QUARTERS);
        if !self.confirm.confirm(&label, &window)? {
            return Ok(Step::Declined);
        }

        let mut created = Vec::new();
        for plan in window.quarters() {
            let filter = tracker
                .create_filter(
                    &naming::global_filter_name(&label, &plan.name),
                    &naming::initial_global_jql(&plan.name, kind),
                    true,
                )
                .await?;

            let board_name = naming::global_board_name(&label, &plan.name);
            let board = tracker.create_board(&board_name, None, filter.id).await?;
            info!(board = %board.name, filter = filter.id, "created global board");

            self.boards.insert(board.name, board.id);
            created.push(filter);
        }

        let count = created.len();
        *self.filters.entry(instance.to_string()).or_default().of_kind(kind) = created;
        Ok(Step::Done(GlobalOutcome::Created { boards: count }))
    }

    async fn sync_team(&mut self, name: &str, team: &TeamConfig) -> SpuResult<Step<TeamOutcome>> {
        let config = self.config;
        let trackers = self.trackers;
        let instance = config.resolve_instance(name, team)?;
        let tracker = trackers
            .get(instance)
            .ok_or_else(|| SpuError::UnknownInstance {
                team: name.to_string(),
                instance: instance.to_string(),
            })?;

        let anchor = parse_date(&team.sprint_start_date)?;
        let calendar = build_calendar(self.global_start, anchor, team.sprint_length)?;
        let window = calendar.run_window(config.run_for_quarter.as_deref());

        if window.is_empty() {
            warn!(
                team = %name,
                quarter = ?config.run_for_quarter,
                "quarter is not part of the team's calendar"
            );
            return Ok(Step::Done(TeamOutcome::NothingScheduled));
        }

        if !needs_sync(&self.boards, &window, name, false) {
            debug!(team = %name, "boards already exist");
            return Ok(Step::Done(TeamOutcome::UpToDate));
        }

        if !self.confirm.confirm(name, &window)? {
            return Ok(Step::Declined);
        }

        let project = team.jira_project.as_str();
        let mut stats = TeamStats::default();

        for plan in window.quarters() {
            let filter = tracker
                .create_filter(
                    &naming::team_filter_name(&plan.name, project),
                    &naming::team_filter_jql(&plan.name, project),
                    true,
                )
                .await?;
            stats.filters_created += 1;

            stats.filters_updated += self
                .merge_into_global_filters(instance, tracker, &plan.name, project)
                .await?;

            let board = tracker
                .create_board(
                    &naming::team_board_name(&plan.name, name),
                    Some(project),
                    filter.id,
                )
                .await?;
            stats.boards_created += 1;
            info!(team = %name, board = %board.name, "created board");

            tracker
                .create_issue(
                    project,
                    &naming::quarter_issue_summary(plan.number),
                    std::slice::from_ref(&plan.name),
                    LABEL_ISSUE_TYPE,
                )
                .await?;
            stats.issues_created += 1;

            for sprint in &plan.sprints {
                tracker.create_sprint(board.id, &sprint.name).await?;
                stats.sprints_created += 1;
            }

            self.boards.insert(board.name, board.id);
        }

        Ok(Step::Done(TeamOutcome::Synced(stats)))
    }

    /// Add `project` to the instance's global filters for `quarter`.
    async fn merge_into_global_filters(
        &mut self,
        instance: &str,
        tracker: &T,
        quarter: &str,
        project: &str,
    ) -> SpuResult<usize> {
        let Some(filters) = self.filters.get_mut(instance) else {
            warn!(
                instance = %instance,
                quarter = %quarter,
                project = %project,
                "no global filters for instance, project not merged"
            );
            return Ok(0);
        };

        let mut updated = 0;
        for kind in GlobalKind::ALL {
            let initial = naming::initial_global_jql(quarter, kind);
            let of_kind = filters.of_kind(kind);
            if !of_kind.iter().any(|f| f.name.contains(quarter)) {
                warn!(
                    instance = %instance,
                    kind = %kind,
                    quarter = %quarter,
                    project = %project,
                    "no global filter for quarter, project not merged"
                );
                continue;
            }

            for filter in of_kind.iter_mut() {
                if !filter.name.contains(quarter) {
                    continue;
                }
                let Some(jql) = merge_filter_query(&filter.jql, project, &initial) else {
                    continue;
                };

                tracker.update_filter(filter.id, &filter.name, &jql).await?;
                debug!(filter = %filter.name, jql = %jql, "merged project into global filter");
                filter.jql = jql;
                updated += 1;
            }
        }

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::{Board, Issue, Sprint};
    use std::sync::Mutex;

    #[derive(Default)]
    struct State {
        boards: BTreeMap<String, u64>,
        filters: Vec<Filter>,
        created_boards: Vec<(String, Option<String>, u64)>,
        sprints: Vec<(u64, String)>,
        issues: Vec<(String, String, Vec<String>)>,
        updates: Vec<(u64, String)>,
        next_id: u64,
    }

    #[derive(Default)]
    struct FakeTracker {
        state: Mutex<State>,
        fail_boards_for: Option<String>,
    }

    impl FakeTracker {
        fn with_boards(names: &[&str]) -> Self {
            let tracker = FakeTracker::default();
            {
                let mut state = tracker.state.lock().unwrap();
                for name in names {
                    state.next_id += 1;
                    let id = state.next_id;
                    state.boards.insert(name.to_string(), id);
                }
            }
            tracker
        }

        fn state(&self) -> std::sync::MutexGuard<'_, State> {
            self.state.lock().unwrap()
        }

        fn writes(&self) -> usize {
            let state = self.state();
            state.filters.len()
                + state.created_boards.len()
                + state.sprints.len()
                + state.issues.len()
                + state.updates.len()
        }
    }

    impl Tracker for FakeTracker {
        async fn list_boards(&self) -> SpuResult<BTreeMap<String, u64>> {
            Ok(self.state().boards.clone())
        }

        async fn list_favorite_filters(&self) -> SpuResult<Vec<Filter>> {
            Ok(self.state().filters.clone())
        }

        async fn create_filter(&self, name: &str, jql: &str, _favorite: bool) -> SpuResult<Filter> {
            let mut state = self.state();
            state.next_id += 1;
            let filter = Filter {
                id: state.next_id,
                name: name.to_string(),
                jql: jql.to_string(),
            };
            state.filters.push(filter.clone());
            Ok(filter)
        }

        async fn update_filter(&self, filter_id: u64, _name: &str, jql: &str) -> SpuResult<()> {
            let mut state = self.state();
            state.updates.push((filter_id, jql.to_string()));
            if let Some(filter) = state.filters.iter_mut().find(|f| f.id == filter_id) {
                filter.jql = jql.to_string();
            }
            Ok(())
        }

        async fn create_board(
            &self,
            name: &str,
            project: Option<&str>,
            filter_id: u64,
        ) -> SpuResult<Board> {
            if project.is_some() && project == self.fail_boards_for.as_deref() {
                return Err(SpuError::Tracker(format!(
                    "board for {} rejected",
                    project.unwrap_or_default()
                )));
            }
            let mut state = self.state();
            state.next_id += 1;
            let id = state.next_id;
            state.boards.insert(name.to_string(), id);
            state
                .created_boards
                .push((name.to_string(), project.map(str::to_string), filter_id));
            Ok(Board {
                id,
                name: name.to_string(),
            })
        }

        async fn create_sprint(&self, board_id: u64, name: &str) -> SpuResult<Sprint> {
            let mut state = self.state();
            state.next_id += 1;
            state.sprints.push((board_id, name.to_string()));
            Ok(Sprint {
                id: state.next_id,
                name: name.to_string(),
            })
        }

        async fn create_issue(
            &self,
            project: &str,
            summary: &str,
            labels: &[String],
            _issue_type: &str,
        ) -> SpuResult<Issue> {
            let mut state = self.state();
            state.next_id += 1;
            state
                .issues
                .push((project.to_string(), summary.to_string(), labels.to_vec()));
            Ok(Issue {
                id: state.next_id.to_string(),
                key: format!("{}-{}", project, state.next_id),
            })
        }
    }

    struct Answer {
        yes: bool,
        asked: Mutex<Vec<String>>,
    }

    impl Answer {
        fn new(yes: bool) -> Self {
            Answer {
                yes,
                asked: Mutex::new(Vec::new()),
            }
        }
    }

    impl Confirm for Answer {
        fn confirm(&self, subject: &str, _calendar: &Calendar) -> SpuResult<bool> {
            self.asked.lock().unwrap().push(subject.to_string());
            Ok(self.yes)
        }
    }

    const CONFIG: &str = r#"
operational_q1_start = "01-01-19"
default_jira_instance = "example"

[jira.example]
server = "https://jira.example.com"
username = "bot"
password = "secret"

[teams.factory]
jira_project = "FACTORY"
sprint_length = 2
sprint_start_date = "01-07-19"
"#;

    const TWO_TEAMS: &str = r#"

[teams.other]
jira_project = "OTHER"
sprint_length = 3
sprint_start_date = "01-03-19"
"#;

    fn config(extra: &str) -> SpuConfig {
        SpuConfig::from_toml(&format!("{}{}", CONFIG, extra)).unwrap()
    }

    fn trackers(tracker: FakeTracker) -> BTreeMap<String, FakeTracker> {
        BTreeMap::from([("example".to_string(), tracker)])
    }

    async fn run(
        config: &SpuConfig,
        trackers: &BTreeMap<String, FakeTracker>,
        confirm: &impl Confirm,
    ) -> SyncReport {
        SyncRun::prepare(config, trackers, confirm)
            .await
            .unwrap()
            .run()
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn creates_global_boards_and_team_quarters() {
        let config = config("");
        let trackers = trackers(FakeTracker::default());
        let report = run(&config, &trackers, &AssumeYes).await;

        assert!(!report.aborted);
        assert_eq!(report.globals.len(), 2);
        assert!(
            report
                .globals
                .iter()
                .all(|g| g.outcome == GlobalOutcome::Created { boards: 4 })
        );

        let expected = TeamStats {
            filters_created: 4,
            filters_updated: 8,
            boards_created: 4,
            issues_created: 4,
            sprints_created: 24,
        };
        assert_eq!(report.teams[0].outcome, TeamOutcome::Synced(expected));

        let state = trackers["example"].state();
        assert!(state.boards.contains_key("GLOBAL_BOARD example Y19-Q1 Board"));
        assert!(state.boards.contains_key("GLOBAL_BAD_BOARD example Y19-Q4 Board"));
        assert!(state.boards.contains_key("Y19-Q1 - factory Board"));
        assert_eq!(state.sprints[0].1, "Y19-Q1-L2-S1");
        assert_eq!(
            state.issues[0],
            (
                "FACTORY".to_string(),
                "Quarter 1 Issue".to_string(),
                vec!["Y19-Q1".to_string()]
            )
        );
        let team_board = state
            .created_boards
            .iter()
            .find(|(name, _, _)| name == "Y19-Q2 - factory Board")
            .unwrap();
        assert_eq!(team_board.1.as_deref(), Some("FACTORY"));
    }

    #[tokio::test]
    async fn first_team_narrows_global_filter_with_and() {
        let config = config("");
        let trackers = trackers(FakeTracker::default());
        run(&config, &trackers, &AssumeYes).await;

        let state = trackers["example"].state();
        let global = state
            .filters
            .iter()
            .find(|f| f.name == "GLOBAL_BOARD example Y19-Q1 filter")
            .unwrap();
        assert_eq!(
            global.jql,
            "project = FACTORY AND labels = 'Y19-Q1' ORDER BY Rank ASC"
        );
    }

    #[tokio::test]
    async fn second_team_widens_global_filter_with_or() {
        let config = config(TWO_TEAMS);
        let trackers = trackers(FakeTracker::default());
        let report = run(&config, &trackers, &AssumeYes).await;
        assert_eq!(report.failed_teams(), 0);

        let state = trackers["example"].state();
        let global = state
            .filters
            .iter()
            .find(|f| f.name == "GLOBAL_BOARD example Y19-Q1 filter")
            .unwrap();
        assert_eq!(
            global.jql,
            "project = OTHER OR project = FACTORY AND labels = 'Y19-Q1' ORDER BY Rank ASC"
        );
    }

    #[tokio::test]
    async fn existing_boards_skip_everything() {
        let config = config("");
        let tracker = FakeTracker::with_boards(&[
            "GLOBAL_BOARD example Y19-Q1 Board",
            "GLOBAL_BAD_BOARD example Y19-Q1 Board",
            "Y19-Q3 - factory Board",
        ]);
        let trackers = trackers(tracker);
        let answer = Answer::new(true);
        let report = run(&config, &trackers, &answer).await;

        assert!(
            report
                .globals
                .iter()
                .all(|g| g.outcome == GlobalOutcome::Existing { filters: 0 })
        );
        assert_eq!(report.teams[0].outcome, TeamOutcome::UpToDate);
        assert!(answer.asked.lock().unwrap().is_empty());
        assert_eq!(trackers["example"].writes(), 0);
    }

    #[tokio::test]
    async fn existing_global_filters_are_merged() {
        let config = config("");
        let tracker = FakeTracker::with_boards(&[
            "GLOBAL_BOARD example Y19-Q1 Board",
            "GLOBAL_BAD_BOARD example Y19-Q1 Board",
        ]);
        tracker.state().filters.push(Filter {
            id: 500,
            name: "GLOBAL_BOARD example Y19-Q2 filter".to_string(),
            jql: "project = OTHER AND labels = 'Y19-Q2' ORDER BY Rank ASC".to_string(),
        });
        let trackers = trackers(tracker);
        let report = run(&config, &trackers, &AssumeYes).await;

        assert_eq!(
            report.globals[0].outcome,
            GlobalOutcome::Existing { filters: 1 }
        );
        let state = trackers["example"].state();
        assert_eq!(
            state.updates,
            vec![(
                500,
                "project = FACTORY OR project = OTHER AND labels = 'Y19-Q2' ORDER BY Rank ASC"
                    .to_string()
            )]
        );
    }

    #[tokio::test]
    async fn global_prompts_name_the_instance() {
        let config = SpuConfig::from_toml(&format!(
            "{}{}",
            CONFIG,
            r#"

[jira.second]
server = "https://second.example.com"
username = "bot"
password = "secret"
"#
        ))
        .unwrap();
        let trackers = BTreeMap::from([
            ("example".to_string(), FakeTracker::default()),
            ("second".to_string(), FakeTracker::default()),
        ]);
        let answer = Answer::new(true);
        run(&config, &trackers, &answer).await;

        let asked = answer.asked.lock().unwrap();
        assert_eq!(
            asked[..4],
            [
                "GLOBAL_BOARD example".to_string(),
                "GLOBAL_BAD_BOARD example".to_string(),
                "GLOBAL_BOARD second".to_string(),
                "GLOBAL_BAD_BOARD second".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn team_syncs_when_global_filters_are_missing() {
        let config = config("");
        let tracker = FakeTracker::with_boards(&[
            "GLOBAL_BOARD example Y19-Q1 Board",
            "GLOBAL_BAD_BOARD example Y19-Q1 Board",
        ]);
        let trackers = trackers(tracker);
        let report = run(&config, &trackers, &AssumeYes).await;

        assert_eq!(
            report.globals[0].outcome,
            GlobalOutcome::Existing { filters: 0 }
        );
        match &report.teams[0].outcome {
            TeamOutcome::Synced(stats) => {
                assert_eq!(stats.boards_created, 4);
                assert_eq!(stats.filters_updated, 0);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert!(trackers["example"].state().updates.is_empty());
    }

    #[tokio::test]
    async fn invalid_anchor_fails_only_that_team() {
        let config = config(
            r#"

[teams.late]
jira_project = "LATE"
sprint_length = 2
sprint_start_date = "03-12-19"
"#,
        );
        let trackers = trackers(FakeTracker::default());
        let report = run(&config, &trackers, &AssumeYes).await;

        let late = report.teams.iter().find(|t| t.team == "late").unwrap();
        assert!(matches!(&late.outcome, TeamOutcome::Failed(msg) if msg.contains("03-12") || msg.contains("2019-03-12")));
        let factory = report.teams.iter().find(|t| t.team == "factory").unwrap();
        assert!(matches!(factory.outcome, TeamOutcome::Synced(_)));
        assert_eq!(report.failed_teams(), 1);
    }

    #[tokio::test]
    async fn missing_instance_fails_only_that_team() {
        let config = SpuConfig::from_toml(
            &format!("{}{}", CONFIG, TWO_TEAMS)
                .replace("default_jira_instance = \"example\"", "")
                .replace(
                    "jira_project = \"FACTORY\"",
                    "jira_project = \"FACTORY\"\njira_instance = \"example\"",
                ),
        )
        .unwrap();
        let trackers = trackers(FakeTracker::default());
        let report = run(&config, &trackers, &AssumeYes).await;

        let other = report.teams.iter().find(|t| t.team == "other").unwrap();
        assert!(matches!(&other.outcome, TeamOutcome::Failed(msg) if msg.contains("other")));
        let factory = report.teams.iter().find(|t| t.team == "factory").unwrap();
        assert!(matches!(factory.outcome, TeamOutcome::Synced(_)));
    }

    #[tokio::test]
    async fn tracker_failure_is_isolated() {
        let config = config(TWO_TEAMS);
        let tracker = FakeTracker {
            fail_boards_for: Some("FACTORY".to_string()),
            ..Default::default()
        };
        let trackers = trackers(tracker);
        let report = run(&config, &trackers, &AssumeYes).await;

        let factory = report.teams.iter().find(|t| t.team == "factory").unwrap();
        assert!(matches!(factory.outcome, TeamOutcome::Failed(_)));
        let other = report.teams.iter().find(|t| t.team == "other").unwrap();
        assert!(matches!(other.outcome, TeamOutcome::Synced(_)));
    }

    #[tokio::test]
    async fn declining_stops_before_any_write() {
        let config = config("");
        let trackers = trackers(FakeTracker::default());
        let answer = Answer::new(false);
        let report = run(&config, &trackers, &answer).await;

        assert!(report.aborted);
        assert!(report.teams.is_empty());
        assert_eq!(
            *answer.asked.lock().unwrap(),
            vec!["GLOBAL_BOARD example".to_string()]
        );
        assert_eq!(trackers["example"].writes(), 0);
    }

    #[tokio::test]
    async fn run_for_quarter_limits_the_window() {
        let config = SpuConfig {
            run_for_quarter: Some("Y19-Q2".to_string()),
            ..config("")
        };
        let tracker = FakeTracker::with_boards(&[
            "GLOBAL_BOARD example Y19-Q1 Board",
            "GLOBAL_BAD_BOARD example Y19-Q1 Board",
        ]);
        let trackers = trackers(tracker);
        let report = run(&config, &trackers, &AssumeYes).await;

        match &report.teams[0].outcome {
            TeamOutcome::Synced(stats) => {
                assert_eq!(stats.boards_created, 1);
                assert_eq!(stats.sprints_created, 6);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        let state = trackers["example"].state();
        assert!(state.boards.contains_key("Y19-Q2 - factory Board"));
        assert_eq!(state.issues[0].1, "Quarter 1 Issue");
    }

    #[tokio::test]
    async fn unknown_run_quarter_schedules_nothing() {
        let config = SpuConfig {
            run_for_quarter: Some("Y40-Q1".to_string()),
            ..config("")
        };
        let tracker = FakeTracker::with_boards(&[
            "GLOBAL_BOARD example Y19-Q1 Board",
            "GLOBAL_BAD_BOARD example Y19-Q1 Board",
        ]);
        let trackers = trackers(tracker);
        let report = run(&config, &trackers, &AssumeYes).await;
        assert_eq!(report.teams[0].outcome, TeamOutcome::NothingScheduled);
    }

    #[tokio::test]
    async fn rerun_is_a_no_op() {
        let config = config(TWO_TEAMS);
        let trackers = trackers(FakeTracker::default());
        run(&config, &trackers, &AssumeYes).await;
        let writes = trackers["example"].writes();

        let report = run(&config, &trackers, &AssumeYes).await;
        assert!(
            report
                .teams
                .iter()
                .all(|t| t.outcome == TeamOutcome::UpToDate)
        );
        assert_eq!(trackers["example"].writes(), writes);
    }
}
