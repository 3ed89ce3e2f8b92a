//! Mission tracker and mission details services

use std::ops::Range;

use bombcanary_domain::{MissionRequirement, MissionResult, MissionTimeline, TeamVotes};

use crate::presentation::join_names;

pub trait MissionTrackerValues {
    fn mission_requirements(&self) -> &[MissionRequirement];
    fn mission_results(&self) -> &[MissionResult];
}

pub struct MissionTrackerService<'a> {
    values: &'a dyn MissionTrackerValues,
}

impl<'a> MissionTrackerService<'a> {
    pub fn new(values: &'a dyn MissionTrackerValues) -> Self {
        Self { values }
    }

    fn current_mission(&self) -> usize {
        self.values.mission_results().len()
    }

    /// One slot per mission requirement
    pub fn missions(&self) -> Range<usize> {
        0..self.values.mission_requirements().len()
    }

    pub fn is_current_mission(&self, mission: usize) -> bool {
        self.current_mission() == mission
    }

    pub fn should_mission_tag_show_success(&self, mission: usize) -> bool {
        self.result(mission).is_some_and(|r| r.success)
    }

    pub fn should_mission_tag_show_failure(&self, mission: usize) -> bool {
        self.result(mission).is_some_and(|r| !r.success)
    }

    pub fn should_mission_tag_show_people_on_mission(&self, mission: usize) -> bool {
        mission >= self.current_mission()
    }

    pub fn people_on_mission(&self, mission: usize) -> Option<usize> {
        self.values
            .mission_requirements()
            .get(mission)
            .map(|r| r.people_on_mission)
    }

    pub fn does_mission_need_more_than_one_fail(&self, mission: usize) -> bool {
        self.values
            .mission_requirements()
            .get(mission)
            .is_some_and(|r| r.failures_required_to_fail > 1)
    }

    pub fn people_required_on_current_mission(&self) -> Option<usize> {
        self.people_on_mission(self.current_mission())
    }

    fn result(&self, mission: usize) -> Option<&MissionResult> {
        self.values.mission_results().get(mission)
    }
}

/// What the details dialog knows about one mission slot. Every slot-specific
/// value is `None` until the slot has that data.
pub trait MissionDetailsValues {
    fn mission(&self) -> usize;
    fn mission_timeline(&self) -> MissionTimeline;
    fn team_votes(&self) -> Option<&TeamVotes>;
    fn mission_requirement(&self) -> Option<&MissionRequirement>;
    fn mission_result(&self) -> Option<bool>;
    fn failure_count(&self) -> Option<usize>;
}

pub struct MissionDetailsService<'a> {
    values: &'a dyn MissionDetailsValues,
}

impl<'a> MissionDetailsService<'a> {
    pub fn new(values: &'a dyn MissionDetailsValues) -> Self {
        Self { values }
    }

    pub fn mission(&self) -> usize {
        self.values.mission()
    }

    pub fn mission_timeline(&self) -> MissionTimeline {
        self.values.mission_timeline()
    }

    pub fn team_votes(&self) -> Option<&TeamVotes> {
        self.values.team_votes()
    }

    pub fn team_size(&self) -> usize {
        self.values
            .mission_requirement()
            .map_or(0, |r| r.people_on_mission)
    }

    pub fn failures_required_to_fail(&self) -> usize {
        self.values
            .mission_requirement()
            .map_or(0, |r| r.failures_required_to_fail)
    }

    /// Team proposed in vote round `vote` (0-based), as `"a, b and c"`
    pub fn team_from_vote_as_string(&self, vote: usize) -> String {
        self.values
            .team_votes()
            .and_then(|t| t.votes.get(vote))
            .map(|v| join_names(&v.team))
            .unwrap_or_default()
    }

    pub fn has_mission_succeeded(&self) -> bool {
        self.values.mission_result().unwrap_or(false)
    }

    pub fn failure_count(&self) -> usize {
        self.values.failure_count().unwrap_or(0)
    }

    pub fn success_count(&self) -> usize {
        self.team_size().saturating_sub(self.failure_count())
    }

    pub fn should_show_votes(&self) -> bool {
        matches!(
            self.mission_timeline(),
            MissionTimeline::Past | MissionTimeline::Current
        )
    }

    pub fn should_show_mission_result(&self) -> bool {
        self.mission_timeline() == MissionTimeline::Past
    }
}
