//! Roster partition manager.
//!
//! Owns the fixed student population, the current team partition, and
//! the pending direct-manipulation subject. Every operation is a
//! synchronous state transition that ends in a state satisfying the
//! partition invariants:
//!
//! - each student id appears in at most one team's member list
//! - every member id exists in the population
//!
//! Coverage is not an invariant: unassigned students and empty teams
//! are legal. Only [`regenerate`](RosterManager::regenerate) guarantees
//! full coverage of the population.
//!
//! # Atomicity
//!
//! Each operation takes `&mut self` and completes before returning, so
//! a caller can never observe a student removed from its old team but
//! not yet appended to the new one. Failing operations leave the state
//! unchanged.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::RosterError;
use crate::models::{Partition, Roster, Student, Team};
use crate::validation::validate_partition;

/// The partition state machine.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use team_roster::manager::RosterManager;
/// use team_roster::models::{Roster, Student};
///
/// let roster = Roster::new(vec![
///     Student::new("s1", "Ana Maria"),
///     Student::new("s2", "Bogdan"),
///     Student::new("s3", "Cristi"),
/// ]).unwrap();
///
/// let mut mgr = RosterManager::new(roster);
/// let mut rng = SmallRng::seed_from_u64(7);
/// mgr.regenerate(2, &mut rng).unwrap();
/// assert_eq!(mgr.partition().team_count(), 2);
///
/// mgr.move_student("s1", "TeamX").unwrap();
/// assert_eq!(mgr.partition().team_of("s1").unwrap().id, "TeamX");
/// ```
#[derive(Debug, Clone)]
pub struct RosterManager {
    roster: Roster,
    partition: Partition,
    pending: Option<String>,
}

impl RosterManager {
    /// Creates a manager with an empty partition.
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            partition: Partition::new(),
            pending: None,
        }
    }

    /// Creates a manager from a seed partition.
    ///
    /// The seed is validated against the roster; a corrupt seed
    /// (duplicate membership or unknown student references) is rejected.
    pub fn with_seed_partition(roster: Roster, partition: Partition) -> Result<Self, RosterError> {
        if let Err(errors) = validate_partition(&roster, &partition) {
            let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
            return Err(RosterError::InvalidSeedPartition(messages.join("; ")));
        }
        Ok(Self {
            roster,
            partition,
            pending: None,
        })
    }

    /// The student population.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The current partition.
    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    /// Students not currently assigned to any team, in roster order.
    pub fn unassigned(&self) -> Vec<&Student> {
        self.roster
            .students()
            .iter()
            .filter(|s| !self.partition.contains_student(&s.id))
            .collect()
    }

    /// Replaces the whole partition with randomly generated teams.
    ///
    /// Shuffles the entire population into a uniform random permutation
    /// (Fisher–Yates via [`SliceRandom::shuffle`]) and chunks it into
    /// consecutive teams of `team_size`, assigning ids `T1, T2, …` and
    /// names `Team 1, Team 2, …`. The final team may be smaller when the
    /// population size is not a multiple of `team_size`.
    ///
    /// This is a full replacement: manually curated team names and empty
    /// teams are discarded, never merged. After it returns, every student
    /// belongs to exactly one team.
    ///
    /// `team_size == 0` is rejected with [`RosterError::InvalidTeamSize`]
    /// and leaves the partition untouched.
    pub fn regenerate<R: Rng>(&mut self, team_size: usize, rng: &mut R) -> Result<(), RosterError> {
        if team_size == 0 {
            return Err(RosterError::InvalidTeamSize(team_size));
        }

        let mut ids: Vec<String> = self.roster.ids().map(String::from).collect();
        ids.shuffle(rng);

        let mut partition = Partition::new();
        for (index, chunk) in ids.chunks(team_size).enumerate() {
            let number = index + 1;
            partition.insert_team(
                Team::new(format!("T{number}"))
                    .with_name(format!("Team {number}"))
                    .with_members(chunk.to_vec()),
            );
        }

        self.partition = partition;
        Ok(())
    }

    /// Moves a student to a team, creating the team if absent.
    ///
    /// The student is removed from whichever team currently holds it (at
    /// most one, by invariant) and appended to the end of the target's
    /// member list — the append position is display order and is
    /// observable. A missing target team is created with its name
    /// defaulting to the id literal.
    ///
    /// An unknown student id is rejected with
    /// [`RosterError::UnknownStudent`] and changes nothing.
    pub fn move_student(&mut self, student_id: &str, target_team_id: &str) -> Result<(), RosterError> {
        if !self.roster.contains(student_id) {
            return Err(RosterError::UnknownStudent(student_id.to_string()));
        }

        for team in self.partition.teams_mut() {
            team.remove_member(student_id);
        }

        if self.partition.team(target_team_id).is_none() {
            self.partition.insert_team(Team::new(target_team_id));
        }
        // Lookup cannot fail: the team was just ensured above.
        if let Some(target) = self.partition.team_mut(target_team_id) {
            target.members.push(student_id.to_string());
        }
        Ok(())
    }

    /// Deletes a team, returning it if it existed.
    ///
    /// Its members become unassigned; they are not redistributed. Any
    /// redistribution is the caller's responsibility via subsequent
    /// [`move_student`](Self::move_student) calls. Removing a
    /// nonexistent id is a no-op.
    pub fn remove_team(&mut self, team_id: &str) -> Option<Team> {
        self.partition.remove_team(team_id)
    }

    /// Records a student as the pending direct-manipulation subject.
    ///
    /// This is the "pick up" half of a drag gesture. An unknown student
    /// id is rejected and does not disturb an existing pending subject.
    pub fn begin_move(&mut self, student_id: &str) -> Result<(), RosterError> {
        if !self.roster.contains(student_id) {
            return Err(RosterError::UnknownStudent(student_id.to_string()));
        }
        self.pending = Some(student_id.to_string());
        Ok(())
    }

    /// Commits the pending subject to a team and clears it.
    ///
    /// This is the "drop" half of a drag gesture. A commit with no
    /// pending subject (a stray drop event) is a no-op returning
    /// `Ok(false)`; a performed move returns `Ok(true)`.
    pub fn commit_move(&mut self, target_team_id: &str) -> Result<bool, RosterError> {
        let Some(student_id) = self.pending.take() else {
            return Ok(false);
        };
        self.move_student(&student_id, target_team_id)?;
        Ok(true)
    }

    /// Clears the pending subject without moving anyone.
    pub fn cancel_move(&mut self) {
        self.pending = None;
    }

    /// The pending direct-manipulation subject, if any.
    pub fn pending_student(&self) -> Option<&str> {
        self.pending.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_partition;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use std::collections::HashSet;

    fn sample_roster() -> Roster {
        Roster::new(vec![
            Student::new("s1", "Ana Maria"),
            Student::new("s2", "Bogdan"),
            Student::new("s3", "Cristi"),
            Student::new("s4", "Dana"),
            Student::new("s5", "Elena"),
            Student::new("s6", "Florin"),
            Student::new("s7", "Gabriel"),
            Student::new("s8", "Ioana"),
        ])
        .unwrap()
    }

    fn seeded_manager() -> RosterManager {
        let mut partition = Partition::new();
        partition.insert_team(
            Team::new("TeamA")
                .with_name("Team Alpha")
                .with_members(vec!["s1".into(), "s4".into()]),
        );
        partition.insert_team(
            Team::new("TeamB")
                .with_name("Team Beta")
                .with_members(vec!["s2".into(), "s3".into()]),
        );
        RosterManager::with_seed_partition(sample_roster(), partition).unwrap()
    }

    fn assert_invariants(mgr: &RosterManager) {
        validate_partition(mgr.roster(), mgr.partition()).unwrap();
    }

    #[test]
    fn test_new_manager_is_empty() {
        let mgr = RosterManager::new(sample_roster());
        assert!(mgr.partition().is_empty());
        assert_eq!(mgr.unassigned().len(), 8);
        assert!(mgr.pending_student().is_none());
    }

    #[test]
    fn test_seed_partition_rejects_duplicate_membership() {
        let mut partition = Partition::new();
        partition.insert_team(Team::new("A").with_members(vec!["s1".into()]));
        partition.insert_team(Team::new("B").with_members(vec!["s1".into()]));

        let err = RosterManager::with_seed_partition(sample_roster(), partition).unwrap_err();
        assert!(matches!(err, RosterError::InvalidSeedPartition(_)));
    }

    #[test]
    fn test_seed_partition_rejects_unknown_student() {
        let mut partition = Partition::new();
        partition.insert_team(Team::new("A").with_members(vec!["ghost".into()]));

        let err = RosterManager::with_seed_partition(sample_roster(), partition).unwrap_err();
        assert!(matches!(err, RosterError::InvalidSeedPartition(_)));
    }

    #[test]
    fn test_regenerate_covers_every_student_exactly_once() {
        let mut mgr = RosterManager::new(sample_roster());
        let mut rng = SmallRng::seed_from_u64(42);
        mgr.regenerate(3, &mut rng).unwrap();

        // 8 students, size 3 → ceil(8/3) = 3 teams of sizes 3,3,2
        assert_eq!(mgr.partition().team_count(), 3);
        let mut sizes: Vec<usize> = mgr.partition().teams().iter().map(Team::len).collect();
        sizes.sort_unstable();
        assert_eq!(sizes, vec![2, 3, 3]);

        let covered: HashSet<&str> = mgr
            .partition()
            .teams()
            .iter()
            .flat_map(|t| t.members.iter().map(String::as_str))
            .collect();
        assert_eq!(covered.len(), 8);
        assert!(mgr.unassigned().is_empty());
        assert_invariants(&mgr);
    }

    #[test]
    fn test_regenerate_ids_and_names_are_sequential() {
        let mut mgr = RosterManager::new(sample_roster());
        let mut rng = SmallRng::seed_from_u64(1);
        mgr.regenerate(3, &mut rng).unwrap();

        let teams = mgr.partition().teams();
        assert_eq!(teams[0].id, "T1");
        assert_eq!(teams[0].name, "Team 1");
        assert_eq!(teams[2].id, "T3");
        assert_eq!(teams[2].name, "Team 3");
    }

    #[test]
    fn test_regenerate_exact_multiple() {
        let mut mgr = RosterManager::new(sample_roster());
        let mut rng = SmallRng::seed_from_u64(3);
        mgr.regenerate(4, &mut rng).unwrap();

        assert_eq!(mgr.partition().team_count(), 2);
        assert!(mgr.partition().teams().iter().all(|t| t.len() == 4));
    }

    #[test]
    fn test_regenerate_size_one_and_oversized() {
        let mut mgr = RosterManager::new(sample_roster());
        let mut rng = SmallRng::seed_from_u64(5);

        mgr.regenerate(1, &mut rng).unwrap();
        assert_eq!(mgr.partition().team_count(), 8);

        mgr.regenerate(20, &mut rng).unwrap();
        assert_eq!(mgr.partition().team_count(), 1);
        assert_eq!(mgr.partition().teams()[0].len(), 8);
    }

    #[test]
    fn test_regenerate_zero_is_rejected_without_state_change() {
        let mut mgr = seeded_manager();
        let before = mgr.partition().clone();
        let mut rng = SmallRng::seed_from_u64(42);

        let err = mgr.regenerate(0, &mut rng).unwrap_err();
        assert_eq!(err, RosterError::InvalidTeamSize(0));
        assert_eq!(mgr.partition(), &before);
    }

    #[test]
    fn test_regenerate_discards_curated_teams() {
        let mut mgr = seeded_manager();
        let mut rng = SmallRng::seed_from_u64(42);
        mgr.regenerate(4, &mut rng).unwrap();

        assert!(mgr.partition().team("TeamA").is_none());
        assert!(mgr.partition().team("TeamB").is_none());
        assert!(!mgr
            .partition()
            .teams()
            .iter()
            .any(|t| t.name == "Team Alpha"));
    }

    #[test]
    fn test_regenerate_is_a_uniform_permutation() {
        // Across seeds each student should appear in the first slot at
        // least once; 200 fixed seeds make a miss astronomically
        // unlikely for an unbiased shuffle.
        let mut first_slot: HashSet<String> = HashSet::new();
        for seed in 0..200 {
            let mut mgr = RosterManager::new(sample_roster());
            let mut rng = SmallRng::seed_from_u64(seed);
            mgr.regenerate(8, &mut rng).unwrap();
            first_slot.insert(mgr.partition().teams()[0].members[0].clone());
        }
        assert_eq!(first_slot.len(), 8, "every student should lead some shuffle");
    }

    #[test]
    fn test_move_transfers_never_duplicates() {
        let mut mgr = seeded_manager();
        mgr.move_student("s1", "TeamB").unwrap();

        let a = mgr.partition().team("TeamA").unwrap();
        let b = mgr.partition().team("TeamB").unwrap();
        assert!(!a.contains("s1"));
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 3);
        assert_eq!(b.members.last().map(String::as_str), Some("s1"));
        assert_invariants(&mgr);
    }

    #[test]
    fn test_move_creates_missing_team_with_id_as_name() {
        let mut mgr = seeded_manager();
        mgr.move_student("s1", "TeamX").unwrap();

        let x = mgr.partition().team("TeamX").unwrap();
        assert_eq!(x.name, "TeamX");
        assert_eq!(x.members, vec!["s1"]);
        assert!(!mgr.partition().team("TeamA").unwrap().contains("s1"));
    }

    #[test]
    fn test_move_unassigned_student() {
        let mut mgr = seeded_manager();
        // s5 is in no team
        mgr.move_student("s5", "TeamA").unwrap();
        assert_eq!(mgr.partition().team_of("s5").unwrap().id, "TeamA");
        assert_invariants(&mgr);
    }

    #[test]
    fn test_move_is_idempotent_on_target() {
        let mut mgr = seeded_manager();
        mgr.move_student("s1", "TeamB").unwrap();
        let once = mgr.partition().clone();
        mgr.move_student("s1", "TeamB").unwrap();
        assert_eq!(mgr.partition(), &once);
    }

    #[test]
    fn test_move_unknown_student_is_rejected_without_state_change() {
        let mut mgr = seeded_manager();
        let before = mgr.partition().clone();

        let err = mgr.move_student("ghost", "TeamA").unwrap_err();
        assert_eq!(err, RosterError::UnknownStudent("ghost".into()));
        assert_eq!(mgr.partition(), &before);
    }

    #[test]
    fn test_remove_team_unassigns_members() {
        let mut mgr = seeded_manager();
        let removed = mgr.remove_team("TeamA").unwrap();
        assert_eq!(removed.members, vec!["s1", "s4"]);

        // Students survive in the population, just unassigned
        assert_eq!(mgr.roster().len(), 8);
        assert!(!mgr.partition().contains_student("s1"));
        assert!(!mgr.partition().contains_student("s4"));
        let unassigned: Vec<&str> = mgr.unassigned().iter().map(|s| s.id.as_str()).collect();
        assert!(unassigned.contains(&"s1"));
        assert!(unassigned.contains(&"s4"));
        assert_invariants(&mgr);
    }

    #[test]
    fn test_remove_nonexistent_team_is_noop() {
        let mut mgr = seeded_manager();
        let before = mgr.partition().clone();
        assert!(mgr.remove_team("TeamZ").is_none());
        assert_eq!(mgr.partition(), &before);
    }

    #[test]
    fn test_two_phase_move() {
        let mut mgr = seeded_manager();
        mgr.begin_move("s2").unwrap();
        assert_eq!(mgr.pending_student(), Some("s2"));

        assert!(mgr.commit_move("TeamA").unwrap());
        assert!(mgr.pending_student().is_none());
        assert_eq!(mgr.partition().team_of("s2").unwrap().id, "TeamA");
    }

    #[test]
    fn test_stray_drop_is_noop() {
        let mut mgr = seeded_manager();
        let before = mgr.partition().clone();
        assert!(!mgr.commit_move("TeamA").unwrap());
        assert_eq!(mgr.partition(), &before);
    }

    #[test]
    fn test_begin_move_unknown_student_keeps_existing_subject() {
        let mut mgr = seeded_manager();
        mgr.begin_move("s2").unwrap();
        assert!(mgr.begin_move("ghost").is_err());
        assert_eq!(mgr.pending_student(), Some("s2"));
    }

    #[test]
    fn test_cancel_move() {
        let mut mgr = seeded_manager();
        mgr.begin_move("s2").unwrap();
        mgr.cancel_move();
        assert!(mgr.pending_student().is_none());
        assert!(!mgr.commit_move("TeamA").unwrap());
    }

    #[test]
    fn test_regenerate_preserves_pending_subject() {
        let mut mgr = seeded_manager();
        mgr.begin_move("s2").unwrap();
        let mut rng = SmallRng::seed_from_u64(42);
        mgr.regenerate(3, &mut rng).unwrap();

        assert_eq!(mgr.pending_student(), Some("s2"));
        assert!(mgr.commit_move("TeamX").unwrap());
        assert_eq!(mgr.partition().team_of("s2").unwrap().id, "TeamX");
        assert_invariants(&mgr);
    }

    #[test]
    fn test_invariants_hold_under_mixed_operation_sequence() {
        let mut mgr = RosterManager::new(sample_roster());
        let mut rng = SmallRng::seed_from_u64(9);

        mgr.regenerate(3, &mut rng).unwrap();
        assert_invariants(&mgr);

        mgr.move_student("s1", "TeamX").unwrap();
        assert_invariants(&mgr);

        mgr.remove_team("T1");
        assert_invariants(&mgr);

        mgr.move_student("s8", "TeamX").unwrap();
        assert_invariants(&mgr);

        mgr.regenerate(2, &mut rng).unwrap();
        assert_invariants(&mgr);
        assert!(mgr.unassigned().is_empty());
        assert_eq!(mgr.partition().team_count(), 4);
    }

    #[test]
    fn test_example_scenario() {
        // Population s1..s8, regenerate(3) → 3 teams sized {3,3,2},
        // then move s1 to a new TeamX.
        let mut mgr = RosterManager::new(sample_roster());
        let mut rng = SmallRng::seed_from_u64(42);
        mgr.regenerate(3, &mut rng).unwrap();

        let old_team_id = mgr.partition().team_of("s1").unwrap().id.clone();
        let old_size = mgr.partition().team(&old_team_id).unwrap().len();

        mgr.move_student("s1", "TeamX").unwrap();
        assert_eq!(mgr.partition().team_count(), 4);
        assert_eq!(mgr.partition().team("TeamX").unwrap().members, vec!["s1"]);
        assert_eq!(
            mgr.partition().team(&old_team_id).unwrap().len(),
            old_size - 1
        );
        assert_invariants(&mgr);
    }

    #[test]
    fn test_empty_population() {
        let mut mgr = RosterManager::new(Roster::default());
        let mut rng = SmallRng::seed_from_u64(42);
        mgr.regenerate(3, &mut rng).unwrap();
        assert!(mgr.partition().is_empty());
        assert!(mgr.unassigned().is_empty());
    }
}
