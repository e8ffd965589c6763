use proptest::prelude::*;

use tally_types::{Timestamp, VoterId};
use tally_voting::{VoteAction, VoteDirection, VoteState, VoterStatus};

fn voter() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["u1", "u2", "u3", "u4", "u5"]).prop_map(String::from)
}

fn action() -> impl Strategy<Value = VoteAction> {
    prop_oneof![
        Just(VoteAction::Upvote),
        Just(VoteAction::Downvote),
        Just(VoteAction::Unvote),
    ]
}

fn apply(state: &mut VoteState, voter: &str, action: VoteAction, at: u64) -> VoterStatus {
    let now = Timestamp::new(at);
    match action {
        VoteAction::Upvote => state.upvote_at(voter, now),
        VoteAction::Downvote => state.downvote_at(voter, now),
        VoteAction::Unvote => state.unvote(voter),
    }
}

fn assert_disjoint(state: &VoteState) -> Result<(), TestCaseError> {
    for v in state.upvoters() {
        prop_assert!(!state.downvoted(v), "{} is in both sets", v);
    }
    Ok(())
}

proptest! {
    /// Upvote always ends Positive; downvote Negative; unvote Unvoted.
    #[test]
    fn last_action_decides_status(
        ops in prop::collection::vec((voter(), action()), 0..40),
        target in voter(),
        last in action(),
    ) {
        let mut state = VoteState::new();
        for (i, (v, a)) in ops.iter().enumerate() {
            apply(&mut state, v, *a, i as u64);
        }
        apply(&mut state, &target, last, ops.len() as u64);

        match last {
            VoteAction::Upvote => {
                prop_assert!(state.upvoted(&target));
                prop_assert!(!state.downvoted(&target));
            }
            VoteAction::Downvote => {
                prop_assert!(state.downvoted(&target));
                prop_assert!(!state.upvoted(&target));
            }
            VoteAction::Unvote => prop_assert!(!state.voted(&target)),
        }
    }

    /// The two membership sets never share a voter, and the total is the sum.
    #[test]
    fn sets_stay_disjoint_and_total_is_sum(
        ops in prop::collection::vec((voter(), action()), 0..60),
    ) {
        let mut state = VoteState::new();
        for (i, (v, a)) in ops.iter().enumerate() {
            apply(&mut state, v, *a, i as u64);
            assert_disjoint(&state)?;
            prop_assert_eq!(
                state.total_vote_count(),
                state.upvote_count() + state.downvote_count()
            );
        }
    }

    /// Re-upvoting keeps membership but always adds an audit event.
    #[test]
    fn repeated_upvote_grows_history_only(
        v in voter(),
        repeats in 1usize..10,
    ) {
        let mut state = VoteState::new();
        state.upvote_at(v.as_str(), Timestamp::new(0));
        for i in 0..repeats {
            let before = state.upvote_count();
            let prev = state.upvote_at(v.as_str(), Timestamp::new(i as u64 + 1));
            prop_assert_eq!(prev, VoterStatus::Positive);
            prop_assert_eq!(state.upvote_count(), before);
        }
        prop_assert_eq!(state.history(VoteDirection::Positive).len(), repeats + 1);
    }

    /// History lengths equal the number of up/down actions ever applied.
    #[test]
    fn history_is_never_pruned(
        ops in prop::collection::vec((voter(), action()), 0..60),
    ) {
        let mut state = VoteState::new();
        for (i, (v, a)) in ops.iter().enumerate() {
            apply(&mut state, v, *a, i as u64);
        }
        let ups = ops.iter().filter(|(_, a)| *a == VoteAction::Upvote).count();
        let downs = ops.iter().filter(|(_, a)| *a == VoteAction::Downvote).count();
        prop_assert_eq!(state.history(VoteDirection::Positive).len(), ups);
        prop_assert_eq!(state.history(VoteDirection::Negative).len(), downs);

        let stamps: Vec<u64> = state
            .history(VoteDirection::Positive)
            .iter()
            .map(|e| e.timestamp.as_millis())
            .collect();
        let mut sorted = stamps.clone();
        sorted.sort_unstable();
        prop_assert_eq!(stamps, sorted);
    }

    /// Returned previous status matches the status observed before the call.
    #[test]
    fn transitions_report_previous_status(
        ops in prop::collection::vec((voter(), action()), 1..40),
    ) {
        let mut state = VoteState::new();
        for (i, (v, a)) in ops.iter().enumerate() {
            let observed = state.status(v.as_str());
            let reported = apply(&mut state, v, *a, i as u64);
            prop_assert_eq!(observed, reported);
        }
    }

    /// Raw ids and canonical ids answer queries identically.
    #[test]
    fn query_forms_agree(
        ops in prop::collection::vec((voter(), action()), 0..30),
        probe in voter(),
    ) {
        let mut state = VoteState::new();
        for (i, (v, a)) in ops.iter().enumerate() {
            apply(&mut state, v, *a, i as u64);
        }
        let id = VoterId::new(probe.clone());
        prop_assert_eq!(state.upvoted(probe.as_str()), state.upvoted(&id));
        prop_assert_eq!(state.downvoted(probe.as_str()), state.downvoted(&id));
        prop_assert_eq!(state.voted(&probe), state.voted(id));
    }
}
