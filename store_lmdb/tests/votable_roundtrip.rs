use serde::{Deserialize, Serialize};

use tally_store::EntityStore;
use tally_store_lmdb::LmdbEnvironment;
use tally_types::{EntityId, Timestamp};
use tally_voting::{Votable, VoteAction, VoteDirection, VoteEngine, VoteState, VoterStatus};

const MAP_SIZE: usize = 10 * 1024 * 1024;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Article {
    id: EntityId,
    body: String,
    votes: VoteState,
}

impl Votable for Article {
    fn entity_id(&self) -> &EntityId {
        &self.id
    }

    fn votes(&self) -> &VoteState {
        &self.votes
    }

    fn votes_mut(&mut self) -> &mut VoteState {
        &mut self.votes
    }
}

#[test]
fn engine_persists_votes_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let id = EntityId::new("5f1d7c2e9b1e8a0012345678");

    {
        let env = LmdbEnvironment::open(dir.path(), MAP_SIZE, "User").unwrap();
        let engine = VoteEngine::new(env.entity_store());
        let mut article = Article {
            id: id.clone(),
            body: "hello".into(),
            votes: VoteState::new(),
        };

        engine
            .apply_at(&mut article, "u1", VoteAction::Upvote, Timestamp::new(1))
            .unwrap();
        engine
            .apply_at(&mut article, "u2", VoteAction::Upvote, Timestamp::new(2))
            .unwrap();
        engine
            .apply_at(&mut article, "u3", VoteAction::Downvote, Timestamp::new(3))
            .unwrap();
        let switched = engine
            .apply_at(&mut article, "u2", VoteAction::Downvote, Timestamp::new(4))
            .unwrap();
        assert_eq!(switched.from, VoterStatus::Positive);
        assert_eq!(engine.store().entity_count().unwrap(), 1);
    }

    let env = LmdbEnvironment::open(dir.path(), MAP_SIZE, "User").unwrap();
    let stored = Article::load(&env.entity_store(), &id).unwrap();
    let votes = stored.votes();

    assert!(votes.upvoted("u1"));
    assert!(votes.downvoted("u2"));
    assert!(votes.downvoted("u3"));
    assert_eq!(votes.total_vote_count(), 3);
    assert_eq!(votes.score(), -1);
    assert_eq!(votes.history(VoteDirection::Positive).len(), 2);
    assert_eq!(votes.history(VoteDirection::Negative).len(), 2);
}
