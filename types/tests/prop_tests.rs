use proptest::prelude::*;

use tally_types::{EntityId, Timestamp, Voter, VoterId};

proptest! {
    /// Timestamp ordering: new(a) <= new(b) iff a <= b.
    #[test]
    fn timestamp_ordering(a in 0u64..u64::MAX, b in 0u64..u64::MAX) {
        let ta = Timestamp::new(a);
        let tb = Timestamp::new(b);
        prop_assert_eq!(ta <= tb, a <= b);
        prop_assert_eq!(ta == tb, a == b);
    }

    /// Resolving a string and resolving the id built from it agree.
    #[test]
    fn voter_resolution_is_form_independent(raw in "[a-z0-9]{1,24}") {
        let id = VoterId::new(raw.clone());
        prop_assert_eq!(raw.as_str().voter_id(), id.clone());
        prop_assert_eq!(raw.voter_id(), id.clone());
        let resolved = id.voter_id();
        prop_assert_eq!(resolved.as_str(), raw.as_str());
    }

    /// Entity key bytes are exactly the id's UTF-8 bytes.
    #[test]
    fn entity_id_key_bytes(raw in "[a-f0-9]{24}") {
        let id = EntityId::new(raw.clone());
        prop_assert_eq!(id.as_bytes(), raw.as_bytes());
    }
}

#[test]
fn now_is_after_epoch() {
    assert!(Timestamp::now() > Timestamp::EPOCH);
}
