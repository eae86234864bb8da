//! Property-based tests using proptest

mod common;

use common::builders::{unit_record, PudBuilder};
use common::{database, decode_all};
use proptest::prelude::*;
use war2pud::entities::classifier::{BUILDING_UNITS, HERO_UNITS, PEASANT_UNITS, SPECIAL_BUILDING_UNITS};
use war2pud::{classify, PudError, SectionData, UnitFlags};

/// Strategy for UNIT payloads: whole records plus a short tail
fn unit_payload_strategy() -> impl Strategy<Value = Vec<u8>> {
    (
        prop::collection::vec((any::<u16>(), any::<u16>(), any::<u8>(), any::<u8>(), any::<u16>()), 0..40),
        prop::collection::vec(any::<u8>(), 0..10),
    )
        .prop_map(|(records, tail)| {
            let mut payload = Vec::new();
            for (x, y, t, o, r) in records {
                payload.extend_from_slice(&unit_record(x, y, t, o, r));
            }
            payload.extend(tail);
            payload
        })
}

proptest! {
    /// UNIT payload of length L decodes floor(L/10) records
    #[test]
    fn unit_record_count(payload in unit_payload_strategy()) {
        let db = database();
        let bytes = PudBuilder::new().section(b"UNIT", &payload).build();
        let results = decode_all(&bytes, &db);
        prop_assert_eq!(results.len(), 1);
        match &results[0] {
            Ok(section) => match &section.data {
                SectionData::Units(units) => prop_assert_eq!(units.len(), payload.len() / 10),
                other => prop_assert!(false, "unexpected section {:?}", other),
            },
            Err(e) => prop_assert!(false, "unexpected error {}", e),
        }
    }

    /// Fresh decoders over the same bytes agree, errors included
    #[test]
    fn decoding_is_deterministic(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let db = database();
        let render = |bytes: &[u8]| -> Vec<String> {
            decode_all(bytes, &db)
                .into_iter()
                .map(|r| match r {
                    Ok(section) => format!("{:?}", section),
                    Err(e) => format!("error: {}", e),
                })
                .collect()
        };
        prop_assert_eq!(render(&bytes), render(&bytes));
    }

    /// Arbitrary bytes never panic and at most one error ends the stream
    #[test]
    fn errors_are_terminal(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
        let db = database();
        let results = decode_all(&bytes, &db);
        let errors = results.iter().filter(|r| r.is_err()).count();
        prop_assert!(errors <= 1);
        if errors == 1 {
            prop_assert!(results.last().map_or(false, |r| r.is_err()));
        }
    }

    /// Only the listed versions pass the version gate
    #[test]
    fn version_gate(version in any::<u16>()) {
        let db = database();
        let bytes = PudBuilder::new().version(version).build();
        let result = &decode_all(&bytes, &db)[0];
        if version == 17 || version == 19 {
            prop_assert!(result.is_ok());
        } else {
            let rejected = matches!(result, Err(PudError::UnsupportedVersion(v)) if *v == version);
            prop_assert!(rejected, "version {} accepted", version);
        }
    }

    /// OWNR bytes are accepted exactly when they index the player type table
    #[test]
    fn owner_validation(owners in any::<[u8; 16]>()) {
        let db = database();
        let bytes = PudBuilder::new().owners(owners).build();
        let result = &decode_all(&bytes, &db)[0];
        match owners.iter().position(|&b| b >= 8) {
            None => prop_assert!(result.is_ok()),
            Some(slot) => {
                let rejected = matches!(
                    result,
                    Err(PudError::InvalidPlayerType { slot: s, .. }) if *s == slot
                );
                prop_assert!(rejected, "slot {} not reported", slot);
            }
        }
    }

    /// Flags agree with the membership tables for every id
    #[test]
    fn classification_matches_tables(id in any::<u8>()) {
        let flags = classify(id);
        prop_assert_eq!(flags.contains(UnitFlags::PEASANT), PEASANT_UNITS.contains(&id));
        prop_assert_eq!(flags.contains(UnitFlags::HERO), HERO_UNITS.contains(&id));
        prop_assert_eq!(
            flags.contains(UnitFlags::BUILDING),
            BUILDING_UNITS.contains(&id) || SPECIAL_BUILDING_UNITS.contains(&id)
        );
        prop_assert_eq!(flags.contains(UnitFlags::GOLDMINE), id == 92);
        prop_assert!(!(flags.contains(UnitFlags::HERO) && flags.contains(UnitFlags::BUILDING)));
    }
}

#[test]
fn classification_examples() {
    assert_eq!(classify(92), UnitFlags::GOLDMINE);
    assert_eq!(classify(55), UnitFlags::SPECIAL);
    assert_eq!(classify(2), UnitFlags::PEASANT);
    assert_eq!(classify(100), UnitFlags::BUILDING | UnitFlags::SPECIAL);
}
