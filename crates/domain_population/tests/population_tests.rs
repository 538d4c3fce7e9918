//! Comprehensive tests for domain_population

use chrono::{Duration, NaiveDate};

use domain_population::{Address, AddressInfo, Person, PopulationError, ResidencyConfig};
use test_utils::{
    assert_current_address, assert_history_contiguous, assert_moved_out_on,
    assert_parent_codes, assert_single_current_residency, create_address, create_address_named,
    create_named_person, create_parents, create_person, init_test_tracing, AddressFixtures,
    TemporalFixtures, TestAddressBuilder, TestPersonBuilder,
};

// ============================================================================
// Address Tests
// ============================================================================

mod address_tests {
    use super::*;

    #[test]
    fn test_copied_address_is_equal() {
        let address = create_address();
        let copy = address.clone();

        assert_eq!(copy, address);
    }

    #[test]
    fn test_different_area_codes_not_equal() {
        let address = create_address();
        let mut copy = address.clone();
        copy.set_area_code(AddressFixtures::other_area_code());

        assert_ne!(address, copy);
    }

    #[test]
    fn test_different_names_not_equal() {
        let address = create_address();
        let mut copy = address.clone();
        copy.set_name("FoofooAddress");

        assert_ne!(address, copy);
    }

    #[test]
    fn test_copy_is_independent() {
        let address = create_address();
        let mut copy = address.clone();
        copy.set_name("Elsewhere 5");

        assert_eq!(address.name(), AddressFixtures::name());
    }

    #[test]
    fn test_address_serialization() {
        let address = TestAddressBuilder::new().with_area_code("40100").build();
        let json = serde_json::to_string(&address).unwrap();
        let deserialized: Address = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, address);
        assert!(json.contains("\"area_code\":\"40100\""));
    }
}

// ============================================================================
// AddressInfo Tests
// ============================================================================

mod address_info_tests {
    use super::*;

    #[test]
    fn test_copied_info_is_equal() {
        let mut person = create_person();
        let info = person
            .add_address(create_address(), TemporalFixtures::today())
            .unwrap()
            .clone();
        let copy = info.clone();

        assert_eq!(copy, info);
    }

    #[test]
    fn test_different_move_out_dates_not_equal() {
        let mut person = create_person();
        let info = person
            .add_address(create_address(), TemporalFixtures::today())
            .unwrap()
            .clone();

        let mut first = info.clone();
        let mut second = info.clone();
        first.set_move_out_date(TemporalFixtures::today());
        second.set_move_out_date(TemporalFixtures::days_from_today(1));

        assert_ne!(first, second);
    }

    #[test]
    fn test_same_move_out_dates_equal() {
        let person = create_person();
        let mut first = AddressInfo::open(create_address(), &person, TemporalFixtures::first_move_in());
        let mut second = first.clone();
        first.set_move_out_date(TemporalFixtures::today());
        second.set_move_out_date(TemporalFixtures::today());

        assert_eq!(first, second);
    }

    #[test]
    fn test_one_side_open_not_equal() {
        let person = create_person();
        let open = AddressInfo::open(create_address(), &person, TemporalFixtures::first_move_in());
        let closed = AddressInfo::new(
            create_address(),
            &person,
            TemporalFixtures::first_move_in(),
            Some(TemporalFixtures::today()),
        );

        assert_ne!(open, closed);
        assert_ne!(closed, open);
    }

    #[test]
    fn test_resident_equality_ignores_names() {
        let person = create_person();
        let mut renamed = person.copy_of();
        renamed.set_first_name("Thomas");

        let a = AddressInfo::open(create_address(), &person, TemporalFixtures::first_move_in());
        let b = AddressInfo::open(create_address(), &renamed, TemporalFixtures::first_move_in());

        assert_eq!(a, b);
    }

    #[test]
    fn test_different_residents_not_equal() {
        let person = create_person();
        let other = create_named_person("-1", "Tom", "TestPerson", false);

        let a = AddressInfo::open(create_address(), &person, TemporalFixtures::first_move_in());
        let b = AddressInfo::open(create_address(), &other, TemporalFixtures::first_move_in());

        assert_ne!(a, b);
    }

    #[test]
    fn test_constructor_does_not_validate_order() {
        let person = create_person();
        let info = AddressInfo::new(
            create_address(),
            &person,
            TemporalFixtures::today(),
            Some(TemporalFixtures::days_from_today(-30)),
        );

        assert!(info.period().is_inverted());
    }
}

// ============================================================================
// Person Tests
// ============================================================================

mod person_tests {
    use super::*;

    #[test]
    fn test_copy_with_same_identity_code_is_equal() {
        let person = create_person();
        let copy = person.copy_of();

        assert_eq!(person, copy);
    }

    #[test]
    fn test_different_identity_code_not_equal() {
        let person = create_person();
        let mut copy = person.copy_of();
        copy.set_identity_code("-1");

        assert_ne!(person, copy);
    }

    #[test]
    fn test_equality_ignores_other_fields() {
        let person = create_person();
        let other = TestPersonBuilder::new()
            .with_name("Somebody", "Else")
            .with_time_of_birth(NaiveDate::from_ymd_opt(1950, 1, 1).unwrap())
            .deceased()
            .build();

        assert_eq!(person, other);
    }

    #[test]
    fn test_copy_drops_address_history() {
        let mut person = create_person();
        person.add_address(create_address(), TemporalFixtures::first_move_in()).unwrap();

        let copy = person.copy_of();

        assert!(copy.addresses().is_empty());
        assert!(copy.find_current_address().is_none());
        assert_eq!(person.addresses().len(), 1);
    }

    #[test]
    fn test_copy_shares_parents() {
        let [polly, pat, _] = create_parents();
        let person = TestPersonBuilder::new().with_parent(polly).with_parent(pat).build();

        let copy = person.copy_of();

        assert_parent_codes(&copy, &["11111", "22222"]);
        assert!(std::sync::Arc::ptr_eq(&copy.parents()[0], &person.parents()[0]));
    }

    #[test]
    fn test_clone_keeps_address_history() {
        let mut person = create_person();
        person.add_address(create_address(), TemporalFixtures::first_move_in()).unwrap();

        let clone = person.clone();

        assert_eq!(clone.addresses(), person.addresses());
    }

    #[test]
    fn test_deceased_fixture() {
        let person = TestPersonBuilder::new().deceased().build();

        assert!(person.is_deceased());
        assert_eq!(person.age_on(TemporalFixtures::today()), None);
    }
}

// ============================================================================
// Residency Tests
// ============================================================================

mod residency_tests {
    use super::*;

    #[test]
    fn test_add_address_becomes_current() {
        init_test_tracing();
        let mut person = create_person();
        let address = create_address();

        let info = person.add_address(address.clone(), TemporalFixtures::today()).unwrap();

        assert_eq!(info.address(), &address);
        assert!(info.move_out_date().is_none());
        assert_current_address(&person, &address);
    }

    #[test]
    fn test_second_address_closes_first() {
        init_test_tracing();
        let mut person = create_person();
        let first = create_address();
        let second = create_address_named(AddressFixtures::second_name());
        let day0 = TemporalFixtures::today();

        person.add_address(first.clone(), day0).unwrap();
        assert!(person.find_current_address().unwrap().move_out_date().is_none());

        person.add_address(second.clone(), day0 + Duration::days(10)).unwrap();

        assert_moved_out_on(&person, &first, day0 + Duration::days(9));
        assert_current_address(&person, &second);
    }

    #[test]
    fn test_history_is_most_recent_first() {
        let mut person = create_person();
        let day0 = TemporalFixtures::first_move_in();

        for (i, name) in ["A 1", "B 2", "C 3"].iter().enumerate() {
            person
                .add_address(create_address_named(name), day0 + Duration::days(30 * i as i64))
                .unwrap();
        }

        let names: Vec<&str> = person.addresses().iter().map(|i| i.address().name()).collect();
        assert_eq!(names, vec!["C 3", "B 2", "A 1"]);
        assert_history_contiguous(&person);
        assert_single_current_residency(&person);
    }

    #[test]
    fn test_move_back_to_same_address_finds_latest() {
        let mut person = create_person();
        let home = create_address();
        let away = create_address_named("Away 9");
        let day0 = TemporalFixtures::first_move_in();

        person.add_address(home.clone(), day0).unwrap();
        person.add_address(away, day0 + Duration::days(100)).unwrap();
        person.add_address(home.clone(), day0 + Duration::days(200)).unwrap();

        let found = person.find_address_info_by_address(&home).unwrap();
        assert_eq!(found.move_in_date(), day0 + Duration::days(200));
        assert!(found.is_current());
    }

    #[test]
    fn test_lookups_on_empty_history() {
        let person = create_person();

        assert!(person.find_current_address().is_none());
        assert!(person.find_address_info_by_address(&create_address()).is_none());
        assert!(person.address_on(TemporalFixtures::today()).is_none());
    }

    #[test]
    fn test_lookup_by_equal_value() {
        let mut person = create_person();
        person.add_address(create_address(), TemporalFixtures::first_move_in()).unwrap();

        let lookalike = Address::new(AddressFixtures::name(), AddressFixtures::area_code());
        assert!(person.find_address_info_by_address(&lookalike).is_some());
    }

    #[test]
    fn test_records_belong_to_person() {
        let mut person = create_person();
        let info = person.add_address(create_address(), TemporalFixtures::first_move_in()).unwrap();

        assert_eq!(info.resident(), "12345678-AAAA");
    }

    #[test]
    fn test_address_on_date() {
        let mut person = create_person();
        let first = create_address();
        let second = create_address_named(AddressFixtures::second_name());
        let day0 = TemporalFixtures::first_move_in();

        person.add_address(first.clone(), day0).unwrap();
        person.add_address(second.clone(), day0 + Duration::days(10)).unwrap();

        assert_eq!(person.address_on(day0 + Duration::days(9)).unwrap().address(), &first);
        assert_eq!(person.address_on(day0 + Duration::days(10)).unwrap().address(), &second);
        assert!(person.address_on(day0 - Duration::days(1)).is_none());
    }

    #[test]
    fn test_same_day_move_is_accepted_by_default() {
        init_test_tracing();
        let mut person = create_person();
        let day0 = TemporalFixtures::first_move_in();

        person.add_address(create_address(), day0).unwrap();
        person.add_address(create_address_named("Next 1"), day0).unwrap();

        assert_moved_out_on(&person, &create_address(), day0 - Duration::days(1));
        assert_single_current_residency(&person);
    }

    #[test]
    fn test_strict_config_rejects_earlier_move_in() {
        let mut person = create_person();
        let day0 = TemporalFixtures::first_move_in();
        person.add_address(create_address(), day0).unwrap();

        let result = person.add_address_with(
            create_address_named("Earlier 1"),
            day0 - Duration::days(5),
            &ResidencyConfig::strict(),
        );

        match result {
            Err(PopulationError::InvalidMoveInDate { move_in, current_move_in }) => {
                assert_eq!(move_in, day0 - Duration::days(5));
                assert_eq!(current_move_in, day0);
            }
            other => panic!("Expected InvalidMoveInDate, got {:?}", other),
        }
        assert_current_address(&person, &create_address());
        assert_eq!(person.addresses().len(), 1);
    }

    #[test]
    fn test_strict_config_accepts_later_move_in() {
        let mut person = create_person();
        let day0 = TemporalFixtures::first_move_in();
        person.add_address(create_address(), day0).unwrap();

        let result = person.add_address_with(
            create_address_named("Later 1"),
            day0 + Duration::days(1),
            &ResidencyConfig::strict(),
        );

        assert!(result.is_ok());
        assert_moved_out_on(&person, &create_address(), day0);
    }
}

// ============================================================================
// Parent Tests
// ============================================================================

mod parent_tests {
    use super::*;

    #[test]
    fn test_add_parent_successfully() {
        let mut person = create_person();
        let [polly, _, _] = create_parents();

        person.add_parent(polly.clone()).unwrap();

        assert_eq!(person.parents().len(), 1);
        assert_eq!(*person.parents()[0], polly);
    }

    #[test]
    fn test_add_two_parents_keeps_order() {
        let mut person = create_person();
        let [polly, pat, _] = create_parents();

        person.add_parent(polly).unwrap();
        person.add_parent(pat).unwrap();

        assert_parent_codes(&person, &["11111", "22222"]);
    }

    #[test]
    fn test_add_too_many_parents() {
        init_test_tracing();
        let mut person = create_person();
        let [polly, pat, peter] = create_parents();
        person.add_parent(polly).unwrap();
        person.add_parent(pat).unwrap();

        let result = person.add_parent(peter);

        match result {
            Err(PopulationError::InvalidOperation(msg)) => {
                assert!(msg.contains("two parents"));
            }
            other => panic!("Expected InvalidOperation, got {:?}", other),
        }
        assert_parent_codes(&person, &["11111", "22222"]);
    }

    #[test]
    fn test_remove_parent_successfully() {
        let mut person = create_person();
        let [polly, _, _] = create_parents();
        person.add_parent(polly.clone()).unwrap();

        assert!(person.remove_parent(&polly));
        assert!(person.parents().is_empty());
    }

    #[test]
    fn test_remove_non_member_parent() {
        let mut person = create_person();
        let [polly, pat, peter] = create_parents();
        person.add_parent(polly).unwrap();
        person.add_parent(pat).unwrap();

        assert!(!person.remove_parent(&peter));
        assert_parent_codes(&person, &["11111", "22222"]);
    }

    #[test]
    fn test_remove_then_add_again() {
        let mut person = create_person();
        let [polly, pat, peter] = create_parents();
        person.add_parent(polly).unwrap();
        person.add_parent(pat.clone()).unwrap();

        assert!(person.remove_parent(&pat));
        person.add_parent(peter).unwrap();

        assert_parent_codes(&person, &["11111", "33333"]);
    }

    #[test]
    fn test_remove_matches_by_identity_code() {
        let mut person = create_person();
        let [polly, _, _] = create_parents();
        person.add_parent(polly).unwrap();

        let lookalike = create_named_person("11111", "Someone", "Else", true);

        assert!(person.has_parent(&lookalike));
        assert!(person.remove_parent(&lookalike));
    }

    #[test]
    fn test_parent_shared_between_siblings() {
        let [polly, _, _] = create_parents();
        let polly = std::sync::Arc::new(polly);
        let mut first = create_named_person("44444", "Ann", "Child", false);
        let mut second = create_named_person("55555", "Ben", "Child", false);

        first.add_parent(polly.clone()).unwrap();
        second.add_parent(polly.clone()).unwrap();

        assert_eq!(std::sync::Arc::strong_count(&polly), 3);
        assert!(first.has_parent(&polly));
        assert!(second.has_parent(&polly));
    }
}

// ============================================================================
// Serialization Tests
// ============================================================================

mod serialization_tests {
    use super::*;

    #[test]
    fn test_person_round_trip_keeps_history() {
        let [polly, _, _] = create_parents();
        let mut person = TestPersonBuilder::new().with_parent(polly).build();
        person.add_address(create_address(), TemporalFixtures::first_move_in()).unwrap();

        let json = serde_json::to_string(&person).unwrap();
        let back: Person = serde_json::from_str(&json).unwrap();

        assert_eq!(back, person);
        assert_eq!(back.addresses(), person.addresses());
        assert_parent_codes(&back, &["11111"]);
    }

    #[test]
    fn test_deserialize_rejects_three_parents() {
        let parent = |code: &str| {
            serde_json::json!({
                "identity_code": code,
                "first_name": "P",
                "last_name": "Parent",
                "time_of_birth": "1970-01-01",
                "time_of_death": null
            })
        };
        let json = serde_json::json!({
            "identity_code": "12345678-AAAA",
            "first_name": "Tom",
            "last_name": "TestPerson",
            "time_of_birth": "2000-01-01",
            "time_of_death": null,
            "parents": [parent("1"), parent("2"), parent("3")]
        });

        let result: Result<Person, _> = serde_json::from_value(json);

        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_two_current_addresses() {
        let record = |name: &str| {
            serde_json::json!({
                "address": { "name": name, "area_code": "00100" },
                "resident": "12345678-AAAA",
                "move_in_date": "2024-01-01",
                "move_out_date": null
            })
        };
        let json = serde_json::json!({
            "identity_code": "12345678-AAAA",
            "first_name": "Tom",
            "last_name": "TestPerson",
            "time_of_birth": "2000-01-01",
            "time_of_death": null,
            "addresses": [record("A"), record("B")]
        });

        let result: Result<Person, _> = serde_json::from_value(json);

        assert!(result.is_err());
    }
}
