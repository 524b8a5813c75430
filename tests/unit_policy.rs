use roomkey::modules::auth::model::Operation::{self, *};
use roomkey::modules::auth::policy::CapabilityPolicy;

fn ops(caps: &roomkey::modules::auth::model::CapabilityMap, pattern: &str) -> Vec<Operation> {
    caps.operations(pattern)
        .unwrap_or_else(|| panic!("missing pattern {pattern:?}"))
        .iter()
        .copied()
        .collect()
}

#[test]
fn test_full_policy_grant_table() {
    let caps = CapabilityPolicy::Full.derive("u1");

    assert_eq!(
        ops(&caps, "roomslist:u1"),
        vec![Publish, Subscribe, History, ObjectPublish, ObjectSubscribe]
    );
    assert_eq!(ops(&caps, "profile:u1"), vec![Publish, Subscribe, History]);
    assert_eq!(ops(&caps, "profile:*"), vec![Subscribe]);
    assert_eq!(
        ops(&caps, "u1:*"),
        vec![Publish, Subscribe, History, Presence]
    );
    assert_eq!(
        ops(&caps, "*:u1"),
        vec![Publish, Subscribe, History, Presence]
    );
    assert_eq!(ops(&caps, "presence"), vec![Publish, Subscribe, Presence]);
    assert_eq!(ops(&caps, "*"), vec![Subscribe]);
    assert_eq!(caps.len(), 7);
}

#[test]
fn test_minimal_policy_grant_table() {
    let caps = CapabilityPolicy::Minimal.derive("u1");

    assert_eq!(
        ops(&caps, "roomslist:u1"),
        vec![Publish, Subscribe, History, ObjectPublish, ObjectSubscribe]
    );
    assert_eq!(ops(&caps, "presence"), vec![Publish, Subscribe, Presence]);
    assert_eq!(caps.len(), 2);
}

#[test]
fn test_every_policy_grants_own_roomslist_and_presence() {
    for policy in [CapabilityPolicy::Full, CapabilityPolicy::Minimal] {
        for user_id in ["u1", "test_user_123", "alice"] {
            let caps = policy.derive(user_id);
            let roomslist = format!("roomslist:{user_id}");

            assert!(caps.allows(&roomslist, Publish), "{policy:?} {user_id}");
            assert!(caps.allows(&roomslist, Subscribe), "{policy:?} {user_id}");
            assert!(caps.operations("presence").is_some(), "{policy:?} {user_id}");
        }
    }
}

#[test]
fn test_derivation_depends_only_on_user_id() {
    // Same user id, same grants, regardless of anything else
    assert_eq!(
        CapabilityPolicy::Full.derive("u1"),
        CapabilityPolicy::Full.derive("u1")
    );
    assert_ne!(
        CapabilityPolicy::Full.derive("u1"),
        CapabilityPolicy::Full.derive("u2")
    );
}

#[test]
fn test_world_readable_but_not_writable_by_default() {
    let caps = CapabilityPolicy::Full.derive("u1");

    assert!(caps.allows("*", Subscribe));
    assert!(!caps.allows("*", Publish));
    assert!(caps.allows("profile:*", Subscribe));
    assert!(!caps.allows("profile:*", Publish));
}

#[test]
fn test_capability_json_wire_format() {
    let caps = CapabilityPolicy::Full.derive("u1");
    let json = caps.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let roomslist = value["roomslist:u1"].as_array().unwrap();
    let names: Vec<&str> = roomslist.iter().filter_map(|v| v.as_str()).collect();
    assert!(names.contains(&"publish"));
    assert!(names.contains(&"subscribe"));
    assert!(names.contains(&"history"));
    assert!(names.contains(&"object-publish"));
    assert!(names.contains(&"object-subscribe"));

    assert_eq!(value["*"], serde_json::json!(["subscribe"]));
}
