use serde_json::Value;

use crate::content::{ Profile, CONTACTS, PROFILE };
use crate::utils::{ person_schema, script_payload };

fn payload_json(profile: &Profile) -> (String, Value) {
    let payload = script_payload(&person_schema(profile, CONTACTS)).expect("schema serializes");
    let value = serde_json::from_str(&payload).expect("payload is valid json");
    (payload, value)
}

#[test]
fn person_schema_carries_profile_and_contacts() {
    let (_, json) = payload_json(&PROFILE);

    assert_eq!(json["@context"], "https://schema.org");
    assert_eq!(json["@type"], "Person");
    assert_eq!(json["name"], PROFILE.name);
    assert_eq!(json["jobTitle"], PROFILE.role);
    assert_eq!(json["email"], "hernandezgio16@gmail.com");
    assert_eq!(json["telephone"], "+639356294066");
    assert_eq!(json["knowsAbout"].as_array().map(Vec::len), Some(PROFILE.skills.len()));
}

#[test]
fn same_as_lists_only_web_profiles() {
    let (_, json) = payload_json(&PROFILE);
    let same_as: Vec<&str> = json["sameAs"]
        .as_array()
        .expect("sameAs is an array")
        .iter()
        .filter_map(Value::as_str)
        .collect();

    assert_eq!(same_as, vec!["https://www.linkedin.com/in/giohernandez16", "https://github.com/glytch21"]);
}

#[test]
fn missing_contacts_are_omitted() {
    let schema = person_schema(&PROFILE, &[]);
    let json = serde_json::to_value(&schema).expect("schema serializes");

    assert!(json.get("email").is_none());
    assert!(json.get("telephone").is_none());
    assert_eq!(json["sameAs"], Value::Array(vec![]));
}

#[test]
fn payload_cannot_close_its_script_tag() {
    let hostile = Profile { name: "</script><script>alert(1)</script>", ..PROFILE };
    let (payload, json) = payload_json(&hostile);

    assert!(!payload.contains('<'));
    assert_eq!(json["name"], hostile.name);
}
