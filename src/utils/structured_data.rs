use serde::Serialize;

use crate::content::{ ContactEntry, Profile };

/// schema.org `Person` record for the page head.
#[derive(Debug, Serialize)]
pub struct PersonSchema {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    #[serde(rename = "jobTitle")]
    job_title: &'static str,
    description: &'static str,
    #[serde(rename = "knowsAbout")]
    knows_about: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    telephone: Option<&'static str>,
    #[serde(rename = "sameAs")]
    same_as: Vec<&'static str>,
}

pub fn person_schema(profile: &Profile, contacts: &[ContactEntry]) -> PersonSchema {
    let email = contacts.iter().find_map(|c| c.href.strip_prefix("mailto:"));
    let telephone = contacts.iter().find_map(|c| c.href.strip_prefix("tel:"));
    let same_as = contacts
        .iter()
        .filter(|c| c.is_external())
        .map(|c| c.href)
        .collect();

    PersonSchema {
        context: "https://schema.org",
        kind: "Person",
        name: profile.name,
        job_title: profile.role,
        description: profile.summary,
        knows_about: profile.skills,
        email,
        telephone,
        same_as,
    }
}

/// Serializes the record for an inline `application/ld+json` script. `<` is
/// escaped so no value can close the script element early.
pub fn script_payload(schema: &PersonSchema) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(schema)?;
    Ok(json.replace('<', "\\u003c"))
}
