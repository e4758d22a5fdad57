//! The project document served as `project-data.json`.
//!
//! Decoding is deliberately forgiving: the page is written by hand, so a
//! missing section or a list that is not an array must degrade to "nothing to
//! render" instead of rejecting the whole document. Everything is read through
//! [`serde_json::Value`] and each field is picked out with the lenient helpers
//! at the bottom of this file.

use serde::Deserialize;
use serde_json::Value;

/// Top-level payload describing the lab, the project and its content sections.
///
/// Every field is optional. `None` on a list means the source value was
/// missing or not an array, which is different from `Some(vec![])`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "Value")]
pub struct ProjectDocument {
    pub lab: Lab,
    /// Only set when the source value is truthy, unlike the other scalars.
    pub footer_note: Option<String>,
    pub project: Project,
    pub funding: Funding,
    pub sections: Sections,
    pub team: Option<Vec<TeamMember>>,
    pub timeline: Option<Vec<TimelineEntry>>,
    pub resources: Option<Vec<Resource>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lab {
    pub name: Option<String>,
    pub tagline: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Project {
    pub title: Option<String>,
    pub tagline: Option<String>,
    pub duration_display: Option<String>,
    pub id: Option<String>,
    pub highlights: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Funding {
    pub agency: Option<String>,
    pub amount_display: Option<String>,
    pub summary: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sections {
    pub overview: Option<String>,
    pub motivation: Option<String>,
    pub objectives: Option<Vec<String>>,
    pub methodology: Option<Vec<MethodologyStep>>,
    pub impact: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodologyStep {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamMember {
    pub role: String,
    pub name: String,
    /// Only set when the source value is truthy (non-empty).
    pub affiliation: Option<String>,
    /// Only set when the source value is truthy (non-empty).
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimelineEntry {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resource {
    pub href: String,
    pub label: String,
    pub external: bool,
    pub note: Option<String>,
}

impl ProjectDocument {
    /// Parse a response body. Fails on invalid JSON or a non-object top level.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// Build from an already-parsed value. Non-object values yield an empty document.
    pub fn from_value(v: &Value) -> Self {
        Self {
            lab: Lab::from_value(v.get("lab")),
            footer_note: truthy_text(v.get("footerNote")),
            project: Project::from_value(v.get("project")),
            funding: Funding::from_value(v.get("funding")),
            sections: Sections::from_value(v.get("sections")),
            team: sequence(v.get("team"), TeamMember::from_value),
            timeline: sequence(v.get("timeline"), TimelineEntry::from_value),
            resources: sequence(v.get("resources"), Resource::from_value),
        }
    }
}

impl TryFrom<Value> for ProjectDocument {
    type Error = &'static str;

    fn try_from(v: Value) -> Result<Self, Self::Error> {
        if !v.is_object() {
            return Err("project document must be a JSON object");
        }
        Ok(Self::from_value(&v))
    }
}

impl Lab {
    fn from_value(v: Option<&Value>) -> Self {
        let Some(v) = v else {
            return Self::default();
        };
        Self {
            name: text(v.get("name")),
            tagline: text(v.get("tagline")),
        }
    }
}

impl Project {
    fn from_value(v: Option<&Value>) -> Self {
        let Some(v) = v else {
            return Self::default();
        };
        Self {
            title: text(v.get("title")),
            tagline: text(v.get("tagline")),
            duration_display: text(v.get("durationDisplay")),
            id: text(v.get("id")),
            highlights: sequence(v.get("highlights"), item_text),
        }
    }
}

impl Funding {
    fn from_value(v: Option<&Value>) -> Self {
        let Some(v) = v else {
            return Self::default();
        };
        Self {
            agency: text(v.get("agency")),
            amount_display: text(v.get("amountDisplay")),
            summary: text(v.get("summary")),
            notes: text(v.get("notes")),
        }
    }
}

impl Sections {
    fn from_value(v: Option<&Value>) -> Self {
        let Some(v) = v else {
            return Self::default();
        };
        Self {
            overview: text(v.get("overview")),
            motivation: text(v.get("motivation")),
            objectives: sequence(v.get("objectives"), item_text),
            methodology: sequence(v.get("methodology"), MethodologyStep::from_value),
            impact: sequence(v.get("impact"), item_text),
        }
    }
}

impl MethodologyStep {
    fn from_value(v: &Value) -> Self {
        Self {
            title: field_text(v, "title"),
            description: field_text(v, "description"),
        }
    }
}

impl TeamMember {
    fn from_value(v: &Value) -> Self {
        Self {
            role: field_text(v, "role"),
            name: field_text(v, "name"),
            affiliation: truthy_text(v.get("affiliation")),
            email: truthy_text(v.get("email")),
        }
    }
}

impl TimelineEntry {
    fn from_value(v: &Value) -> Self {
        Self {
            label: field_text(v, "label"),
            value: field_text(v, "value"),
        }
    }
}

impl Resource {
    fn from_value(v: &Value) -> Self {
        Self {
            href: field_text(v, "href"),
            label: field_text(v, "label"),
            external: truthy(v.get("external")),
            note: truthy_text(v.get("note")),
        }
    }
}

/// Scalar text: strings as-is, numbers and booleans by their JSON spelling.
fn text(v: Option<&Value>) -> Option<String> {
    match v? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn item_text(v: &Value) -> String {
    text(Some(v)).unwrap_or_default()
}

fn field_text(v: &Value, key: &str) -> String {
    text(v.get(key)).unwrap_or_default()
}

fn truthy(v: Option<&Value>) -> bool {
    match v {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|x| x != 0.0 && !x.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

fn truthy_text(v: Option<&Value>) -> Option<String> {
    if truthy(v) {
        text(v)
    } else {
        None
    }
}

fn sequence<T>(v: Option<&Value>, f: impl Fn(&Value) -> T) -> Option<Vec<T>> {
    v?.as_array().map(|items| items.iter().map(f).collect())
}
