//! Static catalog of trait fields a segment can be built from.

use serde::{Deserialize, Serialize};

/// Scope of a trait field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraitKind {
    #[serde(rename = "user_trait")]
    User,
    #[serde(rename = "group_trait")]
    Group,
}

impl TraitKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TraitKind::User => "user_trait",
            TraitKind::Group => "group_trait",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SchemaOption {
    pub label: &'static str,
    pub value: &'static str,
    #[serde(rename = "trait")]
    pub trait_kind: TraitKind,
}

pub const CATALOG: &[SchemaOption] = &[
    SchemaOption { label: "First Name", value: "first_name", trait_kind: TraitKind::User },
    SchemaOption { label: "Last Name", value: "last_name", trait_kind: TraitKind::User },
    SchemaOption { label: "Gender", value: "gender", trait_kind: TraitKind::User },
    SchemaOption { label: "Age", value: "age", trait_kind: TraitKind::User },
    SchemaOption { label: "Account Name", value: "account_name", trait_kind: TraitKind::Group },
    SchemaOption { label: "City", value: "city", trait_kind: TraitKind::Group },
    SchemaOption { label: "State", value: "state", trait_kind: TraitKind::Group },
];

/// Look up a catalog entry by its field identifier.
pub fn find(value: &str) -> Option<&'static SchemaOption> {
    CATALOG.iter().find(|option| option.value == value)
}

/// Catalog entries not yet present in `selected`, in catalog order.
pub fn available_options(selected: &[String]) -> Vec<&'static SchemaOption> {
    CATALOG
        .iter()
        .filter(|option| !selected.iter().any(|s| s == option.value))
        .collect()
}

/// Options a selected row may switch to: everything unselected plus the
/// row's own current value.
pub fn row_options(selected: &[String], own: &str) -> Vec<&'static SchemaOption> {
    CATALOG
        .iter()
        .filter(|option| option.value == own || !selected.iter().any(|s| s == option.value))
        .collect()
}

/// Colored dot shown next to a schema row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Grey,
    Green,
    Red,
}

impl Indicator {
    /// CSS class used by the front end.
    pub fn css_class(&self) -> &'static str {
        match self {
            Indicator::Grey => "grey_dot",
            Indicator::Green => "green_dot",
            Indicator::Red => "red_dot",
        }
    }
}

/// Grey for an empty slot, green for user traits, red for anything else.
pub fn indicator_for(value: &str) -> Indicator {
    if value.is_empty() {
        return Indicator::Grey;
    }
    match find(value).map(|option| option.trait_kind) {
        Some(TraitKind::User) => Indicator::Green,
        _ => Indicator::Red,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_values_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.value, b.value);
            }
        }
        assert_eq!(CATALOG.len(), 7);
    }

    #[test]
    fn test_find() {
        assert_eq!(find("city").map(|o| o.label), Some("City"));
        assert_eq!(find("account_name").map(|o| o.trait_kind), Some(TraitKind::Group));
        assert!(find("email").is_none());
        assert!(find("").is_none());
    }

    #[test]
    fn test_available_options_excludes_selected() {
        let selected = vec!["gender".to_string(), "state".to_string()];
        let values: Vec<_> = available_options(&selected).iter().map(|o| o.value).collect();
        assert_eq!(
            values,
            vec!["first_name", "last_name", "age", "account_name", "city"]
        );
    }

    #[test]
    fn test_available_options_exhausted() {
        let selected: Vec<String> = CATALOG.iter().map(|o| o.value.to_string()).collect();
        assert!(available_options(&selected).is_empty());
    }

    #[test]
    fn test_row_options_keep_own_value() {
        let selected = vec!["first_name".to_string(), "city".to_string()];
        let values: Vec<_> = row_options(&selected, "city").iter().map(|o| o.value).collect();
        assert!(values.contains(&"city"));
        assert!(!values.contains(&"first_name"));
        assert_eq!(values.len(), 6);
    }

    #[test]
    fn test_indicator_colors() {
        assert_eq!(indicator_for(""), Indicator::Grey);
        assert_eq!(indicator_for("gender"), Indicator::Green);
        assert_eq!(indicator_for("city"), Indicator::Red);
        assert_eq!(indicator_for("unknown"), Indicator::Red);
        assert_eq!(Indicator::Green.css_class(), "green_dot");
    }

    #[test]
    fn test_trait_kind_serde() {
        assert_eq!(serde_json::to_string(&TraitKind::User).unwrap(), "\"user_trait\"");
        let kind: TraitKind = serde_json::from_str("\"group_trait\"").unwrap();
        assert_eq!(kind, TraitKind::Group);
        assert_eq!(kind.as_str(), "group_trait");
    }
}
