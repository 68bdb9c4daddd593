// src/graphql/schema.rs

//! Fixed root schema: a dispatch table mapping root-field names to resolvers
//! over the release store.

use std::collections::BTreeMap;

use crate::models::Release;
use crate::store::ReleaseStore;

use super::parser::Value;

/// The queryable scalar fields of a release record.
pub const RELEASE_FIELDS: [&str; 6] = ["id", "title", "price", "date", "image", "provider"];

/// Value produced by a root resolver.
pub enum Resolved {
    One(Release),
    Many(Vec<Release>),
}

/// A root query field: a description plus its resolver over the store.
pub struct RootField {
    pub description: &'static str,
    pub resolve: fn(&ReleaseStore, &[(String, Value)]) -> Resolved,
}

/// The root query type. Two fields, no mutations.
pub struct Schema {
    roots: BTreeMap<&'static str, RootField>,
}

impl Schema {
    pub fn new() -> Self {
        let mut roots = BTreeMap::new();
        roots.insert(
            "sneaker",
            RootField {
                description: "Get single sneaker",
                resolve: resolve_sneaker,
            },
        );
        roots.insert(
            "sneakerList",
            RootField {
                description: "List of sneakers",
                resolve: resolve_sneaker_list,
            },
        );
        Self { roots }
    }

    /// Look up a root field by name.
    pub fn root(&self, name: &str) -> Option<&RootField> {
        self.roots.get(name)
    }

    /// Whether `name` is a queryable release field.
    pub fn has_release_field(name: &str) -> bool {
        RELEASE_FIELDS.contains(&name)
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::new()
    }
}

/// `sneaker(id: Int)`: first record matching the id.
///
/// A missing, non-integer, or out-of-range id argument is treated as "not
/// found" rather than an error, and "not found" is the default record.
fn resolve_sneaker(store: &ReleaseStore, arguments: &[(String, Value)]) -> Resolved {
    let id = arguments
        .iter()
        .find(|(name, _)| name == "id")
        .and_then(|(_, value)| match value {
            Value::Int(n) => i32::try_from(*n).ok(),
            _ => None,
        });

    let release = id
        .and_then(|id| store.get(id))
        .cloned()
        .unwrap_or_default();
    Resolved::One(release)
}

/// `sneakerList`: every record, in store order.
fn resolve_sneaker_list(store: &ReleaseStore, _arguments: &[(String, Value)]) -> Resolved {
    Resolved::Many(store.all().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ReleaseStore {
        ReleaseStore::new(vec![
            Release {
                id: 1,
                title: "One".to_string(),
                ..Release::default()
            },
            Release {
                id: 2,
                title: "Two".to_string(),
                ..Release::default()
            },
        ])
    }

    fn args(pairs: &[(&str, Value)]) -> Vec<(String, Value)> {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn schema_exposes_exactly_two_root_fields() {
        let schema = Schema::new();
        assert!(schema.root("sneaker").is_some());
        assert!(schema.root("sneakerList").is_some());
        assert!(schema.root("lastSneaker").is_none());
    }

    #[test]
    fn sneaker_resolves_by_id() {
        let resolved = resolve_sneaker(&store(), &args(&[("id", Value::Int(2))]));
        match resolved {
            Resolved::One(release) => assert_eq!(release.title, "Two"),
            Resolved::Many(_) => panic!("expected a single record"),
        }
    }

    #[test]
    fn absent_id_resolves_to_the_default_record() {
        let resolved = resolve_sneaker(&store(), &args(&[("id", Value::Int(999))]));
        match resolved {
            Resolved::One(release) => assert_eq!(release, Release::default()),
            Resolved::Many(_) => panic!("expected a single record"),
        }
    }

    #[test]
    fn mistyped_id_is_not_found_rather_than_an_error() {
        let resolved = resolve_sneaker(&store(), &args(&[("id", Value::Str("b".to_string()))]));
        match resolved {
            Resolved::One(release) => assert_eq!(release, Release::default()),
            Resolved::Many(_) => panic!("expected a single record"),
        }
    }

    #[test]
    fn missing_id_argument_is_not_found() {
        let resolved = resolve_sneaker(&store(), &[]);
        match resolved {
            Resolved::One(release) => assert_eq!(release, Release::default()),
            Resolved::Many(_) => panic!("expected a single record"),
        }
    }

    #[test]
    fn sneaker_list_returns_everything_in_order() {
        let resolved = resolve_sneaker_list(&store(), &[]);
        match resolved {
            Resolved::Many(releases) => {
                let titles: Vec<_> = releases.iter().map(|r| r.title.as_str()).collect();
                assert_eq!(titles, vec!["One", "Two"]);
            }
            Resolved::One(_) => panic!("expected a list"),
        }
    }
}
