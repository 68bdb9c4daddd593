// src/graphql/execute.rs

//! Query execution: parse, resolve, project, and collect errors into the
//! result document.

use serde::Serialize;
use serde_json::{Map, Value as Json, json};

use crate::models::Release;
use crate::store::ReleaseStore;

use super::parser::{self, Field};
use super::schema::{Resolved, Schema};

/// One entry in the result's error list.
#[derive(Debug, Serialize)]
pub struct GraphqlError {
    pub message: String,
}

impl GraphqlError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The result document returned for every query: `data` plus, when anything
/// went wrong, an `errors` list. Never a transport-level failure.
#[derive(Debug, Serialize)]
pub struct QueryResult {
    pub data: Json,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<GraphqlError>,
}

impl QueryResult {
    /// Whether the query produced any errors.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Execute a raw query string against the store.
///
/// Syntax and validation errors are captured into the error list and logged;
/// they never propagate.
pub fn execute(schema: &Schema, store: &ReleaseStore, query: &str) -> QueryResult {
    let result = run(schema, store, query);
    if result.has_errors() {
        let messages: Vec<_> = result.errors.iter().map(|e| e.message.as_str()).collect();
        log::warn!("query {query:?} produced errors: {messages:?}");
    }
    result
}

fn run(schema: &Schema, store: &ReleaseStore, query: &str) -> QueryResult {
    let document = match parser::parse(query) {
        Ok(document) => document,
        Err(e) => {
            return QueryResult {
                data: Json::Null,
                errors: vec![GraphqlError::new(e.to_string())],
            };
        }
    };

    let mut data = Map::new();
    let mut errors = Vec::new();

    for field in &document.fields {
        let Some(root) = schema.root(&field.name) else {
            errors.push(GraphqlError::new(format!(
                "Cannot query field \"{}\" on type \"RootQuery\"",
                field.name
            )));
            continue;
        };

        if field.selections.is_empty() {
            errors.push(GraphqlError::new(format!(
                "Field \"{}\" must have a selection of subfields",
                field.name
            )));
            data.insert(field.name.clone(), Json::Null);
            continue;
        }

        let selected = validate_selections(field, &mut errors);
        let value = match (root.resolve)(store, &field.arguments) {
            Resolved::One(release) => project(&release, &selected),
            Resolved::Many(releases) => {
                Json::Array(releases.iter().map(|r| project(r, &selected)).collect())
            }
        };
        data.insert(field.name.clone(), value);
    }

    QueryResult {
        data: Json::Object(data),
        errors,
    }
}

/// Split requested subfields into known release fields, recording one error
/// per unknown name.
fn validate_selections<'a>(field: &'a Field, errors: &mut Vec<GraphqlError>) -> Vec<&'a str> {
    let mut selected = Vec::new();
    for selection in &field.selections {
        if Schema::has_release_field(&selection.name) {
            selected.push(selection.name.as_str());
        } else {
            errors.push(GraphqlError::new(format!(
                "Cannot query field \"{}\" on type \"Sneaker\"",
                selection.name
            )));
        }
    }
    selected
}

/// Project a release onto the requested subfields.
fn project(release: &Release, selected: &[&str]) -> Json {
    let mut object = Map::new();
    for &name in selected {
        let value = match name {
            "id" => json!(release.id),
            "title" => json!(release.title),
            "price" => json!(release.price),
            "date" => json!(release.date),
            "image" => json!(release.image),
            "provider" => json!(release.provider),
            // validate_selections filtered everything else out
            _ => continue,
        };
        object.insert(name.to_string(), value);
    }
    Json::Object(object)
}
