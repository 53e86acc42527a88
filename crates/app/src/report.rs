//! Builds and renders the endpoint listing.

use endpoints_application::{Domain, EndPoints, OverrideLayer, PropertyResolver};
use endpoints_domain::{PropertySourceKind, is_empty};
use serde::Serialize;

use crate::cli::{Args, Selection};

/// One printed property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    /// Short name of the endpoint or domain.
    pub name: String,
    /// Property key behind it.
    pub property: String,
    /// Resolved value, `None` if undefined.
    pub value: Option<String>,
    /// Tier that supplied the raw value, when explaining.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PropertySourceKind>,
    /// Placeholders written in the raw value, when explaining.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<String>,
    /// Placeholders left unexpanded, when explaining.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unresolved: Vec<String>,
}

/// Resolves every selected property.
pub fn build_report<O: OverrideLayer>(resolver: &PropertyResolver<O>, args: &Args) -> Vec<ReportRow> {
    let endpoints = EndPoints::new(resolver);
    let domain = Domain::new(resolver);

    args.selected()
        .into_iter()
        .map(|selection| {
            let (name, property, value) = match selection {
                Selection::Endpoint(key) => {
                    let value = match (&args.account, key.is_template()) {
                        (Some(account), true) => endpoints.forge(account),
                        _ => endpoints.get(key),
                    };
                    (key.name(), key.property_key(), value)
                }
                Selection::Domain(key) => (key.name(), key.property_key(), domain.get(key)),
            };

            let (source, references, unresolved) = if args.explain {
                (
                    resolver.lookup(property).map(|p| p.source),
                    resolver.references(property),
                    resolver.find_unresolved(property),
                )
            } else {
                (None, Vec::new(), Vec::new())
            };

            ReportRow {
                name: name.to_string(),
                property: property.to_string(),
                value,
                source,
                references,
                unresolved,
            }
        })
        .collect()
}

/// Renders rows as aligned `name = value` lines; undefined and empty values show as `<unset>`.
pub fn render_text(rows: &[ReportRow]) -> String {
    let width = rows.iter().map(|r| r.name.len()).max().unwrap_or(0);

    rows.iter()
        .map(|row| {
            let value = if is_empty(row.value.as_deref()) {
                "<unset>"
            } else {
                row.value.as_deref().unwrap_or_default()
            };

            let mut line = format!("{:width$} = {value}", row.name);
            if let Some(source) = row.source {
                line += &format!("  [{source}]");
            }
            if !row.references.is_empty() {
                line += &format!("  references: {}", row.references.join(", "));
            }
            if !row.unresolved.is_empty() {
                line += &format!("  unresolved: {}", row.unresolved.join(", "));
            }
            line.push('\n');
            line
        })
        .collect()
}

/// Renders rows as a pretty-printed JSON array.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn render_json(rows: &[ReportRow]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(rows)
}
