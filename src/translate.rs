// Translate module - pure tag and step-argument conversions

use crate::model::{Label, Parameter};
use crate::runner::StepArgument;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static TAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@(.*?):(.*)$").expect("invalid tag regex"));

/// Convert runner tag strings into report labels.
///
/// Only tags of the form `@key:value` whose key appears in `mapping`
/// contribute a label; everything else is silently dropped. Output order
/// follows input order, duplicates are preserved.
pub fn tags_to_labels(tags: &[String], mapping: &HashMap<String, String>) -> Vec<Label> {
    let mut labels = Vec::new();

    for tag in tags {
        let Some(captures) = TAG_REGEX.captures(tag) else {
            continue;
        };

        let key = &captures[1];
        let value = &captures[2];

        if let Some(label_name) = mapping.get(key) {
            labels.push(Label {
                name: label_name.clone(),
                value: value.to_string(),
            });
        }
    }

    labels
}

/// Derive at most one parameter from a step's structured argument.
///
/// A doc string becomes a "Message" parameter. A data table with a header
/// row and at least one data row contributes a single parameter pairing the
/// first header cell with the first data cell; remaining columns are
/// intentionally not attached.
pub fn step_argument_to_parameter(argument: Option<&StepArgument>) -> Option<Parameter> {
    match argument {
        None => None,
        Some(StepArgument::DocString(content)) => Some(Parameter {
            name: "Message".to_string(),
            value: content.clone(),
        }),
        Some(StepArgument::DataTable(rows)) => {
            if rows.len() < 2 {
                return None;
            }
            let header = rows[0].first()?;
            let value = rows[1].first()?;
            Some(Parameter {
                name: header.clone(),
                value: value.clone(),
            })
        }
    }
}
