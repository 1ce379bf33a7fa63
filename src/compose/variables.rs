//! Variable substitution scraping
//!
//! Compose files reference the invoking shell's environment through
//! `${VAR}` substitutions, optionally with modifiers such as `${VAR:-default}`
//! or `${VAR:?error}`. Names are recorded verbatim, modifiers included.
//! `$$` is an escaped literal dollar sign. Bare `$VAR` references are not
//! supported and only produce a warning.

use serde_yaml::Value;
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// Substitution marker
const MARKER: u8 = b'$';

/// Distinct variable names, kept sorted for stable output
pub type VariableSet = BTreeSet<String>;

/// Record every braced substitution found in `s`.
///
/// Only ASCII bytes are ever matched, so slicing at the matched positions
/// always lands on character boundaries.
pub fn scan_string(s: &str, variables: &mut VariableSet) {
    let bytes = s.as_bytes();
    let mut done = 0;

    while let Some(offset) = bytes[done..].iter().position(|&b| b == MARKER) {
        let index = done + offset;

        match bytes.get(index + 1).copied() {
            // Trailing marker
            None => break,
            Some(MARKER) => done = index + 2,
            Some(b'{') => {
                let start = index + 2;
                match bytes[start..].iter().position(|&b| b == b'}') {
                    Some(len) => {
                        let end = start + len;
                        variables.insert(s[start..end].to_string());
                        done = end + 1;
                    }
                    // Unterminated reference
                    None => break,
                }
            }
            Some(_) => {
                warn!("Variable substitution without curly brackets is not supported");
                done = index + 2;
            }
        }
    }
}

/// Visitor collecting substitutions from every string in a YAML tree
#[derive(Debug, Default)]
pub struct VariableCollector {
    variables: VariableSet,
}

impl VariableCollector {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk a value and everything below it
    pub fn visit(&mut self, value: &Value) {
        match value {
            Value::Mapping(mapping) => {
                for (key, value) in mapping {
                    if let Value::String(key) = key {
                        scan_string(key, &mut self.variables);
                    }
                    self.visit(value);
                }
            }
            Value::Sequence(items) => {
                for item in items {
                    self.visit(item);
                }
            }
            Value::String(s) => scan_string(s, &mut self.variables),
            Value::Tagged(tagged) => self.visit(&tagged.value),
            // Numbers and booleans cannot contain variables
            Value::Null | Value::Bool(_) | Value::Number(_) => {}
        }
    }

    /// Consume the collector, returning the variables
    pub fn into_variables(self) -> VariableSet {
        self.variables
    }
}

/// Record pass-through variables from service `environment` lists.
///
/// An entry like `- TOKEN` hands the shell's `TOKEN` to the container
/// without any `$` marker, so the substitution scan never sees it. Entries
/// containing `=` are assignments and are skipped.
pub fn collect_service_environment(doc: &Value, variables: &mut VariableSet) {
    let Some(services) = doc.get("services").and_then(Value::as_mapping) else {
        return;
    };

    for (name, service) in services {
        let Some(environment) = service
            .as_mapping()
            .and_then(|service| service.get("environment"))
            .and_then(Value::as_sequence)
        else {
            continue;
        };

        for entry in environment.iter().filter_map(Value::as_str) {
            if !entry.contains('=') {
                debug!("Service {:?} passes through {}", name, entry);
                variables.insert(entry.to_string());
            }
        }
    }
}

/// Collect every variable a compose document depends on
pub fn scrape(doc: &Value) -> VariableSet {
    let mut collector = VariableCollector::new();
    collector.visit(doc);

    let mut variables = collector.into_variables();
    collect_service_environment(doc, &mut variables);
    variables
}
