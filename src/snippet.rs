//! Argument-block snippet generation.
//!
//! Scans the text between `SLATE_BEGIN_ARGS` and `SLATE_END_ARGS` for
//! `SLATE_<KIND>(...)` invocations and turns each one into a constructor
//! argument, a registration statement and a manifest signature.
//!
//! Invocations are matched up to the first `)`, so a type containing a
//! parenthesis yields a truncated capture. The begin marker itself
//! (`SLATE_BEGIN_ARGS(SFoo)`) matches the invocation pattern but has no
//! comma, so it never splits and only produces a `None` signature.
//! Identifier classes are ASCII-only.

use crate::model::{ArgumentDeclaration, GeneratedSnippet};
use regex::Regex;
use std::sync::LazyLock;

static RE_INVOCATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"SLATE_(?-u:\w)+\([^)]*\)").unwrap());

static RE_ARGUMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"SLATE_((?-u:\w)+)\(([^,]+),\s*([^)]+)\)").unwrap());

/// Split one invocation into kind, type and name. Captures are trimmed.
pub fn parse_invocation(invocation: &str) -> Option<ArgumentDeclaration> {
    let caps = RE_ARGUMENT.captures(invocation)?;
    Some(ArgumentDeclaration {
        kind: caps[1].trim().to_string(),
        type_expr: caps[2].trim().to_string(),
        name: caps[3].trim().to_string(),
    })
}

/// Parse every invocation in the block, in textual order. Invocations that
/// do not split are kept as `None` so callers can see where they were.
pub fn parse_arguments(block: &str) -> Vec<Option<ArgumentDeclaration>> {
    RE_INVOCATION
        .find_iter(block)
        .map(|m| parse_invocation(m.as_str()))
        .collect()
}

/// Generate all three fragments for an argument block.
pub fn generate(block: &str) -> GeneratedSnippet {
    let arguments = parse_arguments(block);

    let constructor_args = arguments
        .iter()
        .flatten()
        .map(ArgumentDeclaration::constructor_line)
        .collect::<Vec<_>>()
        .join("\n");

    let registrations = arguments
        .iter()
        .flatten()
        .map(ArgumentDeclaration::registration_line)
        .collect::<Vec<_>>()
        .join("\n");

    let definition_signatures = arguments
        .iter()
        .map(|arg| arg.as_ref().map(ArgumentDeclaration::definition_signature))
        .collect();

    GeneratedSnippet {
        constructor_args,
        registrations,
        definition_signatures,
    }
}
