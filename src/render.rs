//! Template rendering for generated glue files.
//!
//! The template is plain text with four literal placeholders, replaced
//! globally in this order: arguments, registrations, widget class, super
//! class. Replacement is literal, so `$` in the template needs no escaping.

use crate::model::WidgetDeclaration;
use std::path::{Path, PathBuf};

pub const ARGUMENTS_PLACEHOLDER: &str = "$__ARGUMENTS__$";
pub const DTS_ARGS_PLACEHOLDER: &str = "$__DTS_ARGS__$";
pub const WIDGET_CLASS_PLACEHOLDER: &str = "$WidgetClass$";
pub const SUPER_CLASS_PLACEHOLDER: &str = "$SuperClass$";

/// Sigil prepended to every generated file name.
pub const OUTPUT_SIGIL: char = '$';
pub const OUTPUT_EXTENSION: &str = "cpp";

/// Render `template` for one widget declaration.
pub fn render(template: &str, decl: &WidgetDeclaration) -> String {
    template
        .replace(ARGUMENTS_PLACEHOLDER, &decl.snippet.constructor_args)
        .replace(DTS_ARGS_PLACEHOLDER, &decl.snippet.registrations)
        .replace(WIDGET_CLASS_PLACEHOLDER, &decl.class_name)
        .replace(SUPER_CLASS_PLACEHOLDER, &decl.parent_class)
}

/// `$<base_name>.cpp`
pub fn output_file_name(base_name: &str) -> String {
    format!("{}{}.{}", OUTPUT_SIGIL, base_name, OUTPUT_EXTENSION)
}

/// Output path for a header base name, flat inside `target_dir`.
pub fn output_path(target_dir: &Path, base_name: &str) -> PathBuf {
    target_dir.join(output_file_name(base_name))
}
