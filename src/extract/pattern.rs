//! Regex-based declaration extractor.
//!
//! A header qualifies when it contains both `SLATE_BEGIN_ARGS` (at a
//! strictly positive offset) and `SLATE_END_ARGS`, and somewhere in the
//! file a `class [X_API] Name : public Base` declaration. Only the first
//! class declaration is considered, even if it is not the widget.
//! Identifiers are ASCII word characters only.

use super::DeclarationExtractor;
use crate::model::WidgetDeclaration;
use crate::snippet;
use regex::Regex;
use std::sync::LazyLock;

pub const BEGIN_MARKER: &str = "SLATE_BEGIN_ARGS";
pub const END_MARKER: &str = "SLATE_END_ARGS";

static RE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"class\s+((?-u:\w)+_API\s+)?((?-u:\w)+)\s*:\s*public\s+((?-u:\w)+)").unwrap()
});

pub struct PatternExtractor;

/// Slice the argument block out of `content`: from the begin marker
/// (inclusive) to the end marker (exclusive). When the end marker comes
/// first the bounds are swapped.
pub fn args_block(content: &str) -> Option<&str> {
    let begin = content.find(BEGIN_MARKER)?;
    let end = content.find(END_MARKER)?;
    if begin == 0 || end == 0 {
        return None;
    }
    Some(&content[begin.min(end)..begin.max(end)])
}

impl DeclarationExtractor for PatternExtractor {
    fn extract(&self, content: &str) -> Option<WidgetDeclaration> {
        let block = args_block(content)?;
        let snippet = snippet::generate(block);

        let caps = RE_CLASS.captures(content)?;
        Some(WidgetDeclaration {
            class_name: caps[2].to_string(),
            parent_class: caps[3].to_string(),
            snippet,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDGET_A: &str = "#pragma once\n\
        class FOO_API SWidgetA : public SCompoundWidget\n\
        {\n\
        public:\n\
        \tSLATE_BEGIN_ARGS(SWidgetA)\n\
        \t\tSLATE_ARGUMENT(int32, Count)\n\
        \tSLATE_END_ARGS()\n\
        };\n";

    #[test]
    fn extracts_class_and_parent() {
        let decl = PatternExtractor.extract(WIDGET_A).unwrap();
        assert_eq!(decl.class_name, "SWidgetA");
        assert_eq!(decl.parent_class, "SCompoundWidget");
        assert_eq!(
            decl.snippet.registrations,
            "\t\tArgs.Add<int32>(\"Count\", DTS::EArgType::SLATE_ARGUMENT);"
        );
    }

    #[test]
    fn export_annotation_is_optional() {
        let input = "\nclass SPlain : public SLeafWidget { SLATE_BEGIN_ARGS(SPlain) SLATE_END_ARGS() };";
        let decl = PatternExtractor.extract(input).unwrap();
        assert_eq!(decl.class_name, "SPlain");
        assert_eq!(decl.parent_class, "SLeafWidget");
    }

    #[test]
    fn no_markers_no_match() {
        let input = "class FOO_API SWidgetA : public SCompoundWidget {};";
        assert!(PatternExtractor.extract(input).is_none());
    }

    #[test]
    fn only_begin_marker_no_match() {
        let input = "class SWidgetA : public SCompoundWidget { SLATE_BEGIN_ARGS(SWidgetA) };";
        assert!(PatternExtractor.extract(input).is_none());
    }

    #[test]
    fn markers_without_class_no_match() {
        let input = "// header\nstruct FArgs { SLATE_BEGIN_ARGS(FArgs) SLATE_END_ARGS() };";
        assert!(PatternExtractor.extract(input).is_none());
    }

    #[test]
    fn marker_at_offset_zero_no_match() {
        let input = "SLATE_BEGIN_ARGS(SFoo) SLATE_END_ARGS()\nclass SFoo : public SWidget {};";
        assert!(PatternExtractor.extract(input).is_none());
    }

    #[test]
    fn first_class_declaration_wins() {
        let input = "\nclass FHelper : public FNoncopyable {};\n\
                     class SReal : public SCompoundWidget { SLATE_BEGIN_ARGS(SReal) SLATE_END_ARGS() };";
        let decl = PatternExtractor.extract(input).unwrap();
        assert_eq!(decl.class_name, "FHelper");
        assert_eq!(decl.parent_class, "FNoncopyable");
    }

    #[test]
    fn single_line_widget() {
        let input = "class FOO_API SWidgetA : public SCompoundWidget { SLATE_BEGIN_ARGS(SWidgetA) SLATE_ARGUMENT(int32, Count) SLATE_END_ARGS() };";
        let decl = PatternExtractor.extract(input).unwrap();
        assert_eq!(decl.class_name, "SWidgetA");
        assert_eq!(decl.parent_class, "SCompoundWidget");
        assert_eq!(
            decl.snippet.definition_signatures,
            vec![None, Some("DEFINE_FUNCTION_SLATE_ARGUMENT(int32, Count, );".to_string())]
        );
    }

    #[test]
    fn non_ascii_identifier_is_not_a_class() {
        let input = "\n// class \u{dc}berblick : public Ignored\n\
                     class SReal : public SCompoundWidget { SLATE_BEGIN_ARGS(SReal) SLATE_END_ARGS() };";
        let decl = PatternExtractor.extract(input).unwrap();
        assert_eq!(decl.class_name, "SReal");
        assert_eq!(decl.parent_class, "SCompoundWidget");
    }

    #[test]
    fn block_excludes_end_marker() {
        let input = "\nSLATE_BEGIN_ARGS(SFoo) SLATE_ARGUMENT(int32, A) SLATE_END_ARGS() SLATE_ARGUMENT(int32, B)";
        let block = args_block(input).unwrap();
        assert!(block.starts_with(BEGIN_MARKER));
        assert!(block.contains("SLATE_ARGUMENT(int32, A)"));
        assert!(!block.contains(END_MARKER));
        assert!(!block.contains("int32, B"));
    }

    #[test]
    fn end_before_begin_swaps_bounds() {
        let input = "\nSLATE_END_ARGS() SLATE_ARGUMENT(int32, A) SLATE_BEGIN_ARGS(SFoo)";
        let block = args_block(input).unwrap();
        assert!(block.starts_with(END_MARKER));
        assert!(block.contains("SLATE_ARGUMENT(int32, A)"));
        assert!(!block.contains(BEGIN_MARKER));
    }
}
