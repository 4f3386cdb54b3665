//! Data model for extracted widget declarations — template-agnostic.

/// A widget class found in a header, together with its argument snippets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetDeclaration {
    /// Class name, e.g. `SButton`
    pub class_name: String,
    /// First public base, e.g. `SBorder`
    pub parent_class: String,
    pub snippet: GeneratedSnippet,
}

/// One `SLATE_<KIND>(<type>, <name>)` invocation inside the argument block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentDeclaration {
    /// Macro subtype without the `SLATE_` prefix, e.g. `ARGUMENT`, `EVENT`
    pub kind: String,
    pub type_expr: String,
    pub name: String,
}

impl ArgumentDeclaration {
    /// `\t\t$SLATE_<kind>(<type>, <name>, );`
    pub fn constructor_line(&self) -> String {
        format!(
            "\t\t$SLATE_{}({}, {}, );",
            self.kind, self.type_expr, self.name
        )
    }

    /// `\t\tArgs.Add<<type>>("<name>", DTS::EArgType::SLATE_<kind>);`
    pub fn registration_line(&self) -> String {
        format!(
            "\t\tArgs.Add<{}>(\"{}\", DTS::EArgType::SLATE_{});",
            self.type_expr, self.name, self.kind
        )
    }

    /// `DEFINE_FUNCTION_SLATE_<kind>(<type>, <name>, );`
    pub fn definition_signature(&self) -> String {
        format!(
            "DEFINE_FUNCTION_SLATE_{}({}, {}, );",
            self.kind, self.type_expr, self.name
        )
    }
}

/// Text fragments generated from one argument block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedSnippet {
    /// Constructor-argument lines joined with `\n`
    pub constructor_args: String,
    /// Registration lines joined with `\n`
    pub registrations: String,
    /// One entry per invocation, in textual order. `None` marks an
    /// invocation that did not split into kind/type/name; those are
    /// dropped by the manifest builder.
    pub definition_signatures: Vec<Option<String>>,
}
