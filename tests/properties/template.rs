//! Property tests for `$name` / `${name}` template substitution.

use proptest::prelude::*;

use voxel_webpage::domain::services::{Template, TemplateVars};

fn literal_chunk() -> impl Strategy<Value = String> {
    // anything but `$`, including newlines and non-ASCII
    proptest::string::string_regex("[^$]{0,40}").unwrap()
}

fn identifier() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z_][A-Za-z0-9_]{0,12}").unwrap()
}

fn vars(name: &str) -> TemplateVars {
    let mut vars = TemplateVars::new();
    vars.insert("name".to_string(), name.to_string());
    vars
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Substitution never panics on arbitrary input.
    #[test]
    fn property_never_panics(source in "(?s).{0,256}", value in ".{0,16}") {
        let _ = Template::parse(&source).safe_substitute(&vars(&value));
    }

    /// PROPERTY: Text without `$` passes through unchanged.
    #[test]
    fn property_dollar_free_text_is_identity(source in literal_chunk()) {
        prop_assert_eq!(Template::parse(&source).substitute_one("name", "VoxelTest"), source);
    }

    /// PROPERTY: Every `${name}` is replaced and nothing else changes.
    #[test]
    fn property_braced_name_replaced_everywhere(
        chunks in proptest::collection::vec(literal_chunk(), 1..6),
        value in ".{0,16}",
    ) {
        let source = chunks.join("${name}");
        let expected = chunks.join(&value);

        prop_assert_eq!(Template::parse(&source).substitute_one("name", &value), expected);
    }

    /// PROPERTY: Unknown braced placeholders survive verbatim.
    #[test]
    fn property_unknown_placeholder_kept(
        before in literal_chunk(),
        ident in identifier().prop_filter("must not be the known key", |s| s != "name"),
        after in literal_chunk(),
    ) {
        let source = format!("{before}${{{ident}}}{after}");

        prop_assert_eq!(Template::parse(&source).substitute_one("name", "VoxelTest"), source);
    }

    /// PROPERTY: `$$` always collapses to a single literal `$`.
    #[test]
    fn property_escaped_dollar(before in literal_chunk(), ident in identifier()) {
        let source = format!("{before}$${ident}");

        prop_assert_eq!(
            Template::parse(&source).substitute_one(&ident, "X"),
            format!("{before}${ident}")
        );
    }
}
