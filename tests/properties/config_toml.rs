//! Property tests for `webpage.toml` parsing.

use std::path::Path;

use proptest::prelude::*;

use voxel_webpage::config::parse_with_warnings;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Arbitrary text either parses or yields an error, never a panic.
    #[test]
    fn property_parse_never_panics(content in "(?s).{0,256}") {
        let _ = parse_with_warnings(&content, Path::new("webpage.toml"));
    }

    /// PROPERTY: Any project name survives a TOML basic string round trip.
    #[test]
    fn property_project_name_round_trips(name in "[A-Za-z0-9_][A-Za-z0-9 _.-]{0,31}") {
        let content = format!("[project]\nname = \"{name}\"\n");

        let (config, warnings) = parse_with_warnings(&content, Path::new("webpage.toml")).unwrap();

        prop_assert_eq!(config.project.name, name);
        prop_assert!(warnings.is_empty());
    }

    /// PROPERTY: A deploy dir name with a separator is always rejected.
    #[test]
    fn property_nested_dir_name_is_rejected(
        head in "[a-z.]{0,8}",
        sep in "[/\\\\]",
        tail in "[a-z.]{0,8}",
    ) {
        let content = format!("[deploy]\ndir_name = '{head}{sep}{tail}'\n");

        let result = parse_with_warnings(&content, Path::new("webpage.toml"));

        prop_assert!(result.is_err());
    }

    /// PROPERTY: Unknown keys never fail parsing; they become warnings.
    #[test]
    fn property_unknown_keys_warn(key in "zz[a-z_]{1,12}") {
        let content = format!("[deploy]\n{key} = 1\n");

        let (_, warnings) = parse_with_warnings(&content, Path::new("webpage.toml")).unwrap();

        prop_assert_eq!(warnings.len(), 1);
        prop_assert_eq!(&warnings[0].key, &key);
    }
}
