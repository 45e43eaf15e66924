//! Tests for the case transformations and the transformation catalog.

use super::{
    Transform, camelize, dasherize, lower_case_first, swap_case, titleize, underscored,
    upper_camelize, upper_case_first,
};
use crate::encoding::Encoding;
use crate::error::DispatchError;

const NO_IGNORE: &[&str] = &[];

// First-character folding
#[test]
fn test_upper_case_first() {
    assert_eq!(upper_case_first("test", Encoding::Utf8), "Test");
    assert_eq!(upper_case_first("Test", Encoding::Utf8), "Test");
    assert_eq!(upper_case_first("ñandú", Encoding::Utf8), "Ñandú");
    assert_eq!(upper_case_first("ñandú", Encoding::Ascii), "ñandú");
    assert_eq!(upper_case_first("1a", Encoding::Utf8), "1a");
    assert_eq!(upper_case_first("", Encoding::Utf8), "");
}

#[test]
fn test_lower_case_first() {
    assert_eq!(lower_case_first("Test", Encoding::Utf8), "test");
    assert_eq!(lower_case_first("ÉCOLE", Encoding::Utf8), "éCOLE");
    assert_eq!(lower_case_first("ÉCOLE", Encoding::Latin1), "éCOLE");
    assert_eq!(lower_case_first("ÉCOLE", Encoding::Ascii), "ÉCOLE");
    assert_eq!(lower_case_first("", Encoding::Utf8), "");
}

// camelize
#[test]
fn test_camelize_separators_and_digits() {
    assert_eq!(
        camelize(" my-sample_2Test string ", Encoding::Utf8),
        "mySample2TestString"
    );
    assert_eq!(camelize("CamelCase", Encoding::Utf8), "camelCase");
    assert_eq!(camelize("Camel-Case", Encoding::Utf8), "camelCase");
    assert_eq!(camelize("camel case", Encoding::Utf8), "camelCase");
    assert_eq!(camelize("camel -case", Encoding::Utf8), "camelCase");
    assert_eq!(camelize("camel2case", Encoding::Utf8), "camel2Case");
    assert_eq!(camelize("1camel2case", Encoding::Utf8), "1Camel2Case");
    assert_eq!(
        camelize("string-with-2-2 numbers", Encoding::Utf8),
        "stringWith22Numbers"
    );
}

#[test]
fn test_camelize_trailing_separator_is_dropped() {
    assert_eq!(camelize("camel-", Encoding::Utf8), "camel");
    assert_eq!(camelize("camel_ -", Encoding::Utf8), "camel");
}

#[test]
fn test_camelize_multibyte() {
    assert_eq!(camelize("Σash  Case", Encoding::Utf8), "σashCase");
    assert_eq!(camelize("ñandú-ágil", Encoding::Utf8), "ñandúÁgil");
}

#[test]
fn test_camelize_ascii_leaves_non_ascii_case_alone() {
    assert_eq!(camelize("Élan vital", Encoding::Ascii), "ÉlanVital");
    assert_eq!(camelize("ñandú-ágil", Encoding::Ascii), "ñandúágil");
}

#[test]
fn test_upper_camelize() {
    assert_eq!(upper_camelize("my_sample-2 test", Encoding::Utf8), "MySample2Test");
    assert_eq!(upper_camelize("camel case", Encoding::Utf8), "CamelCase");
    assert_eq!(upper_camelize("Σash  Case", Encoding::Utf8), "ΣashCase");
}

// dasherize / underscored
#[test]
fn test_dasherize() {
    assert_eq!(dasherize("MySampleTest", Encoding::Utf8), "my-sample-test");
    assert_eq!(dasherize("testDasherize", Encoding::Utf8), "test-dasherize");
    assert_eq!(dasherize("test  dasherize", Encoding::Utf8), "test-dasherize");
    assert_eq!(dasherize("  test_dasherize  ", Encoding::Utf8), "test-dasherize");
    assert_eq!(dasherize("test_-_dasherize", Encoding::Utf8), "test-dasherize");
    assert_eq!(dasherize("TestDCase", Encoding::Utf8), "test-d-case");
}

#[test]
fn test_dasherize_no_split_after_separator() {
    assert_eq!(dasherize("my-Sample", Encoding::Utf8), "my-sample");
    assert_eq!(dasherize("test Σase", Encoding::Utf8), "test-σase");
}

#[test]
fn test_dasherize_per_encoding_upper_class() {
    assert_eq!(dasherize("ΣτανιλCase", Encoding::Utf8), "στανιλ-case");
    assert_eq!(dasherize("ÉcoleNormale", Encoding::Ascii), "École-normale");
    assert_eq!(dasherize("écoleÉlite", Encoding::Latin1), "école-élite");
    assert_eq!(dasherize("écoleÉlite", Encoding::Ascii), "écoleÉlite");
}

#[test]
fn test_underscored() {
    assert_eq!(underscored("MySampleTest", Encoding::Utf8), "my_sample_test");
    assert_eq!(underscored("test-underscored", Encoding::Utf8), "test_underscored");
    assert_eq!(underscored("  test   underscored ", Encoding::Utf8), "test_underscored");
    assert_eq!(underscored("TestUCase", Encoding::Utf8), "test_u_case");
}

// swap case
#[test]
fn test_swap_case() {
    assert_eq!(swap_case("Ñandú", Encoding::Utf8), "ñANDÚ");
    assert_eq!(swap_case("Hello World 123!", Encoding::Utf8), "hELLO wORLD 123!");
    assert_eq!(swap_case("  keep\tspacing ", Encoding::Utf8), "  KEEP\tSPACING ");
}

#[test]
fn test_swap_case_caseless_characters_pass_through() {
    assert_eq!(swap_case("日本 42 -_", Encoding::Utf8), "日本 42 -_");
    assert_eq!(swap_case("ÿ Ā", Encoding::Latin1), "ÿ Ā");
    assert_eq!(swap_case("ÿ Ā", Encoding::Utf8), "Ÿ ā");
}

// titleize
#[test]
fn test_titleize_with_ignore_list() {
    assert_eq!(
        titleize("a simple test of the api", Encoding::Utf8, &["of", "the"]),
        "A Simple Test of the Api"
    );
    assert_eq!(
        titleize(
            "  i like to watch DVDs at home  ",
            Encoding::Utf8,
            &["at", "by", "for", "in", "of", "on", "out", "to", "the"]
        ),
        "I Like to Watch DVDs at Home"
    );
}

#[test]
fn test_titleize_without_ignore_list() {
    assert_eq!(
        titleize("testing the method", Encoding::Utf8, NO_IGNORE),
        "Testing The Method"
    );
    assert_eq!(
        titleize("  Θα ήθελα να φύγει  ", Encoding::Utf8, NO_IGNORE),
        "Θα Ήθελα Να Φύγει"
    );
}

#[test]
fn test_titleize_ignore_is_literal() {
    assert_eq!(titleize("of Of", Encoding::Utf8, &["of"]), "of Of");
    assert_eq!(titleize("api", Encoding::Utf8, &["API"]), "Api");
}

// Catalog
#[test]
fn test_empty_input_for_every_transform() {
    for encoding in Encoding::all() {
        for transform in Transform::all() {
            assert_eq!(
                transform.apply("", *encoding, NO_IGNORE),
                "",
                "{transform} under {encoding}"
            );
        }
    }
}

#[test]
fn test_transform_names_roundtrip() {
    for transform in Transform::all() {
        assert_eq!(
            transform
                .name()
                .parse::<Transform>()
                .expect("catalog name should parse"),
            *transform
        );
    }
}

#[test]
fn test_unknown_transform_name() {
    assert_eq!(
        "kebabize".parse::<Transform>(),
        Err(DispatchError::UnknownMethod("kebabize".to_string()))
    );
    // Lookup is exact
    assert!("Camelize".parse::<Transform>().is_err());
}

#[test]
fn test_apply_routes_ignore_list_to_titleize_only() {
    assert!(Transform::Titleize.takes_ignore_list());
    assert!(!Transform::Camelize.takes_ignore_list());
    assert_eq!(
        Transform::Titleize.apply("war of worlds", Encoding::Utf8, &["of"]),
        "War of Worlds"
    );
    assert_eq!(
        Transform::UpperCamelize.apply("war of worlds", Encoding::Utf8, &["of"]),
        "WarOfWorlds"
    );
}

#[test]
fn test_catalog_lists_every_method_once() {
    let names: std::collections::HashSet<_> = Transform::all().iter().map(|t| t.name()).collect();
    assert_eq!(names.len(), 8);
    assert_eq!(Transform::all().len(), 8);
}

#[test]
fn test_transform_serde_by_name() {
    let json = serde_json::to_string(&Transform::UpperCamelize).expect("serialize");
    assert_eq!(json, "\"upperCamelize\"");
    let parsed: Transform = serde_json::from_str("\"swapCase\"").expect("deserialize");
    assert_eq!(parsed, Transform::SwapCase);
    assert!(serde_json::from_str::<Transform>("\"shout\"").is_err());
}
