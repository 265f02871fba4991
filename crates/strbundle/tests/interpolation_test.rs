//! Integration tests for template interpolation.

use proptest::prelude::*;
use strbundle::{args, interpolated, Args, L10nError, Template, MISSING_VALUE_TEXT};

#[test]
fn test_hello_scenario() {
    let hello = interpolated!("Hello, ", "firstName", " ", "lastName", ", age ", "age", "!");

    let text = hello
        .render(&args! {
            "firstName" => "John",
            "lastName" => "Doe",
            "age" => 42,
        })
        .unwrap();

    assert_eq!(text, "Hello, John Doe, age 42!");
}

#[test]
fn test_interpolated_function_form() {
    let hello = interpolated(
        ["Hello, ", " ", ", age ", "!"],
        ["firstName", "lastName", "age"],
    )
    .unwrap();
    let args = Args::new()
        .set("firstName", "John")
        .set("lastName", "Doe")
        .set("age", 42u8);

    assert_eq!(hello(&args).unwrap(), "Hello, John Doe, age 42!");
}

#[test]
fn test_non_string_values() {
    let template = Template::parse("{n} {b} {f} {c}").unwrap();
    let text = template
        .render(&args! { "n" => -3, "b" => true, "f" => 0.5, "c" => 'z' })
        .unwrap();
    assert_eq!(text, "-3 true 0.5 z");
}

#[test]
fn test_missing_value_strict_and_lossy() {
    let template = Template::parse("Dear {title} {name}").unwrap();
    let args = args! { "name" => "Smith" };

    match template.render(&args) {
        Err(L10nError::MissingPlaceholder { name }) => assert_eq!(name, "title"),
        other => panic!("expected MissingPlaceholder, got {other:?}"),
    }
    assert_eq!(
        template.render_lossy(&args),
        format!("Dear {MISSING_VALUE_TEXT} Smith")
    );
}

#[test]
fn test_extra_values_are_ignored() {
    let template = interpolated!("[", "a", "]");
    assert_eq!(template.render(&args! { "a" => 1, "b" => 2 }).unwrap(), "[1]");
}

#[test]
fn test_template_from_registry_bundle() {
    struct Strings {
        welcome: &'static str,
    }

    let registry = strbundle::init::<Strings>()
        .add_locale("en", Strings { welcome: "Welcome, {name}!" })
        .add_locale("de", Strings { welcome: "Willkommen, {name}!" })
        .set_locale("de");

    let welcome = Template::parse(registry.strings().unwrap().welcome).unwrap();
    assert_eq!(
        welcome.render(&args! { "name" => "Alice" }).unwrap(),
        "Willkommen, Alice!"
    );
}

#[test]
fn test_mismatched_parts_rejected() {
    assert!(matches!(
        interpolated(["only one"], ["a"]),
        Err(L10nError::InvalidTemplate {
            fragments: 1,
            placeholders: 1
        })
    ));
}

proptest! {
    #[test]
    fn prop_render_is_plain_concatenation(
        parts in proptest::collection::vec(("[a-z]{1,8}", "\\PC{0,12}", any::<i64>()), 0..6),
        head in "\\PC{0,12}",
    ) {
        let names: Vec<String> = parts
            .iter()
            .enumerate()
            .map(|(i, (n, _, _))| format!("{n}{i}"))
            .collect();
        let mut fragments = vec![head.clone()];
        fragments.extend(parts.iter().map(|(_, f, _)| f.clone()));

        let args: Args = names.iter().zip(&parts).map(|(n, (_, _, v))| (n.clone(), *v)).collect();
        let template = Template::new(fragments.clone(), names.clone()).unwrap();

        let mut expected = head;
        for (i, (_, fragment, value)) in parts.iter().enumerate() {
            expected.push_str(&value.to_string());
            expected.push_str(fragment);
            prop_assert!(args.contains(&names[i]));
        }

        prop_assert_eq!(template.render(&args).unwrap(), expected.clone());
        prop_assert_eq!(template.render_lossy(&args), expected);
    }

    #[test]
    fn prop_parse_accepts_display_output(
        fragments in proptest::collection::vec("[^{}]{0,6}|\\{\\{|\\}\\}", 1..5),
        name in "[A-Za-z_][A-Za-z0-9_]{0,6}",
    ) {
        let source = fragments.join(&format!("{{{name}}}"));
        let template = Template::parse(&source).unwrap();
        prop_assert_eq!(template.placeholders().len(), fragments.len() - 1);
        prop_assert_eq!(Template::parse(&template.to_string()).unwrap(), template);
    }
}
