//! Property tests: parsing is deterministic, never panics, and printed
//! documents parse back to the same AST.

use crate::tests::utils::parse_ok;
use proptest::prelude::*;

fn name() -> impl Strategy<Value = String> {
    "[a-z_][a-zA-Z0-9_]{0,6}"
}

fn fragment_name() -> impl Strategy<Value = String> {
    "[A-Z][a-zA-Z0-9]{0,6}"
}

fn value() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        any::<i32>().prop_map(|n| n.to_string()),
        (-1000i32..1000, 0u32..1000).prop_map(|(int, frac)| format!("{int}.{frac}")),
        (1u32..10, -20i32..20).prop_map(|(m, e)| format!("{m}e{e}")),
        "[a-zA-Z0-9 \\\\\"]{0,8}".prop_map(|s| {
            format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
        }),
        Just("true".to_string()),
        Just("false".to_string()),
        Just("null".to_string()),
        "[A-Z][A-Z_]{0,5}",
        name().prop_map(|n| format!("${n}")),
    ];
    leaf.prop_recursive(4, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4)
                .prop_map(|items| format!("[{}]", items.join(", "))),
            prop::collection::vec((name(), inner), 0..4).prop_map(|fields| {
                let fields: Vec<_> = fields
                    .into_iter()
                    .map(|(name, value)| format!("{name}: {value}"))
                    .collect();
                format!("{{{}}}", fields.join(", "))
            }),
        ]
    })
}

fn arguments() -> impl Strategy<Value = String> {
    prop::collection::vec((name(), value()), 0..3).prop_map(|args| {
        if args.is_empty() {
            return String::new();
        }
        let args: Vec<_> = args
            .into_iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect();
        format!("({})", args.join(", "))
    })
}

fn directives() -> impl Strategy<Value = String> {
    prop::collection::vec((name(), arguments()), 0..2).prop_map(|dirs| {
        dirs.into_iter()
            .map(|(name, args)| format!(" @{name}{args}"))
            .collect::<String>()
    })
}

fn selection_set() -> impl Strategy<Value = String> {
    let leaf_field = (prop::option::of(name()), name(), arguments(), directives()).prop_map(
        |(alias, name, args, dirs)| match alias {
            Some(alias) => format!("{alias}: {name}{args}{dirs}"),
            None => format!("{name}{args}{dirs}"),
        },
    );
    let spread = (fragment_name(), directives()).prop_map(|(name, dirs)| format!("...{name}{dirs}"));
    let leaf = prop_oneof![3 => leaf_field, 1 => spread];

    let selection = leaf.prop_recursive(4, 32, 4, |inner| {
        let nested = prop::collection::vec(inner, 1..4).prop_map(|sels| sels.join(" "));
        prop_oneof![
            (name(), arguments(), nested.clone())
                .prop_map(|(name, args, sels)| format!("{name}{args} {{ {sels} }}")),
            (prop::option::of(fragment_name()), directives(), nested).prop_map(
                |(type_condition, dirs, sels)| match type_condition {
                    Some(ty) => format!("... on {ty}{dirs} {{ {sels} }}"),
                    None => format!("...{dirs} {{ {sels} }}"),
                },
            ),
        ]
    });
    prop::collection::vec(selection, 1..4).prop_map(|sels| format!("{{ {} }}", sels.join(" ")))
}

fn definition() -> impl Strategy<Value = String> {
    prop_oneof![
        selection_set(),
        (
            prop_oneof![Just("query"), Just("mutation"), Just("subscription")],
            prop::option::of(fragment_name()),
            directives(),
            selection_set(),
        )
            .prop_map(|(keyword, name, dirs, sels)| {
                format!("{keyword} {}{dirs} {sels}", name.unwrap_or_default())
            }),
        (fragment_name(), fragment_name(), directives(), selection_set()).prop_map(
            |(name, ty, dirs, sels)| format!("fragment {name} on {ty}{dirs} {sels}")
        ),
    ]
}

fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(definition(), 1..4).prop_map(|defs| defs.join("\n"))
}

proptest! {
    #[test]
    fn arbitrary_input_never_panics_and_is_deterministic(source in "\\PC{0,64}") {
        let first = format!("{:?}", crate::parse(&source));
        let second = format!("{:?}", crate::parse(&source));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn generated_documents_parse(source in document()) {
        let doc = parse_ok(&source);
        prop_assert!(!doc.definitions.is_empty());
    }

    #[test]
    fn printed_documents_reparse_to_same_ast(source in document()) {
        let doc = parse_ok(&source);
        let printed = doc.to_source();
        let reparsed = parse_ok(&printed);
        prop_assert_eq!(doc, reparsed);
    }
}

proptest! {
    #[test]
    fn names_lex_as_single_name_token(name in "[_A-Za-z][_0-9A-Za-z]{0,16}") {
        let mut lexer = crate::Lexer::new(&name);
        let token = lexer.next().unwrap().unwrap();
        prop_assert_eq!(token.kind, crate::token::GraphQLTokenKind::Name);
        prop_assert_eq!(token.value.as_ref(), name.as_str());
        prop_assert_eq!(
            lexer.next().unwrap().unwrap().kind,
            crate::token::GraphQLTokenKind::Eof
        );
    }

    #[test]
    fn i32_literals_parse_exactly(n in any::<i32>()) {
        prop_assert_eq!(
            crate::tests::utils::parse_arg_value(&n.to_string()),
            crate::ast::Value::Int(n)
        );
    }
}
