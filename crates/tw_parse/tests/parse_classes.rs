use tailcn_tw_parse::{parse_class, sort_modifiers, ParseError};

#[test]
fn test_parse_common_classes() {
    // (类名, 修饰符, 去掉后缀的主体, 后缀, important, negative)
    let test_cases = vec![
        ("p-4", vec![], "p-4", None, false, false),
        ("hover:bg-blue-500/50", vec!["hover"], "bg-blue-500", Some("50"), false, false),
        ("md:-top-1", vec!["md"], "top-1", None, false, true),
        ("text-lg/7", vec![], "text-lg", Some("7"), false, false),
        ("!p-4", vec![], "p-4", None, true, false),
        ("dark:md:p-4!", vec!["dark", "md"], "p-4", None, true, false),
        ("[&>*]:p-4", vec!["[&>*]"], "p-4", None, false, false),
        ("supports-[display:grid]:grid", vec!["supports-[display:grid]"], "grid", None, false, false),
        ("bg-[url(/img/a.png)]", vec![], "bg-[url(/img/a.png)]", None, false, false),
        ("w-[calc(100%/3)]", vec![], "w-[calc(100%/3)]", None, false, false),
        ("[mask-type:luminance]", vec![], "[mask-type:luminance]", None, false, false),
    ];

    let mut failed = Vec::new();

    for (class, modifiers, base, postfix, important, negative) in &test_cases {
        match parse_class(class) {
            Ok(parsed) => {
                let actual = (
                    parsed.modifiers.iter().map(String::as_str).collect::<Vec<_>>(),
                    parsed.base_without_postfix(),
                    parsed.postfix(),
                    parsed.important,
                    parsed.negative,
                );
                let expected = (modifiers.clone(), *base, *postfix, *important, *negative);
                if actual != expected {
                    failed.push(format!("  ✗ {}: got {:?}, expected {:?}", class, actual, expected));
                }
            }
            Err(err) => failed.push(format!("  ✗ {}: parse error - {}", class, err)),
        }
    }

    if !failed.is_empty() {
        for msg in &failed {
            eprintln!("{}", msg);
        }
        panic!("{} classes failed to parse correctly", failed.len());
    }
}

#[test]
fn test_parse_errors() {
    assert_eq!(parse_class(""), Err(ParseError::EmptyInput));
    assert!(matches!(parse_class("w-[13px"), Err(ParseError::UnmatchedBracket(_))));
    assert!(matches!(parse_class("hover:"), Err(ParseError::MissingBase(_))));
    assert!(matches!(parse_class("hover::p-4"), Err(ParseError::MissingBase(_))));
    assert!(matches!(parse_class("!"), Err(ParseError::MissingBase(_))));
}

#[test]
fn test_modifier_id_matches_regardless_of_order() {
    let a = parse_class("hover:focus:p-2").unwrap();
    let b = parse_class("focus:hover:p-4").unwrap();
    assert_eq!(a.modifier_id(), b.modifier_id());

    let important = parse_class("hover:focus:p-2!").unwrap();
    assert_ne!(a.modifier_id(), important.modifier_id());
}

#[test]
fn test_sort_keeps_order_sensitive_positions() {
    let modifiers: Vec<String> = ["hover", "before", "focus", "active"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(sort_modifiers(&modifiers), vec!["hover", "before", "active", "focus"]);
}
