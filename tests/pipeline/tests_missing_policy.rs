//! Missing-reference policy and error propagation.

use crate::helpers::source_fixtures::*;
use modelupdate::{ConvertError, MissingPolicy, convert_contents, parse_all_old_parts};

#[test]
fn test_ignore_skips_undeclared_child() {
    let model = parse_all_old_parts(UNDECLARED_CHILD, MissingPolicy::Ignore).unwrap();

    let body = model.get("body").unwrap();
    assert!(body.children.is_empty());
    assert_eq!(body.boxes.len(), 1);
    assert!(!model.contains("cape"));

    assert_eq!(model.diagnostics.len(), 1);
    let reference = &model.diagnostics[0];
    assert_eq!(reference.pattern, "add_child");
    assert_eq!(reference.name, "cape");
    let start = u32::from(reference.range.start()) as usize;
    assert!(UNDECLARED_CHILD[start..].starts_with("this.body.addChild"));
}

#[test]
fn test_ignore_still_converts() {
    let java = convert_contents(UNDECLARED_CHILD, "BodyModel", MissingPolicy::Ignore).unwrap();
    assert!(java.contains(".addBox(-4, 0, -2, 8, 12, 4)"));
    assert!(!java.contains("cape"));
}

#[test]
fn test_strict_names_missing_part() {
    let err = parse_all_old_parts(UNDECLARED_CHILD, MissingPolicy::Strict).unwrap_err();
    match &err {
        ConvertError::MissingReference { name, pattern, .. } => {
            assert_eq!(name, "cape");
            assert_eq!(*pattern, "add_child");
        }
        other => panic!("unexpected error: {}", other),
    }
    assert!(err.to_string().contains("`cape`"));
}

#[test]
fn test_strict_aborts_whole_conversion() {
    let result = convert_contents(UNDECLARED_CHILD, "BodyModel", MissingPolicy::Strict);
    assert!(matches!(result, Err(ConvertError::MissingReference { .. })));
}

#[test]
fn test_malformed_number_fails_under_either_policy() {
    for policy in [MissingPolicy::Ignore, MissingPolicy::Strict] {
        let err = parse_all_old_parts(MALFORMED_NUMBER, policy).unwrap_err();
        match err {
            ConvertError::MalformedNumericLiteral { text, pattern, .. } => {
                assert_eq!(text, "1.2.3F");
                assert_eq!(pattern, "rotation_point");
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}

#[test]
fn test_policy_from_str() {
    assert_eq!("Strict".parse::<MissingPolicy>().unwrap(), MissingPolicy::Strict);
    assert_eq!(" ignore ".parse::<MissingPolicy>().unwrap(), MissingPolicy::Ignore);
    assert!("lenient".parse::<MissingPolicy>().is_err());
    assert_eq!(MissingPolicy::default(), MissingPolicy::Ignore);
}
