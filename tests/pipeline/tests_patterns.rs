//! Legacy pattern extraction over whole files.

use crate::helpers::source_fixtures::*;
use modelupdate::parser::{LegacyPatterns, Pattern, TokenKind, tokenize};
use rstest::rstest;

fn count(pattern: &Pattern, source: &str) -> usize {
    pattern.matches(source).count()
}

#[rstest]
#[case("declaration", 8)]
#[case("rotation_point", 5)]
#[case("rotation_angle", 1)]
#[case("mirror", 2)]
#[case("add_box", 8)]
#[case("add_child", 1)]
#[case("texture_width", 1)]
#[case("texture_height", 1)]
fn test_ninja_match_counts(#[case] name: &str, #[case] expected: usize) {
    let patterns = LegacyPatterns::default();
    let pattern = patterns
        .all()
        .into_iter()
        .find(|pattern| pattern.name() == name)
        .unwrap();
    assert_eq!(count(pattern, NINJA_MODEL), expected);
}

#[test]
fn test_matches_in_source_order() {
    let patterns = LegacyPatterns::default();
    let names: Vec<String> = patterns
        .declaration
        .matches(NINJA_MODEL)
        .map(|m| m.text(0).to_string())
        .collect();
    assert_eq!(names, vec![
        "head", "hat", "body", "rightArm", "leftArm", "rightLeg", "leftLeg", "scarf",
    ]);
}

#[test]
fn test_add_box_optional_scale() {
    let patterns = LegacyPatterns::default();
    let boxes: Vec<_> = patterns.add_box.matches(NINJA_MODEL).collect();

    assert_eq!(boxes[0].len(), 8);
    assert_eq!(boxes[0].text(7), "0.0F");
    assert_eq!(boxes[1].text(7), "0.5F");
    assert!(boxes[2].get(7).is_none());
    assert_eq!(boxes[2].text(7), "");
}

#[test]
fn test_signed_number_captures() {
    let patterns = LegacyPatterns::default();
    let point = patterns
        .rotation_point
        .matches("this.leg.setRotationPoint(-1.9F, - 12.0F, 0.0F);")
        .next()
        .unwrap();
    assert_eq!(point.text(1), "-1.9F");
    assert_eq!(point.text(2), "-12.0F");
    assert_eq!(point.text(3), "0.0F");
}

#[test]
fn test_method_definition_is_not_a_call() {
    let patterns = LegacyPatterns::default();
    let source = "public void setRotateAngle(ModelRenderer modelRenderer, float x, float y, float z) {}";
    assert_eq!(count(&patterns.rotation_angle, source), 0);
}

#[test]
fn test_comments_are_not_scanned() {
    let patterns = LegacyPatterns::default();
    let source = "// this.ghost = new ModelRenderer(this, 0, 0);\n/* this.ghost.mirror = true; */";
    assert_eq!(count(&patterns.declaration, source), 0);
    assert_eq!(count(&patterns.mirror, source), 0);
}

#[test]
fn test_lexer_never_fails() {
    let tokens = tokenize("this.a = new ModelRenderer(this, 0, 0); # @");
    assert!(tokens.iter().any(|token| token.kind == TokenKind::Error));
    assert_eq!(
        tokens.iter().map(|token| token.text.len()).sum::<usize>(),
        "this.a = new ModelRenderer(this, 0, 0); # @".len()
    );
}
