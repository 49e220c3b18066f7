use csslex::Dialect;
use cssvars::{Variable, set_declarations};
use insta::assert_snapshot;

#[test]
fn rewrite_single_line_snapshot() {
    let edits = [Variable::new("color2", "#123456")];
    let edited = set_declarations(
        "$color1: #ff0000; $color2: #00ff00; $color3: #0000ff;",
        Dialect::Scss,
        &edits,
    );
    assert_snapshot!(edited, @"$color1: #ff0000; $color2: #123456; $color3: #0000ff;");
}

#[test]
fn rewrite_keeps_trailing_comment_snapshot() {
    let edits = [Variable::new("mypadding", "8px")];
    let edited = set_declarations("@mypadding: 3px; // Test comment 2", Dialect::Less, &edits);
    assert_snapshot!(edited, @"@mypadding: 8px; // Test comment 2");
}
