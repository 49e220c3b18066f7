use insta::assert_snapshot;

#[test]
fn split_code_snapshot() {
    let source = "// Styleguide 1.0\n\n.a { b: c }";
    let blocks = kss::split(source);
    assert_snapshot!(&blocks[0].code, @".a { b: c }");
}

#[test]
fn reference_snapshot() {
    let blocks = kss::split("/* Forms\n * Styleguide 4.2.1\n */\n\nform {}");
    assert_snapshot!(blocks[0].reference().unwrap_or_default(), @"4.2.1");
}
