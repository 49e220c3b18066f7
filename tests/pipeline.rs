use styleguide::{Dialect, SourceText, Variable, VariableParser, filter_prefixed, split};

const THEME: &str = "\
$ignored: 1px;

// Buttons
//
// $button-radius - Corner rounding
// .primary - Main action
//
// Styleguide 2.1

$button-radius: 4px;
.button {
  border-radius: $button-radius; // rounded
}

/* Links
 * Styleguide 3
 */
a { color: $link; }
";

#[test]
fn blocks_feed_the_variable_engine() {
    let blocks = split(THEME);
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].reference(), Some("2.1"));
    assert!(!blocks[0].code.contains("$ignored"));

    let parser = VariableParser::new(Dialect::Scss);
    assert_eq!(
        parser.parse_declarations(&blocks[0].code),
        vec![Variable::new("button-radius", "4px")]
    );
    assert_eq!(parser.find_usages(&blocks[0].code), vec!["button-radius"]);
    assert_eq!(parser.find_usages(&blocks[1].code), vec!["link"]);

    let documented = filter_prefixed(Some(blocks[0].modifiers()));
    assert_eq!(documented, vec!["button-radius"]);
}

#[test]
fn rewrite_keeps_documentation_intact() {
    let parser = VariableParser::for_extension(".scss");
    let edited = parser.set_declarations(THEME, &[Variable::new("button-radius", "0")]);
    assert_eq!(edited, THEME.replace("$button-radius: 4px;", "$button-radius: 0;"));
    assert_eq!(split(&edited)[0].kss, split(THEME)[0].kss);
}

#[test]
fn bytes_are_decoded_before_extraction() {
    let text = SourceText::from_bytes(THEME.as_bytes()).unwrap();
    assert_eq!(split(&text).len(), 2);
    assert!(SourceText::from_bytes(b"\xff\xfe").is_err());
}
