//! Integration tests for the nesting validator.

use tagnest_markup::{
    Diagnostic, EMPTY_INPUT_MESSAGE, ParseResult, Recovery, TagToken, TreeEntry, Validator,
    validate, validate_with,
};

/// Helper to build an expected tree from (name, depth, line) triples
fn tree(entries: &[(&str, usize, usize)]) -> Vec<TreeEntry> {
    entries
        .iter()
        .map(|&(name, depth, line)| TreeEntry::new(name, depth, line))
        .collect()
}

/// Helper to validate and return the messages alongside the tree
fn run(input: &str) -> (Vec<String>, Vec<TreeEntry>) {
    let ParseResult { errors, tree } = validate(input);
    (errors.iter().map(ToString::to_string).collect(), tree)
}

#[test]
fn test_nested_pair() {
    let (errors, entries) = run("<a><b></b></a>");
    assert!(errors.is_empty());
    assert_eq!(entries, tree(&[("b", 1, 1), ("a", 0, 1)]));
}

#[test]
fn test_mismatch() {
    let (errors, entries) = run("<a></b>");
    assert_eq!(
        errors,
        vec!["Line 1: Tag mismatch! Expected </a> but found </b>"]
    );
    assert!(entries.is_empty());
}

#[test]
fn test_extra_closing_tag() {
    let (errors, entries) = run("</a>");
    assert_eq!(errors, vec!["Line 1: Extra closing tag </a>"]);
    assert!(entries.is_empty());
}

#[test]
fn test_unclosed_tag() {
    let (errors, entries) = run("<a>");
    assert_eq!(errors, vec!["Line 1: Missing closing tag for <a>"]);
    assert_eq!(entries, tree(&[("a", 0, 1)]));
}

#[test]
fn test_self_closing() {
    let (errors, entries) = run("<img/>");
    assert!(errors.is_empty());
    assert_eq!(entries, tree(&[("img", 0, 1)]));
}

#[test]
fn test_empty_input() {
    for input in ["", "   ", "\n\n", " \t\r\n "] {
        let result = validate(input);
        assert_eq!(result.errors, vec![Diagnostic::EmptyInput]);
        assert_eq!(result.messages(), vec![EMPTY_INPUT_MESSAGE]);
        assert!(result.tree.is_empty());
    }
}

#[test]
fn test_text_without_tags_is_valid() {
    let result = validate("just some prose\nover two lines");
    assert!(result.is_valid());
    assert!(result.tree.is_empty());
}

#[test]
fn test_unclosed_drain_is_lifo() {
    let (errors, entries) = run("<a>\n<b>\n<c>");
    assert_eq!(
        errors,
        vec![
            "Line 3: Missing closing tag for <c>",
            "Line 2: Missing closing tag for <b>",
            "Line 1: Missing closing tag for <a>",
        ]
    );
    assert_eq!(entries, tree(&[("c", 2, 3), ("b", 1, 2), ("a", 0, 1)]));
}

#[test]
fn test_tree_keeps_opening_line() {
    let (errors, entries) = run("<div>\n\n  text\n</div>");
    assert!(errors.is_empty());
    assert_eq!(entries, tree(&[("div", 0, 1)]));
}

#[test]
fn test_self_closing_depth_is_current_stack_size() {
    let (errors, entries) = run("<ul>\n  <li/>\n  <li />\n</ul>");
    assert!(errors.is_empty());
    assert_eq!(entries, tree(&[("li", 1, 2), ("li", 1, 3), ("ul", 0, 1)]));
}

#[test]
fn test_document_structure() {
    let input = "<html>\n<head>\n<title>T</title>\n</head>\n<body>\n<p>Hi<br/></p>\n</body>\n</html>";
    let (errors, entries) = run(input);
    assert!(errors.is_empty());
    assert_eq!(
        entries,
        tree(&[
            ("title", 2, 3),
            ("head", 1, 2),
            ("br", 3, 6),
            ("p", 2, 6),
            ("body", 1, 5),
            ("html", 0, 1),
        ])
    );
}

#[test]
fn test_mismatch_discards_top_and_cascades() {
    let (errors, entries) = run("<a><b></c></b></a>");
    assert_eq!(
        errors,
        vec![
            "Line 1: Tag mismatch! Expected </b> but found </c>",
            "Line 1: Tag mismatch! Expected </a> but found </b>",
            "Line 1: Extra closing tag </a>",
        ]
    );
    assert!(entries.is_empty());
}

#[test]
fn test_mismatch_then_unclosed() {
    let (errors, entries) = run("<a>\n<b>\n</a>");
    assert_eq!(
        errors,
        vec![
            "Line 3: Tag mismatch! Expected </b> but found </a>",
            "Line 1: Missing closing tag for <a>",
        ]
    );
    assert_eq!(entries, tree(&[("a", 0, 1)]));
}

#[test]
fn test_void_elements_need_a_slash() {
    let (errors, entries) = run("<p>line<br></p>");
    assert_eq!(
        errors,
        vec![
            "Line 1: Tag mismatch! Expected </br> but found </p>",
            "Line 1: Missing closing tag for <p>",
        ]
    );
    assert_eq!(entries, tree(&[("p", 0, 1)]));
}

#[test]
fn test_namespaced_names_are_truncated() {
    let (errors, entries) = run("<svg:rect></svg:circle>");
    assert!(errors.is_empty());
    assert_eq!(entries, tree(&[("svg", 0, 1)]));
}

#[test]
fn test_closing_self_closing_form_is_closing() {
    let (errors, _) = run("</div/>");
    assert_eq!(errors, vec!["Line 1: Extra closing tag </div>"]);
}

#[test]
fn test_diagnostic_lines() {
    let result = validate("<a>\n</b>\n</c>\n<d>");
    assert_eq!(
        result.messages(),
        vec![
            "Line 2: Tag mismatch! Expected </a> but found </b>",
            "Line 3: Extra closing tag </c>",
            "Line 4: Missing closing tag for <d>",
        ]
    );
    let lines: Vec<usize> = result.lines_with_errors().into_iter().collect();
    assert_eq!(lines, vec![2, 3, 4]);
}

#[test]
fn test_lone_carriage_return_line_numbers() {
    let (errors, _) = run("<a>\r</b>");
    assert_eq!(
        errors,
        vec!["Line 2: Tag mismatch! Expected </a> but found </b>"]
    );
}

#[test]
fn test_tag_broken_by_carriage_return_is_not_a_tag() {
    let (errors, entries) = run("<a\r>");
    assert!(errors.is_empty());
    assert!(entries.is_empty());
}

#[test]
fn test_line_separator_line_numbers() {
    let (errors, entries) = run("<a>\u{2028}<b>");
    assert_eq!(
        errors,
        vec![
            "Line 2: Missing closing tag for <b>",
            "Line 1: Missing closing tag for <a>",
        ]
    );
    assert_eq!(entries, tree(&[("b", 1, 2), ("a", 0, 1)]));
}

#[test]
fn test_form_feed_line_numbers() {
    let (errors, _) = run("<ul>\x0c</li>");
    assert_eq!(
        errors,
        vec![
            "Line 2: Tag mismatch! Expected </ul> but found </li>",
        ]
    );
}

#[test]
fn test_information_separators_are_blank() {
    let (errors, entries) = run("\x1c");
    assert_eq!(errors, vec!["⚠ File is empty!"]);
    assert!(entries.is_empty());
    let (errors, _) = run(" \x1f\n\x1d ");
    assert_eq!(errors, vec!["⚠ File is empty!"]);
}

#[test]
fn test_idempotent() {
    let input = "<a>\n<b></c>\n</a>\n<d/>";
    assert_eq!(validate(input), validate(input));
}

#[test]
fn test_validator_from_tokens() {
    let tokens = vec![
        TagToken::opening("x", 1),
        TagToken::self_closing("y", 2),
        TagToken::closing("x", 3),
    ];
    let result = Validator::new(tokens).run();
    assert!(result.is_valid());
    assert_eq!(result.tree, tree(&[("y", 1, 2), ("x", 0, 1)]));
}

#[test]
fn test_resync_closes_skipped_elements() {
    let result = validate_with("<a>\n<b>\n</a>", Recovery::Resync);
    assert_eq!(
        result.messages(),
        vec![
            "Line 3: Tag mismatch! Expected </b> but found </a>",
            "Line 2: Missing closing tag for <b>",
        ]
    );
    assert_eq!(result.tree, tree(&[("b", 1, 2), ("a", 0, 1)]));
}

#[test]
fn test_resync_ignores_unknown_closing_tag() {
    let result = validate_with("<a><b></c></b></a>", Recovery::Resync);
    assert_eq!(result.messages(), vec!["Line 1: Extra closing tag </c>"]);
    assert_eq!(result.tree, tree(&[("b", 1, 1), ("a", 0, 1)]));
}

#[test]
fn test_resync_matches_nearest_open_element() {
    let result = validate_with("<a>\n<a>\n<b>\n</a>", Recovery::Resync);
    assert_eq!(
        result.messages(),
        vec![
            "Line 4: Tag mismatch! Expected </b> but found </a>",
            "Line 3: Missing closing tag for <b>",
            "Line 1: Missing closing tag for <a>",
        ]
    );
    assert_eq!(result.tree, tree(&[("b", 2, 3), ("a", 1, 2), ("a", 0, 1)]));
}

#[test]
fn test_resync_agrees_on_well_formed_input() {
    let input = "<a><b></b><c/></a>";
    assert_eq!(validate(input), validate_with(input, Recovery::Resync));
}

#[test]
fn test_recovery_parse() {
    assert_eq!("resync".parse::<Recovery>(), Ok(Recovery::Resync));
    assert_eq!(Recovery::default(), Recovery::Discard);
    assert_eq!(Recovery::Discard.to_string(), "discard");
}
