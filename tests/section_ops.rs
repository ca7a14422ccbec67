use report_builder::{AlertLevel, ReportError, ReportSection};

#[test]
fn items_render_in_insertion_order() {
    let mut section = ReportSection::new();
    section.markdown("first", Some("a")).unwrap();
    section.markdown("second", Some("b")).unwrap();
    section.markdown("third", Some("c")).unwrap();

    let fragments = section.render_items().unwrap();
    assert_eq!(fragments.len(), 3);
    assert!(fragments[0].contains("first"));
    assert!(fragments[1].contains("second"));
    assert!(fragments[2].contains("third"));
}

#[test]
fn re_adding_a_key_replaces_in_place() {
    let mut section = ReportSection::new();
    section.markdown("A", Some("k")).unwrap();
    section.markdown("B", Some("x")).unwrap();
    section.markdown("C", Some("k")).unwrap();

    let fragments = section.render_items().unwrap();
    assert_eq!(fragments.len(), 2);
    assert!(fragments[0].contains("C"), "replacement must keep position");
    assert!(fragments[1].contains("B"));
}

#[test]
fn remove_deletes_position_entirely() {
    let mut section = ReportSection::new();
    section.markdown("one", Some("a")).unwrap();
    section.markdown("two", Some("b")).unwrap();
    section.markdown("three", Some("c")).unwrap();
    section.remove("b").unwrap();

    let keys: Vec<&str> = section.keys().collect();
    assert_eq!(keys, vec!["a", "c"]);
    let fragments = section.render_items().unwrap();
    assert_eq!(fragments.len(), 2);
    assert!(fragments[0].contains("one"));
    assert!(fragments[1].contains("three"));
}

#[test]
fn removing_a_missing_key_fails() {
    let mut section = ReportSection::new();
    let err = section.remove("nope").unwrap_err();
    assert!(matches!(err, ReportError::KeyNotFound(ref key) if key == "nope"));
}

#[test]
fn required_keys_reject_unkeyed_adds() {
    let mut section = ReportSection::with_required_keys();
    let err = section.markdown("text", None).unwrap_err();
    assert!(matches!(err, ReportError::MissingKey));
    section.markdown("text", Some("ok")).unwrap();
    assert_eq!(section.len(), 1);
}

#[test]
fn auto_keys_are_distinct() {
    let mut section = ReportSection::new();
    let k1 = section.add_item(report_builder::Item::Markup("x".into()), None).unwrap();
    let k2 = section.add_item(report_builder::Item::Markup("y".into()), None).unwrap();
    assert_ne!(k1, k2);
    assert_eq!(section.len(), 2);
}

#[test]
fn empty_markdown_adds_nothing() {
    let mut section = ReportSection::new();
    section.markdown("", None).unwrap();
    assert!(section.is_empty());
}

#[test]
fn markdown_is_dedented_before_conversion() {
    let mut section = ReportSection::new();
    section
        .markdown(
            "
            ### Results

            All samples passed.
            ",
            None,
        )
        .unwrap();

    let fragments = section.render_items().unwrap();
    assert!(
        fragments[0].contains("<h3>Results</h3>"),
        "indented heading should render as a heading, not a code block: {}",
        fragments[0]
    );
}

#[test]
fn markdown_accepts_mixed_unicode_indentation() {
    let mut section = ReportSection::new();
    section
        .markdown("  ascii-indented\n\u{3000}ideographic-indented", None)
        .unwrap();

    let fragments = section.render_items().unwrap();
    assert!(fragments[0].contains("ascii-indented"));
    assert!(fragments[0].contains("ideographic-indented"));
}

#[test]
fn unresolved_placeholder_blocks_rendering() {
    let mut section = ReportSection::new();
    section.markdown("before", Some("a")).unwrap();
    section.placeholder("pending");

    let err = section.render_items().unwrap_err();
    assert!(matches!(err, ReportError::UnresolvedPlaceholder(ref key) if key == "pending"));

    // Filling the slot under the same key resolves it in place.
    section.markdown("now filled", Some("pending")).unwrap();
    let fragments = section.render_items().unwrap();
    assert_eq!(fragments.len(), 2);
    assert!(fragments[1].contains("now filled"));
}

#[test]
fn alerts_carry_level_class_and_skip_empty_text() {
    let mut section = ReportSection::new();
    section.alert("Heads up", "", AlertLevel::Info, None).unwrap();
    assert!(section.is_empty());

    section
        .alert("Low coverage", "Mean depth below 10x.", AlertLevel::Warning, None)
        .unwrap();
    let fragments = section.render_items().unwrap();
    assert!(fragments[0].contains("alert-warning"));
    assert!(fragments[0].contains("Low coverage"));
}
