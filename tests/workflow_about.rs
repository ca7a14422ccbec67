use report_builder::WorkflowReport;

#[test]
fn about_section_appears_once_across_renders() {
    let mut report = WorkflowReport::new("Alignment QC", "wf-alignment", "epi2me-labs")
        .with_versions("v1.2.0", "deadbeef");
    report.markdown("Pipeline results.", None).unwrap();

    let first = report.render().unwrap();
    assert_eq!(first.matches("<h3>About</h3>").count(), 1);
    assert!(first.contains("wf-alignment"));
    assert!(first.contains("deadbeef"));

    // A second render regenerates the tail instead of appending another one.
    let second = report.render().unwrap();
    assert_eq!(second.matches("<h3>About</h3>").count(), 1);
}

#[test]
fn about_section_renders_after_later_additions() {
    let mut report = WorkflowReport::new("Ordering", "wf-demo", "example-org");
    report.render().unwrap();

    // Content added after a render must still precede the regenerated tail.
    report.markdown("late results", None).unwrap();
    let html = report.render().unwrap();
    let results = html.find("late results").unwrap();
    let about = html.find("<h3>About</h3>").unwrap();
    assert!(results < about);
}

#[test]
fn lead_names_workflow_and_provider() {
    let report = WorkflowReport::new("Lead", "wf-demo", "example-org");
    assert_eq!(
        report.lead(),
        "Results generated through the wf-demo workflow provided by example-org."
    );
}

#[test]
fn about_can_be_disabled() {
    let mut report = WorkflowReport::new("No about", "wf-demo", "example-org").without_about();
    report.markdown("body", None).unwrap();
    let html = report.render().unwrap();
    assert!(!html.contains("<h3>About</h3>"));
}
