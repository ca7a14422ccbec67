//! Workflow-flavored report with a regenerated trailing About section.
use std::ops::{Deref, DerefMut};
use std::path::Path;

use crate::error::ReportError;
use crate::keys;
use crate::report::Report;

/// A [`Report`] for pipeline output, closing with an About section naming the
/// workflow, its provider and version details.
///
/// The About section is deleted and recreated on every render, so a report
/// rendered several times (for instance once to preview and once to write)
/// always carries exactly one, reflecting the latest version details.
pub struct WorkflowReport {
    report: Report,
    workflow: String,
    provider: String,
    revision: String,
    commit: String,
    about: bool,
    tail_key: String,
}

impl WorkflowReport {
    /// Create a report for the named workflow. The lead paragraph derives
    /// from the workflow and provider names; revision and commit default to
    /// `"unknown"` until set.
    pub fn new(title: &str, workflow: &str, provider: &str) -> Self {
        let lead = format!(
            "Results generated through the {} workflow provided by {}.",
            workflow, provider
        );
        Self {
            report: Report::new(title, &lead),
            workflow: workflow.to_string(),
            provider: provider.to_string(),
            revision: "unknown".to_string(),
            commit: "unknown".to_string(),
            about: true,
            tail_key: keys::auto_key(),
        }
    }

    /// Record the workflow revision and commit shown in the About section.
    pub fn with_versions(mut self, revision: &str, commit: &str) -> Self {
        self.revision = revision.to_string();
        self.commit = commit.to_string();
        self
    }

    /// Skip the trailing About section entirely.
    pub fn without_about(mut self) -> Self {
        self.about = false;
        self
    }

    pub fn report(&self) -> &Report {
        &self.report
    }

    pub fn report_mut(&mut self) -> &mut Report {
        &mut self.report
    }

    fn regenerate_tail(&mut self) -> Result<(), ReportError> {
        // Drop any About section left by a previous render before re-adding,
        // so repeated renders never accumulate copies.
        match self.report.remove_section(&self.tail_key) {
            Ok(()) | Err(ReportError::KeyNotFound(_)) => {}
            Err(err) => return Err(err),
        }
        if !self.about {
            return Ok(());
        }
        let text = format!(
            "### About\n\n\
             This report was produced by the {workflow} workflow from {provider}.\n\n\
             **Version details** *Revision*: {revision} *Commit*: {commit}\n\n\
             Generated on {date}.\n\n\
             ---",
            workflow = self.workflow,
            provider = self.provider,
            revision = self.revision,
            commit = self.commit,
            date = chrono::Local::now().format("%Y-%m-%d"),
        );
        self.report
            .add_section(Some(&self.tail_key))
            .markdown(&text, None)?;
        Ok(())
    }

    /// Regenerate the About section and render the document.
    pub fn render(&mut self) -> Result<String, ReportError> {
        self.regenerate_tail()?;
        self.report.render()
    }

    /// Regenerate the About section, render, and persist the document.
    pub fn write<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ReportError> {
        self.regenerate_tail()?;
        self.report.write(path)
    }
}

impl Deref for WorkflowReport {
    type Target = Report;

    fn deref(&self) -> &Report {
        &self.report
    }
}

impl DerefMut for WorkflowReport {
    fn deref_mut(&mut self) -> &mut Report {
        &mut self.report
    }
}
