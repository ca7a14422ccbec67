//! Top-level report assembly and document rendering.
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use maud::{html, Markup, PreEscaped, DOCTYPE};
use plotly::Plot;

use crate::error::ReportError;
use crate::keys;
use crate::resources::{PLOTLY_CDN, REPORT_CSS, TABLE_JS};
use crate::section::{AlertLevel, Item, ReportSection};
use crate::table::{DataTable, TableConfig};

/// Key of the section a report is created with. Item operations called on the
/// report itself target this section.
pub const MAIN_SECTION: &str = "main";

/// An ordered collection of named sections rendered into one HTML document.
///
/// A report always holds a `"main"` section, inserted first; item methods on
/// the report delegate to it. Further sections can be created with
/// [`Report::add_section`] and populated in any order; the document renders
/// sections in the order they were registered, and items within each section
/// in the order they were first added.
pub struct Report {
    title: String,
    lead: String,
    logo: Option<String>,
    sections: IndexMap<String, ReportSection>,
}

impl Report {
    /// Create an empty report with a title and a lead paragraph.
    pub fn new(title: &str, lead: &str) -> Self {
        Self::build(title, lead, ReportSection::new())
    }

    /// Create a report whose main section requires explicit item keys.
    pub fn with_required_keys(title: &str, lead: &str) -> Self {
        Self::build(title, lead, ReportSection::with_required_keys())
    }

    fn build(title: &str, lead: &str, main: ReportSection) -> Self {
        let mut sections = IndexMap::new();
        sections.insert(MAIN_SECTION.to_string(), main);
        Self {
            title: title.to_string(),
            lead: lead.to_string(),
            logo: None,
            sections,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn lead(&self) -> &str {
        &self.lead
    }

    /// Set a logo image (URL or data URI) shown in the report header.
    pub fn set_logo(&mut self, logo: &str) {
        self.logo = Some(logo.to_string());
    }

    /// Create a new section registered under `key` (auto-generated when
    /// `None`) and return it for population.
    pub fn add_section(&mut self, key: Option<&str>) -> &mut ReportSection {
        self.insert_section(key, ReportSection::new())
    }

    /// Register a caller-built section under `key` (auto-generated when
    /// `None`). Inserting under an existing key replaces that section in
    /// place, keeping its position.
    pub fn insert_section(
        &mut self,
        key: Option<&str>,
        section: ReportSection,
    ) -> &mut ReportSection {
        let key = key.map(str::to_string).unwrap_or_else(keys::auto_key);
        self.sections.insert(key.clone(), section);
        self.sections
            .get_mut(&key)
            .expect("section was just inserted")
    }

    /// Remove the section registered under `key`. The main section cannot be
    /// removed.
    pub fn remove_section(&mut self, key: &str) -> Result<(), ReportError> {
        if key == MAIN_SECTION {
            return Err(ReportError::InvalidArgument(
                "the main section cannot be removed".to_string(),
            ));
        }
        self.sections
            .shift_remove(key)
            .map(|_| ())
            .ok_or_else(|| ReportError::KeyNotFound(key.to_string()))
    }

    pub fn section(&self, key: &str) -> Option<&ReportSection> {
        self.sections.get(key)
    }

    pub fn section_mut(&mut self, key: &str) -> Option<&mut ReportSection> {
        self.sections.get_mut(key)
    }

    /// Section keys in insertion order.
    pub fn section_keys(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    fn main_mut(&mut self) -> &mut ReportSection {
        self.sections
            .get_mut(MAIN_SECTION)
            .expect("a report always holds its main section")
    }

    /// Main-section accessor, e.g. for introspection in tests.
    pub fn main(&self) -> &ReportSection {
        self.sections
            .get(MAIN_SECTION)
            .expect("a report always holds its main section")
    }

    // Item operations delegating to the main section.

    pub fn add_item(&mut self, item: Item, key: Option<&str>) -> Result<String, ReportError> {
        self.main_mut().add_item(item, key)
    }

    pub fn placeholder(&mut self, key: &str) {
        self.main_mut().placeholder(key);
    }

    pub fn markup(&mut self, content: Markup, key: Option<&str>) -> Result<(), ReportError> {
        self.main_mut().markup(content, key)
    }

    pub fn markdown(&mut self, text: &str, key: Option<&str>) -> Result<(), ReportError> {
        self.main_mut().markdown(text, key)
    }

    pub fn alert(
        &mut self,
        title: &str,
        text: &str,
        level: AlertLevel,
        key: Option<&str>,
    ) -> Result<(), ReportError> {
        self.main_mut().alert(title, text, level, key)
    }

    pub fn table(
        &mut self,
        table: &DataTable,
        config: &TableConfig,
        key: Option<&str>,
    ) -> Result<(), ReportError> {
        self.main_mut().table(table, config, key)
    }

    pub fn plot(&mut self, plot: Plot, key: Option<&str>) -> Result<(), ReportError> {
        self.main_mut().plot(plot, key)
    }

    pub fn remove(&mut self, key: &str) -> Result<(), ReportError> {
        self.main_mut().remove(key)
    }

    /// Render the complete HTML document.
    ///
    /// Walks sections in insertion order, resolves each section's items in
    /// insertion order, and substitutes the flattened fragments together with
    /// the title and lead into the document template. Does not mutate the
    /// report; a failed render leaves everything in place so the caller can
    /// fix the offending item and render again.
    pub fn render(&self) -> Result<String, ReportError> {
        let mut fragments = Vec::new();
        for (name, section) in &self.sections {
            log::debug!("rendering section `{}` ({} items)", name, section.len());
            fragments.extend(section.render_items()?);
        }
        let document = html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (self.title) }
                    script src=(PLOTLY_CDN) {}
                    style { (PreEscaped(REPORT_CSS)) }
                    script { (PreEscaped(TABLE_JS)) }
                }
                body {
                    header class="report-header" {
                        @if let Some(logo) = &self.logo {
                            img class="report-logo" src=(logo) alt="logo";
                        }
                        h1 { (self.title) }
                        @if !self.lead.is_empty() {
                            p class="lead" { (self.lead) }
                        }
                    }
                    main {
                        @for fragment in &fragments {
                            (PreEscaped(fragment))
                        }
                    }
                }
            }
        };
        Ok(document.into_string())
    }

    /// Render and persist the document. The document is rendered in full
    /// before any file is created, so a failed render never leaves a partial
    /// report on disk. I/O errors propagate to the caller unmodified.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<(), ReportError> {
        let document = self.render()?;
        fs::write(&path, document)?;
        log::info!("wrote report to {}", path.as_ref().display());
        Ok(())
    }
}
