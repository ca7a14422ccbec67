//! Ordered, keyed collections of report content.
use indexmap::IndexMap;
use maud::{html, Markup};
use plotly::Plot;
use pulldown_cmark::{html as md_html, Options, Parser};

use crate::error::ReportError;
use crate::keys;
use crate::table::{DataTable, TableConfig};

/// One placeable unit of report content.
pub enum Item {
    /// Already-rendered HTML markup (markdown output, alerts, raw content).
    Markup(String),
    /// A table resolved to its markup and init script when it was added.
    Table(String),
    /// A chart object, resolved through the plot engine at render time.
    Plot {
        plot: Plot,
        /// Element id for the embedded chart, fixed when the item is added so
        /// that repeated renders produce identical output.
        div_id: String,
    },
    /// A reserved slot with no value yet; must be filled before rendering.
    Placeholder,
}

/// Severity levels for [`ReportSection::alert`] callouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Danger,
    Warning,
    Success,
    Info,
}

impl AlertLevel {
    fn css_class(&self) -> &'static str {
        match self {
            AlertLevel::Danger => "danger",
            AlertLevel::Warning => "warning",
            AlertLevel::Success => "success",
            AlertLevel::Info => "info",
        }
    }
}

/// An ordered, keyed collection of report items.
///
/// Insertion order is render order. Adding under an existing key replaces the
/// item in place without moving it, so a section can be laid out first and
/// filled in as results arrive.
#[derive(Default)]
pub struct ReportSection {
    items: IndexMap<String, Item>,
    require_keys: bool,
}

impl ReportSection {
    /// Create an empty section with auto-generated keys allowed.
    pub fn new() -> Self {
        Self {
            items: IndexMap::new(),
            require_keys: false,
        }
    }

    /// Create an empty section in which every add must supply an explicit key.
    pub fn with_required_keys() -> Self {
        Self {
            items: IndexMap::new(),
            require_keys: true,
        }
    }

    /// Whether this section insists on explicit keys.
    pub fn requires_keys(&self) -> bool {
        self.require_keys
    }

    /// Insert an item under `key`, or under a fresh auto key when `key` is
    /// `None`. Returns the key the item was stored under.
    pub fn add_item(&mut self, item: Item, key: Option<&str>) -> Result<String, ReportError> {
        let key = match key {
            Some(key) => key.to_string(),
            None => {
                if self.require_keys {
                    return Err(ReportError::MissingKey);
                }
                keys::auto_key()
            }
        };
        // IndexMap keeps the original position when the key already exists,
        // which is exactly the replacement-in-place contract.
        self.items.insert(key.clone(), item);
        Ok(key)
    }

    /// Reserve a keyed slot to be filled in later by re-adding under `key`.
    pub fn placeholder(&mut self, key: &str) {
        self.items.insert(key.to_string(), Item::Placeholder);
    }

    /// Add an already-rendered block of markup.
    pub fn markup(&mut self, content: Markup, key: Option<&str>) -> Result<(), ReportError> {
        self.add_item(Item::Markup(content.into_string()), key)?;
        Ok(())
    }

    /// Add markdown-formatted text.
    ///
    /// The text is dedented before conversion, so triple-quoted strings
    /// indented to match code indentation render correctly. Empty text
    /// contributes nothing, not even an empty item.
    pub fn markdown(&mut self, text: &str, key: Option<&str>) -> Result<(), ReportError> {
        if text.is_empty() {
            log::debug!("skipping empty markdown item");
            return Ok(());
        }
        let text = dedent(text);
        let mut converted = String::new();
        let parser = Parser::new_ext(
            &text,
            Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH,
        );
        md_html::push_html(&mut converted, parser);
        self.add_item(Item::Markup(converted), key)?;
        Ok(())
    }

    /// Add an alert callout with a title, body text and severity level.
    ///
    /// Empty text contributes nothing, matching [`ReportSection::markdown`].
    pub fn alert(
        &mut self,
        title: &str,
        text: &str,
        level: AlertLevel,
        key: Option<&str>,
    ) -> Result<(), ReportError> {
        if text.is_empty() {
            log::debug!("skipping empty alert item");
            return Ok(());
        }
        let markup = html! {
            div class={ "alert alert-" (level.css_class()) } {
                p { strong { (title) } }
                (text)
            }
        };
        self.add_item(Item::Markup(markup.into_string()), key)?;
        Ok(())
    }

    /// Add a data table rendered with the given display options.
    pub fn table(
        &mut self,
        table: &DataTable,
        config: &TableConfig,
        key: Option<&str>,
    ) -> Result<(), ReportError> {
        let markup = table.to_markup(config);
        self.add_item(Item::Table(markup.into_string()), key)?;
        Ok(())
    }

    /// Add an already-constructed chart.
    pub fn plot(&mut self, plot: Plot, key: Option<&str>) -> Result<(), ReportError> {
        let div_id = keys::element_id("plot");
        self.add_item(Item::Plot { plot, div_id }, key)?;
        Ok(())
    }

    /// Remove the item stored under `key`.
    ///
    /// The position is removed entirely; remaining items keep their relative
    /// order and their keys.
    pub fn remove(&mut self, key: &str) -> Result<(), ReportError> {
        self.items
            .shift_remove(key)
            .map(|_| ())
            .ok_or_else(|| ReportError::KeyNotFound(key.to_string()))
    }

    /// Number of items currently held, placeholders included.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    /// Item keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Item> {
        self.items.get(key)
    }

    /// Resolve every item to final markup, in insertion order.
    ///
    /// Fails on the first unfilled placeholder; a report is never silently
    /// emitted with missing content.
    pub fn render_items(&self) -> Result<Vec<String>, ReportError> {
        let mut fragments = Vec::with_capacity(self.items.len());
        for (key, item) in &self.items {
            match item {
                Item::Markup(markup) | Item::Table(markup) => fragments.push(markup.clone()),
                Item::Plot { plot, div_id } => {
                    fragments.push(plot.to_inline_html(Some(div_id.as_str())));
                }
                Item::Placeholder => {
                    return Err(ReportError::UnresolvedPlaceholder(key.clone()));
                }
            }
        }
        Ok(fragments)
    }
}

/// Strip the longest common leading-whitespace prefix from every line.
///
/// The margin is the literal prefix string shared by all non-blank lines, so
/// a tab and a run of spaces never count as interchangeable indentation.
/// Whitespace-only lines are ignored when determining the margin.
fn dedent(text: &str) -> String {
    let mut margin: Option<&str> = None;
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let indent = &line[..line.len() - line.trim_start().len()];
        margin = Some(match margin {
            None => indent,
            Some(current) => common_prefix(current, indent),
        });
    }
    let margin = margin.unwrap_or("");
    if margin.is_empty() {
        return text.to_string();
    }
    text.lines()
        .map(|line| line.strip_prefix(margin).unwrap_or_else(|| line.trim_start()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let mut end = 0;
    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca != cb {
            break;
        }
        end += ca.len_utf8();
    }
    &a[..end]
}

#[cfg(test)]
mod tests {
    use super::dedent;

    #[test]
    fn dedent_strips_common_margin() {
        let text = "    ### Title\n\n    body text\n";
        assert_eq!(dedent(text), "### Title\n\nbody text");
    }

    #[test]
    fn dedent_leaves_flush_text_alone() {
        assert_eq!(dedent("a\n  b"), "a\n  b");
    }

    #[test]
    fn dedent_handles_multibyte_whitespace() {
        // Ideographic space is wider than one byte; the margin must be
        // tracked as a prefix string, not a byte count.
        assert_eq!(dedent("  x\n\u{3000}y"), "  x\n\u{3000}y");
        assert_eq!(dedent("\u{3000}x\n\u{3000}y"), "x\ny");
    }

    #[test]
    fn dedent_does_not_mix_tabs_and_spaces() {
        // A tab and four spaces share no common prefix, so nothing is
        // stripped from either line.
        assert_eq!(dedent("\ta\n    b"), "\ta\n    b");
        assert_eq!(dedent("\t  a\n\tb"), "  a\nb");
    }
}
