//! Element finder orchestration
//!
//! Loads both documents, locates the target element, runs the similarity
//! cascade and the visibility filter, and reports the survivors.

use std::path::Path;

use twin_dom::{Document, NodeId};
use twin_html::LoadError;
use twin_match::{describe_element, element_path, filter_hidden, similar_elements};

use crate::report::Report;

/// Fatal run errors
#[derive(Debug, thiserror::Error)]
pub enum FindError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("could not find target element [{id}] in [{path}]")]
    TargetNotFound { id: String, path: String },
}

/// Finds elements similar to a target element and reports them
pub struct ElementFinder<R: Report> {
    report: R,
}

impl<R: Report> ElementFinder<R> {
    pub fn new(report: R) -> Self {
        Self { report }
    }

    /// Run one (original, changed, target id) triple to completion.
    ///
    /// The target is resolved before the changed document is read, so a
    /// missing target id fails without touching the changed file.
    pub fn find_and_report(
        &mut self,
        original: &Path,
        changed: &Path,
        target_id: &str,
    ) -> Result<(), FindError> {
        let original_doc = twin_html::load(original)?;
        let target = original_doc.get_element_by_id(target_id).ok_or_else(|| {
            FindError::TargetNotFound {
                id: target_id.to_string(),
                path: original.display().to_string(),
            }
        })?;

        let changed_doc = twin_html::load(changed)?;

        let resolution = similar_elements(&original_doc, target, &changed_doc);
        let shown = filter_hidden(&changed_doc, &resolution.elements);

        if shown.is_empty() {
            self.report.warn("No similar elements found.");
        } else {
            self.report_matches(&changed_doc, &shown);
        }
        Ok(())
    }

    fn report_matches(&mut self, doc: &Document, elements: &[NodeId]) {
        self.report
            .info(&format!("Found [{}] similar element(s):", elements.len()));
        for &element in elements {
            self.report.info(&format!(
                "elementDesc = {}; elementPath = {}",
                describe_element(doc, element),
                element_path(doc, element),
            ));
        }
    }
}
