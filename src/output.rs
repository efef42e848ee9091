//! Structured JSON output for the search-provider consumer.
//!
//! This module provides the serializable structures that form the
//! program's entire stdout contract: a single JSON document that is
//! either a success object carrying the discovered project records or an
//! error object describing why discovery failed. All human-readable
//! diagnostics go to stderr so stdout stays machine-parseable.

use serde::Serialize;

use crate::product::{Product, ProjectRecord};

/// Top-level JSON document emitted on stdout.
///
/// Serializes with a `kind` discriminator field, so consumers can branch
/// on `"success"` versus `"error"` before looking at anything else.
#[derive(Serialize, Debug)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiscoveryOutput {
    /// Discovery completed; `projects` holds all surviving records.
    Success {
        /// Discovered project records across all selected products
        projects: Vec<ProjectRecord>,
    },

    /// Discovery failed or a required prerequisite was missing.
    Error {
        /// Human-readable description of the failure
        message: String,

        /// Full error chain, present for unexpected failures only
        #[serde(skip_serializing_if = "Option::is_none")]
        traceback: Option<String>,
    },
}

impl DiscoveryOutput {
    /// Build a success document from discovered records.
    #[must_use]
    pub const fn success(projects: Vec<ProjectRecord>) -> Self {
        Self::Success { projects }
    }

    /// Build the error document for a product without any configuration
    /// directory.
    ///
    /// This is the single-product outcome for an IDE that simply is not
    /// installed; it is reported as a domain error but does not fail the
    /// process.
    #[must_use]
    pub fn missing_configuration(product: Product) -> Self {
        Self::Error {
            message: format!("No configuration directory found for {product}"),
            traceback: None,
        }
    }

    /// Build the error document for a fatal discovery failure.
    ///
    /// `message` carries the outermost context; `traceback` the full error
    /// chain for debugging.
    #[must_use]
    pub fn fatal(error: &anyhow::Error) -> Self {
        Self::Error {
            message: error.to_string(),
            traceback: Some(format!("{error:?}")),
        }
    }

    /// Serialize this document to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error when serialization fails.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::path::Path;

    #[test]
    fn test_success_document_shape() {
        let record = ProjectRecord::new(
            Product::IntelliJIdea,
            Path::new("~/src/app"),
            Path::new("/home/user/src/app"),
            "app".to_string(),
        );
        let output = DiscoveryOutput::success(vec![record]);

        let json: serde_json::Value =
            serde_json::from_str(&output.to_json(false).unwrap()).unwrap();

        assert_eq!(json["kind"], "success");
        assert_eq!(json["projects"].as_array().unwrap().len(), 1);
        assert_eq!(json["projects"][0]["id"], "idea-/home/user/src/app");
    }

    #[test]
    fn test_empty_success_document() {
        let json: serde_json::Value = serde_json::from_str(
            &DiscoveryOutput::success(Vec::new()).to_json(false).unwrap(),
        )
        .unwrap();

        assert_eq!(json["kind"], "success");
        assert_eq!(json["projects"], serde_json::json!([]));
    }

    #[test]
    fn test_missing_configuration_document_has_no_traceback() {
        let output = DiscoveryOutput::missing_configuration(Product::Rider);
        let json: serde_json::Value =
            serde_json::from_str(&output.to_json(false).unwrap()).unwrap();

        assert_eq!(json["kind"], "error");
        assert_eq!(json["message"], "No configuration directory found for Rider");
        assert!(json.get("traceback").is_none());
    }

    #[test]
    fn test_fatal_document_carries_error_chain() {
        let error = anyhow!("root cause").context("outer context");
        let output = DiscoveryOutput::fatal(&error);
        let json: serde_json::Value =
            serde_json::from_str(&output.to_json(false).unwrap()).unwrap();

        assert_eq!(json["kind"], "error");
        assert_eq!(json["message"], "outer context");
        let traceback = json["traceback"].as_str().unwrap();
        assert!(traceback.contains("root cause"));
    }

    #[test]
    fn test_pretty_output_is_multiline() {
        let output = DiscoveryOutput::success(Vec::new());

        assert!(!output.to_json(false).unwrap().contains('\n'));
        assert!(output.to_json(true).unwrap().contains('\n'));
    }
}
