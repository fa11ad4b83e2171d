//! `manifest/package.xml` generation.
//!
//! Only runs when the plan asks for a manifest. The document lists the metadata
//! types the template declares, each with a wildcard member, followed by the
//! API version stamp. A template that declares no types still gets the
//! `<Package>` wrapper and `<version>`.

use serde_json::json;

use crate::error::Result;
use crate::plan::GenerationPlan;
use crate::templates::embedded;
use crate::templates::renderer::TemplateRenderer;

pub const MANIFEST_FILE: &str = "manifest/package.xml";

/// Render the manifest document for a plan.
pub fn render(plan: &GenerationPlan) -> Result<String> {
    let data = json!({
        "types": plan.descriptor.manifest_types,
        "apiVersion": plan.api_version.to_string(),
    });
    TemplateRenderer::xml().render(embedded::PACKAGE_XML, &data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{resolve, CreateOptions};

    fn manifest_for(template: &str) -> String {
        let opts = CreateOptions {
            template: Some(template.into()),
            manifest: true,
            ..CreateOptions::new("demo")
        };
        render(&resolve(&opts).unwrap()).unwrap()
    }

    fn assert_well_formed(xml: &str) {
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<Package xmlns=\"http://soap.sforce.com/2006/04/metadata\">"));
        assert!(xml.trim_end().ends_with("</Package>"));
        assert_eq!(xml.matches("<types>").count(), xml.matches("</types>").count());
        assert_eq!(xml.matches("<name>").count(), xml.matches("</name>").count());
        assert_eq!(xml.matches("<members>").count(), xml.matches("</members>").count());
    }

    #[test]
    fn test_analytics_lists_wave_template_bundle() {
        let xml = manifest_for("analytics");
        assert_well_formed(&xml);
        assert!(xml.contains("<name>WaveTemplateBundle</name>"));
        assert!(xml.contains("<name>ApexClass</name>"));
        assert!(xml.contains("<members>*</members>"));
    }

    #[test]
    fn test_standard_lists_declared_types() {
        let xml = manifest_for("standard");
        assert_well_formed(&xml);
        assert_eq!(xml.matches("<types>").count(), 9);
        assert!(xml.contains("<name>LightningComponentBundle</name>"));
        assert!(!xml.contains("WaveTemplateBundle"));
        assert!(xml.contains("<version>58.0</version>"));
    }

    #[test]
    fn test_empty_template_has_only_wrapper() {
        let xml = manifest_for("empty");
        assert_well_formed(&xml);
        assert!(!xml.contains("<types>"));
        assert!(xml.contains("<version>58.0</version>"));
    }
}
