//! Document compilation
//!
//! `compile` is a pure function of its inputs: no clock, no random ids and no
//! state carried between calls. Equal inputs produce byte-identical output, and
//! concurrent calls need no synchronization.

use crate::blocks::{escape, render_component};
use crate::schema::{Page, PageSize, Region, Template};
use crate::{CompilerConfig, Result};
use std::collections::BTreeSet;
use xml_tools::XmlNode;

const XSL_FO_NAMESPACE: &str = "http://www.w3.org/1999/XSL/Format";

/// Compile a template with the default configuration
pub fn compile(template: &Template, xml_payload: &str) -> Result<String> {
    Compiler::default().compile(template, xml_payload)
}

/// Template-to-document compiler
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    config: CompilerConfig,
}

impl Compiler {
    /// Create a compiler with the given configuration
    pub fn new(config: CompilerConfig) -> Self {
        Self { config }
    }

    /// Get the active configuration
    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    /// Compile a template and XML payload into an XSL-FO document
    ///
    /// # Errors
    /// - [`crate::TemplateError::Validation`] when the template breaks an invariant
    /// - [`crate::TemplateError::Xml`] when the payload is malformed or exceeds
    ///   the configured limits, or a binding path is not absolute
    pub fn compile(&self, template: &Template, xml_payload: &str) -> Result<String> {
        template.validate()?;
        for path in template.binding_paths() {
            xml_tools::path_segments(path)?;
        }

        let payload = xml_tools::parse_with_limits(xml_payload, &self.config.limits)?;

        let mut pages: Vec<&Page> = template.pages.iter().collect();
        pages.sort_by_key(|page| page.page_number);

        log::debug!(
            "compiling template '{}' v{}: {} page(s), {} byte payload",
            template.template_id,
            template.version,
            pages.len(),
            xml_payload.len()
        );

        let mut sequences = Vec::with_capacity(pages.len());
        for page in &pages {
            sequences.push(self.render_page(page, &payload)?);
        }

        let sizes: BTreeSet<PageSize> = pages.iter().map(|page| page.size).collect();
        Ok(self.wrap(&sizes, &sequences))
    }

    /// Render one page-sequence: header, body, footer
    fn render_page(&self, page: &Page, payload: &XmlNode) -> Result<String> {
        let mut flow = String::new();
        for (kind, region) in page.regions() {
            let markup = render_region(region, payload)?;
            log::trace!(
                "page {} {}: {} component(s)",
                page.page_number,
                kind.as_str(),
                region.components.len()
            );
            flow.push_str(&markup);
        }
        Ok(format!(
            r#"<fo:page-sequence master-reference="{}"><fo:flow flow-name="xsl-region-body">{}</fo:flow></fo:page-sequence>"#,
            page.size.master_name(),
            flow
        ))
    }

    /// Wrap page sequences in the document root and page geometry
    fn wrap(&self, sizes: &BTreeSet<PageSize>, sequences: &[String]) -> String {
        let margin = escape(&self.config.margin);
        let mut doc = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        doc.push_str(&format!("<fo:root xmlns:fo=\"{XSL_FO_NAMESPACE}\">\n"));
        doc.push_str("  <fo:layout-master-set>\n");
        for size in sizes {
            let (width, height) = size.dimensions_mm();
            doc.push_str(&format!(
                "    <fo:simple-page-master master-name=\"{}\" page-width=\"{width}mm\" page-height=\"{height}mm\" margin=\"{margin}\">\n",
                size.master_name()
            ));
            doc.push_str("      <fo:region-body />\n");
            doc.push_str("    </fo:simple-page-master>\n");
        }
        doc.push_str("  </fo:layout-master-set>\n");
        for sequence in sequences {
            doc.push_str("  ");
            doc.push_str(sequence);
            doc.push('\n');
        }
        doc.push_str("</fo:root>\n");
        doc
    }
}

/// Concatenate a region's fragments in stored order
fn render_region(region: &Region, payload: &XmlNode) -> Result<String> {
    let mut out = String::new();
    for component in &region.components {
        out.push_str(render_component(component, payload)?.as_str());
    }
    Ok(out)
}
