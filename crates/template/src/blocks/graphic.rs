//! Non-text components: image, divider

use super::{escape, pt, RenderBlock};
use crate::schema::{DividerComponent, ImageComponent};
use crate::Result;
use xml_tools::XmlNode;

impl RenderBlock for ImageComponent {
    /// References the asset by id; resolution happens in the rendering engine
    fn render_content(&self, _payload: &XmlNode) -> Result<String> {
        let role = if self.description.is_empty() {
            String::new()
        } else {
            format!(r#" role="{}""#, escape(&self.description))
        };
        Ok(format!(
            r#"<fo:external-graphic src="url('asset:{}')" content-width="{}" content-height="{}"{}/>"#,
            escape(&self.asset_id),
            pt(self.position.width),
            pt(self.position.height),
            role
        ))
    }
}

impl RenderBlock for DividerComponent {
    fn render_content(&self, _payload: &XmlNode) -> Result<String> {
        Ok(format!(
            r#"<fo:block border-bottom="{} solid {}"/>"#,
            pt(self.stroke_width),
            escape(&self.color)
        ))
    }
}
