//! Text-bearing components: text, totals, payment, callout

use super::{bound_value, escape, pt, RenderBlock};
use crate::schema::{CalloutComponent, PaymentComponent, TextComponent, TotalsComponent};
use crate::Result;
use xml_tools::XmlNode;

impl TextComponent {
    /// Resolve the displayed value: static content first, then the binding
    pub fn value(&self, payload: &XmlNode) -> Result<String> {
        if let Some(content) = self.content.as_deref().filter(|c| !c.is_empty()) {
            return Ok(content.to_string());
        }
        match &self.binding {
            Some(binding) => bound_value(binding, payload),
            None => Ok(String::new()),
        }
    }
}

impl RenderBlock for TextComponent {
    fn render_content(&self, payload: &XmlNode) -> Result<String> {
        let value = self.value(payload)?;
        let style = &self.style;
        Ok(format!(
            r#"<fo:block font-family="{}" font-size="{}" font-weight="{}" color="{}" text-align="{}">{}</fo:block>"#,
            escape(&style.font_family),
            pt(style.font_size),
            style.font_weight.as_str(),
            escape(&style.color),
            style.align.as_str(),
            escape(&value)
        ))
    }
}

impl RenderBlock for TotalsComponent {
    fn render_content(&self, payload: &XmlNode) -> Result<String> {
        let amount = bound_value(&self.amount_binding, payload)?;
        Ok(format!(
            r#"<fo:block font-weight="bold">{}: {}</fo:block>"#,
            escape(&self.label),
            escape(&amount)
        ))
    }
}

impl RenderBlock for PaymentComponent {
    fn render_content(&self, payload: &XmlNode) -> Result<String> {
        let account = bound_value(&self.account_binding, payload)?;
        Ok(format!(
            "<fo:block>{} {}</fo:block>",
            escape(&self.instruction),
            escape(&account)
        ))
    }
}

impl RenderBlock for CalloutComponent {
    fn render_content(&self, _payload: &XmlNode) -> Result<String> {
        Ok(format!(
            r##"<fo:block border="1pt solid #000000" padding="4pt"><fo:block font-weight="bold">{}</fo:block><fo:block>{}</fo:block></fo:block>"##,
            escape(&self.title),
            escape(&self.body)
        ))
    }
}
