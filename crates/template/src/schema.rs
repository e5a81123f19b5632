//! Template JSON schema types

use serde::{Deserialize, Serialize};

/// Embedded JSON Schema for template validation
/// This schema can be used by IDEs and the visual editor for template authoring
pub const TEMPLATE_SCHEMA: &str = include_str!("../data/template-schema.json");

/// Schema version accepted by this crate
pub const SCHEMA_VERSION: &str = "1.0";

/// Root template structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    /// Schema version (always "1.0")
    pub schema_version: String,

    /// Owning tenant
    pub tenant_id: String,

    /// Template identifier, stable across versions
    pub template_id: String,

    /// Display name
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Lifecycle status
    pub status: TemplateStatus,

    /// Version number (1-based, bumped on every mutation by the template store)
    pub version: u32,

    /// Pages, in any order; rendered by ascending page number
    pub pages: Vec<Page>,

    pub created_by: String,

    pub updated_by: String,
}

impl Template {
    /// Starting template for the visual editor: one A4 page with empty regions
    pub fn example() -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            tenant_id: "tenant-demo".to_string(),
            template_id: "template-demo".to_string(),
            name: "Statement".to_string(),
            description: "Example statement template".to_string(),
            status: TemplateStatus::Draft,
            version: 1,
            pages: vec![Page::new("page-1", 1)],
            created_by: "designer".to_string(),
            updated_by: "designer".to_string(),
        }
    }

    /// Iterate every component in page, region and stored order
    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.pages.iter().flat_map(|page| {
            page.regions()
                .into_iter()
                .flat_map(|(_, region)| region.components.iter())
        })
    }

    /// Every binding path referenced by the template, in page, region and component order
    pub fn binding_paths(&self) -> Vec<&str> {
        self.components()
            .flat_map(Component::bindings)
            .map(|binding| binding.path.as_str())
            .collect()
    }
}

/// Template lifecycle status
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TemplateStatus {
    #[default]
    Draft,
    Published,
}

/// Page size
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum PageSize {
    #[default]
    A4,
}

impl PageSize {
    /// Name used for the page master in the compiled document
    pub fn master_name(self) -> &'static str {
        match self {
            PageSize::A4 => "A4",
        }
    }

    /// Width and height in millimetres
    pub fn dimensions_mm(self) -> (u32, u32) {
        match self {
            PageSize::A4 => (210, 297),
        }
    }
}

/// A single page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: String,

    /// Page number (1-based, unique per template)
    pub page_number: u32,

    #[serde(default)]
    pub size: PageSize,

    pub header: Region,

    pub body: Region,

    pub footer: Region,
}

impl Page {
    /// Create an A4 page with empty regions
    pub fn new(id: &str, page_number: u32) -> Self {
        Self {
            id: id.to_string(),
            page_number,
            size: PageSize::A4,
            header: Region::default(),
            body: Region::default(),
            footer: Region::default(),
        }
    }

    /// Regions in rendering order: header, body, footer
    pub fn regions(&self) -> [(RegionKind, &Region); 3] {
        [
            (RegionKind::Header, &self.header),
            (RegionKind::Body, &self.body),
            (RegionKind::Footer, &self.footer),
        ]
    }
}

/// Region identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    Header,
    Body,
    Footer,
}

impl RegionKind {
    /// Field name of the region in template JSON
    pub fn as_str(self) -> &'static str {
        match self {
            RegionKind::Header => "header",
            RegionKind::Body => "body",
            RegionKind::Footer => "footer",
        }
    }
}

/// Ordered list of components; order is rendering (stacking) order
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Region {
    #[serde(default)]
    pub components: Vec<Component>,
}

/// Bounding box in points
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Position {
    /// X coordinate in points
    pub x: f64,

    /// Y coordinate in points (from top)
    pub y: f64,

    pub width: f64,

    pub height: f64,
}

/// Data binding into the XML payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Binding {
    /// Absolute path, e.g. `/Case/Account/Name`
    pub path: String,

    /// Literal used when the path resolves to nothing
    #[serde(default)]
    pub fallback: String,
}

impl Binding {
    pub fn new(path: &str, fallback: &str) -> Self {
        Self {
            path: path.to_string(),
            fallback: fallback.to_string(),
        }
    }
}

fn default_font_family() -> String {
    "Helvetica".to_string()
}

fn default_font_size() -> f64 {
    10.0
}

fn default_color() -> String {
    "#000000".to_string()
}

/// Text styling
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font size in points
    #[serde(default = "default_font_size")]
    pub font_size: f64,

    #[serde(default)]
    pub font_weight: FontWeight,

    /// `#RRGGBB`
    #[serde(default = "default_color")]
    pub color: String,

    #[serde(default)]
    pub align: Align,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
            font_size: default_font_size(),
            font_weight: FontWeight::default(),
            color: default_color(),
            align: Align::default(),
        }
    }
}

/// Font weight
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    pub fn as_str(self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        }
    }
}

/// Text alignment
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    pub fn as_str(self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }
}

/// Positioned content unit (tagged union)
///
/// Component types this crate does not know yet deserialize into
/// [`Component::Unknown`] and render nothing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Component {
    Text(TextComponent),
    Image(ImageComponent),
    Divider(DividerComponent),
    Table(TableComponent),
    Totals(TotalsComponent),
    Payment(PaymentComponent),
    Callout(CalloutComponent),

    #[serde(untagged)]
    Unknown(UnknownComponent),
}

/// Discriminants of the component variants this crate renders
pub const COMPONENT_TYPES: [&str; 7] = [
    "text", "image", "divider", "table", "totals", "payment", "callout",
];

/// Text component
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextComponent {
    pub id: String,

    pub position: Position,

    /// Static text (takes precedence over `binding`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binding: Option<Binding>,

    pub style: TextStyle,
}

/// Image component referencing an external asset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImageComponent {
    pub id: String,

    pub position: Position,

    pub asset_id: String,

    /// Alternative text
    #[serde(default)]
    pub description: String,
}

fn default_stroke_width() -> f64 {
    1.0
}

/// Horizontal rule
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DividerComponent {
    pub id: String,

    pub position: Position,

    /// Stroke width in points
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,

    #[serde(default = "default_color")]
    pub color: String,
}

/// Repeating table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TableComponent {
    pub id: String,

    pub position: Position,

    /// Path to the repeated row element
    pub row_binding: Binding,

    /// Column definitions, in display order
    pub columns: Vec<TableColumn>,
}

/// Table column definition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableColumn {
    pub id: String,

    pub header: String,

    /// Column width in points
    pub width: f64,

    /// Cell value; paths below the row path are resolved per row
    pub binding: Binding,
}

fn default_totals_label() -> String {
    "Total".to_string()
}

/// Labelled amount
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TotalsComponent {
    pub id: String,

    pub position: Position,

    #[serde(default = "default_totals_label")]
    pub label: String,

    pub amount_binding: Binding,
}

/// Payment instruction with bound account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentComponent {
    pub id: String,

    pub position: Position,

    pub instruction: String,

    pub account_binding: Binding,
}

/// Boxed title and body text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalloutComponent {
    pub id: String,

    pub position: Position,

    pub title: String,

    pub body: String,
}

/// Component of a type introduced after this crate was built
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UnknownComponent {
    /// Unrecognised discriminant
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub id: String,

    /// Remaining fields, kept so the component survives a round trip
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl Component {
    /// Get the component ID
    pub fn id(&self) -> &str {
        match self {
            Component::Text(c) => &c.id,
            Component::Image(c) => &c.id,
            Component::Divider(c) => &c.id,
            Component::Table(c) => &c.id,
            Component::Totals(c) => &c.id,
            Component::Payment(c) => &c.id,
            Component::Callout(c) => &c.id,
            Component::Unknown(c) => &c.id,
        }
    }

    /// Get the type discriminant
    pub fn kind(&self) -> &str {
        match self {
            Component::Text(_) => "text",
            Component::Image(_) => "image",
            Component::Divider(_) => "divider",
            Component::Table(_) => "table",
            Component::Totals(_) => "totals",
            Component::Payment(_) => "payment",
            Component::Callout(_) => "callout",
            Component::Unknown(c) => &c.kind,
        }
    }

    /// Get the bounding box (unknown components have none)
    pub fn position(&self) -> Option<Position> {
        match self {
            Component::Text(c) => Some(c.position),
            Component::Image(c) => Some(c.position),
            Component::Divider(c) => Some(c.position),
            Component::Table(c) => Some(c.position),
            Component::Totals(c) => Some(c.position),
            Component::Payment(c) => Some(c.position),
            Component::Callout(c) => Some(c.position),
            Component::Unknown(_) => None,
        }
    }

    /// Data bindings used by the component
    pub fn bindings(&self) -> Vec<&Binding> {
        match self {
            Component::Text(c) => c.binding.iter().collect(),
            Component::Table(c) => std::iter::once(&c.row_binding)
                .chain(c.columns.iter().map(|col| &col.binding))
                .collect(),
            Component::Totals(c) => vec![&c.amount_binding],
            Component::Payment(c) => vec![&c.account_binding],
            Component::Image(_)
            | Component::Divider(_)
            | Component::Callout(_)
            | Component::Unknown(_) => Vec::new(),
        }
    }
}
