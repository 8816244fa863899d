//! Serde model of a design document.
//!
//! This is the JSON shape the [`Document`](crate::Document) loader accepts.
//! Only the fields rules read are typed; everything else in a style object
//! is kept verbatim so it can round-trip and be ignored by equivalence
//! checks.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Class discriminant of a node (`_class` in the document JSON).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Class {
    /// Top-level page.
    Page,
    /// Artboard on a page.
    Artboard,
    /// Layer group.
    Group,
    /// Text layer.
    Text,
    /// Boolean combination of shapes.
    ShapeGroup,
    /// Free-form vector path.
    ShapePath,
    /// Rectangle shape.
    Rectangle,
    /// Oval shape.
    Oval,
    /// Polygon shape.
    Polygon,
    /// Star shape.
    Star,
    /// Triangle shape.
    Triangle,
    /// Bitmap image layer.
    Bitmap,
    /// Symbol definition.
    SymbolMaster,
    /// Placed instance of a symbol.
    SymbolInstance,
    /// Export slice.
    Slice,
    /// Prototyping hotspot.
    Hotspot,
    /// Document-level shared style definition.
    SharedStyle,
    /// Any class this model does not know about.
    #[serde(other)]
    Other,
}

impl Class {
    /// Shape-like classes that carry a fill/border style.
    pub const SHAPES: &'static [Class] = &[
        Class::Rectangle,
        Class::Oval,
        Class::Polygon,
        Class::Star,
        Class::Triangle,
        Class::ShapePath,
        Class::ShapeGroup,
    ];

    /// Returns the `_class` string of this discriminant.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Artboard => "artboard",
            Self::Group => "group",
            Self::Text => "text",
            Self::ShapeGroup => "shapeGroup",
            Self::ShapePath => "shapePath",
            Self::Rectangle => "rectangle",
            Self::Oval => "oval",
            Self::Polygon => "polygon",
            Self::Star => "star",
            Self::Triangle => "triangle",
            Self::Bitmap => "bitmap",
            Self::SymbolMaster => "symbolMaster",
            Self::SymbolInstance => "symbolInstance",
            Self::Slice => "slice",
            Self::Hotspot => "hotspot",
            Self::SharedStyle => "sharedStyle",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for Class {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_true() -> bool {
    true
}

/// One entry of a style property list (a border, fill, shadow...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleEntry {
    /// Whether the entry is switched on.
    #[serde(default = "default_true")]
    pub is_enabled: bool,
    /// Remaining properties (color, thickness, offsets...).
    #[serde(flatten)]
    pub properties: BTreeMap<String, Value>,
}

impl StyleEntry {
    /// Creates an entry with no extra properties.
    #[must_use]
    pub fn new(is_enabled: bool) -> Self {
        Self {
            is_enabled,
            properties: BTreeMap::new(),
        }
    }

    /// Adds a property to this entry.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

/// A style object attached to a layer or a shared style.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    /// Border list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub borders: Option<Vec<StyleEntry>>,
    /// Border options (dash pattern, caps, joins).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_options: Option<Value>,
    /// Blur settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blur: Option<Value>,
    /// Fill list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fills: Option<Vec<StyleEntry>>,
    /// Drop shadow list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadows: Option<Vec<StyleEntry>>,
    /// Inner shadow list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_shadows: Option<Vec<StyleEntry>>,
    /// Text attributes (font, size, color).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_style: Option<Value>,
    /// Untracked fields such as `do_objectID` or context settings.
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

impl Style {
    /// Returns true when the blur is present and switched on.
    #[must_use]
    pub fn has_enabled_blur(&self) -> bool {
        self.blur
            .as_ref()
            .and_then(|blur| blur.get("isEnabled"))
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }
}

/// Layer frame in points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Horizontal position.
    #[serde(default)]
    pub x: f64,
    /// Vertical position.
    #[serde(default)]
    pub y: f64,
    /// Width, when recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Height, when recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

/// Reference to the image data of a bitmap layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRef {
    /// Path of the image inside the document bundle.
    #[serde(rename = "_ref", default)]
    pub reference: String,
    /// Width of the image in pixels, when recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pixel_width: Option<f64>,
    /// Height of the image in pixels, when recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pixel_height: Option<f64>,
}

/// Fields of a layer, excluding its children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    /// Class discriminant.
    #[serde(rename = "_class")]
    pub class: Class,
    /// Object identifier.
    #[serde(rename = "do_objectID", default)]
    pub object_id: String,
    /// Layer name as shown in the layer list.
    #[serde(default)]
    pub name: String,
    /// Whether the layer is visible.
    #[serde(default = "default_true")]
    pub is_visible: bool,
    /// Inline style, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
    /// Identifier of the shared style this layer is bound to.
    #[serde(
        rename = "sharedStyleID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub shared_style_id: Option<String>,
    /// Symbol identifier: declared by a symbol master, referenced by its
    /// instances.
    #[serde(rename = "symbolID", default, skip_serializing_if = "Option::is_none")]
    pub symbol_id: Option<String>,
    /// Frame of the layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame: Option<Rect>,
    /// Image data for bitmap layers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
}

/// A layer together with its children, as it appears in the document JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawLayer {
    /// Layer fields.
    #[serde(flatten)]
    pub layer: Layer,
    /// Child layers in stacking order.
    #[serde(default)]
    pub layers: Vec<RawLayer>,
}

/// A named, document-level style definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedStyle {
    /// Object identifier that layers reference via `sharedStyleID`.
    #[serde(rename = "do_objectID")]
    pub object_id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// The style definition.
    #[serde(default)]
    pub value: Style,
}

/// A shared style imported from a library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForeignStyle {
    /// Name of the library the style comes from.
    pub source_library_name: String,
    /// Identifier of the style inside the library.
    #[serde(rename = "remoteStyleID", default)]
    pub remote_style_id: String,
    /// Local copy of the library definition.
    pub local_shared_style: SharedStyle,
}

/// Root of the document JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentData {
    /// Pages with their layer trees.
    #[serde(default)]
    pub pages: Vec<RawLayer>,
    /// Shared layer styles.
    #[serde(default)]
    pub layer_styles: Vec<SharedStyle>,
    /// Shared text styles.
    #[serde(default)]
    pub layer_text_styles: Vec<SharedStyle>,
    /// Layer styles imported from libraries.
    #[serde(default)]
    pub foreign_layer_styles: Vec<ForeignStyle>,
    /// Text styles imported from libraries.
    #[serde(default)]
    pub foreign_text_styles: Vec<ForeignStyle>,
}
