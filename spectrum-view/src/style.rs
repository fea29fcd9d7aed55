use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use yew::prelude::*;

use crate::error::ViewError;
use crate::props::ViewProps;

static TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(static-)?size-[a-z0-9-]+$").expect("token pattern is valid")
});

/// Characters that would end a declaration or open a block inside `style`.
const DECLARATION_BREAKERS: &[char] = &[';', '{', '}', '<', '>', '"', '\\'];

/// Returns `true` when `value` can sit on the right of a single declaration.
#[must_use]
pub fn is_safe_css_value(value: &str) -> bool {
    !value.trim().is_empty()
        && !value
            .chars()
            .any(|c| c.is_control() || DECLARATION_BREAKERS.contains(&c))
}

/// A length accepted by the layout style options.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "DimensionRepr")]
pub enum Dimension {
    /// Plain pixel count.
    Px(f64),
    /// Design token such as `size-100` or `static-size-50`.
    Token(String),
    /// Any other CSS value, passed through verbatim.
    Css(String),
}

impl Dimension {
    /// CSS value for this dimension.
    #[must_use]
    pub fn css_value(&self) -> String {
        match self {
            Self::Px(px) => format!("{px}px"),
            Self::Token(token) => {
                format!("var(--spectrum-global-dimension-{token}, var(--spectrum-alias-{token}))")
            }
            Self::Css(value) => value.clone(),
        }
    }
}

impl FromStr for Dimension {
    type Err = ViewError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = raw.trim();
        if let Ok(px) = value.parse::<f64>() {
            if px.is_finite() {
                return Ok(Self::Px(px));
            }
        }
        if !is_safe_css_value(value) {
            return Err(ViewError::InvalidDimension(raw.to_string()));
        }
        if TOKEN.is_match(value) {
            return Ok(Self::Token(value.to_string()));
        }
        Ok(Self::Css(value.to_string()))
    }
}

impl From<f64> for Dimension {
    fn from(px: f64) -> Self {
        Self::Px(px)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css_value())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DimensionRepr {
    Number(f64),
    Text(String),
}

impl TryFrom<DimensionRepr> for Dimension {
    type Error = ViewError;

    fn try_from(repr: DimensionRepr) -> Result<Self, Self::Error> {
        match repr {
            DimensionRepr::Number(px) => Ok(Self::Px(px)),
            DimensionRepr::Text(text) => text.parse(),
        }
    }
}

/// Layout direction used to resolve logical `start`/`end` sides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    const fn start(self) -> &'static str {
        match self {
            Self::Ltr => "left",
            Self::Rtl => "right",
        }
    }

    const fn end(self) -> &'static str {
        match self {
            Self::Ltr => "right",
            Self::Rtl => "left",
        }
    }

    const fn margin_start(self) -> &'static str {
        match self {
            Self::Ltr => "margin-left",
            Self::Rtl => "margin-right",
        }
    }

    const fn margin_end(self) -> &'static str {
        match self {
            Self::Ltr => "margin-right",
            Self::Rtl => "margin-left",
        }
    }
}

/// Layout style options shared by every slotted container.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleProps {
    pub margin: Option<Dimension>,
    pub margin_top: Option<Dimension>,
    pub margin_bottom: Option<Dimension>,
    pub margin_start: Option<Dimension>,
    pub margin_end: Option<Dimension>,
    pub margin_x: Option<Dimension>,
    pub margin_y: Option<Dimension>,
    pub width: Option<Dimension>,
    pub min_width: Option<Dimension>,
    pub max_width: Option<Dimension>,
    pub height: Option<Dimension>,
    pub min_height: Option<Dimension>,
    pub max_height: Option<Dimension>,
    pub flex: Option<String>,
    pub flex_grow: Option<f64>,
    pub flex_shrink: Option<f64>,
    pub flex_basis: Option<Dimension>,
    pub justify_self: Option<String>,
    pub align_self: Option<String>,
    pub order: Option<i32>,
    pub grid_area: Option<String>,
    pub grid_column: Option<String>,
    pub grid_row: Option<String>,
    pub grid_column_start: Option<String>,
    pub grid_column_end: Option<String>,
    pub grid_row_start: Option<String>,
    pub grid_row_end: Option<String>,
    pub position: Option<String>,
    pub z_index: Option<i32>,
    pub top: Option<Dimension>,
    pub bottom: Option<Dimension>,
    pub start: Option<Dimension>,
    pub end: Option<Dimension>,
    pub left: Option<Dimension>,
    pub right: Option<Dimension>,
}

macro_rules! overlay_fields {
    ($base:expr, $top:expr; $($field:ident),+ $(,)?) => {
        StyleProps {
            $($field: $top.$field.clone().or_else(|| $base.$field.clone()),)+
        }
    };
}

impl StyleProps {
    /// Field-by-field overlay; any option set on `top` wins.
    #[must_use]
    pub fn overlay(&self, top: &Self) -> Self {
        overlay_fields!(self, top;
            margin, margin_top, margin_bottom, margin_start, margin_end, margin_x, margin_y,
            width, min_width, max_width, height, min_height, max_height,
            flex, flex_grow, flex_shrink, flex_basis, justify_self, align_self, order,
            grid_area, grid_column, grid_row, grid_column_start, grid_column_end,
            grid_row_start, grid_row_end, position, z_index,
            top, bottom, start, end, left, right,
        )
    }

    /// Reject free-text values that would break out of their declaration.
    ///
    /// # Errors
    /// Returns [`ViewError::InvalidStyleValue`] for the first offending field.
    pub fn validate(&self) -> Result<(), ViewError> {
        let fields = [
            ("flex", &self.flex),
            ("justify-self", &self.justify_self),
            ("align-self", &self.align_self),
            ("grid-area", &self.grid_area),
            ("grid-column", &self.grid_column),
            ("grid-row", &self.grid_row),
            ("grid-column-start", &self.grid_column_start),
            ("grid-column-end", &self.grid_column_end),
            ("grid-row-start", &self.grid_row_start),
            ("grid-row-end", &self.grid_row_end),
            ("position", &self.position),
        ];
        for (property, value) in fields {
            if let Some(value) = value.as_deref().filter(|value| !is_safe_css_value(value)) {
                return Err(ViewError::InvalidStyleValue {
                    property,
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }

    /// CSS declarations in a fixed property order.
    ///
    /// Free-text values that fail [`StyleProps::validate`] are skipped.
    #[must_use]
    pub fn declarations(&self, direction: Direction) -> Vec<(&'static str, String)> {
        let mut out = Declarations::default();
        out.dim("margin", self.margin.as_ref());
        out.dim("margin-top", self.margin_top.as_ref());
        out.dim("margin-bottom", self.margin_bottom.as_ref());
        out.dim(direction.margin_start(), self.margin_start.as_ref());
        out.dim(direction.margin_end(), self.margin_end.as_ref());
        out.dim("margin-left", self.margin_x.as_ref());
        out.dim("margin-right", self.margin_x.as_ref());
        out.dim("margin-top", self.margin_y.as_ref());
        out.dim("margin-bottom", self.margin_y.as_ref());
        out.dim("width", self.width.as_ref());
        out.dim("min-width", self.min_width.as_ref());
        out.dim("max-width", self.max_width.as_ref());
        out.dim("height", self.height.as_ref());
        out.dim("min-height", self.min_height.as_ref());
        out.dim("max-height", self.max_height.as_ref());
        out.text("flex", self.flex.as_deref());
        out.display("flex-grow", self.flex_grow);
        out.display("flex-shrink", self.flex_shrink);
        out.dim("flex-basis", self.flex_basis.as_ref());
        out.text("justify-self", self.justify_self.as_deref());
        out.text("align-self", self.align_self.as_deref());
        out.display("order", self.order);
        out.text("grid-area", self.grid_area.as_deref());
        out.text("grid-column", self.grid_column.as_deref());
        out.text("grid-row", self.grid_row.as_deref());
        out.text("grid-column-start", self.grid_column_start.as_deref());
        out.text("grid-column-end", self.grid_column_end.as_deref());
        out.text("grid-row-start", self.grid_row_start.as_deref());
        out.text("grid-row-end", self.grid_row_end.as_deref());
        out.text("position", self.position.as_deref());
        out.display("z-index", self.z_index);
        out.dim("top", self.top.as_ref());
        out.dim("bottom", self.bottom.as_ref());
        out.dim(direction.start(), self.start.as_ref());
        out.dim(direction.end(), self.end.as_ref());
        out.dim("left", self.left.as_ref());
        out.dim("right", self.right.as_ref());
        out.0
    }
}

#[derive(Default)]
struct Declarations(Vec<(&'static str, String)>);

impl Declarations {
    fn dim(&mut self, name: &'static str, value: Option<&Dimension>) {
        if let Some(value) = value {
            self.0.push((name, value.css_value()));
        }
    }

    fn text(&mut self, name: &'static str, value: Option<&str>) {
        match value {
            Some(value) if is_safe_css_value(value) => self.0.push((name, value.to_string())),
            Some(value) => log::warn!("skipping unsafe `{name}` value {value:?}"),
            None => {}
        }
    }

    fn display(&mut self, name: &'static str, value: Option<impl fmt::Display>) {
        if let Some(value) = value {
            self.0.push((name, value.to_string()));
        }
    }
}

/// Style attributes to apply to the rendered element.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleOutput {
    pub class: Classes,
    pub style: Option<AttrValue>,
    pub hidden: bool,
}

impl StyleOutput {
    /// Attributes in application order; empty class and style are omitted.
    #[must_use]
    pub fn attributes(&self) -> Vec<(&'static str, AttrValue)> {
        let mut attrs = Vec::with_capacity(3);
        if !self.class.is_empty() {
            attrs.push(("class", AttrValue::from(self.class.to_string())));
        }
        if let Some(style) = &self.style {
            attrs.push(("style", style.clone()));
        }
        if self.hidden {
            attrs.push(("hidden", AttrValue::Static("")));
        }
        attrs
    }
}

/// Split the style-related properties out of `props` into element attributes.
#[must_use]
pub fn convert_style_props(props: &ViewProps, direction: Direction) -> StyleOutput {
    let mut declarations: Vec<String> = props
        .layout
        .declarations(direction)
        .into_iter()
        .map(|(name, value)| format!("{name}: {value}"))
        .collect();
    let hidden = props.hidden.unwrap_or(false);
    if hidden {
        declarations.push("display: none".to_string());
    }
    if let Some(raw) = props.style.as_deref().map(str::trim).filter(|raw| !raw.is_empty()) {
        declarations.push(raw.trim_end_matches(';').to_string());
    }
    let style = if declarations.is_empty() {
        None
    } else {
        Some(AttrValue::from(declarations.join("; ")))
    };
    StyleOutput {
        class: props.class.clone(),
        style,
        hidden,
    }
}

/// Style extraction using the [`Direction`] provided by the nearest context.
#[hook]
pub fn use_style_props(props: &ViewProps) -> StyleOutput {
    let direction = use_context::<Direction>().unwrap_or_default();
    convert_style_props(props, direction)
}
