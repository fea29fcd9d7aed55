use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use yew::{AttrValue, Children, Classes, Properties};

use crate::dom_ref::DomRef;
use crate::error::ViewError;
use crate::style::StyleProps;

static ATTRIBUTE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_:][A-Za-z0-9_.:-]*$").expect("attribute name pattern is valid")
});

/// Returns `true` when `name` can be written as an HTML attribute.
#[must_use]
pub fn is_valid_attribute_name(name: &str) -> bool {
    ATTRIBUTE_NAME.is_match(name)
}

/// Ordered bag of raw attributes carried alongside the typed properties.
///
/// Names are validated on insertion, so anything stored here can be emitted
/// as-is once it survives [`filter_dom_props`](crate::dom_props::filter_dom_props).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropBag(IndexMap<String, AttrValue>);

impl PropBag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an attribute, returning the value it replaced.
    ///
    /// # Errors
    /// Returns [`ViewError::InvalidAttributeName`] when `name` is not a legal
    /// attribute name.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> Result<Option<AttrValue>, ViewError> {
        let name = name.into();
        if !is_valid_attribute_name(&name) {
            return Err(ViewError::InvalidAttributeName(name));
        }
        Ok(self.0.insert(name, value.into()))
    }

    /// Builder form of [`PropBag::insert`].
    ///
    /// # Errors
    /// Returns [`ViewError::InvalidAttributeName`] when `name` is not a legal
    /// attribute name.
    pub fn with(
        mut self,
        name: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> Result<Self, ViewError> {
        self.insert(name, value)?;
        Ok(self)
    }

    /// Build a bag from name/value pairs, keeping the first invalid name as
    /// the error.
    ///
    /// # Errors
    /// Returns [`ViewError::InvalidAttributeName`] for the first illegal name.
    pub fn try_from_pairs<I, K, V>(pairs: I) -> Result<Self, ViewError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttrValue>,
    {
        let mut bag = Self::new();
        for (name, value) in pairs {
            bag.insert(name, value)?;
        }
        Ok(bag)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.0.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy every entry of `other` into `self`; `other` wins on collisions.
    pub fn extend(&mut self, other: &Self) {
        for (name, value) in &other.0 {
            self.0.insert(name.clone(), value.clone());
        }
    }

    /// Names already passed validation (or are known-good literals).
    pub(crate) fn put(&mut self, name: impl Into<String>, value: AttrValue) {
        self.0.insert(name.into(), value);
    }

    /// Convert into the map shape a virtual DOM element accepts.
    #[must_use]
    pub fn into_attributes(self) -> IndexMap<AttrValue, AttrValue> {
        self.0
            .into_iter()
            .map(|(name, value)| (AttrValue::from(name), value))
            .collect()
    }
}

/// The properties bag accepted by every slotted container.
///
/// `layout`, `class`, `style` and `hidden` are style-capable; `id` and the
/// `attrs` bag are passthrough candidates that still have to survive DOM
/// filtering. `dom_ref` is the caller's reference handle.
#[derive(Properties, PartialEq, Clone, Default)]
pub struct ViewProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    /// Overrides the slot the container reads defaults from.
    #[prop_or_default]
    pub slot: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    /// Raw inline CSS appended after the generated declarations.
    #[prop_or_default]
    pub style: Option<AttrValue>,
    #[prop_or_default]
    pub layout: StyleProps,
    /// `Some(false)` un-hides a container whose slot default hides it.
    #[prop_or_default]
    pub hidden: Option<bool>,
    #[prop_or_default]
    pub attrs: PropBag,
    #[prop_or_default]
    pub dom_ref: DomRef,
    #[prop_or_default]
    pub children: Children,
}

impl ViewProps {
    /// Fold `top` over `self`, treating `self` as the defaults.
    ///
    /// Classes concatenate, attributes union with `top` winning, and every
    /// optional field (`hidden` included) takes `top`'s value when it is
    /// set. The slot selector and the reference handle are never inherited
    /// from defaults.
    #[must_use]
    pub fn overlay(&self, top: &Self) -> Self {
        let mut class = self.class.clone();
        class.push(top.class.clone());
        let mut attrs = self.attrs.clone();
        attrs.extend(&top.attrs);
        let children = if top.children.is_empty() {
            self.children.clone()
        } else {
            top.children.clone()
        };
        Self {
            id: top.id.clone().or_else(|| self.id.clone()),
            slot: top.slot.clone(),
            class,
            style: top.style.clone().or_else(|| self.style.clone()),
            layout: self.layout.overlay(&top.layout),
            hidden: top.hidden.or(self.hidden),
            attrs,
            dom_ref: top.dom_ref.clone(),
            children,
        }
    }
}
