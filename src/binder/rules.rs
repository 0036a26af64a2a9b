//! Binding rules table
//!
//! One static, ordered table of every binding the page template may carry.
//! The set of kinds is closed: a binding attribute whose value does not match
//! a row here is simply never selected.

use std::borrow::Cow;

use serde::Serialize;
use serde_json::Value;

use crate::binder::sections::{
    about, calculator, compare, contact, designer, lists, metadata, mission, navigation, text,
    works,
};
use crate::content::ContentDocument;

/// Attribute that carries an optional prefix for `data-href` bindings.
pub const HREF_PREFIX_ATTR: &str = "data-href-prefix";

/// Every kind of binding the binder knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BindingKind {
    SiteTitle,
    SiteDescription,
    Text,
    Href,
    PreloaderNumbers,
    HeaderNav,
    HeroNav,
    MobileNav,
    FooterNav,
    HeaderCta,
    MobileMenuFeatures,
    AboutFeatures,
    MobileMenuSocials,
    FooterSocials,
    HeroStack,
    AboutItems,
    Mission,
    WorksBlocks,
    WorksList,
    Compare,
    CalculatorTitle,
    CalculatorSliders,
    Contact,
    Designer,
}

/// How a rule finds its elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Element with this id (page metadata).
    Id(&'static str),
    /// Elements carrying this binding attribute.
    Attribute(&'static str),
}

/// Where the content path comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSource {
    /// Hardcoded path; the attribute value must equal it.
    Fixed(&'static str),
    /// The element's own attribute value is the path.
    FromAttribute,
}

/// A single mutation applied to a matched element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Write {
    /// Replace inner content with text (escaped by the rewriter).
    Text(String),
    /// Replace inner content with a markup fragment.
    Html(String),
    /// Set one attribute (quotes escaped by the rewriter).
    Attribute { name: &'static str, value: String },
}

/// Everything a renderer may read.
#[derive(Debug)]
pub struct RenderContext<'a> {
    /// The resolved value at the rule's path. Never the null sentinel.
    pub value: &'a Value,
    /// Whole document, for rules that read sibling paths.
    pub document: &'a ContentDocument,
    /// `data-href-prefix` of the matched element, if any.
    pub href_prefix: Option<&'a str>,
}

pub type Renderer = fn(&RenderContext<'_>) -> Option<Write>;

/// One row of the dispatch table.
#[derive(Clone, Copy)]
pub struct BindingRule {
    pub kind: BindingKind,
    pub target: Target,
    pub path: PathSource,
    pub render: Renderer,
}

impl std::fmt::Debug for BindingRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BindingRule")
            .field("kind", &self.kind)
            .field("target", &self.target)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl BindingRule {
    /// CSS selector matching this rule's elements.
    pub fn selector(&self) -> String {
        match (self.target, self.path) {
            (Target::Id(id), _) => format!("#{}", id),
            (Target::Attribute(attr), PathSource::Fixed(path)) => {
                format!("[{}=\"{}\"]", attr, path)
            }
            (Target::Attribute(attr), PathSource::FromAttribute) => format!("[{}]", attr),
        }
    }

    /// Content path for an element, given its binding attribute value.
    pub fn path_for<'a>(&self, attribute_value: Option<&'a str>) -> Option<Cow<'a, str>> {
        match self.path {
            PathSource::Fixed(path) => Some(Cow::Borrowed(path)),
            PathSource::FromAttribute => attribute_value.map(Cow::Borrowed),
        }
    }

    /// Binding attribute name, if the rule targets one.
    pub fn attribute(&self) -> Option<&'static str> {
        match self.target {
            Target::Attribute(attr) => Some(attr),
            Target::Id(_) => None,
        }
    }
}

impl BindingKind {
    /// The table row for this kind.
    pub fn rule(self) -> &'static BindingRule {
        // RULES is declared in enum order.
        &RULES[self as usize]
    }
}

const fn attr(
    kind: BindingKind,
    attribute: &'static str,
    path: &'static str,
    render: Renderer,
) -> BindingRule {
    BindingRule {
        kind,
        target: Target::Attribute(attribute),
        path: PathSource::Fixed(path),
        render,
    }
}

/// The binder runs these in order, each exactly once per pass.
pub static RULES: [BindingRule; 24] = [
    BindingRule {
        kind: BindingKind::SiteTitle,
        target: Target::Id("site-title"),
        path: PathSource::Fixed("site.title"),
        render: metadata::site_title,
    },
    BindingRule {
        kind: BindingKind::SiteDescription,
        target: Target::Id("site-description"),
        path: PathSource::Fixed("site.description"),
        render: metadata::site_description,
    },
    BindingRule {
        kind: BindingKind::Text,
        target: Target::Attribute("data-content"),
        path: PathSource::FromAttribute,
        render: text::text,
    },
    BindingRule {
        kind: BindingKind::Href,
        target: Target::Attribute("data-href"),
        path: PathSource::FromAttribute,
        render: text::href,
    },
    attr(BindingKind::PreloaderNumbers, "data-content-list", "preloader.numbers", lists::preloader_numbers),
    attr(BindingKind::HeaderNav, "data-nav", "header.nav", navigation::header_nav),
    attr(BindingKind::HeroNav, "data-hero-nav", "header.nav", navigation::hero_nav),
    attr(BindingKind::MobileNav, "data-mobile-nav", "header.nav", navigation::mobile_nav),
    attr(BindingKind::FooterNav, "data-footer-nav", "footer.nav", navigation::footer_nav),
    attr(BindingKind::HeaderCta, "data-header-cta", "header.ctaButtons", navigation::header_cta),
    attr(BindingKind::MobileMenuFeatures, "data-features", "mobileMenu.features", lists::mobile_menu_features),
    attr(BindingKind::AboutFeatures, "data-features", "about.features", lists::about_features),
    attr(BindingKind::MobileMenuSocials, "data-socials", "mobileMenu.socials", lists::mobile_menu_socials),
    attr(BindingKind::FooterSocials, "data-socials", "footer.socials", lists::footer_socials),
    attr(BindingKind::HeroStack, "data-stack", "hero.stack", lists::hero_stack),
    attr(BindingKind::AboutItems, "data-about-items", "about.items", about::about_items),
    attr(BindingKind::Mission, "data-mission", "about.mission.lines", mission::mission),
    attr(BindingKind::WorksBlocks, "data-works-blocks", "works.projects", works::works_blocks),
    attr(BindingKind::WorksList, "data-works-list", "works.projects", works::works_list),
    attr(BindingKind::Compare, "data-compare", "compare.columns", compare::compare),
    attr(BindingKind::CalculatorTitle, "data-calc-title", "calculator.title", calculator::calculator_title),
    attr(BindingKind::CalculatorSliders, "data-calc-sliders", "calculator.sliders", calculator::calculator_sliders),
    attr(BindingKind::Contact, "data-contact", "contact", contact::contact),
    attr(BindingKind::Designer, "data-designer", "footer.designer", designer::designer),
];
