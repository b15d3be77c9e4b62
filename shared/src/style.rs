//! Declarative style table for the header.
//!
//! Responsive and light/dark behaviour is data, not control flow: each rule
//! ties a set of utility classes to a viewport and colour scheme, and the CSS
//! layer picks the rules that apply. Rules are mobile-first, so `Narrow` and
//! `Light` are unconditional and the other variants add a class prefix.

use strum_macros::{AsRefStr, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Viewport {
    Narrow,
    Wide,
}

impl Viewport {
    fn prefix(self) -> Option<&'static str> {
        match self {
            Viewport::Narrow => None,
            Viewport::Wide => Some("lg"),
        }
    }
}

#[derive(EnumIter, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    fn prefix(self) -> Option<&'static str> {
        match self {
            ColorScheme::Light => None,
            ColorScheme::Dark => Some("dark"),
        }
    }
}

/// Styled elements of the header tree.
#[derive(EnumIter, AsRefStr, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Frame,
    Banner,
    Link,
    Logo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StyleRule {
    slot: Slot,
    viewport: Viewport,
    scheme: ColorScheme,
    classes: &'static [&'static str],
}

impl StyleRule {
    const fn new(
        slot: Slot,
        viewport: Viewport,
        scheme: ColorScheme,
        classes: &'static [&'static str],
    ) -> Self {
        Self { slot, viewport, scheme, classes }
    }

    fn prefixed(&self, class: &str) -> String {
        let mut out = String::new();
        for prefix in [self.viewport.prefix(), self.scheme.prefix()].into_iter().flatten() {
            out.push_str(prefix);
            out.push(':');
        }
        out.push_str(class);
        out
    }
}

use ColorScheme::{Dark, Light};
use Viewport::{Narrow, Wide};

static STYLE_RULES: &[StyleRule] = &[
    StyleRule::new(
        Slot::Frame,
        Narrow,
        Light,
        &["z-10", "max-w-5xl", "w-full", "items-center", "justify-between", "font-mono", "text-sm"],
    ),
    StyleRule::new(Slot::Frame, Wide, Light, &["flex"]),
    // pinned to the bottom edge on small screens, acting as a banner
    StyleRule::new(
        Slot::Banner,
        Narrow,
        Light,
        &[
            "fixed",
            "bottom-0",
            "left-0",
            "mb-4",
            "flex",
            "h-auto",
            "w-full",
            "items-end",
            "justify-center",
            "bg-gradient-to-t",
            "from-white",
            "via-white",
        ],
    ),
    StyleRule::new(Slot::Banner, Narrow, Dark, &["from-black", "via-black"]),
    StyleRule::new(Slot::Banner, Wide, Light, &["static", "w-auto", "bg-none", "mb-0"]),
    StyleRule::new(
        Slot::Link,
        Narrow,
        Light,
        &["flex", "items-center", "justify-center", "font-nunito", "text-lg", "font-bold", "gap-2"],
    ),
    StyleRule::new(Slot::Logo, Narrow, Light, &["rounded-xl"]),
];

fn rules_for(slot: Slot) -> impl Iterator<Item = &'static StyleRule> {
    STYLE_RULES.iter().filter(move |rule| rule.slot == slot)
}

/// Class attribute for `slot`, with every conditional utility prefixed.
pub fn class_list(slot: Slot) -> String {
    rules_for(slot)
        .flat_map(|rule| rule.classes.iter().map(move |class| rule.prefixed(class)))
        .collect::<Vec<_>>()
        .join(" ")
}
