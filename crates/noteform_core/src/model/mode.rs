//! Presentation mode and directive-set model.
//!
//! # Responsibility
//! - Name the three layout modes of the editing surface.
//! - Describe, as plain data, the full directive set each mode applies.
//!
//! # Invariants
//! - Mode parsing never fails: unknown or absent names resolve to `Normal`.
//! - `DirectiveSet::for_mode` is the complete applied set, not a delta.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

/// Layout mode of one editing session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresentationMode {
    /// Regular form layout.
    #[default]
    Normal,
    /// Distraction-free editing with the toolbar fixed to the top.
    Fullscreen,
    /// Distraction-free two-column layout with a live preview.
    Preview,
}

impl PresentationMode {
    pub const ALL: [PresentationMode; 3] = [Self::Normal, Self::Fullscreen, Self::Preview];

    /// Resolves a mode-menu name. Absent or unrecognized names map to `Normal`.
    pub fn from_name(name: Option<&str>) -> Self {
        match name.map(|value| value.trim().to_ascii_lowercase()) {
            Some(value) if value == "fullscreen" => Self::Fullscreen,
            Some(value) if value == "preview" => Self::Preview,
            _ => Self::Normal,
        }
    }

    /// Stable name used by the mode menu and in log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Fullscreen => "fullscreen",
            Self::Preview => "preview",
        }
    }

    /// Whether this mode pins the toolbar to the top of the viewport.
    pub fn pins_toolbar(self) -> bool {
        matches!(self, Self::Fullscreen | Self::Preview)
    }
}

impl Display for PresentationMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named page region addressed by the styling collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Body,
    Toolbar,
    Article,
    Form,
    Preview,
}

impl Region {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Toolbar => "toolbar",
            Self::Article => "article",
            Self::Form => "form",
            Self::Preview => "preview",
        }
    }
}

/// One style assertion: a class name applied to a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Directive {
    pub region: Region,
    pub name: &'static str,
}

impl Directive {
    pub const fn new(region: Region, name: &'static str) -> Self {
        Self { region, name }
    }
}

impl Display for Directive {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.region.as_str(), self.name)
    }
}

const PREVIEW_HIDDEN: Directive = Directive::new(Region::Preview, "hide");
const DISTRACTION_FREE: Directive = Directive::new(Region::Body, "distraction-free");
const TWO_COLUMN: Directive = Directive::new(Region::Body, "two-column");
const TOOLBAR_NAVBAR: &[Directive] = &[
    Directive::new(Region::Toolbar, "navbar"),
    Directive::new(Region::Toolbar, "navbar-fixed-top"),
];
const HALF_COLUMN_CLASSES: &[&str] = &["col-xs-6", "col-sm-6", "col-lg-6"];

/// Complete set of directives applied for one mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectiveSet {
    directives: BTreeSet<Directive>,
}

impl DirectiveSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the full directive set of `mode`.
    pub fn for_mode(mode: PresentationMode) -> Self {
        let mut set = Self::new();
        match mode {
            PresentationMode::Normal => {
                set.insert(PREVIEW_HIDDEN);
            }
            PresentationMode::Fullscreen => {
                set.insert(DISTRACTION_FREE);
                set.extend(TOOLBAR_NAVBAR.iter().copied());
                set.insert(PREVIEW_HIDDEN);
            }
            PresentationMode::Preview => {
                set.insert(DISTRACTION_FREE);
                set.insert(TWO_COLUMN);
                set.extend(TOOLBAR_NAVBAR.iter().copied());
                set.insert(Directive::new(Region::Article, "row"));
                for class in HALF_COLUMN_CLASSES {
                    set.insert(Directive::new(Region::Form, *class));
                    set.insert(Directive::new(Region::Preview, *class));
                }
            }
        }
        set
    }

    pub fn insert(&mut self, directive: Directive) -> bool {
        self.directives.insert(directive)
    }

    pub fn contains(&self, directive: &Directive) -> bool {
        self.directives.contains(directive)
    }

    pub fn len(&self) -> usize {
        self.directives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Directive> {
        self.directives.iter()
    }

    /// Directives present in `self` but not in `other`, in stable order.
    pub fn difference<'a>(&'a self, other: &'a DirectiveSet) -> impl Iterator<Item = Directive> + 'a {
        self.directives.difference(&other.directives).copied()
    }

    /// Directives applied to one region.
    pub fn for_region(&self, region: Region) -> impl Iterator<Item = &Directive> {
        self.directives.iter().filter(move |d| d.region == region)
    }
}

impl Extend<Directive> for DirectiveSet {
    fn extend<T: IntoIterator<Item = Directive>>(&mut self, iter: T) {
        self.directives.extend(iter);
    }
}

impl FromIterator<Directive> for DirectiveSet {
    fn from_iter<T: IntoIterator<Item = Directive>>(iter: T) -> Self {
        Self {
            directives: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Directive, DirectiveSet, PresentationMode, Region};

    #[test]
    fn mode_names_resolve_with_normal_fallback() {
        assert_eq!(
            PresentationMode::from_name(Some("fullscreen")),
            PresentationMode::Fullscreen
        );
        assert_eq!(
            PresentationMode::from_name(Some(" Preview ")),
            PresentationMode::Preview
        );
        assert_eq!(
            PresentationMode::from_name(Some("zen")),
            PresentationMode::Normal
        );
        assert_eq!(PresentationMode::from_name(None), PresentationMode::Normal);
    }

    #[test]
    fn normal_set_only_hides_preview() {
        let set = DirectiveSet::for_mode(PresentationMode::Normal);
        assert_eq!(set.len(), 1);
        assert!(set.contains(&Directive::new(Region::Preview, "hide")));
    }

    #[test]
    fn preview_set_reveals_preview_and_splits_columns() {
        let set = DirectiveSet::for_mode(PresentationMode::Preview);
        assert!(!set.contains(&Directive::new(Region::Preview, "hide")));
        assert!(set.contains(&Directive::new(Region::Body, "two-column")));
        assert!(set.contains(&Directive::new(Region::Article, "row")));
        assert_eq!(set.for_region(Region::Form).count(), 3);
        assert_eq!(set.for_region(Region::Preview).count(), 3);
    }

    #[test]
    fn only_fullscreen_and_preview_pin_toolbar() {
        assert!(!PresentationMode::Normal.pins_toolbar());
        assert!(PresentationMode::Fullscreen.pins_toolbar());
        assert!(PresentationMode::Preview.pins_toolbar());
        for mode in PresentationMode::ALL {
            let set = DirectiveSet::for_mode(mode);
            let pinned = set.contains(&Directive::new(Region::Toolbar, "navbar-fixed-top"));
            assert_eq!(pinned, mode.pins_toolbar(), "mode {mode}");
        }
    }
}
