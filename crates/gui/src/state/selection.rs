use shared::ObjectId;

use crate::geometry::Aabb;

/// Highlight box appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HighlightStyle {
    /// Selected object
    Active,
    /// Other objects shown as snap references during a translate drag
    #[default]
    Inactive,
}

/// Wireframe box tracing an object's AABB.
///
/// `extents` is a cache: it only changes when the owner refreshes it.
#[derive(Debug, Clone, Copy, Default)]
pub struct HighlightBox {
    pub visible: bool,
    pub style: HighlightStyle,
    pub extents: Aabb,
}

impl HighlightBox {
    pub fn hidden() -> Self {
        Self::default()
    }

    pub fn show(&mut self, style: HighlightStyle) {
        self.visible = true;
        self.style = style;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}

/// Whether an object's highlight is shown, and how.
///
/// The selected object is always shown as active. Any other object is shown
/// as inactive only during a translate drag.
pub fn highlight_rule(is_selected: bool, translate_drag: bool) -> Option<HighlightStyle> {
    if is_selected {
        Some(HighlightStyle::Active)
    } else if translate_drag {
        Some(HighlightStyle::Inactive)
    } else {
        None
    }
}

/// Single-object selection state
#[derive(Default)]
pub struct SelectionState {
    selected: Option<ObjectId>,
    /// Incremented on every change (for UI change detection)
    pub version: u64,
}

impl SelectionState {
    pub fn selected(&self) -> Option<&ObjectId> {
        self.selected.as_ref()
    }

    /// Check if an object is selected
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }

    /// Replace the selection
    pub fn set(&mut self, id: ObjectId) {
        self.selected = Some(id);
        self.version += 1;
    }

    /// Clear selection, returning the previously selected id
    pub fn clear(&mut self) -> Option<ObjectId> {
        let prev = self.selected.take();
        if prev.is_some() {
            self.version += 1;
        }
        prev
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_empty() {
        let s = SelectionState::default();
        assert!(s.selected().is_none());
        assert!(!s.has_selection());
    }

    #[test]
    fn test_set_replaces() {
        let mut s = SelectionState::default();
        s.set("a".to_string());
        s.set("b".to_string());
        assert!(!s.is_selected("a"));
        assert!(s.is_selected("b"));
    }

    #[test]
    fn test_clear_returns_previous() {
        let mut s = SelectionState::default();
        s.set("a".to_string());
        let v = s.version;
        assert_eq!(s.clear(), Some("a".to_string()));
        assert_eq!(s.version, v + 1);
        assert_eq!(s.clear(), None);
        assert_eq!(s.version, v + 1);
    }

    #[test]
    fn test_highlight_rule() {
        assert_eq!(highlight_rule(true, false), Some(HighlightStyle::Active));
        assert_eq!(highlight_rule(true, true), Some(HighlightStyle::Active));
        assert_eq!(highlight_rule(false, true), Some(HighlightStyle::Inactive));
        assert_eq!(highlight_rule(false, false), None);
    }

    #[test]
    fn test_new_highlight_is_hidden() {
        let h = HighlightBox::hidden();
        assert!(!h.visible);
        assert!(h.extents.is_empty());
    }
}
