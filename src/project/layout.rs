//! Layout-hint selection for emulated layout.
//!
//! When no native layout run supplied positions, the renderer picks a
//! layout-algorithm family from the named layout engine; `dot` (and any
//! unknown engine) gets a tree layout oriented by `rankdir`.

use crate::attrgraph::{LayoutEngine, Rankdir};
use crate::visual::{LayoutHint, TreeOrientation};

/// Map a layout engine name and rank direction to a layout hint.
pub fn select_layout(engine: Option<LayoutEngine>, rankdir: Option<Rankdir>) -> LayoutHint {
    match engine {
        Some(LayoutEngine::Circo) | Some(LayoutEngine::Neato) | Some(LayoutEngine::Twopi) => {
            LayoutHint::Radial
        }
        Some(LayoutEngine::Fdp) | Some(LayoutEngine::Sfdp) => LayoutHint::ForceDirected,
        Some(LayoutEngine::Osage) => LayoutHint::Grid,
        _ => {
            let orientation = match rankdir {
                Some(Rankdir::LeftRight) => TreeOrientation::LeftRight,
                _ => TreeOrientation::TopDown,
            };
            LayoutHint::Tree(orientation)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radial_engines() {
        for engine in [LayoutEngine::Circo, LayoutEngine::Neato, LayoutEngine::Twopi] {
            assert_eq!(select_layout(Some(engine), None), LayoutHint::Radial);
        }
    }

    #[test]
    fn force_directed_engines() {
        for engine in [LayoutEngine::Fdp, LayoutEngine::Sfdp] {
            assert_eq!(select_layout(Some(engine), None), LayoutHint::ForceDirected);
        }
    }

    #[test]
    fn osage_is_grid() {
        assert_eq!(select_layout(Some(LayoutEngine::Osage), None), LayoutHint::Grid);
    }

    #[test]
    fn default_is_tree_oriented_by_rankdir() {
        assert_eq!(
            select_layout(None, None),
            LayoutHint::Tree(TreeOrientation::TopDown)
        );
        assert_eq!(
            select_layout(Some(LayoutEngine::Dot), Some(Rankdir::LeftRight)),
            LayoutHint::Tree(TreeOrientation::LeftRight)
        );
        // Only left-right flips the orientation.
        assert_eq!(
            select_layout(None, Some(Rankdir::BottomTop)),
            LayoutHint::Tree(TreeOrientation::TopDown)
        );
    }
}
