//! Click dispatch with bubbling and propagation stopping.
//!
//! A click is delivered to the innermost region first and then to each
//! ancestor in turn. Every region with a [`ClickBinding`] fires; a binding
//! with `stop_propagation` ends the walk. Regions without a binding are
//! transparent.
//!
//! [`ClickBinding`]: archview_core::ClickBinding

use archview_core::{ComponentId, Diagram, RegionId};

/// Components selected by a click on `target`, in firing order.
///
/// The last element is the one whose selection is left standing.
pub fn click_targets(diagram: &Diagram, target: RegionId) -> Vec<ComponentId> {
    let mut fired = Vec::new();
    for region in diagram.ancestors(target) {
        let Some(binding) = region.binding else {
            continue;
        };
        fired.push(binding.target);
        if binding.stop_propagation {
            break;
        }
    }
    fired
}
