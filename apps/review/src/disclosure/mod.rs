//! Disclosure controller: the collapsible-section state machine behind the
//! category panels.
//!
//! A group is a set of sections sharing one open/closed state. Sections
//! register nothing; headers and content are correlated purely by the
//! section id string they pass to `is_open` and `toggle`, so toggling an id
//! no panel declared is legal and simply tracks state nobody reads. Groups
//! live as long as the page that created them: `destroy_group` releases the
//! state, and any later call with that handle fails with `InvalidHandle`
//! rather than being silently ignored.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::errors::ReviewError;

/// Opaque key addressing one disclosure group.
///
/// Handles come from a monotonically increasing counter and are never
/// reused, so a stale handle can never alias a group created later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupHandle(u64);

/// Open/closed state owned by exactly one group.
#[derive(Debug)]
struct DisclosureState {
    allow_multiple: bool,
    open: HashSet<String>,
}

/// Owns every live disclosure group and applies the toggle semantics.
#[derive(Debug, Default)]
pub struct DisclosureController {
    groups: HashMap<GroupHandle, DisclosureState>,
    next_id: u64,
}

impl DisclosureController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a fresh group and returns its handle.
    ///
    /// `initially_open` is replayed through the toggle state machine in
    /// order, so a single-open group seeded with several ids ends up with
    /// only the last one open, and a repeated id toggles itself shut again.
    pub fn create_group(&mut self, allow_multiple: bool, initially_open: &[&str]) -> GroupHandle {
        let handle = GroupHandle(self.next_id);
        self.next_id += 1;

        let mut state = DisclosureState {
            allow_multiple,
            open: HashSet::new(),
        };
        for section_id in initially_open {
            apply_toggle(&mut state, section_id);
        }

        debug!(
            group = handle.0,
            allow_multiple,
            open = state.open.len(),
            "Created disclosure group"
        );
        self.groups.insert(handle, state);
        handle
    }

    /// Whether `section_id` is currently open in the group.
    ///
    /// Ids that were never toggled read as closed; there is no distinction
    /// between "closed" and "unknown".
    pub fn is_open(&self, handle: GroupHandle, section_id: &str) -> Result<bool, ReviewError> {
        let state = self
            .groups
            .get(&handle)
            .ok_or(ReviewError::InvalidHandle(handle))?;
        Ok(state.open.contains(section_id))
    }

    /// Flips `section_id` and returns its new open state.
    ///
    /// Opening a section in a single-open group closes every other section
    /// within the same exclusive borrow, so callers only ever observe the
    /// final state of the transition.
    pub fn toggle(&mut self, handle: GroupHandle, section_id: &str) -> Result<bool, ReviewError> {
        let state = self
            .groups
            .get_mut(&handle)
            .ok_or(ReviewError::InvalidHandle(handle))?;
        let open = apply_toggle(state, section_id);
        debug!(group = handle.0, section = section_id, open, "Toggled section");
        Ok(open)
    }

    /// Releases the group's state. The handle is dead afterwards.
    pub fn destroy_group(&mut self, handle: GroupHandle) -> Result<(), ReviewError> {
        self.groups
            .remove(&handle)
            .ok_or(ReviewError::InvalidHandle(handle))?;
        debug!(group = handle.0, "Destroyed disclosure group");
        Ok(())
    }
}

/// The whole state machine: a section is either in the open set or not.
/// Closing is always a plain removal; opening first clears the set when the
/// group does not allow multiple open sections.
fn apply_toggle(state: &mut DisclosureState, section_id: &str) -> bool {
    if state.open.remove(section_id) {
        return false;
    }
    if !state.allow_multiple {
        state.open.clear();
    }
    state.open.insert(section_id.to_string());
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_controller() -> DisclosureController {
        DisclosureController::new()
    }

    fn open_count(controller: &DisclosureController, handle: GroupHandle) -> usize {
        controller
            .groups
            .get(&handle)
            .map(|state| state.open.len())
            .unwrap_or(0)
    }

    // ── basic toggling ──

    #[test]
    fn test_sections_start_closed() {
        let mut controller = make_controller();
        let group = controller.create_group(true, &[]);
        assert_eq!(controller.is_open(group, "content"), Ok(false));
    }

    #[test]
    fn test_toggle_opens_then_closes() {
        let mut controller = make_controller();
        let group = controller.create_group(true, &[]);

        assert_eq!(controller.toggle(group, "content"), Ok(true));
        assert_eq!(controller.is_open(group, "content"), Ok(true));

        assert_eq!(controller.toggle(group, "content"), Ok(false));
        assert_eq!(controller.is_open(group, "content"), Ok(false));
    }

    #[test]
    fn test_double_toggle_restores_prior_state() {
        let mut controller = make_controller();
        let group = controller.create_group(true, &["tone-style", "skills"]);

        let before: Vec<bool> = ["tone-style", "content", "skills"]
            .iter()
            .map(|id| controller.is_open(group, id).unwrap())
            .collect();

        controller.toggle(group, "content").unwrap();
        controller.toggle(group, "content").unwrap();

        let after: Vec<bool> = ["tone-style", "content", "skills"]
            .iter()
            .map(|id| controller.is_open(group, id).unwrap())
            .collect();
        assert_eq!(before, after, "toggling twice must be a no-op overall");
    }

    #[test]
    fn test_toggling_unknown_id_is_tracked() {
        let mut controller = make_controller();
        let group = controller.create_group(true, &[]);

        // No panel ever declared "ghost"; the controller tracks it anyway.
        assert_eq!(controller.toggle(group, "ghost"), Ok(true));
        assert_eq!(controller.is_open(group, "ghost"), Ok(true));
    }

    // ── multi-open groups ──

    #[test]
    fn test_multi_open_sections_are_independent() {
        let mut controller = make_controller();
        let group = controller.create_group(true, &[]);

        controller.toggle(group, "tone-style").unwrap();
        controller.toggle(group, "content").unwrap();
        controller.toggle(group, "skills").unwrap();

        assert_eq!(controller.is_open(group, "tone-style"), Ok(true));
        assert_eq!(controller.is_open(group, "content"), Ok(true));
        assert_eq!(controller.is_open(group, "skills"), Ok(true));

        controller.toggle(group, "content").unwrap();
        assert_eq!(controller.is_open(group, "content"), Ok(false));
        assert_eq!(
            controller.is_open(group, "tone-style"),
            Ok(true),
            "closing one section must not disturb its siblings"
        );
    }

    // ── single-open groups ──

    #[test]
    fn test_single_open_closes_previous_section() {
        let mut controller = make_controller();
        let group = controller.create_group(false, &[]);

        controller.toggle(group, "tone-style").unwrap();
        assert_eq!(controller.toggle(group, "content"), Ok(true));

        assert_eq!(controller.is_open(group, "tone-style"), Ok(false));
        assert_eq!(controller.is_open(group, "content"), Ok(true));
        assert_eq!(open_count(&controller, group), 1);
    }

    #[test]
    fn test_single_open_never_exceeds_one() {
        let mut controller = make_controller();
        let group = controller.create_group(false, &[]);

        for id in ["tone-style", "content", "structure", "skills", "content"] {
            controller.toggle(group, id).unwrap();
            assert!(
                open_count(&controller, group) <= 1,
                "single-open group held more than one section after '{id}'"
            );
        }
    }

    #[test]
    fn test_single_open_toggle_shut_leaves_all_closed() {
        let mut controller = make_controller();
        let group = controller.create_group(false, &["structure"]);

        assert_eq!(controller.toggle(group, "structure"), Ok(false));
        assert_eq!(open_count(&controller, group), 0);
    }

    // ── initial state replay ──

    #[test]
    fn test_initially_open_seeds_state() {
        let mut controller = make_controller();
        let group = controller.create_group(true, &["tone-style", "content"]);

        assert_eq!(controller.is_open(group, "tone-style"), Ok(true));
        assert_eq!(controller.is_open(group, "content"), Ok(true));
        assert_eq!(controller.is_open(group, "skills"), Ok(false));
    }

    #[test]
    fn test_initially_open_respects_single_open() {
        let mut controller = make_controller();
        let group = controller.create_group(false, &["tone-style", "content"]);

        assert_eq!(
            controller.is_open(group, "tone-style"),
            Ok(false),
            "a single-open group keeps only the last seeded id"
        );
        assert_eq!(controller.is_open(group, "content"), Ok(true));
    }

    #[test]
    fn test_repeated_seed_id_toggles_itself_shut() {
        let mut controller = make_controller();
        let group = controller.create_group(true, &["content", "content"]);
        assert_eq!(controller.is_open(group, "content"), Ok(false));
    }

    // ── batched toggles expose only the final state ──

    #[test]
    fn test_toggle_batch_applies_in_call_order() {
        let mut controller = make_controller();
        let group = controller.create_group(false, &[]);

        for id in ["tone-style", "content", "structure"] {
            controller.toggle(group, id).unwrap();
        }

        assert_eq!(controller.is_open(group, "structure"), Ok(true));
        assert_eq!(controller.is_open(group, "tone-style"), Ok(false));
        assert_eq!(controller.is_open(group, "content"), Ok(false));
    }

    // ── lifecycle ──

    #[test]
    fn test_destroyed_handle_is_rejected() {
        let mut controller = make_controller();
        let group = controller.create_group(true, &["content"]);

        controller.destroy_group(group).unwrap();

        assert_eq!(
            controller.is_open(group, "content"),
            Err(ReviewError::InvalidHandle(group))
        );
        assert_eq!(
            controller.toggle(group, "content"),
            Err(ReviewError::InvalidHandle(group))
        );
        assert_eq!(
            controller.destroy_group(group),
            Err(ReviewError::InvalidHandle(group))
        );
    }

    #[test]
    fn test_handles_are_never_reused() {
        let mut controller = make_controller();
        let first = controller.create_group(true, &["content"]);
        controller.destroy_group(first).unwrap();

        let second = controller.create_group(true, &[]);
        assert_ne!(first, second, "a destroyed handle must stay dead");
        assert_eq!(
            controller.is_open(first, "content"),
            Err(ReviewError::InvalidHandle(first)),
            "the new group must not be reachable through the stale handle"
        );
        assert_eq!(controller.is_open(second, "content"), Ok(false));
    }

    #[test]
    fn test_groups_do_not_share_state() {
        let mut controller = make_controller();
        let left = controller.create_group(true, &[]);
        let right = controller.create_group(true, &[]);

        controller.toggle(left, "content").unwrap();

        assert_eq!(controller.is_open(left, "content"), Ok(true));
        assert_eq!(
            controller.is_open(right, "content"),
            Ok(false),
            "toggles must stay scoped to their own group"
        );
    }

    #[test]
    fn test_destroying_one_group_leaves_others_alive() {
        let mut controller = make_controller();
        let doomed = controller.create_group(true, &["content"]);
        let survivor = controller.create_group(true, &["skills"]);

        controller.destroy_group(doomed).unwrap();

        assert_eq!(controller.is_open(survivor, "skills"), Ok(true));
    }
}
