//! Element registry for one mount cycle.
//!
//! Groups of animatable element handles are collected as components mount.
//! The registry is scoped to a single mount cycle and discarded wholesale on
//! teardown; groups iterate in first-registration order, which is also the
//! order visibility callbacks fire when several groups cross their trigger
//! in the same frame.

/// Sections that own a reveal group of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    About,
    Skills,
    Projects,
    Contact,
}

/// Typed group keys. Each key resolves to its own handle list, replacing
/// ad-hoc "push into some array" callbacks with a closed set of variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKey {
    Hero,
    HeroBlobs,
    Section(SectionId),
    Paragraphs,
    SkillCards,
    ProjectCards,
    ContactLinks,
}

#[derive(Debug, Default)]
pub struct Registry<H> {
    groups: Vec<(GroupKey, Vec<H>)>,
}

impl<H: PartialEq> Registry<H> {
    pub fn new() -> Self {
        Registry { groups: Vec::new() }
    }

    /// Appends a handle to a group. `None` is a no-op (an element that never
    /// mounted). Re-registering a handle already present in the group is a
    /// no-op, so re-runs of mount effects cannot duplicate entries.
    pub fn register(&mut self, key: GroupKey, handle: Option<H>) {
        let Some(handle) = handle else {
            return;
        };
        if let Some((_, handles)) = self.groups.iter_mut().find(|(k, _)| *k == key) {
            if !handles.contains(&handle) {
                handles.push(handle);
            }
        } else {
            self.groups.push((key, vec![handle]));
        }
    }

    /// Clears a group at the start of a mount cycle so stale handles from a
    /// previous render never accumulate. The group keeps its position in
    /// registration order.
    pub fn reset(&mut self, key: GroupKey) {
        if let Some((_, handles)) = self.groups.iter_mut().find(|(k, _)| *k == key) {
            handles.clear();
        }
    }

    /// Drops every group. Called when a mount cycle is torn down.
    pub fn clear(&mut self) {
        self.groups.clear();
    }

    pub fn handles(&self, key: GroupKey) -> &[H] {
        self.groups
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, h)| h.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_empty(&self, key: GroupKey) -> bool {
        self.handles(key).is_empty()
    }

    /// Group keys in first-registration order.
    pub fn keys(&self) -> impl Iterator<Item = GroupKey> + '_ {
        self.groups.iter().map(|(k, _)| *k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_in_order_without_duplicates() {
        let mut reg = Registry::new();
        reg.register(GroupKey::ProjectCards, Some(1));
        reg.register(GroupKey::ProjectCards, Some(2));
        reg.register(GroupKey::ProjectCards, Some(1));
        assert_eq!(reg.handles(GroupKey::ProjectCards), &[1, 2]);
    }

    #[test]
    fn none_handle_is_a_noop() {
        let mut reg: Registry<u32> = Registry::new();
        reg.register(GroupKey::Hero, None);
        assert!(reg.is_empty(GroupKey::Hero));
        assert_eq!(reg.keys().count(), 0);
    }

    #[test]
    fn keys_follow_first_registration_order() {
        let mut reg = Registry::new();
        reg.register(GroupKey::Hero, Some(1));
        reg.register(GroupKey::Section(SectionId::About), Some(2));
        reg.register(GroupKey::ProjectCards, Some(3));
        reg.register(GroupKey::Hero, Some(4));
        let keys: Vec<_> = reg.keys().collect();
        assert_eq!(
            keys,
            vec![
                GroupKey::Hero,
                GroupKey::Section(SectionId::About),
                GroupKey::ProjectCards
            ]
        );
    }

    #[test]
    fn reset_clears_handles_but_keeps_order_slot() {
        let mut reg = Registry::new();
        reg.register(GroupKey::Hero, Some(1));
        reg.register(GroupKey::ProjectCards, Some(2));
        reg.reset(GroupKey::Hero);
        assert!(reg.is_empty(GroupKey::Hero));
        let keys: Vec<_> = reg.keys().collect();
        assert_eq!(keys, vec![GroupKey::Hero, GroupKey::ProjectCards]);

        // a fresh mount repopulates the same slot
        reg.register(GroupKey::Hero, Some(9));
        assert_eq!(reg.handles(GroupKey::Hero), &[9]);
    }

    #[test]
    fn unknown_group_reads_as_empty() {
        let reg: Registry<u32> = Registry::new();
        assert!(reg.is_empty(GroupKey::ContactLinks));
        assert_eq!(reg.handles(GroupKey::ContactLinks), &[] as &[u32]);
    }
}
