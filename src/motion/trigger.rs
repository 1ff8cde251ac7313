//! One-shot and continuous visibility triggers.
//!
//! Each armed group carries a [`TriggerState`]; a one-shot trigger moves
//! armed→fired exactly once, the first time its region crosses the viewport
//! threshold, and never re-fires no matter how often the threshold is
//! re-crossed afterwards. Continuous triggers fire on every frame while
//! intersecting.

use super::effect::TriggerSpec;
use super::registry::GroupKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerState {
    pub armed: bool,
    pub fired: bool,
}

#[derive(Debug, Default)]
pub struct TriggerSet {
    entries: Vec<(GroupKey, TriggerSpec, TriggerState)>,
}

impl TriggerSet {
    pub fn new() -> Self {
        TriggerSet {
            entries: Vec::new(),
        }
    }

    /// Arms a group. Arming an already-armed group is a no-op so a re-run
    /// of the arming pass cannot reset fired state mid-cycle.
    pub fn arm(&mut self, key: GroupKey, spec: TriggerSpec) {
        if self.entries.iter().any(|(k, _, _)| *k == key) {
            return;
        }
        self.entries.push((
            key,
            spec,
            TriggerState {
                armed: true,
                fired: false,
            },
        ));
    }

    pub fn state(&self, key: GroupKey) -> Option<TriggerState> {
        self.entries
            .iter()
            .find(|(k, _, _)| *k == key)
            .map(|(_, _, s)| *s)
    }

    /// Reports an intersection for one group. Returns `true` when the
    /// associated effect should run: always for continuous triggers while
    /// intersecting, exactly once for one-shot triggers. Unarmed groups
    /// never fire.
    pub fn try_fire(&mut self, key: GroupKey) -> bool {
        let Some((_, spec, state)) = self.entries.iter_mut().find(|(k, _, _)| *k == key) else {
            return false;
        };
        if !state.armed {
            return false;
        }
        if !spec.once {
            return true;
        }
        if state.fired {
            return false;
        }
        state.fired = true;
        true
    }

    /// Resolves a batch of same-frame crossings: the groups that should
    /// fire, in arming order, with one-shot state updated. The input order
    /// is irrelevant.
    pub fn fire_batch(&mut self, crossed: &[GroupKey]) -> Vec<GroupKey> {
        let armed_order: Vec<GroupKey> = self.entries.iter().map(|(k, _, _)| *k).collect();
        armed_order
            .into_iter()
            .filter(|k| crossed.contains(k) && self.try_fire(*k))
            .collect()
    }

    /// Disarms everything. A new mount cycle starts from a clean set.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::registry::SectionId;

    fn once(threshold: f64) -> TriggerSpec {
        TriggerSpec {
            threshold_percent: threshold,
            once: true,
        }
    }

    fn continuous() -> TriggerSpec {
        TriggerSpec {
            threshold_percent: 100.0,
            once: false,
        }
    }

    #[test]
    fn one_shot_fires_exactly_once() {
        let mut set = TriggerSet::new();
        set.arm(GroupKey::ProjectCards, once(70.0));

        assert!(set.try_fire(GroupKey::ProjectCards));
        // scrolling away and back re-crosses the threshold repeatedly
        for _ in 0..5 {
            assert!(!set.try_fire(GroupKey::ProjectCards));
        }
        let state = set.state(GroupKey::ProjectCards).unwrap();
        assert!(state.armed && state.fired);
    }

    #[test]
    fn continuous_fires_every_report() {
        let mut set = TriggerSet::new();
        set.arm(GroupKey::HeroBlobs, continuous());
        for _ in 0..3 {
            assert!(set.try_fire(GroupKey::HeroBlobs));
        }
    }

    #[test]
    fn unarmed_group_never_fires() {
        let mut set = TriggerSet::new();
        assert!(!set.try_fire(GroupKey::Hero));
        assert_eq!(set.state(GroupKey::Hero), None);
    }

    #[test]
    fn rearming_does_not_reset_fired_state() {
        let mut set = TriggerSet::new();
        set.arm(GroupKey::Hero, once(100.0));
        assert!(set.try_fire(GroupKey::Hero));
        set.arm(GroupKey::Hero, once(100.0));
        assert!(!set.try_fire(GroupKey::Hero));
    }

    #[test]
    fn batch_fires_in_arming_order() {
        let mut set = TriggerSet::new();
        set.arm(GroupKey::Section(SectionId::About), once(80.0));
        set.arm(GroupKey::Paragraphs, once(70.0));
        set.arm(GroupKey::SkillCards, once(70.0));

        // crossings reported out of order in the same frame
        let fired = set.fire_batch(&[
            GroupKey::SkillCards,
            GroupKey::Section(SectionId::About),
            GroupKey::Paragraphs,
        ]);
        assert_eq!(
            fired,
            vec![
                GroupKey::Section(SectionId::About),
                GroupKey::Paragraphs,
                GroupKey::SkillCards
            ]
        );

        // second frame crossing the same bands fires nothing
        assert!(set
            .fire_batch(&[GroupKey::SkillCards, GroupKey::Paragraphs])
            .is_empty());
    }

    #[test]
    fn clear_starts_a_fresh_cycle() {
        let mut set = TriggerSet::new();
        set.arm(GroupKey::Hero, once(100.0));
        assert!(set.try_fire(GroupKey::Hero));
        set.clear();
        set.arm(GroupKey::Hero, once(100.0));
        assert!(set.try_fire(GroupKey::Hero));
    }
}
