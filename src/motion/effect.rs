//! Declarative effect descriptors.
//!
//! An [`EffectDescriptor`] describes *what* to animate — one visual
//! property, a numeric from/to range, timing, stagger, and the visibility
//! trigger — without naming the primitive that drives it. The player
//! interprets a set of descriptors as CSS transitions; tests evaluate the
//! same curves numerically.

/// Visual property a descriptor animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimProperty {
    Opacity,
    TranslateY,
    TranslateX,
    Scale,
    Blur,
}

/// Inline-style slot a property writes to. The translate and scale
/// properties all compose into `transform`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleSlot {
    Opacity,
    Transform,
    Filter,
}

impl AnimProperty {
    pub fn style_slot(&self) -> StyleSlot {
        match self {
            AnimProperty::Opacity => StyleSlot::Opacity,
            AnimProperty::TranslateY | AnimProperty::TranslateX | AnimProperty::Scale => {
                StyleSlot::Transform
            }
            AnimProperty::Blur => StyleSlot::Filter,
        }
    }
}

/// Monotonic easing curve mapping elapsed fraction to interpolation
/// fraction, with `eval(0) == 0` and `eval(1) == 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
    /// Slight overshoot at the end, for card pops.
    BackOut,
}

impl Easing {
    pub fn eval(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::BackOut => {
                let c1 = 1.70158;
                let c3 = c1 + 1.0;
                1.0 + c3 * (t - 1.0).powi(3) + c1 * (t - 1.0).powi(2)
            }
        }
    }

    /// CSS timing-function equivalent used by the transition interpreter.
    pub fn css(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseOut => "cubic-bezier(0.33, 1, 0.68, 1)",
            Easing::EaseInOut => "cubic-bezier(0.65, 0, 0.35, 1)",
            Easing::BackOut => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }
}

/// Visibility condition arming an effect set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerSpec {
    /// Viewport-height percentage the group's top edge must cross before
    /// the trigger fires. 100 fires as soon as any part is visible.
    pub threshold_percent: f64,
    /// One-shot triggers fire at most once per mount cycle.
    pub once: bool,
}

impl TriggerSpec {
    /// Root margin shrinking the observation band so intersection starts
    /// when the target's top edge reaches `threshold_percent` of the
    /// viewport height.
    pub fn root_margin(&self) -> String {
        let pct = self.threshold_percent.clamp(0.0, 100.0);
        format!("0px 0px -{}% 0px", 100.0 - pct)
    }
}

/// One animated property track. Immutable once constructed; groups are
/// armed with a slice of descriptors sharing a trigger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectDescriptor {
    pub property: AnimProperty,
    pub from: f64,
    pub to: f64,
    pub duration_ms: u32,
    pub stagger_ms: u32,
    pub easing: Easing,
    pub trigger: TriggerSpec,
}

/// Which end of the descriptors to realize as inline styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleEnd {
    From,
    To,
}

/// Computed inline styles for one element, one value per touched slot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InlineStyle {
    pub opacity: Option<String>,
    pub transform: Option<String>,
    pub filter: Option<String>,
}

/// Realizes one end of an effect set as inline style values. When several
/// descriptors target the same property, the last one wins.
pub fn style_at(effects: &[EffectDescriptor], end: StyleEnd) -> InlineStyle {
    let mut values: Vec<(AnimProperty, f64)> = Vec::new();
    for e in effects {
        let v = match end {
            StyleEnd::From => e.from,
            StyleEnd::To => e.to,
        };
        if let Some(slot) = values.iter_mut().find(|(p, _)| *p == e.property) {
            slot.1 = v;
        } else {
            values.push((e.property, v));
        }
    }

    let mut style = InlineStyle::default();
    let mut transform_parts: Vec<String> = Vec::new();
    for (prop, v) in values {
        match prop {
            AnimProperty::Opacity => style.opacity = Some(format!("{v}")),
            AnimProperty::TranslateY => transform_parts.push(format!("translateY({v}px)")),
            AnimProperty::TranslateX => transform_parts.push(format!("translateX({v}px)")),
            AnimProperty::Scale => transform_parts.push(format!("scale({v})")),
            AnimProperty::Blur => style.filter = Some(format!("blur({v}px)")),
        }
    }
    if !transform_parts.is_empty() {
        style.transform = Some(transform_parts.join(" "));
    }
    style
}

/// CSS `transition` value covering every slot the effect set touches,
/// delayed by `delay_ms` (the per-element stagger offset).
pub fn transition_value(effects: &[EffectDescriptor], delay_ms: u32) -> String {
    let mut parts: Vec<String> = Vec::new();
    for slot in [StyleSlot::Opacity, StyleSlot::Transform, StyleSlot::Filter] {
        let Some(e) = effects.iter().filter(|e| e.property.style_slot() == slot).last() else {
            continue;
        };
        let name = match slot {
            StyleSlot::Opacity => "opacity",
            StyleSlot::Transform => "transform",
            StyleSlot::Filter => "filter",
        };
        parts.push(format!(
            "{name} {}ms {} {delay_ms}ms",
            e.duration_ms,
            e.easing.css()
        ));
    }
    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIGGER: TriggerSpec = TriggerSpec {
        threshold_percent: 70.0,
        once: true,
    };

    fn fade_up() -> Vec<EffectDescriptor> {
        vec![
            EffectDescriptor {
                property: AnimProperty::Opacity,
                from: 0.0,
                to: 1.0,
                duration_ms: 700,
                stagger_ms: 150,
                easing: Easing::EaseOut,
                trigger: TRIGGER,
            },
            EffectDescriptor {
                property: AnimProperty::TranslateY,
                from: 50.0,
                to: 0.0,
                duration_ms: 700,
                stagger_ms: 150,
                easing: Easing::EaseOut,
                trigger: TRIGGER,
            },
        ]
    }

    #[test]
    fn easing_endpoints_are_exact() {
        for easing in [
            Easing::Linear,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::BackOut,
        ] {
            assert!(easing.eval(0.0).abs() < 1e-9, "{easing:?} at 0");
            assert!((easing.eval(1.0) - 1.0).abs() < 1e-9, "{easing:?} at 1");
        }
    }

    #[test]
    fn easing_is_monotonic() {
        for easing in [Easing::Linear, Easing::EaseOut, Easing::EaseInOut] {
            let mut prev = easing.eval(0.0);
            for i in 1..=100 {
                let next = easing.eval(i as f64 / 100.0);
                assert!(next >= prev, "{easing:?} decreased at step {i}");
                prev = next;
            }
        }
    }

    #[test]
    fn easing_clamps_out_of_range_input() {
        assert_eq!(Easing::EaseOut.eval(-1.0), 0.0);
        assert_eq!(Easing::EaseOut.eval(2.0), 1.0);
    }

    #[test]
    fn style_at_realizes_both_ends() {
        let effects = fade_up();
        let from = style_at(&effects, StyleEnd::From);
        assert_eq!(from.opacity.as_deref(), Some("0"));
        assert_eq!(from.transform.as_deref(), Some("translateY(50px)"));
        assert_eq!(from.filter, None);

        let to = style_at(&effects, StyleEnd::To);
        assert_eq!(to.opacity.as_deref(), Some("1"));
        assert_eq!(to.transform.as_deref(), Some("translateY(0px)"));
    }

    #[test]
    fn last_descriptor_wins_per_property() {
        let mut effects = fade_up();
        effects.push(EffectDescriptor {
            property: AnimProperty::Opacity,
            from: 0.5,
            to: 0.9,
            duration_ms: 300,
            stagger_ms: 0,
            easing: Easing::Linear,
            trigger: TRIGGER,
        });
        let from = style_at(&effects, StyleEnd::From);
        assert_eq!(from.opacity.as_deref(), Some("0.5"));
        let to = style_at(&effects, StyleEnd::To);
        assert_eq!(to.opacity.as_deref(), Some("0.9"));
    }

    #[test]
    fn transform_properties_compose() {
        let mut effects = fade_up();
        effects.push(EffectDescriptor {
            property: AnimProperty::Scale,
            from: 0.9,
            to: 1.0,
            duration_ms: 700,
            stagger_ms: 150,
            easing: Easing::BackOut,
            trigger: TRIGGER,
        });
        let from = style_at(&effects, StyleEnd::From);
        assert_eq!(
            from.transform.as_deref(),
            Some("translateY(50px) scale(0.9)")
        );
    }

    #[test]
    fn transition_value_covers_touched_slots_with_delay() {
        let effects = fade_up();
        let t = transition_value(&effects, 300);
        assert!(t.contains("opacity 700ms"));
        assert!(t.contains("transform 700ms"));
        assert!(t.contains("300ms"));
        assert!(!t.contains("filter"));
    }

    #[test]
    fn root_margin_shrinks_band_to_threshold() {
        let t = TriggerSpec {
            threshold_percent: 70.0,
            once: true,
        };
        assert_eq!(t.root_margin(), "0px 0px -30% 0px");
        let full = TriggerSpec {
            threshold_percent: 100.0,
            once: true,
        };
        assert_eq!(full.root_margin(), "0px 0px -0% 0px");
    }
}
