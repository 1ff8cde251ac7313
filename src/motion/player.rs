//! Effect-set interpreter.
//!
//! Plays a set of [`EffectDescriptor`]s over an ordered slice of element
//! handles: the `from` state is written synchronously with transitions
//! disabled (so it lands before the next paint), then each element
//! transitions to the `to` state with a per-element stagger delay. The
//! descriptors never name a driver; this interpreter realizes them as CSS
//! transitions, and the host compositor time-slices the rest.

use web_sys::HtmlElement;

use super::effect::{style_at, transition_value, EffectDescriptor, InlineStyle, StyleEnd};

/// Start offset of handle `index` relative to handle 0. Stagger order is
/// registration order.
pub fn stagger_delay_ms(index: usize, stagger_ms: u32) -> u32 {
    index as u32 * stagger_ms
}

/// Stagger step shared by an effect set.
pub fn set_stagger_ms(effects: &[EffectDescriptor]) -> u32 {
    effects.iter().map(|e| e.stagger_ms).max().unwrap_or(0)
}

fn write_style(el: &HtmlElement, style: &InlineStyle, transition: &str) {
    let css = el.style();
    let _ = css.set_property("transition", transition);
    if let Some(v) = &style.opacity {
        let _ = css.set_property("opacity", v);
    }
    if let Some(v) = &style.transform {
        let _ = css.set_property("transform", v);
    }
    if let Some(v) = &style.filter {
        let _ = css.set_property("filter", v);
    }
}

/// Writes the `from` state immediately, with transitions disabled. Used at
/// arm time so below-the-fold elements are hidden before their trigger
/// fires, and again by [`play`] for elements animated without pre-arming.
pub fn apply_initial(handles: &[HtmlElement], effects: &[EffectDescriptor]) {
    if effects.is_empty() {
        return;
    }
    let from = style_at(effects, StyleEnd::From);
    for el in handles {
        write_style(el, &from, "none");
    }
}

/// Runs an effect set over a handle sequence. Safe to call with an empty
/// sequence. Later calls targeting the same property on the same handles
/// win outright; inline-style assignment gives no blending.
pub fn play(handles: &[HtmlElement], effects: &[EffectDescriptor]) {
    if handles.is_empty() || effects.is_empty() {
        return;
    }

    apply_initial(handles, effects);
    let stagger = set_stagger_ms(effects);
    let to = style_at(effects, StyleEnd::To);
    for (i, el) in handles.iter().enumerate() {
        // reading layout flushes the from state before the transition arms
        let _ = el.offset_width();
        let transition = transition_value(effects, stagger_delay_ms(i, stagger));
        write_style(el, &to, &transition);
    }
}

/// Continuous parallax: offsets each handle by `progress * max_offset_px`.
pub fn apply_parallax(handles: &[HtmlElement], progress: f64, max_offset_px: f64) {
    let offset = progress.clamp(0.0, 1.0) * max_offset_px;
    for el in handles {
        let _ = el
            .style()
            .set_property("transform", &format!("translateY({offset:.1}px)"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::effect::{AnimProperty, Easing, TriggerSpec};

    fn descriptor(stagger_ms: u32) -> EffectDescriptor {
        EffectDescriptor {
            property: AnimProperty::Opacity,
            from: 0.0,
            to: 1.0,
            duration_ms: 600,
            stagger_ms,
            easing: Easing::EaseOut,
            trigger: TriggerSpec {
                threshold_percent: 70.0,
                once: true,
            },
        }
    }

    #[test]
    fn stagger_starts_scale_linearly_with_index() {
        for i in 0..8 {
            assert_eq!(stagger_delay_ms(i, 150), i as u32 * 150);
        }
        assert_eq!(stagger_delay_ms(5, 0), 0);
    }

    #[test]
    fn every_handle_starts_no_earlier_than_its_stagger_slot() {
        let s = 120;
        let mut prev = 0;
        for i in 0..6 {
            let delay = stagger_delay_ms(i, s);
            assert!(delay >= i as u32 * s);
            assert!(delay >= prev);
            prev = delay;
        }
    }

    #[test]
    fn set_stagger_takes_the_largest_step() {
        let effects = vec![descriptor(0), descriptor(200)];
        assert_eq!(set_stagger_ms(&effects), 200);
        assert_eq!(set_stagger_ms(&[]), 0);
    }
}
