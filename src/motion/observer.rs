//! Browser glue for one mount cycle.
//!
//! [`MotionContext`] ties the registry, trigger set, and player to real
//! `IntersectionObserver`s. Arming is deferred to a single animation frame
//! so it runs against committed layout; everything acquired along the way
//! lands in the cycle's [`Disposer`] and is released on unmount, whether or
//! not any animation finished.

use leptos::prelude::*;
use leptos_use::use_window_scroll;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{
    HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use super::effect::EffectDescriptor;
use super::player;
use super::registry::{GroupKey, Registry};
use super::trigger::TriggerSet;
use super::Disposer;

/// A group and the effect set to run when its trigger fires.
#[derive(Clone, Copy)]
pub struct RevealPlan {
    pub group: GroupKey,
    pub effects: &'static [EffectDescriptor],
}

/// Per-mount-cycle orchestrator handle, shared through context. Copyable;
/// all state lives in arena-stored values owned by the mounting component.
#[derive(Clone, Copy)]
pub struct MotionContext {
    registry: StoredValue<Registry<HtmlElement>, LocalStorage>,
    triggers: StoredValue<TriggerSet>,
    disposer: StoredValue<Disposer, LocalStorage>,
}

pub fn use_motion() -> MotionContext {
    expect_context::<MotionContext>()
}

impl MotionContext {
    /// Creates a fresh cycle, provides it as context, and hooks teardown
    /// into the owner's cleanup so release is unconditional.
    pub fn provide() -> Self {
        let ctx = MotionContext {
            registry: StoredValue::new_local(Registry::new()),
            triggers: StoredValue::new(TriggerSet::new()),
            disposer: StoredValue::new_local(Disposer::new()),
        };
        provide_context(ctx);
        on_cleanup(move || ctx.teardown());
        ctx
    }

    /// Collects a mounted element into a group. Unmounted refs (`None`) are
    /// ignored; re-registration is idempotent.
    pub fn register(&self, key: GroupKey, el: Option<HtmlElement>) {
        self.registry.try_update_value(|r| r.register(key, el));
    }

    /// Clears a group before a mount cycle repopulates it.
    pub fn reset(&self, key: GroupKey) {
        self.registry.try_update_value(|r| r.reset(key));
    }

    /// Continuous effect path: offsets a group by `progress * max_offset_px`
    /// on every scroll sample. No trigger, no stagger, fully reversible.
    pub fn apply_parallax(&self, key: GroupKey, progress: f64, max_offset_px: f64) {
        self.registry
            .try_with_value(|r| player::apply_parallax(r.handles(key), progress, max_offset_px));
    }

    /// Schedules the arming pass for the next animation frame, after layout
    /// has committed. The pending frame callback is itself a disposable:
    /// tearing down before it runs cancels it.
    pub fn arm_when_ready(&self, plans: Vec<RevealPlan>) {
        let ctx = *self;
        match request_animation_frame_with_handle(move || {
            for plan in &plans {
                ctx.arm_reveal(plan);
            }
        }) {
            Ok(handle) => {
                self.disposer
                    .try_update_value(|d| d.push(move || handle.cancel()));
            }
            Err(err) => log::error!("could not schedule arming pass: {err:?}"),
        }
    }

    fn arm_reveal(&self, plan: &RevealPlan) {
        let Some(first) = plan.effects.first() else {
            return;
        };
        let handles: Vec<HtmlElement> = self
            .registry
            .try_with_value(|r| r.handles(plan.group).to_vec())
            .unwrap_or_default();
        if handles.is_empty() {
            // group never mounted; nothing to animate
            log::debug!("no handles registered for {:?}", plan.group);
            return;
        }

        self.triggers
            .try_update_value(|t| t.arm(plan.group, first.trigger));
        // hide before first paint so the reveal has something to reveal
        player::apply_initial(&handles, plan.effects);

        let group = plan.group;
        let effects = plan.effects;
        let triggers = self.triggers;
        let once = first.trigger.once;
        let cb_handles = handles.clone();
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, obs: IntersectionObserver| {
                let intersecting = entries.iter().any(|e| {
                    e.dyn_into::<IntersectionObserverEntry>()
                        .map(|entry| entry.is_intersecting())
                        .unwrap_or(false)
                });
                if !intersecting {
                    return;
                }
                let fire = triggers
                    .try_update_value(|t| t.try_fire(group))
                    .unwrap_or(false);
                if fire {
                    player::play(&cb_handles, effects);
                    if once {
                        obs.disconnect();
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_root_margin(&first.trigger.root_margin());
        let observer = match IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        ) {
            Ok(observer) => observer,
            Err(err) => {
                log::error!("could not observe {group:?}: {err:?}");
                return;
            }
        };
        // the first handle's top edge is the group's trigger region
        observer.observe(&handles[0]);

        self.disposer.try_update_value(|d| {
            d.push(move || {
                observer.disconnect();
                drop(callback);
            });
        });
    }

    /// Releases every observer, pending frame callback, and the scroll
    /// lock, then forgets all handles. Safe to call repeatedly.
    pub fn teardown(&self) {
        self.disposer.try_update_value(|d| d.dispose());
        self.triggers.try_update_value(|t| t.clear());
        self.registry.try_update_value(|r| r.clear());
        set_body_scroll_lock(false);
    }
}

/// Frame-coalesced window scroll position, shared through context so the
/// navbar and footer derive their state from one sample stream.
#[derive(Clone, Copy)]
pub struct ScrollState {
    pub y: Signal<f64>,
}

pub fn provide_scroll_state() -> ScrollState {
    let (_, y) = use_window_scroll();
    let state = ScrollState { y };
    provide_context(state);
    state
}

pub fn use_scroll_state() -> ScrollState {
    expect_context::<ScrollState>()
}

/// Suppresses or restores document scrolling. Single logical owner: the
/// overlay controller; the last writer restores the default.
pub fn set_body_scroll_lock(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let value = if locked { "hidden" } else { "auto" };
    let _ = body.style().set_property("overflow", value);
}

/// Smooth-scrolls the window back to the top.
pub fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let opts = web_sys::ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}
