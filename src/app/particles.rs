use leptos::prelude::*;

const PARTICLE_COUNT: u32 = 50;
const STAR_COUNT: u32 = 80;

/// Deterministic scramble of a seed into [0, 1). Stable across the server
/// render and client hydration, so the generated styles never mismatch.
fn hash01(seed: u32) -> f64 {
    let mut x = seed.wrapping_mul(0x9E37_79B9).wrapping_add(0x85EB_CA6B);
    x ^= x >> 16;
    x = x.wrapping_mul(0x7FEB_352D);
    x ^= x >> 15;
    x = x.wrapping_mul(0x846C_A68B);
    x ^= x >> 16;
    f64::from(x) / (f64::from(u32::MAX) + 1.0)
}

fn particle_style(i: u32) -> String {
    let left = hash01(i) * 100.0;
    let top = hash01(i.wrapping_add(1000)) * 100.0;
    let size = 2.0 + hash01(i.wrapping_add(2000)) * 4.0;
    let delay = hash01(i.wrapping_add(3000)) * 8.0;
    let duration = 6.0 + hash01(i.wrapping_add(4000)) * 10.0;
    format!(
        "left:{left:.2}%;top:{top:.2}%;width:{size:.1}px;height:{size:.1}px;\
         animation-delay:{delay:.2}s;animation-duration:{duration:.2}s"
    )
}

fn star_style(i: u32) -> String {
    let left = hash01(i.wrapping_add(5000)) * 100.0;
    let top = hash01(i.wrapping_add(6000)) * 100.0;
    let delay = hash01(i.wrapping_add(7000)) * 5.0;
    format!("left:{left:.2}%;top:{top:.2}%;animation-delay:{delay:.2}s")
}

/// Ambient background: drifting particles plus a twinkling star field.
/// Purely decorative, never intercepts pointer events.
#[component]
pub fn ParticleField() -> impl IntoView {
    view! {
        <div class="fixed inset-0 -z-10 overflow-hidden pointer-events-none" aria-hidden="true">
            {(0..STAR_COUNT)
                .map(|i| view! { <span class="star" style=star_style(i)></span> })
                .collect_view()}
            {(0..PARTICLE_COUNT)
                .map(|i| view! { <span class="particle" style=particle_style(i)></span> })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash01_stays_in_unit_interval() {
        for i in 0..10_000 {
            let v = hash01(i);
            assert!((0.0..1.0).contains(&v), "hash01({i}) = {v}");
        }
    }

    #[test]
    fn styles_are_deterministic() {
        assert_eq!(particle_style(7), particle_style(7));
        assert_eq!(star_style(42), star_style(42));
    }

    #[test]
    fn styles_cover_every_field() {
        let s = particle_style(0);
        for field in ["left:", "top:", "width:", "height:", "animation-delay:"] {
            assert!(s.contains(field), "missing {field} in {s}");
        }
        let star = star_style(0);
        assert!(star.contains("left:") && star.contains("animation-delay:"));
    }
}
