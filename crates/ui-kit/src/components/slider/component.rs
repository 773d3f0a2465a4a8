use dioxus::prelude::*;
use dioxus_primitives::slider as prim;

pub use dioxus_primitives::slider::SliderValue;

#[component]
pub fn SliderRoot(mut props: prim::SliderProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "slider", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Slider { ..props }
    }
}

#[component]
pub fn SliderTrack(mut props: prim::SliderTrackProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "slider-track", None, false));

    rsx! {
        prim::SliderTrack { ..props }
    }
}

#[component]
pub fn SliderRange(mut props: prim::SliderRangeProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "slider-range", None, false));

    rsx! {
        prim::SliderRange { ..props }
    }
}

#[component]
pub fn SliderThumb(mut props: prim::SliderThumbProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "slider-thumb", None, false));

    rsx! {
        prim::SliderThumb { ..props }
    }
}

/// Snap `value` onto the `step` grid starting at `min`, inside `[min, max]`.
pub fn snap_to_step(value: f64, min: f64, max: f64, step: f64) -> f64 {
    if step <= 0.0 || !value.is_finite() {
        return value.clamp(min, max);
    }
    let steps = ((value - min) / step).round();
    let snapped = min + steps * step;
    ((snapped * 1e9).round() / 1e9).clamp(min, max)
}

/// Single-thumb slider reporting plain numbers.
#[component]
pub fn SingleSlider(
    #[props(default)] id: Option<String>,
    #[props(default = 0.0)] min: f64,
    #[props(default = 100.0)] max: f64,
    #[props(default = 1.0)] step: f64,
    default_value: f64,
    #[props(default = false)] disabled: bool,
    on_change: EventHandler<f64>,
) -> Element {
    let start = snap_to_step(default_value, min, max, step);

    rsx! {
        SliderRoot {
            id,
            default_value: SliderValue::Single(start),
            min,
            max,
            step,
            disabled,
            on_value_change: move |value: SliderValue| {
                let SliderValue::Single(v) = value;
                on_change.call(snap_to_step(v, min, max, step));
            },
            SliderTrack {
                SliderRange {}
            }
            SliderThumb {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn snapping_rounds_to_the_nearest_step() {
        assert_eq!(snap_to_step(47.0, 0.0, 100.0, 5.0), 45.0);
        assert_eq!(snap_to_step(48.0, 0.0, 100.0, 5.0), 50.0);
        assert_eq!(snap_to_step(0.35, 0.0, 1.0, 0.1), 0.4);
    }

    #[test]
    fn snapping_respects_bounds_and_offset_min() {
        assert_eq!(snap_to_step(120.0, 0.0, 100.0, 10.0), 100.0);
        assert_eq!(snap_to_step(4.0, 3.0, 10.0, 2.0), 5.0);
        assert_eq!(snap_to_step(7.0, 0.0, 10.0, 0.0), 7.0);
    }
}
