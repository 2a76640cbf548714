use proptest::prelude::*;
use radar_rs::animation::{AnimationState, ManualFrameScheduler};
use radar_rs::api::{RadarChartEngine, RadarChartOptions, RadarGeometry, build_radar_render_frame};
use radar_rs::core::RadialLayout;
use radar_rs::render::{Color, TextHAlign};

const LABELS: [&str; 6] = ["a", "b", "c", "d", "e", "f"];

fn labels() -> [String; 6] {
    LABELS.map(str::to_owned)
}

proptest! {
    #[test]
    fn interpolation_is_monotonic_per_axis(
        start in prop::array::uniform6(0.0f64..100.0),
        target in prop::array::uniform6(0.0f64..100.0),
        t1 in 0.0f64..=500.0,
        t2 in 0.0f64..=500.0,
    ) {
        let (early, late) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
        let state = AnimationState::begin(start, target, 0.0, 500.0);
        let at_early = state.sample(early);
        let at_late = state.sample(late);

        for axis in 0..6 {
            let (lo, hi) = (start[axis].min(target[axis]), start[axis].max(target[axis]));
            prop_assert!(at_early[axis] >= lo - 1e-9 && at_early[axis] <= hi + 1e-9);
            if target[axis] >= start[axis] {
                prop_assert!(at_early[axis] <= at_late[axis] + 1e-9);
            } else {
                prop_assert!(at_early[axis] + 1e-9 >= at_late[axis]);
            }
        }
        prop_assert_eq!(state.sample(500.0), target);
        prop_assert_eq!(state.sample(0.0), start);
    }

    #[test]
    fn engine_lands_exactly_on_targets(
        first in prop::array::uniform6(0.1f64..10.0),
        second in prop::array::uniform6(0.0f64..10.0),
        duration in 1.0f64..2_000.0,
    ) {
        let mut engine = RadarChartEngine::new(ManualFrameScheduler::new());
        let options = RadarChartOptions::default().with_animation_duration_ms(duration);
        engine.configure(&first, &LABELS, options, 0.0).expect("first");
        prop_assert_eq!(engine.tick(duration).expect("settle").values, first);

        engine.configure(&second, &LABELS, options, 5_000.0).expect("second");
        prop_assert_eq!(engine.tick(5_000.0).expect("start").values, first);
        prop_assert_eq!(engine.tick(5_000.0 + duration).expect("end").values, second);
    }

    #[test]
    fn vertices_stay_inside_the_chart_radius(
        values in prop::array::uniform6(-5.0f64..20.0),
        size in 50.0f64..800.0,
    ) {
        let geometry = RadarGeometry::build(&values, &labels(), size, 10.0);
        let layout = RadialLayout::for_size(size);
        for (axis, vertex) in geometry.polygon.iter().enumerate() {
            let distance = vertex.distance_to(geometry.center);
            prop_assert!(distance <= layout.radius() + 1e-9);
            let expected = layout.radius() * values[axis].clamp(0.0, 10.0) / 10.0;
            prop_assert!((distance - expected).abs() <= 1e-9 * size);
        }
        // Signed: on tiny charts the clearance bound is negative.
        for value in values {
            let distance = layout.value_label_distance(value, 10.0);
            prop_assert!(distance <= geometry.label_radius - 25.0 + 1e-9);
        }
    }

    #[test]
    fn label_alignment_follows_side_of_center(size in 50.0f64..800.0) {
        let geometry = RadarGeometry::build(&[5.0; 6], &labels(), size, 10.0);
        let aligns: Vec<TextHAlign> = geometry.labels.iter().map(|label| label.h_align).collect();
        prop_assert_eq!(
            aligns,
            vec![
                TextHAlign::Center,
                TextHAlign::Left,
                TextHAlign::Left,
                TextHAlign::Center,
                TextHAlign::Right,
                TextHAlign::Right,
            ]
        );
    }

    #[test]
    fn radar_frames_are_deterministic_and_valid(
        values in prop::array::uniform6(0.0f64..10.0),
        size in 50.0f64..800.0,
    ) {
        let geometry = RadarGeometry::build(&values, &labels(), size, 10.0);
        let color = Color::rgba8(0, 122, 255, 0.4);
        let first = build_radar_render_frame(&geometry, color, &Default::default());
        let second = build_radar_render_frame(&geometry, color, &Default::default());

        prop_assert_eq!(&first, &second);
        prop_assert!(first.validate().is_ok());
    }
}
