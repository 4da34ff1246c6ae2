use std::sync::Arc;

use layer_gallery::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn every_category_lists_examples() {
    let catalog = catalog();
    let categories = catalog.list_categories();
    assert!(!categories.is_empty());
    for category in categories {
        let examples = catalog.list_examples(category).unwrap();
        assert!(!examples.is_empty(), "{category} is empty");
    }
}

#[test]
fn every_enumerated_descriptor_has_a_known_layer() {
    let catalog = catalog();
    for category in catalog.list_categories() {
        for example in catalog.list_examples(category).unwrap() {
            let d = catalog.get_descriptor(category, example).unwrap();
            assert!(LayerKind::ALL.contains(&d.layer));
            assert_eq!(d.layer.name().parse::<LayerKind>().unwrap(), d.layer);
        }
    }
}

#[test]
fn get_descriptor_is_idempotent() {
    let catalog = catalog();
    for (category, example, _) in catalog.iter() {
        let a = catalog.get_descriptor(category, example).unwrap();
        let b = catalog.get_descriptor(category, example).unwrap();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a, b);
    }
}

#[test]
fn unknown_labels_are_not_found() {
    let catalog = catalog();
    let err = catalog
        .get_descriptor("nonexistent", "nonexistent")
        .unwrap_err();
    assert!(err.is_not_found());
    assert!(matches!(err, Error::CategoryNotFound { .. }));

    let err = catalog.get_descriptor("Geo Layers", "KMLLayer").unwrap_err();
    assert!(matches!(err, Error::ExampleNotFound { .. }));
    assert!(catalog.list_examples("nonexistent").unwrap_err().is_not_found());
}

#[test]
fn static_data_resolves_to_identical_sequence() {
    let catalog = catalog();
    let mut checked = 0;
    for (_, _, d) in catalog.iter() {
        if d.data.is_deferred() {
            continue;
        }
        let a = d.data.resolve();
        let b = d.data.resolve();
        assert!(Arc::ptr_eq(&a, &b));
        checked += 1;
    }
    assert!(checked > 0);
}

#[test]
fn only_perf_examples_defer_data() {
    let deferred: Vec<_> = catalog()
        .iter()
        .filter(|(_, _, d)| d.data.is_deferred())
        .map(|(_, e, _)| e)
        .collect();
    assert_eq!(deferred, vec!["GPUGridLayer (1M)", "GPUGridLayer (5M)"]);
}

#[test]
fn trips_controls_clamp_or_reject_host_values() {
    let catalog = catalog();
    let mut selection = Selection::new(catalog, "Geo Layers", "TripsLayer").unwrap();
    let control = *selection
        .descriptor(catalog)
        .unwrap()
        .control("currentTime")
        .unwrap();
    assert_eq!(control, RangeControl::new(0.0, 1200.0, 12.0));
    assert_eq!(selection.controls().get("currentTime"), Some(500.0));

    assert_eq!(
        selection
            .set_control("currentTime", 1500.0, ControlPolicy::Clamp)
            .unwrap(),
        1200.0
    );
    assert_eq!(
        selection
            .set_control("currentTime", 601.0, ControlPolicy::Clamp)
            .unwrap(),
        600.0
    );
    assert!(selection
        .set_control("currentTime", -1.0, ControlPolicy::Reject)
        .is_err());
    assert!(selection
        .set_control("currentTime", 601.0, ControlPolicy::Reject)
        .is_err());
    assert_eq!(selection.controls().get("currentTime"), Some(600.0));
}

#[test]
fn non_finite_control_values_leave_selection_unchanged() {
    let catalog = catalog();
    let mut selection = Selection::new(catalog, "Geo Layers", "TripsLayer").unwrap();
    selection
        .set_control("currentTime", 600.0, ControlPolicy::Clamp)
        .unwrap();

    let nan = selection.set_control("currentTime", f64::NAN, ControlPolicy::Clamp);
    assert!(matches!(nan, Err(Error::ControlNotFinite { .. })));
    let inf = selection.set_control("currentTime", f64::INFINITY, ControlPolicy::Clamp);
    assert!(matches!(inf, Err(Error::ControlNotFinite { .. })));
    assert_eq!(selection.controls().get("currentTime"), Some(600.0));
}

#[test]
fn deterministic_accessors_repeat_across_random_sources() {
    let catalog = catalog();
    let ctx = AccessorContext::at(3);
    for (category, example, d) in catalog.iter() {
        if d.data.is_deferred() {
            continue;
        }
        let records = d.data.resolve();
        let Some(record) = records.first() else {
            continue;
        };
        for (name, prop) in d.props.iter() {
            let Prop::Accessor(accessor) = prop else {
                continue;
            };
            if accessor.is_randomized() {
                continue;
            }
            let mut a = StdRng::seed_from_u64(1);
            let mut b = StdRng::seed_from_u64(2);
            assert_eq!(
                accessor.evaluate(record, &ctx, &mut a),
                accessor.evaluate(record, &ctx, &mut b),
                "{category}/{example}.{name}"
            );
            assert!(
                accessor.evaluate(record, &ctx, &mut a).is_some(),
                "{category}/{example}.{name} rejected its own data"
            );
        }
    }
}

#[test]
fn randomized_accessors_repeat_with_equal_seeds() {
    let d = catalog()
        .get_descriptor("Mesh Layers", "SimpleMeshLayer")
        .unwrap();
    let records = d.data.resolve();
    let ctx = AccessorContext::new();
    let mut a = StdRng::seed_from_u64(99);
    let mut b = StdRng::seed_from_u64(99);
    for record in records.iter().take(5) {
        assert_eq!(
            d.props.evaluate("getColor", record, &ctx, &mut a),
            d.props.evaluate("getColor", record, &ctx, &mut b)
        );
    }
}

#[test]
fn built_in_catalog_validates() {
    assert!(catalog().validate().is_ok());
    assert_eq!(catalog().len(), 13);
}
