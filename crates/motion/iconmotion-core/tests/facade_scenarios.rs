use iconmotion_core::{
    binding::{ActivationEvent, ActivationPredicate},
    catalog::MotionPresetCatalog,
    config::{AmbientConfig, AmbientConfigPatch},
    facade::{IconAnimationFacade, IconProps},
    motion::MotionType,
    observer::{HostReducedMotionSignal, SystemPreferenceObserver},
    scope::{ConfigScope, ScopeStack},
    transition::{Repeat, TransitionFeel},
    trigger::TriggerMode,
    variants::StateName,
};
use serde_json::json;

fn props_json(v: serde_json::Value) -> IconProps {
    serde_json::from_value(v).expect("props should parse")
}

/// it should resolve a looping pulse under a default scope end to end
#[test]
fn pulse_loop_end_to_end() {
    let ambient = AmbientConfig {
        animated: true,
        default_size: 24.0,
        default_stroke_width: 2.0,
    };
    let props = IconProps {
        motion_type: Some(MotionType::Pulse),
        trigger: Some(TriggerMode::Loop),
        ..Default::default()
    };
    let icon = IconAnimationFacade::resolve(&props, Some(&ambient), false);
    let anim = &icon.animation;

    assert!(anim.is_animated);
    assert_eq!(anim.transition.unwrap().repeat, Some(Repeat::Infinite));

    let pulse = MotionPresetCatalog::lookup(MotionType::Pulse);
    let wrapper = &anim.wrapper_bindings;
    assert_eq!(wrapper.activate, Some(StateName::Hover));
    assert_eq!(wrapper.activate_target(), pulse.variants.get(StateName::Hover));
    assert_eq!(wrapper.condition.predicate(), ActivationPredicate::WhileMounted);

    // active as soon as it is mounted, no interaction needed
    assert!(wrapper.condition.notify(ActivationEvent::Mounted));
    assert_eq!(wrapper.current_target(), pulse.variants.get(StateName::Hover));

    assert_eq!(icon.geometry.size, 24.0);
    assert_eq!(icon.geometry.stroke_width, 2.0);
}

/// it should default to scale on hover with library geometry when nothing is given
#[test]
fn bare_call_uses_defaults() {
    let icon = IconAnimationFacade::resolve(&IconProps::default(), None, false);
    assert!(icon.animation.is_animated);
    assert_eq!(icon.animation.motion_type, MotionType::Scale);
    assert_eq!(icon.animation.trigger, TriggerMode::Hover);
    assert_eq!(
        icon.animation.variants.as_ref(),
        Some(&MotionPresetCatalog::lookup(MotionType::Scale).variants)
    );
    assert_eq!(icon.geometry.size, 24.0);
    assert_eq!(icon.geometry.stroke_width, 2.0);
    assert!(icon.accessibility.is_decorative());
}

/// it should null out variants and transition when animation is disabled
#[test]
fn disabled_animation_hides_descriptor() {
    let props = IconProps {
        animated: Some(false),
        motion_type: Some(MotionType::Spin),
        trigger: Some(TriggerMode::Loop),
        ..Default::default()
    };
    let icon = IconAnimationFacade::resolve(&props, None, false);
    assert!(!icon.animation.is_animated);
    assert!(icon.animation.variants.is_none());
    assert!(icon.animation.transition.is_none());
    assert!(icon.animation.wrapper_bindings.is_noop());
    assert!(icon.animation.path_bindings.is_noop());
    assert!(icon.animation.draw_wrapper_bindings.is_noop());
}

/// it should degrade unknown motion types and triggers instead of failing
#[test]
fn lenient_props_parsing() {
    let props = props_json(json!({
        "motionType": "not-a-real-type",
        "trigger": "onClick",
        "size": 18
    }));
    assert_eq!(props.motion_type, Some(MotionType::Scale));
    assert_eq!(props.trigger, Some(TriggerMode::Hover));

    let props = props_json(json!({ "motionType": 7, "trigger": null }));
    assert_eq!(props.motion_type, Some(MotionType::Scale));
    assert_eq!(props.trigger, None);

    let props = props_json(json!({
        "motionType": "draw",
        "trigger": "inView",
        "strokeWidth": 1.5,
        "className": "hero",
        "aria-label": "Download"
    }));
    assert_eq!(props.motion_type, Some(MotionType::Draw));
    assert_eq!(props.trigger, Some(TriggerMode::InView));

    let icon = IconAnimationFacade::resolve(&props, None, false);
    assert_eq!(icon.geometry.stroke_width, 1.5);
    assert_eq!(icon.class_name.as_deref(), Some("hero"));
    assert_eq!(icon.accessibility.role, Some("img"));
    assert_eq!(icon.accessibility.aria_label.as_deref(), Some("Download"));
    assert!(!icon.accessibility.is_decorative());
}

/// it should drop wrongly typed props as if they were absent
#[test]
fn mistyped_props_are_ignored() {
    let props = props_json(json!({
        "animated": "yes",
        "size": "big",
        "strokeWidth": [1],
        "className": 5,
        "aria-label": false,
        "motionType": "rotate"
    }));
    assert_eq!(
        props,
        IconProps {
            motion_type: Some(MotionType::Rotate),
            ..Default::default()
        }
    );

    let ambient = AmbientConfig {
        animated: false,
        default_size: 32.0,
        default_stroke_width: 1.0,
    };
    let icon = IconAnimationFacade::resolve(&props, Some(&ambient), false);
    assert!(!icon.animation.is_animated);
    assert_eq!(icon.geometry.size, 32.0);
    assert_eq!(icon.geometry.stroke_width, 1.0);
    assert!(icon.class_name.is_none());
    assert!(icon.accessibility.is_decorative());
}

/// it should keep the none preset instant under every trigger
#[test]
fn none_transition_ignores_trigger() {
    let none = MotionPresetCatalog::lookup(MotionType::None);
    for t in TriggerMode::ALL {
        let s = IconAnimationFacade::resolve_animation(true, MotionType::None, t);
        let tr = s.transition.expect("animated state exposes a transition");
        assert_eq!(tr, none.transition, "{t}");
        assert_eq!(tr.feel(), TransitionFeel::Instant, "{t}");
        assert!(!tr.repeats_forever(), "{t}");
        assert!(s.wrapper_bindings.is_noop(), "{t}");
    }
}

/// it should honour the scope chain, with nested scopes falling back to library defaults
#[test]
fn nested_scopes() {
    let outer = ConfigScope::provide(&AmbientConfigPatch {
        animated: Some(false),
        default_size: Some(32.0),
        ..Default::default()
    });
    let inner = outer.nest(&AmbientConfigPatch {
        default_stroke_width: Some(1.0),
        ..Default::default()
    });
    let observer = SystemPreferenceObserver::new();

    let in_outer = IconAnimationFacade::resolve_in(&IconProps::default(), &outer, &observer);
    assert!(!in_outer.animation.is_animated);
    assert_eq!(in_outer.geometry.size, 32.0);

    let in_inner = IconAnimationFacade::resolve_in(&IconProps::default(), &inner, &observer);
    assert!(in_inner.animation.is_animated);
    assert_eq!(in_inner.geometry.size, 24.0);
    assert_eq!(in_inner.geometry.stroke_width, 1.0);

    let mut stack = ScopeStack::new();
    stack.push(&AmbientConfigPatch {
        default_size: Some(40.0),
        ..Default::default()
    });
    let icon = IconAnimationFacade::resolve_in(&IconProps::default(), &stack.current(), &observer);
    assert_eq!(icon.geometry.size, 40.0);
}

/// it should follow the live system preference only through the ambient default chain
#[test]
fn reduced_motion_through_observer() {
    let observer = SystemPreferenceObserver::new();
    let signal = HostReducedMotionSignal::new(false);
    observer.install_source(Box::new(signal.clone()));
    let _sub = observer.subscribe(|_| {});
    signal.set(true);

    // the ambient flag is always published, so it decides before the system flag
    let scope = ConfigScope::root();
    let icon = IconAnimationFacade::resolve_in(&IconProps::default(), &scope, &observer);
    assert!(icon.animation.is_animated);

    let forced = IconProps {
        animated: Some(true),
        ..Default::default()
    };
    let icon = IconAnimationFacade::resolve_in(&forced, &scope, &observer);
    assert!(icon.animation.is_animated);
}

/// it should serialize a resolved icon into renderer-friendly JSON
#[test]
fn resolved_icon_json_shape() {
    let props = props_json(json!({ "motionType": "spin", "trigger": "loop" }));
    let icon = IconAnimationFacade::resolve(&props, None, false);
    let v = serde_json::to_value(&icon).unwrap();

    assert_eq!(v["animation"]["isAnimated"], json!(true));
    assert_eq!(v["animation"]["motionType"], json!("spin"));
    assert_eq!(v["animation"]["trigger"], json!("loop"));
    assert_eq!(v["animation"]["transition"]["repeat"], json!("infinite"));
    assert_eq!(v["animation"]["variants"]["hover"]["rotate"], json!(360.0));
    assert_eq!(
        v["animation"]["wrapperBindings"]["condition"]["predicate"],
        json!("whileMounted")
    );
    assert_eq!(v["animation"]["pathBindings"]["initial"], json!(null));
    assert_eq!(v["geometry"], json!({ "size": 24.0, "strokeWidth": 2.0 }));
    assert_eq!(v["accessibility"], json!({ "aria-hidden": true }));
    assert!(v.get("className").is_none());
}
