//! Integration tests for committed shorthand state.

use tessel_css::{
    AutoLength, BorderColor, BorderColorFamily, BorderStyleFamily, BorderWidthFamily,
    ColorValue, ComponentValue, ExpandError, LengthValue, LineStyle, LineWidth, MarginFamily,
    PaddingFamily, ShorthandFamily, ShorthandInput, ShorthandProperty, ShorthandValue, Side, Sides,
};

/// Helper: make an ident component value.
fn ident(s: &str) -> ComponentValue {
    ComponentValue::ident(s)
}

/// Helper: make a px dimension component value.
fn px(v: f64) -> ComponentValue {
    ComponentValue::dimension(v, "px")
}

fn named(s: &str) -> BorderColor {
    BorderColor::Color(ColorValue::from_named(s).unwrap())
}

fn snapshot<T: serde::Serialize>(value: &T) -> serde_json::Value {
    serde_json::to_value(value).unwrap()
}

#[test]
fn test_initial_values() {
    let color = ShorthandProperty::<BorderColorFamily>::new();
    assert!(!color.is_inherited());
    assert_eq!(color.sides(), &Sides::splat(BorderColor::CurrentColor));

    let width = ShorthandProperty::<BorderWidthFamily>::new();
    assert_eq!(width.top(), &LineWidth::Medium);

    let style = ShorthandProperty::<BorderStyleFamily>::default();
    assert_eq!(style.left(), &LineStyle::None);

    let margin = ShorthandProperty::<MarginFamily>::new();
    assert_eq!(margin.bottom(), &AutoLength::Length(LengthValue::ZERO));
    assert_eq!(MarginFamily::NAME, "margin");
}

#[test]
fn test_accessors_follow_scenarios() {
    let mut prop = ShorthandProperty::<BorderColorFamily>::new();

    assert!(prop.validate_and_apply(ident("red")));
    assert_eq!(prop.sides(), &Sides::splat(named("red")));

    assert!(prop.validate_and_apply(vec![ident("red"), ident("blue")]));
    assert_eq!(prop.top(), &named("red"));
    assert_eq!(prop.right(), &named("blue"));
    assert_eq!(prop.bottom(), &named("red"));
    assert_eq!(prop.left(), &named("blue"));

    assert!(prop.validate_and_apply(vec![ident("red"), ident("blue"), ident("green")]));
    assert_eq!(
        prop.sides(),
        &Sides::new(named("red"), named("blue"), named("green"), named("blue"))
    );

    assert!(prop.validate_and_apply(vec![
        ident("red"),
        ident("blue"),
        ident("green"),
        ident("yellow")
    ]));
    for (side, name) in Side::ALL.into_iter().zip(["red", "blue", "green", "yellow"]) {
        assert_eq!(prop.side(side), &named(name));
    }
}

#[test]
fn test_five_values_leave_state_unchanged() {
    let mut prop = ShorthandProperty::<BorderColorFamily>::new();
    assert!(prop.validate_and_apply(vec![ident("red"), ident("blue")]));
    let before = snapshot(&prop);

    let five = vec![
        ident("red"),
        ident("blue"),
        ident("green"),
        ident("yellow"),
        ident("black"),
    ];
    assert_eq!(
        prop.try_apply(five.clone()),
        Err(ExpandError::InvalidComponentCount(5))
    );
    assert!(!prop.validate_and_apply(five));
    assert_eq!(snapshot(&prop), before);
}

#[test]
fn test_zero_values_leave_state_unchanged() {
    let mut prop = ShorthandProperty::<MarginFamily>::new();
    assert!(prop.validate_and_apply(vec![px(1.0), ident("auto")]));
    let before = prop.clone();

    assert_eq!(
        prop.try_apply(Vec::<ComponentValue>::new()),
        Err(ExpandError::InvalidComponentCount(0))
    );
    assert!(!prop.validate_and_apply(Vec::<ComponentValue>::new()));
    assert_eq!(prop, before);
    assert_eq!(snapshot(&prop), snapshot(&before));
}

#[test]
fn test_late_rejection_leaves_state_unchanged() {
    let mut prop = ShorthandProperty::<MarginFamily>::new();
    assert!(prop.validate_and_apply(vec![px(1.0), px(2.0), px(3.0), px(4.0)]));
    let before = prop.clone();

    // First three are fine; the fourth is not a margin.
    assert_eq!(
        prop.try_apply(vec![px(9.0), px(9.0), px(9.0), ident("solid")]),
        Err(ExpandError::InvalidComponentAtPosition {
            position: 3,
            side: Side::Left
        })
    );
    assert_eq!(prop, before);
}

#[test]
fn test_rejection_keeps_inherited_flag() {
    let mut prop = ShorthandProperty::<PaddingFamily>::new();
    assert!(prop.validate_and_apply(ShorthandInput::Inherit));
    assert!(!prop.validate_and_apply(px(-1.0)));
    assert!(prop.is_inherited());
}

#[test]
fn test_inherit_sets_flag_and_keeps_sides() {
    let mut prop = ShorthandProperty::<BorderStyleFamily>::new();
    assert!(prop.validate_and_apply(vec![ident("solid"), ident("dotted")]));
    let sides = prop.sides().clone();

    assert!(prop.validate_and_apply(ShorthandValue::Inherit));
    assert!(prop.is_inherited());
    assert_eq!(prop.sides(), &sides);

    // A later concrete declaration clears the flag.
    assert!(prop.validate_and_apply(ident("double")));
    assert!(!prop.is_inherited());
    assert_eq!(prop.sides(), &Sides::splat(LineStyle::Double));
}

#[test]
fn test_apply_is_idempotent() {
    let value = vec![px(1.0), ComponentValue::percentage(5.0), ident("auto")];
    let mut prop = ShorthandProperty::<MarginFamily>::new();
    assert!(prop.validate_and_apply(value.clone()));
    let once = snapshot(&prop);
    assert!(prop.validate_and_apply(value));
    assert_eq!(snapshot(&prop), once);
    assert_eq!(
        prop.sides(),
        &Sides::new(
            AutoLength::Length(LengthValue::Px(1.0)),
            AutoLength::Length(LengthValue::Percent(5.0)),
            AutoLength::Auto,
            AutoLength::Length(LengthValue::Percent(5.0)),
        )
    );
}

#[test]
fn test_border_width_keywords_and_lengths() {
    let mut prop = ShorthandProperty::<BorderWidthFamily>::new();
    assert!(prop.validate_and_apply(vec![ident("thin"), px(2.0)]));
    assert_eq!(
        prop.sides(),
        &Sides::new(
            LineWidth::Thin,
            LineWidth::Length(LengthValue::Px(2.0)),
            LineWidth::Thin,
            LineWidth::Length(LengthValue::Px(2.0)),
        )
    );
    assert!(!prop.validate_and_apply(ComponentValue::percentage(10.0)));
}

#[test]
fn test_longhands() {
    let mut prop = ShorthandProperty::<BorderColorFamily>::new();
    assert!(prop.validate_and_apply(vec![ident("red"), ComponentValue::hash("#00ff00")]));
    assert_eq!(
        prop.longhands(),
        vec![
            ("border-top-color".to_string(), "#ff0000".to_string()),
            ("border-right-color".to_string(), "#00ff00".to_string()),
            ("border-bottom-color".to_string(), "#ff0000".to_string()),
            ("border-left-color".to_string(), "#00ff00".to_string()),
        ]
    );

    assert!(prop.validate_and_apply(ShorthandInput::Inherit));
    assert!(prop.longhands().iter().all(|(_, value)| value == "inherit"));
}

#[test]
fn test_serialized_shape() {
    let mut prop = ShorthandProperty::<PaddingFamily>::new();
    assert!(prop.validate_and_apply(px(4.0)));
    let json = snapshot(&prop);
    assert_eq!(json["inherited"], serde_json::json!(false));
    assert_eq!(json["sides"]["left"], serde_json::json!({ "Px": 4.0 }));
}

#[test]
fn test_property_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShorthandProperty<BorderColorFamily>>();
    assert_send_sync::<ShorthandProperty<MarginFamily>>();
}
