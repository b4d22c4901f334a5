use super::*;

#[test]
fn slider_defaults_to_typical_bill() {
    assert_eq!(SliderInput::default().value(), 142);
}

#[test]
fn slider_clamps_on_construction_and_set() {
    assert_eq!(SliderInput::new(10).value(), BILL_MIN);
    assert_eq!(SliderInput::new(9_000).value(), BILL_MAX);

    let mut slider = SliderInput::default();
    slider.set(401);
    assert_eq!(slider.value(), BILL_MAX);
    slider.set(0);
    assert_eq!(slider.value(), BILL_MIN);
}

#[test]
fn slider_parses_range_input() {
    let mut slider = SliderInput::default();
    slider.set_from_input("275");
    assert_eq!(slider.value(), 275);
    slider.set_from_input(" 99.6 ");
    assert_eq!(slider.value(), 100);
    slider.set_from_input("-20");
    assert_eq!(slider.value(), BILL_MIN);
}

#[test]
fn slider_ignores_garbage_input() {
    let mut slider = SliderInput::new(200);
    slider.set_from_input("");
    slider.set_from_input("abc");
    slider.set_from_input("NaN");
    slider.set_from_input("inf");
    assert_eq!(slider.value(), 200);
}

#[test]
fn slider_fill_spans_track() {
    assert_eq!(SliderInput::new(BILL_MIN).fill_percent(), 0.0);
    assert_eq!(SliderInput::new(BILL_MAX).fill_percent(), 100.0);
    assert_eq!(SliderInput::new(225).fill_percent(), 50.0);
}

#[test]
fn slider_feeds_estimator() {
    assert_eq!(SliderInput::new(142).estimate(), estimate(142));
}
