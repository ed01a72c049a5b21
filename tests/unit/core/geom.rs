use super::*;

#[test]
fn invert_y_flips_only_the_vertical_axis() {
    let p = Pos::new(3.0, 15.0).invert_y();
    assert_eq!(p, Pos::new(3.0, -15.0));
}

#[test]
fn delta_from_is_per_axis() {
    let d = Pos::new(5.0, -2.0).delta_from(Pos::new(1.0, 4.0));
    assert_eq!(d, Pos::new(4.0, -6.0));
}
