//! Find entities in a ring slice that wraps past angle 0.
use ringslice::prelude::*;
use std::f64::consts::PI;

#[derive(Debug)]
struct Contact {
    name: &'static str,
    at: Point2D,
}

impl Positioned for Contact {
    fn position(&self) -> Point2D {
        self.at
    }
}

fn main() {
    let contacts = [
        Contact { name: "east", at: Point2D::new(10.0, 0.0) },      // angle 0
        Contact { name: "north", at: Point2D::new(0.0, 10.0) },     // angle π/2
        Contact { name: "southeast", at: Point2D::new(8.0, -7.0) }, // just below angle 0
        Contact { name: "far east", at: Point2D::new(90.0, 1.0) },  // outside the band
    ];

    let rings = RingQuery::new(&contacts, Point2D::new(0.0, 0.0));

    let mut last = LastQueryShape::new();
    let hits = rings.query_observed(5.0, 20.0, 7.0 * PI / 4.0, PI / 4.0, &mut last);
    let names: Vec<&str> = hits.iter().map(|h| h.entity.name).collect();
    println!("In slice: {names:?}");
    println!("Executed boxes: {:?}", last.get().map(QueryShape::boxes));

    // The slice from 7π/4 to π/4 crosses angle 0 and runs as two boxes
    assert_eq!(names.len(), 2, "Expected 2 contacts in slice");
    assert!(names.contains(&"east"), "east should be in slice");
    assert!(names.contains(&"southeast"), "southeast should be in slice");
    assert!(last.get().is_some_and(QueryShape::is_wrapped), "slice should wrap");
}
