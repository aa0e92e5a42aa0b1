#![no_main]

use curve_point_editor::{HitTester, Point, PointSets};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let coords: Vec<Point> = data
        .chunks_exact(2)
        .map(|c| Point::new(c[0] as i32, c[1] as i32))
        .collect();
    let (detected, clicks) = coords.split_at(coords.len() / 2);

    let mut sets = PointSets::new(detected.iter().copied());
    let total = sets.untoggled().len();
    let tester = HitTester::new(20.0);

    for (i, &pos) in clicks.iter().enumerate() {
        if i % 4 == 3 {
            sets.add_user_point(pos);
        } else {
            sets.toggle_at(pos, &tester);
        }
        assert!(sets.untoggled().is_disjoint(sets.toggled()));
        assert_eq!(sets.untoggled().len() + sets.toggled().len(), total);
    }
});
