use cosmic_corridor::geometry::{overlaps, Rect};

#[test]
fn overlapping_rects() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(5.0, 5.0, 10.0, 10.0);
    assert!(overlaps(&a, &b));
}

#[test]
fn contained_rect_overlaps() {
    let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
    let inner = Rect::new(40.0, 40.0, 5.0, 5.0);
    assert!(overlaps(&outer, &inner));
    assert!(overlaps(&inner, &outer));
}

#[test]
fn separated_rects_do_not_overlap() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(!overlaps(&a, &Rect::new(20.0, 0.0, 10.0, 10.0)));
    assert!(!overlaps(&a, &Rect::new(0.0, 20.0, 10.0, 10.0)));
    assert!(!overlaps(&a, &Rect::new(-30.0, -30.0, 10.0, 10.0)));
}

#[test]
fn shared_edge_is_not_an_overlap() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let right = Rect::new(10.0, 0.0, 10.0, 10.0);
    let below = Rect::new(0.0, 10.0, 10.0, 10.0);
    let corner = Rect::new(10.0, 10.0, 10.0, 10.0);
    assert!(!overlaps(&a, &right));
    assert!(!overlaps(&a, &below));
    assert!(!overlaps(&a, &corner));
}

#[test]
fn overlap_is_symmetric() {
    let rects = [
        Rect::new(0.0, 0.0, 10.0, 10.0),
        Rect::new(5.0, 5.0, 10.0, 10.0),
        Rect::new(10.0, 0.0, 10.0, 10.0),
        Rect::new(-5.0, 2.0, 30.0, 1.0),
        Rect::centered(3.0, 3.0, 2.0, 2.0),
        Rect::new(100.0, 100.0, 1.0, 1.0),
    ];
    for a in &rects {
        for b in &rects {
            assert_eq!(overlaps(a, b), overlaps(b, a), "{a:?} vs {b:?}");
        }
    }
}

#[test]
fn centered_rect_edges() {
    let r = Rect::centered(50.0, 40.0, 20.0, 10.0);
    assert_eq!(r.left, 40.0);
    assert_eq!(r.top, 35.0);
    assert_eq!(r.right(), 60.0);
    assert_eq!(r.bottom(), 45.0);
}
