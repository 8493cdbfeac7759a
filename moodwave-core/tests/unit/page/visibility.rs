use super::*;

fn ratio(region: Region, ratio: f64) -> RegionRatio {
    RegionRatio { region, ratio }
}

#[test]
fn reports_only_threshold_crossings() {
    let mut obs = VisibilityObserver::new(0.4);
    assert!(obs.observe(&[ratio(Region::January, 0.1)]).is_empty());

    let e = obs.observe(&[ratio(Region::January, 0.4)]);
    assert_eq!(
        e,
        vec![IntersectionEntry {
            region: Region::January,
            is_intersecting: true
        }]
    );
    assert!(obs.is_intersecting(Region::January));
    assert!(obs.observe(&[ratio(Region::January, 0.9)]).is_empty());

    let e = obs.observe(&[ratio(Region::January, 0.39)]);
    assert!(!e[0].is_intersecting);
}

#[test]
fn batch_preserves_supplied_order() {
    let mut obs = VisibilityObserver::new(0.4);
    let e = obs.observe(&[ratio(Region::February, 0.5), ratio(Region::January, 0.6)]);
    let regions: Vec<Region> = e.iter().map(|x| x.region).collect();
    assert_eq!(regions, vec![Region::February, Region::January]);
}
