use super::*;
use chrono::NaiveDate;

fn records(n: usize) -> Vec<Record> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    (0..n)
        .map(|i| {
            Record::new(
                start + chrono::Days::new(i as u64),
                (i % 11) as f64,
                1.0,
                2.0,
            )
        })
        .collect()
}

#[test]
fn partition_is_exact_for_boundary_lengths() {
    for n in [0usize, 1, 7, 20, 21, 22, 28, 31] {
        let rs = records(n);
        let groups = partition_weeks(&rs, 7, 4);
        assert_eq!(groups.len(), 4, "n={n}");

        let joined: Vec<Record> = groups.iter().flat_map(|g| g.records.clone()).collect();
        assert_eq!(joined, rs, "n={n}");

        for (i, g) in groups.iter().enumerate() {
            assert_eq!(g.index, i);
            if i < 3 {
                assert!(g.len() <= 7);
            }
        }
    }
}

#[test]
fn partition_sizes_match_fixed_offsets() {
    let sizes = |n| -> Vec<usize> {
        partition_weeks(&records(n), 7, 4)
            .iter()
            .map(WeekGroup::len)
            .collect()
    };
    assert_eq!(sizes(28), vec![7, 7, 7, 7]);
    assert_eq!(sizes(24), vec![7, 7, 7, 3]);
    assert_eq!(sizes(21), vec![7, 7, 7, 0]);
    assert_eq!(sizes(31), vec![7, 7, 7, 10]);
    assert_eq!(sizes(0), vec![0, 0, 0, 0]);
}

#[test]
fn extended_week_adds_fractional_endpoints() {
    let groups = partition_weeks(&records(24), 7, 4);
    let last = &groups[3];
    assert_eq!(last.len(), 3);

    let ext = ExtendedWeek::from_group(last, 0.4).unwrap();
    assert_eq!(ext.len(), 5);

    let first = &ext.points[0];
    let tail = &ext.points[4];
    assert!(first.synthetic && tail.synthetic);
    assert_eq!(first.position, -0.4);
    assert!((tail.position - 2.4).abs() < 1e-12);
    assert_eq!(first.record, last.records[0]);
    assert_eq!(tail.record, last.records[2]);

    let positions: Vec<f64> = ext.points[1..4].iter().map(|p| p.position).collect();
    assert_eq!(positions, vec![0.0, 1.0, 2.0]);
}

#[test]
fn real_records_exclude_synthetic_duplicates() {
    let groups = partition_weeks(&records(7), 7, 4);
    let ext = ExtendedWeek::from_group(&groups[0], 0.4).unwrap();
    let real: Vec<&Record> = ext.real_records().collect();
    assert_eq!(real.len(), 7);
    assert_eq!(real[0], &groups[0].records[0]);
}

#[test]
fn empty_group_has_no_extended_week() {
    let groups = partition_weeks(&records(7), 7, 4);
    assert!(ExtendedWeek::from_group(&groups[1], 0.4).is_none());
}
