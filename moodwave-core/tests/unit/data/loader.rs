use super::*;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

const HEADER: &str = "date,overall-positive-day-score,anxiety-level,energy-level,notes\n";

#[test]
fn parse_date_uses_month_day_year() {
    assert_eq!(parse_date("01-05-2024"), Some(d(2024, 1, 5)));
    assert_eq!(parse_date(" 12-31-2023 "), Some(d(2023, 12, 31)));
    assert_eq!(parse_date("2024-01-05"), None);
    assert_eq!(parse_date("02-30-2024"), None);
    assert_eq!(parse_date(""), None);
}

#[test]
fn sort_is_stable_for_equal_dates() {
    let mut rs = vec![
        Record::new(d(2024, 1, 3), 1.0, 0.0, 0.0),
        Record::new(d(2024, 1, 1), 2.0, 0.0, 0.0),
        Record::new(d(2024, 1, 3), 3.0, 0.0, 0.0),
        Record::new(d(2024, 1, 1), 4.0, 0.0, 0.0),
    ];
    sort_chronological(&mut rs);
    let scores: Vec<f64> = rs.iter().map(Record::score).collect();
    assert_eq!(scores, vec![2.0, 4.0, 1.0, 3.0]);
    assert!(rs.windows(2).all(|w| w[0].date <= w[1].date));
}

#[test]
fn month_filter_ignores_year() {
    let rs = vec![
        Record::new(d(2023, 1, 30), 1.0, 0.0, 0.0),
        Record::new(d(2024, 1, 2), 2.0, 0.0, 0.0),
        Record::new(d(2024, 2, 1), 3.0, 0.0, 0.0),
    ];
    let jan = filter_month(&rs, 1);
    assert_eq!(jan.len(), 2);
    assert!(filter_month(&rs, 3).is_empty());
}

#[test]
fn rows_are_typed_and_extra_columns_ignored() {
    let csv = format!("{HEADER}01-02-2024,7,3,6,good day\n01-01-2024,4.5,8,2,\n");
    let (rs, report) = parse_records(csv.as_bytes()).unwrap();
    assert_eq!(report.rows_read, 2);
    assert_eq!(rs.len(), 2);
    assert_eq!(rs[0], Record::new(d(2024, 1, 2), 7.0, 3.0, 6.0));
    assert_eq!(rs[1].overall_score, Some(4.5));
}

#[test]
fn invalid_dates_are_skipped_and_missing_values_kept() {
    let csv = format!(
        "{HEADER}13-40-2024,7,3,6,\nnot a date,1,1,1,\n01-03-2024,,3,6,\n01-04-2024,high,3,6,\n01-05-2024,5,5,5,\n"
    );
    let (rs, report) = parse_records(csv.as_bytes()).unwrap();
    assert_eq!(rs.len(), 3);
    assert_eq!(report.rows_read, 5);
    assert_eq!(report.skipped_invalid_date, 2);
    assert_eq!(report.missing_values, 2);

    assert_eq!(rs[0].date, d(2024, 1, 3));
    assert_eq!(rs[0].overall_score, None);
    assert_eq!(rs[0].score(), 0.0);
    assert_eq!(rs[0].anxiety, Some(3.0));
    assert_eq!(rs[1].overall_score, None);
    assert!(!rs[2].has_missing_value());
}

#[test]
fn missing_energy_keeps_the_day_in_its_week() {
    let mut csv = HEADER.to_owned();
    for day in 1..=8 {
        let energy = if day == 3 { String::new() } else { "4".to_owned() };
        csv.push_str(&format!("01-{day:02}-2024,6,2,{energy},\n"));
    }
    let data = month_from_reader(csv.as_bytes(), 1).unwrap();
    assert_eq!(data.records.len(), 8);
    assert_eq!(data.report.missing_values, 1);
    assert_eq!(data.records[2].date, d(2024, 1, 3));
    assert_eq!(data.records[2].energy, None);
    assert_eq!(data.records[7].date, d(2024, 1, 8));
}

#[test]
fn missing_required_column_is_a_data_error() {
    let csv = "date,overall-positive-day-score,energy-level\n01-01-2024,5,5\n";
    let err = parse_records(csv.as_bytes()).unwrap_err();
    assert!(err.to_string().contains("data error:"));
}

#[test]
fn month_from_reader_sorts_then_filters() {
    let mut csv = HEADER.to_owned();
    for day in (1..=28).rev() {
        csv.push_str(&format!("01-{day:02}-2024,{},2,3,\n", day % 11));
    }
    for day in 1..=5 {
        csv.push_str(&format!("02-{day:02}-2024,5,2,3,\n"));
    }
    let data = month_from_reader(csv.as_bytes(), 1).unwrap();
    assert_eq!(data.records.len(), 28);
    assert_eq!(data.report.kept, 28);
    assert_eq!(data.report.rows_read, 33);
    assert_eq!(data.records[0].date, d(2024, 1, 1));
    assert!(data.records.windows(2).all(|w| w[0].date <= w[1].date));
}

#[test]
fn unreadable_file_fails_fast() {
    let err = load_month(Path::new("target/definitely/missing.csv"), 1).unwrap_err();
    assert!(err.to_string().contains("open dataset"));
}
