use super::*;
use chrono::NaiveDate;

fn at(minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 11, 5)
        .unwrap()
        .and_hms_opt(14, minute, 0)
        .unwrap()
}

fn sample_table() -> Table {
    Table::new(
        SensorCatalog::sequential("ttxd_", 3),
        vec![
            Reading::new(at(0), vec![500.0, 700.0, 0.0], 95.0, 10.0),
            Reading::new(at(1), vec![520.0, 680.0, 0.0], 96.0, 11.0),
        ],
    )
    .unwrap()
}

#[test]
fn test_sequential_catalog() {
    let catalog = SensorCatalog::sequential("ttxd_", 3);
    assert_eq!(catalog.names(), &["ttxd_1", "ttxd_2", "ttxd_3"]);
    assert_eq!(catalog.get(2), Some("ttxd_3"));
    assert_eq!(catalog.get(3), None);
    assert!(SensorCatalog::sequential("ttxd_", 0).is_empty());
}

#[test]
fn test_sensor_count_mismatch_rejected() {
    let err = Table::new(
        SensorCatalog::sequential("ttxd_", 2),
        vec![Reading::new(at(0), vec![1.0], 0.0, 0.0)],
    )
    .unwrap_err();

    assert!(matches!(
        err,
        TableError::SensorCountMismatch {
            row: 0,
            expected: 2,
            found: 1
        }
    ));
}

#[test]
fn test_means_and_included_sensors() {
    let table = sample_table();
    assert_eq!(table.sensor_means(), vec![510.0, 690.0, 0.0]);
    assert_eq!(table.included_sensors(), vec![0, 1]);
    assert_eq!(table.sensor_extent(), Some((0.0, 700.0)));
}

#[test]
fn test_row_bounds() {
    assert_eq!(sample_table().bounds(), Some(RowBounds { min: 0, max: 1 }));
    assert_eq!(RowBounds::for_len(0), None);

    let placeholder = RowBounds::placeholder();
    assert_eq!((placeholder.min, placeholder.max), (0, 10));
    assert_eq!(placeholder.clamp(42), 10);
    assert!(placeholder.contains(10));
    assert!(!placeholder.contains(11));
}

#[test]
fn test_json_roundtrip() {
    let table = sample_table();
    let json = table.to_json().unwrap();
    let restored = Table::from_json(&json).unwrap();
    assert_eq!(restored, table);
}

#[test]
fn test_json_rejects_inconsistent_rows() {
    let json = r#"{"catalog":["ttxd_1","ttxd_2"],"readings":[
        {"timestamp":"2023-11-05T14:00:00","sensors":[1.0],"engine_speed":0.0,"power":0.0}
    ]}"#;
    assert!(Table::from_json(json).is_err());
}

#[test]
fn test_stats_report() {
    let stats = sample_table().stats();
    assert_eq!(stats.rows, 2);
    assert_eq!(stats.time_range, Some((at(0), at(1))));
    assert_eq!(stats.included_count(), 2);
    assert_eq!(stats.sensors[1].min, 680.0);
    assert_eq!(stats.sensors[1].max, 700.0);
    assert!(!stats.sensors[2].included);

    let text = stats.to_string();
    assert!(text.contains("Rows: 2"));
    assert!(text.contains("ttxd_3"));
    assert!(text.contains("(excluded)"));
}

#[test]
fn test_reading_label_fractional_seconds() {
    let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let label = |ts: NaiveDateTime| Reading::new(ts, vec![], 0.0, 0.0).label();

    assert_eq!(
        label(day.and_hms_opt(8, 0, 0).unwrap()),
        "2024-03-01 08:00:00"
    );
    assert_eq!(
        label(day.and_hms_milli_opt(8, 0, 0, 500).unwrap()),
        "2024-03-01 08:00:00.500000"
    );
    assert_eq!(
        label(day.and_hms_micro_opt(8, 0, 1, 250).unwrap()),
        "2024-03-01 08:00:01.000250"
    );
    assert_eq!(
        label(day.and_hms_nano_opt(8, 0, 1, 7).unwrap()),
        "2024-03-01 08:00:01.000000007"
    );
}
