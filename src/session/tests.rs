use super::*;

const FIRST: &str = "ts,tnh,dwatt,ttxd_1,ttxd_2,ttxd_3\n\
                     01/02/2024 10:00:00,95.123,10.4567,500,700,0\n\
                     01/02/2024 10:00:01,95.5,10.5,505,690,0\n\
                     01/02/2024 10:00:02,96,10.6,510,680,0\n";

const SECOND: &str = "ts,tnh,ttxd_1,ttxd_2\n\
                      02/02/2024 11:00:00,80,450,460\n";

fn loaded() -> Session {
    let mut session = Session::default();
    session.upload(FIRST.as_bytes(), "first.csv").unwrap();
    session
}

#[test]
fn test_empty_session() {
    let session = Session::default();
    assert!(session.table().is_none());
    assert_eq!(session.bounds(), RowBounds::placeholder());
    assert_eq!(session.upload_title(), "**Imported file:**");
    assert!(session.views().is_placeholder());
    assert_eq!(session.export_table().unwrap(), None);
}

#[test]
fn test_upload_sets_bounds_and_title() {
    let mut session = Session::default();
    let bounds = session.upload(FIRST.as_bytes(), "first.csv").unwrap();

    assert_eq!(bounds, RowBounds { min: 0, max: 2 });
    assert_eq!(session.bounds(), bounds);
    assert_eq!(session.file_name(), Some("first.csv"));
    assert_eq!(session.upload_title(), "**Imported file:** first.csv");

    let views = session.views();
    assert_eq!(views.row_label, "2024-02-01 10:00:00");
    assert_eq!(views.summary[0].spread, 200.0);
}

#[test]
fn test_select_row_clamps() {
    let mut session = loaded();
    assert_eq!(session.select_row(1), 1);
    assert_eq!(session.views().row_label, "2024-02-01 10:00:01");

    assert_eq!(session.select_row(99), 2);
    assert_eq!(session.selection().row, 2);
    assert!(!session.views().is_placeholder());
}

#[test]
fn test_select_row_without_table_uses_placeholder_bounds() {
    let mut session = Session::default();
    assert_eq!(session.select_row(4), 4);
    assert_eq!(session.select_row(42), 10);
    assert!(session.views().is_placeholder());
}

#[test]
fn test_failed_upload_keeps_previous_state() {
    let mut session = loaded();
    session.select_row(2);
    session.set_sensor_count(Some(1));
    let before = session.views();

    let err = session
        .upload(b"ts,tnh,ttxd_1\nnot a date,1,2\n", "broken.csv")
        .unwrap_err();
    assert!(matches!(
        err,
        SessionError::IngestError(IngestError::InvalidTimestamp { .. })
    ));

    let err = session.upload(b"binary", "trend.xls").unwrap_err();
    assert!(matches!(
        err,
        SessionError::IngestError(IngestError::UnsupportedFormat(_))
    ));

    assert_eq!(session.file_name(), Some("first.csv"));
    assert_eq!(session.selection().row, 2);
    assert_eq!(session.views(), before);
}

#[test]
fn test_new_upload_resets_selection() {
    let mut session = loaded();
    session.select_row(2);
    session.set_polar_window(Some(RadialRange::new(400.0, 800.0)));
    session.set_sensor_count(Some(2));

    let bounds = session.upload(SECOND.as_bytes(), "second.csv").unwrap();
    assert_eq!(bounds, RowBounds { min: 0, max: 0 });
    assert_eq!(session.selection(), &Selection::default());
    assert_eq!(session.table().unwrap().catalog().len(), 2);
    assert_eq!(session.views().row_label, "2024-02-02 11:00:00");
}

#[test]
fn test_clear() {
    let mut session = loaded();
    session.select_row(2);
    session.clear();

    assert!(session.table().is_none());
    assert_eq!(session.selection().row, 0);
    assert_eq!(session.upload_title(), "**Imported file:**");
    assert!(session.views().is_placeholder());
}

#[test]
fn test_selection_drives_views() {
    let mut session = loaded();
    session.set_sensor_count(Some(1));
    session.set_polar_window(Some(RadialRange::new(480.0, 520.0)));

    let views = session.views();
    assert_eq!(views.series.len(), 2);
    assert_eq!(views.series[0].name, "ttxd_1");
    assert_eq!(views.series[1].name, "TNH");
    assert_eq!(
        views.polar.unwrap().range,
        Some(RadialRange { min: 480.0, max: 520.0 })
    );

    let figures = session.figures();
    assert_eq!(figures.time_series.data.len(), 2);
    assert_eq!(figures.time_series.layout.shapes.len(), 1);
}

#[test]
fn test_export_and_restore_table() {
    let source = loaded();
    let blob = source.export_table().unwrap().unwrap();

    let mut restored = Session::default();
    let bounds = restored.restore_table(&blob, "first.csv").unwrap();
    assert_eq!(bounds, source.bounds());
    assert_eq!(restored.table(), source.table());
    assert_eq!(restored.views(), source.views());
}

#[test]
fn test_restore_rejects_bad_blob() {
    let mut session = loaded();

    assert!(matches!(
        session.restore_table("{not json", "x.csv"),
        Err(SessionError::TableError(_))
    ));
    assert!(matches!(
        session.restore_table(r#"{"catalog":["ttxd_1"],"readings":[]}"#, "x.csv"),
        Err(SessionError::IngestError(IngestError::EmptyTable))
    ));
    assert_eq!(session.file_name(), Some("first.csv"));
}

#[test]
fn test_custom_config_is_used() {
    let ingest_config = IngestConfig {
        sensor_prefix: "tc".to_string(),
        ..IngestConfig::default()
    };
    let view_config = ViewConfig {
        highlight_fill: "red".to_string(),
        ..ViewConfig::default()
    };
    let mut session = Session::new(ingest_config, view_config);
    session
        .upload(b"time,tnh,TC1,TC2\n2024-01-01 00:00:00,50,300,310\n", "tc.csv")
        .unwrap();

    assert_eq!(session.table().unwrap().catalog().names(), &["tc1", "tc2"]);
    assert_eq!(session.views().highlight.unwrap().fill_color, "red");
    assert_eq!(session.view_config().highlight_fill, "red");
    assert_eq!(session.ingest_config().sensor_prefix, "tc");
}
