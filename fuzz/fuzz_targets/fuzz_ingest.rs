#![no_main]

use exhaust_spread::ingest::{ingest, IngestConfig};
use exhaust_spread::views::{DashboardViews, Selection, ViewConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let config = IngestConfig::default();

    // Uploads may be rejected, but must never panic
    for name in ["upload.csv", "upload.xlsx"] {
        if let Ok(ingested) = ingest(data, name, &config) {
            let bounds = ingested.bounds;
            for row in [bounds.min, bounds.max, bounds.max + 1] {
                let views = DashboardViews::compute(
                    Some(&ingested.table),
                    &Selection::row(row),
                    &ViewConfig::default(),
                );
                assert_eq!(views.is_placeholder(), row > bounds.max);
            }
        }
    }
});
