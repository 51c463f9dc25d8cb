#![no_main]

use libfuzzer_sys::fuzz_target;
use reflog_index::{DEFAULT_MARKER, Updater};
use reflog_index_git::LogEntry;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let log = vec![
        LogEntry::new("0123456789abcdef0123456789abcdef01234567", "commit: fuzz"),
        LogEntry::new("fedcba9876543210fedcba9876543210fedcba98", text),
    ];

    if let Ok(plan) = Updater::default().plan(&log, text) {
        let marker_line = text
            .split_inclusive('\n')
            .position(|line| line.contains(DEFAULT_MARKER))
            .expect("plan succeeded, so the marker exists");
        let prefix: String = text.split_inclusive('\n').take(marker_line + 1).collect();
        assert!(plan.updated.starts_with(prefix.trim_end_matches('\n')));
    }
});
