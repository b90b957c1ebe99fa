// Runs in its own test binary so the capturing logger can be installed once.
use log::{Level, LevelFilter, Log, Metadata, Record};
use mc_git_version::diagnostics::RecordingSink;
use mc_git_version::domain::{PlatformVersion, VersionOptions};
use mc_git_version::git::MockRepository;
use mc_git_version::VersionResolver;
use std::collections::HashMap;
use std::sync::Mutex;

struct CaptureLogger {
    lines: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.lines
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    lines: Mutex::new(Vec::new()),
};

#[test]
fn test_each_rendering_is_logged_at_info_once() {
    log::set_logger(&LOGGER).expect("logger installed once");
    log::set_max_level(LevelFilter::Trace);

    let repo = MockRepository::new("v2.1-3-gabc1234", "develop");
    let signals: HashMap<String, String> = HashMap::new();
    let sink = RecordingSink::new();
    let resolver = VersionResolver::new(
        Some(&repo),
        &signals,
        PlatformVersion::new("1.12.2"),
        VersionOptions::default(),
        &sink,
    );

    resolver.version().unwrap();
    resolver.version().unwrap();
    resolver.publish_version().unwrap();

    let info: Vec<String> = LOGGER
        .lines
        .lock()
        .unwrap()
        .iter()
        .filter(|(level, _)| *level == Level::Info)
        .map(|(_, line)| line.clone())
        .collect();

    assert_eq!(
        info,
        vec![
            "Auto-detected version 1.12.2-2.1.3.0-develop".to_string(),
            "Auto-detected publish version 1.12.2-2.1".to_string(),
        ]
    );
}
