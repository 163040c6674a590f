use osrb_tree::OSRBTreeSet;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn initialize_logging() {
    // Only the first call in this binary installs the logger.
    let _ = TermLogger::init(LevelFilter::Trace, Config::default(), TerminalMode::Stderr, ColorChoice::Never);
}

/// Drives every insert and delete case with a trace logger installed.
#[test]
fn mutations_under_trace_logging() {
    initialize_logging();

    let mut set = OSRBTreeSet::new();
    for v in [10, 20, 30, 15, 25, 5, 1, 27, 26, 28] {
        assert!(set.insert(v));
    }
    for v in [1, 20, 10, 27, 5, 30, 15, 25, 26, 28] {
        assert!(set.remove(&v));
        assert!(set.iter().is_sorted());
    }
    assert!(set.is_empty());
}
