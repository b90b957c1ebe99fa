use mc_git_version::diagnostics::{Diagnostic, DiagnosticSink, RecordingSink, Severity};

#[test]
fn test_repository_unavailable_display() {
    let diagnostic = Diagnostic::RepositoryUnavailable {
        reason: "no git repository found".to_string(),
    };
    let msg = diagnostic.to_string();
    assert!(
        msg.contains("fallback version"),
        "Message should mention the fallback, got: {}",
        msg
    );
    assert!(msg.contains("no git repository found"));
}

#[test]
fn test_malformed_describe_display() {
    let diagnostic = Diagnostic::MalformedDescribe {
        describe: "release-123".to_string(),
        reason: "tag 'release' does not match vMAJOR.MINOR".to_string(),
    };
    let msg = diagnostic.to_string();
    assert!(msg.contains("release-123"), "got: {}", msg);
    assert!(msg.contains("vMAJOR.MINOR"), "got: {}", msg);
}

#[test]
fn test_branch_mismatch_display() {
    let diagnostic = Diagnostic::BranchVersionMismatch {
        branch_version: "1.13".to_string(),
        platform_version: "1.12.2".to_string(),
    };
    let msg = diagnostic.to_string();
    assert!(msg.contains("1.13"));
    assert!(msg.contains("1.12.2"));
    assert_eq!(diagnostic.severity(), Severity::Warning);
}

#[test]
fn test_sink_through_reference() {
    let sink = RecordingSink::new();
    let by_ref: &dyn DiagnosticSink = &&sink;
    by_ref.report(&Diagnostic::RepositoryUnavailable {
        reason: "x".to_string(),
    });
    assert_eq!(sink.count(Severity::Error), 1);
}
