use determine_version::cli::{run, RunArgs, RunOutput};
use determine_version::Resolution;

#[test]
fn test_run_output_structure() {
    let out = run(&RunArgs::for_branch("release/2.0")).unwrap();
    assert_eq!(out.line, "::set-output name=version::2.0.0");
    assert_eq!(out.resolution.version(), "2.0.0");
}

#[test]
fn test_run_passthrough() {
    let out: RunOutput = run(&RunArgs::for_branch("feature/foo")).unwrap();
    assert_eq!(
        out.resolution,
        Resolution::Unprefixed("feature/foo".to_string())
    );
    assert_eq!(out.line, "::set-output name=version::feature/foo");
}

#[test]
fn test_run_args_for_branch() {
    let args = RunArgs::for_branch("v1.0");
    assert_eq!(args.branches, vec!["v1.0".to_string()]);
    assert_eq!(args.config_path, None);
}

#[test]
fn test_run_rejects_wrong_argument_counts() {
    for branches in [vec![], vec!["a".to_string(), "b".to_string()]] {
        let args = RunArgs {
            config_path: None,
            branches,
        };
        let err = run(&args).unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
