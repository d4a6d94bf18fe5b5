use pretty_assertions::assert_eq;
use rate_trace_filter::commands::{execute_filter, run, FilterArgs};
use rate_trace_filter::output::{read_report, render_totals};
use rate_trace_filter::utils::config::{FloatStyle, MalformedPolicy};
use rate_trace_filter::utils::TraceError;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const HEADER: &str =
    "Time\tNode\tFaceId\tFaceDescr\tType\tPackets\tKilobytes\tPacketRaw\tKilobytesRaw\n";

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new(trace: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("rate-trace.txt"), trace).unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn args(&self) -> FilterArgs {
        FilterArgs {
            input: self.path("rate-trace.txt"),
            in_output: self.path("in.txt"),
            out_output: self.path("out.txt"),
            ..Default::default()
        }
    }

    fn run(&self, policy: MalformedPolicy) -> Result<rate_trace_filter::commands::FilterOutcome, TraceError> {
        run(
            &self.path("rate-trace.txt"),
            &self.path("in.txt"),
            &self.path("out.txt"),
            policy,
        )
    }

    fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name)).unwrap()
    }
}

fn row(node: &str, face: &str, event_type: &str, packets: &str) -> String {
    format!("10.5\t{node}\t257\t{face}\t{event_type}\t{packets}\t0.25\t{packets}\t0.25\n")
}

#[test]
fn test_scenario() {
    let l1 = row("0", "appFace://", "InSatisfiedInterests", "3.5");
    let l2 = row("0", "appFace://", "OutInterests", "2.0");
    let l3 = row("1", "appFace://", "InSatisfiedInterests", "9.0");
    let l4 = row("0", "other://", "OutInterests", "4.0");
    let ws = Workspace::new(&[HEADER, &l1, &l2, &l3, &l4].concat());

    let outcome = ws.run(MalformedPolicy::Abort).unwrap();

    assert_eq!(ws.read("in.txt"), l1);
    assert_eq!(ws.read("out.txt"), l2);
    assert_eq!(
        render_totals(outcome.in_total(), outcome.out_total(), FloatStyle::Shortest),
        "InInterest: 3.5\nOutInterest: 2.0\n"
    );
}

#[test]
fn test_order_and_sums() {
    let rows = [
        row("0", "appFace://", "OutInterests", "1"),
        row("0", "appFace://", "InSatisfiedInterests", "0.1"),
        row("0", "netDeviceFace://", "OutInterests", "50"),
        row("0", "appFace://", "OutInterests", "2"),
        row("0", "appFace://", "InSatisfiedInterests", "0.2"),
        row("0", "appFace://", "InData", "7"),
        row("0", "appFace://", "OutInterests", "3"),
    ];
    let ws = Workspace::new(&format!("{HEADER}{}", rows.concat()));

    let outcome = ws.run(MalformedPolicy::Abort).unwrap();

    assert_eq!(ws.read("out.txt"), [&*rows[0], &*rows[3], &*rows[6]].concat());
    assert_eq!(ws.read("in.txt"), [&*rows[1], &*rows[4]].concat());
    assert_eq!(outcome.out_total(), 6.0);
    assert_eq!(outcome.in_total(), 0.1 + 0.2);
    assert_eq!(outcome.stats.lines_read, 7);
}

#[test]
fn test_header_only_trace() {
    let ws = Workspace::new(HEADER);

    let outcome = ws.run(MalformedPolicy::Abort).unwrap();

    assert_eq!(outcome.in_total(), 0.0);
    assert_eq!(outcome.out_total(), 0.0);
    assert_eq!(ws.read("in.txt"), "");
    assert_eq!(ws.read("out.txt"), "");
}

#[test]
fn test_short_lines_never_written() {
    let short = "10.5\t0\t257\tappFace://\n";
    let good = row("0", "appFace://", "OutInterests", "4");
    let ws = Workspace::new(&[HEADER, short, &good, "\n"].concat());

    let outcome = ws.run(MalformedPolicy::Abort).unwrap();

    assert_eq!(outcome.stats.short_lines, 2);
    assert_eq!(ws.read("out.txt"), good);
    assert_eq!(ws.read("in.txt"), "");
}

#[test]
fn test_runs_are_idempotent() {
    let trace = [
        HEADER,
        &row("0", "appFace://", "OutInterests", "4"),
        &row("0", "appFace://", "InSatisfiedInterests", "2"),
    ]
    .concat();
    let ws = Workspace::new(&trace);

    ws.run(MalformedPolicy::Abort).unwrap();
    let first = (fs::read(ws.path("in.txt")).unwrap(), fs::read(ws.path("out.txt")).unwrap());

    ws.run(MalformedPolicy::Abort).unwrap();
    let second = (fs::read(ws.path("in.txt")).unwrap(), fs::read(ws.path("out.txt")).unwrap());

    assert_eq!(first, second);
}

#[test]
fn test_five_field_row_is_not_a_match() {
    let five_fields = "0.5\t0\t1\tappFace://\tOutInterests\n";
    let good = "0.5\t0\t1\tappFace://\tOutInterests\t2\n";
    let ws = Workspace::new(&[HEADER, five_fields, good].concat());

    let outcome = ws.run(MalformedPolicy::Abort).unwrap();

    assert_eq!(outcome.out_total(), 2.0);
    assert_eq!(outcome.stats.short_lines, 0);
    assert_eq!(ws.read("out.txt"), good);
}

#[test]
fn test_unterminated_five_field_last_row_lacks_count() {
    let trace = [
        HEADER,
        &row("0", "appFace://", "OutInterests", "2"),
        "0.5\t0\t1\tappFace://\tOutInterests",
    ]
    .concat();
    let ws = Workspace::new(&trace);

    let err = ws.run(MalformedPolicy::Abort).unwrap_err();

    assert!(matches!(err, TraceError::MalformedNumericField { line: 3, .. }));
}

#[test]
fn test_crlf_lines_copied_verbatim() {
    let line = "10.5\t0\t257\tappFace://\tOutInterests\t5\t0.25\t5\t0.25\r\n";
    let ws = Workspace::new(&format!("{HEADER}{line}"));

    let outcome = ws.run(MalformedPolicy::Abort).unwrap();

    assert_eq!(outcome.out_total(), 5.0);
    assert_eq!(ws.read("out.txt"), line);
}

#[test]
fn test_missing_input_leaves_outputs_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let in_path = dir.path().join("in.txt");
    fs::write(&in_path, "previous run\n").unwrap();

    let result = run(
        &dir.path().join("missing.txt"),
        &in_path,
        &dir.path().join("out.txt"),
        MalformedPolicy::Abort,
    );

    assert!(matches!(result, Err(TraceError::InputNotFound { .. })));
    assert_eq!(fs::read_to_string(&in_path).unwrap(), "previous run\n");
    assert!(!dir.path().join("out.txt").exists());
}

#[test]
fn test_unwritable_output() {
    let ws = Workspace::new(HEADER);

    let result = run(
        &ws.path("rate-trace.txt"),
        &ws.path("in.txt"),
        &ws.path("missing-dir/out.txt"),
        MalformedPolicy::Abort,
    );

    match result {
        Err(TraceError::OutputUnwritable { path, .. }) => {
            assert_eq!(path, ws.path("missing-dir/out.txt"));
        }
        other => panic!("expected unwritable output, got {:?}", other),
    }
}

#[test]
fn test_malformed_count_aborts_with_line_number() {
    let trace = [
        HEADER,
        &row("0", "appFace://", "OutInterests", "1"),
        &row("0", "appFace://", "InSatisfiedInterests", "many"),
    ]
    .concat();
    let ws = Workspace::new(&trace);

    let err = ws.run(MalformedPolicy::Abort).unwrap_err();

    assert!(matches!(err, TraceError::MalformedNumericField { line: 3, .. }));
    assert!(err.to_string().contains("Line 3"));
}

#[test]
fn test_malformed_count_skipped() {
    let good = row("0", "appFace://", "InSatisfiedInterests", "2.5");
    let trace = [
        HEADER,
        &row("0", "appFace://", "InSatisfiedInterests", "many"),
        &good,
    ]
    .concat();
    let ws = Workspace::new(&trace);

    let outcome = ws.run(MalformedPolicy::Skip).unwrap();

    assert_eq!(outcome.stats.malformed_skipped, 1);
    assert_eq!(outcome.in_total(), 2.5);
    assert_eq!(ws.read("in.txt"), good);
}

#[test]
fn test_execute_filter_writes_report() {
    let trace = [
        HEADER,
        &row("0", "appFace://", "InSatisfiedInterests", "3"),
        &row("0", "appFace://", "OutInterests", "4"),
        &row("0", "appFace://", "OutInterests", "5"),
    ]
    .concat();
    let ws = Workspace::new(&trace);
    let report_path = ws.path("reports/run.json");
    let args = FilterArgs {
        report: Some(report_path.clone()),
        ..ws.args()
    };

    let report = execute_filter(&args).unwrap();
    let loaded = read_report(&report_path).unwrap();

    assert_eq!(loaded, report);
    assert_eq!(loaded.in_total(), 3.0);
    assert_eq!(loaded.out_total(), 9.0);
    assert_eq!(loaded.out_sink.lines, 2);
    assert_eq!(loaded.out_sink.output, ws.path("out.txt"));
    assert!(Path::new(&loaded.input).ends_with("rate-trace.txt"));
}
