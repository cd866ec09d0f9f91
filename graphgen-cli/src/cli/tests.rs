//! Unit tests for CLI parsing, command execution, and summary rendering.

use super::commands::{run_batch, run_generate};
use super::test_helpers::{read_dataset, run_cli_expecting_error, temp_dir};
use super::{
    BatchArgs, Cli, CliError, Command, Destination, ExecutionSummary, GenerateArgs,
    render_summary, run_cli,
};

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use graphgen_core::{BatchFile, BatchSummary, GenerationSummary, GeneratorError};
use graphgen_test_support::tracing::RecordingLayer;
use rstest::rstest;
use tracing_subscriber::layer::SubscriberExt;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn generate_args(path: PathBuf, num_nodes: usize, edge_probability: f64) -> GenerateArgs {
    GenerateArgs {
        num_nodes,
        edge_probability,
        filename: path,
        seed: Some(7),
        ..GenerateArgs::default()
    }
}

#[rstest]
fn clap_defaults_match_documented_values() -> TestResult {
    let cli = Cli::try_parse_from(["graphgen"])?;
    assert!(cli.command.is_none());
    assert_eq!(cli.generate, GenerateArgs::default());
    assert_eq!(cli.generate.num_nodes, 1000);
    assert_eq!(
        cli.generate.filename,
        PathBuf::from("large_graph_positive_large.csv")
    );
    Ok(())
}

#[rstest]
fn clap_parses_positional_arguments() -> TestResult {
    let cli = Cli::try_parse_from(["graphgen", "12", "0.25", "0.5", "out.csv", "--seed", "9"])?;
    assert_eq!(
        cli.generate,
        GenerateArgs {
            num_nodes: 12,
            edge_probability: 0.25,
            negative_weight_probability: 0.5,
            filename: PathBuf::from("out.csv"),
            seed: Some(9),
        }
    );
    Ok(())
}

#[rstest]
fn clap_parses_batch_subcommand() -> TestResult {
    let cli = Cli::try_parse_from(["graphgen", "batch", "--count", "3", "--max-nodes", "4"])?;
    let Some(Command::Batch(args)) = cli.command else {
        panic!("expected batch subcommand");
    };
    assert_eq!(args.count, 3);
    assert_eq!(args.min_nodes, 1);
    assert_eq!(args.max_nodes, 4);
    assert_eq!(args.directory, PathBuf::from("data"));
    Ok(())
}

#[rstest]
#[case::negative_count(&["graphgen", "-1"])]
#[case::fractional_count(&["graphgen", "2.5"])]
#[case::unparsable_probability(&["graphgen", "4", "often"])]
fn clap_rejects_malformed_arguments(#[case] args: &[&str]) {
    assert!(Cli::try_parse_from(args).is_err());
}

#[rstest]
fn negative_probability_reaches_validation() -> TestResult {
    let dir = temp_dir();
    let cli = Cli::try_parse_from([
        "graphgen",
        "4",
        "-0.5",
        "0",
        dir.path().join("g.csv").to_str().unwrap_or("g.csv"),
    ])?;
    let err = run_cli_expecting_error(cli, "negative probability must fail");
    assert!(matches!(
        err,
        CliError::Generator(GeneratorError::InvalidProbability {
            parameter: "edge_probability",
            ..
        })
    ));
    assert!(!dir.path().join("g.csv").exists());
    Ok(())
}

#[rstest]
#[case(0, 1.0, 0)]
#[case(1, 1.0, 0)]
#[case(4, 1.0, 6)]
#[case(9, 0.0, 0)]
fn generate_writes_expected_row_count(
    #[case] num_nodes: usize,
    #[case] edge_probability: f64,
    #[case] expected_rows: usize,
) -> TestResult {
    let dir = temp_dir();
    let path = dir.path().join("graph.csv");
    let summary = run_generate(generate_args(path.clone(), num_nodes, edge_probability))?;
    let dataset = read_dataset(&path, num_nodes);
    assert_eq!(dataset.rows.len(), expected_rows);
    let ExecutionSummary::Generated { summary, .. } = summary else {
        panic!("expected single-dataset summary");
    };
    assert_eq!(summary.edges_written, expected_rows);
    Ok(())
}

#[rstest]
fn generate_truncates_existing_file() -> TestResult {
    let dir = temp_dir();
    let path = dir.path().join("graph.csv");
    fs::write(&path, "stale contents that are much longer than the new dataset\n".repeat(50))?;
    run_generate(generate_args(path.clone(), 2, 0.0))?;
    assert_eq!(fs::read_to_string(&path)?, "source,target,weight\r\n");
    Ok(())
}

#[rstest]
fn generate_reports_unwritable_destination() {
    let dir = temp_dir();
    let path = dir.path().join("missing").join("graph.csv");
    let cli = Cli {
        command: Some(Command::Generate(generate_args(path, 3, 1.0))),
        generate: GenerateArgs::default(),
    };
    let err = run_cli_expecting_error(cli, "missing parent directory must fail");
    assert!(matches!(
        err,
        CliError::Generator(GeneratorError::Create { .. })
    ));
}

#[rstest]
fn seeded_runs_are_byte_identical() -> TestResult {
    let dir = temp_dir();
    let first = dir.path().join("first.csv");
    let second = dir.path().join("second.csv");
    run_generate(generate_args(first.clone(), 30, 0.4))?;
    run_generate(generate_args(second.clone(), 30, 0.4))?;
    assert_eq!(fs::read(&first)?, fs::read(&second)?);
    Ok(())
}

#[rstest]
fn batch_writes_numbered_files() -> TestResult {
    let dir = temp_dir();
    let directory = dir.path().join("data");
    let summary = run_batch(BatchArgs {
        count: 4,
        min_nodes: 2,
        max_nodes: 5,
        directory: directory.clone(),
        edge_probability: 1.0,
        negative_weight_probability: 0.0,
        seed: Some(11),
    })?;
    let ExecutionSummary::Batch { summary, .. } = summary else {
        panic!("expected batch summary");
    };
    assert_eq!(summary.files.len(), 4);
    for (offset, file) in summary.files.iter().enumerate() {
        let ordinal = offset + 1;
        assert_eq!(file.path, directory.join(format!("graph{ordinal}.csv")));
        assert!((2..=5).contains(&file.summary.num_nodes));
        let dataset = read_dataset(&file.path, file.summary.num_nodes);
        assert_eq!(dataset.rows.len(), file.summary.edges_written);
        assert_eq!(dataset.negative_count(), 0);
    }
    Ok(())
}

#[rstest]
fn render_summary_skips_stdout_destination() -> TestResult {
    let summary = ExecutionSummary::Generated {
        destination: Destination::Stdout,
        summary: GenerationSummary::default(),
    };
    let mut buffer = Vec::new();
    render_summary(&summary, &mut buffer)?;
    assert!(buffer.is_empty());
    Ok(())
}

#[rstest]
fn render_summary_lists_batch_files() -> TestResult {
    let summary = ExecutionSummary::Batch {
        directory: PathBuf::from("data"),
        summary: BatchSummary {
            files: vec![BatchFile {
                path: PathBuf::from("data/graph1.csv"),
                summary: GenerationSummary {
                    num_nodes: 3,
                    pairs_considered: 3,
                    edges_written: 2,
                    negative_edges: 0,
                },
            }],
        },
    };
    let mut buffer = Vec::new();
    render_summary(&summary, &mut buffer)?;
    let text = String::from_utf8(buffer)?;
    assert!(text.contains("directory: data"));
    assert!(text.contains("files: 1"));
    assert!(text.contains("edges: 2"));
    assert!(text.contains("data/graph1.csv\t3\t2"));
    Ok(())
}

#[rstest]
#[case("-", Destination::Stdout)]
#[case("out.csv", Destination::File(PathBuf::from("out.csv")))]
fn destination_maps_dash_to_stdout(#[case] raw: &str, #[case] expected: Destination) {
    assert_eq!(Destination::from_filename(raw.as_ref()), expected);
}

#[rstest]
fn generate_records_destination_on_span() -> TestResult {
    let dir = temp_dir();
    let path = dir.path().join("traced.csv");
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let cli = Cli {
        command: None,
        generate: generate_args(path, 3, 1.0),
    };

    tracing::subscriber::with_default(subscriber, || run_cli(cli))?;

    let run_span = layer.span("cli.run").expect("run span must exist");
    assert_eq!(run_span.fields.get("command"), Some(&"generate".to_owned()));
    let generate_span = layer.span("cli.generate").expect("generate span must exist");
    assert!(
        generate_span
            .fields
            .get("destination")
            .is_some_and(|value| value.ends_with("traced.csv"))
    );
    assert_eq!(generate_span.fields.get("num_nodes"), Some(&"3".to_owned()));
    Ok(())
}
