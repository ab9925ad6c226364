//! Tests d'intégration pour genent core

use genent_core::output::{parse_entropies, parse_windows, write_binary_sequences, write_entropies, write_windows};
use genent_core::{entropy_series, ErrorKind, FailurePolicy, Pipeline, PipelineConfig, UnknownBasePolicy};

const TWO_RECORDS: &str = ">seq1\nACGT\n>seq2\nAAAA\n";

fn entropy_output(pipeline: &Pipeline, source: &str) -> Vec<u8> {
    let report = pipeline.run_str(source).unwrap();
    let mut out = Vec::new();
    for scored in &report.sequences {
        write_entropies(&mut out, &scored.entropies).unwrap();
    }
    out
}

#[test]
fn test_two_records_one_window_each() {
    let pipeline = Pipeline::new(PipelineConfig::new(8, 8)).unwrap();
    let report = pipeline.run_str(TWO_RECORDS).unwrap();

    assert_eq!(report.ids().collect::<Vec<_>>(), vec!["seq1", "seq2"]);

    let seq1 = report.get("seq1").unwrap();
    let windows: Vec<&str> = seq1.windows().unwrap().map(|w| w.text).collect();
    assert_eq!(windows, vec!["00011011"]);
    assert!((seq1.entropies[0] - 1.0).abs() < 1e-12);

    let seq2 = report.get("seq2").unwrap();
    let windows: Vec<&str> = seq2.windows().unwrap().map(|w| w.text).collect();
    assert_eq!(windows, vec!["00000000"]);
    assert_eq!(report.series("seq2").unwrap(), &[0.0]);
}

#[test]
fn test_two_records_window_of_four() {
    // La taille de fenêtre compte des chiffres encodés, pas des bases
    let pipeline = Pipeline::new(PipelineConfig::new(4, 4)).unwrap();
    let report = pipeline.run_str(TWO_RECORDS).unwrap();

    let seq1 = report.series("seq1").unwrap();
    assert_eq!(seq1.len(), 2);
    for value in seq1 {
        assert!((value - 0.8112781244591328).abs() < 1e-12);
    }
    assert_eq!(report.series("seq2").unwrap(), &[0.0, 0.0]);
}

#[test]
fn test_runs_are_byte_identical() {
    let source = ">a\nGATTACAGATTACANNNACGT\n>b\nCCCCGGGGAAAATTTT\n>c\nACGTACGTACGTACGTACGT\n";
    let pipeline = Pipeline::new(PipelineConfig::new(10, 3)).unwrap();

    let first = entropy_output(&pipeline, source);
    let second = entropy_output(&pipeline, source);
    assert_eq!(first, second);

    let sequential = Pipeline::new(PipelineConfig {
        parallel: false,
        ..PipelineConfig::new(10, 3)
    })
    .unwrap();
    assert_eq!(first, entropy_output(&sequential, source));
}

#[test]
fn test_stages_through_wire_format() {
    // Même résultat en passant par les fichiers intermédiaires
    let pipeline = Pipeline::new(PipelineConfig::new(6, 2)).unwrap();
    let report = pipeline.run_str(">x\nACGTTTGACCA\n").unwrap();
    let scored = report.first().unwrap();

    let mut binary = Vec::new();
    write_binary_sequences(&mut binary, [&scored.encoded]).unwrap();
    let binary = String::from_utf8(binary).unwrap();
    assert!(binary.starts_with("Sequence ID: x\nBinary Sequence: 0001101111111000010100\n"));

    let mut window_file = Vec::new();
    write_windows(&mut window_file, scored.windows().unwrap()).unwrap();
    let windows = parse_windows(window_file.as_slice()).unwrap();
    let rescored = entropy_series(windows.iter().map(String::as_str)).unwrap();
    assert_eq!(rescored, scored.entropies);

    let mut entropy_file = Vec::new();
    write_entropies(&mut entropy_file, &rescored).unwrap();
    assert_eq!(parse_entropies(entropy_file.as_slice()).unwrap(), scored.entropies);
}

#[test]
fn test_unknown_bases_pass_through_by_default() {
    let pipeline = Pipeline::new(PipelineConfig::new(4, 1)).unwrap();
    let report = pipeline.run_str(">n\nANNA\n").unwrap();
    let scored = report.first().unwrap();

    assert_eq!(scored.encoded.bits, "00NN00");
    assert_eq!(scored.encoded.passed_through, 2);
    // Trois fenêtres: 00NN, 0NN0, NN00
    assert_eq!(scored.entropies.len(), 3);
    for value in &scored.entropies {
        assert!((value - 1.0).abs() < 1e-12);
    }
}

#[test]
fn test_strict_encoding_with_skip() {
    let pipeline = Pipeline::new(PipelineConfig {
        unknown_bases: UnknownBasePolicy::Reject,
        failure_policy: FailurePolicy::Skip,
        ..PipelineConfig::new(2, 2)
    })
    .unwrap();

    let report = pipeline.run_str(">good\nAC\n>bad\nANC\n").unwrap();
    assert_eq!(report.len(), 1);
    assert_eq!(report.skipped[0].id, "bad");
    assert_eq!(report.skipped[0].error.kind(), ErrorKind::Format);
    assert!(report.skipped[0].error.to_string().contains("position 1"));
}

#[test]
fn test_content_before_header_aborts() {
    let pipeline = Pipeline::new(PipelineConfig::default()).unwrap();
    let err = pipeline.run_str("ACGT\n>a\nAC\n").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
}

#[test]
fn test_run_path() {
    let dir = std::env::temp_dir().join(format!("genent-core-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("input.fasta");
    std::fs::write(&path, TWO_RECORDS).unwrap();

    let pipeline = Pipeline::new(PipelineConfig::new(8, 8)).unwrap();
    let report = pipeline.run_path(&path).unwrap();
    assert_eq!(report.len(), 2);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_whitespace_windows_survive_wire_format() {
    for (source, size) in [(">x\nA C\n", 3), (">x\nA  C\n", 2)] {
        let pipeline = Pipeline::new(PipelineConfig::new(size, 1)).unwrap();
        let report = pipeline.run_str(source).unwrap();
        let scored = report.first().unwrap();

        let mut window_file = Vec::new();
        write_windows(&mut window_file, scored.windows().unwrap()).unwrap();
        let windows = parse_windows(window_file.as_slice()).unwrap();
        assert_eq!(windows.len(), scored.entropies.len());

        let rescored = entropy_series(windows.iter().map(String::as_str)).unwrap();
        assert_eq!(rescored, scored.entropies);
    }
}
