use freqhist_core::{
    compute, default_output_path, read_lines, run, BinPolicy, FreqHistError, RangeFilter, RunSettings, Variant,
};
use std::io::Write;
use std::path::Path;
use tempfile::{NamedTempFile, TempDir};

fn write_fixture(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn is_png(path: &Path) -> bool {
    let bytes = std::fs::read(path).unwrap();
    bytes.starts_with(&[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'])
}

#[test]
fn integer_range_single_line() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "one.txt", "17\n");
    let report = compute(&input, &RunSettings::for_variant(Variant::IntegerRange)).unwrap();
    assert_eq!(report.histogram.counts, vec![1]);
    assert_eq!(report.bounds, (17, 17));
}

#[test]
fn integer_range_bins_span_data() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "freqs.txt", " 98\n110\n110\n134 \n136\n");
    let report = compute(&input, &RunSettings::for_variant(Variant::IntegerRange)).unwrap();
    assert_eq!(report.policy, BinPolicy::PerValue);
    assert_eq!(report.histogram.bin_count(), 136 - 98 + 1);
    assert_eq!(report.excluded, 0);
    assert_eq!(report.histogram.total(), 5);
    assert_eq!(report.histogram.counts[110 - 98], 2);
}

#[test]
fn integer_fixed_scenario() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "raw.txt", "0\n255\n255\n128\n");
    let report = compute(&input, &RunSettings::for_variant(Variant::IntegerFixed)).unwrap();
    let counts = &report.histogram.counts;
    assert_eq!(counts.len(), 255);
    assert_eq!(counts[0], 1);
    assert_eq!(counts[128], 1);
    assert_eq!(counts[254], 2);
    assert_eq!(counts.iter().sum::<u64>(), 4);
}

#[test]
fn csv_rescale_scenario() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "log.csv", "header1\nheader2\n\"label\",-1.0,1.0,0.0\n");
    let report = compute(&input, &RunSettings::for_variant(Variant::CsvRescale)).unwrap();
    assert_eq!(report.parsed_samples, 3);
    assert_eq!(report.bounds, (0, 255));
    let counts = &report.histogram.counts;
    assert_eq!(counts[0], 1);
    assert_eq!(counts[128], 1);
    assert_eq!(counts[254], 1);
}

#[test]
fn bounds_override_filters_samples() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "wide.txt", "-10\n0\n5\n255\n300\n");
    let mut settings = RunSettings::for_variant(Variant::IntegerRange);
    settings.filter = RangeFilter::new(Some(0), Some(255));
    let report = compute(&input, &settings).unwrap();
    assert_eq!(report.parsed_samples, 5);
    assert_eq!(report.excluded, 2);
    assert_eq!(report.histogram.bin_count(), 256);
    assert_eq!(report.histogram.total(), 3);
}

#[test]
fn repeated_runs_identical() {
    let mut tmp = NamedTempFile::new().unwrap();
    for i in 0..500u64 {
        writeln!(tmp, "{}", (i.wrapping_mul(2654435761) % 97) as i64 - 40).unwrap();
    }
    tmp.flush().unwrap();
    let mut csv = NamedTempFile::new().unwrap();
    writeln!(csv, "altitude,temperature,humidity").unwrap();
    writeln!(csv, "x,y,z").unwrap();
    for i in 0..250u64 {
        let a = (i.wrapping_mul(2654435761) % 2001) as f64 / 1000.0 - 1.0;
        let b = ((i ^ 7).wrapping_mul(2654435761) % 2001) as f64 / 1000.0 - 1.0;
        writeln!(csv, "row{i},{a},{b}").unwrap();
    }
    csv.flush().unwrap();
    for variant in Variant::ALL {
        let input = if variant == Variant::CsvRescale { csv.path() } else { tmp.path() };
        let settings = RunSettings::for_variant(variant);
        let a = compute(input, &settings).unwrap();
        let b = compute(input, &settings).unwrap();
        assert_eq!(a.histogram, b.histogram);
        assert_eq!(a.bounds, b.bounds);
        assert_eq!(a.histogram.total(), 500);
    }
}

#[test]
fn crlf_integer_lines() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "crlf.txt", "1\r\n2\r\n");
    assert_eq!(read_lines(&input).unwrap(), vec!["1", "2"]);
    let report = compute(&input, &RunSettings::for_variant(Variant::IntegerRange)).unwrap();
    assert_eq!(report.parsed_samples, 2);
    assert_eq!(report.histogram.counts, vec![1, 1]);
}

#[test]
fn crlf_csv_last_field() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "crlf.csv", "h1\r\nh2\r\nlabel,-1.0,1.0\r\n");
    let report = compute(&input, &RunSettings::for_variant(Variant::CsvRescale)).unwrap();
    assert_eq!(report.parsed_samples, 2);
    assert_eq!(report.bounds, (0, 255));
    assert_eq!(report.histogram.counts[254], 1);
}

#[test]
fn trailing_newline_is_not_a_record() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "trail.txt", "5\n6\n");
    assert_eq!(read_lines(&input).unwrap().len(), 2);
}

#[test]
fn missing_file_is_input_error() {
    let dir = TempDir::new().unwrap();
    let err = compute(&dir.path().join("absent.txt"), &RunSettings::for_variant(Variant::IntegerFixed)).unwrap_err();
    assert!(matches!(err, FreqHistError::InputAccess { .. }));
}

#[test]
fn malformed_line_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "bad.txt", "1\n2\nthree\n");
    let err = compute(&input, &RunSettings::for_variant(Variant::IntegerRange)).unwrap_err();
    assert!(matches!(err, FreqHistError::Parse { line: 3, .. }));
}

#[test]
fn empty_file_is_degenerate() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "empty.txt", "");
    let err = compute(&input, &RunSettings::for_variant(Variant::IntegerRange)).unwrap_err();
    assert!(matches!(err, FreqHistError::DegenerateData(_)));
    // header only
    let input = write_fixture(&dir, "header.csv", "h1\nh2\n");
    let err = compute(&input, &RunSettings::for_variant(Variant::CsvRescale)).unwrap_err();
    assert!(matches!(err, FreqHistError::DegenerateData(_)));
}

#[test]
fn run_writes_png_next_to_input() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "freqs.txt", "1\n2\n2\n3\n3\n3\n");
    let mut settings = RunSettings::for_variant(Variant::IntegerRange);
    settings.render.width = 320;
    settings.render.height = 200;
    let report = run(&input, &settings).unwrap();
    assert_eq!(report.output, default_output_path(&input));
    assert!(report.output.exists());
    assert!(is_png(&report.output));
}

#[test]
fn run_to_unwritable_path_is_output_error() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "freqs.txt", "1\n2\n");
    let mut settings = RunSettings::for_variant(Variant::IntegerRange);
    settings.output = Some(dir.path().join("no").join("such").join("dir.png"));
    let err = run(&input, &settings).unwrap_err();
    assert!(matches!(err, FreqHistError::OutputWrite { .. }));
}

#[test]
fn run_rejects_non_png_output() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "freqs.txt", "1\n2\n");
    let mut settings = RunSettings::for_variant(Variant::IntegerRange);
    settings.output = Some(dir.path().join("out.jpg"));
    let err = run(&input, &settings).unwrap_err();
    assert!(matches!(err, FreqHistError::OutputWrite { .. }));
    assert!(!dir.path().join("out.jpg").exists());
}
