use {
    backend::printer::{Options, PatternPrinter},
    rstest::rstest,
    rstest_reuse::{apply, template},
    std::path::PathBuf,
};

#[template]
#[rstest]
fn examples(#[files("example_inputs/*.stdin")] path: PathBuf) {}

#[apply(examples)]
fn run_printer(path: PathBuf) {
    let example = Example::from(path);
    let mut output = Vec::new();
    PatternPrinter::default()
        .run(&mut example.input.as_bytes(), &mut output)
        .unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), example.expected_output);
}

#[apply(examples)]
fn run_printer_twice(path: PathBuf) {
    let example = Example::from(path);
    let printer = PatternPrinter::default();
    let mut first = Vec::new();
    let mut second = Vec::new();
    printer
        .run(&mut example.input.as_bytes(), &mut first)
        .unwrap();
    printer
        .run(&mut example.input.as_bytes(), &mut second)
        .unwrap();
    assert_eq!(first, second);
}

#[apply(examples)]
fn run_printer_with_unreachable_cap(path: PathBuf) {
    let example = Example::from(path);
    let printer = PatternPrinter::new(Options {
        max_rows: Some(usize::MAX),
        strict: false,
    });
    let mut output = Vec::new();
    printer
        .run(&mut example.input.as_bytes(), &mut output)
        .unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), example.expected_output);
}

#[rstest]
fn row_counts(#[values(0, 1, 2, 5, 13, 64)] n: usize) {
    let mut output = Vec::new();
    PatternPrinter::default()
        .run(&mut format!("{n}\n").as_bytes(), &mut output)
        .unwrap();
    let output = String::from_utf8(output).unwrap();
    let rows = output
        .strip_prefix(backend::printer::PROMPT)
        .unwrap()
        .lines()
        .collect::<Vec<_>>();
    assert_eq!(rows.len(), n);
    for (i, row) in rows.into_iter().enumerate() {
        assert_eq!(row.matches(backend::pattern::TOKEN).count(), i + 1);
        assert_eq!(row.len(), (i + 1) * backend::pattern::TOKEN.len());
    }
}

struct Example {
    input: String,
    expected_output: String,
}

impl From<PathBuf> for Example {
    fn from(mut path: PathBuf) -> Self {
        let input = std::fs::read_to_string(&path).unwrap();

        path.set_extension("stdout");
        let expected_output = std::fs::read_to_string(&path).unwrap_or_else(|e| {
            panic!("failed to read expected output file at path {path:?}: {e}")
        });

        Example {
            input,
            expected_output,
        }
    }
}
