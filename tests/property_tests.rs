//! Property-based tests for the integrator and the export parser.

use corrbook::corrtest::{cycle_segments, parse_str, CorrtestFile, DATA_START_LINE, HEADER_LINE, PARAMS_LINE};
use corrbook::integrate::{integrate, Step};
use proptest::prelude::*;

fn export(params: &str, header: &str, rows: &[String]) -> String {
    let mut lines: Vec<String> = (1..DATA_START_LINE)
        .map(|n| match n {
            PARAMS_LINE => format!("Params: {}", params),
            HEADER_LINE => header.to_string(),
            _ => String::new(),
        })
        .collect();
    lines.extend(rows.iter().cloned());
    lines.join("\n")
}

proptest! {
    /// The integral has the length of its input and starts at zero
    #[test]
    fn test_integral_shape(
        y in prop::collection::vec(-1e6f64..1e6, 0..200),
        h in 1e-3f64..1e3,
    ) {
        let r = integrate(&y, Step::Uniform(h)).unwrap();
        prop_assert_eq!(r.len(), y.len());
        if !r.is_empty() {
            prop_assert_eq!(r[0], 0.0);
        }
    }

    /// A uniform step equals an abscissa with the same spacing.
    /// Dyadic steps and small integer samples keep both sides exact.
    #[test]
    fn test_uniform_matches_abscissa(
        y in prop::collection::vec(-1000i32..1000, 1..100),
        exponent in -4i32..4,
    ) {
        let h = 2f64.powi(exponent);
        let y: Vec<f64> = y.into_iter().map(f64::from).collect();
        let x: Vec<f64> = (0..y.len()).map(|i| i as f64 * h).collect();

        let uniform = integrate(&y, Step::Uniform(h)).unwrap();
        let abscissa = integrate(&y, Step::Abscissa(&x)).unwrap();
        prop_assert_eq!(uniform, abscissa);
    }

    /// A constant series integrates to a straight line
    #[test]
    fn test_constant_series(c in -100i32..100, n in 1usize..100) {
        let c = f64::from(c);
        let r = integrate(&vec![c; n], Step::Uniform(0.5)).unwrap();
        for (i, v) in r.iter().enumerate() {
            prop_assert_eq!(*v, c * 0.5 * i as f64);
        }
    }

    /// Cycle segments cover every row exactly once, in order
    #[test]
    fn test_cycle_segments_partition(
        mut starts in prop::collection::vec(0usize..300, 0..20),
        len in 0usize..300,
    ) {
        starts.sort_unstable();
        let segments = cycle_segments(&starts, len);

        let mut next = 0;
        for segment in &segments {
            prop_assert_eq!(segment.start, next);
            prop_assert!(segment.end > segment.start);
            next = segment.end;
        }
        prop_assert_eq!(next, len);
    }

    /// Every channel and the charge series have one entry per data row
    #[test]
    fn test_channels_share_length(
        rows in prop::collection::vec((0.0f64..100.0, -1.0f64..1.0, -1e-3f64..1e-3), 1..60),
    ) {
        let lines: Vec<String> = rows
            .iter()
            .map(|(t, e, i)| format!("{} {} {}", t, e, i))
            .collect();
        let content = export("ExpType=ID_OCP", "Time E I", &lines);
        let file = CorrtestFile::parse_str(&content).unwrap();

        for code in file.channels.codes() {
            prop_assert_eq!(file.channels.channel(code).unwrap().len(), rows.len());
        }
        prop_assert_eq!(file.charge.len(), rows.len());
    }

    /// Per-cycle CV columns are all as long as the current channel
    #[test]
    fn test_cv_cycle_columns_padded(
        n in 2usize..60,
        markers in prop::collection::vec(1usize..60, 0..5),
    ) {
        let lines: Vec<String> = (0..n)
            .map(|row| {
                let marker = if markers.contains(&row) { " CYCLE" } else { "" };
                format!("{} {} {}{}", row as f64 * 0.1, row as f64 * 0.01, 1e-4, marker)
            })
            .collect();
        let content = export("ExpType=ID_CV&ScanRate=0.1&Frq=10", "Time E I", &lines);
        let dataset = parse_str(&content).unwrap();

        prop_assert!(dataset.columns.len() >= 5);
        prop_assert_eq!((dataset.columns.len() - 3) % 2, 0);
        for column in &dataset.columns[3..] {
            prop_assert_eq!(column.len(), n);
        }
        // Cycle currents together hold each sample once
        let cycle_values: usize = dataset.columns[3..]
            .iter()
            .step_by(2)
            .map(|c| c.value_count())
            .sum();
        prop_assert_eq!(cycle_values, n);
    }

    /// Arbitrary text never panics the parser
    #[test]
    fn test_parser_never_panics(content in "(?s).{0,2000}") {
        let _ = parse_str(&content);
    }
}
