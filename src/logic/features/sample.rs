//! Placeholder sample CSV
//!
//! Used when the server cannot provide `/eeg/sample`. The values are
//! uniform noise in [-1, 1] and carry no meaning; the file only shows the
//! expected layout (header `f0..f1023`, one sample per row).

use rand::Rng;

use crate::constants::SAMPLE_ROWS;
use super::vector::FEATURE_COUNT;

/// Generate a sample CSV with the default number of rows
pub fn generate_sample_csv() -> String {
    generate_sample_csv_with(&mut rand::thread_rng(), SAMPLE_ROWS)
}

/// Generate a sample CSV using the given RNG
pub fn generate_sample_csv_with<R: Rng>(rng: &mut R, rows: usize) -> String {
    let header = (0..FEATURE_COUNT)
        .map(|i| format!("f{}", i))
        .collect::<Vec<_>>()
        .join(",");

    let mut lines = Vec::with_capacity(rows + 1);
    lines.push(header);

    for _ in 0..rows {
        let row = (0..FEATURE_COUNT)
            .map(|_| format!("{:.4}", rng.gen_range(-1.0f64..=1.0)))
            .collect::<Vec<_>>()
            .join(",");
        lines.push(row);
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::features::parser;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sample_layout() {
        let csv = generate_sample_csv();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), SAMPLE_ROWS + 1);
        assert!(lines[0].starts_with("f0,f1,"));
        assert!(lines[0].ends_with("f1023"));
        for line in &lines[1..] {
            assert_eq!(line.split(',').count(), FEATURE_COUNT);
        }
    }

    #[test]
    fn test_sample_values_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let csv = generate_sample_csv_with(&mut rng, 3);

        for line in csv.lines().skip(1) {
            for field in line.split(',') {
                let v: f64 = field.parse().unwrap();
                assert!((-1.0..=1.0).contains(&v));
            }
        }
    }

    #[test]
    fn test_sample_parses() {
        let vector = parser::parse(&generate_sample_csv()).unwrap();
        assert_eq!(vector.len(), FEATURE_COUNT);
    }
}
