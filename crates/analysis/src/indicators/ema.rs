/// Exponential moving average over a full series, index-aligned.
///
/// Seeded at index `span - 1` with the simple mean of the first `span`
/// values; earlier positions are `None`. From there the recurrence is
/// `ema[i] = v[i] * k + ema[i-1] * (1 - k)` with `k = 2 / (span + 1)`.
pub fn ema_series(values: &[f64], span: usize) -> Vec<Option<f64>> {
    assert!(span >= 1, "EMA span must be >= 1");

    let mut out = vec![None; values.len()];
    if values.len() < span {
        return out;
    }

    let k = 2.0 / (span as f64 + 1.0);
    let mut prev = values[..span].iter().sum::<f64>() / span as f64;
    out[span - 1] = Some(prev);

    for i in span..values.len() {
        prev = values[i] * k + prev * (1.0 - k);
        out[i] = Some(prev);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ema_all_none_when_insufficient_data() {
        let out = ema_series(&[1.0, 2.0], 3);
        assert_eq!(out, vec![None, None]);
    }

    #[test]
    fn ema_seeds_with_simple_mean() {
        let out = ema_series(&[2.0, 4.0, 6.0], 3);
        assert_eq!(out[0], None);
        assert_eq!(out[1], None);
        assert_eq!(out[2], Some(4.0));
    }

    #[test]
    fn ema_constant_input_stays_constant() {
        let out = ema_series(&[5.0; 10], 4);
        for v in out.iter().skip(3) {
            assert_eq!(*v, Some(5.0));
        }
    }

    #[test]
    fn ema_span_one_tracks_input() {
        let values = [1.0, 3.0, 2.0];
        let out = ema_series(&values, 1);
        assert_eq!(out, vec![Some(1.0), Some(3.0), Some(2.0)]);
    }

    #[test]
    fn ema_recurrence_matches_hand_computation() {
        // span 2: k = 2/3, seed = (10 + 12)/2 = 11
        let out = ema_series(&[10.0, 12.0, 15.0], 2);
        let k = 2.0 / 3.0;
        let expected = 15.0 * k + 11.0 * (1.0 - k);
        assert!((out[2].unwrap() - expected).abs() < 1e-12);
    }
}
