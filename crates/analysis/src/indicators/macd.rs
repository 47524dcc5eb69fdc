use super::ema::ema_series;

/// MACD (Moving Average Convergence/Divergence) over a full close series.
///
/// `macd[i] = EMA(fast)[i] - EMA(slow)[i]`, defined once the slow EMA is.
/// The signal line is an EMA of the defined MACD values with span
/// `signal`, so its warm-up extends `signal - 1` positions further.
#[derive(Debug, Clone)]
pub struct Macd {
    pub fast: usize,
    pub slow: usize,
    pub signal: usize,
}

/// Aligned MACD columns, both the same length as the input closes.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdSeries {
    pub macd: Vec<Option<f64>>,
    pub signal: Vec<Option<f64>>,
}

impl Macd {
    pub fn new(fast: usize, slow: usize, signal: usize) -> Self {
        assert!(fast < slow, "MACD fast period must be less than slow period");
        assert!(signal >= 1, "MACD signal period must be >= 1");
        Self { fast, slow, signal }
    }

    /// Compute both columns from a close-price series (oldest first).
    pub fn series(&self, closes: &[f64]) -> MacdSeries {
        let fast = ema_series(closes, self.fast);
        let slow = ema_series(closes, self.slow);

        let macd: Vec<Option<f64>> = fast
            .iter()
            .zip(&slow)
            .map(|(f, s)| match (f, s) {
                (Some(f), Some(s)) => Some(f - s),
                _ => None,
            })
            .collect();

        // Smooth the defined region, then re-align onto the full column.
        let offset = macd.iter().position(|v| v.is_some()).unwrap_or(macd.len());
        let defined: Vec<f64> = macd[offset..].iter().copied().flatten().collect();
        let smoothed = ema_series(&defined, self.signal);

        let mut signal = vec![None; macd.len()];
        for (i, v) in smoothed.into_iter().enumerate() {
            signal[offset + i] = v;
        }

        MacdSeries { macd, signal }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macd_all_none_with_insufficient_data() {
        let macd = Macd::new(12, 26, 9);
        let out = macd.series(&vec![100.0; 20]);
        assert!(out.macd.iter().all(|v| v.is_none()));
        assert!(out.signal.iter().all(|v| v.is_none()));
    }

    #[test]
    fn macd_warmup_indices_for_default_periods() {
        let macd = Macd::new(12, 26, 9);
        let prices: Vec<f64> = (0..60).map(|i| 100.0 + i as f64 * 0.5).collect();
        let out = macd.series(&prices);

        // MACD line defined from slow - 1, signal from slow + signal - 2.
        for (i, v) in out.macd.iter().enumerate() {
            assert_eq!(v.is_some(), i >= 25, "macd index {i}");
        }
        for (i, v) in out.signal.iter().enumerate() {
            assert_eq!(v.is_some(), i >= 33, "signal index {i}");
        }
    }

    #[test]
    fn macd_columns_match_input_length() {
        let macd = Macd::new(3, 6, 3);
        for len in [0, 1, 5, 6, 8, 40] {
            let prices: Vec<f64> = (0..len).map(|i| 100.0 + i as f64).collect();
            let out = macd.series(&prices);
            assert_eq!(out.macd.len(), len);
            assert_eq!(out.signal.len(), len);
        }
    }

    #[test]
    fn macd_is_zero_on_constant_prices() {
        let macd = Macd::new(3, 6, 3);
        let out = macd.series(&vec![250.0; 20]);
        for v in out.macd.iter().flatten() {
            assert!(v.abs() < 1e-12);
        }
        for v in out.signal.iter().flatten() {
            assert!(v.abs() < 1e-12);
        }
    }

    #[test]
    fn macd_positive_in_sustained_uptrend() {
        // Fast EMA sits above slow EMA while prices keep rising.
        let macd = Macd::new(3, 6, 3);
        let prices: Vec<f64> = (0..30).map(|i| 100.0 + i as f64 * 2.0).collect();
        let out = macd.series(&prices);
        for v in out.macd.iter().flatten() {
            assert!(*v > 0.0, "expected positive MACD, got {v}");
        }
    }

    #[test]
    #[should_panic(expected = "fast period must be less than slow period")]
    fn macd_rejects_inverted_periods() {
        Macd::new(26, 12, 9);
    }
}
