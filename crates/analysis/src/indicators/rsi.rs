/// RSI (Relative Strength Index) over a full close-price series.
///
/// Wilder smoothing: average gain and loss each carry weight `1/period`
/// per new observation, seeded with the simple mean of the first `period`
/// gain/loss values. The change at position 0 is taken as zero (no prior
/// close), so the first defined value lands at index `period - 1`.
#[derive(Debug, Clone)]
pub struct Rsi {
    pub period: usize,
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        assert!(period >= 2, "RSI period must be >= 2");
        Self { period }
    }

    /// Compute the aligned RSI column. Values are in `[0, 100]`.
    ///
    /// Zero-denominator conventions: no losses observed reads 100, no
    /// gains reads 0, a fully flat window (both averages zero) reads a
    /// neutral 50.
    pub fn series(&self, closes: &[f64]) -> Vec<Option<f64>> {
        let n = self.period;
        let mut out = vec![None; closes.len()];
        if closes.len() < n {
            return out;
        }

        // Per-step gains and losses; position 0 contributes zero change.
        let mut gains = Vec::with_capacity(closes.len());
        let mut losses = Vec::with_capacity(closes.len());
        gains.push(0.0);
        losses.push(0.0);
        for w in closes.windows(2) {
            let delta = w[1] - w[0];
            gains.push(delta.max(0.0));
            losses.push((-delta).max(0.0));
        }

        let mut avg_gain = gains[..n].iter().sum::<f64>() / n as f64;
        let mut avg_loss = losses[..n].iter().sum::<f64>() / n as f64;
        out[n - 1] = Some(rsi_value(avg_gain, avg_loss));

        for i in n..closes.len() {
            avg_gain = (avg_gain * (n - 1) as f64 + gains[i]) / n as f64;
            avg_loss = (avg_loss * (n - 1) as f64 + losses[i]) / n as f64;
            out[i] = Some(rsi_value(avg_gain, avg_loss));
        }
        out
    }
}

fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        // Flat prices are neutral; pure gains saturate the oscillator.
        return if avg_gain == 0.0 { 50.0 } else { 100.0 };
    }
    let rs = avg_gain / avg_loss;
    100.0 - 100.0 / (1.0 + rs)
}
