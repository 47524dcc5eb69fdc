use serde::{Deserialize, Serialize};

use common::Signal;

/// RSI levels that split the oscillator into buy/sell/hold bands.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Thresholds {
    pub overbought: f64,
    pub oversold: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            overbought: 70.0,
            oversold: 30.0,
        }
    }
}

/// Map one RSI reading to a signal.
///
/// Strict inequalities on both sides: a reading exactly on a threshold,
/// and every warm-up `None`, stays `Hold`. Stateless per position, no
/// look-back.
pub fn signal_at(rsi: Option<f64>, thresholds: &Thresholds) -> Signal {
    match rsi {
        Some(v) if v > thresholds.overbought => Signal::Sell,
        Some(v) if v < thresholds.oversold => Signal::Buy,
        _ => Signal::Hold,
    }
}

/// Map a whole RSI column, position by position.
pub fn signal_series(rsi: &[Option<f64>], thresholds: &Thresholds) -> Vec<Signal> {
    rsi.iter().map(|v| signal_at(*v, thresholds)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_values_resolve_per_strict_inequality() {
        let t = Thresholds::default();
        assert_eq!(signal_at(Some(29.999), &t), Signal::Buy);
        assert_eq!(signal_at(Some(30.0), &t), Signal::Hold);
        assert_eq!(signal_at(Some(30.001), &t), Signal::Hold);
        assert_eq!(signal_at(Some(69.999), &t), Signal::Hold);
        assert_eq!(signal_at(Some(70.0), &t), Signal::Hold);
        assert_eq!(signal_at(Some(70.001), &t), Signal::Sell);
    }

    #[test]
    fn warmup_none_maps_to_hold() {
        assert_eq!(signal_at(None, &Thresholds::default()), Signal::Hold);
    }

    #[test]
    fn extremes_map_to_buy_and_sell() {
        let t = Thresholds::default();
        assert_eq!(signal_at(Some(0.0), &t), Signal::Buy);
        assert_eq!(signal_at(Some(100.0), &t), Signal::Sell);
    }

    #[test]
    fn custom_thresholds_are_respected() {
        let t = Thresholds {
            overbought: 80.0,
            oversold: 20.0,
        };
        assert_eq!(signal_at(Some(75.0), &t), Signal::Hold);
        assert_eq!(signal_at(Some(80.5), &t), Signal::Sell);
        assert_eq!(signal_at(Some(19.5), &t), Signal::Buy);
    }

    #[test]
    fn series_maps_position_by_position() {
        let t = Thresholds::default();
        let rsi = vec![None, Some(25.0), Some(50.0), Some(75.0)];
        assert_eq!(
            signal_series(&rsi, &t),
            vec![Signal::Hold, Signal::Buy, Signal::Hold, Signal::Sell]
        );
    }
}
