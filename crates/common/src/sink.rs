use async_trait::async_trait;

use crate::{ChartFrame, Result};

/// Consumer of one cycle's fully-computed output.
///
/// The sink receives the complete aligned frame on every cycle and must
/// hold no chart state of its own between calls; redraw decisions belong
/// entirely to the implementation.
#[async_trait]
pub trait FrameSink: Send + Sync {
    async fn render(&self, frame: &ChartFrame) -> Result<()>;
}
