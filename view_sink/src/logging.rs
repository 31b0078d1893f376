//! A sink that only logs, for running against no host at all.

use tracing::info;

use crate::{zoom_factor_accepted, SinkError, ViewSink};

/// Logs each call at INFO and counts them.  Applies the same zoom range check
/// as a real host so refusals show up in the log too.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoggingSink {
    pub commands: u64,
    pub redraws:  u64,
}

impl LoggingSink {
    pub fn new() -> Self { LoggingSink::default() }
}

impl ViewSink for LoggingSink {
    fn rotate(&mut self, x_deg: f32, y_deg: f32) -> Result<(), SinkError> {
        self.commands += 1;
        info!(x_deg, y_deg, "rotate");
        Ok(())
    }

    fn pan(&mut self, dx: f32, dy: f32) -> Result<(), SinkError> {
        self.commands += 1;
        info!(dx, dy, "pan");
        Ok(())
    }

    fn zoom(&mut self, factor: f32) -> Result<(), SinkError> {
        if !zoom_factor_accepted(factor) {
            return Err(SinkError::ZoomOutOfRange { factor });
        }
        self.commands += 1;
        info!(factor, "zoom");
        Ok(())
    }

    fn redraw(&mut self) -> Result<(), SinkError> {
        self.redraws += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apply_or_log;
    use pinch_gesture::ViewCommand;

    #[test]
    fn counts_applied_commands_only() {
        let mut s = LoggingSink::new();
        apply_or_log(&mut s, &ViewCommand::Rotate { x_deg: 3.0, y_deg: 0.0 });
        apply_or_log(&mut s, &ViewCommand::Zoom { factor: 4.0 });
        assert_eq!(s.commands, 1);
        assert_eq!(s.redraws, 1);
    }
}
