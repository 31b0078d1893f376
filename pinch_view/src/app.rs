//! Top-level application loop.
//!
//! `AppState` owns the [`GestureSession`], the host view and the optional
//! recorder.  It turns each incoming [`HandFrame`] into at most one view
//! command and applies it; [`run`] wires it to a frame source and, when
//! enabled, the preview window.

use std::path::PathBuf;
use std::sync::mpsc::{self, TryRecvError};
use std::time::Duration;

use tracing::{info, warn};

use pinch_gesture::{FrameOutcome, GestureSession, HandFrame, Tuning, ViewCommand};
use view_sink::{
    apply_or_log, connect_with_retry, LoggingSink, RetryPolicy, SimulatedView, SinkError, ViewSink,
};

use crate::config::{Config, SinkConfig, SinkKind, SourceKind};
use crate::error::PinchViewError;
use crate::recorder::FrameRecorder;
use crate::source::{open_source, SimInput};
use crate::visualizer::{describe_command, UiAction, Visualizer};

// ════════════════════════════════════════════════════════════════════════════
// HostView
// ════════════════════════════════════════════════════════════════════════════

/// The view commands are applied to.
#[derive(Debug, Clone)]
pub enum HostView {
    Simulated(SimulatedView),
    Logging(LoggingSink),
}

impl HostView {
    pub fn simulated(&self) -> Option<&SimulatedView> {
        match self {
            HostView::Simulated(v) => Some(v),
            HostView::Logging(_)   => None,
        }
    }

    pub fn summary(&self) -> String {
        match self {
            HostView::Simulated(v) => v.summary(),
            HostView::Logging(s)   => format!("logged {} commands", s.commands),
        }
    }

    fn inner(&mut self) -> &mut dyn ViewSink {
        match self {
            HostView::Simulated(v) => v,
            HostView::Logging(s)   => s,
        }
    }
}

impl ViewSink for HostView {
    fn rotate(&mut self, x_deg: f32, y_deg: f32) -> Result<(), SinkError> { self.inner().rotate(x_deg, y_deg) }
    fn pan(&mut self, dx: f32, dy: f32) -> Result<(), SinkError>           { self.inner().pan(dx, dy) }
    fn zoom(&mut self, factor: f32) -> Result<(), SinkError>               { self.inner().zoom(factor) }
    fn redraw(&mut self) -> Result<(), SinkError>                          { self.inner().redraw() }
}

/// Bring up the configured host view, retrying per `cfg`.
///
/// Both built-in hosts live in-process and are always available, so they
/// connect on the first attempt.  The retry policy only comes into play for
/// hosts whose connect step can fail.
pub fn open_sink(cfg: &SinkConfig) -> Result<HostView, SinkError> {
    let policy = RetryPolicy {
        interval:     Duration::from_secs(cfg.retry_interval_secs),
        max_attempts: cfg.connect_attempts,
    };
    let kind = cfg.kind;
    connect_with_retry(policy, || {
        Ok(match kind {
            SinkKind::Simulated => HostView::Simulated(SimulatedView::new()),
            SinkKind::Log       => HostView::Logging(LoggingSink::new()),
        })
    })
}

// ════════════════════════════════════════════════════════════════════════════
// AppState
// ════════════════════════════════════════════════════════════════════════════

/// Counters reported when a run ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub frames:   u64,
    pub applied:  u64,
    pub rejected: u64,
}

pub struct AppState {
    session:  GestureSession,
    sink:     HostView,
    recorder: Option<FrameRecorder>,
    last:     Option<FrameOutcome>,
    summary:  RunSummary,
    pub status: String,
}

impl AppState {
    pub fn new(
        tuning:   Tuning,
        sink:     HostView,
        recorder: Option<FrameRecorder>,
    ) -> Result<Self, PinchViewError> {
        Ok(AppState {
            session:  GestureSession::new(tuning)?,
            sink,
            recorder,
            last:     None,
            summary:  RunSummary::default(),
            status:   "Ready - pinch to orbit, two hands to pan or zoom".to_string(),
        })
    }

    /// Process one frame and apply its command.  Returns the command, whether
    /// or not the host accepted it.
    pub fn handle_frame(&mut self, frame: &HandFrame) -> Option<ViewCommand> {
        if let Some(rec) = self.recorder.as_mut() {
            if let Err(e) = rec.record(frame) {
                warn!("Recording stopped: {}", e);
                self.recorder = None;
            }
        }

        self.summary.frames += 1;
        let outcome = self.session.process_frame_detailed(&frame.hands);
        let command = outcome.command;

        if let Some(cmd) = &command {
            if apply_or_log(&mut self.sink, cmd) {
                self.summary.applied += 1;
                self.status = describe_command(cmd);
            } else {
                self.summary.rejected += 1;
                self.status = format!("host refused {}", describe_command(cmd));
            }
        }

        self.last = Some(outcome);
        command
    }

    /// Forget all tracking state; the view itself is left where it is.
    pub fn reset(&mut self) {
        self.session.reset();
        self.last = None;
        self.status = "Reset".to_string();
    }

    /// Close the recording and report.
    pub fn finish(self) -> Result<RunSummary, PinchViewError> {
        if let Some(rec) = self.recorder {
            rec.finish()?;
        }
        info!(
            frames   = self.summary.frames,
            applied  = self.summary.applied,
            rejected = self.summary.rejected,
            view     = %self.sink.summary(),
            "session ended"
        );
        Ok(self.summary)
    }

    // ── Accessors for the render loop ─────────────────────────────────────

    pub fn last_outcome(&self) -> Option<&FrameOutcome> { self.last.as_ref() }
    pub fn session(&self)      -> &GestureSession       { &self.session }
    pub fn sink(&self)         -> &HostView             { &self.sink }
    pub fn summary(&self)      -> RunSummary            { self.summary }
}

// ════════════════════════════════════════════════════════════════════════════
// run(): the main application loop
// ════════════════════════════════════════════════════════════════════════════

/// Options that come from the command line only.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Record every incoming frame to this JSON-lines file.
    pub record: Option<PathBuf>,
}

/// Run until the source ends (headless) or the window closes (preview).
///
/// `cfg` must already be validated.
pub fn run(cfg: Config, opts: RunOptions) -> Result<RunSummary, PinchViewError> {
    // ── Sim input channel ─────────────────────────────────────────────────
    let (sim_tx, sim_rx) = mpsc::channel::<SimInput>();
    let frames = open_source(&cfg.source, sim_rx)?;

    let sink     = open_sink(&cfg.sink)?;
    let recorder = opts.record.as_deref().map(FrameRecorder::create).transpose()?;
    let mut app  = AppState::new(cfg.tuning.clone(), sink, recorder)?;

    if !cfg.preview.enabled {
        for frame in frames.iter() {
            app.handle_frame(&frame);
        }
        info!("Frame source finished");
        return app.finish();
    }

    let sim_tx  = (cfg.source.kind == SourceKind::Sim).then_some(sim_tx);
    let mut vis = Visualizer::new(sim_tx)?;
    let lock_len = cfg.tuning.zoom_lock_frames;
    let mut source_done = false;

    // ── Main loop ─────────────────────────────────────────────────────────
    while vis.is_open() {
        match vis.poll_input() {
            UiAction::Quit     => break,
            UiAction::Reset    => app.reset(),
            UiAction::Continue => {}
        }

        while !source_done {
            match frames.try_recv() {
                Ok(frame) => { app.handle_frame(&frame); }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    source_done = true;
                    info!("Frame source finished");
                    app.status = format!("Source finished after {} frames - Q to quit", app.summary().frames);
                }
            }
        }

        vis.render(
            app.last_outcome(),
            app.session().zoom_lock(),
            lock_len,
            app.sink().simulated(),
            &app.status,
        );
    }

    app.finish()
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::sim::synthetic_frame;
    use pinch_gesture::Gesture;

    fn pointer(x: f32, primary: bool, secondary: bool) -> HandFrame {
        synthetic_frame(SimInput::Pointer { x, y: 0.5, primary, secondary })
    }

    fn make_app() -> AppState {
        AppState::new(Tuning::default(), HostView::Simulated(SimulatedView::new()), None).unwrap()
    }

    #[test]
    fn one_hand_drag_orbits_the_view() {
        let mut app = make_app();
        assert_eq!(app.handle_frame(&pointer(0.40, true, false)), None);
        let cmd = app.handle_frame(&pointer(0.45, true, false));
        assert!(matches!(cmd, Some(ViewCommand::Rotate { .. })));

        let view = app.sink().simulated().unwrap();
        assert!((view.yaw - (-15.0f32).to_radians()).abs() < 1e-3);
        assert_eq!(view.redraws, 1);
        assert_eq!(app.summary().applied, 1);
    }

    #[test]
    fn out_of_range_zoom_is_counted_as_rejected() {
        let mut app = make_app();
        app.handle_frame(&pointer(0.45, true, true));
        let cmd = app.handle_frame(&pointer(0.20, true, true));
        assert!(matches!(cmd, Some(ViewCommand::Zoom { factor }) if factor > 2.0));

        let s = app.summary();
        assert_eq!((s.applied, s.rejected), (0, 1));
        assert_eq!(app.sink().simulated().unwrap().scale, 1.0);
        assert_eq!(app.last_outcome().unwrap().gesture, Gesture::Zoom);
        assert!(app.status.starts_with("host refused"));
    }

    #[test]
    fn open_hand_does_nothing() {
        let mut app = make_app();
        for x in [0.3, 0.4, 0.5] {
            assert_eq!(app.handle_frame(&pointer(x, false, false)), None);
        }
        assert_eq!(app.summary().frames, 3);
        assert_eq!(app.sink().simulated().unwrap().redraws, 0);
    }

    #[test]
    fn reset_forgets_the_pinch() {
        let mut app = make_app();
        app.handle_frame(&pointer(0.40, true, false));
        app.reset();
        assert!(app.session().tracked().is_empty());
        assert_eq!(app.handle_frame(&pointer(0.45, true, false)), None);
    }

    #[test]
    fn in_process_hosts_connect_on_first_attempt() {
        let cfg = SinkConfig {
            kind: SinkKind::Simulated,
            retry_interval_secs: 0,
            connect_attempts: Some(1),
        };
        let sink = open_sink(&cfg).unwrap();
        assert_eq!(sink.simulated(), Some(&SimulatedView::new()));
    }

    #[test]
    fn log_sink_summary() {
        let sink = open_sink(&SinkConfig { kind: SinkKind::Log, ..SinkConfig::default() }).unwrap();
        assert!(sink.simulated().is_none());
        assert_eq!(sink.summary(), "logged 0 commands");
    }

    #[test]
    fn records_while_processing() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("rec.jsonl");
        let rec  = FrameRecorder::create(&path).unwrap();
        let mut app = AppState::new(Tuning::default(), HostView::Logging(LoggingSink::new()), Some(rec)).unwrap();
        app.handle_frame(&pointer(0.4, true, false));
        app.handle_frame(&HandFrame::empty());
        app.finish().unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn headless_replay_runs_to_completion() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("drag.jsonl");
        let mut rec = FrameRecorder::create(&path).unwrap();
        for i in 0..5 {
            rec.record(&pointer(0.3 + 0.02 * i as f32, true, false)).unwrap();
        }
        rec.finish().unwrap();

        let mut cfg = Config::default();
        cfg.preview.enabled    = false;
        cfg.source.kind        = SourceKind::Replay;
        cfg.source.replay_path = Some(path);
        cfg.source.replay_fps  = 1000.0;
        cfg.sink.kind          = SinkKind::Log;
        cfg.validate().unwrap();

        let summary = run(cfg, RunOptions::default()).unwrap();
        assert_eq!(summary, RunSummary { frames: 5, applied: 4, rejected: 0 });
    }
}
