//! Play back a JSON-lines recording (one [`HandFrame`] per line), as written
//! by [`crate::recorder::FrameRecorder`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

use pinch_gesture::HandFrame;
use tracing::{info, warn};

use super::HandSource;
use crate::error::SourceError;

pub struct ReplaySource {
    path:     PathBuf,
    interval: Duration,
    looped:   bool,
}

impl ReplaySource {
    /// Check that `path` can be opened; playback starts when the source runs.
    pub fn open(path: &Path, fps: f32, looped: bool) -> Result<Self, SourceError> {
        open_file(path)?;
        Ok(ReplaySource {
            path: path.to_path_buf(),
            interval: Duration::from_secs_f32(1.0 / fps.max(0.001)),
            looped,
        })
    }
}

fn open_file(path: &Path) -> Result<File, SourceError> {
    File::open(path).map_err(|e| SourceError::Open {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Decode a recording line by line.  Blank lines are skipped; malformed lines
/// yield an error carrying their 1-based line number.
pub fn read_frames<R: BufRead>(reader: R) -> impl Iterator<Item = Result<HandFrame, SourceError>> {
    reader.lines().enumerate().filter_map(|(i, line)| {
        let line = match line {
            Ok(l) => l,
            Err(e) => return Some(Err(SourceError::Parse(format!("line {}: {}", i + 1, e)))),
        };
        if line.trim().is_empty() {
            return None;
        }
        Some(
            serde_json::from_str(&line)
                .map_err(|e| SourceError::Parse(format!("line {}: {}", i + 1, e))),
        )
    })
}

impl HandSource for ReplaySource {
    fn run(self: Box<Self>, tx: Sender<HandFrame>) {
        loop {
            let file = match open_file(&self.path) {
                Ok(f) => f,
                Err(e) => {
                    warn!("{}", e);
                    return;
                }
            };

            let mut played = 0usize;
            for frame in read_frames(BufReader::new(file)) {
                match frame {
                    Ok(frame) => {
                        if tx.send(frame).is_err() { return; }
                        played += 1;
                        thread::sleep(self.interval);
                    }
                    Err(e) => warn!("Skipping recorded frame: {}", e),
                }
            }
            info!(frames = played, path = %self.path.display(), "replay finished");

            if !self.looped || played == 0 { return; }
        }
    }
}
