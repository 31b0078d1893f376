//! Record incoming hand frames as JSON lines, for later replay with
//! `--source replay`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use pinch_gesture::HandFrame;

use crate::error::PinchViewError;

pub struct FrameRecorder {
    path:    PathBuf,
    out:     BufWriter<File>,
    written: u64,
}

impl FrameRecorder {
    /// Create (or truncate) the recording file.
    pub fn create(path: &Path) -> Result<Self, PinchViewError> {
        let file = File::create(path)?;
        tracing::info!("Recording hand frames to {}", path.display());
        Ok(FrameRecorder { path: path.to_path_buf(), out: BufWriter::new(file), written: 0 })
    }

    pub fn record(&mut self, frame: &HandFrame) -> Result<(), PinchViewError> {
        serde_json::to_writer(&mut self.out, frame)
            .map_err(|e| PinchViewError::Io(e.into()))?;
        self.out.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }

    pub fn frames_written(&self) -> u64 { self.written }

    /// Flush buffered frames and close the file.
    pub fn finish(mut self) -> Result<u64, PinchViewError> {
        self.out.flush()?;
        tracing::info!(frames = self.written, path = %self.path.display(), "recording closed");
        Ok(self.written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::replay::read_frames;
    use pinch_gesture::{DetectedHand, Landmark};
    use std::io::BufReader;

    #[test]
    fn recording_replays_identically() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.jsonl");

        let hand = DetectedHand::new(vec![Landmark::new(0.25, 0.5); 21]);
        let frames = vec![
            HandFrame::new(vec![hand.clone()]),
            HandFrame::empty(),
            HandFrame { hands: vec![hand], timestamp_ms: Some(99) },
        ];

        let mut rec = FrameRecorder::create(&path).unwrap();
        for f in &frames {
            rec.record(f).unwrap();
        }
        assert_eq!(rec.frames_written(), 3);
        assert_eq!(rec.finish().unwrap(), 3);

        let file = File::open(&path).unwrap();
        let back: Vec<HandFrame> = read_frames(BufReader::new(file)).map(|f| f.unwrap()).collect();
        assert_eq!(back, frames);
    }

    #[test]
    fn create_in_missing_directory_fails() {
        assert!(FrameRecorder::create(Path::new("/nonexistent/dir/out.jsonl")).is_err());
    }
}
