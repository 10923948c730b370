use crate::all::*;

use std::process::{Child, ChildStdout, Command as ProcessCommand, Stdio};

// Row-major 8-bit grayscale frame.
#[derive(Clone)]
pub struct VideoFrame {
  pub data: Vec<u8>,
  pub width: usize,
  pub height: usize,
}

pub trait FrameSource {
  // A failed read ends the stream. Callers stop reading after the first error.
  fn read(&mut self) -> Result<&VideoFrame>;
}

// Decodes any ffmpeg input (file or capture device) to gray frames of the sensor size.
pub struct VideoInput {
  child: Child,
  child_stdout: ChildStdout,
  video_frame: VideoFrame,
}

impl VideoInput {
  pub fn new(path: &Path, format: Option<&str>, sensor: &SensorDimensions) -> Result<VideoInput> {
    let path = path.to_str().ok_or(anyhow!("Failed to parse video path."))?;
    let mut args: Vec<String> = vec!["-loglevel".into(), "error".into()];
    if let Some(format) = format {
      args.extend(["-f".into(), format.into()]);
    }
    args.extend([
      "-i".into(), path.into(),
      "-vf".into(), format!("scale={}:{}", sensor.width, sensor.height),
      "-f".into(), "rawvideo".into(),
      "-vcodec".into(), "rawvideo".into(),
      "-pix_fmt".into(), "gray".into(),
      "-".into(),
    ]);
    debug!("ffmpeg {}", args.join(" "));
    let mut child = ProcessCommand::new("ffmpeg").args(&args)
      .stdout(Stdio::piped())
      .spawn()
      .context("Failed to start ffmpeg.")?;
    let child_stdout = child.stdout.take().ok_or(anyhow!("ffmpeg has no stdout."))?;
    Ok(VideoInput {
      child,
      child_stdout,
      video_frame: VideoFrame {
        data: vec![0; sensor.width * sensor.height],
        width: sensor.width,
        height: sensor.height,
      },
    })
  }
}

impl FrameSource for VideoInput {
  fn read(&mut self) -> Result<&VideoFrame> {
    self.child_stdout.read_exact(&mut self.video_frame.data)
      .context("Reading bytes from video input failed.")?;
    Ok(&self.video_frame)
  }
}

impl Drop for VideoInput {
  fn drop(&mut self) {
    if let Err(err) = self.child.kill() {
      debug!("Stopping ffmpeg failed: {}", err);
    }
    let _ = self.child.wait();
  }
}

// Black frames for running without a video.
pub struct BlankFrames {
  video_frame: VideoFrame,
}

impl BlankFrames {
  pub fn new(sensor: &SensorDimensions) -> BlankFrames {
    BlankFrames {
      video_frame: VideoFrame {
        data: vec![0; sensor.width * sensor.height],
        width: sensor.width,
        height: sensor.height,
      },
    }
  }
}

impl FrameSource for BlankFrames {
  fn read(&mut self) -> Result<&VideoFrame> {
    Ok(&self.video_frame)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_blank_frames() {
    let sensor = SensorDimensions::new(4, 3).unwrap();
    let mut source = BlankFrames::new(&sensor);
    let frame = source.read().unwrap();
    assert_eq!(frame.width, 4);
    assert_eq!(frame.height, 3);
    assert!(frame.data.iter().all(|x| *x == 0));
  }
}
