use crate::all::*;

// Device-independent input alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
  Forward,
  Back,
  Left,
  Right,
  Up,
  Down,
  YawLeft,
  YawRight,
  // Starts a region selection. Leaves the pose alone.
  Select,
  Quit,
}

// How commands map onto the pose.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlMode {
  // Free-fly camera: `position` is the scene offset fed to the extrinsic transform.
  Camera,
  // A single camera-space point, kept in front of the near plane.
  Point,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControllerConfig {
  // Units per frame.
  pub speed: f64,
  // Radians per frame.
  pub angular_speed: f64,
  pub min_depth: f64,
}

impl ControllerConfig {
  pub fn new(speed: f64, angular_speed: f64, min_depth: f64) -> GeometryResult<ControllerConfig> {
    for (value, name) in [(speed, "Speed"), (angular_speed, "Angular speed"), (min_depth, "Minimum depth")] {
      if !value.is_finite() || value <= 0. {
        return Err(GeometryError::Configuration(format!("{} must be positive, got {}.", name, value)));
      }
    }
    Ok(ControllerConfig { speed, angular_speed, min_depth })
  }
}

// Everything that changes while a demo runs. Owned by the event loop.
#[derive(Debug)]
pub struct Session {
  pub pose: Pose,
  pub running: bool,
  pending: Option<Command>,
}

impl Session {
  pub fn new(pose: Pose) -> Session {
    Session {
      pose,
      running: true,
      pending: None,
    }
  }

  // Latest command wins if several arrive within one frame.
  pub fn push(&mut self, command: Command) {
    self.pending = Some(command);
  }

  pub fn take(&mut self) -> Option<Command> {
    self.pending.take()
  }

  pub fn stop(&mut self) {
    self.running = false;
  }
}

pub struct PoseController {
  pub config: ControllerConfig,
  pub mode: ControlMode,
}

impl PoseController {
  pub fn new(config: ControllerConfig, mode: ControlMode) -> PoseController {
    PoseController { config, mode }
  }

  pub fn initial_pose(&self) -> Pose {
    match self.mode {
      ControlMode::Camera => Pose::default(),
      ControlMode::Point => Pose::at(Vector3d::new(0., 0., self.config.min_depth)),
    }
  }

  pub fn apply(&self, session: &mut Session, command: Command) {
    if command == Command::Quit {
      session.stop();
      return;
    }
    match self.mode {
      ControlMode::Camera => self.apply_camera(&mut session.pose, command),
      ControlMode::Point => self.apply_point(&mut session.pose, command),
    }
  }

  fn apply_camera(&self, pose: &mut Pose, command: Command) {
    let v = self.config.speed;
    let w = self.config.angular_speed;
    let p = &mut pose.position;
    match command {
      Command::Forward => p[2] -= v,
      Command::Back => p[2] += v,
      Command::Left => p[0] += v,
      Command::Right => p[0] -= v,
      Command::Up => p[1] += v,
      Command::Down => p[1] -= v,
      Command::YawLeft => pose.yaw -= w,
      Command::YawRight => pose.yaw += w,
      Command::Select | Command::Quit => {},
    }
  }

  fn apply_point(&self, pose: &mut Pose, command: Command) {
    let v = self.config.speed;
    let p = &mut pose.position;
    match command {
      Command::Forward => p[2] += v,
      Command::Back => p[2] = (p[2] - v).max(self.config.min_depth),
      Command::Left => p[0] -= v,
      Command::Right => p[0] += v,
      // Image y grows downwards.
      Command::Up => p[1] -= v,
      Command::Down => p[1] += v,
      Command::YawLeft | Command::YawRight | Command::Select | Command::Quit => {},
    }
  }
}
