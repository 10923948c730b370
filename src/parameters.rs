use crate::all::*;

// Field of view the distance demo was tuned for (Microsoft LifeCam HD-3000).
pub const LIFECAM_HD_3000_FOV: FieldOfView = FieldOfView {
  horizontal: 2. * 0.5355780593748425,
  vertical: 2. * 0.3221767906849529,
};

// Degrees, used for any axis neither given explicitly nor by a preset.
pub const DEFAULT_FOV_X: f64 = 61.;
pub const DEFAULT_FOV_Y: f64 = 37.;

#[derive(Clone, Debug)]
#[derive(clap::Args)]
pub struct ParameterSet {
  // Camera. Field of view in degrees, each axis overriding the preset.
  #[clap(long)]
  pub fov_x: Option<f64>,
  #[clap(long)]
  pub fov_y: Option<f64>,
  #[clap(long, default_value = "1280")]
  pub width: usize,
  #[clap(long, default_value = "720")]
  pub height: usize,
  // Named field of view.
  #[clap(long)]
  pub preset: Option<String>,

  // Tracked object.
  #[clap(long, default_value = "15")]
  pub object_width: f64,
  #[clap(long, default_value = "15")]
  pub object_height: f64,

  // Pose controller. Angular speed in degrees.
  #[clap(long, default_value = "0.5")]
  pub speed: f64,
  #[clap(long, default_value = "0.8")]
  pub angular_speed: f64,
  #[clap(long, default_value = "50")]
  pub min_depth: f64,

  // JSON file overriding any of the values above.
  #[clap(long)]
  pub setup: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SetupFile {
  pub fov_x: Option<f64>,
  pub fov_y: Option<f64>,
  pub width: Option<usize>,
  pub height: Option<usize>,
  pub preset: Option<String>,
  pub object_width: Option<f64>,
  pub object_height: Option<f64>,
  pub speed: Option<f64>,
  pub angular_speed: Option<f64>,
  pub min_depth: Option<f64>,
}

// Validated configuration. Everything the frame loop needs is known good.
#[derive(Clone, Debug)]
pub struct Config {
  pub fov: FieldOfView,
  pub sensor: SensorDimensions,
  pub footprint: ObjectFootprint,
  pub controller: ControllerConfig,
}

impl SetupFile {
  pub fn load(path: &Path) -> Result<SetupFile> {
    let s = std::fs::read_to_string(path)
      .context(format!("Failed to read file {}.", path.display()))?;
    let setup: SetupFile = serde_json::from_str(&s)
      .context(format!("Failed to parse {}.", path.display()))?;
    Ok(setup)
  }
}

impl ParameterSet {
  pub fn apply(&mut self, setup: SetupFile) {
    if let Some(x) = setup.preset { self.preset = Some(x) }
    if let Some(x) = setup.fov_x { self.fov_x = Some(x) }
    if let Some(x) = setup.fov_y { self.fov_y = Some(x) }
    if let Some(x) = setup.width { self.width = x }
    if let Some(x) = setup.height { self.height = x }
    if let Some(x) = setup.object_width { self.object_width = x }
    if let Some(x) = setup.object_height { self.object_height = x }
    if let Some(x) = setup.speed { self.speed = x }
    if let Some(x) = setup.angular_speed { self.angular_speed = x }
    if let Some(x) = setup.min_depth { self.min_depth = x }
  }

  pub fn resolve(&self) -> Result<Config> {
    let mut p = self.clone();
    if let Some(path) = &self.setup {
      p.apply(SetupFile::load(path)?);
    }
    Ok(p.to_config()?)
  }

  pub fn to_config(&self) -> GeometryResult<Config> {
    // Explicit angles win over the preset, whether they come from the command line or a file.
    let base = match self.preset.as_deref() {
      Some(name) => preset_fov(name)?,
      None => FieldOfView::from_degrees(DEFAULT_FOV_X, DEFAULT_FOV_Y)?,
    };
    let fov = FieldOfView::new(
      self.fov_x.map_or(base.horizontal, f64::to_radians),
      self.fov_y.map_or(base.vertical, f64::to_radians),
    )?;
    Ok(Config {
      fov,
      sensor: SensorDimensions::new(self.width, self.height)?,
      footprint: ObjectFootprint::new(self.object_width, self.object_height)?,
      controller: ControllerConfig::new(self.speed, self.angular_speed.to_radians(), self.min_depth)?,
    })
  }
}

pub fn preset_fov(name: &str) -> GeometryResult<FieldOfView> {
  match name {
    "lifecam-hd-3000" => Ok(LIFECAM_HD_3000_FOV),
    _ => Err(GeometryError::Configuration(format!("Unknown camera preset {}.", name))),
  }
}
