// NOTE This kind of import-all file isn't a common Rust idiom.

pub use crate::{
  camera::*,
  controller::*,
  demo::*,
  distance::*,
  error::*,
  event_loop::*,
  input::*,
  math::*,
  parameters::*,
  pose::*,
  projector::*,
  selection::*,
  types::*,
  video::*,
  visualize::*,
};

pub use {
  std::{
    io::Read,
    path::{Path, PathBuf},
  },
  log::{debug, info, warn, LevelFilter},
  serde::Deserialize,
  anyhow::{anyhow, Context as AnyhowContext, Result},
};
