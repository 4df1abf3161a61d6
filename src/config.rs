//! Configuration management
//!
//! TOML-backed description of a standard session: one model and one
//! result bound into every window. [`SessionConfig::build`] assembles the
//! whole document so the CLI only has to load, build, and write.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Result, SessionError};
use crate::session::{
    GraphicOptions, ModelOptions, PageOptions, ResultOptions, Session, WindowOptions,
};

/// Declarative session description
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Producing application written into the `*Id` preamble
    pub gui: String,
    pub version: String,
    pub session_title: String,
    /// Graphics file paths, declared as `GRAPHIC_FILE_i`
    pub graphics: Vec<String>,
    /// Results file paths, declared as `RESULT_FILE_i`
    pub results: Vec<String>,
    pub pages: usize,
    /// Windows per page; must match `configuration`
    pub windows: usize,
    /// Layout configuration number
    pub configuration: u32,
    pub export_format: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            gui: "HyperWorks".to_string(),
            version: "19".to_string(),
            session_title: "AutoSession 1".to_string(),
            graphics: Vec::new(),
            results: Vec::new(),
            pages: 1,
            windows: 1,
            configuration: 1,
            export_format: "PNG".to_string(),
        }
    }
}

impl SessionConfig {
    /// Load a configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config: SessionConfig = toml::from_str(&raw)
            .map_err(|e| SessionError::Config(format!("{}: {e}", path.display())))?;
        info!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Save the configuration as TOML
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let raw = toml::to_string_pretty(self)
            .map_err(|e| SessionError::Config(e.to_string()))?;
        std::fs::write(path.as_ref(), raw)?;
        Ok(())
    }

    /// Assemble the session this configuration describes
    ///
    /// Every window gets one graphic, with the first declared model file
    /// and result file bound into it.
    pub fn build(&self) -> Result<Session> {
        let mut session = Session::new(&self.gui, &self.version, &self.graphics, &self.results)?;
        session.set_session_title(&self.session_title);

        let page_options = PageOptions::default();
        let window_options =
            WindowOptions::default().with_export_format(&self.export_format);
        let graphic_options = GraphicOptions::default();
        let model_options = ModelOptions::default();
        let result_options = ResultOptions::default();

        let pages = session.add_pages(self.pages, &page_options)?;
        for page in &pages {
            let windows =
                session.add_windows(page, self.windows, self.configuration, &window_options)?;
            for window in &windows {
                let graphics = session.add_graphics(window, 1, &graphic_options)?;
                if !self.graphics.is_empty() {
                    let models = session.add_models(&graphics[0], 1, &model_options)?;
                    if !self.results.is_empty() {
                        session.add_results(&models[0], 1, &result_options)?;
                    }
                }
            }
        }
        Ok(session)
    }
}
