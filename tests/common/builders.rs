//! Test data builders for assembling sessions

use dotmvw::session::{
    ContourOptions, GraphicHandle, GraphicOptions, ModelHandle, ModelOptions, PageHandle,
    PageOptions, Session, WindowHandle, WindowOptions,
};

/// Builder for a session with one page, window, graphic, and model
pub struct SessionBuilder {
    gui: String,
    version: String,
    graphics: Vec<String>,
    results: Vec<String>,
}

/// Handles for everything the builder created
pub struct BuiltSession {
    pub session: Session,
    pub page: PageHandle,
    pub window: WindowHandle,
    pub graphic: GraphicHandle,
    pub model: ModelHandle,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self {
            gui: "HyperWorks".to_string(),
            version: "19".to_string(),
            graphics: vec!["bezel_iter2.h3d".to_string()],
            results: vec!["bezel_iter2.h3d".to_string()],
        }
    }

    pub fn gui(mut self, gui: &str) -> Self {
        self.gui = gui.to_string();
        self
    }

    pub fn graphics(mut self, graphics: &[&str]) -> Self {
        self.graphics = graphics.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn results(mut self, results: &[&str]) -> Self {
        self.results = results.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn build(self) -> BuiltSession {
        let mut session =
            Session::new(self.gui, self.version, &self.graphics, &self.results)
                .expect("session preamble");
        let page = session
            .add_pages(1, &PageOptions::default())
            .expect("add page")[0];
        let window = session
            .add_windows(&page, 1, 1, &WindowOptions::default())
            .expect("add window")[0];
        let graphic = session
            .add_graphics(&window, 1, &GraphicOptions::default())
            .expect("add graphic")[0];
        let model = session
            .add_models(&graphic, 1, &ModelOptions::default())
            .expect("add model")[0];
        BuiltSession {
            session,
            page,
            window,
            graphic,
            model,
        }
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Contour options guaranteed to pass validation
pub fn displacement_contour() -> ContourOptions {
    ContourOptions::default()
        .with_result_type("Displacement")
        .with_data_component("Mag")
}
