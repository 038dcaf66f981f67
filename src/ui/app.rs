use eframe::{Frame, egui};

use crate::engine::{DashboardEngine, UiMessage};
use crate::models::DashboardView;
use crate::ui::utils::setup_custom_visuals;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// The eframe shell around `DashboardEngine`.
///
/// Each frame: draw from the current derived view, collect the messages the
/// widgets emit, then hand them to the engine. State never changes mid-draw.
pub struct EnrolmentDashboardApp {
    pub(super) engine: DashboardEngine,
    /// Messages emitted while drawing this frame
    pub(super) pending: Vec<UiMessage>,
    /// Last rejected message, shown until the next successful one
    pub(super) last_error: Option<String>,
}

impl EnrolmentDashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, engine: DashboardEngine) -> Self {
        setup_custom_visuals(&cc.egui_ctx);

        log::info!(
            "Dashboard ready: {} universities, language '{}', selected '{}'",
            engine.dataset.len(),
            engine.language(),
            engine.selected_name()
        );

        Self::with_engine(engine)
    }

    pub fn with_engine(engine: DashboardEngine) -> Self {
        Self {
            engine,
            pending: Vec::new(),
            last_error: None,
        }
    }

    pub fn engine(&self) -> &DashboardEngine {
        &self.engine
    }

    pub(super) fn emit(&mut self, message: UiMessage) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("UI message: {:?}", message);
        }
        self.pending.push(message);
    }

    /// Applies queued messages in emission order. Rejected ones leave state as it was.
    pub fn apply_pending(&mut self) {
        let before = self.engine.state().clone();

        for message in std::mem::take(&mut self.pending) {
            match self.engine.dispatch(message) {
                Ok(()) => self.last_error = None,
                Err(e) => {
                    log::warn!("Rejected UI message: {}", e);
                    self.last_error = Some(e.to_string());
                }
            }
        }

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_view_rebuilds && *self.engine.state() != before {
            let view = self.engine.view();
            log::info!(
                "View rebuilt: {} bars, {} slices, total {}",
                view.bar_series.len(),
                view.doughnut.len(),
                view.doughnut.total
            );
        }
        #[cfg(not(debug_assertions))]
        let _ = before;
    }

    pub(super) fn current_view(&self) -> DashboardView {
        self.engine.view()
    }
}

impl eframe::App for EnrolmentDashboardApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Application shutdown complete.");
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.handle_global_shortcuts(ctx);

        let view = self.current_view();
        self.render_header_panel(ctx);
        self.render_footer_panel(ctx);
        self.render_central_panel(ctx, &view);

        self.apply_pending();
    }
}
