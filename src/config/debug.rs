//! Debugging feature flags.
//!
//! Only consulted under `cfg(debug_assertions)`; release builds stay quiet
//! regardless of these values.

pub struct DebugFlags {
    /// Emit language/selection transitions as they are committed.
    pub print_state_changes: bool,
    /// Emit UI interaction logs (bar clicks, toggle presses, shortcuts).
    pub print_ui_interactions: bool,
    /// Emit a line whenever a dataset or translation file is loaded.
    pub print_data_loading: bool,
    /// Emit the derived view summary each time the selection changes.
    pub print_view_rebuilds: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_state_changes: true,
    print_ui_interactions: true,
    print_data_loading: true,
    print_view_rebuilds: false,
    print_shutdown: false,
};
