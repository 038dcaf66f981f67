/// Commands the rendering layer sends back to the engine.
///
/// The UI never mutates selection state directly; it emits one of these and
/// the engine validates it before committing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiMessage {
    /// A bar was clicked. Payload is the bar's university name.
    BarActivated { name: String },
    /// The language toggle button was clicked.
    ToggleActivated,
    /// An explicit language code (e.g. from the command line).
    LanguageChosen(String),
    /// Keyboard navigation through the bars, wrapping at either end.
    SelectNext,
    SelectPrevious,
}
