//! Shared view capability.

/// A renderable board component.
pub trait Component {
    /// Wires subscriptions and handlers. Called once after construction.
    fn configure(&mut self);

    /// Renders current content as plain text.
    fn render_content(&self) -> String;
}
