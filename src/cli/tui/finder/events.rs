use ratatui::crossterm::event::KeyEvent;

/// All possible events in the finder
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    /// Render tick when no input arrived
    Tick,
}
