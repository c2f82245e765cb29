use dioxus::prelude::{ReadableExt, Signal, WritableExt};
use dioxus_logger::tracing::debug;
use huddle_core::{ShellCoordinator, ShellEvent};

/// Feed one gesture into the shell signal.
///
/// The signal is only written when the event changes state, so ignored
/// pointer moves do not re-render the desktop.
pub fn dispatch_shell_event(shell: &mut Signal<ShellCoordinator>, event: ShellEvent) -> bool {
    let mut next = shell.peek().clone();
    if !next.apply(event) {
        return false;
    }
    if !matches!(event, ShellEvent::DragMove { .. }) {
        debug!(
            panel = %event.target(),
            ?event,
            fullscreen = ?next.fullscreen(),
            "shell event applied"
        );
    }
    shell.set(next);
    true
}
