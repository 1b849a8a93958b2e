//! The portal-wide context: one value provided by the platform `App` and
//! read by every page.

use dioxus::prelude::*;

use crate::commands::{CommandBus, PortalCommand};
use crate::core::language::Language;
use crate::core::platform::{self, Platform, VIEWPORT_LISTENER_JS};
use crate::core::shell::ShellController;
use crate::core::storage;
use crate::core::viewport::{ViewportClass, ASSUMED_WIDTH_PX};

#[derive(Clone, Debug)]
pub struct Portal {
    pub shell: Signal<ShellController>,
    pub commands: CommandBus,
}

impl Portal {
    pub fn language(&self) -> Language {
        self.shell.read().language()
    }

    pub fn dispatch(&self, command: PortalCommand) {
        self.commands.dispatch(command);
    }
}

/// Build the portal context with the stock command handler. Call once at
/// the root of each platform app.
pub fn use_portal_provider() -> Portal {
    use_portal_provider_with(CommandBus::default)
}

/// Same as [`use_portal_provider`] but with caller-supplied command wiring.
pub fn use_portal_provider_with(commands: impl FnOnce() -> CommandBus) -> Portal {
    let shell = use_signal(|| {
        let width = platform::initial_viewport_width().unwrap_or(ASSUMED_WIDTH_PX);
        tracing::debug!(platform = ?Platform::current(), width, "initializing portal shell");
        ShellController::initialize(storage::default_store(), width)
    });
    let portal = use_context_provider(|| Portal {
        shell,
        commands: commands(),
    });
    use_viewport_watcher(shell);
    portal
}

pub fn use_portal() -> Portal {
    use_context::<Portal>()
}

/// Current language, subscribing the calling component to changes.
pub fn use_language() -> Language {
    use_portal().language()
}

/// Feed window widths into the shell for as long as the app is mounted.
fn use_viewport_watcher(mut shell: Signal<ShellController>) {
    use_future(move || async move {
        let mut listener = document::eval(VIEWPORT_LISTENER_JS);
        loop {
            match listener.recv::<f64>().await {
                Ok(width) => {
                    // Only write when the class flips so resizes within a class
                    // don't re-render the whole tree.
                    if ViewportClass::classify(width) != shell.peek().viewport() {
                        let changed = shell.write().on_viewport_change(width);
                        tracing::debug!(width, changed, "viewport class changed");
                    }
                }
                Err(err) => {
                    tracing::warn!(?err, "viewport listener closed; keeping last layout");
                    break;
                }
            }
        }
    });
}

/// A copyable dispatcher for event handlers.
pub fn use_dispatch() -> Callback<PortalCommand> {
    let commands = use_portal().commands;
    use_callback(move |command: PortalCommand| commands.dispatch(command))
}
