//! Actions that have no collaborator behind them yet.
//!
//! Buttons such as "Add Field" or "Schedule" dispatch a [`PortalCommand`]
//! through a [`CommandHandler`]. The stock handler only logs; field,
//! scheduling and advisory services can be plugged in through
//! [`crate::context::use_portal_provider`].

use std::fmt;
use std::rc::Rc;

use api::alerts::AlertAction;
use api::crops::CropKind;
use api::fields::FieldId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortalCommand {
    AddField,
    RunPrediction,
    ScanDisease,
    ViewFieldMap,
    ViewAllAlerts,
    Alert(AlertAction),
    OpenNotifications,
    OpenProfile,
    ViewCropDetails(CropKind),
    SimulateCrop(CropKind),
    RequestSoilTest,
    ViewFieldDetails(FieldId),
    ConsultExpert,
    ViewTreatment(&'static str),
    ApplyRecommendation(usize),
    TriggerRetrain,
    SyncNow,
    OpenHelpCenter,
    OpenTutorial,
    ContactSupport,
}

pub trait CommandHandler {
    fn handle(&self, command: PortalCommand);
}

/// Logs every command and does nothing else.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingHandler;

impl CommandHandler for LoggingHandler {
    fn handle(&self, command: PortalCommand) {
        tracing::info!(?command, "no handler wired for command");
    }
}

/// Cloneable handle to the active [`CommandHandler`].
#[derive(Clone)]
pub struct CommandBus(Rc<dyn CommandHandler>);

impl CommandBus {
    pub fn new(handler: impl CommandHandler + 'static) -> Self {
        Self(Rc::new(handler))
    }

    pub fn dispatch(&self, command: PortalCommand) {
        self.0.handle(command);
    }
}

impl Default for CommandBus {
    fn default() -> Self {
        Self::new(LoggingHandler)
    }
}

impl fmt::Debug for CommandBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CommandBus")
    }
}
