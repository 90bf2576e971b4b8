/// Effect system for Redux architecture
/// Reducers return (State, Vec<Effect>) where Effects describe side effects to perform
/// The update() function executes these effects, which report back as actions
use std::time::Duration;

use ::log::debug;
use spotlight_engine::SpotlightMsg;

use crate::{App, actions::Action, log_capture::LogBuffer};

/// Effects that reducers can request to be performed
#[derive(Debug, Clone)]
pub enum Effect {
    /// Deliver `FocusInput` to the spotlight once the popup has been drawn
    ScheduleSpotlightFocus { after: Duration },

    /// Empty the shared log buffer
    ClearDebugLogs(LogBuffer),
}

/// Execute an effect; results come back through the action channel
pub fn execute_effect(app: &App, effect: Effect) {
    match effect {
        Effect::ScheduleSpotlightFocus { after } => {
            let tx = app.action_tx.clone();
            tokio::spawn(async move {
                tokio::time::sleep(after).await;
                debug!("Focusing spotlight input after {:?}", after);
                let _ = tx.send(Action::Spotlight(SpotlightMsg::FocusInput));
            });
        }
        Effect::ClearDebugLogs(logs) => {
            if let Ok(mut logs) = logs.lock() {
                logs.clear();
            }
        }
    }
}
