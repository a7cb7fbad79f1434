//! File operation methods
//!
//! User actions that end the current dialog:
//! - Submit (create folders, create and open the note)
//! - Cancel

use log::debug;

use crate::App;
use nestnote::submit::{self, SubmitOutcome};

impl App {
    pub(crate) async fn submit_dialog(&mut self) {
        let options = self.config.submit_options();
        let outcome = submit::submit(
            &self.model.selection,
            &*self.vault,
            &mut self.model.ui,
            &options,
        )
        .await;

        if let SubmitOutcome::Created(path) = outcome {
            debug!("Dialog finished with {}", path);
            self.model.mark_submitted();
            self.open_dialog().await;
        }
    }

    pub(crate) fn cancel_dialog(&mut self) {
        self.model.cancel();
        self.model.ui.should_quit = true;
    }
}
