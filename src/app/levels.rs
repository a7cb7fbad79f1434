//! Level option loading
//!
//! Every lookup takes a fresh snapshot of the vault, so folders created
//! outside the dialog show up the next time a level is refreshed.

use log::{debug, warn};

use crate::App;
use nestnote::logic::folder::level_options;
use nestnote::model::{Level, Model, OptionsQuery};
use nestnote::submit::Notice;
use nestnote::vault;

impl App {
    /// Start a new dialog and load the first-level choices
    ///
    /// A toast from the previous dialog stays visible.
    pub(crate) async fn open_dialog(&mut self) {
        let toast = self.model.ui.toast.take();
        self.model = Model::new();
        self.model.ui.toast = toast;

        let query = self.model.options_query(Level::First);
        self.refresh_options(query).await;
    }

    /// Run `query` against the vault and store the result in the model
    pub(crate) async fn refresh_options(&mut self, query: Option<OptionsQuery>) {
        let Some(query) = query else {
            return;
        };

        let snapshot = match vault::folder_snapshot(&*self.vault).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!("Failed to list vault folders: {}", e);
                self.model
                    .ui
                    .show_toast(Notice::error(format!("Could not list folders: {}", e)));
                return;
            }
        };

        match level_options(&snapshot, &query.parent, &self.config.reserved_folder) {
            Ok(options) => {
                debug!(
                    "{} options for {:?} under {:?}",
                    options.len(),
                    query.level,
                    query.parent
                );
                self.model.apply_options(&query, options);
            }
            Err(e) => warn!("Skipping options for {:?}: {}", query.level, e),
        }
        self.model.fix_focus();
    }
}
