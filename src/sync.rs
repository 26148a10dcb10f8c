/// Board synchronizer: every user action, against injected services

use crate::board::{BoardAction, BoardSink};
use crate::error::SyncError;
use crate::extension_data::reserved_enabled_flag;
use crate::repository::{ExtensionManager, KeyValueStore, Repository};
use crate::storage::{Categories, ExtensionStates, validate_category_name};

/// Reads and writes the persisted keys through the [`Repository`], asks the
/// [`ExtensionManager`] to flip enabled flags, and sends each resulting
/// change to a [`BoardSink`].
///
/// Writes are blind overwrites made right after a fresh read of the same
/// key. Two popups writing at once means the last write wins.
pub struct BoardSync<S, M> {
    repository: Repository<S>,
    manager: M,
}

impl<S: KeyValueStore, M: ExtensionManager> BoardSync<S, M> {
    pub fn new(store: S, manager: M) -> Self {
        BoardSync {
            repository: Repository::new(store),
            manager,
        }
    }

    #[cfg(test)]
    pub fn repository(&self) -> &Repository<S> {
        &self.repository
    }

    #[cfg(test)]
    pub fn manager(&self) -> &M {
        &self.manager
    }

    /// Full load cycle: columns first, then cards
    pub async fn load(&self, board: &impl BoardSink) -> Result<Categories, SyncError> {
        let categories = self.load_categories(board).await?;
        self.load_extensions(board).await?;
        Ok(categories)
    }

    /// Ensure one column per persisted category
    pub async fn load_categories(&self, board: &impl BoardSink) -> Result<Categories, SyncError> {
        let categories = self.repository.categories().await?;
        board.apply(BoardAction::Columns(categories.clone()));
        Ok(categories)
    }

    /// Fetch extensions and their stored statuses and place every card.
    ///
    /// The board is only touched once both reads succeeded.
    pub async fn load_extensions(&self, board: &impl BoardSink) -> Result<(), SyncError> {
        let extensions = self.manager.get_all().await?;
        let states = self.repository.extension_states().await?;
        board.apply(BoardAction::Extensions {
            extensions,
            states,
            self_id: self.manager.self_id(),
        });
        Ok(())
    }

    /// Persist a new category and give it a column
    pub async fn add_category(
        &self,
        board: &impl BoardSink,
        raw: &str,
    ) -> Result<Categories, SyncError> {
        let name = validate_category_name(raw)?;

        let mut categories = self.repository.categories().await?;
        let label = categories.add(&name)?;
        self.repository.save_categories(&categories).await?;

        board.apply(BoardAction::AddColumn(label));
        self.load_categories(board).await
    }

    /// Remove a category's column and forget the label.
    ///
    /// Extensions assigned to it keep their stored status and stay hidden
    /// until moved.
    pub async fn close_category(
        &self,
        board: &impl BoardSink,
        category: &str,
    ) -> Result<Categories, SyncError> {
        board.apply(BoardAction::RemoveColumn(category.to_string()));

        let mut categories = self.repository.categories().await?;
        categories.remove(category);
        self.repository.save_categories(&categories).await?;

        self.load_categories(board).await
    }

    /// Handle a card dropped into the drop-zone with status `drop_status`
    pub async fn drop_card(
        &self,
        board: &impl BoardSink,
        extension_id: &str,
        drop_status: &str,
    ) -> Result<(), SyncError> {
        if !board.contains_extension(extension_id) {
            return Ok(());
        }
        let new_status = drop_status.to_lowercase();

        let mut states = self.repository.extension_states().await?;
        states.assign(extension_id, &new_status);
        self.repository.save_extension_states(&states).await?;

        board.apply(BoardAction::Moved {
            extension_id: extension_id.to_string(),
            status: new_status.clone(),
        });

        if let Some(enabled) = reserved_enabled_flag(&new_status) {
            self.toggle_extension(board, extension_id, enabled).await?;
        }
        Ok(())
    }

    /// Ask the management service to enable or disable an extension, then
    /// move its card to the matching "enabled"/"disabled" column
    pub async fn toggle_extension(
        &self,
        board: &impl BoardSink,
        extension_id: &str,
        enabled: bool,
    ) -> Result<(), SyncError> {
        self.manager.set_enabled(extension_id, enabled).await?;
        board.apply(BoardAction::Toggled {
            extension_id: extension_id.to_string(),
            enabled,
        });
        Ok(())
    }

    /// Clear every category and assignment, then reload the board
    pub async fn reset(&self, board: &impl BoardSink) -> Result<Categories, SyncError> {
        self.repository.save_categories(&Categories::new()).await?;
        self.repository
            .save_extension_states(&ExtensionStates::new())
            .await?;
        self.load(board).await
    }
}
