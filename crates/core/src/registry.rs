//! Game catalog and the set of live triads.

use std::collections::HashMap;

use crate::descriptor::{GameAssets, GameDescriptor};
use crate::error::LauncherError;
use crate::module::GameController;

/// One live (model, view, controller) bundle.
///
/// The controller owns the model and view; dropping the triad destroys all
/// three.
pub struct GameTriad {
    instance: u64,
    controller: Box<dyn GameController>,
}

impl std::fmt::Debug for GameTriad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameTriad")
            .field("instance", &self.instance)
            .finish_non_exhaustive()
    }
}

impl GameTriad {
    /// Registry-unique id; a rebuilt triad never reuses an old id.
    pub fn instance(&self) -> u64 {
        self.instance
    }

    pub fn title(&self) -> &str {
        self.controller.title()
    }

    pub fn is_running(&self) -> bool {
        self.controller.is_running()
    }

    pub fn controller(&self) -> &dyn GameController {
        self.controller.as_ref()
    }

    pub fn controller_mut(&mut self) -> &mut dyn GameController {
        self.controller.as_mut()
    }
}

/// Registry of available games and the ones currently instantiated.
pub struct GameRegistry {
    catalog: Vec<GameDescriptor>,
    live: HashMap<String, GameTriad>,
    next_instance: u64,
}

impl GameRegistry {
    pub fn new() -> Self {
        Self {
            catalog: Vec::new(),
            live: HashMap::new(),
            next_instance: 1,
        }
    }

    pub fn register(&mut self, descriptor: GameDescriptor) -> Result<(), LauncherError> {
        if self.contains(descriptor.title()) {
            return Err(LauncherError::DuplicateTitle(descriptor.title().to_string()));
        }
        tracing::debug!(title = descriptor.title(), icon = descriptor.icon_path(), "registered game");
        self.catalog.push(descriptor);
        Ok(())
    }

    pub fn contains(&self, title: &str) -> bool {
        self.descriptor(title).is_some()
    }

    pub fn descriptor(&self, title: &str) -> Option<&GameDescriptor> {
        self.catalog.iter().find(|d| d.title() == title)
    }

    /// Title and icon of every registered game, in registration order.
    pub fn list_assets(&self) -> Vec<GameAssets> {
        self.catalog.iter().map(GameDescriptor::assets).collect()
    }

    /// Registered titles in registration order.
    pub fn list_titles(&self) -> Vec<String> {
        self.catalog.iter().map(|d| d.title().to_string()).collect()
    }

    pub fn live_triad(&self, title: &str) -> Option<&GameTriad> {
        self.live.get(title)
    }

    pub fn live_triad_mut(&mut self, title: &str) -> Option<&mut GameTriad> {
        self.live.get_mut(title)
    }

    /// Titles with a live triad, in catalog order.
    pub fn live_titles(&self) -> Vec<String> {
        self.catalog
            .iter()
            .map(|d| d.title())
            .filter(|t| self.live.contains_key(*t))
            .map(str::to_string)
            .collect()
    }

    pub fn running_count(&self) -> usize {
        self.live.values().filter(|t| t.is_running()).count()
    }

    /// Build the triad for `title` and register it as live.
    ///
    /// The caller checks liveness first; a second instantiation of a live
    /// title is a contract breach and reported as `AlreadyLive`.
    pub fn instantiate(&mut self, title: &str) -> Result<&mut GameTriad, LauncherError> {
        let descriptor = self
            .catalog
            .iter()
            .find(|d| d.title() == title)
            .ok_or_else(|| LauncherError::UnknownTitle(title.to_string()))?;

        if self.live.contains_key(title) {
            tracing::error!(title, "instantiate called for a live game");
            return Err(LauncherError::AlreadyLive(title.to_string()));
        }

        let controller = descriptor.build().map_err(|source| LauncherError::Factory {
            title: title.to_string(),
            source,
        })?;
        if controller.title() != title {
            tracing::warn!(
                title,
                controller_title = controller.title(),
                "controller reports a different title than its descriptor"
            );
        }

        let instance = self.next_instance;
        self.next_instance += 1;
        tracing::debug!(title, instance, "instantiated game");

        let triad = GameTriad {
            instance,
            controller,
        };
        Ok(self.live.entry(title.to_string()).or_insert(triad))
    }

    /// Drop the live triad for `title`. No-op if absent.
    pub fn remove(&mut self, title: &str) -> Option<GameTriad> {
        let removed = self.live.remove(title);
        if removed.is_some() {
            tracing::debug!(title, "dropped live game");
        }
        removed
    }
}

impl Default for GameRegistry {
    fn default() -> Self {
        Self::new()
    }
}
