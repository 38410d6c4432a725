//! Catalog entries: one immutable descriptor per game.

use std::fmt;

use crate::module::GameController;

type BuildFn = Box<dyn Fn() -> anyhow::Result<Box<dyn GameController>>>;

/// What a view needs to present a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameAssets {
    pub title: String,
    pub icon_path: String,
}

/// Title, icon and typed factories for one game.
///
/// The factories are generic over the concrete model, view and controller
/// types, so the controller receives exactly the view and model it expects.
pub struct GameDescriptor {
    title: String,
    icon_path: String,
    build: BuildFn,
}

impl GameDescriptor {
    /// Describe a game from its three factories.
    ///
    /// On instantiation the model is built first, then the view, then the
    /// controller from both. Any failing factory aborts the build.
    pub fn new<M, V, C>(
        title: impl Into<String>,
        icon_path: impl Into<String>,
        model_factory: impl Fn() -> anyhow::Result<M> + 'static,
        view_factory: impl Fn() -> anyhow::Result<V> + 'static,
        controller_factory: impl Fn(V, M) -> anyhow::Result<C> + 'static,
    ) -> Self
    where
        C: GameController + 'static,
    {
        Self {
            title: title.into(),
            icon_path: icon_path.into(),
            build: Box::new(move || {
                let model = model_factory()?;
                let view = view_factory()?;
                let controller: Box<dyn GameController> = Box::new(controller_factory(view, model)?);
                Ok(controller)
            }),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn icon_path(&self) -> &str {
        &self.icon_path
    }

    pub fn assets(&self) -> GameAssets {
        GameAssets {
            title: self.title.clone(),
            icon_path: self.icon_path.clone(),
        }
    }

    pub(crate) fn build(&self) -> anyhow::Result<Box<dyn GameController>> {
        (self.build)()
    }
}

impl fmt::Debug for GameDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameDescriptor")
            .field("title", &self.title)
            .field("icon_path", &self.icon_path)
            .finish_non_exhaustive()
    }
}
