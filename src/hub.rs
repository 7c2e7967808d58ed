//! Hub: shared context, current game selection and navigation
//!
//! There are no process-wide singletons. The save store and catalog live in
//! a [`HubContext`] that is handed to whoever needs them.

use std::cell::RefCell;
use std::rc::Rc;

use crate::catalog::{GameCatalog, MiniGameDescriptor};
use crate::events::EventBus;
use crate::persistence::SaveStore;

/// Screen id of the main menu
pub const MAIN_MENU_SCREEN: &str = "MainMenu";

/// Context objects shared by the hub and every mini-game
#[derive(Debug, Clone)]
pub struct HubContext {
    pub saves: Rc<RefCell<SaveStore>>,
    pub catalog: Rc<GameCatalog>,
}

impl HubContext {
    pub fn new(saves: SaveStore, catalog: GameCatalog) -> Self {
        Self {
            saves: Rc::new(RefCell::new(saves)),
            catalog: Rc::new(catalog),
        }
    }
}

/// Where the presentation layer should go next
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationRequest {
    MainMenu,
    /// Screen id of the launched game
    MiniGame(String),
}

impl NavigationRequest {
    pub fn screen_id(&self) -> &str {
        match self {
            NavigationRequest::MainMenu => MAIN_MENU_SCREEN,
            NavigationRequest::MiniGame(screen) => screen,
        }
    }
}

/// Menu-level state: which game is running and its live score
#[derive(Debug)]
pub struct Hub {
    ctx: HubContext,
    current_game: Option<String>,
    current_score: u32,
    score_changed: EventBus<u32>,
    game_over: EventBus<String>,
}

impl Hub {
    pub fn new(ctx: HubContext) -> Self {
        Self {
            ctx,
            current_game: None,
            current_score: 0,
            score_changed: EventBus::new(),
            game_over: EventBus::new(),
        }
    }

    pub fn context(&self) -> &HubContext {
        &self.ctx
    }

    /// Select a game and ask to navigate to it; `None` if not in the catalog
    pub fn launch(&mut self, game_id: &str) -> Option<NavigationRequest> {
        let Some(game) = self.ctx.catalog.get(game_id) else {
            log::warn!("Cannot launch unknown mini-game `{game_id}`");
            return None;
        };
        let request = NavigationRequest::MiniGame(game.screen_id.clone());
        self.current_game = Some(game.id.clone());
        self.reset_score();
        log::info!("Launching {} ({})", game_id, request.screen_id());
        Some(request)
    }

    /// Leave the current game
    pub fn return_to_menu(&mut self) -> NavigationRequest {
        self.current_game = None;
        NavigationRequest::MainMenu
    }

    /// Descriptor of the running game
    pub fn current_game(&self) -> Option<&MiniGameDescriptor> {
        self.current_game
            .as_deref()
            .and_then(|id| self.ctx.catalog.get(id))
    }

    pub fn current_score(&self) -> u32 {
        self.current_score
    }

    pub fn set_current_score(&mut self, score: u32) {
        self.current_score = score;
        self.score_changed.emit(&score);
    }

    pub fn reset_score(&mut self) {
        self.set_current_score(0);
    }

    /// Best score of a game from the save store
    pub fn high_score(&self, game: &MiniGameDescriptor) -> u32 {
        self.ctx.saves.borrow().high_score(&game.id)
    }

    /// Store a score for a game if it beats the best
    pub fn try_save_high_score(&mut self, game: &MiniGameDescriptor, score: u32) -> bool {
        self.ctx.saves.borrow_mut().try_save_high_score(&game.id, score)
    }

    /// Notify listeners that the running game ended
    pub fn trigger_game_over(&mut self) {
        if let Some(id) = self.current_game.clone() {
            self.game_over.emit(&id);
        }
    }

    pub fn on_score_changed(&mut self, listener: impl FnMut(&u32) + 'static) {
        self.score_changed.subscribe(listener);
    }

    /// Listener receives the id of the game that ended
    pub fn on_game_over(&mut self, listener: impl FnMut(&String) + 'static) {
        self.game_over.subscribe(listener);
    }

    /// Flush saves when the app is backgrounded
    pub fn suspend(&self) {
        self.ctx.saves.borrow_mut().on_suspend();
    }

    /// Flush saves on exit
    pub fn shutdown(&self) {
        self.ctx.saves.borrow_mut().on_exit();
    }
}
