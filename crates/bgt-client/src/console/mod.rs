//! The admin console view-state machine.
//!
//! An explicit two-state machine (List | Detail) whose screens are replaced
//! only by the transition methods below. A failed transition leaves the
//! screen as it was and records the failure in the notification slot.

mod form;
mod views;

pub use form::{FieldView, FormView};
pub use views::{DetailView, LIST_HEADERS, ListView, PlayerRow};

use crate::Result;
use crate::directory::{NewPlayer, PlayerDirectory};
use crate::error::InvalidInputError;
use crate::mason::{Player, PlayerCollection, relations};

/// Content of the notification area. Each new notification replaces the
/// previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// An informational message (e.g. after a successful submit).
    Msg(String),
    /// An error message extracted from a failure.
    Error(String),
}

impl Notification {
    /// The message text.
    pub fn text(&self) -> &str {
        match self {
            Notification::Msg(text) | Notification::Error(text) => text,
        }
    }

    /// Whether this is an error notification.
    pub fn is_error(&self) -> bool {
        matches!(self, Notification::Error(_))
    }
}

/// The collection screen's state: the representation it was rendered from
/// plus the rendered view.
#[derive(Debug, Clone)]
pub struct ListState {
    collection: PlayerCollection,
    view: ListView,
}

impl ListState {
    fn render(collection: PlayerCollection) -> Result<Self> {
        let view = ListView::from_collection(&collection)?;
        Ok(Self { collection, view })
    }

    /// The rendered list view.
    pub fn view(&self) -> &ListView {
        &self.view
    }

    /// The collection representation backing the view.
    pub fn collection(&self) -> &PlayerCollection {
        &self.collection
    }
}

/// The single-item screen's state.
#[derive(Debug, Clone)]
pub struct DetailState {
    player: Player,
    view: DetailView,
}

impl DetailState {
    fn render(player: Player) -> Result<Self> {
        let view = DetailView::from_player(&player)?;
        Ok(Self { player, view })
    }

    /// The rendered detail view.
    pub fn view(&self) -> &DetailView {
        &self.view
    }

    /// The player representation backing the view.
    pub fn player(&self) -> &Player {
        &self.player
    }
}

/// Which screen the console is showing.
#[derive(Debug, Clone)]
pub enum Screen {
    List(ListState),
    Detail(DetailState),
}

/// The admin console.
///
/// Driven serially by its caller: each transition completes (or fails)
/// before the next is accepted, so there are no overlapping in-flight
/// requests to arbitrate.
#[derive(Debug)]
pub struct Console<D: PlayerDirectory> {
    directory: D,
    screen: Screen,
    notification: Option<Notification>,
}

impl<D: PlayerDirectory> Console<D> {
    /// Open the console: fetch the collection and render the List screen.
    ///
    /// # Errors
    ///
    /// Fails when the initial fetch or render fails; with no prior screen
    /// to keep, there is nothing to fall back to.
    pub async fn open(directory: D) -> Result<Self> {
        let collection = directory.list().await?;
        Ok(Self {
            directory,
            screen: Screen::List(ListState::render(collection)?),
            notification: None,
        })
    }

    /// The current screen.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// The current notification, if any.
    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// List -> Detail: follow a row's show link.
    pub async fn show(&mut self, row: usize) {
        if let Err(err) = self.try_show(row).await {
            self.notification = Some(Notification::Error(err.user_message()));
        }
    }

    /// Detail -> List: follow the breadcrumb back to the collection.
    pub async fn back(&mut self) {
        if let Err(err) = self.try_back().await {
            self.notification = Some(Notification::Error(err.user_message()));
        }
    }

    /// Submit the current screen's form with the given name.
    ///
    /// On the List screen this creates a player and appends the fetched
    /// row (List -> List); on the Detail screen it submits the edit form
    /// and redisplays the item.
    pub async fn submit(&mut self, name: &str) {
        match self.try_submit(name).await {
            Ok(()) => self.notification = Some(Notification::Msg("Successful".to_string())),
            Err(err) => self.notification = Some(Notification::Error(err.user_message())),
        }
    }

    async fn try_show(&mut self, row: usize) -> Result<()> {
        let Screen::List(state) = &self.screen else {
            return Err(InvalidInputError::Other {
                message: "no rows to show on this screen".to_string(),
            }
            .into());
        };

        let row = state.view.rows.get(row).ok_or_else(|| InvalidInputError::Other {
            message: format!("no row {row} in the table"),
        })?;

        let player = self.directory.player_at(&row.show_href).await?;
        self.screen = Screen::Detail(DetailState::render(player)?);
        Ok(())
    }

    async fn try_back(&mut self) -> Result<()> {
        let Screen::Detail(state) = &self.screen else {
            return Err(InvalidInputError::Other {
                message: "already on the collection screen".to_string(),
            }
            .into());
        };

        let collection = self.directory.collection_at(&state.view.breadcrumb).await?;
        self.screen = Screen::List(ListState::render(collection)?);
        Ok(())
    }

    async fn try_submit(&mut self, name: &str) -> Result<()> {
        let input = NewPlayer::new(name);

        match &mut self.screen {
            Screen::List(state) => {
                let created = self.directory.create(&state.collection, &input).await?;

                // The created row is appended without refetching the
                // collection; the server's Location response drives it.
                if let Some(player) = created {
                    let show_href = player.controls.get(relations::SELF)?.href.clone();
                    state.view.rows.push(PlayerRow {
                        name: player.name,
                        show_href,
                    });
                }
                Ok(())
            }
            Screen::Detail(state) => {
                self.directory.update(&state.player, &input).await?;
                state.player.name = input.name;
                state.view = DetailView::from_player(&state.player)?;
                Ok(())
            }
        }
    }
}
