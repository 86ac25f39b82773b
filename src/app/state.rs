//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the plugin.
//! It is the single source of truth for everything the UI renders: the active
//! screen, the review queue, the liked collection, the fetch status, and the
//! theme. Event handling mutates this state; rendering is a pure projection of
//! it via [`AppState::compute_viewmodel`].
//!
//! # State components
//!
//! - **Screen**: which of the two screens (home / liked) is active
//! - **ReviewQueue**: the fetched meal sequence and review cursor
//! - **LikedCollection**: meals the user has liked, in like order
//! - **FetchStatus**: progress of the most recent ingredient fetch
//! - **Theme + dark flag**: the active color scheme, persisted via the worker
//! - **Request sequence**: monotonic fetch generation for stale-result guarding

use super::liked::LikedCollection;
use super::modes::{FetchStatus, Screen};
use super::review::ReviewQueue;
use crate::domain::Ingredient;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CardBody, CardInfo, FooterInfo, HeaderInfo, IngredientEntry, LikedItem, ScreenBody,
    StatusInfo, UIViewModel,
};

/// Central application state container.
///
/// Mutated only by [`handle_event`](crate::app::handle_event) on the plugin's
/// update thread. View models are computed on demand from state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Active screen driving conditional rendering.
    pub screen: Screen,

    /// Sequence of meals from the last successful fetch, plus review cursor.
    pub review: ReviewQueue,

    /// Meals the user has liked, in like order.
    pub liked: LikedCollection,

    /// Progress of the most recent ingredient fetch.
    pub fetch: FetchStatus,

    /// Ingredient of the most recent selection, highlighted in the picker bar.
    pub selected_ingredient: Option<Ingredient>,

    /// Persisted dark-mode flag. `false` (light) until storage says otherwise.
    pub dark_mode: bool,

    /// Active color scheme, one of the two variants below per `dark_mode`.
    pub theme: Theme,

    /// Theme used while dark mode is off.
    pub light_theme: Theme,

    /// Theme used while dark mode is on.
    pub dark_theme: Theme,

    /// Transient one-line notice ("Liked!"), cleared by the next review event.
    pub notice: Option<String>,

    /// Monotonic fetch generation.
    ///
    /// Incremented on every ingredient selection. Fetch completions carrying
    /// an older generation are stale and discarded, so a reselection mid-flight
    /// can never be overwritten by the superseded request's result.
    pub request_seq: u64,
}

impl AppState {
    /// Creates the initial application state.
    ///
    /// Starts on the home screen with an idle fetch status, empty queue and
    /// collection, and the light theme active (dark mode is applied once
    /// storage reports the persisted flag).
    #[must_use]
    pub fn new(light_theme: Theme, dark_theme: Theme) -> Self {
        Self {
            screen: Screen::Home,
            review: ReviewQueue::new(),
            liked: LikedCollection::new(),
            fetch: FetchStatus::Idle,
            selected_ingredient: None,
            dark_mode: false,
            theme: light_theme.clone(),
            light_theme,
            dark_theme,
            notice: None,
            request_seq: 0,
        }
    }

    /// Applies a dark-mode flag, swapping in the matching theme variant.
    pub fn apply_mode(&mut self, dark: bool) {
        self.dark_mode = dark;
        self.theme = if dark {
            self.dark_theme.clone()
        } else {
            self.light_theme.clone()
        };
    }

    /// Computes a renderable view model from current state and terminal size.
    ///
    /// Pure: reads state, allocates display strings, touches nothing. The
    /// liked list is recomputed in full on every call, so navigating to the
    /// liked screen always reflects the latest likes.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let _ = cols;
        match self.screen {
            Screen::Home => UIViewModel {
                header: HeaderInfo {
                    title: " Mealdeck ".to_string(),
                },
                footer: self.compute_footer(),
                body: ScreenBody::Home {
                    ingredients: self.compute_ingredient_bar(),
                    card: self.compute_card(),
                    notice: self.notice.clone(),
                },
            },
            Screen::Liked => {
                let available = Self::liked_rows_available(rows);
                let items: Vec<LikedItem> = self
                    .liked
                    .all()
                    .iter()
                    .take(available)
                    .map(|meal| LikedItem {
                        name: meal.name.clone(),
                        thumb: meal.thumb.clone(),
                    })
                    .collect();
                let hidden_count = self.liked.len().saturating_sub(items.len());

                UIViewModel {
                    header: HeaderInfo {
                        title: format!(" Liked Meals ({}) ", self.liked.len()),
                    },
                    footer: self.compute_footer(),
                    body: ScreenBody::Liked { items, hidden_count },
                }
            }
        }
    }

    /// Picker bar entries, one per fixed ingredient, in key order.
    fn compute_ingredient_bar(&self) -> Vec<IngredientEntry> {
        Ingredient::ALL
            .iter()
            .enumerate()
            .map(|(idx, ingredient)| IngredientEntry {
                key: char::from_digit(idx as u32 + 1, 10).unwrap_or('?'),
                label: ingredient.as_str().to_string(),
                is_selected: self.selected_ingredient == Some(*ingredient),
            })
            .collect()
    }

    /// The card area: the dish under review, or a status message in its place.
    fn compute_card(&self) -> CardBody {
        match self.fetch {
            FetchStatus::Idle => CardBody::Status(StatusInfo {
                message: "Pick an ingredient".to_string(),
                subtitle: "Press 1-6 to fetch meal ideas".to_string(),
                is_error: false,
            }),
            FetchStatus::Loading(ingredient) => CardBody::Status(StatusInfo {
                message: "Loading...".to_string(),
                subtitle: format!("Fetching {ingredient} dishes"),
                is_error: false,
            }),
            FetchStatus::NoResults(ingredient) => CardBody::Status(StatusInfo {
                message: "No dishes for this ingredient".to_string(),
                subtitle: format!("{ingredient} came back empty, try another"),
                is_error: false,
            }),
            FetchStatus::Failed => CardBody::Status(StatusInfo {
                message: "Connection error".to_string(),
                subtitle: "Check your network and reselect an ingredient".to_string(),
                is_error: true,
            }),
            FetchStatus::Ready => match self.review.current() {
                Some(meal) => CardBody::Dish(CardInfo {
                    name: meal.name.clone(),
                    thumb: meal.thumb.clone(),
                    position: match self.review.position() {
                        Some(pos) => format!("{pos} of {}", self.review.len()),
                        None => String::new(),
                    },
                }),
                None => CardBody::Status(StatusInfo {
                    message: "That's everything in this category!".to_string(),
                    subtitle: "Pick another ingredient to keep browsing".to_string(),
                    is_error: false,
                }),
            },
        }
    }

    /// Footer keybinding hints for the active screen.
    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.screen {
            Screen::Home => {
                "1-6: ingredient  x/←: pass  l/→: like  Tab: liked  d: theme  q: quit".to_string()
            }
            Screen::Liked => "Tab/Esc: home  d: theme  q: quit".to_string(),
        };
        FooterInfo { keybindings }
    }

    /// Rows available for liked-list entries after subtracting UI chrome.
    ///
    /// Chrome is 6 rows: blank line, header, two borders, column header, footer.
    const fn liked_rows_available(total_rows: usize) -> usize {
        total_rows.saturating_sub(6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Meal;

    fn state() -> AppState {
        AppState::new(Theme::from_mode(false), Theme::from_mode(true))
    }

    #[test]
    fn initial_state_is_idle_home_light() {
        let state = state();
        assert_eq!(state.screen, Screen::Home);
        assert_eq!(state.fetch, FetchStatus::Idle);
        assert!(!state.dark_mode);
        assert!(state.review.is_exhausted());
        assert!(state.liked.is_empty());
    }

    #[test]
    fn apply_mode_swaps_theme_variant() {
        let mut state = state();
        assert_eq!(state.theme.name, "light");

        state.apply_mode(true);
        assert!(state.dark_mode);
        assert_eq!(state.theme.name, "dark");

        state.apply_mode(false);
        assert!(!state.dark_mode);
        assert_eq!(state.theme.name, "light");
    }

    #[test]
    fn home_viewmodel_shows_idle_prompt_before_any_fetch() {
        let vm = state().compute_viewmodel(24, 80);
        let ScreenBody::Home { card, ingredients, .. } = vm.body else {
            panic!("expected home screen");
        };
        assert_eq!(ingredients.len(), 6);
        assert!(ingredients.iter().all(|e| !e.is_selected));
        let CardBody::Status(status) = card else {
            panic!("expected status card");
        };
        assert_eq!(status.message, "Pick an ingredient");
    }

    #[test]
    fn ready_viewmodel_shows_current_meal_with_position() {
        let mut state = state();
        state.fetch = FetchStatus::Ready;
        state.review.reset(vec![
            Meal::new("1", "Stew", "https://example.com/1.jpg"),
            Meal::new("2", "Pie", "https://example.com/2.jpg"),
        ]);
        state.review.advance();

        let vm = state.compute_viewmodel(24, 80);
        let ScreenBody::Home { card, .. } = vm.body else {
            panic!("expected home screen");
        };
        let CardBody::Dish(card) = card else {
            panic!("expected dish card");
        };
        assert_eq!(card.name, "Pie");
        assert_eq!(card.position, "2 of 2");
    }

    #[test]
    fn exhausted_viewmodel_shows_category_done_message() {
        let mut state = state();
        state.fetch = FetchStatus::Ready;
        state.review.reset(vec![Meal::new("1", "Stew", "https://example.com/1.jpg")]);
        state.review.advance();

        let vm = state.compute_viewmodel(24, 80);
        let ScreenBody::Home { card, .. } = vm.body else {
            panic!("expected home screen");
        };
        let CardBody::Status(status) = card else {
            panic!("expected status card");
        };
        assert_eq!(status.message, "That's everything in this category!");
    }

    #[test]
    fn liked_viewmodel_windows_to_available_rows() {
        let mut state = state();
        state.screen = Screen::Liked;
        for i in 0..20 {
            state
                .liked
                .like(Meal::new(i.to_string(), format!("Meal {i}"), "u"));
        }

        // 10 rows - 6 chrome rows leaves 4 entries visible.
        let vm = state.compute_viewmodel(10, 80);
        let ScreenBody::Liked { items, hidden_count } = vm.body else {
            panic!("expected liked screen");
        };
        assert_eq!(items.len(), 4);
        assert_eq!(hidden_count, 16);
        assert_eq!(vm.header.title, " Liked Meals (20) ");
    }
}
