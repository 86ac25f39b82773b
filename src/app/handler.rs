//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input,
//! fetch completions, and worker responses, translating them into state
//! changes and action sequences. It serves as the primary control flow
//! coordinator for the application.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime or worker thread
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur on `AppState`
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! Events fall into several categories:
//! - **Review**: `SelectIngredient`, `Reject`, `Like`
//! - **Navigation**: `ShowLiked`, `ShowHome`, `CloseFocus`
//! - **Settings**: `ToggleDarkMode`
//! - **System**: `FetchCompleted` from the host's HTTP layer
//! - **Worker**: `WorkerResponse` with typed message variants

use crate::app::{Action, AppState, FetchStatus, Screen};
use crate::domain::error::Result;
use crate::domain::{Ingredient, Meal};
use crate::gateway::FetchOutcome;
use crate::storage::LikedRecord;
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events triggered by user input, fetch completions, or worker responses.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Picks an ingredient and starts a meal fetch for it.
    SelectIngredient(Ingredient),
    /// Passes on the meal under review and moves to the next one.
    Reject,
    /// Likes the meal under review, then moves to the next one.
    Like,
    /// Switches to the liked-meals screen.
    ShowLiked,
    /// Switches back to the home screen. Never triggers a re-fetch.
    ShowHome,
    /// Flips the dark-mode flag and persists the new value.
    ToggleDarkMode,
    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,

    /// Reports the outcome of an ingredient fetch.
    ///
    /// `request_id` is the fetch generation assigned when the request was
    /// issued; completions from a superseded request are discarded.
    FetchCompleted {
        /// Fetch generation this completion belongs to.
        request_id: u64,
        /// Classified result of the request.
        outcome: FetchOutcome,
    },

    /// Wraps a response from the background worker thread.
    ///
    /// Processed by matching on the inner [`WorkerResponse`] variant. May
    /// hydrate persisted state or log completion of a storage write.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// This is the primary event handler that coordinates all state transitions
/// and side effects. It pattern-matches on event types, mutates state, and
/// collects actions to be executed by the plugin runtime.
///
/// # Parameters
///
/// * `state` - Mutable reference to application state
/// * `event` - Event to process
///
/// # Returns
///
/// `(should_render, actions)`: whether the UI needs a redraw, and the actions
/// to execute in sequence. Actions may be empty if the event requires no side
/// effects (e.g., liking with an exhausted queue).
///
/// # Errors
///
/// Returns errors from state mutation; currently all transitions are
/// infallible, so this is reserved for future storage-backed transitions.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::SelectIngredient(ingredient) => {
            state.request_seq = state.request_seq.saturating_add(1);
            state.selected_ingredient = Some(*ingredient);
            state.fetch = FetchStatus::Loading(*ingredient);
            state.notice = None;

            tracing::debug!(
                ingredient = %ingredient,
                request_id = state.request_seq,
                "ingredient selected, starting fetch"
            );

            Ok((
                true,
                vec![Action::StartFetch {
                    request_id: state.request_seq,
                    ingredient: *ingredient,
                }],
            ))
        }
        Event::Reject => {
            if !matches!(state.fetch, FetchStatus::Ready) {
                tracing::debug!("reject ignored, no active review");
                return Ok((false, vec![]));
            }

            state.notice = None;

            if state.review.current().is_none() {
                tracing::debug!("reject ignored, queue exhausted");
                return Ok((false, vec![]));
            }

            state.review.advance();
            Ok((true, vec![]))
        }
        Event::Like => {
            if !matches!(state.fetch, FetchStatus::Ready) {
                tracing::debug!("like ignored, no active review");
                return Ok((false, vec![]));
            }

            state.notice = None;

            let Some(meal) = state.review.current().cloned() else {
                tracing::debug!("like ignored, queue exhausted");
                return Ok((false, vec![]));
            };

            tracing::debug!(meal_id = %meal.id, meal_name = %meal.name, "liking meal");

            let record = LikedRecord::from_meal(&meal);
            state.liked.like(meal);
            state.notice = Some("Liked!".to_string());
            state.review.advance();

            Ok((
                true,
                vec![Action::PostToWorker(WorkerMessage::AppendLiked { record })],
            ))
        }
        Event::ShowLiked => {
            if state.screen == Screen::Liked {
                return Ok((false, vec![]));
            }
            state.screen = Screen::Liked;
            Ok((true, vec![]))
        }
        Event::ShowHome => {
            if state.screen == Screen::Home {
                return Ok((false, vec![]));
            }
            state.screen = Screen::Home;
            Ok((true, vec![]))
        }
        Event::ToggleDarkMode => {
            state.apply_mode(!state.dark_mode);

            tracing::debug!(dark_mode = state.dark_mode, "theme toggled");

            Ok((
                true,
                vec![Action::PostToWorker(WorkerMessage::SetDarkMode {
                    dark: state.dark_mode,
                })],
            ))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::FetchCompleted { request_id, outcome } => {
            if *request_id != state.request_seq {
                tracing::debug!(
                    stale_id = request_id,
                    current_id = state.request_seq,
                    "discarding stale fetch completion"
                );
                return Ok((false, vec![]));
            }

            match outcome {
                FetchOutcome::Meals(meals) => {
                    tracing::debug!(meal_count = meals.len(), "fetch succeeded");
                    state.review.reset(meals.clone());
                    state.fetch = FetchStatus::Ready;
                }
                FetchOutcome::Empty => {
                    // Queue deliberately untouched: the previous results stay
                    // reviewable after the user fetches a different ingredient.
                    let ingredient = state
                        .selected_ingredient
                        .unwrap_or(Ingredient::ALL[0]);
                    tracing::debug!(ingredient = %ingredient, "fetch returned no meals");
                    state.fetch = FetchStatus::NoResults(ingredient);
                }
                FetchOutcome::Failed(reason) => {
                    tracing::warn!(reason = %reason, "fetch failed");
                    state.fetch = FetchStatus::Failed;
                }
            }

            Ok((true, vec![]))
        }
        Event::WorkerResponse(response) => match response {
            WorkerResponse::StateLoaded { dark_mode, liked } => {
                tracing::debug!(
                    dark_mode = dark_mode,
                    liked_count = liked.len(),
                    "hydrating persisted state"
                );

                state.apply_mode(*dark_mode);
                state.liked.hydrate(liked.iter().map(Meal::from).collect());

                Ok((true, vec![]))
            }
            WorkerResponse::DarkModeSaved { dark } => {
                tracing::debug!(dark = dark, "dark mode persisted");
                Ok((false, vec![]))
            }
            WorkerResponse::LikedAppended { count } => {
                tracing::debug!(liked_count = count, "liked meal persisted");
                Ok((false, vec![]))
            }
            WorkerResponse::Error { message } => {
                tracing::error!("Worker error: {}", message);
                Ok((false, vec![]))
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::Theme;

    fn state() -> AppState {
        AppState::new(Theme::from_mode(false), Theme::from_mode(true))
    }

    fn meal(id: &str, name: &str) -> Meal {
        Meal::new(id, name, format!("https://example.com/{id}.jpg"))
    }

    fn select(state: &mut AppState, ingredient: Ingredient) -> u64 {
        let (render, actions) =
            handle_event(state, &Event::SelectIngredient(ingredient)).unwrap();
        assert!(render);
        let [Action::StartFetch { request_id, ingredient: got }] = actions.as_slice() else {
            panic!("expected exactly one StartFetch");
        };
        assert_eq!(*got, ingredient);
        *request_id
    }

    fn complete(state: &mut AppState, request_id: u64, outcome: FetchOutcome) -> bool {
        let (render, actions) =
            handle_event(state, &Event::FetchCompleted { request_id, outcome }).unwrap();
        assert!(actions.is_empty());
        render
    }

    #[test]
    fn selecting_ingredient_enters_loading_and_emits_one_fetch() {
        let mut state = state();
        let id = select(&mut state, Ingredient::Chicken);

        assert_eq!(id, 1);
        assert_eq!(state.fetch, FetchStatus::Loading(Ingredient::Chicken));
        assert_eq!(state.selected_ingredient, Some(Ingredient::Chicken));
    }

    #[test]
    fn chicken_review_flow_like_then_reject_then_done() {
        let mut state = state();
        let id = select(&mut state, Ingredient::Chicken);
        complete(
            &mut state,
            id,
            FetchOutcome::Meals(vec![meal("1", "Meal A"), meal("2", "Meal B")]),
        );

        assert_eq!(state.fetch, FetchStatus::Ready);
        assert_eq!(state.review.current().map(|m| m.name.as_str()), Some("Meal A"));

        // Like A: appended to liked, notice set, worker write queued, B now current.
        let (render, actions) = handle_event(&mut state, &Event::Like).unwrap();
        assert!(render);
        assert_eq!(actions.len(), 1);
        assert!(matches!(
            actions[0],
            Action::PostToWorker(WorkerMessage::AppendLiked { .. })
        ));
        assert_eq!(state.liked.len(), 1);
        assert_eq!(state.notice.as_deref(), Some("Liked!"));
        assert_eq!(state.review.current().map(|m| m.name.as_str()), Some("Meal B"));

        // Reject B: notice cleared, queue exhausted.
        let (render, actions) = handle_event(&mut state, &Event::Reject).unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert!(state.notice.is_none());
        assert!(state.review.is_exhausted());
        assert_eq!(state.liked.len(), 1);
    }

    #[test]
    fn empty_fetch_keeps_previous_queue_reviewable() {
        let mut state = state();
        let id = select(&mut state, Ingredient::Chicken);
        complete(&mut state, id, FetchOutcome::Meals(vec![meal("1", "Meal A")]));

        let id = select(&mut state, Ingredient::Salmon);
        complete(&mut state, id, FetchOutcome::Empty);

        assert_eq!(state.fetch, FetchStatus::NoResults(Ingredient::Salmon));
        // The chicken queue is intact underneath the status message.
        assert_eq!(state.review.len(), 1);
        assert_eq!(state.review.current().map(|m| m.name.as_str()), Some("Meal A"));
    }

    #[test]
    fn failed_fetch_keeps_previous_queue_reviewable() {
        let mut state = state();
        let id = select(&mut state, Ingredient::Beef);
        complete(&mut state, id, FetchOutcome::Meals(vec![meal("1", "Meal A")]));

        let id = select(&mut state, Ingredient::Pork);
        complete(&mut state, id, FetchOutcome::Failed("timeout".to_string()));

        assert_eq!(state.fetch, FetchStatus::Failed);
        assert_eq!(state.review.len(), 1);
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut state = state();
        let first = select(&mut state, Ingredient::Chicken);
        let second = select(&mut state, Ingredient::Beef);
        assert!(second > first);

        // The superseded chicken request completes late and changes nothing.
        let render = complete(
            &mut state,
            first,
            FetchOutcome::Meals(vec![meal("1", "Chicken Meal")]),
        );
        assert!(!render);
        assert_eq!(state.fetch, FetchStatus::Loading(Ingredient::Beef));
        assert!(state.review.is_empty());

        // The current beef request still lands normally.
        complete(
            &mut state,
            second,
            FetchOutcome::Meals(vec![meal("2", "Beef Meal")]),
        );
        assert_eq!(state.fetch, FetchStatus::Ready);
        assert_eq!(state.review.current().map(|m| m.name.as_str()), Some("Beef Meal"));
    }

    #[test]
    fn like_and_reject_are_noops_when_queue_exhausted() {
        let mut state = state();
        let id = select(&mut state, Ingredient::Cheese);
        complete(&mut state, id, FetchOutcome::Meals(vec![meal("1", "Meal A")]));
        handle_event(&mut state, &Event::Reject).unwrap();
        assert!(state.review.is_exhausted());

        let (render, actions) = handle_event(&mut state, &Event::Like).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert!(state.liked.is_empty());

        let (render, actions) = handle_event(&mut state, &Event::Reject).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn like_is_noop_before_any_fetch() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::Like).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn navigation_flips_screens_without_refetch() {
        let mut state = state();
        let id = select(&mut state, Ingredient::Potato);
        complete(&mut state, id, FetchOutcome::Meals(vec![meal("1", "Meal A")]));

        let (render, actions) = handle_event(&mut state, &Event::ShowLiked).unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(state.screen, Screen::Liked);

        let (render, actions) = handle_event(&mut state, &Event::ShowHome).unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(state.screen, Screen::Home);
        // Returning home left the queue exactly where it was.
        assert_eq!(state.review.current().map(|m| m.name.as_str()), Some("Meal A"));
    }

    #[test]
    fn show_home_when_already_home_does_nothing() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::ShowHome).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn toggle_dark_mode_flips_flag_and_persists() {
        let mut state = state();
        assert!(!state.dark_mode);

        let (render, actions) = handle_event(&mut state, &Event::ToggleDarkMode).unwrap();
        assert!(render);
        assert!(state.dark_mode);
        assert_eq!(
            actions,
            vec![Action::PostToWorker(WorkerMessage::SetDarkMode { dark: true })]
        );

        let (_, actions) = handle_event(&mut state, &Event::ToggleDarkMode).unwrap();
        assert!(!state.dark_mode);
        assert_eq!(
            actions,
            vec![Action::PostToWorker(WorkerMessage::SetDarkMode { dark: false })]
        );
    }

    #[test]
    fn state_loaded_hydrates_theme_and_likes() {
        let mut state = state();
        let record = LikedRecord {
            meal_id: "9".to_string(),
            name: "Old Favourite".to_string(),
            thumb: "https://example.com/9.jpg".to_string(),
            liked_at: 1_700_000_000,
        };

        let (render, actions) = handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::StateLoaded {
                dark_mode: true,
                liked: vec![record],
            }),
        )
        .unwrap();

        assert!(render);
        assert!(actions.is_empty());
        assert!(state.dark_mode);
        assert_eq!(state.liked.len(), 1);
        assert_eq!(state.liked.all()[0].name, "Old Favourite");
    }

    #[test]
    fn write_acknowledgements_do_not_rerender() {
        let mut state = state();

        let (render, _) = handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::DarkModeSaved { dark: true }),
        )
        .unwrap();
        assert!(!render);

        let (render, _) = handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::LikedAppended { count: 3 }),
        )
        .unwrap();
        assert!(!render);
    }

    #[test]
    fn close_focus_emits_close_action() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}
