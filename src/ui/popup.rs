/// Popup UI for Extension Board

use crate::board::{Board, BoardAction, DragState};
use crate::chrome::{ChromeManagement, ChromeStorage};
use crate::storage::Categories;
use crate::sync::BoardSync;
use crate::ui::components::{BoardColumn, CategoryList};
use crate::ui::messages::{MessageStack, use_messages};
use patternfly_yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

type ChromeBoardSync = BoardSync<ChromeStorage, ChromeManagement>;

fn chrome_sync() -> ChromeBoardSync {
    BoardSync::new(ChromeStorage, ChromeManagement)
}

#[derive(Clone, PartialEq)]
enum AppState {
    Loading,
    Idle,
}

#[function_component(App)]
pub fn app() -> Html {
    let state = use_state(|| AppState::Loading);
    let board = use_reducer(Board::new);
    let categories = use_state(Categories::new);
    let drag = use_state(DragState::default);
    let new_category = use_state(String::new);
    let messages = use_messages();

    // Load categories, then extensions, on mount
    {
        let state = state.clone();
        let board = board.clone();
        let categories = categories.clone();
        let messages = messages.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                let sync = chrome_sync();

                match sync.load_categories(&board).await {
                    Ok(loaded) => categories.set(loaded),
                    Err(e) => messages.report("Failed to load categories.", &e),
                }
                if let Err(e) = sync.load_extensions(&board).await {
                    messages.report("Failed to load extensions.", &e);
                }

                state.set(AppState::Idle);
            });
            || ()
        });
    }

    // Drag bookkeeping
    let on_card_drag_start = {
        let drag = drag.clone();
        Callback::from(move |extension_id: String| {
            let mut next = (*drag).clone();
            next.start_card(&extension_id);
            drag.set(next);
        })
    };

    let on_column_drag_start = {
        let drag = drag.clone();
        Callback::from(move |category: String| {
            let mut next = (*drag).clone();
            next.start_column(&category);
            drag.set(next);
        })
    };

    let on_drag_end = {
        let drag = drag.clone();
        Callback::from(move |_: ()| drag.set(DragState::default()))
    };

    let on_zone_hover = {
        let drag = drag.clone();
        Callback::from(move |zone: Option<String>| {
            let mut next = (*drag).clone();
            next.hover_zone = zone;
            drag.set(next);
        })
    };

    // Column dropped onto another column: swap them
    let on_column_drop = {
        let drag = drag.clone();
        let board = board.clone();
        Callback::from(move |target: String| {
            if let Some(dragged) = drag.column.clone() {
                board.dispatch(BoardAction::SwapColumns { dragged, target });
            }
        })
    };

    // Card dropped into a drop-zone
    let on_card_drop = {
        let drag = drag.clone();
        let board = board.clone();
        let messages = messages.clone();
        Callback::from(move |drop_status: String| {
            let Some(extension_id) = drag.card.clone() else {
                return;
            };
            drag.set(DragState::default());

            let board = board.clone();
            let messages = messages.clone();
            spawn_local(async move {
                let sync = chrome_sync();
                if let Err(e) = sync.drop_card(&board, &extension_id, &drop_status).await {
                    messages.report("Failed to update extension status.", &e);
                }
            });
        })
    };

    let on_toggle = {
        let board = board.clone();
        let messages = messages.clone();
        Callback::from(move |(extension_id, enable): (String, bool)| {
            let board = board.clone();
            let messages = messages.clone();
            spawn_local(async move {
                let sync = chrome_sync();
                if let Err(e) = sync.toggle_extension(&board, &extension_id, enable).await {
                    messages.report("Failed to toggle extension.", &e);
                }
            });
        })
    };

    let on_close = {
        let board = board.clone();
        let categories = categories.clone();
        let messages = messages.clone();
        Callback::from(move |category: String| {
            let board = board.clone();
            let categories = categories.clone();
            let messages = messages.clone();
            spawn_local(async move {
                let sync = chrome_sync();
                match sync.close_category(&board, &category).await {
                    Ok(loaded) => categories.set(loaded),
                    Err(e) => messages.report("Failed to remove category.", &e),
                }
            });
        })
    };

    // New category input
    let on_new_category_input = {
        let new_category = new_category.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                new_category.set(input.value());
            }
        })
    };

    let add_category = {
        let board = board.clone();
        let categories = categories.clone();
        let new_category = new_category.clone();
        let messages = messages.clone();
        Callback::from(move |_: ()| {
            let board = board.clone();
            let categories = categories.clone();
            let new_category = new_category.clone();
            let messages = messages.clone();
            let raw = (*new_category).clone();
            spawn_local(async move {
                let sync = chrome_sync();
                match sync.add_category(&board, &raw).await {
                    Ok(loaded) => {
                        categories.set(loaded);
                        new_category.set(String::new());
                    }
                    Err(e) => messages.report("Failed to add category.", &e),
                }
            });
        })
    };

    let on_add_click = {
        let add_category = add_category.clone();
        Callback::from(move |_: MouseEvent| add_category.emit(()))
    };

    let on_new_category_keydown = {
        let add_category = add_category.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                add_category.emit(());
            }
        })
    };

    let on_reset = {
        let board = board.clone();
        let categories = categories.clone();
        let messages = messages.clone();
        Callback::from(move |_: MouseEvent| {
            let confirmed = web_sys::window()
                .and_then(|w| {
                    w.confirm_with_message("Remove all categories and assignments?")
                        .ok()
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }

            let board = board.clone();
            let categories = categories.clone();
            let messages = messages.clone();
            spawn_local(async move {
                let sync = chrome_sync();
                match sync.reset(&board).await {
                    Ok(loaded) => categories.set(loaded),
                    Err(e) => messages.report("Failed to reset categories.", &e),
                }
            });
        })
    };

    let columns = board.view();
    let unassigned = board.unassigned().len();
    let is_busy = *state == AppState::Loading;

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"Extension Board"}</h1>

            <div class="add-category">
                <input
                    type="text"
                    id="newCategoryInput"
                    placeholder="New category..."
                    value={(*new_category).clone()}
                    oninput={on_new_category_input}
                    onkeydown={on_new_category_keydown}
                    class="search-input"
                />
                <Button onclick={on_add_click} disabled={is_busy} variant={ButtonVariant::Primary}>
                    {"Add Category"}
                </Button>
                <Button onclick={on_reset} disabled={is_busy} variant={ButtonVariant::Danger}>
                    {"Reset"}
                </Button>
            </div>

            if categories.is_empty() && !is_busy {
                <p class="empty-state-hint">
                    {"No categories yet. Add one to start sorting extensions."}
                </p>
            }
            <CategoryList categories={categories.labels.clone()} />

            if is_busy {
                <div class="loading-text-center">
                    <Spinner />
                    <p class="loading-text">{"Loading extensions..."}</p>
                </div>
            }

            <div class="kanban-board" id="kanbanBoard">
                {for columns.into_iter().map(|column| {
                    let dragging = drag.is_dragging_column(&column.category);
                    let hovered = drag.hover_zone.as_deref() == Some(column.drop_status.as_str());
                    let key = column.category.clone();
                    html! {
                        <BoardColumn
                            key={key}
                            column={column}
                            dragging={dragging}
                            hovered={hovered}
                            dragging_card={drag.card.clone()}
                            on_column_drag_start={on_column_drag_start.clone()}
                            on_column_drop={on_column_drop.clone()}
                            on_drag_end={on_drag_end.clone()}
                            on_zone_hover={on_zone_hover.clone()}
                            on_card_drag_start={on_card_drag_start.clone()}
                            on_card_drop={on_card_drop.clone()}
                            on_toggle={on_toggle.clone()}
                            on_close={on_close.clone()}
                        />
                    }
                })}
            </div>

            <MessageStack messages={messages.items()} />

            <p class="footer-popup">
                {format!("{} extensions • {} categories • {} unassigned",
                    board.extensions().len(),
                    categories.len(),
                    unassigned
                )}
            </p>
        </div>
    }
}
