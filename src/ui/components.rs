/// Board components: columns, cards and the category list

use crate::board::ColumnView;
use crate::extension_data::ExtensionRecord;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ExtensionCardProps {
    pub extension: ExtensionRecord,
    pub dragging: bool,
    pub on_drag_start: Callback<String>,
    pub on_drag_end: Callback<()>,
    pub on_toggle: Callback<(String, bool)>,
}

#[function_component(ExtensionCard)]
pub fn extension_card(props: &ExtensionCardProps) -> Html {
    let ext = &props.extension;

    let ondragstart = {
        let id = ext.id.clone();
        let on_drag_start = props.on_drag_start.clone();
        Callback::from(move |e: DragEvent| {
            // Keep the enclosing column from starting its own drag
            e.stop_propagation();
            if let Some(data) = e.data_transfer() {
                let _ = data.set_data("text/plain", &id);
            }
            on_drag_start.emit(id.clone());
        })
    };

    let ondragend = {
        let on_drag_end = props.on_drag_end.clone();
        Callback::from(move |e: DragEvent| {
            e.stop_propagation();
            on_drag_end.emit(());
        })
    };

    let onclick = {
        let id = ext.id.clone();
        let enable = !ext.enabled;
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit((id.clone(), enable)))
    };

    let (button_class, button_label) = if ext.enabled {
        ("btn btn-disable", "Disable")
    } else {
        ("btn btn-enable", "Enable")
    };

    html! {
        <div
            class={classes!("kanban-card", props.dragging.then_some("dragging"))}
            draggable="true"
            data-extension-id={ext.id.clone()}
            {ondragstart}
            {ondragend}
        >
            <div class="extension-info">
                <img class="extension-icon" src={ext.icon_url().to_string()} alt="" />
                <h3 class="extension-name">{&ext.name}</h3>
            </div>
            <div class="extension-controls">
                <button class={button_class} {onclick}>{button_label}</button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BoardColumnProps {
    pub column: ColumnView,
    pub dragging: bool,
    pub hovered: bool,
    #[prop_or_default]
    pub dragging_card: Option<String>,
    pub on_column_drag_start: Callback<String>,
    pub on_column_drop: Callback<String>,
    pub on_drag_end: Callback<()>,
    pub on_zone_hover: Callback<Option<String>>,
    pub on_card_drag_start: Callback<String>,
    pub on_card_drop: Callback<String>,
    pub on_toggle: Callback<(String, bool)>,
    pub on_close: Callback<String>,
}

#[function_component(BoardColumn)]
pub fn board_column(props: &BoardColumnProps) -> Html {
    let column = &props.column;

    let ondragstart = {
        let category = column.category.clone();
        let on_column_drag_start = props.on_column_drag_start.clone();
        Callback::from(move |e: DragEvent| {
            if let Some(data) = e.data_transfer() {
                let _ = data.set_data("text/plain", &category);
            }
            on_column_drag_start.emit(category.clone());
        })
    };

    let ondragend = {
        let on_drag_end = props.on_drag_end.clone();
        Callback::from(move |_: DragEvent| on_drag_end.emit(()))
    };

    // Allow drop
    let ondragover = Callback::from(|e: DragEvent| e.prevent_default());

    let ondrop = {
        let category = column.category.clone();
        let on_column_drop = props.on_column_drop.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            on_column_drop.emit(category.clone());
        })
    };

    let zone_dragover = {
        let status = column.drop_status.clone();
        let hovered = props.hovered;
        let on_zone_hover = props.on_zone_hover.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            if !hovered {
                on_zone_hover.emit(Some(status.clone()));
            }
        })
    };

    let zone_dragleave = {
        let on_zone_hover = props.on_zone_hover.clone();
        Callback::from(move |_: DragEvent| on_zone_hover.emit(None))
    };

    let zone_drop = {
        let status = column.drop_status.clone();
        let carrying_card = props.dragging_card.is_some();
        let on_card_drop = props.on_card_drop.clone();
        let on_zone_hover = props.on_zone_hover.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            on_zone_hover.emit(None);
            // Column drops fall through to the column handler
            if carrying_card {
                e.stop_propagation();
                on_card_drop.emit(status.clone());
            }
        })
    };

    let onclose = {
        let category = column.category.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(category.clone()))
    };

    html! {
        <div
            class={classes!("kanban-column", props.dragging.then_some("dragging"))}
            draggable="true"
            data-category={column.category.clone()}
            {ondragstart}
            {ondragend}
            {ondragover}
            {ondrop}
        >
            <div class="column-header">
                <h2>{&column.category}</h2>
                <button class="close-category" onclick={onclose}>{"X"}</button>
            </div>
            <div
                class={classes!("column-drop-zone", props.hovered.then_some("drop-hover"))}
                data-status={column.drop_status.clone()}
                ondragover={zone_dragover}
                ondragleave={zone_dragleave}
                ondrop={zone_drop}
            >
                {for column.cards.iter().map(|ext| html! {
                    <ExtensionCard
                        key={ext.id.clone()}
                        extension={ext.clone()}
                        dragging={props.dragging_card.as_deref() == Some(ext.id.as_str())}
                        on_drag_start={props.on_card_drag_start.clone()}
                        on_drag_end={props.on_drag_end.clone()}
                        on_toggle={props.on_toggle.clone()}
                    />
                })}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CategoryListProps {
    pub categories: Vec<String>,
}

#[function_component(CategoryList)]
pub fn category_list(props: &CategoryListProps) -> Html {
    html! {
        <ul class="category-list" id="categoryList">
            {for props.categories.iter().map(|category| html! {
                <li key={category.clone()} class="category-item">{category}</li>
            })}
        </ul>
    }
}
