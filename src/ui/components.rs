/// Reusable UI components

use patternfly_yew::prelude::*;
use yew::prelude::*;

use crate::view::{RowView, ViewFilter};

#[derive(Properties, PartialEq)]
pub struct EditorModalProps {
    pub title: AttrValue,
    pub children: Children,
    pub on_cancel: Callback<()>,
    /// No commit button when absent, for editors that save as they go
    #[prop_or_default]
    pub on_commit: Option<Callback<()>>,
    #[prop_or(AttrValue::Static("Save"))]
    pub commit_label: AttrValue,
    #[prop_or(AttrValue::Static("Cancel"))]
    pub cancel_label: AttrValue,
}

/// Overlay + dialog shell shared by the note, related URL and archive editors
#[function_component(EditorModal)]
pub fn editor_modal(props: &EditorModalProps) -> Html {
    let on_overlay = props.on_cancel.reform(|_: MouseEvent| ());
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-overlay" onclick={on_overlay}>
            <div class="modal-box" onclick={keep_open}>
                <h3 class="modal-title">{props.title.clone()}</h3>
                <div class="modal-body">
                    {props.children.clone()}
                </div>
                <div class="modal-actions">
                    if let Some(on_commit) = &props.on_commit {
                        <Button
                            onclick={on_commit.reform(|_: MouseEvent| ())}
                            variant={ButtonVariant::Primary}
                        >
                            {props.commit_label.clone()}
                        </Button>
                    }
                    <Button
                        onclick={props.on_cancel.reform(|_: MouseEvent| ())}
                        variant={ButtonVariant::Secondary}
                    >
                        {props.cancel_label.clone()}
                    </Button>
                </div>
            </div>
        </div>
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RowAction {
    ToggleApplied,
    EditNote,
    ManageRelated,
    Archive,
    Delete,
}

#[derive(Properties, PartialEq)]
pub struct RecordRowProps {
    pub row: RowView,
    pub on_action: Callback<(RowAction, String)>,
    #[prop_or_default]
    pub row_ref: NodeRef,
}

#[function_component(RecordRow)]
pub fn record_row(props: &RecordRowProps) -> Html {
    let row = &props.row;

    let action = |kind: RowAction| {
        let url = row.url.clone();
        props.on_action.reform(move |_: MouseEvent| (kind, url.clone()))
    };

    let class = classes!(
        "record-row",
        row.is_active.then_some("active"),
        row.dimmed.then_some("dimmed"),
        row.applied.then_some("applied")
    );

    html! {
        <li class={class} ref={props.row_ref.clone()}>
            <input
                type="checkbox"
                class="applied-toggle"
                title="Applied"
                checked={row.applied}
                onclick={action(RowAction::ToggleApplied)}
            />
            <a
                class="record-link"
                href={row.url.clone()}
                target="_blank"
                rel="noopener noreferrer"
                title={row.url.clone()}
            >
                {&row.label}
            </a>
            <div class="record-actions">
                <button
                    class={classes!("icon-button", row.has_note().then_some("has-note"))}
                    title={row.note_tooltip().to_string()}
                    onclick={action(RowAction::EditNote)}
                >
                    {if row.has_note() { "📝" } else { "✏️" }}
                </button>
                <button
                    class="icon-button related-button"
                    title="Related URLs"
                    onclick={action(RowAction::ManageRelated)}
                >
                    {row.related_label()}
                </button>
                <button
                    class={classes!("icon-button", row.is_archived().then_some("is-archived"))}
                    title={row.archive_tooltip()}
                    onclick={action(RowAction::Archive)}
                >
                    {if row.is_archived() { "📦" } else { "🗄️" }}
                </button>
                <button
                    class="icon-button delete-button"
                    title="Delete"
                    onclick={action(RowAction::Delete)}
                >
                    {"🗑️"}
                </button>
            </div>
        </li>
    }
}

#[derive(Properties, PartialEq)]
pub struct ViewTabsProps {
    pub active: ViewFilter,
    pub on_select: Callback<ViewFilter>,
}

#[function_component(ViewTabs)]
pub fn view_tabs(props: &ViewTabsProps) -> Html {
    let tab = |view: ViewFilter| {
        let class = if props.active == view {
            "pf-v5-c-tabs__item pf-m-current"
        } else {
            "pf-v5-c-tabs__item"
        };
        html! {
            <li class={class}>
                <button
                    class="pf-v5-c-tabs__link"
                    onclick={props.on_select.reform(move |_: MouseEvent| view)}
                >
                    <span class="pf-v5-c-tabs__item-text">{view.label()}</span>
                </button>
            </li>
        }
    };

    html! {
        <div class="pf-v5-c-tabs tabs-nav">
            <ul class="pf-v5-c-tabs__list">
                {tab(ViewFilter::Current)}
                {tab(ViewFilter::Archived)}
            </ul>
        </div>
    }
}
