/// Popup UI for Job Stash

use std::future::Future;
use std::rc::Rc;

use patternfly_yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use yew::prelude::*;

use super::components::{RecordRow, RowAction, ViewTabs};
use super::editors::{ArchiveEditor, NoteEditor, RelatedUrlsEditor};
use super::save_button::{SaveButton, SaveButtonAction, reset_after_delay};
use crate::chrome::{ChromePlatform, download_export};
use crate::config::LOAD_ERROR_MESSAGE;
use crate::controller::{ListController, ListSnapshot};
use crate::error::{AppError, Result};
use crate::record::ArchiveReason;
use crate::view::{RowView, ViewFilter};

type Controller = Rc<ListController<ChromePlatform>>;
type PopupHandle = UseReducerHandle<PopupState>;

#[derive(Debug, Clone, PartialEq)]
enum ListState {
    Loading,
    Ready(ListSnapshot),
    Error,
}

/// Which editor is open, keyed by record URL
#[derive(Debug, Clone, PartialEq)]
enum OpenEditor {
    Note(String),
    Related(String),
    Archive(String),
}

/// The list and the editor open over it
#[derive(Debug, Clone, PartialEq)]
struct PopupState {
    list: ListState,
    editor: Option<OpenEditor>,
}

impl Default for PopupState {
    fn default() -> Self {
        PopupState {
            list: ListState::Loading,
            editor: None,
        }
    }
}

enum PopupAction {
    Loaded(ListSnapshot),
    Failed,
    OpenEditor(OpenEditor),
    CloseEditor,
}

impl PopupState {
    fn apply(self, action: PopupAction) -> PopupState {
        match action {
            PopupAction::Loaded(snapshot) => PopupState {
                list: ListState::Ready(snapshot),
                ..self
            },
            // The error replaces the whole list, editors included
            PopupAction::Failed => PopupState {
                list: ListState::Error,
                editor: None,
            },
            PopupAction::OpenEditor(open) => PopupState {
                editor: Some(open),
                ..self
            },
            PopupAction::CloseEditor => PopupState { editor: None, ..self },
        }
    }

    fn snapshot(&self) -> Option<&ListSnapshot> {
        match &self.list {
            ListState::Ready(snapshot) => Some(snapshot),
            _ => None,
        }
    }
}

impl Reducible for PopupState {
    type Action = PopupAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new((*self).clone().apply(action))
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let controller: Controller = use_memo((), |_| ListController::new(ChromePlatform));
    let state = use_reducer(PopupState::default);
    let save_button = use_reducer(SaveButton::default);
    let next_ticket = use_mut_ref(|| 0u32);
    let active_row_ref = use_node_ref();

    // Load the list and locate the active tab on mount
    {
        let controller = controller.clone();
        let state = state.clone();
        let save_button = save_button.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match controller.initialize().await {
                    Ok(init) => {
                        save_button.dispatch(SaveButtonAction::Opened {
                            already_saved: init.already_saved,
                        });
                        state.dispatch(PopupAction::Loaded(init.list));
                    }
                    Err(e) => fail(&state, "Error loading URLs", e),
                }
            });
            || ()
        });
    }

    // Keep the highlighted row on screen after every render of the list
    {
        let active_row_ref = active_row_ref.clone();
        use_effect_with(state.list.clone(), move |_| {
            if let Some(element) = active_row_ref.cast::<Element>() {
                element.scroll_into_view_with_bool(false);
            }
            || ()
        });
    }

    let on_save = {
        let controller = controller.clone();
        let state = state.clone();
        let save_button = save_button.clone();

        Callback::from(move |_: MouseEvent| {
            let controller = controller.clone();
            let state = state.clone();
            let save_button = save_button.clone();
            let ticket = {
                let mut counter = next_ticket.borrow_mut();
                *counter = counter.wrapping_add(1);
                *counter
            };

            spawn_local(async move {
                match controller.save_current_tab().await {
                    Ok((outcome, snapshot)) => {
                        state.dispatch(PopupAction::Loaded(snapshot));
                        save_button.dispatch(SaveButtonAction::Pressed { outcome, ticket });
                        if outcome.shows_saved() {
                            reset_after_delay(ticket, move |action| save_button.dispatch(action)).await;
                        }
                    }
                    Err(e) => fail(&state, "Error saving URL", e),
                }
            });
        })
    };

    let on_select_view = {
        let controller = controller.clone();
        let state = state.clone();
        Callback::from(move |view: ViewFilter| {
            state.dispatch(PopupAction::Loaded(controller.switch_view(view)));
        })
    };

    let on_row_action = {
        let controller = controller.clone();
        let state = state.clone();

        Callback::from(move |(action, url): (RowAction, String)| match action {
            RowAction::ToggleApplied => {
                let controller = controller.clone();
                run(&state, async move { controller.toggle_applied(&url).await });
            }
            RowAction::Delete => {
                let controller = controller.clone();
                run(&state, async move { controller.delete(&url).await });
            }
            RowAction::EditNote => state.dispatch(PopupAction::OpenEditor(OpenEditor::Note(url))),
            RowAction::ManageRelated => state.dispatch(PopupAction::OpenEditor(OpenEditor::Related(url))),
            RowAction::Archive => state.dispatch(PopupAction::OpenEditor(OpenEditor::Archive(url))),
        })
    };

    let on_export = {
        let controller = controller.clone();
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let controller = controller.clone();
            let state = state.clone();
            spawn_local(async move {
                match controller.export_json().await {
                    Ok(json) => download_export(&json),
                    Err(e) => fail(&state, "Export failed", e),
                }
            });
        })
    };

    let editor_html = match (&state.editor, state.snapshot()) {
        (Some(open), Some(snapshot)) => render_editor(open, snapshot, &controller, &state),
        _ => html! {},
    };

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"Job Stash"}</h1>

            <Button
                onclick={on_save}
                variant={if save_button.is_idle() { ButtonVariant::Primary } else { ButtonVariant::Secondary }}
                block={true}
            >
                {save_button.label.text()}
            </Button>

            <ViewTabs active={controller.view()} on_select={on_select_view} />

            <div class="tab-pane-content">
                {match &state.list {
                    ListState::Loading => html! {
                        <div class="loading-text-center">
                            <Spinner />
                        </div>
                    },
                    ListState::Error => html! {
                        <p class="list-error">{LOAD_ERROR_MESSAGE}</p>
                    },
                    ListState::Ready(snapshot) if snapshot.rows.is_empty() => html! {
                        <div class="empty-state">
                            <p>{snapshot.view.empty_message()}</p>
                        </div>
                    },
                    ListState::Ready(snapshot) => html! {
                        <ul class="record-list">
                            {for snapshot.rows.iter().map(|row| {
                                let row_ref = if row.is_active { active_row_ref.clone() } else { NodeRef::default() };
                                html! {
                                    <RecordRow
                                        key={row.url.clone()}
                                        row={row.clone()}
                                        on_action={on_row_action.clone()}
                                        row_ref={row_ref}
                                    />
                                }
                            })}
                        </ul>
                    },
                }}
            </div>

            {editor_html}

            <div class="footer-popup">
                if let Some(snapshot) = state.snapshot() {
                    <span class="footer-stats">
                        {format!("{} saved • {} applied • {} archived",
                            snapshot.summary.total,
                            snapshot.summary.applied,
                            snapshot.summary.archived
                        )}
                    </span>
                }
                <Button onclick={on_export} variant={ButtonVariant::Secondary}>
                    {"📥 Export"}
                </Button>
            </div>
        </div>
    }
}

fn render_editor(open: &OpenEditor, snapshot: &ListSnapshot, controller: &Controller, state: &PopupHandle) -> Html {
    let url = match open {
        OpenEditor::Note(url) | OpenEditor::Related(url) | OpenEditor::Archive(url) => url.clone(),
    };
    let Some(row) = find_row(snapshot, &url) else {
        return html! {};
    };
    let close_editor = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(PopupAction::CloseEditor))
    };

    match open {
        OpenEditor::Note(_) => {
            let on_save = {
                let controller = controller.clone();
                let state = state.clone();
                Callback::from(move |text: String| {
                    let controller = controller.clone();
                    let url = url.clone();
                    state.dispatch(PopupAction::CloseEditor);
                    run(&state, async move { controller.edit_note(&url, &text).await });
                })
            };
            html! {
                <NoteEditor
                    initial={row.notes.clone().unwrap_or_default()}
                    on_save={on_save}
                    on_cancel={close_editor}
                />
            }
        }
        OpenEditor::Related(_) => {
            let on_add = {
                let controller = controller.clone();
                let state = state.clone();
                let url = url.clone();
                Callback::from(move |related: String| {
                    let controller = controller.clone();
                    let url = url.clone();
                    run(&state, async move { controller.add_related_url(&url, &related).await });
                })
            };
            let on_remove = {
                let controller = controller.clone();
                let state = state.clone();
                Callback::from(move |related: String| {
                    let controller = controller.clone();
                    let url = url.clone();
                    run(&state, async move { controller.remove_related_url(&url, &related).await });
                })
            };
            html! {
                <RelatedUrlsEditor
                    urls={row.related_urls.clone()}
                    on_add={on_add}
                    on_remove={on_remove}
                    on_close={close_editor}
                />
            }
        }
        OpenEditor::Archive(_) => {
            let on_archive = {
                let controller = controller.clone();
                let state = state.clone();
                let url = url.clone();
                Callback::from(move |reason: ArchiveReason| {
                    let controller = controller.clone();
                    let url = url.clone();
                    state.dispatch(PopupAction::CloseEditor);
                    run(&state, async move { controller.archive(&url, reason).await });
                })
            };
            let on_unarchive = {
                let controller = controller.clone();
                let state = state.clone();
                Callback::from(move |_: ()| {
                    let controller = controller.clone();
                    let url = url.clone();
                    state.dispatch(PopupAction::CloseEditor);
                    run(&state, async move { controller.unarchive(&url).await });
                })
            };
            html! {
                <ArchiveEditor
                    current={row.archived_reason.clone()}
                    on_archive={on_archive}
                    on_unarchive={on_unarchive}
                    on_cancel={close_editor}
                />
            }
        }
    }
}

// Helper functions

fn find_row<'a>(snapshot: &'a ListSnapshot, url: &str) -> Option<&'a RowView> {
    snapshot.rows.iter().find(|row| row.url == url)
}

/// Log a failed operation and show the inline error in place of the list
fn fail(state: &PopupHandle, context: &str, error: AppError) {
    log::error!("{}: {}", context, error);
    state.dispatch(PopupAction::Failed);
}

/// Drive one controller operation and show its result, or the inline error
fn run<F>(state: &PopupHandle, operation: F)
where
    F: Future<Output = Result<ListSnapshot>> + 'static,
{
    let state = state.clone();
    spawn_local(async move {
        match operation.await {
            Ok(snapshot) => state.dispatch(PopupAction::Loaded(snapshot)),
            Err(e) => fail(&state, "Error loading URLs", e),
        }
    });
}
