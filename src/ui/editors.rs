/// Editor bodies hosted in the shared editor modal

use patternfly_yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::components::EditorModal;
use crate::record::ArchiveReason;

#[derive(Properties, PartialEq)]
pub struct NoteEditorProps {
    pub initial: String,
    pub on_save: Callback<String>,
    pub on_cancel: Callback<()>,
}

#[function_component(NoteEditor)]
pub fn note_editor(props: &NoteEditorProps) -> Html {
    let text = use_state(|| props.initial.clone());

    let on_input = {
        let text = text.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                text.set(area.value());
            }
        })
    };

    let on_commit = {
        let text = text.clone();
        props.on_save.reform(move |_: ()| (*text).clone())
    };

    html! {
        <EditorModal title="Note" on_commit={on_commit} on_cancel={props.on_cancel.clone()}>
            <textarea
                class="note-input"
                rows="6"
                placeholder="Write a note..."
                value={(*text).clone()}
                oninput={on_input}
            />
        </EditorModal>
    }
}

#[derive(Properties, PartialEq)]
pub struct RelatedUrlsEditorProps {
    pub urls: Vec<String>,
    pub on_add: Callback<String>,
    pub on_remove: Callback<String>,
    pub on_close: Callback<()>,
}

/// Adds and removes persist immediately, so there is no commit button
#[function_component(RelatedUrlsEditor)]
pub fn related_urls_editor(props: &RelatedUrlsEditorProps) -> Html {
    let draft = use_state(String::new);

    let on_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                draft.set(input.value());
            }
        })
    };

    let submit = {
        let draft = draft.clone();
        let on_add = props.on_add.clone();
        move || {
            let value = draft.trim().to_string();
            if !value.is_empty() {
                on_add.emit(value);
                draft.set(String::new());
            }
        }
    };

    let on_add_click = {
        let submit = submit.clone();
        Callback::from(move |_: MouseEvent| submit())
    };

    let on_keydown = Callback::from(move |e: KeyboardEvent| {
        if e.key() == "Enter" {
            submit();
        }
    });

    html! {
        <EditorModal title="Related URLs" cancel_label="Close" on_cancel={props.on_close.clone()}>
            if props.urls.is_empty() {
                <p class="empty-state-hint">{"No related URLs yet."}</p>
            } else {
                <ul class="related-list">
                    {for props.urls.iter().map(|url| {
                        let target = url.clone();
                        html! {
                            <li key={url.clone()} class="related-item">
                                <a href={url.clone()} target="_blank" rel="noopener noreferrer">{url}</a>
                                <button
                                    class="icon-button"
                                    title="Remove"
                                    onclick={props.on_remove.reform(move |_: MouseEvent| target.clone())}
                                >
                                    {"✗"}
                                </button>
                            </li>
                        }
                    })}
                </ul>
            }
            <div class="related-add">
                <input
                    type="text"
                    class="related-input"
                    placeholder="https://..."
                    value={(*draft).clone()}
                    oninput={on_input}
                    onkeydown={on_keydown}
                />
                <Button onclick={on_add_click} variant={ButtonVariant::Secondary}>
                    {"Add"}
                </Button>
            </div>
        </EditorModal>
    }
}

#[derive(Properties, PartialEq)]
pub struct ArchiveEditorProps {
    /// Current archive reason, if the record is archived
    #[prop_or_default]
    pub current: Option<String>,
    pub on_archive: Callback<ArchiveReason>,
    pub on_unarchive: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(ArchiveEditor)]
pub fn archive_editor(props: &ArchiveEditorProps) -> Html {
    let current_reason = props.current.as_deref().and_then(ArchiveReason::from_label);
    let selected = use_state(move || current_reason);
    let is_archived = props.current.is_some();

    let on_commit = {
        let selected = selected.clone();
        let on_archive = props.on_archive.clone();
        Callback::from(move |_: ()| {
            if let Some(reason) = *selected {
                on_archive.emit(reason);
            }
        })
    };

    html! {
        <EditorModal
            title={if is_archived { "Archived" } else { "Archive" }}
            commit_label={if is_archived { "Update reason" } else { "Archive" }}
            on_commit={on_commit}
            on_cancel={props.on_cancel.clone()}
        >
            <div class="reason-list">
                {for ArchiveReason::ALL.into_iter().map(|reason| {
                    let onchange = {
                        let selected = selected.clone();
                        Callback::from(move |_: Event| selected.set(Some(reason)))
                    };
                    html! {
                        <label key={reason.label()} class="reason-option">
                            <input
                                type="radio"
                                name="archive-reason"
                                checked={*selected == Some(reason)}
                                onchange={onchange}
                            />
                            {reason.label()}
                        </label>
                    }
                })}
            </div>
            if is_archived {
                <Button
                    onclick={props.on_unarchive.reform(|_: MouseEvent| ())}
                    variant={ButtonVariant::Secondary}
                >
                    {"Unarchive"}
                </Button>
            }
        </EditorModal>
    }
}
