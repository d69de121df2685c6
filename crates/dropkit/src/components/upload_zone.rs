//! Upload drop zone with drag-and-drop and a file picker.

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdUpload;
use dropkit_core::{BatchInput, BatchRun, FileList, FileMeta, UploadConfig, data_url};

use crate::preview;

/// Widget state reported to the host on every change.
#[derive(Clone)]
pub struct UploadState {
    /// Whether a drag is currently hovering over the drop zone.
    pub is_drag_over: bool,
    /// Whether a batch of files is currently being processed.
    pub is_loading: bool,
    /// Capability to remove entries from the widget's list.
    ///
    /// `Some(i)` with `i >= 1` removes the entry at position `i`;
    /// `None` or `Some(0)` clears the whole list; an out-of-range
    /// index is a no-op. Position 0 doubles as the clear index, so
    /// the first entry only leaves through a clear or a new batch.
    /// Removed entries have their preview handles revoked.
    pub remove_file: Callback<Option<usize>>,
}

/// Equality covers the observable flags. The capability is backed by
/// the widget's signals and stays valid for the widget's lifetime, so
/// it carries no comparable state of its own.
impl PartialEq for UploadState {
    fn eq(&self, other: &Self) -> bool {
        self.is_drag_over == other.is_drag_over && self.is_loading == other.is_loading
    }
}

/// Props for the [`UploadZone`] component.
#[derive(Props, Clone, PartialEq)]
pub struct UploadZoneProps {
    /// Whether the file picker allows selecting several files at once.
    ///
    /// Restricts only the picker dialog. A drop can deliver any number
    /// of files, and every file in a batch is processed either way.
    #[props(default)]
    pub multiple: bool,

    /// MIME types the widget accepts, compared case-insensitively.
    /// Defaults to plain text and PDF.
    #[props(default = UploadConfig::default().accepted_types)]
    pub accepted_types: Vec<String>,

    /// Maximum accepted file size in bytes. Defaults to 4 MB.
    #[props(default = UploadConfig::default().max_size_bytes)]
    pub max_size_bytes: u64,

    /// Called with the complete current list on every list change,
    /// including the initial empty list.
    pub on_files_change: Option<EventHandler<FileList>>,

    /// Called with a full [`UploadState`] snapshot on every list
    /// change and every state-field change.
    pub on_state_change: Option<EventHandler<UploadState>>,
}

/// A drag-and-drop zone with a file picker.
///
/// Each selection or drop event starts one batch: candidates are
/// screened against the configured MIME types and size limit, then
/// read and encoded one at a time in input order. Accepted files carry
/// the full data URL and an object-URL preview handle; rejected
/// candidates are skipped and logged, never aborting the batch. The
/// resolved batch replaces the previous list wholesale, so dropping
/// zero acceptable files clears it.
///
/// A batch superseded by a newer event abandons itself at its next
/// await point and leaves the list and flags to the newer batch.
/// Preview handles are revoked whenever an entry leaves the list and
/// when the widget unmounts.
#[component]
pub fn UploadZone(props: UploadZoneProps) -> Element {
    let mut files = use_signal(FileList::new);
    let mut is_drag_over = use_signal(|| false);
    let mut is_loading = use_signal(|| false);
    let mut generation = use_signal(|| 0u64);

    let config = UploadConfig {
        multiple: props.multiple,
        accepted_types: props.accepted_types.clone(),
        max_size_bytes: props.max_size_bytes,
    };
    let accept = config.accept_attribute();

    let remove_file = use_callback(move |index: Option<usize>| {
        let released = files.write().remove(index);
        for file in &released {
            preview::revoke_preview_url(&file.preview_url);
        }
    });

    let on_files_change = props.on_files_change;
    let on_state_change = props.on_state_change;

    // Report list changes. The state snapshot rides along so hosts
    // that only track state still observe list-driven updates.
    use_effect(move || {
        let current = files();
        if let Some(handler) = on_files_change {
            handler.call(current);
        }
        if let Some(handler) = on_state_change {
            handler.call(UploadState {
                is_drag_over: *is_drag_over.peek(),
                is_loading: *is_loading.peek(),
                remove_file,
            });
        }
    });

    // Report flag changes. Both drop-path flag writes land in the same
    // scheduler pass, so leaving the hover state and entering the
    // loading state arrive as a single snapshot.
    use_effect(move || {
        let snapshot = UploadState {
            is_drag_over: is_drag_over(),
            is_loading: is_loading(),
            remove_file,
        };
        if let Some(handler) = on_state_change {
            handler.call(snapshot);
        }
    });

    // Revoke outstanding preview handles when the widget is destroyed.
    {
        let files = files;
        use_drop(move || {
            for file in files.peek().iter() {
                preview::revoke_preview_url(&file.preview_url);
            }
        });
    }

    let change_config = config.clone();
    let handle_change = move |evt: FormEvent| {
        is_loading.set(true);
        // Increment generation so any in-flight batch from a prior
        // event knows it is stale and should abandon its work.
        generation += 1;
        let my_generation = *generation.peek();
        let config = change_config.clone();
        let incoming = evt.files();
        async move {
            run_batch(config, incoming, my_generation, files, is_loading, generation).await;
        }
    };

    let drop_config = config;
    let handle_drop = move |evt: DragEvent| {
        evt.prevent_default();
        is_drag_over.set(false);
        is_loading.set(true);
        generation += 1;
        let my_generation = *generation.peek();
        let config = drop_config.clone();
        let incoming = evt.files();
        async move {
            run_batch(config, incoming, my_generation, files, is_loading, generation).await;
        }
    };

    let zone_class = if is_drag_over() {
        "dropkit-zone dropkit-zone-active"
    } else {
        "dropkit-zone"
    };

    rsx! {
        div {
            class: "{zone_class}",
            ondragover: move |evt| {
                evt.prevent_default();
                is_drag_over.set(true);
            },
            ondragleave: move |_| {
                is_drag_over.set(false);
            },
            ondrop: handle_drop,

            Icon {
                class: "dropkit-zone-icon",
                width: 32,
                height: 32,
                icon: LdUpload,
            }

            if is_loading() {
                p { class: "dropkit-zone-status", "Processing files..." }
            } else {
                p { class: "dropkit-zone-hint", "Drag and drop files here, or" }
            }

            label {
                class: "dropkit-zone-picker",
                input {
                    r#type: "file",
                    accept: "{accept}",
                    multiple: props.multiple,
                    display: "none",
                    onchange: handle_change,
                }
                "Browse files"
            }
        }
    }
}

/// Snapshot a platform file object's metadata for screening.
fn file_meta(file: &FileData) -> FileMeta {
    FileMeta {
        name: file.name(),
        mime_type: file.content_type().unwrap_or_default(),
        size_bytes: file.size(),
    }
}

/// Process one selection-or-drop event.
///
/// Screens, reads, and encodes the candidates sequentially in input
/// order, then applies the outcome: the resolved files replace the
/// current list (displaced preview handles are revoked) and the
/// loading flag resets. A run superseded by a newer generation
/// abandons itself after its next file read, revoking the preview
/// handles it created and leaving the list and flags alone.
#[expect(clippy::future_not_send)]
async fn run_batch(
    config: UploadConfig,
    incoming: Vec<FileData>,
    my_generation: u64,
    mut files: Signal<FileList>,
    mut is_loading: Signal<bool>,
    generation: Signal<u64>,
) {
    let metas: Vec<FileMeta> = incoming.iter().map(file_meta).collect();
    let mut run = BatchRun::new(config, BatchInput::Candidates(metas));
    let mut created: Vec<String> = Vec::new();

    while let Some(candidate) = run.next_candidate() {
        // Metadata was built 1:1 from `incoming`, so the index holds.
        let Some(file) = incoming.get(candidate.index) else {
            continue;
        };

        let read = file.read_bytes().await;
        if *generation.peek() != my_generation {
            for url in &created {
                preview::revoke_preview_url(url);
            }
            tracing::debug!("discarding superseded upload batch");
            return;
        }

        match read {
            Ok(bytes) => {
                let bytes = bytes.to_vec();
                let encoded = data_url::encode(&candidate.meta.mime_type, &bytes);
                let preview_url =
                    match preview::create_preview_url(&candidate.meta.mime_type, &bytes) {
                        Ok(url) => url,
                        Err(e) => {
                            // An <img> can display the data URL directly.
                            tracing::debug!(
                                "object URL creation failed for {}: {e}",
                                candidate.meta.name,
                            );
                            encoded.clone()
                        }
                    };
                created.push(preview_url.clone());
                run.accept(candidate, preview_url, encoded);
            }
            Err(e) => {
                run.fail(candidate, e.to_string());
            }
        }
    }

    let outcome = run.finish();
    for rejection in &outcome.rejections {
        tracing::warn!("skipping {}: {}", rejection.file_name, rejection.reason);
    }

    if let Some(accepted) = outcome.files {
        let displaced = files.write().replace(accepted);
        for file in &displaced {
            preview::revoke_preview_url(&file.preview_url);
        }
    }
    is_loading.set(false);
}
