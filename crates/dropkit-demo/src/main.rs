use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdFileText, LdTrash2, LdX};
use dropkit::{UploadState, UploadZone};
use dropkit_core::FileList;

fn main() {
    dioxus::launch(app);
}

/// MIME types the demo accepts. Wider than the widget's default so
/// image previews have something to show.
const ACCEPTED_TYPES: [&str; 5] = [
    "image/png",
    "image/jpeg",
    "image/webp",
    "text/plain",
    "application/pdf",
];

/// Demo size cap: 8 MB.
const MAX_SIZE_BYTES: u64 = 8_000_000;

/// Root application component.
///
/// Hosts the upload widget, mirrors its file list and state into
/// local signals, and drives the remove capability through per-row
/// and clear-all buttons.
#[allow(clippy::too_many_lines)]
fn app() -> Element {
    let mut files = use_signal(FileList::new);
    let mut widget_state = use_signal(|| Option::<UploadState>::None);

    let state = widget_state();
    let is_drag_over = state.as_ref().is_some_and(|s| s.is_drag_over);
    let is_loading = state.as_ref().is_some_and(|s| s.is_loading);
    // The capability is Copy, so every row button can hold it.
    let remove = state.map(|s| s.remove_file);

    let current_files = files();
    let count = current_files.len();

    rsx! {
        style { dangerous_inner_html: include_str!("../assets/demo.css") }

        div { class: "demo-shell",
            h1 { "dropkit" }
            p { class: "demo-tagline",
                "Drop images, text files, or PDFs below. Files over 8 MB are skipped."
            }

            UploadZone {
                multiple: true,
                accepted_types: ACCEPTED_TYPES.iter().map(ToString::to_string).collect(),
                max_size_bytes: MAX_SIZE_BYTES,
                on_files_change: move |list: FileList| files.set(list),
                on_state_change: move |state: UploadState| widget_state.set(Some(state)),
            }

            p {
                class: if is_drag_over { "demo-status demo-status-drag" } else { "demo-status" },
                if is_loading {
                    "Processing files..."
                } else if is_drag_over {
                    "Release to add the files"
                } else {
                    "Waiting for files"
                }
            }

            if count > 0 {
                div { class: "demo-list-header",
                    h2 { "Accepted files ({count})" }
                    if let Some(remove) = remove {
                        button {
                            class: "demo-clear",
                            onclick: move |_| remove.call(None),
                            Icon { width: 16, height: 16, icon: LdTrash2 }
                            "Clear all"
                        }
                    }
                }

                ul { class: "demo-file-list",
                    for (index, file) in current_files.into_vec().into_iter().enumerate() {
                        li { key: "{file.preview_url}", class: "demo-file-row",
                            if file.mime_type.starts_with("image/") {
                                img {
                                    class: "demo-file-thumb",
                                    src: "{file.preview_url}",
                                    alt: "{file.name}",
                                }
                            } else {
                                span { class: "demo-file-badge",
                                    Icon { width: 24, height: 24, icon: LdFileText }
                                }
                            }

                            div { class: "demo-file-info",
                                span { class: "demo-file-name", "{file.name}" }
                                span { class: "demo-file-detail",
                                    "{format_size(file.size_bytes)}"
                                }
                                span { class: "demo-file-detail", "{file.mime_type}" }
                            }

                            // Position 0 is the clear-all index, so the
                            // first row carries no remove button.
                            if index > 0 {
                                if let Some(remove) = remove {
                                    button {
                                        class: "demo-file-remove",
                                        onclick: move |_| remove.call(Some(index)),
                                        Icon { width: 16, height: 16, icon: LdX }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Human-readable size label with decimal units.
#[allow(clippy::cast_precision_loss)]
fn format_size(bytes: u64) -> String {
    const STEP: f64 = 1000.0;
    const UNITS: [&str; 4] = ["B", "kB", "MB", "GB"];

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= STEP && unit < UNITS.len() - 1 {
        value /= STEP;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::format_size;

    #[test]
    fn format_size_uses_decimal_units() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(999), "999 B");
        assert_eq!(format_size(1000), "1.0 kB");
        assert_eq!(format_size(250_000), "250.0 kB");
        assert_eq!(format_size(4_000_000), "4.0 MB");
        assert_eq!(format_size(1_500_000_000), "1.5 GB");
    }
}
