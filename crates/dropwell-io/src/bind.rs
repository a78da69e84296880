//! Raw DOM binding for server-rendered pages.
//!
//! Wires a [`FileSelectionWidget`] to four existing elements: the file
//! input, the status-text element, the label that wears the visual
//! state, and the container that receives drag events.  Pages rendered
//! by Dioxus should use the `FileSelectZone` component instead.
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target).

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, DragEvent, Element, FileList, HtmlElement, HtmlInputElement};

use dropwell_widget::{FileSelectionWidget, SelectedFile, WidgetEvent};

/// Errors that can occur while binding the widget to the page.
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),

    /// The file input exists but a companion element is missing.
    #[error("missing widget element: {0}")]
    MissingElement(&'static str),
}

impl From<JsValue> for BindError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// The four element references the widget binds to.
#[derive(Clone)]
pub struct WidgetElements {
    /// The native file-picker control (`#file-input`).
    pub input: HtmlInputElement,
    /// The status-text element (`.file-info`).
    pub info: Element,
    /// The label that wears the border/background state (`.file-label`).
    pub label: HtmlElement,
    /// The container that receives drag events (`.file-upload`).
    pub drop_area: HtmlElement,
}

impl WidgetElements {
    /// Look up the widget's elements in `document`.
    ///
    /// Returns `Ok(None)` when the file input is absent -- the page
    /// simply has no widget.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::MissingElement`] when the input exists but
    /// one of its companion elements does not, and
    /// [`BindError::JsError`] if a selector query fails.
    pub fn from_document(document: &Document) -> Result<Option<Self>, BindError> {
        let Some(input) = document
            .get_element_by_id("file-input")
            .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
        else {
            return Ok(None);
        };

        let info = document
            .query_selector(".file-info")?
            .ok_or(BindError::MissingElement(".file-info"))?;
        let label = document
            .query_selector(".file-label")?
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            .ok_or(BindError::MissingElement(".file-label"))?;
        let drop_area = document
            .query_selector(".file-upload")?
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            .ok_or(BindError::MissingElement(".file-upload"))?;

        Ok(Some(Self {
            input,
            info,
            label,
            drop_area,
        }))
    }
}

/// Bind the widget to `document`, or do nothing if the page has no
/// file input.
///
/// # Errors
///
/// Returns [`BindError`] when the input exists but binding fails; an
/// absent input is not an error.
pub fn install(document: &Document) -> Result<(), BindError> {
    match WidgetElements::from_document(document)? {
        Some(elements) => bind(elements),
        None => Ok(()),
    }
}

/// Bind a fresh [`FileSelectionWidget`] to the given elements.
///
/// Registers a `change` listener on the input and the four drag-phase
/// listeners on the drop area.  The widget and its listeners live for
/// the rest of the page -- there is no teardown, so the closures are
/// deliberately leaked with [`Closure::forget`].
///
/// # Errors
///
/// Returns [`BindError::JsError`] if listener registration fails.
pub fn bind(elements: WidgetElements) -> Result<(), BindError> {
    let widget = Rc::new(RefCell::new(FileSelectionWidget::new()));
    sync(&widget.borrow(), &elements);

    register_change(&widget, &elements)?;
    register_drag(&widget, &elements, "dragenter", WidgetEvent::DragEnter)?;
    register_drag(&widget, &elements, "dragover", WidgetEvent::DragOver)?;
    register_drag(&widget, &elements, "dragleave", WidgetEvent::DragLeave)?;
    register_drop(&widget, &elements)?;

    Ok(())
}

/// Write the widget's derived rendering back into the DOM.
///
/// Style writes are best-effort: a failed `set_property` leaves the
/// previous visual state in place but never breaks event handling.
fn sync(widget: &FileSelectionWidget, elements: &WidgetElements) {
    elements.info.set_text_content(Some(&widget.info_text()));

    let style = elements.label.style();
    let zone = widget.zone_style();
    let _ = style.set_property("border-color", zone.border_color());
    let _ = style.set_property("background-color", zone.background());
}

/// Listen for `change` on the file input (native picker path).
fn register_change(
    widget: &Rc<RefCell<FileSelectionWidget>>,
    elements: &WidgetElements,
) -> Result<(), BindError> {
    let target = elements.input.clone();
    let widget = Rc::clone(widget);
    let elements = elements.clone();

    let closure = Closure::<dyn FnMut()>::new(move || {
        let selected = files_from(elements.input.files().as_ref()).into_iter().next();
        let mut widget = widget.borrow_mut();
        widget.apply(WidgetEvent::Select(selected));
        sync(&widget, &elements);
    });
    target.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())?;
    // Page-lifetime singleton: the listener is never removed.
    closure.forget();
    Ok(())
}

/// Listen for one of the non-drop drag phases on the drop area.
fn register_drag(
    widget: &Rc<RefCell<FileSelectionWidget>>,
    elements: &WidgetElements,
    name: &str,
    event: WidgetEvent,
) -> Result<(), BindError> {
    let widget = Rc::clone(widget);
    let target = elements.drop_area.clone();
    let elements = elements.clone();

    let closure = Closure::<dyn FnMut(DragEvent)>::new(move |evt: DragEvent| {
        suppress(&evt);
        let mut widget = widget.borrow_mut();
        widget.apply(event.clone());
        sync(&widget, &elements);
    });
    target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Listen for `drop` on the drop area.
///
/// Assigns the dropped `FileList` to the input so the picker control
/// and the widget agree on the current file, then dispatches
/// [`WidgetEvent::Drop`] with the payload.
fn register_drop(
    widget: &Rc<RefCell<FileSelectionWidget>>,
    elements: &WidgetElements,
) -> Result<(), BindError> {
    let widget = Rc::clone(widget);
    let target = elements.drop_area.clone();
    let elements = elements.clone();

    let closure = Closure::<dyn FnMut(DragEvent)>::new(move |evt: DragEvent| {
        suppress(&evt);

        let transfer = evt.data_transfer();
        let file_list = transfer.as_ref().and_then(web_sys::DataTransfer::files);
        let files = files_from(file_list.as_ref());

        if !files.is_empty() {
            elements.input.set_files(file_list.as_ref());
        }

        let mut widget = widget.borrow_mut();
        widget.apply(WidgetEvent::Drop(files));
        sync(&widget, &elements);
    });
    target.add_event_listener_with_callback("drop", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Suppress the browser's default drag behavior (opening the file) and
/// stop the event from propagating.  Applied to all four drag phases.
fn suppress(event: &DragEvent) {
    event.prevent_default();
    event.stop_propagation();
}

/// Snapshot a `FileList` into owned [`SelectedFile`] records.
fn files_from(list: Option<&FileList>) -> Vec<SelectedFile> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.item(index))
        .map(|file| {
            // File.size is a non-negative integer delivered as f64.
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let size = file.size() as u64;
            SelectedFile::new(file.name(), size)
        })
        .collect()
}
