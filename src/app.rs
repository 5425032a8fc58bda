#![cfg(feature = "web")]

use std::collections::HashSet;

use log::{debug, error, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlInputElement, KeyboardEvent};

use crate::config::{FilterTarget, PageConfig};
use crate::dom;
use crate::error::Result;
use crate::filter::RowFilter;
use crate::navigator::{ControlGroup, ControlId, ControlKind, Navigator};
use crate::password::InputKind;
use crate::search;

/// Module entry point: panic hook and console logging
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    crate::logging::init();
}

/// Filter the rows of `table_id` by the text in `input_id`
///
/// # Arguments
/// * `table_id` - Id of the table whose rows are shown or hidden
/// * `input_id` - Id of the text input holding the query
/// * `columns` - Zero-based column indices to search
#[wasm_bindgen(js_name = filterTable)]
pub fn filter_table(table_id: &str, input_id: &str, columns: Vec<u32>) -> std::result::Result<(), JsValue> {
    let columns: Vec<usize> = columns.into_iter().map(|c| c as usize).collect();
    run_filter(&dom::document()?, table_id, input_id, &RowFilter::new(columns))?;
    Ok(())
}

#[wasm_bindgen(js_name = filterAccessions)]
pub fn filter_accessions() -> std::result::Result<(), JsValue> {
    run_target(&FilterTarget::accessions())
}

#[wasm_bindgen(js_name = filterResources)]
pub fn filter_resources() -> std::result::Result<(), JsValue> {
    run_target(&FilterTarget::resources())
}

#[wasm_bindgen(js_name = filterResourceCols)]
pub fn filter_resource_cols() -> std::result::Result<(), JsValue> {
    run_target(&FilterTarget::resource_columns())
}

#[wasm_bindgen(js_name = filterEntries)]
pub fn filter_entries() -> std::result::Result<(), JsValue> {
    run_target(&FilterTarget::entries())
}

/// Flip a password input between masked and plain text
#[wasm_bindgen(js_name = toggleVisibility)]
pub fn toggle_visibility(field_id: &str) -> std::result::Result<(), JsValue> {
    let document = dom::document()?;
    let input: HtmlInputElement = dom::element_by_id(&document, field_id, "an <input>")?;
    let next = dom::input_kind(&input).toggled();
    dom::set_input_kind(&input, next);
    debug!("#{} now renders as {}", field_id, next.as_str());
    Ok(())
}

#[wasm_bindgen(js_name = togglePassword)]
pub fn toggle_password() -> std::result::Result<(), JsValue> {
    toggle_visibility(&PageConfig::default().password_field_id)
}

/// Attach the page's event handlers
///
/// Takes an optional JSON [`PageConfig`]; without one the medialog defaults
/// are used. Controls missing from the page are logged and skipped.
#[wasm_bindgen]
pub fn install(config_json: Option<String>) -> std::result::Result<(), JsValue> {
    let config = match config_json {
        Some(json) => PageConfig::from_json(&json)?,
        None => PageConfig::default(),
    };
    let document = dom::document()?;

    attach_controls(&document, &config.navigator(), &config.control_groups())?;

    // one keyup filter per table; the first target naming a table wins
    let mut wired: HashSet<&str> = HashSet::new();
    for target in &config.filter_targets {
        if document.get_element_by_id(&target.table_id).is_none()
            || !wired.insert(target.table_id.as_str())
        {
            continue;
        }
        if let Err(err) = attach_filter(&document, target) {
            warn!("filter {} skipped: {}", target.name, err);
        }
    }

    if let Err(err) = attach_search(&document, &config.search_input_id, &config.search_endpoint) {
        warn!("global search skipped: {}", err);
    }

    Ok(())
}

fn run_target(target: &FilterTarget) -> std::result::Result<(), JsValue> {
    run_filter(&dom::document()?, &target.table_id, &target.input_id, &target.row_filter())?;
    Ok(())
}

/// Read the query and every row fresh, then rewrite row visibility
fn run_filter(document: &Document, table_id: &str, input_id: &str, filter: &RowFilter) -> Result<()> {
    let query = dom::control_value(document, input_id)?;
    let rows = dom::table_rows(document, table_id)?;
    let decisions = filter.apply(&query, &rows);
    dom::apply_decisions(&rows, &decisions)
}

/// One `change` handler shared by every pagination control of every group
///
/// The firing control is identified from its element id, so the handler
/// needs no per-control state.
fn attach_controls(document: &Document, navigator: &Navigator, groups: &[ControlGroup]) -> Result<()> {
    let handler_document = document.clone();
    let navigator = navigator.clone();
    let handler = Closure::wrap(Box::new(move |event: Event| {
        let Some(element) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        if let Err(err) = navigate_from_control(&handler_document, &navigator, &element.id()) {
            error!("navigation from #{} failed: {}", element.id(), err);
        }
    }) as Box<dyn FnMut(Event)>);

    for group in groups {
        for kind in ControlKind::ALL {
            let id = group.element_id(kind);
            match dom::element_by_id::<EventTarget>(document, &id, "an event target") {
                Ok(target) => {
                    target.add_event_listener_with_callback("change", handler.as_ref().unchecked_ref())?
                }
                Err(err) => warn!("pagination control skipped: {}", err),
            }
        }
    }
    handler.forget();
    Ok(())
}

/// Resolve the listing URL for the control with `id` and navigate to it
fn navigate_from_control(document: &Document, navigator: &Navigator, id: &str) -> Result<()> {
    let control = ControlId::parse(id)?;
    let controls = dom::control_snapshot(document, &control.group);
    let url = navigator.on_control_change(control.kind, &controls, &dom::location_search()?);
    debug!("{} changed", control);
    dom::navigate(&url)
}

fn attach_filter(document: &Document, target: &FilterTarget) -> Result<()> {
    let input: EventTarget = dom::element_by_id(document, &target.input_id, "an event target")?;

    let document = document.clone();
    let target = target.clone();
    let filter = target.row_filter();
    let handler = Closure::wrap(Box::new(move |_event: Event| {
        if let Err(err) = run_filter(&document, &target.table_id, &target.input_id, &filter) {
            error!("filtering #{} failed: {}", target.table_id, err);
        }
    }) as Box<dyn FnMut(Event)>);

    input.add_event_listener_with_callback("keyup", handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}

fn attach_search(document: &Document, input_id: &str, endpoint: &str) -> Result<()> {
    let input: HtmlInputElement = dom::element_by_id(document, input_id, "an <input>")?;

    let endpoint = endpoint.to_string();
    let field = input.clone();
    let handler = Closure::wrap(Box::new(move |event: Event| {
        event.prevent_default();
        let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if !search::is_submit_key(key.key_code()) {
            return;
        }
        let url = search::search_url(&endpoint, &field.value());
        debug!("global search navigating to {}", url);
        if let Err(err) = dom::navigate(&url) {
            error!("global search failed: {}", err);
        }
    }) as Box<dyn FnMut(Event)>);

    input.add_event_listener_with_callback("keyup", handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}

/// Current rendering mode of a password field, for page scripts that style the toggle button
#[wasm_bindgen(js_name = isMasked)]
pub fn is_masked(field_id: &str) -> std::result::Result<bool, JsValue> {
    let document = dom::document()?;
    let input: HtmlInputElement = dom::element_by_id(&document, field_id, "an <input>")?;
    Ok(dom::input_kind(&input) == InputKind::Password)
}
