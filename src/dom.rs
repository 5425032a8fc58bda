#![cfg(feature = "web")]
//! Thin adapter between the pure page logic and the live document.
//!
//! Everything here is a direct read or write of the DOM; the decisions are
//! made by [`crate::filter`], [`crate::navigator`], [`crate::search`] and
//! [`crate::password`].

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTableRowElement,
    Window,
};

use crate::error::{Result, UiError};
use crate::filter::{CellSource, RowDecision};
use crate::navigator::{ControlGroup, ControlKind, ControlSnapshot};
use crate::password::InputKind;

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(UiError::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(UiError::NoDocument)
}

/// Look up an element by id and cast it to the expected interface
///
/// # Arguments
/// * `document` - Document to search
/// * `id` - Element id, without `#`
/// * `expected` - Description used in the error when the cast fails
///
/// # Returns
/// * `Result<T>` - The element, `ElementNotFound` or `UnexpectedElement`
pub fn element_by_id<T: JsCast>(document: &Document, id: &str, expected: &'static str) -> Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| UiError::ElementNotFound(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| UiError::UnexpectedElement {
            id: id.to_string(),
            expected,
        })
}

/// Current value of a text input or a `<select>`
pub fn control_value(document: &Document, id: &str) -> Result<String> {
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| UiError::ElementNotFound(id.to_string()))?;

    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Ok(input.value());
    }
    if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        return Ok(select.value());
    }
    Err(UiError::UnexpectedElement {
        id: id.to_string(),
        expected: "an <input> or <select>",
    })
}

/// Read the three controls of a group; a missing control reads as blank
pub fn control_snapshot(document: &Document, group: &ControlGroup) -> ControlSnapshot {
    let read = |kind: ControlKind| {
        let id = group.element_id(kind);
        control_value(document, &id).unwrap_or_else(|err| {
            log::warn!("reading #{}: {}", id, err);
            String::new()
        })
    };

    ControlSnapshot {
        page: read(ControlKind::Page),
        limit: read(ControlKind::Limit),
        filter: read(ControlKind::Filter),
    }
}

/// All `<tr>` elements under the table, in document order
pub fn table_rows(document: &Document, table_id: &str) -> Result<Vec<HtmlTableRowElement>> {
    let table: Element = element_by_id(document, table_id, "an element")?;
    let collection = table.get_elements_by_tag_name("tr");

    Ok((0..collection.length())
        .filter_map(|i| collection.item(i))
        .filter_map(|el| el.dyn_into::<HtmlTableRowElement>().ok())
        .collect())
}

impl CellSource for HtmlTableRowElement {
    /// Text of the `index`-th `<td>` of the row; `<th>` cells are not counted
    fn cell_text(&self, index: usize) -> Option<String> {
        let cell = self.get_elements_by_tag_name("td").item(index as u32)?;
        let text = cell.text_content().unwrap_or_default();
        if !text.is_empty() {
            return Some(text);
        }
        Some(
            cell.dyn_ref::<HtmlElement>()
                .map(|el| el.inner_text())
                .unwrap_or_default(),
        )
    }
}

pub fn row_visible(row: &HtmlTableRowElement) -> bool {
    row.style()
        .get_property_value("display")
        .map(|display| display != "none")
        .unwrap_or(true)
}

/// Show (`display: ""`) or hide (`display: none`) a row
pub fn set_row_visible(row: &HtmlTableRowElement, visible: bool) -> Result<()> {
    row.style()
        .set_property("display", if visible { "" } else { "none" })?;
    Ok(())
}

/// Write filter decisions back; untouched rows keep their current display
pub fn apply_decisions(rows: &[HtmlTableRowElement], decisions: &[RowDecision]) -> Result<()> {
    for (row, decision) in rows.iter().zip(decisions) {
        match decision {
            RowDecision::Show => set_row_visible(row, true)?,
            RowDecision::Hide => set_row_visible(row, false)?,
            RowDecision::Untouched => {}
        }
    }
    Ok(())
}

pub fn input_kind(input: &HtmlInputElement) -> InputKind {
    InputKind::from_type_attr(&input.type_())
}

pub fn set_input_kind(input: &HtmlInputElement, kind: InputKind) {
    input.set_type(kind.as_str());
}

/// `location.search` of the current page, `""` when there is none
pub fn location_search() -> Result<String> {
    Ok(window()?.location().search()?)
}

/// Full navigation to `url`
pub fn navigate(url: &str) -> Result<()> {
    window()?.location().set_href(url)?;
    Ok(())
}
