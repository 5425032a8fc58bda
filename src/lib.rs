/*!
# Medialog page scripts

Browser-side behaviour for the medialog listing pages, written in Rust and
compiled to WebAssembly.

## Overview

The pages are rendered by the server; this crate only reacts to user input
on them:

- **Row filtering** - typing in the filter box shows or hides table rows
  whose target columns contain the text (case-insensitive).
- **Pagination controls** - changing a `limit`, `page` or `filter` control
  navigates to `/entries` with the merged listing state.
- **Global search** - pressing Enter in the search box navigates to
  `/search?query=...`.
- **Password toggle** - flips a password field between masked and plain text.

## Architecture

The decisions are pure functions over plain values so they can be tested
without a browser:

- **filter**: `RowFilter` over any `CellSource` (in-memory rows or `<tr>` elements)
- **query**: `QueryParams`, a `URLSearchParams`-style reader for `location.search`
- **navigator**: `Navigator` resolving the next `/entries` URL from a control change
- **search**: Enter detection and the encoded search URL
- **password**: `InputKind` toggle
- **config**: `PageConfig`, the per-page wiring (table ids, columns, control groups)

With the `web` feature, **dom** adapts these to the live document and **app**
attaches the event handlers and exports them to JavaScript.

## Usage

```html
<script type="module">
  import init, { install } from "./pkg/medialog_ui.js";
  await init();
  install();
</script>
```
*/

pub mod app;
pub mod config;
pub mod dom;
pub mod error;
pub mod filter;
pub mod logging;
pub mod navigator;
pub mod password;
pub mod query;
pub mod search;

/// Re-export the core types so pages and tests can use them directly
pub use config::*;
pub use error::*;
pub use filter::*;
pub use navigator::*;
pub use password::*;
pub use query::*;
pub use search::*;
