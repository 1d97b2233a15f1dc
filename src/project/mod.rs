// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The project being bootstrapped, served, and deployed.
//!
//! All state lives on disk under the project root: the `tailbone` checkout,
//! `.git`, `app.yaml`, and `app/index.html`.

mod actions;
mod layout;
mod scaffold;

pub use layout::{Project, APP_DESCRIPTOR, CHECKOUT_DIR, GIT_DIR, INDEX_FILE, TEMPLATE_DESCRIPTOR};
pub use scaffold::{ScaffoldReport, INDEX_TEMPLATE};
