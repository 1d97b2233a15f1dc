// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Starter files written after the template is fetched.

use std::fs;

use super::layout::Project;

/// Contents of the generated app/index.html.
pub const INDEX_TEMPLATE: &str = "<!doctype html>
<html>
<head></head>
<body>
hello tailbone
</body>
</html>
";

/// What scaffolding did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    /// app.yaml was copied from the template.
    pub descriptor_created: bool,
    /// app/index.html was written.
    pub index_created: bool,
}

impl Project {
    /// Write the starter files that don't exist yet.
    ///
    /// Failures are logged and skipped; they never fail `init`.
    pub fn scaffold(&self) -> ScaffoldReport {
        ScaffoldReport {
            descriptor_created: self.scaffold_descriptor(),
            index_created: self.scaffold_index(),
        }
    }

    fn scaffold_descriptor(&self) -> bool {
        let template = self.template_descriptor_path();
        let target = self.descriptor_path();

        if !template.exists() {
            tracing::debug!("No descriptor template at {:?}", template);
            return false;
        }
        if target.exists() {
            tracing::debug!("{:?} already exists, leaving it alone", target);
            return false;
        }

        match fs::copy(&template, &target) {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!("Could not copy {:?} to {:?}: {}", template, target, e);
                false
            }
        }
    }

    fn scaffold_index(&self) -> bool {
        let index = self.index_path();

        if index.exists() {
            return false;
        }

        if let Some(parent) = index.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::warn!("Could not create {:?}: {}", parent, e);
                return false;
            }
        }

        match fs::write(&index, INDEX_TEMPLATE) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Could not write {:?}: {}", index, e);
                false
            }
        }
    }
}
