// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use vergen::EmitBuilder;

fn main() {
    // Git metadata for `tailbone version`; a source tarball builds without it.
    if let Err(e) = EmitBuilder::builder()
        .git_sha(true)
        .git_commit_date()
        .emit()
    {
        println!("cargo:warning=tailbone: no git metadata ({})", e);
    }
}
