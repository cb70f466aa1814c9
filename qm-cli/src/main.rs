// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use clap::Parser;
use color_eyre::Result;
use qm_cli::QmApp;

fn main() -> Result<()> {
    color_eyre::install()?;
    let app = QmApp::parse();
    env_logger::Builder::new()
        .filter_level(app.log_level())
        .parse_default_env()
        .init();
    app.exec()
}
