// © 2024 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use listing_extensions::config::parse_config;
use listing_extensions::ledger::ExtensionLedger;
use listing_extensions::web::server::run_server;
use std::env;
use std::sync::Arc;

#[tokio::main]
async fn main() -> miette::Result<()> {
	let config_path = env::args().nth(1).unwrap_or_else(|| String::from("config.kdl"));
	let config = parse_config(&config_path).await?;

	tracing_subscriber::fmt().with_max_level(config.log_level).init();

	let ledger = ExtensionLedger::load(&config.data.listings_file).await?;
	tracing::info!(
		listings_file = %config.data.listings_file.display(),
		"Loaded claimed listings"
	);

	run_server(Arc::new(config), Arc::new(ledger)).await
}
