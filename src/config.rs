// © 2024 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use kdl::KdlDocument;
use miette::{IntoDiagnostic, Result, bail};
use std::path::PathBuf;
use tokio::fs::read_to_string;
use tracing::Level;

pub async fn parse_config(config_path: &str) -> Result<ConfigData> {
	let config_file_contents = read_to_string(config_path).await.into_diagnostic()?;
	parse_config_document(&config_file_contents)
}

pub fn parse_config_document(contents: &str) -> Result<ConfigData> {
	let document: KdlDocument = contents.parse()?;

	let web = required_block(&document, "web")?;
	let bind_addr = required_string(web, "web", "bind_addr")?;

	let data = required_block(&document, "data")?;
	let listings_file = PathBuf::from(required_string(data, "data", "listings_file")?);

	let log_level = match document.get_arg("log_level") {
		Some(value) => match value.as_string() {
			Some(level) => level.parse::<Level>().into_diagnostic()?,
			None => bail!("log_level must be a string"),
		},
		None => Level::INFO,
	};

	Ok(ConfigData {
		web: WebConfig { bind_addr },
		data: DataConfig { listings_file },
		log_level,
	})
}

fn required_block<'a>(document: &'a KdlDocument, name: &str) -> Result<&'a KdlDocument> {
	let Some(node) = document.get(name) else {
		bail!("Missing required config block: {}", name);
	};
	match node.children() {
		Some(children) => Ok(children),
		None => bail!("Config block {} has no entries", name),
	}
}

fn required_string(block: &KdlDocument, block_name: &str, name: &str) -> Result<String> {
	match block.get_arg(name).and_then(|value| value.as_string()) {
		Some(value) => Ok(value.to_string()),
		None => bail!("Missing required config value: {}.{}", block_name, name),
	}
}

#[derive(Debug)]
pub struct ConfigData {
	pub web: WebConfig,
	pub data: DataConfig,
	pub log_level: Level,
}

#[derive(Debug)]
pub struct WebConfig {
	/// Address and port the web server listens on, e.g. `127.0.0.1:3000`.
	pub bind_addr: String,
}

#[derive(Debug)]
pub struct DataConfig {
	/// JSON file holding the array of claimed listings.
	pub listings_file: PathBuf,
}
