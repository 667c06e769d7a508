// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::{DateTime, Utc};
use reactive_stores::Store;
use serde::{Deserialize, Serialize};

/// A postal address attached to a listing. Any part may be missing from the source data.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Address {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub address1: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub address2: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub city: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub state: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub zip: Option<String>,
}

/// A business listing that has been claimed and can have extensions requested for it.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
	pub id: String,
	pub name: String,
	#[serde(default)]
	pub mailing_address: Address,
	#[serde(default)]
	pub physical_address: Address,
}

/// An extension request for a listing.
///
/// Fresh submissions built from the extension form have no `id` or `submitted_at`; both are filled in once the
/// server has recorded the request.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	pub listing: Listing,
	pub reason: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub submitted_at: Option<DateTime<Utc>>,
}

impl Submission {
	pub fn new(listing: Listing, reason: String) -> Self {
		Self {
			id: None,
			listing,
			reason,
			submitted_at: None,
		}
	}
}

/// Application-wide state shared by every page.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, Store)]
#[serde(rename_all = "camelCase")]
pub struct AppData {
	pub claimed_listings: Vec<Listing>,
	pub submissions: Vec<Submission>,
}

impl AppData {
	pub fn claimed_listing_by_id(&self, id: &str) -> Option<&Listing> {
		self.claimed_listings.iter().find(|listing| listing.id == id)
	}

	pub fn add_submission(&mut self, submission: Submission) {
		self.submissions.push(submission);
	}
}
