// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::model::{AppData, Listing, Submission};
use chrono::Utc;
use miette::{IntoDiagnostic, bail};
use std::collections::HashSet;
use std::error::Error;
use std::fmt;
use std::path::Path;
use tokio::fs::read_to_string;
use tokio::sync::RwLock;

/// Reasons the ledger refuses to record an extension request.
#[derive(Debug, Eq, PartialEq)]
pub enum LedgerError {
	ReasonRequired,
	UnknownListing(String),
}

impl fmt::Display for LedgerError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::ReasonRequired => write!(f, "Reason for filing is required"),
			Self::UnknownListing(id) => write!(f, "No claimed listing has the ID {}", id),
		}
	}
}

impl Error for LedgerError {}

/// Server-side record of claimed listings and the extension requests made for them.
#[derive(Debug)]
pub struct ExtensionLedger {
	data: RwLock<AppData>,
}

impl ExtensionLedger {
	pub fn new(claimed_listings: Vec<Listing>) -> Self {
		Self {
			data: RwLock::new(AppData {
				claimed_listings,
				submissions: Vec::new(),
			}),
		}
	}

	/// Loads claimed listings from a JSON file containing an array of listings.
	pub async fn load(listings_file: &Path) -> miette::Result<Self> {
		let contents = read_to_string(listings_file).await.into_diagnostic()?;
		let claimed_listings: Vec<Listing> = serde_json::from_str(&contents).into_diagnostic()?;

		let mut seen_ids: HashSet<&str> = HashSet::new();
		for listing in claimed_listings.iter() {
			if !seen_ids.insert(&listing.id) {
				bail!(
					"Listing ID {} appears more than once in {}",
					listing.id,
					listings_file.display()
				);
			}
		}

		Ok(Self::new(claimed_listings))
	}

	pub async fn snapshot(&self) -> AppData {
		self.data.read().await.clone()
	}

	/// Records an extension request, returning it with its assigned ID and submission time.
	pub async fn record(&self, mut submission: Submission) -> Result<Submission, LedgerError> {
		if submission.reason.is_empty() {
			return Err(LedgerError::ReasonRequired);
		}

		let mut data = self.data.write().await;
		if data.claimed_listing_by_id(&submission.listing.id).is_none() {
			return Err(LedgerError::UnknownListing(submission.listing.id));
		}

		submission.id = Some(cuid2::create_id());
		submission.submitted_at = Some(Utc::now());
		data.add_submission(submission.clone());

		tracing::info!(
			listing = %submission.listing.id,
			submission = ?submission.id,
			"Recorded extension request"
		);

		Ok(submission)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn ledger() -> ExtensionLedger {
		ExtensionLedger::new(vec![Listing {
			id: String::from("42"),
			name: String::from("Acme Storage"),
			..Default::default()
		}])
	}

	fn request(listing_id: &str, reason: &str) -> Submission {
		Submission::new(
			Listing {
				id: String::from(listing_id),
				name: String::from("Acme Storage"),
				..Default::default()
			},
			String::from(reason),
		)
	}

	#[tokio::test]
	async fn records_valid_requests() {
		let ledger = ledger();
		let first = ledger.record(request("42", "Flood delay")).await.unwrap();
		let second = ledger.record(request("42", "Staffing")).await.unwrap();

		assert!(first.id.is_some());
		assert!(first.submitted_at.is_some());
		assert_ne!(first.id, second.id);
		assert_eq!(first.reason, "Flood delay");

		let snapshot = ledger.snapshot().await;
		assert_eq!(snapshot.submissions, vec![first, second]);
		assert_eq!(snapshot.claimed_listings.len(), 1);
	}

	#[tokio::test]
	async fn rejects_empty_reason() {
		let ledger = ledger();
		let result = ledger.record(request("42", "")).await;
		assert_eq!(result, Err(LedgerError::ReasonRequired));
		assert!(ledger.snapshot().await.submissions.is_empty());
	}

	#[tokio::test]
	async fn rejects_unknown_listing() {
		let ledger = ledger();
		let result = ledger.record(request("7", "Flood delay")).await;
		assert_eq!(result, Err(LedgerError::UnknownListing(String::from("7"))));
		assert!(ledger.snapshot().await.submissions.is_empty());
	}
}
