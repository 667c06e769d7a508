// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::model::{Address, AppData, AppDataStoreFields, Listing, Submission};
use leptos::logging::{error, log};
use leptos::prelude::*;
use reactive_stores::Store;
use std::future::Future;

pub const SUBMISSIONS_PATH: &str = "/submissions";
pub const REASON_REQUIRED_MESSAGE: &str = "Reason for filing is required";

/// Read and write access to the application's shared state.
pub trait SharedState {
	/// Looks up a claimed listing by its ID.
	fn claimed_listing(&self, id: &str) -> Option<Listing>;

	/// Records a submission acknowledged by the server.
	fn add_submission(&self, submission: Submission);
}

impl SharedState for Store<AppData> {
	fn claimed_listing(&self, id: &str) -> Option<Listing> {
		self.with_untracked(|data| data.claimed_listing_by_id(id).cloned())
	}

	fn add_submission(&self, submission: Submission) {
		self.submissions().update(|submissions| submissions.push(submission));
	}
}

/// Somewhere extension requests can be sent.
pub trait ExtensionBackend {
	/// Sends the submission and resolves to the representation the backend recorded.
	fn request_extension(&self, submission: Submission) -> impl Future<Output = Result<Submission, ServerFnError>>;
}

pub trait Navigator {
	fn navigate(&self, path: &str);
}

impl<F: Fn(&str)> Navigator for F {
	fn navigate(&self, path: &str) {
		self(path)
	}
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AddressKind {
	Mailing,
	Physical,
}

impl AddressKind {
	pub const ALL: [AddressKind; 2] = [AddressKind::Mailing, AddressKind::Physical];

	fn key(self) -> &'static str {
		match self {
			Self::Mailing => "mailingAddress",
			Self::Physical => "physicalAddress",
		}
	}

	pub fn heading(self) -> &'static str {
		match self {
			Self::Mailing => "Mailing Address",
			Self::Physical => "Physical Address",
		}
	}

	fn address(self, listing: &Listing) -> &Address {
		match self {
			Self::Mailing => &listing.mailing_address,
			Self::Physical => &listing.physical_address,
		}
	}

	fn address_mut(self, listing: &mut Listing) -> &mut Address {
		match self {
			Self::Mailing => &mut listing.mailing_address,
			Self::Physical => &mut listing.physical_address,
		}
	}
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AddressPart {
	Address1,
	Address2,
	City,
	State,
	Zip,
}

impl AddressPart {
	pub const ALL: [AddressPart; 5] = [
		AddressPart::Address1,
		AddressPart::Address2,
		AddressPart::City,
		AddressPart::State,
		AddressPart::Zip,
	];

	fn key(self) -> &'static str {
		match self {
			Self::Address1 => "address1",
			Self::Address2 => "address2",
			Self::City => "city",
			Self::State => "state",
			Self::Zip => "zip",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			Self::Address1 => "Address 1",
			Self::Address2 => "Address 2",
			Self::City => "City",
			Self::State => "State",
			Self::Zip => "Zip",
		}
	}

	fn slot(self, address: &Address) -> &Option<String> {
		match self {
			Self::Address1 => &address.address1,
			Self::Address2 => &address.address2,
			Self::City => &address.city,
			Self::State => &address.state,
			Self::Zip => &address.zip,
		}
	}

	fn slot_mut(self, address: &mut Address) -> &mut Option<String> {
		match self {
			Self::Address1 => &mut address.address1,
			Self::Address2 => &mut address.address2,
			Self::City => &mut address.city,
			Self::State => &mut address.state,
			Self::Zip => &mut address.zip,
		}
	}
}

/// A path to one editable value of the extension form.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormField {
	Name,
	Address(AddressKind, AddressPart),
	Reason,
}

impl FormField {
	/// The dotted path for this field, used as the input's ID and name.
	pub fn path(self) -> String {
		match self {
			Self::Name => String::from("listing.name"),
			Self::Address(kind, part) => format!("listing.{}.{}", kind.key(), part.key()),
			Self::Reason => String::from("reason"),
		}
	}

	/// Gets the current value at this path. Missing values read as an empty string.
	pub fn get(self, form: &ExtensionForm) -> &str {
		match self {
			Self::Name => &form.listing.name,
			Self::Address(kind, part) => part.slot(kind.address(&form.listing)).as_deref().unwrap_or_default(),
			Self::Reason => &form.reason,
		}
	}

	pub fn set(self, form: &mut ExtensionForm, value: String) {
		match self {
			Self::Name => form.listing.name = value,
			Self::Address(kind, part) => *part.slot_mut(kind.address_mut(&mut form.listing)) = Some(value),
			Self::Reason => form.reason = value,
		}
	}
}

/// The values being edited on the extension request page.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtensionForm {
	pub listing: Listing,
	pub reason: String,
}

impl ExtensionForm {
	pub fn new(listing: Listing) -> Self {
		Self {
			listing,
			reason: String::new(),
		}
	}

	pub fn to_submission(&self) -> Submission {
		Submission::new(self.listing.clone(), self.reason.clone())
	}
}

#[derive(Clone, Debug, PartialEq)]
pub enum ListingViewState {
	NotFound,
	Editing(ExtensionForm),
}

impl ListingViewState {
	pub fn load(state: &impl SharedState, listing_id: Option<&str>) -> Self {
		match listing_id.and_then(|id| state.claimed_listing(id)) {
			Some(listing) => Self::Editing(ExtensionForm::new(listing)),
			None => Self::NotFound,
		}
	}
}

#[derive(Debug)]
pub enum SubmitOutcome {
	/// The reason was left empty; nothing was sent.
	ReasonRequired,
	/// The backend accepted the request and the user has been sent to the submissions list.
	Submitted(Submission),
	/// The backend rejected the request. The error has already been logged.
	Failed(ServerFnError),
}

/// Sends an extension request built from the form's current values.
///
/// On success the acknowledged submission is added to the shared state and the user is navigated to the submission
/// list. Failures are logged and otherwise leave everything as it was.
pub async fn submit_extension_request<B, S, N>(
	form: &ExtensionForm,
	backend: &B,
	state: &S,
	navigator: &N,
) -> SubmitOutcome
where
	B: ExtensionBackend,
	S: SharedState,
	N: Navigator,
{
	let submission = form.to_submission();
	if submission.reason.is_empty() {
		return SubmitOutcome::ReasonRequired;
	}

	match backend.request_extension(submission).await {
		Ok(response) => {
			log!("Extension request submitted: {:?}", response);
			state.add_submission(response.clone());
			navigator.navigate(SUBMISSIONS_PATH);
			SubmitOutcome::Submitted(response)
		}
		Err(request_error) => {
			error!("Error submitting extension request: {}", request_error);
			SubmitOutcome::Failed(request_error)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::cell::RefCell;

	impl SharedState for RefCell<AppData> {
		fn claimed_listing(&self, id: &str) -> Option<Listing> {
			self.borrow().claimed_listing_by_id(id).cloned()
		}

		fn add_submission(&self, submission: Submission) {
			self.borrow_mut().add_submission(submission);
		}
	}

	struct RecordingBackend {
		calls: RefCell<Vec<Submission>>,
		response: Result<Submission, ServerFnError>,
	}

	impl RecordingBackend {
		fn new(response: Result<Submission, ServerFnError>) -> Self {
			Self {
				calls: RefCell::new(Vec::new()),
				response,
			}
		}
	}

	impl ExtensionBackend for RecordingBackend {
		fn request_extension(&self, submission: Submission) -> impl Future<Output = Result<Submission, ServerFnError>> {
			self.calls.borrow_mut().push(submission);
			let response = self.response.clone();
			async move { response }
		}
	}

	fn acme_storage() -> Listing {
		Listing {
			id: String::from("42"),
			name: String::from("Acme Storage"),
			mailing_address: Address {
				address1: Some(String::from("1 Main St")),
				address2: None,
				city: Some(String::from("Springfield")),
				state: Some(String::from("IL")),
				zip: Some(String::from("62701")),
			},
			physical_address: Address {
				address1: Some(String::from("9 Depot Rd")),
				city: Some(String::from("Springfield")),
				state: Some(String::from("IL")),
				zip: Some(String::from("62702")),
				..Default::default()
			},
		}
	}

	fn shared_state() -> RefCell<AppData> {
		RefCell::new(AppData {
			claimed_listings: vec![acme_storage()],
			submissions: Vec::new(),
		})
	}

	fn acknowledged(submission: Submission) -> Submission {
		Submission {
			id: Some(String::from("sub-1")),
			..submission
		}
	}

	#[test]
	fn unknown_ids_load_as_not_found() {
		let state = shared_state();
		assert_eq!(ListingViewState::load(&state, Some("7")), ListingViewState::NotFound);
		assert_eq!(ListingViewState::load(&state, None), ListingViewState::NotFound);
	}

	#[test]
	fn known_id_seeds_form_from_listing() {
		let state = shared_state();
		let ListingViewState::Editing(form) = ListingViewState::load(&state, Some("42")) else {
			panic!("listing 42 should load");
		};
		assert_eq!(form.listing, acme_storage());
		assert_eq!(FormField::Name.get(&form), "Acme Storage");
		assert_eq!(
			FormField::Address(AddressKind::Mailing, AddressPart::City).get(&form),
			"Springfield"
		);
		assert_eq!(FormField::Reason.get(&form), "");
	}

	#[test]
	fn missing_address_parts_read_as_empty() {
		let form = ExtensionForm::new(acme_storage());
		assert_eq!(
			FormField::Address(AddressKind::Mailing, AddressPart::Address2).get(&form),
			""
		);
	}

	#[test]
	fn set_writes_to_exact_path() {
		let mut form = ExtensionForm::new(acme_storage());
		FormField::Address(AddressKind::Physical, AddressPart::Zip).set(&mut form, String::from("62799"));
		FormField::Reason.set(&mut form, String::from("Flood delay"));

		assert_eq!(form.listing.physical_address.zip.as_deref(), Some("62799"));
		assert_eq!(form.listing.mailing_address.zip.as_deref(), Some("62701"));
		assert_eq!(form.reason, "Flood delay");
	}

	#[test]
	fn field_paths_are_dotted() {
		assert_eq!(FormField::Name.path(), "listing.name");
		assert_eq!(
			FormField::Address(AddressKind::Mailing, AddressPart::Address1).path(),
			"listing.mailingAddress.address1"
		);
		assert_eq!(
			FormField::Address(AddressKind::Physical, AddressPart::Zip).path(),
			"listing.physicalAddress.zip"
		);
		assert_eq!(FormField::Reason.path(), "reason");
	}

	#[tokio::test]
	async fn empty_reason_never_reaches_backend() {
		let state = shared_state();
		let backend = RecordingBackend::new(Ok(acknowledged(Submission::new(acme_storage(), String::new()))));
		let navigated = RefCell::new(Vec::<String>::new());
		let navigator = |path: &str| navigated.borrow_mut().push(path.to_owned());

		let form = ExtensionForm::new(acme_storage());
		let outcome = submit_extension_request(&form, &backend, &state, &navigator).await;

		assert!(matches!(outcome, SubmitOutcome::ReasonRequired));
		assert!(backend.calls.borrow().is_empty());
		assert!(state.borrow().submissions.is_empty());
		assert!(navigated.borrow().is_empty());
	}

	#[tokio::test]
	async fn successful_request_records_response_and_navigates() {
		let state = shared_state();
		let mut form = ExtensionForm::new(acme_storage());
		FormField::Name.set(&mut form, String::from("Acme Storage LLC"));
		FormField::Reason.set(&mut form, String::from("Flood delay"));

		let response = acknowledged(form.to_submission());
		let backend = RecordingBackend::new(Ok(response.clone()));
		let navigated = RefCell::new(Vec::<String>::new());
		let navigator = |path: &str| navigated.borrow_mut().push(path.to_owned());

		let outcome = submit_extension_request(&form, &backend, &state, &navigator).await;

		assert!(matches!(outcome, SubmitOutcome::Submitted(ref submission) if *submission == response));
		let calls = backend.calls.borrow();
		assert_eq!(calls.len(), 1);
		assert_eq!(calls[0].listing, form.listing);
		assert_eq!(calls[0].listing.name, "Acme Storage LLC");
		assert_eq!(calls[0].reason, "Flood delay");
		assert_eq!(state.borrow().submissions, vec![response]);
		assert_eq!(*navigated.borrow(), vec![String::from(SUBMISSIONS_PATH)]);
	}

	#[tokio::test]
	async fn failed_request_leaves_state_alone() {
		let state = shared_state();
		let mut form = ExtensionForm::new(acme_storage());
		FormField::Reason.set(&mut form, String::from("Flood delay"));

		let backend = RecordingBackend::new(Err(ServerFnError::ServerError(String::from("unavailable"))));
		let navigated = RefCell::new(Vec::<String>::new());
		let navigator = |path: &str| navigated.borrow_mut().push(path.to_owned());

		let outcome = submit_extension_request(&form, &backend, &state, &navigator).await;

		assert!(matches!(outcome, SubmitOutcome::Failed(_)));
		assert_eq!(backend.calls.borrow().len(), 1);
		assert!(state.borrow().submissions.is_empty());
		assert!(navigated.borrow().is_empty());
		assert_eq!(form.reason, "Flood delay");
	}
}
