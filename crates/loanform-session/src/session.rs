//! The form session reducer.

use loanform_client::LoanApi;
use loanform_core::{
    validate_form, ApplicationForm, EligibilityResponse, Field, FormSchema, ProductCatalog,
    RateQuote, RateQuoteRequest, RuleStore, ValidationErrors,
};

use crate::error::SessionError;

/// What a call to [`FormSession::submit`] ended in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed on `invalid` fields; nothing was sent.
    Rejected { invalid: usize },
    /// An earlier submission is still awaiting its verdict; nothing was sent.
    InFlight,
    /// The evaluator returned a verdict, now held by the session.
    Evaluated,
    /// The eligibility call failed. The failure has been logged.
    Failed,
}

/// Form state for one applicant.
#[derive(Debug, Clone)]
pub struct FormSession {
    rules: RuleStore,
    catalog: ProductCatalog,
    schema: FormSchema,
    form: ApplicationForm,
    errors: ValidationErrors,
    result: Option<EligibilityResponse>,
    loading: bool,
}

impl FormSession {
    /// A session over already-loaded rules and catalog, with a blank form.
    pub fn new(rules: RuleStore, catalog: ProductCatalog) -> Self {
        let schema = FormSchema::build(&rules, &catalog);
        Self {
            rules,
            catalog,
            schema,
            form: ApplicationForm::new(),
            errors: ValidationErrors::new(),
            result: None,
            loading: false,
        }
    }

    /// Fetch the rule store, then the product catalog, and start a session.
    pub async fn load(api: &dyn LoanApi) -> Result<Self, SessionError> {
        tracing::debug!(api = api.api_name(), "loading validation rules");
        let rules = api
            .validation_rules()
            .await
            .map_err(|source| SessionError::Load {
                what: "validation rules",
                source,
            })?;

        tracing::debug!(api = api.api_name(), "loading product catalog");
        let catalog = api
            .loan_products()
            .await
            .map_err(|source| SessionError::Load {
                what: "loan products",
                source,
            })?;

        tracing::info!(
            rules = rules.len(),
            products = catalog.products.len(),
            "form session ready"
        );
        Ok(Self::new(rules, catalog))
    }

    pub fn rules(&self) -> &RuleStore {
        &self.rules
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    /// The render schema derived from rules and catalog.
    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// The current snapshot.
    pub fn form(&self) -> &ApplicationForm {
        &self.form
    }

    /// Errors from the last validation pass.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// The verdict from the last successful submission.
    pub fn result(&self) -> Option<&EligibilityResponse> {
        self.result.as_ref()
    }

    /// Whether an eligibility call is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Replace one field's value. The previous snapshot is not modified;
    /// the session swaps in a new one.
    ///
    /// Select inputs only take one of their options (or blank); anything
    /// else is refused and the form is left as it was.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) -> Result<(), SessionError> {
        let value = value.into();
        self.admit(field, &value)?;
        tracing::trace!(field = %field.path(), %value, "field edited");
        self.form = self.form.with_value(field, value);
        Ok(())
    }

    /// Replace the whole snapshot, under the same option check as [`Self::edit`].
    pub fn replace_form(&mut self, form: ApplicationForm) -> Result<(), SessionError> {
        for (field, value) in form.entries() {
            self.admit(field, value)?;
        }
        self.form = form;
        Ok(())
    }

    fn admit(&self, field: Field, value: &str) -> Result<(), SessionError> {
        if self.schema.admits(field, value) {
            Ok(())
        } else {
            Err(SessionError::NotAnOption {
                path: field.path(),
                value: value.to_string(),
            })
        }
    }

    /// Blank form, no errors, no verdict.
    pub fn reset(&mut self) {
        self.form = ApplicationForm::new();
        self.errors = ValidationErrors::new();
        self.result = None;
    }

    /// Run the validation pass on the current snapshot and store its errors.
    pub fn validate(&mut self) -> &ValidationErrors {
        self.errors = validate_form(&self.form, &self.rules);
        &self.errors
    }

    /// Validate and, if the form is clean, request an eligibility verdict.
    ///
    /// Shorthand for [`Self::begin_submit`], the eligibility call, then
    /// [`Self::complete_submit`].
    pub async fn submit(&mut self, api: &dyn LoanApi) -> SubmitOutcome {
        let form = match self.begin_submit() {
            Ok(form) => form,
            Err(outcome) => return outcome,
        };
        let response = api.check_eligibility(&form).await;
        if let Err(e) = &response {
            tracing::error!(api = api.api_name(), "eligibility check failed: {e}");
        }
        self.complete_submit(response.ok())
    }

    /// First half of a submission: clear the previous verdict and errors,
    /// validate, and if clean mark the session loading and return the
    /// snapshot to send.
    ///
    /// Returns the finished outcome instead when validation fails or a
    /// submission is already pending.
    pub fn begin_submit(&mut self) -> Result<ApplicationForm, SubmitOutcome> {
        if self.loading {
            tracing::warn!("submission ignored while another is pending");
            return Err(SubmitOutcome::InFlight);
        }

        self.result = None;
        self.errors = ValidationErrors::new();

        let errors = validate_form(&self.form, &self.rules);
        if !errors.is_empty() {
            let invalid = errors.len();
            tracing::info!(invalid, "submission blocked by validation errors");
            self.errors = errors;
            return Err(SubmitOutcome::Rejected { invalid });
        }

        self.loading = true;
        Ok(self.form.clone())
    }

    /// Second half of a submission: store the verdict, or nothing when the
    /// call failed, and clear the loading flag.
    pub fn complete_submit(&mut self, response: Option<EligibilityResponse>) -> SubmitOutcome {
        self.loading = false;
        match response {
            Some(response) => {
                tracing::info!(
                    eligible = response.eligibility_result.is_eligible,
                    risk = %response.eligibility_result.risk_category,
                    likelihood = %response.eligibility_result.approval_likelihood,
                    "eligibility verdict received"
                );
                self.result = Some(response);
                SubmitOutcome::Evaluated
            }
            None => SubmitOutcome::Failed,
        }
    }

    /// Quote a rate for the amount and term currently on the form.
    pub async fn quote(&self, api: &dyn LoanApi) -> Result<RateQuote, SessionError> {
        let request = RateQuoteRequest::from_form(&self.form)?;
        api.calculate_rates(&request)
            .await
            .map_err(SessionError::Quote)
    }
}
