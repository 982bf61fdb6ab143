//! Teacher registration - Entry point.
//!
//! Usage: `teacher-registration <request.json>`
//!
//! The request file carries the registration details handed over by the SSO
//! sign-in, the UDISE code to link, the remaining form values and the
//! declaration decision.

use anyhow::{bail, Context};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;
use teacher_registration::{
    navigation::LogNavigator, notify::LogNotifier, Collaborators, Config, FormField,
    NavigationState, RegistrationDetails, RegistrationFlow, SubmitOutcome, VerificationState,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use ulp_client::UlpClient;

#[derive(Debug, Deserialize)]
struct RegistrationRequest {
    #[serde(default)]
    registration_details: Option<RegistrationDetails>,
    udise: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    aadhar_id: String,
    joining_date: String,
    #[serde(default)]
    consent: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Initialize logging
    init_logging(&config.log.level);

    let path = std::env::args()
        .nth(1)
        .context("Usage: teacher-registration <request.json>")?;
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read request file {}", path))?;
    let request: RegistrationRequest =
        serde_json::from_str(&raw).context("Failed to parse registration request")?;

    info!("Starting teacher registration");

    let mut client = UlpClient::new(&config.ulp.base_url, config.ulp.timeout)
        .context("Failed to create ULP client")?;
    if let Some(token) = config.ulp.auth_token.clone() {
        client = client.with_auth_token(token);
    }
    info!("ULP endpoint: {}", client.base_url());

    let collaborators = Collaborators {
        backend: Arc::new(client),
        navigator: Arc::new(LogNavigator),
        notifier: Arc::new(LogNotifier),
    };

    let state = NavigationState::new(request.registration_details, false);
    let mut flow = RegistrationFlow::new(
        state,
        config.registration.clone(),
        collaborators,
        Utc::now().date_naive(),
    )?;
    flow.on_view_ready();

    match flow.verify_udise(&request.udise).await {
        VerificationState::Yes => {
            flow.link_udise();
        }
        state => bail!("UDISE {} could not be verified ({:?})", request.udise, state),
    }

    if let Some(name) = request.name {
        flow.set_field(FormField::Name, name);
    }
    if let Some(phone) = request.phone {
        flow.set_field(FormField::Phone, phone);
    }
    flow.set_field(FormField::AadharId, request.aadhar_id);
    flow.set_field(FormField::JoiningDate, request.joining_date);

    let outcome = match flow.submit().await {
        SubmitOutcome::ConsentRequested => flow.submit_declaration(request.consent).await,
        other => other,
    };

    match outcome {
        SubmitOutcome::Registered => {
            info!("Registration complete");
            Ok(())
        }
        SubmitOutcome::Invalid(fields) => bail!("Invalid form fields: {:?}", fields),
        SubmitOutcome::Failed(e) => Err(e).context("Registration failed"),
        other => bail!("Registration not submitted: {:?}", other),
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
