use std::{path::PathBuf, sync::Arc};

use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::Parser;
use client_core::{
    navigation::{gate, sign_out},
    Authenticator, HttpInvestorApi, InvestorFormModel, LoginForm, NavigationHistory, Navigator,
    SessionState, SubmissionOutcome,
};
use shared::{protocol::DraftField, routes::Route};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;

/// Signs the operator in and creates one investor record.
#[derive(Parser, Debug)]
struct Args {
    #[arg(long, default_value = "admin_console.toml")]
    config: PathBuf,
    #[arg(long)]
    api_base_url: Option<String>,
    #[arg(long)]
    username: String,
    #[arg(long)]
    password: String,
    #[arg(long)]
    full_name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    investor_username: String,
    #[arg(long)]
    investor_password: String,
    #[arg(long)]
    profile_picture: String,
    #[arg(long)]
    birthday: NaiveDate,
    #[arg(long)]
    gender: Option<String>,
    #[arg(long)]
    rank: Option<String>,
    #[arg(long = "interest")]
    interests: Vec<String>,
    #[arg(long = "custom-interest")]
    custom_interests: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let mut settings = config::load_settings(&args.config)?;
    if let Some(url) = args.api_base_url.clone() {
        settings.api_base_url = url;
    }

    let mut session = SessionState::new();
    let mut nav = NavigationHistory::new();
    nav.navigate_path("/");

    let mut login = LoginForm::with_credentials(args.username.as_str(), args.password.as_str());
    login.submit(&mut session, &mut nav).await?;
    println!("InnoVest | signed in as {}", session.identity().given_name);

    let screen = gate(Route::CreateInvestor, &session);
    nav.navigate(screen);
    info!(screen = %nav.current(), "console: showing screen");

    let api = match settings.request_timeout() {
        Some(timeout) => HttpInvestorApi::with_timeout(&settings.api_base_url, timeout)?,
        None => HttpInvestorApi::new(&settings.api_base_url)?,
    };
    let mut form = InvestorFormModel::new(Arc::new(api));
    fill_form(&mut form, &args)?;

    let missing = form.draft().missing_required_fields();
    if !missing.is_empty() {
        let labels: Vec<&str> = missing.iter().map(|field| field.label()).collect();
        bail!("please fill in required fields: {}", labels.join(", "));
    }

    let outcome = form.submit().await?;
    sign_out(&mut session, &mut nav);

    match outcome {
        SubmissionOutcome::Success(message) => {
            println!("{message}");
            Ok(())
        }
        SubmissionOutcome::Error(message) => bail!(message),
        SubmissionOutcome::None | SubmissionOutcome::Submitting => {
            bail!("investor submission did not complete")
        }
    }
}

fn fill_form(form: &mut InvestorFormModel, args: &Args) -> Result<()> {
    form.set_draft_field(DraftField::FullName, args.full_name.as_str())?;
    form.set_draft_field(DraftField::Email, args.email.as_str())?;
    form.set_draft_field(DraftField::Username, args.investor_username.as_str())?;
    form.set_draft_field(DraftField::Password, args.investor_password.as_str())?;
    form.set_draft_field(DraftField::ProfilePictureUrl, args.profile_picture.as_str())?;
    form.set_draft_field(
        DraftField::Birthday,
        args.birthday.format("%Y-%m-%d").to_string(),
    )?;
    if let Some(gender) = &args.gender {
        form.set_draft_field(DraftField::Gender, gender.as_str())?;
    }
    if let Some(rank) = &args.rank {
        form.set_draft_field(DraftField::Rank, rank.as_str())?;
    }

    form.set_interests(args.interests.iter().map(String::as_str));
    for custom in &args.custom_interests {
        form.set_custom_interest_input(custom.as_str());
        if !form.add_custom_interest_from_input() {
            info!(label = %custom, "console: custom interest already offered, nothing to add");
        }
    }
    Ok(())
}
