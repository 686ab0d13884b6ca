//! Command dispatch.

use std::sync::Arc;
use std::time::Duration;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Password};

use super::{output, render, Cli, Commands, LoginArgs, PlaceArgs, SignupArgs, TerminalReporter};
use crate::auth::{LoginForm, SignupForm};
use crate::client::AppContext;
use crate::config::Config;
use crate::domain::order::{OrderField, OrderId};
use crate::error::SdkError;
use crate::http::ApiHttp;
use crate::session::file::FileSession;
use crate::view::{self, LoginView, OrderBookView, Page, Route, SignupView, ViewState};

/// Run one command against the configured backend.
pub async fn run(cli: Cli, config: Config) -> Result<(), SdkError> {
    let ctx = build_context(&config)?;
    dispatch(&ctx, cli.command).await
}

/// Wire the HTTP backend, the session file and the terminal reporter.
pub fn build_context(config: &Config) -> Result<AppContext, SdkError> {
    let http = ApiHttp::with_timeout(
        &config.server_url,
        &config.signup_url,
        Duration::from_secs(config.http.timeout_secs),
    )?
    .with_read_retries(config.http.max_retries);
    let session = FileSession::new(config.session_path()?);
    tracing::debug!(
        server_url = %config.server_url,
        session = %session.path().display(),
        "Context ready"
    );

    AppContext::builder()
        .backend(Arc::new(http))
        .session(Arc::new(session))
        .reporter(Arc::new(TerminalReporter))
        .build()
}

pub async fn dispatch(ctx: &AppContext, command: Commands) -> Result<(), SdkError> {
    match command {
        Commands::Open { path } => open(ctx, &path).await,
        Commands::Signup(args) => signup(SignupView::new(ctx.clone()), args).await,
        Commands::Login(args) => login(LoginView::new(ctx.clone()), args).await,
        Commands::Orders => {
            let view = dashboard(ctx).await?;
            println!("{}", render::orders_table(view.book()));
            Ok(())
        }
        Commands::Place(args) => place(ctx, args).await,
        Commands::Execute { id } => execute(ctx, &id).await,
        Commands::Logout => {
            let next = OrderBookView::new(ctx.clone()).logout().await;
            output::success("Logged out");
            output::note(&format!("Next: {next}"));
            Ok(())
        }
    }
}

async fn open(ctx: &AppContext, path: &str) -> Result<(), SdkError> {
    match view::open(ctx, path).await? {
        Page::Login(view) => login(view, LoginArgs::default()).await,
        Page::Signup(view) => signup(view, SignupArgs::default()).await,
        Page::Dashboard(view) => {
            output::header(Route::Dashboard.path());
            println!("{}", render::orders_table(view.book()));
            Ok(())
        }
    }
}

async fn login(mut view: LoginView, args: LoginArgs) -> Result<(), SdkError> {
    let theme = ColorfulTheme::default();
    let email = match args.email {
        Some(email) => email,
        None => Input::<String>::with_theme(&theme).with_prompt("Email").interact_text()?,
    };
    let password = match args.password {
        Some(password) => password,
        None => Password::with_theme(&theme)
            .with_prompt("Password")
            .interact()?,
    };
    view.form = LoginForm::new(email, password);

    match view.submit().await {
        Some(next) => {
            output::success("Logged in");
            output::note(&format!("Next: {next}"));
            Ok(())
        }
        None => Err(rejected(view.error(), "Login failed")),
    }
}

async fn signup(mut view: SignupView, args: SignupArgs) -> Result<(), SdkError> {
    let theme = ColorfulTheme::default();
    let name = match args.name {
        Some(name) => name,
        None => Input::<String>::with_theme(&theme).with_prompt("Name").interact_text()?,
    };
    let email = match args.email {
        Some(email) => email,
        None => Input::<String>::with_theme(&theme).with_prompt("Email").interact_text()?,
    };
    let password = match args.password {
        Some(password) => password,
        None => Password::with_theme(&theme)
            .with_prompt("Password")
            .interact()?,
    };
    let confirm_password = match args.confirm {
        Some(confirm) => confirm,
        None => Password::with_theme(&theme)
            .with_prompt("Confirm password")
            .interact()?,
    };
    view.form = SignupForm {
        name,
        email,
        password,
        confirm_password,
    };

    match view.submit().await {
        Some(next) => {
            output::note(&format!("Next: {next}"));
            Ok(())
        }
        None => Err(rejected(view.error(), "Signup failed")),
    }
}

/// Mount the order book, failing when the gate sends us away.
async fn dashboard(ctx: &AppContext) -> Result<OrderBookView, SdkError> {
    let mut view = OrderBookView::new(ctx.clone()).with_loading_hook(output::loading);
    if let Some(next) = view.mount().await {
        return Err(SdkError::Other(format!(
            "Not logged in (redirected to {next}); run `tradeboard login`"
        )));
    }
    if let ViewState::Failed(message) = view.state() {
        return Err(SdkError::Other(message.clone()));
    }
    Ok(view)
}

async fn place(ctx: &AppContext, args: PlaceArgs) -> Result<(), SdkError> {
    let mut view = dashboard(ctx).await?;
    view.toggle_form();
    view.set_field(OrderField::Type, args.order_type);
    view.set_field(OrderField::Quantity, args.quantity);
    view.set_field(OrderField::Price, args.price);

    if view.place_order().await {
        output::success("Order placed");
        println!("{}", render::orders_table(view.book()));
        return Ok(());
    }

    let errors: Vec<String> = OrderField::ALL
        .into_iter()
        .filter_map(|field| {
            view.form
                .error(field)
                .map(|e| format!("{}: {e}", field.name()))
        })
        .collect();
    if errors.is_empty() {
        Err(SdkError::Other("Order was not placed".into()))
    } else {
        Err(SdkError::Validation(errors.join("; ")))
    }
}

async fn execute(ctx: &AppContext, id: &str) -> Result<(), SdkError> {
    let mut view = dashboard(ctx).await?;
    let id = OrderId::new(id);
    if !view.execute(&id).await {
        return Err(SdkError::Other(format!("Order {id} was not executed")));
    }
    output::success(&format!("Order {id} executed"));
    println!("{}", render::orders_table(view.book()));
    Ok(())
}

fn rejected(inline: Option<&str>, fallback: &str) -> SdkError {
    match inline {
        Some(message) => SdkError::Validation(message.to_string()),
        None => SdkError::Other(fallback.to_string()),
    }
}
