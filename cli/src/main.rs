mod output;
mod session_file;
mod transport;

use std::io;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use roster::{
    ApiError, CallError, DeleteFlow, DeleteReport, EmployeeForm, EmployeeId, FormError, Gateway, Listing,
    LoginForm, PositionId, RegisterForm,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::session_file::FileTokenStore;
use crate::transport::ReqwestTransport;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("not signed in; run `staffdesk login` first")]
    NotSignedIn,
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Form(#[from] FormError),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("health check failed with status {0}")]
    Unhealthy(u16),
    #[error("page {page} is out of range (1..={pages})")]
    PageOutOfRange { page: usize, pages: usize },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl From<CallError> for CliError {
    fn from(error: CallError) -> Self {
        match error {
            CallError::Unauthenticated => Self::NotSignedIn,
            CallError::Failed(e) => Self::Api(e),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "staffdesk", about = "Employee directory CLI")]
struct Cli {
    #[arg(long, env = "STAFFDESK_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[arg(long, env = "STAFFDESK_SESSION_FILE", default_value = ".staffdesk-session")]
    session_file: PathBuf,

    /// Print machine-readable JSON instead of tables.
    #[arg(long, global = true)]
    json: bool,

    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Ping,
    Login {
        #[arg(long)]
        username: String,
        #[arg(long, env = "STAFFDESK_PASSWORD", hide_env_values = true)]
        password: String,
    },
    Register(RegisterArgs),
    Logout,
    Employees(EmployeesCommand),
    Positions,
}

#[derive(Args, Debug)]
struct RegisterArgs {
    #[arg(long)]
    fullname: String,
    #[arg(long)]
    username: String,
    #[arg(long, env = "STAFFDESK_PASSWORD", hide_env_values = true)]
    password: String,
    #[arg(long)]
    email: String,
}

#[derive(Args, Debug)]
struct EmployeesCommand {
    #[command(subcommand)]
    command: EmployeesSubcommand,
}

#[derive(Subcommand, Debug)]
enum EmployeesSubcommand {
    List {
        /// Case-insensitive match on name, phone or position.
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    Show {
        id: EmployeeId,
    },
    Create {
        #[arg(long)]
        fullname: String,
        #[arg(long, default_value = "")]
        tel: String,
        #[arg(long)]
        position: PositionId,
    },
    Update {
        id: EmployeeId,
        #[arg(long)]
        fullname: Option<String>,
        #[arg(long)]
        tel: Option<String>,
        #[arg(long)]
        position: Option<PositionId>,
    },
    Delete {
        id: EmployeeId,
        /// Skip the confirmation prompt.
        #[arg(long, short)]
        yes: bool,
    },
}

type CliGateway = Gateway<ReqwestTransport, FileTokenStore>;

struct CliContext {
    gateway: CliGateway,
    json: bool,
}

impl CliContext {
    fn report(&self, message: &str) -> Result<(), CliError> {
        if self.json {
            print_json(&serde_json::json!({ "message": message }))
        } else {
            println!("{message}");
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let transport = ReqwestTransport::new(&cli.base_url)?;
    let ctx = CliContext {
        gateway: Gateway::new(transport, FileTokenStore::new(cli.session_file)),
        json: cli.json,
    };

    match cli.command {
        Command::Ping => run_ping(&ctx).await,
        Command::Login { username, password } => run_login(&ctx, username, password).await,
        Command::Register(args) => run_register(&ctx, args).await,
        Command::Logout => {
            ctx.gateway.logout()?;
            ctx.report("Logged out")
        }
        Command::Employees(employees) => run_employees(&ctx, employees).await,
        Command::Positions => run_positions(&ctx).await,
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(io::stderr)
        .init();
}

async fn run_ping(ctx: &CliContext) -> Result<(), CliError> {
    let transport = ctx.gateway.transport();
    let url = format!("{}/healthz", transport.base_url());
    let response = transport.http().get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::Unhealthy(status.as_u16()));
    }
    ctx.report("ok")
}

async fn run_login(ctx: &CliContext, username: String, password: String) -> Result<(), CliError> {
    let credentials = LoginForm { username, password }.validate()?;
    ctx.gateway.login(&credentials).await?;
    ctx.report("Login successful!")
}

async fn run_register(ctx: &CliContext, args: RegisterArgs) -> Result<(), CliError> {
    let form = RegisterForm {
        fullname: args.fullname,
        username: args.username,
        password: args.password,
        email: args.email,
    };
    let account = form.validate()?;
    ctx.gateway.register(&account).await?;
    ctx.report("User registered successfully!")
}

async fn run_positions(ctx: &CliContext) -> Result<(), CliError> {
    let positions = ctx.gateway.positions().await?;
    if ctx.json {
        return print_json(&positions);
    }
    print!("{}", output::position_table(&positions));
    Ok(())
}

async fn run_employees(ctx: &CliContext, employees: EmployeesCommand) -> Result<(), CliError> {
    match employees.command {
        EmployeesSubcommand::List { search, page } => {
            let items = ctx.gateway.employees().await?;
            let mut listing = Listing::new(items);
            listing.set_filter(search);
            if page != listing.page() && !listing.go_to(page) {
                return Err(CliError::PageOutOfRange { page, pages: listing.total_pages().max(1) });
            }
            if ctx.json {
                return print_json(&listing.visible());
            }
            print!("{}", output::employee_table(&listing));
            Ok(())
        }
        EmployeesSubcommand::Show { id } => {
            let employee = ctx.gateway.employee(id).await?;
            if ctx.json {
                return print_json(&employee);
            }
            print!("{}", output::employee_detail(&employee));
            Ok(())
        }
        EmployeesSubcommand::Create { fullname, tel, position } => {
            let form = EmployeeForm { fullname, tel_no: tel, position_id: Some(position) };
            ctx.gateway.create_employee(&form.validate()?).await?;
            ctx.report("Employee created successfully!")
        }
        EmployeesSubcommand::Update { id, fullname, tel, position } => {
            let current = ctx.gateway.employee(id).await?;
            let mut form = EmployeeForm::from_employee(&current);
            if let Some(fullname) = fullname {
                form.fullname = fullname;
            }
            if let Some(tel) = tel {
                form.tel_no = tel;
            }
            if position.is_some() {
                form.position_id = position;
            }
            ctx.gateway.update_employee(id, &form.validate()?).await?;
            ctx.report("Employee updated successfully!")
        }
        EmployeesSubcommand::Delete { id, yes } => run_delete(ctx, id, yes).await,
    }
}

async fn run_delete(ctx: &CliContext, id: EmployeeId, yes: bool) -> Result<(), CliError> {
    let mut flow = DeleteFlow::default();
    flow.request(id);

    let prompt = format!("Delete employee {id}?");
    if !yes && !output::confirm(&mut io::stdin().lock(), &mut io::stdout(), &prompt)? {
        flow.cancel();
        return ctx.report("Cancelled");
    }
    let Some(target) = flow.target() else {
        return Ok(());
    };

    let report = ctx.gateway.delete_and_reload(target).await;
    let Some(outcome) = report.outcome() else {
        flow.cancel();
        return Err(CliError::NotSignedIn);
    };
    flow.settle(outcome);

    match report {
        DeleteReport::Reloaded(items) => {
            tracing::info!(remaining = items.len(), "refetched after delete");
            ctx.report(outcome.message())
        }
        DeleteReport::ReloadFailed(e) => {
            tracing::warn!(error = %e, "refetch after delete failed");
            ctx.report(outcome.message())
        }
        DeleteReport::Failed(e) => {
            eprintln!("{}", outcome.message());
            Err(e.into())
        }
        DeleteReport::SignedOut => Err(CliError::NotSignedIn),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
