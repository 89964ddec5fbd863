use clap::{Parser, Subcommand};
use uuid::Uuid;

use gatecheck_client::{AuthorizationRequest, AuthzClient, AuthzConfig};

/// Ability checks against the gatecheck authorization service.
#[derive(Debug, Parser)]
#[command(name = "gatecheck", version, about)]
struct Cli {
    /// Base URL of the authorization service (e.g. http://authz.internal.dev/v1).
    #[arg(long, env = "GATECHECK_AUTHZ_URL")]
    base_url: String,

    /// Request timeout in seconds.
    #[arg(long, env = "GATECHECK_AUTHZ_TIMEOUT", default_value_t = 30)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check whether an identity holds the named abilities.
    Check {
        /// Directory identity (Active Directory GUID).
        id: Uuid,

        /// Ability names to check.
        #[arg(required = true)]
        abilities: Vec<String>,
    },

    /// Run the built-in demonstration scenarios against the service.
    Demo {
        /// An identity known to the service.
        id: Uuid,

        /// An ability the identity is known to hold.
        ability: String,
    },
}

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let cli = Cli::parse();
    let config = AuthzConfig::default()
        .with_base_url(&cli.base_url)
        .with_timeout_secs(cli.timeout_secs);

    let code = match cli.command {
        Command::Check { id, abilities } => check(config, id, abilities).await,
        Command::Demo { id, ability } => demo(config, id, &ability).await,
    };
    std::process::exit(code);
}

async fn check(config: AuthzConfig, id: Uuid, abilities: Vec<String>) -> i32 {
    let client = match AuthzClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("error: {e}");
            return e.exit_code();
        }
    };

    match client.is_authorized(id, abilities.iter().cloned()).await {
        Ok(true) => {
            println!("granted: {} holds {:?}", id, abilities);
            0
        }
        Ok(false) => {
            println!("denied: {} does not hold {:?}", id, abilities);
            1
        }
        Err(e) => {
            eprintln!("error: {e}");
            e.exit_code()
        }
    }
}

/// The scenarios every deployment is smoke-tested with: a valid check, a
/// bogus ability, the two locally-denied invalid requests, and the
/// trailing-slash base URL variant.
async fn demo(config: AuthzConfig, id: Uuid, ability: &str) -> i32 {
    let slash_config = config
        .clone()
        .with_base_url(format!("{}/", config.base_url.trim_end_matches('/')));

    let client = match AuthzClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("error: {e}");
            return e.exit_code();
        }
    };
    let slash_client = match AuthzClient::new(slash_config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("error: {e}");
            return e.exit_code();
        }
    };

    println!("check endpoint: {}", client.endpoint());

    let scenarios: [(&str, AuthorizationRequest); 4] = [
        (
            "valid identity and ability (expect granted)",
            AuthorizationRequest::single(id, ability),
        ),
        (
            "bogus ability (expect denied)",
            AuthorizationRequest::single(id, "bogus"),
        ),
        (
            "empty ability list (expect denied, no request sent)",
            AuthorizationRequest::new(id, Vec::<String>::new()),
        ),
        (
            "nil identity (expect denied, no request sent)",
            AuthorizationRequest::single(Uuid::nil(), ability),
        ),
    ];

    for (label, request) in &scenarios {
        match client.check(request).await {
            Ok(granted) => println!("{label}: {granted}"),
            Err(e) => {
                eprintln!("{label}: error: {e}");
                return e.exit_code();
            }
        }
    }

    match slash_client.is_authorized_for(id, ability).await {
        Ok(granted) => println!("trailing-slash base URL (expect granted): {granted}"),
        Err(e) => {
            eprintln!("trailing-slash base URL: error: {e}");
            return e.exit_code();
        }
    }

    0
}
