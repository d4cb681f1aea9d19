//! wallet_ledger - demo driver
//!
//! Registers the seed users, then runs a scripted deposit, withdrawal and
//! transfer against two of them. Stops at the first error.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wallet_ledger::seed::{self, SeedUser};
use wallet_ledger::{AppResult, Balance, Config, User, UserStore};

const DEPOSITOR_EMAIL: &str = "Chelsy@microsoft.com";
const RECIPIENT_EMAIL: &str = "Joey@amazon.com";

/// Initialize tracing/logging; JSON lines in production
fn init_tracing(json: bool) {
    let registry = tracing_subscriber::registry().with(
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "wallet_ledger=debug".into()),
    );

    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn seed_users(config: &Config) -> AppResult<Vec<SeedUser>> {
    match &config.seed_file {
        Some(path) => {
            tracing::info!("Loading seed users from {}", path.display());
            seed::load_users(path)
        }
        None => Ok(seed::default_users()),
    }
}

fn print_balance(user: &User) {
    println!(
        "The wallet balance for user {} is: {:.2}",
        user.name(),
        user.check_wallet_balance()
    );
}

fn run(config: &Config, store: &UserStore) -> AppResult<()> {
    println!("** Populate store with users **");
    let users = seed::populate(store, &seed_users(config)?)?;
    for user in &users {
        println!(
            "Registered user {} <{}> with wallet balance {:.2}",
            user.name(),
            user.email(),
            user.check_wallet_balance()
        );
    }

    println!("\n** Deposit money into wallet **");
    let depositor = store.get_user(DEPOSITOR_EMAIL)?;
    print_balance(&depositor);
    println!("Depositing {:.2}", config.deposit_amount);
    depositor.deposit_into_wallet(config.deposit_amount)?;
    print_balance(&depositor);

    println!("\n** Withdraw money from wallet **");
    print_balance(&depositor);
    println!("Withdrawing {:.2}", config.withdraw_amount);
    depositor.withdraw_from_wallet(config.withdraw_amount)?;
    print_balance(&depositor);

    println!("\n** Send money to another user **");
    let recipient = store.get_user(RECIPIENT_EMAIL)?;
    print_balance(&depositor);
    print_balance(&recipient);
    println!(
        "Sending {:.2} from {} to {}",
        config.send_amount,
        depositor.name(),
        recipient.name()
    );
    depositor.send_to(&recipient, config.send_amount)?;
    print_balance(&depositor);
    print_balance(&recipient);

    depositor.observe_wallet(Some(&mut |wallet_id, balance: &Balance| {
        tracing::info!(%wallet_id, %balance, "Final depositor balance");
    }));

    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    init_tracing(config.is_production());

    tracing::info!(environment = %config.environment, "Starting wallet_ledger demo");

    let store = UserStore::new();

    if let Err(e) = run(&config, &store) {
        tracing::error!("Demo halted: {}", e);
        return Err(e.into());
    }

    tracing::info!(users = store.len(), "Demo finished");
    Ok(())
}
