//! Paypage CLI - edit and inspect a payment-page configuration
//!
//! # Main Commands
//!
//! ```bash
//! paypage show                               # Print the stored configuration
//! paypage set --recipient vitalik.eth        # Edit fields and save
//! paypage token USDC                         # Toggle an accepted token
//! paypage chain base                         # Toggle an accepted chain
//! paypage webhook add                        # Manage webhook slots
//! paypage url                                # Print redirect + payment URLs
//! ```
//!
//! # Debug Commands
//!
//! ```bash
//! paypage derive-slug "Vitalik.ETH"          # Show the slug derived from input
//! paypage validate config.json               # Validate a blob against the schema
//! paypage export-record                      # Print the me.yodl text record
//! paypage catalog                            # List tokens, chains, currencies
//! ```

use clap::{Parser, Subcommand};
use paypage::logging::StderrLogger;
use paypage::{
    check_submit, derive_slug, page_url, payment_link, validate_configuration, ConfigEditor,
    ConfigStore, Configuration, Currency, FileStorage, Settings, SUPPORTED_CHAINS,
    SUPPORTED_TOKENS,
};
use serde_json::Value;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

type CmdResult = Result<(), Box<dyn Error>>;

#[derive(Parser)]
#[command(name = "paypage")]
#[command(about = "Configure crypto-payment landing pages", long_about = None)]
struct Cli {
    /// Storage directory (overrides PAYPAGE_STORAGE_DIR)
    #[arg(long, global = true)]
    storage_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the stored configuration as JSON
    Show,

    /// Edit configuration fields and save
    Set(SetArgs),

    /// Toggle an accepted token (e.g. USDC)
    Token {
        /// Token symbol
        symbol: String,
    },

    /// Toggle an accepted chain (e.g. base)
    Chain {
        /// Chain id
        id: String,
    },

    /// Manage webhook URLs (at most 5)
    Webhook {
        #[command(subcommand)]
        action: WebhookAction,
    },

    /// Print the page, redirect and payment URLs
    Url {
        /// Slug to use instead of the stored one
        #[arg(long)]
        slug: Option<String>,
    },

    /// Show the slug derived from an ENS name or address
    DeriveSlug {
        /// ENS name or address
        input: String,
    },

    /// Validate a configuration JSON file
    Validate {
        /// Input JSON file
        input: PathBuf,
    },

    /// Print the payment options as a me.yodl text record
    ExportRecord,

    /// List supported tokens, chains and currencies
    Catalog,
}

#[derive(clap::Args, Default)]
struct SetArgs {
    /// ENS name or address receiving payments
    #[arg(long)]
    recipient: Option<String>,

    /// URL slug (empty string re-enables auto-derivation)
    #[arg(long)]
    slug: Option<String>,

    /// Payment page headline
    #[arg(long)]
    title: Option<String>,

    /// Payment page blurb
    #[arg(long)]
    description: Option<String>,

    /// Pay button label
    #[arg(long)]
    button_text: Option<String>,

    /// Pay button background color
    #[arg(long)]
    button_background: Option<String>,

    /// Pay button text color
    #[arg(long)]
    button_text_color: Option<String>,

    /// Pay button border radius in px
    #[arg(long)]
    border_radius: Option<u32>,

    /// Pay button font size in px
    #[arg(long)]
    font_size: Option<u32>,

    /// Pay button padding (CSS)
    #[arg(long)]
    padding: Option<String>,

    /// Thank-you page message
    #[arg(long)]
    thank_you_message: Option<String>,

    /// Thank-you page background color
    #[arg(long)]
    thank_you_background: Option<String>,

    /// Thank-you page text color
    #[arg(long)]
    thank_you_text_color: Option<String>,

    /// Show confetti on the thank-you page
    #[arg(long)]
    confetti: Option<bool>,

    /// Display currency (USD, CHF, EUR, GBP)
    #[arg(long)]
    currency: Option<Currency>,

    /// Fixed amount (empty string clears it)
    #[arg(long)]
    amount: Option<String>,

    /// Transaction memo
    #[arg(long)]
    memo: Option<String>,

    /// Social preview title
    #[arg(long)]
    meta_title: Option<String>,

    /// Social preview description
    #[arg(long)]
    meta_description: Option<String>,

    /// Social preview image URL
    #[arg(long)]
    meta_image: Option<String>,
}

#[derive(Subcommand)]
enum WebhookAction {
    /// Append an empty webhook slot
    Add {
        /// Fill the new slot with this URL
        url: Option<String>,
    },

    /// Remove a webhook slot (the last one is cleared instead)
    Remove {
        /// Slot index (0-based)
        index: usize,
    },

    /// Replace the URL in a slot
    Set {
        /// Slot index (0-based)
        index: usize,
        /// Webhook URL
        url: String,
    },

    /// List webhook slots
    List,
}

fn main() {
    let mut settings = Settings::from_env();
    StderrLogger::init(settings.log_level);

    let cli = Cli::parse();
    if let Some(dir) = cli.storage_dir {
        settings.storage_dir = dir;
    }

    let result = match cli.command {
        Commands::Show => cmd_show(&settings),
        Commands::Set(args) => cmd_set(&settings, args),
        Commands::Token { symbol } => {
            edit_and_submit(&settings, |e| Ok(e.toggle_token(&symbol.to_uppercase())?))
        }
        Commands::Chain { id } => {
            edit_and_submit(&settings, |e| Ok(e.toggle_chain(&id.to_lowercase())?))
        }
        Commands::Webhook { action } => cmd_webhook(&settings, action),
        Commands::Url { slug } => cmd_url(&settings, slug.as_deref()),
        Commands::DeriveSlug { input } => cmd_derive_slug(&input),
        Commands::Validate { input } => cmd_validate(&input),
        Commands::ExportRecord => cmd_export_record(&settings),
        Commands::Catalog => cmd_catalog(),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn open_store(settings: &Settings) -> ConfigStore<FileStorage> {
    ConfigStore::new(FileStorage::with_dir(&settings.storage_dir))
}

/// Load, apply `edit`, validate and save. Prints the stored result.
fn edit_and_submit(
    settings: &Settings,
    edit: impl FnOnce(&mut ConfigEditor) -> CmdResult,
) -> CmdResult {
    let mut store = open_store(settings);
    let mut editor = ConfigEditor::new(store.load());

    edit(&mut editor)?;

    let saved = store.submit(&editor)?;
    eprintln!("✅ Configuration saved: {} → /{}", saved.recipient, saved.slug);
    print_json(&saved)
}

fn cmd_show(settings: &Settings) -> CmdResult {
    let store = open_store(settings);
    let config = match store.load_saved() {
        Some(config) => config,
        None => {
            eprintln!("📋 No configuration saved yet, showing defaults.");
            eprintln!("   Use 'paypage set --recipient <name>' to create one.");
            Configuration::default()
        }
    };
    print_json(&config)
}

fn cmd_set(settings: &Settings, args: SetArgs) -> CmdResult {
    edit_and_submit(settings, |e| {
        // Slug first, so a recipient given alongside an explicit "" slug re-derives
        if let Some(slug) = args.slug {
            e.set_slug(&slug);
        }
        if let Some(recipient) = args.recipient {
            e.set_recipient(recipient);
        }
        if let Some(title) = args.title {
            e.set_title(title);
        }
        if let Some(description) = args.description {
            e.set_description(description);
        }

        if let Some(text) = args.button_text {
            e.set_button_text(text);
        }
        if let Some(color) = args.button_background {
            e.set_button_background(color);
        }
        if let Some(color) = args.button_text_color {
            e.set_button_text_color(color);
        }
        if let Some(px) = args.border_radius {
            e.set_border_radius(px);
        }
        if let Some(px) = args.font_size {
            e.set_font_size(px);
        }
        if let Some(padding) = args.padding {
            e.set_padding(padding);
        }

        if let Some(message) = args.thank_you_message {
            e.set_thank_you_message(message);
        }
        if let Some(color) = args.thank_you_background {
            e.set_thank_you_background(color);
        }
        if let Some(color) = args.thank_you_text_color {
            e.set_thank_you_text_color(color);
        }
        if let Some(enabled) = args.confetti {
            e.set_confetti(enabled);
        }

        if let Some(currency) = args.currency {
            e.set_currency(currency);
        }
        if let Some(amount) = args.amount {
            e.set_amount(amount);
        }
        if let Some(memo) = args.memo {
            e.set_memo(memo);
        }

        if let Some(title) = args.meta_title {
            e.set_meta_title(title);
        }
        if let Some(description) = args.meta_description {
            e.set_meta_description(description);
        }
        if let Some(image) = args.meta_image {
            e.set_meta_image(image);
        }
        Ok(())
    })
}

fn cmd_webhook(settings: &Settings, action: WebhookAction) -> CmdResult {
    match action {
        WebhookAction::List => {
            let config = open_store(settings).load();
            let options = config.payment_options.unwrap_or_default();
            for (i, url) in options.webhooks.as_slice().iter().enumerate() {
                let shown = if url.is_empty() { "(empty)" } else { url.as_str() };
                println!("  [{}] {}", i, shown);
            }
            Ok(())
        }
        WebhookAction::Add { url } => edit_and_submit(settings, |e| {
            if !e.add_webhook() {
                eprintln!("⚠️  Already at 5 webhooks, nothing added.");
                return Ok(());
            }
            if let Some(url) = url {
                let last = e
                    .config()
                    .payment_options
                    .as_ref()
                    .map(|o| o.webhooks.len() - 1)
                    .unwrap_or(0);
                e.set_webhook(last, url)?;
            }
            Ok(())
        }),
        WebhookAction::Remove { index } => {
            edit_and_submit(settings, |e| Ok(e.remove_webhook(index)?))
        }
        WebhookAction::Set { index, url } => {
            edit_and_submit(settings, |e| Ok(e.set_webhook(index, url)?))
        }
    }
}

fn cmd_url(settings: &Settings, slug: Option<&str>) -> CmdResult {
    let config = open_store(settings).load();

    let link = payment_link(&config, &settings.provider_url, &settings.site_url, slug)?;
    let page = page_url(&settings.site_url, slug.unwrap_or(&config.slug))?;

    eprintln!("🔗 Links for {}", config.recipient);
    println!("page:     {}", page);
    println!("redirect: {}", link.redirect);
    println!("payment:  {}", link.payment);
    Ok(())
}

fn cmd_derive_slug(input: &str) -> CmdResult {
    println!("{}", derive_slug(input));
    Ok(())
}

fn cmd_validate(input: &Path) -> CmdResult {
    eprintln!("✔️  Validating: {}", input.display());

    let content = fs::read_to_string(input)?;
    let value: Value = serde_json::from_str(&content)?;

    if let Err(errors) = validate_configuration(&value) {
        eprintln!("\n❌ Schema errors:");
        for err in errors.iter().take(10) {
            eprintln!("   - {}", err);
        }
        std::process::exit(1);
    }

    let config: Configuration = serde_json::from_value(value)?;
    match check_submit(&config) {
        Ok(()) => eprintln!("✅ Valid configuration for {}", config.recipient),
        Err(e) => {
            eprintln!("⚠️  Schema OK but not submittable: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn cmd_export_record(settings: &Settings) -> CmdResult {
    let config = open_store(settings).load();
    let options = config.payment_options.unwrap_or_default();

    eprintln!("📝 Text record 'me.yodl':");
    println!("{}", serde_json::to_string(&options.to_text_record())?);
    Ok(())
}

fn cmd_catalog() -> CmdResult {
    println!("Tokens:");
    for token in SUPPORTED_TOKENS {
        println!("  {}", token);
    }
    println!("\nChains:");
    for chain in SUPPORTED_CHAINS {
        println!("  {:<6} {}", chain.id, chain.name);
    }
    println!("\nCurrencies:");
    for currency in Currency::ALL {
        println!("  {}", currency);
    }
    Ok(())
}

fn print_json(config: &Configuration) -> CmdResult {
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
