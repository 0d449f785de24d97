mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "weave")]
#[command(about = "KDLで書いたクラウドリソース設定を展開・検証する", long_about = None)]
struct Cli {
    /// デバッグログを表示（RUST_LOG が優先）
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// S3ウェブサイト設定を PutBucketWebsite の入力 (JSON) に展開
    Expand {
        /// KDLファイル
        file: PathBuf,
    },
    /// GetBucketWebsite の出力 (JSON) をKDLに変換
    Flatten {
        /// JSONファイル
        file: PathBuf,
        /// 出力に含めるバケット名
        #[arg(short, long)]
        bucket: Option<String>,
        /// 出力に含めるバケット所有者のアカウントID
        #[arg(short, long)]
        owner: Option<String>,
    },
    /// S3ウェブサイト設定を検証
    Validate {
        /// KDLファイル
        file: PathBuf,
    },
    /// リソースIDの組み立て・分解
    Id {
        #[command(subcommand)]
        command: IdCommands,
    },
    /// 設定の表示
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Glueウェイターの一覧
    Waiters,
    /// バージョン情報を表示
    Version,
}

#[derive(Subcommand)]
enum IdCommands {
    /// バケット名と所有者からIDを組み立てる
    Format {
        bucket: String,
        owner: Option<String>,
    },
    /// IDをバケット名と所有者に分解する
    Parse { id: String },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// 有効な設定をYAMLで表示
    Show,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Expand { file } => commands::expand::handle(&file)?,
        Commands::Flatten {
            file,
            bucket,
            owner,
        } => commands::flatten::handle(&file, bucket, owner)?,
        Commands::Validate { file } => commands::validate::handle(&file)?,
        Commands::Id { command } => match command {
            IdCommands::Format { bucket, owner } => {
                commands::id::format(&bucket, owner.as_deref())?
            }
            IdCommands::Parse { id } => commands::id::parse(&id)?,
        },
        Commands::Config { command } => match command {
            ConfigCommands::Show => commands::config::show()?,
        },
        Commands::Waiters => {
            let settings = cloudweave_config::Settings::load()?;
            commands::waiters::list(&settings)?;
        }
        Commands::Version => {
            println!("cloudweave {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
