//! 就活締切アグリゲーター - メインエントリポイント

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use shukatsu_deadlines::config::Config;
use shukatsu_deadlines::xapi::XApiClient;
use shukatsu_deadlines::{
    DeadlineParser, ExtractedDeadline, RawMessage, normalize_name, normalize_type,
};
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "SNS投稿から就活の締切情報を抽出")]
struct Cli {
    /// 年の指定がない日付に使う年（既定は現在の年）
    #[arg(long, global = true)]
    year: Option<i32>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// JSON Lines ({"text": ..., "source": ...}) から締切を抽出
    Extract {
        /// 入力ファイル（省略時は標準入力）
        file: Option<PathBuf>,
    },
    /// 対象アカウントの投稿を取得して締切を抽出
    Scrape,
    /// 直近の投稿をキーワード検索して締切を抽出
    Search { query: String },
    /// 企業名を正規化
    NormalizeName { name: String },
    /// 締切種別の文字列を正規化
    NormalizeType { value: String },
}

/// スクレイピング結果の集計
#[derive(Debug, Default)]
struct ScrapeSummary {
    processed: usize,
    added: usize,
    errors: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // ロギング初期化（出力は標準エラー）
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // 環境変数の読み込み
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let parser = match cli.year {
        Some(year) => DeadlineParser::with_year(year),
        None => DeadlineParser::new(),
    };

    match cli.command {
        Command::Extract { file } => {
            let messages = read_messages(file)?;
            let deadlines = parser.parse_all(&messages);
            tracing::info!("{} 件中 {} 件を抽出", messages.len(), deadlines.len());
            print_json(&deadlines)?;
        }
        Command::Scrape => scrape(&parser).await?,
        Command::Search { query } => search(&parser, &query).await?,
        Command::NormalizeName { name } => println!("{}", normalize_name(&name)),
        Command::NormalizeType { value } => {
            let kind = normalize_type(&value);
            println!("{}\t{}", kind, kind.label());
        }
    }

    Ok(())
}

/// JSON Lines を読み込む。壊れた行は警告してスキップ
fn read_messages(file: Option<PathBuf>) -> Result<Vec<RawMessage>> {
    let reader: Box<dyn BufRead> = match file {
        Some(path) => {
            let f = std::fs::File::open(&path)
                .with_context(|| format!("入力ファイルを開けません: {:?}", path))?;
            Box::new(BufReader::new(f))
        }
        None => Box::new(BufReader::new(std::io::stdin())),
    };

    let mut messages = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line.context("入力の読み込みに失敗")?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<RawMessage>(&line) {
            Ok(message) => messages.push(message),
            Err(e) => tracing::warn!("{} 行目をスキップ: {}", i + 1, e),
        }
    }

    Ok(messages)
}

/// 設定を読み込んでクライアントを作成
fn connect() -> Result<(Config, XApiClient)> {
    let config = Config::from_env().context("設定の読み込みに失敗")?;
    let token = config
        .bearer_token
        .clone()
        .context("X_BEARER_TOKEN が設定されていません")?;
    let client = XApiClient::new(token)?;
    Ok((config, client))
}

/// X API から収集して締切を抽出
async fn scrape(parser: &DeadlineParser) -> Result<()> {
    let started = Instant::now();
    let (config, client) = connect()?;

    let mut summary = ScrapeSummary::default();
    let mut deadlines: Vec<ExtractedDeadline> = Vec::new();

    for (account, result) in client
        .timelines(&config.target_accounts, config.max_results)
        .await
    {
        let tweets = match result {
            Ok(tweets) => tweets,
            Err(e) => {
                tracing::warn!("@{} の取得に失敗: {}", account, e);
                summary.errors.push(format!("@{}: {}", account, e));
                continue;
            }
        };

        tracing::info!("@{} の投稿 {} 件を処理中", account, tweets.len());
        let source = format!("@{}", account);
        let messages: Vec<RawMessage> = tweets
            .into_iter()
            .map(|tweet| tweet.into_message(source.clone()))
            .collect();

        let found = parser.parse_all(&messages);
        summary.processed += messages.len();
        summary.added += found.len();
        deadlines.extend(found);
    }

    print_json(&deadlines)?;
    tracing::info!(
        elapsed = ?started.elapsed(),
        processed = summary.processed,
        added = summary.added,
        errors = ?summary.errors,
        "スクレイピング完了"
    );
    Ok(())
}

/// 検索結果から締切を抽出
async fn search(parser: &DeadlineParser, query: &str) -> Result<()> {
    let (config, client) = connect()?;
    let tweets = client
        .search_recent(query, config.max_results)
        .await
        .with_context(|| format!("検索に失敗: {}", query))?;

    let messages: Vec<RawMessage> = tweets
        .into_iter()
        .map(|tweet| tweet.into_message("search"))
        .collect();
    let deadlines = parser.parse_all(&messages);
    tracing::info!("{} 件中 {} 件を抽出", messages.len(), deadlines.len());
    print_json(&deadlines)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("JSONの生成に失敗")?;
    println!("{}", json);
    Ok(())
}
