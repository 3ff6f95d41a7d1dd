use crate::ai_provider::AiProvider;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "powerball-checker")]
#[command(about = "レシート写真のパワーボール当せん確認ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// AIプロバイダ (claude/codex/gemini)
    #[arg(long, default_value = "claude", global = true)]
    pub ai_provider: AiProvider,
}

#[derive(Subcommand)]
pub enum Commands {
    /// レシートフォルダを当せん番号と照合して結果を表示
    Check {
        /// レシート画像フォルダのパス
        #[arg(required = true)]
        folder: PathBuf,

        /// 抽せんページURL（省略時は設定値）
        #[arg(long)]
        url: Option<String>,

        /// 抽せん結果を手入力する（ページ取得を行わない）
        #[arg(long)]
        manual: bool,

        /// サマリJSONの出力先
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 最新の抽せん結果を取得して表示
    Draw {
        /// 抽せんページURL（省略時は設定値）
        #[arg(long)]
        url: Option<String>,

        /// 抽せん結果を手入力する
        #[arg(long)]
        manual: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 抽せんページURLを設定
        #[arg(long)]
        set_draw_url: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
