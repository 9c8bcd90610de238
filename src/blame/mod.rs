//! blame集計の中核となるモジュール
//!
//! このモジュールは、1ファイルの所有権分析に必要な主要なコンポーネントを提供します。
//! 分析プロセスは以下の流れで行われます：
//!
//! 1. `git blame -C -w <file> --line-porcelain`の実行
//! 2. 出力の各行からのコミッターメールアドレスの抽出
//! 3. コミッターごとの行数の集計
//! 4. 割合の算出
//!
//! # 主要なコンポーネント
//!
//! - `BlameAnalyzer`: 分析プロセス全体を制御する主要なクラス
//! - `BlameStats`: 1ファイル分の分析結果を保持する構造体
//! - `BlameRunner`: blameコマンドの起動を差し替え可能にするトレイト

mod classifier;
mod error;
mod git;
mod stats;

pub use error::BlameError;
pub use git::{BlameOutput, BlameRunner, GitCommandRunner};
pub use stats::{BlameStats, CommitterStats};

use classifier::committer_emails;
use indexmap::IndexMap;
use std::path::Path;

/// blame集計を実行するメインの構造体
///
/// この構造体は、blameコマンドの起動と出力の集計を制御します。
/// ランナーを差し替えることで、テストでは実際のgitを起動せずに
/// 集計ロジックを検証できます。
///
/// # フィールド
///
/// - `runner`: blameコマンドの起動を担当するランナー
pub struct BlameAnalyzer<R: BlameRunner = GitCommandRunner> {
    runner: R,
}

impl BlameAnalyzer<GitCommandRunner> {
    /// システムのgitコマンドを使用するアナライザを作成します
    pub fn new() -> Self {
        Self {
            runner: GitCommandRunner,
        }
    }
}

impl Default for BlameAnalyzer<GitCommandRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BlameRunner> BlameAnalyzer<R> {
    /// 任意のランナーを使用するアナライザを作成します
    ///
    /// # 引数
    ///
    /// - `runner`: blameコマンドの起動を担当する`BlameRunner`実装
    pub fn with_runner(runner: R) -> Self {
        Self { runner }
    }

    /// 指定されたファイルの分析を実行し、コミッター統計を計算します
    ///
    /// # 引数
    ///
    /// - `file`: 分析対象のファイルパス（リポジトリからの相対パスまたは絶対パス）
    ///
    /// # 戻り値
    ///
    /// コミッターごとの行数と割合を保持する`BlameStats`を返します。
    ///
    /// # エラー
    ///
    /// 以下の場合にエラーを返します：
    /// - gitコマンドの起動に失敗
    /// - git blameが非ゼロの終了コードで終了（標準エラー出力の内容を
    ///   そのままメッセージとして返す）
    pub fn analyze(&self, file: impl AsRef<Path>) -> Result<BlameStats, BlameError> {
        let output = self.runner.run_blame(file.as_ref())?;

        // 失敗時は集計を行わず、標準エラー出力をそのまま報告する
        if output.status != 0 {
            return Err(BlameError::BlameFailed(output.stderr));
        }

        Ok(aggregate(&output.stdout))
    }
}

/// blame出力全体を集計して`BlameStats`を構築します
///
/// `committer-mail`を含まない行は何も寄与しません。複数のコミッターに
/// 展開された行は、各コミッターの行数を1ずつ増やしますが、
/// 総行数には1行としてのみ数えられます。
fn aggregate(stdout: &str) -> BlameStats {
    let mut by_email: IndexMap<String, CommitterStats> = IndexMap::new();
    let mut total_lines: u32 = 0;
    let mut paired_lines: u32 = 0;

    for line in stdout.lines() {
        if let Some(emails) = committer_emails(line) {
            total_lines += 1;
            if emails.len() > 1 {
                paired_lines += 1;
            }

            for email in emails {
                by_email
                    .entry(email.clone())
                    .or_insert(CommitterStats {
                        email,
                        lines: 0,
                        percentage: 0.0,
                    })
                    .lines += 1;
            }
        }
    }

    let mut committers: Vec<CommitterStats> = by_email.into_values().collect();

    // 総行数が0の場合はコミッターも存在しないため、割合の計算は不要
    if total_lines > 0 {
        for committer in &mut committers {
            committer.percentage = committer.lines as f64 / total_lines as f64;
        }
    }

    BlameStats {
        committers,
        total_lines,
        paired_lines,
    }
}
