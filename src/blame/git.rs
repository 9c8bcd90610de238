//! gitコマンドの起動を担当するモジュール
//!
//! このモジュールは、システムにインストールされた`git`コマンドを
//! サブプロセスとして起動し、終了後に両ストリームの全内容を回収する
//! ための機能を提供します。`BlameRunner`トレイトの実装を差し替える
//! ことで、テストでは実際のgitを起動せずに上位の集計ロジックを
//! 検証できます。

use super::error::BlameError;
use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

/// blameコマンドの実行結果を保持する構造体
///
/// # フィールド
///
/// - `status`: プロセスの終了コード（シグナルで終了した場合は-1）
/// - `stderr`: 標準エラー出力の全内容
/// - `stdout`: 標準出力の全内容
#[derive(Debug, Clone)]
pub struct BlameOutput {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

/// blameコマンドの起動を抽象化するトレイト
///
/// 実装は、対象ファイルに対するblameを実行し、プロセスの終了を
/// 待ってから終了コードと両ストリームの全内容を返します。
pub trait BlameRunner {
    /// 指定されたファイルに対してblameを実行します
    fn run_blame(&self, file: &Path) -> Result<BlameOutput, BlameError>;
}

/// システムのgitコマンドを起動するランナー
pub struct GitCommandRunner;

impl BlameRunner for GitCommandRunner {
    fn run_blame(&self, file: &Path) -> Result<BlameOutput, BlameError> {
        let output = Command::new("git").args(blame_args(file)).output()?;

        Ok(BlameOutput {
            status: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// blameコマンドに渡す引数リストを構築します
///
/// `-C`は他のファイルからコピー・移動された行の検出、`-w`は空白のみの
/// 変更の無視を有効にします。
fn blame_args(file: &Path) -> Vec<OsString> {
    vec![
        OsString::from("blame"),
        OsString::from("-C"),
        OsString::from("-w"),
        file.as_os_str().to_os_string(),
        OsString::from("--line-porcelain"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blame_args() {
        let args = blame_args(Path::new("FILE.txt"));
        assert_eq!(
            args,
            vec!["blame", "-C", "-w", "FILE.txt", "--line-porcelain"]
        );
    }
}
