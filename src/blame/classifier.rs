//! blame出力の1行からコミッター情報を抽出するモジュール
//!
//! `git blame --line-porcelain`は、ソース1行ごとに`committer-mail`を含む
//! 複数のメタデータ行を出力します。このモジュールは、その中から
//! コミッターのメールアドレスを取り出す純粋関数を提供します。

use lazy_static::lazy_static;
use regex::Regex;

/// コミッター情報を運ぶ行の接頭辞
const COMMITTER_MAIL_PREFIX: &str = "committer-mail ";

lazy_static! {
    /// ペアコミット規約（`git+alice+bob@host`形式）のパターン
    static ref PAIR_PATTERN: Regex = Regex::new(r"^git(?:hub)?\+(.+)(@.+)$").unwrap();
}

/// blame出力の1行からコミッターのメールアドレスを抽出します
///
/// # 引数
///
/// - `line`: `git blame --line-porcelain`出力の1行
///
/// # 戻り値
///
/// 行が`committer-mail `で始まらない場合は`None`を返します。
/// アドレスのローカル部が`git+`または`github+`で始まる場合はペアコミットと
/// 解釈し、ユーザー名ごとに展開した複数のアドレスを返します。
/// それ以外の場合は、角括弧を取り除いたアドレスを1件だけ返します。
pub fn committer_emails(line: &str) -> Option<Vec<String>> {
    let raw = line.strip_prefix(COMMITTER_MAIL_PREFIX)?;
    let email = raw.trim_start_matches('<').trim_end_matches('>');

    if let Some(captures) = PAIR_PATTERN.captures(email) {
        let usernames = &captures[1];
        let at_hostname = &captures[2];

        Some(
            usernames
                .split('+')
                .map(|username| format!("{}{}", username, at_hostname))
                .collect(),
        )
    } else {
        Some(vec![email.to_string()])
    }
}
