//! ファイル単位のコード所有権分析ツール
//!
//! このクレートは、`git blame`の出力をコミッター単位で集計し、
//! 「このファイルの各行を誰がどれだけ書いたのか」を算出するための
//! 機能を提供します。
//!
//! # 主な機能
//!
//! - `git blame --line-porcelain`出力の解析
//! - コミッターごとの行数と割合の集計
//! - ペアコミット規約（`git+alice+bob@example.com`形式）の展開
//! - テスト用にgitコマンドの起動を差し替え可能
//!
//! # 使用例
//!
//! ```no_run
//! use git_owner::BlameAnalyzer;
//!
//! let analyzer = BlameAnalyzer::new();
//! let stats = analyzer.analyze("src/main.rs").unwrap();
//!
//! for committer in &stats.committers {
//!     println!("{}: {} lines", committer.email, committer.lines);
//! }
//! ```

pub mod blame;
pub use blame::BlameAnalyzer;
