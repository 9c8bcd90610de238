//! 集計結果の表現を担当するモジュール
//!
//! このモジュールは、blame集計の結果を表現するためのデータ構造と、
//! 分析結果のシリアライズに関する機能を提供します。

use serde::{Deserialize, Serialize};

/// コミッターごとの集計結果を保持する構造体
///
/// # フィールド
///
/// - `email`: コミッターのメールアドレス（ペア規約展開後の正規化済みアドレス）
/// - `lines`: このコミッターに帰属する行数
/// - `percentage`: 総行数に対する割合（0より大きく1以下の比率）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitterStats {
    pub email: String,
    pub lines: u32,
    #[serde(serialize_with = "round_to_3", deserialize_with = "deserialize_f64")]
    pub percentage: f64,
}

/// 1ファイル分の集計結果を保持する構造体
///
/// # フィールド
///
/// - `committers`: コミッターごとの統計（blame出力で最初に現れた順）
/// - `total_lines`: blameが報告したソース行の総数（ペア行も1行として数える）
/// - `paired_lines`: 複数のコミッターに帰属する行数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlameStats {
    pub committers: Vec<CommitterStats>,
    pub total_lines: u32,
    pub paired_lines: u32,
}

/// 浮動小数点数を3桁に丸める補助関数
///
/// # 引数
///
/// - `value`: 丸める浮動小数点数
/// - `serializer`: serdeシリアライザ
fn round_to_3<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_f64((*value * 1000.0).round() / 1000.0)
}

/// f64値をデシリアライズする補助関数
fn deserialize_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    f64::deserialize(deserializer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blame_stats_serialization() {
        let stats = BlameStats {
            committers: vec![CommitterStats {
                email: "dave@example.com".to_string(),
                lines: 2,
                percentage: 2.0 / 3.0,
            }],
            total_lines: 3,
            paired_lines: 0,
        };

        let json = serde_json::to_string(&stats).unwrap();
        let deserialized: BlameStats = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.total_lines, 3);
        assert_eq!(deserialized.paired_lines, 0);
        assert_eq!(deserialized.committers[0].email, "dave@example.com");
        assert_eq!(deserialized.committers[0].lines, 2);

        // 丸められた値の検証
        assert!((deserialized.committers[0].percentage - 0.667).abs() < 0.0001);
    }

    #[test]
    fn test_round_to_3() {
        #[derive(Serialize)]
        struct TestStruct {
            #[serde(serialize_with = "round_to_3")]
            value: f64,
        }

        let test_cases = vec![
            (1.0, 1.0),
            (0.5, 0.5),
            (1.0 / 3.0, 0.333),
            (2.0 / 3.0, 0.667),
            (0.12345, 0.123),
        ];

        for (input, expected) in test_cases {
            let test_struct = TestStruct { value: input };
            let json = serde_json::to_value(test_struct).unwrap();
            assert!((json["value"].as_f64().unwrap() - expected).abs() < 0.0001);
        }
    }
}
