//! チケット認識プロンプト
//!
//! レシート1枚からチケット各口を読み取らせる。
//! 出力はJSON配列のみを要求し、パーサー（`parser::extract_json`）と対にする。

/// チケット認識プロンプトを構築する
pub fn build_ticket_prompt(file_name: &str) -> String {
    format!(
        r#"この画像はパワーボール宝くじのレシートです（ファイル名: {file_name}）。
印字されているプレイ行をすべて読み取ってください。

各行の構成:
- 行ラベル（A, B, C など1文字）
- 本数字5個（1〜69）
- パワーボール番号1個（1〜26、"PB" や赤枠で区別されている）

出力形式（JSON配列のみ出力、説明文は不要）:
[
  {{"lineId": "A", "mainNumbers": [9, 29, 38, 40, 52], "powerball": 23}}
]

注意:
- 印字の順番どおりに出力すること
- QRコードや金額、日付は無視すること
- 読み取れない行があってもエラーにせず、読み取れた行だけ出力すること
- プレイ行が1行も読み取れない場合は [] を出力すること"#
    )
}
