use clap::ValueEnum;

/// 認識に使うAI CLI
///
/// コアはプロバイダを引数として受け取るだけで、内部で暗黙に構築しない。
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum AiProvider {
    #[default]
    Claude,
    Codex,
    Gemini,
}

impl AiProvider {
    pub fn command_name(&self) -> &'static str {
        match self {
            AiProvider::Claude => "claude",
            AiProvider::Codex => "codex",
            AiProvider::Gemini => "gemini",
        }
    }

    /// プロンプト実行用の引数列を組み立てる
    pub fn build_args<'a>(&self, prompt: &'a str) -> Vec<&'a str> {
        match self {
            AiProvider::Claude => vec!["-p", prompt, "--output-format", "text"],
            AiProvider::Codex => vec!["exec", prompt],
            AiProvider::Gemini => vec!["-p", prompt],
        }
    }
}

impl std::fmt::Display for AiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.command_name())
    }
}
